use artwork_store_api::{
    db::{MIGRATIONS_DIR, apply_migrations, connect},
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppError,
    middleware::auth::AuthUser,
    models::Role,
    services::{admin_service, auth_service},
    state::AppState,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};

// Integration flow: register, log in, get locked out after deactivation.
// The login failure message never says which check failed.
#[tokio::test]
async fn register_login_and_deactivation_flow() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };
    if std::env::var("JWT_SECRET").is_err() {
        unsafe { std::env::set_var("JWT_SECRET", "integration-test-secret") };
    }

    let state = setup_state(&database_url).await?;

    let registered = auth_service::register_user(
        &state,
        RegisterRequest {
            email: "carol@example.com".into(),
            password: "sufficiently-long".into(),
            confirm_password: "sufficiently-long".into(),
        },
    )
    .await?
    .data
    .expect("user payload");
    assert_eq!(registered.email, "carol@example.com");
    assert_eq!(registered.role, "User");

    // Weak or mismatched input collects every problem in one response.
    let bad = auth_service::register_user(
        &state,
        RegisterRequest {
            email: "not-an-email".into(),
            password: "short".into(),
            confirm_password: "different".into(),
        },
    )
    .await;
    match bad {
        Err(AppError::Validation(errors)) => assert!(errors.len() >= 2),
        other => panic!("expected validation failure, got {other:?}"),
    }

    let duplicate = auth_service::register_user(
        &state,
        RegisterRequest {
            email: "carol@example.com".into(),
            password: "sufficiently-long".into(),
            confirm_password: "sufficiently-long".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let login = auth_service::login_user(
        &state,
        LoginRequest {
            email: "carol@example.com".into(),
            password: "sufficiently-long".into(),
        },
    )
    .await?
    .data
    .expect("login payload");
    assert!(!login.token.is_empty());

    let wrong = auth_service::login_user(
        &state,
        LoginRequest {
            email: "carol@example.com".into(),
            password: "wrong-password".into(),
        },
    )
    .await;
    let wrong_message = match wrong {
        Err(AppError::Unauthorized(message)) => message,
        other => panic!("expected unauthorized, got {other:?}"),
    };

    // Deactivate the account; the message must match the wrong-password one.
    let admin = create_admin(&state).await?;
    let toggled = admin_service::toggle_user_status(&state, &admin, registered.id)
        .await?
        .data
        .expect("status payload");
    assert!(!toggled.is_active);

    let locked_out = auth_service::login_user(
        &state,
        LoginRequest {
            email: "carol@example.com".into(),
            password: "sufficiently-long".into(),
        },
    )
    .await;
    match locked_out {
        Err(AppError::Unauthorized(message)) => assert_eq!(message, wrong_message),
        other => panic!("expected unauthorized, got {other:?}"),
    }

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = connect(database_url).await?;
    apply_migrations(&orm, MIGRATIONS_DIR).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE reviews, order_items, orders, artworks, genres, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { orm, mailer: None })
}

async fn create_admin(state: &AppState) -> anyhow::Result<AuthUser> {
    let user = artwork_store_api::entity::users::ActiveModel {
        email: Set("admin@example.com".into()),
        password_hash: Set("dummy".into()),
        role: Set(Role::Admin.as_str().into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        user_id: user.id,
        email: user.email,
        role: Role::Admin,
    })
}

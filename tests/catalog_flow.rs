use artwork_store_api::{
    db::{MIGRATIONS_DIR, apply_migrations, connect},
    dto::{
        artworks::{CreateArtworkRequest, UpdateArtworkRequest},
        genres::CreateGenreRequest,
    },
    error::AppError,
    middleware::auth::AuthUser,
    models::Role,
    services::{artwork_service, genre_service},
    state::AppState,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};

// Integration flow: admin curates genres and artworks; genre names stay
// unique and genres with artworks refuse deletion.
#[tokio::test]
async fn catalog_curation_flow() -> anyhow::Result<()> {
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

    let state = setup_state(&database_url).await?;
    let admin = create_admin(&state).await?;
    let visitor = AuthUser {
        user_id: admin.user_id,
        email: "visitor@example.com".into(),
        role: Role::User,
    };

    let genre = genre_service::create_genre(
        &state,
        &admin,
        CreateGenreRequest {
            name: "Landscapes".into(),
            description: Some("Scenery".into()),
            is_active: None,
        },
    )
    .await?
    .data
    .expect("genre payload");
    assert!(genre.is_active);

    // Names are unique regardless of case.
    let clash = genre_service::create_genre(
        &state,
        &admin,
        CreateGenreRequest {
            name: "landscapes".into(),
            description: None,
            is_active: None,
        },
    )
    .await;
    assert!(matches!(clash, Err(AppError::Conflict(_))));

    // `_` and `%` in names match literally, not as pattern wildcards.
    genre_service::create_genre(
        &state,
        &admin,
        CreateGenreRequest {
            name: "Mixed_Media".into(),
            description: None,
            is_active: None,
        },
    )
    .await?;
    let distinct = genre_service::create_genre(
        &state,
        &admin,
        CreateGenreRequest {
            name: "MixedXMedia".into(),
            description: None,
            is_active: None,
        },
    )
    .await?;
    assert!(distinct.success);
    let same_name = genre_service::create_genre(
        &state,
        &admin,
        CreateGenreRequest {
            name: "mixed_media".into(),
            description: None,
            is_active: None,
        },
    )
    .await;
    assert!(matches!(same_name, Err(AppError::Conflict(_))));

    // Curation is admin-only.
    let denied = genre_service::create_genre(
        &state,
        &visitor,
        CreateGenreRequest {
            name: "Motifs".into(),
            description: None,
            is_active: None,
        },
    )
    .await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    let artwork = artwork_service::create_artwork(
        &state,
        &admin,
        CreateArtworkRequest {
            genre_id: genre.id,
            title: "Fjord at Dawn".into(),
            description: None,
            price: 89_000,
            is_available: None,
            is_featured: Some(true),
        },
    )
    .await?
    .data
    .expect("artwork payload");

    let invalid = artwork_service::create_artwork(
        &state,
        &admin,
        CreateArtworkRequest {
            genre_id: genre.id,
            title: "  ".into(),
            description: None,
            price: -1,
            is_available: None,
            is_featured: None,
        },
    )
    .await;
    match invalid {
        Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation failure, got {other:?}"),
    }

    let orphan = artwork_service::create_artwork(
        &state,
        &admin,
        CreateArtworkRequest {
            genre_id: 999_999,
            title: "Nowhere".into(),
            description: None,
            price: 100,
            is_available: None,
            is_featured: None,
        },
    )
    .await;
    assert!(matches!(orphan, Err(AppError::NotFound(_))));

    let by_genre = artwork_service::list_by_genre(&state, genre.id)
        .await?
        .data
        .expect("artwork list");
    assert_eq!(by_genre.items.len(), 1);

    let featured = artwork_service::list_featured(&state)
        .await?
        .data
        .expect("artwork list");
    assert!(featured.items.iter().any(|a| a.id == artwork.id));

    // Partial updates leave the other fields alone.
    let updated = artwork_service::update_artwork(
        &state,
        &admin,
        artwork.id,
        UpdateArtworkRequest {
            genre_id: None,
            title: None,
            description: None,
            price: Some(95_000),
            is_available: None,
            is_featured: None,
        },
    )
    .await?
    .data
    .expect("artwork payload");
    assert_eq!(updated.price, 95_000);
    assert_eq!(updated.title, "Fjord at Dawn");
    assert!(updated.is_featured);

    // The genre cannot be deleted while it still has artworks.
    let blocked = genre_service::delete_genre(&state, &admin, genre.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    artwork_service::delete_artwork(&state, &admin, artwork.id).await?;
    genre_service::delete_genre(&state, &admin, genre.id).await?;

    let gone = genre_service::get_genre(&state, genre.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));

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

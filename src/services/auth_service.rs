use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::{
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    models::{Role, User},
    response::ApiResult,
    state::AppState,
};

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResult<User>> {
    let RegisterRequest {
        email,
        password,
        confirm_password,
    } = payload;

    let mut errors = Vec::new();
    if !email.contains('@') || email.trim().is_empty() {
        errors.push("A valid email address is required".to_string());
    }
    if password.len() < 6 {
        errors.push("Password must be at least 6 characters".to_string());
    }
    if password != confirm_password {
        errors.push("Passwords do not match".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let users = state.repo::<Users>();
    let existing = users
        .find(Condition::all().add(UserCol::Email.eq(email.as_str())))
        .await?;
    if !existing.is_empty() {
        return Err(AppError::Conflict(
            "User with this email already exists".into(),
        ));
    }

    let password_hash = hash_password(&password)?;

    let user = users
        .add(UserActive {
            id: NotSet,
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(Role::User.as_str().into()),
            is_active: Set(true),
            created_at: NotSet,
        })
        .await?;

    // Welcome email is best-effort; the account exists either way.
    if let Some(mailer) = &state.mailer {
        if let Err(err) = mailer.send_welcome(&user.email).await {
            tracing::warn!(error = %err, email = %user.email, "welcome email failed");
        }
    }

    tracing::info!(user_id = user.id, "new user registered");
    Ok(ApiResult::success(
        User::from(user),
        "Registration successful",
    ))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResult<LoginResponse>> {
    let LoginRequest { email, password } = payload;

    // One generic message for unknown email, wrong password and disabled
    // accounts, so responses don't reveal which accounts exist.
    let invalid = || AppError::Unauthorized("Invalid email or password".into());

    let users = state.repo::<Users>();
    let user = users
        .find(Condition::all().add(UserCol::Email.eq(email.as_str())))
        .await?
        .into_iter()
        .next()
        .ok_or_else(invalid)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(invalid());
    }

    if !user.is_active {
        return Err(invalid());
    }

    let token = issue_token(user.id, &user.email, &user.role)?;

    tracing::info!(user_id = user.id, "user logged in");
    Ok(ApiResult::success(LoginResponse { token }, "Login successful"))
}

pub async fn get_current_user(state: &AppState, user_id: i32) -> AppResult<ApiResult<User>> {
    let user = state
        .repo::<Users>()
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(ApiResult::success(
        User::from(user),
        "User retrieved successfully",
    ))
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn issue_token(user_id: i32, email: &str, role: &str) -> AppResult<String> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

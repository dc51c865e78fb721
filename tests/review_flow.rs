use artwork_store_api::{
    db::{MIGRATIONS_DIR, apply_migrations, connect},
    dto::reviews::CreateReviewRequest,
    entity::{
        artworks::ActiveModel as ArtworkActive, genres::ActiveModel as GenreActive,
        users::ActiveModel as UserActive,
    },
    error::AppError,
    middleware::auth::AuthUser,
    models::Role,
    services::review_service,
    state::AppState,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};

// Integration flow: two users review an artwork, the admin moderates, and
// the public listing only ever shows approved reviews.
#[tokio::test]
async fn review_moderation_flow() -> anyhow::Result<()> {
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

    let alice = create_user(&state, Role::User, "alice@example.com").await?;
    let bob = create_user(&state, Role::User, "bob@example.com").await?;
    let admin = create_user(&state, Role::Admin, "admin@example.com").await?;

    let genre = GenreActive {
        name: Set("Abstract".into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    let artwork = ArtworkActive {
        genre_id: Set(genre.id),
        title: Set("Fragments in Blue".into()),
        price: Set(45_000),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    let auth_alice = auth(alice, "alice@example.com", Role::User);
    let auth_bob = auth(bob, "bob@example.com", Role::User);
    let auth_admin = auth(admin, "admin@example.com", Role::Admin);

    let review = review_service::create_review(
        &state,
        &auth_alice,
        CreateReviewRequest {
            artwork_id: artwork.id,
            rating: 5,
            comment: Some("Stunning in person".into()),
        },
    )
    .await?
    .data
    .expect("review payload");
    assert!(!review.is_approved);

    // One review per user and artwork.
    let duplicate = review_service::create_review(
        &state,
        &auth_alice,
        CreateReviewRequest {
            artwork_id: artwork.id,
            rating: 4,
            comment: None,
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    // Ratings outside 1..=5 never reach the database.
    let out_of_range = review_service::create_review(
        &state,
        &auth_bob,
        CreateReviewRequest {
            artwork_id: artwork.id,
            rating: 6,
            comment: None,
        },
    )
    .await;
    assert!(matches!(out_of_range, Err(AppError::Validation(_))));

    review_service::create_review(
        &state,
        &auth_bob,
        CreateReviewRequest {
            artwork_id: artwork.id,
            rating: 3,
            comment: None,
        },
    )
    .await?;

    // Nothing is public until the admin approves it.
    let public = review_service::list_by_artwork(&state, artwork.id)
        .await?
        .data
        .expect("review list");
    assert!(public.items.is_empty());

    let pending = review_service::list_pending(&state, &auth_admin)
        .await?
        .data
        .expect("review list");
    assert_eq!(pending.items.len(), 2);

    let approved = review_service::approve_review(&state, &auth_admin, review.id)
        .await?
        .data
        .expect("review payload");
    assert!(approved.is_approved);

    let again = review_service::approve_review(&state, &auth_admin, review.id).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let public = review_service::list_by_artwork(&state, artwork.id)
        .await?
        .data
        .expect("review list");
    assert_eq!(public.items.len(), 1);
    assert_eq!(public.items[0].rating, 5);

    // The summary covers approved reviews only.
    let summary = review_service::rating_summary(&state, artwork.id)
        .await?
        .data
        .expect("summary payload");
    assert_eq!(summary.review_count, 1);
    assert_eq!(summary.average_rating, 5.0);
    assert_eq!(summary.distribution.five_star, 1);
    assert_eq!(summary.distribution.three_star, 0);

    // Bob cannot delete Alice's review, but Alice can, and after deletion
    // she may review the artwork again.
    let forbidden = review_service::delete_review(&state, &auth_bob, review.id).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden(_))));

    review_service::delete_review(&state, &auth_alice, review.id).await?;
    let recreated = review_service::create_review(
        &state,
        &auth_alice,
        CreateReviewRequest {
            artwork_id: artwork.id,
            rating: 4,
            comment: Some("Second look".into()),
        },
    )
    .await?;
    assert!(recreated.success);

    // Rejection removes the pending review outright.
    let pending = review_service::list_pending(&state, &auth_admin)
        .await?
        .data
        .expect("review list");
    let bob_review = pending
        .items
        .iter()
        .find(|r| r.user_id == bob)
        .expect("bob's pending review");
    review_service::reject_review(&state, &auth_admin, bob_review.id).await?;

    let gone = review_service::approve_review(&state, &auth_admin, bob_review.id).await;
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

fn auth(user_id: i32, email: &str, role: Role) -> AuthUser {
    AuthUser {
        user_id,
        email: email.to_string(),
        role,
    }
}

async fn create_user(state: &AppState, role: Role, email: &str) -> anyhow::Result<i32> {
    let user = UserActive {
        email: Set(email.to_string()),
        password_hash: Set("dummy".into()),
        role: Set(role.as_str().into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}

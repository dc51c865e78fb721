use artwork_store_api::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, apply_migrations, connect},
    entity::{artworks, genres, users},
    services::auth_service::hash_password,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = connect(&config.database_url).await?;
    apply_migrations(&orm, MIGRATIONS_DIR).await?;

    let admin_id = ensure_user(&orm, "admin@example.com", "admin123", "Admin").await?;
    let user_id = ensure_user(&orm, "user@example.com", "user123", "User").await?;
    seed_catalog(&orm).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already present (role={})", existing.role);
        return Ok(existing.id);
    }

    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let inserted = users::ActiveModel {
        email: Set(email.to_owned()),
        password_hash: Set(password_hash),
        role: Set(role.to_owned()),
        ..Default::default()
    }
    .insert(orm)
    .await?;

    println!("Created user {email} (role={role})");
    Ok(inserted.id)
}

async fn ensure_genre(
    orm: &DatabaseConnection,
    name: &str,
    description: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = genres::Entity::find()
        .filter(genres::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let inserted = genres::ActiveModel {
        name: Set(name.to_owned()),
        description: Set(Some(description.to_owned())),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok(inserted.id)
}

async fn seed_catalog(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let genre_specs = [
        ("Abstract", "Non-representational compositions"),
        ("Landscapes", "Natural and urban scenery"),
        ("Motifs", "Recurring decorative themes"),
        ("Animals", "Wildlife and pet portraits"),
        ("Design Decor Art", "Pieces made for interiors"),
    ];

    let mut genre_ids = Vec::with_capacity(genre_specs.len());
    for (name, description) in genre_specs {
        genre_ids.push(ensure_genre(orm, name, description).await?);
    }

    // (genre index, title, description, price in cents, featured)
    let artwork_specs = [
        (0, "Fragments in Blue", "Layered acrylic on canvas", 45_000_i64, true),
        (0, "Color Study IX", "Small-format gouache series", 12_500, false),
        (1, "Fjord at Dawn", "Oil on linen, framed", 89_000, true),
        (1, "City After Rain", "Watercolor street scene", 30_000, false),
        (2, "Meander", "Screen print, edition of 50", 8_500, false),
        (3, "Heron Standing", "Ink wash on paper", 21_000, false),
        (4, "Quiet Corner", "Mixed media wall piece", 56_000, true),
    ];

    for (genre_idx, title, description, price, featured) in artwork_specs {
        let exists = artworks::Entity::find()
            .filter(artworks::Column::Title.eq(title))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        artworks::ActiveModel {
            genre_id: Set(genre_ids[genre_idx]),
            title: Set(title.to_owned()),
            description: Set(Some(description.to_owned())),
            price: Set(price),
            is_featured: Set(featured),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded {} genres and demo artworks", genre_ids.len());
    Ok(())
}

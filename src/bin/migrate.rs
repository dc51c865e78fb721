use artwork_store_api::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, apply_migrations, connect},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = connect(&config.database_url).await?;
    apply_migrations(&orm, MIGRATIONS_DIR).await?;
    println!("Migrations applied");
    Ok(())
}

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub smtp: Option<SmtpConfig>,
}

/// SMTP settings are optional; without them the mailer is disabled and
/// notification sends are skipped.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let smtp = match env::var("SMTP_HOST") {
            Ok(smtp_host) => Some(SmtpConfig {
                host: smtp_host,
                port: env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(587),
                username: env::var("SMTP_USER").unwrap_or_default(),
                password: env::var("SMTP_PASSWORD").unwrap_or_default(),
                from_address: env::var("SMTP_FROM")
                    .unwrap_or_else(|_| "noreply@artworkstore.example".to_string()),
            }),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            host,
            port,
            smtp,
        })
    }
}

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub env: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(10);
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| "supersecretkey".to_string());
        let env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            jwt_secret,
            env,
        })
    }
}

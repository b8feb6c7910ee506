//! Environment configuration, loaded once at process start.
//!
//! - `MONGODB_URI`: MongoDB connection string (required)
//! - `DB_NAME`: database name (default: `todo_app`)
//! - `CORS_ORIGINS`: comma-separated allowed origins (default: `*`)
//! - `HOST` / `PORT`: bind address (default: `127.0.0.1:8080`)

pub struct Config {
    pub mongodb_uri: String,
    pub db_name: String,
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let mongodb_uri = dotenvy::var("MONGODB_URI").expect("MONGODB_URI must be set");
        let db_name = dotenvy::var("DB_NAME").unwrap_or_else(|_| "todo_app".to_string());
        let cors_origins = dotenvy::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        let host = dotenvy::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = dotenvy::var("PORT")
            .ok()
            .and_then(|port| match port.parse() {
                Ok(port) => Some(port),
                Err(error) => {
                    log::warn!("PORT='{port}' is not a valid port number ({error}), using 8080");
                    None
                }
            })
            .unwrap_or(8080);
        Self {
            mongodb_uri,
            db_name,
            cors_origins,
            host,
            port,
        }
    }

    pub fn new_mongodb_uri(mongodb_uri: String, db_name: String) -> Self {
        Self {
            mongodb_uri,
            db_name,
            cors_origins: vec!["*".to_string()],
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

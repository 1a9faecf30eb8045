use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub profile: String,
}

impl Config {
    pub fn from_env() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            if profile == "default" {
                "sqlite://bibliotrack.db?mode=rwc".to_string()
            } else {
                format!("sqlite://bibliotrack_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            profile,
        }
    }
}

use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub push_service_url: String,
    pub push_service_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            push_service_url: env::var("PUSH_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/push".to_string()),
            push_service_token: env::var("PUSH_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
        }
    }
}

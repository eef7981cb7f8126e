use std::env;

use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub api_prefix: String,
    pub lang_file: String,
    pub clock_tick_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            base_url: env::var("BASE_URL").expect("BASE_URL must be set"),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            lang_file: env::var("LANG_FILE").unwrap_or_else(|_| ".hrm_language".to_string()),
            clock_tick_ms: env::var("CLOCK_TICK_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap(),
        }
    }
}

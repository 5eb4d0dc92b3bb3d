use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub bind_addr: String,
    pub hotel_name: String,
    pub session_cookie: String,
    pub session_idle_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            hotel_name: env::var("HOTEL_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "Hotel Management".to_string()),
            session_cookie: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| "hotel_session".to_string()),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(120),
        }
    }
}

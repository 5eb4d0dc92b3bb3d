use crate::config::AppConfig;
use crate::services::sessions::SessionRegistry;

pub struct AppState {
    pub config: AppConfig,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let idle_ttl = chrono::Duration::minutes(config.session_idle_minutes);
        Self {
            config,
            sessions: SessionRegistry::new(idle_ttl),
        }
    }
}

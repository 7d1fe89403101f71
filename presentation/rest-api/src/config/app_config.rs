use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Top-level configuration for the chat relay, assembled once at startup.
///
/// The OpenAI credential is loaded separately during dependency wiring; this
/// struct only carries what the HTTP server itself needs.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}

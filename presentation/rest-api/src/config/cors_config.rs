use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins.
///   When unset, every origin is allowed — a permissive default meant to be
///   tightened by the deployer once the frontend URL is known.
///
/// Configuration:
/// - Methods: all
/// - Headers: all
/// - Credentials: Enabled
///
pub fn init_cors() -> Cors {
    let cors = Cors::new().allow_credentials(true);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(allowed_origins) => {
            let origins: Vec<&str> = allowed_origins.split(',').collect();
            cors.allow_origins(origins)
        }
        // No restriction configured: any origin, any method, any header.
        Err(_) => cors,
    }
}

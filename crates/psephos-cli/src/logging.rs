//! Logging initialization
//!
//! Single initialization point for the tracing subscriber.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
}

static INIT_ONCE: Once = Once::new();

/// Select the profile from the environment: `PSEPHOS_LOG=json` switches
/// to Production output.
pub fn profile_from_env() -> Profile {
    match std::env::var("PSEPHOS_LOG").as_deref() {
        Ok("json") => Profile::Production,
        _ => Profile::Development,
    }
}

/// Initialize the logging facility
///
/// Called once at startup; later calls are no-ops. The filter defaults
/// per profile and is overridable via `RUST_LOG`.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("psephos_cli=debug,psephos_store=debug")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("psephos_cli=info,psephos_store=info")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Development);
        init(Profile::Development);
    }

    #[test]
    fn test_default_profile_is_development() {
        std::env::remove_var("PSEPHOS_LOG");
        assert_eq!(profile_from_env(), Profile::Development);
    }
}

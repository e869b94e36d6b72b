//! Subscriber installation

use std::sync::Once;
use std::time::Instant;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Which subscriber `init` installs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, `orders=debug` unless `RUST_LOG` says otherwise
    Development,
    /// One JSON object per event, `orders=info` by default
    Production,
    /// Bare registry; tests attach the capture layer instead
    Test,
}

impl Profile {
    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "orders=debug",
            Profile::Production => "orders=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has any effect. Output goes to stderr so stdout stays
/// free for command results. `RUST_LOG` overrides the profile's default filter.
///
/// ```
/// use orders_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));

        // try_init: a subscriber may already be installed by test capture
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}

/// Milliseconds elapsed since `start`, saturating at `u64::MAX`
pub fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Development);
    }

    #[test]
    fn test_profiles_filter_differently() {
        assert_ne!(
            Profile::Development.default_directive(),
            Profile::Production.default_directive()
        );
        assert_eq!(Profile::Test.default_directive(), "off");
    }

    #[test]
    fn test_elapsed_ms_is_small_for_fresh_instant() {
        let start = Instant::now();
        assert!(elapsed_ms(start) < 1_000);
    }
}

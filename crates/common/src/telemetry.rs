//! Tracing bootstrap shared by tests, benches, and any embedding binary.
//!
//! The filter is read from `RUST_LOG`; when it is unset or invalid the
//! caller-supplied default directive is used instead.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "info";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber with a fmt layer.
///
/// Returns `false` if a global subscriber was already installed, so calling
/// this more than once is harmless.
pub fn init_tracing(default_directive: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Same as [`init_tracing`], but writes through the libtest capture so
/// output only shows up for failing tests.
pub fn init_test_tracing() -> bool {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_DIRECTIVE))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init_test_tracing();
        assert!(!init_test_tracing());
        assert!(!init_tracing(DEFAULT_DIRECTIVE));
    }
}

use tracing_subscriber::EnvFilter;

use crate::config::{Config, ProfilingMode};

pub const DEFAULT_FILTER: &str = "info,reorder_dimension=debug";

pub fn init() {
    init_with(&Config::default());
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured filter.
///
/// Calling this more than once is harmless; only the first subscriber is kept.
pub fn init_with(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_ref()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    if config.profiling == ProfilingMode::On {
        crate::profiling::enable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with(&Config::default());
    }
}

use std::borrow::Cow;

use crate::logging::DEFAULT_FILTER;

/// Workspace-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    pub log_filter: Cow<'static, str>,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: Cow::Borrowed(DEFAULT_FILTER),
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are not recorded
    #[default]
    Off,
    /// Profiling scopes are recorded and can be read from the global puffin profiler
    On,
}

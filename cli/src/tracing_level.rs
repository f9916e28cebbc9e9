use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable read as filter directives when `--log-level` is not given
pub const LOG_LEVEL_ENV: &str = "JSONPATHS_LOG";

/// Represents tracing levels selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid tracing level '{s}'. Valid levels are: error, warn, info, debug, trace"
            )),
        }
    }
}

impl TracingLevel {
    const fn as_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    const fn as_level_filter(self) -> LevelFilter { LevelFilter::from_level(self.as_level()) }
}

/// An explicit level wins; otherwise `env_directives` (`debug`,
/// `jsonpaths=trace`, ...) apply, falling back to the default level
fn stderr_filter(level: Option<TracingLevel>, env_directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder()
        .with_default_directive(level.unwrap_or_default().as_level_filter().into());
    match level {
        Some(_) => builder.parse_lossy(""),
        None => builder.parse_lossy(env_directives.unwrap_or_default()),
    }
}

/// Initialize tracing to stderr
/// stdout is reserved for the extracted paths
pub fn init_stderr_tracing(level: Option<TracingLevel>) {
    let env_directives = std::env::var(LOG_LEVEL_ENV).ok();
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    let subscriber = Registry::default()
        .with(stderr_filter(level, env_directives.as_deref()))
        .with(stderr_layer);

    if let Err(error) = subscriber.try_init() {
        eprintln!("tracing already initialized: {error}");
    }
}

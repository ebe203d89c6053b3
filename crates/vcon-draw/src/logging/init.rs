use std::borrow::Cow;
use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
pub const DEFAULT_FILTER: &str = "info";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "vcon_draw=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// The filter that will be installed: explicit, then `RUST_LOG`, then
    /// [`DEFAULT_FILTER`].
    pub fn resolved_filter(&self) -> Cow<'_, str> {
        if let Some(filter) = &self.env_filter {
            return Cow::Borrowed(filter);
        }
        std::env::var("RUST_LOG")
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(DEFAULT_FILTER))
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once per process.
///
/// Later calls are ignored. A logger the host installed first is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolved_filter();
        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init();

        match installed {
            Ok(()) => log::debug!("logging initialized with filter {filter:?}"),
            Err(_) => log::debug!("host logger already installed"),
        }
    });
}

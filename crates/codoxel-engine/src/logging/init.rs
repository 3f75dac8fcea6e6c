use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "codoxel_engine=debug,wgpu_core=warn").
///
/// `write_style` controls ANSI coloring behavior.
///
/// `gpu_diagnostics` raises the graphics backend's own log output (`wgpu_hal`)
/// to `info` so validation messages show up; otherwise it stays at `warn`.
/// An explicit filter for that target in `env_filter` or `RUST_LOG` wins.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub gpu_diagnostics: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            gpu_diagnostics: false,
        }
    }
}

impl LoggingConfig {
    /// Filter directive for the backend diagnostics target.
    pub fn gpu_directive(&self) -> &'static str {
        if self.gpu_diagnostics {
            "wgpu_hal=info"
        } else {
            "wgpu_hal=warn"
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(log::LevelFilter::Info);
        builder.parse_filters(config.gpu_directive());

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_directive_follows_flag() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.gpu_directive(), "wgpu_hal=warn");
        config.gpu_diagnostics = true;
        assert_eq!(config.gpu_directive(), "wgpu_hal=info");
    }
}

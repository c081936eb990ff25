//! Process-wide configuration.
//!
//! Use [`ConfigBuilder`] at application startup to set the default settings
//! picked up by [`TypstDocument::new`](crate::TypstDocument::new).

use std::sync::OnceLock;

use crate::settings::TypstSettings;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Settings used by documents created without explicit settings.
    pub settings: TypstSettings,
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    settings: Option<TypstSettings>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default document settings.
    ///
    /// Default: [`TypstSettings::default()`].
    ///
    /// # Example
    ///
    /// ```
    /// use typst_preamble::config::ConfigBuilder;
    /// use typst_preamble::TypstSettings;
    ///
    /// ConfigBuilder::new()
    ///     .settings(TypstSettings::builder().text_font("Arial").build())
    ///     .init();
    /// ```
    pub fn settings(mut self, settings: TypstSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build and install the global configuration.
    ///
    /// Only the first call takes effect. Returns `true` if configuration was
    /// set, `false` if already initialized.
    pub fn init(self) -> bool {
        let config = Config {
            settings: self.settings.unwrap_or_default(),
        };
        CONFIG.set(config).is_ok()
    }
}

/// Initialize with the default configuration.
///
/// Equivalent to `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// Get the current configuration, or the default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

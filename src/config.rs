use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for pagepress
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PagepressConfig {
    /// Workflow tunables
    pub workflow: WorkflowConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Delay before focusing the captcha input after a challenge arrives,
    /// in milliseconds
    pub captcha_focus_delay_ms: u64,
    /// Status banner shown while an upload is in flight
    pub publishing_status_text: String,
}

impl WorkflowConfig {
    pub fn captcha_focus_delay(&self) -> Duration {
        Duration::from_millis(self.captcha_focus_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
    /// Emit JSON-structured log lines
    pub json_logs: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            captcha_focus_delay_ms: 300,
            publishing_status_text: "Publishing...".to_string(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Default for PagepressConfig {
    fn default() -> Self {
        Self {
            workflow: WorkflowConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl PagepressConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (pagepress.toml)
    /// 3. Environment variables (prefixed with PAGEPRESS_)
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder_with_defaults()?;

        if Path::new("pagepress.toml").exists() {
            builder = builder.add_source(File::with_name("pagepress"));
        }

        builder = builder.add_source(
            Environment::with_prefix("PAGEPRESS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file path layered over defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::builder_with_defaults()?
            .add_source(File::from(path.as_ref()))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = PagepressConfig::default();
        Ok(Config::builder()
            .set_default(
                "workflow.captcha_focus_delay_ms",
                defaults.workflow.captcha_focus_delay_ms,
            )?
            .set_default(
                "workflow.publishing_status_text",
                defaults.workflow.publishing_status_text,
            )?
            .set_default("observability.log_level", defaults.observability.log_level)?
            .set_default("observability.json_logs", defaults.observability.json_logs)?)
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<PagepressConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = PagepressConfig::load_env_file();
        PagepressConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static PagepressConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}

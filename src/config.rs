use anyhow::Result;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::services::RiskLevel;

/// Main configuration structure for the screening app
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarotidScreenConfig {
    /// App shell settings
    pub app: AppConfig,
    /// Simulated processing delays of the placeholder collaborators
    pub simulation: SimulationConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Canned values returned by the demo collaborators
    pub demo: DemoDataConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// How long the splash screen stays up before redirecting to login
    pub splash_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Simulated capture time on the Scan screen
    pub scan_delay_ms: u64,
    /// Simulated inference time on the Analysis screen
    pub analysis_delay_ms: u64,
    /// Upper bound on one inference call
    pub analysis_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub json_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoDataConfig {
    pub patient_id: String,
    pub imt_mm: f64,
    pub risk: RiskLevel,
    pub model_version: String,
    pub facility: String,
    pub frame_count: u32,
    pub image_quality_pct: u8,
}

impl AppConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}

impl SimulationConfig {
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_millis(self.analysis_timeout_ms)
    }
}

impl Default for CarotidScreenConfig {
    fn default() -> Self {
        Self {
            app: AppConfig {
                splash_delay_ms: 3000,
            },
            simulation: SimulationConfig {
                scan_delay_ms: 2000,
                analysis_delay_ms: 3000,
                analysis_timeout_ms: 15_000,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: true,
            },
            demo: DemoDataConfig {
                patient_id: "PT-2024-0117".to_string(),
                imt_mm: 1.28,
                risk: RiskLevel::Medium,
                model_version: "unet-base8-128".to_string(),
                facility: "District Hospital Referral Desk".to_string(),
                frame_count: 24,
                image_quality_pct: 92,
            },
        }
    }
}

impl CarotidScreenConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (carotid-screen.toml, .carotid-screen-rc)
    /// 3. Environment variables (CAROTID_SCREEN_SECTION__FIELD)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("carotid-screen.toml").exists() {
            builder = builder.add_source(File::with_name("carotid-screen"));
        }

        if Path::new(".carotid-screen-rc").exists() {
            builder = builder.add_source(
                File::with_name(".carotid-screen-rc").format(FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("CAROTID_SCREEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit TOML file layered over the defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env first, then the layered sources. A malformed .env is
    /// reported and skipped.
    pub fn load_with_env_file() -> Result<Self> {
        if let Err(e) = Self::load_env_file() {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
        }
        Self::load()
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<CarotidScreenConfig, anyhow::Error>> =
    std::sync::LazyLock::new(CarotidScreenConfig::load_with_env_file);

/// Get the global configuration
pub fn config() -> Result<&'static CarotidScreenConfig> {
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

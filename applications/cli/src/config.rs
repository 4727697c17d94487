/// Application configuration
use crate::error::{CliError, Result};
use cadenza_core::EnqueueBehaviour;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cadenza.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_queue")]
    pub queue: QueueSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueSettings {
    #[serde(default)]
    pub enqueue_behaviour: EnqueueSettings,

    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
}

/// Snake-case mirror of `EnqueueBehaviour` for config files and env vars
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct EnqueueSettings {
    #[serde(default = "default_on_click")]
    pub on_click: bool,

    #[serde(default)]
    pub clear_before: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `cadenza.toml` in the working
    /// directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. CADENZA_STORAGE__DATA_DIR
        settings = settings.add_source(
            config::Environment::with_prefix("CADENZA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(CliError::Config(
                "Data directory is required (set CADENZA_STORAGE__DATA_DIR)".to_string(),
            ));
        }

        if self.queue.double_click_ms == 0 {
            return Err(CliError::Config(
                "Double-click window must be at least 1ms".to_string(),
            ));
        }

        Ok(())
    }

    /// Configured enqueue behaviour
    pub fn enqueue_behaviour(&self) -> EnqueueBehaviour {
        self.queue.enqueue_behaviour.into()
    }

    /// Configured double-click window
    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.queue.double_click_ms)
    }
}

impl From<EnqueueSettings> for EnqueueBehaviour {
    fn from(settings: EnqueueSettings) -> Self {
        Self {
            on_click: settings.on_click,
            clear_before: settings.clear_before,
        }
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_queue() -> QueueSettings {
    QueueSettings {
        enqueue_behaviour: EnqueueSettings::default(),
        double_click_ms: default_double_click_ms(),
    }
}

fn default_on_click() -> bool {
    EnqueueBehaviour::default().on_click
}

fn default_double_click_ms() -> u64 {
    300
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_log_filter(),
    }
}

fn default_log_filter() -> String {
    "cadenza=info,cadenza_queue=info,cadenza_storage=info".to_string()
}

impl Default for EnqueueSettings {
    fn default() -> Self {
        let behaviour = EnqueueBehaviour::default();
        Self {
            on_click: behaviour.on_click,
            clear_before: behaviour.clear_before,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            queue: default_queue(),
            logging: default_logging(),
        }
    }
}

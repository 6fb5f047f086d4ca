//! Integration configuration
//!
//! Parses the `ge_home:` section of configuration.yaml:
//!
//! ```yaml
//! ge_home:
//!   dishwasher:
//!     start_erd: 0x0050
//!     stop_erd: "0x2040"
//!   appliances:
//!     - serial: DW123456
//!       erd_values:
//!         DISHWASHER_REMOTE_START_ENABLE: true
//! ```

use ge_erd::{ErdCode, ErdValue};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Register the dishwasher device wires the start/stop switch's start
/// command to
pub const DEFAULT_START_ERD: ErdCode = ErdCode::Raw(0x0050);

/// Register the start/stop switch sends the stop command to
pub const DEFAULT_STOP_ERD: ErdCode = ErdCode::REMOTE_STOP_CYCLE_REQUEST;

/// Top-level configuration file; sections for other integrations are ignored
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    ge_home: Option<GeHomeConfig>,
}

/// The `ge_home:` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeHomeConfig {
    /// Dishwasher entity settings
    #[serde(default)]
    pub dishwasher: DishwasherConfig,

    /// Appliances with their initial register values
    #[serde(default)]
    pub appliances: Vec<ApplianceConfig>,
}

/// Command registers used by the dishwasher start/stop switch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishwasherConfig {
    /// Register written to start the selected cycle
    #[serde(default = "default_start_erd")]
    pub start_erd: ErdCode,

    /// Register written to stop the current cycle
    #[serde(default = "default_stop_erd")]
    pub stop_erd: ErdCode,
}

fn default_start_erd() -> ErdCode {
    DEFAULT_START_ERD
}

fn default_stop_erd() -> ErdCode {
    DEFAULT_STOP_ERD
}

impl Default for DishwasherConfig {
    fn default() -> Self {
        Self {
            start_erd: DEFAULT_START_ERD,
            stop_erd: DEFAULT_STOP_ERD,
        }
    }
}

/// An appliance known to the integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceConfig {
    /// Serial number or MAC address
    pub serial: String,

    /// Register values to seed the appliance's cache with
    #[serde(default)]
    pub erd_values: HashMap<ErdCode, ErdValue>,
}

impl GeHomeConfig {
    /// Load the `ge_home:` section from a configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading GE Home config from {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse the `ge_home:` section from YAML text
    ///
    /// A missing section yields the default configuration.
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile = serde_yaml::from_str(content)?;
        let config = file.ge_home.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        for (key, code) in [
            ("dishwasher.start_erd", self.dishwasher.start_erd),
            ("dishwasher.stop_erd", self.dishwasher.stop_erd),
        ] {
            if !code.is_writable() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("{} is a status register and cannot be written", code),
                });
            }
        }

        if self.dishwasher.start_erd == self.dishwasher.stop_erd {
            return Err(ConfigError::InvalidValue {
                key: "dishwasher.stop_erd".to_string(),
                reason: "start and stop commands must use different registers".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for appliance in &self.appliances {
            if appliance.serial.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "appliances.serial".to_string(),
                    reason: "serial cannot be empty".to_string(),
                });
            }
            if !seen.insert(appliance.serial.as_str()) {
                return Err(ConfigError::InvalidValue {
                    key: "appliances.serial".to_string(),
                    reason: format!("duplicate appliance '{}'", appliance.serial),
                });
            }
        }

        Ok(())
    }
}

//! GE Home appliance runner
//!
//! Loads the `ge_home:` section of a configuration file, builds a simulated
//! appliance for every configured serial, optionally sends a command to
//! each start/stop switch and prints the resulting entity states.
//!
//! Usage: `ge-home [configuration.yaml] [on|off|toggle]`

use anyhow::{bail, Context, Result};
use ge_erd::ErdStore;
use ge_home::{DishwasherDevice, GeHomeConfig};
use ha_entity::{state_of, ToggleEntity};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_CONFIG_PATH: &str = "configuration.yaml";

/// Command sent to every start/stop switch
#[derive(Debug, Clone, Copy)]
enum Command {
    On,
    Off,
    Toggle,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "on" => Ok(Command::On),
            "off" => Ok(Command::Off),
            "toggle" => Ok(Command::Toggle),
            other => bail!("unknown command '{}' (expected on, off or toggle)", other),
        }
    }
}

impl Command {
    async fn send(self, entity: &dyn ToggleEntity) {
        match self {
            Command::On => entity.turn_on().await,
            Command::Off => entity.turn_off().await,
            Command::Toggle => entity.toggle().await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.into());
    let command = args.next().map(|c| c.parse::<Command>()).transpose()?;

    let config = GeHomeConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path))?;

    if config.appliances.is_empty() {
        warn!("No appliances configured in {}", config_path);
    }

    for appliance in &config.appliances {
        let store = Arc::new(ErdStore::with_values(
            appliance.serial.clone(),
            appliance.erd_values.clone(),
        ));
        let device = DishwasherDevice::new(store, &config.dishwasher);
        info!("Set up dishwasher {}", device.serial_or_mac());

        for entity in device.entities() {
            if let Some(command) = command {
                command.send(entity.as_ref()).await;
            }

            let state = state_of(entity.as_ref());
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }

    Ok(())
}

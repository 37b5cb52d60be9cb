use static_cell::StaticCell;

use crate::device_config::DeviceConfig;
use crate::error::ConfigError;

static DEVICE_CONFIG: StaticCell<DeviceConfig> = StaticCell::new();

/// Moves `config` into static storage so `'static` tasks can borrow it.
/// Can succeed only once per boot.
pub fn provision(config: DeviceConfig) -> Result<&'static DeviceConfig, ConfigError> {
    match DEVICE_CONFIG.try_init(config) {
        Some(config) => Ok(&*config),
        None => {
            log::warn!("Device configuration provisioned twice");
            Err(ConfigError::AlreadyProvisioned)
        }
    }
}

/// Loads the embedded configuration and provisions it.
pub fn load_static() -> Result<&'static DeviceConfig, ConfigError> {
    provision(DeviceConfig::load()?)
}

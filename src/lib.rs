//! Connection settings for a Wi-Fi device that talks to an MQTT broker
//! (Adafruit IO by default) and fires IFTTT Maker Webhooks.
//!
//! Values are provisioned at build time from `cfg.toml` or environment
//! variables, validated once by [`DeviceConfig::load`], and then handed to
//! whatever needs them by reference.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
mod device_config;
mod error;
pub mod field;
pub mod hostname;
mod provision;
pub mod webhook;

pub use config::{RawConfig, RAW_CONFIG};
pub use device_config::{BrokerCredentials, DeviceConfig, WifiCredentials};
pub use error::ConfigError;
pub use field::{is_placeholder, Field};
pub use hostname::is_valid_hostname;
pub use provision::{load_static, provision};
pub use webhook::{Placeholder, WebhookUrl};

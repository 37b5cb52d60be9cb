use core::fmt;
use core::str::FromStr;

use heapless::String;
use log::{error, info};

use crate::config::{RawConfig, RAW_CONFIG};
use crate::constants::*;
use crate::error::ConfigError;
use crate::field::{is_placeholder, Field};
use crate::hostname::is_valid_hostname;
use crate::webhook::{self, WebhookUrl};

const REDACTED: &str = "<redacted>";

/// Validated connection settings for the device.
///
/// Built once at startup and then only read. Components that need a subset
/// take [`WifiCredentials`] or [`BrokerCredentials`] by reference instead of
/// reaching for a global.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    wifi_ssid: String<WIFI_SSID_MAX>,
    wifi_psk: String<WIFI_PSK_MAX>,
    mqtt_hostname: String<MQTT_HOSTNAME_BUF>,
    mqtt_port: u16,
    mqtt_username: String<MQTT_USERNAME_MAX>,
    mqtt_password: String<MQTT_PASSWORD_MAX>,
    ifttt_maker_url: String<IFTTT_MAKER_URL_MAX>,
}

/// What the Wi-Fi station needs to associate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials<'a> {
    pub ssid: &'a str,
    pub psk: &'a str,
}

/// What an MQTT client needs to reach and authenticate with the broker.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BrokerCredentials<'a> {
    pub hostname: &'a str,
    pub port: u16,
    pub username: &'a str,
    pub password: &'a str,
}

impl DeviceConfig {
    /// Validates the configuration embedded at build time.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::from_raw(&RAW_CONFIG) {
            Ok(config) => {
                info!("Device configuration loaded: {}", config);
                Ok(config)
            }
            Err(e) => {
                error!("Device configuration rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Validates settings from any trusted source.
    ///
    /// Fields are checked in declaration order and the first failure wins.
    pub fn from_raw(raw: &RawConfig<'_>) -> Result<Self, ConfigError> {
        let wifi_ssid = required(raw.wifi_ssid, Field::WifiSsid)?;
        let wifi_psk = required(raw.wifi_psk, Field::WifiPsk)?;

        let mqtt_hostname: String<MQTT_HOSTNAME_BUF> =
            required(raw.mqtt_hostname.trim(), Field::MqttHostname)?;
        if !is_valid_hostname(&mqtt_hostname) {
            return Err(ConfigError::InvalidHostname);
        }

        if raw.mqtt_port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        let mqtt_username = required(raw.mqtt_username, Field::MqttUsername)?;
        let mqtt_password = required(raw.mqtt_password, Field::MqttPassword)?;
        let ifttt_maker_url = required(raw.ifttt_maker_url.trim(), Field::IftttMakerUrl)?;

        Ok(Self {
            wifi_ssid,
            wifi_psk,
            mqtt_hostname,
            mqtt_port: raw.mqtt_port,
            mqtt_username,
            mqtt_password,
            ifttt_maker_url,
        })
    }

    pub fn wifi_ssid(&self) -> &str {
        &self.wifi_ssid
    }

    pub fn wifi_psk(&self) -> &str {
        &self.wifi_psk
    }

    pub fn mqtt_hostname(&self) -> &str {
        &self.mqtt_hostname
    }

    pub fn mqtt_port(&self) -> u16 {
        self.mqtt_port
    }

    pub fn mqtt_username(&self) -> &str {
        &self.mqtt_username
    }

    pub fn mqtt_password(&self) -> &str {
        &self.mqtt_password
    }

    pub fn ifttt_maker_url(&self) -> &str {
        &self.ifttt_maker_url
    }

    pub fn wifi(&self) -> WifiCredentials<'_> {
        WifiCredentials {
            ssid: &self.wifi_ssid,
            psk: &self.wifi_psk,
        }
    }

    pub fn broker(&self) -> BrokerCredentials<'_> {
        BrokerCredentials {
            hostname: &self.mqtt_hostname,
            port: self.mqtt_port,
            username: &self.mqtt_username,
            password: &self.mqtt_password,
        }
    }

    /// Resolves the webhook template for one maker event.
    pub fn render_webhook_url(
        &self,
        event: &str,
        channel_key: &str,
    ) -> Result<WebhookUrl, ConfigError> {
        webhook::render(&self.ifttt_maker_url, event, channel_key)
    }
}

fn required<const N: usize>(value: &str, field: Field) -> Result<String<N>, ConfigError> {
    if is_placeholder(value) {
        return Err(ConfigError::MissingField(field));
    }
    String::<N>::from_str(value).map_err(|_| ConfigError::FieldTooLong(field))
}

impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_psk", &REDACTED)
            .field("mqtt_hostname", &self.mqtt_hostname)
            .field("mqtt_port", &self.mqtt_port)
            .field("mqtt_username", &self.mqtt_username)
            .field("mqtt_password", &REDACTED)
            .field("ifttt_maker_url", &self.ifttt_maker_url)
            .finish()
    }
}

impl fmt::Display for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ssid={} broker={}:{} user={}",
            self.wifi_ssid, self.mqtt_hostname, self.mqtt_port, self.mqtt_username
        )
    }
}

impl fmt::Debug for WifiCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("psk", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for BrokerCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerCredentials")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

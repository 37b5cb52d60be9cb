use core::fmt;

use crate::constants::{MAKER_EVENT_TOKEN, MAKER_KEY_TOKEN, PLACEHOLDER_SENTINEL};

/// Identifies one configuration value, for diagnostics that must not carry
/// the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WifiSsid,
    WifiPsk,
    MqttHostname,
    MqttPort,
    MqttUsername,
    MqttPassword,
    IftttMakerUrl,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::WifiSsid,
        Field::WifiPsk,
        Field::MqttHostname,
        Field::MqttPort,
        Field::MqttUsername,
        Field::MqttPassword,
        Field::IftttMakerUrl,
    ];

    /// Key used in `cfg.toml`.
    pub const fn name(self) -> &'static str {
        match self {
            Field::WifiSsid => "wifi_ssid",
            Field::WifiPsk => "wifi_psk",
            Field::MqttHostname => "mqtt_hostname",
            Field::MqttPort => "mqtt_port",
            Field::MqttUsername => "mqtt_username",
            Field::MqttPassword => "mqtt_password",
            Field::IftttMakerUrl => "ifttt_maker_url",
        }
    }

    /// Environment variable that overrides the key at build time.
    pub const fn env_var(self) -> &'static str {
        match self {
            Field::WifiSsid => "WIFI_SSID",
            Field::WifiPsk => "WIFI_PSK",
            Field::MqttHostname => "MQTT_HOSTNAME",
            Field::MqttPort => "MQTT_PORT",
            Field::MqttUsername => "MQTT_USERNAME",
            Field::MqttPassword => "MQTT_PASSWORD",
            Field::IftttMakerUrl => "IFTTT_MAKER_URL",
        }
    }

    pub const fn is_secret(self) -> bool {
        matches!(self, Field::WifiPsk | Field::MqttPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `value` was never filled in: blank, the `xxx` sentinel,
/// or one of the maker tokens copied verbatim from the example config.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || [PLACEHOLDER_SENTINEL, MAKER_EVENT_TOKEN, MAKER_KEY_TOKEN]
            .iter()
            .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

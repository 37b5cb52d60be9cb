/// Unvalidated connection settings as handed over by a trusted source.
///
/// The embedded [`RAW_CONFIG`] is generated by `build.rs` from `cfg.toml` (or
/// `cfg.toml.example`) plus environment overrides. Anything else that can
/// produce these borrowed strings, such as a secret file read at provisioning
/// time, can build one by hand and pass it to
/// [`DeviceConfig::from_raw`](crate::DeviceConfig::from_raw).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawConfig<'a> {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'a str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'a str,

    // MQTT broker hostname or IP address
    pub mqtt_hostname: &'a str,

    // MQTT port (usually 1883 or 8883 for TLS)
    pub mqtt_port: u16,

    // MQTT username for authentication (Adafruit IO username)
    pub mqtt_username: &'a str,

    // MQTT password for authentication (Adafruit IO key)
    pub mqtt_password: &'a str,

    // IFTTT Maker Webhooks URL template with the event and key tokens
    pub ifttt_maker_url: &'a str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

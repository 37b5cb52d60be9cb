/// Maximum SSID length allowed by 802.11
pub const WIFI_SSID_MAX: usize = 32;
/// Maximum WPA2 passphrase length (63 chars, or 64 hex digits)
pub const WIFI_PSK_MAX: usize = 64;

/// Maximum length of a DNS hostname
pub const MQTT_HOSTNAME_MAX: usize = 253;
/// Room for a maximum-length hostname plus its trailing dot
pub const MQTT_HOSTNAME_BUF: usize = MQTT_HOSTNAME_MAX + 1;
/// Maximum length of a DNS label
pub const HOSTNAME_LABEL_MAX: usize = 63;
pub const MQTT_USERNAME_MAX: usize = 64;
pub const MQTT_PASSWORD_MAX: usize = 64;

/// Maximum length of the stored webhook template
pub const IFTTT_MAKER_URL_MAX: usize = 256;
/// Maximum length of a rendered webhook URL
pub const WEBHOOK_URL_MAX: usize = 384;

/// Managed broker used when `mqtt_hostname` is left at its default
pub const DEFAULT_MQTT_HOSTNAME: &str = "io.adafruit.com";
pub const DEFAULT_MQTT_PORT: u16 = 1883;

/// Token replaced by the maker event name
pub const MAKER_EVENT_TOKEN: &str = "<Name of your Maker Event>";
/// Token replaced by the maker channel key
pub const MAKER_KEY_TOKEN: &str = "<Your Maker Channel Key>";

pub const DEFAULT_IFTTT_MAKER_URL: &str =
    "https://maker.ifttt.com/trigger/<Name of your Maker Event>/with/key/<Your Maker Channel Key>";

/// Sentinel shipped in `cfg.toml.example` for values the user must fill in
pub const PLACEHOLDER_SENTINEL: &str = "xxx";

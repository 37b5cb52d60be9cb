use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

const DEFAULT_MQTT_HOSTNAME: &str = "io.adafruit.com";
const DEFAULT_MQTT_PORT: u16 = 1883;
const DEFAULT_IFTTT_MAKER_URL: &str =
    "https://maker.ifttt.com/trigger/<Name of your Maker Event>/with/key/<Your Maker Channel Key>";

const OVERRIDES: [&str; 7] = [
    "WIFI_SSID",
    "WIFI_PSK",
    "MQTT_HOSTNAME",
    "MQTT_PORT",
    "MQTT_USERNAME",
    "MQTT_PASSWORD",
    "IFTTT_MAKER_URL",
];

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    wifi_ssid: String,
    #[serde(default)]
    wifi_psk: String,
    #[serde(default = "default_mqtt_hostname")]
    mqtt_hostname: String,
    #[serde(default = "default_mqtt_port")]
    mqtt_port: u16,
    #[serde(default)]
    mqtt_username: String,
    #[serde(default)]
    mqtt_password: String,
    #[serde(default = "default_ifttt_maker_url")]
    ifttt_maker_url: String,
}

fn default_mqtt_hostname() -> String {
    DEFAULT_MQTT_HOSTNAME.to_string()
}

fn default_mqtt_port() -> u16 {
    DEFAULT_MQTT_PORT
}

fn default_ifttt_maker_url() -> String {
    DEFAULT_IFTTT_MAKER_URL.to_string()
}

// Environment variables win over cfg.toml
fn apply_overrides(raw: &mut RawConfig) -> Result<(), Box<dyn Error>> {
    if let Ok(v) = env::var("WIFI_SSID") {
        raw.wifi_ssid = v;
    }
    if let Ok(v) = env::var("WIFI_PSK") {
        raw.wifi_psk = v;
    }
    if let Ok(v) = env::var("MQTT_HOSTNAME") {
        raw.mqtt_hostname = v;
    }
    if let Ok(v) = env::var("MQTT_PORT") {
        raw.mqtt_port = v
            .trim()
            .parse()
            .map_err(|e| format!("MQTT_PORT is not a valid port: {e}"))?;
    }
    if let Ok(v) = env::var("MQTT_USERNAME") {
        raw.mqtt_username = v;
    }
    if let Ok(v) = env::var("MQTT_PASSWORD") {
        raw.mqtt_password = v;
    }
    if let Ok(v) = env::var("IFTTT_MAKER_URL") {
        raw.ifttt_maker_url = v;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml or any override changes
    println!("cargo:rerun-if-changed=cfg.toml");
    println!("cargo:rerun-if-changed=cfg.toml.example");
    for var in OVERRIDES {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    let cfg_path = Path::new(&manifest_dir).join("cfg.toml");
    let cfg_path = if cfg_path.exists() {
        cfg_path
    } else {
        println!("cargo:warning=cfg.toml not found, using cfg.toml.example placeholders");
        Path::new(&manifest_dir).join("cfg.toml.example")
    };

    // Read and parse
    let toml_str = fs::read_to_string(&cfg_path)?;
    let mut raw: RawConfig = toml::from_str(&toml_str)?;
    apply_overrides(&mut raw)?;

    // Generate Rust code
    let code = format!(
        r#"
        pub const RAW_CONFIG: RawConfig<'static> = RawConfig {{
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            mqtt_hostname: {mh:?},
            mqtt_port: {mp},
            mqtt_username: {mu:?},
            mqtt_password: {mpw:?},
            ifttt_maker_url: {url:?},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        mh = raw.mqtt_hostname,
        mp = raw.mqtt_port,
        mu = raw.mqtt_username,
        mpw = raw.mqtt_password,
        url = raw.ifttt_maker_url,
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}

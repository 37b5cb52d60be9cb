use iot_container::constants::{DEFAULT_IFTTT_MAKER_URL, DEFAULT_MQTT_HOSTNAME, DEFAULT_MQTT_PORT};
use iot_container::{ConfigError, DeviceConfig, Field, Placeholder, RawConfig, RAW_CONFIG};

const PSK: &str = "s3cret-passphrase";
const AIO_KEY: &str = "aio_TOKEN_4711";

fn raw() -> RawConfig<'static> {
    RawConfig {
        wifi_ssid: "Workshop",
        wifi_psk: PSK,
        mqtt_hostname: DEFAULT_MQTT_HOSTNAME,
        mqtt_port: DEFAULT_MQTT_PORT,
        mqtt_username: "maker",
        mqtt_password: AIO_KEY,
        ifttt_maker_url: DEFAULT_IFTTT_MAKER_URL,
    }
}

#[test]
fn distributed_example_is_rejected() {
    let example = RawConfig {
        wifi_ssid: "xxx",
        wifi_psk: "xxx",
        mqtt_hostname: "io.adafruit.com",
        mqtt_port: 1883,
        mqtt_username: "xxx",
        mqtt_password: "xxx",
        ifttt_maker_url: DEFAULT_IFTTT_MAKER_URL,
    };
    assert_eq!(
        DeviceConfig::from_raw(&example),
        Err(ConfigError::MissingField(Field::WifiSsid))
    );
}

#[test]
fn loading_is_deterministic() {
    let a = DeviceConfig::from_raw(&raw()).unwrap();
    let b = DeviceConfig::from_raw(&raw()).unwrap();
    assert_eq!(a, b);

    // whatever cfg.toml held at build time, two loads agree
    assert_eq!(DeviceConfig::load(), DeviceConfig::load());
    assert_eq!(DeviceConfig::load(), DeviceConfig::from_raw(&RAW_CONFIG));
}

#[test]
fn reads_are_idempotent() {
    let config = DeviceConfig::from_raw(&raw()).unwrap();
    let snapshot = config.clone();

    for _ in 0..5 {
        assert_eq!(config.wifi_ssid(), "Workshop");
        assert_eq!(config.mqtt_password(), AIO_KEY);
        let _ = config.render_webhook_url("MyEvent", "abc123");
        let _ = config.render_webhook_url("", "abc123");
    }
    assert_eq!(config, snapshot);
}

#[test]
fn webhook_contract() {
    let config = DeviceConfig::from_raw(&raw()).unwrap();
    assert_eq!(
        config.render_webhook_url("MyEvent", "abc123").unwrap().as_str(),
        "https://maker.ifttt.com/trigger/MyEvent/with/key/abc123"
    );

    let mut no_key = raw();
    no_key.ifttt_maker_url = "https://maker.ifttt.com/trigger/<Name of your Maker Event>/with/key/abc123";
    let config = DeviceConfig::from_raw(&no_key).unwrap();
    assert_eq!(
        config.render_webhook_url("MyEvent", "abc123"),
        Err(ConfigError::MalformedTemplate(Placeholder::Key))
    );
}

#[test]
fn secrets_never_reach_error_text() {
    let mut bad_host = raw();
    bad_host.mqtt_hostname = "not a host";
    let mut no_user = raw();
    no_user.mqtt_username = "";
    let mut long_psk = raw();
    let psk = "p".repeat(65);
    long_psk.wifi_psk = &psk;

    let errors = [
        DeviceConfig::from_raw(&bad_host).unwrap_err(),
        DeviceConfig::from_raw(&no_user).unwrap_err(),
        DeviceConfig::from_raw(&long_psk).unwrap_err(),
        DeviceConfig::from_raw(&raw())
            .unwrap()
            .render_webhook_url("a b", AIO_KEY)
            .unwrap_err(),
    ];

    for e in errors {
        let text = format!("{} {:?}", e, e);
        assert!(!text.contains(PSK), "{}", text);
        assert!(!text.contains(AIO_KEY), "{}", text);
        assert!(!text.contains(&psk), "{}", text);
    }
    assert_eq!(errors[2], ConfigError::FieldTooLong(Field::WifiPsk));
}

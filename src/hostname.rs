use crate::constants::{HOSTNAME_LABEL_MAX, MQTT_HOSTNAME_MAX};

/// Checks that `host` is a usable RFC 1123 hostname.
/// Accepts names like "io.adafruit.com", "broker.local." and dotted IPv4
/// literals such as "192.168.1.10".
pub fn is_valid_hostname(host: &str) -> bool {
    // A single trailing dot marks a fully qualified name
    let host = host.strip_suffix('.').unwrap_or(host);

    if host.is_empty() || host.len() > MQTT_HOSTNAME_MAX {
        return false;
    }

    host.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > HOSTNAME_LABEL_MAX {
        return false;
    }

    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_hosts() {
        assert!(is_valid_hostname("io.adafruit.com"));
        assert!(is_valid_hostname("localhost"));
        assert!(is_valid_hostname("broker.local."));
        assert!(is_valid_hostname("mqtt-1.example.org"));
        assert!(is_valid_hostname("192.168.1.10"));
    }

    #[test]
    fn rejects_malformed_hosts() {
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("."));
        assert!(!is_valid_hostname("io..adafruit.com"));
        assert!(!is_valid_hostname("-io.adafruit.com"));
        assert!(!is_valid_hostname("io-.adafruit.com"));
        assert!(!is_valid_hostname("io adafruit.com"));
        assert!(!is_valid_hostname("mqtt://io.adafruit.com"));
        assert!(!is_valid_hostname("io.adafruit.com:1883"));
        assert!(!is_valid_hostname("bröker.example"));
    }

    #[test]
    fn enforces_length_limits() {
        let label = "a".repeat(HOSTNAME_LABEL_MAX);
        assert!(is_valid_hostname(&label));
        assert!(!is_valid_hostname(&"a".repeat(HOSTNAME_LABEL_MAX + 1)));

        // 4 * 63 + 3 dots = 255
        let long = [label.as_str(); 4].join(".");
        assert!(!is_valid_hostname(&long));
    }
}

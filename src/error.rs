use core::fmt;

use crate::field::Field;
use crate::webhook::Placeholder;

/// Everything that can go wrong while loading the configuration or
/// rendering the webhook URL.
///
/// Variants name the offending field or token, never its value, so the
/// error can be logged even when the field is a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Required value is empty or still holds its placeholder
    MissingField(Field),
    /// Value does not fit its fixed-capacity buffer
    FieldTooLong(Field),
    InvalidHostname,
    InvalidPort,
    /// Webhook template lacks the given token
    MalformedTemplate(Placeholder),
    /// Caller-supplied value for the given token is unusable in a URL path
    InvalidSegment(Placeholder),
    /// Rendered URL still contains `<` or `>`
    UnresolvedPlaceholder,
    UrlTooLong,
    AlreadyProvisioned,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(field) => write!(
                f,
                "missing configuration value `{}` (set it in cfg.toml or {})",
                field,
                field.env_var()
            ),
            ConfigError::FieldTooLong(field) => {
                write!(f, "configuration value `{}` is too long", field)
            }
            ConfigError::InvalidHostname => write!(
                f,
                "configuration value `{}` is not a valid hostname",
                Field::MqttHostname
            ),
            ConfigError::InvalidPort => {
                write!(f, "configuration value `{}` must be non-zero", Field::MqttPort)
            }
            ConfigError::MalformedTemplate(token) => write!(
                f,
                "`{}` template lacks the {} placeholder",
                Field::IftttMakerUrl,
                token
            ),
            ConfigError::InvalidSegment(token) => {
                write!(f, "invalid value supplied for the {} placeholder", token)
            }
            ConfigError::UnresolvedPlaceholder => write!(
                f,
                "`{}` still contains an unknown <...> placeholder",
                Field::IftttMakerUrl
            ),
            ConfigError::UrlTooLong => f.write_str("rendered webhook URL is too long"),
            ConfigError::AlreadyProvisioned => f.write_str("device configuration already provisioned"),
        }
    }
}

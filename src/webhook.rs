use core::fmt;

use heapless::String;

use crate::constants::{MAKER_EVENT_TOKEN, MAKER_KEY_TOKEN, WEBHOOK_URL_MAX};
use crate::error::ConfigError;
use crate::field::is_placeholder;

/// A fully resolved IFTTT Maker Webhooks URL
pub type WebhookUrl = String<WEBHOOK_URL_MAX>;

/// The two tokens a webhook template must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Event,
    Key,
}

impl Placeholder {
    pub const fn token(self) -> &'static str {
        match self {
            Placeholder::Event => MAKER_EVENT_TOKEN,
            Placeholder::Key => MAKER_KEY_TOKEN,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Substitutes `event` and `channel_key` into `template`.
///
/// Both tokens must be present in the template, and every occurrence is
/// replaced. The substituted values must be real path segments: not a
/// placeholder, and free of `/`, `<`, `>` and whitespace.
pub fn render(template: &str, event: &str, channel_key: &str) -> Result<WebhookUrl, ConfigError> {
    for placeholder in [Placeholder::Event, Placeholder::Key] {
        if !template.contains(placeholder.token()) {
            return Err(ConfigError::MalformedTemplate(placeholder));
        }
    }

    check_segment(event, Placeholder::Event)?;
    check_segment(channel_key, Placeholder::Key)?;

    let mut url = WebhookUrl::new();
    let mut rest = template;

    while let Some(start) = rest.find('<') {
        let (head, tail) = rest.split_at(start);
        push(&mut url, head)?;

        if let Some(after) = tail.strip_prefix(MAKER_EVENT_TOKEN) {
            push(&mut url, event)?;
            rest = after;
        } else if let Some(after) = tail.strip_prefix(MAKER_KEY_TOKEN) {
            push(&mut url, channel_key)?;
            rest = after;
        } else {
            // unknown token, caught below
            push(&mut url, "<")?;
            rest = &tail[1..];
        }
    }
    push(&mut url, rest)?;

    if url.contains(['<', '>']) {
        return Err(ConfigError::UnresolvedPlaceholder);
    }

    Ok(url)
}

fn check_segment(value: &str, placeholder: Placeholder) -> Result<(), ConfigError> {
    let invalid = is_placeholder(value)
        || value
            .chars()
            .any(|c| c == '/' || c == '<' || c == '>' || c.is_whitespace());

    if invalid {
        return Err(ConfigError::InvalidSegment(placeholder));
    }
    Ok(())
}

fn push(url: &mut WebhookUrl, s: &str) -> Result<(), ConfigError> {
    url.push_str(s).map_err(|_| ConfigError::UrlTooLong)
}

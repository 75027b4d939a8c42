//! CAPTCHA token settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaptchaConfig {
    /// Verification token used when a command is not given one explicitly.
    /// Useful against staging backends that accept a fixed test token.
    #[serde(default)]
    pub token: String,
}

impl CaptchaConfig {
    /// Pick the explicit token if given, else the configured one.
    #[must_use]
    pub fn resolve<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit
            .filter(|token| !token.trim().is_empty())
            .or_else(|| Some(self.token.as_str()).filter(|token| !token.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_token_wins() {
        let config = CaptchaConfig {
            token: "configured".into(),
        };
        assert_eq!(config.resolve(Some("explicit")), Some("explicit"));
        assert_eq!(config.resolve(Some("  ")), Some("configured"));
        assert_eq!(config.resolve(None), Some("configured"));
    }

    #[test]
    fn nothing_configured() {
        assert_eq!(CaptchaConfig::default().resolve(None), None);
    }
}

use lewis_config::LewisConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `lws config`. The CAPTCHA token is masked.
pub fn handle(config: &LewisConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&redacted(config), flags.format)
}

fn redacted(config: &LewisConfig) -> LewisConfig {
    let mut shown = config.clone();
    if !shown.captcha.token.is_empty() {
        shown.captcha.token = String::from("********");
    }
    shown
}

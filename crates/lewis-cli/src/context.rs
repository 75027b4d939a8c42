use lewis_client::ApiClient;
use lewis_config::LewisConfig;
use lewis_feed::ViewTracker;

/// Shared resources initialized once per invocation.
pub struct AppContext {
    pub config: LewisConfig,
    pub client: ApiClient,
    /// Records viewed in this session; each is logged at most once.
    pub views: ViewTracker,
}

impl AppContext {
    pub fn init(config: LewisConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api)?;
        tracing::debug!(base_url = client.base_url(), "api client ready");
        Ok(Self {
            config,
            client,
            views: ViewTracker::new(),
        })
    }

    pub fn page_size(&self, global: Option<u32>) -> u32 {
        crate::commands::shared::limit::effective_limit(None, global, self.config.listing.page_size)
    }
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LewisConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LewisConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = LewisConfig::default();
    let mut warnings = Vec::new();

    for (section, untouched) in [
        ("API", config.api.base_url == defaults.api.base_url),
        ("LISTING", config.listing.page_size == defaults.listing.page_size),
        ("CAPTCHA", config.captcha.token.is_empty()),
    ] {
        let single = format!("LEWIS_{section}_");
        let double = format!("LEWIS_{section}__");
        let mistyped = env_keys
            .iter()
            .any(|key| key.starts_with(&single) && !key.starts_with(&double));
        if untouched && mistyped {
            warnings.push(format!(
                "{section} config appears default while {single}* env vars exist. \
                 Use double underscores (example: {double}{}).",
                example_key(section)
            ));
        }
    }
    warnings
}

fn example_key(section: &str) -> &'static str {
    match section {
        "API" => "BASE_URL",
        "LISTING" => "PAGE_SIZE",
        _ => "TOKEN",
    }
}

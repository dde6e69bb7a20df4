use crate::client::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";

/// Backend locations, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub geocoding_url: String,
    pub user_search_url: String,
}

impl Config {
    /// Reads `MEETMAP_API_URL`, `MEETMAP_GEOCODING_URL` and `MEETMAP_USER_SEARCH_URL` from the
    /// build environment, falling back to the local defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "MEETMAP_API_URL" => option_env!("MEETMAP_API_URL").map(str::to_string),
            "MEETMAP_GEOCODING_URL" => option_env!("MEETMAP_GEOCODING_URL").map(str::to_string),
            "MEETMAP_USER_SEARCH_URL" => {
                option_env!("MEETMAP_USER_SEARCH_URL").map(str::to_string)
            }
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str, default: &str| -> Result<String, ConfigError> {
            match lookup(var).filter(|value| !value.trim().is_empty()) {
                Some(value) => validate_url(var, &value),
                None => Ok(default.to_string()),
            }
        };

        let api_url = read("MEETMAP_API_URL", DEFAULT_API_URL)?;
        let geocoding_url = read("MEETMAP_GEOCODING_URL", DEFAULT_GEOCODING_URL)?;
        let user_search_url = read(
            "MEETMAP_USER_SEARCH_URL",
            &format!("{}/users/search", api_url),
        )?;

        Ok(Self {
            api_url,
            geocoding_url,
            user_search_url,
        })
    }

    /// Absolute URL of a backend path such as `/events/1`.
    pub fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn validate_url(var: &str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim().trim_end_matches('/');
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(value.to_string()),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("{:?} is not an absolute http(s) URL", value),
        }),
    }
}

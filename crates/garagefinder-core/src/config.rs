use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Google News RSS searches used for the automotive news strip.
pub const DEFAULT_NEWS_FEEDS: &[&str] = &[
    "https://news.google.com/rss/search?q=UAE+cars+automotive&hl=en-AE&gl=AE&ceid=AE:en",
    "https://news.google.com/rss/search?q=Dubai+traffic+RTA+motorists&hl=en-AE&gl=AE&ceid=AE:en",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Nothing is strictly required: both API keys are optional and every other
/// setting has a default.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values count as unset so `.env` templates with `KEY=` don't
    // enable a provider with an empty key.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("GARAGEFINDER_ENV", "development"))?;
    let bind_addr = parse_addr("GARAGEFINDER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("GARAGEFINDER_LOG_LEVEL", "info");

    let google_maps_api_key = optional("GOOGLE_MAPS_API_KEY");
    let gemini_api_key = optional("GEMINI_API_KEY");
    let gemini_model = or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);

    let places_base_url = or_default("GARAGEFINDER_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let gemini_base_url = or_default("GARAGEFINDER_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);

    let news_feed_urls = match optional("GARAGEFINDER_NEWS_FEEDS") {
        Some(raw) => parse_feed_list(&raw),
        None => DEFAULT_NEWS_FEEDS.iter().map(ToString::to_string).collect(),
    };

    let regions_path = optional("GARAGEFINDER_REGIONS_PATH").map(PathBuf::from);

    let http_timeout_secs = parse_u64("GARAGEFINDER_HTTP_TIMEOUT_SECS", "30")?;
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GARAGEFINDER_HTTP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("GARAGEFINDER_USER_AGENT", "garagefinder/0.1 (uae-directory)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        google_maps_api_key,
        gemini_api_key,
        gemini_model,
        places_base_url,
        gemini_base_url,
        news_feed_urls,
        regions_path,
        http_timeout_secs,
        user_agent,
    })
}

fn parse_feed_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GARAGEFINDER_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

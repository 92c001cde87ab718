use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the server listens on.
    pub port: u16,
    /// Upstream HTML search endpoint.
    pub upstream_endpoint: String,
    /// Timeout for one upstream fetch.
    pub upstream_timeout: Duration,
    /// Pause before each upstream request.
    pub courtesy_delay: Duration,
    /// Directory served as the site root (the search page).
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: env_parse("SIFT_PORT", 8080)?,
            upstream_endpoint: env_or("SIFT_UPSTREAM_ENDPOINT", sift_local::fetch::DEFAULT_ENDPOINT),
            upstream_timeout: Duration::from_millis(env_parse(
                "SIFT_UPSTREAM_TIMEOUT_MS",
                30_000u64,
            )?),
            courtesy_delay: Duration::from_millis(env_parse("SIFT_COURTESY_DELAY_MS", 1_000u64)?),
            static_dir: env_or("SIFT_STATIC_DIR", "static"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {key}: {e}")),
        Err(_) => Ok(default),
    }
}

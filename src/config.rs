use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro-latest";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_TIMEOUT_MS: u64 = 20_000;

/// Backend address baked in at compile time, if the build environment set one.
const BUILD_BACKEND_URL: Option<&str> = option_env!("CAPTION_BACKEND_URL");

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub caption_backend_url: String,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_ms: DEFAULT_GEMINI_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", "port number", DEFAULT_PORT)?;

        let caption_backend_url = non_empty(lookup("CAPTION_BACKEND_URL"))
            .or_else(|| BUILD_BACKEND_URL.map(str::to_string))
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}/generate-caption/"));

        let gemini = GeminiSettings {
            api_key: non_empty(lookup("GEMINI_API_KEY")),
            model: non_empty(lookup("GEMINI_MODEL"))
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: non_empty(lookup("GEMINI_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            timeout_ms: parse_or(
                &lookup,
                "GEMINI_TIMEOUT_MS",
                "millisecond count",
                DEFAULT_GEMINI_TIMEOUT_MS,
            )?,
        };

        Ok(Self {
            port,
            caption_backend_url,
            gemini,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_empty(lookup(name)) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}

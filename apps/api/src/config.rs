use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Fixed seed for retro tilt and custom scatter. Random per request when unset.
    pub layout_seed: Option<u64>,
    /// Skip network image fetches and use placeholder image data.
    pub offline_images: bool,
    /// Overrides the default font catalog when set.
    pub available_fonts: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            canvas_width: 1920.0,
            canvas_height: 1080.0,
            layout_seed: None,
            offline_images: false,
            available_fonts: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            canvas_width: canvas_dimension(
                "CANVAS_WIDTH",
                parse_env("CANVAS_WIDTH", defaults.canvas_width)?,
            )?,
            canvas_height: canvas_dimension(
                "CANVAS_HEIGHT",
                parse_env("CANVAS_HEIGHT", defaults.canvas_height)?,
            )?,
            layout_seed: optional_env("LAYOUT_SEED")
                .map(|raw| {
                    raw.parse::<u64>()
                        .context("LAYOUT_SEED must be an unsigned integer")
                })
                .transpose()?,
            offline_images: parse_env("OFFLINE_IMAGES", defaults.offline_images)?,
            available_fonts: optional_env("AVAILABLE_FONTS").map(|raw| parse_font_list(&raw)),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

/// Canvas sides must be finite and positive; `f32` parsing also accepts `inf` and `NaN`.
fn canvas_dimension(key: &str, value: f32) -> Result<f32> {
    if !value.is_finite() || value <= 0.0 {
        bail!("Environment variable '{key}' must be a finite positive number, got {value}");
    }
    Ok(value)
}

fn parse_font_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|family| !family.is_empty())
        .map(str::to_string)
        .collect()
}

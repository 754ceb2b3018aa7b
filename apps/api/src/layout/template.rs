//! Moodboard templates and their per-template constants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::layout::element::Rgb;

/// Named layout strategy. Unknown names fall back to `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Template {
    #[default]
    Minimalist,
    Luxury,
    Retro,
    Custom,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Minimalist,
        Template::Luxury,
        Template::Retro,
        Template::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Minimalist => "minimalist",
            Template::Luxury => "luxury",
            Template::Retro => "retro",
            Template::Custom => "custom",
        }
    }

    /// Case-insensitive, never fails.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimalist" => Template::Minimalist,
            "luxury" => Template::Luxury,
            "retro" => Template::Retro,
            _ => Template::Custom,
        }
    }

    /// Canvas background fill.
    pub fn background(&self) -> Rgb {
        match self {
            Template::Minimalist => Rgb::WHITE,
            Template::Luxury => Rgb::gray(0.06),
            Template::Retro => Rgb::new(0.98, 0.95, 0.90),
            Template::Custom => Rgb::gray(0.98),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Template::parse(&name))
    }
}

//! Placeable moodboard nodes — images, color swatches and text samples.
//!
//! Each variant carries only the style fields its node type needs. The layout
//! engine mutates geometry and style in place; it never creates or drops elements.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::text_metrics;

// ────────────────────────────────────────────────────────────────────────────
// Primitive types
// ────────────────────────────────────────────────────────────────────────────

/// Stable identity of a node in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        NodeId(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Position, size and rotation of a node. Rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

impl Geometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Geometry {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True if the unrotated bounds lie inside `[min_x, max_x] × [min_y, max_y]`.
    pub fn within(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> bool {
        const EPS: f32 = 1e-3;
        self.x >= min_x - EPS
            && self.y >= min_y - EPS
            && self.right() <= max_x + EPS
            && self.bottom() <= max_y + EPS
    }
}

/// RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Rgb::new(level, level, level)
    }

    /// `#rrggbb`, channels clamped before conversion.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// CSS `rgba(r,g,b,a)` with 0-255 channels.
    pub fn to_rgba(&self, alpha: f32) -> String {
        let [r, g, b] = self.to_bytes();
        format!("rgba({r},{g},{b},{})", alpha.clamp(0.0, 1.0))
    }

    fn to_bytes(&self) -> [u8; 3] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

/// Solid fill with opacity, as used by auxiliary rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidFill {
    pub color: Rgb,
    pub opacity: f32,
}

/// Drop-shadow effect. `alpha` is the shadow color's opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn regular(family: impl Into<String>) -> Self {
        FontName {
            family: family.into(),
            style: "Regular".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Element variants
// ────────────────────────────────────────────────────────────────────────────

/// An image placeholder frame filled with a fetched image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFrame {
    pub id: NodeId,
    pub name: String,
    pub source_url: String,
    /// Handle of the fetched image data, assigned by the fetcher.
    pub image_ref: Uuid,
    pub byte_len: usize,
    pub content_type: Option<String>,
    pub geometry: Geometry,
}

/// A fixed-size colored shape representing one palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub id: NodeId,
    pub name: String,
    pub color: Rgb,
    pub corner_radius: f32,
    pub shadow: Option<DropShadow>,
    pub geometry: Geometry,
}

/// A text node showing a font's name followed by sample glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSample {
    pub id: NodeId,
    pub name: String,
    pub font: FontName,
    pub characters: String,
    pub font_size: f32,
    pub align: TextAlign,
    pub color: Rgb,
    pub geometry: Geometry,
}

impl TextSample {
    /// The first line of the displayed text, which always holds the font name.
    pub fn font_label(&self) -> &str {
        self.characters.lines().next().unwrap_or("")
    }

    /// Replaces everything after the font-name line with `sample`.
    pub fn set_sample(&mut self, sample: &str) {
        let label = self.font_label().to_string();
        self.characters = format!("{label}\n{sample}");
    }

    /// Sizes the node to its content, like the host's auto width-and-height mode.
    pub fn auto_resize(&mut self) {
        let (width, height) = text_metrics::measure_block(&self.characters, self.font_size);
        self.geometry.resize(width, height);
    }
}

/// Any node the layout engine places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Image(ImageFrame),
    Swatch(ColorSwatch),
    Text(TextSample),
}

impl Element {
    pub fn id(&self) -> NodeId {
        match self {
            Element::Image(image) => image.id,
            Element::Swatch(swatch) => swatch.id,
            Element::Text(text) => text.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Element::Image(image) => &image.name,
            Element::Swatch(swatch) => &swatch.name,
            Element::Text(text) => &text.name,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        match self {
            Element::Image(image) => &image.geometry,
            Element::Swatch(swatch) => &swatch.geometry,
            Element::Text(text) => &text.geometry,
        }
    }
}

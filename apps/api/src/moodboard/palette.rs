//! Template color palettes with per-generation jitter.

use rand::Rng;

use crate::layout::{Rgb, Template};

/// Maximum shift applied to each channel, in either direction.
pub const CHANNEL_JITTER: f32 = 0.05;

const MINIMALIST: [Rgb; 5] = [
    Rgb::gray(0.95), // off white
    Rgb::gray(0.85),
    Rgb::gray(0.65),
    Rgb::gray(0.25),
    Rgb::gray(0.05), // almost black
];

const LUXURY: [Rgb; 5] = [
    Rgb::new(0.98, 0.84, 0.01), // gold
    Rgb::gray(0.15),
    Rgb::gray(0.95),
    Rgb::new(0.55, 0.47, 0.04), // dark gold
    Rgb::gray(0.05),
];

const RETRO: [Rgb; 5] = [
    Rgb::new(0.96, 0.87, 0.70), // cream
    Rgb::new(0.80, 0.30, 0.30), // red
    Rgb::new(0.30, 0.70, 0.50), // mint
    Rgb::new(0.40, 0.50, 0.80), // dusty blue
    Rgb::new(0.90, 0.60, 0.30), // orange
];

/// Base colors for `template`. Custom boards borrow the minimalist grays.
pub fn base_palette(template: Template) -> &'static [Rgb] {
    match template {
        Template::Luxury => &LUXURY,
        Template::Retro => &RETRO,
        Template::Minimalist | Template::Custom => &MINIMALIST,
    }
}

/// Jitters every channel of the base palette and clamps it back into range.
pub fn generate_palette<R: Rng + ?Sized>(template: Template, rng: &mut R) -> Vec<Rgb> {
    let mut jitter = |value: f32| {
        (value + rng.gen_range(-CHANNEL_JITTER..CHANNEL_JITTER)).clamp(0.0, 1.0)
    };
    base_palette(template)
        .iter()
        .map(|c| Rgb::new(jitter(c.r), jitter(c.g), jitter(c.b)))
        .collect()
}

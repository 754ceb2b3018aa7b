//! Approximate text-block metrics for auto-sized text nodes.
//!
//! Widths are in em units relative to the font size. A single average advance
//! is used for every glyph; the host re-measures with real glyph metrics when
//! the node is rendered, so this only has to be close enough to keep the
//! arranged samples inside their sections.

/// Average glyph advance, in em.
pub const AVERAGE_ADVANCE_EM: f32 = 0.6;

/// Line box height, in em.
pub const LINE_HEIGHT_EM: f32 = 1.2;

/// Measures the rendered width of a single line in pixels.
pub fn measure_line(line: &str, font_size: f32) -> f32 {
    line.chars().count() as f32 * AVERAGE_ADVANCE_EM * font_size
}

/// Returns `(width, height)` of a multi-line block. Empty text still occupies one line.
pub fn measure_block(text: &str, font_size: f32) -> (f32, f32) {
    let lines: Vec<&str> = text.split('\n').collect();
    let width = lines
        .iter()
        .map(|line| measure_line(line, font_size))
        .fold(0.0_f32, f32::max);
    let height = lines.len().max(1) as f32 * LINE_HEIGHT_EM * font_size;
    (width, height)
}

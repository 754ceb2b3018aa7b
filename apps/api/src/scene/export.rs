//! Moodboard export — SVG rendering and JSON snapshots of a frame.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::{ColorSwatch, Element, Geometry, ImageFrame, TextAlign, TextSample};
use crate::scene::document::{Frame, Rectangle, SceneNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Svg,
    Json,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Renders `frame` in the requested format.
pub fn export_frame(frame: &Frame, format: ExportFormat) -> Result<String, AppError> {
    match format {
        ExportFormat::Svg => Ok(render_svg(frame)),
        ExportFormat::Json => serde_json::to_string_pretty(&frame.snapshot())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize frame: {e}"))),
    }
}

/// Renders the frame in its own coordinate space. One top-level SVG element per child.
pub fn render_svg(frame: &Frame) -> String {
    let (width, height) = (frame.geometry.width, frame.geometry.height);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(svg, "<title>{}</title>", escape(&frame.name));
    let _ = writeln!(
        svg,
        r#"<rect class="background" width="{width}" height="{height}" fill="{}"/>"#,
        frame.background.to_hex()
    );

    for node in frame.children() {
        match node {
            SceneNode::Element(Element::Image(image)) => write_image(&mut svg, image),
            SceneNode::Element(Element::Swatch(swatch)) => write_swatch(&mut svg, swatch),
            SceneNode::Element(Element::Text(text)) => write_text(&mut svg, text),
            SceneNode::Rectangle(rectangle) => write_rectangle(&mut svg, rectangle),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Host rotation is counter-clockwise around the node origin; SVG's is clockwise.
fn transform(geometry: &Geometry) -> String {
    if geometry.rotation == 0.0 {
        String::new()
    } else {
        format!(
            r#" transform="rotate({} {} {})""#,
            -geometry.rotation, geometry.x, geometry.y
        )
    }
}

fn write_image(svg: &mut String, image: &ImageFrame) {
    let g = &image.geometry;
    let _ = writeln!(
        svg,
        r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"{}/>"#,
        escape(&image.source_url),
        g.x,
        g.y,
        g.width,
        g.height,
        transform(g)
    );
}

fn write_swatch(svg: &mut String, swatch: &ColorSwatch) {
    let g = &swatch.geometry;
    let radius = swatch.corner_radius.min(g.width.min(g.height) / 2.0);
    let shadow = swatch
        .shadow
        .map(|s| {
            format!(
                r#" style="filter: drop-shadow({}px {}px {}px {})""#,
                s.offset_x,
                s.offset_y,
                s.radius / 2.0,
                s.color.to_rgba(s.alpha)
            )
        })
        .unwrap_or_default();
    let _ = writeln!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{}"{shadow}{}/>"#,
        g.x,
        g.y,
        g.width,
        g.height,
        swatch.color.to_hex(),
        transform(g)
    );
}

fn write_text(svg: &mut String, text: &TextSample) {
    let g = &text.geometry;
    let (anchor, x) = match text.align {
        TextAlign::Left => ("start", g.x),
        TextAlign::Center => ("middle", g.x + g.width / 2.0),
        TextAlign::Right => ("end", g.x + g.width),
    };
    let _ = write!(
        svg,
        r#"<text x="{x}" y="{}" font-family="{}" font-size="{}" fill="{}" text-anchor="{anchor}"{}>"#,
        g.y,
        escape(&text.font.family),
        text.font_size,
        text.color.to_hex(),
        transform(g)
    );
    for line in text.characters.split('\n') {
        let _ = write!(
            svg,
            r#"<tspan x="{x}" dy="1.2em">{}</tspan>"#,
            escape(line)
        );
    }
    svg.push_str("</text>\n");
}

fn write_rectangle(svg: &mut String, rectangle: &Rectangle) {
    let g = &rectangle.geometry;
    let _ = writeln!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"{}/>"#,
        g.x,
        g.y,
        g.width,
        g.height,
        rectangle.fill.color.to_hex(),
        rectangle.fill.opacity,
        transform(g)
    );
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

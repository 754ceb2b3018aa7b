//! Template arrangement — places images, swatches and text samples on a canvas.
//!
//! # Templates
//! - Minimalist: 2×2 image grid, swatch row, three-line font samples
//! - Luxury: hero image with dark overlay, three panels, swatch row, white type
//! - Retro: tilted quadrant collage, circular swatches with shadows, centered type
//! - Custom: every element resized with jitter and scattered at random
//!
//! All constants are part of each template's look and must not drift.
//! Routines are total: empty lists and short lists leave the extra slots empty.

use rand::Rng;
use tracing::debug;

use crate::layout::canvas::Canvas;
use crate::layout::element::{
    ColorSwatch, DropShadow, Element, Geometry, ImageFrame, Rgb, SolidFill, TextAlign, TextSample,
};
use crate::layout::template::Template;

/// Inset from every canvas edge, shared by all templates.
pub const PADDING: f32 = 40.0;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

// Minimalist
const MINIMAL_FOOTER: f32 = 200.0;
const MINIMAL_GRID_SLOTS: usize = 4;
const MINIMAL_SWATCH: f32 = 80.0;
const MINIMAL_SWATCH_GAP: f32 = 10.0;
const MINIMAL_FONT_SIZE: f32 = 24.0;

// Luxury
const LUXURY_HERO_HEIGHT: f32 = 0.4;
const LUXURY_PANEL_HEIGHT: f32 = 0.25;
const LUXURY_PANEL_COUNT: usize = 3;
const LUXURY_OVERLAY_OPACITY: f32 = 0.3;
const LUXURY_SWATCH: f32 = 100.0;
const LUXURY_SWATCH_GAP: f32 = 20.0;
const LUXURY_SWATCH_TOP: f32 = 0.7;
const LUXURY_TEXT_TOP: f32 = 0.85;
const LUXURY_FONT_SIZE: f32 = 28.0;

// Retro
/// Maximum collage tilt in either direction, in degrees.
pub const RETRO_MAX_TILT: f32 = 7.5;
pub const RETRO_SWATCH: f32 = 120.0;
const RETRO_SWATCH_GAP: f32 = 20.0;
/// Any radius ≥ half the swatch size renders a full circle.
pub const RETRO_CORNER_RADIUS: f32 = 999.0;
const RETRO_TEXT_FROM_BOTTOM: f32 = 200.0;
const RETRO_FONT_SIZE: f32 = 32.0;
const RETRO_SAMPLE: &str = "Aa Bb Cc";
const RETRO_TEXT_COLOR: Rgb = Rgb::new(0.4, 0.2, 0.1);
const RETRO_SHADOW: DropShadow = DropShadow {
    offset_x: 4.0,
    offset_y: 4.0,
    radius: 8.0,
    color: Rgb::BLACK,
    alpha: 0.25,
};

// Custom
pub const CUSTOM_BASE_SIZE: f32 = 300.0;
pub const CUSTOM_TEXT_BASE_SIZE: f32 = 200.0;
pub const CUSTOM_JITTER: f32 = 100.0;
const CUSTOM_IMAGE_ASPECT: f32 = 0.75;
const CUSTOM_TEXT_WIDTH: f32 = 1.5;
const CUSTOM_FONT_SIZES: std::ops::Range<f32> = 24.0..36.0;

// ────────────────────────────────────────────────────────────────────────────
// Dispatcher
// ────────────────────────────────────────────────────────────────────────────

/// Mutable views of the elements, split by variant in input order.
struct Partition<'a> {
    images: Vec<&'a mut ImageFrame>,
    swatches: Vec<&'a mut ColorSwatch>,
    texts: Vec<&'a mut TextSample>,
}

fn partition(elements: &mut [Element]) -> Partition<'_> {
    let mut parts = Partition {
        images: Vec::new(),
        swatches: Vec::new(),
        texts: Vec::new(),
    };
    for element in elements.iter_mut() {
        match element {
            Element::Image(image) => parts.images.push(image),
            Element::Swatch(swatch) => parts.swatches.push(swatch),
            Element::Text(text) => parts.texts.push(text),
        }
    }
    parts
}

/// Attaches every element to `canvas` and lays them out for `template`.
///
/// Attachment is idempotent: ids the canvas already contains are skipped.
/// Randomness (retro tilt, custom scatter) is drawn only from `rng`.
pub fn arrange_elements<C, R>(
    canvas: &mut C,
    elements: &mut [Element],
    template: Template,
    rng: &mut R,
) where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    for element in elements.iter() {
        let id = element.id();
        if !canvas.contains(id) {
            canvas.append_child(id);
        }
    }

    let Partition {
        mut images,
        mut swatches,
        mut texts,
    } = partition(elements);

    debug!(
        template = %template,
        images = images.len(),
        swatches = swatches.len(),
        texts = texts.len(),
        "Arranging moodboard elements"
    );

    match template {
        Template::Minimalist => arrange_minimalist(&*canvas, &mut images, &mut swatches, &mut texts),
        Template::Luxury => arrange_luxury(canvas, &mut images, &mut swatches, &mut texts),
        Template::Retro => arrange_retro(&*canvas, &mut images, &mut swatches, &mut texts, rng),
        Template::Custom => arrange_custom(&*canvas, &mut images, &mut swatches, &mut texts, rng),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template routines
// ────────────────────────────────────────────────────────────────────────────

/// Width of one text column when `count` samples share the padded canvas width.
fn text_section_width(canvas_width: f32, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        (canvas_width - PADDING * 2.0) / count as f32
    }
}

fn arrange_minimalist<C: Canvas + ?Sized>(
    canvas: &C,
    images: &mut [&mut ImageFrame],
    swatches: &mut [&mut ColorSwatch],
    texts: &mut [&mut TextSample],
) {
    let (width, height) = (canvas.width(), canvas.height());

    let grid_width = (width - PADDING * 3.0) / 2.0;
    let grid_height = (height - PADDING * 3.0 - MINIMAL_FOOTER) / 2.0;
    for (index, image) in images.iter_mut().take(MINIMAL_GRID_SLOTS).enumerate() {
        let row = (index / 2) as f32;
        let col = (index % 2) as f32;
        image.geometry.move_to(
            PADDING + col * (grid_width + PADDING),
            PADDING + row * (grid_height + PADDING),
        );
        image.geometry.resize(grid_width, grid_height);
    }

    let swatch_y = height - PADDING - MINIMAL_SWATCH - 100.0;
    for (index, swatch) in swatches.iter_mut().enumerate() {
        swatch.geometry.move_to(
            PADDING + index as f32 * (MINIMAL_SWATCH + MINIMAL_SWATCH_GAP),
            swatch_y,
        );
        swatch.geometry.resize(MINIMAL_SWATCH, MINIMAL_SWATCH);
    }

    let section = text_section_width(width, texts.len());
    for (index, text) in texts.iter_mut().enumerate() {
        text.geometry
            .move_to(PADDING + index as f32 * section, height - PADDING - 80.0);
        text.font_size = MINIMAL_FONT_SIZE;
        text.align = TextAlign::Left;
        text.set_sample(&format!("{UPPERCASE}\n{LOWERCASE}"));
        text.auto_resize();
    }
}

fn arrange_luxury<C: Canvas + ?Sized>(
    canvas: &mut C,
    images: &mut [&mut ImageFrame],
    swatches: &mut [&mut ColorSwatch],
    texts: &mut [&mut TextSample],
) {
    let (width, height) = (canvas.width(), canvas.height());

    if let Some(hero) = images.first_mut() {
        hero.geometry.move_to(PADDING, PADDING);
        hero.geometry
            .resize(width - PADDING * 2.0, height * LUXURY_HERO_HEIGHT);

        let overlay = hero.geometry;
        canvas.create_rectangle(
            overlay,
            SolidFill {
                color: Rgb::BLACK,
                opacity: LUXURY_OVERLAY_OPACITY,
            },
        );
    }

    let panel_width = (width - PADDING * 4.0) / LUXURY_PANEL_COUNT as f32;
    let panel_height = height * LUXURY_PANEL_HEIGHT;
    let panel_y = height * LUXURY_HERO_HEIGHT + PADDING * 2.0;
    for (index, image) in images
        .iter_mut()
        .skip(1)
        .take(LUXURY_PANEL_COUNT)
        .enumerate()
    {
        image
            .geometry
            .move_to(PADDING + index as f32 * (panel_width + PADDING), panel_y);
        image.geometry.resize(panel_width, panel_height);
    }

    let swatch_y = height * LUXURY_SWATCH_TOP + PADDING;
    for (index, swatch) in swatches.iter_mut().enumerate() {
        swatch.geometry.move_to(
            PADDING + index as f32 * (LUXURY_SWATCH + LUXURY_SWATCH_GAP),
            swatch_y,
        );
        swatch.geometry.resize(LUXURY_SWATCH, LUXURY_SWATCH);
    }

    let section = text_section_width(width, texts.len());
    for (index, text) in texts.iter_mut().enumerate() {
        text.geometry
            .move_to(PADDING + index as f32 * section, height * LUXURY_TEXT_TOP);
        text.font_size = LUXURY_FONT_SIZE;
        text.align = TextAlign::Left;
        text.color = Rgb::WHITE;
        text.set_sample(UPPERCASE);
        text.auto_resize();
    }
}

fn arrange_retro<C, R>(
    canvas: &C,
    images: &mut [&mut ImageFrame],
    swatches: &mut [&mut ColorSwatch],
    texts: &mut [&mut TextSample],
    rng: &mut R,
) where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let (width, height) = (canvas.width(), canvas.height());
    let section_width = width / 2.0;
    let section_height = height / 2.0;

    // Images past the fourth reuse quadrants and overlap the earlier ones.
    for (index, image) in images.iter_mut().enumerate() {
        image.geometry.rotation = rng.gen_range(-RETRO_MAX_TILT..=RETRO_MAX_TILT);

        let quadrant = index % 4;
        image.geometry.move_to(
            (quadrant % 2) as f32 * section_width + PADDING,
            (quadrant / 2) as f32 * section_height + PADDING,
        );
        image
            .geometry
            .resize(section_width - PADDING * 2.0, section_height - PADDING * 2.0);
    }

    for (index, swatch) in swatches.iter_mut().enumerate() {
        swatch.corner_radius = RETRO_CORNER_RADIUS;
        swatch.geometry.resize(RETRO_SWATCH, RETRO_SWATCH);
        swatch.geometry.move_to(
            PADDING + index as f32 * (RETRO_SWATCH + RETRO_SWATCH_GAP),
            height - RETRO_SWATCH - PADDING,
        );
        swatch.shadow = Some(RETRO_SHADOW);
    }

    let section = text_section_width(width, texts.len());
    for (index, text) in texts.iter_mut().enumerate() {
        text.geometry.move_to(
            PADDING + index as f32 * section,
            height - RETRO_TEXT_FROM_BOTTOM,
        );
        text.font_size = RETRO_FONT_SIZE;
        text.align = TextAlign::Center;
        text.color = RETRO_TEXT_COLOR;
        text.set_sample(RETRO_SAMPLE);
        text.auto_resize();
    }
}

fn arrange_custom<C, R>(
    canvas: &C,
    images: &mut [&mut ImageFrame],
    swatches: &mut [&mut ColorSwatch],
    texts: &mut [&mut TextSample],
    rng: &mut R,
) where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let (width, height) = (canvas.width(), canvas.height());

    // Sizes are settled before positions so the scatter range uses the final bounds.
    for image in images.iter_mut() {
        let size = jittered_size(rng, CUSTOM_BASE_SIZE);
        image.geometry.resize(size, size * CUSTOM_IMAGE_ASPECT);
        scatter(&mut image.geometry, width, height, rng);
    }

    for swatch in swatches.iter_mut() {
        let size = jittered_size(rng, CUSTOM_BASE_SIZE);
        swatch.geometry.resize(size, size);
        scatter(&mut swatch.geometry, width, height, rng);
    }

    for text in texts.iter_mut() {
        let size = jittered_size(rng, CUSTOM_TEXT_BASE_SIZE);
        text.geometry.resize(size * CUSTOM_TEXT_WIDTH, size / 2.0);
        text.font_size = rng.gen_range(CUSTOM_FONT_SIZES);
        scatter(&mut text.geometry, width, height, rng);
    }
}

/// Moves `geometry` to a uniform position that keeps it `PADDING` inside the canvas.
/// Elements too large to fit are pinned to the padding corner on that axis.
fn scatter<R: Rng + ?Sized>(geometry: &mut Geometry, width: f32, height: f32, rng: &mut R) {
    let max_x = width - geometry.width - PADDING;
    let max_y = height - geometry.height - PADDING;
    let x = sample_between(rng, PADDING, max_x);
    let y = sample_between(rng, PADDING, max_y);
    geometry.move_to(x, y);
}

/// Uniform in `[base, base + CUSTOM_JITTER)`.
fn jittered_size<R: Rng + ?Sized>(rng: &mut R, base: f32) -> f32 {
    let ceiling = base + CUSTOM_JITTER;
    let size = base + rng.gen_range(0.0..CUSTOM_JITTER);
    // The f32 sum can round up onto the excluded ceiling.
    if size < ceiling {
        size
    } else {
        f32::from_bits(ceiling.to_bits() - 1)
    }
}

fn sample_between<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high.is_finite() && high > low {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::element::{FontName, NodeId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    const W: f32 = 1920.0;
    const H: f32 = 1080.0;

    struct RecordingCanvas {
        width: f32,
        height: f32,
        children: Vec<NodeId>,
        rectangles: Vec<(Geometry, SolidFill)>,
    }

    impl RecordingCanvas {
        fn new(width: f32, height: f32) -> Self {
            RecordingCanvas {
                width,
                height,
                children: Vec::new(),
                rectangles: Vec::new(),
            }
        }
    }

    impl Canvas for RecordingCanvas {
        fn width(&self) -> f32 {
            self.width
        }

        fn height(&self) -> f32 {
            self.height
        }

        fn contains(&self, id: NodeId) -> bool {
            self.children.contains(&id)
        }

        fn append_child(&mut self, id: NodeId) {
            self.children.push(id);
        }

        fn create_rectangle(&mut self, geometry: Geometry, fill: SolidFill) -> NodeId {
            let id = NodeId::new();
            self.children.push(id);
            self.rectangles.push((geometry, fill));
            id
        }
    }

    fn image() -> Element {
        Element::Image(ImageFrame {
            id: NodeId::new(),
            name: "Moodboard Image".to_string(),
            source_url: "https://picsum.photos/800/600".to_string(),
            image_ref: Uuid::new_v4(),
            byte_len: 0,
            content_type: None,
            geometry: Geometry::new(0.0, 0.0, 100.0, 100.0),
        })
    }

    fn swatch() -> Element {
        Element::Swatch(ColorSwatch {
            id: NodeId::new(),
            name: "Color Swatch".to_string(),
            color: Rgb::gray(0.5),
            corner_radius: 0.0,
            shadow: None,
            geometry: Geometry::new(0.0, 0.0, 100.0, 100.0),
        })
    }

    fn text(font: &str) -> Element {
        Element::Text(TextSample {
            id: NodeId::new(),
            name: format!("Font Sample - {font}"),
            font: FontName::regular(font),
            characters: format!("{font}\n{UPPERCASE}\n{LOWERCASE}"),
            font_size: 24.0,
            align: TextAlign::Left,
            color: Rgb::BLACK,
            geometry: Geometry::new(0.0, 0.0, 100.0, 100.0),
        })
    }

    fn board(images: usize, swatches: usize, texts: usize) -> Vec<Element> {
        let fonts = ["Inter", "Georgia", "Courier"];
        let mut elements: Vec<Element> = (0..images).map(|_| image()).collect();
        elements.extend((0..swatches).map(|_| swatch()));
        elements.extend((0..texts).map(|i| text(fonts[i % fonts.len()])));
        elements
    }

    fn images_of(elements: &[Element]) -> Vec<&ImageFrame> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Image(image) => Some(image),
                _ => None,
            })
            .collect()
    }

    fn swatches_of(elements: &[Element]) -> Vec<&ColorSwatch> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Swatch(swatch) => Some(swatch),
                _ => None,
            })
            .collect()
    }

    fn texts_of(elements: &[Element]) -> Vec<&TextSample> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn run(elements: &mut [Element], template: Template, seed: u64) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(W, H);
        let mut rng = StdRng::seed_from_u64(seed);
        arrange_elements(&mut canvas, elements, template, &mut rng);
        canvas
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ── Dispatcher ──────────────────────────────────────────────────────────

    #[test]
    fn test_every_element_is_attached_once() {
        let mut elements = board(4, 5, 3);
        let mut canvas = RecordingCanvas::new(W, H);
        let mut rng = StdRng::seed_from_u64(1);
        arrange_elements(&mut canvas, &mut elements, Template::Minimalist, &mut rng);
        arrange_elements(&mut canvas, &mut elements, Template::Minimalist, &mut rng);
        assert_eq!(canvas.children.len(), 12);
        for element in &elements {
            assert!(canvas.contains(element.id()));
        }
    }

    #[test]
    fn test_empty_input_is_a_no_op_for_every_template() {
        for template in Template::ALL {
            let mut elements: Vec<Element> = Vec::new();
            let canvas = run(&mut elements, template, 7);
            assert!(canvas.children.is_empty());
            assert!(canvas.rectangles.is_empty());
        }
    }

    /// Board shapes with exactly one kind missing: images, swatches, texts.
    const ONE_KIND_MISSING: [(usize, usize, usize); 3] = [(0, 5, 3), (4, 0, 3), (4, 5, 0)];

    /// Origin of the first image, swatch and text for each fixed template.
    fn first_origins(template: Template) -> [(f32, f32); 3] {
        match template {
            Template::Minimalist => [
                (PADDING, PADDING),
                (PADDING, H - PADDING - 80.0 - 100.0),
                (PADDING, H - PADDING - 80.0),
            ],
            Template::Luxury => [
                (PADDING, PADDING),
                (PADDING, H * 0.7 + PADDING),
                (PADDING, H * 0.85),
            ],
            Template::Retro => [
                (PADDING, PADDING),
                (PADDING, H - 120.0 - PADDING),
                (PADDING, H - 200.0),
            ],
            Template::Custom => panic!("custom has no fixed origins"),
        }
    }

    fn assert_origin(g: &Geometry, (x, y): (f32, f32), context: &str) {
        assert!(approx(g.x, x) && approx(g.y, y), "{context}: {g:?} not at ({x}, {y})");
    }

    #[test]
    fn test_one_missing_kind_leaves_fixed_layouts_unchanged() {
        for template in [Template::Minimalist, Template::Luxury, Template::Retro] {
            let mut full = board(4, 5, 3);
            run(&mut full, template, 3);
            let [image_at, swatch_at, text_at] = first_origins(template);

            for (image_count, swatch_count, text_count) in ONE_KIND_MISSING {
                let mut elements = board(image_count, swatch_count, text_count);
                run(&mut elements, template, 3);
                let context = format!("{template} {image_count}/{swatch_count}/{text_count}");

                let images = images_of(&elements);
                assert_eq!(images.len(), image_count);
                for (image, expected) in images.iter().zip(images_of(&full)) {
                    assert_eq!(image.geometry, expected.geometry, "{context}");
                }
                if let Some(first) = images.first() {
                    assert_origin(&first.geometry, image_at, &context);
                }

                let swatches = swatches_of(&elements);
                assert_eq!(swatches.len(), swatch_count);
                for (swatch, expected) in swatches.iter().zip(swatches_of(&full)) {
                    assert_eq!(swatch.geometry, expected.geometry, "{context}");
                }
                if let Some(first) = swatches.first() {
                    assert_origin(&first.geometry, swatch_at, &context);
                }

                let texts = texts_of(&elements);
                assert_eq!(texts.len(), text_count);
                for (text, expected) in texts.iter().zip(texts_of(&full)) {
                    assert_eq!(text.geometry, expected.geometry, "{context}");
                    assert_eq!(text.characters, expected.characters, "{context}");
                }
                if let Some(first) = texts.first() {
                    assert_origin(&first.geometry, text_at, &context);
                }
            }
        }
    }

    #[test]
    fn test_one_missing_kind_still_scatters_custom() {
        for (image_count, swatch_count, text_count) in ONE_KIND_MISSING {
            let mut elements = board(image_count, swatch_count, text_count);
            run(&mut elements, Template::Custom, 3);
            assert_eq!(elements.len(), image_count + swatch_count + text_count);
            for element in &elements {
                let g = element.geometry();
                assert!(g.width > 100.0, "{}: not resized", element.name());
                assert!(
                    g.within(PADDING, PADDING, W - PADDING, H - PADDING),
                    "{}: {g:?}",
                    element.name()
                );
            }
        }
    }

    #[test]
    fn test_mixed_order_is_partitioned_by_variant() {
        let mut elements = vec![text("Inter"), image(), swatch(), image()];
        run(&mut elements, Template::Minimalist, 0);
        let images = images_of(&elements);
        assert!(approx(images[0].geometry.x, PADDING));
        assert!(approx(images[1].geometry.x, PADDING + (W - 120.0) / 2.0 + PADDING));
    }

    #[test]
    fn test_fixed_templates_stay_inside_canvas() {
        for template in [Template::Minimalist, Template::Luxury, Template::Retro] {
            let mut elements = board(4, 5, 3);
            run(&mut elements, template, 11);
            for element in &elements {
                assert!(
                    element.geometry().within(0.0, 0.0, W, H),
                    "{template}: {} escaped canvas: {:?}",
                    element.name(),
                    element.geometry()
                );
            }
        }
    }

    // ── Minimalist ──────────────────────────────────────────────────────────

    #[test]
    fn test_minimalist_grid_cells() {
        let mut elements = board(4, 0, 0);
        run(&mut elements, Template::Minimalist, 0);

        let grid_w = (1920.0 - 120.0) / 2.0;
        let grid_h = (1080.0 - 120.0 - 200.0) / 2.0;
        let rows = [0.0, 0.0, 1.0, 1.0];
        let cols = [0.0, 1.0, 0.0, 1.0];
        for (i, image) in images_of(&elements).iter().enumerate() {
            let g = image.geometry;
            assert!(approx(g.x, PADDING + cols[i] * (grid_w + PADDING)));
            assert!(approx(g.y, PADDING + rows[i] * (grid_h + PADDING)));
            assert!(approx(g.width, grid_w));
            assert!(approx(g.height, grid_h));
        }
    }

    #[test]
    fn test_minimalist_ignores_images_past_four() {
        let mut elements = board(6, 0, 0);
        run(&mut elements, Template::Minimalist, 0);
        let images = images_of(&elements);
        for image in &images[4..] {
            assert_eq!(image.geometry, Geometry::new(0.0, 0.0, 100.0, 100.0));
        }
    }

    #[test]
    fn test_minimalist_swatch_row_and_text_samples() {
        let mut elements = board(1, 5, 3);
        run(&mut elements, Template::Minimalist, 0);

        for (i, swatch) in swatches_of(&elements).iter().enumerate() {
            assert!(approx(swatch.geometry.x, PADDING + i as f32 * 90.0));
            assert!(approx(swatch.geometry.y, H - PADDING - 80.0 - 100.0));
            assert!(approx(swatch.geometry.width, 80.0));
        }

        let section = (W - 80.0) / 3.0;
        let texts = texts_of(&elements);
        for (i, text) in texts.iter().enumerate() {
            assert!(approx(text.geometry.x, i as f32 * section + PADDING));
            assert!(approx(text.geometry.y, H - PADDING - 80.0));
            assert_eq!(text.font_size, 24.0);
            assert_eq!(text.align, TextAlign::Left);
        }
        assert_eq!(
            texts[1].characters,
            format!("Georgia\n{UPPERCASE}\n{LOWERCASE}")
        );
    }

    #[test]
    fn test_minimalist_is_deterministic() {
        let template = board(4, 5, 3);
        let mut first = template.clone();
        let mut second = template.clone();
        run(&mut first, Template::Minimalist, 1);
        run(&mut second, Template::Minimalist, 99);
        assert_eq!(first, second);
    }

    // ── Luxury ──────────────────────────────────────────────────────────────

    #[test]
    fn test_luxury_overlay_matches_hero() {
        let mut elements = board(4, 5, 3);
        let canvas = run(&mut elements, Template::Luxury, 0);

        let hero = images_of(&elements)[0].geometry;
        assert_eq!(canvas.rectangles.len(), 1);
        let (overlay, fill) = canvas.rectangles[0];
        assert_eq!(overlay, hero);
        assert_eq!(fill.color, Rgb::BLACK);
        assert!(approx(fill.opacity, 0.3));
        assert!(approx(hero.width, W - 80.0));
        assert!(approx(hero.height, H * 0.4));
    }

    #[test]
    fn test_luxury_without_images_creates_no_overlay() {
        let mut elements = board(0, 5, 3);
        let canvas = run(&mut elements, Template::Luxury, 0);
        assert!(canvas.rectangles.is_empty());
        assert_eq!(canvas.children.len(), 8);
    }

    #[test]
    fn test_luxury_panels_swatches_and_type() {
        let mut elements = board(5, 2, 2);
        run(&mut elements, Template::Luxury, 0);

        let images = images_of(&elements);
        let panel_w = (W - 160.0) / 3.0;
        for (j, panel) in images[1..4].iter().enumerate() {
            assert!(approx(panel.geometry.x, PADDING + j as f32 * (panel_w + PADDING)));
            assert!(approx(panel.geometry.y, H * 0.4 + 80.0));
            assert!(approx(panel.geometry.width, panel_w));
            assert!(approx(panel.geometry.height, H * 0.25));
        }
        assert_eq!(images[4].geometry, Geometry::new(0.0, 0.0, 100.0, 100.0));

        let swatches = swatches_of(&elements);
        assert!(approx(swatches[1].geometry.x, PADDING + 120.0));
        assert!(approx(swatches[1].geometry.y, H * 0.7 + PADDING));

        for text in texts_of(&elements) {
            assert_eq!(text.color, Rgb::WHITE);
            assert_eq!(text.font_size, 28.0);
            assert!(approx(text.geometry.y, H * 0.85));
            assert!(text.characters.ends_with(&format!("\n{UPPERCASE}")));
            assert_eq!(text.characters.lines().count(), 2);
        }
    }

    #[test]
    fn test_luxury_is_deterministic() {
        let template = board(4, 5, 3);
        let mut first = template.clone();
        let mut second = template.clone();
        let a = run(&mut first, Template::Luxury, 5);
        let b = run(&mut second, Template::Luxury, 6);
        assert_eq!(first, second);
        assert_eq!(a.rectangles, b.rectangles);
    }

    // ── Retro ───────────────────────────────────────────────────────────────

    #[test]
    fn test_retro_rotation_is_bounded() {
        for seed in 0..50 {
            let mut elements = board(8, 0, 0);
            run(&mut elements, Template::Retro, seed);
            for image in images_of(&elements) {
                assert!(image.geometry.rotation.abs() <= RETRO_MAX_TILT);
            }
        }
    }

    #[test]
    fn test_retro_fifth_image_reuses_first_quadrant() {
        let mut elements = board(5, 0, 0);
        run(&mut elements, Template::Retro, 2);
        let images = images_of(&elements);

        let (a, b) = (images[0].geometry, images[4].geometry);
        assert!(approx(a.x, b.x) && approx(a.y, b.y));
        assert!(approx(a.width, b.width) && approx(a.height, b.height));
        assert!(approx(b.x, PADDING));
        assert!(approx(b.y, PADDING));
        assert!(approx(b.width, W / 2.0 - 80.0));
        assert!(approx(b.height, H / 2.0 - 80.0));

        let second = images[1].geometry;
        assert!(approx(second.x, W / 2.0 + PADDING));
        assert!(approx(second.y, PADDING));
    }

    #[test]
    fn test_retro_swatches_are_shadowed_circles() {
        let mut elements = board(0, 5, 0);
        run(&mut elements, Template::Retro, 0);
        for (i, swatch) in swatches_of(&elements).iter().enumerate() {
            assert!(swatch.corner_radius >= RETRO_SWATCH / 2.0);
            assert!(approx(swatch.geometry.width, 120.0));
            assert!(approx(swatch.geometry.x, PADDING + i as f32 * 140.0));
            assert!(approx(swatch.geometry.y, H - 120.0 - PADDING));
            let shadow = swatch.shadow.expect("retro swatches carry a shadow");
            assert_eq!((shadow.offset_x, shadow.offset_y), (4.0, 4.0));
            assert_eq!(shadow.radius, 8.0);
            assert!(approx(shadow.alpha, 0.25));
        }
    }

    #[test]
    fn test_retro_type_is_centered_brown() {
        let mut elements = board(0, 0, 2);
        run(&mut elements, Template::Retro, 0);
        let texts = texts_of(&elements);
        assert_eq!(texts[0].characters, "Inter\nAa Bb Cc");
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(text.align, TextAlign::Center);
            assert_eq!(text.color, Rgb::new(0.4, 0.2, 0.1));
            assert_eq!(text.font_size, 32.0);
            assert!(approx(text.geometry.y, H - 200.0));
            assert!(approx(text.geometry.x, PADDING + i as f32 * (W - 80.0) / 2.0));
        }
    }

    #[test]
    fn test_retro_replays_under_fixed_seed() {
        let template = board(6, 5, 3);
        let mut first = template.clone();
        let mut second = template.clone();
        run(&mut first, Template::Retro, 42);
        run(&mut second, Template::Retro, 42);
        assert_eq!(first, second);
    }

    // ── Custom ──────────────────────────────────────────────────────────────

    #[test]
    fn test_custom_sizes_and_bounds_for_many_seeds() {
        for seed in 0..100 {
            let mut elements = board(4, 5, 3);
            run(&mut elements, Template::Custom, seed);

            for image in images_of(&elements) {
                let g = image.geometry;
                assert!(g.width >= CUSTOM_BASE_SIZE && g.width < CUSTOM_BASE_SIZE + CUSTOM_JITTER);
                assert!(approx(g.height, g.width * 0.75));
            }
            for swatch in swatches_of(&elements) {
                let g = swatch.geometry;
                assert!(g.width >= CUSTOM_BASE_SIZE && g.width < CUSTOM_BASE_SIZE + CUSTOM_JITTER);
                assert!(approx(g.height, g.width));
            }
            for text in texts_of(&elements) {
                let g = text.geometry;
                let size = g.width / 1.5;
                assert!(size >= CUSTOM_TEXT_BASE_SIZE - 1e-3);
                assert!(size < CUSTOM_TEXT_BASE_SIZE + CUSTOM_JITTER);
                assert!(approx(g.height, size / 2.0));
                assert!(text.font_size >= 24.0 && text.font_size < 36.0);
            }
            for element in &elements {
                assert!(
                    element
                        .geometry()
                        .within(PADDING, PADDING, W - PADDING, H - PADDING),
                    "seed {seed}: {:?}",
                    element.geometry()
                );
            }
        }
    }

    #[test]
    fn test_custom_pins_oversized_elements_to_padding() {
        let mut canvas = RecordingCanvas::new(300.0, 150.0);
        let mut elements = board(1, 1, 1);
        let mut rng = StdRng::seed_from_u64(9);
        arrange_elements(&mut canvas, &mut elements, Template::Custom, &mut rng);
        for element in &elements {
            assert_eq!(element.geometry().x, PADDING);
            assert_eq!(element.geometry().y, PADDING);
        }
    }

    #[test]
    fn test_custom_replays_under_fixed_seed() {
        let template = board(4, 5, 3);
        let mut first = template.clone();
        let mut second = template.clone();
        run(&mut first, Template::Custom, 1234);
        run(&mut second, Template::Custom, 1234);
        assert_eq!(first, second);
    }

    /// Always yields the largest value, driving every range to its upper end.
    struct MaxRng;

    impl rand::RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(u8::MAX);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(u8::MAX);
            Ok(())
        }
    }

    #[test]
    fn test_custom_sizes_exclude_upper_bound_at_max_draw() {
        let mut canvas = RecordingCanvas::new(W, H);
        let mut elements = board(1, 1, 1);
        arrange_elements(&mut canvas, &mut elements, Template::Custom, &mut MaxRng);

        let image = images_of(&elements)[0].geometry;
        assert!(image.width >= CUSTOM_BASE_SIZE);
        assert!(image.width < CUSTOM_BASE_SIZE + CUSTOM_JITTER, "{}", image.width);

        let swatch = swatches_of(&elements)[0].geometry;
        assert!(swatch.width < CUSTOM_BASE_SIZE + CUSTOM_JITTER, "{}", swatch.width);

        let text = texts_of(&elements)[0].geometry;
        let size = text.height * 2.0;
        assert!(size >= CUSTOM_TEXT_BASE_SIZE);
        assert!(size < CUSTOM_TEXT_BASE_SIZE + CUSTOM_JITTER, "{size}");
    }

    #[test]
    fn test_custom_on_unbounded_canvas_pins_to_padding() {
        for (width, height) in [(f32::INFINITY, H), (W, f32::NAN)] {
            let mut canvas = RecordingCanvas::new(width, height);
            let mut elements = board(2, 2, 2);
            let mut rng = StdRng::seed_from_u64(4);
            arrange_elements(&mut canvas, &mut elements, Template::Custom, &mut rng);

            for element in &elements {
                let g = element.geometry();
                if width.is_infinite() {
                    assert_eq!(g.x, PADDING);
                } else {
                    assert_eq!(g.y, PADDING);
                }
            }
        }
    }
}

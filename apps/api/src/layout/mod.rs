// Moodboard layout engine.
// Pure geometry: no I/O, no shared state. Randomness comes in through `rand::Rng`.

pub mod arrange;
pub mod canvas;
pub mod element;
pub mod template;
pub mod text_metrics;

// Re-export the public API consumed by the generator, scene and handlers.
pub use arrange::{arrange_elements, PADDING};
pub use canvas::Canvas;
pub use element::{
    ColorSwatch, DropShadow, Element, FontName, Geometry, ImageFrame, NodeId, Rgb, SolidFill,
    TextAlign, TextSample,
};
pub use template::Template;

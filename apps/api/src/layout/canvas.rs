//! The canvas capability the layout engine calls into.
//!
//! The host document implements this for its moodboard frames; tests implement
//! it with a recording stub so the engine runs without a live host.

use crate::layout::element::{Geometry, NodeId, SolidFill};

/// A fixed-size container that layout elements are placed inside.
pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Whether `id` is already one of this canvas's children.
    fn contains(&self, id: NodeId) -> bool;

    /// Appends `id` as the last child. Callers check `contains` first.
    fn append_child(&mut self, id: NodeId);

    /// Creates an auxiliary rectangle, appends it as a child and returns its id.
    fn create_rectangle(&mut self, geometry: Geometry, fill: SolidFill) -> NodeId;
}

// Host document stand-in: moodboard frames, child nodes, styles and export.

pub mod document;
pub mod export;

pub use document::{Document, Frame, FrameSnapshot, FrameSummary, PaintStyle, TextStyle};
pub use export::{export_frame, ExportFormat};

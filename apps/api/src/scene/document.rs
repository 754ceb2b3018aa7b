//! In-memory host document — moodboard frames, their child nodes and shared styles.
//!
//! Frames implement the layout engine's `Canvas` capability. Child ids are
//! attached before their content is committed, so a frame's child order is
//! fixed at arrangement time and `adopt` only fills in the node data.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::layout::{Canvas, Element, FontName, Geometry, NodeId, Rgb, SolidFill, Template};

/// Horizontal gap between consecutive moodboards on the page.
pub const MOODBOARD_GAP: f32 = 100.0;

const FRAME_NAME_PREFIX: &str = "Moodboard - ";

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

/// Auxiliary rectangle created by a template (the luxury hero overlay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: NodeId,
    pub geometry: Geometry,
    pub fill: SolidFill,
}

/// Any child of a moodboard frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SceneNode {
    Element(Element),
    Rectangle(Rectangle),
}

impl SceneNode {
    pub fn id(&self) -> NodeId {
        match self {
            SceneNode::Element(element) => element.id(),
            SceneNode::Rectangle(rectangle) => rectangle.id,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Frame
// ────────────────────────────────────────────────────────────────────────────

/// One generated moodboard.
#[derive(Debug, Clone)]
pub struct Frame {
    pub id: NodeId,
    pub name: String,
    pub template: Template,
    pub geometry: Geometry,
    pub background: Rgb,
    pub created_at: DateTime<Utc>,
    children: Vec<NodeId>,
    nodes: HashMap<NodeId, SceneNode>,
}

impl Frame {
    /// Creates an empty frame at the origin with the template's background.
    pub fn new(template: Template, width: f32, height: f32) -> Self {
        Frame {
            id: NodeId::new(),
            name: format!("{FRAME_NAME_PREFIX}{template}"),
            template,
            geometry: Geometry::new(0.0, 0.0, width, height),
            background: template.background(),
            created_at: Utc::now(),
            children: Vec::new(),
            nodes: HashMap::new(),
        }
    }

    pub fn is_moodboard(&self) -> bool {
        self.name.starts_with(FRAME_NAME_PREFIX)
    }

    /// Stores the content of arranged elements. Elements that were never
    /// attached are appended as well.
    pub fn adopt(&mut self, elements: Vec<Element>) {
        for element in elements {
            let id = element.id();
            if !self.contains(id) {
                self.children.push(id);
            }
            self.nodes.insert(id, SceneNode::Element(element));
        }
    }

    /// Children in paint order. Attached ids without committed content are skipped.
    pub fn children(&self) -> impl Iterator<Item = &SceneNode> + '_ {
        self.children.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            summary: self.summary(),
            background: self.background,
            children: self.children().cloned().collect(),
        }
    }

    pub fn summary(&self) -> FrameSummary {
        FrameSummary {
            id: self.id,
            name: self.name.clone(),
            template: self.template,
            geometry: self.geometry,
            child_count: self.child_count(),
            created_at: self.created_at,
        }
    }
}

impl Canvas for Frame {
    fn width(&self) -> f32 {
        self.geometry.width
    }

    fn height(&self) -> f32 {
        self.geometry.height
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
        self.nodes
            .insert(id, SceneNode::Rectangle(Rectangle { id, geometry, fill }));
        id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub id: NodeId,
    pub name: String,
    pub template: Template,
    pub geometry: Geometry,
    pub child_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    #[serde(flatten)]
    pub summary: FrameSummary,
    pub background: Rgb,
    pub children: Vec<SceneNode>,
}

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintStyle {
    pub name: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub name: String,
    pub font_name: FontName,
    pub font_size: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// The page all moodboards live on, plus the local style registry.
#[derive(Debug, Default)]
pub struct Document {
    frames: Vec<Frame>,
    paint_styles: Vec<PaintStyle>,
    text_styles: Vec<TextStyle>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `frame` to the right of the last moodboard and adds it to the page.
    pub fn insert_moodboard(&mut self, mut frame: Frame) -> NodeId {
        if let Some(last) = self.frames.iter().rev().find(|f| f.is_moodboard()) {
            frame
                .geometry
                .move_to(last.geometry.right() + MOODBOARD_GAP, last.geometry.y);
        }
        let id = frame.id;
        self.frames.push(frame);
        id
    }

    pub fn frame(&self, id: NodeId) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id == id)
    }

    /// The most recently added moodboard, standing in for the host's selection.
    pub fn latest_moodboard(&self) -> Option<&Frame> {
        self.frames.iter().rev().find(|f| f.is_moodboard())
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn add_paint_style(&mut self, name: impl Into<String>, color: Rgb) {
        self.paint_styles.push(PaintStyle {
            name: name.into(),
            color,
        });
    }

    pub fn add_text_style(&mut self, name: impl Into<String>, font_name: FontName, font_size: f32) {
        self.text_styles.push(TextStyle {
            name: name.into(),
            font_name,
            font_size,
        });
    }

    pub fn paint_styles(&self) -> &[PaintStyle] {
        &self.paint_styles
    }

    pub fn text_styles(&self) -> &[TextStyle] {
        &self.text_styles
    }
}

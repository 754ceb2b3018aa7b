//! Moodboard generation pipeline.
//!
//! image URLs → fetch → palette → fonts → elements → arrange → commit frame.
//!
//! The document lock is only taken to commit the finished frame and its
//! styles, never while images are being fetched.

use futures::future::join_all;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::layout::arrange::{LOWERCASE, UPPERCASE};
use crate::layout::{
    arrange_elements, ColorSwatch, Element, FontName, Geometry, ImageFrame, NodeId, Rgb,
    TextAlign, TextSample, Template,
};
use crate::moodboard::fonts::{select_fonts, FontCatalog};
use crate::moodboard::images::{image_urls, ImageFetcher, ImageSource, UiCategory};
use crate::moodboard::palette::generate_palette;
use crate::scene::{Document, Frame, FrameSnapshot};

/// Font size of freshly created text samples, before a template restyles them.
const SAMPLE_FONT_SIZE: f32 = 24.0;

/// Placeholder size for nodes before layout.
const PLACEHOLDER_SIZE: f32 = 100.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub keyword: String,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub image_source: ImageSource,
    #[serde(default)]
    pub ui_category: UiCategory,
    /// Replays retro tilt and custom scatter exactly.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Which command produced the board. Retro boards force the retro template
/// and prefix every node and style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKind {
    Standard,
    Retro,
}

impl BoardKind {
    fn name_prefix(&self) -> &'static str {
        match self {
            BoardKind::Standard => "",
            BoardKind::Retro => "Retro ",
        }
    }

    fn template(&self, requested: Template) -> Template {
        match self {
            BoardKind::Standard => requested,
            BoardKind::Retro => Template::Retro,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMoodboard {
    pub moodboard_id: NodeId,
    pub images: Vec<String>,
    pub fonts: Vec<String>,
    pub moodboard: FrameSnapshot,
}

/// Collaborators the pipeline calls into.
pub struct Generator<'a> {
    pub document: &'a RwLock<Document>,
    pub fetcher: &'a dyn ImageFetcher,
    pub fonts: &'a dyn FontCatalog,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Generator<'_> {
    /// Builds, arranges and commits one moodboard.
    ///
    /// Images that fail to load are dropped; the board fails only when none load.
    pub async fn generate<R>(
        &self,
        request: &GenerateRequest,
        kind: BoardKind,
        rng: &mut R,
    ) -> Result<GeneratedMoodboard, AppError>
    where
        R: Rng + Send + ?Sized,
    {
        if request.keyword.trim().is_empty() {
            return Err(AppError::Validation("keyword cannot be empty".to_string()));
        }

        let template = kind.template(request.template);
        let prefix = kind.name_prefix();

        let urls = image_urls(
            &request.keyword,
            request.image_source,
            request.ui_category,
            rng,
        );
        let images = self.load_images(&urls, prefix).await;
        if images.is_empty() {
            return Err(AppError::NoImages);
        }

        let colors = generate_palette(template, rng);
        let fonts = select_fonts(template, self.fonts);

        let mut elements: Vec<Element> = images.into_iter().map(Element::Image).collect();
        elements.extend(colors.iter().map(|color| Element::Swatch(new_swatch(*color, prefix))));
        elements.extend(fonts.iter().map(|font| Element::Text(new_text_sample(font, prefix))));

        let mut frame = Frame::new(template, self.canvas_width, self.canvas_height);
        arrange_elements(&mut frame, &mut elements, template, rng);
        frame.adopt(elements);

        let (moodboard_id, moodboard) = {
            let mut document = self.document.write().await;
            for (index, color) in colors.iter().enumerate() {
                document.add_paint_style(format!("{prefix}Moodboard Color {}", index + 1), *color);
            }
            for font in &fonts {
                document.add_text_style(
                    format!("{prefix}Moodboard Font - {font}"),
                    FontName::regular(font.as_str()),
                    SAMPLE_FONT_SIZE,
                );
            }
            let id = document.insert_moodboard(frame);
            let snapshot = document
                .frame(id)
                .map(Frame::snapshot)
                .ok_or_else(|| AppError::Internal(anyhow::anyhow!("moodboard {id} vanished")))?;
            (id, snapshot)
        };

        info!(
            moodboard_id = %moodboard_id,
            template = %template,
            children = moodboard.children.len(),
            "Moodboard generated"
        );

        Ok(GeneratedMoodboard {
            moodboard_id,
            images: urls,
            fonts,
            moodboard,
        })
    }

    /// Fetches every URL at once; failures are dropped and input order is kept.
    async fn load_images(&self, urls: &[String], prefix: &str) -> Vec<ImageFrame> {
        let results = join_all(urls.iter().map(|url| self.fetcher.fetch(url))).await;

        urls.iter()
            .zip(results)
            .filter_map(|(url, result)| match result {
                Ok(asset) => Some(ImageFrame {
                    id: NodeId::new(),
                    name: format!("{prefix}Moodboard Image"),
                    source_url: url.clone(),
                    image_ref: asset.image_ref,
                    byte_len: asset.byte_len,
                    content_type: asset.content_type,
                    geometry: placeholder_geometry(),
                }),
                Err(e) => {
                    warn!(url = %url, error = %e, "Dropping image that failed to load");
                    None
                }
            })
            .collect()
    }
}

fn placeholder_geometry() -> Geometry {
    Geometry::new(0.0, 0.0, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE)
}

fn new_swatch(color: Rgb, prefix: &str) -> ColorSwatch {
    ColorSwatch {
        id: NodeId::new(),
        name: format!("{prefix}Color Swatch"),
        color,
        corner_radius: 0.0,
        shadow: None,
        geometry: placeholder_geometry(),
    }
}

fn new_text_sample(font: &str, prefix: &str) -> TextSample {
    let mut text = TextSample {
        id: NodeId::new(),
        name: format!("{prefix}Font Sample - {font}"),
        font: FontName::regular(font),
        characters: format!("{font}\n{UPPERCASE}\n{LOWERCASE}"),
        font_size: SAMPLE_FONT_SIZE,
        align: TextAlign::Left,
        color: Rgb::BLACK,
        geometry: placeholder_geometry(),
    };
    text.auto_resize();
    text
}

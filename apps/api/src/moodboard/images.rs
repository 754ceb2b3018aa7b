//! Image sources and fetching.
//!
//! Two sources produce URLs: general photos seeded from the keyword, and mock
//! UI-design shots per category. URLs are turned into image data through the
//! `ImageFetcher` trait so the pipeline can run offline and in tests.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

const PICSUM: &str = "https://picsum.photos";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// General photo sizes, one URL each, in order.
const GENERAL_SIZES: [(u32, u32); 4] = [(800, 600), (600, 800), (800, 800), (900, 600)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    #[default]
    General,
    UiDesigns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiCategory {
    #[default]
    Mobile,
    LandingPage,
    WebApp,
}

impl UiCategory {
    fn search_label(&self) -> &'static str {
        match self {
            UiCategory::Mobile => "mobile",
            UiCategory::LandingPage => "landing page",
            UiCategory::WebApp => "web app",
        }
    }

    fn mock_sizes(&self) -> [(u32, u32); 3] {
        match self {
            UiCategory::Mobile => [(400, 800), (401, 800), (402, 800)],
            UiCategory::LandingPage => [(1200, 800), (1201, 800), (1202, 800)],
            UiCategory::WebApp => [(1000, 800), (1001, 800), (1002, 800)],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// URL sources
// ────────────────────────────────────────────────────────────────────────────

/// Sum of the keyword's UTF-16 code units.
pub fn keyword_seed(keyword: &str) -> u64 {
    keyword.encode_utf16().map(u64::from).sum()
}

/// Four photos whose seeds follow from the keyword, so the same keyword gives the same set.
pub fn general_image_urls(keyword: &str) -> Vec<String> {
    let seed = keyword_seed(keyword);
    GENERAL_SIZES
        .iter()
        .enumerate()
        .map(|(offset, (width, height))| {
            format!("{PICSUM}/seed/{}/{width}/{height}", seed + offset as u64)
        })
        .collect()
}

/// Three mock design shots for `category`, cache-busted with a random query parameter.
pub fn ui_design_image_urls<R: Rng + ?Sized>(
    keyword: &str,
    category: UiCategory,
    rng: &mut R,
) -> Vec<String> {
    let search_term = format!("{keyword} {} ui design", category.search_label());
    debug!(search_term = %search_term, "Searching UI design images");

    category
        .mock_sizes()
        .iter()
        .map(|(width, height)| {
            let buster: f64 = rng.gen();
            format!("{PICSUM}/{width}/{height}?random={buster}")
        })
        .collect()
}

pub fn image_urls<R: Rng + ?Sized>(
    keyword: &str,
    source: ImageSource,
    category: UiCategory,
    rng: &mut R,
) -> Vec<String> {
    match source {
        ImageSource::General => general_image_urls(keyword),
        ImageSource::UiDesigns => ui_design_image_urls(keyword, category, rng),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fetching
// ────────────────────────────────────────────────────────────────────────────

/// Image data registered with the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub image_ref: Uuid,
    pub byte_len: usize,
    pub content_type: Option<String>,
}

/// Loads image data for a URL. Carried in `AppState` as `Arc<dyn ImageFetcher>`.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ImageAsset, AppError>;
}

/// Downloads images over HTTP. Non-2xx responses are failures.
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(HttpImageFetcher { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<ImageAsset, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::ImageFetch(format!("{url}: {e}")))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ImageFetch(format!("{url}: {e}")))?;

        Ok(ImageAsset {
            image_ref: Uuid::new_v4(),
            byte_len: bytes.len(),
            content_type,
        })
    }
}

/// Registers every URL without touching the network.
pub struct PlaceholderImageFetcher;

#[async_trait]
impl ImageFetcher for PlaceholderImageFetcher {
    async fn fetch(&self, _url: &str) -> Result<ImageAsset, AppError> {
        Ok(ImageAsset {
            image_ref: Uuid::new_v4(),
            byte_len: 0,
            content_type: None,
        })
    }
}

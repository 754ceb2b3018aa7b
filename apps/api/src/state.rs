use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Notify, RwLock};

use crate::config::Config;
use crate::moodboard::fonts::FontCatalog;
use crate::moodboard::generator::Generator;
use crate::moodboard::images::ImageFetcher;
use crate::scene::Document;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The page holding every generated moodboard and the style registry.
    pub document: Arc<RwLock<Document>>,
    /// Pluggable image loader. HTTP by default, placeholder when OFFLINE_IMAGES is set.
    pub fetcher: Arc<dyn ImageFetcher>,
    pub fonts: Arc<dyn FontCatalog>,
    /// Signalled by the `cancel` command to stop the server.
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(
        config: Config,
        fetcher: Arc<dyn ImageFetcher>,
        fonts: Arc<dyn FontCatalog>,
    ) -> Self {
        AppState {
            config,
            document: Arc::new(RwLock::new(Document::new())),
            fetcher,
            fonts,
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub fn generator(&self) -> Generator<'_> {
        Generator {
            document: &self.document,
            fetcher: self.fetcher.as_ref(),
            fonts: self.fonts.as_ref(),
            canvas_width: self.config.canvas_width,
            canvas_height: self.config.canvas_height,
        }
    }

    /// Per-request random source: explicit seed, else the configured seed, else entropy.
    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        match seed.or(self.config.layout_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

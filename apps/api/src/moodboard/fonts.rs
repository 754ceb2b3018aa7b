//! Template font selection.
//!
//! Each template lists primary, secondary and accent families in preference
//! order. One family is chosen per category: the first the catalog reports as
//! available, else the fallback.

use std::collections::HashSet;

use tracing::warn;

use crate::layout::Template;

pub const FALLBACK_FONT: &str = "Arial";

/// Families the default catalog reports as installed.
const DEFAULT_FAMILIES: &[&str] = &[
    "Inter",
    "Arial",
    "Arial Black",
    "Roboto",
    "Open Sans",
    "Montserrat",
    "Playfair Display",
    "Georgia",
    "Times New Roman",
    "Courier New",
];

#[derive(Debug, Clone, Copy)]
pub struct FontCollection {
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub accent: &'static [&'static str],
}

impl FontCollection {
    fn categories(&self) -> [&'static [&'static str]; 3] {
        [self.primary, self.secondary, self.accent]
    }
}

pub fn font_collection(template: Template) -> FontCollection {
    match template {
        Template::Minimalist => FontCollection {
            primary: &["Inter", "Arial", "Roboto"],
            secondary: &["SF Pro Text", "Helvetica Neue", "Open Sans"],
            accent: &["Montserrat"],
        },
        Template::Luxury => FontCollection {
            primary: &["Playfair Display", "Georgia"],
            secondary: &["Optima", "Times New Roman"],
            accent: &["Baskerville"],
        },
        Template::Retro => FontCollection {
            primary: &["Courier", "Courier New"],
            secondary: &["Georgia", "Times New Roman"],
            accent: &["Arial Black"],
        },
        Template::Custom => FontCollection {
            primary: &["Inter", "Arial"],
            secondary: &["Roboto", "SF Pro Text"],
            accent: &["Montserrat", "Georgia"],
        },
    }
}

/// Reports which font families can be loaded.
pub trait FontCatalog: Send + Sync {
    fn is_available(&self, family: &str) -> bool;
}

/// A fixed set of installed families, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct StaticFontCatalog {
    families: HashSet<String>,
}

impl StaticFontCatalog {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StaticFontCatalog {
            families: families
                .into_iter()
                .map(|f| f.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Default for StaticFontCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILIES)
    }
}

impl FontCatalog for StaticFontCatalog {
    fn is_available(&self, family: &str) -> bool {
        self.families.contains(&family.to_lowercase())
    }
}

/// Picks one family per category for `template`, always returning three names.
pub fn select_fonts(template: Template, catalog: &dyn FontCatalog) -> Vec<String> {
    font_collection(template)
        .categories()
        .iter()
        .map(|category| {
            match category.iter().find(|family| catalog.is_available(family)) {
                Some(family) => family.to_string(),
                None => {
                    warn!(
                        template = %template,
                        candidates = ?category,
                        "No font available in category, falling back to {FALLBACK_FONT}"
                    );
                    FALLBACK_FONT.to_string()
                }
            }
        })
        .collect()
}

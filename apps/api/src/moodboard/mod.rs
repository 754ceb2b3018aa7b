// Moodboard generation: upstream generators, the generation pipeline and the
// plugin command surface. All layout goes through crate::layout.

pub mod fonts;
pub mod generator;
pub mod handlers;
pub mod images;
pub mod messages;
pub mod palette;

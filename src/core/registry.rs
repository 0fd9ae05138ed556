//! Fixed table of texture sets selectable from the page buttons.

use super::error::{CarouselError, Result};

/// Ordered, immutable list of image URLs shown together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureSet {
    sources: Vec<String>,
}

impl TextureSet {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Maps a set index (button position) to its [`TextureSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureRegistry {
    sets: Vec<TextureSet>,
}

// Bundled under `assets/`; several images appear in more than one set.
const DEFAULT_SETS: [[&str; 3]; 5] = [
    ["assets/thum.png", "assets/thum7.png", "assets/thum5.jpg"],
    ["assets/thum9.jpg", "assets/thum.png", "assets/thumbnail.jpg"],
    ["assets/tum.jpeg", "assets/thum7.png", "assets/thum9.jpg"],
    ["assets/thum5.jpg", "assets/thumbnail.jpg", "assets/tum.jpeg"],
    ["assets/tum.jpeg", "assets/tum.jpeg", "assets/tum.jpeg"],
];

impl TextureRegistry {
    pub fn new(sets: Vec<TextureSet>) -> Self {
        Self { sets }
    }

    pub fn get(&self, set_index: usize) -> Result<&TextureSet> {
        self.sets.get(set_index).ok_or(CarouselError::OutOfRange {
            index: set_index,
            len: self.sets.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SETS.iter().map(|s| TextureSet::new(*s)).collect())
    }
}

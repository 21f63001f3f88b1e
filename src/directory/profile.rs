//! Profile image overlay state.
//!
//! Pressing a row opens an overlay showing a profile image drawn uniformly at
//! random from a fixed [`ImagePool`]. Closing the overlay hides it but keeps the
//! last image, so reopening briefly shows the previous picture until a new one
//! is drawn.

use crate::domain::{Result, RollcallError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Portrait references used when no pool is configured.
pub const DEFAULT_PROFILE_IMAGES: [&str; 4] = [
    "https://randomuser.me/api/portraits/men/1.jpg",
    "https://randomuser.me/api/portraits/women/2.jpg",
    "https://randomuser.me/api/portraits/men/3.jpg",
    "https://randomuser.me/api/portraits/women/4.jpg",
];

/// Non-empty, immutable pool of image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePool {
    images: Arc<[String]>,
}

impl ImagePool {
    /// Builds a pool from image references.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] if `images` is empty.
    pub fn new(images: Vec<String>) -> Result<Self> {
        if images.is_empty() {
            return Err(RollcallError::Config("profile image pool is empty".to_string()));
        }
        Ok(Self { images: images.into() })
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }
}

impl Default for ImagePool {
    fn default() -> Self {
        Self {
            images: DEFAULT_PROFILE_IMAGES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Overlay state: which image is selected and whether it is shown.
#[derive(Debug, Clone)]
pub struct ProfileViewer {
    pool: ImagePool,
    selected: Option<String>,
    visible: bool,
}

impl ProfileViewer {
    #[must_use]
    pub const fn new(pool: ImagePool) -> Self {
        Self {
            pool,
            selected: None,
            visible: false,
        }
    }

    /// Draws a random image from the pool and shows the overlay.
    pub fn open_profile(&mut self) {
        self.open_profile_with(&mut rand::thread_rng());
    }

    /// Same as [`open_profile`](Self::open_profile) with a caller-supplied RNG.
    pub fn open_profile_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // ImagePool is never empty, so choose always yields an image.
        self.selected = self.pool.images().choose(rng).cloned();
        self.visible = true;
        tracing::debug!(image = ?self.selected, "profile opened");
    }

    /// Hides the overlay, keeping the selected image.
    pub fn close_profile(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_pool_is_rejected() {
        assert!(ImagePool::new(vec![]).is_err());
    }

    #[test]
    fn open_selects_image_from_pool() {
        let pool = ImagePool::default();
        let mut viewer = ProfileViewer::new(pool.clone());
        let mut rng = StdRng::seed_from_u64(7);

        assert!(!viewer.is_visible());
        viewer.open_profile_with(&mut rng);

        assert!(viewer.is_visible());
        let image = viewer.selected_image().unwrap();
        assert!(pool.images().iter().any(|candidate| candidate == image));
    }

    #[test]
    fn close_keeps_selected_image() {
        let pool = ImagePool::new(vec!["portrait.png".to_string()]).unwrap();
        let mut viewer = ProfileViewer::new(pool);

        viewer.open_profile();
        viewer.close_profile();

        assert!(!viewer.is_visible());
        assert_eq!(viewer.selected_image(), Some("portrait.png"));
    }

    #[test]
    fn every_image_is_reachable() {
        let mut viewer = ProfileViewer::new(ImagePool::default());
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            viewer.open_profile_with(&mut rng);
            seen.insert(viewer.selected_image().unwrap().to_string());
        }

        assert_eq!(seen.len(), DEFAULT_PROFILE_IMAGES.len());
    }
}

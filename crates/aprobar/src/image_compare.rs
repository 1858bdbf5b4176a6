//! Image comparison keywords.
//!
//! Two strategies are exposed: an RGB channel-difference similarity for
//! strict screenshot checks, and a grayscale comparison that resizes the
//! candidate image to the reference's dimensions before measuring, for
//! sources that legitimately differ in size (responsive captures, scaled
//! exports).

use crate::result::{AprobarError, AprobarResult};
use image::imageops::FilterType;
use image::{GrayImage, RgbImage};
use std::path::Path;
use tracing::debug;

/// Configuration for image comparison
#[derive(Debug, Clone, Copy)]
pub struct CompareConfig {
    /// Minimum similarity percentage (0-100) for two images to match
    pub similarity_threshold: f64,
    /// Resize the candidate to the reference's dimensions when they differ
    pub resize_to_match: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 90.0,
            resize_to_match: false,
        }
    }
}

impl CompareConfig {
    /// Set the similarity threshold
    #[must_use]
    pub const fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Enable resizing the candidate image to the reference's size
    #[must_use]
    pub const fn with_resize_to_match(mut self, resize: bool) -> Self {
        self.resize_to_match = resize;
        self
    }
}

/// Result of comparing two images
#[derive(Debug, Clone, Copy)]
pub struct SimilarityResult {
    /// Computed similarity percentage (0-100)
    pub similarity: f64,
    /// Number of channel values compared
    pub total_values: usize,
    /// Whether the similarity met the configured threshold
    pub matches: bool,
}

impl SimilarityResult {
    /// Check the similarity against an explicit threshold (inclusive)
    #[must_use]
    pub fn passes(&self, threshold: f64) -> bool {
        self.similarity >= threshold
    }
}

/// Image comparator
#[derive(Debug, Clone, Default)]
pub struct ImageComparator {
    config: CompareConfig,
}

impl ImageComparator {
    /// Create a new comparator with configuration
    #[must_use]
    pub const fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two image files channel by channel in RGB.
    ///
    /// Similarity is `(1 - diff/255/values) * 100` over the summed
    /// absolute channel differences.
    ///
    /// # Errors
    ///
    /// Returns [`AprobarError::ImageComparison`] when either file cannot
    /// be decoded, or when dimensions differ and resizing is disabled.
    pub fn compare_files(&self, reference: &Path, candidate: &Path) -> AprobarResult<SimilarityResult> {
        let ref_img = load_rgb(reference)?;
        let mut cand_img = load_rgb(candidate)?;

        if ref_img.dimensions() != cand_img.dimensions() {
            if !self.config.resize_to_match {
                return Err(AprobarError::ImageComparison {
                    message: format!(
                        "image dimensions differ: {}x{} vs {}x{}",
                        ref_img.width(),
                        ref_img.height(),
                        cand_img.width(),
                        cand_img.height()
                    ),
                });
            }
            cand_img = image::imageops::resize(
                &cand_img,
                ref_img.width(),
                ref_img.height(),
                FilterType::Triangle,
            );
        }

        let total_values = ref_img.as_raw().len();
        let diff: u64 = ref_img
            .as_raw()
            .iter()
            .zip(cand_img.as_raw().iter())
            .map(|(a, b)| u64::from(a.abs_diff(*b)))
            .sum();

        let similarity = (1.0 - diff as f64 / 255.0 / total_values as f64) * 100.0;
        debug!(
            similarity,
            "Compared {} against {}",
            candidate.display(),
            reference.display()
        );

        Ok(SimilarityResult {
            similarity,
            total_values,
            matches: similarity >= self.config.similarity_threshold,
        })
    }

    /// Compare two image files in grayscale, resizing the candidate to
    /// the reference's dimensions when they differ.
    ///
    /// # Errors
    ///
    /// Returns [`AprobarError::ImageComparison`] when either file cannot
    /// be decoded.
    pub fn compare_grayscale(
        &self,
        reference: &Path,
        candidate: &Path,
    ) -> AprobarResult<SimilarityResult> {
        let ref_img = load_luma(reference)?;
        let mut cand_img = load_luma(candidate)?;

        if ref_img.dimensions() != cand_img.dimensions() {
            cand_img = image::imageops::resize(
                &cand_img,
                ref_img.width(),
                ref_img.height(),
                FilterType::Triangle,
            );
        }

        let total_values = ref_img.as_raw().len();
        let diff: u64 = ref_img
            .as_raw()
            .iter()
            .zip(cand_img.as_raw().iter())
            .map(|(a, b)| u64::from(a.abs_diff(*b)))
            .sum();

        let similarity = (1.0 - diff as f64 / 255.0 / total_values as f64) * 100.0;

        Ok(SimilarityResult {
            similarity,
            total_values,
            matches: similarity >= self.config.similarity_threshold,
        })
    }
}

fn load_rgb(path: &Path) -> AprobarResult<RgbImage> {
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|e| AprobarError::ImageComparison {
            message: format!("failed to decode {}: {e}", path.display()),
        })
}

fn load_luma(path: &Path) -> AprobarResult<GrayImage> {
    image::open(path)
        .map(|img| img.to_luma8())
        .map_err(|e| AprobarError::ImageComparison {
            message: format!("failed to decode {}: {e}", path.display()),
        })
}

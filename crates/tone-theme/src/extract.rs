//! Seed extraction — the seam between raster images and the theme engine.
//!
//! Dominant-color extraction is a collaborator, not part of the color
//! math: anything that can turn image bytes into a ranked list of colors
//! can implement [`SeedExtractor`]. A failure is always surfaced as
//! [`ExtractError::ExtractionFailed`]; callers never get a silent
//! fallback color.
//!
//! [`HistogramExtractor`] is the built-in implementation: quantize each
//! opaque pixel to 5 bits per channel, count bucket populations, and
//! return the mean color of the most populated buckets.

use std::collections::HashMap;

use image::RgbaImage;
use thiserror::Error;
use tone_color::Rgb;

/// Extraction failure, distinct from malformed-color errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The image could not be decoded or yielded no usable pixels
    #[error("Extraction failed: {reason}")]
    ExtractionFailed {
        /// What went wrong
        reason: String,
    },
}

impl ExtractError {
    fn failed(reason: impl Into<String>) -> Self {
        Self::ExtractionFailed { reason: reason.into() }
    }
}

/// Turns encoded image bytes into seed colors.
///
/// Synchronous; an async caller wraps the call in its own
/// task. Implementations must be deterministic for identical input.
pub trait SeedExtractor {
    /// Up to `count` colors, most dominant first.
    ///
    /// # Errors
    ///
    /// [`ExtractError::ExtractionFailed`] if the image cannot be decoded,
    /// has no usable pixels, or `count` is zero.
    fn extract_palette(&self, bytes: &[u8], count: usize) -> Result<Vec<Rgb>, ExtractError>;

    /// The single most dominant color.
    ///
    /// # Errors
    ///
    /// As [`extract_palette`](Self::extract_palette).
    fn extract_color(&self, bytes: &[u8]) -> Result<Rgb, ExtractError> {
        self.extract_palette(bytes, 1)?
            .into_iter()
            .next()
            .ok_or_else(|| ExtractError::failed("extractor returned an empty palette"))
    }
}

// ---------------------------------------------------------------------------
// HistogramExtractor
// ---------------------------------------------------------------------------

/// Bits dropped from each channel when bucketing.
const QUANT_SHIFT: u8 = 3;

/// Channel value above which a pixel counts as "white" background.
const WHITE_THRESHOLD: u8 = 250;

#[derive(Default)]
struct Bucket {
    count: u64,
    sum: [u64; 3],
}

/// Popularity-histogram dominant-color extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramExtractor {
    /// Pixels with alpha below this are ignored.
    pub min_alpha: u8,
    /// Ignore near-white pixels (all channels above 250), which are
    /// usually page background rather than subject.
    pub skip_white: bool,
}

impl Default for HistogramExtractor {
    fn default() -> Self {
        Self { min_alpha: 125, skip_white: true }
    }
}

impl HistogramExtractor {
    /// Rank bucket means of a decoded image by population, largest first.
    /// Ties break on the bucket index so output is deterministic.
    #[must_use]
    pub fn rank(&self, image: &RgbaImage) -> Vec<(Rgb, u64)> {
        let mut buckets: HashMap<[u8; 3], Bucket> = HashMap::new();

        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            if a < self.min_alpha {
                continue;
            }
            if self.skip_white && r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD {
                continue;
            }
            let key = [r >> QUANT_SHIFT, g >> QUANT_SHIFT, b >> QUANT_SHIFT];
            let bucket = buckets.entry(key).or_default();
            bucket.count += 1;
            bucket.sum[0] += u64::from(r);
            bucket.sum[1] += u64::from(g);
            bucket.sum[2] += u64::from(b);
        }

        let mut ranked: Vec<_> = buckets.into_iter().collect();
        ranked.sort_by(|(ka, a), (kb, b)| b.count.cmp(&a.count).then_with(|| ka.cmp(kb)));

        log::debug!(
            "histogram: {} buckets from {}x{} image",
            ranked.len(),
            image.width(),
            image.height()
        );

        ranked
            .into_iter()
            .map(|(_, bucket)| (bucket_mean(&bucket), bucket.count))
            .collect()
    }
}

impl SeedExtractor for HistogramExtractor {
    fn extract_palette(&self, bytes: &[u8], count: usize) -> Result<Vec<Rgb>, ExtractError> {
        if count == 0 {
            return Err(ExtractError::failed("palette size must be at least 1"));
        }

        let image = image::load_from_memory(bytes)
            .map_err(|e| ExtractError::failed(format!("failed to decode image: {e}")))?
            .to_rgba8();

        let palette: Vec<Rgb> =
            self.rank(&image).into_iter().take(count).map(|(color, _)| color).collect();

        if palette.is_empty() {
            return Err(ExtractError::failed("image has no usable pixels"));
        }
        Ok(palette)
    }
}

fn bucket_mean(bucket: &Bucket) -> Rgb {
    let n = bucket.count.max(1);
    let mean = |sum: u64| u8::try_from((sum + n / 2) / n).unwrap_or(u8::MAX);
    Rgb::new(mean(bucket.sum[0]), mean(bucket.sum[1]), mean(bucket.sum[2]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

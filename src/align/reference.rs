use std::path::Path;

use anyhow::Context;
use image::DynamicImage;

use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::RigposeResult;

/// Channel-sum threshold (0..1 units) above which a reference pixel counts as drawn.
pub const MASK_THRESHOLD: f32 = 0.01;

/// Bounding box of the figure in a reference image, in output canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceBBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl ReferenceBBox {
    pub fn new(bounds: Rect, canvas: Canvas) -> Self {
        Self {
            min_x: bounds.x0,
            max_x: bounds.x1,
            min_y: bounds.y0,
            max_y: bounds.y1,
            canvas_width: canvas.width_f64(),
            canvas_height: canvas.height_f64(),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) * 0.5
    }

    /// Bounds of every non-dark pixel of `img`, scaled to a `width` x `height` canvas.
    ///
    /// Returns `None` for an empty or entirely dark image.
    pub fn from_image(img: &DynamicImage, width: u32, height: u32) -> Option<Self> {
        let (w, h) = (img.width(), img.height());
        if w == 0 || h == 0 {
            return None;
        }

        // One-channel sources count their channel once; luma+alpha sums both. Colour images
        // sum RGB, alpha dropped.
        let levels: Vec<f32> = match img.color().channel_count() {
            1 => img.to_luma32f().pixels().map(|px| px.0[0]).collect(),
            2 => img
                .to_luma_alpha32f()
                .pixels()
                .map(|px| px.0.iter().sum::<f32>())
                .collect(),
            _ => img
                .to_rgb32f()
                .pixels()
                .map(|px| px.0.iter().sum::<f32>())
                .collect(),
        };
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (i, &level) in levels.iter().enumerate() {
            let (x, y) = ((i % w as usize) as u32, (i / w as usize) as u32);
            if level <= MASK_THRESHOLD {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }

        let Some((x0, x1, y0, y1)) = bounds else {
            tracing::warn!(w, h, "reference image has no visible pixels");
            return None;
        };

        let sx = f64::from(width) / f64::from(w);
        let sy = f64::from(height) / f64::from(h);
        Some(Self {
            min_x: f64::from(x0) * sx,
            max_x: f64::from(x1) * sx,
            min_y: f64::from(y0) * sy,
            max_y: f64::from(y1) * sy,
            canvas_width: f64::from(width),
            canvas_height: f64::from(height),
        })
    }

    /// Decode an encoded reference image (PNG, JPEG, ...) and derive its bounds.
    pub fn from_bytes(bytes: &[u8], width: u32, height: u32) -> RigposeResult<Option<Self>> {
        let img = image::load_from_memory(bytes).context("decode reference image")?;
        Ok(Self::from_image(&img, width, height))
    }

    pub fn from_path(path: impl AsRef<Path>, width: u32, height: u32) -> RigposeResult<Option<Self>> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("open reference image {}", path.display()))?;
        Ok(Self::from_image(&img, width, height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/align/reference.rs"]
mod tests;

use crate::foundation::error::{RigposeError, RigposeResult};

pub use glam::DVec3;
pub use kurbo::{Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> RigposeResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> RigposeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RigposeError::validation(format!(
                "canvas dimensions must be > 0 (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.width_f64() * 0.5, self.height_f64() * 0.5)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

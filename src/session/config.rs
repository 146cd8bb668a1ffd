use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::align::aligner::AlignmentMode;
use crate::camera::director::CameraProfile;
use crate::foundation::core::Canvas;
use crate::foundation::error::{RigposeError, RigposeResult};
use crate::projection::project::ProjectionConfig;
use crate::projection::view::ViewMode;
use crate::sampling::frames::FrameSampleSpec;

/// Everything one extraction run needs besides the rig and the reference image.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    pub frames: FrameSampleSpec,
    pub canvas: Canvas,
    pub view: ViewMode,
    pub zoom: f64,
    pub global_framing: bool,
    pub alignment: AlignmentMode,
    pub camera: Option<CameraProfile>,
    /// Add synthetic nose, eye, ear and face-contour points.
    pub face: bool,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            frames: FrameSampleSpec::default(),
            canvas: Canvas::default(),
            view: ViewMode::Front,
            zoom: 1.0,
            global_framing: true,
            alignment: AlignmentMode::MatchFullBody,
            camera: None,
            face: true,
        }
    }
}

impl PoseConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> RigposeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RigposeError::serde(format!("parse pose config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> RigposeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RigposeError::validation(format!("open pose config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configurations no run could satisfy.
    ///
    /// Recoverable oddities (zero step, inverted ranges, non-positive zoom) pass and are
    /// normalized downstream.
    pub fn validate(&self) -> RigposeResult<()> {
        self.canvas.validate()?;
        if self.frames.requested_count == 0 {
            return Err(RigposeError::validation("frames.requested_count must be >= 1"));
        }
        if let Some(camera) = &self.camera {
            if camera.rotation.iter().chain(&camera.zoom).any(|v| !v.is_finite()) {
                return Err(RigposeError::validation(
                    "camera curves must contain only finite values",
                ));
            }
        }
        Ok(())
    }

    pub fn projection(&self) -> ProjectionConfig {
        ProjectionConfig {
            canvas: self.canvas,
            view: self.view,
            zoom: self.zoom,
            global_framing: self.global_framing,
            camera: self.camera.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;

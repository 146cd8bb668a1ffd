use crate::camera::director::CameraProfile;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::RigposeResult;
use crate::foundation::math::{DIR_EPS, rotate_about_z};
use crate::joints::catalog::CanonicalJoint;
use crate::joints::frame::{JointFrame, ProjectedFrame};
use crate::projection::view::{ViewMode, estimate_yaw};
use crate::session::context::StabilizationContext;

/// Share of the canvas the fitted skeleton may fill along its limiting axis.
pub const FILL_RATIO: f64 = 0.9;

/// Canvas fitting options for [`project`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub canvas: Canvas,
    pub view: ViewMode,
    pub zoom: f64,
    /// One fit for the whole clip instead of a per-frame fit that follows the hips.
    pub global_framing: bool,
    pub camera: Option<CameraProfile>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            view: ViewMode::Front,
            zoom: 1.0,
            global_framing: true,
            camera: None,
        }
    }
}

impl ProjectionConfig {
    /// Zoom actually applied: non-positive or non-finite values read as 1.
    pub fn effective_zoom(&self) -> f64 {
        if self.zoom.is_finite() && self.zoom > 0.0 {
            self.zoom
        } else {
            1.0
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Fit {
    origin: Point,
    scale: f64,
}

impl Fit {
    fn new(bounds: Rect, origin: Point, canvas: Canvas, zoom: f64) -> Self {
        let w = bounds.width();
        let h = if bounds.height() <= DIR_EPS {
            1.0
        } else {
            bounds.height()
        };
        let scale_w = if w > DIR_EPS {
            FILL_RATIO * canvas.width_f64() / w
        } else {
            FILL_RATIO * canvas.width_f64()
        };
        let scale_h = FILL_RATIO * canvas.height_f64() / h;
        Self {
            origin,
            scale: scale_w.min(scale_h) * zoom,
        }
    }

    fn to_canvas(self, p: Point, canvas: Canvas, frame_zoom: f64) -> Point {
        let c = canvas.center();
        let s = self.scale * frame_zoom;
        Point::new(
            c.x + (p.x - self.origin.x) * s,
            c.y - (p.y - self.origin.y) * s,
        )
    }
}

/// Project a clip of 3D frames onto the canvas.
///
/// Output has one frame per input frame with the same joint names; empty inputs give
/// empty outputs. The clip yaw for [`ViewMode::AutoFaceCamera`] is estimated once from the
/// first non-empty frame and kept in `ctx`.
#[tracing::instrument(skip_all, fields(frames = frames.len(), view = ?config.view))]
pub fn project(
    frames: &[JointFrame],
    config: &ProjectionConfig,
    ctx: &mut StabilizationContext,
) -> RigposeResult<Vec<ProjectedFrame>> {
    config.canvas.validate()?;
    let canvas = config.canvas;
    let zoom = config.effective_zoom();
    let view = config.view;

    let yaw = if view.rotates_to_camera() {
        ctx.clip_yaw_or_insert_with(|| {
            frames
                .iter()
                .find(|f| !f.is_empty())
                .map_or(0.0, estimate_yaw)
        })
    } else {
        0.0
    };
    tracing::debug!(yaw, "clip yaw");

    let camera = config.camera.as_ref();
    let planar: Vec<ProjectedFrame> = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let extra = camera.map_or(0.0, |c| c.rotation_at(i).to_radians());
            frame.map(|_, p| view.world_to_view(rotate_about_z(rotate_about_z(p, yaw), extra)))
        })
        .collect();

    let global = if config.global_framing {
        let bounds = planar
            .iter()
            .filter_map(ProjectedFrame::bounds)
            .reduce(|a, b| a.union(b));
        if bounds.is_none() {
            tracing::debug!("no joints in clip, falling back to per-frame framing");
        }
        bounds.map(|b| Fit::new(b, b.center(), canvas, zoom))
    } else {
        None
    };

    let out = planar
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let frame_zoom = camera.map_or(1.0, |c| c.zoom_at(i));
            let fit = match global {
                Some(fit) => Some(fit),
                None => frame.bounds().map(|b| {
                    let origin = frame.joint(CanonicalJoint::Hips).unwrap_or_else(|| b.center());
                    Fit::new(b, origin, canvas, zoom)
                }),
            };
            match fit {
                Some(fit) => frame.map(|_, p| fit.to_canvas(p, canvas, frame_zoom)),
                None => ProjectedFrame::new(),
            }
        })
        .collect();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/projection/project.rs"]
mod tests;

//! Whole-clip checks that inform framing and frame-step choices before a pose run.

use crate::foundation::core::DVec3;
use crate::foundation::error::RigposeResult;
use crate::joints::catalog::CanonicalJoint;
use crate::joints::resolver::{JointMapping, resolve_rig};
use crate::rig::source::RigSource;

/// Net root displacement (scene units) above which a clip counts as root motion. Path
/// length is compared against twice this value.
pub const ROOT_MOTION_THRESHOLD: f64 = 0.05;

/// Upper bound on root samples taken across the native range.
pub const MAX_MOTION_SAMPLES: i64 = 20;

/// Output frame rate assumed when none is given.
pub const DEFAULT_TARGET_FPS: f64 = 16.0;

/// Summary of one clip as seen through its [`RigSource`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipInfo {
    pub native_start: i64,
    pub native_end: i64,
    pub frame_count: u64,
    pub fps: Option<f64>,
    /// The root (hips) travels through the scene rather than animating in place.
    pub root_motion: bool,
}

impl ClipInfo {
    /// Frame step that brings the source rate down to `target_fps`.
    pub fn suggested_step(&self, target_fps: f64) -> i64 {
        self.fps.map_or(1, |fps| suggested_frame_step(fps, target_fps))
    }
}

/// Evenly spaced frames over `[start, end]`, both endpoints included, at most
/// [`MAX_MOTION_SAMPLES`] of them. Empty when the range has no extent.
pub fn motion_sample_frames(start: i64, end: i64) -> Vec<i64> {
    if end <= start {
        return Vec::new();
    }
    let length = i128::from(end) - i128::from(start);
    let steps = (length + 1).clamp(2, i128::from(MAX_MOTION_SAMPLES));
    (0..steps)
        .map(|i| {
            let offset = length * i / (steps - 1);
            i64::try_from(i128::from(start) + offset).unwrap_or(end)
        })
        .collect()
}

/// Whether a sampled root track travels: net displacement above the threshold, or a path
/// longer than twice it.
pub fn is_root_motion(track: &[DVec3]) -> bool {
    if track.len() < 2 {
        return false;
    }
    let net = track[0].distance(track[track.len() - 1]);
    let path: f64 = track.windows(2).map(|w| w[0].distance(w[1])).sum();
    net > ROOT_MOTION_THRESHOLD || path > ROOT_MOTION_THRESHOLD * 2.0
}

/// Sample the resolved hips across the native range and classify the clip.
///
/// A rig without a hips (root/pelvis) bone is treated as in place.
pub fn detect_root_motion<S: RigSource + ?Sized>(
    source: &S,
    mapping: &JointMapping,
) -> RigposeResult<bool> {
    if mapping.get(CanonicalJoint::Hips).is_none() {
        tracing::debug!("no root bone resolved, assuming in-place clip");
        return Ok(false);
    }
    let (start, end) = source.native_range();
    let frames = motion_sample_frames(start, end);
    if frames.is_empty() {
        return Ok(false);
    }

    let track: Vec<DVec3> = source
        .sample(&frames, mapping)?
        .iter()
        .filter_map(|f| f.joint(CanonicalJoint::Hips))
        .collect();
    let moving = is_root_motion(&track);
    tracing::debug!(samples = track.len(), root_motion = moving, "root motion check");
    Ok(moving)
}

/// Resolve the rig and summarize its clip.
#[tracing::instrument(skip_all)]
pub fn analyze<S: RigSource + ?Sized>(source: &S) -> RigposeResult<ClipInfo> {
    let mapping = resolve_rig(source.bone_names());
    let (native_start, native_end) = source.native_range();
    let native_end = native_end.max(native_start);
    let span = i128::from(native_end) - i128::from(native_start) + 1;
    Ok(ClipInfo {
        native_start,
        native_end,
        frame_count: u64::try_from(span).unwrap_or(u64::MAX),
        fps: source.fps(),
        root_motion: detect_root_motion(source, &mapping)?,
    })
}

/// `round(fps / target_fps)`, never below 1. Non-positive or non-finite rates give 1.
pub fn suggested_frame_step(fps: f64, target_fps: f64) -> i64 {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(fps) || !valid(target_fps) {
        return 1;
    }
    ((fps / target_fps).round_ties_even() as i64).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/rig/analysis.rs"]
mod tests;

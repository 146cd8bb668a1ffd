//! Global rigid alignment of a projected clip onto a reference bounding box.

use crate::align::reference::ReferenceBBox;
use crate::foundation::core::Point;
use crate::joints::catalog::{CanonicalJoint, LEG_JOINTS};
use crate::joints::frame::ProjectedFrame;

/// Full body when the figure fills at least this share of the canvas height...
pub const FULL_MIN_REL_HEIGHT: f64 = 0.85;
/// ...and leaves at most this share of the canvas height free below it.
pub const FULL_MAX_BOTTOM_MARGIN: f64 = 0.08;
/// Upper body when the figure fills at most this share of the canvas height...
pub const UPPER_MAX_REL_HEIGHT: f64 = 0.70;
/// ...or leaves at least this share of the canvas height free below it.
pub const UPPER_MIN_BOTTOM_MARGIN: f64 = 0.12;

const MIN_EXTENT: f64 = 1e-3;

const TOP_LANDMARKS: [CanonicalJoint; 3] = [
    CanonicalJoint::Head,
    CanonicalJoint::Neck,
    CanonicalJoint::Chest,
];

const FULL_BOTTOM_LANDMARKS: [CanonicalJoint; 7] = [
    CanonicalJoint::LeftAnkle,
    CanonicalJoint::RightAnkle,
    CanonicalJoint::LeftKnee,
    CanonicalJoint::RightKnee,
    CanonicalJoint::Hips,
    CanonicalJoint::LeftHip,
    CanonicalJoint::RightHip,
];

const UPPER_BOTTOM_LANDMARKS: [CanonicalJoint; 5] = [
    CanonicalJoint::Hips,
    CanonicalJoint::LeftHip,
    CanonicalJoint::RightHip,
    CanonicalJoint::Spine,
    CanonicalJoint::Chest,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentMode {
    Off,
    #[default]
    MatchFullBody,
    UpperBodyHeadHips,
    /// Classify the reference as full or upper body from its bounding box.
    AutoFullPartial,
}

/// How much of the body the reference shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    Full,
    Upper,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    pub frames: Vec<ProjectedFrame>,
    /// `None` when the clip was left unaligned.
    pub coverage: Option<Coverage>,
}

impl Alignment {
    fn unchanged(frames: Vec<ProjectedFrame>) -> Self {
        Self {
            frames,
            coverage: None,
        }
    }
}

/// Classify a reference box as full or upper body; ambiguous boxes count as full.
pub fn classify_coverage(bbox: &ReferenceBBox) -> Coverage {
    let height = bbox.height();
    if height <= MIN_EXTENT {
        return Coverage::Full;
    }
    let canvas_h = bbox.canvas_height;
    let rel_height = height / canvas_h;
    let bottom_margin = canvas_h - 1.0 - bbox.max_y;

    if rel_height >= FULL_MIN_REL_HEIGHT && bottom_margin <= canvas_h * FULL_MAX_BOTTOM_MARGIN {
        Coverage::Full
    } else if rel_height <= UPPER_MAX_REL_HEIGHT
        || bottom_margin >= canvas_h * UPPER_MIN_BOTTOM_MARGIN
    {
        Coverage::Upper
    } else {
        Coverage::Full
    }
}

fn coverage_for(mode: AlignmentMode, bbox: &ReferenceBBox) -> Option<Coverage> {
    match mode {
        AlignmentMode::Off => None,
        AlignmentMode::MatchFullBody => Some(Coverage::Full),
        AlignmentMode::UpperBodyHeadHips => Some(Coverage::Upper),
        AlignmentMode::AutoFullPartial => Some(classify_coverage(bbox)),
    }
}

/// Landmark y values, or every joint's y when none of the landmarks is present.
fn landmark_ys(frame: &ProjectedFrame, landmarks: &[CanonicalJoint]) -> Vec<f64> {
    let ys: Vec<f64> = landmarks
        .iter()
        .filter_map(|&j| frame.joint(j))
        .map(|p| p.y)
        .collect();
    if ys.is_empty() {
        frame.values().map(|p| p.y).collect()
    } else {
        ys
    }
}

#[derive(Clone, Copy, Debug)]
struct ClipExtent {
    top: f64,
    bottom: f64,
    min_x: f64,
    max_x: f64,
}

fn clip_extent(frames: &[ProjectedFrame], coverage: Coverage) -> Option<ClipExtent> {
    let bottom_landmarks: &[CanonicalJoint] = match coverage {
        Coverage::Full => &FULL_BOTTOM_LANDMARKS,
        Coverage::Upper => &UPPER_BOTTOM_LANDMARKS,
    };

    frames
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| {
            let bounds = f.bounds();
            let top = landmark_ys(f, &TOP_LANDMARKS);
            let bottom = landmark_ys(f, bottom_landmarks);
            ClipExtent {
                top: top.into_iter().fold(f64::INFINITY, f64::min),
                bottom: bottom.into_iter().fold(f64::NEG_INFINITY, f64::max),
                min_x: bounds.map_or(f64::INFINITY, |b| b.x0),
                max_x: bounds.map_or(f64::NEG_INFINITY, |b| b.x1),
            }
        })
        .reduce(|a, b| ClipExtent {
            top: a.top.min(b.top),
            bottom: a.bottom.max(b.bottom),
            min_x: a.min_x.min(b.min_x),
            max_x: a.max_x.max(b.max_x),
        })
}

/// Rescale and shift the whole clip so its body segment spans the reference box.
///
/// One scale and offset is used for every frame. Upper-body coverage additionally drops
/// knees and ankles and crops anything below the reference box.
pub fn align(
    frames: Vec<ProjectedFrame>,
    bbox: Option<&ReferenceBBox>,
    mode: AlignmentMode,
) -> Alignment {
    let Some(bbox) = bbox else {
        return Alignment::unchanged(frames);
    };
    let ref_height = bbox.height();
    if ref_height <= MIN_EXTENT {
        tracing::warn!(ref_height, "reference box is too flat, skipping alignment");
        return Alignment::unchanged(frames);
    }
    let Some(coverage) = coverage_for(mode, bbox) else {
        return Alignment::unchanged(frames);
    };
    tracing::info!(?coverage, ?mode, "aligning clip to reference");

    let Some(extent) = clip_extent(&frames, coverage) else {
        return Alignment::unchanged(frames);
    };
    let global_height = extent.bottom - extent.top;
    if global_height <= MIN_EXTENT {
        tracing::warn!(global_height, "clip has no vertical extent, skipping alignment");
        return Alignment::unchanged(frames);
    }

    let scale = ref_height / global_height;
    let global_cx = (extent.min_x + extent.max_x) * 0.5;
    let ref_cx = bbox.center_x();

    let frames = frames
        .into_iter()
        .map(|frame| {
            let mut aligned = frame.map(|_, p| {
                Point::new(
                    ref_cx + (p.x - global_cx) * scale,
                    bbox.min_y + (p.y - extent.top) / global_height * ref_height,
                )
            });
            if coverage == Coverage::Upper {
                aligned.retain(|name, p| {
                    !LEG_JOINTS.iter().any(|j| j.name() == name) && p.y <= bbox.max_y
                });
            }
            aligned
        })
        .collect();

    Alignment {
        frames,
        coverage: Some(coverage),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/align/aligner.rs"]
mod tests;

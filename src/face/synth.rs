//! Procedural face landmarks built from the head, neck, chest and shoulders.
//!
//! Rig-provided eye and nose bones are always replaced so faces look the same across rigs.
//! Ears from the rig are kept when present.

use std::f64::consts::PI;

use crate::foundation::core::DVec3;
use crate::foundation::math::normalize_or;
use crate::joints::catalog::CanonicalJoint;
use crate::joints::frame::JointFrame;
use crate::session::context::StabilizationContext;

/// Whole-face enlargement applied on top of the measured head radius.
pub const FACE_SCALE: f64 = 1.10;

const DEFAULT_SHOULDER_SPAN: f64 = 0.25;
const DEFAULT_RADIUS: f64 = 0.25;
const MIN_RADIUS: f64 = 1e-3;

pub const NOSE_DOTS: usize = 6;
pub const EYE_DOTS: usize = 5;
pub const MOUTH_DOTS: usize = 8;
pub const CHIN_DOTS: usize = 11;

/// Local orthonormal frame at the head plus the face radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBasis {
    pub center: DVec3,
    pub up: DVec3,
    pub right: DVec3,
    pub forward: DVec3,
    pub radius: f64,
}

impl FaceBasis {
    /// Build the head basis for `frame`, or `None` without a head joint.
    ///
    /// Updates the context's forward vector so consecutive frames never flip.
    pub fn from_frame(frame: &JointFrame, ctx: &mut StabilizationContext) -> Option<Self> {
        let head = frame.joint(CanonicalJoint::Head)?;
        let neck = frame.joint(CanonicalJoint::Neck);
        let chest = frame.joint(CanonicalJoint::Chest);

        let up = normalize_or(neck.map_or(DVec3::Z, |n| head - n), DVec3::Z);

        let (right, shoulder_span) = match (
            frame.joint(CanonicalJoint::LeftShoulder),
            frame.joint(CanonicalJoint::RightShoulder),
        ) {
            (Some(l), Some(r)) => {
                let span = r - l;
                (normalize_or(span, DVec3::X), span.length())
            }
            _ => (DVec3::X, DEFAULT_SHOULDER_SPAN),
        };

        let mut forward = normalize_or(up.cross(right), DVec3::Y);
        if let Some(chest) = chest {
            let away = head - chest;
            if away.length() > 1e-6 && forward.dot(away) < 0.0 {
                forward = -forward;
            }
        }
        let forward = ctx.stabilize_forward(forward);

        let mut radius = neck.map_or(0.0, |n| (head - n).length());
        if radius < MIN_RADIUS && shoulder_span > 0.0 {
            radius = shoulder_span * 0.45;
        }
        if radius < MIN_RADIUS {
            radius = DEFAULT_RADIUS;
        }

        Some(Self {
            center: head,
            up,
            right,
            forward,
            radius: radius * FACE_SCALE,
        })
    }

    /// Offset from `origin` in radius units along up/right/forward.
    pub fn offset(&self, origin: DVec3, up: f64, right: f64, forward: f64) -> DVec3 {
        origin + (self.up * up + self.right * right + self.forward * forward) * self.radius
    }
}

/// Add nose, eyes, ears and the dense face clusters to one frame.
///
/// Frames without a head are returned unchanged and leave the context untouched.
pub fn synthesize(mut frame: JointFrame, ctx: &mut StabilizationContext) -> JointFrame {
    let Some(basis) = FaceBasis::from_frame(&frame, ctx) else {
        return frame;
    };
    let c = basis.center;

    let nose = basis.offset(c, 0.0, 0.0, 0.55);
    frame.insert_joint(CanonicalJoint::Nose, nose);

    // Eyes sit above the nose so they never drop under the mouth.
    let eye_base = basis.offset(nose, 0.22, 0.0, -0.05);
    let left_eye = basis.offset(eye_base, 0.0, -0.32, 0.0);
    let right_eye = basis.offset(eye_base, 0.0, 0.32, 0.0);
    frame.insert_joint(CanonicalJoint::LeftEye, left_eye);
    frame.insert_joint(CanonicalJoint::RightEye, right_eye);

    for (joint, side) in [(CanonicalJoint::LeftEar, -1.0), (CanonicalJoint::RightEar, 1.0)] {
        if frame.joint(joint).is_none() {
            frame.insert_joint(joint, basis.offset(c, 0.15, 0.55 * side, -0.10));
        }
    }

    for i in 0..NOSE_DOTS {
        frame.insert(
            format!("nose_dot_{i}"),
            basis.offset(nose, -0.08 * i as f64, 0.0, 0.0),
        );
    }

    for (tag, centre) in [("L", left_eye), ("R", right_eye)] {
        for i in 0..EYE_DOTS {
            let angle = (-0.6 + 0.3 * i as f64) * PI;
            let p = basis.offset(centre, angle.sin() * 0.04, angle.cos() * 0.06, 0.0);
            frame.insert(format!("eye_{tag}_{i}"), p);
        }
    }

    let mouth_center = basis.offset(nose, -0.18, 0.0, 0.0);
    for i in 0..MOUTH_DOTS {
        let t = -1.0 + 2.0 * (i as f64 / (MOUTH_DOTS - 1) as f64);
        let p = basis.offset(mouth_center, -(1.0 - t * t) * 0.08, t * 0.25, 0.0);
        frame.insert(format!("mouth_{i}"), p);
    }

    // Jaw ends level with the eyes; the chin drops well below the mouth.
    let eye_mid = (left_eye + right_eye) * 0.5;
    let jaw_left = basis.offset(eye_mid, 0.0, -0.7, 0.0);
    let jaw_right = basis.offset(eye_mid, 0.0, 0.7, 0.0);
    let chin = basis.offset(eye_mid, -2.1, 0.0, 0.0);
    for i in 0..CHIN_DOTS {
        let t = i as f64 / (CHIN_DOTS - 1) as f64;
        let one_t = 1.0 - t;
        let p = jaw_left * (one_t * one_t) + chin * (2.0 * one_t * t) + jaw_right * (t * t);
        frame.insert(format!("chin_{i}"), p);
    }

    frame
}

#[cfg(test)]
#[path = "../../tests/unit/face/synth.rs"]
mod tests;

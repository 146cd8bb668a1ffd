//! View planes and clip yaw estimation.

use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{DVec3, Point};
use crate::foundation::math::DIR_EPS;
use crate::joints::catalog::CanonicalJoint;
use crate::joints::frame::JointFrame;

/// Which world plane a frame is flattened onto.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Front,
    Back,
    LeftSide,
    RightSide,
    Top,
    /// Front view after rotating the clip so the character faces the camera.
    AutoFaceCamera,
}

impl ViewMode {
    pub fn rotates_to_camera(self) -> bool {
        matches!(self, Self::AutoFaceCamera)
    }

    /// Map a world position to view-plane coordinates (y up).
    pub fn world_to_view(self, p: DVec3) -> Point {
        match self {
            Self::Front | Self::AutoFaceCamera => Point::new(p.x, p.z),
            Self::Back => Point::new(-p.x, p.z),
            Self::LeftSide => Point::new(-p.y, p.z),
            Self::RightSide => Point::new(p.y, p.z),
            Self::Top => Point::new(p.x, p.y),
        }
    }
}

fn horizontal_unit(v: DVec3) -> Option<DVec3> {
    let flat = DVec3::new(v.x, v.y, 0.0);
    (flat.length() > DIR_EPS).then(|| flat.normalize())
}

fn body_forward(frame: &JointFrame) -> Option<DVec3> {
    let joint = |j| frame.joint(j);

    if let (Some(l), Some(r)) = (
        joint(CanonicalJoint::LeftShoulder),
        joint(CanonicalJoint::RightShoulder),
    ) {
        let mut forward = DVec3::Z.cross(r - l);
        if let (Some(head), Some(hips)) = (joint(CanonicalJoint::Head), joint(CanonicalJoint::Hips))
        {
            if let (Some(f), Some(h)) = (horizontal_unit(forward), horizontal_unit(head - hips)) {
                if f.dot(h) < 0.0 {
                    forward = -forward;
                }
            }
        }
        return Some(forward);
    }

    match (
        joint(CanonicalJoint::Hips),
        joint(CanonicalJoint::LeftHip),
        joint(CanonicalJoint::RightHip),
    ) {
        (Some(_), Some(l), Some(r)) => Some(DVec3::Z.cross(r - l)),
        _ => None,
    }
}

/// Yaw (radians, about +Z) that turns the body in `frame` to face the -Y camera.
///
/// Uses the shoulder line, then the hip line; returns 0 when neither is available or the
/// resulting forward vector has no horizontal component.
pub fn estimate_yaw(frame: &JointFrame) -> f64 {
    let Some(forward) = body_forward(frame) else {
        tracing::debug!("no shoulder or hip line for yaw estimate, using 0");
        return 0.0;
    };
    if DVec3::new(forward.x, forward.y, 0.0).length() <= DIR_EPS {
        return 0.0;
    }
    -FRAC_PI_2 - forward.y.atan2(forward.x)
}

#[cfg(test)]
#[path = "../../tests/unit/projection/view.rs"]
mod tests;

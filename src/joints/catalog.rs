//! The fixed landmark schema every rig is mapped onto.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{RigposeError, RigposeResult};

/// Body side encoded in a canonical joint name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

macro_rules! canonical_joints {
    ($($variant:ident => $name:literal,)+) => {
        /// Canonical anatomical landmark.
        ///
        /// Declaration order is the catalog order: resolution, sampling and diagnostics all
        /// walk joints in this order.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum CanonicalJoint {
            $($variant,)+
        }

        impl CanonicalJoint {
            /// Every canonical joint, in catalog order.
            pub const ALL: &'static [CanonicalJoint] = &[$(CanonicalJoint::$variant,)+];

            /// Stable snake_case name, used as the key in joint and projected frames.
            pub fn name(self) -> &'static str {
                match self {
                    $(CanonicalJoint::$variant => $name,)+
                }
            }
        }

        impl FromStr for CanonicalJoint {
            type Err = RigposeError;

            fn from_str(s: &str) -> RigposeResult<Self> {
                match s {
                    $($name => Ok(CanonicalJoint::$variant),)+
                    other => Err(RigposeError::validation(format!(
                        "unknown canonical joint '{other}'"
                    ))),
                }
            }
        }
    };
}

canonical_joints! {
    Hips => "hips",
    Spine => "spine",
    Chest => "chest",
    Neck => "neck",
    Head => "head",

    LeftShoulder => "left_shoulder",
    LeftElbow => "left_elbow",
    LeftWrist => "left_wrist",

    RightShoulder => "right_shoulder",
    RightElbow => "right_elbow",
    RightWrist => "right_wrist",

    LeftHip => "left_hip",
    LeftKnee => "left_knee",
    LeftAnkle => "left_ankle",

    RightHip => "right_hip",
    RightKnee => "right_knee",
    RightAnkle => "right_ankle",

    LeftThumbBase => "left_thumb_base",
    LeftThumbTip => "left_thumb_tip",
    LeftIndexBase => "left_index_base",
    LeftIndexTip => "left_index_tip",
    LeftMiddleBase => "left_middle_base",
    LeftMiddleTip => "left_middle_tip",
    LeftRingBase => "left_ring_base",
    LeftRingTip => "left_ring_tip",
    LeftPinkyBase => "left_pinky_base",
    LeftPinkyTip => "left_pinky_tip",

    RightThumbBase => "right_thumb_base",
    RightThumbTip => "right_thumb_tip",
    RightIndexBase => "right_index_base",
    RightIndexTip => "right_index_tip",
    RightMiddleBase => "right_middle_base",
    RightMiddleTip => "right_middle_tip",
    RightRingBase => "right_ring_base",
    RightRingTip => "right_ring_tip",
    RightPinkyBase => "right_pinky_base",
    RightPinkyTip => "right_pinky_tip",

    LeftEye => "left_eye",
    RightEye => "right_eye",
    Nose => "nose",
    LeftEar => "left_ear",
    RightEar => "right_ear",
}

impl CanonicalJoint {
    /// Side hint taken from the `left_` / `right_` prefix.
    pub fn side(self) -> Option<Side> {
        let name = self.name();
        if name.starts_with("left_") {
            Some(Side::Left)
        } else if name.starts_with("right_") {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Name with any side prefix removed (`left_elbow` -> `elbow`).
    pub fn base_name(self) -> &'static str {
        let name = self.name();
        name.strip_prefix("left_")
            .or_else(|| name.strip_prefix("right_"))
            .unwrap_or(name)
    }

    pub fn is_leg(self) -> bool {
        LEG_JOINTS.contains(&self)
    }
}

impl fmt::Display for CanonicalJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-leg joints hidden when a reference only shows the upper body.
pub const LEG_JOINTS: [CanonicalJoint; 4] = [
    CanonicalJoint::LeftKnee,
    CanonicalJoint::LeftAnkle,
    CanonicalJoint::RightKnee,
    CanonicalJoint::RightAnkle,
];

use CanonicalJoint as J;

/// Body and hand bones of the stick figure.
pub const SKELETON_SEGMENTS: &[(CanonicalJoint, CanonicalJoint)] = &[
    (J::Hips, J::Spine),
    (J::Spine, J::Chest),
    (J::Chest, J::Neck),
    (J::Neck, J::Head),
    (J::Chest, J::LeftShoulder),
    (J::LeftShoulder, J::LeftElbow),
    (J::LeftElbow, J::LeftWrist),
    (J::Chest, J::RightShoulder),
    (J::RightShoulder, J::RightElbow),
    (J::RightElbow, J::RightWrist),
    (J::Hips, J::LeftHip),
    (J::LeftHip, J::LeftKnee),
    (J::LeftKnee, J::LeftAnkle),
    (J::Hips, J::RightHip),
    (J::RightHip, J::RightKnee),
    (J::RightKnee, J::RightAnkle),
    (J::LeftWrist, J::LeftThumbBase),
    (J::LeftThumbBase, J::LeftThumbTip),
    (J::LeftWrist, J::LeftIndexBase),
    (J::LeftIndexBase, J::LeftIndexTip),
    (J::LeftWrist, J::LeftMiddleBase),
    (J::LeftMiddleBase, J::LeftMiddleTip),
    (J::LeftWrist, J::LeftRingBase),
    (J::LeftRingBase, J::LeftRingTip),
    (J::LeftWrist, J::LeftPinkyBase),
    (J::LeftPinkyBase, J::LeftPinkyTip),
    (J::RightWrist, J::RightThumbBase),
    (J::RightThumbBase, J::RightThumbTip),
    (J::RightWrist, J::RightIndexBase),
    (J::RightIndexBase, J::RightIndexTip),
    (J::RightWrist, J::RightMiddleBase),
    (J::RightMiddleBase, J::RightMiddleTip),
    (J::RightWrist, J::RightRingBase),
    (J::RightRingBase, J::RightRingTip),
    (J::RightWrist, J::RightPinkyBase),
    (J::RightPinkyBase, J::RightPinkyTip),
];

/// Coarse face outline connecting the single-point face landmarks.
pub const FACE_SEGMENTS: &[(CanonicalJoint, CanonicalJoint)] = &[
    (J::LeftEye, J::RightEye),
    (J::LeftEye, J::Nose),
    (J::RightEye, J::Nose),
    (J::LeftEar, J::LeftEye),
    (J::RightEar, J::RightEye),
    (J::Nose, J::Head),
];

#[cfg(test)]
#[path = "../../tests/unit/joints/catalog.rs"]
mod tests;

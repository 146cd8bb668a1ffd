//! Static naming data for the bone resolver.
//!
//! Extending rig support means adding literals here; the matching algorithm in
//! [`crate::joints::resolver`] never names a rig convention directly.

use crate::joints::catalog::{CanonicalJoint, Side};

/// Literal bone-name variants for one canonical joint, most specific first.
pub fn bone_aliases(joint: CanonicalJoint) -> &'static [&'static str] {
    use CanonicalJoint as J;
    match joint {
        J::Hips => &[
            "mixamorig:Hips",
            "mixamorig2:Hips",
            "Hips",
            "hips",
            "pelvis",
            "Pelvis",
            "root",
            "Root",
            "RootNode",
        ],
        J::Spine => &[
            "mixamorig:Spine",
            "mixamorig2:Spine",
            "Spine",
            "spine",
            "spine_01",
            "Spine1",
            "spine1",
        ],
        J::Chest => &[
            "mixamorig:Spine2",
            "mixamorig2:Spine2",
            "mixamorig:Spine1",
            "mixamorig2:Spine1",
            "Spine2",
            "Spine1",
            "spine_02",
            "spine_03",
            "upperchest",
            "upper_chest",
            "spine_upper",
            "spine2",
        ],
        J::Neck => &[
            "mixamorig:Neck",
            "mixamorig2:Neck",
            "Neck",
            "neck",
            "neck_01",
            "neck1",
        ],
        J::Head => &[
            "mixamorig:Head",
            "mixamorig2:Head",
            "Head",
            "head",
            "head_01",
            "head1",
        ],

        J::LeftShoulder => &[
            "mixamorig:LeftShoulder",
            "mixamorig2:LeftShoulder",
            "LeftShoulder",
            "clavicle_l",
            "shoulder_l",
            "upperarm_parent_l",
        ],
        J::LeftElbow => &[
            "mixamorig:LeftForeArm",
            "mixamorig2:LeftForeArm",
            "LeftForeArm",
            "lowerarm_l",
            "lowerarm_twist_01_l",
            "elbow_l",
        ],
        J::LeftWrist => &[
            "mixamorig:LeftHand",
            "mixamorig2:LeftHand",
            "LeftHand",
            "hand_l",
            "hand_l_ik",
        ],
        J::RightShoulder => &[
            "mixamorig:RightShoulder",
            "mixamorig2:RightShoulder",
            "RightShoulder",
            "clavicle_r",
            "shoulder_r",
            "upperarm_parent_r",
        ],
        J::RightElbow => &[
            "mixamorig:RightForeArm",
            "mixamorig2:RightForeArm",
            "RightForeArm",
            "lowerarm_r",
            "lowerarm_twist_01_r",
            "elbow_r",
        ],
        J::RightWrist => &[
            "mixamorig:RightHand",
            "mixamorig2:RightHand",
            "RightHand",
            "hand_r",
            "hand_r_ik",
        ],

        J::LeftHip => &[
            "mixamorig:LeftUpLeg",
            "mixamorig2:LeftUpLeg",
            "LeftUpLeg",
            "thigh_l",
            "upperleg_l",
        ],
        J::LeftKnee => &[
            "mixamorig:LeftLeg",
            "mixamorig2:LeftLeg",
            "LeftLeg",
            "calf_l",
            "lowerleg_l",
            "knee_l",
        ],
        J::LeftAnkle => &[
            "mixamorig:LeftFoot",
            "mixamorig2:LeftFoot",
            "LeftFoot",
            "foot_l",
            "ankle_l",
        ],
        J::RightHip => &[
            "mixamorig:RightUpLeg",
            "mixamorig2:RightUpLeg",
            "RightUpLeg",
            "thigh_r",
            "upperleg_r",
        ],
        J::RightKnee => &[
            "mixamorig:RightLeg",
            "mixamorig2:RightLeg",
            "RightLeg",
            "calf_r",
            "lowerleg_r",
            "knee_r",
        ],
        J::RightAnkle => &[
            "mixamorig:RightFoot",
            "mixamorig2:RightFoot",
            "RightFoot",
            "foot_r",
            "ankle_r",
        ],

        J::LeftThumbBase => &[
            "mixamorig:LeftHandThumb1",
            "mixamorig2:LeftHandThumb1",
            "LeftHandThumb1",
            "thumb_01_l",
        ],
        J::LeftThumbTip => &[
            "mixamorig:LeftHandThumb3",
            "mixamorig2:LeftHandThumb3",
            "LeftHandThumb3",
            "thumb_03_l",
            "thumb_02_l",
        ],
        J::LeftIndexBase => &[
            "mixamorig:LeftHandIndex1",
            "mixamorig2:LeftHandIndex1",
            "LeftHandIndex1",
            "index_01_l",
        ],
        J::LeftIndexTip => &[
            "mixamorig:LeftHandIndex3",
            "mixamorig2:LeftHandIndex3",
            "LeftHandIndex3",
            "index_03_l",
            "index_02_l",
        ],
        J::LeftMiddleBase => &[
            "mixamorig:LeftHandMiddle1",
            "mixamorig2:LeftHandMiddle1",
            "LeftHandMiddle1",
            "middle_01_l",
        ],
        J::LeftMiddleTip => &[
            "mixamorig:LeftHandMiddle3",
            "mixamorig2:LeftHandMiddle3",
            "LeftHandMiddle3",
            "middle_03_l",
            "middle_02_l",
        ],
        J::LeftRingBase => &[
            "mixamorig:LeftHandRing1",
            "mixamorig2:LeftHandRing1",
            "LeftHandRing1",
            "ring_01_l",
        ],
        J::LeftRingTip => &[
            "mixamorig:LeftHandRing3",
            "mixamorig2:LeftHandRing3",
            "LeftHandRing3",
            "ring_03_l",
            "ring_02_l",
        ],
        J::LeftPinkyBase => &[
            "mixamorig:LeftHandPinky1",
            "mixamorig2:LeftHandPinky1",
            "LeftHandPinky1",
            "pinky_01_l",
            "little_01_l",
        ],
        J::LeftPinkyTip => &[
            "mixamorig:LeftHandPinky3",
            "mixamorig2:LeftHandPinky3",
            "LeftHandPinky3",
            "pinky_03_l",
            "pinky_02_l",
            "little_03_l",
        ],

        J::RightThumbBase => &[
            "mixamorig:RightHandThumb1",
            "mixamorig2:RightHandThumb1",
            "RightHandThumb1",
            "thumb_01_r",
        ],
        J::RightThumbTip => &[
            "mixamorig:RightHandThumb3",
            "mixamorig2:RightHandThumb3",
            "RightHandThumb3",
            "thumb_03_r",
            "thumb_02_r",
        ],
        J::RightIndexBase => &[
            "mixamorig:RightHandIndex1",
            "mixamorig2:RightHandIndex1",
            "RightHandIndex1",
            "index_01_r",
        ],
        J::RightIndexTip => &[
            "mixamorig:RightHandIndex3",
            "mixamorig2:RightHandIndex3",
            "RightHandIndex3",
            "index_03_r",
            "index_02_r",
        ],
        J::RightMiddleBase => &[
            "mixamorig:RightHandMiddle1",
            "mixamorig2:RightHandMiddle1",
            "RightHandMiddle1",
            "middle_01_r",
        ],
        J::RightMiddleTip => &[
            "mixamorig:RightHandMiddle3",
            "mixamorig2:RightHandMiddle3",
            "RightHandMiddle3",
            "middle_03_r",
            "middle_02_r",
        ],
        J::RightRingBase => &[
            "mixamorig:RightHandRing1",
            "mixamorig2:RightHandRing1",
            "RightHandRing1",
            "ring_01_r",
        ],
        J::RightRingTip => &[
            "mixamorig:RightHandRing3",
            "mixamorig2:RightHandRing3",
            "RightHandRing3",
            "ring_03_r",
            "ring_02_r",
        ],
        J::RightPinkyBase => &[
            "mixamorig:RightHandPinky1",
            "mixamorig2:RightHandPinky1",
            "RightHandPinky1",
            "pinky_01_r",
            "little_01_r",
        ],
        J::RightPinkyTip => &[
            "mixamorig:RightHandPinky3",
            "mixamorig2:RightHandPinky3",
            "RightHandPinky3",
            "pinky_03_r",
            "pinky_02_r",
            "little_03_r",
        ],

        J::LeftEye => &["eye_l", "Eye_L", "eye_left"],
        J::RightEye => &["eye_r", "Eye_R", "eye_right"],
        J::Nose => &["nose", "Nose"],
        J::LeftEar => &["ear_l", "Ear_L"],
        J::RightEar => &["ear_r", "Ear_R"],
    }
}

/// Synonym tokens for a body-part token of a canonical name.
pub fn hint_tokens(token: &str) -> &'static [&'static str] {
    match token {
        "hip" => &["hip", "pelvis", "upleg", "thigh"],
        "knee" => &["knee", "leg", "calf", "lowerleg"],
        "ankle" => &["ankle", "foot"],
        "shoulder" => &["shoulder", "clavicle"],
        "elbow" => &["elbow", "forearm", "lowerarm"],
        "wrist" => &["wrist", "hand"],
        "spine" => &["spine"],
        "chest" => &["chest", "upperchest", "rib"],
        "neck" => &["neck"],
        "head" => &["head"],
        "eye" => &["eye"],
        "ear" => &["ear"],
        "nose" => &["nose"],
        "thumb" => &["thumb"],
        "index" => &["index"],
        "middle" => &["middle"],
        "ring" => &["ring"],
        "pinky" => &["pinky", "little"],
        _ => &[],
    }
}

/// Substrings marking a normalized bone name as belonging to `side`.
pub fn side_markers(side: Side) -> &'static [&'static str] {
    match side {
        Side::Left => &[".l", "_l", " l_", "left"],
        Side::Right => &[".r", "_r", " r_", "right"],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/joints/aliases.rs"]
mod tests;

//! rigpose turns skinned 3D skeleton animation into stable, normalized 2D stick-figure pose
//! sequences, the kind used as control signals for pose-conditioned image generation.
//!
//! The pipeline is session-oriented:
//!
//! - Describe the run with a [`PoseConfig`] (frame policy, canvas, view, alignment)
//! - Hand a [`RigSource`] (for example a [`BakedRig`]) to a [`PoseSession`]
//! - Get back a [`PoseOutput`]: one [`ProjectedFrame`] per output frame plus [`Diagnostics`]
//!
//! The individual stages (bone resolution, frame sampling, face synthesis, projection and
//! reference alignment) are exported as free functions for callers that drive them directly.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod align;
pub(crate) mod camera;
pub(crate) mod face;
pub(crate) mod joints;
pub(crate) mod projection;
pub(crate) mod rig;
pub(crate) mod sampling;
pub(crate) mod session;

pub use crate::foundation::core::{Canvas, DVec3, Point, Rect, Vec2};
pub use crate::foundation::error::{RigposeError, RigposeResult};

pub use crate::align::aligner::{
    Alignment, AlignmentMode, Coverage, FULL_MAX_BOTTOM_MARGIN, FULL_MIN_REL_HEIGHT,
    UPPER_MAX_REL_HEIGHT, UPPER_MIN_BOTTOM_MARGIN, align, classify_coverage,
};
pub use crate::align::reference::{MASK_THRESHOLD, ReferenceBBox};
pub use crate::camera::director::{
    CameraBuild, CameraProfile, ROTATION_RANGE, STATUS_OK, ZOOM_RANGE,
};
pub use crate::face::synth::{
    CHIN_DOTS, EYE_DOTS, FACE_SCALE, FaceBasis, MOUTH_DOTS, NOSE_DOTS, synthesize,
};
pub use crate::joints::aliases::{bone_aliases, hint_tokens, side_markers};
pub use crate::joints::catalog::{
    CanonicalJoint, FACE_SEGMENTS, LEG_JOINTS, SKELETON_SEGMENTS, Side,
};
pub use crate::joints::frame::{JointFrame, JointMap, ProjectedFrame};
pub use crate::joints::resolver::{
    BoneId, BoneResolver, JointMapping, MIN_HEURISTIC_SCORE, MatchTier, normalize_bone_name,
    resolve, resolve_rig, score_bone,
};
pub use crate::projection::project::{FILL_RATIO, ProjectionConfig, project};
pub use crate::projection::view::{ViewMode, estimate_yaw};
pub use crate::rig::analysis::{
    ClipInfo, DEFAULT_TARGET_FPS, MAX_MOTION_SAMPLES, ROOT_MOTION_THRESHOLD, analyze,
    detect_root_motion, is_root_motion, motion_sample_frames, suggested_frame_step,
};
pub use crate::rig::baked::{BakedRig, BoneTrack};
pub use crate::rig::source::RigSource;
pub use crate::sampling::frames::{FrameMode, FrameSampleSpec, compute_frames, pad_to_count};
pub use crate::session::config::PoseConfig;
pub use crate::session::context::StabilizationContext;
pub use crate::session::extract::{Extraction, ExtractionSession};
pub use crate::session::pose::{Diagnostics, PoseOutput, PoseSession};

use crate::foundation::error::RigposeResult;
use crate::joints::frame::JointFrame;
use crate::joints::resolver::JointMapping;

/// Boundary to whatever engine owns the animated skeleton.
///
/// Implementations evaluate the whole clip in one synchronous call. A source may return
/// fewer frames than requested; callers pad with the last frame.
pub trait RigSource {
    /// Bone names in rig order. [`crate::BoneId`] indexes into this list.
    fn bone_names(&self) -> &[String];

    /// First and last frame of the animation, inclusive.
    fn native_range(&self) -> (i64, i64);

    /// World-space positions of every resolved joint at each requested frame.
    ///
    /// Frames are keyed by canonical joint name; unresolved joints are absent.
    fn sample(&self, frames: &[i64], mapping: &JointMapping) -> RigposeResult<Vec<JointFrame>>;

    /// Playback rate of the animation, when the source knows it.
    fn fps(&self) -> Option<f64> {
        None
    }
}

impl<T: RigSource + ?Sized> RigSource for &T {
    fn bone_names(&self) -> &[String] {
        (**self).bone_names()
    }

    fn native_range(&self) -> (i64, i64) {
        (**self).native_range()
    }

    fn sample(&self, frames: &[i64], mapping: &JointMapping) -> RigposeResult<Vec<JointFrame>> {
        (**self).sample(frames, mapping)
    }

    fn fps(&self) -> Option<f64> {
        (**self).fps()
    }
}

//! Pre-evaluated bone tracks, held in memory or loaded from JSON.
//!
//! ```json
//! {
//!   "frame_start": 1,
//!   "fps": 30.0,
//!   "bones": [
//!     { "name": "mixamorig:Hips", "positions": [[0.0, 0.0, 1.0], [0.0, 0.1, 1.0]] }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::DVec3;
use crate::foundation::error::{RigposeError, RigposeResult};
use crate::joints::frame::JointFrame;
use crate::joints::resolver::JointMapping;
use crate::rig::source::RigSource;

/// One bone's world-space head position per frame, starting at the rig's `frame_start`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoneTrack {
    pub name: String,
    pub positions: Vec<DVec3>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct BakedRigDef {
    #[serde(default)]
    frame_start: i64,
    #[serde(default)]
    fps: Option<f64>,
    bones: Vec<BoneTrack>,
}

/// A [`RigSource`] over fully baked bone tracks.
#[derive(Clone, Debug, PartialEq)]
pub struct BakedRig {
    frame_start: i64,
    frame_count: usize,
    fps: Option<f64>,
    names: Vec<String>,
    tracks: Vec<Vec<DVec3>>,
}

impl BakedRig {
    pub fn new(frame_start: i64, bones: Vec<BoneTrack>) -> RigposeResult<Self> {
        let mut names = Vec::with_capacity(bones.len());
        let mut tracks = Vec::with_capacity(bones.len());
        for bone in bones {
            if names.contains(&bone.name) {
                return Err(RigposeError::rig(format!("duplicate bone name '{}'", bone.name)));
            }
            if bone.positions.iter().any(|p| !p.is_finite()) {
                return Err(RigposeError::rig(format!(
                    "bone '{}' has non-finite positions",
                    bone.name
                )));
            }
            names.push(bone.name);
            tracks.push(bone.positions);
        }
        let frame_count = tracks.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self {
            frame_start,
            frame_count,
            fps: None,
            names,
            tracks,
        })
    }

    /// Record the playback rate. Non-positive or non-finite rates are dropped.
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = (fps.is_finite() && fps > 0.0).then_some(fps);
        self
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> RigposeResult<Self> {
        let def: BakedRigDef = serde_json::from_reader(r)
            .map_err(|e| RigposeError::serde(format!("parse baked rig JSON: {e}")))?;
        let rig = Self::new(def.frame_start, def.bones)?;
        Ok(match def.fps {
            Some(fps) => rig.with_fps(fps),
            None => rig,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> RigposeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RigposeError::validation(format!("open baked rig JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn position(&self, bone: usize, frame: i64) -> Option<DVec3> {
        let track = self.tracks.get(bone)?;
        let last = track.len().checked_sub(1)?;
        let offset = usize::try_from(frame.saturating_sub(self.frame_start)).unwrap_or(0);
        track.get(offset.min(last)).copied()
    }
}

impl RigSource for BakedRig {
    fn bone_names(&self) -> &[String] {
        &self.names
    }

    fn native_range(&self) -> (i64, i64) {
        let span = i64::try_from(self.frame_count.saturating_sub(1)).unwrap_or(i64::MAX);
        (self.frame_start, self.frame_start.saturating_add(span))
    }

    /// Frames outside the baked range read the nearest baked frame.
    fn sample(&self, frames: &[i64], mapping: &JointMapping) -> RigposeResult<Vec<JointFrame>> {
        if mapping.bones() != self.names.as_slice() {
            return Err(RigposeError::rig(
                "joint mapping was resolved against a different rig",
            ));
        }
        Ok(frames
            .iter()
            .map(|&frame| {
                mapping
                    .resolved()
                    .filter_map(|(joint, bone)| {
                        Some((joint.name(), self.position(bone.index(), frame)?))
                    })
                    .collect()
            })
            .collect())
    }

    fn fps(&self) -> Option<f64> {
        self.fps
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/baked.rs"]
mod tests;

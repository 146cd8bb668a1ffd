use std::collections::BTreeMap;

use crate::foundation::core::{DVec3, Point, Rect};
use crate::foundation::math::union_point;
use crate::joints::catalog::CanonicalJoint;

/// Per-frame map from joint name to a position.
///
/// Keys are canonical joint names (`left_elbow`) or synthetic face points (`chin_3`).
/// Iteration order is the lexical key order, so every pass over a frame is deterministic.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct JointMap<T> {
    joints: BTreeMap<String, T>,
}

/// 3D joint positions of one sampled animation frame.
pub type JointFrame = JointMap<DVec3>;

/// 2D canvas-space joint positions of one output frame.
pub type ProjectedFrame = JointMap<Point>;

impl<T> Default for JointMap<T> {
    fn default() -> Self {
        Self {
            joints: BTreeMap::new(),
        }
    }
}

impl<T: Copy> JointMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<T> {
        self.joints.get(name).copied()
    }

    pub fn joint(&self, joint: CanonicalJoint) -> Option<T> {
        self.get(joint.name())
    }

    /// Insert or overwrite a position, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, pos: T) -> Option<T> {
        self.joints.insert(name.into(), pos)
    }

    pub fn insert_joint(&mut self, joint: CanonicalJoint, pos: T) -> Option<T> {
        self.insert(joint.name(), pos)
    }

    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.joints.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.joints.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.joints.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.joints.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.joints.values().copied()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, T) -> bool) {
        self.joints.retain(|k, v| keep(k, *v));
    }

    /// Apply `f` to every position, keeping the key set.
    pub fn map<U>(&self, mut f: impl FnMut(&str, T) -> U) -> JointMap<U> {
        JointMap {
            joints: self
                .joints
                .iter()
                .map(|(k, v)| (k.clone(), f(k, *v)))
                .collect(),
        }
    }
}

impl<T, S: Into<String>> FromIterator<(S, T)> for JointMap<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            joints: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ProjectedFrame {
    /// Bounding rect of every point, or `None` for an empty frame.
    pub fn bounds(&self) -> Option<Rect> {
        self.values().fold(None, |acc, p| Some(union_point(acc, p)))
    }

    /// Endpoints of every segment whose two joints are both present.
    ///
    /// Drawing code uses this to skip bones touching unresolved or pruned joints.
    pub fn visible_segments<'a>(
        &'a self,
        segments: &'a [(CanonicalJoint, CanonicalJoint)],
    ) -> impl Iterator<Item = (CanonicalJoint, CanonicalJoint, Point, Point)> + 'a {
        segments
            .iter()
            .filter_map(|&(a, b)| Some((a, b, self.joint(a)?, self.joint(b)?)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/joints/frame.rs"]
mod tests;

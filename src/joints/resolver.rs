use std::collections::BTreeMap;

use crate::joints::aliases::{bone_aliases, hint_tokens, side_markers};
use crate::joints::catalog::CanonicalJoint;

/// Confidence floor for the heuristic tier. Bones scoring below this stay unresolved.
pub const MIN_HEURISTIC_SCORE: i32 = 2;

/// Opaque reference to a bone: its index in the rig's bone list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BoneId(usize);

impl BoneId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Which resolver tier produced a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Normalized,
    Heuristic,
}

/// Canonical joint -> resolved bone for one rig. Built once, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JointMapping {
    bones: Vec<String>,
    entries: BTreeMap<CanonicalJoint, (BoneId, MatchTier)>,
}

impl JointMapping {
    pub fn get(&self, joint: CanonicalJoint) -> Option<BoneId> {
        self.entries.get(&joint).map(|&(id, _)| id)
    }

    pub fn tier(&self, joint: CanonicalJoint) -> Option<MatchTier> {
        self.entries.get(&joint).map(|&(_, tier)| tier)
    }

    pub fn bone_name(&self, joint: CanonicalJoint) -> Option<&str> {
        self.get(joint)
            .and_then(|id| self.bones.get(id.index()))
            .map(String::as_str)
    }

    /// Resolved joints in catalog order.
    pub fn resolved(&self) -> impl Iterator<Item = (CanonicalJoint, BoneId)> + '_ {
        self.entries.iter().map(|(&j, &(id, _))| (j, id))
    }

    /// Unresolved joints in catalog order.
    pub fn unresolved(&self) -> Vec<CanonicalJoint> {
        CanonicalJoint::ALL
            .iter()
            .copied()
            .filter(|j| !self.entries.contains_key(j))
            .collect()
    }

    /// Resolved joint name -> source bone name, for diagnostics.
    pub fn resolved_names(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|(j, (id, _))| {
                self.bones
                    .get(id.index())
                    .map(|b| (j.name().to_string(), b.clone()))
            })
            .collect()
    }

    pub fn bones(&self) -> &[String] {
        &self.bones
    }
}

/// Strip a namespace (`mixamorig:`) and hierarchy (`Armature|`) prefix, lowercase and trim.
pub fn normalize_bone_name(name: &str) -> String {
    let name = name.split_once(':').map_or(name, |(_, rest)| rest);
    let name = name.split_once('|').map_or(name, |(_, rest)| rest);
    name.to_lowercase().trim().to_string()
}

/// Three-tier matcher over one rig's bones.
///
/// Bones claimed by an earlier joint are skipped by every tier while an unclaimed candidate
/// exists. Two joints only share a bone when an exact alias leaves no alternative.
pub struct BoneResolver<'a> {
    bones: &'a [String],
    normalized: Vec<String>,
    claimed: Vec<bool>,
    min_score: i32,
}

impl<'a> BoneResolver<'a> {
    pub fn new(bones: &'a [String]) -> Self {
        Self {
            bones,
            normalized: bones.iter().map(|b| normalize_bone_name(b)).collect(),
            claimed: vec![false; bones.len()],
            min_score: MIN_HEURISTIC_SCORE,
        }
    }

    /// Override the heuristic confidence floor.
    pub fn with_min_score(mut self, min_score: i32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Resolve one joint and claim the matched bone.
    pub fn resolve(&mut self, joint: CanonicalJoint) -> Option<(BoneId, MatchTier)> {
        let hit = self
            .exact(joint)
            .map(|id| (id, MatchTier::Exact))
            .or_else(|| self.normalized_match(joint).map(|id| (id, MatchTier::Normalized)))
            .or_else(|| self.heuristic(joint).map(|id| (id, MatchTier::Heuristic)));

        if let Some((id, tier)) = hit {
            self.claimed[id.index()] = true;
            tracing::debug!(joint = %joint, bone = %self.bones[id.index()], ?tier, "resolved joint");
        }
        hit
    }

    /// Resolve every catalog joint in order.
    pub fn build_mapping(mut self) -> JointMapping {
        let mut entries = BTreeMap::new();
        for &joint in CanonicalJoint::ALL {
            if let Some(hit) = self.resolve(joint) {
                entries.insert(joint, hit);
            }
        }
        let mapping = JointMapping {
            bones: self.bones.to_vec(),
            entries,
        };

        let unresolved = mapping.unresolved();
        tracing::info!(
            resolved = mapping.entries.len(),
            unresolved = unresolved.len(),
            "bone resolution complete"
        );
        if !unresolved.is_empty() {
            let names: Vec<&str> = unresolved.iter().map(|j| j.name()).collect();
            tracing::info!(missing = ?names, "unresolved joints");
        }
        mapping
    }

    /// First alias hit on an unclaimed bone, else the first hit even if claimed.
    fn exact(&self, joint: CanonicalJoint) -> Option<BoneId> {
        let mut hits = bone_aliases(joint)
            .iter()
            .filter_map(|alias| self.bones.iter().position(|b| b == alias))
            .peekable();
        let first = hits.peek().copied();
        hits.find(|&idx| !self.claimed[idx])
            .or(first)
            .map(BoneId::new)
    }

    fn normalized_match(&self, joint: CanonicalJoint) -> Option<BoneId> {
        let aliases: Vec<String> = bone_aliases(joint)
            .iter()
            .map(|a| normalize_bone_name(a))
            .filter(|a| !a.is_empty())
            .collect();

        // Equality and suffix matches are special cases of containment.
        self.normalized
            .iter()
            .enumerate()
            .filter(|&(idx, _)| !self.claimed[idx])
            .find(|(_, name)| aliases.iter().any(|a| name.contains(a.as_str())))
            .map(|(idx, _)| BoneId::new(idx))
    }

    fn heuristic(&self, joint: CanonicalJoint) -> Option<BoneId> {
        let tokens = heuristic_tokens(joint);
        let mut best: Option<(usize, i32)> = None;
        for (idx, name) in self.normalized.iter().enumerate() {
            if self.claimed[idx] {
                continue;
            }
            let score = score_bone(joint, &tokens, name);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((idx, score));
            }
        }
        best.filter(|&(_, score)| score >= self.min_score)
            .map(|(idx, _)| BoneId::new(idx))
    }
}

/// Resolve a single joint against `bones` with no prior claims.
pub fn resolve(joint: CanonicalJoint, bones: &[String]) -> Option<BoneId> {
    BoneResolver::new(bones).resolve(joint).map(|(id, _)| id)
}

/// Build the full joint mapping for a rig.
pub fn resolve_rig(bones: &[String]) -> JointMapping {
    BoneResolver::new(bones).build_mapping()
}

/// Base name tokens followed by each token's hints. Repeats are kept: a token listed among its
/// own hints counts twice.
fn heuristic_tokens(joint: CanonicalJoint) -> Vec<&'static str> {
    let base: Vec<&'static str> = joint.base_name().split('_').filter(|t| !t.is_empty()).collect();
    base.iter()
        .copied()
        .chain(base.iter().flat_map(|t| hint_tokens(t).iter().copied()))
        .collect()
}

/// Heuristic score of a normalized bone name for `joint`.
pub fn score_bone(joint: CanonicalJoint, tokens: &[&str], normalized_name: &str) -> i32 {
    let mut score = 0;
    if let Some(side) = joint.side() {
        if side_markers(side).iter().any(|m| normalized_name.contains(m)) {
            score += 2;
        }
        if side_markers(side.opposite())
            .iter()
            .any(|m| normalized_name.contains(m))
        {
            score -= 1;
        }
    }
    score += tokens.iter().filter(|t| normalized_name.contains(*t)).count() as i32;
    score
}

#[cfg(test)]
#[path = "../../tests/unit/joints/resolver.rs"]
mod tests;

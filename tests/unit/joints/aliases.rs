use super::*;

#[test]
fn every_joint_has_aliases() {
    for &j in CanonicalJoint::ALL {
        assert!(!bone_aliases(j).is_empty(), "{j} has no aliases");
    }
}

#[test]
fn sided_aliases_never_name_the_other_side() {
    for &j in CanonicalJoint::ALL {
        let Some(side) = j.side() else { continue };
        let (word, suffix) = match side.opposite() {
            Side::Left => ("left", "_l"),
            Side::Right => ("right", "_r"),
        };
        for alias in bone_aliases(j) {
            let lower = alias.to_lowercase();
            assert!(!lower.contains(word), "{j}: {alias}");
            assert!(!lower.ends_with(suffix), "{j}: {alias}");
        }
    }
}

#[test]
fn hint_tokens_include_the_token_itself() {
    for t in ["hip", "knee", "elbow", "pinky"] {
        assert!(hint_tokens(t).contains(&t));
    }
    assert!(hint_tokens("tail").is_empty());
}

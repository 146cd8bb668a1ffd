use super::*;

fn frame(joints: &[(&str, [f64; 3])]) -> JointFrame {
    joints
        .iter()
        .map(|(n, p)| (*n, DVec3::from_array(*p)))
        .collect()
}

fn upright() -> JointFrame {
    frame(&[
        ("head", [0.0, 0.0, 2.0]),
        ("neck", [0.0, 0.0, 1.6]),
        ("chest", [0.0, 0.0, 1.3]),
        ("left_shoulder", [-0.2, 0.0, 1.5]),
        ("right_shoulder", [0.2, 0.0, 1.5]),
    ])
}

#[test]
fn nose_sits_ahead_of_head_by_scaled_radius() {
    let mut ctx = StabilizationContext::new();
    let out = synthesize(
        frame(&[("head", [0.0, 0.0, 2.0]), ("neck", [0.0, 0.0, 1.6])]),
        &mut ctx,
    );

    let radius = 0.4 * 1.1;
    let head = DVec3::new(0.0, 0.0, 2.0);
    let nose = out.get("nose").unwrap();
    let expected = head + DVec3::Y * (0.55 * radius);
    assert!((nose - expected).length() < 1e-9, "{nose:?}");

    // Strictly between the head and a full radius ahead.
    let along = (nose - head).dot(DVec3::Y);
    assert!(along > 0.0 && along < radius);
}

#[test]
fn frame_without_head_is_untouched() {
    let mut ctx = StabilizationContext::new();
    let input = frame(&[("hips", [0.0, 0.0, 1.0])]);
    let out = synthesize(input.clone(), &mut ctx);
    assert_eq!(out, input);
    assert_eq!(ctx.prev_forward(), None);
}

#[test]
fn adds_all_face_clusters() {
    let mut ctx = StabilizationContext::new();
    let out = synthesize(upright(), &mut ctx);
    let synthetic = NOSE_DOTS + 2 * EYE_DOTS + MOUTH_DOTS + CHIN_DOTS;
    assert_eq!(out.len(), 5 + 5 + synthetic);
    for name in ["nose_dot_5", "eye_L_4", "eye_R_0", "mouth_7", "chin_10", "left_ear"] {
        assert!(out.contains(name), "missing {name}");
    }
}

#[test]
fn rig_eyes_are_replaced_but_rig_ears_kept() {
    let mut input = upright();
    let rig_eye = DVec3::new(9.0, 9.0, 9.0);
    let rig_ear = DVec3::new(-5.0, 0.0, 2.0);
    input.insert("left_eye", rig_eye);
    input.insert("left_ear", rig_ear);

    let out = synthesize(input, &mut StabilizationContext::new());
    assert_ne!(out.get("left_eye"), Some(rig_eye));
    assert_eq!(out.get("left_ear"), Some(rig_ear));
}

#[test]
fn eyes_above_nose_above_mouth_above_chin() {
    let out = synthesize(upright(), &mut StabilizationContext::new());
    let z = |n: &str| out.get(n).unwrap().z;

    assert!(z("left_eye") > z("nose"));
    assert!(z("right_eye") > z("nose"));
    for i in 0..MOUTH_DOTS {
        assert!(z(&format!("mouth_{i}")) < z("nose"));
        assert!(z("chin_5") < z(&format!("mouth_{i}")));
    }
    // Jaw endpoints are level with the eyes.
    assert!((z("chin_0") - z("left_eye")).abs() < 1e-9);
    assert!((z("chin_10") - z("right_eye")).abs() < 1e-9);
}

#[test]
fn left_eye_is_on_the_left_shoulder_side() {
    let out = synthesize(upright(), &mut StabilizationContext::new());
    assert!(out.get("left_eye").unwrap().x < 0.0);
    assert!(out.get("right_eye").unwrap().x > 0.0);
}

#[test]
fn forward_is_stable_when_shoulders_swap() {
    let mut ctx = StabilizationContext::new();
    let first = synthesize(upright(), &mut ctx);
    let nose_y = first.get("nose").unwrap().y;
    assert!(nose_y > 0.0);

    // Swapped shoulders flip up x right; the context keeps the face pointing the same way.
    let mut swapped = upright();
    swapped.insert("left_shoulder", DVec3::new(0.2, 0.0, 1.5));
    swapped.insert("right_shoulder", DVec3::new(-0.2, 0.0, 1.5));
    let second = synthesize(swapped.clone(), &mut ctx);
    assert!(second.get("nose").unwrap().y > 0.0);

    // A fresh clip has no memory and follows the raw basis.
    ctx.reset();
    let fresh = synthesize(swapped, &mut ctx);
    assert!(fresh.get("nose").unwrap().y < 0.0);
}

#[test]
fn degenerate_geometry_uses_fallbacks() {
    // Coincident head/neck and shoulders.
    let input = frame(&[
        ("head", [1.0, 1.0, 1.0]),
        ("neck", [1.0, 1.0, 1.0]),
        ("left_shoulder", [0.0, 0.0, 0.0]),
        ("right_shoulder", [0.0, 0.0, 0.0]),
    ]);
    let mut ctx = StabilizationContext::new();
    let basis = FaceBasis::from_frame(&input, &mut ctx).unwrap();
    assert_eq!(basis.up, DVec3::Z);
    assert_eq!(basis.right, DVec3::X);
    assert_eq!(basis.forward, DVec3::Y);
    assert!((basis.radius - 0.25 * FACE_SCALE).abs() < 1e-12);
}

#[test]
fn shoulder_span_sets_radius_without_neck() {
    let input = frame(&[
        ("head", [0.0, 0.0, 2.0]),
        ("left_shoulder", [-0.5, 0.0, 1.5]),
        ("right_shoulder", [0.5, 0.0, 1.5]),
    ]);
    let basis = FaceBasis::from_frame(&input, &mut StabilizationContext::new()).unwrap();
    assert!((basis.radius - 1.0 * 0.45 * FACE_SCALE).abs() < 1e-12);
}

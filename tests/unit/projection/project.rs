use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::foundation::core::DVec3;
use crate::foundation::error::RigposeError;

fn frame(joints: &[(&str, [f64; 3])]) -> JointFrame {
    joints
        .iter()
        .map(|(n, p)| (*n, DVec3::from_array(*p)))
        .collect()
}

fn figure(dx: f64) -> JointFrame {
    frame(&[
        ("hips", [dx, 0.0, 1.0]),
        ("head", [dx, 0.0, 2.0]),
        ("left_wrist", [dx - 0.5, 0.0, 1.5]),
    ])
}

fn config(width: u32, height: u32, global_framing: bool) -> ProjectionConfig {
    ProjectionConfig {
        canvas: Canvas { width, height },
        global_framing,
        ..ProjectionConfig::default()
    }
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn global_framing_is_rigid_across_frames() {
    let frames = vec![figure(0.0), figure(1.0)];
    let out = project(&frames, &config(1000, 1000, true), &mut StabilizationContext::new()).unwrap();

    // bbox x: -0.5..1.0, z: 1..2 -> scale = min(900 / 1.5, 900 / 1) = 600.
    for name in ["hips", "head", "left_wrist"] {
        let a = out[0].get(name).unwrap();
        let b = out[1].get(name).unwrap();
        let d = b - a;
        assert!((d.x - 600.0).abs() < 1e-9 && d.y.abs() < 1e-9, "{name}: {d:?}");
    }
}

#[test]
fn global_fit_values() {
    let frames = vec![frame(&[("hips", [0.0, 0.0, 0.0]), ("head", [0.0, 0.0, 2.0])])];
    let out = project(&frames, &config(100, 200, true), &mut StabilizationContext::new()).unwrap();
    // Zero width reads as 1: scale = min(90, 180 / 2) = 90, centered on z = 1.
    assert!(close(out[0].get("hips").unwrap(), Point::new(50.0, 190.0)));
    assert!(close(out[0].get("head").unwrap(), Point::new(50.0, 10.0)));
}

#[test]
fn follow_mode_centers_on_hips() {
    let frames = vec![figure(0.0), figure(3.0)];
    let out = project(&frames, &config(512, 256, false), &mut StabilizationContext::new()).unwrap();
    for f in &out {
        assert!(close(f.get("hips").unwrap(), Point::new(256.0, 128.0)));
    }
    // Same pose, same pixels.
    assert_eq!(out[0], out[1]);
}

#[test]
fn follow_mode_without_hips_centers_bbox() {
    let frames = vec![frame(&[("head", [0.0, 0.0, 2.0]), ("neck", [0.0, 0.0, 1.0])])];
    let out = project(&frames, &config(100, 100, false), &mut StabilizationContext::new()).unwrap();
    let head = out[0].get("head").unwrap();
    let neck = out[0].get("neck").unwrap();
    assert!(close(head.midpoint(neck), Point::new(50.0, 50.0)));
    assert!(head.y < neck.y, "canvas y points down");
}

#[test]
fn empty_frames_stay_empty() {
    let frames = vec![JointFrame::new(), figure(0.0), JointFrame::new()];
    let out = project(&frames, &config(64, 64, true), &mut StabilizationContext::new()).unwrap();
    assert_eq!(out.len(), 3);
    assert!(out[0].is_empty() && out[2].is_empty());
    assert_eq!(out[1].len(), 3);

    let none = project(
        &[JointFrame::new(), JointFrame::new()],
        &config(64, 64, true),
        &mut StabilizationContext::new(),
    )
    .unwrap();
    assert!(none.iter().all(ProjectedFrame::is_empty));
}

#[test]
fn zero_canvas_is_rejected() {
    let err = project(&[figure(0.0)], &config(0, 64, true), &mut StabilizationContext::new())
        .unwrap_err();
    assert!(matches!(err, RigposeError::Validation(_)));
}

#[test]
fn bad_zoom_reads_as_one() {
    let frames = vec![figure(0.0)];
    let mut ctx = StabilizationContext::new();
    let base = project(&frames, &config(200, 200, true), &mut ctx).unwrap();
    for zoom in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let cfg = ProjectionConfig {
            zoom,
            ..config(200, 200, true)
        };
        assert_eq!(project(&frames, &cfg, &mut ctx).unwrap(), base);
    }

    let doubled = ProjectionConfig {
        zoom: 2.0,
        ..config(200, 200, true)
    };
    let out = project(&frames, &doubled, &mut ctx).unwrap();
    let c = Point::new(100.0, 100.0);
    let d0 = base[0].get("head").unwrap() - c;
    let d1 = out[0].get("head").unwrap() - c;
    assert!((d1 - d0 * 2.0).hypot() < 1e-9);
}

#[test]
fn auto_face_camera_estimates_yaw_once() {
    // Shoulder line along Y: the figure faces +X.
    let turned = frame(&[
        ("hips", [0.0, 0.0, 1.0]),
        ("left_shoulder", [0.0, 0.2, 1.5]),
        ("right_shoulder", [0.0, -0.2, 1.5]),
    ]);
    let cfg = ProjectionConfig {
        view: ViewMode::AutoFaceCamera,
        ..config(100, 100, true)
    };
    let mut ctx = StabilizationContext::new();
    let out = project(&[JointFrame::new(), turned.clone()], &cfg, &mut ctx).unwrap();
    assert!((ctx.clip_yaw().unwrap() + FRAC_PI_2).abs() < 1e-12);

    // After turning, the shoulders spread horizontally on the canvas.
    let l = out[1].get("left_shoulder").unwrap();
    let r = out[1].get("right_shoulder").unwrap();
    assert!((l.x - r.x).abs() > 1.0);

    // The stored yaw is reused even when later input would estimate differently.
    let facing = frame(&[
        ("left_shoulder", [0.2, 0.0, 1.5]),
        ("right_shoulder", [-0.2, 0.0, 1.5]),
    ]);
    project(&[facing], &cfg, &mut ctx).unwrap();
    assert!((ctx.clip_yaw().unwrap() + FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn fixed_views_leave_context_alone() {
    let mut ctx = StabilizationContext::new();
    project(&[figure(0.0)], &config(100, 100, true), &mut ctx).unwrap();
    assert_eq!(ctx.clip_yaw(), None);
}

#[test]
fn camera_profile_turns_and_zooms_per_frame() {
    let pose = frame(&[
        ("hips", [0.0, 0.0, 0.0]),
        ("left_wrist", [1.0, 0.0, 0.0]),
        ("head", [0.0, 0.0, 1.0]),
    ]);
    let cfg = ProjectionConfig {
        camera: Some(CameraProfile {
            num_frames: 2,
            rotation: vec![0.0, 90.0],
            zoom: vec![1.0, 2.0],
        }),
        ..config(100, 100, false)
    };
    let frames = vec![pose.clone(), pose.clone(), pose];
    let out = project(&frames, &cfg, &mut StabilizationContext::new()).unwrap();

    // Frame 0: wrist to the right of the hips.
    let c = Point::new(50.0, 50.0);
    assert!(out[0].get("left_wrist").unwrap().x > c.x + 1.0);
    // Frame 1: a quarter turn puts the wrist in line with the hips.
    assert!((out[1].get("left_wrist").unwrap().x - c.x).abs() < 1e-9);
    // Frame 2 reuses the last camera key, so it matches frame 1.
    assert_eq!(out[1], out[2]);

    // Zoom 2 doubles the head offset from the canvas center.
    let plain = project(&frames[..1], &config(100, 100, false), &mut StabilizationContext::new())
        .unwrap();
    let d0 = plain[0].get("head").unwrap() - c;
    let d1 = out[1].get("head").unwrap() - c;
    assert!((d1.y - 2.0 * d0.y).abs() < 1e-9);
}

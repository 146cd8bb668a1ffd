use super::*;

#[test]
fn forward_never_flips_between_frames() {
    let mut ctx = StabilizationContext::new();
    assert_eq!(ctx.stabilize_forward(DVec3::Y), DVec3::Y);
    assert_eq!(ctx.stabilize_forward(-DVec3::Y), DVec3::Y);

    let tilted = DVec3::new(0.6, 0.8, 0.0);
    assert_eq!(ctx.stabilize_forward(tilted), tilted);
    assert_eq!(ctx.prev_forward(), Some(tilted));
}

#[test]
fn reset_clears_all_state() {
    let mut ctx = StabilizationContext::new();
    ctx.stabilize_forward(DVec3::X);
    assert_eq!(ctx.clip_yaw_or_insert_with(|| 0.5), 0.5);
    assert_eq!(ctx.clip_yaw_or_insert_with(|| 9.0), 0.5);

    ctx.reset();
    assert_eq!(ctx, StabilizationContext::default());
    assert_eq!(ctx.stabilize_forward(-DVec3::X), -DVec3::X);
}

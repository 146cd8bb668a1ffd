use crate::foundation::core::{DVec3, Point, Rect};

/// Lengths below this are treated as zero when building direction vectors.
pub(crate) const DIR_EPS: f64 = 1e-6;

/// Normalize `v`, or return `fallback` when `v` is (near) zero-length.
pub(crate) fn normalize_or(v: DVec3, fallback: DVec3) -> DVec3 {
    if v.length() < DIR_EPS {
        fallback
    } else {
        v.normalize()
    }
}

/// Rotate `v` about the +Z (up) axis by `angle` radians.
pub(crate) fn rotate_about_z(v: DVec3, angle: f64) -> DVec3 {
    if angle.abs() < DIR_EPS {
        return v;
    }
    let (sin, cos) = angle.sin_cos();
    DVec3::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y, v.z)
}

/// Grow an optional bounding rect to include `p`.
pub(crate) fn union_point(bounds: Option<Rect>, p: Point) -> Rect {
    match bounds {
        None => Rect::from_points(p, p),
        Some(r) => r.union_pt(p),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

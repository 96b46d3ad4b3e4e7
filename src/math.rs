//! Minimal 3D math for the drawing core.
//!
//! Points are plain `[f32; 3]` and orientations are quaternions as
//! `[f32; 4]` in (x, y, z, w) order, matching the pose data the XR
//! host feeds us. The handful of operations the core needs are
//! spelled out here rather than pulled from a linear-algebra crate.

/// Euclidean distance between two 3D points.
pub fn distance(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Component-wise sum.
pub fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Component-wise difference `a - b`.
pub fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Conjugate of a unit quaternion, which is also its inverse.
pub fn conjugate(q: [f32; 4]) -> [f32; 4] {
    [-q[0], -q[1], -q[2], q[3]]
}

/// Rotate a vector by a unit quaternion.
///
/// Uses the expanded form `v' = v + 2w(u × v) + 2(u × (u × v))`
/// with `u` the vector part, avoiding a full quaternion product.
pub fn rotate(q: [f32; 4], v: [f32; 3]) -> [f32; 3] {
    let u = [q[0], q[1], q[2]];
    let w = q[3];
    let uv = cross(u, v);
    let uuv = cross(u, uv);
    [
        v[0] + 2.0 * (w * uv[0] + uuv[0]),
        v[1] + 2.0 * (w * uv[1] + uuv[1]),
        v[2] + 2.0 * (w * uv[2] + uuv[2]),
    ]
}

/// Rotate a vector by the inverse of a unit quaternion.
pub fn rotate_inverse(q: [f32; 4], v: [f32; 3]) -> [f32; 3] {
    rotate(conjugate(q), v)
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_1_SQRT_2;

    /// Identity quaternion (x, y, z, w).
    const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!(
                (a[i] - b[i]).abs() < 1e-5,
                "component {} differs: {:?} vs {:?}",
                i,
                a,
                b,
            );
        }
    }

    #[test]
    fn test_distance() {
        let d = distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]);
        assert!((d - 5.0).abs() < 1e-6, "expected 5.0, got {}", d);
    }

    #[test]
    fn test_rotate_identity() {
        assert_close(rotate(IDENTITY, [1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        // 90 degrees about +Z maps +X onto +Y.
        let q = [0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2];
        assert_close(rotate(q, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rotate_inverse_round_trip() {
        let q = [0.1, 0.2, 0.3, 0.927_361_8]; // normalized
        let v = [0.4, -0.7, 1.3];
        assert_close(rotate_inverse(q, rotate(q, v)), v);
    }

    #[test]
    fn test_add_sub() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -1.0, 2.0];
        assert_close(add(sub(a, b), b), a);
    }
}

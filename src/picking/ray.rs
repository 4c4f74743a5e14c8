use glam::{Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::camera::core::Camera;

/// World-space ray with unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (on the camera near plane).
    pub origin: Vec3,
    /// Unit-length ray direction.
    pub dir: Vec3,
}

/// Convert device pixel coordinates (origin top-left, y growing downward)
/// into normalized device coordinates in [-1, 1] (y growing upward).
#[must_use]
pub fn ndc_from_pixels(x: f32, y: f32, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new(2.0 * x / w - 1.0, 2.0 * (h - y) / h - 1.0)
}

/// Reconstruct the world-space ray under an NDC cursor position.
///
/// Applies the inverse view-projection to the homogeneous near point
/// `(ndc, -1, 1)` and far point `(ndc, +1, 1)` (OpenGL clip-space z),
/// perspective-divides both, and returns the normalized near-to-far ray.
///
/// Returns `None` when the combined transform is singular or the divide
/// produces non-finite points — the caller treats "no ray" as "no pick".
#[must_use]
pub fn unproject_ray(ndc: Vec2, camera: &Camera) -> Option<Ray> {
    let inv_vp = camera.view_projection().inverse();
    if !inv_vp.is_finite() {
        return None;
    }

    let near = inv_vp * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
    let far = inv_vp * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    if near.w.abs() <= f32::EPSILON || far.w.abs() <= f32::EPSILON {
        return None;
    }

    let near = near.xyz() / near.w;
    let far = far.xyz() / far.w;
    if !near.is_finite() || !far.is_finite() {
        return None;
    }

    let dir = (far - near).try_normalize()?;
    Some(Ray { origin: near, dir })
}

/// Analytic ray-sphere intersection.
///
/// Solves `|O + tD - C|^2 = r^2` and returns the near root when it lies in
/// front of the origin (`t > 0`), `None` otherwise. A ray starting inside
/// the sphere is reported as a miss: picking in this crate always happens
/// from outside every sphere, and the near root behind the origin is not
/// promoted to the far one.
#[must_use]
pub fn ray_sphere_intersect(
    origin: Vec3,
    dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = origin - center;
    let a = dir.dot(dir);
    let b = 2.0 * oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    (t > 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_conversion_flips_y() {
        let (w, h) = (400, 400);
        // Top-left pixel -> (-1, +1); center -> (0, 0).
        let tl = ndc_from_pixels(0.0, 0.0, w, h);
        assert_eq!(tl, Vec2::new(-1.0, 1.0));
        let center = ndc_from_pixels(200.0, 200.0, w, h);
        assert_eq!(center, Vec2::ZERO);
        let br = ndc_from_pixels(400.0, 400.0, w, h);
        assert_eq!(br, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn sphere_hit_straight_ahead() {
        let t = ray_sphere_intersect(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        let t = t.unwrap();
        assert!((t - 9.0).abs() < 1e-4, "t = {t}");
    }

    #[test]
    fn sphere_off_axis_misses() {
        let t = ray_sphere_intersect(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(5.0, 5.0, 5.0),
            1.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn sphere_behind_origin_is_not_a_hit() {
        let t = ray_sphere_intersect(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn unproject_round_trips_through_view_projection() {
        let mut camera = Camera::default();
        camera
            .orbit(Vec3::new(1.0, -2.0, 0.5), 20.0, Some(30.0), Some(45.0))
            .unwrap();

        let inv_vp = camera.view_projection().inverse();
        let vp = camera.view_projection();
        for &(ndc_z, expected) in &[(-1.0f32, -1.0f32), (1.0, 1.0)] {
            let world = inv_vp * Vec4::new(0.0, 0.0, ndc_z, 1.0);
            let world = world.xyz() / world.w;
            let clip = vp * world.extend(1.0);
            let z = clip.z / clip.w;
            assert!(
                (z - expected).abs() < 1e-2,
                "ndc z {ndc_z} -> {z}"
            );
        }
    }

    #[test]
    fn unprojected_ray_points_away_from_the_eye() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            Vec3::Y,
            45.0,
            1.0,
            0.1,
            500.0,
        )
        .unwrap();
        let ray = unproject_ray(Vec2::ZERO, &camera).unwrap();
        // Center-screen ray travels along the view direction.
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
        assert!((ray.dir.length() - 1.0).abs() < 1e-5);
        // Origin sits on the near plane in front of the eye.
        assert!(ray.origin.z < 10.0);
        assert!(ray.origin.z > 9.0);
    }
}

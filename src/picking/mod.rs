//! Mouse picking against sphere candidates.
//!
//! A pick reconstructs a world-space ray from the cursor position by
//! inverting the camera's view-projection transform, then linearly scans
//! all candidate spheres for the nearest positive intersection. This is
//! exact for the fixed-radius spheres this crate renders and is O(n) per
//! pick — fine for the particle counts a notebook scene holds. Large
//! scenes would want a BVH or grid in front of the scan.

mod ray;

use glam::{Vec2, Vec3};
pub use ray::{ndc_from_pixels, ray_sphere_intersect, unproject_ray, Ray};

use crate::camera::core::Camera;

/// Radius used for every pick candidate, in world units.
pub const PICK_RADIUS: f32 = 1.0;

/// Sentinel index meaning "nothing picked".
pub const NO_SELECTION: i32 = -1;

/// Find the candidate sphere nearest to the camera along the pick ray.
///
/// `ndc` is the cursor position in normalized device coordinates (see
/// [`ndc_from_pixels`]); `centers` are the candidate sphere centers, all
/// tested at [`PICK_RADIUS`]. Returns the index of the closest hit, or
/// [`NO_SELECTION`] when nothing is hit or no valid ray exists. Exact
/// distance ties keep the first candidate in scan order.
#[must_use]
pub fn pick(ndc: Vec2, camera: &Camera, centers: &[Vec3]) -> i32 {
    let Some(ray) = unproject_ray(ndc, camera) else {
        return NO_SELECTION;
    };

    let mut min_dist = f32::INFINITY;
    let mut selected = NO_SELECTION;
    for (i, center) in centers.iter().enumerate() {
        if let Some(dist) =
            ray_sphere_intersect(ray.origin, ray.dir, *center, PICK_RADIUS)
        {
            if dist < min_dist {
                min_dist = dist;
                selected = i as i32;
            }
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Camera on the +Z axis looking at the origin.
    fn axis_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            Vec3::Y,
            45.0,
            1.0,
            0.1,
            500.0,
        )
        .unwrap()
    }

    #[test]
    fn picks_nearest_of_two_on_the_same_ray() {
        let camera = axis_camera();
        let centers = [Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)];
        assert_eq!(pick(Vec2::ZERO, &camera, &centers), 0);
    }

    #[test]
    fn scan_order_wins_on_exact_tie() {
        let camera = axis_camera();
        // Identical spheres: same t, first index kept.
        let centers = [Vec3::ZERO, Vec3::ZERO];
        assert_eq!(pick(Vec2::ZERO, &camera, &centers), 0);
    }

    #[test]
    fn empty_candidates_return_no_selection() {
        let camera = axis_camera();
        assert_eq!(pick(Vec2::ZERO, &camera, &[]), NO_SELECTION);
    }

    #[test]
    fn off_ray_candidates_are_missed() {
        let camera = axis_camera();
        let centers = [Vec3::new(50.0, 50.0, 0.0)];
        assert_eq!(pick(Vec2::ZERO, &camera, &centers), NO_SELECTION);
    }

    #[test]
    fn corner_pick_hits_offset_sphere() {
        let camera = axis_camera();
        // A sphere well off-center: picking through its projected position
        // must hit it while the screen center misses.
        let center = Vec3::new(3.0, 0.0, 0.0);
        let clip = camera.view_projection().project_point3(center);
        let ndc = Vec2::new(clip.x, clip.y);
        assert_eq!(pick(ndc, &camera, &[center]), 0);
        assert_eq!(pick(Vec2::ZERO, &camera, &[center]), NO_SELECTION);
    }
}

//! Scene composition: particles, orbit camera, picking, redraw policy.
//!
//! [`ParticleScene`] is the composition root. It owns the particle data,
//! the orbit controller, the input processor, and the redraw throttle, and
//! it talks to the outside world through the [`render`](crate::render)
//! seams. There is no framework base class anywhere — the hosting
//! application constructs a scene, feeds it events, and renders when the
//! scene says a redraw is due.

/// Discrete commands produced by the input layer.
pub mod command;

use glam::Vec3;

use crate::camera::controller::OrbitController;
use crate::camera::core::{Camera, CameraUniform};
use crate::error::OrbviewError;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::picking::{self, NO_SELECTION};
use crate::render::{
    DisplaySurface, FrameParams, LightingUniforms, SceneRenderer,
};
use crate::util::redraw::RedrawThrottle;
use command::SceneCommand;

/// A particle scene driven by mouse events: orbit/zoom camera control,
/// hover picking, and a throttled redraw signal.
#[derive(Debug)]
pub struct ParticleScene {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    controller: OrbitController,
    input: InputProcessor,
    throttle: RedrawThrottle,
    options: Options,
    width: u32,
    height: u32,
    selection: i32,
}

impl ParticleScene {
    /// Create an empty scene from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Camera`] when the options describe a
    /// degenerate camera (zero viewport, bad clip planes).
    pub fn new(options: Options) -> Result<Self, OrbviewError> {
        let width = options.display.width;
        let height = options.display.height;
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, options.camera.radius),
            Vec3::ZERO,
            Vec3::Y,
            options.camera.fovy,
            width as f32 / height as f32,
            options.camera.znear,
            options.camera.zfar,
        )?;
        let controller = OrbitController::new(camera, &options.camera)?;
        let throttle = RedrawThrottle::from_hz(options.display.max_redraw_hz);

        Ok(Self {
            positions: Vec::new(),
            colors: Vec::new(),
            controller,
            input: InputProcessor::new(),
            throttle,
            options,
            width,
            height,
            selection: NO_SELECTION,
        })
    }

    /// The orbit controller driving the camera.
    #[must_use]
    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    /// Index of the currently picked particle (-1 if none).
    #[must_use]
    pub fn selection(&self) -> i32 {
        self.selection
    }

    /// Number of particles in the scene.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    /// The options the scene was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Append particles to the scene. `positions` and `colors` should have
    /// equal length; a mismatch is truncated to the shorter slice so the
    /// per-instance buffers never drift apart. When `update_camera` is set,
    /// the orbit re-centers on the centroid of all particle positions.
    pub fn add_particles(
        &mut self,
        positions: &[Vec3],
        colors: &[Vec3],
        update_camera: bool,
    ) {
        let count = positions.len().min(colors.len());
        if positions.len() != colors.len() {
            log::warn!(
                "add_particles length mismatch: {} positions, {} colors; \
                 keeping {count}",
                positions.len(),
                colors.len()
            );
        }
        self.positions.extend_from_slice(&positions[..count]);
        self.colors.extend_from_slice(&colors[..count]);
        if update_camera {
            self.controller.focus_on(&self.positions);
        }
    }

    /// Resize the viewport, updating the camera aspect and the pixel-to-NDC
    /// conversion used for picking.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.controller.resize(width, height);
    }

    /// Feed a raw input event through the processor and execute the
    /// resulting command, if any. Returns whether a redraw is due now.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(cmd) => self.execute(cmd),
            None => false,
        }
    }

    /// Execute a scene command. Camera and selection state are updated
    /// unconditionally; the returned redraw signal is throttled.
    pub fn execute(&mut self, cmd: SceneCommand) -> bool {
        match cmd {
            SceneCommand::RotateCamera { delta } => {
                self.controller.rotate(delta);
                self.throttle.try_redraw()
            }
            SceneCommand::Zoom { delta } => {
                self.controller.zoom(delta);
                self.throttle.try_redraw()
            }
            SceneCommand::Hover { x, y } => self.hover(x, y),
        }
    }

    /// Hover picking: update the selection from the particle under the
    /// cursor. A redraw is requested only when the hover lands on a new
    /// particle; losing the hover updates state without forcing a refresh.
    fn hover(&mut self, x: f32, y: f32) -> bool {
        if !self.options.display.select_particles {
            return false;
        }
        let ndc = picking::ndc_from_pixels(x, y, self.width, self.height);
        let hit =
            picking::pick(ndc, self.controller.camera(), &self.positions);
        let redraw = hit != NO_SELECTION
            && hit != self.selection
            && self.throttle.try_redraw();
        self.selection = hit;
        redraw
    }

    /// Build the draw parameters for the current frame.
    #[must_use]
    pub fn frame(&self) -> FrameParams<'_> {
        let mut camera = CameraUniform::new();
        camera.update_view_proj(self.controller.camera(), self.selection);
        FrameParams {
            camera,
            lighting: LightingUniforms::from_options(
                &self.options.lighting,
            ),
            positions: &self.positions,
            colors: &self.colors,
            selection: self.selection,
            draw_axes: self.options.display.draw_axes,
        }
    }

    /// Render the current frame through the injected renderer and present
    /// the result.
    ///
    /// # Errors
    ///
    /// Propagates [`OrbviewError::Render`] from either collaborator.
    pub fn render(
        &mut self,
        renderer: &mut dyn SceneRenderer,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), OrbviewError> {
        let pixels = renderer.draw(&self.frame())?;
        surface.present(&pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;
    use crate::render::PixelBuffer;

    struct FakeRenderer {
        draws: usize,
        last_instances: usize,
    }

    impl SceneRenderer for FakeRenderer {
        fn draw(
            &mut self,
            frame: &FrameParams<'_>,
        ) -> Result<PixelBuffer, OrbviewError> {
            self.draws += 1;
            self.last_instances = frame.positions.len();
            PixelBuffer::new(2, 2, vec![0; 12])
        }
    }

    struct FakeSurface {
        presents: usize,
    }

    impl DisplaySurface for FakeSurface {
        fn present(
            &mut self,
            _pixels: &PixelBuffer,
        ) -> Result<(), OrbviewError> {
            self.presents += 1;
            Ok(())
        }
    }

    fn scene_with(mutate: impl FnOnce(&mut Options)) -> ParticleScene {
        let mut options = Options::default();
        mutate(&mut options);
        ParticleScene::new(options).unwrap()
    }

    fn drag_sequence() -> [InputEvent; 2] {
        [
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            InputEvent::CursorMoved { x: 10.0, y: 0.0 },
        ]
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let mut options = Options::default();
        options.display.width = 0;
        assert!(ParticleScene::new(options).is_err());
    }

    #[test]
    fn drag_rotates_and_requests_redraw() {
        let mut scene = scene_with(|_| {});
        let yaw_before = scene.controller().yaw();
        let [press, drag] = drag_sequence();
        assert!(!scene.handle_event(press));
        assert!(scene.handle_event(drag));
        // 10 px at 0.5 deg/px
        assert_eq!(scene.controller().yaw(), yaw_before + 5.0);
    }

    #[test]
    fn throttled_events_still_update_the_camera() {
        // Effectively-infinite interval: only the first redraw passes.
        let mut scene =
            scene_with(|opts| opts.display.max_redraw_hz = 1e-9);
        let [press, _] = drag_sequence();
        let _ = scene.handle_event(press);

        assert!(scene
            .handle_event(InputEvent::CursorMoved { x: 10.0, y: 0.0 }));
        assert!(!scene
            .handle_event(InputEvent::CursorMoved { x: 20.0, y: 0.0 }));
        assert!(!scene
            .handle_event(InputEvent::CursorMoved { x: 30.0, y: 0.0 }));
        // Dropped redraws never drop the deltas: 30 px total at 0.5 deg/px.
        assert_eq!(scene.controller().yaw(), 45.0 + 15.0);
    }

    #[test]
    fn wheel_zooms_out() {
        let mut scene = scene_with(|_| {});
        let radius_before = scene.controller().radius();
        let _ = scene
            .handle_event(InputEvent::Scroll { dx: 0.0, dy: 10.0 });
        assert_eq!(scene.controller().radius(), radius_before + 1.0);
    }

    #[test]
    fn add_particles_can_recenter_the_orbit() {
        let mut scene = scene_with(|_| {});
        scene.add_particles(
            &[Vec3::new(4.0, 0.0, 0.0), Vec3::new(8.0, 2.0, 0.0)],
            &[Vec3::X, Vec3::Y],
            true,
        );
        assert_eq!(scene.particle_count(), 2);
        assert_eq!(
            scene.controller().center(),
            Vec3::new(6.0, 1.0, 0.0)
        );
    }

    #[test]
    fn mismatched_particle_slices_are_truncated() {
        let mut scene = scene_with(|_| {});
        scene.add_particles(
            &[Vec3::ZERO, Vec3::X, Vec3::Y],
            &[Vec3::X],
            false,
        );
        assert_eq!(scene.particle_count(), 1);
        let frame = scene.frame();
        assert_eq!(frame.positions.len(), frame.colors.len());
    }

    #[test]
    fn hover_picks_the_particle_under_the_cursor() {
        let mut scene =
            scene_with(|opts| opts.display.select_particles = true);
        scene.add_particles(&[Vec3::ZERO], &[Vec3::X], false);

        // Camera orbits the origin, so the screen center hovers the
        // origin-centered sphere.
        let redraw = scene
            .handle_event(InputEvent::CursorMoved { x: 200.0, y: 200.0 });
        assert!(redraw);
        assert_eq!(scene.selection(), 0);

        // Hovering the same particle again changes nothing.
        assert!(!scene
            .handle_event(InputEvent::CursorMoved { x: 201.0, y: 200.0 }));
        assert_eq!(scene.selection(), 0);

        // Hovering empty space clears the selection without a redraw.
        assert!(!scene
            .handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }));
        assert_eq!(scene.selection(), NO_SELECTION);
    }

    #[test]
    fn hover_is_inert_when_selection_is_disabled() {
        let mut scene = scene_with(|_| {});
        scene.add_particles(&[Vec3::ZERO], &[Vec3::X], false);
        assert!(!scene
            .handle_event(InputEvent::CursorMoved { x: 200.0, y: 200.0 }));
        assert_eq!(scene.selection(), NO_SELECTION);
    }

    #[test]
    fn render_draws_and_presents() {
        let mut scene = scene_with(|_| {});
        scene.add_particles(
            &[Vec3::ZERO, Vec3::X, Vec3::Y],
            &[Vec3::X, Vec3::Y, Vec3::Z],
            false,
        );
        let mut renderer = FakeRenderer {
            draws: 0,
            last_instances: 0,
        };
        let mut surface = FakeSurface { presents: 0 };
        scene.render(&mut renderer, &mut surface).unwrap();
        assert_eq!(renderer.draws, 1);
        assert_eq!(renderer.last_instances, 3);
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn frame_carries_camera_and_selection() {
        let mut scene =
            scene_with(|opts| opts.display.select_particles = true);
        scene.add_particles(&[Vec3::ZERO], &[Vec3::X], false);
        let _ = scene
            .handle_event(InputEvent::CursorMoved { x: 200.0, y: 200.0 });

        let frame = scene.frame();
        assert_eq!(frame.selection, 0);
        assert_eq!(frame.camera.selected, 0);
        assert_eq!(
            frame.camera.position,
            scene.controller().camera().position().to_array()
        );
        assert!(!frame.draw_axes);
    }
}

use glam::{Mat4, Vec3};

use crate::input::{Action, InputState};

/// Pitch is kept strictly inside +-90 degrees so the basis never flips.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Free-fly camera driven by yaw/pitch angles and logical movement actions.
///
/// The front/right/up basis is recomputed from scratch after every yaw or
/// pitch change rather than incrementally rotated, so no floating-point drift
/// accumulates over long sessions. The three vectors are always mutually
/// orthonormal and never updated independently.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    move_speed: f32,
    turn_speed: f32,
}

impl Camera {
    /// Creates a camera and immediately derives its orientation basis.
    ///
    /// `yaw` and `pitch` are in degrees; a yaw of -90 looks down -Z.
    pub fn new(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
        move_speed: f32,
        turn_speed: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: world_up.normalize(),
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES),
            move_speed,
            turn_speed,
        };
        camera.update_basis();
        camera
    }

    /// Moves along the current basis for every active movement action.
    ///
    /// Simultaneous actions are summed into a single displacement, then the
    /// position updates once, so the result is order-independent.
    pub fn key_control(&mut self, input: &InputState, delta_seconds: f32) {
        let mut displacement = Vec3::ZERO;
        if input.is_active(Action::MoveForward) {
            displacement += self.front;
        }
        if input.is_active(Action::MoveBack) {
            displacement -= self.front;
        }
        if input.is_active(Action::StrafeRight) {
            displacement += self.right;
        }
        if input.is_active(Action::StrafeLeft) {
            displacement -= self.right;
        }
        self.position += displacement * self.move_speed * delta_seconds;
    }

    /// Turns by the given mouse delta, in screen units scaled by turn speed.
    ///
    /// Positive `y_change` pitches the view upward.
    pub fn mouse_control(&mut self, x_change: f32, y_change: f32) {
        self.yaw += x_change * self.turn_speed;
        self.pitch = (self.pitch + y_change * self.turn_speed)
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.update_basis();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Look-at transform from world space into eye space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.5, 2.5), Vec3::Y, -90.0, 0.0, 5.0, 0.5)
    }

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front().length() - 1.0).abs() < TOLERANCE);
        assert!((camera.right().length() - 1.0).abs() < TOLERANCE);
        assert!((camera.up().length() - 1.0).abs() < TOLERANCE);
        assert!(camera.front().dot(camera.right()).abs() < TOLERANCE);
        assert!(camera.front().dot(camera.up()).abs() < TOLERANCE);
        assert!(camera.right().dot(camera.up()).abs() < TOLERANCE);
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = test_camera();
        assert_close(camera.front(), Vec3::NEG_Z);
        assert_close(camera.right(), Vec3::X);
        assert_close(camera.up(), Vec3::Y);
    }

    #[test]
    fn zero_mouse_delta_is_idempotent() {
        let mut camera = test_camera();
        let before = camera.clone();
        for _ in 0..100 {
            camera.mouse_control(0.0, 0.0);
        }
        assert_eq!(camera.yaw(), before.yaw());
        assert_eq!(camera.pitch(), before.pitch());
        assert_close(camera.front(), before.front());
        assert_close(camera.right(), before.right());
        assert_close(camera.up(), before.up());
    }

    #[test]
    fn no_actions_means_no_movement() {
        let mut camera = test_camera();
        let input = InputState::new();
        for delta in [0.0, 0.016, 1.0, 1000.0] {
            camera.key_control(&input, delta);
        }
        assert_eq!(camera.position(), Vec3::new(0.0, 0.5, 2.5));
    }

    #[test]
    fn opposite_yaw_deltas_restore_orientation() {
        let mut camera = test_camera();
        let before = camera.clone();
        camera.mouse_control(90.0 / 0.5, 0.0);
        camera.mouse_control(-90.0 / 0.5, 0.0);
        assert!((camera.yaw() - before.yaw()).abs() < TOLERANCE);
        assert_close(camera.front(), before.front());
        assert_close(camera.right(), before.right());
        assert_close(camera.up(), before.up());
    }

    #[test]
    fn pitch_is_clamped_inside_ninety_degrees() {
        let mut camera = test_camera();
        camera.mouse_control(0.0, 100_000.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT_DEGREES);
        assert_orthonormal(&camera);
        camera.mouse_control(0.0, -200_000.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT_DEGREES);
        assert_orthonormal(&camera);
    }

    #[test]
    fn basis_stays_orthonormal_under_arbitrary_input() {
        let mut camera = test_camera();
        for (dx, dy) in [(13.0, 7.0), (-250.0, 44.0), (0.3, -0.3), (720.0, -95.0)] {
            camera.mouse_control(dx, dy);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn forward_movement_follows_front_vector() {
        let mut camera = test_camera();
        let mut input = InputState::new();
        input.press(Action::MoveForward);
        camera.key_control(&input, 0.5);
        // move_speed 5.0 * 0.5s along -Z.
        assert_close(camera.position(), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn opposing_actions_cancel_out() {
        let mut camera = test_camera();
        let mut input = InputState::new();
        input.press(Action::MoveForward);
        input.press(Action::MoveBack);
        input.press(Action::StrafeLeft);
        input.press(Action::StrafeRight);
        camera.key_control(&input, 2.0);
        assert_close(camera.position(), Vec3::new(0.0, 0.5, 2.5));
    }

    #[test]
    fn diagonal_movement_sums_displacements() {
        let mut camera = test_camera();
        let mut input = InputState::new();
        input.press(Action::MoveForward);
        input.press(Action::StrafeRight);
        camera.key_control(&input, 1.0);
        assert_close(camera.position(), Vec3::new(5.0, 0.5, -2.5));
    }

    #[test]
    fn view_matrix_maps_look_target_onto_view_axis() {
        let camera = test_camera();
        let view = camera.view_matrix();
        let target = camera.position() + camera.front();
        let eye_space = view.transform_point3(target);
        // One unit straight ahead lands on the -Z view axis.
        assert_close(eye_space, Vec3::NEG_Z);
    }

    #[test]
    fn world_up_is_normalized_on_construction() {
        // The reference scene passes a non-unit world up; the basis must
        // come out orthonormal regardless.
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), -90.0, 30.0, 5.0, 0.5);
        assert_orthonormal(&camera);
    }
}

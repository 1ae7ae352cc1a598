use std::time::Instant;

use anyhow::{anyhow, Result};
use glam::{Vec2, Vec3};
use log::info;
use winit::event::{DeviceEvent, ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoopWindowTarget;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::Camera;
use crate::input::{Action, Bindings, InputState};
use crate::render::{CameraParams, Renderer};
use crate::scene::{desk_scene, DirectionalLight, Projection, SceneNode};

/// Everything the control loop owns: renderer, camera, input and the scene.
///
/// All state lives here and is passed into rendering explicitly; nothing is
/// process-global.
pub struct App {
    renderer: Renderer,
    camera: Camera,
    input: InputState,
    bindings: Bindings,
    projection: Projection,
    light: DirectionalLight,
    nodes: Vec<SceneNode>,
    last_frame: Instant,
}

impl App {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            camera: Camera::new(Vec3::new(0.0, 0.5, 2.5), Vec3::Y, -90.0, 0.0, 5.0, 0.5),
            input: InputState::new(),
            bindings: Bindings::default(),
            projection: Projection::Perspective,
            light: DirectionalLight::default(),
            nodes: desk_scene(),
            last_frame: Instant::now(),
        }
    }

    /// Feeds one winit event through input handling and rendering.
    pub fn handle_event(
        &mut self,
        event: &Event<()>,
        target: &EventLoopWindowTarget<()>,
    ) -> Result<()> {
        match event {
            Event::WindowEvent { event, window_id } if *window_id == self.renderer.window_id() => {
                self.handle_window_event(event, target)?;
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                // Flip Y so that moving the mouse up pitches the view up.
                self.input
                    .add_mouse_delta(Vec2::new(delta.0 as f32, -delta.1 as f32));
            }
            Event::AboutToWait => {
                self.renderer.window().request_redraw();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        target: &EventLoopWindowTarget<()>,
    ) -> Result<()> {
        match event {
            WindowEvent::CloseRequested => target.exit(),
            WindowEvent::Resized(size) => self.renderer.resize(*size),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event, target),
            WindowEvent::RedrawRequested => self.update_and_render()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, event: &KeyEvent, target: &EventLoopWindowTarget<()>) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        if code == KeyCode::Escape && event.state.is_pressed() {
            target.exit();
            return;
        }
        let Some(action) = self.bindings.resolve(code) else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.input.press(action),
            ElementState::Released => self.input.release(action),
        }
    }

    /// Advances the camera by the elapsed frame time and draws the scene.
    fn update_and_render(&mut self) -> Result<()> {
        let now = Instant::now();
        let delta_seconds = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.camera.key_control(&self.input, delta_seconds);
        let mouse = self.input.take_mouse_delta();
        self.camera.mouse_control(mouse.x, mouse.y);
        if self.input.take_just_pressed(Action::ToggleProjection) {
            self.projection = self.projection.toggled();
            info!("projection switched to {:?}", self.projection);
        }

        let camera = CameraParams {
            view_proj: self.projection.matrix(self.renderer.aspect()) * self.camera.view_matrix(),
            position: self.camera.position(),
        };
        self.renderer.update_globals(&camera, &self.light);

        match self.renderer.render(&self.nodes) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.renderer.window().inner_size();
                self.renderer.resize(size);
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(anyhow!("GPU is out of memory")),
            Err(wgpu::SurfaceError::Timeout) => {
                info!("surface timeout; retrying next frame");
                Ok(())
            }
        }
    }
}

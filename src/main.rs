use std::env;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use pollster::block_on;
use winit::dpi::LogicalSize;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{CursorGrabMode, WindowBuilder};

use deskscene::{desk_scene, App, MeshId, Renderer, SceneNode};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;
    let nodes = desk_scene();
    print_scene_summary(&nodes);

    if options.summary_only {
        return Ok(());
    }

    match run_interactive(&options) {
        Err(err) if err.downcast_ref::<WindowInitError>().is_some() => {
            eprintln!("{err}. Scene summary printed above (set DISPLAY to enable rendering).");
            Ok(())
        }
        other => other,
    }
}

fn run_interactive(options: &CliOptions) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|err| WindowInitError::new("event loop", err))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Desk Scene")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .build(&event_loop)
            .map_err(|err| WindowInitError::new("window", err))?,
    );

    // Capture the cursor for free-look; not every backend supports locking.
    if window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        .is_ok()
    {
        window.set_cursor_visible(false);
    } else {
        log::warn!("cursor grab is unavailable; mouse look may escape the window");
    }

    let renderer = block_on(Renderer::new(Arc::clone(&window), &options.texture_dir))
        .context("failed to initialize the renderer")?;
    let mut app = App::new(renderer);

    let mut fatal = None;
    event_loop.run(|event, target| {
        target.set_control_flow(ControlFlow::Poll);
        if let Err(err) = app.handle_event(&event, target) {
            fatal = Some(err);
            target.exit();
        }
    })?;

    match fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn print_scene_summary(nodes: &[SceneNode]) {
    println!("Meshes:");
    for id in MeshId::ALL {
        let mesh = id.build();
        println!(
            " - {}: {} vertices, {} triangles",
            id.label(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    println!("Desk scene with {} nodes:", nodes.len());
    let mut groups: Vec<(&str, usize)> = Vec::new();
    for node in nodes {
        match groups.last_mut() {
            Some((name, count)) if *name == node.name => *count += 1,
            _ => groups.push((node.name, 1)),
        }
    }
    for (name, count) in groups {
        println!(" - {name} x{count}");
    }
}

#[derive(Debug)]
struct WindowInitError {
    message: String,
}

impl WindowInitError {
    fn new(stage: &str, err: impl fmt::Display) -> Self {
        Self {
            message: format!("failed to initialize {stage}: {err}"),
        }
    }
}

impl fmt::Display for WindowInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for WindowInitError {}

struct CliOptions {
    summary_only: bool,
    texture_dir: PathBuf,
}

impl CliOptions {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut summary_only = false;
        let mut texture_dir = PathBuf::from("textures");
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--summary-only" => summary_only = true,
                "--textures" => {
                    texture_dir = args
                        .next()
                        .map(PathBuf::from)
                        .ok_or_else(|| anyhow!("--textures requires a directory argument"))?;
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument: {other}. Usage: deskscene [--summary-only] [--textures <dir>]"
                    ));
                }
            }
        }
        Ok(Self {
            summary_only,
            texture_dir,
        })
    }
}

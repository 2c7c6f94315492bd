// File: crates/kaleido-window/src/main.rs
// Summary: Windowed kaleidoscope: pointer strokes are mirrored onto the stage, composed with the
// current rotation and blitted to the window via softbuffer (CPU).

mod controls;

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use kaleido_core::geometry::side_length_for;
use kaleido_core::stage::StageOptions;
use kaleido_core::{Config, FileStore, Gallery, Padding, Point2D, Rgb, Session, Stage};
use tracing::{error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use controls::{action_for_key, Action, HELP};

#[derive(Parser, Debug)]
#[command(name = "kaleido")]
#[command(author, version, about = "Draw mirrored kaleidoscope patterns")]
struct Args {
    /// Config file path (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value = "1024")]
    width: u32,

    /// Initial window height
    #[arg(long, default_value = "720")]
    height: u32,

    /// Override the configured sector count
    #[arg(long)]
    sectors: Option<u32>,

    /// Override the configured mark color (#rrggbb)
    #[arg(long)]
    color: Option<Rgb>,

    /// Override the gallery store file
    #[arg(long)]
    gallery: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kaleido=info".parse()?)
                .add_directive("kaleido_core=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::load_or_default(args.config.as_deref());
    if let Some(n) = args.sectors {
        config.settings.sector_count = n;
    }
    if let Some(c) = args.color {
        config.settings.color = c;
    }
    if let Some(p) = args.gallery {
        config.gallery.path = Some(p);
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Kaleido")
        .with_inner_size(winit::dpi::PhysicalSize::new(args.width, args.height))
        .build(&event_loop)
        .context("build window")?;

    // Fixed for the whole session, even if the window is resized later.
    let mut size = window.inner_size();
    let side = config
        .stage
        .side_length
        .unwrap_or_else(|| side_length_for(size.width, size.height))
        .max(1);
    let padding = config.stage.padding();

    let stage = Stage::new(&StageOptions {
        side_length: side as i32,
        theme: config.stage.theme(),
    })?;

    let gallery_path = config.gallery.resolved_path();
    let gallery = Gallery::with_key(
        FileStore::open(&gallery_path)
            .with_context(|| format!("opening gallery {}", gallery_path.display()))?,
        config.gallery.key.clone(),
    );
    match gallery.entries() {
        Ok(items) => info!(count = items.len(), path = %gallery_path.display(), "gallery restored"),
        Err(e) => warn!("gallery unreadable: {e}"),
    }

    let mut session = Session::new(config.settings, stage, gallery)
        .with_layout(stage_origin(size, side, padding), padding)
        .with_snapshot_size(config.gallery.snapshot_size);

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    info!(side, "stage ready; press H for key bindings");
    let mut cursor = Point2D::origin();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    session.set_canvas_origin(stage_origin(size, side, padding));
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Point2D::new(position.x, position.y);
                    session.pointer_move(cursor);
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => session.pointer_down(cursor),
                    ElementState::Released => session.pointer_up(),
                },
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => match action_for_key(key, session.settings()) {
                    Some(Action::Setting(update)) => {
                        session.update_setting(update);
                        let s = session.settings();
                        info!(
                            color = %s.color,
                            size = s.mark_radius,
                            sectors = s.sector_count,
                            rotation = s.rotation_velocity,
                            "settings"
                        );
                    }
                    Some(Action::Control(c)) => {
                        if let Err(e) = session.control(c) {
                            error!("{c:?} failed: {e}");
                        }
                    }
                    Some(Action::Help) => println!("{HELP}"),
                    Some(Action::Quit) => *control_flow = ControlFlow::Exit,
                    None => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let rotation = session.tick();
                if let Err(e) = present(&mut surface, &mut session, size, padding, rotation) {
                    error!("present error: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Top-left of the stage's bounding box: centered in the window.
fn stage_origin(size: PhysicalSize<u32>, side: u32, padding: Padding) -> Point2D {
    let used_w = side + padding.left;
    let used_h = side + padding.top;
    Point2D::new(
        (size.width.saturating_sub(used_w) / 2) as f64,
        (size.height.saturating_sub(used_h) / 2) as f64,
    )
}

fn present<S: kaleido_core::KeyValueStore>(
    surface: &mut softbuffer::Surface,
    session: &mut Session<S>,
    size: PhysicalSize<u32>,
    padding: Padding,
    rotation: Option<f64>,
) -> Result<()> {
    let w = size.width.max(1);
    let h = size.height.max(1);
    let (nw, nh) = (
        NonZeroU32::new(w).context("zero width")?,
        NonZeroU32::new(h).context("zero height")?,
    );
    surface
        .resize(nw, nh)
        .map_err(|e| anyhow!("resize: {e:?}"))?;

    let origin = session.canvas_origin();
    let content = Point2D::new(origin.x + padding.left as f64, origin.y + padding.top as f64);
    let rgba = session
        .stage_mut()
        .compose_rgba8(w as i32, h as i32, content, rotation)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e:?}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow!("present: {e:?}"))?;
    Ok(())
}

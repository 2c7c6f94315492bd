// File: crates/kaleido-demo/src/main.rs
// Summary: Headless demo: replays a generated stroke through a session, writes the stage to PNG,
// and lists/exports/erases the snapshot gallery.

mod pattern;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kaleido_core::stage::StageOptions;
use kaleido_core::theme;
use kaleido_core::{decode_data_url, Config, FileStore, Gallery, Rgb, Session, SettingUpdate, Stage};
use tracing::info;

use pattern::{stroke, Pattern};

#[derive(Parser, Debug)]
#[command(name = "kaleido-demo")]
#[command(author, version, about = "Render kaleidoscope patterns headlessly and manage the gallery")]
struct Args {
    /// Config file path (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the gallery store file
    #[arg(long, global = true)]
    gallery: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a generated stroke and write the stage as PNG
    Render {
        /// Output PNG path
        #[arg(short, long, default_value = "target/out/kaleido.png")]
        out: PathBuf,

        /// Stage side length in pixels
        #[arg(long, default_value = "640")]
        side: u32,

        /// Stroke shape
        #[arg(long, value_enum, default_value = "spiral")]
        pattern: Pattern,

        /// Samples along the stroke
        #[arg(long, default_value = "400")]
        points: usize,

        #[arg(long)]
        sectors: Option<u32>,

        /// Mark radius
        #[arg(long)]
        size: Option<f32>,

        /// Mark color (#rrggbb)
        #[arg(long)]
        color: Option<Rgb>,

        /// Stage theme: classic, night, paper
        #[arg(long)]
        theme: Option<String>,

        /// Also save a snapshot to the front of the gallery
        #[arg(long)]
        snapshot: bool,
    },
    /// Inspect or manage the snapshot gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },
}

#[derive(Subcommand, Debug)]
enum GalleryAction {
    /// List snapshots, newest first
    List,
    /// Write every snapshot as a numbered PNG into a directory
    Export {
        #[arg(default_value = "target/out/gallery")]
        dir: PathBuf,
    },
    /// Remove all snapshots
    Erase,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kaleido_demo=info".parse()?)
                .add_directive("kaleido_core=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::load_or_default(args.config.as_deref());
    if let Some(p) = args.gallery {
        config.gallery.path = Some(p);
    }

    match args.command {
        Command::Render {
            out,
            side,
            pattern,
            points,
            sectors,
            size,
            color,
            theme,
            snapshot,
        } => {
            let mut settings = config.settings;
            if let Some(n) = sectors {
                settings.apply(SettingUpdate::SectorCount(n));
            }
            if let Some(r) = size {
                settings.apply(SettingUpdate::MarkRadius(r));
            }
            if let Some(c) = color {
                settings.apply(SettingUpdate::Color(c));
            }
            if let Some(name) = theme {
                config.stage.theme = name;
            }
            config.settings = settings;
            render(&config, &out, side, pattern, points, snapshot)
        }
        Command::Gallery { action } => {
            let mut gallery = open_gallery(&config)?;
            match action {
                GalleryAction::List => list(&gallery),
                GalleryAction::Export { dir } => export(&gallery, &dir),
                GalleryAction::Erase => {
                    gallery.erase()?;
                    println!("Erased gallery '{}'", gallery.key());
                    Ok(())
                }
            }
        }
    }
}

fn open_gallery(config: &Config) -> Result<Gallery<FileStore>> {
    let path = config.gallery.resolved_path();
    let store =
        FileStore::open(&path).with_context(|| format!("opening gallery {}", path.display()))?;
    Ok(Gallery::with_key(store, config.gallery.key.clone()))
}

fn render(
    config: &Config,
    out: &Path,
    side: u32,
    pattern: Pattern,
    points: usize,
    snapshot: bool,
) -> Result<()> {
    let stage = Stage::new(&StageOptions {
        side_length: side as i32,
        theme: theme::find(&config.stage.theme),
    })?;
    let mut session = Session::new(config.settings, stage, open_gallery(config)?)
        .with_snapshot_size(config.gallery.snapshot_size);

    // The canvas sits at the viewport origin, so stroke points pass through unchanged.
    let path = stroke(pattern, side as f64, points);
    if let Some((first, rest)) = path.split_first() {
        session.pointer_down(*first);
        for p in rest {
            session.pointer_move(*p);
        }
        session.pointer_up();
    }
    let s = session.settings();
    info!(
        ?pattern,
        points = path.len(),
        sectors = s.sector_count,
        color = %s.color,
        "stroke replayed"
    );

    session
        .stage_mut()
        .render_to_png(out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());

    if snapshot {
        session.snapshot()?;
        println!(
            "Saved snapshot; gallery '{}' now has {} item(s)",
            session.gallery().key(),
            session.gallery().len()?
        );
    }
    Ok(())
}

fn list(gallery: &Gallery<FileStore>) -> Result<()> {
    let items = gallery.entries()?;
    println!("{} snapshot(s) in {}", items.len(), gallery.store().path().display());
    for (i, item) in items.iter().enumerate() {
        let bytes = decode_data_url(item).map(|b| b.len()).unwrap_or(0);
        println!("  #{i:<3} {bytes} bytes");
    }
    Ok(())
}

fn export(gallery: &Gallery<FileStore>, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let items = gallery.entries()?;
    for (i, item) in items.iter().enumerate() {
        let png = decode_data_url(item).with_context(|| format!("snapshot #{i}"))?;
        let path = dir.join(format!("snapshot_{i:03}.png"));
        std::fs::write(&path, png)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

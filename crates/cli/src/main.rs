#![deny(unsafe_code)]
//! CLI binary for the disintegrate particle effect.
//!
//! Subcommands:
//! - `render <image>`: sample an image, play N frames, write a PNG
//! - `info <image>`: sample an image and report the particle count
//! - `schema`: print the effect's parameter schema

mod error;

use clap::{Args, Parser, Subcommand};
use disintegrate_core::{Effect, Field, FieldParams};
use disintegrate_raster::snapshot::{load_bitmap, write_png};
use disintegrate_raster::{play, render, sample_image, Script};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "disintegrate", about = "Particle image-disintegration effect")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Surface size, seed and params shared by every sampling subcommand.
#[derive(Args)]
struct Sampling {
    /// Source image (PNG).
    image: PathBuf,

    /// Surface width in pixels.
    #[arg(short = 'W', long, default_value_t = 640)]
    width: usize,

    /// Surface height in pixels.
    #[arg(short = 'H', long, default_value_t = 480)]
    height: usize,

    /// PRNG seed for the initial scatter and warps.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Effect parameters as a JSON string (gap, radius, ease, warp_ease, friction).
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Subcommand)]
enum Command {
    /// Sample an image, run the effect for N frames and write a PNG snapshot.
    Render {
        #[command(flatten)]
        sampling: Sampling,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 120)]
        frames: usize,

        /// Warp before this frame (0-based).
        #[arg(long)]
        warp_at: Option<usize>,

        /// Fixed pointer position as `x,y`.
        #[arg(long, value_parser = parse_pointer)]
        pointer: Option<(f64, f64)>,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Sample an image and report how many particles it yields.
    Info {
        #[command(flatten)]
        sampling: Sampling,
    },
    /// Print the parameter schema.
    Schema,
}

/// Parses `x,y` into a pointer position.
fn parse_pointer(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid coordinate `{v}`"))
    };
    Ok((parse(x)?, parse(y)?))
}

/// Loads the image and builds an initialized field from it.
fn build_field(sampling: &Sampling) -> Result<Field, CliError> {
    let params: serde_json::Value = serde_json::from_str(&sampling.params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let params = FieldParams::from_json(&params);
    let image = load_bitmap(&sampling.image)?;
    let field = sample_image(
        &image,
        sampling.width,
        sampling.height,
        params,
        sampling.seed,
    )?;
    Ok(field)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Schema => {
            println!(
                "{}",
                serde_json::to_string_pretty(&FieldParams::schema())?
            );
        }
        Command::Info { sampling } => {
            let field = build_field(&sampling)?;
            if cli.json {
                let info = serde_json::json!({
                    "image": display(&sampling.image),
                    "width": field.width(),
                    "height": field.height(),
                    "particles": field.particle_count(),
                    "params": field.params(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{}: {} particles on {}x{} (gap {})",
                    sampling.image.display(),
                    field.particle_count(),
                    field.width(),
                    field.height(),
                    field.gap()
                );
            }
        }
        Command::Render {
            sampling,
            frames,
            warp_at,
            pointer,
            output,
        } => {
            let mut field = build_field(&sampling)?;
            let script = Script {
                frames,
                warp_at,
                pointer,
            };
            play(&mut field, &script);
            let frame = render(&field)?.into_bitmap();
            write_png(&frame, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "image": display(&sampling.image),
                    "width": field.width(),
                    "height": field.height(),
                    "frames": frames,
                    "seed": sampling.seed,
                    "particles": field.particle_count(),
                    "output": display(&output),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} particles ({}x{}, {frames} frames, seed {}) -> {}",
                    field.particle_count(),
                    field.width(),
                    field.height(),
                    sampling.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        log::debug!("exiting with code {}", e.exit_code());
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

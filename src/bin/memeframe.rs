use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "memeframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute where content lands inside a container, printed as JSON.
    Fit(FitArgs),
    /// Show the speech volume and icon for a slider position, printed as JSON.
    Volume(VolumeArgs),
    /// Validate a config file and print it with defaults filled in.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Container size, `WIDTHxHEIGHT` (e.g. `800x600`).
    #[arg(long, value_parser = parse_size)]
    container: (f64, f64),

    /// Content size, `WIDTHxHEIGHT` (e.g. `1600x900`).
    #[arg(long, value_parser = parse_size)]
    content: (f64, f64),
}

#[derive(Parser, Debug)]
struct VolumeArgs {
    /// Slider position (0-100).
    #[arg(long)]
    value: u8,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Input config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Fit(args) => cmd_fit(args),
        Command::Volume(args) => cmd_volume(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let (cw, ch) = args.container;
    let (iw, ih) = args.content;
    let placement = memeframe::fit(cw, ch, iw, ih)
        .with_context(|| format!("fit {iw}x{ih} into {cw}x{ch}"))?;
    println!("{}", serde_json::to_string_pretty(&placement)?);
    Ok(())
}

fn cmd_volume(args: VolumeArgs) -> anyhow::Result<()> {
    let volume = memeframe::Volume::from_slider(args.value)?;
    let out = serde_json::json!({
        "slider": volume.slider(),
        "level": volume.level(),
        "icon": volume.icon(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = memeframe::MemeConfig::from_path(&args.in_path)
        .with_context(|| format!("load config '{}'", args.in_path.display()))?;
    tracing::debug!(font = ?cfg.resolved_font_path(), "config loaded");
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

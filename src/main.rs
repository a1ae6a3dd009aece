use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use shield_icons::{generate_assets, AssetManifest};

/// Generate the shield icon assets for the primary project and its siblings.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the projects. Manifest paths are relative to it.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON manifest replacing the built-in asset list.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Print the effective manifest as JSON and exit.
    #[arg(long)]
    print_manifest: bool,
}

/// Loads the manifest from `path`, or the built-in one when no path is given.
fn load_manifest(path: Option<&Path>) -> shield_icons::Result<AssetManifest> {
    match path {
        Some(path) => AssetManifest::load(path),
        None => Ok(AssetManifest::default()),
    }
}

fn run(args: Args) -> shield_icons::Result<()> {
    let manifest = load_manifest(args.manifest.as_deref())?;

    if args.print_manifest {
        println!("{}", manifest.to_json_pretty()?);
        return Ok(());
    }

    let written = generate_assets(&args.root, &manifest)?;
    log::info!("wrote {} assets under {}", written.len(), args.root.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

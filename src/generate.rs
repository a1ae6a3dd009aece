//! Writes every asset listed in a manifest.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::{AssetManifest, AssetSpec};
use crate::render::{create_icon, ensure_dir};

/// Generates the primary asset set and the assets of every existing
/// sibling project under `root`.
///
/// Returns the written paths in generation order. The first failure aborts
/// the run; files written before it are left in place.
pub fn generate_assets(root: &Path, manifest: &AssetManifest) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let primary_dir = root.join(&manifest.primary.dir);
    write_group(&primary_dir, &manifest.primary.assets, &mut written)?;

    let siblings = &manifest.siblings;
    for project in &siblings.projects {
        let project_dir = root.join(project);
        if !project_dir.is_dir() {
            log::debug!("skipping {}: directory not found", project_dir.display());
            continue;
        }

        write_group(&project_dir.join(&siblings.subdir), &siblings.assets, &mut written)?;
    }

    Ok(written)
}

fn write_group(dir: &Path, assets: &[AssetSpec], written: &mut Vec<PathBuf>) -> Result<()> {
    ensure_dir(dir)?;
    log::debug!("writing {} assets to {}", assets.len(), dir.display());

    for asset in assets {
        let path = dir.join(&asset.file);
        create_icon(asset.size, &path, asset.backdrop())?;
        written.push(path);
    }
    Ok(())
}

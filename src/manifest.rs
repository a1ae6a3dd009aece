//! Serializable description of the assets to generate.
//!
//! An [`AssetManifest`] lists the icons written for the primary project and
//! for each sibling project. All directories are relative to a project root
//! chosen at run time.
//!
//! # Example
//!
//! ```
//! use shield_icons::AssetManifest;
//!
//! let manifest = AssetManifest::default();
//! let json = manifest.to_json_pretty().unwrap();
//! let restored = AssetManifest::from_json(&json).unwrap();
//! assert_eq!(manifest, restored);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::Backdrop;

// ============================================================================
// Asset
// ============================================================================

/// One icon file to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AssetSpec {
    /// File name inside the target directory. The extension selects the format.
    pub file: String,

    /// Width and height in pixels.
    pub size: u32,

    /// Render on a transparent canvas without the glow.
    #[serde(default)]
    pub transparent: bool,
}

impl AssetSpec {
    pub fn new(file: impl Into<String>, size: u32) -> Self {
        Self {
            file: file.into(),
            size,
            transparent: false,
        }
    }

    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    pub fn backdrop(&self) -> Backdrop {
        Backdrop::from_transparent(self.transparent)
    }
}

// ============================================================================
// Targets
// ============================================================================

/// The primary project's asset directory. Always created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PrimaryTarget {
    /// Directory relative to the root.
    pub dir: PathBuf,
    pub assets: Vec<AssetSpec>,
}

/// Sibling projects that receive a smaller asset set.
///
/// A sibling only gets assets if its directory already exists under the
/// root; the `subdir` inside it is created on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SiblingTargets {
    /// Project directory names relative to the root.
    pub projects: Vec<String>,

    #[serde(default = "default_subdir")]
    pub subdir: PathBuf,

    pub assets: Vec<AssetSpec>,
}

impl Default for SiblingTargets {
    fn default() -> Self {
        Self {
            projects: vec!["device-app".into(), "dashboard".into()],
            subdir: default_subdir(),
            assets: vec![AssetSpec::new("favicon.ico", 64), AssetSpec::new("icon.png", 512)],
        }
    }
}

fn default_subdir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for PrimaryTarget {
    fn default() -> Self {
        Self {
            dir: Path::new("mobile-tracker").join("assets"),
            assets: vec![
                AssetSpec::new("icon.png", 1024),
                AssetSpec::new("adaptive-icon.png", 1024).transparent(),
                AssetSpec::new("splash-icon.png", 1024),
                AssetSpec::new("favicon.png", 48),
            ],
        }
    }
}

// ============================================================================
// AssetManifest
// ============================================================================

/// Everything the generator writes.
///
/// # JSON Format
///
/// ```json
/// {
///   "primary": {
///     "dir": "mobile-tracker/assets",
///     "assets": [
///       { "file": "icon.png", "size": 1024 },
///       { "file": "adaptive-icon.png", "size": 1024, "transparent": true }
///     ]
///   },
///   "siblings": {
///     "projects": ["device-app", "dashboard"],
///     "subdir": "public",
///     "assets": [{ "file": "favicon.ico", "size": 64 }]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AssetManifest {
    #[serde(default)]
    pub primary: PrimaryTarget,

    #[serde(default)]
    pub siblings: SiblingTargets,
}

impl AssetManifest {
    /// Serializes the manifest to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

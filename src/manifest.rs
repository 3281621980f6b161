//! Icon section of a browser extension `manifest.json`
//!
//! Generated alongside the PNGs so the paths can be pasted straight into the
//! extension manifest. Both the top-level `icons` map and the toolbar
//! `action.default_icon` map point at the same files.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// File name of the fragment written next to the icons
pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// Manifest fragment with the icon maps, keyed by pixel size
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    /// Icons shown on the extensions page and in the store
    pub icons: BTreeMap<u32, String>,

    /// Toolbar button icons
    pub action: Action,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct Action {
    pub default_icon: BTreeMap<u32, String>,
}

impl ManifestIcons {
    /// Register an icon file. `prefix` is the directory the manifest refers
    /// to, relative to the extension root; it may be empty.
    pub fn add_icon(&mut self, size: u32, prefix: &str, filename: &str) {
        let path = if prefix.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{}", prefix.trim_end_matches('/'), filename)
        };

        self.icons.insert(size, path.clone());
        self.action.default_icon.insert(size, path);
    }
}

/// Write the fragment into `dir` and return the path written
pub fn write_manifest_icons(dir: &Path, manifest: &ManifestIcons) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(manifest)
        .context("Failed to serialize manifest icons")?;

    let path = dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_icon_fills_both_maps() {
        let mut manifest = ManifestIcons::default();
        assert!(manifest.icons.is_empty());

        manifest.add_icon(16, "icons", "icon16.png");
        manifest.add_icon(48, "icons/", "icon48.png");

        assert_eq!(manifest.icons[&16], "icons/icon16.png");
        assert_eq!(manifest.icons[&48], "icons/icon48.png");
        assert_eq!(manifest.action.default_icon, manifest.icons);
    }

    #[test]
    fn test_empty_prefix() {
        let mut manifest = ManifestIcons::default();
        manifest.add_icon(128, "", "icon128.png");
        assert_eq!(manifest.icons[&128], "icon128.png");
    }

    #[test]
    fn test_serialization_uses_string_keys_in_numeric_order() {
        let mut manifest = ManifestIcons::default();
        for size in [128, 16, 48] {
            manifest.add_icon(size, "icons", &format!("icon{size}.png"));
        }

        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.starts_with(
            r#"{"icons":{"16":"icons/icon16.png","48":"icons/icon48.png","128":"icons/icon128.png"}"#
        ));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["action"]["default_icon"]["48"], "icons/icon48.png");
    }

    #[test]
    fn test_write_manifest_icons() {
        let dir = tempfile::tempdir().unwrap();
        let mut manifest = ManifestIcons::default();
        manifest.add_icon(16, "icons", "icon16.png");

        let path = write_manifest_icons(dir.path(), &manifest).unwrap();
        assert_eq!(path, dir.path().join(MANIFEST_FILE_NAME));

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["icons"]["16"], "icons/icon16.png");
    }
}

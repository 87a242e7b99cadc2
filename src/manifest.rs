//! Web app manifest `icons` data model
//!
//! This module defines the subset of the W3C Web App Manifest that describes
//! icons. The generated fragment can be merged into an existing
//! `manifest.json` so the browser picks up every rendered size.

use crate::error::{Error, Result};
use crate::icon::icon_file_name;
use serde::Serialize;
use std::path::Path;

/// Root structure of the emitted fragment
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    /// One entry per rendered icon, in render order
    pub icons: Vec<IconEntry>,
}

/// A single image resource in the manifest `icons` member
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// URL of the image, relative to the manifest (e.g. "icons/icon-192x192.png")
    pub src: String,

    /// Space separated list of dimensions (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// How the platform may use the icon (e.g. "any", "maskable", "monochrome")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestIcons {
    /// Builds the fragment for a set of sizes rendered into `dir_name`
    ///
    /// # Arguments
    /// * `dir_name` - URL path of the icon directory relative to the manifest
    /// * `sizes` - The rendered icon sizes
    pub fn for_sizes(dir_name: &str, sizes: &[u32]) -> Self {
        let mut manifest = Self::default();
        for &size in sizes {
            manifest.add_icon(IconEntry::png(dir_name, size).with_purpose("any".to_string()));
        }
        manifest
    }

    pub fn add_icon(&mut self, icon: IconEntry) {
        self.icons.push(icon);
    }
}

impl IconEntry {
    /// Creates a PNG icon entry pointing at `dir_name/icon-{size}x{size}.png`
    pub fn png(dir_name: &str, size: u32) -> Self {
        let file_name = icon_file_name(size);
        let dir_name = dir_name.trim_end_matches('/');
        let src = if dir_name.is_empty() {
            file_name
        } else {
            format!("{dir_name}/{file_name}")
        };

        Self {
            src,
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: None,
        }
    }

    /// Sets the purpose
    ///
    /// # Returns
    /// Self for method chaining
    pub fn with_purpose(mut self, purpose: String) -> Self {
        self.purpose = Some(purpose);
        self
    }
}

/// URL form of an output directory: forward slashes, no leading `./`
pub fn url_dir_name(dir: &Path) -> String {
    let components: Vec<String> = dir
        .components()
        .filter_map(|component| match component {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    components.join("/")
}

/// Writes the manifest icons fragment to `path`
///
/// # Errors
/// Returns an error if JSON serialization or the file write fails
pub fn write_manifest_icons(path: &Path, manifest: &ManifestIcons) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, json).map_err(|err| Error::io(path, err))
}

//! Lookup of the named image assets referenced by the report.
//!
//! Every asset is optional.  An absent or undecodable file means the
//! report is rendered without that image; it is never an error.

use std::env;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, warn};

/// Environment variable overriding the asset directory.
pub const ASSETS_DIR_ENV: &str = "TRIP_REPORT_ASSETS_DIR";

/// Images the report layout knows by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportAsset {
    /// Company logo at the top of the page.
    Logo,
    /// Localized (Arabic) company name below the logo.
    ArabicText,
    Water,
    Co2,
    Energy,
    Landfill,
}

impl ReportAsset {
    /// All assets the renderer may look up.
    pub const ALL: [ReportAsset; 6] = [
        ReportAsset::Logo,
        ReportAsset::ArabicText,
        ReportAsset::Water,
        ReportAsset::Co2,
        ReportAsset::Energy,
        ReportAsset::Landfill,
    ];

    /// File name resolved relative to the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ReportAsset::Logo => "logo.png",
            ReportAsset::ArabicText => "arabic-text.png",
            ReportAsset::Water => "water.png",
            ReportAsset::Co2 => "co2.png",
            ReportAsset::Energy => "energy.png",
            ReportAsset::Landfill => "landfill.png",
        }
    }
}

fn directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(ASSETS_DIR_ENV) {
        if !path.trim().is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets");
            if !candidates.iter().any(|existing| existing == &candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    if !candidates
        .iter()
        .any(|existing| existing == &manifest_candidate)
    {
        candidates.push(manifest_candidate);
    }

    candidates
}

/// Directory-backed resolver for [`ReportAsset`] images.
#[derive(Clone, Debug)]
pub struct AssetLibrary {
    root: PathBuf,
}

impl AssetLibrary {
    /// Uses `root` as the asset directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the asset directory from [`ASSETS_DIR_ENV`], the directory
    /// next to the running executable, or the crate's `assets/` directory,
    /// in that order.  Falls back to the last candidate when none exists,
    /// which simply renders a report without images.
    pub fn discover() -> Self {
        let candidates = directory_candidates();
        let root = candidates
            .iter()
            .find(|candidate| candidate.is_dir())
            .cloned()
            .unwrap_or_else(|| candidates.last().cloned().unwrap_or_default());
        Self { root }
    }

    /// The resolved asset directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads and decodes `asset`, or `None` when it is absent or broken.
    pub fn load(&self, asset: ReportAsset) -> Option<DynamicImage> {
        let path = self.root.join(asset.file_name());
        if !path.is_file() {
            debug!("asset {} not found at {}; skipping", asset.file_name(), path.display());
            return None;
        }

        match image::open(&path) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!("failed to decode asset {}: {}; skipping", path.display(), err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn absent_assets_resolve_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let library = AssetLibrary::new(dir.path());
        for asset in ReportAsset::ALL {
            assert!(library.load(asset).is_none());
        }
    }

    #[test]
    fn broken_assets_resolve_to_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("logo.png"), b"not a png").unwrap();
        let library = AssetLibrary::new(dir.path());
        assert!(library.load(ReportAsset::Logo).is_none());
    }

    #[test]
    fn decodable_assets_resolve_to_images() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = image::RgbaImage::from_pixel(8, 8, image::Rgba([10, 120, 60, 255]));
        buffer.save(dir.path().join("water.png")).unwrap();

        let library = AssetLibrary::new(dir.path());
        let decoded = library.load(ReportAsset::Water).unwrap();
        assert_eq!(decoded.to_rgba8().dimensions(), (8, 8));
    }
}

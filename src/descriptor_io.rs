//! Placing `Contents.json` descriptors in catalog directories.
//!
//! Only the descriptor file is written here; the image files it references
//! are placed by the caller (see [`crate::geometry`] for their names and
//! sizes). Descriptors are schema-checked before they reach disk.

use crate::catalog::CatalogContents;
use crate::kernel::{ASSET_ENCODER, AssetEncoder, Info};
use crate::schema::{validate_contents, validate_descriptor};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// File name of the descriptor inside every catalog directory.
pub const CONTENTS_FILE_NAME: &str = "Contents.json";

/// Path of the catalog directory for asset `name` under `parent`.
///
/// `name` must be a single plain path segment; anything that would land
/// outside `parent` (or produce a hidden `.<ext>` directory) is rejected.
pub fn catalog_dir<C: CatalogContents>(parent: &Path, name: &str) -> Result<PathBuf> {
    check_asset_name(name)?;
    Ok(parent.join(C::KIND.directory_name(name)))
}

fn check_asset_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("asset name must not be empty");
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        bail!("asset name {name:?} must be a single path segment");
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("asset name {name:?} must be a single path segment"),
    }
}

/// Write `contents` to `<parent>/<name>.<ext>/Contents.json`.
///
/// Creates the catalog directory when missing and replaces an existing
/// descriptor. Returns the path of the written file.
pub fn write_contents<C: CatalogContents>(
    parent: &Path,
    name: &str,
    contents: &C,
) -> Result<PathBuf> {
    let dir = catalog_dir::<C>(parent, name)?;
    validate_contents(contents)
        .with_context(|| format!("refusing to write invalid descriptor for {name}"))?;

    let kind = C::KIND;
    for filename in contents.filenames() {
        if !kind.permits_content(filename) {
            warn!(%kind, filename, "descriptor references a file type the catalog does not accept");
        }
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("creating catalog directory {}", dir.display()))?;

    let path = dir.join(CONTENTS_FILE_NAME);
    let bytes = AssetEncoder::file().to_vec(contents)?;
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), images = contents.filenames().len(), "wrote descriptor");
    Ok(path)
}

/// Read and decode the descriptor inside catalog directory `dir`.
///
/// The file must satisfy the kind's schema, so unknown keys and `null`
/// attributes fail here instead of being dropped on the next write. The
/// `info` record is the one exception: it is replaced with [`Info::current`]
/// before the check.
pub fn read_contents<C: CatalogContents>(dir: &Path) -> Result<C> {
    let path = dir.join(CONTENTS_FILE_NAME);
    let text =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let mut value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    if let Some(object) = value.as_object_mut() {
        object.insert("info".to_string(), ASSET_ENCODER.to_value(&Info::current())?);
    }
    validate_descriptor(C::KIND, &value)
        .with_context(|| format!("checking {}", path.display()))?;
    let contents: C =
        serde_json::from_value(value).with_context(|| format!("decoding {}", path.display()))?;
    let kind = C::KIND;
    debug!(path = %path.display(), %kind, "read descriptor");
    Ok(contents)
}

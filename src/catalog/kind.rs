use crate::error::SerializationError;
use crate::kernel::{ASSET_ENCODER, AssetEncoder, Info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;

/// Which descriptor family a catalog directory holds.
///
/// The kind fixes the directory extension and the file types the packaging
/// tool accepts next to the descriptor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CatalogKind {
    AppIconSet,
    ImageSet,
}

impl CatalogKind {
    /// Directory extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            CatalogKind::AppIconSet => "appiconset",
            CatalogKind::ImageSet => "imageset",
        }
    }

    /// File extensions the packaging tool accepts inside the directory.
    pub fn permitted_content_extensions(&self) -> &'static [&'static str] {
        match self {
            CatalogKind::AppIconSet => &["png"],
            CatalogKind::ImageSet => &["avci", "heic", "heif", "png", "jpg", "pdf"],
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "appiconset" => Some(CatalogKind::AppIconSet),
            "imageset" => Some(CatalogKind::ImageSet),
            _ => None,
        }
    }

    /// Catalog directory name for an asset, e.g. `AppIcon.appiconset`.
    pub fn directory_name(&self, name: &str) -> String {
        format!("{name}.{}", self.extension())
    }

    /// Returns true when `filename` has an extension this kind accepts.
    ///
    /// Advisory only: entries are never rejected for their file type, since
    /// the files themselves are placed by the caller.
    pub fn permits_content(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.permitted_content_extensions()
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Root `Contents.json` value of one catalog directory.
///
/// Implemented by [`AppIconContents`](crate::AppIconContents) and
/// [`ImageSetContents`](crate::ImageSetContents) so file placement and schema
/// checks can be written once for both families.
pub trait CatalogContents: Serialize + DeserializeOwned {
    const KIND: CatalogKind;

    fn info(&self) -> &Info;

    /// Referenced file names in declaration order.
    fn filenames(&self) -> Vec<&str>;

    fn encode(&self, encoder: &AssetEncoder) -> Result<String, SerializationError> {
        encoder.to_string(self)
    }

    /// Compact encoding with the shared encoder.
    fn to_json(&self) -> Result<String, SerializationError> {
        self.encode(&ASSET_ENCODER)
    }
}

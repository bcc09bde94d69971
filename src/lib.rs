//! Typed model of asset-catalog `Contents.json` descriptors.
//!
//! The crate covers the two descriptor families the packaging tool reads:
//! app-icon sets (`*.appiconset`) and general image sets (`*.imageset`).
//! Callers pick variant values from the closed vocabularies in [`variant`],
//! build image entries with the builders in [`catalog`], package them into a
//! `Contents` value and encode it with the shared [`AssetEncoder`]. The wire
//! format is fixed: hyphenated keys, explicit wire strings per enum value,
//! unset attributes omitted rather than written as `null`.
//!
//! [`geometry`] is independent of the descriptors and answers the questions
//! callers have when producing the bitmaps themselves: how many pixels an
//! icon needs and what its file is conventionally called.

pub mod catalog;
pub mod descriptor_io;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod schema;
pub mod variant;

pub use catalog::{
    AlignmentInsets, AppIconContents, CapInsets, CatalogContents, CatalogKind, IconImage,
    IconImageBuilder, IconProperties, ImageSetContents, ImageSetImage, ImageSetImageBuilder,
    ImageSetProperties, Pixels, Resizing,
};
pub use descriptor_io::{CONTENTS_FILE_NAME, catalog_dir, read_contents, write_contents};
pub use error::{SerializationError, ValidationError};
pub use geometry::{
    PixelSize, extent_points, icon_file_name, idiom_suffix, pixel_size, scale_multiplier,
    scale_suffix,
};
pub use kernel::{ASSET_ENCODER, AUTHOR, AssetEncoder, Info, VERSION};
pub use schema::{DescriptorSchema, descriptor_schema, validate_contents, validate_descriptor};
pub use variant::{
    CenterMode, ColorSpace, CompressionType, DisplayGamut, GraphicsFeatureSet, HeightClass,
    IconSize, Idiom, LanguageDirection, MatchingStyle, Memory, ResizingMode, Role, Scale,
    ScreenWidth, Subtype, TemplateRenderingIntent, WidthClass,
};

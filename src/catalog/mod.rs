//! Descriptor models for the two catalog families.
//!
//! `app_icon` covers `*.appiconset` directories and `image_set` covers
//! `*.imageset` directories. Both produce a `Contents` root implementing
//! [`CatalogContents`], which is what schema checks and file placement work
//! against. `insets` holds the resizable-image structures used by image sets.

pub mod app_icon;
pub mod image_set;
pub mod insets;
pub mod kind;

pub use app_icon::{AppIconContents, IconImage, IconImageBuilder, IconProperties};
pub use image_set::{ImageSetContents, ImageSetImage, ImageSetImageBuilder, ImageSetProperties};
pub use insets::{AlignmentInsets, CapInsets, Pixels, Resizing};
pub use kind::{CatalogContents, CatalogKind};

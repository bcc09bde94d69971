//! App-icon set descriptors (`*.appiconset/Contents.json`).
//!
//! An icon entry names one bitmap and the size, scale and device family it
//! serves. Entries are built through [`IconImageBuilder`]; only the axes the
//! caller sets are written, and `idiom` is always present.

use crate::catalog::kind::{CatalogContents, CatalogKind};
use crate::error::{ValidationError, check_filename};
use crate::kernel::Info;
use crate::variant::{DisplayGamut, IconSize, Idiom, MatchingStyle, Role, Scale, Subtype};
use serde::{Deserialize, Serialize};

/// One image entry of an app-icon set.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "IconImageBuilder")]
pub struct IconImage {
    filename: String,
    idiom: Idiom,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<IconSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtype: Option<Subtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_gamut: Option<DisplayGamut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matching_style: Option<MatchingStyle>,
}

/// Field-at-a-time construction of an [`IconImage`].
///
/// Decoding goes through the builder too, so a descriptor read from disk is
/// validated exactly like one assembled in code.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct IconImageBuilder {
    filename: String,
    #[serde(default)]
    idiom: Idiom,
    size: Option<IconSize>,
    scale: Option<Scale>,
    subtype: Option<Subtype>,
    role: Option<Role>,
    display_gamut: Option<DisplayGamut>,
    matching_style: Option<MatchingStyle>,
}

impl IconImageBuilder {
    pub fn idiom(mut self, idiom: Idiom) -> Self {
        self.idiom = idiom;
        self
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn subtype(mut self, subtype: Subtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn display_gamut(mut self, display_gamut: DisplayGamut) -> Self {
        self.display_gamut = Some(display_gamut);
        self
    }

    pub fn matching_style(mut self, matching_style: MatchingStyle) -> Self {
        self.matching_style = Some(matching_style);
        self
    }

    pub fn build(self) -> Result<IconImage, ValidationError> {
        check_filename(&self.filename)?;
        Ok(IconImage {
            filename: self.filename,
            idiom: self.idiom,
            size: self.size,
            scale: self.scale,
            subtype: self.subtype,
            role: self.role,
            display_gamut: self.display_gamut,
            matching_style: self.matching_style,
        })
    }
}

impl TryFrom<IconImageBuilder> for IconImage {
    type Error = ValidationError;

    fn try_from(builder: IconImageBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl IconImage {
    /// Entry with only the filename set.
    pub fn new(filename: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder(filename).build()
    }

    pub fn builder(filename: impl Into<String>) -> IconImageBuilder {
        IconImageBuilder {
            filename: filename.into(),
            ..IconImageBuilder::default()
        }
    }

    /// Builder seeded with this entry's values, for deriving variants.
    pub fn to_builder(&self) -> IconImageBuilder {
        IconImageBuilder {
            filename: self.filename.clone(),
            idiom: self.idiom,
            size: self.size,
            scale: self.scale,
            subtype: self.subtype,
            role: self.role,
            display_gamut: self.display_gamut,
            matching_style: self.matching_style,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn idiom(&self) -> Idiom {
        self.idiom
    }

    pub fn size(&self) -> Option<IconSize> {
        self.size
    }

    pub fn scale(&self) -> Option<Scale> {
        self.scale
    }

    pub fn subtype(&self) -> Option<Subtype> {
        self.subtype
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn display_gamut(&self) -> Option<DisplayGamut> {
        self.display_gamut
    }

    pub fn matching_style(&self) -> Option<MatchingStyle> {
        self.matching_style
    }
}

/// Catalog-level properties of an app-icon set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IconProperties {
    /// iOS 6 compatibility: the artwork already includes the mask and shine.
    #[serde(default)]
    pub pre_rendered: bool,
}

/// `Contents.json` of an app-icon set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AppIconContents {
    #[serde(skip_deserializing)]
    info: Info,
    images: Vec<IconImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<IconProperties>,
}

impl AppIconContents {
    /// Package a finished, ordered list of entries.
    pub fn new(images: Vec<IconImage>) -> Self {
        Self {
            info: Info::current(),
            images,
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: IconProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn images(&self) -> &[IconImage] {
        &self.images
    }

    pub fn properties(&self) -> Option<&IconProperties> {
        self.properties.as_ref()
    }
}

impl CatalogContents for AppIconContents {
    const KIND: CatalogKind = CatalogKind::AppIconSet;

    fn info(&self) -> &Info {
        &self.info
    }

    fn filenames(&self) -> Vec<&str> {
        self.images.iter().map(IconImage::filename).collect()
    }
}

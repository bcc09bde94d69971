//! Image set descriptors (`*.imageset/Contents.json`).
//!
//! Image sets carry a much richer attribute vocabulary than icon sets: color
//! handling, compression, device capability tiers, size classes and
//! resizable-image slicing. Each axis is optional and omitted from the wire
//! form unless set.

use crate::catalog::insets::AlignmentInsets;
use crate::catalog::kind::{CatalogContents, CatalogKind};
use crate::error::{ValidationError, check_filename};
use crate::kernel::Info;
use crate::variant::{
    ColorSpace, CompressionType, DisplayGamut, GraphicsFeatureSet, HeightClass, Idiom,
    LanguageDirection, Memory, Scale, ScreenWidth, TemplateRenderingIntent, WidthClass,
};
use serde::{Deserialize, Serialize};

/// One image entry of an image set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "ImageSetImageBuilder")]
pub struct ImageSetImage {
    filename: String,
    idiom: Idiom,
    #[serde(skip_serializing_if = "Option::is_none")]
    color_space: Option<ColorSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compression_type: Option<CompressionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_gamut: Option<DisplayGamut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graphics_feature_set: Option<GraphicsFeatureSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_direction: Option<LanguageDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<Memory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    screen_width: Option<ScreenWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_rendering_intent: Option<TemplateRenderingIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width_class: Option<WidthClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height_class: Option<HeightClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment_insets: Option<AlignmentInsets>,
}

/// Field-at-a-time construction of an [`ImageSetImage`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ImageSetImageBuilder {
    filename: String,
    #[serde(default)]
    idiom: Idiom,
    color_space: Option<ColorSpace>,
    compression_type: Option<CompressionType>,
    display_gamut: Option<DisplayGamut>,
    graphics_feature_set: Option<GraphicsFeatureSet>,
    language_direction: Option<LanguageDirection>,
    memory: Option<Memory>,
    scale: Option<Scale>,
    screen_width: Option<ScreenWidth>,
    template_rendering_intent: Option<TemplateRenderingIntent>,
    width_class: Option<WidthClass>,
    height_class: Option<HeightClass>,
    alignment_insets: Option<AlignmentInsets>,
}

impl ImageSetImageBuilder {
    pub fn idiom(mut self, idiom: Idiom) -> Self {
        self.idiom = idiom;
        self
    }

    pub fn color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = Some(color_space);
        self
    }

    pub fn compression_type(mut self, compression_type: CompressionType) -> Self {
        self.compression_type = Some(compression_type);
        self
    }

    pub fn display_gamut(mut self, display_gamut: DisplayGamut) -> Self {
        self.display_gamut = Some(display_gamut);
        self
    }

    pub fn graphics_feature_set(mut self, graphics_feature_set: GraphicsFeatureSet) -> Self {
        self.graphics_feature_set = Some(graphics_feature_set);
        self
    }

    pub fn language_direction(mut self, language_direction: LanguageDirection) -> Self {
        self.language_direction = Some(language_direction);
        self
    }

    pub fn memory(mut self, memory: Memory) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn screen_width(mut self, screen_width: ScreenWidth) -> Self {
        self.screen_width = Some(screen_width);
        self
    }

    pub fn template_rendering_intent(mut self, intent: TemplateRenderingIntent) -> Self {
        self.template_rendering_intent = Some(intent);
        self
    }

    pub fn width_class(mut self, width_class: WidthClass) -> Self {
        self.width_class = Some(width_class);
        self
    }

    pub fn height_class(mut self, height_class: HeightClass) -> Self {
        self.height_class = Some(height_class);
        self
    }

    pub fn alignment_insets(mut self, alignment_insets: AlignmentInsets) -> Self {
        self.alignment_insets = Some(alignment_insets);
        self
    }

    pub fn build(self) -> Result<ImageSetImage, ValidationError> {
        check_filename(&self.filename)?;
        Ok(ImageSetImage {
            filename: self.filename,
            idiom: self.idiom,
            color_space: self.color_space,
            compression_type: self.compression_type,
            display_gamut: self.display_gamut,
            graphics_feature_set: self.graphics_feature_set,
            language_direction: self.language_direction,
            memory: self.memory,
            scale: self.scale,
            screen_width: self.screen_width,
            template_rendering_intent: self.template_rendering_intent,
            width_class: self.width_class,
            height_class: self.height_class,
            alignment_insets: self.alignment_insets,
        })
    }
}

impl TryFrom<ImageSetImageBuilder> for ImageSetImage {
    type Error = ValidationError;

    fn try_from(builder: ImageSetImageBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl ImageSetImage {
    /// Entry with only the filename set.
    pub fn new(filename: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder(filename).build()
    }

    pub fn builder(filename: impl Into<String>) -> ImageSetImageBuilder {
        ImageSetImageBuilder {
            filename: filename.into(),
            ..ImageSetImageBuilder::default()
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn idiom(&self) -> Idiom {
        self.idiom
    }

    pub fn color_space(&self) -> Option<ColorSpace> {
        self.color_space
    }

    pub fn compression_type(&self) -> Option<CompressionType> {
        self.compression_type
    }

    pub fn display_gamut(&self) -> Option<DisplayGamut> {
        self.display_gamut
    }

    pub fn graphics_feature_set(&self) -> Option<GraphicsFeatureSet> {
        self.graphics_feature_set
    }

    pub fn language_direction(&self) -> Option<LanguageDirection> {
        self.language_direction
    }

    pub fn memory(&self) -> Option<Memory> {
        self.memory
    }

    pub fn scale(&self) -> Option<Scale> {
        self.scale
    }

    pub fn screen_width(&self) -> Option<ScreenWidth> {
        self.screen_width
    }

    pub fn template_rendering_intent(&self) -> Option<TemplateRenderingIntent> {
        self.template_rendering_intent
    }

    pub fn width_class(&self) -> Option<WidthClass> {
        self.width_class
    }

    pub fn height_class(&self) -> Option<HeightClass> {
        self.height_class
    }

    pub fn alignment_insets(&self) -> Option<&AlignmentInsets> {
        self.alignment_insets.as_ref()
    }

    pub fn is_resizable(&self) -> bool {
        self.alignment_insets
            .as_ref()
            .is_some_and(AlignmentInsets::is_resizable)
    }
}

fn default_preserves_vector_representation() -> bool {
    true
}

/// Catalog-level properties of an image set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageSetProperties {
    /// On-demand resource tags, in the order given.
    #[serde(default)]
    pub on_demand_resource_tags: Vec<String>,
    /// Keep PDF vector data instead of rasterizing at build time.
    #[serde(default = "default_preserves_vector_representation")]
    pub preserves_vector_representation: bool,
}

impl Default for ImageSetProperties {
    fn default() -> Self {
        Self {
            on_demand_resource_tags: Vec::new(),
            preserves_vector_representation: default_preserves_vector_representation(),
        }
    }
}

impl ImageSetProperties {
    pub fn with_on_demand_resource_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.on_demand_resource_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preserves_vector_representation(mut self, preserve: bool) -> Self {
        self.preserves_vector_representation = preserve;
        self
    }
}

/// `Contents.json` of an image set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSetContents {
    #[serde(skip_deserializing)]
    info: Info,
    images: Vec<ImageSetImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<ImageSetProperties>,
}

impl ImageSetContents {
    /// Package a finished, ordered list of entries.
    pub fn new(images: Vec<ImageSetImage>) -> Self {
        Self {
            info: Info::current(),
            images,
            properties: None,
        }
    }

    /// A single universal, unscoped entry pointing at `<name>.png`.
    pub fn single_universal(name: &str) -> Result<Self, ValidationError> {
        check_filename(name)?;
        let image = ImageSetImage::new(format!("{name}.png"))?;
        Ok(Self::new(vec![image]))
    }

    pub fn with_properties(mut self, properties: ImageSetProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn images(&self) -> &[ImageSetImage] {
        &self.images
    }

    pub fn properties(&self) -> Option<&ImageSetProperties> {
        self.properties.as_ref()
    }
}

impl CatalogContents for ImageSetContents {
    const KIND: CatalogKind = CatalogKind::ImageSet;

    fn info(&self) -> &Info {
        &self.info
    }

    fn filenames(&self) -> Vec<&str> {
        self.images.iter().map(ImageSetImage::filename).collect()
    }
}

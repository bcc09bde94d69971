// Property checks over the closed vocabularies: geometry for every
// (scale, size) pair, omission of unset axes, and decode(encode(x)) == x.
use asset_catalog::{
    AlignmentInsets, AssetEncoder, CatalogContents, ColorSpace, CompressionType, DisplayGamut,
    GraphicsFeatureSet, HeightClass, IconImage, IconSize, Idiom, ImageSetContents, ImageSetImage,
    ImageSetProperties, LanguageDirection, MatchingStyle, Memory, Role, Scale, ScreenWidth,
    Subtype, TemplateRenderingIntent, WidthClass, extent_points, pixel_size, scale_multiplier,
    validate_contents,
};
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use serde_json::Value;
use std::collections::BTreeMap;

/// Quarter-pixel steps survive a trip through JSON text exactly.
fn pixels() -> impl Strategy<Value = f64> {
    (0u32..4096).prop_map(|quarters| f64::from(quarters) / 4.0)
}

fn insets() -> impl Strategy<Value = AlignmentInsets> {
    (pixels(), pixels(), pixels(), pixels())
        .prop_map(|(t, b, l, r)| AlignmentInsets::new(t, b, l, r).unwrap())
}

type ColorAxes = (
    Option<ColorSpace>,
    Option<CompressionType>,
    Option<DisplayGamut>,
    Option<GraphicsFeatureSet>,
    Option<LanguageDirection>,
    Option<Memory>,
);

type LayoutAxes = (
    Option<Scale>,
    Option<ScreenWidth>,
    Option<TemplateRenderingIntent>,
    Option<WidthClass>,
    Option<HeightClass>,
    Option<AlignmentInsets>,
);

fn image_set_image() -> impl Strategy<Value = (ImageSetImage, BTreeMap<&'static str, Value>)> {
    let color = (
        option::of(select(ColorSpace::ALL)),
        option::of(select(CompressionType::ALL)),
        option::of(select(DisplayGamut::ALL)),
        option::of(select(GraphicsFeatureSet::ALL)),
        option::of(select(LanguageDirection::ALL)),
        option::of(select(Memory::ALL)),
    );
    let layout = (
        option::of(select(Scale::ALL)),
        option::of(select(ScreenWidth::ALL)),
        option::of(select(TemplateRenderingIntent::ALL)),
        option::of(select(WidthClass::ALL)),
        option::of(select(HeightClass::ALL)),
        option::of(insets()),
    );
    ("[a-z]{1,12}", select(Idiom::ALL), color, layout)
        .prop_map(|(stem, idiom, color, layout)| build_image(&stem, idiom, color, layout))
}

fn build_image(
    stem: &str,
    idiom: Idiom,
    color: ColorAxes,
    layout: LayoutAxes,
) -> (ImageSetImage, BTreeMap<&'static str, Value>) {
    let filename = format!("{stem}.png");
    let mut expected = BTreeMap::new();
    expected.insert("filename", Value::from(filename.clone()));
    expected.insert("idiom", Value::from(idiom.as_str()));

    let mut builder = ImageSetImage::builder(filename).idiom(idiom);
    let (color_space, compression, gamut, features, direction, memory) = color;
    let (scale, screen_width, intent, width_class, height_class, alignment) = layout;

    if let Some(v) = color_space {
        builder = builder.color_space(v);
        expected.insert("color-space", Value::from(v.as_str()));
    }
    if let Some(v) = compression {
        builder = builder.compression_type(v);
        expected.insert("compression-type", Value::from(v.as_str()));
    }
    if let Some(v) = gamut {
        builder = builder.display_gamut(v);
        expected.insert("display-gamut", Value::from(v.as_str()));
    }
    if let Some(v) = features {
        builder = builder.graphics_feature_set(v);
        expected.insert("graphics-feature-set", Value::from(v.as_str()));
    }
    if let Some(v) = direction {
        builder = builder.language_direction(v);
        expected.insert("language-direction", Value::from(v.as_str()));
    }
    if let Some(v) = memory {
        builder = builder.memory(v);
        expected.insert("memory", Value::from(v.as_str()));
    }
    if let Some(v) = scale {
        builder = builder.scale(v);
        expected.insert("scale", Value::from(v.as_str()));
    }
    if let Some(v) = screen_width {
        builder = builder.screen_width(v);
        expected.insert("screen-width", Value::from(v.as_str()));
    }
    if let Some(v) = intent {
        builder = builder.template_rendering_intent(v);
        expected.insert("template-rendering-intent", Value::from(v.as_str()));
    }
    if let Some(v) = width_class {
        builder = builder.width_class(v);
        expected.insert("width-class", Value::from(v.as_str()));
    }
    if let Some(v) = height_class {
        builder = builder.height_class(v);
        expected.insert("height-class", Value::from(v.as_str()));
    }
    if let Some(v) = alignment {
        builder = builder.alignment_insets(v);
        expected.insert("alignment-insets", serde_json::to_value(v).unwrap());
    }
    (builder.build().unwrap(), expected)
}

fn icon_image() -> impl Strategy<Value = IconImage> {
    (
        "[a-z]{1,12}",
        select(Idiom::ALL),
        option::of(select(IconSize::ALL)),
        option::of(select(Scale::ALL)),
        option::of(select(Subtype::ALL)),
        option::of(select(Role::ALL)),
        option::of(select(DisplayGamut::ALL)),
        option::of(select(MatchingStyle::ALL)),
    )
        .prop_map(|(stem, idiom, size, scale, subtype, role, gamut, matching)| {
            let mut builder = IconImage::builder(format!("{stem}.png")).idiom(idiom);
            if let Some(v) = size {
                builder = builder.size(v);
            }
            if let Some(v) = scale {
                builder = builder.scale(v);
            }
            if let Some(v) = subtype {
                builder = builder.subtype(v);
            }
            if let Some(v) = role {
                builder = builder.role(v);
            }
            if let Some(v) = gamut {
                builder = builder.display_gamut(v);
            }
            if let Some(v) = matching {
                builder = builder.matching_style(v);
            }
            builder.build().unwrap()
        })
}

proptest! {
    #[test]
    fn pixel_size_is_square_extent_times_multiplier(
        scale in select(Scale::ALL),
        size in select(IconSize::ALL),
    ) {
        let pixels = pixel_size(scale, size);
        let expected = extent_points(size) * scale_multiplier(scale);
        prop_assert_eq!(pixels.width, expected);
        prop_assert_eq!(pixels.height, expected);
    }

    #[test]
    fn only_set_axes_are_encoded((image, expected) in image_set_image()) {
        let value = serde_json::to_value(&image).unwrap();
        let object = value.as_object().unwrap();
        let actual: BTreeMap<&str, Value> = object
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn image_set_contents_round_trip(
        images in prop::collection::vec(image_set_image().prop_map(|(image, _)| image), 0..6),
        tags in option::of(prop::collection::vec("[a-z-]{1,8}", 0..4)),
        preserve in any::<bool>(),
    ) {
        let mut contents = ImageSetContents::new(images);
        if let Some(tags) = tags {
            contents = contents.with_properties(
                ImageSetProperties::default()
                    .with_on_demand_resource_tags(tags)
                    .with_preserves_vector_representation(preserve),
            );
        }
        let text = contents.to_json().unwrap();
        prop_assert!(!text.contains("null"));
        let back: ImageSetContents = AssetEncoder::default().decode(&text).unwrap();
        prop_assert_eq!(&back, &contents);
        prop_assert!(validate_contents(&contents).is_ok());
    }

    #[test]
    fn icon_images_round_trip(image in icon_image()) {
        let text = serde_json::to_string(&image).unwrap();
        let back: IconImage = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, image);
    }
}

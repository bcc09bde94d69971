#![allow(dead_code)]

use anyhow::{Context, Result};
use asset_catalog::{
    AppIconContents, CatalogContents, IconImage, IconSize, Idiom, Scale, icon_file_name,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub fn mocks_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/mocks")
}

pub fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Structured form of a descriptor, as the packaging tool would see it.
pub fn encoded<C: CatalogContents>(contents: &C) -> Value {
    let text = contents.to_json().expect("descriptor encodes");
    serde_json::from_str(&text).expect("encoded descriptor is JSON")
}

/// Icon entry named by the platform convention for its size, scale and idiom.
pub fn conventional_icon(idiom: Idiom, size: IconSize, scale: Scale) -> IconImage {
    IconImage::builder(icon_file_name("icon", size, scale, idiom, "png"))
        .idiom(idiom)
        .size(size)
        .scale(scale)
        .build()
        .expect("conventional icon names are never empty")
}

/// The iPhone slots of a modern app-icon set, in Xcode's order.
pub fn iphone_app_icon_set() -> AppIconContents {
    let slots = [
        (IconSize::Size20x20, Scale::Retina),
        (IconSize::Size20x20, Scale::RetinaPlus),
        (IconSize::Size29x29, Scale::Retina),
        (IconSize::Size29x29, Scale::RetinaPlus),
        (IconSize::Size40x40, Scale::Retina),
        (IconSize::Size40x40, Scale::RetinaPlus),
        (IconSize::Size60x60, Scale::Retina),
        (IconSize::Size60x60, Scale::RetinaPlus),
    ];
    let mut images: Vec<IconImage> = slots
        .iter()
        .map(|(size, scale)| conventional_icon(Idiom::Iphone, *size, *scale))
        .collect();
    images.push(conventional_icon(
        Idiom::IosMarketing,
        IconSize::Size1024x1024,
        Scale::Unscaled,
    ));
    AppIconContents::new(images)
}

//! Icon geometry: pixel dimensions and conventional file-name suffixes.
//!
//! These functions are independent of any descriptor. Callers that render or
//! copy the bitmaps sitting next to a `Contents.json` use them to size the
//! images and to name the files the descriptor references.

use crate::variant::{IconSize, Idiom, Scale};

/// Width and height in pixels. Not rounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

/// Edge length of an icon size, in points.
pub fn extent_points(size: IconSize) -> f64 {
    match size {
        IconSize::Size16x16 => 16.0,
        IconSize::Size20x20 => 20.0,
        IconSize::Size24x24 => 24.0,
        IconSize::Size27_5x27_5 => 27.5,
        IconSize::Size29x29 => 29.0,
        IconSize::Size32x32 => 32.0,
        IconSize::Size40x40 => 40.0,
        IconSize::Size44x44 => 44.0,
        IconSize::Size50x50 => 50.0,
        IconSize::Size60x60 => 60.0,
        IconSize::Size76x76 => 76.0,
        IconSize::Size83_5x83_5 => 83.5,
        IconSize::Size86x86 => 86.0,
        IconSize::Size98x98 => 98.0,
        IconSize::Size108x108 => 108.0,
        IconSize::Size128x128 => 128.0,
        IconSize::Size256x256 => 256.0,
        IconSize::Size512x512 => 512.0,
        IconSize::Size1024x1024 => 1024.0,
    }
}

/// Pixels per point for a display scale.
pub fn scale_multiplier(scale: Scale) -> f64 {
    match scale {
        Scale::Unscaled => 1.0,
        Scale::Retina => 2.0,
        Scale::RetinaPlus => 3.0,
    }
}

/// Pixel dimensions of a square icon of `size` points rendered at `scale`.
pub fn pixel_size(scale: Scale, size: IconSize) -> PixelSize {
    let extent = extent_points(size) * scale_multiplier(scale);
    PixelSize {
        width: extent,
        height: extent,
    }
}

/// File-name suffix for a scale: `""`, `"@2x"` or `"@3x"`.
pub fn scale_suffix(scale: Scale) -> &'static str {
    match scale {
        Scale::Unscaled => "",
        Scale::Retina => "@2x",
        Scale::RetinaPlus => "@3x",
    }
}

/// File-name suffix for an idiom.
///
/// Only iPad assets carry a device modifier (`~ipad`); every other idiom,
/// iPhone included, uses the bare name.
pub fn idiom_suffix(idiom: Idiom) -> String {
    match idiom {
        Idiom::Ipad => format!("~{}", idiom.as_str()),
        _ => String::new(),
    }
}

/// Conventional icon file name, e.g. `icon-60x60@2x.png` or
/// `icon-76x76@2x~ipad.png`.
pub fn icon_file_name(
    stem: &str,
    size: IconSize,
    scale: Scale,
    idiom: Idiom,
    extension: &str,
) -> String {
    format!(
        "{stem}-{}{}{}.{extension}",
        size.as_str(),
        scale_suffix(scale),
        idiom_suffix(idiom)
    )
}

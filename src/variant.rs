//! Closed variant vocabulary shared by app-icon sets and image sets.
//!
//! Every axis is a plain Rust enum with an explicit wire-string table. The
//! wire strings are what the packaging tool reads, so they are spelled out
//! per variant rather than derived from identifier names; renaming a variant
//! never changes the descriptor format.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $axis:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value of this axis in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Fixed wire representation used in `Contents.json`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            /// Exact, case-sensitive lookup by wire string.
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Self::from_wire(&value).ok_or_else(|| {
                    de::Error::custom(format!("unknown {} value '{}'", $axis, value))
                })
            }
        }
    };
}

wire_enum! {
    /// Size of an app icon in points.
    IconSize, "size" {
        /// macOS.
        Size16x16 => "16x16",
        /// iPhone and iPad notifications.
        Size20x20 => "20x20",
        /// 38mm/40mm watch notification center.
        Size24x24 => "24x24",
        /// 42mm/44mm watch notification center.
        Size27_5x27_5 => "27.5x27.5",
        /// Settings on iOS 7 and later; watch companion settings.
        Size29x29 => "29x29",
        /// macOS.
        Size32x32 => "32x32",
        /// Spotlight on iOS 7 and later; main watch app icon.
        Size40x40 => "40x40",
        /// Watch long-look notification.
        Size44x44 => "44x44",
        /// Watch long-look notification.
        Size50x50 => "50x50",
        /// Main iPhone app icon.
        Size60x60 => "60x60",
        /// Main iPad app icon.
        Size76x76 => "76x76",
        /// Main iPad Pro app icon.
        Size83_5x83_5 => "83.5x83.5",
        /// 38mm watch short-look notification.
        Size86x86 => "86x86",
        /// 40mm/42mm watch short-look notification.
        Size98x98 => "98x98",
        /// 44mm watch short-look notification.
        Size108x108 => "108x108",
        /// macOS.
        Size128x128 => "128x128",
        /// macOS.
        Size256x256 => "256x256",
        /// macOS.
        Size512x512 => "512x512",
        /// App Store marketing icon.
        Size1024x1024 => "1024x1024",
    }
}

wire_enum! {
    /// Targeted display scale.
    ///
    /// An entry without a scale applies to any display scale and normally
    /// points at a vector (PDF) file.
    Scale, "scale" {
        Unscaled => "1x",
        Retina => "2x",
        /// Higher-density Retina displays such as the iPhone 6 Plus.
        RetinaPlus => "3x",
    }
}

wire_enum! {
    /// Device family an entry targets.
    Idiom, "idiom" {
        Universal => "universal",
        Iphone => "iphone",
        Ipad => "ipad",
        Mac => "mac",
        Tv => "tv",
        Watch => "watch",
        /// Watch app launcher.
        AppLauncher => "appLauncher",
        /// Watch companion Settings app.
        CompanionSettings => "companionSettings",
        /// Watch notification center.
        NotificationCenter => "notificationCenter",
        /// Watch long look.
        QuickLook => "quickLook",
        /// iOS App Store icon.
        IosMarketing => "ios-marketing",
        /// watchOS App Store icon.
        WatchMarketing => "watch-marketing",
    }
}

impl Default for Idiom {
    fn default() -> Self {
        Idiom::Universal
    }
}

wire_enum! {
    /// Color gamut of the device display. Absent means sRGB.
    DisplayGamut, "display-gamut" {
        Srgb => "srgb",
        DisplayP3 => "display-p3",
    }
}

wire_enum! {
    /// Color space of the image data. Absent means sRGB.
    ColorSpace, "color-space" {
        Srgb => "srgb",
        DisplayP3 => "display-p3",
    }
}

wire_enum! {
    /// Compression applied by the packaging tool.
    ///
    /// Absent inherits from the parent, and falls back to lossless when
    /// there is no parent.
    CompressionType, "compression-type" {
        Automatic => "automatic",
        /// Lossy GPU format tuned for quality.
        GpuOptimizedBest => "gpu-optimized-best",
        /// Lossy GPU format tuned for memory size.
        GpuOptimizedSmallest => "gpu-optimized-smallest",
        Lossless => "lossless",
        Lossy => "lossy",
    }
}

wire_enum! {
    /// Minimum GPU feature set, named after the iOS Metal feature-set
    /// families. Absent means any device with OpenGL ES 2.0.
    GraphicsFeatureSet, "graphics-feature-set" {
        Metal1v2 => "metal1v2",
        Metal1v3 => "metal1v3",
        Metal2v2 => "metal2v2",
        Metal2v3 => "metal2v3",
        Metal3v1 => "metal3v1",
        Metal3v2 => "metal3v2",
        Metal4v1 => "metal4v1",
    }
}

wire_enum! {
    /// Layout direction the image is drawn for; the other direction gets a
    /// mirrored copy unless it has its own entry.
    LanguageDirection, "language-direction" {
        LeftToRight => "left-to-right",
        RightToLeft => "right-to-left",
    }
}

wire_enum! {
    /// Minimum device memory configuration.
    Memory, "memory" {
        OneGb => "1GB",
        TwoGb => "2GB",
        ThreeGb => "3GB",
        FourGb => "4GB",
    }
}

wire_enum! {
    /// Watch screen width class.
    ScreenWidth, "screen-width" {
        /// 38mm and 40mm screens.
        Small => "<=145",
        /// 42mm and 44mm screens.
        NotSmall => ">145",
    }
}

wire_enum! {
    /// Whether the image renders as-is or acts as a tintable template.
    TemplateRenderingIntent, "template-rendering-intent" {
        Original => "original",
        Template => "template",
    }
}

wire_enum! {
    /// Horizontal size class. Absent means `any`.
    WidthClass, "width-class" {
        Compact => "compact",
        Regular => "regular",
    }
}

wire_enum! {
    /// Vertical size class. Absent means `any`.
    HeightClass, "height-class" {
        Compact => "compact",
        Regular => "regular",
    }
}

wire_enum! {
    /// Role of a watch icon. Absent means the icon is not for the watch.
    Role, "role" {
        NotificationCenter => "notificationCenter",
        CompanionSettings => "companionSettings",
        AppLauncher => "appLauncher",
        LongLook => "longLook",
        QuickLook => "quickLook",
        /// Internal marketing icon.
        Itunes => "itunes",
    }
}

wire_enum! {
    /// Watch case size for model-specific icons.
    Subtype, "subtype" {
        Watch38mm => "38mm",
        Watch40mm => "40mm",
        Watch42mm => "42mm",
        Watch44mm => "44mm",
        /// Internal marketing icon; serializes as an empty string.
        Itunes => "",
    }
}

wire_enum! {
    /// How the packaging tool matches the referenced file.
    MatchingStyle, "matching-style" {
        FullyQualifiedName => "fully-qualified-name",
    }
}

wire_enum! {
    /// Slicing scheme for a resizable image.
    ResizingMode, "resizing mode" {
        /// Fixed-width ends, center stretches horizontally.
        ThreePartHorizontal => "3-part-horizontal",
        /// Fixed-height ends, center stretches vertically.
        ThreePartVertical => "3-part-vertical",
        /// Fixed corners and caps, center stretches both ways.
        NinePart => "9-part",
    }
}

wire_enum! {
    /// How the resizable center area fills the available size.
    CenterMode, "center mode" {
        Tile => "tile",
        Stretch => "stretch",
    }
}

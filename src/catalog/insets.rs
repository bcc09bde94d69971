//! Alignment insets and resizable-image slicing for image-set entries.
//!
//! The wire form nests `resizing` inside `alignment-insets`, and the
//! `center` object's `width`/`height` only make sense for some resizing
//! modes. [`Resizing`] is an enum per mode, so a horizontal slice cannot
//! carry a center height at all; decoding a wire object that tries to is
//! rejected with [`ValidationError::InapplicableCenterExtent`].

use crate::error::{ValidationError, check_extent};
use crate::variant::{CenterMode, ResizingMode};
use serde::{Deserialize, Serialize, Serializer};

/// Emit whole pixel counts as JSON integers (`4`, not `4.0`), matching the
/// descriptors the packaging tool writes itself.
fn serialize_pixels<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_optional_pixels<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(pixels) => serialize_pixels(pixels, serializer),
        None => serializer.serialize_none(),
    }
}

/// A finite, non-negative pixel measurement.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Pixels(f64);

impl Pixels {
    pub fn get(self) -> f64 {
        self.0
    }

    fn checked(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        check_extent(field, value)?;
        Ok(Self(value))
    }
}

impl TryFrom<f64> for Pixels {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::checked("pixels", value)
    }
}

fn checked_optional(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<Pixels>, ValidationError> {
    value.map(|v| Pixels::checked(field, v)).transpose()
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEdges {
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
}

/// Fixed (non-resizing) border widths of a sliced image, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEdges")]
pub struct CapInsets {
    #[serde(serialize_with = "serialize_pixels")]
    top: f64,
    #[serde(serialize_with = "serialize_pixels")]
    bottom: f64,
    #[serde(serialize_with = "serialize_pixels")]
    left: f64,
    #[serde(serialize_with = "serialize_pixels")]
    right: f64,
}

impl CapInsets {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Result<Self, ValidationError> {
        check_extent("cap-insets.top", top)?;
        check_extent("cap-insets.bottom", bottom)?;
        check_extent("cap-insets.left", left)?;
        check_extent("cap-insets.right", right)?;
        Ok(Self {
            top,
            bottom,
            left,
            right,
        })
    }

    pub fn uniform(inset: f64) -> Result<Self, ValidationError> {
        Self::new(inset, inset, inset, inset)
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}

impl TryFrom<RawEdges> for CapInsets {
    type Error = ValidationError;

    fn try_from(raw: RawEdges) -> Result<Self, Self::Error> {
        Self::new(raw.top, raw.bottom, raw.left, raw.right)
    }
}

/// Slicing attributes of a resizable image, one variant per resizing mode.
///
/// The center extents are optional; when absent the packaging tool derives
/// the resizable area from the cap insets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "ResizingWire", try_from = "ResizingWire")]
pub enum Resizing {
    /// Center stretches horizontally; only a center width applies.
    ThreePartHorizontal {
        center: CenterMode,
        width: Option<Pixels>,
        cap_insets: CapInsets,
    },
    /// Center stretches vertically; only a center height applies.
    ThreePartVertical {
        center: CenterMode,
        height: Option<Pixels>,
        cap_insets: CapInsets,
    },
    /// Center stretches both ways; width and height both apply.
    NinePart {
        center: CenterMode,
        width: Option<Pixels>,
        height: Option<Pixels>,
        cap_insets: CapInsets,
    },
}

impl Resizing {
    pub fn three_part_horizontal(
        center: CenterMode,
        width: Option<f64>,
        cap_insets: CapInsets,
    ) -> Result<Self, ValidationError> {
        Ok(Resizing::ThreePartHorizontal {
            center,
            width: checked_optional("center.width", width)?,
            cap_insets,
        })
    }

    pub fn three_part_vertical(
        center: CenterMode,
        height: Option<f64>,
        cap_insets: CapInsets,
    ) -> Result<Self, ValidationError> {
        Ok(Resizing::ThreePartVertical {
            center,
            height: checked_optional("center.height", height)?,
            cap_insets,
        })
    }

    pub fn nine_part(
        center: CenterMode,
        width: Option<f64>,
        height: Option<f64>,
        cap_insets: CapInsets,
    ) -> Result<Self, ValidationError> {
        Ok(Resizing::NinePart {
            center,
            width: checked_optional("center.width", width)?,
            height: checked_optional("center.height", height)?,
            cap_insets,
        })
    }

    pub fn mode(&self) -> ResizingMode {
        match self {
            Resizing::ThreePartHorizontal { .. } => ResizingMode::ThreePartHorizontal,
            Resizing::ThreePartVertical { .. } => ResizingMode::ThreePartVertical,
            Resizing::NinePart { .. } => ResizingMode::NinePart,
        }
    }

    pub fn center_mode(&self) -> CenterMode {
        match self {
            Resizing::ThreePartHorizontal { center, .. }
            | Resizing::ThreePartVertical { center, .. }
            | Resizing::NinePart { center, .. } => *center,
        }
    }

    pub fn cap_insets(&self) -> &CapInsets {
        match self {
            Resizing::ThreePartHorizontal { cap_insets, .. }
            | Resizing::ThreePartVertical { cap_insets, .. }
            | Resizing::NinePart { cap_insets, .. } => cap_insets,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ResizingWire {
    mode: ResizingMode,
    center: CenterWire,
    cap_insets: CapInsets,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CenterWire {
    mode: CenterMode,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_pixels"
    )]
    width: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_pixels"
    )]
    height: Option<f64>,
}

impl From<Resizing> for ResizingWire {
    fn from(resizing: Resizing) -> Self {
        let mode = resizing.mode();
        let (center, width, height, cap_insets) = match resizing {
            Resizing::ThreePartHorizontal {
                center,
                width,
                cap_insets,
            } => (center, width, None, cap_insets),
            Resizing::ThreePartVertical {
                center,
                height,
                cap_insets,
            } => (center, None, height, cap_insets),
            Resizing::NinePart {
                center,
                width,
                height,
                cap_insets,
            } => (center, width, height, cap_insets),
        };
        ResizingWire {
            mode,
            center: CenterWire {
                mode: center,
                width: width.map(Pixels::get),
                height: height.map(Pixels::get),
            },
            cap_insets,
        }
    }
}

impl TryFrom<ResizingWire> for Resizing {
    type Error = ValidationError;

    fn try_from(wire: ResizingWire) -> Result<Self, Self::Error> {
        let CenterWire {
            mode: center,
            width,
            height,
        } = wire.center;
        match wire.mode {
            ResizingMode::ThreePartHorizontal => {
                if height.is_some() {
                    return Err(ValidationError::InapplicableCenterExtent {
                        mode: wire.mode,
                        extent: "height",
                    });
                }
                Resizing::three_part_horizontal(center, width, wire.cap_insets)
            }
            ResizingMode::ThreePartVertical => {
                if width.is_some() {
                    return Err(ValidationError::InapplicableCenterExtent {
                        mode: wire.mode,
                        extent: "width",
                    });
                }
                Resizing::three_part_vertical(center, height, wire.cap_insets)
            }
            ResizingMode::NinePart => Resizing::nine_part(center, width, height, wire.cap_insets),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAlignmentInsets {
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    #[serde(default)]
    resizing: Option<Resizing>,
}

/// Alignment rectangle insets, plus slicing when the image is resizable.
///
/// An entry is resizable exactly when its insets carry a [`Resizing`]; the
/// slicing record is always complete (mode, center, cap insets).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAlignmentInsets")]
pub struct AlignmentInsets {
    #[serde(serialize_with = "serialize_pixels")]
    top: f64,
    #[serde(serialize_with = "serialize_pixels")]
    bottom: f64,
    #[serde(serialize_with = "serialize_pixels")]
    left: f64,
    #[serde(serialize_with = "serialize_pixels")]
    right: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    resizing: Option<Resizing>,
}

impl AlignmentInsets {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Result<Self, ValidationError> {
        check_extent("alignment-insets.top", top)?;
        check_extent("alignment-insets.bottom", bottom)?;
        check_extent("alignment-insets.left", left)?;
        check_extent("alignment-insets.right", right)?;
        Ok(Self {
            top,
            bottom,
            left,
            right,
            resizing: None,
        })
    }

    /// Mark the image as resizable with the given slicing.
    pub fn with_resizing(mut self, resizing: Resizing) -> Self {
        self.resizing = Some(resizing);
        self
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn resizing(&self) -> Option<&Resizing> {
        self.resizing.as_ref()
    }

    pub fn is_resizable(&self) -> bool {
        self.resizing.is_some()
    }
}

impl TryFrom<RawAlignmentInsets> for AlignmentInsets {
    type Error = ValidationError;

    fn try_from(raw: RawAlignmentInsets) -> Result<Self, Self::Error> {
        let insets = Self::new(raw.top, raw.bottom, raw.left, raw.right)?;
        Ok(match raw.resizing {
            Some(resizing) => insets.with_resizing(resizing),
            None => insets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn negative_insets_fail_fast() {
        let err = AlignmentInsets::new(-1.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeInset {
                field: "alignment-insets.top",
                value: -1.0
            }
        );
        assert!(CapInsets::new(0.0, 0.0, -0.5, 0.0).is_err());
        assert!(AlignmentInsets::new(0.0, f64::NAN, 0.0, 0.0).is_err());
        assert!(Pixels::try_from(-3.0).is_err());
        assert_eq!(Pixels::try_from(3.0).unwrap().get(), 3.0);
    }

    #[test]
    fn plain_insets_omit_resizing() {
        let insets = AlignmentInsets::new(1.0, 2.0, 3.0, 4.5).unwrap();
        assert!(!insets.is_resizable());
        let value = serde_json::to_value(insets).unwrap();
        assert_eq!(
            value,
            json!({"top": 1, "bottom": 2, "left": 3, "right": 4.5})
        );
    }

    #[test]
    fn resizing_wire_shape_per_mode() {
        let caps = CapInsets::new(4.0, 4.0, 6.0, 6.0).unwrap();
        let horizontal =
            Resizing::three_part_horizontal(CenterMode::Tile, Some(2.0), caps).unwrap();
        let insets = AlignmentInsets::new(0.0, 0.0, 0.0, 0.0)
            .unwrap()
            .with_resizing(horizontal);
        assert_eq!(
            serde_json::to_value(insets).unwrap(),
            json!({
                "top": 0, "bottom": 0, "left": 0, "right": 0,
                "resizing": {
                    "mode": "3-part-horizontal",
                    "center": {"mode": "tile", "width": 2},
                    "cap-insets": {"top": 4, "bottom": 4, "left": 6, "right": 6}
                }
            })
        );

        let vertical = Resizing::three_part_vertical(CenterMode::Stretch, None, caps).unwrap();
        assert_eq!(
            serde_json::to_value(vertical).unwrap(),
            json!({
                "mode": "3-part-vertical",
                "center": {"mode": "stretch"},
                "cap-insets": {"top": 4, "bottom": 4, "left": 6, "right": 6}
            })
        );

        let nine = Resizing::nine_part(CenterMode::Tile, Some(1.0), Some(1.5), caps).unwrap();
        assert_eq!(nine.mode(), ResizingMode::NinePart);
        assert_eq!(nine.center_mode(), CenterMode::Tile);
        assert_eq!(
            serde_json::to_value(nine).unwrap()["center"],
            json!({"mode": "tile", "width": 1, "height": 1.5})
        );
    }

    #[test]
    fn decoding_rejects_inapplicable_center_extent() {
        let wire = json!({
            "mode": "3-part-horizontal",
            "center": {"mode": "tile", "height": 3},
            "cap-insets": {"top": 0, "bottom": 0, "left": 0, "right": 0}
        });
        let err = serde_json::from_value::<Resizing>(wire).unwrap_err();
        assert!(
            err.to_string()
                .contains("center height is not applicable to resizing mode 3-part-horizontal"),
            "{err}"
        );

        let wire = json!({
            "mode": "3-part-vertical",
            "center": {"mode": "stretch", "width": 3},
            "cap-insets": {"top": 0, "bottom": 0, "left": 0, "right": 0}
        });
        assert!(serde_json::from_value::<Resizing>(wire).is_err());
    }

    #[test]
    fn decoding_validates_nested_insets() {
        let wire = json!({
            "top": 0, "bottom": 0, "left": 0, "right": 0,
            "resizing": {
                "mode": "9-part",
                "center": {"mode": "tile"},
                "cap-insets": {"top": -2, "bottom": 0, "left": 0, "right": 0}
            }
        });
        assert!(serde_json::from_value::<AlignmentInsets>(wire).is_err());

        let wire = json!({"top": -1, "bottom": 0, "left": 0, "right": 0});
        assert!(serde_json::from_value::<AlignmentInsets>(wire).is_err());

        let wire = json!({"top": 0, "bottom": 0, "left": 0, "right": 0, "inset": 1});
        let err = serde_json::from_value::<AlignmentInsets>(wire).unwrap_err();
        assert!(err.to_string().contains("unknown field"), "{err}");
    }

    #[test]
    fn decoded_insets_equal_constructed_insets() {
        let caps = CapInsets::uniform(8.0).unwrap();
        let resizing = Resizing::nine_part(CenterMode::Stretch, Some(4.0), None, caps).unwrap();
        let original = AlignmentInsets::new(1.0, 1.0, 2.0, 2.0)
            .unwrap()
            .with_resizing(resizing);
        let text = serde_json::to_string(&original).unwrap();
        let back: AlignmentInsets = serde_json::from_str(&text).unwrap();
        assert_eq!(back, original);
        assert_eq!(back.resizing().unwrap().cap_insets().top(), 8.0);
    }
}

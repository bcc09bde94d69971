//! Shared kernel for both descriptor families.
//!
//! Holds the authorship record every `Contents.json` carries and the encoder
//! configuration used to turn descriptors into text. Wire keys are fixed on
//! the descriptor types themselves (`rename_all = "kebab-case"` plus explicit
//! renames), so any encoder built here applies the same hyphenated naming to
//! app-icon sets and image sets alike.

use crate::error::SerializationError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Author string written into every descriptor.
pub const AUTHOR: &str = "AssetCatalog";

/// Descriptor format version written into every descriptor.
pub const VERSION: u32 = 1;

/// Authorship record embedded in each catalog's contents.
///
/// There is no way to construct an `Info` with other values; descriptors
/// decoded from disk get this constant re-attached.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Info {
    author: &'static str,
    version: u32,
}

impl Info {
    pub const fn current() -> Self {
        Self {
            author: AUTHOR,
            version: VERSION,
        }
    }

    pub fn author(&self) -> &'static str {
        self.author
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

impl Default for Info {
    fn default() -> Self {
        Self::current()
    }
}

/// Text encoding configuration shared by both descriptor families.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AssetEncoder {
    /// Indent nested objects with two spaces.
    pub pretty: bool,
    /// Terminate the document with a newline.
    pub trailing_newline: bool,
}

/// Compact encoder, matching the packaging library's default output.
pub const ASSET_ENCODER: AssetEncoder = AssetEncoder::compact();

impl AssetEncoder {
    pub const fn compact() -> Self {
        Self {
            pretty: false,
            trailing_newline: false,
        }
    }

    /// Layout used for `Contents.json` files written to disk.
    pub const fn file() -> Self {
        Self {
            pretty: true,
            trailing_newline: true,
        }
    }

    pub fn to_string<T>(&self, value: &T) -> Result<String, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        let mut text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        if self.trailing_newline {
            text.push('\n');
        }
        Ok(text)
    }

    pub fn to_vec<T>(&self, value: &T) -> Result<Vec<u8>, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        self.to_string(value).map(String::into_bytes)
    }

    /// Structured form of the encoded value, for inspection and schema checks.
    pub fn to_value<T>(&self, value: &T) -> Result<Value, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        Ok(serde_json::to_value(value)?)
    }

    /// Parse descriptor text back into a typed value.
    ///
    /// Decoding runs the same validation as the builders, so a malformed
    /// entry surfaces as a parse error naming the problem.
    pub fn decode<T>(&self, text: &str) -> serde_json::Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(text)
    }
}

impl Default for AssetEncoder {
    fn default() -> Self {
        ASSET_ENCODER
    }
}

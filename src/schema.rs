//! JSON Schema checks for encoded descriptors.
//!
//! The schemas under `schema/` describe the exact wire shape the packaging
//! tool accepts: closed key sets, wire strings for every axis, the constant
//! `info` record and non-negative insets. They are embedded at build time and
//! compiled once per catalog kind. Encoding a validly constructed `Contents`
//! always satisfies its schema; the check guards descriptors on their way to
//! disk and lets tests pin the wire format independently of the Rust types.

use crate::catalog::{CatalogContents, CatalogKind};
use crate::kernel::{ASSET_ENCODER, AUTHOR, VERSION};
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

const APP_ICON_SCHEMA: &str = include_str!("../schema/app_icon_contents.schema.json");
const IMAGE_SET_SCHEMA: &str = include_str!("../schema/image_set_contents.schema.json");

const INFO_AUTHOR_POINTER: &str = "/definitions/info/properties/author/const";
const INFO_VERSION_POINTER: &str = "/definitions/info/properties/version/const";

/// Compiled schema for one catalog kind.
pub struct DescriptorSchema {
    kind: CatalogKind,
    compiled: JSONSchema,
    raw: Value,
}

impl DescriptorSchema {
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// The schema document as embedded in the crate.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Validate an encoded descriptor, reporting every violation at once.
    pub fn validate(&self, descriptor: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(descriptor) {
            let details = errors
                .map(|err| format!("{}: {err}", err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "{} descriptor failed schema validation:\n{}",
                self.kind,
                details
            );
        }
        Ok(())
    }

    pub fn is_valid(&self, descriptor: &Value) -> bool {
        self.compiled.is_valid(descriptor)
    }
}

fn schema_source(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::AppIconSet => APP_ICON_SCHEMA,
        CatalogKind::ImageSet => IMAGE_SET_SCHEMA,
    }
}

fn load_descriptor_schema(kind: CatalogKind) -> Result<DescriptorSchema> {
    let raw: Value = serde_json::from_str(schema_source(kind))
        .with_context(|| format!("parsing {kind} descriptor schema"))?;

    // The schema pins the info record; refuse to compile one that disagrees
    // with the constants this crate writes.
    let author = raw.pointer(INFO_AUTHOR_POINTER).and_then(Value::as_str);
    if author != Some(AUTHOR) {
        bail!("{kind} descriptor schema pins author {author:?}, expected {AUTHOR:?}");
    }
    let version = raw.pointer(INFO_VERSION_POINTER).and_then(Value::as_u64);
    if version != Some(u64::from(VERSION)) {
        bail!("{kind} descriptor schema pins version {version:?}, expected {VERSION}");
    }

    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&raw)
        .map_err(|err| anyhow!("compiling {kind} descriptor schema: {err}"))?;
    debug!(%kind, "compiled descriptor schema");

    Ok(DescriptorSchema {
        kind,
        compiled,
        raw,
    })
}

/// Shared compiled schema for `kind`, compiled on first use.
pub fn descriptor_schema(kind: CatalogKind) -> Result<&'static DescriptorSchema> {
    static APP_ICON: OnceLock<DescriptorSchema> = OnceLock::new();
    static IMAGE_SET: OnceLock<DescriptorSchema> = OnceLock::new();

    let cell = match kind {
        CatalogKind::AppIconSet => &APP_ICON,
        CatalogKind::ImageSet => &IMAGE_SET,
    };
    if let Some(schema) = cell.get() {
        return Ok(schema);
    }
    let loaded = load_descriptor_schema(kind)?;
    Ok(cell.get_or_init(|| loaded))
}

/// Validate an already-encoded descriptor against the schema for `kind`.
pub fn validate_descriptor(kind: CatalogKind, descriptor: &Value) -> Result<()> {
    descriptor_schema(kind)?.validate(descriptor)
}

/// Encode `contents` and validate the result against its kind's schema.
pub fn validate_contents<C: CatalogContents>(contents: &C) -> Result<()> {
    let value = ASSET_ENCODER.to_value(contents)?;
    validate_descriptor(C::KIND, &value)
}

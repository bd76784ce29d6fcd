//! Helper for turning Rust type information into the JSON Schema that is
//! shipped alongside a declared function. The schema is produced with
//! [`schemars`] and forwarded to completion services that support
//! function-calling responses.
//!
//! The abstraction is intentionally **very small**: if you need a more
//! sophisticated setup you can bypass this helper and build the schema
//! manually.

use schemars::{r#gen::SchemaSettings, JsonSchema, SchemaGenerator};
use serde_json::Value;

/// Generate a JSON Schema for `T` **inline**, i.e. without `$ref` pointers
/// to external definitions.
///
/// Completion services currently expect the entire schema object inside a
/// single request, so inlining is required rather than cosmetic.
///
/// # Panics
///
/// Only if the resulting root schema cannot be serialized into valid JSON,
/// which should never happen as long as [`schemars`] works correctly.
pub fn derive_parameters_schema<T>() -> Value
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).expect("generated schema should be serialisable")
}

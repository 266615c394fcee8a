//! WASM bindings for job category colors.
//!
//! Terms are passed as an array of `{ slug, name }` objects and colors as a
//! plain `{ slug: "#rrggbb" }` object, where `null` or a missing entry means
//! unset. Errors are thrown as JS errors.

use catcolors_codegen::{CodegenError, Config, FieldDescriptor, SchemaBuilder};
use catcolors_model::Term;
use serde::Serialize;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Build the settings schema. Returns an array of field descriptor objects.
#[wasm_bindgen(js_name = buildSchema)]
pub fn build_schema(terms: JsValue) -> Result<JsValue, JsError> {
    let terms: Vec<Term> = serde_wasm_bindgen::from_value(terms)?;
    let fields = schema_for(&terms);

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(fields.serialize(&serializer)?)
}

/// Render the category stylesheet.
///
/// `mode` is `"background"` or `"text"`; anything else throws.
#[wasm_bindgen(js_name = renderCss)]
pub fn render_css(terms: JsValue, mode: &str, colors: JsValue) -> Result<String, JsError> {
    let (terms, colors) = decode_inputs(terms, colors)?;
    Ok(css_for(&terms, mode, &colors)?)
}

/// Render the stylesheet wrapped in its page-head `<style>` element.
#[wasm_bindgen(js_name = renderStyleTag)]
pub fn render_style_tag(terms: JsValue, mode: &str, colors: JsValue) -> Result<String, JsError> {
    let (terms, colors) = decode_inputs(terms, colors)?;
    let css = css_for(&terms, mode, &colors)?;
    Ok(catcolors_codegen::html::style_tag(&Config::default().style_id, &css))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn decode_inputs(
    terms: JsValue,
    colors: JsValue,
) -> Result<(Vec<Term>, HashMap<String, Option<String>>), JsError> {
    let terms: Vec<Term> = serde_wasm_bindgen::from_value(terms)?;
    let colors = if colors.is_undefined() || colors.is_null() {
        HashMap::new()
    } else {
        serde_wasm_bindgen::from_value(colors)?
    };
    Ok((terms, colors))
}

fn schema_for(terms: &[Term]) -> Vec<FieldDescriptor> {
    SchemaBuilder::new(&Config::default()).build(terms)
}

fn css_for(
    terms: &[Term],
    mode: &str,
    colors: &HashMap<String, Option<String>>,
) -> Result<String, CodegenError> {
    catcolors_codegen::render_css_for_mode(terms, mode, |slug| {
        colors.get(slug.as_str()).cloned().flatten()
    })
}

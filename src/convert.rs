//! Whole-document conversion: viewport resolution and the output envelope.

use rayon::prelude::*;

use crate::error::ConvertError;
use crate::render::{Inherited, render_node};
use crate::style::collect_style_rules;

/// Converts one SVG document into Android vector-drawable XML.
///
/// Fails only on unparsable markup or a document without an `<svg>` element.
/// Everything else degrades silently: unsupported elements drop out of the
/// output, malformed style declarations are skipped, degenerate shapes render
/// no path.
pub fn convert(svg: &str) -> Result<String, ConvertError> {
    let doc = roxmltree::Document::parse(svg)?;
    let root = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case("svg"))
        .ok_or(ConvertError::MissingSvgRoot)?;

    let rules = collect_style_rules(&doc);

    // Displayed dp size always comes from width/height; the coordinate-space
    // bounds prefer the viewBox when it carries enough tokens.
    let width = root.attribute("width").unwrap_or("24");
    let height = root.attribute("height").unwrap_or("24");
    let (viewport_width, viewport_height) = viewport(root, width, height);

    let inherited = Inherited::default();
    let body = root
        .children()
        .filter(|n| n.is_element())
        .map(|child| render_node(child, &inherited, &rules))
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<vector xmlns:android=\"http://schemas.android.com/apk/res/android\" android:width=\"{width}dp\" android:height=\"{height}dp\" android:viewportWidth=\"{viewport_width}\" android:viewportHeight=\"{viewport_height}\">\n{body}\n</vector>"
    ))
}

fn viewport<'a>(
    root: roxmltree::Node<'a, '_>,
    width: &'a str,
    height: &'a str,
) -> (&'a str, &'a str) {
    if let Some(view_box) = root.attribute("viewBox") {
        let tokens: Vec<&str> = view_box.split_whitespace().collect();
        if tokens.len() >= 4 {
            return (tokens[2], tokens[3]);
        }
    }
    (width, height)
}

/// Converts many independent documents in parallel, one result per input.
/// Conversions share no state, so ordering within the pool is irrelevant;
/// results come back in input order.
pub fn convert_batch(docs: &[&str]) -> Vec<Result<String, ConvertError>> {
    docs.par_iter().map(|svg| convert(svg)).collect()
}

/// Normalizes an icon name into a valid Android resource name: lowercase,
/// runs of spaces/hyphens/underscores collapse to one underscore, every other
/// non-alphanumeric character is dropped, and leading/trailing underscores
/// are trimmed.
pub fn resource_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        }
    }
    out
}

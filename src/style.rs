//! Inline stylesheet rule extraction and class matching.
//!
//! Deliberately small: only class selectors inside `<style>` blocks, which is
//! what icon exporters (Illustrator's `.st0`, Figma's `.cls-1`) emit. Anything
//! else is ignored without error. Rules keep document order so later rules
//! overwrite earlier ones per property when several match the same element.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// Class name without the leading dot.
    pub class_name: String,
    /// Declarations in source order.
    pub declarations: Vec<(String, String)>,
}

/// Collects class rules from every `<style>` element in the document.
pub fn collect_style_rules(doc: &roxmltree::Document<'_>) -> Vec<StyleRule> {
    let mut rules = Vec::new();
    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case("style"))
    {
        let css = node.text().unwrap_or_default();
        for block in css.split('}') {
            let Some((selector, body)) = block.split_once('{') else {
                continue;
            };
            let selector = selector.trim();
            let Some(class_name) = selector.strip_prefix('.') else {
                continue;
            };
            if class_name.is_empty() {
                continue;
            }
            let mut declarations = Vec::new();
            for decl in body.split(';') {
                let Some((prop, value)) = decl.split_once(':') else {
                    continue;
                };
                let prop = prop.trim();
                let value = value.trim();
                if prop.is_empty() || value.is_empty() {
                    continue;
                }
                declarations.push((prop.to_string(), value.to_string()));
            }
            rules.push(StyleRule {
                class_name: class_name.to_string(),
                declarations,
            });
        }
    }
    rules
}

/// Merged declarations of every rule matching the node's `class` attribute.
/// Rules apply in source order, so a later rule wins per property.
pub fn matched_declarations(
    node: roxmltree::Node<'_, '_>,
    rules: &[StyleRule],
) -> HashMap<String, String> {
    let mut merged = HashMap::new();
    let Some(class_attr) = node.attribute("class") else {
        return merged;
    };
    let classes: Vec<&str> = class_attr.split_whitespace().collect();
    if classes.is_empty() {
        return merged;
    }
    for rule in rules {
        if classes.iter().any(|c| *c == rule.class_name) {
            for (prop, value) in &rule.declarations {
                merged.insert(prop.clone(), value.clone());
            }
        }
    }
    merged
}

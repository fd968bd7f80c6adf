//! Recursive element-tree rendering and presentation-attribute inheritance.
//!
//! The walk is depth-first over element children only; text and comment nodes
//! never participate. Inherited paint state is passed down by value, so
//! sibling subtrees cannot observe each other. Unsupported elements render as
//! empty fragments and drop out of the joined output.

use std::collections::HashMap;

use crate::color::resolve_color;
use crate::shapes;
use crate::style::{StyleRule, matched_declarations};
use crate::transform::parse_transform;

/// One paint slot of the inherited state.
///
/// Tri-state on purpose: `Unset` falls through to the ancestor chain, `None`
/// is an explicit "no paint" that keeps suppressing ancestor colors in the
/// subtree that declared it, and `Token` is a raw color token awaiting
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Paint {
    #[default]
    Unset,
    None,
    Token(String),
}

impl Paint {
    fn from_token(raw: &str) -> Paint {
        if raw.trim().eq_ignore_ascii_case("none") {
            Paint::None
        } else {
            Paint::Token(raw.to_string())
        }
    }

    fn token(&self) -> Option<&str> {
        match self {
            Paint::Token(raw) => Some(raw),
            Paint::None | Paint::Unset => None,
        }
    }
}

/// Presentation state flowing down the recursion. A child never mutates its
/// parent's copy; it derives its own with [`child_state`].
#[derive(Debug, Clone, Default)]
pub struct Inherited {
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: Option<String>,
}

/// The state a node hands to its children: the parent state overridden by the
/// node's own inline attributes. Class rules deliberately do not feed into
/// inheritance; they style the matched element only.
fn child_state(node: roxmltree::Node<'_, '_>, inherited: &Inherited) -> Inherited {
    Inherited {
        fill: node
            .attribute("fill")
            .map(Paint::from_token)
            .unwrap_or_else(|| inherited.fill.clone()),
        stroke: node
            .attribute("stroke")
            .map(Paint::from_token)
            .unwrap_or_else(|| inherited.stroke.clone()),
        stroke_width: node
            .attribute("stroke-width")
            .map(str::to_string)
            .or_else(|| inherited.stroke_width.clone()),
    }
}

/// Effective paint of one node, after the inline > class rule > inherited
/// priority chain and color resolution.
#[derive(Debug, Default)]
struct Resolved {
    fill: Option<String>,
    stroke: Option<String>,
    stroke_width: Option<String>,
}

fn resolve_presentation(
    node: roxmltree::Node<'_, '_>,
    rules: &[StyleRule],
    state: &Inherited,
) -> Resolved {
    let class_props = matched_declarations(node, rules);
    Resolved {
        fill: paint_token(node, "fill", &class_props, &state.fill)
            .and_then(|raw| resolve_color(&raw)),
        stroke: paint_token(node, "stroke", &class_props, &state.stroke)
            .and_then(|raw| resolve_color(&raw)),
        stroke_width: node
            .attribute("stroke-width")
            .map(str::to_string)
            .or_else(|| class_props.get("stroke-width").cloned())
            .or_else(|| state.stroke_width.clone()),
    }
}

fn paint_token(
    node: roxmltree::Node<'_, '_>,
    name: &str,
    class_props: &HashMap<String, String>,
    inherited: &Paint,
) -> Option<String> {
    if let Some(raw) = node.attribute(name) {
        return Some(raw.to_string());
    }
    if let Some(raw) = class_props.get(name) {
        return Some(raw.clone());
    }
    inherited.token().map(str::to_string)
}

fn attr_number(node: roxmltree::Node<'_, '_>, name: &str) -> Option<f64> {
    node.attribute(name).and_then(|v| v.trim().parse().ok())
}

/// Emits the shared fillAlpha/fillColor/strokeAlpha/strokeColor/strokeWidth
/// attribute run for a shape or path element.
fn presentation_attrs(node: roxmltree::Node<'_, '_>, resolved: &Resolved) -> Vec<String> {
    let opacity = attr_number(node, "opacity");
    let mut attrs = Vec::new();
    push_paint_attrs(
        &mut attrs,
        resolved.fill.as_deref(),
        opacity,
        attr_number(node, "fill-opacity"),
        "android:fillAlpha",
        "android:fillColor",
    );
    push_paint_attrs(
        &mut attrs,
        resolved.stroke.as_deref(),
        opacity,
        attr_number(node, "stroke-opacity"),
        "android:strokeAlpha",
        "android:strokeColor",
    );
    if let Some(width) = &resolved.stroke_width {
        if !width.trim().eq_ignore_ascii_case("none") {
            attrs.push(format!("android:strokeWidth=\"{}\"", width));
        }
    }
    attrs
}

fn push_paint_attrs(
    attrs: &mut Vec<String>,
    color: Option<&str>,
    opacity: Option<f64>,
    own_opacity: Option<f64>,
    alpha_name: &str,
    color_name: &str,
) {
    let Some(color) = color else {
        return;
    };
    // With a concrete color present, a bare `opacity` IS the effective alpha;
    // fill-opacity/stroke-opacity only stands in when `opacity` is absent.
    let alpha = match opacity {
        Some(o) => o,
        None => own_opacity.unwrap_or(1.0),
    };
    if alpha < 1.0 {
        attrs.push(format!("{}=\"{}\"", alpha_name, alpha));
    }
    attrs.push(format!("{}=\"{}\"", color_name, color));
}

fn joined_attrs(attrs: &[String]) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.join(" "))
    }
}

/// Renders one element into an XML fragment, or an empty string for
/// unsupported or degenerate elements.
pub(crate) fn render_node(
    node: roxmltree::Node<'_, '_>,
    inherited: &Inherited,
    rules: &[StyleRule],
) -> String {
    let state = child_state(node, inherited);
    match node.tag_name().name().to_ascii_lowercase().as_str() {
        "g" => {
            let transform = node
                .attribute("transform")
                .map(parse_transform)
                .unwrap_or_default();
            let attrs: String = transform
                .iter()
                .map(|(name, value)| format!(" {}=\"{}\"", name, value))
                .collect();
            let body = node
                .children()
                .filter(|n| n.is_element())
                .map(|child| render_node(child, &state, rules))
                .filter(|fragment| !fragment.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            format!("<group{}>\n{}\n</group>", attrs, body)
        }
        "path" => {
            let Some(d) = node.attribute("d") else {
                return String::new();
            };
            let path = path_fragment(node, d.to_string(), &state, rules);
            // A transformed <path> has nowhere to put transform attributes, so
            // it gets a synthetic wrapping group.
            let transform = node
                .attribute("transform")
                .map(parse_transform)
                .unwrap_or_default();
            if transform.is_empty() {
                path
            } else {
                let attrs = transform
                    .iter()
                    .map(|(name, value)| format!("{}=\"{}\"", name, value))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("<group {}>{}</group>", attrs, path)
            }
        }
        "rect" => {
            let d = shapes::rect_path(
                node.attribute("x"),
                node.attribute("y"),
                node.attribute("width"),
                node.attribute("height"),
                node.attribute("rx"),
                node.attribute("ry"),
            );
            path_fragment(node, d, &state, rules)
        }
        "circle" => {
            let d = shapes::circle_path(
                node.attribute("cx"),
                node.attribute("cy"),
                node.attribute("r"),
            );
            path_fragment(node, d, &state, rules)
        }
        "ellipse" => {
            let d = shapes::ellipse_path(
                node.attribute("cx"),
                node.attribute("cy"),
                node.attribute("rx"),
                node.attribute("ry"),
            );
            path_fragment(node, d, &state, rules)
        }
        "line" => {
            let d = shapes::line_path(
                node.attribute("x1"),
                node.attribute("y1"),
                node.attribute("x2"),
                node.attribute("y2"),
            );
            path_fragment(node, d, &state, rules)
        }
        "polygon" => match shapes::polygon_path(node.attribute("points"), false) {
            Some(d) => path_fragment(node, d, &state, rules),
            None => String::new(),
        },
        "polyline" => match shapes::polygon_path(node.attribute("points"), true) {
            Some(d) => path_fragment(node, d, &state, rules),
            None => String::new(),
        },
        _ => String::new(),
    }
}

fn path_fragment(
    node: roxmltree::Node<'_, '_>,
    d: String,
    state: &Inherited,
    rules: &[StyleRule],
) -> String {
    let resolved = resolve_presentation(node, rules, state);
    let attrs = presentation_attrs(node, &resolved);
    format!("<path android:pathData=\"{}\"{} />", d, joined_attrs(&attrs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::collect_style_rules;

    fn render_first(svg: &str, tag: &str) -> String {
        let doc = roxmltree::Document::parse(svg).expect("fixture parses");
        let rules = collect_style_rules(&doc);
        let node = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == tag)
            .expect("fixture contains the requested tag");
        render_node(node, &Inherited::default(), &rules)
    }

    #[test]
    fn inline_fill_becomes_fill_color() {
        let got = render_first(r##"<svg><path d="M 0 0 Z" fill="#ff0000"/></svg>"##, "path");
        assert_eq!(
            got,
            r##"<path android:pathData="M 0 0 Z" android:fillColor="#FF0000" />"##
        );
    }

    #[test]
    fn explicit_none_binds_to_its_node_while_siblings_keep_inheriting() {
        let svg = r#"<svg><g fill="red"><path d="M 0 0"  fill="none"/><path d="M 1 1"/></g></svg>"#;
        let got = render_first(svg, "g");
        let lines: Vec<&str> = got.lines().collect();
        assert_eq!(lines[0], "<group>");
        assert_eq!(
            lines[1], r#"<path android:pathData="M 0 0" />"#,
            "explicit local none suppresses the inherited color"
        );
        assert_eq!(
            lines[2],
            r##"<path android:pathData="M 1 1" android:fillColor="#FF0000" />"##,
            "the sibling still inherits the ancestor color"
        );
    }

    #[test]
    fn explicit_none_propagates_into_its_own_subtree() {
        let svg = r#"<svg><g fill="red"><g fill="none"><path d="M 0 0"/></g></g></svg>"#;
        let got = render_first(svg, "g");
        assert!(
            !got.contains("fillColor"),
            "a none subtree must not revive the ancestor color: {got}"
        );
    }

    #[test]
    fn descendant_can_redeclare_a_color_below_a_none_ancestor() {
        let svg =
            r#"<svg><g fill="none"><path d="M 0 0" fill="blue"/></g></svg>"#;
        let got = render_first(svg, "g");
        assert!(got.contains(r##"android:fillColor="#0000FF""##), "{got}");
    }

    #[test]
    fn class_rule_styles_the_shape() {
        let svg = r#"<svg><style>.st0{fill:#00ff00;stroke-width:2}</style><path class="st0" d="M 0 0"/></svg>"#;
        let got = render_first(svg, "path");
        assert!(got.contains(r##"android:fillColor="#00FF00""##), "{got}");
        assert!(got.contains(r#"android:strokeWidth="2""#), "{got}");
    }

    #[test]
    fn inline_attribute_beats_class_rule() {
        let svg = r##"<svg><style>.st0{fill:#00ff00}</style><path class="st0" d="M 0 0" fill="#0000ff"/></svg>"##;
        let got = render_first(svg, "path");
        assert!(got.contains(r##"android:fillColor="#0000FF""##), "{got}");
    }

    #[test]
    fn class_rule_beats_inherited_value() {
        let svg = r#"<svg><style>.st0{fill:#00ff00}</style><g fill="red"><path class="st0" d="M 0 0"/></g></svg>"#;
        let got = render_first(svg, "g");
        assert!(got.contains(r##"android:fillColor="#00FF00""##), "{got}");
    }

    #[test]
    fn bare_opacity_is_the_complete_alpha() {
        let svg = r#"<svg><path d="M 0 0" fill="red" opacity="0.5" fill-opacity="0.4"/></svg>"#;
        let got = render_first(svg, "path");
        assert!(
            got.contains(r#"android:fillAlpha="0.5""#),
            "opacity alone governs the alpha, not opacity * fill-opacity: {got}"
        );
    }

    #[test]
    fn fill_opacity_stands_alone_without_opacity() {
        let svg = r#"<svg><path d="M 0 0" fill="red" fill-opacity="0.25"/></svg>"#;
        let got = render_first(svg, "path");
        assert!(got.contains(r#"android:fillAlpha="0.25""#), "{got}");
    }

    #[test]
    fn full_alpha_is_not_emitted() {
        let svg = r#"<svg><path d="M 0 0" fill="red" opacity="1"/></svg>"#;
        let got = render_first(svg, "path");
        assert!(!got.contains("fillAlpha"), "{got}");
    }

    #[test]
    fn alpha_needs_a_concrete_color() {
        let svg = r#"<svg><path d="M 0 0" fill="none" opacity="0.5"/></svg>"#;
        let got = render_first(svg, "path");
        assert!(!got.contains("fillAlpha"), "{got}");
        assert!(!got.contains("fillColor"), "{got}");
    }

    #[test]
    fn stroke_attributes_emit_together() {
        let svg = r##"<svg><path d="M 0 0" stroke="#102030" stroke-width="1.5" stroke-opacity="0.75"/></svg>"##;
        let got = render_first(svg, "path");
        assert_eq!(
            got,
            r##"<path android:pathData="M 0 0" android:strokeAlpha="0.75" android:strokeColor="#102030" android:strokeWidth="1.5" />"##
        );
    }

    #[test]
    fn none_stroke_width_is_not_emitted() {
        let svg = r#"<svg><g stroke-width="none"><path d="M 0 0" stroke="red"/></g></svg>"#;
        let got = render_first(svg, "path");
        assert!(!got.contains("strokeWidth"), "{got}");
    }

    #[test]
    fn group_transform_becomes_group_attributes() {
        let svg = r#"<svg><g transform="translate(2 3) scale(2)"><path d="M 0 0"/></g></svg>"#;
        let got = render_first(svg, "g");
        assert!(
            got.starts_with(
                r#"<group android:translateX="2" android:translateY="3" android:scaleX="2" android:scaleY="2">"#
            ),
            "{got}"
        );
    }

    #[test]
    fn transformed_path_gets_a_synthetic_group() {
        let svg = r#"<svg><path d="M 0 0" transform="rotate(90)"/></svg>"#;
        let got = render_first(svg, "path");
        assert_eq!(
            got,
            r#"<group android:rotation="90" android:pivotX="0" android:pivotY="0"><path android:pathData="M 0 0" /></group>"#
        );
    }

    #[test]
    fn skew_only_transform_adds_no_group() {
        let svg = r#"<svg><path d="M 0 0" transform="skewX(20)"/></svg>"#;
        let got = render_first(svg, "path");
        assert_eq!(got, r#"<path android:pathData="M 0 0" />"#);
    }

    #[test]
    fn rect_renders_through_the_shape_converter() {
        let svg = r#"<svg><rect x="1" y="1" width="4" height="4" fill="black"/></svg>"#;
        let got = render_first(svg, "rect");
        assert_eq!(
            got,
            r##"<path android:pathData="M 1 1 H 5 V 5 H 1 V 1 Z" android:fillColor="#000000" />"##
        );
    }

    #[test]
    fn degenerate_polygon_renders_nothing() {
        let svg = r#"<svg><polygon points="0,0 1" fill="red"/></svg>"#;
        assert_eq!(render_first(svg, "polygon"), "");
    }

    #[test]
    fn unsupported_elements_render_empty_and_drop_from_groups() {
        let svg = r#"<svg><g><text>hi</text><filter/><path d="M 0 0"/></g></svg>"#;
        let got = render_first(svg, "g");
        assert_eq!(got, "<group>\n<path android:pathData=\"M 0 0\" />\n</group>");
    }

    #[test]
    fn text_nodes_between_elements_are_ignored() {
        let svg = "<svg><g> stray text <path d=\"M 0 0\"/> more </g></svg>";
        let got = render_first(svg, "g");
        assert_eq!(got, "<group>\n<path android:pathData=\"M 0 0\" />\n</group>");
    }
}

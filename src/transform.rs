//! `transform` attribute parsing.
//!
//! Android vector groups carry translate/scale/rotate as discrete attributes
//! rather than a matrix, so each supported transform function maps to its
//! attribute pair. Skew and matrix have no group-attribute equivalent and are
//! ignored, as is any unknown function.

/// Parses a transform list into ordered `android:*` attribute pairs.
///
/// Argument tokens pass through as raw strings. A repeated function overwrites
/// the attribute values it set earlier, keeping the first occurrence's
/// position.
pub fn parse_transform(input: &str) -> Vec<(&'static str, String)> {
    let mut out: Vec<(&'static str, String)> = Vec::new();
    let mut s = input.trim();

    while !s.is_empty() {
        let Some(open) = s.find('(') else { break };
        let name = s[..open].trim().to_ascii_lowercase();
        let Some(close) = s[open + 1..].find(')') else {
            break;
        };
        let args: Vec<&str> = s[open + 1..open + 1 + close]
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        match name.as_str() {
            "translate" => {
                set(&mut out, "android:translateX", args.first().unwrap_or(&"0"));
                set(&mut out, "android:translateY", args.get(1).unwrap_or(&"0"));
            }
            "scale" => {
                let sx = args.first().unwrap_or(&"1");
                let sy = args.get(1).unwrap_or(sx);
                set(&mut out, "android:scaleX", sx);
                set(&mut out, "android:scaleY", sy);
            }
            "rotate" => {
                set(&mut out, "android:rotation", args.first().unwrap_or(&"0"));
                set(&mut out, "android:pivotX", args.get(1).unwrap_or(&"0"));
                set(&mut out, "android:pivotY", args.get(2).unwrap_or(&"0"));
            }
            _ => {}
        }

        s = s[open + 1 + close + 1..].trim_start();
    }

    out
}

fn set(out: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    if let Some(slot) = out.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value.to_string();
    } else {
        out.push((key, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &str) -> Vec<(&'static str, String)> {
        parse_transform(input)
    }

    #[test]
    fn translate_maps_to_x_y_attributes() {
        assert_eq!(
            pairs("translate(10, 20)"),
            vec![
                ("android:translateX", "10".to_string()),
                ("android:translateY", "20".to_string()),
            ]
        );
    }

    #[test]
    fn single_argument_translate_defaults_y_to_zero() {
        assert_eq!(
            pairs("translate(5)"),
            vec![
                ("android:translateX", "5".to_string()),
                ("android:translateY", "0".to_string()),
            ]
        );
    }

    #[test]
    fn uniform_scale_repeats_the_factor() {
        assert_eq!(
            pairs("scale(2)"),
            vec![
                ("android:scaleX", "2".to_string()),
                ("android:scaleY", "2".to_string()),
            ]
        );
    }

    #[test]
    fn rotate_carries_pivot() {
        assert_eq!(
            pairs("rotate(45 12 12)"),
            vec![
                ("android:rotation", "45".to_string()),
                ("android:pivotX", "12".to_string()),
                ("android:pivotY", "12".to_string()),
            ]
        );
    }

    #[test]
    fn multiple_functions_accumulate_in_order() {
        let got = pairs("translate(1 2) scale(3)");
        assert_eq!(got[0].0, "android:translateX");
        assert_eq!(got[2], ("android:scaleX", "3".to_string()));
        assert_eq!(got.len(), 4);
    }

    #[test]
    fn repeated_function_overwrites_in_place() {
        let got = pairs("translate(1) translate(9 9)");
        assert_eq!(
            got,
            vec![
                ("android:translateX", "9".to_string()),
                ("android:translateY", "9".to_string()),
            ]
        );
    }

    #[test]
    fn unsupported_functions_are_skipped() {
        assert!(pairs("matrix(1 0 0 1 0 0)").is_empty());
        assert!(pairs("skewX(10)").is_empty());
        assert_eq!(pairs("skewX(10) translate(1 1)").len(), 2);
    }

    #[test]
    fn empty_or_garbage_input_parses_to_nothing() {
        assert!(pairs("").is_empty());
        assert!(pairs("not a transform").is_empty());
    }
}

//! Color token resolution.
//!
//! Maps a raw SVG paint token to the normalized `#RRGGBB` form the drawable
//! carries, or to `None` when the token means "no paint" (`none`,
//! `currentColor`, or anything we cannot resolve).

pub fn resolve_color(token: &str) -> Option<String> {
    let v = token.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("none") || v.eq_ignore_ascii_case("currentcolor") {
        return None;
    }
    if let Some(hex) = v.strip_prefix('#') {
        return normalize_hex(hex);
    }
    if let (Some(prefix), Some(rest)) = (v.get(..4), v.get(4..)) {
        if prefix.eq_ignore_ascii_case("rgb(") {
            if let Some(args) = rest.strip_suffix(')') {
                return rgb_to_hex(args);
            }
        }
    }
    named_color(v)
}

fn normalize_hex(hex: &str) -> Option<String> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some(format!("#{}", hex.to_ascii_uppercase())),
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for b in hex.bytes() {
                let c = (b as char).to_ascii_uppercase();
                out.push(c);
                out.push(c);
            }
            Some(out)
        }
        _ => None,
    }
}

fn rgb_to_hex(args: &str) -> Option<String> {
    let mut channels = args.split(',').map(|s| s.trim().parse::<u8>().ok());
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    if channels.next().is_some() {
        return None;
    }
    Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
}

// Common CSS color keywords seen in icon exports. Obscure names resolve to no
// paint, same as any other unknown token.
fn named_color(name: &str) -> Option<String> {
    let hex = match name.to_ascii_lowercase().as_str() {
        "black" => "#000000",
        "silver" => "#C0C0C0",
        "gray" | "grey" => "#808080",
        "white" => "#FFFFFF",
        "maroon" => "#800000",
        "red" => "#FF0000",
        "purple" => "#800080",
        "fuchsia" | "magenta" => "#FF00FF",
        "green" => "#008000",
        "lime" => "#00FF00",
        "olive" => "#808000",
        "yellow" => "#FFFF00",
        "navy" => "#000080",
        "blue" => "#0000FF",
        "teal" => "#008080",
        "aqua" | "cyan" => "#00FFFF",
        "orange" => "#FFA500",
        "gold" => "#FFD700",
        "pink" => "#FFC0CB",
        "brown" => "#A52A2A",
        "coral" => "#FF7F50",
        "crimson" => "#DC143C",
        "indigo" => "#4B0082",
        "violet" => "#EE82EE",
        "khaki" => "#F0E68C",
        "salmon" => "#FA8072",
        "tomato" => "#FF6347",
        "turquoise" => "#40E0D0",
        "darkgray" | "darkgrey" => "#A9A9A9",
        "darkred" => "#8B0000",
        "darkgreen" => "#006400",
        "darkblue" => "#00008B",
        "darkorange" => "#FF8C00",
        "lightgray" | "lightgrey" => "#D3D3D3",
        "lightblue" => "#ADD8E6",
        "lightgreen" => "#90EE90",
        "lightyellow" => "#FFFFE0",
        "skyblue" => "#87CEEB",
        "steelblue" => "#4682B4",
        "slategray" | "slategrey" => "#708090",
        "royalblue" => "#4169E1",
        "rebeccapurple" => "#663399",
        "transparent" => return None,
        _ => return None,
    };
    Some(hex.to_string())
}

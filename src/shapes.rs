//! Primitive shape to SVG path-data conversion.
//!
//! Each function turns the parameters of one SVG shape element into the
//! path-data string the Android vector drawable carries in `android:pathData`.
//! Pure and stateless; the renderer decides which attributes wrap the path.

/// Cubic Bezier control-point offset approximating a quarter circle: 4(sqrt(2)-1)/3.
pub const KAPPA: f64 = 0.5522847498307935;

/// Rounds to 12 significant decimal digits so derived coordinates don't carry
/// float noise into the output, then prints the shortest round-trip form.
fn sig12(value: f64) -> f64 {
    format!("{:.11e}", value).parse().unwrap_or(value)
}

fn num(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// `M x1 y1 L x2 y2` for a `<line>` element.
pub fn line_path(x1: Option<&str>, y1: Option<&str>, x2: Option<&str>, y2: Option<&str>) -> String {
    format!("M {} {} L {} {}", num(x1), num(y1), num(x2), num(y2))
}

/// Closed rectangle path, optionally with rounded corners.
///
/// A radius given on only one axis applies to both (SVG's auto-rx/ry rule).
/// With no radius the path is rectilinear; with a radius each corner is one
/// quadratic curve sized by `(rx, ry)`.
pub fn rect_path(
    x: Option<&str>,
    y: Option<&str>,
    w: Option<&str>,
    h: Option<&str>,
    rx: Option<&str>,
    ry: Option<&str>,
) -> String {
    let x = num(x);
    let y = num(y);
    let w = num(w);
    let h = num(h);
    let mut rx = num(rx);
    let mut ry = num(ry);
    let right = sig12(x + w);
    let bottom = sig12(y + h);
    if ry == 0.0 {
        ry = rx;
    } else if rx == 0.0 {
        rx = ry;
    }
    if rx == 0.0 && ry == 0.0 {
        return format!("M {x} {y} H {right} V {bottom} H {x} V {y} Z");
    }
    format!(
        "M {mx} {y} L {lx} {y} Q {right} {y} {right} {ty} L {right} {by} Q {right} {bottom} {lx} {bottom} L {mx} {bottom} Q {x} {bottom} {x} {ly} L {x} {ty} Q {x} {y} {mx} {y} Z",
        mx = sig12(x + rx),
        lx = sig12(right - rx),
        ty = sig12(y + ry),
        by = sig12(y + h - ry),
        ly = sig12(bottom - ry),
    )
}

/// Circle as four cubic Bezier arcs, starting at the top and running
/// clockwise through right, bottom and left back to the top.
pub fn circle_path(cx: Option<&str>, cy: Option<&str>, r: Option<&str>) -> String {
    let cx = num(cx);
    let cy = num(cy);
    let r = num(r);
    arcs_path(cx, cy, r, r)
}

/// Ellipse as four cubic Bezier arcs with independent x/y control offsets.
pub fn ellipse_path(
    cx: Option<&str>,
    cy: Option<&str>,
    rx: Option<&str>,
    ry: Option<&str>,
) -> String {
    arcs_path(num(cx), num(cy), num(rx), num(ry))
}

fn arcs_path(cx: f64, cy: f64, rx: f64, ry: f64) -> String {
    let ox = rx * KAPPA;
    let oy = ry * KAPPA;
    let mut d = format!("M {} {} ", cx, sig12(cy - ry));
    d.push_str(&format!(
        "C {} {} {} {} {} {} ",
        sig12(cx + ox),
        sig12(cy - ry),
        sig12(cx + rx),
        sig12(cy - oy),
        sig12(cx + rx),
        cy
    ));
    d.push_str(&format!(
        "C {} {} {} {} {} {} ",
        sig12(cx + rx),
        sig12(cy + oy),
        sig12(cx + ox),
        sig12(cy + ry),
        cx,
        sig12(cy + ry)
    ));
    d.push_str(&format!(
        "C {} {} {} {} {} {} ",
        sig12(cx - ox),
        sig12(cy + ry),
        sig12(cx - rx),
        sig12(cy + oy),
        sig12(cx - rx),
        cy
    ));
    d.push_str(&format!(
        "C {} {} {} {} {} {} Z",
        sig12(cx - rx),
        sig12(cy - oy),
        sig12(cx - ox),
        sig12(cy - ry),
        cx,
        sig12(cy - ry)
    ));
    d
}

/// Polygon/polyline path from a `points` attribute.
///
/// The points string tokenizes on commas and whitespace; coordinate tokens are
/// carried into the path verbatim. An odd token count yields `None` (the
/// element degrades to no path). A trailing `Z` closes polygons; polylines
/// stay open.
pub fn polygon_path(points: Option<&str>, polyline: bool) -> Option<String> {
    let points = points?;
    let tokens: Vec<&str> = points
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return None;
    }
    let mut d = String::new();
    for (i, pair) in tokens.chunks(2).enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push_str(if i == 0 { "M " } else { "L " });
        d.push_str(pair[0]);
        d.push(' ');
        d.push_str(pair[1]);
    }
    if !polyline {
        d.push_str(" Z");
    }
    Some(d)
}

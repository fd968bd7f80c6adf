//! Converts SVG markup into Android vector-drawable XML.
//!
//! The engine is a single pure function over document text: parse, resolve
//! inherited presentation attributes and class rules, convert primitive
//! shapes to path data, and serialize the nested group/path tree. It holds no
//! global state, so independent documents convert safely in parallel (see
//! [`convert_batch`]).

mod color;
mod convert;
mod error;
mod render;
mod shapes;
mod style;
mod transform;

pub use color::resolve_color;
pub use convert::{convert, convert_batch, resource_name};
pub use error::ConvertError;
pub use render::{Inherited, Paint};
pub use shapes::{KAPPA, circle_path, ellipse_path, line_path, polygon_path, rect_path};
pub use style::{StyleRule, collect_style_rules, matched_declarations};
pub use transform::parse_transform;

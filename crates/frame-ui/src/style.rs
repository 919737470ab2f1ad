//! Token resolution and box style compilation
//!
//! Every visual prop is either a token key looked up in the active
//! [`Vars`](crate::vars::Vars) tables or a `{custom: value}` literal that
//! bypasses the lookup. [`compile_box_style`] runs the resolvers over the
//! fixed property list of a box and produces the final [`Style`] bag.

use crate::vars::{ColorTable, Unit, UnitTable, Vars};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Prop values
// =============================================================================

/// A single prop value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Literal value that bypasses token lookup
    Custom {
        /// The literal value
        custom: String,
    },
    /// Token key (or plain CSS value for pass-through props)
    Token(String),
}

impl PropValue {
    /// Create a custom literal value
    pub fn custom(value: impl Into<String>) -> Self {
        PropValue::Custom {
            custom: value.into(),
        }
    }

    /// Token key, if this is a token
    pub fn as_token(&self) -> Option<&str> {
        match self {
            PropValue::Token(token) => Some(token),
            PropValue::Custom { .. } => None,
        }
    }

    /// The raw string carried by this value
    pub fn literal(&self) -> &str {
        match self {
            PropValue::Token(token) => token,
            PropValue::Custom { custom } => custom,
        }
    }

    /// Empty tokens count as absent
    pub fn is_absent(&self) -> bool {
        matches!(self, PropValue::Token(token) if token.is_empty())
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Token(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Token(value)
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        PropValue::Token(value.clone())
    }
}

/// Props of one element, keyed by camelCase name
pub type Props = BTreeMap<String, PropValue>;

fn present(value: Option<&PropValue>) -> Option<&PropValue> {
    value.filter(|v| !v.is_absent())
}

// =============================================================================
// Resolvers
// =============================================================================

/// Resolve a color prop against the color table
///
/// An absent value resolves to `fallback`, a custom value to itself and a
/// token to its table entry (or nothing when the key is unknown).
pub fn resolve_color_token(
    colors: &ColorTable,
    value: Option<&PropValue>,
    fallback: Option<&str>,
) -> Option<String> {
    match present(value) {
        None => fallback.map(str::to_string),
        Some(PropValue::Custom { custom }) => Some(custom.clone()),
        Some(PropValue::Token(token)) => colors.get(token).cloned(),
    }
}

/// Resolve a unit prop against the unit table
///
/// Token entries are multiplied by `base` and suffixed with `px`. A leading
/// `-` negates the result. `"100%"` (as the token or as the table entry)
/// always resolves to `"100%"`. Entries of zero resolve to nothing.
pub fn resolve_unit_token(
    units: &UnitTable,
    value: Option<&PropValue>,
    base: f64,
    fallback: Option<Unit>,
) -> Option<String> {
    match present(value) {
        None => format_unit(fallback, 1.0, base),
        Some(PropValue::Custom { custom }) => Some(custom.clone()),
        Some(PropValue::Token(token)) => {
            let (sign, key) = match token.strip_prefix('-') {
                Some(rest) => (-1.0, rest),
                None => (1.0, token.as_str()),
            };
            if key == FULL {
                return Some(FULL.to_string());
            }
            let unit = if key.is_empty() {
                fallback
            } else {
                units.get(key).copied()
            };
            format_unit(unit, sign, base)
        }
    }
}

const FULL: &str = "100%";

fn format_unit(unit: Option<Unit>, sign: f64, base: f64) -> Option<String> {
    match unit? {
        Unit::Full(_) => Some(FULL.to_string()),
        Unit::Scale(scale) if scale == 0.0 || scale.is_nan() => None,
        Unit::Scale(scale) => Some(format!("{}px", round_px(sign * scale * base))),
    }
}

/// Round away float noise (16/1200*1200 should print as 16)
fn round_px(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// =============================================================================
// Style bag
// =============================================================================

/// Compiled style: camelCase CSS property to concrete value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, ignoring empty values
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(key.into(), value);
        }
    }

    /// Set a property when the value is present
    pub fn set_opt(&mut self, key: &str, value: Option<String>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Builder form of [`Style::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a property
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Remove a property
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Whether a property is set
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no properties are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as an inline CSS declaration list
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}:{}", kebab_case(key), value))
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Convert a camelCase property name to kebab-case
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// =============================================================================
// Box compilation
// =============================================================================

const COLOR_PROPS: &[&str] = &[
    "background",
    "backgroundColor",
    "borderBottomColor",
    "borderColor",
    "borderLeftColor",
    "borderRightColor",
    "borderTopColor",
];

const VMAX_UNIT_PROPS: &[&str] = &[
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRadius",
    "borderRightWidth",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderTopWidth",
    "borderWidth",
    "bottom",
    "height",
    "gap",
    "left",
    "margin",
    "marginTop",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "padding",
    "paddingTop",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "right",
    "top",
    "width",
];

/// Props consumed by compilation rather than passed through
const COMPUTED_PROPS: &[&str] = &[
    "alignHorizontal",
    "alignItems",
    "alignVertical",
    "color",
    "display",
    "flexDirection",
    "flexGrow",
    "fontFamily",
    "fontSize",
    "justifyContent",
    "letterSpacing",
    "lineHeight",
];

fn is_computed(key: &str) -> bool {
    COLOR_PROPS.contains(&key) || VMAX_UNIT_PROPS.contains(&key) || COMPUTED_PROPS.contains(&key)
}

/// Horizontal alignment keyword to flex value
pub fn horizontal_alignment(value: &str) -> Option<&'static str> {
    match value {
        "left" => Some("flex-start"),
        "center" => Some("center"),
        "right" => Some("flex-end"),
        "space-between" => Some("space-between"),
        _ => None,
    }
}

/// Vertical alignment keyword to flex value
pub fn vertical_alignment(value: &str) -> Option<&'static str> {
    match value {
        "top" => Some("flex-start"),
        "center" => Some("center"),
        "bottom" => Some("flex-end"),
        "space-between" => Some("space-between"),
        _ => None,
    }
}

fn literal<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
    present(props.get(key)).map(PropValue::literal)
}

/// Compile the props of one box into a style bag
pub fn compile_box_style(props: &Props, grow: bool, vars: &Vars) -> Style {
    let vheight = f64::from(vars.frame.height);
    let vwidth = f64::from(vars.frame.width);
    let vmax = vars.frame.vmax();

    let mut style = Style::new();

    // Everything not computed below passes through verbatim
    for (key, value) in props {
        if !is_computed(key) && !value.is_absent() {
            style.set(key.as_str(), value.literal());
        }
    }

    let display = literal(props, "display").unwrap_or("flex");
    let flex_direction = literal(props, "flexDirection").unwrap_or("column");
    style.set("display", display);
    style.set("flexDirection", flex_direction);

    for key in COLOR_PROPS {
        style.set_opt(key, resolve_color_token(&vars.colors, props.get(*key), None));
    }
    style.set_opt(
        "color",
        resolve_color_token(&vars.colors, props.get("color"), vars.color("text")),
    );

    for key in VMAX_UNIT_PROPS {
        style.set_opt(key, resolve_unit_token(&vars.units, props.get(*key), vmax, None));
    }
    style.set_opt(
        "fontSize",
        resolve_unit_token(&vars.units, props.get("fontSize"), vmax, vars.unit("16")),
    );
    style.set_opt(
        "letterSpacing",
        resolve_unit_token(&vars.units, props.get("letterSpacing"), vwidth, None),
    );
    style.set_opt(
        "lineHeight",
        resolve_unit_token(&vars.units, props.get("lineHeight"), vheight, None),
    );

    let font_family = match present(props.get("fontFamily")) {
        None => vars.font("default").map(|f| f.name.clone()),
        Some(PropValue::Custom { custom }) => Some(custom.clone()),
        Some(PropValue::Token(family)) => vars.font(family).map(|f| f.name.clone()),
    };
    style.set_opt("fontFamily", font_family);

    let align_horizontal = literal(props, "alignHorizontal");
    let align_vertical = literal(props, "alignVertical");
    let column = flex_direction == "column";

    let align_items = match literal(props, "alignItems") {
        Some(explicit) => Some(explicit),
        None if column => align_horizontal.and_then(horizontal_alignment),
        None => align_vertical.and_then(vertical_alignment),
    };
    let justify_content = match literal(props, "justifyContent") {
        Some(explicit) => Some(explicit),
        None if column => align_vertical.and_then(vertical_alignment),
        None => align_horizontal.and_then(horizontal_alignment),
    };
    style.set_opt("alignItems", align_items.map(str::to_string));
    style.set_opt("justifyContent", justify_content.map(str::to_string));

    let flex_grow = match literal(props, "flexGrow") {
        Some(explicit) => Some(explicit.to_string()),
        None if grow => Some("1".to_string()),
        None => None,
    };
    style.set_opt("flexGrow", flex_grow);

    style
}

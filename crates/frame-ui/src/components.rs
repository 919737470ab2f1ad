//! Layout primitives and tree rendering
//!
//! Each primitive is a thin wrapper over Box: it fills in fixed flex
//! defaults, lets the caller's props override them, and hands the result to
//! [`compile_box_style`]. [`render`] walks an [`Element`] tree and produces
//! the compiled [`Node`] tree.
//!
//! # Available Primitives
//!
//! - [`box_`] - Generic flex box (`div`, or `img` with a source)
//! - [`columns`] / [`column`] - Fractional-width columns
//! - [`rows`] / [`row`] - Fractional-height rows
//! - [`hstack`] / [`vstack`] - Stacks with keyword alignment
//! - [`divider`] / [`spacer`] - Separators and space
//! - [`text`] / [`heading`] - Typography
//! - [`icon`] / [`image`] - Graphics
//!
//! # Example
//!
//! ```rust
//! use frame_ui::components::{column, columns, heading, render, text};
//! use frame_ui::vars::{get_vars, ThemeName};
//!
//! let tree = columns().grow().child(
//!     column()
//!         .width("1/4")
//!         .child(heading().size("48").text("Goal"))
//!         .child(text().size("32").color("white").text("1 ETH")),
//! );
//!
//! let node = render(&tree, &get_vars(ThemeName::Speedball)).unwrap();
//! assert_eq!(node.style.get("flexDirection"), Some("row"));
//! ```

use crate::element::{Child, Component, Direction, Element};
use crate::icons;
use crate::node::{Node, NodeChild};
use crate::style::{compile_box_style, horizontal_alignment, PropValue, Props};
use crate::vars::Vars;
use thiserror::Error;

/// UI rendering errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Icon collection is not available
    #[error("Invalid set: {0}")]
    UnknownCollection(String),

    /// Icon is not part of the collection
    #[error("Unknown icon {name} in set {collection}")]
    UnknownIcon {
        /// Collection searched
        collection: String,
        /// Requested icon name
        name: String,
    },

    /// Icon element without a name
    #[error("Icon requires a name")]
    MissingIconName,
}

/// Result type for UI rendering
pub type Result<T> = std::result::Result<T, UiError>;

// =============================================================================
// Constructors
// =============================================================================

/// Generic flex box
pub fn box_() -> Element {
    Element::new(Component::Box)
}

/// Non-wrapping horizontal stack
pub fn columns() -> Element {
    Element::new(Component::Columns)
}

/// Column taking `width` (a fraction like `1/4`) of its parent
pub fn column() -> Element {
    Element::new(Component::Column)
}

/// Full-height vertical stack
pub fn rows() -> Element {
    Element::new(Component::Rows)
}

/// Row taking `height` (a fraction like `2/5`) of its parent
pub fn row() -> Element {
    Element::new(Component::Row)
}

/// Horizontal stack
pub fn hstack() -> Element {
    Element::new(Component::HStack)
}

/// Vertical stack
pub fn vstack() -> Element {
    Element::new(Component::VStack)
}

/// Separator line
pub fn divider() -> Element {
    Element::new(Component::Divider)
}

/// Empty space
pub fn spacer() -> Element {
    Element::new(Component::Spacer)
}

/// Text run
pub fn text() -> Element {
    Element::new(Component::Text)
}

/// Heading text run
pub fn heading() -> Element {
    Element::new(Component::Heading)
}

/// Icon by name
pub fn icon(name: &str) -> Element {
    Element::new(Component::Icon).name(name)
}

/// Raster image
pub fn image(src: impl Into<String>) -> Element {
    Element::new(Component::Image).src(src)
}

// =============================================================================
// Expansion
// =============================================================================

/// Box-level description of a primitive after its defaults are applied
#[derive(Debug, Clone, PartialEq)]
struct BoxSpec {
    props: Props,
    grow: bool,
    src: Option<String>,
}

impl BoxSpec {
    fn new(props: Props) -> Self {
        Self {
            props,
            grow: false,
            src: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    vars: &'a Vars,
    direction: Option<Direction>,
}

/// Defaults overridden by the caller's props, minus consumed keys
fn spread(defaults: Props, rest: &Props, consumed: &[&str]) -> Props {
    let mut props = defaults;
    for (key, value) in rest {
        if !consumed.contains(&key.as_str()) {
            props.insert(key.clone(), value.clone());
        }
    }
    props
}

fn token<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
    props
        .get(key)
        .filter(|v| !v.is_absent())
        .map(PropValue::literal)
}

fn insert(props: &mut Props, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        props.insert(key.to_string(), PropValue::from(value));
    }
}

fn copy(props: &mut Props, from: &Props, from_key: &str, to_key: &str) {
    if let Some(value) = from.get(from_key).filter(|v| !v.is_absent()) {
        props.insert(to_key.to_string(), value.clone());
    }
}

/// `"1/4"` to `"0.25"`
fn fraction(value: &str) -> String {
    let mut parts = value.splitn(2, '/');
    let numerator = parts.next().and_then(|n| n.trim().parse::<f64>().ok());
    let denominator = parts.next().and_then(|d| d.trim().parse::<f64>().ok());
    match (numerator, denominator) {
        (Some(n), Some(d)) => format!("{}", n / d),
        _ => "NaN".to_string(),
    }
}

fn is_true(value: Option<&str>) -> bool {
    !matches!(value, Some("false") | Some("0"))
}

fn hstack_spec(props: &Props, wrap_default: bool) -> Props {
    let align_horizontal = token(props, "alignHorizontal").unwrap_or("left");
    let align_vertical = token(props, "alignVertical").unwrap_or("top");
    let wrap = match token(props, "wrap") {
        Some(value) => is_true(Some(value)),
        None => wrap_default,
    };

    let align = match align_vertical {
        "top" => Some("flex-start"),
        "center" => Some("center"),
        "bottom" => Some("flex-end"),
        _ => None,
    };

    let mut defaults = Props::new();
    if wrap {
        insert(&mut defaults, "alignContent", align);
    } else {
        insert(&mut defaults, "alignItems", align);
    }
    insert(&mut defaults, "display", Some("flex"));
    insert(&mut defaults, "flexDirection", Some("row"));
    insert(
        &mut defaults,
        "justifyContent",
        horizontal_alignment(align_horizontal),
    );
    insert(
        &mut defaults,
        "flexWrap",
        Some(if wrap { "wrap" } else { "nowrap" }),
    );

    spread(
        defaults,
        props,
        &["alignHorizontal", "alignVertical", "wrap"],
    )
}

fn vstack_spec(props: &Props) -> Props {
    let mut defaults = Props::new();
    insert(
        &mut defaults,
        "alignItems",
        token(props, "alignHorizontal").and_then(|h| match h {
            "left" => Some("flex-start"),
            "center" => Some("center"),
            "right" => Some("flex-end"),
            _ => None,
        }),
    );
    insert(
        &mut defaults,
        "justifyContent",
        token(props, "alignVertical").and_then(crate::style::vertical_alignment),
    );
    insert(&mut defaults, "display", Some("flex"));
    insert(&mut defaults, "flexDirection", Some("column"));

    spread(defaults, props, &["alignHorizontal", "alignVertical"])
}

fn text_spec(props: &Props) -> Props {
    let mut out = Props::new();
    insert(
        &mut out,
        "alignItems",
        token(props, "align").and_then(|a| match a {
            "left" => Some("flex-start"),
            "center" => Some("center"),
            "right" => Some("flex-end"),
            _ => None,
        }),
    );
    copy(&mut out, props, "color", "color");
    copy(&mut out, props, "font", "fontFamily");
    copy(&mut out, props, "size", "fontSize");
    copy(&mut out, props, "style", "fontStyle");
    copy(&mut out, props, "weight", "fontWeight");
    copy(&mut out, props, "tracking", "letterSpacing");
    copy(&mut out, props, "decoration", "textDecoration");
    copy(&mut out, props, "overflow", "textOverflow");
    copy(&mut out, props, "shadow", "textShadow");
    copy(&mut out, props, "transform", "textTransform");
    match token(props, "wrap") {
        Some("true") => insert(&mut out, "textWrap", Some("wrap")),
        Some("false") | None => {}
        Some(_) => copy(&mut out, props, "wrap", "textWrap"),
    }
    out
}

fn icon_spec(props: &Props, vars: &Vars) -> Result<Props> {
    let collection = token(props, "collection").unwrap_or(vars.icons.as_str());
    if !icons::COLLECTIONS.contains(&collection) {
        return Err(UiError::UnknownCollection(collection.to_string()));
    }
    let name = token(props, "name").ok_or(UiError::MissingIconName)?;
    let mut svg = icons::lookup(collection, name).ok_or_else(|| UiError::UnknownIcon {
        collection: collection.to_string(),
        name: name.to_string(),
    })?;

    let mode = match token(props, "mode").unwrap_or("auto") {
        "auto" if svg.contains("currentColor") => "mask",
        "auto" => "bg",
        other => other,
    };

    if mode == "mask" {
        let fallback = PropValue::from("gray700");
        let requested = props.get("color").filter(|v| !v.is_absent()).unwrap_or(&fallback);
        match crate::style::resolve_color_token(&vars.colors, Some(requested), None) {
            Some(color) => {
                svg = svg.replace("currentColor", &urlencoding::encode(&color));
            }
            None => {
                tracing::debug!(icon = name, "icon color did not resolve, keeping currentColor");
            }
        }
    }

    let size = props
        .get("size")
        .filter(|v| !v.is_absent())
        .cloned()
        .unwrap_or_else(|| PropValue::from("24"));

    let mut out = Props::new();
    out.insert(
        "backgroundImage".to_string(),
        PropValue::from(format!("url('data:image/svg+xml;utf8,{}')", svg)),
    );
    out.insert("backgroundColor".to_string(), PropValue::custom("transparent"));
    out.insert("backgroundSize".to_string(), PropValue::from("100% 100%"));
    out.insert("height".to_string(), size.clone());
    out.insert("width".to_string(), size);
    Ok(out)
}

fn expand(element: &Element, ctx: Context<'_>) -> Result<BoxSpec> {
    let props = &element.props;
    let spec = match element.component {
        Component::Box => BoxSpec {
            props: props.clone(),
            grow: element.grow,
            src: element.src.clone(),
        },
        Component::HStack => BoxSpec {
            props: hstack_spec(props, true),
            grow: element.grow,
            src: None,
        },
        Component::Columns => BoxSpec {
            props: hstack_spec(props, false),
            grow: element.grow,
            src: None,
        },
        Component::VStack => BoxSpec {
            props: vstack_spec(props),
            grow: element.grow,
            src: None,
        },
        Component::Rows => {
            let mut defaults = Props::new();
            insert(&mut defaults, "height", Some("100%"));
            BoxSpec {
                props: vstack_spec(&spread(defaults, props, &[])),
                grow: element.grow,
                src: None,
            }
        }
        Component::Column => {
            let width = token(props, "width").unwrap_or("1/1");
            let mut defaults = Props::new();
            defaults.insert("flex".to_string(), PropValue::from(fraction(width)));
            insert(&mut defaults, "height", Some("100%"));
            BoxSpec {
                props: spread(defaults, props, &["width"]),
                grow: element.grow,
                src: None,
            }
        }
        Component::Row => {
            let height = token(props, "height").unwrap_or("1/1");
            let mut defaults = Props::new();
            defaults.insert("flex".to_string(), PropValue::from(fraction(height)));
            BoxSpec {
                props: spread(defaults, props, &["height"]),
                grow: element.grow,
                src: None,
            }
        }
        Component::Divider => {
            let direction = match token(props, "direction").unwrap_or("auto") {
                "horizontal" => Some(Direction::Horizontal),
                "vertical" => Some(Direction::Vertical),
                _ => ctx.direction,
            };
            let mut out = Props::new();
            out.insert(
                "backgroundColor".to_string(),
                props
                    .get("color")
                    .filter(|v| !v.is_absent())
                    .cloned()
                    .unwrap_or_else(|| PropValue::custom("rgba(255,255,255,0.5)")),
            );
            if direction == Some(Direction::Horizontal) {
                out.insert("height".to_string(), PropValue::custom("1px"));
                out.insert("width".to_string(), PropValue::from("100%"));
            } else {
                out.insert("height".to_string(), PropValue::from("100%"));
                out.insert("width".to_string(), PropValue::custom("1px"));
            }
            BoxSpec::new(out)
        }
        Component::Spacer => {
            let mut out = Props::new();
            let size = props.get("size").filter(|v| !v.is_absent());
            if let Some(size) = size {
                out.insert("height".to_string(), size.clone());
                out.insert("width".to_string(), size.clone());
            }
            BoxSpec {
                props: out,
                grow: size.is_none(),
                src: None,
            }
        }
        Component::Text => BoxSpec::new(text_spec(props)),
        Component::Heading => {
            let mut defaults = Props::new();
            insert(&mut defaults, "size", Some("32"));
            insert(&mut defaults, "tracking", Some("-1"));
            insert(&mut defaults, "weight", Some("700"));
            BoxSpec::new(text_spec(&spread(defaults, props, &[])))
        }
        Component::Icon => BoxSpec::new(icon_spec(props, ctx.vars)?),
        Component::Image => {
            let mut out = Props::new();
            for key in [
                "borderRadius",
                "borderBottomLeftRadius",
                "borderBottomRightRadius",
                "borderTopLeftRadius",
                "borderTopRightRadius",
                "height",
                "objectFit",
                "width",
            ] {
                copy(&mut out, props, key, key);
            }
            BoxSpec {
                props: out,
                grow: false,
                src: element.src.clone(),
            }
        }
    };
    Ok(spec)
}

// =============================================================================
// Rendering
// =============================================================================

/// Render an element tree into a compiled node tree
pub fn render(element: &Element, vars: &Vars) -> Result<Node> {
    render_with(
        element,
        Context {
            vars,
            direction: None,
        },
    )
}

fn render_with(element: &Element, ctx: Context<'_>) -> Result<Node> {
    let spec = expand(element, ctx)?;
    let style = compile_box_style(&spec.props, spec.grow, ctx.vars);

    let mut node = match spec.src {
        Some(src) => return Ok(Node::img(style, src)),
        None => Node::div(style),
    };

    // Leaf primitives ignore children
    if matches!(
        element.component,
        Component::Divider | Component::Spacer | Component::Icon | Component::Image
    ) {
        return Ok(node);
    }

    let child_ctx = Context {
        vars: ctx.vars,
        direction: element.component.direction().or(ctx.direction),
    };
    for child in &element.children {
        match child {
            Child::Text(text) => node.push(NodeChild::Text(text.clone())),
            Child::Element(el) => node.push(NodeChild::Node(render_with(el, child_ctx)?)),
        }
    }
    Ok(node)
}

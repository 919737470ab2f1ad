//! Declarative element tree
//!
//! An [`Element`] is one primitive (Box, Columns, Text, ...) with its props
//! and children. Trees are built with the constructors in
//! [`components`](crate::components) and the builder methods below, then
//! compiled into a [`Node`](crate::node::Node) tree by
//! [`render`](crate::components::render).

use crate::style::{PropValue, Props};
use serde::{Deserialize, Serialize};

/// Layout primitive kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Generic flex box
    Box,
    /// Non-wrapping horizontal stack of [`Component::Column`]s
    Columns,
    /// Fractional-width column
    Column,
    /// Full-height vertical stack of [`Component::Row`]s
    Rows,
    /// Fractional-height row
    Row,
    /// Horizontal stack
    HStack,
    /// Vertical stack
    VStack,
    /// One pixel separator line
    Divider,
    /// Empty space
    Spacer,
    /// Text run
    Text,
    /// Bold text run
    Heading,
    /// Icon from the icon collection
    Icon,
    /// Raster image
    Image,
}

/// Direction a container lays its children out in, as seen by a [`Component::Divider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Children stack top to bottom; dividers run horizontally
    Horizontal,
    /// Children sit side by side; dividers run vertically
    Vertical,
}

impl Component {
    /// Direction this component imposes on its children, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Component::Columns | Component::Column | Component::HStack => {
                Some(Direction::Vertical)
            }
            Component::Rows | Component::Row | Component::VStack => Some(Direction::Horizontal),
            _ => None,
        }
    }

    /// Component name
    pub fn name(&self) -> &'static str {
        match self {
            Component::Box => "Box",
            Component::Columns => "Columns",
            Component::Column => "Column",
            Component::Rows => "Rows",
            Component::Row => "Row",
            Component::HStack => "HStack",
            Component::VStack => "VStack",
            Component::Divider => "Divider",
            Component::Spacer => "Spacer",
            Component::Text => "Text",
            Component::Heading => "Heading",
            Component::Icon => "Icon",
            Component::Image => "Image",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Child of an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// Nested element
    Element(Element),
    /// Text content
    Text(String),
}

/// A primitive with props and children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Primitive kind
    pub component: Component,
    /// Props keyed by camelCase name
    #[serde(default)]
    pub props: Props,
    /// Grow to fill the parent
    #[serde(default)]
    pub grow: bool,
    /// Image source (Box and Image only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Children in order
    #[serde(default)]
    pub children: Vec<Child>,
}

impl Element {
    /// Create an element with no props
    pub fn new(component: Component) -> Self {
        Self {
            component,
            props: Props::new(),
            grow: false,
            src: None,
            children: Vec::new(),
        }
    }

    /// Set a prop
    pub fn prop(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    /// Set a prop to a custom literal
    pub fn custom(self, key: &str, value: impl Into<String>) -> Self {
        self.prop(key, PropValue::custom(value))
    }

    /// Grow to fill the parent
    pub fn grow(mut self) -> Self {
        self.grow = true;
        self
    }

    /// Set the image source
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append several child elements
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Element));
        self
    }

    /// Append text content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Get a prop
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// All text content of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Child::Text(text) => out.push_str(text),
            Child::Element(el) => collect_text(el, out),
        }
    }
}

macro_rules! prop_setters {
    ($($(#[$doc:meta])* $name:ident => $key:literal),* $(,)?) => {
        impl Element {
            $(
                $(#[$doc])*
                pub fn $name(self, value: impl Into<PropValue>) -> Self {
                    self.prop($key, value)
                }
            )*
        }
    };
}

prop_setters! {
    /// Text alignment of a Text/Heading (`left`, `center`, `right`)
    align => "align",
    /// Horizontal alignment of children
    align_horizontal => "alignHorizontal",
    /// Vertical alignment of children
    align_vertical => "alignVertical",
    /// Background color token
    background_color => "backgroundColor",
    /// Bottom border color token
    border_bottom_color => "borderBottomColor",
    /// Bottom border width token
    border_bottom_width => "borderBottomWidth",
    /// Left border color token
    border_left_color => "borderLeftColor",
    /// Left border width token
    border_left_width => "borderLeftWidth",
    /// Right border color token
    border_right_color => "borderRightColor",
    /// Right border width token
    border_right_width => "borderRightWidth",
    /// Top border color token
    border_top_color => "borderTopColor",
    /// Top border width token
    border_top_width => "borderTopWidth",
    /// Foreground color token
    color => "color",
    /// Gap between children
    gap => "gap",
    /// Height token, or a fraction like `2/5` on a Row
    height => "height",
    /// Icon name
    name => "name",
    /// Padding on all sides
    padding => "padding",
    /// Bottom padding
    padding_bottom => "paddingBottom",
    /// Left padding
    padding_left => "paddingLeft",
    /// Right padding
    padding_right => "paddingRight",
    /// Top padding
    padding_top => "paddingTop",
    /// Size token of a Text, Heading, Icon or Spacer
    size => "size",
    /// CSS text-align
    text_align => "textAlign",
    /// CSS text-transform
    text_transform => "textTransform",
    /// Letter spacing of a Text/Heading
    tracking => "tracking",
    /// Font weight of a Text/Heading
    weight => "weight",
    /// Width token, or a fraction like `1/4` on a Column
    width => "width",
    /// Wrapping: `true`/`false` on stacks, `true`/`balance` on text
    wrap => "wrap",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_directions() {
        assert_eq!(Component::Columns.direction(), Some(Direction::Vertical));
        assert_eq!(Component::Column.direction(), Some(Direction::Vertical));
        assert_eq!(Component::HStack.direction(), Some(Direction::Vertical));
        assert_eq!(Component::Rows.direction(), Some(Direction::Horizontal));
        assert_eq!(Component::Row.direction(), Some(Direction::Horizontal));
        assert_eq!(Component::VStack.direction(), Some(Direction::Horizontal));
        assert_eq!(Component::Box.direction(), None);
        assert_eq!(Component::Text.direction(), None);
    }

    #[test]
    fn test_builder() {
        let el = Element::new(Component::Row)
            .background_color("black")
            .height("2/5")
            .grow()
            .child(Element::new(Component::Heading).text("Goal"))
            .text("!");

        assert_eq!(el.get("backgroundColor"), Some(&PropValue::from("black")));
        assert_eq!(el.get("height").and_then(PropValue::as_token), Some("2/5"));
        assert!(el.grow);
        assert_eq!(el.children.len(), 2);
        assert_eq!(el.text_content(), "Goal!");
    }

    #[test]
    fn test_custom_prop() {
        let el = Element::new(Component::Box).custom("height", "1px");
        assert_eq!(el.get("height"), Some(&PropValue::custom("1px")));
    }

    #[test]
    fn test_element_json() {
        let el: Element = serde_json::from_str(
            r#"{"component":"Text","props":{"size":"32","color":{"custom":"red"}},"children":["hi"]}"#,
        )
        .unwrap();
        assert_eq!(el.component, Component::Text);
        assert_eq!(el.get("color"), Some(&PropValue::custom("red")));
        assert_eq!(el.children, vec![Child::Text("hi".to_string())]);
        assert!(!el.grow);
    }
}

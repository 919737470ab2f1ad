//! Flexbox layout of a compiled node tree
//!
//! Each [`Node`] becomes a taffy node whose style is read from the compiled
//! style bag. Text runs become measured leaves. The result is a
//! [`LayoutBox`] tree mirroring the input, with absolute positions filled in
//! after [`compute`].

use crate::fonts::FontSet;
use crate::text::{layout_text, parse_px, TextLayout, TextStyle};
use crate::{RenderError, Result};
use frame_ui::{Node, NodeChild, Style, Tag};
use taffy::prelude::*;

/// Measured leaf payload
#[derive(Debug, Clone)]
pub enum Leaf {
    /// Text run with its inherited style
    Text {
        /// Content before case mapping
        text: String,
        /// Inherited text style
        style: TextStyle,
    },
}

/// Positioned box
#[derive(Debug, Clone)]
pub struct LayoutBox {
    /// Absolute x of the border box
    pub x: f32,
    /// Absolute y of the border box
    pub y: f32,
    /// Border box width
    pub width: f32,
    /// Border box height
    pub height: f32,
    /// What to draw
    pub content: BoxContent,
    /// Children in paint order
    pub children: Vec<LayoutBox>,
}

/// Paintable content of a box
#[derive(Debug, Clone)]
pub enum BoxContent {
    /// A `div` or `img`
    Element {
        /// Compiled style of the node
        style: Style,
        /// Image source for `img`
        src: Option<String>,
    },
    /// A text run
    Text {
        /// Wrapped lines
        layout: TextLayout,
        /// Inherited text style
        style: TextStyle,
    },
}

// =============================================================================
// Style mapping
// =============================================================================

fn dimension(value: &str) -> Option<Dimension> {
    let value = value.trim();
    if value == "auto" {
        return Some(Dimension::Auto);
    }
    if let Some(pct) = value.strip_suffix('%') {
        return pct.trim().parse::<f32>().ok().map(|p| Dimension::Percent(p / 100.0));
    }
    parse_px(value).map(Dimension::Length)
}

fn length_percentage(value: &str) -> Option<LengthPercentage> {
    match dimension(value)? {
        Dimension::Length(px) => Some(LengthPercentage::Length(px)),
        Dimension::Percent(p) => Some(LengthPercentage::Percent(p)),
        Dimension::Auto => None,
    }
}

fn length_percentage_auto(value: &str) -> Option<LengthPercentageAuto> {
    match dimension(value)? {
        Dimension::Length(px) => Some(LengthPercentageAuto::Length(px)),
        Dimension::Percent(p) => Some(LengthPercentageAuto::Percent(p)),
        Dimension::Auto => Some(LengthPercentageAuto::Auto),
    }
}

fn number(style: &Style, key: &str) -> Option<f32> {
    style
        .get(key)
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

/// Shorthand with optional per-side overrides, e.g. `padding` + `paddingTop`
fn sides<T: Copy>(
    style: &Style,
    shorthand: &str,
    prefix: &str,
    suffix: &str,
    parse: fn(&str) -> Option<T>,
    zero: T,
) -> Rect<T> {
    let all = style.get(shorthand).and_then(parse).unwrap_or(zero);
    let side = |name: &str| {
        style
            .get(&format!("{}{}{}", prefix, name, suffix))
            .and_then(parse)
            .unwrap_or(all)
    };
    Rect {
        left: side("Left"),
        right: side("Right"),
        top: side("Top"),
        bottom: side("Bottom"),
    }
}

fn align_items(value: &str) -> Option<AlignItems> {
    match value {
        "flex-start" | "start" => Some(AlignItems::FlexStart),
        "flex-end" | "end" => Some(AlignItems::FlexEnd),
        "center" => Some(AlignItems::Center),
        "baseline" => Some(AlignItems::Baseline),
        "stretch" => Some(AlignItems::Stretch),
        _ => None,
    }
}

fn align_content(value: &str) -> Option<AlignContent> {
    match value {
        "flex-start" | "start" => Some(AlignContent::FlexStart),
        "flex-end" | "end" => Some(AlignContent::FlexEnd),
        "center" => Some(AlignContent::Center),
        "stretch" => Some(AlignContent::Stretch),
        "space-between" => Some(AlignContent::SpaceBetween),
        "space-around" => Some(AlignContent::SpaceAround),
        "space-evenly" => Some(AlignContent::SpaceEvenly),
        _ => None,
    }
}

/// Map a compiled style bag onto a taffy style
pub fn taffy_style(style: &Style) -> taffy::Style {
    let mut out = taffy::Style {
        display: match style.get("display") {
            Some("none") => Display::None,
            _ => Display::Flex,
        },
        flex_direction: match style.get("flexDirection") {
            Some("row") => FlexDirection::Row,
            Some("row-reverse") => FlexDirection::RowReverse,
            Some("column-reverse") => FlexDirection::ColumnReverse,
            _ => FlexDirection::Column,
        },
        flex_wrap: match style.get("flexWrap") {
            Some("wrap") => FlexWrap::Wrap,
            Some("wrap-reverse") => FlexWrap::WrapReverse,
            _ => FlexWrap::NoWrap,
        },
        position: match style.get("position") {
            Some("absolute") => Position::Absolute,
            _ => Position::Relative,
        },
        ..Default::default()
    };

    // `flex: <n>` is grow n, shrink 1, basis 0
    if let Some(flex) = number(style, "flex") {
        out.flex_grow = flex;
        out.flex_shrink = 1.0;
        out.flex_basis = Dimension::Length(0.0);
    }
    if let Some(grow) = number(style, "flexGrow") {
        out.flex_grow = grow;
    }
    if let Some(shrink) = number(style, "flexShrink") {
        out.flex_shrink = shrink;
    }
    if let Some(basis) = style.get("flexBasis").and_then(dimension) {
        out.flex_basis = basis;
    }

    let size = |key: &str| style.get(key).and_then(dimension).unwrap_or(Dimension::Auto);
    out.size = Size {
        width: size("width"),
        height: size("height"),
    };
    out.min_size = Size {
        width: size("minWidth"),
        height: size("minHeight"),
    };
    out.max_size = Size {
        width: size("maxWidth"),
        height: size("maxHeight"),
    };

    let zero = LengthPercentage::Length(0.0);
    out.padding = sides(style, "padding", "padding", "", length_percentage, zero);
    out.border = sides(style, "borderWidth", "border", "Width", length_percentage, zero);
    out.margin = sides(
        style,
        "margin",
        "margin",
        "",
        length_percentage_auto,
        LengthPercentageAuto::Length(0.0),
    );
    out.inset = Rect {
        left: style.get("left").and_then(length_percentage_auto).unwrap_or(LengthPercentageAuto::Auto),
        right: style.get("right").and_then(length_percentage_auto).unwrap_or(LengthPercentageAuto::Auto),
        top: style.get("top").and_then(length_percentage_auto).unwrap_or(LengthPercentageAuto::Auto),
        bottom: style.get("bottom").and_then(length_percentage_auto).unwrap_or(LengthPercentageAuto::Auto),
    };

    let gap = style.get("gap").and_then(length_percentage).unwrap_or(zero);
    out.gap = Size {
        width: style.get("columnGap").and_then(length_percentage).unwrap_or(gap),
        height: style.get("rowGap").and_then(length_percentage).unwrap_or(gap),
    };

    out.align_items = style.get("alignItems").and_then(align_items);
    out.align_self = style.get("alignSelf").and_then(align_items);
    out.align_content = style.get("alignContent").and_then(align_content);
    out.justify_content = style.get("justifyContent").and_then(align_content);

    out
}

// =============================================================================
// Tree building
// =============================================================================

enum Pending {
    Element {
        id: NodeId,
        style: Style,
        src: Option<String>,
        children: Vec<Pending>,
    },
    Text {
        id: NodeId,
        style: TextStyle,
    },
}

fn build(
    tree: &mut TaffyTree<Leaf>,
    node: &Node,
    inherited: &TextStyle,
) -> Result<Pending> {
    let text_style = inherited.inherit(&node.style);
    let mut children = Vec::new();

    if node.tag == Tag::Div {
        for child in &node.children {
            match child {
                NodeChild::Node(inner) => children.push(build(tree, inner, &text_style)?),
                NodeChild::Text(text) => {
                    let id = tree
                        .new_leaf_with_context(
                            taffy::Style::default(),
                            Leaf::Text {
                                text: text.clone(),
                                style: text_style.clone(),
                            },
                        )
                        .map_err(|e| RenderError::Layout(e.to_string()))?;
                    children.push(Pending::Text {
                        id,
                        style: text_style.clone(),
                    });
                }
            }
        }
    }

    let ids: Vec<NodeId> = children
        .iter()
        .map(|c| match c {
            Pending::Element { id, .. } | Pending::Text { id, .. } => *id,
        })
        .collect();
    let id = tree
        .new_with_children(taffy_style(&node.style), &ids)
        .map_err(|e| RenderError::Layout(e.to_string()))?;

    Ok(Pending::Element {
        id,
        style: node.style.clone(),
        src: node.src.clone(),
        children,
    })
}

fn measure(
    known: Size<Option<f32>>,
    available: Size<AvailableSpace>,
    leaf: Option<&mut Leaf>,
    fonts: &FontSet,
) -> Size<f32> {
    let Some(Leaf::Text { text, style }) = leaf else {
        return Size::ZERO;
    };
    let Some(font) = style.font(fonts) else {
        return Size::ZERO;
    };

    let max_width = known.width.or(match available.width {
        AvailableSpace::Definite(w) => Some(w),
        AvailableSpace::MinContent => Some(0.0),
        AvailableSpace::MaxContent => None,
    });
    let layout = layout_text(font, text, style, max_width);

    Size {
        width: known.width.unwrap_or(layout.width.ceil()),
        height: known.height.unwrap_or(layout.height()),
    }
}

fn place(
    tree: &TaffyTree<Leaf>,
    pending: Pending,
    origin: (f32, f32),
    fonts: &FontSet,
) -> Result<Option<LayoutBox>> {
    let id = match &pending {
        Pending::Element { id, .. } | Pending::Text { id, .. } => *id,
    };
    let layout = tree.layout(id).map_err(|e| RenderError::Layout(e.to_string()))?;
    let x = origin.0 + layout.location.x;
    let y = origin.1 + layout.location.y;
    let (width, height) = (layout.size.width, layout.size.height);

    match pending {
        Pending::Element {
            style,
            src,
            children,
            ..
        } => {
            if style.get("display") == Some("none") {
                return Ok(None);
            }
            let mut placed = Vec::with_capacity(children.len());
            for child in children {
                if let Some(child) = place(tree, child, (x, y), fonts)? {
                    placed.push(child);
                }
            }
            Ok(Some(LayoutBox {
                x,
                y,
                width,
                height,
                content: BoxContent::Element { style, src },
                children: placed,
            }))
        }
        Pending::Text { style, .. } => {
            let Some(font) = style.font(fonts) else {
                return Ok(None);
            };
            let text = match tree.get_node_context(id) {
                Some(Leaf::Text { text, .. }) => text.clone(),
                None => return Ok(None),
            };
            let layout = layout_text(font, &text, &style, Some(width.max(1.0)));
            Ok(Some(LayoutBox {
                x,
                y,
                width,
                height,
                content: BoxContent::Text { layout, style },
                children: Vec::new(),
            }))
        }
    }
}

/// Lay a node tree out inside a `width` x `height` frame
pub fn compute(
    node: &Node,
    fonts: &FontSet,
    width: f32,
    height: f32,
    base: &TextStyle,
) -> Result<LayoutBox> {
    let mut tree: TaffyTree<Leaf> = TaffyTree::new();
    let content = build(&mut tree, node, base)?;
    let content_id = match &content {
        Pending::Element { id, .. } | Pending::Text { id, .. } => *id,
    };

    let root = tree
        .new_with_children(
            taffy::Style {
                size: Size {
                    width: length(width),
                    height: length(height),
                },
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            &[content_id],
        )
        .map_err(|e| RenderError::Layout(e.to_string()))?;

    tree.compute_layout_with_measure(
        root,
        Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        },
        |known, available, _id, leaf| measure(known, available, leaf, fonts),
    )
    .map_err(|e| RenderError::Layout(e.to_string()))?;

    let placed = place(&tree, content, (0.0, 0.0), fonts)?;
    Ok(LayoutBox {
        x: 0.0,
        y: 0.0,
        width,
        height,
        content: BoxContent::Element {
            style: Style::new(),
            src: None,
        },
        children: placed.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(entries: &[(&str, &str)]) -> Style {
        entries
            .iter()
            .fold(Style::new(), |style, (k, v)| style.with(*k, *v))
    }

    #[test]
    fn test_flex_shorthand() {
        let style = taffy_style(&bag(&[("flex", "0.25")]));
        assert_eq!(style.flex_grow, 0.25);
        assert_eq!(style.flex_shrink, 1.0);
        assert_eq!(style.flex_basis, Dimension::Length(0.0));

        let style = taffy_style(&bag(&[("flex", "NaN")]));
        assert_eq!(style.flex_grow, 0.0);
    }

    #[test]
    fn test_dimensions() {
        let style = taffy_style(&bag(&[("width", "100%"), ("height", "24px")]));
        assert_eq!(style.size.width, Dimension::Percent(1.0));
        assert_eq!(style.size.height, Dimension::Length(24.0));
    }

    #[test]
    fn test_side_overrides() {
        let style = taffy_style(&bag(&[
            ("padding", "8px"),
            ("paddingLeft", "12px"),
            ("borderTopWidth", "4px"),
        ]));
        assert_eq!(style.padding.left, LengthPercentage::Length(12.0));
        assert_eq!(style.padding.right, LengthPercentage::Length(8.0));
        assert_eq!(style.border.top, LengthPercentage::Length(4.0));
        assert_eq!(style.border.bottom, LengthPercentage::Length(0.0));
    }

    #[test]
    fn test_alignment() {
        let style = taffy_style(&bag(&[
            ("flexDirection", "row"),
            ("alignItems", "center"),
            ("justifyContent", "space-between"),
            ("flexWrap", "wrap"),
        ]));
        assert_eq!(style.flex_direction, FlexDirection::Row);
        assert_eq!(style.flex_wrap, FlexWrap::Wrap);
        assert_eq!(style.align_items, Some(AlignItems::Center));
        assert_eq!(style.justify_content, Some(JustifyContent::SpaceBetween));
    }

    #[test]
    fn test_rows_split_frame_height() {
        let row = |flex: &str| Node::div(bag(&[("display", "flex"), ("flex", flex)]));
        let mut rows = Node::div(bag(&[
            ("display", "flex"),
            ("flexDirection", "column"),
            ("height", "100%"),
            ("flexGrow", "1"),
        ]));
        rows.push(NodeChild::Node(row("0.4")));
        rows.push(NodeChild::Node(row("0.4")));
        rows.push(NodeChild::Node(row("0.2")));

        let laid = compute(&rows, &FontSet::new(), 1200.0, 630.0, &TextStyle::default()).unwrap();
        let rows_box = &laid.children[0];
        assert_eq!(rows_box.width, 1200.0);
        assert_eq!(rows_box.height, 630.0);

        let heights: Vec<f32> = rows_box.children.iter().map(|b| b.height.round()).collect();
        assert_eq!(heights, vec![252.0, 252.0, 126.0]);
        assert_eq!(rows_box.children[2].y.round(), 504.0);
    }

    #[test]
    fn test_text_without_fonts_is_dropped() {
        let mut node = Node::div(Style::new());
        node.push(NodeChild::Text("hello".to_string()));
        let laid = compute(&node, &FontSet::new(), 100.0, 100.0, &TextStyle::default()).unwrap();
        assert!(laid.children[0].children.is_empty());
    }
}

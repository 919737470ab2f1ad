//! Declarative UI layer for frame images
//!
//! This crate provides the small design system the frame images are built
//! with: a token table ([`vars`]), a resolver that turns token props into
//! concrete CSS values ([`style`]), and a set of flex layout primitives
//! ([`components`]) that compile into a [`node::Node`] tree.
//!
//! # Design System
//!
//! Every visual prop is either a token key looked up in the active
//! [`vars::Vars`] or a `{custom: value}` literal:
//! - Colors resolve to the hex string in the color table
//! - Units resolve to `scale * base` pixels, where the default scale maps
//!   `n` to `n / 1200`
//! - `"100%"` always passes through
//!
//! Two themes ship:
//! - [`vars::ThemeName::Speedball`] - Jersey 15 on black with teal, blue and orange
//! - [`vars::ThemeName::Yeet`] - Poppins with a pastel palette
//!
//! # Modules
//!
//! - [`vars`] - Token tables and themes
//! - [`style`] - Token resolvers and box style compilation
//! - [`element`] - Declarative element tree
//! - [`components`] - Layout primitives and rendering
//! - [`node`] - Compiled node tree and HTML markup
//! - [`icons`] - Icon collections
//!
//! # Example
//!
//! ```rust
//! use frame_ui::components::{heading, render, rows, row};
//! use frame_ui::vars::{get_vars, ThemeName};
//!
//! let vars = get_vars(ThemeName::Speedball);
//! let tree = rows().grow().child(
//!     row().height("2/5").background_color("black").child(heading().text("Goal")),
//! );
//!
//! let node = render(&tree, &vars).unwrap();
//! assert!(node.to_html().contains("Goal"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod element;
pub mod icons;
pub mod node;
pub mod style;
pub mod vars;

// Re-export commonly used types
pub use components::{render, UiError};
pub use element::{Child, Component, Direction, Element};
pub use node::{Node, NodeChild, Tag};
pub use style::{
    compile_box_style, resolve_color_token, resolve_unit_token, PropValue, Props, Style,
};
pub use vars::{
    create_system, default_vars, get_vars, FontSource, FontSpec, FrameSize, ThemeName, Unit,
    Vars, VarsOverrides,
};

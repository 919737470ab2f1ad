//! Speedball presale domain
//!
//! Everything a campaign frame needs that is not HTTP: the subgraph record
//! shapes and queries, the data source seam, the presale state decision,
//! the frame image layouts and the contribution transaction.
//!
//! # Flow
//!
//! 1. [`source::YeeterSource::yeeter`] fetches the campaign record
//! 2. [`model::Yeeter::is_active_at`] checks the sale window
//! 3. [`source::YeeterSource::dao_profile`] fetches the DAO name
//! 4. [`presale::load_presale`] folds the results into a [`Presale`]
//! 5. [`views::presale_element`] lays the frame image out
//!
//! # Example
//!
//! ```rust
//! use frame_ui::vars::{get_vars, ThemeName};
//! use yeet_core::{views, Presale};
//!
//! let element = views::presale_element(&Presale::NotFound);
//! let node = frame_ui::render(&element, &get_vars(ThemeName::Speedball)).unwrap();
//! assert!(node.to_html().contains("Stash Not Found"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod contribution;
pub mod dates;
pub mod model;
pub mod presale;
pub mod queries;
pub mod source;
pub mod views;

// Re-export commonly used types
pub use contribution::contribution_call;
pub use model::{DaoRecord, ProfileContent, Yeeter, YeeterDao};
pub use presale::{load_presale, now_seconds, ActivePresale, Presale};
pub use source::{SourceError, SubgraphSource, YeeterSource};

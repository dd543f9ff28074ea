//! # Frames
//!
//! Frame-based semantic networks with single-parent attribute inheritance.
//!
//! A frame has a name, an optional superset (its more general parent), the
//! attributes it declares itself, and an inherited view resolved from its
//! ancestors when it is constructed. The most specific declaration always
//! wins: a frame's own attributes shadow anything it would inherit.
//!
//! ## Architecture
//!
//! - **Hierarchy model**: [`FrameNetwork`] is an arena of [`Frame`]s linked
//!   by [`FrameId`]; construction resolves inheritance one level at a time
//! - **Taxonomies**: [`Taxonomy`] definitions load and save networks as JSON
//! - **Formatter**: [`describe`], [`report`], [`outline`] and [`views`]
//!   render resolved frames for presentation layers
//!
//! ```
//! use frames::{sample, FrameNetwork};
//!
//! let net = FrameNetwork::from_taxonomy(&sample::animal_kingdom()).unwrap();
//! let ostrich = net.by_name("Ostrich").unwrap();
//!
//! assert_eq!(ostrich.resolved_attribute("flies"), Some("No"));
//! assert_eq!(ostrich.resolved_attribute("hasSkin"), Some("Yes"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod describe;
pub mod error;
pub mod frame;
pub mod network;
pub mod sample;
pub mod taxonomy;

// Re-export main types
pub use describe::{describe, outline, report, view, views, FrameView, Outline, Report, Row, Section};
pub use error::{FrameError, Result};
pub use frame::{attributes, Attributes, Frame, FrameId, Origin, Resolved};
pub use network::{Ancestors, FrameNetwork};
pub use taxonomy::{FrameDefinition, Taxonomy};

/// Frames version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

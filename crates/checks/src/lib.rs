//! # checks - declarative layout and style assertions
//!
//! Asserts that a stylesheet declares specific values for specific
//! selectors, and that rendered element rectangles relate to each other
//! within tolerances. Nothing is computed here: declarations are read as
//! written (or as already computed by a host) and geometry is read from
//! rectangles a renderer reported.
//!
//! ## Quick Start
//!
//! ```rust
//! use checks::{Checker, StyleChecker, single_sheet};
//!
//! let sheets = [sheet::parse_stylesheet(
//!     "footer > ul { display: flex; column-gap: 24px; justify-content: center; }",
//! )
//! .unwrap()];
//! let sheet = single_sheet(&sheets).unwrap();
//!
//! StyleChecker::new("footer > ul", sheet)
//!     .eq("display", "flex")
//!     .and_then(|c| c.compound("column-gap", [Checker::px(16.0, 32.0)]))
//!     .and_then(|c| c.eq("justify-content", "center"))
//!     .expect("footer list is a centered flex row");
//! ```
//!
//! ## Modules
//!
//! - [`checker`]: Value checkers and the [`Check`] capability
//! - [`style`]: [`StyleChecker`], the fluent per-selector entry point
//! - [`index`]: Rule lookup and the [`StyleSource`] seam hosts implement
//! - [`value`]: Pixel length tokens
//! - [`geometry`]: Rectangle probes
//! - [`error`]: Failure types

pub mod checker;
pub mod error;
pub mod geometry;
pub mod index;
pub mod style;
pub mod value;

pub use checker::{
    Check, Checker, CompoundChecker, ConstantChecker, GridAreaChecker, GridTemplate, ValueChecker,
};
pub use error::{AssertionError, CheckError, GeometryError};
pub use geometry::{ElementBox, Point, Rect};
pub use index::{StyleRule, StyleSource, resolve, single_sheet};
pub use style::StyleChecker;
pub use value::{Unit, ValueToken};

//! Layout and style assertions for rendered documents.
//!
//! Re-exports the two workspace crates:
//!
//! - [`sheet`]: parses CSS source into rules with raw declarations
//! - [`checks`]: asserts declarations and element geometry
//!
//! ```rust
//! use stylecheck::{StyleChecker, parse_stylesheet};
//!
//! let sheet = parse_stylesheet("main { display: flex; flex-wrap: wrap; }").unwrap();
//! StyleChecker::new("main", &sheet)
//!     .eq("display", "flex")
//!     .and_then(|c| c.eq("flex-wrap", "wrap"))
//!     .unwrap();
//! ```

pub use checks::*;
pub use sheet::{self, SheetError, StyleSheet, parse_stylesheet};

//! # sheet - CSS rule extraction
//!
//! Turns CSS source text into an ordered list of rules, each holding its
//! canonical selector text and its declarations as raw value strings.
//! Nothing is cascaded or computed: the output is what an assertion engine
//! reads when it asks "what does this selector declare for this property?".
//!
//! ## Quick Start
//!
//! ```rust
//! use sheet::parse_stylesheet;
//!
//! let source = r#"
//!     body {
//!         display: grid;
//!         grid-template-rows: 64px auto 64px;
//!     }
//!
//!     footer > ul {
//!         column-gap: 16px;
//!     }
//! "#;
//!
//! let stylesheet = parse_stylesheet(source).expect("valid CSS");
//! assert_eq!(stylesheet.rules.len(), 2);
//! assert_eq!(stylesheet.rules[1].selector_text(), "footer > ul");
//! ```
//!
//! ## Supported Features
//!
//! ### Selectors
//! - Type, class, ID and universal selectors
//! - Pseudo-classes, functional pseudo-classes and pseudo-elements
//! - Attribute selectors: `[href]`, `[target=_blank]`
//! - Combinators: descendant, child `>`, adjacent `+`, general sibling `~`
//! - Selector lists: `header, footer`
//!
//! ### Declarations
//! - Raw values with whitespace collapsed outside quoted strings
//! - `!important` stripped and recorded
//!
//! ### Skipped
//! - Block comments
//! - At-rules (`@media`, `@import`, ...)
//!
//! ## Modules
//!
//! - [`parser`]: Parsing and stylesheet data structures
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod parser;

pub use error::SheetError;
pub use parser::{Declaration, Rule, StyleSheet, load_stylesheet, parse_stylesheet};

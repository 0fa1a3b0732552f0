//! Declaration value checkers.
//!
//! Every checker reads one raw declaration string and either accepts it or
//! returns the [`CheckError`] describing the first thing that was wrong:
//!
//! - [`ConstantChecker`]: exact keyword or string (`grid`, `auto`)
//! - [`ValueChecker`]: pixel length inside an inclusive range
//! - [`CompoundChecker`]: whitespace-separated shorthand, one checker per token
//! - [`GridAreaChecker`]: `grid-template-areas` matrix
//!
//! [`Checker`] is the closed set of all of them, so heterogeneous lists such
//! as the sub-checkers of a compound check can be built directly:
//!
//! ```rust
//! use checks::{Check, Checker};
//!
//! let rows = Checker::compound([
//!     Checker::px(64.0, 128.0),
//!     Checker::constant("auto"),
//!     Checker::px(64.0, 128.0),
//! ]);
//! assert!(rows.verify("64px auto 64px").is_ok());
//! ```

pub mod compound;
pub mod constant;
pub mod grid;
pub mod range;

pub use compound::CompoundChecker;
pub use constant::ConstantChecker;
pub use grid::{GridAreaChecker, GridTemplate};
pub use range::ValueChecker;

use crate::error::CheckError;

/// Verifies a raw declaration value.
pub trait Check {
    fn verify(&self, raw: &str) -> Result<(), CheckError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Checker {
    Constant(ConstantChecker),
    Value(ValueChecker),
    Compound(CompoundChecker),
    GridArea(GridAreaChecker),
}

impl Checker {
    pub fn constant(expected: impl Into<String>) -> Self {
        Checker::Constant(ConstantChecker::new(expected))
    }

    pub fn px(min: f64, max: f64) -> Self {
        Checker::Value(ValueChecker::new(min, max))
    }

    pub fn compound(checkers: impl IntoIterator<Item = Checker>) -> Self {
        Checker::Compound(CompoundChecker::new(checkers))
    }
}

impl Check for Checker {
    fn verify(&self, raw: &str) -> Result<(), CheckError> {
        match self {
            Checker::Constant(c) => c.verify(raw),
            Checker::Value(c) => c.verify(raw),
            Checker::Compound(c) => c.verify(raw),
            Checker::GridArea(c) => c.verify(raw),
        }
    }
}

impl From<ConstantChecker> for Checker {
    fn from(checker: ConstantChecker) -> Self {
        Checker::Constant(checker)
    }
}

impl From<ValueChecker> for Checker {
    fn from(checker: ValueChecker) -> Self {
        Checker::Value(checker)
    }
}

impl From<CompoundChecker> for Checker {
    fn from(checker: CompoundChecker) -> Self {
        Checker::Compound(checker)
    }
}

impl From<GridAreaChecker> for Checker {
    fn from(checker: GridAreaChecker) -> Self {
        Checker::GridArea(checker)
    }
}

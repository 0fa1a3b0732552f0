//! Fluent assertions over one rule of a stylesheet.
//!
//! ```rust
//! use checks::{AssertionError, Checker, GridAreaChecker, StyleChecker};
//!
//! # fn main() -> Result<(), AssertionError> {
//! let sheet = sheet::parse_stylesheet(
//!     r#"body {
//!         display: grid;
//!         grid-template-rows: 64px auto 64px;
//!         grid-template-areas: "h h" "n m" "f f";
//!     }"#,
//! )
//! .unwrap();
//!
//! StyleChecker::new("body", &sheet)
//!     .eq("display", "grid")?
//!     .compound(
//!         "grid-template-rows",
//!         [Checker::px(64.0, 128.0), Checker::constant("auto"), Checker::px(64.0, 128.0)],
//!     )?
//!     .single(
//!         "grid-template-areas",
//!         GridAreaChecker::new(3, 2, [["h", "h"], ["n", "m"], ["f", "f"]]),
//!     )?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use once_cell::unsync::OnceCell;

use crate::checker::{Check, Checker, CompoundChecker, ConstantChecker};
use crate::error::AssertionError;
use crate::index::{StyleRule, StyleSource, resolve};

/// Binds a selector to a stylesheet and checks the declarations of its rule.
///
/// The rule is looked up on the first assertion and reused by every later
/// call on the same checker. Each assertion returns the checker again so
/// calls chain with `?`; the first failure ends the chain.
pub struct StyleChecker<'s, S: StyleSource> {
    selector: String,
    sheet: &'s S,
    rule: OnceCell<&'s S::Rule>,
}

impl<'s, S: StyleSource> StyleChecker<'s, S> {
    pub fn new(selector: impl Into<String>, sheet: &'s S) -> Self {
        Self {
            selector: selector.into(),
            sheet,
            rule: OnceCell::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Asserts that `property` is exactly `expected`.
    pub fn eq(&self, property: &str, expected: impl Into<String>) -> Result<&Self, AssertionError> {
        self.check(property, &ConstantChecker::new(expected))
    }

    /// Asserts a shorthand `property` token by token.
    pub fn compound(
        &self,
        property: &str,
        checkers: impl IntoIterator<Item = Checker>,
    ) -> Result<&Self, AssertionError> {
        self.check(property, &CompoundChecker::new(checkers))
    }

    /// Hands the whole value of `property` to one checker.
    pub fn single(
        &self,
        property: &str,
        checker: impl Into<Checker>,
    ) -> Result<&Self, AssertionError> {
        self.check(property, &checker.into())
    }

    /// Runs any [`Check`] against the raw value of `property`.
    pub fn check(&self, property: &str, checker: &impl Check) -> Result<&Self, AssertionError> {
        let actual = self.declaration(property)?;
        log::trace!("checking `{} {{ {property}: {actual} }}`", self.selector);

        checker
            .verify(actual)
            .map_err(|source| AssertionError::Check {
                selector: self.selector.clone(),
                property: property.to_string(),
                actual: actual.to_string(),
                source,
            })?;
        Ok(self)
    }

    /// The raw value the bound rule declares for `property`.
    pub fn declaration(&self, property: &str) -> Result<&'s str, AssertionError> {
        self.rule()?
            .property_value(property)
            .ok_or_else(|| AssertionError::MissingProperty {
                selector: self.selector.clone(),
                property: property.to_string(),
            })
    }

    fn rule(&self) -> Result<&'s S::Rule, AssertionError> {
        self.rule
            .get_or_try_init(|| resolve(&self.selector, self.sheet))
            .copied()
    }
}

impl<S: StyleSource> fmt::Debug for StyleChecker<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleChecker")
            .field("selector", &self.selector)
            .field("resolved", &self.rule.get().is_some())
            .finish()
    }
}

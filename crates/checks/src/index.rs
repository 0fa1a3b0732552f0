//! Rule lookup by selector text.
//!
//! This is not a cascade. A stylesheet is expected to carry one rule per
//! selector string; when several rules share the exact text the first one
//! in document order is used and the rest are ignored.

use std::borrow::Cow;

use crate::error::AssertionError;

/// One rule of a stylesheet as seen by the checkers.
pub trait StyleRule {
    /// The rule's selector text, compared verbatim against requested selectors.
    fn selector_text(&self) -> Cow<'_, str>;

    /// The raw declaration for `property`, or `None` when the rule does not set it.
    fn property_value(&self, property: &str) -> Option<&str>;
}

/// A read-only, ordered collection of rules.
pub trait StyleSource {
    type Rule: StyleRule;

    fn rules(&self) -> &[Self::Rule];
}

impl StyleRule for sheet::Rule {
    fn selector_text(&self) -> Cow<'_, str> {
        Cow::Owned(sheet::Rule::selector_text(self))
    }

    fn property_value(&self, property: &str) -> Option<&str> {
        sheet::Rule::property_value(self, property)
    }
}

impl StyleSource for sheet::StyleSheet {
    type Rule = sheet::Rule;

    fn rules(&self) -> &[sheet::Rule] {
        &self.rules
    }
}

/// Finds the rule whose selector text equals `selector`.
///
/// Surrounding whitespace in `selector` is ignored. Fails with
/// [`AssertionError::NoMatchingRule`] when nothing matches.
pub fn resolve<'s, S: StyleSource>(
    selector: &str,
    sheet: &'s S,
) -> Result<&'s S::Rule, AssertionError> {
    let selector = selector.trim();
    let mut matches = sheet
        .rules()
        .iter()
        .filter(|rule| rule.selector_text() == selector);

    let Some(rule) = matches.next() else {
        log::debug!("no rule for selector `{selector}`");
        return Err(AssertionError::NoMatchingRule {
            selector: selector.to_string(),
        });
    };

    let shadowed = matches.count();
    if shadowed > 0 {
        log::warn!("selector `{selector}` has {shadowed} further rule(s); using the first");
    } else {
        log::debug!("resolved selector `{selector}`");
    }
    Ok(rule)
}

/// Returns the only stylesheet of a document.
///
/// Assertions read from a single active stylesheet; a document with none
/// or several fails with [`AssertionError::SheetCountMismatch`].
pub fn single_sheet<S>(sheets: &[S]) -> Result<&S, AssertionError> {
    match sheets {
        [sheet] => Ok(sheet),
        _ => Err(AssertionError::SheetCountMismatch {
            expected: 1,
            actual: sheets.len(),
        }),
    }
}

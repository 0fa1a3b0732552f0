use crate::checker::{Check, Checker};
use crate::error::CheckError;

/// Shorthand declaration split on whitespace, one sub-checker per token.
///
/// `grid-template-rows: 64px auto 64px` is checked with three sub-checkers,
/// the first against `64px`, the second against `auto` and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundChecker {
    checkers: Vec<Checker>,
}

impl CompoundChecker {
    pub fn new(checkers: impl IntoIterator<Item = Checker>) -> Self {
        Self {
            checkers: checkers.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl Check for CompoundChecker {
    fn verify(&self, raw: &str) -> Result<(), CheckError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() != self.checkers.len() {
            return Err(CheckError::TokenCountMismatch {
                expected: self.checkers.len(),
                actual: tokens.len(),
            });
        }

        for (index, (checker, token)) in self.checkers.iter().zip(&tokens).enumerate() {
            checker
                .verify(token)
                .map_err(|source| CheckError::CompoundToken {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}

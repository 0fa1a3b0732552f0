use crate::checker::Check;
use crate::error::CheckError;

/// Exact, case-sensitive match against a constant.
///
/// Only the outer edges of the raw value are trimmed; `h / h` and `h/h`
/// are different values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantChecker {
    expected: String,
}

impl ConstantChecker {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl Check for ConstantChecker {
    fn verify(&self, raw: &str) -> Result<(), CheckError> {
        let actual = raw.trim();
        if actual == self.expected {
            Ok(())
        } else {
            Err(CheckError::ValueMismatch {
                expected: self.expected.clone(),
                actual: actual.to_string(),
            })
        }
    }
}

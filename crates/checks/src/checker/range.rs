use crate::checker::Check;
use crate::error::CheckError;
use crate::value::ValueToken;

/// Pixel length within an inclusive `[min, max]` range.
///
/// A range with `min > max` accepts nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChecker {
    min: f64,
    max: f64,
}

impl ValueChecker {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Accepts exactly `value` pixels.
    pub fn exact(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Check for ValueChecker {
    fn verify(&self, raw: &str) -> Result<(), CheckError> {
        let token = ValueToken::parse(raw)?;
        if (self.min..=self.max).contains(&token.magnitude) {
            Ok(())
        } else {
            Err(CheckError::ValueOutOfRange {
                value: token.magnitude,
                min: self.min,
                max: self.max,
            })
        }
    }
}

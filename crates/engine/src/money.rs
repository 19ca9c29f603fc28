use std::{fmt, ops::Neg, str::FromStr};

use crate::LedgerError;

/// Whole-unit peso amount backed by a signed integer.
///
/// Use this type for **all** monetary values in the engine (balances, day
/// totals, movement amounts) to avoid floating-point drift. Amounts carry no
/// fractional part: one unit is one peso.
///
/// The value is signed:
/// - positive = income / increase
/// - negative = expense / decrease
///
/// # Examples
///
/// ```rust
/// use engine::Pesos;
///
/// let amount = Pesos::new(12_000);
/// assert_eq!(amount.pesos(), 12000);
/// assert_eq!(amount.to_string(), "$ 12.000");
/// ```
///
/// Parsing from user input (`.` and `,` are grouping marks, never decimal
/// points):
///
/// ```rust
/// use engine::Pesos;
///
/// assert_eq!("12.000".parse::<Pesos>().unwrap().pesos(), 12000);
/// assert_eq!("12,5".parse::<Pesos>().unwrap().pesos(), 125);
/// assert!("12x".parse::<Pesos>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Pesos(i64);

impl Pesos {
    pub const ZERO: Pesos = Pesos(0);

    /// Creates a new amount from whole pesos.
    #[must_use]
    pub const fn new(pesos: i64) -> Self {
        Self(pesos)
    }

    /// Returns the raw value in pesos.
    #[must_use]
    pub const fn pesos(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Saturating addition (clamps at the `i64` bounds).
    #[must_use]
    pub const fn saturating_add(self, rhs: Pesos) -> Pesos {
        Pesos(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Pesos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.unsigned_abs().to_string();
        let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().rev().enumerate() {
            if i != 0 && i % 3 == 0 {
                reversed.push('.');
            }
            reversed.push(c);
        }
        let grouped: String = reversed.chars().rev().collect();
        write!(f, "$ {sign}{grouped}")
    }
}

impl Neg for Pesos {
    type Output = Pesos;

    fn neg(self) -> Self::Output {
        Pesos(-self.0)
    }
}

impl FromStr for Pesos {
    type Err = LedgerError;

    /// Parses user-entered numeric text into whole pesos.
    ///
    /// `.` and `,` are stripped as grouping marks; every other character must
    /// be an ASCII digit. At least one digit is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || LedgerError::InvalidAmount("empty amount".to_string());
        let invalid = || LedgerError::InvalidAmount("invalid amount".to_string());
        let overflow = || LedgerError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let mut digits = String::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            match c {
                '0'..='9' => digits.push(c),
                '.' | ',' => {}
                _ => return Err(invalid()),
            }
        }

        if digits.is_empty() {
            return Err(invalid());
        }

        let pesos: i64 = digits.parse().map_err(|_| overflow())?;
        Ok(Pesos(pesos))
    }
}

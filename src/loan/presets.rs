//! Default loan parameters per loan category

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::input::LoanInput;
use crate::error::CalcError;

/// Spread added to the preset rate for the default comparison loan
pub const COMPARISON_RATE_SPREAD: f64 = 0.5;

/// Loan categories with typical Indian retail terms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanPreset {
    #[default]
    Home,
    Car,
    Personal,
}

impl LoanPreset {
    pub const ALL: [LoanPreset; 3] = [LoanPreset::Home, LoanPreset::Car, LoanPreset::Personal];

    pub fn years(&self) -> u32 {
        match self {
            LoanPreset::Home => 20,
            LoanPreset::Car => 5,
            LoanPreset::Personal => 3,
        }
    }

    pub fn annual_rate_percent(&self) -> f64 {
        match self {
            LoanPreset::Home => 8.5,
            LoanPreset::Car => 9.0,
            LoanPreset::Personal => 12.0,
        }
    }

    pub fn principal(&self) -> f64 {
        match self {
            LoanPreset::Home => 5_000_000.0,
            LoanPreset::Car => 1_000_000.0,
            LoanPreset::Personal => 500_000.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoanPreset::Home => "Home",
            LoanPreset::Car => "Car",
            LoanPreset::Personal => "Personal",
        }
    }

    pub fn input(&self) -> LoanInput {
        LoanInput::new(self.principal(), self.annual_rate_percent(), self.years() * 12)
    }

    /// Same loan at a slightly higher rate, the default "loan B"
    pub fn comparison_input(&self) -> LoanInput {
        LoanInput::new(
            self.principal(),
            self.annual_rate_percent() + COMPARISON_RATE_SPREAD,
            self.years() * 12,
        )
    }

    /// Lenient lookup: unknown names fall back to the home loan
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for LoanPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoanPreset {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(LoanPreset::Home),
            "car" => Ok(LoanPreset::Car),
            "personal" => Ok(LoanPreset::Personal),
            other => Err(CalcError::Parse(format!("unknown loan preset: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_terms() {
        let home = LoanPreset::Home.input();
        assert_eq!(home.principal, 5_000_000.0);
        assert_eq!(home.annual_rate_percent, 8.5);
        assert_eq!(home.months, 240);

        let car = LoanPreset::Car.input();
        assert_eq!(car.months, 60);
        assert_eq!(car.annual_rate_percent, 9.0);

        assert_eq!(LoanPreset::Personal.input().months, 36);
    }

    #[test]
    fn test_comparison_input_adds_spread() {
        let b = LoanPreset::Car.comparison_input();
        assert_eq!(b.annual_rate_percent, 9.5);
        assert_eq!(b.principal, LoanPreset::Car.principal());
        assert_eq!(b.months, 60);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("home".parse::<LoanPreset>().unwrap(), LoanPreset::Home);
        assert_eq!(" Personal ".parse::<LoanPreset>().unwrap(), LoanPreset::Personal);
        assert!("boat".parse::<LoanPreset>().is_err());
        assert_eq!(LoanPreset::default(), LoanPreset::Home);
        assert_eq!(LoanPreset::from_name_or_default("boat"), LoanPreset::Home);
        assert_eq!(LoanPreset::from_name_or_default("CAR"), LoanPreset::Car);
    }
}

//! Compounding frequency for fixed deposits

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// How often accrued interest is added to a deposit's principal.
/// Serialized as the number of periods per year (1, 2, 4 or 12).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Compounding {
    #[default]
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
}

impl Compounding {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Annually => 1,
            Compounding::SemiAnnually => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }

    /// Months in one compounding period
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl TryFrom<u32> for Compounding {
    type Error = CalcError;

    fn try_from(periods_per_year: u32) -> Result<Self, Self::Error> {
        match periods_per_year {
            1 => Ok(Compounding::Annually),
            2 => Ok(Compounding::SemiAnnually),
            4 => Ok(Compounding::Quarterly),
            12 => Ok(Compounding::Monthly),
            other => Err(CalcError::invalid(
                "compounding_periods_per_year",
                format!("must be one of 1, 2, 4 or 12, got {}", other),
            )),
        }
    }
}

impl From<Compounding> for u32 {
    fn from(value: Compounding) -> Self {
        value.periods_per_year()
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Annually => "Annually",
            Compounding::SemiAnnually => "Semi-annually",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
        };
        f.write_str(name)
    }
}

impl FromStr for Compounding {
    type Err = CalcError;

    /// Accepts a period count ("4") or a name ("quarterly")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(n) = s.parse::<u32>() {
            return Compounding::try_from(n);
        }
        match s.as_str() {
            "annual" | "annually" | "yearly" => Ok(Compounding::Annually),
            "semi-annual" | "semi-annually" | "semiannual" | "half-yearly" => {
                Ok(Compounding::SemiAnnually)
            }
            "quarterly" => Ok(Compounding::Quarterly),
            "monthly" => Ok(Compounding::Monthly),
            other => Err(CalcError::Parse(format!("unknown compounding frequency: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods() {
        assert_eq!(Compounding::default(), Compounding::Annually);
        assert_eq!(Compounding::Annually.months_per_period(), 12);
        assert_eq!(Compounding::SemiAnnually.months_per_period(), 6);
        assert_eq!(Compounding::Quarterly.months_per_period(), 3);
        assert_eq!(Compounding::Monthly.months_per_period(), 1);
    }

    #[test]
    fn test_only_supported_frequencies() {
        assert!(Compounding::try_from(3).is_err());
        assert!(Compounding::try_from(0).is_err());
        assert_eq!(Compounding::try_from(4).unwrap(), Compounding::Quarterly);
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!("quarterly".parse::<Compounding>().unwrap(), Compounding::Quarterly);
        assert_eq!("12".parse::<Compounding>().unwrap(), Compounding::Monthly);
        assert!("weekly".parse::<Compounding>().is_err());

        assert_eq!(serde_json::to_string(&Compounding::SemiAnnually).unwrap(), "2");
        let c: Compounding = serde_json::from_str("4").unwrap();
        assert_eq!(c, Compounding::Quarterly);
        assert!(serde_json::from_str::<Compounding>("5").is_err());
    }
}

//! `Frequency`: how often coupons or other events recur.

use fd_core::errors::{Error, Result};
use serde::Deserialize;
use std::str::FromStr;

/// Event / payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Frequency {
    /// Once (maturity only).
    Once,
    /// Once per year.
    Annual,
    /// Twice per year.
    Semiannual,
    /// Every fourth month (three times per year).
    EveryFourthMonth,
    /// Four times per year.
    Quarterly,
    /// Six times per year.
    Bimonthly,
    /// Twelve times per year.
    Monthly,
    /// Fifty-two times per year.
    Weekly,
    /// Daily.
    Daily,
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let f = match s.trim().to_ascii_lowercase().as_str() {
            "once" => Frequency::Once,
            "annual" | "annually" | "yearly" | "1y" => Frequency::Annual,
            "semiannual" | "semi-annual" | "semiannually" | "6m" => Frequency::Semiannual,
            "every fourth month" | "every-fourth-month" | "4m" => Frequency::EveryFourthMonth,
            "quarterly" | "3m" => Frequency::Quarterly,
            "bimonthly" | "bi-monthly" | "2m" => Frequency::Bimonthly,
            "monthly" | "1m" => Frequency::Monthly,
            "weekly" | "1w" => Frequency::Weekly,
            "daily" | "1d" => Frequency::Daily,
            _ => return Err(Error::Configuration(format!("unknown frequency '{s}'"))),
        };
        Ok(f)
    }
}

impl TryFrom<String> for Frequency {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Once => "Once",
            Frequency::Annual => "Annual",
            Frequency::Semiannual => "Semiannual",
            Frequency::EveryFourthMonth => "Every-Fourth-Month",
            Frequency::Quarterly => "Quarterly",
            Frequency::Bimonthly => "Bimonthly",
            Frequency::Monthly => "Monthly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
        };
        write!(f, "{s}")
    }
}

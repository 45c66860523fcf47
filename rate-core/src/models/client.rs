use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A staffing client / vendor management system with a fixed fee schedule.
///
/// The fee is the fraction withheld from the billed rate before it reaches
/// the agency. The table is a business constant, not per-session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Client {
    SimpliFi,
    Amn,
    Aya,
    Medefis,
    HealthTrust,
    Direct,
}

impl Client {
    /// Every known client, in selector display order.
    pub const ALL: [Client; 6] = [
        Self::SimpliFi,
        Self::Amn,
        Self::Aya,
        Self::Medefis,
        Self::HealthTrust,
        Self::Direct,
    ];

    /// The client preselected on a fresh or reset form.
    pub const DEFAULT: Client = Self::SimpliFi;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimpliFi => "SimpliFI",
            Self::Amn => "AMN",
            Self::Aya => "Aya",
            Self::Medefis => "Medefis",
            Self::HealthTrust => "HealthTrust",
            Self::Direct => "Direct",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SimpliFI" => Some(Self::SimpliFi),
            "AMN" => Some(Self::Amn),
            "Aya" => Some(Self::Aya),
            "Medefis" => Some(Self::Medefis),
            "HealthTrust" => Some(Self::HealthTrust),
            "Direct" => Some(Self::Direct),
            _ => None,
        }
    }

    /// Full name shown in the title display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SimpliFi => "SimpliFI",
            Self::Amn => "AMN Healthcare",
            Self::Aya => "Aya Healthcare",
            Self::Medefis => "Medefis",
            Self::HealthTrust => "HealthTrust Workforce Solutions",
            Self::Direct => "Direct Contract",
        }
    }

    /// Fee fraction withheld from the billed rate.
    pub fn fee(&self) -> Decimal {
        match self {
            Self::SimpliFi => Decimal::new(225, 4),    // 2.25%
            Self::Amn => Decimal::new(500, 4),         // 5.00%
            Self::Aya => Decimal::new(475, 4),         // 4.75%
            Self::Medefis => Decimal::new(425, 4),     // 4.25%
            Self::HealthTrust => Decimal::new(550, 4), // 5.50%
            Self::Direct => Decimal::ZERO,
        }
    }
}

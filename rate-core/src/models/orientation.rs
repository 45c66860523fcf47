use serde::{Deserialize, Serialize};

/// How orientation hours are paid.
///
/// Billable orientation is paid at the candidate's blended rate and billed to
/// the client; non-billable orientation is paid at a fixed house rate and
/// absorbed into the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationType {
    Billable,
    NonBillable,
}

impl OrientationType {
    /// Both options, in selector display order.
    pub const ALL: [OrientationType; 2] = [Self::Billable, Self::NonBillable];

    /// The option preselected on a fresh or reset form.
    pub const DEFAULT: OrientationType = Self::NonBillable;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Billable => "Billable",
            Self::NonBillable => "Non Billable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Billable" => Some(Self::Billable),
            "Non Billable" => Some(Self::NonBillable),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_both_options() {
        for option in OrientationType::ALL {
            assert_eq!(OrientationType::parse(option.as_str()), Some(option));
        }
    }

    #[test]
    fn default_is_non_billable() {
        assert_eq!(OrientationType::DEFAULT, OrientationType::NonBillable);
    }
}

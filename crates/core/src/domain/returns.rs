use serde::{Deserialize, Serialize};

/// One of the three return-measurement windows published by SUPEN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    /// Last 12 months.
    Short,
    /// Last 36 months.
    Medium,
    /// Last 60 months.
    Long,
}

impl Horizon {
    /// Fixed fetch order: short, medium, long.
    pub const ALL: [Horizon; 3] = [Horizon::Short, Horizon::Medium, Horizon::Long];

    pub fn label(self) -> &'static str {
        match self {
            Horizon::Short => "short",
            Horizon::Medium => "medium",
            Horizon::Long => "long",
        }
    }

    pub fn column_label(self) -> &'static str {
        match self {
            Horizon::Short => "Short term",
            Horizon::Medium => "Medium term",
            Horizon::Long => "Long term",
        }
    }

    pub fn parse(s: &str) -> Option<Horizon> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Horizon::Short),
            "medium" => Some(Horizon::Medium),
            "long" => Some(Horizon::Long),
            _ => None,
        }
    }
}

/// Nominal returns for a single operator across the three horizons.
///
/// `None` marks a horizon the API did not report for this operator; it is
/// never collapsed to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub code: String,
    pub name: String,
    pub short: Option<f64>,
    pub medium: Option<f64>,
    pub long: Option<f64>,
}

impl ReturnRecord {
    pub fn value(&self, horizon: Horizon) -> Option<f64> {
        match horizon {
            Horizon::Short => self.short,
            Horizon::Medium => self.medium,
            Horizon::Long => self.long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_horizon_names_case_insensitively() {
        assert_eq!(Horizon::parse("short"), Some(Horizon::Short));
        assert_eq!(Horizon::parse(" Medium "), Some(Horizon::Medium));
        assert_eq!(Horizon::parse("LONG"), Some(Horizon::Long));
        assert_eq!(Horizon::parse("decade"), None);
        assert_eq!(Horizon::parse(""), None);
    }

    #[test]
    fn fetch_order_is_short_medium_long() {
        assert_eq!(
            Horizon::ALL,
            [Horizon::Short, Horizon::Medium, Horizon::Long]
        );
    }

    #[test]
    fn value_selects_the_requested_horizon() {
        let rec = ReturnRecord {
            code: "BNV".to_string(),
            name: "BN Vital".to_string(),
            short: Some(5.2),
            medium: None,
            long: Some(7.0),
        };
        assert_eq!(rec.value(Horizon::Short), Some(5.2));
        assert_eq!(rec.value(Horizon::Medium), None);
        assert_eq!(rec.value(Horizon::Long), Some(7.0));
    }
}

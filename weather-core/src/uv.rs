use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UvRisk {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvRisk {
    pub fn from_index(value: f64) -> Self {
        if value < 3.0 {
            UvRisk::Low
        } else if value < 6.0 {
            UvRisk::Moderate
        } else if value < 8.0 {
            UvRisk::High
        } else if value < 11.0 {
            UvRisk::VeryHigh
        } else {
            UvRisk::Extreme
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UvRisk::Low => "Low",
            UvRisk::Moderate => "Moderate",
            UvRisk::High => "High",
            UvRisk::VeryHigh => "Very High",
            UvRisk::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for UvRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UvReading {
    pub value: f64,
    pub risk: UvRisk,
}

impl UvReading {
    pub fn new(value: f64) -> Self {
        Self { value, risk: UvRisk::from_index(value) }
    }
}

impl std::fmt::Display for UvReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} ({})", self.value, self.risk)
    }
}

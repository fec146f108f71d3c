//! Repair Cost Table
//!
//! Reference prices in Brazilian reais. Read-only for the life of the
//! process.

use rule_catalog::Component;
use serde::{Deserialize, Serialize};

/// Cost magnitude of a repair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Low,
    Mid,
    High,
}

impl CostTier {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CostTier::Low => "low",
            CostTier::Mid => "mid",
            CostTier::High => "high",
        }
    }

    /// What kind of work falls in this tier
    pub fn scope(&self) -> &'static str {
        match self {
            CostTier::Low => {
                "Cap/reservoir test, small hoses, temperature sensor, bleeding and coolant change."
            }
            CostTier::Mid => "Radiator, water pump, thermostat, fan and relays.",
            CostTier::High => "Blown head gasket, cracks or internal damage.",
        }
    }

    /// Typical labor for a job in this tier
    pub fn labor(&self) -> &'static str {
        match self {
            CostTier::Low => "R$ 100–250",
            CostTier::Mid => "R$ 250–700",
            CostTier::High => "R$ 800–2.000, easily above R$ 2.000 with machining",
        }
    }
}

/// One row of the cost table
#[derive(Debug, Clone, Copy)]
pub struct CostEntry {
    pub component: Component,
    pub tier: CostTier,
    pub parts: &'static str,
    pub labor: &'static str,
}

/// Price range of one component, as reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartCost {
    pub component: Component,
    pub tier: CostTier,
    /// Parts price range
    pub parts: String,
    /// Labor price range
    pub labor: String,
}

impl From<&CostEntry> for PartCost {
    fn from(entry: &CostEntry) -> Self {
        Self {
            component: entry.component,
            tier: entry.tier,
            parts: entry.parts.to_string(),
            labor: entry.labor.to_string(),
        }
    }
}

/// One tier of the cost summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEstimate {
    pub tier: CostTier,
    /// Jobs that fall in this tier
    pub scope: String,
    /// Parts priced in this tier
    pub parts: Vec<PartCost>,
    /// Labor range for the tier
    pub labor: String,
}

/// Three-tier cost summary attached to every report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub low: TierEstimate,
    pub mid: TierEstimate,
    pub high: TierEstimate,
}

impl CostEstimate {
    /// Tiers from cheapest to most expensive
    pub fn tiers(&self) -> [&TierEstimate; 3] {
        [&self.low, &self.mid, &self.high]
    }
}

/// Component prices
#[derive(Debug)]
pub struct CostTable {
    entries: &'static [CostEntry],
}

/// Prices used by the engine
pub static COST_TABLE: CostTable = CostTable {
    entries: &[
        CostEntry {
            component: Component::Radiator,
            tier: CostTier::Mid,
            parts: "R$ 80–150 (cleaning), R$ 250–600 (replacement)",
            labor: "R$ 150–350",
        },
        CostEntry {
            component: Component::Reservoir,
            tier: CostTier::Low,
            parts: "R$ 80–250",
            labor: "R$ 80–180",
        },
        CostEntry {
            component: Component::Hoses,
            tier: CostTier::Low,
            parts: "R$ 30–120 each",
            labor: "R$ 120–250",
        },
        CostEntry {
            component: Component::Thermostat,
            tier: CostTier::Mid,
            parts: "R$ 120–350",
            labor: "R$ 180–350",
        },
        CostEntry {
            component: Component::Sensor,
            tier: CostTier::Low,
            parts: "R$ 80–250",
            labor: "R$ 100–220",
        },
        CostEntry {
            component: Component::WaterPump,
            tier: CostTier::Mid,
            parts: "R$ 250–600",
            labor: "R$ 300–600",
        },
        CostEntry {
            component: Component::Fan,
            tier: CostTier::Mid,
            parts: "R$ 250–700 (assembly), R$ 60–180 (relay/switch)",
            labor: "R$ 150–350",
        },
        CostEntry {
            component: Component::HeadGasket,
            tier: CostTier::High,
            parts: "R$ 450–1.500 (parts + machining)",
            labor: "R$ 800–2.000",
        },
    ],
};

impl CostTable {
    /// Price row for a component
    pub fn lookup(&self, component: Component) -> Option<&CostEntry> {
        self.entries.iter().find(|entry| entry.component == component)
    }

    /// Summary for a single tier
    pub fn tier_estimate(&self, tier: CostTier) -> TierEstimate {
        TierEstimate {
            tier,
            scope: tier.scope().to_string(),
            parts: self
                .entries
                .iter()
                .filter(|entry| entry.tier == tier)
                .map(PartCost::from)
                .collect(),
            labor: tier.labor().to_string(),
        }
    }

    /// The full three-tier summary
    pub fn estimate(&self) -> CostEstimate {
        CostEstimate {
            low: self.tier_estimate(CostTier::Low),
            mid: self.tier_estimate(CostTier::Mid),
            high: self.tier_estimate(CostTier::High),
        }
    }
}

//! Global Risk Annotations
//!
//! Added on top of whatever causes fired. A per-cause risk note (the head
//! gasket one) and a global note can both appear.

use crate::evidence::Evidence;
use serde::{Deserialize, Serialize};

/// Identifier of a global risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskId {
    ProgressiveOverheating,
    InternalCorrosion,
}

/// A risk note raised from derived flags alone
#[derive(Debug, Clone, Copy)]
pub struct GlobalRisk {
    pub id: RiskId,
    pub note: &'static str,
}

impl GlobalRisk {
    /// Whether this risk applies
    pub fn applies(&self, evidence: &Evidence<'_>) -> bool {
        let flags = &evidence.flags;
        match self.id {
            RiskId::ProgressiveOverheating => {
                flags.high_panel_temperature || flags.temperature_light || flags.high_water_loss
            }
            RiskId::InternalCorrosion => flags.dirty_coolant || flags.water_only_coolant,
        }
    }
}

/// Global risks in report order
pub static GLOBAL_RISKS: [GlobalRisk; 2] = [
    GlobalRisk {
        id: RiskId::ProgressiveOverheating,
        note: "Progressive overheating with risk of cylinder head warping, blown head gasket \
            and even engine seizure.",
    },
    GlobalRisk {
        id: RiskId::InternalCorrosion,
        note: "Internal corrosion of engine block passages, radiator, water pump and sensors, \
            raising future repair costs.",
    },
];

/// Shown in the immediate-attention section when no risk applies
pub const NEUTRAL_RISK_NOTE: &str = "Even without signs of a serious fault, keep the cooling \
    system in good condition to avoid future damage.";

/// Global risks that apply to the evidence, in report order
pub fn applicable_risks(evidence: &Evidence<'_>) -> Vec<&'static GlobalRisk> {
    GLOBAL_RISKS
        .iter()
        .filter(|risk| risk.applies(evidence))
        .collect()
}

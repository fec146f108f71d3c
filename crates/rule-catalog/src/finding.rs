//! Findings and Rule Identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a diagnostic rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    ReservoirCap,
    HoseLeak,
    Radiator,
    FanFailure,
    FanExcessive,
    ThermostatStuckOpen,
    ThermostatStuckClosed,
    TemperatureSensor,
    WaterPump,
    TrappedAir,
    HeadGasket,
    HeaterCore,
    /// Catch-all when nothing specific matched
    GeneralEvaluation,
}

impl RuleId {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ReservoirCap => "reservoir_cap",
            RuleId::HoseLeak => "hose_leak",
            RuleId::Radiator => "radiator",
            RuleId::FanFailure => "fan_failure",
            RuleId::FanExcessive => "fan_excessive",
            RuleId::ThermostatStuckOpen => "thermostat_stuck_open",
            RuleId::ThermostatStuckClosed => "thermostat_stuck_closed",
            RuleId::TemperatureSensor => "temperature_sensor",
            RuleId::WaterPump => "water_pump",
            RuleId::TrappedAir => "trapped_air",
            RuleId::HeadGasket => "head_gasket",
            RuleId::HeaterCore => "heater_core",
            RuleId::GeneralEvaluation => "general_evaluation",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage group, simple and external first, severe and internal last
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    External,
    TemperatureControl,
    Circulation,
    Internal,
    Fallback,
}

/// Cooling-system component a finding points at, used for cost lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Radiator,
    Reservoir,
    Hoses,
    Thermostat,
    Sensor,
    WaterPump,
    Fan,
    HeadGasket,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Radiator => "radiator",
            Component::Reservoir => "reservoir",
            Component::Hoses => "hoses",
            Component::Thermostat => "thermostat",
            Component::Sensor => "sensor",
            Component::WaterPump => "water_pump",
            Component::Fan => "fan",
            Component::HeadGasket => "head_gasket",
        }
    }
}

/// Static content a rule emits when it fires
#[derive(Debug)]
pub struct FindingTemplate {
    pub cause: &'static str,
    pub explanation: &'static str,
    pub owner_checklist: &'static [&'static str],
    pub mechanic_checklist: &'static [&'static str],
    pub remedies: &'static [&'static str],
    pub risk_note: Option<&'static str>,
    pub component: Option<Component>,
}

/// One identified issue with its explanation, checks and remedies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule that produced the finding
    pub rule: RuleId,
    /// Short cause label
    pub cause: String,
    /// Why this cause produces the reported symptoms
    pub explanation: String,
    /// Checks the owner can do
    pub owner_checklist: Vec<String>,
    /// Checks for the mechanic
    pub mechanic_checklist: Vec<String>,
    /// Recommended repairs
    pub remedies: Vec<String>,
    /// Cause-specific risk, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_note: Option<String>,
    /// Component for cost lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
}

impl Finding {
    /// Instantiate a template for a rule
    pub fn from_template(rule: RuleId, template: &FindingTemplate) -> Self {
        Self {
            rule,
            cause: template.cause.to_string(),
            explanation: template.explanation.to_string(),
            owner_checklist: owned(template.owner_checklist),
            mechanic_checklist: owned(template.mechanic_checklist),
            remedies: owned(template.remedies),
            risk_note: template.risk_note.map(str::to_string),
            component: template.component,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

//! Derived Flags
//!
//! Flags shared by several predicates are computed once per request so the
//! rules that reference them agree on the thresholds.

use crate::keywords;
use serde::Serialize;
use symptom_intake::{
    CoolantAppearance, CoolantColor, DashboardLights, FanBehavior, NormalizedSymptoms,
    SymptomRecord, WaterLoss, WhiteSmoke,
};

/// Boolean signals derived from the raw record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivedFlags {
    /// Topping up daily or after every warm-up
    pub high_water_loss: bool,
    /// Plain water, no additive
    pub water_only_coolant: bool,
    /// Dark coolant or sludge
    pub dirty_coolant: bool,
    /// Oily coolant
    pub oily_coolant: bool,
    /// Fan never switches on, by selector, or by narrative unless the
    /// selector says the fan is always on
    pub fan_never_engages: bool,
    /// Fan runs nearly all the time
    pub fan_always_on: bool,
    /// Nonstop white smoke
    pub constant_smoke: bool,
    /// Temperature light lit
    pub temperature_light: bool,
    /// Injection light lit
    pub injection_light: bool,
    /// Gauge high by keyword or number, or boiling described
    pub high_panel_temperature: bool,
}

impl DerivedFlags {
    /// Compute every flag for one record
    pub fn derive(record: &SymptomRecord, text: &NormalizedSymptoms) -> Self {
        Self {
            high_water_loss: matches!(record.water_loss, WaterLoss::Daily | WaterLoss::AfterWarmup),
            water_only_coolant: record.coolant_color == CoolantColor::WaterOnly,
            dirty_coolant: record.coolant_color == CoolantColor::DarkDirty
                || record.coolant_appearance == CoolantAppearance::Sludge,
            oily_coolant: record.coolant_appearance == CoolantAppearance::Oily,
            fan_never_engages: record.fan_behavior == FanBehavior::NeverEngages
                || (record.fan_behavior != FanBehavior::AlwaysOn
                    && text.narrative.contains_any(keywords::FAN_NEVER_ENGAGES)),
            fan_always_on: record.fan_behavior == FanBehavior::AlwaysOn,
            constant_smoke: record.white_smoke == WhiteSmoke::Constant,
            temperature_light: matches!(
                record.dashboard_lights,
                DashboardLights::Temperature | DashboardLights::Both
            ),
            injection_light: matches!(
                record.dashboard_lights,
                DashboardLights::Injection | DashboardLights::Both
            ),
            high_panel_temperature: text.gauge.contains_any(keywords::GAUGE_HIGH)
                || text.narrative.contains_any(keywords::BOILING),
        }
    }
}

/// Everything a predicate may look at
#[derive(Debug, Clone)]
pub struct Evidence<'a> {
    /// The record as received
    pub record: &'a SymptomRecord,
    /// Normalized free text
    pub text: NormalizedSymptoms,
    /// Flags derived once
    pub flags: DerivedFlags,
}

impl<'a> Evidence<'a> {
    /// Normalize the record and derive its flags
    pub fn gather(record: &'a SymptomRecord) -> Self {
        let text = NormalizedSymptoms::from_record(record);
        let flags = DerivedFlags::derive(record, &text);
        Self { record, text, flags }
    }

    /// Narrative keyword match
    pub fn mentions(&self, terms: &[&str]) -> bool {
        self.text.narrative.contains_any(terms)
    }
}

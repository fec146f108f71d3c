//! Diagnostic Rule Catalog
//!
//! Rules run in catalog order, which is also the order causes appear in the
//! report: external and visible problems first, internal damage last. Every
//! entry is evaluated against the whole record; only the fan pair is an
//! if/else-if.

use crate::content;
use crate::evidence::Evidence;
use crate::finding::{Finding, FindingTemplate, RuleGroup, RuleId};
use crate::keywords;
use symptom_intake::LeakLocation;

/// Boolean function of the evidence deciding whether a rule fires
pub type Predicate = fn(&Evidence<'_>) -> bool;

/// A (predicate, finding) pair
pub struct Rule {
    pub id: RuleId,
    pub group: RuleGroup,
    pub predicate: Predicate,
    pub template: &'static FindingTemplate,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Whether the rule fires for this evidence
    pub fn matches(&self, evidence: &Evidence<'_>) -> bool {
        (self.predicate)(evidence)
    }

    /// The finding this rule emits
    pub fn finding(&self) -> Finding {
        Finding::from_template(self.id, self.template)
    }
}

/// One slot of the catalog
#[derive(Debug)]
pub enum CatalogEntry {
    /// Evaluated unconditionally
    Single(Rule),
    /// Only the first matching rule fires
    FirstOf(&'static [Rule]),
}

impl CatalogEntry {
    /// Rules in this slot, in evaluation order
    pub fn rules(&self) -> &[Rule] {
        match self {
            CatalogEntry::Single(rule) => std::slice::from_ref(rule),
            CatalogEntry::FirstOf(rules) => *rules,
        }
    }

    /// Rules of this slot that fire for the evidence
    pub fn fire(&self, evidence: &Evidence<'_>) -> Vec<&Rule> {
        match self {
            CatalogEntry::Single(rule) => {
                if rule.matches(evidence) {
                    vec![rule]
                } else {
                    Vec::new()
                }
            }
            CatalogEntry::FirstOf(rules) => {
                rules.iter().find(|rule| rule.matches(evidence)).into_iter().collect()
            }
        }
    }
}

fn reservoir_cap(e: &Evidence<'_>) -> bool {
    e.record.leak_location == LeakLocation::Reservoir || e.mentions(keywords::RESERVOIR_CAP)
}

fn hose_leak(e: &Evidence<'_>) -> bool {
    e.record.leak_location == LeakLocation::Hoses || e.mentions(keywords::HOSE_DAMAGE)
}

fn radiator(e: &Evidence<'_>) -> bool {
    e.record.leak_location == LeakLocation::Radiator
        || e.flags.dirty_coolant
        || e.mentions(keywords::RADIATOR_CLOGGED)
}

fn fan_failure(e: &Evidence<'_>) -> bool {
    e.flags.fan_never_engages
}

fn fan_excessive(e: &Evidence<'_>) -> bool {
    e.flags.fan_always_on
}

fn thermostat_stuck_open(e: &Evidence<'_>) -> bool {
    e.mentions(keywords::SLOW_WARMUP) || e.mentions(keywords::NO_HEAT)
}

fn thermostat_stuck_closed(e: &Evidence<'_>) -> bool {
    e.flags.high_panel_temperature || e.mentions(keywords::OVERHEATING)
}

fn temperature_sensor(e: &Evidence<'_>) -> bool {
    e.flags.temperature_light || e.flags.injection_light || e.mentions(keywords::ERRATIC_GAUGE)
}

fn water_pump(e: &Evidence<'_>) -> bool {
    e.mentions(keywords::PUMP_NOISE) || e.mentions(keywords::NO_CIRCULATION)
}

fn trapped_air(e: &Evidence<'_>) -> bool {
    e.mentions(keywords::TRAPPED_AIR)
}

/// Oily coolant, constant smoke, oil in the coolant, or heavy loss with
/// nothing leaking outside
pub fn suspected_head_gasket(e: &Evidence<'_>) -> bool {
    e.flags.oily_coolant
        || e.flags.constant_smoke
        || e.mentions(keywords::OIL_CONTAMINATION)
        || (e.flags.high_water_loss && e.record.leak_location == LeakLocation::None)
}

fn heater_core(e: &Evidence<'_>) -> bool {
    e.record.leak_location == LeakLocation::InternalCabin
}

fn always(_: &Evidence<'_>) -> bool {
    true
}

static FAN_PAIR: [Rule; 2] = [
    Rule {
        id: RuleId::FanFailure,
        group: RuleGroup::TemperatureControl,
        predicate: fan_failure,
        template: &content::FAN_FAILURE,
    },
    Rule {
        id: RuleId::FanExcessive,
        group: RuleGroup::TemperatureControl,
        predicate: fan_excessive,
        template: &content::FAN_EXCESSIVE,
    },
];

/// The ordered catalog
pub static CATALOG: [CatalogEntry; 11] = [
    CatalogEntry::Single(Rule {
        id: RuleId::ReservoirCap,
        group: RuleGroup::External,
        predicate: reservoir_cap,
        template: &content::RESERVOIR_CAP,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::HoseLeak,
        group: RuleGroup::External,
        predicate: hose_leak,
        template: &content::HOSE_LEAK,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::Radiator,
        group: RuleGroup::External,
        predicate: radiator,
        template: &content::RADIATOR,
    }),
    CatalogEntry::FirstOf(&FAN_PAIR),
    CatalogEntry::Single(Rule {
        id: RuleId::ThermostatStuckOpen,
        group: RuleGroup::TemperatureControl,
        predicate: thermostat_stuck_open,
        template: &content::THERMOSTAT_STUCK_OPEN,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::ThermostatStuckClosed,
        group: RuleGroup::TemperatureControl,
        predicate: thermostat_stuck_closed,
        template: &content::THERMOSTAT_STUCK_CLOSED,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::TemperatureSensor,
        group: RuleGroup::TemperatureControl,
        predicate: temperature_sensor,
        template: &content::TEMPERATURE_SENSOR,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::WaterPump,
        group: RuleGroup::Circulation,
        predicate: water_pump,
        template: &content::WATER_PUMP,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::TrappedAir,
        group: RuleGroup::Circulation,
        predicate: trapped_air,
        template: &content::TRAPPED_AIR,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::HeadGasket,
        group: RuleGroup::Internal,
        predicate: suspected_head_gasket,
        template: &content::HEAD_GASKET,
    }),
    CatalogEntry::Single(Rule {
        id: RuleId::HeaterCore,
        group: RuleGroup::Internal,
        predicate: heater_core,
        template: &content::HEATER_CORE,
    }),
];

/// Catch-all emitted only when no catalog rule fired
pub static FALLBACK: Rule = Rule {
    id: RuleId::GeneralEvaluation,
    group: RuleGroup::Fallback,
    predicate: always,
    template: &content::GENERAL_EVALUATION,
};

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_intake::{CoolantAppearance, FanBehavior, SymptomRecord, WaterLoss, WhiteSmoke};

    fn fired(record: &SymptomRecord) -> Vec<RuleId> {
        let evidence = Evidence::gather(record);
        CATALOG
            .iter()
            .flat_map(|entry| entry.fire(&evidence))
            .map(|rule| rule.id)
            .collect()
    }

    #[test]
    fn test_catalog_groups_are_in_triage_order() {
        let groups: Vec<RuleGroup> = CATALOG
            .iter()
            .flat_map(|entry| entry.rules())
            .map(|rule| rule.group)
            .collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
        assert!(!groups.contains(&RuleGroup::Fallback));
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<&str> = CATALOG
            .iter()
            .flat_map(|entry| entry.rules())
            .map(|rule| rule.id.as_str())
            .collect();
        ids.push(FALLBACK.id.as_str());
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_empty_record_fires_nothing() {
        assert!(fired(&SymptomRecord::default()).is_empty());
    }

    #[test]
    fn test_reservoir_by_location_and_keyword() {
        let by_location = SymptomRecord {
            leak_location: LeakLocation::Reservoir,
            ..Default::default()
        };
        let by_keyword = SymptomRecord {
            symptoms: "Joga água fora pelo reservatório".to_string(),
            ..Default::default()
        };
        assert_eq!(fired(&by_location), vec![RuleId::ReservoirCap]);
        assert_eq!(fired(&by_keyword), vec![RuleId::ReservoirCap]);
    }

    #[test]
    fn test_radiator_fires_on_dirty_coolant() {
        let record = SymptomRecord {
            coolant_appearance: CoolantAppearance::Sludge,
            ..Default::default()
        };
        assert_eq!(fired(&record), vec![RuleId::Radiator]);
    }

    #[test]
    fn test_fan_pair_is_exclusive() {
        let never = SymptomRecord {
            fan_behavior: FanBehavior::NeverEngages,
            ..Default::default()
        };
        let always_on = SymptomRecord {
            fan_behavior: FanBehavior::AlwaysOn,
            ..Default::default()
        };
        // Narrative says "never engages" while the selector says "always on"
        let conflicting = SymptomRecord {
            fan_behavior: FanBehavior::AlwaysOn,
            symptoms: "ventoinha não arma".to_string(),
            ..Default::default()
        };
        let narrative_only = SymptomRecord {
            symptoms: "ventoinha não arma".to_string(),
            ..Default::default()
        };

        assert_eq!(fired(&never), vec![RuleId::FanFailure]);
        assert_eq!(fired(&always_on), vec![RuleId::FanExcessive]);
        assert_eq!(fired(&conflicting), vec![RuleId::FanExcessive]);
        assert_eq!(fired(&narrative_only), vec![RuleId::FanFailure]);
    }

    #[test]
    fn test_thermostat_stuck_open() {
        let record = SymptomRecord {
            symptoms: "Demora a esquentar de manhã".to_string(),
            ..Default::default()
        };
        assert_eq!(fired(&record), vec![RuleId::ThermostatStuckOpen]);
    }

    #[test]
    fn test_high_gauge_fires_thermostat_closed() {
        let record = SymptomRecord {
            gauge_temperature: "Vai ao vermelho".to_string(),
            ..Default::default()
        };
        assert_eq!(fired(&record), vec![RuleId::ThermostatStuckClosed]);
    }

    #[test]
    fn test_gasket_needs_explicit_no_leak_for_water_loss() {
        let explicit = SymptomRecord {
            water_loss: WaterLoss::Daily,
            leak_location: LeakLocation::None,
            ..Default::default()
        };
        let unanswered = SymptomRecord {
            water_loss: WaterLoss::Daily,
            ..Default::default()
        };
        let leaking = SymptomRecord {
            water_loss: WaterLoss::AfterWarmup,
            leak_location: LeakLocation::Hoses,
            ..Default::default()
        };

        assert_eq!(fired(&explicit), vec![RuleId::HeadGasket]);
        assert!(fired(&unanswered).is_empty());
        assert_eq!(fired(&leaking), vec![RuleId::HoseLeak]);
    }

    #[test]
    fn test_gasket_on_smoke_or_oil() {
        let smoke = SymptomRecord {
            white_smoke: WhiteSmoke::Constant,
            ..Default::default()
        };
        let oil = SymptomRecord {
            symptoms: "Tem maionese na tampa do óleo".to_string(),
            ..Default::default()
        };

        assert_eq!(fired(&smoke), vec![RuleId::HeadGasket]);
        // "tampa" also points at the reservoir cap
        assert_eq!(fired(&oil), vec![RuleId::ReservoirCap, RuleId::HeadGasket]);
    }

    #[test]
    fn test_water_pump_from_noise_field() {
        let record = SymptomRecord {
            smells_noises: "Chiado vindo da correia".to_string(),
            ..Default::default()
        };
        assert_eq!(fired(&record), vec![RuleId::WaterPump]);
    }

    #[test]
    fn test_heater_core() {
        let record = SymptomRecord {
            leak_location: LeakLocation::InternalCabin,
            ..Default::default()
        };
        assert_eq!(fired(&record), vec![RuleId::HeaterCore]);
    }

    #[test]
    fn test_fallback_always_matches() {
        let record = SymptomRecord::default();
        assert!(FALLBACK.matches(&Evidence::gather(&record)));
        assert_eq!(FALLBACK.finding().rule, RuleId::GeneralEvaluation);
    }
}

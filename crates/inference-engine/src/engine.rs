//! Inference Engine Implementation

use crate::costs::{CostTable, COST_TABLE};
use crate::report::DiagnosticReport;
use rule_catalog::{applicable_risks, CatalogEntry, Evidence, Finding, CATALOG, FALLBACK};
use symptom_intake::SymptomRecord;
use tracing::{debug, info};

/// Diagnose one symptom record against the built-in catalog
///
/// Pure and total: no I/O, no shared mutable state, and every record,
/// including an empty one, yields a complete report.
pub fn diagnose(record: &SymptomRecord) -> DiagnosticReport {
    evaluate(record, &CATALOG, &COST_TABLE)
}

fn evaluate(record: &SymptomRecord, catalog: &[CatalogEntry], costs: &CostTable) -> DiagnosticReport {
    let evidence = Evidence::gather(record);
    debug!("Derived flags: {:?}", evidence.flags);

    let mut findings: Vec<Finding> = catalog
        .iter()
        .flat_map(|entry| entry.fire(&evidence))
        .map(|rule| {
            debug!("Rule fired: {}", rule.id);
            rule.finding()
        })
        .collect();

    if findings.is_empty() {
        debug!("No specific rule fired, using {}", FALLBACK.id);
        findings.push(FALLBACK.finding());
    }

    let risks = applicable_risks(&evidence);
    DiagnosticReport::assemble(record, findings, &risks, costs)
}

/// Rule-based diagnosis engine for cooling-system symptoms
///
/// Holds only references to the static catalog and cost table, so one
/// engine can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEngine {
    catalog: &'static [CatalogEntry],
    costs: &'static CostTable,
}

impl DiagnosticEngine {
    /// Create an engine over the built-in catalog and prices
    pub fn new() -> Self {
        let engine = Self {
            catalog: &CATALOG,
            costs: &COST_TABLE,
        };
        info!("Creating diagnostic engine with {} rules", engine.rule_count());
        engine
    }

    /// Run every rule against the record and assemble the report
    pub fn diagnose(&self, record: &SymptomRecord) -> DiagnosticReport {
        let report = evaluate(record, self.catalog, self.costs);
        debug!(
            "Diagnosis complete: {} cause(s), {} risk note(s)",
            report.causes.len(),
            report.urgent_risks.len()
        );
        report
    }

    /// Number of rules in the catalog, fallback excluded
    pub fn rule_count(&self) -> usize {
        self.catalog.iter().map(|entry| entry.rules().len()).sum()
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_catalog::{RuleId, GLOBAL_RISKS, NEUTRAL_RISK_NOTE};
    use symptom_intake::{
        CoolantAppearance, CoolantColor, DashboardLights, FanBehavior, LeakLocation, WaterLoss,
        WhiteSmoke,
    };

    fn quiet_record() -> SymptomRecord {
        SymptomRecord {
            water_loss: WaterLoss::None,
            fan_behavior: FanBehavior::NormalCycle,
            coolant_color: CoolantColor::Normal,
            leak_location: LeakLocation::None,
            white_smoke: WhiteSmoke::None,
            gauge_temperature: "normal".to_string(),
            dashboard_lights: DashboardLights::None,
            ..Default::default()
        }
    }

    #[test]
    fn test_quiet_record_gets_general_evaluation() {
        let report = diagnose(&quiet_record());

        assert_eq!(report.causes, vec!["General cooling system evaluation needed".to_string()]);
        assert_eq!(report.fired, vec![RuleId::GeneralEvaluation]);
        assert_eq!(report.urgent_risks, vec![NEUTRAL_RISK_NOTE.to_string()]);
        assert!(report.owner_checklist.is_empty());
        assert_eq!(report.mechanic_checklist.len(), 1);
    }

    #[test]
    fn test_reservoir_leak() {
        let record = SymptomRecord {
            leak_location: LeakLocation::Reservoir,
            fan_behavior: FanBehavior::NormalCycle,
            ..Default::default()
        };

        let report = diagnose(&record);
        assert!(report.causes.contains(&"Reservoir/cap seal deficiency".to_string()));
        assert!(report.mechanic_checklist.iter().any(|i| i.contains("Pressure-test")));
        assert!(report.remedies.iter().any(|r| r.contains("Replace the reservoir and cap")));
        assert!(!report.is_fallback());
    }

    #[test]
    fn test_oily_coolant_suspects_gasket() {
        let record = SymptomRecord {
            coolant_appearance: CoolantAppearance::Oily,
            ..Default::default()
        };

        let report = diagnose(&record);
        assert!(report.has(RuleId::HeadGasket));
        assert!(report
            .causes
            .contains(&"Possible blown head gasket or internal cracks".to_string()));
        assert!(report
            .urgent_risks
            .iter()
            .any(|r| r.contains("warping") && r.contains("seizure")));
    }

    #[test]
    fn test_causes_follow_catalog_order() {
        let record = SymptomRecord {
            leak_location: LeakLocation::None,
            water_loss: WaterLoss::Daily,
            fan_behavior: FanBehavior::NeverEngages,
            symptoms: "Borbulha no reservatório e chiado".to_string(),
            dashboard_lights: DashboardLights::Temperature,
            ..Default::default()
        };

        let report = diagnose(&record);
        assert_eq!(
            report.fired,
            vec![
                RuleId::FanFailure,
                RuleId::TemperatureSensor,
                RuleId::WaterPump,
                RuleId::TrappedAir,
                RuleId::HeadGasket,
            ]
        );
        assert_eq!(report.causes.len(), report.fired.len());
        assert_eq!(report.explanations.len(), report.fired.len());
    }

    #[test]
    fn test_gasket_and_global_risks_coexist() {
        let record = SymptomRecord {
            water_loss: WaterLoss::AfterWarmup,
            leak_location: LeakLocation::None,
            coolant_color: CoolantColor::DarkDirty,
            ..Default::default()
        };

        let report = diagnose(&record);
        assert_eq!(report.urgent_risks.len(), 3);
        assert_eq!(report.urgent_risks[1], GLOBAL_RISKS[0].note);
        assert_eq!(report.urgent_risks[2], GLOBAL_RISKS[1].note);
    }

    #[test]
    fn test_component_costs_follow_findings() {
        let record = SymptomRecord {
            fan_behavior: FanBehavior::NeverEngages,
            ..Default::default()
        };

        let report = diagnose(&record);
        assert_eq!(report.component_costs.len(), 1);
        assert!(report.component_costs[0].parts.contains("relay"));
    }

    #[test]
    fn test_centered_gauge_is_not_overheating() {
        let record = SymptomRecord {
            gauge_temperature: "Needle stays centered".to_string(),
            ..quiet_record()
        };

        let report = diagnose(&record);
        assert!(!report.has(RuleId::ThermostatStuckClosed));
        assert!(report.is_fallback());
        assert_eq!(report.urgent_risks, vec![NEUTRAL_RISK_NOTE.to_string()]);
    }

    #[test]
    fn test_engine_matches_free_function() {
        let engine = DiagnosticEngine::new();
        let record = SymptomRecord {
            symptoms: "Passa do meio na estrada".to_string(),
            ..Default::default()
        };

        assert_eq!(engine.diagnose(&record), diagnose(&record));
        assert_eq!(engine.rule_count(), 12);
    }
}

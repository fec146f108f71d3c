//! Diagnostic Report

use crate::costs::{CostEstimate, CostTable, PartCost};
use rule_catalog::{Finding, GlobalRisk, RuleId, NEUTRAL_RISK_NOTE};
use serde::{Deserialize, Serialize};
use symptom_intake::{SymptomRecord, WaterLoss, WhenItOccurs};

/// Invitation closing every report
pub const NEXT_STEP: &str =
    "Do you want to continue the diagnosis? If so, describe every symptom of the vehicle.";

/// The reported conditions, echoed back in their original case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedConditions {
    pub model_year: String,
    pub engine_type: String,
    pub gauge_temperature: String,
    pub when_it_occurs: WhenItOccurs,
    pub water_loss: WaterLoss,
}

impl From<&SymptomRecord> for ReportedConditions {
    fn from(record: &SymptomRecord) -> Self {
        Self {
            model_year: record.model_year.trim().to_string(),
            engine_type: record.engine_type.trim().to_string(),
            gauge_temperature: record.gauge_temperature.trim().to_string(),
            when_it_occurs: record.when_it_occurs,
            water_loss: record.water_loss,
        }
    }
}

/// Result of one diagnosis
///
/// Every list is always present; an empty list means there is nothing to
/// add for that section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub conditions: ReportedConditions,
    /// Rules that fired, in firing order
    pub fired: Vec<RuleId>,
    /// Structured findings, in firing order
    pub findings: Vec<Finding>,
    pub causes: Vec<String>,
    pub explanations: Vec<String>,
    pub owner_checklist: Vec<String>,
    pub mechanic_checklist: Vec<String>,
    pub urgent_risks: Vec<String>,
    pub remedies: Vec<String>,
    /// Prices of the components the findings point at
    pub component_costs: Vec<PartCost>,
    pub cost_estimate: CostEstimate,
    pub next_step: String,
}

impl DiagnosticReport {
    /// Assemble a report from findings already in firing order
    pub(crate) fn assemble(
        record: &SymptomRecord,
        findings: Vec<Finding>,
        global_risks: &[&GlobalRisk],
        costs: &CostTable,
    ) -> Self {
        let mut causes = Vec::new();
        let mut explanations = Vec::new();
        let mut owner_checklist = Vec::new();
        let mut mechanic_checklist = Vec::new();
        let mut urgent_risks = Vec::new();
        let mut remedies = Vec::new();
        let mut component_costs: Vec<PartCost> = Vec::new();

        for finding in &findings {
            push_unique(&mut causes, &finding.cause);
            push_unique(&mut explanations, &finding.explanation);
            for item in &finding.owner_checklist {
                push_unique(&mut owner_checklist, item);
            }
            for item in &finding.mechanic_checklist {
                push_unique(&mut mechanic_checklist, item);
            }
            for item in &finding.remedies {
                push_unique(&mut remedies, item);
            }
            if let Some(note) = &finding.risk_note {
                push_unique(&mut urgent_risks, note);
            }
            if let Some(entry) = finding.component.and_then(|c| costs.lookup(c)) {
                if !component_costs.iter().any(|c| c.component == entry.component) {
                    component_costs.push(PartCost::from(entry));
                }
            }
        }

        for risk in global_risks {
            push_unique(&mut urgent_risks, risk.note);
        }
        if urgent_risks.is_empty() {
            urgent_risks.push(NEUTRAL_RISK_NOTE.to_string());
        }

        Self {
            conditions: ReportedConditions::from(record),
            fired: findings.iter().map(|f| f.rule).collect(),
            findings,
            causes,
            explanations,
            owner_checklist,
            mechanic_checklist,
            urgent_risks,
            remedies,
            component_costs,
            cost_estimate: costs.estimate(),
            next_step: NEXT_STEP.to_string(),
        }
    }

    /// Whether only the catch-all finding fired
    pub fn is_fallback(&self) -> bool {
        self.fired == [RuleId::GeneralEvaluation]
    }

    /// Whether a given rule fired
    pub fn has(&self, rule: RuleId) -> bool {
        self.fired.contains(&rule)
    }
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}

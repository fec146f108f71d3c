//! Rule Catalog Routes

use axum::Json;
use rule_catalog::{RuleGroup, RuleId, CATALOG, FALLBACK};
use serde::Serialize;

/// One catalog rule, as listed to clients
#[derive(Debug, Serialize)]
pub struct RuleSummary {
    pub id: RuleId,
    pub group: RuleGroup,
    pub cause: &'static str,
    /// Fires only if no earlier rule of the same slot fired
    pub exclusive: bool,
}

/// Response for the rules endpoint
#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub data: Vec<RuleSummary>,
    pub count: usize,
}

/// List the catalog in evaluation order, fallback last
pub async fn get_rules() -> Json<RulesResponse> {
    let mut data: Vec<RuleSummary> = CATALOG
        .iter()
        .flat_map(|entry| {
            let exclusive = entry.rules().len() > 1;
            entry.rules().iter().map(move |rule| RuleSummary {
                id: rule.id,
                group: rule.group,
                cause: rule.template.cause,
                exclusive,
            })
        })
        .collect();

    data.push(RuleSummary {
        id: FALLBACK.id,
        group: FALLBACK.group,
        cause: FALLBACK.template.cause,
        exclusive: false,
    });

    Json(RulesResponse {
        count: data.len(),
        data,
    })
}

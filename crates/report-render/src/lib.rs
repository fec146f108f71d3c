//! Report Rendering
//!
//! Maps a [`DiagnosticReport`] to text. Every section is always written;
//! an empty one gets a neutral placeholder instead of being dropped.

use inference_engine::{DiagnosticReport, TierEstimate};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Placeholder for a section with nothing in it
pub const EMPTY_SECTION: &str = "Nothing further to check beyond what was already done.";

/// Output flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    #[default]
    PlainText,
    Markdown,
}

impl RenderFormat {
    /// Parse a format name, defaulting to plain text
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "markdown" | "md" => Self::Markdown,
            _ => Self::PlainText,
        }
    }

    fn heading(&self, out: &mut String, title: &str) {
        match self {
            RenderFormat::PlainText => {
                let _ = writeln!(out, "{title}");
                let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
            }
            RenderFormat::Markdown => {
                let _ = writeln!(out, "### {title}");
                let _ = writeln!(out);
            }
        }
    }

    fn label(&self, out: &mut String, label: &str) {
        match self {
            RenderFormat::PlainText => {
                let _ = writeln!(out, "{label}:");
            }
            RenderFormat::Markdown => {
                let _ = writeln!(out, "**{label}:**");
                let _ = writeln!(out);
            }
        }
    }

    fn list(&self, out: &mut String, items: &[String]) {
        if items.is_empty() {
            let _ = writeln!(out, "- {EMPTY_SECTION}");
        }
        for item in items {
            let _ = writeln!(out, "- {item}");
        }
        let _ = writeln!(out);
    }
}

/// Render a report as plain text
pub fn render_text(report: &DiagnosticReport) -> String {
    render(report, RenderFormat::PlainText)
}

/// Render a report as Markdown
pub fn render_markdown(report: &DiagnosticReport) -> String {
    render(report, RenderFormat::Markdown)
}

/// Render a report in the given format
pub fn render(report: &DiagnosticReport, format: RenderFormat) -> String {
    let mut out = String::new();
    let conditions = &report.conditions;

    format.heading(&mut out, "Technical analysis");
    let _ = writeln!(
        out,
        "Vehicle: {} | Engine: {}",
        or_dash(&conditions.model_year),
        or_dash(&conditions.engine_type)
    );
    let _ = writeln!(
        out,
        "Reported conditions: gauge \"{}\", occurs: {}, water loss: {}",
        conditions.gauge_temperature,
        conditions.when_it_occurs.as_code().replace('_', " "),
        conditions.water_loss.as_code().replace('_', " ")
    );
    let _ = writeln!(out);

    format.heading(&mut out, "1. Diagnosis (simplest to most severe)");
    format.list(&mut out, &report.causes);

    format.heading(&mut out, "2. Explanation of each possible cause");
    format.list(&mut out, &report.explanations);

    format.heading(&mut out, "3. Verification checklist");
    format.label(&mut out, "You can check");
    format.list(&mut out, &report.owner_checklist);
    format.label(&mut out, "For the mechanic");
    format.list(&mut out, &report.mechanic_checklist);
    format.label(&mut out, "Needs immediate attention");
    format.list(&mut out, &report.urgent_risks);

    format.heading(&mut out, "4. Recommended solutions and priorities");
    format.list(&mut out, &report.remedies);

    format.heading(&mut out, "5. Estimated cost range (Brazil)");
    for tier in report.cost_estimate.tiers() {
        let _ = writeln!(out, "{}", tier_line(tier));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "6. Next step: {}", report.next_step);
    out
}

fn tier_line(tier: &TierEstimate) -> String {
    let parts = tier
        .parts
        .iter()
        .map(|p| format!("{} {}", p.component.as_str().replace('_', " "), p.parts))
        .collect::<Vec<_>>()
        .join("; ");
    format!(
        "- {} cost: {} Parts: {}. Labor: {}.",
        capitalize(tier.tier.as_str()),
        tier.scope,
        parts,
        tier.labor
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

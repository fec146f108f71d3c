//! Free-Text Normalization
//!
//! Keyword matching runs on a lower-cased copy of the owner's text. The copy
//! is built once per request so every rule sees the same haystack.

use crate::record::SymptomRecord;

/// Trim a raw form value, treating absent input as empty
pub fn sanitize(text: Option<&str>) -> String {
    text.unwrap_or_default().trim().to_string()
}

/// Lower-cased text ready for case-insensitive substring matching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    folded: String,
}

impl NormalizedText {
    /// Normalize a single piece of text
    pub fn new(text: &str) -> Self {
        Self {
            folded: text.trim().to_lowercase(),
        }
    }

    /// Normalize several fields into one haystack, one field per line
    pub fn joined<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let folded = parts
            .into_iter()
            .map(|part| part.trim().to_lowercase())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        Self { folded }
    }

    /// True when any of `terms` occurs in the text, ignoring case
    pub fn contains_any(&self, terms: &[&str]) -> bool {
        terms
            .iter()
            .any(|term| !term.is_empty() && self.folded.contains(&term.to_lowercase()))
    }

    /// The folded text
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Whether there is no text at all
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Normalized free text of one symptom record
#[derive(Debug, Clone, Default)]
pub struct NormalizedSymptoms {
    /// What the temperature gauge shows
    pub gauge: NormalizedText,
    /// Symptoms, history and smells/noises together
    pub narrative: NormalizedText,
}

impl NormalizedSymptoms {
    /// Build the matching copies of a record's free text
    pub fn from_record(record: &SymptomRecord) -> Self {
        Self {
            gauge: NormalizedText::new(&record.gauge_temperature),
            narrative: NormalizedText::joined([
                record.symptoms.as_str(),
                record.history.as_str(),
                record.smells_noises.as_str(),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(Some("  Gol 2012 \n")), "Gol 2012");
        assert_eq!(sanitize(None), "");
    }

    #[test]
    fn test_contains_any_ignores_case() {
        let text = NormalizedText::new("O carro FERVE no trânsito");
        assert!(text.contains_any(&["ferve"]));
        assert!(text.contains_any(&["nope", "TRÂNSITO"]));
        assert!(!text.contains_any(&["radiador"]));
    }

    #[test]
    fn test_empty_terms_never_match() {
        let text = NormalizedText::new("anything");
        assert!(!text.contains_any(&[""]));
        assert!(!text.contains_any(&[]));
    }

    #[test]
    fn test_joined_skips_blank_fields() {
        let text = NormalizedText::joined(["  Chiado ", "", "   "]);
        assert_eq!(text.as_str(), "chiado");
    }

    #[test]
    fn test_record_narrative_covers_history_and_noises() {
        let record = SymptomRecord {
            symptoms: "Temperatura oscila".to_string(),
            history: "Trocou a BOMBA".to_string(),
            smells_noises: "Ronco na bomba".to_string(),
            gauge_temperature: " Acima do meio ".to_string(),
            ..Default::default()
        };

        let normalized = NormalizedSymptoms::from_record(&record);
        assert_eq!(normalized.gauge.as_str(), "acima do meio");
        assert!(normalized.narrative.contains_any(&["trocou a bomba"]));
        assert!(normalized.narrative.contains_any(&["ronco na bomba"]));
    }
}

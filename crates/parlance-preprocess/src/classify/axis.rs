use parlance_core::errors::{ConfigError, ParlanceResult};
use parlance_core::models::{Axis, Classification, Label};
use regex::Regex;

use crate::pattern::{check_confidence, compile};

/// One cue: a pattern and the verdict it forces.
#[derive(Debug, Clone)]
pub struct CueRule {
    pub regex: Regex,
    pub label: Label,
    pub confidence: f64,
}

/// Ordered cue rules for one axis plus the verdict used when none match.
#[derive(Debug, Clone)]
pub struct AxisTable {
    axis: Axis,
    rules: Vec<CueRule>,
    default: Classification,
}

impl AxisTable {
    /// Every label, the default included, must belong to `axis`.
    pub fn new(
        axis: Axis,
        cues: &[(&str, Label, f64)],
        default_label: Label,
        default_confidence: f64,
    ) -> ParlanceResult<Self> {
        let table = format!("{}_cues", axis.as_str());
        check_label(&table, axis, default_label)?;
        check_confidence(&table, default_label.as_str(), default_confidence)?;

        let rules = cues
            .iter()
            .map(|(pattern, label, confidence)| -> ParlanceResult<CueRule> {
                check_label(&table, axis, *label)?;
                Ok(CueRule {
                    regex: compile(&table, pattern)?,
                    label: *label,
                    confidence: check_confidence(&table, label.as_str(), *confidence)?,
                })
            })
            .collect::<ParlanceResult<Vec<_>>>()?;

        Ok(Self {
            axis,
            rules,
            default: Classification::new(default_label, default_confidence),
        })
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First matching cue decides; otherwise the default.
    pub fn classify(&self, text: &str) -> Classification {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(text))
            .map(|rule| Classification::new(rule.label, rule.confidence))
            .unwrap_or(self.default)
    }
}

fn check_label(table: &str, axis: Axis, label: Label) -> ParlanceResult<()> {
    if label.axis() == axis {
        Ok(())
    } else {
        Err(ConfigError::LabelAxisMismatch {
            table: table.to_string(),
            label: label.as_str().to_string(),
            axis: axis.as_str().to_string(),
        }
        .into())
    }
}

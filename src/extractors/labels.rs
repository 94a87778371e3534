// src/extractors/labels.rs
use std::fmt;

use serde::Serialize;

/// Canonical income statement concepts recognized by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StandardLabel {
    Revenue,
    #[serde(rename = "Cost of Revenue")]
    CostOfRevenue,
    #[serde(rename = "Gross Profit")]
    GrossProfit,
    #[serde(rename = "Operating Income")]
    OperatingIncome,
    #[serde(rename = "Operating Expenses")]
    OperatingExpenses,
    #[serde(rename = "Net Income")]
    NetIncome,
    #[serde(rename = "EPS")]
    Eps,
    /// Status marker for the placeholder row emitted when a document yields
    /// no recognized rows. Never produced by `normalize_label`.
    #[serde(rename = "INFO")]
    Info,
}

impl StandardLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardLabel::Revenue => "Revenue",
            StandardLabel::CostOfRevenue => "Cost of Revenue",
            StandardLabel::GrossProfit => "Gross Profit",
            StandardLabel::OperatingIncome => "Operating Income",
            StandardLabel::OperatingExpenses => "Operating Expenses",
            StandardLabel::NetIncome => "Net Income",
            StandardLabel::Eps => "EPS",
            StandardLabel::Info => "INFO",
        }
    }
}

impl fmt::Display for StandardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Ordered rule table mapping line phrases to canonical labels. Evaluated top
// to bottom with first-match-wins, so a line matching several phrase sets
// always resolves to the earliest entry ("net sales" beats "net income").
// The order is load-bearing; tests pin it.
pub const LABEL_RULES: &[(&[&str], StandardLabel)] = &[
    (&["total net sales", "net sales"], StandardLabel::Revenue),
    (&["cost of sales"], StandardLabel::CostOfRevenue),
    (&["gross margin", "gross profit"], StandardLabel::GrossProfit),
    (&["operating income"], StandardLabel::OperatingIncome),
    (&["operating expenses"], StandardLabel::OperatingExpenses),
    (
        &["net income", "net profit", "net earnings"],
        StandardLabel::NetIncome,
    ),
    (&["earnings per share", "eps"], StandardLabel::Eps),
];

/// Maps a free-form line to a canonical label by walking `LABEL_RULES` in
/// order and returning the first phrase hit, or `None` if the line matches
/// no rule.
pub fn normalize_label(line: &str) -> Option<StandardLabel> {
    let lower = line.to_lowercase();
    for (phrases, label) in LABEL_RULES {
        if phrases.iter().any(|phrase| lower.contains(phrase)) {
            return Some(*label);
        }
    }
    None
}

// src/extractors/lines.rs

/// Keywords that mark a line as plausibly belonging to an income statement.
/// Matched case-insensitively against the trimmed line.
pub const FINANCIAL_TERMS: &[&str] = &[
    "revenue",
    "sales",
    "cost",
    "gross",
    "operating income",
    "operating expenses",
    "net income",
    "earnings per share",
    "eps",
];

/// Returns the ordered subsequence of lines that plausibly describe a
/// financial statement row: trimmed, containing at least one digit and at
/// least one financial term. Lines failing either condition are dropped
/// silently.
pub fn candidate_lines(text: &str) -> Vec<String> {
    let mut extracted = Vec::new();

    for line in text.lines() {
        let clean = line.trim();
        if clean.is_empty() {
            continue;
        }
        let lower = clean.to_lowercase();

        // Must contain numbers AND financial keywords
        if clean.chars().any(|c| c.is_ascii_digit())
            && FINANCIAL_TERMS.iter().any(|term| lower.contains(term))
        {
            extracted.push(clean.to_string());
        }
    }

    extracted
}

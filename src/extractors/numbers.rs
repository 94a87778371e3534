// src/extractors/numbers.rs
use once_cell::sync::Lazy;
use regex::Regex;

// Matches signed or accounting-formatted numbers: an optional leading
// parenthesis or minus, one digit, then digits/commas/periods, and an
// optional closing parenthesis.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?-?\d[\d,\.]*\)?").expect("Failed to compile NUMBER_RE")
});

/// Extracts the numeric tokens of a line in left-to-right order, normalized
/// to signed decimal strings: thousands-separator commas are stripped, and a
/// value wrapped in parentheses (accounting negative notation) is rewritten
/// with a leading minus sign, e.g. `(1,234)` becomes `-1234`.
///
/// Tokens stay strings rather than floats so large accounting figures keep
/// their exact digits. A line with no matches yields an empty vector.
pub fn extract_numbers(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for m in NUMBER_RE.find_iter(line) {
        let mut num = m.as_str().replace(',', "");
        // Only a paired open/close parenthesis means accounting-negative;
        // a stray parenthesis is left in place.
        if num.contains('(') && num.contains(')') {
            num = format!("-{}", num.replace('(', "").replace(')', ""));
        }
        tokens.push(num);
    }

    tokens
}

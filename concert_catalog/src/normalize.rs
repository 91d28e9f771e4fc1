//! Location key normalization.
//!
//! Raw keys look like `new_york-usa`: words joined by `_`, city and country
//! joined by `-`. Normalization turns them into `New York, USA`.

/// Normalizes a raw location key for display.
///
/// Steps, each applied to the previous step's output:
/// 1. every `-` becomes `, `
/// 2. every `_` becomes a space
/// 3. the first letter of every whitespace-delimited word is upper-cased
/// 4. every `, Usa` becomes `, USA` and every `, Uk` becomes `, UK`
///
/// Step 4 is a plain substring replacement, so `london-ukraine` comes out as
/// `London, UKraine`.
pub fn normalize_location(raw: &str) -> String {
    let spaced = raw.replace('-', ", ").replace('_', " ");
    title_case(&spaced)
        .replace(", Usa", ", USA")
        .replace(", Uk", ", UK")
}

/// Upper-cases the first character of each whitespace-delimited word and
/// leaves everything else, including the whitespace itself, untouched.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

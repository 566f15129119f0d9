//! Total order over version strings
//!
//! Every scheme shares the same ordering. Versions are split into components
//! on `.`, `_` or `-`, and each component is further split into runs of
//! digits and runs of everything else, so `"59c"` compares as `59` then `c`.

use std::cmp::Ordering;

/// Characters separating version components
pub const SEPARATORS: [char; 3] = ['.', '_', '-'];

/// Split a version string into its components
///
/// Examples:
/// - "1.2.3" -> ["1", "2", "3"]
/// - "2020_03_15" -> ["2020", "03", "15"]
/// - "59b" -> ["59b"]
pub fn split_components(version: &str) -> Vec<&str> {
    version.trim().split(SEPARATORS).collect()
}

#[derive(Debug, Clone, Copy)]
enum Token<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Token<'a> {
    fn new(run: &'a str, is_digits: bool) -> Self {
        if is_digits {
            Token::Digits(run)
        } else {
            Token::Text(run)
        }
    }
}

fn tokenize(component: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current_kind = None;

    for (idx, ch) in component.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if let Some(prev) = current_kind
            && prev != is_digit
        {
            tokens.push(Token::new(&component[start..idx], prev));
            start = idx;
        }
        current_kind = Some(is_digit);
    }

    if let Some(is_digit) = current_kind {
        tokens.push(Token::new(&component[start..], is_digit));
    }

    tokens
}

/// Compare two digit runs by value without parsing, so arbitrarily long runs
/// never overflow.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_tokens(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Digits(a), Token::Digits(b)) => compare_numeric(a, b),
        (Token::Digits(_), Token::Text(_)) => Ordering::Greater,
        (Token::Text(_), Token::Digits(_)) => Ordering::Less,
        (Token::Text(a), Token::Text(b)) => a.cmp(b),
    }
}

fn compare_components(a: &str, b: &str) -> Ordering {
    let left = tokenize(a);
    let right = tokenize(b);

    left.iter()
        .zip(&right)
        .map(|(l, r)| compare_tokens(l, r))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
}

/// Compare two version strings
///
/// Components are compared pairwise; when every shared component ties, the
/// version with more components is greater. Remaining ties (`"1.01"` vs
/// `"1.1"`) fall back to the raw strings so the order stays strict.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = split_components(a);
    let right = split_components(b);

    left.iter()
        .zip(&right)
        .map(|(l, r)| compare_components(l, r))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
        .then_with(|| a.cmp(b))
}

/// Return the greatest version, or None if there are none
pub fn max_version<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    versions
        .into_iter()
        .max_by(|a, b| compare_versions(a, b))
}

//! `DOCENT_*` override parsing
//!
//! Every override goes through [`EnvOverrides`]. An unusable value keeps the
//! current setting and prints one warning naming the variable, with a typo
//! suggestion when a close valid value exists.

use std::io::Write;

/// Largest edit distance still offered as a "did you mean"
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Reads override variables through `lookup` and reports bad values to `writer`
pub(crate) struct EnvOverrides<'w, L, W> {
    lookup: L,
    writer: &'w mut W,
}

impl<'w, L, W> EnvOverrides<'w, L, W>
where
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    pub(crate) fn new(lookup: L, writer: &'w mut W) -> Self {
        Self { lookup, writer }
    }

    /// Free text; blank values are ignored
    pub(crate) fn text(&mut self, var: &str) -> Option<String> {
        (self.lookup)(var)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// One of `valid`, decoded by `parse`
    pub(crate) fn choice<T>(
        &mut self,
        var: &str,
        valid: &[&str],
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        let value = (self.lookup)(var)?;
        if let Some(parsed) = parse(&value) {
            return Some(parsed);
        }
        let hint = suggest(&value.trim().to_ascii_lowercase(), valid)
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        self.warn(var, &value, &hint, &format!("Valid values: {}", valid.join(", ")));
        None
    }

    /// Whole seconds
    pub(crate) fn seconds(&mut self, var: &str) -> Option<u64> {
        let value = (self.lookup)(var)?;
        match value.trim().parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(_) => {
                self.warn(var, &value, "", "Expected whole seconds (0 waits forever)");
                None
            }
        }
    }

    fn warn(&mut self, var: &str, value: &str, hint: &str, expected: &str) {
        let _ = writeln!(self.writer, "Warning: Invalid {} value '{}'{}", var, value, hint);
        let _ = writeln!(self.writer, "{}", expected);
    }
}

/// Closest entry of `candidates` within two edits of `input`, if any
pub(crate) fn suggest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(input, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist > 0 && dist <= MAX_SUGGESTION_DISTANCE)
        .map(|(candidate, _)| candidate)
}

/// Edit distance over bytes
fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

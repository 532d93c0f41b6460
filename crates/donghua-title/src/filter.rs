//! Noise filtering and marker canonicalization.
//!
//! The filter takes a raw title stem and rewrites it so that the number
//! extractor only ever sees ASCII digits bounded by the canonical
//! `第N集`-style marker. Four passes, in fixed order:
//!
//! 1. remove configured noise tokens (resolution/quality tags),
//! 2. rewrite Chinese-numeral episode markers (第十二集 → 第12集),
//! 3. rewrite a lone English season marker (S07) into the canonical form,
//!    but only when no other episode marker exists in the string,
//! 4. on the "season unit adjacent to digits or a hyphen" anomaly, strip
//!    every 第 so the all-numbers fallback handles the title.

use std::sync::LazyLock;

use regex::Regex;

use crate::numeral::{self, NumeralError};

/// A Chinese numeral run bounded by 第 and a unit marker. Lazy capture so
/// the run ends at the first unit character; anything non-numeral inside
/// the run is caught at conversion time.
static CH_NUMERAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一-鿿]+?)([集季话])").expect("valid pattern")
});

/// Canonical ASCII-digit marker, any unit.
static CANONICAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第\d+[集季话]").expect("valid pattern"));

/// English episode marker in any of its observed spellings.
static EN_EPISODE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ep?\s*\d+|episode\s*\d+").expect("valid pattern"));

/// English season marker (S07).
static EN_SEASON_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Ss](\d+)").expect("valid pattern"));

/// Season unit directly against a hyphen or digit, e.g. "第二季-12" after
/// numeral rewrite becomes "第2季-12". Sites that glue the episode count
/// onto the season unit this way confuse the marker rules. Strict
/// adjacency: "第2季 12" (spaced) is a normal marker title, not this.
static SEASON_ANOMALY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"季[-\d]").expect("valid pattern"));

/// Apply all filter passes to a title stem.
///
/// Pure string transform; the only failure is an unconvertible Chinese
/// numeral run, which is surfaced rather than guessed at.
pub(crate) fn filter(stem: &str, noise_tokens: &[String]) -> Result<String, NumeralError> {
    let mut text = stem.to_string();

    for token in noise_tokens {
        if text.contains(token.as_str()) {
            text = text.replace(token.as_str(), "");
        }
    }

    text = rewrite_chinese_numerals(&text)?;
    text = rewrite_english_season(&text);

    if SEASON_ANOMALY.is_match(&text) {
        tracing::trace!(title = %text, "season anomaly, stripping markers");
        text = text.replace('第', "");
    }

    Ok(text)
}

/// Convert every 第<numerals><unit> occurrence to 第<digits><unit>.
fn rewrite_chinese_numerals(text: &str) -> Result<String, NumeralError> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in CH_NUMERAL_MARKER.captures_iter(text) {
        let whole = caps.get(0).ok_or(NumeralError::Empty)?;
        let run = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let unit = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let value = numeral::to_decimal(run)?;
        out.push_str(&text[last..whole.start()]);
        out.push('第');
        out.push_str(&value.to_string());
        out.push_str(unit);
        last = whole.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Rewrite S<digits> to the canonical marker, but only when the string
/// carries no other episode marker. Titles that mix conventions (S02E07)
/// are left for the English extraction rule; a bare S-number is the site
/// convention for an episode count.
fn rewrite_english_season(text: &str) -> String {
    if CANONICAL_MARKER.is_match(text) || EN_EPISODE_MARKER.is_match(text) {
        return text.to_string();
    }
    EN_SEASON_MARKER.replace_all(text, "第${1}集").into_owned()
}

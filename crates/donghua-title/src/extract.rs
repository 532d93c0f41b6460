//! Number extraction.
//!
//! An ordered table of rules is tried against the filtered stem; the first
//! rule that matches produces the [`NumberSet`] and the rest are skipped.
//! The order is load-bearing: range rules must beat the single-episode
//! rules (a "第5-8集" title also contains digits that would satisfy the
//! fallback), and the English rule runs against the raw stem because the
//! filter may already have consumed its markers.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::NumberSet;

/// Optional season marker, then a unit-bounded NN-MM range anywhere later.
static SEASON_AND_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:第(\d+)[集季话])?.*?第?(\d+)\s*[-~～]\s*(\d+)[集季话]").expect("valid pattern")
});

/// Plain numeric range, no unit marker required.
static BARE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[-~～]\s*(\d+)").expect("valid pattern"));

/// Canonical marker with ASCII digits.
static CANONICAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第(\d+)[集季话]").expect("valid pattern"));

/// English season followed by an episode marker, anywhere later.
static EN_SEASON_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)[Ss](\d+).*?[Ee][Pp]?\s*(\d+)").expect("valid pattern")
});

/// English episode marker alone.
static EN_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Ee][Pp]?\s*(\d+)").expect("valid pattern"));

/// Any run of ASCII digits.
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid pattern"));

/// One extraction rule. `apply` gets the filtered stem and the raw stem;
/// it returns `Some` only when the rule positively matched.
struct Rule {
    name: &'static str,
    apply: fn(filtered: &str, raw: &str) -> Option<NumberSet>,
}

/// The rule table, in priority order.
static RULES: &[Rule] = &[
    Rule {
        name: "season-and-range",
        apply: season_and_range,
    },
    Rule {
        name: "bare-range",
        apply: bare_range,
    },
    Rule {
        name: "canonical-marker",
        apply: canonical_marker,
    },
    Rule {
        name: "english-season-episode",
        apply: english_season_episode,
    },
    Rule {
        name: "all-numbers",
        apply: all_numbers,
    },
];

/// Run the rule table and normalize the winning rule's fields.
///
/// Total over its inputs: a stem with no digits anywhere yields an empty
/// [`NumberSet`], which is a defined outcome rather than an error.
pub(crate) fn extract(filtered: &str, raw: &str) -> NumberSet {
    for rule in RULES {
        if let Some(set) = (rule.apply)(filtered, raw) {
            tracing::trace!(rule = rule.name, ?set, "extraction rule matched");
            return normalize(set);
        }
    }
    NumberSet::default()
}

fn season_and_range(filtered: &str, _raw: &str) -> Option<NumberSet> {
    let caps = SEASON_AND_RANGE.captures(filtered)?;
    let first = caps.get(2)?.as_str().to_string();
    let last = caps.get(3)?.as_str().to_string();
    Some(NumberSet {
        season: caps.get(1).map(|m| m.as_str().to_string()),
        episode: None,
        episode_range: Some((first, last)),
    })
}

fn bare_range(filtered: &str, _raw: &str) -> Option<NumberSet> {
    if !BARE_RANGE.is_match(filtered) {
        return None;
    }
    // A range was seen somewhere; the fields come from every digit run in
    // the stem, in order. Three or more runs mean a season precedes the
    // range bounds.
    let runs = digit_runs(filtered);
    match runs.len() {
        n if n >= 3 => Some(NumberSet {
            season: Some(runs[0].clone()),
            episode: None,
            episode_range: Some((runs[1].clone(), runs[2].clone())),
        }),
        2 => Some(NumberSet {
            season: None,
            episode: None,
            episode_range: Some((runs[0].clone(), runs[1].clone())),
        }),
        _ => None,
    }
}

fn canonical_marker(filtered: &str, _raw: &str) -> Option<NumberSet> {
    let mut matches = CANONICAL_MARKER.captures_iter(filtered);
    let first = matches.next()?.get(1)?.as_str().to_string();
    match matches.next().and_then(|c| c.get(1)) {
        // Repeated marker: the first occurrence is the season.
        Some(second) => Some(NumberSet {
            season: Some(first),
            episode: Some(second.as_str().to_string()),
            episode_range: None,
        }),
        None => Some(NumberSet {
            season: None,
            episode: Some(first),
            episode_range: None,
        }),
    }
}

fn english_season_episode(_filtered: &str, raw: &str) -> Option<NumberSet> {
    if let Some(caps) = EN_SEASON_EPISODE.captures(raw) {
        return Some(NumberSet {
            season: Some(caps.get(1)?.as_str().to_string()),
            episode: Some(caps.get(2)?.as_str().to_string()),
            episode_range: None,
        });
    }
    let caps = EN_EPISODE.captures(raw)?;
    Some(NumberSet {
        season: None,
        episode: Some(caps.get(1)?.as_str().to_string()),
        episode_range: None,
    })
}

fn all_numbers(filtered: &str, _raw: &str) -> Option<NumberSet> {
    let runs = digit_runs(filtered);
    match runs.len() {
        0 => Some(NumberSet::default()),
        1 => Some(NumberSet {
            season: None,
            episode: Some(runs[0].clone()),
            episode_range: None,
        }),
        _ => Some(NumberSet {
            season: Some(runs[0].clone()),
            episode: Some(runs[1].clone()),
            episode_range: None,
        }),
    }
}

fn digit_runs(text: &str) -> Vec<String> {
    DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strip leading zeros from every field; an all-zero field becomes "0".
fn normalize(mut set: NumberSet) -> NumberSet {
    set.season = set.season.map(|s| strip_zeros(&s));
    set.episode = set.episode.map(|s| strip_zeros(&s));
    set.episode_range = set
        .episode_range
        .map(|(a, b)| (strip_zeros(&a), strip_zeros(&b)));
    set
}

fn strip_zeros(field: &str) -> String {
    let stripped = field.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(n: &str) -> NumberSet {
        NumberSet {
            episode: Some(n.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_marked_range() {
        let set = extract("Show 第5-8集", "Show 第5-8集");
        assert_eq!(set.episode_range, Some(("5".into(), "8".into())));
        assert!(set.season.is_none());
    }

    #[test]
    fn test_season_with_range() {
        let set = extract("第2季 第5-8集", "第2季 第5-8集");
        assert_eq!(set.season.as_deref(), Some("2"));
        assert_eq!(set.episode_range, Some(("5".into(), "8".into())));
    }

    #[test]
    fn test_bare_range() {
        let set = extract("Show 5~8", "Show 5~8");
        assert_eq!(set.episode_range, Some(("5".into(), "8".into())));
    }

    #[test]
    fn test_bare_range_with_leading_season() {
        let set = extract("2季 5-8", "2季 5-8");
        assert_eq!(set.season.as_deref(), Some("2"));
        assert_eq!(set.episode_range, Some(("5".into(), "8".into())));
    }

    #[test]
    fn test_single_marker() {
        assert_eq!(extract("完美世界 第12集", "完美世界 第12集"), episode("12"));
    }

    #[test]
    fn test_repeated_marker_is_season_then_episode() {
        let set = extract("第2季第7集", "第2季第7集");
        assert_eq!(set.season.as_deref(), Some("2"));
        assert_eq!(set.episode.as_deref(), Some("7"));
    }

    #[test]
    fn test_english_season_episode_from_raw() {
        let set = extract("Show S02E07", "Show S02E07");
        assert_eq!(set.season.as_deref(), Some("2"));
        assert_eq!(set.episode.as_deref(), Some("7"));
    }

    #[test]
    fn test_english_episode_only() {
        assert_eq!(extract("Show EP5", "Show EP5"), episode("5"));
    }

    #[test]
    fn test_all_numbers_fallback() {
        assert_eq!(extract("Show 42", "Show 42"), episode("42"));
        let set = extract("2季12", "2季12");
        assert_eq!(set.season.as_deref(), Some("2"));
        assert_eq!(set.episode.as_deref(), Some("12"));
    }

    #[test]
    fn test_no_digits_is_empty() {
        assert!(extract("雾山五行", "雾山五行").is_empty());
    }

    #[test]
    fn test_leading_zero_strip() {
        assert_eq!(extract("第03集", "第03集"), episode("3"));
        assert_eq!(extract("第000集", "第000集"), episode("0"));
    }

    #[test]
    fn test_range_beats_fallback() {
        // The digits 5 and 8 would also satisfy the fallback as
        // season+episode; the range rules must win.
        let set = extract("Show 第5-8集", "Show 第5-8集");
        assert!(set.episode.is_none());
        assert!(set.episode_range.is_some());
    }
}

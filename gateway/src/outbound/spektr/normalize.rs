//! Normalizers for free-text Spektr profile fields.
//!
//! Upstream serves a prose balance string, a single full-name field in
//! last-first order, and string flags; these helpers turn them into typed
//! values during DTO mapping.

use std::sync::LazyLock;

use regex::Regex;

static BALANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Баланс:\s*(-?\d+(?:[.,]\d+)?)").expect("balance regex is valid")
});

/// Extract the labelled balance from an upstream prose string.
///
/// Returns `0.0` when the label or number is missing; callers must treat
/// zero as "unparseable", not as a verified zero balance.
pub(super) fn extract_balance(prose: &str) -> f64 {
    BALANCE_RE
        .captures(prose)
        .and_then(|caps| caps.get(1))
        .and_then(|number| number.as_str().replace(',', ".").parse().ok())
        .unwrap_or(0.0)
}

/// Ordered parts of a split full name.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct NameParts {
    pub(super) first: String,
    pub(super) middle: String,
    pub(super) last: String,
}

/// Split an upstream full name into (first, middle, last).
///
/// Upstream stores names in last-first order, so the first token is the
/// family name and the final token the given name; anything between is the
/// middle name. A single token is a family name alone. This ordering matches
/// the upstream convention and must not be "fixed" independently of it.
pub(super) fn split_full_name(full_name: &str) -> NameParts {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.as_slice() {
        [] => NameParts::default(),
        [last] => NameParts {
            last: (*last).into(),
            ..NameParts::default()
        },
        [last, middle @ .., first] => NameParts {
            first: (*first).into(),
            middle: middle.join(" "),
            last: (*last).into(),
        },
    }
}

/// Coerce an upstream string flag: exactly `"1"` is enabled, everything
/// else (including empty) is disabled.
pub(super) fn flag_enabled(flag: &str) -> bool {
    flag == "1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::labelled("№ 10001466 Баланс: 390.67", 390.67)]
    #[case::comma_decimal("Баланс: 12,50", 12.5)]
    #[case::negative("Баланс: -5.00", -5.0)]
    #[case::integer("Баланс: 100", 100.0)]
    #[case::no_label("№ 10001466", 0.0)]
    #[case::empty("", 0.0)]
    #[case::label_without_number("Баланс: скоро", 0.0)]
    fn balance_extraction(#[case] prose: &str, #[case] expected: f64) {
        assert_eq!(extract_balance(prose), expected);
    }

    #[rstest]
    #[case::two_tokens("Ivanov Ivan", "Ivan", "", "Ivanov")]
    #[case::three_tokens("Ivanov Ivanovich Ivan", "Ivan", "Ivanovich", "Ivanov")]
    #[case::single_token("Ivanov", "", "", "Ivanov")]
    #[case::four_tokens("Ivanov Ivanovich Petrovich Ivan", "Ivan", "Ivanovich Petrovich", "Ivanov")]
    #[case::empty("", "", "", "")]
    #[case::extra_whitespace("  Ivanov   Ivan  ", "Ivan", "", "Ivanov")]
    fn name_splitting(
        #[case] full_name: &str,
        #[case] first: &str,
        #[case] middle: &str,
        #[case] last: &str,
    ) {
        assert_eq!(
            split_full_name(full_name),
            NameParts {
                first: first.into(),
                middle: middle.into(),
                last: last.into(),
            }
        );
    }

    #[rstest]
    #[case::enabled("1", true)]
    #[case::zero("0", false)]
    #[case::empty("", false)]
    #[case::word("yes", false)]
    fn flag_coercion(#[case] flag: &str, #[case] expected: bool) {
        assert_eq!(flag_enabled(flag), expected);
    }
}

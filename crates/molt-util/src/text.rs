//! Regular-expression helpers.

use regex::Regex;

/// The first substring of `haystack` matched by `re`.
///
/// ```
/// use molt_util::{re_match, Regex};
///
/// let re = Regex::new(r"\d+").unwrap();
/// assert_eq!(re_match(&re, "order 42 of 50"), Some("42"));
/// assert_eq!(re_match(&re, "none"), None);
/// ```
pub fn re_match<'h>(re: &Regex, haystack: &'h str) -> Option<&'h str> {
    re.find(haystack).map(|m| m.as_str())
}

/// All capture groups of the first match, group 0 (the whole match) first.
///
/// Groups that did not participate in the match are `None`.
pub fn re_captures<'h>(re: &Regex, haystack: &'h str) -> Option<Vec<Option<&'h str>>> {
    let caps = re.captures(haystack)?;
    Some(caps.iter().map(|g| g.map(|m| m.as_str())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_include_optional_groups() {
        let re = Regex::new(r"(\w+)@(\w+)(\.com)?").unwrap();
        let caps = re_captures(&re, "mail al@example now").unwrap();
        assert_eq!(
            caps,
            vec![Some("al@example"), Some("al"), Some("example"), None]
        );
    }

    #[test]
    fn no_match_yields_none() {
        let re = Regex::new(r"^x").unwrap();
        assert_eq!(re_captures(&re, "abc"), None);
        assert_eq!(re_match(&re, "abc"), None);
    }
}

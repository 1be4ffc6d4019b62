use regex::Regex;

/// Version-shaped tag naming scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPattern {
    /// `v<major>.<minor>.<patch>`
    Prefixed,
    /// `<major>.<minor>.<patch>`
    Bare,
}

impl TagPattern {
    /// Patterns in the order they are consulted when picking the latest tag
    pub const PREFERENCE: [TagPattern; 2] = [TagPattern::Prefixed, TagPattern::Bare];

    fn regex_source(&self) -> &'static str {
        match self {
            TagPattern::Prefixed => r"^v\d+\.\d+\.\d+$",
            TagPattern::Bare => r"^\d+\.\d+\.\d+$",
        }
    }

    /// Check whether a tag name follows this pattern
    pub fn matches(&self, tag: &str) -> bool {
        Regex::new(self.regex_source())
            .map(|re| re.is_match(tag))
            .unwrap_or(false)
    }
}

/// Release tag candidates from a newest-first tag list, best first.
///
/// Every `v`-prefixed tag comes before every bare tag, regardless of age.
/// Within a pattern the newest tag comes first, even when a numerically
/// greater tag exists.
pub fn release_candidates(tags_newest_first: &[String]) -> Vec<&str> {
    TagPattern::PREFERENCE
        .iter()
        .flat_map(|pattern| {
            tags_newest_first
                .iter()
                .map(String::as_str)
                .filter(move |tag| pattern.matches(tag))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pattern_matches() {
        assert!(TagPattern::Prefixed.matches("v1.2.3"));
        assert!(!TagPattern::Prefixed.matches("1.2.3"));
        assert!(!TagPattern::Prefixed.matches("v1.2.3-rc.1"));
        assert!(!TagPattern::Prefixed.matches("release-1.2.3"));
        assert!(TagPattern::Bare.matches("10.20.30"));
        assert!(!TagPattern::Bare.matches("v1.2.3"));
        assert!(!TagPattern::Bare.matches("1.2"));
    }

    #[test]
    fn test_candidates_newest_not_greatest() {
        let list = tags(&["v1.0.5", "v2.0.0", "v1.0.4"]);
        assert_eq!(release_candidates(&list), vec!["v1.0.5", "v2.0.0", "v1.0.4"]);
    }

    #[test]
    fn test_candidates_prefer_prefixed() {
        let list = tags(&["3.0.0", "nightly", "v1.4.1", "2.0.0", "v1.4.0"]);
        assert_eq!(
            release_candidates(&list),
            vec!["v1.4.1", "v1.4.0", "3.0.0", "2.0.0"]
        );
    }

    #[test]
    fn test_candidates_fall_back_to_bare() {
        let list = tags(&["latest", "0.9.1", "0.9.0"]);
        assert_eq!(release_candidates(&list).first(), Some(&"0.9.1"));
    }

    #[test]
    fn test_no_candidates() {
        assert!(release_candidates(&[]).is_empty());
        let list = tags(&["latest", "release-candidate"]);
        assert!(release_candidates(&list).is_empty());
    }
}

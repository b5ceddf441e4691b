//! Course name matching against a per-call vocabulary.
//!
//! Course names are institution data, not a fixed enum, so the matcher is
//! compiled from whatever vocabulary the store returns for one call and
//! dropped with it. Nothing here is cached across callers.

use crate::core::error::DomainError;
use regex::{Regex, RegexSet};
use std::collections::BTreeSet;

/// Compiled matcher over a course vocabulary.
///
/// Every course whose (case-insensitive) name occurs as a substring of the
/// text is reported, including overlapping names such as `algorithms` and
/// `advanced algorithms`.
#[derive(Debug, Clone)]
pub struct CourseMatcher {
    names: Vec<String>,
    set: RegexSet,
}

impl CourseMatcher {
    /// Build a matcher from raw course names.
    ///
    /// Names are trimmed and lower-cased; blanks and duplicates are skipped.
    pub fn from_vocabulary<I, S>(vocabulary: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in vocabulary {
            let name = name.as_ref().trim().to_lowercase();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }

        let set = RegexSet::new(
            names
                .iter()
                .map(|name| format!("(?i){}", regex::escape(name))),
        )
        .map_err(|e| DomainError::InvalidPattern(e.to_string()))?;

        Ok(Self { names, set })
    }

    /// Matcher with no vocabulary; matches nothing.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            set: RegexSet::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Lower-cased names of every course mentioned in `text`.
    pub fn matches(&self, text: &str) -> BTreeSet<String> {
        self.set
            .matches(text)
            .into_iter()
            .map(|index| self.names[index].clone())
            .collect()
    }
}

/// Narrowing predicate over course names, built from matched courses.
///
/// The pattern is an escaped, case-insensitive alternation so stores that
/// speak regex (e.g. SQL `REGEXP`) can use [`CoursePattern::as_str`] directly.
#[derive(Debug, Clone)]
pub struct CoursePattern {
    regex: Regex,
}

impl CoursePattern {
    /// Build a pattern from course names; `None` when there are none,
    /// which means "no constraint on the course axis".
    pub fn from_courses<I, S>(courses: I) -> Result<Option<Self>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = courses
            .into_iter()
            .map(|c| regex::escape(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect();
        if alternatives.is_empty() {
            return Ok(None);
        }

        let regex = Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))
            .map_err(|e| DomainError::InvalidPattern(e.to_string()))?;
        Ok(Some(Self { regex }))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether a stored course name satisfies the pattern
    pub fn is_match(&self, course_name: &str) -> bool {
        self.regex.is_match(course_name)
    }
}

impl std::fmt::Display for CoursePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.regex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_substring_case_insensitively() {
        let matcher = CourseMatcher::from_vocabulary(["Algorithms", "Databases"]).unwrap();
        let found = matcher.matches("what's my grade in DATABASES");
        assert_eq!(found, BTreeSet::from(["databases".to_string()]));
    }

    #[test]
    fn test_courses_not_mentioned_are_excluded() {
        let matcher = CourseMatcher::from_vocabulary(["Algorithms", "Databases"]).unwrap();
        assert!(matcher.matches("schedule for monday").is_empty());
    }

    #[test]
    fn test_overlapping_names_all_match() {
        let matcher =
            CourseMatcher::from_vocabulary(["Algorithms", "Advanced Algorithms"]).unwrap();
        let found = matcher.matches("who teaches advanced algorithms");
        assert_eq!(found.len(), 2);
        assert!(found.contains("algorithms"));
        assert!(found.contains("advanced algorithms"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let matcher = CourseMatcher::from_vocabulary(["C++ (Intro)", "Stats.101"]).unwrap();
        assert_eq!(
            matcher.matches("grade in c++ (intro)"),
            BTreeSet::from(["c++ (intro)".to_string()])
        );
        assert!(matcher.matches("grade in stats-101").is_empty());
    }

    #[test]
    fn test_blank_and_duplicate_names_are_skipped() {
        let matcher = CourseMatcher::from_vocabulary(["  ", "Networks", "networks "]).unwrap();
        assert_eq!(matcher.len(), 1);
    }

    #[test]
    fn test_empty_vocabulary_matches_nothing() {
        let matcher = CourseMatcher::from_vocabulary(Vec::<String>::new()).unwrap();
        assert!(matcher.is_empty());
        assert!(matcher.matches("algorithms").is_empty());
        assert!(CourseMatcher::empty().matches("anything").is_empty());
    }

    #[test]
    fn test_course_pattern_none_when_no_courses() {
        assert!(CoursePattern::from_courses(Vec::<String>::new()).unwrap().is_none());
    }

    #[test]
    fn test_course_pattern_matches_stored_names() {
        let pattern = CoursePattern::from_courses(["databases", "c++"]).unwrap().unwrap();
        assert!(pattern.is_match("Databases"));
        assert!(pattern.is_match("Intro to C++"));
        assert!(!pattern.is_match("Algorithms"));
        assert_eq!(pattern.as_str(), r"(?i)(?:databases|c\+\+)");
    }
}

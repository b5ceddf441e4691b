//! Intent router
//!
//! Routing is an ordered list of `(rule, intent)` pairs evaluated top to
//! bottom; the first rule whose trigger words appear in the text wins. The
//! order is [`Intent::PRIORITY`]: Assignment > Grade > Schedule > Assistant >
//! Information, since assignment and grade phrasing is more specific than the
//! informational catch-all.

use super::intent::Intent;
use crate::core::error::DomainError;
use regex::Regex;

const ASSIGNMENT_KEYWORDS: &[&str] = &[
    "assignment",
    "assignments",
    "task",
    "tasks",
    "homework",
    "due",
    "deadline",
    "deadlines",
];
const GRADE_KEYWORDS: &[&str] = &[
    "grade", "grades", "score", "scores", "mark", "marks", "result", "results",
];
const SCHEDULE_KEYWORDS: &[&str] = &[
    "schedule",
    "schedules",
    "class",
    "classes",
    "lecture",
    "lectures",
    "timetable",
];
const ASSISTANT_KEYWORDS: &[&str] = &[
    "who teaches",
    "contact",
    "assistant",
    "assistants",
    "tutor",
    "tutors",
];
const INFORMATION_KEYWORDS: &[&str] = &[
    "information",
    "info",
    "announcement",
    "announcements",
    "news",
];

/// Built-in trigger words for a routable intent
pub fn default_keywords(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Assignment => ASSIGNMENT_KEYWORDS,
        Intent::Grade => GRADE_KEYWORDS,
        Intent::Schedule => SCHEDULE_KEYWORDS,
        Intent::Assistant => ASSISTANT_KEYWORDS,
        Intent::Information => INFORMATION_KEYWORDS,
        Intent::Unknown => &[],
    }
}

/// Whole-word, case-insensitive match against a list of trigger words.
///
/// Multi-word phrases tolerate any run of whitespace between words.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    keywords: Vec<String>,
    pattern: Regex,
}

impl KeywordRule {
    pub fn new<I, S>(keywords: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.into().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(DomainError::InvalidKeyword(keyword));
            }
            if !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }

        if normalized.is_empty() {
            return Err(DomainError::InvalidKeyword(String::new()));
        }

        let alternation = normalized
            .iter()
            .map(|k| {
                k.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
            .map_err(|e| DomainError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            keywords: normalized,
            pattern,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn extended<I, S>(&self, extra: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keywords = self.keywords.clone();
        keywords.extend(extra.into_iter().map(Into::into));
        Self::new(keywords)
    }
}

/// Maps text to an [`Intent`]. Pure: the same text always routes the same way.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<(KeywordRule, Intent)>,
    fallback: Option<Intent>,
}

impl IntentRouter {
    /// Router over the built-in trigger words, without fallback
    pub fn new() -> Self {
        let rules = Intent::PRIORITY
            .iter()
            .map(|intent| {
                let rule = KeywordRule::new(default_keywords(*intent).iter().copied())
                    .expect("built-in trigger words form a valid pattern");
                (rule, *intent)
            })
            .collect();
        Self {
            rules,
            fallback: None,
        }
    }

    /// Intent to use when no rule matches (`None` routes to `Unknown`)
    pub fn with_fallback(mut self, fallback: Option<Intent>) -> Self {
        self.fallback = fallback.filter(|intent| !intent.is_unknown());
        self
    }

    /// Append trigger words to an intent's rule. Priority order is unchanged.
    pub fn with_keywords<I, S>(mut self, intent: Intent, keywords: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(slot) = self.rules.iter_mut().find(|(_, i)| *i == intent) else {
            return Err(DomainError::UnknownIntent(intent.to_string()));
        };
        slot.0 = slot.0.extended(keywords)?;
        Ok(self)
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = (&KeywordRule, Intent)> {
        self.rules.iter().map(|(rule, intent)| (rule, *intent))
    }

    pub fn fallback(&self) -> Option<Intent> {
        self.fallback
    }

    /// Route `text` to the first matching intent
    pub fn route(&self, text: &str) -> Intent {
        self.rules
            .iter()
            .find(|(rule, _)| rule.matches(text))
            .map(|(_, intent)| *intent)
            .or(self.fallback)
            .unwrap_or(Intent::Unknown)
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_each_domain() {
        let router = IntentRouter::new();
        assert_eq!(router.route("what's my grade in databases"), Intent::Grade);
        assert_eq!(router.route("schedule for monday"), Intent::Schedule);
        assert_eq!(router.route("any homework left?"), Intent::Assignment);
        assert_eq!(router.route("Who teaches algorithms"), Intent::Assistant);
        assert_eq!(router.route("latest announcements"), Intent::Information);
    }

    #[test]
    fn test_priority_first_match_wins() {
        let router = IntentRouter::new();
        assert_eq!(router.route("grade for my assignment"), Intent::Assignment);
        assert_eq!(router.route("class grades"), Intent::Grade);
        assert_eq!(router.route("contact for this class"), Intent::Schedule);
        assert_eq!(router.route("news from my tutor"), Intent::Assistant);
    }

    #[test]
    fn test_rules_are_in_priority_order() {
        let router = IntentRouter::new();
        let order: Vec<Intent> = router.rules().map(|(_, intent)| intent).collect();
        assert_eq!(order, Intent::PRIORITY.to_vec());
    }

    #[test]
    fn test_whole_words_only() {
        let router = IntentRouter::new();
        // "classic" and "undue" must not trigger
        assert_eq!(router.route("a classic undue remark"), Intent::Unknown);
    }

    #[test]
    fn test_phrase_tolerates_whitespace() {
        let router = IntentRouter::new();
        assert_eq!(router.route("who   teaches networks"), Intent::Assistant);
        assert_eq!(router.route("who knows"), Intent::Unknown);
    }

    #[test]
    fn test_unknown_without_fallback() {
        assert_eq!(IntentRouter::new().route("hello bot"), Intent::Unknown);
    }

    #[test]
    fn test_fallback_catch_all() {
        let router = IntentRouter::new().with_fallback(Some(Intent::Information));
        assert_eq!(router.route("hello bot"), Intent::Information);
        assert_eq!(router.route("my grades"), Intent::Grade);
    }

    #[test]
    fn test_unknown_fallback_is_ignored() {
        let router = IntentRouter::new().with_fallback(Some(Intent::Unknown));
        assert_eq!(router.fallback(), None);
    }

    #[test]
    fn test_extra_keywords() {
        let router = IntentRouter::new()
            .with_keywords(Intent::Grade, ["nilai"])
            .unwrap();
        assert_eq!(router.route("berapa nilai saya"), Intent::Grade);
        // Assignment still outranks the extended Grade rule
        assert_eq!(router.route("nilai homework"), Intent::Assignment);
    }

    #[test]
    fn test_extra_keywords_reject_unknown_and_blank() {
        assert!(IntentRouter::new()
            .with_keywords(Intent::Unknown, ["x"])
            .is_err());
        assert!(matches!(
            IntentRouter::new().with_keywords(Intent::Grade, ["  "]),
            Err(DomainError::InvalidKeyword(_))
        ));
    }

    #[test]
    fn test_keyword_rule_needs_a_keyword() {
        assert!(KeywordRule::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_router_is_pure() {
        let router = IntentRouter::new();
        let text = "when is the algorithms lecture";
        assert_eq!(router.route(text), router.route(text));
    }
}

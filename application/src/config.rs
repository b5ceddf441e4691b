//! Application-level configuration.
//!
//! [`DispatchConfig`] controls how the dispatcher routes text: an optional
//! catch-all intent and extra trigger words per intent. It is built by the
//! infrastructure config loader and turned into an [`IntentRouter`] here.

use portal_bot_domain::{DomainError, Intent, IntentRouter};

/// Dispatcher behavior configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchConfig {
    /// Intent for text that matches no trigger word. `None` keeps
    /// [`Intent::Unknown`].
    pub fallback: Option<Intent>,
    /// Extra trigger words, appended to the built-in ones for that intent.
    pub extra_keywords: Vec<(Intent, Vec<String>)>,
}

impl DispatchConfig {
    pub fn with_fallback(mut self, fallback: Intent) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn with_keywords<I, S>(mut self, intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_keywords
            .push((intent, keywords.into_iter().map(Into::into).collect()));
        self
    }

    /// Build the router: built-in rules, then the extra keywords, then the
    /// fallback.
    pub fn build_router(&self) -> Result<IntentRouter, DomainError> {
        let mut router = IntentRouter::new();
        for (intent, keywords) in &self.extra_keywords {
            router = router.with_keywords(*intent, keywords.iter().map(String::as_str))?;
        }
        Ok(router.with_fallback(self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_builtin_router() {
        let router = DispatchConfig::default().build_router().unwrap();
        assert_eq!(router.fallback(), None);
        assert_eq!(router.route("hello bot"), Intent::Unknown);
    }

    #[test]
    fn test_fallback_and_keywords() {
        let router = DispatchConfig::default()
            .with_fallback(Intent::Information)
            .with_keywords(Intent::Grade, ["nilai"])
            .build_router()
            .unwrap();
        assert_eq!(router.route("nilai saya"), Intent::Grade);
        assert_eq!(router.route("hello bot"), Intent::Information);
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = DispatchConfig::default()
            .with_keywords(Intent::Schedule, [""])
            .build_router()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidKeyword(_)));
    }
}

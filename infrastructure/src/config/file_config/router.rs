//! Router configuration from TOML (`[router]` section)

use super::ConfigValidationError;
use portal_bot_application::DispatchConfig;
use portal_bot_domain::Intent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw router configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Intent for text no trigger word matches ("unknown" or unset disables it)
    pub fallback: Option<String>,
    /// Extra trigger words per intent name
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl FileRouterConfig {
    /// Parse intent names and check keywords.
    pub fn to_dispatch_config(&self) -> Result<DispatchConfig, ConfigValidationError> {
        let mut config = DispatchConfig::default();

        if let Some(name) = &self.fallback {
            let intent = parse_intent("router.fallback", name)?;
            if !intent.is_unknown() {
                config = config.with_fallback(intent);
            }
        }

        for (name, keywords) in &self.keywords {
            let intent = parse_intent(&format!("router.keywords.{}", name), name)?;
            if intent.is_unknown() {
                return Err(ConfigValidationError::UnknownIntent {
                    field: format!("router.keywords.{}", name),
                    value: name.clone(),
                });
            }
            if keywords.is_empty() || keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigValidationError::EmptyKeyword {
                    intent: name.clone(),
                });
            }
            config = config.with_keywords(intent, keywords.iter().cloned());
        }

        Ok(config)
    }
}

fn parse_intent(field: &str, name: &str) -> Result<Intent, ConfigValidationError> {
    name.parse()
        .map_err(|_| ConfigValidationError::UnknownIntent {
            field: field.to_string(),
            value: name.to_string(),
        })
}

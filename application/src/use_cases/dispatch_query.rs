//! Dispatch Query use case
//!
//! Answers one free-text query:
//!
//! 1. route the text to an intent
//! 2. fetch the caller's course vocabulary and extract filters
//! 3. run the intent's lookup adapter against the store
//! 4. shape the records into response entries
//!
//! Every call is independent. The course matcher is compiled from a fresh
//! vocabulary per call and dropped afterwards.

use crate::lookup::lookup;
use crate::ports::clock::Clock;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::portal_store::{PortalStore, StoreError, VocabularyScope};
use portal_bot_domain::{
    CallerId, CourseMatcher, DomainError, EntityExtractor, ExtractedFilters, Intent, IntentRouter,
    ResponseEntry, shape,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while dispatching a query
#[derive(Error, Debug)]
pub enum DispatchQueryError {
    /// The store failed; passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid course pattern: {0}")]
    Pattern(#[from] DomainError),
}

/// Input for the DispatchQuery use case
#[derive(Debug, Clone)]
pub struct DispatchQueryInput {
    /// Authenticated caller the lookups are scoped to
    pub caller: CallerId,
    /// Raw utterance
    pub text: String,
}

impl DispatchQueryInput {
    pub fn new(caller: impl Into<CallerId>, text: impl Into<String>) -> Self {
        Self {
            caller: caller.into(),
            text: text.into(),
        }
    }
}

/// Result of one dispatched query, ready for JSON serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchQueryOutput {
    pub intent: Intent,
    pub entries: Vec<ResponseEntry>,
}

impl DispatchQueryOutput {
    /// Empty answer tagged `unknown`
    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            entries: Vec::new(),
        }
    }
}

/// Use case for answering a caller's free-text query
pub struct DispatchQueryUseCase<S: PortalStore + 'static, C: Clock + 'static> {
    store: Arc<S>,
    clock: Arc<C>,
    router: IntentRouter,
    logger: Arc<dyn ConversationLogger>,
}

impl<S: PortalStore + 'static, C: Clock + 'static> DispatchQueryUseCase<S, C> {
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            router: IntentRouter::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Replace the built-in router (e.g., with configured keywords/fallback)
    pub fn with_router(mut self, router: IntentRouter) -> Self {
        self.router = router;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn router(&self) -> &IntentRouter {
        &self.router
    }

    /// Route, extract, look up and shape one query.
    ///
    /// Unknown intents short-circuit to an empty `unknown` answer without
    /// touching the store. Store failures are returned as
    /// [`DispatchQueryError::Store`].
    pub async fn execute(
        &self,
        input: DispatchQueryInput,
    ) -> Result<DispatchQueryOutput, DispatchQueryError> {
        let intent = self.router.route(&input.text);
        debug!("Routed caller {} to {}", input.caller, intent);

        let result = self.answer(&input, intent).await;
        match &result {
            Ok(output) => {
                info!(
                    "Answered {} query for caller {} with {} entries",
                    output.intent,
                    input.caller,
                    output.entries.len()
                );
                self.log_exchange(&input, output);
            }
            Err(e) => {
                warn!("Query for caller {} failed: {}", input.caller, e);
                self.logger.log(ConversationEvent::new(
                    "query_failed",
                    serde_json::json!({
                        "caller": input.caller,
                        "text": input.text,
                        "intent": intent,
                        "error": e.to_string(),
                    }),
                ));
            }
        }
        result
    }

    /// Extract filters for `text`, matching courses against the caller's
    /// vocabulary for `intent`.
    ///
    /// A vocabulary that cannot be compiled degrades to "no course
    /// constraint"; only the store read itself can fail.
    pub async fn extract(
        &self,
        text: &str,
        caller: CallerId,
        intent: Intent,
    ) -> Result<ExtractedFilters, DispatchQueryError> {
        let scope = VocabularyScope::for_intent(intent);
        let vocabulary = self.store.course_vocabulary(caller, scope).await?;
        let matcher = match CourseMatcher::from_vocabulary(&vocabulary) {
            Ok(matcher) => matcher,
            Err(e) => {
                warn!(
                    "Ignoring course vocabulary of caller {} ({} names): {}",
                    caller,
                    vocabulary.len(),
                    e
                );
                CourseMatcher::empty()
            }
        };

        Ok(EntityExtractor::at(self.clock.now()).extract(text, &matcher))
    }

    async fn answer(
        &self,
        input: &DispatchQueryInput,
        intent: Intent,
    ) -> Result<DispatchQueryOutput, DispatchQueryError> {
        if intent.is_unknown() {
            return Ok(DispatchQueryOutput::unknown());
        }

        let filters = self.extract(&input.text, input.caller, intent).await?;
        if filters.is_unconstrained() {
            debug!(
                "No filters in query of caller {}; reading every {} row",
                input.caller, intent
            );
        }
        let Some(records) = lookup(self.store.as_ref(), intent, input.caller, &filters).await?
        else {
            return Ok(DispatchQueryOutput::unknown());
        };
        debug!("Lookup returned {} {} records", records.len(), intent);

        Ok(DispatchQueryOutput {
            intent,
            entries: shape(records),
        })
    }

    fn log_exchange(&self, input: &DispatchQueryInput, output: &DispatchQueryOutput) {
        self.logger.log(ConversationEvent::new(
            "exchange",
            serde_json::json!({
                "caller": input.caller,
                "text": input.text,
                "intent": output.intent,
                "entries": output.entries,
            }),
        ));
    }
}

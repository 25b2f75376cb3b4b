//! Canned Gherkin generator for offline runs and tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::test_case::{
    domain::GherkinScenario,
    ports::{GeneratorError, GherkinGenerator},
};

/// Generator that answers every call with the same reply and records the
/// user stories it was sent.
#[derive(Debug, Clone)]
pub struct StaticGherkinGenerator {
    reply: Result<GherkinScenario, GeneratorError>,
    received: Arc<Mutex<Vec<String>>>,
}

impl StaticGherkinGenerator {
    /// Creates a generator that always returns `scenario`.
    #[must_use]
    pub fn replying(scenario: GherkinScenario) -> Self {
        Self {
            reply: Ok(scenario),
            received: Arc::default(),
        }
    }

    /// Creates a generator that always fails with `error`.
    #[must_use]
    pub fn failing(error: GeneratorError) -> Self {
        Self {
            reply: Err(error),
            received: Arc::default(),
        }
    }

    /// Returns the user stories received so far, oldest first.
    #[must_use]
    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .map(|stories| stories.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GherkinGenerator for StaticGherkinGenerator {
    async fn generate(&self, user_story: &str) -> Result<GherkinScenario, GeneratorError> {
        self.received
            .lock()
            .map_err(|err| GeneratorError::Unavailable(err.to_string()))?
            .push(user_story.to_owned());
        self.reply.clone()
    }
}

//! Scripted text generator for tests and offline runs.

use crate::generation::ports::{TextGenerator, TextGeneratorError, TextGeneratorResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Reply played back by [`ScriptedTextGenerator`].
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Return this text verbatim.
    Text(String),
    /// Fail with this error.
    Failure(TextGeneratorError),
    /// Never complete.
    Hang,
}

/// Text generator that answers every prompt with the same scripted reply
/// and records the prompts it received.
#[derive(Debug, Clone)]
pub struct ScriptedTextGenerator {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug)]
struct ScriptState {
    reply: ScriptedReply,
    prompts: Vec<String>,
}

impl ScriptedTextGenerator {
    /// Creates a generator that plays back `reply`.
    #[must_use]
    pub fn new(reply: ScriptedReply) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScriptState {
                reply,
                prompts: Vec::new(),
            })),
        }
    }

    /// Creates a generator that always returns `text`.
    #[must_use]
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(ScriptedReply::Text(text.into()))
    }

    /// Creates a generator whose endpoint cannot be reached.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::new(ScriptedReply::Failure(TextGeneratorError::transport(
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        )))
    }

    /// Creates a generator that never answers.
    #[must_use]
    pub fn hanging() -> Self {
        Self::new(ScriptedReply::Hang)
    }

    /// Replaces the scripted reply.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the internal lock is poisoned.
    pub fn set_reply(&self, reply: ScriptedReply) -> TextGeneratorResult<()> {
        let mut state = self.lock()?;
        state.reply = reply;
        Ok(())
    }

    /// Returns the prompts received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the internal lock is poisoned.
    pub fn prompts(&self) -> TextGeneratorResult<Vec<String>> {
        Ok(self.lock()?.prompts.clone())
    }

    fn lock(&self) -> TextGeneratorResult<std::sync::MutexGuard<'_, ScriptState>> {
        self.state
            .lock()
            .map_err(|err| TextGeneratorError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    async fn generate(&self, prompt: &str) -> TextGeneratorResult<String> {
        let reply = {
            let mut state = self.lock()?;
            state.prompts.push(prompt.to_owned());
            state.reply.clone()
        };
        match reply {
            ScriptedReply::Text(text) => Ok(text),
            ScriptedReply::Failure(error) => Err(error),
            ScriptedReply::Hang => std::future::pending().await,
        }
    }
}

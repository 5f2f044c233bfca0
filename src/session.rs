use crate::catalog::{self, ModelDescriptor};
use crate::core::error::ChatError;
use serde::{Deserialize, Serialize};

/// Number of trailing turns included when building a prompt. Older turns
/// stay in the stored history but are silently dropped from context.
pub const CONTEXT_TURNS: usize = 3;

/// One completed exchange. The assistant side may be an error line when the
/// remote call failed; the transcript stays a linear record either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

/// Per-session conversation state: model selection, bearer token, and the
/// append-only turn history. One value per session; operations take it
/// explicitly so tests can hold independent sessions.
#[derive(Debug)]
pub struct SessionState {
    model: ModelDescriptor,
    token: Option<String>,
    history: Vec<Turn>,
}

impl SessionState {
    pub fn new(model: ModelDescriptor) -> Self {
        Self {
            model,
            token: None,
            history: Vec::new(),
        }
    }

    pub fn model(&self) -> &ModelDescriptor {
        &self.model
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Store the bearer token. Blank input is rejected rather than silently
    /// clearing the credential.
    pub fn set_token(&mut self, token: &str) -> Result<(), ChatError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ChatError::Input("API token must not be blank".to_string()));
        }
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Switch the active model. Catalog membership is the only validation.
    pub fn select_model(&mut self, id: &str) -> Result<&ModelDescriptor, ChatError> {
        match catalog::find(id) {
            Some(model) => {
                self.model = model;
                Ok(&self.model)
            }
            None => Err(ChatError::Input(format!("Unknown model: {}", id))),
        }
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn push_turn(&mut self, user: String, assistant: String) {
        self.history.push(Turn { user, assistant });
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Borrowed view of the last `CONTEXT_TURNS` turns, oldest first.
    pub fn context_window(&self) -> &[Turn] {
        let start = self.history.len().saturating_sub(CONTEXT_TURNS);
        &self.history[start..]
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(catalog::default_model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_turns(n: usize) -> SessionState {
        let mut session = SessionState::default();
        for i in 0..n {
            session.push_turn(format!("q{}", i), format!("a{}", i));
        }
        session
    }

    #[test]
    fn context_window_is_last_three_turns() {
        let session = session_with_turns(5);
        let window = session.context_window();
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].user, "q2");
        assert_eq!(window[2].user, "q4");
        // The stored history keeps every turn.
        assert_eq!(session.history().len(), 5);
        assert_eq!(session.history()[0].user, "q0");
    }

    #[test]
    fn short_histories_window_whole_history() {
        let session = session_with_turns(2);
        assert_eq!(session.context_window().len(), 2);
        assert_eq!(session_with_turns(0).context_window().len(), 0);
    }

    #[test]
    fn clear_resets_history_and_window() {
        let mut session = session_with_turns(4);
        session.clear();
        assert!(session.history().is_empty());
        assert!(session.context_window().is_empty());

        session.push_turn("fresh".to_string(), "start".to_string());
        assert_eq!(session.context_window().len(), 1);
        assert_eq!(session.context_window()[0].user, "fresh");
    }

    #[test]
    fn blank_token_is_rejected() {
        let mut session = SessionState::default();
        assert!(session.set_token("   ").is_err());
        assert!(session.token().is_none());

        session.set_token(" hf_abc ").unwrap();
        assert_eq!(session.token(), Some("hf_abc"));
    }

    #[test]
    fn select_model_requires_catalog_membership() {
        let mut session = SessionState::default();
        assert!(session.select_model("acme/nope").is_err());
        assert_eq!(session.model().id, "cyberagent/open-calm-7b");

        let picked = session
            .select_model("HuggingFaceH4/zephyr-7b-beta")
            .unwrap()
            .id;
        assert_eq!(picked, "HuggingFaceH4/zephyr-7b-beta");
    }
}

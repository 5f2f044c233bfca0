use crate::core::error::ApiFailure;
use crate::prompt;
use crate::providers::{GenerationParams, TextGenProvider};
use crate::session::SessionState;

/// Run one conversational turn.
///
/// Blank messages are a no-op: the history is untouched and the provider is
/// never called. Otherwise the reply, or the rendered failure taking its
/// place, is appended together with the message so the transcript stays a
/// complete linear record.
pub async fn chat_response(
    session: &mut SessionState,
    provider: &dyn TextGenProvider,
    message: &str,
    params: &GenerationParams,
) -> Option<String> {
    let message = message.trim();
    if message.is_empty() {
        return None;
    }

    let reply = match session.token() {
        None => ApiFailure::MissingToken.to_string(),
        Some(token) => {
            let prompt = prompt::build_prompt(session.model().id, session.context_window(), message);
            match provider
                .generate(session.model().id, token, &prompt, params)
                .await
            {
                Ok(text) => text,
                Err(failure) => failure.to_string(),
            }
        }
    };

    session.push_turn(message.to_string(), reply.clone());
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted provider: records every prompt it sees and replays a fixed
    /// outcome.
    struct ScriptedProvider {
        outcome: Result<String, ApiFailure>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(failure: ApiFailure) -> Self {
            Self {
                outcome: Err(failure),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenProvider for ScriptedProvider {
        async fn generate(
            &self,
            _model_id: &str,
            _token: &str,
            prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, ApiFailure> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.outcome.clone()
        }
    }

    fn ready_session() -> SessionState {
        let mut session = SessionState::default();
        session.set_token("hf_test").unwrap();
        session
    }

    #[tokio::test]
    async fn blank_message_leaves_history_unchanged() {
        let mut session = ready_session();
        let provider = ScriptedProvider::replying("unused");

        let reply = chat_response(&mut session, &provider, "   ", &GenerationParams::default()).await;

        assert!(reply.is_none());
        assert!(session.history().is_empty());
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn missing_token_short_circuits_before_the_provider() {
        let mut session = SessionState::default();
        let provider = ScriptedProvider::replying("unused");

        let reply = chat_response(&mut session, &provider, "hello", &GenerationParams::default())
            .await
            .unwrap();

        assert_eq!(reply, ApiFailure::MissingToken.to_string());
        assert_eq!(provider.calls(), 0);
        // The failed turn is still part of the transcript.
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].user, "hello");
    }

    #[tokio::test]
    async fn reply_is_appended_as_a_turn() {
        let mut session = ready_session();
        let provider = ScriptedProvider::replying("hi there");

        let reply = chat_response(&mut session, &provider, "hello", &GenerationParams::default())
            .await
            .unwrap();

        assert_eq!(reply, "hi there");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].assistant, "hi there");
    }

    #[tokio::test]
    async fn failures_become_the_assistant_text() {
        let mut session = ready_session();
        let provider = ScriptedProvider::failing(ApiFailure::InvalidToken);

        let reply = chat_response(&mut session, &provider, "hello", &GenerationParams::default())
            .await
            .unwrap();

        assert_eq!(reply, ApiFailure::InvalidToken.to_string());
        assert_eq!(session.history()[0].assistant, reply);
    }

    #[tokio::test]
    async fn prompt_context_is_capped_at_three_turns() {
        let mut session = ready_session();
        for i in 0..5 {
            session.push_turn(format!("q{}", i), format!("a{}", i));
        }
        let provider = ScriptedProvider::replying("ok");

        chat_response(&mut session, &provider, "next", &GenerationParams::default()).await;

        let prompts = provider.prompts.lock().unwrap();
        assert!(!prompts[0].contains("q0"));
        assert!(!prompts[0].contains("q1"));
        assert!(prompts[0].contains("User: q2\nAssistant: a2\n"));
        assert!(prompts[0].contains("User: q4\nAssistant: a4\n"));
        // Earlier turns stay in the stored history.
        drop(prompts);
        assert_eq!(session.history().len(), 6);
        assert_eq!(session.history()[0].user, "q0");
    }
}

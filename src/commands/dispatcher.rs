use super::ChatState;
use super::handler::{
    ClearCommand, CommandHandler, HelpCommand, MaxLengthCommand, ModelCommand, ModelsCommand,
    QuitCommand, TemperatureCommand, TokenCommand,
};
use crate::core::error::ChatError;
use std::collections::HashMap;
use std::sync::Arc;

/// Routes `/command arg…` input to its registered handler.
#[derive(Clone)]
pub struct CommandDispatcher {
    handlers: Arc<HashMap<String, Arc<dyn CommandHandler>>>,
}

impl CommandDispatcher {
    pub fn execute(
        &self,
        command: &str,
        args: &[&str],
        state: &mut ChatState,
    ) -> Result<Option<String>, ChatError> {
        self.handlers
            .get(command)
            .ok_or_else(|| ChatError::Input(format!("Unknown command: /{}", command)))
            .and_then(|handler| handler.execute(state, args))
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }
}

pub fn create_command_dispatcher() -> CommandDispatcher {
    let mut handlers: HashMap<String, Arc<dyn CommandHandler>> = HashMap::new();
    let mut register =
        |name: &str, handler: Arc<dyn CommandHandler>| handlers.insert(name.to_string(), handler);

    register("quit", Arc::new(QuitCommand));
    register("help", Arc::new(HelpCommand));
    register("clear", Arc::new(ClearCommand));
    register("model", Arc::new(ModelCommand));
    register("models", Arc::new(ModelsCommand));
    register("token", Arc::new(TokenCommand));
    register("maxlen", Arc::new(MaxLengthCommand));
    register("temp", Arc::new(TemperatureCommand));

    CommandDispatcher {
        handlers: Arc::new(handlers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::GenerationParams;
    use crate::session::SessionState;

    fn state() -> ChatState {
        ChatState::new(SessionState::default(), GenerationParams::default())
    }

    #[test]
    fn unknown_commands_are_input_errors() {
        let dispatcher = create_command_dispatcher();
        let mut state = state();
        assert!(dispatcher.execute("bogus", &[], &mut state).is_err());
    }

    #[test]
    fn quit_stops_the_loop() {
        let dispatcher = create_command_dispatcher();
        let mut state = state();
        dispatcher.execute("quit", &[], &mut state).unwrap();
        assert!(!state.should_continue);
    }

    #[test]
    fn clear_empties_the_session_history() {
        let dispatcher = create_command_dispatcher();
        let mut state = state();
        state.session.push_turn("q".to_string(), "a".to_string());

        dispatcher.execute("clear", &[], &mut state).unwrap();
        assert!(state.session.history().is_empty());
    }

    #[test]
    fn model_command_switches_within_the_catalog() {
        let dispatcher = create_command_dispatcher();
        let mut state = state();

        let shown = dispatcher.execute("model", &[], &mut state).unwrap().unwrap();
        assert!(shown.contains("cyberagent/open-calm-7b"));

        dispatcher
            .execute("model", &["HuggingFaceH4/zephyr-7b-beta"], &mut state)
            .unwrap();
        assert_eq!(state.session.model().id, "HuggingFaceH4/zephyr-7b-beta");

        assert!(
            dispatcher
                .execute("model", &["acme/nope"], &mut state)
                .is_err()
        );
    }

    #[test]
    fn token_command_stores_the_credential() {
        let dispatcher = create_command_dispatcher();
        let mut state = state();

        dispatcher
            .execute("token", &["hf_secret"], &mut state)
            .unwrap();
        assert_eq!(state.session.token(), Some("hf_secret"));

        assert!(dispatcher.execute("token", &[], &mut state).is_err());
    }

    #[test]
    fn parameter_commands_enforce_their_bounds() {
        let dispatcher = create_command_dispatcher();
        let mut state = state();

        dispatcher.execute("maxlen", &["300"], &mut state).unwrap();
        assert_eq!(state.params.max_length, 300);
        assert!(dispatcher.execute("maxlen", &["10"], &mut state).is_err());

        dispatcher.execute("temp", &["1.5"], &mut state).unwrap();
        assert_eq!(state.params.temperature, 1.5);
        assert!(dispatcher.execute("temp", &["3.0"], &mut state).is_err());
    }
}

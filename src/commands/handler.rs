use super::ChatState;
use crate::catalog;
use crate::core::error::ChatError;

use console::style;

pub trait CommandHandler: Send + Sync {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError>;
    fn help(&self) -> &'static str;
}

pub struct QuitCommand;
pub struct HelpCommand;
pub struct ClearCommand;
pub struct ModelCommand;
pub struct ModelsCommand;
pub struct TokenCommand;
pub struct MaxLengthCommand;
pub struct TemperatureCommand;

impl CommandHandler for QuitCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.should_continue = false;
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/quit - Exit the chat session"
    }
}

impl CommandHandler for HelpCommand {
    fn execute(
        &self,
        _state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, ChatError> {
        let title = style("Available Commands").bold().underlined();
        let help_text = vec![
            title.to_string(),
            QuitCommand.help().to_string(),
            HelpCommand.help().to_string(),
            ClearCommand.help().to_string(),
            ModelCommand.help().to_string(),
            ModelsCommand.help().to_string(),
            TokenCommand.help().to_string(),
            MaxLengthCommand.help().to_string(),
            TemperatureCommand.help().to_string(),
        ]
        .join("\n");

        Ok(Some(help_text))
    }

    fn help(&self) -> &'static str {
        "/help - Show available commands"
    }
}

impl CommandHandler for ClearCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.session.clear();
        Ok(Some("Chat history cleared.".to_string()))
    }

    fn help(&self) -> &'static str {
        "/clear - Clear conversation history"
    }
}

impl CommandHandler for ModelCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError> {
        if args.is_empty() {
            let model = state.session.model();
            Ok(Some(format!("Current model: {} ({})", model.id, model.label)))
        } else {
            let model = state.session.select_model(args[0])?;
            Ok(Some(format!("Model changed to: {}", model.label)))
        }
    }

    fn help(&self) -> &'static str {
        "/model <id> - Show or change the current model"
    }
}

impl CommandHandler for ModelsCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        let current = state.session.model().id;
        let lines: Vec<String> = catalog::CATALOG
            .iter()
            .map(|m| {
                let marker = if m.id == current { "*" } else { " " };
                format!("{} {:<50} {}", marker, m.id, m.label)
            })
            .collect();
        Ok(Some(lines.join("\n")))
    }

    fn help(&self) -> &'static str {
        "/models - List the model catalog"
    }
}

impl CommandHandler for TokenCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError> {
        if args.is_empty() {
            return Err(ChatError::Input("Usage: /token <api-token>".to_string()));
        }
        state.session.set_token(args[0])?;
        Ok(Some("✅ API token set.".to_string()))
    }

    fn help(&self) -> &'static str {
        "/token <key> - Set the API token for this session"
    }
}

impl CommandHandler for MaxLengthCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError> {
        if args.is_empty() {
            return Ok(Some(format!("Current max length: {}", state.params.max_length)));
        }
        let value: u32 = args[0]
            .parse()
            .map_err(|_| ChatError::Input(format!("Not a number: {}", args[0])))?;
        state.params.set_max_length(value).map_err(ChatError::Input)?;
        Ok(Some(format!("Max length set to {}", value)))
    }

    fn help(&self) -> &'static str {
        "/maxlen <50-500> - Show or set the output length bound"
    }
}

impl CommandHandler for TemperatureCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError> {
        if args.is_empty() {
            return Ok(Some(format!(
                "Current temperature: {}",
                state.params.temperature
            )));
        }
        let value: f64 = args[0]
            .parse()
            .map_err(|_| ChatError::Input(format!("Not a number: {}", args[0])))?;
        state.params.set_temperature(value).map_err(ChatError::Input)?;
        Ok(Some(format!("Temperature set to {}", value)))
    }

    fn help(&self) -> &'static str {
        "/temp <0.1-2.0> - Show or set the sampling temperature"
    }
}

use crate::chat::chat_response;
use crate::cli::Args;
use crate::commands::{ChatState, dispatcher::CommandDispatcher};
use crate::config::Config;
use crate::core::error::ChatError;
use crate::display;
use crate::input;
use crate::providers::{GenerationParams, TextGenProvider};
use crate::session::SessionState;
use is_terminal::IsTerminal;
use std::io::{self, Read};

pub struct Application {
    pub args: Args,
    pub provider: Box<dyn TextGenProvider>,
    pub dispatcher: CommandDispatcher,
    session: SessionState,
    params: GenerationParams,
}

impl Application {
    pub fn new(
        args: Args,
        config: &Config,
        provider: Box<dyn TextGenProvider>,
        dispatcher: CommandDispatcher,
    ) -> Result<Self, ChatError> {
        let mut session = SessionState::default();

        if let Some(model_id) = args.model.as_deref().or(config.model.as_deref()) {
            session.select_model(model_id)?;
        }
        if let Some(token) = args.token.as_deref().or(config.api_token.as_deref()) {
            session.set_token(token)?;
        }

        let mut params = GenerationParams::default();
        if let Some(max_length) = args.max_length.or(config.max_length) {
            params.set_max_length(max_length).map_err(ChatError::Config)?;
        }
        if let Some(temperature) = args.temperature.or(config.temperature) {
            params.set_temperature(temperature).map_err(ChatError::Config)?;
        }

        Ok(Self {
            args,
            provider,
            dispatcher,
            session,
            params,
        })
    }

    pub async fn run(&mut self) -> Result<(), ChatError> {
        if self.args.chat {
            self.run_chat_loop().await
        } else {
            self.run_one_shot().await
        }
    }

    /// Send a single message and print the reply. The message comes from
    /// the positional argument, piped stdin, or both combined.
    async fn run_one_shot(&mut self) -> Result<(), ChatError> {
        let piped = if !io::stdin().is_terminal() {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ChatError::Input(format!("Failed to read from stdin: {}", e)))?;
            Some(buffer)
        } else {
            None
        };

        let message = match (self.args.query.as_deref(), piped.as_deref()) {
            (Some(query), Some(stdin_ctx)) => format!("{}\n\n{}", stdin_ctx.trim_end(), query),
            (None, Some(stdin_ctx)) => stdin_ctx.to_string(),
            (Some(query), None) => query.to_string(),
            (None, None) => {
                return Err(ChatError::Input(
                    "No message provided. Pass one as an argument or use --chat.".to_string(),
                ));
            }
        };

        let Some(reply) =
            chat_response(&mut self.session, self.provider.as_ref(), &message, &self.params).await
        else {
            return Err(ChatError::Input("Message is empty".to_string()));
        };

        if display::looks_like_markdown(&reply) {
            display::display_markdown(&reply);
        } else {
            display::display_response(&reply);
        }

        Ok(())
    }

    async fn run_chat_loop(&mut self) -> Result<(), ChatError> {
        display::display_chat_banner(self.session.model(), self.session.token().is_some());

        let mut state = ChatState::new(std::mem::take(&mut self.session), self.params);
        let mut editor = input::create_editor(self.dispatcher.clone())?;

        loop {
            let input = match input::read_input(&mut editor)? {
                Some(input) => input.trim().to_string(),
                None => break,
            };

            if input.is_empty() {
                continue;
            }

            if let Some(command_line) = input.strip_prefix('/') {
                let parts: Vec<&str> = command_line.split_whitespace().collect();
                if let Some((command, args)) = parts.split_first() {
                    match self.dispatcher.execute(command, args, &mut state) {
                        Ok(Some(output)) => println!("{}", output),
                        Ok(None) => {}
                        Err(e) => display::display_error(&e.to_string()),
                    }

                    if !state.should_continue {
                        break;
                    }
                }
                continue;
            }

            let reply = chat_response(
                &mut state.session,
                self.provider.as_ref(),
                &input,
                &state.params,
            )
            .await;

            if let Some(reply) = reply {
                display::display_response(&reply);
            }
        }

        input::save_history(&mut editor)?;

        Ok(())
    }
}

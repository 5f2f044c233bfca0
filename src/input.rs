use crate::catalog;
use crate::commands::dispatcher::CommandDispatcher;
use crate::config::Config as AppConfig;
use crate::core::error::ChatError;

use console::style;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, EditMode, Editor, Helper};

/// Completes slash commands, and model identifiers after `/model `.
pub struct ChatCompleter {
    dispatcher: CommandDispatcher,
}

impl Completer for ChatCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if let Some(rest) = line.strip_prefix("/model ") {
            let typed = &rest[..pos.saturating_sub(7).min(rest.len())];
            let matches: Vec<Pair> = catalog::CATALOG
                .iter()
                .filter(|m| m.id.starts_with(typed))
                .map(|m| Pair {
                    display: format!("{} ({})", m.id, m.label),
                    replacement: m.id.to_string(),
                })
                .collect();
            return Ok((7, matches));
        }

        if line.starts_with('/') {
            let command_part = &line[1..pos.min(line.len())];
            let matches: Vec<Pair> = self
                .dispatcher
                .command_names()
                .into_iter()
                .filter(|cmd| cmd.starts_with(command_part))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd,
                })
                .collect();
            return Ok((1, matches));
        }

        Ok((pos, Vec::new()))
    }
}

/// Rustyline helper wiring the completer and history hints together.
pub struct ChatHelper {
    completer: ChatCompleter,
    hinter: HistoryHinter,
}

impl ChatHelper {
    pub fn new(dispatcher: CommandDispatcher) -> Self {
        Self {
            completer: ChatCompleter { dispatcher },
            hinter: HistoryHinter::new(),
        }
    }
}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ChatHelper {}
impl Validator for ChatHelper {}
impl Helper for ChatHelper {}

/// Creates a configured rustyline editor
pub fn create_editor(
    dispatcher: CommandDispatcher,
) -> Result<Editor<ChatHelper, FileHistory>, ChatError> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut editor = Editor::with_config(config)
        .map_err(|e| ChatError::Input(format!("Failed to create line editor: {}", e)))?;
    editor.set_helper(Some(ChatHelper::new(dispatcher)));

    let _ = editor.load_history(&AppConfig::input_history_path());

    Ok(editor)
}

/// Reads a line of input; `None` means Ctrl-C/Ctrl-D.
pub fn read_input(
    editor: &mut Editor<ChatHelper, FileHistory>,
) -> Result<Option<String>, ChatError> {
    let prompt = style("> ").bold().cyan().to_string();

    match editor.readline(&prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                editor
                    .add_history_entry(&line)
                    .map_err(|e| ChatError::Input(format!("Failed to add history entry: {}", e)))?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            println!("Exiting...");
            Ok(None)
        }
        Err(err) => Err(ChatError::Input(format!("Input error: {}", err))),
    }
}

/// Saves the editor history
pub fn save_history(editor: &mut Editor<ChatHelper, FileHistory>) -> Result<(), ChatError> {
    let history_path = AppConfig::input_history_path();

    if let Some(parent) = history_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    editor
        .save_history(&history_path)
        .map_err(|e| ChatError::Input(format!("Failed to save history: {}", e)))
}

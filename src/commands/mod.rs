pub mod dispatcher;
pub mod handler;

use crate::providers::GenerationParams;
use crate::session::SessionState;

pub use dispatcher::create_command_dispatcher;

/// Mutable state the slash commands operate on: the conversation session,
/// the current generation parameters, and the loop flag.
pub struct ChatState {
    pub session: SessionState,
    pub params: GenerationParams,
    pub should_continue: bool,
}

impl ChatState {
    pub fn new(session: SessionState, params: GenerationParams) -> Self {
        Self {
            session,
            params,
            should_continue: true,
        }
    }
}

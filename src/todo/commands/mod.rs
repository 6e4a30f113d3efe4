use crate::model::TodoItem;

pub mod add;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod refresh;
pub mod schedule;
pub mod status;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured command output. The CLI decides how (and whether) to render
/// each field; nothing here knows about terminals.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items a mutating command touched, in their post-command state.
    pub affected: Vec<TodoItem>,
    /// Incomplete items, newest first, paired with original list positions.
    pub todo: Vec<(usize, TodoItem)>,
    /// Terminally completed items, most recent first.
    pub done: Vec<(usize, TodoItem)>,
    /// Repeating items, soonest due first.
    pub scheduled: Vec<(usize, TodoItem)>,
    /// Motto to show above the list, when the db has one.
    pub motto: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, items: Vec<TodoItem>) -> Self {
        self.affected = items;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

use std::collections::VecDeque;

use super::commands::Command;

/// Commands collected between ticks, applied in submission order
#[derive(Clone, Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Parse a JSON array of commands and queue them all, or none on error.
    pub fn push_json(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        let commands: Vec<Command> = serde_json::from_str(json)?;
        let n = commands.len();
        self.pending.extend(commands);
        Ok(n)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}

impl Extend<Command> for CommandQueue {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}

impl FromIterator<Command> for CommandQueue {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

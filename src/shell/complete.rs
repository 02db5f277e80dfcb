//! Cyclic tab completion over the command registry.
//!
//! The first Tab of a cycle snapshots the line as a template. Every Tab then
//! scans the registry round-robin, starting just past the previous match,
//! for a name that the template is a strict prefix of. Any edit to the line
//! disarms the engine so that the next Tab takes a fresh snapshot.

use super::command::Command;
use super::line::{EMPTY_MARKER, LineBuffer};

/// Observable state of the completion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState<'t> {
    /// No cycle in progress.
    NotArmed,
    /// A cycle is in progress.
    Armed {
        /// Line content captured at the first Tab.
        template: &'t [u8],
        /// Registry index the next scan starts from.
        offset: usize,
    },
}

/// Round-robin completion engine for lines of at most `N` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autocomplete<const N: usize> {
    template: [u8; N],
    template_len: usize,
    offset: usize,
    armed: bool,
}

impl<const N: usize> Default for Autocomplete<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Autocomplete<N> {
    /// Create a disarmed engine.
    pub const fn new() -> Self {
        Self {
            template: [EMPTY_MARKER; N],
            template_len: 0,
            offset: 0,
            armed: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> CompletionState<'_> {
        if self.armed {
            CompletionState::Armed {
                template: &self.template[..self.template_len],
                offset: self.offset,
            }
        } else {
            CompletionState::NotArmed
        }
    }

    /// Whether a cycle is in progress.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// End the current cycle; the next Tab snapshots the line again.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Return to the initial state, discarding the template.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Find the next registry entry completing the template.
    ///
    /// Arms the engine from `line` if needed. On a match the offset moves past
    /// the matched entry; when a full circuit finds nothing the offset returns
    /// to zero and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libmsh::shell::complete::Autocomplete;
    /// use libmsh::shell::line::LineBuffer;
    /// use libmsh::shell::builtin::BUILTIN_COMMANDS;
    ///
    /// let mut sink: heapless::Vec<u8, 8> = heapless::Vec::new();
    /// let mut line = LineBuffer::<32>::new();
    /// line.put(b'm', &mut sink);
    ///
    /// let mut engine = Autocomplete::<32>::new();
    /// let found = engine.next_match(&line, BUILTIN_COMMANDS).map(|c| c.name);
    /// assert_eq!(found, Some("man"));
    /// ```
    pub fn next_match<'c>(
        &mut self,
        line: &LineBuffer<N>,
        commands: &'c [Command],
    ) -> Option<&'c Command> {
        if !self.armed {
            self.arm(line.as_bytes());
        }

        let count = commands.len();
        if count == 0 {
            self.offset = 0;
            return None;
        }

        let template = &self.template[..self.template_len];
        for step in 0..count {
            let index = (self.offset + step) % count;
            let name = commands[index].name.as_bytes();
            if name.len() > template.len() && name.starts_with(template) {
                self.offset = (index + 1) % count;
                return Some(&commands[index]);
            }
        }

        self.offset = 0;
        None
    }

    fn arm(&mut self, content: &[u8]) {
        let n = content.len().min(N);
        self.template[..n].copy_from_slice(&content[..n]);
        self.template[n..].fill(EMPTY_MARKER);
        self.template_len = n;
        self.offset = 0;
        self.armed = true;
    }
}

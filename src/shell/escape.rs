//! ANSI arrow-key decoder.
//!
//! Arrow keys arrive as `ESC [ <direction>`. The decoder only needs two
//! states: the bracket introducer is swallowed wherever it appears, so after
//! the escape byte the machine simply waits for a direction byte.
//!
//! ```text
//!            ESC
//!   Idle ───────────▶ AwaitingDirection
//!    ▲                  │   │
//!    │   direction/     │   │ '['
//!    └── other byte ────┘   └──▶ (stay)
//! ```

use super::{ANSI_ARROW_DOWN, ANSI_ARROW_LEFT, ANSI_ARROW_RIGHT, ANSI_ARROW_UP, ANSI_BRACKET};

/// Decoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeState {
    /// No sequence in progress.
    #[default]
    Idle,
    /// An escape byte was received; the next direction byte completes the sequence.
    AwaitingDirection,
}

/// Arrow key carried by a completed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    /// `ESC [ A`
    Up,
    /// `ESC [ B`
    Down,
    /// `ESC [ C`
    Right,
    /// `ESC [ D`
    Left,
}

impl Arrow {
    /// Map an ANSI final byte to an arrow key.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            ANSI_ARROW_UP => Some(Arrow::Up),
            ANSI_ARROW_DOWN => Some(Arrow::Down),
            ANSI_ARROW_RIGHT => Some(Arrow::Right),
            ANSI_ARROW_LEFT => Some(Arrow::Left),
            _ => None,
        }
    }

    /// The ANSI final byte for this arrow key.
    pub fn byte(self) -> u8 {
        match self {
            Arrow::Up => ANSI_ARROW_UP,
            Arrow::Down => ANSI_ARROW_DOWN,
            Arrow::Right => ANSI_ARROW_RIGHT,
            Arrow::Left => ANSI_ARROW_LEFT,
        }
    }
}

/// Two-state escape sequence decoder.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::escape::{Arrow, EscapeDecoder, EscapeState};
///
/// let mut decoder = EscapeDecoder::new();
/// decoder.begin();
/// assert_eq!(decoder.advance(b'['), None);
/// assert_eq!(decoder.advance(b'D'), Some(Arrow::Left));
/// assert_eq!(decoder.state(), EscapeState::Idle);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EscapeDecoder {
    state: EscapeState,
}

impl EscapeDecoder {
    /// Create a decoder in the [`EscapeState::Idle`] state.
    pub const fn new() -> Self {
        Self {
            state: EscapeState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> EscapeState {
        self.state
    }

    /// Whether no sequence is in progress.
    pub fn is_idle(&self) -> bool {
        self.state == EscapeState::Idle
    }

    /// Record the escape byte.
    pub fn begin(&mut self) {
        self.state = EscapeState::AwaitingDirection;
    }

    /// Feed a byte that is not the escape byte itself.
    ///
    /// The bracket introducer is consumed without a state change. While a
    /// sequence is pending any other byte ends it; a recognised direction byte
    /// is returned, anything else abandons the sequence silently.
    pub fn advance(&mut self, byte: u8) -> Option<Arrow> {
        if byte == ANSI_BRACKET {
            return None;
        }

        match self.state {
            EscapeState::Idle => None,
            EscapeState::AwaitingDirection => {
                self.state = EscapeState::Idle;
                Arrow::from_byte(byte)
            }
        }
    }

    /// Return to [`EscapeState::Idle`].
    pub fn reset(&mut self) {
        self.state = EscapeState::Idle;
    }
}

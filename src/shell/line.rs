//! Fixed-capacity line buffer and its editing operations.
//!
//! The buffer holds the not-yet-submitted command text together with the
//! cursor position. Edits echo through the supplied sink so that an attached
//! terminal mirrors the buffer without a full redraw.
//!
//! Editing is overwrite-at-cursor: typing with the cursor inside the line
//! replaces the character under it instead of shifting the tail. Deleting
//! only shrinks the line when the cursor sits at its end; elsewhere it moves
//! the cursor back and clears the slot at the end of the line, leaving the
//! terminal to interpret the echoed control byte.

use super::render::{self, Write};
use super::{ANSI_ARROW_LEFT, ANSI_ARROW_RIGHT, ASCII_BACKSPACE, ASCII_DEL};

/// Value written into slots that have been deleted.
///
/// Line content is considered to end at the first marker, so a deletion in
/// the middle of the line hides everything after the cleared slot from the
/// parser.
pub const EMPTY_MARKER: u8 = 0;

/// Which side of the cursor a deletion applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Erase {
    /// Remove before the cursor (ASCII BS).
    Backspace,
    /// Remove at the cursor (ASCII DEL).
    Forward,
}

impl Erase {
    /// Map a raw control byte to its deletion mode.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            ASCII_BACKSPACE => Some(Erase::Backspace),
            ASCII_DEL => Some(Erase::Forward),
            _ => None,
        }
    }

    /// The control byte echoed to the terminal for this mode.
    pub fn byte(self) -> u8 {
        match self {
            Erase::Backspace => ASCII_BACKSPACE,
            Erase::Forward => ASCII_DEL,
        }
    }

    fn offset(self) -> usize {
        match self {
            Erase::Backspace => 1,
            Erase::Forward => 0,
        }
    }
}

/// Editable command line of at most `N` bytes.
///
/// Invariant: `cursor() <= len() <= N`.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::line::LineBuffer;
///
/// let mut echo: heapless::Vec<u8, 16> = heapless::Vec::new();
/// let mut line = LineBuffer::<8>::new();
///
/// for &b in b"led" {
///     line.put(b, &mut echo);
/// }
/// assert_eq!(line.as_bytes(), b"led");
/// assert_eq!(line.cursor(), 3);
/// assert_eq!(&echo[..], b"led");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    pos: usize,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty line buffer.
    pub const fn new() -> Self {
        Self {
            buf: [EMPTY_MARKER; N],
            len: 0,
            pos: 0,
        }
    }

    /// Maximum number of bytes the line can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Current line length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the line holds no submittable text.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Cursor position, in `0..=len()`.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Whether the line has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Raw bytes in `0..len()`, including any [`EMPTY_MARKER`] slots.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Line content up to the first [`EMPTY_MARKER`].
    pub fn text(&self) -> &[u8] {
        let raw = self.as_bytes();
        let end = raw
            .iter()
            .position(|&b| b == EMPTY_MARKER)
            .unwrap_or(raw.len());
        &raw[..end]
    }

    /// Write `byte` at the cursor and echo it.
    ///
    /// Overwrites the byte under the cursor when the cursor is inside the
    /// line. Returns `false` without echoing when the line is full and the
    /// cursor is at its end.
    pub fn put<O: Write + ?Sized>(&mut self, byte: u8, out: &mut O) -> bool {
        if self.len == N && self.pos == self.len {
            return false;
        }

        self.buf[self.pos] = byte;
        out.write(&[byte]);

        if self.pos == self.len {
            self.len += 1;
        }
        self.pos += 1;
        true
    }

    /// Delete one character and echo the raw control byte.
    ///
    /// A no-op at column zero. The line only shrinks when the cursor is at its
    /// end; otherwise the cursor steps back one position.
    pub fn erase<O: Write + ?Sized>(&mut self, mode: Erase, out: &mut O) -> bool {
        if self.pos == 0 {
            return false;
        }

        // Forward deletion at the end of a full line points past the buffer.
        if let Some(slot) = self.buf.get_mut(self.len - mode.offset()) {
            *slot = EMPTY_MARKER;
        }
        out.write(&[mode.byte()]);

        if self.pos == self.len {
            self.len -= 1;
        }
        self.pos -= 1;
        true
    }

    /// Move the cursor one position left, echoing the ANSI sequence.
    pub fn seek_left<O: Write + ?Sized>(&mut self, out: &mut O) -> bool {
        if self.pos == 0 {
            return false;
        }

        render::move_cursor(out, ANSI_ARROW_LEFT);
        self.pos -= 1;
        true
    }

    /// Move the cursor one position right, echoing the ANSI sequence.
    pub fn seek_right<O: Write + ?Sized>(&mut self, out: &mut O) -> bool {
        if self.pos == self.len {
            return false;
        }

        render::move_cursor(out, ANSI_ARROW_RIGHT);
        self.pos += 1;
        true
    }

    /// Reset content, length and cursor.
    pub fn clear(&mut self) {
        self.buf.fill(EMPTY_MARKER);
        self.len = 0;
        self.pos = 0;
    }

    /// Replace the whole line with `text` and park the cursor at its end.
    ///
    /// `text` is cut to the capacity; registry validation keeps command names
    /// within it.
    pub(crate) fn load(&mut self, text: &[u8]) {
        let n = text.len().min(N);
        self.buf[..n].copy_from_slice(&text[..n]);
        self.buf[n..].fill(EMPTY_MARKER);
        self.len = n;
        self.pos = n;
    }
}

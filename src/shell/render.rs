//! Output rendering over an externally supplied write sink.
//!
//! The renderer is stateless: every function takes the sink explicitly and
//! turns a request (print text, move the cursor, clear the line, print the
//! prompt) into the raw bytes an ANSI terminal expects.

use core::fmt;

use super::{ANSI_BRACKET, ANSI_CLEAR_LINE, ASCII_ESC, MAX_PRINTF_LEN};

/// Byte sink the shell writes its output to.
///
/// Implementations forward bytes verbatim to the attached terminal or stream.
/// The call is synchronous and has no way to report failure; a sink that
/// cannot keep up drops data or blocks, at its own discretion.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::Write;
///
/// struct Uart;
///
/// impl Write for Uart {
///     fn write(&mut self, bytes: &[u8]) {
///         // Load the TX FIFO
///         let _ = bytes;
///     }
/// }
/// ```
pub trait Write {
    /// Write all of `bytes` to the terminal.
    fn write(&mut self, bytes: &[u8]);
}

impl<W: Write + ?Sized> Write for &mut W {
    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes);
    }
}

impl Write for fn(&[u8]) {
    fn write(&mut self, bytes: &[u8]) {
        (*self)(bytes);
    }
}

/// Collects output until the vector is full, then drops the remainder.
impl<const M: usize> Write for heapless::Vec<u8, M> {
    fn write(&mut self, bytes: &[u8]) {
        let take = bytes.len().min(M - self.len());
        let _ = self.extend_from_slice(&bytes[..take]);
    }
}

/// Adapter from any [`std::io::Write`] to a shell sink.
///
/// I/O errors are ignored; the stream is flushed after every write so that
/// echo reaches the terminal immediately.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<T>(pub T);

#[cfg(feature = "std")]
impl<T: std::io::Write> Write for IoSink<T> {
    fn write(&mut self, bytes: &[u8]) {
        let _ = self.0.write_all(bytes);
        let _ = self.0.flush();
    }
}

/// Write raw text.
pub fn print<O: Write + ?Sized>(out: &mut O, text: &str) {
    out.write(text.as_bytes());
}

/// Write a newline followed by a carriage return.
pub fn newline<O: Write + ?Sized>(out: &mut O) {
    out.write(b"\n\r");
}

/// Write the prompt string.
pub fn prompt<O: Write + ?Sized>(out: &mut O, prompt: &str) {
    out.write(prompt.as_bytes());
}

/// Move the terminal cursor one step in `direction` (an ANSI final byte).
pub fn move_cursor<O: Write + ?Sized>(out: &mut O, direction: u8) {
    out.write(&[ASCII_ESC, ANSI_BRACKET, direction]);
}

/// Return to column zero and clear to the end of the line.
pub fn clear_line<O: Write + ?Sized>(out: &mut O) {
    out.write(b"\r");
    move_cursor(out, ANSI_CLEAR_LINE);
}

/// Print the prompt followed by the raw line content.
pub fn line<O: Write + ?Sized>(out: &mut O, prompt_text: &str, content: &[u8]) {
    prompt(out, prompt_text);
    out.write(content);
}

/// Format `args` into a scratch buffer of [`MAX_PRINTF_LEN`] bytes and write it.
///
/// Output longer than the scratch buffer is silently truncated on a character
/// boundary. Returns the number of bytes actually written.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::render;
///
/// let mut out: heapless::Vec<u8, 64> = heapless::Vec::new();
/// let written = render::print_fmt(&mut out, format_args!("uptime {}s", 42));
/// assert_eq!(written, 10);
/// assert_eq!(&out[..], b"uptime 42s");
/// ```
pub fn print_fmt<O: Write + ?Sized>(out: &mut O, args: fmt::Arguments<'_>) -> usize {
    let mut scratch = Scratch::<MAX_PRINTF_LEN>::new();
    // A full scratch buffer aborts formatting; what fits is kept.
    let _ = fmt::write(&mut scratch, args);

    let text = scratch.0.as_bytes();
    if !text.is_empty() {
        out.write(text);
    }
    text.len()
}

struct Scratch<const L: usize>(heapless::String<L>);

impl<const L: usize> Scratch<L> {
    fn new() -> Self {
        Self(heapless::String::new())
    }
}

impl<const L: usize> fmt::Write for Scratch<L> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            self.0.push(ch).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

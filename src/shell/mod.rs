//! Interactive command shell for embedded systems.
//!
//! The shell consumes raw bytes from a character stream one at a time and
//! keeps a single editable line. Finished lines are split into arguments and
//! dispatched to callbacks from a static registry; asynchronous log lines can
//! be injected at any time without disturbing the line being edited.
//!
//! # Features
//!
//! - **Zero-allocation**: Fixed-size line, template and formatting buffers
//! - **Line Editing**: Arrow keys, overwrite at cursor, backspace and delete
//! - **Tab Completion**: Cycles through every command matching the typed prefix
//! - **Exit Codes**: Failing callbacks are reported with a symbolic code
//! - **Log Injection**: Logs print above the prompt and the line is redrawn
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Input         │───▶│  Escape         │───▶│   Line          │
//! │   Dispatcher    │    │  Decoder        │    │   Buffer        │
//! │  (process)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                             ▲
//!          ├──────────────────────┐                      │
//!          ▼                      ▼                      │
//! ┌─────────────────┐    ┌─────────────────┐             │
//! │   Parser &      │    │  Autocomplete   │─────────────┘
//! │   Dispatcher    │    │  Engine         │
//! └─────────────────┘    └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Output Renderer (write sink)                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use libmsh::shell::{Command, CommandResult, Console, Shell, Write};
//!
//! #[derive(Default)]
//! struct Capture(Vec<u8>);
//!
//! impl Write for Capture {
//!     fn write(&mut self, bytes: &[u8]) {
//!         self.0.extend_from_slice(bytes);
//!     }
//! }
//!
//! fn led(console: &mut Console<'_>, argc: usize, argv: &[&str]) -> CommandResult {
//!     if argc != 2 {
//!         return CommandResult::WrongArgumentCount;
//!     }
//!     console.print_fmt(format_args!("led {}", argv[1]));
//!     CommandResult::Ok
//! }
//!
//! static COMMANDS: &[Command] = &[Command { name: "led", handler: led, help: "switch the LED" }];
//!
//! let mut shell: Shell<'_, Capture> = Shell::with_sink(COMMANDS, Capture::default()).unwrap();
//! shell.process_bytes(b"led on\r");
//!
//! let output = String::from_utf8_lossy(&shell.sink().unwrap().0).into_owned();
//! assert!(output.contains("led on"));
//! assert!(output.ends_with("msh> "));
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous and non-reentrant. [`Shell::process`] and
//! [`Shell::log`] mutate the same state, so an embedding that logs from an
//! interrupt handler must serialise both calls itself (for example inside a
//! critical section).

use core::{fmt, str};

pub mod builtin;
pub mod command;
pub mod complete;
pub mod error;
pub mod escape;
pub mod line;
pub mod parser;
pub mod render;

pub use command::{Command, CommandFn, CommandResult, Console};
pub use error::Error;
#[cfg(feature = "std")]
pub use render::IoSink;
pub use render::Write;

use complete::Autocomplete;
use escape::{Arrow, EscapeDecoder, EscapeState};
use line::{Erase, LineBuffer};

/// Default capacity of the command line, in bytes.
pub const MAX_COMMAND_LENGTH: usize = 32;

/// Maximum number of arguments per command, including the command name.
pub const MAX_ARGS: usize = 5;

/// Maximum length of a single formatted print; longer output is truncated.
pub const MAX_PRINTF_LEN: usize = 256;

/// Default prompt string.
pub const PROMPT: &str = "msh> ";

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII horizontal tab character (0x09).
pub const ASCII_TAB: u8 = 0x09;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII form feed character (0x0C), sent by ctrl + L.
pub const ASCII_FF: u8 = 0x0C;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII escape character (0x1B).
pub const ASCII_ESC: u8 = 0x1B;
/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;

/// Control sequence introducer following the escape byte (`[`).
pub const ANSI_BRACKET: u8 = 0x5B;
/// Final byte of the cursor-up sequence.
pub const ANSI_ARROW_UP: u8 = b'A';
/// Final byte of the cursor-down sequence.
pub const ANSI_ARROW_DOWN: u8 = b'B';
/// Final byte of the cursor-right sequence.
pub const ANSI_ARROW_RIGHT: u8 = b'C';
/// Final byte of the cursor-left sequence.
pub const ANSI_ARROW_LEFT: u8 = b'D';
/// Final byte of the erase-to-end-of-line sequence.
pub const ANSI_CLEAR_LINE: u8 = b'K';

/// Shell session: line buffer, completion and escape state, bound to a sink.
///
/// `W` is the write sink and `N` the line capacity. A shell created with
/// [`Shell::new`] is inert until [`Shell::init`] supplies the sink.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::{Shell, builtin::BUILTIN_COMMANDS};
///
/// let mut shell: Shell<'_, heapless::Vec<u8, 512>> = Shell::new(BUILTIN_COMMANDS);
/// assert!(!shell.process(b'h'));
///
/// shell.init(heapless::Vec::new()).unwrap();
/// assert!(shell.process(b'h'));
/// assert_eq!(shell.line().as_bytes(), b"h");
/// ```
#[derive(Debug)]
pub struct Shell<'a, W, const N: usize = MAX_COMMAND_LENGTH> {
    sink: Option<W>,
    commands: &'a [Command],
    prompt: &'a str,
    line: LineBuffer<N>,
    completion: Autocomplete<N>,
    escape: EscapeDecoder,
    logs_enabled: bool,
}

impl<'a, W, const N: usize> Shell<'a, W, N> {
    /// Create an uninitialised shell over `commands`.
    ///
    /// Logs start disabled and the prompt is [`PROMPT`].
    pub const fn new(commands: &'a [Command]) -> Self {
        Self {
            sink: None,
            commands,
            prompt: PROMPT,
            line: LineBuffer::new(),
            completion: Autocomplete::new(),
            escape: EscapeDecoder::new(),
            logs_enabled: false,
        }
    }

    /// Whether [`Shell::init`] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.sink.is_some()
    }

    /// Replace the prompt string.
    pub fn set_prompt(&mut self, prompt: &'a str) {
        self.prompt = prompt;
    }

    /// Current prompt string.
    pub fn prompt(&self) -> &'a str {
        self.prompt
    }

    /// Enable or disable log injection.
    pub fn enable_logs(&mut self, enable: bool) {
        self.logs_enabled = enable;
    }

    /// Whether log injection is enabled.
    pub fn logs_enabled(&self) -> bool {
        self.logs_enabled
    }

    /// The command registry.
    pub fn commands(&self) -> &'a [Command] {
        self.commands
    }

    /// The line being edited.
    pub fn line(&self) -> &LineBuffer<N> {
        &self.line
    }

    /// The completion engine.
    pub fn autocomplete(&self) -> &Autocomplete<N> {
        &self.completion
    }

    /// Current escape decoder state.
    pub fn escape_state(&self) -> EscapeState {
        self.escape.state()
    }

    /// The write sink, once initialised.
    pub fn sink(&self) -> Option<&W> {
        self.sink.as_ref()
    }

    /// Mutable access to the write sink, once initialised.
    pub fn sink_mut(&mut self) -> Option<&mut W> {
        self.sink.as_mut()
    }

    /// Reset the line and the completion engine without printing anything.
    pub fn clear(&mut self) {
        self.line.clear();
        self.completion.reset();
    }
}

impl<'a, W: Write, const N: usize> Shell<'a, W, N> {
    /// Create a shell and initialise it with `sink` in one step.
    ///
    /// # Errors
    ///
    /// See [`Shell::init`].
    pub fn with_sink(commands: &'a [Command], sink: W) -> Result<Self, Error> {
        let mut shell = Self::new(commands);
        shell.init(sink)?;
        Ok(shell)
    }

    /// Bind the write sink, reset the editing state and print the first prompt.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyRegistry`] - The registry has no commands
    /// * [`Error::EmptyCommandName`] - A command has an empty name
    /// * [`Error::CommandNameTooLong`] - A command name exceeds the line capacity
    pub fn init(&mut self, sink: W) -> Result<(), Error> {
        command::validate(self.commands, N)?;

        self.clear();
        self.escape.reset();

        let sink = self.sink.insert(sink);
        render::newline(sink);
        render::prompt(sink, self.prompt);
        Ok(())
    }

    /// Process one input byte.
    ///
    /// Printable input (alphanumerics and space) is written at the cursor.
    /// CR/LF executes the line, BS/DEL delete, ESC starts an arrow-key
    /// sequence, Tab cycles completion and form feed clears the line.
    ///
    /// Returns `false` only if the shell was never initialised.
    pub fn process(&mut self, byte: u8) -> bool {
        if self.sink.is_none() {
            return false;
        }

        if self.escape.is_idle() && (byte.is_ascii_alphanumeric() || byte == ASCII_SPACE) {
            self.put(byte);
            return true;
        }

        match byte {
            ASCII_CR | ASCII_LF => self.execute(),
            ASCII_BACKSPACE | ASCII_DEL => self.erase(byte),
            ASCII_ESC => self.escape.begin(),
            ASCII_TAB => self.complete(),
            _ => self.special(byte),
        }

        true
    }

    /// Process every byte of `input` in order.
    ///
    /// Returns `false` if the shell was never initialised.
    pub fn process_bytes(&mut self, input: &[u8]) -> bool {
        input.iter().all(|&byte| self.process(byte))
    }

    /// Bounded formatted print through the sink.
    ///
    /// Returns the number of bytes written, 0 before initialisation.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> usize {
        match self.sink.as_mut() {
            Some(sink) => render::print_fmt(sink, args),
            None => 0,
        }
    }

    /// Print a log line above the prompt, then redraw the prompt and the line.
    ///
    /// Does nothing while logs are disabled. The line, cursor and completion
    /// state are left untouched; only the text up to the first cleared slot is
    /// redrawn. Returns the number of message bytes written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libmsh::shell::{Shell, builtin::BUILTIN_COMMANDS};
    ///
    /// let mut shell: Shell<'_, heapless::Vec<u8, 512>> =
    ///     Shell::with_sink(BUILTIN_COMMANDS, heapless::Vec::new()).unwrap();
    /// shell.enable_logs(true);
    /// shell.process_bytes(b"hel");
    ///
    /// shell.log(format_args!("temp {}C", 21));
    /// assert_eq!(shell.line().as_bytes(), b"hel");
    /// assert_eq!(shell.line().cursor(), 3);
    /// ```
    pub fn log(&mut self, args: fmt::Arguments<'_>) -> usize {
        if !self.logs_enabled {
            return 0;
        }
        let Some(sink) = self.sink.as_mut() else {
            return 0;
        };

        render::clear_line(sink);
        let written = render::print_fmt(sink, args);
        render::newline(sink);
        let text = self.line.text();
        render::line(sink, self.prompt, text);

        // Put the terminal cursor back over the logical cursor.
        let cursor = self.line.cursor();
        let (direction, steps) = if cursor < text.len() {
            (ANSI_ARROW_LEFT, text.len() - cursor)
        } else {
            (ANSI_ARROW_RIGHT, cursor - text.len())
        };
        for _ in 0..steps {
            render::move_cursor(sink, direction);
        }

        written
    }

    fn put(&mut self, byte: u8) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        if self.line.put(byte, sink) {
            self.completion.disarm();
        }
    }

    fn erase(&mut self, byte: u8) {
        let (Some(sink), Some(mode)) = (self.sink.as_mut(), Erase::from_byte(byte)) else {
            return;
        };

        if self.line.erase(mode, sink) {
            self.completion.disarm();
        }
    }

    fn complete(&mut self) {
        let commands = self.commands;
        let Some(command) = self.completion.next_match(&self.line, commands) else {
            return;
        };

        self.line.load(command.name.as_bytes());

        if let Some(sink) = self.sink.as_mut() {
            render::clear_line(sink);
            render::line(sink, self.prompt, self.line.as_bytes());
        }
    }

    fn special(&mut self, byte: u8) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        match self.escape.advance(byte) {
            Some(Arrow::Left) => {
                self.line.seek_left(sink);
            }
            Some(Arrow::Right) => {
                self.line.seek_right(sink);
            }
            // Up and down are reserved.
            Some(Arrow::Up | Arrow::Down) | None => {}
        }

        if byte == ASCII_FF {
            self.line.clear();
            self.completion.reset();
            sink.write(&[byte]);
            render::prompt(sink, self.prompt);
        }
    }

    fn execute(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let commands = self.commands;
        let text = self.line.text();

        if !text.is_empty() {
            render::newline(sink);

            let args = str::from_utf8(text)
                .map(parser::tokenize)
                .unwrap_or_default();

            match args.first().and_then(|name| command::find(commands, name)) {
                Some(command) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!(
                        "msh: dispatch {=str} argc={=usize}",
                        command.name,
                        args.len()
                    );

                    let result = {
                        let mut console =
                            Console::new(&mut *sink, &mut self.logs_enabled, commands);
                        (command.handler)(&mut console, args.len(), args.as_slice())
                    };

                    #[cfg(feature = "defmt")]
                    defmt::debug!("msh: {=str} -> {}", command.name, result);

                    report(sink, command.name, result);
                }
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("msh: command not found");

                    render::print(sink, "ERROR: Command not found!");
                }
            }
        }

        self.line.clear();
        self.completion.reset();
        render::newline(sink);
        render::prompt(sink, self.prompt);
    }
}

fn report<O: Write + ?Sized>(out: &mut O, name: &str, result: CommandResult) {
    if result.is_ok() {
        return;
    }

    render::newline(out);
    match result.symbol() {
        Some(symbol) => {
            render::print_fmt(
                out,
                format_args!("{} returned with exit code {}", name, symbol),
            );
        }
        None => {
            render::print_fmt(
                out,
                format_args!(
                    "{} returned with exit code {} (code out of range)",
                    name,
                    result.code()
                ),
            );
        }
    }
}

//! Command registry entries, callback results and the callback console.

use core::fmt;

use super::error::Error;
use super::render::{self, Write};

/// Outcome reported by a command callback.
///
/// Codes `0..=6` map to named variants; anything else is carried verbatim in
/// [`CommandResult::Unknown`] and reported as out of range.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::CommandResult;
///
/// assert_eq!(CommandResult::from(1), CommandResult::InvalidArgument);
/// assert_eq!(CommandResult::from(-2), CommandResult::Unknown(-2));
/// assert_eq!(CommandResult::WrongArgumentCount.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Command completed successfully.
    Ok,
    /// An argument had an unacceptable value.
    InvalidArgument,
    /// The command was given too few or too many arguments.
    WrongArgumentCount,
    /// Insufficient memory to complete the command.
    OutOfMemory,
    /// A buffer was too small for the command's data.
    BufferOverflow,
    /// The requested operation is not supported on this device.
    NotSupported,
    /// The command failed for another reason.
    Failed,
    /// A raw code outside the known set.
    Unknown(i32),
}

impl CommandResult {
    /// Numeric exit code.
    pub fn code(self) -> i32 {
        match self {
            CommandResult::Ok => 0,
            CommandResult::InvalidArgument => 1,
            CommandResult::WrongArgumentCount => 2,
            CommandResult::OutOfMemory => 3,
            CommandResult::BufferOverflow => 4,
            CommandResult::NotSupported => 5,
            CommandResult::Failed => 6,
            CommandResult::Unknown(code) => code,
        }
    }

    /// Symbolic name, or `None` for codes outside the known set.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            CommandResult::Ok => Some("OK"),
            CommandResult::InvalidArgument => Some("INVALID_ARGUMENT"),
            CommandResult::WrongArgumentCount => Some("WRONG_ARGUMENT_COUNT"),
            CommandResult::OutOfMemory => Some("OUT_OF_MEMORY"),
            CommandResult::BufferOverflow => Some("BUFFER_OVERFLOW"),
            CommandResult::NotSupported => Some("NOT_SUPPORTED"),
            CommandResult::Failed => Some("FAILED"),
            CommandResult::Unknown(_) => None,
        }
    }

    /// Whether this is [`CommandResult::Ok`].
    pub fn is_ok(self) -> bool {
        self == CommandResult::Ok
    }
}

impl From<i32> for CommandResult {
    fn from(code: i32) -> Self {
        match code {
            0 => CommandResult::Ok,
            1 => CommandResult::InvalidArgument,
            2 => CommandResult::WrongArgumentCount,
            3 => CommandResult::OutOfMemory,
            4 => CommandResult::BufferOverflow,
            5 => CommandResult::NotSupported,
            6 => CommandResult::Failed,
            other => CommandResult::Unknown(other),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "{}", self.code()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandResult {
    fn format(&self, f: defmt::Formatter) {
        match self {
            CommandResult::Ok => defmt::write!(f, "Ok"),
            CommandResult::InvalidArgument => defmt::write!(f, "InvalidArgument"),
            CommandResult::WrongArgumentCount => defmt::write!(f, "WrongArgumentCount"),
            CommandResult::OutOfMemory => defmt::write!(f, "OutOfMemory"),
            CommandResult::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            CommandResult::NotSupported => defmt::write!(f, "NotSupported"),
            CommandResult::Failed => defmt::write!(f, "Failed"),
            CommandResult::Unknown(code) => defmt::write!(f, "Unknown({=i32})", code),
        }
    }
}

/// Signature of a command callback.
///
/// `argv[0]` is the command name itself and `argc == argv.len()`. The
/// [`Console`] lets the callback print and toggle shell settings.
pub type CommandFn = fn(console: &mut Console<'_>, argc: usize, argv: &[&str]) -> CommandResult;

/// A registry entry.
///
/// Registries are plain slices supplied once when the shell is created;
/// names must be non-empty and should be unique.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::{Command, CommandResult, Console};
///
/// fn reboot(console: &mut Console<'_>, _argc: usize, _argv: &[&str]) -> CommandResult {
///     console.print("rebooting");
///     CommandResult::Ok
/// }
///
/// static COMMANDS: &[Command] = &[Command {
///     name: "reboot",
///     handler: reboot,
///     help: "restart the device",
/// }];
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// Name typed by the user. Matching is exact and case-sensitive.
    pub name: &'static str,
    /// Function invoked when the command is entered.
    pub handler: CommandFn,
    /// One-line description shown by `help`.
    pub help: &'static str,
}

/// Look up a command by exact name.
pub fn find<'c>(commands: &'c [Command], name: &str) -> Option<&'c Command> {
    commands.iter().find(|command| command.name == name)
}

/// Check that a registry can back a shell whose line holds `capacity` bytes.
pub(crate) fn validate(commands: &[Command], capacity: usize) -> Result<(), Error> {
    if commands.is_empty() {
        return Err(Error::EmptyRegistry);
    }

    for command in commands {
        if command.name.is_empty() {
            return Err(Error::EmptyCommandName);
        }
        if command.name.len() > capacity {
            return Err(Error::CommandNameTooLong);
        }
    }

    Ok(())
}

/// Handle passed to command callbacks.
///
/// Output goes through the shell's sink; formatted prints are bounded like
/// [`render::print_fmt`].
pub struct Console<'c> {
    sink: &'c mut dyn Write,
    logs_enabled: &'c mut bool,
    commands: &'c [Command],
}

impl fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("logs_enabled", &self.logs_enabled)
            .field("commands", &self.commands.len())
            .finish_non_exhaustive()
    }
}

impl<'c> Console<'c> {
    pub(crate) fn new(
        sink: &'c mut dyn Write,
        logs_enabled: &'c mut bool,
        commands: &'c [Command],
    ) -> Self {
        Self {
            sink,
            logs_enabled,
            commands,
        }
    }

    /// Print text.
    pub fn print(&mut self, text: &str) {
        render::print(&mut *self.sink, text);
    }

    /// Write raw bytes.
    pub fn write(&mut self, bytes: &[u8]) {
        self.sink.write(bytes);
    }

    /// Print a newline and carriage return.
    pub fn newline(&mut self) {
        render::newline(&mut *self.sink);
    }

    /// Bounded formatted print; returns the number of bytes written.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> usize {
        render::print_fmt(&mut *self.sink, args)
    }

    /// Enable or disable log injection.
    pub fn enable_logs(&mut self, enable: bool) {
        *self.logs_enabled = enable;
    }

    /// Whether log injection is enabled.
    pub fn logs_enabled(&self) -> bool {
        *self.logs_enabled
    }

    /// The shell's command registry.
    pub fn commands(&self) -> &'c [Command] {
        self.commands
    }
}

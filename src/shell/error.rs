//! Error types for shell construction

/// Errors reported when a shell session is initialised.
///
/// Runtime conditions such as unknown commands or failing callbacks are not
/// errors in this sense: they are rendered to the terminal and the shell
/// returns to a fresh prompt.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The command registry has no entries.
    EmptyRegistry,
    /// A registry entry has an empty name.
    EmptyCommandName,
    /// A registry entry's name does not fit in the line buffer.
    CommandNameTooLong,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::EmptyRegistry => defmt::write!(f, "EmptyRegistry"),
            Error::EmptyCommandName => defmt::write!(f, "EmptyCommandName"),
            Error::CommandNameTooLong => defmt::write!(f, "CommandNameTooLong"),
        }
    }
}

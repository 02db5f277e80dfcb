//! Reference command set.
//!
//! The functions are public so that applications can mix them into their own
//! registries; [`BUILTIN_COMMANDS`] bundles all of them.

use super::command::{Command, CommandResult, Console};

/// `help`, `man`, `hello` and `log`, in that order.
pub static BUILTIN_COMMANDS: &[Command] = &[
    Command {
        name: "help",
        handler: help,
        help: "lists all commands",
    },
    Command {
        name: "man",
        handler: man,
        help: "manual for the terminal",
    },
    Command {
        name: "hello",
        handler: hello,
        help: "say hello!",
    },
    Command {
        name: "log",
        handler: log,
        help: "on - turns logs on; off - turns logs off",
    },
];

/// List every registered command with its help text.
pub fn help(console: &mut Console<'_>, _argc: usize, _argv: &[&str]) -> CommandResult {
    for (i, command) in console.commands().iter().enumerate() {
        if i > 0 {
            console.newline();
        }
        console.print_fmt(format_args!("{}: {}", command.name, command.help));
    }
    CommandResult::Ok
}

/// Print the editing keys.
pub fn man(console: &mut Console<'_>, _argc: usize, _argv: &[&str]) -> CommandResult {
    console.print("Use arrow keys to edit the current line.");
    console.newline();
    console.print("Use ctrl + L to clear the window.");
    console.newline();
    console.print("Use tab to cycle through autocompleted commands.");
    CommandResult::Ok
}

/// Print a greeting.
pub fn hello(console: &mut Console<'_>, _argc: usize, _argv: &[&str]) -> CommandResult {
    console.print("Hello world!");
    CommandResult::Ok
}

/// `log on` / `log off`: toggle log injection.
pub fn log(console: &mut Console<'_>, argc: usize, argv: &[&str]) -> CommandResult {
    if argc != 2 {
        return CommandResult::WrongArgumentCount;
    }

    match argv[1] {
        "on" => console.enable_logs(true),
        "off" => console.enable_logs(false),
        _ => return CommandResult::InvalidArgument,
    }

    CommandResult::Ok
}

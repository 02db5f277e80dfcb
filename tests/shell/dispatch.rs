use libmsh::shell::parser::tokenize;
use libmsh::shell::{
    ASCII_BACKSPACE, ASCII_CR, ASCII_LF, Command, CommandResult, Error, MAX_ARGS, Shell,
};

use super::common::{
    Capture, HELP_LOG_HELLO, echo_handler, invalid_handler, ok_handler, output, raw_code_handler,
    shell,
};

static DISPATCH: &[Command] = &[
    Command {
        name: "log",
        handler: echo_handler,
        help: "echo arguments",
    },
    Command {
        name: "ok",
        handler: ok_handler,
        help: "succeed quietly",
    },
    Command {
        name: "fail",
        handler: invalid_handler,
        help: "report an invalid argument",
    },
    Command {
        name: "raw",
        handler: raw_code_handler,
        help: "return an unknown code",
    },
    Command {
        name: "hello",
        handler: ok_handler,
        help: "say hello!",
    },
];

#[test]
fn test_cr_on_empty_line_prints_prompt_only() {
    let mut shell = shell(DISPATCH);

    assert!(shell.process(ASCII_CR));
    assert_eq!(output(&mut shell), "\n\rmsh> ");

    assert!(shell.process(ASCII_LF));
    assert_eq!(output(&mut shell), "\n\rmsh> ");
}

#[test]
fn test_unknown_command() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process_bytes(b"lgo on\r");

    assert_eq!(
        output(&mut shell),
        "lgo on\n\rERROR: Command not found!\n\rmsh> "
    );
    assert!(shell.line().is_empty());
    assert_eq!(shell.line().cursor(), 0);
}

#[test]
fn test_prefix_is_not_a_command() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b"hel\r");

    assert!(output(&mut shell).contains("Command not found"));
}

#[test]
fn test_dispatch_passes_arguments() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b"log on\r");

    assert_eq!(output(&mut shell), "log on\n\rargc=2 argv=log|on\n\rmsh> ");
    assert!(shell.line().is_empty());
}

#[test]
fn test_repeated_spaces_are_one_separator() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b"log   a  b \r");

    assert!(output(&mut shell).contains("argc=3 argv=log|a|b\n\r"));
}

#[test]
fn test_extra_arguments_are_dropped() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b"log 1 2 3 4 5 6\r");

    let out = output(&mut shell);
    assert!(out.contains(&format!("argc={} argv=log|1|2|3|4\n\r", MAX_ARGS)));
}

#[test]
fn test_leading_space_does_not_resolve() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b" log\r");

    assert!(output(&mut shell).contains("Command not found"));
}

#[test]
fn test_ok_result_prints_nothing() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b"ok\r");

    assert_eq!(output(&mut shell), "ok\n\r\n\rmsh> ");
}

#[test]
fn test_named_failure_is_reported() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b"fail\r");

    let out = output(&mut shell);
    assert!(out.contains("fail returned with exit code INVALID_ARGUMENT"));
    assert!(!out.contains("out of range"));
    assert!(out.ends_with("\n\rmsh> "));
}

#[test]
fn test_out_of_range_code_is_reported() {
    let mut shell = shell(DISPATCH);
    shell.process_bytes(b"raw\r");

    assert!(output(&mut shell).contains("raw returned with exit code 42 (code out of range)"));
}

#[test]
fn test_mid_line_backspace_truncates_submitted_line() {
    let mut shell = shell(DISPATCH);
    // "log ab", cursor back over "b", backspace clears the final slot.
    shell.process_bytes(b"log ab\x1b[D");
    shell.process(ASCII_BACKSPACE);
    assert_eq!(shell.line().len(), 6);
    shell.process(ASCII_CR);

    assert!(output(&mut shell).contains("argc=2 argv=log|a\n\r"));
}

#[test]
fn test_uninitialised_shell_is_inert() {
    let mut shell: Shell<'_, Capture> = Shell::new(DISPATCH);

    assert!(!shell.is_initialized());
    assert!(!shell.process(b'a'));
    assert!(!shell.process_bytes(b"ok\r"));
    assert_eq!(shell.print_fmt(format_args!("ignored")), 0);
    assert_eq!(shell.line().len(), 0);
    assert!(shell.sink().is_none());
}

#[test]
fn test_init_prints_prompt() {
    let mut shell: Shell<'_, Capture> = Shell::new(DISPATCH);
    shell.init(Capture::default()).unwrap();

    assert!(shell.is_initialized());
    assert_eq!(output(&mut shell), "\n\rmsh> ");
}

#[test]
fn test_init_rejects_bad_registries() {
    static EMPTY_NAME: &[Command] = &[Command {
        name: "",
        handler: ok_handler,
        help: "",
    }];
    static TOO_LONG: &[Command] = &[Command {
        name: "abcdefghijklmnopqrstuvwxyz0123456789",
        handler: ok_handler,
        help: "",
    }];

    let empty: Result<Shell<'_, Capture>, Error> = Shell::with_sink(&[], Capture::default());
    assert_eq!(empty.unwrap_err(), Error::EmptyRegistry);

    let mut shell: Shell<'_, Capture> = Shell::new(EMPTY_NAME);
    assert_eq!(shell.init(Capture::default()), Err(Error::EmptyCommandName));
    assert!(!shell.is_initialized());

    let mut shell: Shell<'_, Capture> = Shell::new(TOO_LONG);
    assert_eq!(shell.init(Capture::default()), Err(Error::CommandNameTooLong));

    // The same name fits a wider line.
    let mut shell: Shell<'_, Capture, 64> = Shell::new(TOO_LONG);
    assert_eq!(shell.init(Capture::default()), Ok(()));
}

#[test]
fn test_custom_prompt() {
    let mut shell = shell(DISPATCH);
    shell.set_prompt("> ");
    shell.process(ASCII_CR);

    assert_eq!(output(&mut shell), "\n\r> ");
    assert_eq!(shell.prompt(), "> ");
}

#[test]
fn test_tokenize() {
    assert_eq!(&tokenize("log")[..], &["log"]);
    assert_eq!(&tokenize("log on ")[..], &["log", "on"]);
    assert_eq!(&tokenize(" log")[..], &["", "log"]);
    assert_eq!(tokenize("a b c d e f g").len(), MAX_ARGS);
}

#[test]
fn test_command_result_codes() {
    for code in 0..=6 {
        let result = CommandResult::from(code);
        assert_eq!(result.code(), code);
        assert!(result.symbol().is_some());
    }

    assert_eq!(CommandResult::from(0), CommandResult::Ok);
    assert!(CommandResult::Ok.is_ok());
    assert_eq!(CommandResult::from(-1), CommandResult::Unknown(-1));
    assert_eq!(CommandResult::Unknown(7).symbol(), None);
    assert_eq!(CommandResult::Failed.to_string(), "FAILED");
    assert_eq!(CommandResult::Unknown(-2).to_string(), "-2");
}

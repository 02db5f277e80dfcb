use libmsh::shell::escape::{Arrow, EscapeDecoder, EscapeState};
use libmsh::shell::{ASCII_ESC, ASCII_FF, ASCII_TAB};

use super::common::{HELP_LOG_HELLO, output, shell};

#[test]
fn test_decoder_starts_idle() {
    let decoder = EscapeDecoder::new();
    assert_eq!(decoder.state(), EscapeState::Idle);
    assert!(decoder.is_idle());
}

#[test]
fn test_decoder_recognises_arrows() {
    for (byte, arrow) in [
        (b'A', Arrow::Up),
        (b'B', Arrow::Down),
        (b'C', Arrow::Right),
        (b'D', Arrow::Left),
    ] {
        let mut decoder = EscapeDecoder::new();
        decoder.begin();
        assert_eq!(decoder.advance(b'['), None);
        assert_eq!(decoder.state(), EscapeState::AwaitingDirection);
        assert_eq!(decoder.advance(byte), Some(arrow));
        assert_eq!(decoder.state(), EscapeState::Idle);
        assert_eq!(arrow.byte(), byte);
    }
}

#[test]
fn test_decoder_abandons_unknown_byte() {
    let mut decoder = EscapeDecoder::new();
    decoder.begin();
    assert_eq!(decoder.advance(b'Z'), None);
    assert_eq!(decoder.state(), EscapeState::Idle);
}

#[test]
fn test_decoder_ignores_direction_when_idle() {
    let mut decoder = EscapeDecoder::new();
    assert_eq!(decoder.advance(b'D'), None);
    assert_eq!(decoder.state(), EscapeState::Idle);
}

#[test]
fn test_left_arrow_moves_cursor() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process_bytes(b"abc");
    output(&mut shell);

    shell.process_bytes(b"\x1b[D");
    assert_eq!(shell.line().cursor(), 2);
    assert_eq!(shell.escape_state(), EscapeState::Idle);
    assert_eq!(output(&mut shell), "\x1b[D");

    shell.process(b'x');
    assert_eq!(shell.line().as_bytes(), b"abx");
    assert_eq!(shell.line().cursor(), 3);
}

#[test]
fn test_right_arrow_at_end_is_silent() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process_bytes(b"ab");
    output(&mut shell);

    shell.process_bytes(b"\x1b[C");
    assert_eq!(shell.line().cursor(), 2);
    assert_eq!(output(&mut shell), "");
}

#[test]
fn test_up_and_down_are_noops() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process_bytes(b"ab\x1b[A\x1b[B");

    assert_eq!(shell.line().as_bytes(), b"ab");
    assert_eq!(shell.line().cursor(), 2);
    assert_eq!(shell.escape_state(), EscapeState::Idle);
    assert_eq!(output(&mut shell), "ab");
}

#[test]
fn test_byte_after_escape_is_swallowed() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process(ASCII_ESC);
    assert_eq!(shell.escape_state(), EscapeState::AwaitingDirection);

    // Abandons the sequence without reaching the line.
    shell.process(b'x');
    assert_eq!(shell.escape_state(), EscapeState::Idle);
    assert_eq!(shell.line().len(), 0);

    shell.process(b'y');
    assert_eq!(shell.line().as_bytes(), b"y");
    assert_eq!(output(&mut shell), "y");
}

#[test]
fn test_bracket_when_idle_is_swallowed() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process(b'[');

    assert_eq!(shell.line().len(), 0);
    assert_eq!(shell.escape_state(), EscapeState::Idle);
    assert_eq!(output(&mut shell), "");
}

#[test]
fn test_form_feed_resets_everything() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process_bytes(b"he");
    shell.process(ASCII_TAB);
    assert!(shell.autocomplete().is_armed());
    shell.process(ASCII_ESC);
    output(&mut shell);

    shell.process(ASCII_FF);
    assert_eq!(shell.line().len(), 0);
    assert_eq!(shell.line().cursor(), 0);
    assert!(!shell.autocomplete().is_armed());
    assert_eq!(shell.escape_state(), EscapeState::Idle);
    assert_eq!(output(&mut shell), "\x0cmsh> ");
}

#[test]
fn test_form_feed_when_idle() {
    let mut shell = shell(HELP_LOG_HELLO);
    shell.process_bytes(b"abc\x1b[D");
    output(&mut shell);

    shell.process(ASCII_FF);
    assert!(shell.line().is_empty());
    assert_eq!(shell.line().cursor(), 0);
    assert_eq!(output(&mut shell), "\x0cmsh> ");
}

//! Argument tokenizer.

use super::MAX_ARGS;

/// Parsed arguments; `args[0]` is the command name.
pub type Args<'b> = heapless::Vec<&'b str, MAX_ARGS>;

/// Split a command line into at most [`MAX_ARGS`] space-separated tokens.
///
/// Token 0 runs from the start of the line to the first space. The remaining
/// tokens are the non-empty runs between spaces, so repeated spaces act as a
/// single separator. Tokens past the limit are dropped.
///
/// # Examples
///
/// ```rust
/// use libmsh::shell::parser::tokenize;
///
/// let args = tokenize("log  on");
/// assert_eq!(&args[..], &["log", "on"]);
/// ```
pub fn tokenize(line: &str) -> Args<'_> {
    let mut args = Args::new();
    let mut tokens = line.split(' ');

    if let Some(name) = tokens.next() {
        let _ = args.push(name);
    }

    for token in tokens.filter(|token| !token.is_empty()) {
        if args.push(token).is_err() {
            break;
        }
    }

    args
}

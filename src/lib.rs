//! # libmsh - embedded command shell core
//!
//! A small interactive shell for resource-constrained devices. Bytes from a
//! character stream (typically a UART console) are fed in one at a time; the
//! shell edits a single fixed-capacity line, cycles tab-completion through a
//! static command registry, dispatches finished lines to registered callbacks,
//! and lets asynchronous log lines interrupt the prompt without disturbing
//! what the user is typing.
//!
//! ## Features
//!
//! - **Line editing**: cursor movement with the arrow keys, overwrite at cursor,
//!   backspace and delete
//! - **Tab completion**: round-robin over every command matching the typed prefix
//! - **Command dispatch**: `argc`/`argv` style callbacks with symbolic exit codes
//! - **Log injection**: redraws the prompt and the pending line after each log
//! - **Zero allocation**: every buffer is fixed-size and sized at compile time
//!
//! ## Usage
//!
//! ```rust
//! use libmsh::shell::{Shell, builtin::BUILTIN_COMMANDS};
//!
//! fn uart_write(bytes: &[u8]) {
//!     // Push bytes to the serial peripheral
//!     let _ = bytes;
//! }
//!
//! let mut shell: Shell<'_, fn(&[u8])> = Shell::new(BUILTIN_COMMANDS);
//! shell.init(uart_write).unwrap();
//!
//! for &byte in b"hello\r" {
//!     shell.process(byte);
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the `shell::IoSink` adapter
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Interactive command shell: line editing, completion, dispatch and log injection.
pub mod shell;

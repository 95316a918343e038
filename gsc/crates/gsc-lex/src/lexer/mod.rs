//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, `next_token` and dispatch
//! - `state` - Nesting depth and literal resumption state
//! - `identifier` - Identifier and contextual keyword lexing
//! - `number` - Number literal lexing
//! - `string` - Quoted string lexing and literal suspension
//! - `regex` - Slashy and dollar-slashy literal lexing
//! - `escape` - Backslash escape decoding
//! - `operator` - Operator lexing and slash disambiguation
//! - `comment` - Whitespace, line breaks and comments

mod comment;
mod core;
mod escape;
mod identifier;
mod number;
mod operator;
mod regex;
mod state;
mod string;

pub use core::Lexer;
pub use state::{LiteralKind, LiteralSubstate, ScannerState};

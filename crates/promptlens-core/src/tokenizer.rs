//! Whitespace tokenizer for diagnostic token breakdowns
//!
//! Splits on single spaces only. Runs of spaces yield empty tokens and the
//! empty string yields exactly one empty token, so the number of tokens is
//! always one more than the number of spaces in the input.

use crate::types::Token;

/// Split `text` into indexed tokens on every `' '` boundary.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split(' ')
        .enumerate()
        .map(|(index, word)| Token::new(index, word))
        .collect()
}

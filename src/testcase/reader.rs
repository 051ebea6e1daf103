//! Reader for existing test case input files
//!
//! Input files are plain text: whitespace separated integers, where line breaks carry no meaning
//! beyond separating tokens. Trailing separators are allowed.

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::{FromStr, SplitWhitespace};

/// The error type used when an input file does not match its problem's format
#[derive(Debug)]
pub struct ParseError {
    description: String
}

impl ParseError {
    pub fn new(description: &str) -> Self {
        ParseError { description: description.to_owned() }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "parse error: {}", self.description)
    }
}

impl Error for ParseError {
}

/// Pulls integers out of an input file one token at a time
pub struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
    consumed: usize
}

impl<'a> TokenReader<'a> {
    pub fn new(text: &'a str) -> Self {
        TokenReader { tokens: text.split_whitespace(), consumed: 0 }
    }

    /// Read the next token as a `T`
    ///
    /// `what` names the expected field and only shows up in the error message.
    pub fn next<T: FromStr>(&mut self, what: &str) -> Result<T, ParseError> {
        let token = match self.tokens.next() {
            Some(token) => token,
            None => {
                return Err(ParseError::new(
                    &format!("unexpected end of input while reading {} (token #{})", what, self.consumed + 1)))
            }
        };
        self.consumed += 1;
        token.parse().map_err(|_| {
            ParseError::new(&format!("token #{} `{}` is not a valid {}", self.consumed, token, what))
        })
    }

    /// Make sure nothing follows the last expected token
    pub fn finish(mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            Some(token) => Err(ParseError::new(
                &format!("unexpected trailing token `{}` after {} tokens", token, self.consumed))),
            None => Ok(())
        }
    }
}

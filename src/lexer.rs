// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    error::{Error, Position, RawError, RawResult},
    syntax::{ClauseId, Lit},
};

/// Tokenizer for LIDRUP traces.
///
/// Tracks the current line and column so that errors can be reported with
/// their input position.
pub struct Lexer<R> {
    reader: R,
    path_name: Option<String>,
    current_line: usize,
    current_column: usize,
}

impl<R> Lexer<R>
where
    R: std::io::BufRead,
{
    pub fn new(path_name: Option<String>, reader: R) -> Self {
        Self {
            reader,
            path_name,
            current_line: 0,
            current_column: 0,
        }
    }

    pub fn current_position(&self) -> Position {
        Position {
            path_name: self.path_name.clone(),
            line: self.current_line,
            column: self.current_column,
        }
    }

    pub fn make_error(&self, error: RawError) -> Error {
        Error {
            position: self.current_position(),
            error,
        }
    }

    fn consume_byte(&mut self) {
        if let Some(c) = self.peek_byte() {
            if *c == b'\n' {
                self.current_line += 1;
                self.current_column = 0;
            } else {
                self.current_column += 1;
            }
            self.reader.consume(1)
        }
    }

    #[inline]
    fn peek_bytes(&mut self) -> &[u8] {
        self.reader
            .fill_buf()
            .expect("Error while reading input stream")
    }

    pub(crate) fn peek_byte(&mut self) -> Option<&u8> {
        self.peek_bytes().get(0)
    }

    fn skip_space(&mut self) -> bool {
        match self.peek_byte() {
            Some(b' ') | Some(b'\t') | Some(b'\r') => {
                self.consume_byte();
                true
            }
            _ => false,
        }
    }

    fn skip_spaces(&mut self) {
        while self.skip_space() {}
    }

    /// Read a whitespace-delimited word, consuming trailing spaces.
    pub(crate) fn read_word(&mut self) -> RawResult<String> {
        let mut bytes = Vec::new();
        while let Some(c) = self.peek_byte() {
            let c = *c;
            if c == b' ' || c == b'\t' || c == b'\r' {
                self.consume_byte();
                self.skip_spaces();
                break;
            }
            if c == b'\n' {
                break;
            }
            bytes.push(c);
            self.consume_byte();
        }
        String::from_utf8(bytes).map_err(RawError::InvalidUtf8String)
    }

    /// Read a sequence of integers up to and including the `0` sentinel.
    fn read_terminated<F, T>(&mut self, f: F) -> RawResult<Vec<T>>
    where
        F: Fn(&str) -> RawResult<T>,
    {
        let mut items = Vec::new();
        loop {
            match self.peek_byte() {
                None | Some(b'\n') => return Err(RawError::MissingTerminator),
                _ => (),
            }
            let word = self.read_word()?;
            if word == "0" {
                return Ok(items);
            }
            items.push(f(&word)?);
        }
    }

    /// Read signed literals terminated by the `0` sentinel.
    pub(crate) fn read_literals(&mut self) -> RawResult<Vec<Lit>> {
        self.read_terminated(|word| word.parse().map_err(RawError::InvalidInteger))
    }

    /// Read clause identifiers terminated by the `0` sentinel.
    pub(crate) fn read_clause_ids(&mut self) -> RawResult<Vec<ClauseId>> {
        self.read_terminated(|word| word.parse().map_err(RawError::InvalidInteger))
    }

    /// Consume the rest of the current line without interpreting it.
    pub(crate) fn read_line(&mut self) -> RawResult<String> {
        let mut bytes = Vec::new();
        while let Some(c) = self.peek_byte() {
            if *c == b'\n' {
                break;
            }
            bytes.push(*c);
            self.consume_byte();
        }
        String::from_utf8(bytes).map_err(RawError::InvalidUtf8String)
    }

    /// Expect the end of the current line (or of the input).
    pub(crate) fn read_end_of_line(&mut self) -> RawResult<()> {
        self.skip_spaces();
        match self.peek_byte() {
            Some(b'\n') => {
                self.consume_byte();
                Ok(())
            }
            None => Ok(()),
            c => Err(RawError::UnexpectedChar(
                c.cloned().map(char::from),
                vec!['\n'],
            )),
        }
    }

    /// Skip blank lines. Returns false once the input is exhausted.
    pub(crate) fn skip_blank_lines(&mut self) -> bool {
        loop {
            match self.peek_byte() {
                Some(b'\n') => self.consume_byte(),
                Some(_) => return true,
                None => return false,
            }
        }
    }
}

#[test]
fn test_read_literals() {
    let mut lexer = Lexer::new(None, &b"3 -4 0\n"[..]);
    assert_eq!(lexer.read_literals().unwrap(), vec![3, -4]);
    assert_eq!(lexer.read_end_of_line(), Ok(()));
}

#[test]
fn test_read_literals_empty() {
    let mut lexer = Lexer::new(None, &b"0\n"[..]);
    assert_eq!(lexer.read_literals().unwrap(), Vec::<Lit>::new());
}

#[test]
fn test_missing_terminator() {
    let mut lexer = Lexer::new(None, &b"3 -4\n"[..]);
    assert_eq!(lexer.read_literals(), Err(RawError::MissingTerminator));
}

#[test]
fn test_invalid_integer() {
    let mut lexer = Lexer::new(None, &b"3 x 0\n"[..]);
    assert!(matches!(
        lexer.read_literals(),
        Err(RawError::InvalidInteger(_))
    ));
}

#[test]
fn test_position_tracking() {
    let mut lexer = Lexer::new(None, &b"7 0\n1 0\n"[..]);
    lexer.read_clause_ids().unwrap();
    lexer.read_end_of_line().unwrap();
    assert_eq!(lexer.current_position().line, 1);
}

// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use structopt::StructOpt;

use crate::{
    error::{RawError, RawResult, Result},
    lexer::Lexer,
    syntax::{ClauseId, Lit, QueryResult},
};

// https://github.com/TeXitoi/structopt/issues/333
#[cfg_attr(not(doc), allow(missing_docs))]
#[cfg_attr(doc, doc = "Configuration for the parsing of LIDRUP traces.")]
#[derive(Debug, Default, Clone, StructOpt)]
pub struct ParserConfig {
    /// Whether to fail on lines with an unrecognized leading tag instead
    /// of skipping them.
    #[structopt(long)]
    pub strict: bool,
}

/// Parser for LIDRUP traces.
pub struct Parser<R, S> {
    config: ParserConfig,
    lexer: Lexer<R>,
    state: S,
}

/// Actions taken when visiting LIDRUP traces.
pub trait LogVisitor {
    fn input_clause(&mut self, lits: Vec<Lit>) -> RawResult<()>;

    fn learned_clause(&mut self, lits: Vec<Lit>) -> RawResult<()>;

    fn delete_clauses(&mut self, lits: Vec<Lit>) -> RawResult<()>;

    fn query(&mut self, assumptions: Vec<Lit>) -> RawResult<()>;

    fn weaken_clauses(&mut self, ids: Vec<ClauseId>) -> RawResult<()>;

    fn restore_clauses(&mut self, ids: Vec<ClauseId>) -> RawResult<()>;

    fn announce_result(&mut self, result: QueryResult) -> RawResult<()>;

    fn unsat_core(&mut self, core: Vec<Lit>) -> RawResult<()>;

    fn model(&mut self, model: Vec<Lit>) -> RawResult<()>;
}

impl<R, S> Parser<R, S> {
    pub fn new(config: ParserConfig, lexer: Lexer<R>, state: S) -> Self {
        Self {
            config,
            lexer,
            state,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl<R, S> Parser<R, S>
where
    R: std::io::BufRead,
    S: LogVisitor,
{
    /// Parse the input.
    pub fn parse(&mut self) -> Result<()> {
        while self.parse_line().map_err(|e| self.lexer.make_error(e))? {}
        Ok(())
    }

    /// Parse one line of the input. The leading character of the first
    /// word selects the production; lines with an unknown tag are skipped
    /// unless `strict` is set.
    fn parse_line(&mut self) -> RawResult<bool> {
        let lexer = &mut self.lexer;
        if !lexer.skip_blank_lines() {
            return Ok(false);
        }
        let state = &mut self.state;
        let word = lexer.read_word()?;
        match word.chars().next() {
            Some('i') => {
                let lits = lexer.read_literals()?;
                state.input_clause(lits)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('l') => {
                let lits = lexer.read_literals()?;
                state.learned_clause(lits)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('d') => {
                let lits = lexer.read_literals()?;
                state.delete_clauses(lits)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('q') => {
                let assumptions = lexer.read_literals()?;
                state.query(assumptions)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('w') => {
                let ids = lexer.read_clause_ids()?;
                state.weaken_clauses(ids)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('r') => {
                let ids = lexer.read_clause_ids()?;
                state.restore_clauses(ids)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('s') => {
                let status = lexer.read_word()?;
                state.announce_result(QueryResult::from_word(&status))?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('u') => {
                let core = lexer.read_literals()?;
                state.unsat_core(core)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('m') => {
                let model = lexer.read_literals()?;
                state.model(model)?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            Some('c') => {
                // Comment line.
                lexer.read_line()?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            _ if !self.config.strict => {
                lexer.read_line()?;
                lexer.read_end_of_line()?;
                Ok(true)
            }
            _ => Err(RawError::UnknownCommand(word)),
        }
    }
}

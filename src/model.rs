// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;
use structopt::StructOpt;

use crate::error::{RawError, RawResult, Result};
use crate::lexer::Lexer;
use crate::parser::{LogVisitor, Parser, ParserConfig};
use crate::syntax::{ClauseId, Lit, QueryRecord, QueryResult};

/// Configuration for the analysis of LIDRUP traces.
#[derive(Debug, Default, Clone, StructOpt)]
pub struct ModelConfig {
    /// Whether to print a digest of every query record as it closes.
    #[structopt(long)]
    pub display_query_logs: bool,
}

/// Main state of the LIDRUP analyzer.
///
/// One `QueryRecord` is open at any time; a closing `u` or `m` line
/// freezes it and opens the next one. The three clause-indexed maps
/// outlive individual records and span the whole trace.
#[derive(Default, Debug)]
pub struct Model {
    // Configuration.
    config: ModelConfig,
    // Closed records, in trace order.
    queries: Vec<QueryRecord>,
    // The record currently being accumulated.
    current: QueryRecord,
    // Whether the current record has seen its `q` line.
    queried: bool,
    // Query index at which each weakened clause was vacated.
    vacated: BTreeMap<ClauseId, usize>,
    // Lifetime weakening count per clause.
    weakens: BTreeMap<ClauseId, usize>,
    // Lifetime restoration count per clause.
    restores: BTreeMap<ClauseId, usize>,
}

impl Model {
    /// Build a new LIDRUP analyzer.
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Process some input with the default parser configuration.
    pub fn process<R>(&mut self, path_name: Option<String>, input: R) -> Result<()>
    where
        R: std::io::BufRead,
    {
        self.process_with_config(ParserConfig::default(), path_name, input)
    }

    /// Process some input.
    pub fn process_with_config<R>(
        &mut self,
        config: ParserConfig,
        path_name: Option<String>,
        input: R,
    ) -> Result<()>
    where
        R: std::io::BufRead,
    {
        let lexer = Lexer::new(path_name, input);
        Parser::new(config, lexer, self).parse()
    }

    /// All closed query records, in trace order.
    pub fn queries(&self) -> &[QueryRecord] {
        &self.queries
    }

    /// Lifetime weakening counts per clause.
    pub fn weakens(&self) -> &BTreeMap<ClauseId, usize> {
        &self.weakens
    }

    /// Lifetime restoration counts per clause.
    pub fn restores(&self) -> &BTreeMap<ClauseId, usize> {
        &self.restores
    }

    /// Whether any clause was ever weakened or restored.
    pub fn has_clause_movements(&self) -> bool {
        !self.weakens.is_empty() || !self.restores.is_empty()
    }

    fn close_query(&mut self) {
        if self.config.display_query_logs {
            let q = &self.current;
            println!(
                "query {}: {} inputs, {} learned, {} deleted, {} weakened, {} restored, {:?}",
                q.index,
                q.input_clauses,
                q.learned_clauses,
                q.deleted_clauses,
                q.total_weakened(),
                q.total_restored(),
                q.result,
            );
        }
        let next = QueryRecord::new(self.current.index + 1);
        self.queries.push(std::mem::replace(&mut self.current, next));
        self.queried = false;
    }
}

impl LogVisitor for &mut Model {
    fn input_clause(&mut self, _lits: Vec<Lit>) -> RawResult<()> {
        self.current.input_clauses += 1;
        if self.queried {
            self.current.input_after_query += 1;
        }
        Ok(())
    }

    fn learned_clause(&mut self, _lits: Vec<Lit>) -> RawResult<()> {
        self.current.learned_clauses += 1;
        Ok(())
    }

    fn delete_clauses(&mut self, _lits: Vec<Lit>) -> RawResult<()> {
        // One deletion line counts once, whatever it lists.
        self.current.deleted_clauses += 1;
        Ok(())
    }

    fn query(&mut self, assumptions: Vec<Lit>) -> RawResult<()> {
        self.queried = true;
        self.current.asserted_vars = assumptions;
        Ok(())
    }

    fn weaken_clauses(&mut self, ids: Vec<ClauseId>) -> RawResult<()> {
        let index = self.current.index;
        for id in ids {
            *self.weakens.entry(id).or_insert(0) += 1;
            // A clause weakened for the first time has staleness 0.
            let vacated_at = self.vacated.get(&id).copied().unwrap_or(index);
            *self.current.weakened.entry(index - vacated_at).or_insert(0) += 1;
            self.vacated.insert(id, index);
        }
        Ok(())
    }

    fn restore_clauses(&mut self, ids: Vec<ClauseId>) -> RawResult<()> {
        let index = self.current.index;
        for id in ids {
            let vacated_at = self
                .vacated
                .remove(&id)
                .ok_or(RawError::RestoredUnweakenedClause(id))?;
            *self.current.restored.entry(index - vacated_at).or_insert(0) += 1;
            *self.restores.entry(id).or_insert(0) += 1;
            self.vacated.insert(id, index);
        }
        Ok(())
    }

    fn announce_result(&mut self, result: QueryResult) -> RawResult<()> {
        self.current.result = Some(result);
        Ok(())
    }

    fn unsat_core(&mut self, core: Vec<Lit>) -> RawResult<()> {
        self.current.unsat_core = Some(core);
        self.close_query();
        Ok(())
    }

    fn model(&mut self, model: Vec<Lit>) -> RawResult<()> {
        self.current.model = Some(model);
        self.close_query();
        Ok(())
    }
}

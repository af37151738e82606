// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

/// A signed literal. The sign carries the assumed polarity of the
/// underlying variable.
pub type Lit = i64;

/// A positive clause identifier as used by `w`/`r` lines.
pub type ClauseId = u64;

/// The variable of a literal.
pub fn var(lit: Lit) -> ClauseId {
    lit.unsigned_abs()
}

/// Outcome announced by an `s` line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum QueryResult {
    Satisfiable,
    Unsatisfiable,
    /// Any other status token (e.g. `UNKNOWN`).
    Unknown,
}

impl QueryResult {
    pub fn from_word(word: &str) -> Self {
        match word {
            "SATISFIABLE" => QueryResult::Satisfiable,
            "UNSATISFIABLE" => QueryResult::Unsatisfiable,
            _ => QueryResult::Unknown,
        }
    }
}

/// Counters and payloads accumulated for one query of the trace.
///
/// A record is open from the line after the previous `u`/`m` line (or the
/// start of the file) until its own `u`/`m` line closes it. Closed records
/// are never mutated again.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct QueryRecord {
    /// Ordinal position of the query in the trace.
    pub index: usize,
    /// Input clauses seen while the record was open.
    pub input_clauses: usize,
    /// Input clauses seen after the record's `q` line.
    pub input_after_query: usize,
    /// Learned clauses seen while the record was open.
    pub learned_clauses: usize,
    /// Deletion lines seen while the record was open.
    pub deleted_clauses: usize,
    /// Clauses weakened while the record was open, keyed by the number of
    /// queries since each clause was last weakened.
    pub weakened: BTreeMap<usize, usize>,
    /// Clauses restored while the record was open, keyed by the number of
    /// queries they spent weakened.
    pub restored: BTreeMap<usize, usize>,
    /// Assumptions of the `q` line, signs and order preserved.
    pub asserted_vars: Vec<Lit>,
    /// Status announced by the `s` line, if any.
    pub result: Option<QueryResult>,
    /// Failed assumptions reported by a closing `u` line.
    pub unsat_core: Option<Vec<Lit>>,
    /// Satisfying assignment reported by a closing `m` line.
    pub model: Option<Vec<Lit>>,
}

impl QueryRecord {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Input clauses added before the query was posed.
    pub fn input_before_query(&self) -> usize {
        self.input_clauses - self.input_after_query
    }

    pub fn total_weakened(&self) -> usize {
        self.weakened.values().sum()
    }

    pub fn total_restored(&self) -> usize {
        self.restored.values().sum()
    }

    /// Size of the reported unsatisfiable core, if the query failed.
    pub fn core_size(&self) -> usize {
        match self.result {
            Some(QueryResult::Unsatisfiable) => {
                self.unsat_core.as_ref().map(Vec::len).unwrap_or(0)
            }
            _ => 0,
        }
    }
}

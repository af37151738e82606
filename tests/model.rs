// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use lidrupviz::error::RawError;
use lidrupviz::report::Summary;
use lidrupviz::syntax::QueryResult;
use lidrupviz::{Model, ParserConfig};

fn process_file(path: &str) -> std::io::Result<Model> {
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    let mut model = Model::default();
    if let Err(e) = model.process(Some(path.to_string()), file) {
        panic!("Error in {}: {}", path, e);
    }
    Ok(model)
}

fn process_bytes(input: &[u8]) -> Model {
    let mut model = Model::default();
    model.process(None, input).unwrap();
    model
}

#[test]
fn test_example_trace() -> std::io::Result<()> {
    let model = process_file("tests/data/example.lidrup")?;
    let queries = model.queries();
    assert_eq!(queries.len(), 3);

    assert_eq!(queries[0].input_clauses, 2);
    assert_eq!(queries[0].learned_clauses, 1);
    assert_eq!(queries[0].asserted_vars, vec![1, -3]);
    assert_eq!(queries[0].result, Some(QueryResult::Unsatisfiable));
    assert_eq!(queries[0].unsat_core, Some(vec![1, -3]));
    assert!(queries[0].model.is_none());

    assert_eq!(queries[1].input_clauses, 1);
    assert_eq!(queries[1].input_after_query, 0);
    assert_eq!(queries[1].deleted_clauses, 1);
    assert_eq!(queries[1].weakened.get(&0), Some(&1));
    assert_eq!(queries[1].model, Some(vec![2, 3, -1]));

    // Clause 1 spent one query weakened before being restored, then was
    // weakened again in the same query.
    assert_eq!(queries[2].restored.get(&1), Some(&1));
    assert_eq!(queries[2].weakened.get(&0), Some(&1));

    assert_eq!(model.weakens().get(&1), Some(&2));
    assert_eq!(model.restores().get(&1), Some(&1));

    let summary = Summary::new(queries);
    assert_eq!(summary.total_clauses, 5);
    assert_eq!(summary.total_learned, 2);
    assert_eq!(summary.total_deletions, 1);
    assert_eq!(summary.total_weakens, 2);
    assert_eq!(summary.total_restores, 1);
    assert_eq!(summary.percent_weakened_not_restored, 50.0);
    assert_eq!(summary.num_sat, 2);
    assert_eq!(summary.num_unsat, 1);
    Ok(())
}

// One record closes per `u`/`m` line, and the summary counts every input
// and learned clause.
#[test]
fn test_record_closure_totals() {
    let model = process_bytes(
        b"i 1 0\nq 1 0\ns SATISFIABLE\nm 1 0\nl 2 0\nq -1 0\ns UNSATISFIABLE\nu -1 0\ni 3 0\n",
    );
    // The trailing input clause belongs to a record that never closed.
    assert_eq!(model.queries().len(), 2);
    let summary = Summary::new(model.queries());
    assert_eq!(summary.total_clauses, 2);
    assert_eq!(summary.num_sat, 1);
    assert_eq!(summary.num_unsat, 1);
}

#[test]
fn test_sat_query_end_to_end() {
    let model = process_bytes(b"i 1 2 0\nq 3 -4 0\ni 5 0\ns SATISFIABLE\nm 3 -4 0\n");
    let queries = model.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].input_clauses, 2);
    assert_eq!(queries[0].input_after_query, 1);
    assert_eq!(queries[0].input_before_query(), 1);
    assert_eq!(queries[0].asserted_vars, vec![3, -4]);
    assert_eq!(queries[0].result, Some(QueryResult::Satisfiable));
    assert_eq!(queries[0].model, Some(vec![3, -4]));
}

// A first-time weaken has staleness 0; weakening the same clause again
// three queries later has staleness 3.
#[test]
fn test_repeated_weaken_staleness() {
    let model = process_bytes(b"w 7 0\nm 0\nm 0\nm 0\nw 7 0\nm 0\n");
    let queries = model.queries();
    assert_eq!(queries.len(), 4);
    assert_eq!(queries[0].weakened.get(&0), Some(&1));
    assert_eq!(queries[3].weakened.get(&3), Some(&1));
    assert_eq!(model.weakens().get(&7), Some(&2));
    assert_eq!(model.restores().get(&7), None);
}

#[test]
fn test_weakened_never_restored_percentage() {
    let model = process_bytes(b"w 5 0\nq 1 0\ns SATISFIABLE\nm 1 0\n");
    let summary = Summary::new(model.queries());
    assert_eq!(summary.total_weakens, 1);
    assert_eq!(summary.total_restores, 0);
    assert_eq!(summary.percent_weakened_not_restored, 100.0);
}

#[test]
fn test_restore_unweakened_is_fatal() {
    let mut model = Model::default();
    let result = model.process(None, &b"r 7 0\n"[..]);
    match result {
        Err(e) => assert_eq!(e.error, RawError::RestoredUnweakenedClause(7)),
        Ok(()) => panic!("restoring an unweakened clause must fail"),
    }
}

#[test]
fn test_assumption_order_preserved() {
    let model = process_bytes(b"q 9 -2 5 0\ns SATISFIABLE\nm 9 -2 5 0\n");
    assert_eq!(model.queries()[0].asserted_vars, vec![9, -2, 5]);
}

#[test]
fn test_result_without_status_line() {
    let model = process_bytes(b"i 1 0\nm 1 0\n");
    assert_eq!(model.queries()[0].result, None);
}

#[test]
fn test_unknown_status_token() {
    let model = process_bytes(b"q 1 0\ns UNKNOWN\nm 0\n");
    assert_eq!(model.queries()[0].result, Some(QueryResult::Unknown));
}

#[test]
fn test_unrecognized_tags() {
    // Skipped by default, fatal under --strict.
    let model = process_bytes(b"x whatever\nq 1 0\ns SATISFIABLE\nm 1 0\n");
    assert_eq!(model.queries().len(), 1);

    let mut model = Model::default();
    let config = ParserConfig { strict: true };
    let result = model.process_with_config(config, None, &b"x whatever\n"[..]);
    match result {
        Err(e) => assert_eq!(e.error, RawError::UnknownCommand("x".to_string())),
        Ok(()) => panic!("unknown commands must fail under --strict"),
    }
}

#[test]
fn test_error_position() {
    let mut model = Model::default();
    let err = model
        .process(Some("trace.lidrup".to_string()), &b"w 3 0\nm 0\nr 4 0\n"[..])
        .unwrap_err();
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.path_name.as_deref(), Some("trace.lidrup"));
}

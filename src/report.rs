// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::model::Model;
use crate::syntax::{var, ClauseId, QueryRecord, QueryResult};
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashSet};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Cap on x-axis tick labels per chart.
const NUM_TICK_LABELS: usize = 10;

/// Distinct staleness intervals drawn as their own stacked rows; the rest
/// share one overflow row.
const MAX_STALENESS_ROWS: usize = 15;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const DARK_RED: RGBColor = RGBColor(139, 0, 0);
const DARK_BLUE: RGBColor = RGBColor(0, 0, 139);
const GRAY: RGBColor = RGBColor(128, 128, 128);
const DARK_GRAY: RGBColor = RGBColor(169, 169, 169);

/// At most `num_labels` evenly spaced tick positions over `0..len`, always
/// including the final index.
pub fn tick_indices(len: usize, num_labels: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let step = std::cmp::max(len / (num_labels - 1), 1);
    let mut ticks: Vec<usize> = (0..len).step_by(step).collect();
    if let Some(last) = ticks.last_mut() {
        if *last != len - 1 {
            *last = len - 1;
        }
    }
    ticks
}

/// Query-index axis with subsampled tick labels.
#[derive(Clone)]
pub struct QueryAxis {
    len: usize,
    ticks: Vec<usize>,
}

impl QueryAxis {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ticks: tick_indices(len, NUM_TICK_LABELS),
        }
    }
}

impl Ranged for QueryAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = usize;

    fn map(&self, value: &usize, limit: (i32, i32)) -> i32 {
        let size = self.len.max(1) as f64;
        limit.0 + ((limit.1 - limit.0) as f64 * *value as f64 / size) as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<usize> {
        if hint.max_num_points() == 0 {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> std::ops::Range<usize> {
        0..self.len.max(1)
    }
}

/// Stacked-bar rows for the per-query weakening or restoration chart,
/// one row per staleness interval plus at most one overflow row.
pub fn staleness_rows<F>(queries: &[QueryRecord], select: F) -> Vec<(String, Vec<usize>)>
where
    F: Fn(&QueryRecord) -> &BTreeMap<usize, usize>,
{
    let durations: BTreeSet<usize> = queries
        .iter()
        .flat_map(|q| select(q).keys().copied())
        .collect();
    let durations: Vec<usize> = durations.into_iter().collect();
    let mut rows = Vec::new();
    let mut overflow = vec![0usize; queries.len()];
    let mut has_overflow = false;
    for (i, duration) in durations.iter().enumerate() {
        let heights: Vec<usize> = queries
            .iter()
            .map(|q| select(q).get(duration).copied().unwrap_or(0))
            .collect();
        if i < MAX_STALENESS_ROWS {
            if heights.iter().any(|h| *h > 0) {
                rows.push((format!("After {} queries", duration), heights));
            }
        } else {
            has_overflow = true;
            for (total, h) in overflow.iter_mut().zip(&heights) {
                *total += *h;
            }
        }
    }
    if has_overflow {
        rows.push((
            format!("More than {} queries", durations[MAX_STALENESS_ROWS]),
            overflow,
        ));
    }
    rows
}

/// Number of clauses touched exactly `k` times, for `k = 1..=max`.
/// Index 0 holds `k = 1`.
pub fn multiplicity_histogram(counts: &BTreeMap<ClauseId, usize>) -> Vec<usize> {
    let mut by_multiplicity: BTreeMap<usize, usize> = BTreeMap::new();
    for count in counts.values() {
        *by_multiplicity.entry(*count).or_insert(0) += 1;
    }
    let max = by_multiplicity.keys().next_back().copied().unwrap_or(0);
    (1..=max)
        .map(|k| by_multiplicity.get(&k).copied().unwrap_or(0))
        .collect()
}

/// The six per-query clause-count line series.
pub struct ClauseCounts {
    pub input: Vec<usize>,
    pub learned: Vec<usize>,
    pub deleted: Vec<usize>,
    pub weakened: Vec<usize>,
    pub restored: Vec<usize>,
    pub input_after_query: Vec<usize>,
}

impl ClauseCounts {
    pub fn new(queries: &[QueryRecord]) -> Self {
        Self {
            input: queries.iter().map(QueryRecord::input_before_query).collect(),
            learned: queries.iter().map(|q| q.learned_clauses).collect(),
            deleted: queries.iter().map(|q| q.deleted_clauses).collect(),
            weakened: queries.iter().map(QueryRecord::total_weakened).collect(),
            restored: queries.iter().map(QueryRecord::total_restored).collect(),
            input_after_query: queries.iter().map(|q| q.input_after_query).collect(),
        }
    }

    fn series(&self) -> [(&'static str, &[usize], RGBColor); 6] {
        [
            ("Input Clauses", &self.input, BLUE),
            ("Learned Clauses", &self.learned, GREEN),
            ("Deleted Clauses", &self.deleted, RED),
            ("Weakened Clauses", &self.weakened, MAGENTA),
            ("Restored Clauses", &self.restored, CYAN),
            ("Inputs After Query", &self.input_after_query, ORANGE),
        ]
    }

    fn max(&self) -> usize {
        self.series()
            .iter()
            .flat_map(|(_, values, _)| values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// One two-segment bar of the query-result chart: core size below,
/// assumption count above.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResultBar {
    pub bottom: usize,
    pub top: usize,
    pub result: Option<QueryResult>,
}

pub fn result_bars(queries: &[QueryRecord]) -> Vec<ResultBar> {
    queries
        .iter()
        .map(|q| match q.result {
            Some(QueryResult::Unsatisfiable) => ResultBar {
                bottom: q.core_size(),
                top: q.asserted_vars.len(),
                result: q.result,
            },
            Some(QueryResult::Satisfiable) => ResultBar {
                bottom: 0,
                top: q.asserted_vars.len(),
                result: q.result,
            },
            // Placeholder bar for queries without a known result.
            _ => ResultBar {
                bottom: 1,
                top: 1,
                result: q.result,
            },
        })
        .collect()
}

/// Classification of one assumption occurrence in the usage scatter.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PointKind {
    Positive,
    Negative,
    PositiveInCore,
    NegativeInCore,
}

/// Assumption variables against the queries asserting them.
pub struct AssumptionUsage {
    /// Distinct assumption variables, ascending. Scatter rows index into
    /// this list.
    pub variables: Vec<ClauseId>,
    /// `(query index, variable row, kind)` per asserted literal.
    pub points: Vec<(usize, usize, PointKind)>,
}

impl AssumptionUsage {
    pub fn new(queries: &[QueryRecord]) -> Self {
        let variables: BTreeSet<ClauseId> = queries
            .iter()
            .flat_map(|q| q.asserted_vars.iter().map(|lit| var(*lit)))
            .collect();
        let variables: Vec<ClauseId> = variables.into_iter().collect();
        let mut points = Vec::new();
        for (index, query) in queries.iter().enumerate() {
            let core_vars: HashSet<ClauseId> = match (query.result, &query.unsat_core) {
                (Some(QueryResult::Unsatisfiable), Some(core)) => {
                    core.iter().map(|lit| var(*lit)).collect()
                }
                _ => HashSet::new(),
            };
            for lit in &query.asserted_vars {
                let v = var(*lit);
                let row = variables.binary_search(&v).map_or_else(|x| x, |x| x);
                let kind = match (core_vars.contains(&v), *lit > 0) {
                    (true, true) => PointKind::PositiveInCore,
                    (true, false) => PointKind::NegativeInCore,
                    (false, true) => PointKind::Positive,
                    (false, false) => PointKind::Negative,
                };
                points.push((index, row, kind));
            }
        }
        Self { variables, points }
    }
}

/// Aggregate statistics of a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_clauses: usize,
    pub total_deletions: usize,
    pub total_learned: usize,
    pub total_weakens: usize,
    pub total_restores: usize,
    pub percent_weakened_not_restored: f64,
    pub num_sat: usize,
    pub num_unsat: usize,
}

impl Summary {
    pub fn new(queries: &[QueryRecord]) -> Self {
        let total_weakens: usize = queries.iter().map(QueryRecord::total_weakened).sum();
        let total_restores: usize = queries.iter().map(QueryRecord::total_restored).sum();
        let percent_weakened_not_restored = if total_weakens > 0 {
            (total_weakens as i64 - total_restores as i64) as f64 / total_weakens as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_clauses: queries
                .iter()
                .map(|q| q.input_clauses + q.learned_clauses)
                .sum(),
            total_deletions: queries.iter().map(|q| q.deleted_clauses).sum(),
            total_learned: queries.iter().map(|q| q.learned_clauses).sum(),
            total_weakens,
            total_restores,
            percent_weakened_not_restored,
            num_sat: queries
                .iter()
                .filter(|q| q.result == Some(QueryResult::Satisfiable))
                .count(),
            num_unsat: queries
                .iter()
                .filter(|q| q.result == Some(QueryResult::Unsatisfiable))
                .count(),
        }
    }

    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Clauses", group_digits(self.total_clauses)),
            ("Total Deletions", group_digits(self.total_deletions)),
            ("Total Learned", group_digits(self.total_learned)),
            ("Total Weakens", group_digits(self.total_weakens)),
            ("Total Restores", group_digits(self.total_restores)),
            (
                "% Weakened Not Restored",
                format!("{:.2}%", self.percent_weakened_not_restored),
            ),
            ("Satisfied Results", group_digits(self.num_sat)),
            ("Unsatisfied Results", group_digits(self.num_unsat)),
        ]
    }
}

fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn plot_staleness<B>(
    root: DrawingArea<B, Shift>,
    rows: &[(String, Vec<usize>)],
    num_queries: usize,
    title: &str,
    y_desc: &str,
    show_legend: bool,
) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let mut totals = vec![0usize; num_queries];
    for (_, heights) in rows {
        for (total, h) in totals.iter_mut().zip(heights) {
            *total += *h;
        }
    }
    let max_total = totals.into_iter().max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("Arial", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(QueryAxis::new(num_queries), 0..max_total + 1)?;

    chart
        .configure_mesh()
        .y_desc(y_desc)
        .x_desc("Query")
        .draw()?;

    let mut bottom = vec![0usize; num_queries];
    for (j, (label, heights)) in rows.iter().enumerate() {
        let color: PaletteColor<Palette9999> = PaletteColor::pick(j);
        let bars: Vec<Rectangle<(usize, usize)>> = heights
            .iter()
            .enumerate()
            .filter(|(_, h)| **h > 0)
            .map(|(x, h)| Rectangle::new([(x, bottom[x]), (x + 1, bottom[x] + h)], color.filled()))
            .collect();
        for (x, h) in heights.iter().enumerate() {
            bottom[x] += *h;
        }
        chart
            .draw_series(bars)?
            .label(label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    if show_legend && !rows.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }
    Ok(())
}

pub fn plot_multiplicity<B>(
    root: DrawingArea<B, Shift>,
    histogram: &[usize],
    title: &str,
    x_desc: &str,
    color: &RGBColor,
) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let max_count = histogram.iter().copied().max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("Arial", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0..histogram.len() + 2,
            (0.5f64..max_count as f64 * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .y_desc("Number of Clauses (log scale)")
        .x_desc(x_desc)
        .draw()?;

    // Zero counts stay off the logarithmic axis.
    chart.draw_series(
        histogram
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(i, count)| {
                Rectangle::new([(i + 1, 0.5), (i + 2, *count as f64)], color.filled())
            }),
    )?;
    Ok(())
}

pub fn plot_clause_counts<B>(
    root: DrawingArea<B, Shift>,
    counts: &ClauseCounts,
    show_legend: bool,
) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let num_queries = counts.input.len();
    let max_count = counts.max().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Clause Counts per Query", ("Arial", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(QueryAxis::new(num_queries), 0..max_count + 1)?;

    chart
        .configure_mesh()
        .y_desc("Number of Clauses")
        .x_desc("Query")
        .draw()?;

    for (label, values, color) in counts.series().iter() {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(x, y)| (x, *y)),
                &color,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    if show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }
    Ok(())
}

pub fn plot_results<B>(
    root: DrawingArea<B, Shift>,
    bars: &[ResultBar],
    show_legend: bool,
) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let num_queries = bars.len();
    let max_height = bars
        .iter()
        .map(|bar| bar.bottom + bar.top)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Query Results: Core Size (Bottom) and Number of Assumptions (Top)",
            ("Arial", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(QueryAxis::new(num_queries), 0..max_height + 1)?;

    chart
        .configure_mesh()
        .y_desc("Size of Core and Number of Assumptions")
        .x_desc("Query")
        .draw()?;

    let segment = |x: usize, y0: usize, y1: usize, color: RGBColor| {
        Rectangle::new([(x, y0), (x + 1, y1)], color.filled())
    };

    let mut cores = Vec::new();
    let mut unsat_assumptions = Vec::new();
    let mut sat_assumptions = Vec::new();
    let mut placeholders = Vec::new();
    for (x, bar) in bars.iter().enumerate() {
        match bar.result {
            Some(QueryResult::Unsatisfiable) => {
                if bar.bottom > 0 {
                    cores.push(segment(x, 0, bar.bottom, RED));
                }
                if bar.top > 0 {
                    unsat_assumptions.push(segment(x, bar.bottom, bar.bottom + bar.top, DARK_RED));
                }
            }
            Some(QueryResult::Satisfiable) => {
                if bar.top > 0 {
                    sat_assumptions.push(segment(x, 0, bar.top, GREEN));
                }
            }
            _ => {
                placeholders.push(segment(x, 0, bar.bottom, GRAY));
                placeholders.push(segment(x, bar.bottom, bar.bottom + bar.top, DARK_GRAY));
            }
        }
    }

    chart
        .draw_series(cores)?
        .label("UNSAT Core")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.filled()));
    chart
        .draw_series(unsat_assumptions)?
        .label("UNSAT Assumptions")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], DARK_RED.filled()));
    chart
        .draw_series(sat_assumptions)?
        .label("SAT Assumptions")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], GREEN.filled()));
    chart.draw_series(placeholders)?;

    if show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }
    Ok(())
}

pub fn plot_assumptions<B>(
    root: DrawingArea<B, Shift>,
    usage: &AssumptionUsage,
    num_queries: usize,
    show_legend: bool,
) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let num_rows = usage.variables.len();

    let mut chart = ChartBuilder::on(&root)
        .caption("Assumption Variables Usage", ("Arial", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(QueryAxis::new(num_queries), 0..num_rows.max(1))?;

    chart
        .configure_mesh()
        .y_desc("Assumption Variables")
        .x_desc("Query Index")
        .y_labels(num_rows.max(1))
        .y_label_formatter(&|row| {
            usage
                .variables
                .get(*row)
                .map(|v| v.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    let classes = [
        (PointKind::Positive, "Positive", RED),
        (PointKind::Negative, "Negative", BLUE),
        (PointKind::PositiveInCore, "Pos in UNSAT Core", DARK_RED),
        (PointKind::NegativeInCore, "Neg in UNSAT Core", DARK_BLUE),
    ];
    for (kind, label, color) in classes.iter() {
        let color = *color;
        chart
            .draw_series(
                usage
                    .points
                    .iter()
                    .filter(|(_, _, k)| k == kind)
                    .map(|(x, row, _)| Circle::new((*x, *row), 3, color.filled())),
            )?
            .label(*label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
    }

    if show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }
    Ok(())
}

pub fn draw_summary_table<B>(root: DrawingArea<B, Shift>, summary: &Summary) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let title_style = TextStyle::from(("Arial", 30).into_font()).color(&BLACK);
    let cell_style = TextStyle::from(("Arial", 20).into_font()).color(&BLACK);
    root.draw(&Text::new("Summary".to_string(), (40, 40), title_style))?;
    for (i, (label, value)) in summary.rows().iter().enumerate() {
        let y = 100 + i as i32 * 40;
        root.draw(&Text::new(label.to_string(), (40, y), cell_style.clone()))?;
        root.draw(&Text::new(value.clone(), (400, y), cell_style.clone()))?;
    }
    Ok(())
}

/// Render the full report into a 2x4 panel grid on the given drawing area.
pub fn render<B>(root: &DrawingArea<B, Shift>, model: &Model, show_legend: bool) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let queries = model.queries();
    let num_queries = queries.len();
    let areas = root.split_evenly((2, 4));
    let mut column = 0;

    if model.has_clause_movements() {
        plot_staleness(
            areas[0].clone(),
            &staleness_rows(queries, |q| &q.weakened),
            num_queries,
            "Weakened Clauses per Query",
            "Number of Weakened Clauses",
            show_legend,
        )?;
        plot_staleness(
            areas[4].clone(),
            &staleness_rows(queries, |q| &q.restored),
            num_queries,
            "Restored Clauses per Query",
            "Number of Restored Clauses",
            show_legend,
        )?;
        plot_multiplicity(
            areas[1].clone(),
            &multiplicity_histogram(model.weakens()),
            "Distribution of Clause Weakenings",
            "Number of Times Weakened",
            &SKY_BLUE,
        )?;
        plot_multiplicity(
            areas[5].clone(),
            &multiplicity_histogram(model.restores()),
            "Distribution of Clause Restorations",
            "Number of Times Restored",
            &LIGHT_GREEN,
        )?;
        column = 2;
    }

    plot_clause_counts(areas[column].clone(), &ClauseCounts::new(queries), show_legend)?;
    plot_results(areas[column + 4].clone(), &result_bars(queries), show_legend)?;
    column += 1;
    plot_assumptions(
        areas[column].clone(),
        &AssumptionUsage::new(queries),
        num_queries,
        show_legend,
    )?;
    draw_summary_table(areas[column + 4].clone(), &Summary::new(queries))?;
    Ok(())
}

/// Render the report as a PNG file.
pub fn render_png(model: &Model, path: &std::path::Path, show_legend: bool) -> Result<()> {
    let root = BitMapBackend::new(path, (3200, 2400)).into_drawing_area();
    render(&root, model, show_legend)?;
    root.present()?;
    Ok(())
}

#[test]
fn test_tick_indices_include_last() {
    let ticks = tick_indices(23, 10);
    assert_eq!(ticks.first(), Some(&0));
    assert_eq!(ticks.last(), Some(&22));
    assert!(ticks.len() <= 10);
    assert_eq!(tick_indices(1, 10), vec![0]);
    assert_eq!(tick_indices(0, 10), Vec::<usize>::new());
    assert_eq!(tick_indices(100, 10).last(), Some(&99));
}

#[test]
fn test_staleness_overflow_bucket() {
    let mut query = QueryRecord::new(0);
    for duration in 0..17 {
        query.weakened.insert(duration, 1);
    }
    let rows = staleness_rows(&[query], |q| &q.weakened);
    assert_eq!(rows.len(), MAX_STALENESS_ROWS + 1);
    assert_eq!(rows[0].0, "After 0 queries");
    let (label, overflow) = rows.last().unwrap();
    assert_eq!(label, "More than 15 queries");
    assert_eq!(overflow, &vec![2]);
}

#[test]
fn test_multiplicity_histogram_gaps() {
    let mut counts = BTreeMap::new();
    counts.insert(7, 2);
    counts.insert(9, 1);
    counts.insert(12, 4);
    // One clause touched once, one twice, one four times.
    assert_eq!(multiplicity_histogram(&counts), vec![1, 1, 0, 1]);
    assert_eq!(multiplicity_histogram(&BTreeMap::new()), Vec::<usize>::new());
}

#[test]
fn test_summary_percent_guard() {
    let empty = Summary::new(&[]);
    assert_eq!(empty.percent_weakened_not_restored, 0.0);
    assert_eq!(empty.total_clauses, 0);

    let mut query = QueryRecord::new(0);
    query.weakened.insert(0, 4);
    query.restored.insert(1, 1);
    let summary = Summary::new(&[query]);
    assert_eq!(summary.total_weakens, 4);
    assert_eq!(summary.total_restores, 1);
    assert_eq!(summary.percent_weakened_not_restored, 75.0);
}

#[test]
fn test_result_bars_placeholder() {
    let mut sat = QueryRecord::new(0);
    sat.result = Some(QueryResult::Satisfiable);
    sat.asserted_vars = vec![1, -2];
    let unknown = QueryRecord::new(1);
    let mut unsat = QueryRecord::new(2);
    unsat.result = Some(QueryResult::Unsatisfiable);
    unsat.asserted_vars = vec![1, -2, 3];
    unsat.unsat_core = Some(vec![1, 3]);
    let bars = result_bars(&[sat, unknown, unsat]);
    assert_eq!(bars[0].bottom, 0);
    assert_eq!(bars[0].top, 2);
    assert_eq!(bars[1].bottom, 1);
    assert_eq!(bars[1].top, 1);
    assert_eq!(bars[2].bottom, 2);
    assert_eq!(bars[2].top, 3);
}

#[test]
fn test_assumption_usage_rows() {
    let mut first = QueryRecord::new(0);
    first.asserted_vars = vec![5, -9];
    first.result = Some(QueryResult::Unsatisfiable);
    first.unsat_core = Some(vec![-9]);
    let mut second = QueryRecord::new(1);
    second.asserted_vars = vec![-5];
    let usage = AssumptionUsage::new(&[first, second]);
    assert_eq!(usage.variables, vec![5, 9]);
    assert_eq!(
        usage.points,
        vec![
            (0, 0, PointKind::Positive),
            (0, 1, PointKind::NegativeInCore),
            (1, 0, PointKind::Negative),
        ]
    );
}

#[test]
fn test_group_digits() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(1000), "1,000");
    assert_eq!(group_digits(1234567), "1,234,567");
}

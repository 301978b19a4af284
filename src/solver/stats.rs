use std::{collections::HashMap, time::Duration};

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::rules::Rule;

/// Counters for one inference rule across a whole solve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerRuleStats {
    /// How many rounds invoked the rule.
    pub invocations: u64,
    /// How many of those invocations changed the state.
    pub hits: u64,
    pub time_spent_micros: u64,
}

/// Counters accumulated across every attempt of a solve run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered (one per attempt call, root included).
    pub nodes_visited: u64,
    /// Propagation rounds that changed something.
    pub rounds_applied: u64,
    /// Mutation candidates handed to a recursive attempt.
    pub guesses: u64,
    /// Candidates whose subtree was exhausted without a solution.
    pub backtracks: u64,
    /// The largest guess budget the outer loop reached.
    pub deepest_attempt: usize,
    pub rule_stats: HashMap<Rule, PerRuleStats>,
}

impl SearchStats {
    pub fn record_rule(&mut self, rule: Rule, changed: bool, elapsed: Duration) {
        let entry = self.rule_stats.entry(rule).or_default();
        entry.invocations += 1;
        if changed {
            entry.hits += 1;
        }
        entry.time_spent_micros += elapsed.as_micros() as u64;
    }
}

/// Renders a per-rule summary table, slowest rule last.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Rule"),
        Cell::new("Invocations"),
        Cell::new("Hits"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&Rule, &PerRuleStats)> = stats.rule_stats.iter().collect();
    sorted_stats.sort_by_key(|(_, rule_stats)| rule_stats.time_spent_micros);

    for (rule, rule_stats) in sorted_stats {
        let avg_time = if rule_stats.invocations > 0 {
            rule_stats.time_spent_micros as f64 / rule_stats.invocations as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(rule.name()),
            Cell::new(&rule_stats.invocations.to_string()),
            Cell::new(&rule_stats.hits.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                rule_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

use std::fmt;
use std::str::FromStr;

use crate::error::{ListError, Result};

use super::node::Link;
use super::start_by_cycle_length::find_cycle_start_by_cycle_length;
use super::start_by_reachability::find_cycle_start_by_reachability;
use super::start_by_visited_set::find_cycle_start_by_visited_set;

/// Selects one of the cycle start algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleStartStrategy {
    /// Walk the cycle from the collision point for each candidate.
    Reachability,
    /// Remember visited nodes; the first repeat is the start.
    VisitedSet,
    /// Offset two cursors by the cycle length.
    CycleLength,
}

impl CycleStartStrategy {
    pub const ALL: [CycleStartStrategy; 3] = [
        CycleStartStrategy::Reachability,
        CycleStartStrategy::VisitedSet,
        CycleStartStrategy::CycleLength,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CycleStartStrategy::Reachability => "reachability",
            CycleStartStrategy::VisitedSet => "visited-set",
            CycleStartStrategy::CycleLength => "cycle-length",
        }
    }

    /// Runs the selected algorithm on the list starting at `head`.
    pub fn find<T>(&self, head: &Link<T>) -> Link<T> {
        match self {
            CycleStartStrategy::Reachability => find_cycle_start_by_reachability(head),
            CycleStartStrategy::VisitedSet => find_cycle_start_by_visited_set(head),
            CycleStartStrategy::CycleLength => find_cycle_start_by_cycle_length(head),
        }
    }
}

impl fmt::Display for CycleStartStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CycleStartStrategy {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ListError::invalid_input("strategy name is empty"));
        }
        CycleStartStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ListError::UnknownStrategy(s.to_string()))
    }
}

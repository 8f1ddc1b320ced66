//! Breadth-first solver over any [`Configuration`].
//!
//! The solver explores configurations in FIFO order, marking each one as
//! visited the moment it is first discovered. Because the first discovery of
//! a configuration always happens along a shortest path, the predecessor
//! links recorded at that moment describe a shortest path back to the start.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::configuration::Configuration;

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Emit a progress line every this many expansions (0 disables)
    pub progress_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            progress_interval: 10_000,
        }
    }
}

/// Serializable summary of a finished search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub solved: bool,
    pub total_configs: usize,
    pub unique_configs: usize,
    /// Rendered configurations from start to goal (empty when unsolved)
    pub steps: Vec<String>,
}

/// A breadth-first search bound to one starting configuration.
///
/// All search state lives in the solver and is rebuilt by every call to
/// [`Solver::solve`], so one instance may be solved repeatedly with the same
/// result.
#[derive(Debug)]
pub struct Solver<C: Configuration> {
    start: C,
    config: SolverConfig,
    visited: HashSet<C>,
    /// Configuration -> the configuration that first discovered it.
    /// The start never has an entry.
    predecessor: HashMap<C, C>,
    /// The exact configuration dequeued when the goal test succeeded.
    goal: Option<C>,
    total_configurations: usize,
}

impl<C: Configuration> Solver<C> {
    pub fn new(start: C) -> Self {
        Self::with_config(start, SolverConfig::default())
    }

    pub fn with_config(start: C, config: SolverConfig) -> Self {
        Self {
            start,
            config,
            visited: HashSet::new(),
            predecessor: HashMap::new(),
            goal: None,
            total_configurations: 0,
        }
    }

    /// The configuration this solver searches from.
    pub fn start(&self) -> &C {
        &self.start
    }

    /// Run the search. Returns `true` if a goal configuration was reached.
    ///
    /// Runs until a goal is dequeued or every reachable configuration has
    /// been expanded; there is no built-in bound on the size of the search.
    pub fn solve(&mut self) -> bool {
        self.visited.clear();
        self.predecessor.clear();
        self.goal = None;
        self.total_configurations = 0;

        debug!(target: "solver", "starting breadth-first search");

        let mut frontier: VecDeque<C> = VecDeque::new();
        frontier.push_back(self.start.clone());
        self.visited.insert(self.start.clone());

        let mut expanded: usize = 0;

        while let Some(current) = frontier.pop_front() {
            if current.is_goal() {
                self.goal = Some(current);
                break;
            }

            for neighbor in current.neighbors() {
                self.total_configurations += 1;
                if !self.visited.contains(&neighbor) {
                    self.visited.insert(neighbor.clone());
                    self.predecessor.insert(neighbor.clone(), current.clone());
                    frontier.push_back(neighbor);
                }
            }

            expanded += 1;
            if self.config.progress_interval > 0 && expanded % self.config.progress_interval == 0
            {
                debug!(
                    target: "solver",
                    expanded,
                    frontier = frontier.len(),
                    visited = self.visited.len(),
                    generated = self.total_configurations,
                    "search progress"
                );
            }
        }

        let found = self.goal.is_some();
        info!(
            target: "solver",
            found,
            total = self.total_configurations,
            unique = self.unique_configurations(),
            "search finished"
        );
        found
    }

    /// The configurations from the start to the goal, both inclusive.
    ///
    /// Empty if [`Solver::solve`] has not been called or found no goal.
    pub fn solution_path(&self) -> Vec<C> {
        let Some(goal) = &self.goal else {
            return Vec::new();
        };

        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(previous) = self.predecessor.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        path
    }

    /// Every neighbor produced during the last search, duplicates included.
    pub fn total_configurations(&self) -> usize {
        self.total_configurations
    }

    /// Distinct configurations discovered during the last search, start
    /// included. Zero before the first search.
    pub fn unique_configurations(&self) -> usize {
        self.visited.len()
    }
}

impl<C: Configuration + Display> Solver<C> {
    /// Summarize the last search, rendering each path step with `Display`.
    pub fn report(&self) -> SolveReport {
        SolveReport {
            solved: self.goal.is_some(),
            total_configs: self.total_configurations,
            unique_configs: self.unique_configurations(),
            steps: self
                .solution_path()
                .iter()
                .map(|config| config.to_string())
                .collect(),
        }
    }
}

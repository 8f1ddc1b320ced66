// Integration tests against the public API

use std::collections::HashSet;

use puzzle_solver::{
    Alphabet, Configuration, CrossingConfig, SlideConfig, Solver, StringsConfig,
};

/// Every consecutive pair in a solution path must be one move apart.
fn assert_valid_path<C: Configuration + std::fmt::Debug>(solver: &Solver<C>) {
    let path = solver.solution_path();
    assert!(!path.is_empty());
    assert_eq!(&path[0], solver.start());
    assert!(path.last().is_some_and(Configuration::is_goal));
    for pair in path.windows(2) {
        assert!(
            pair[0].neighbors().contains(&pair[1]),
            "{:?} is not a neighbor of {:?}",
            pair[1],
            pair[0]
        );
    }
    let distinct: HashSet<&C> = path.iter().collect();
    assert_eq!(distinct.len(), path.len());
}

/// Depth of the first goal by a separate level-by-level expansion.
fn goal_depth<C: Configuration>(start: C) -> Option<usize> {
    let mut seen = HashSet::new();
    seen.insert(start.clone());
    let mut level = vec![start];
    let mut depth = 0;
    while !level.is_empty() {
        if level.iter().any(Configuration::is_goal) {
            return Some(depth);
        }
        let mut next = Vec::new();
        for config in &level {
            for neighbor in config.neighbors() {
                if seen.insert(neighbor.clone()) {
                    next.push(neighbor);
                }
            }
        }
        level = next;
        depth += 1;
    }
    None
}

mod crossing {
    use super::*;

    #[test]
    fn solves_with_shortest_path() {
        for (pups, wolves) in [(0, 1), (2, 1), (3, 2), (4, 0)] {
            let start = CrossingConfig::new(pups, wolves);
            let mut solver = Solver::new(start);
            assert!(solver.solve(), "{pups} pups, {wolves} wolves");
            assert_valid_path(&solver);
            assert_eq!(
                Some(solver.solution_path().len() - 1),
                goal_depth(start)
            );
            assert!(solver.total_configurations() + 1 >= solver.unique_configurations());
        }
    }

    #[test]
    fn empty_river_is_already_solved() {
        let mut solver = Solver::new(CrossingConfig::new(0, 0));
        assert!(solver.solve());
        assert_eq!(solver.solution_path(), vec![CrossingConfig::new(0, 0)]);
        assert_eq!(solver.unique_configurations(), 1);
        assert_eq!(solver.total_configurations(), 0);
    }
}

mod strings {
    use super::*;

    #[test]
    fn ladder_matches_independent_depth() {
        let start = StringsConfig::new("AAZ", "CZB").unwrap();
        let mut solver = Solver::new(start.clone());
        assert!(solver.solve());
        assert_valid_path(&solver);
        assert_eq!(Some(solver.solution_path().len() - 1), goal_depth(start));
        // One step per character: A->C (2), A->Z (1), Z->B (2)
        assert_eq!(solver.solution_path().len(), 6);
    }

    #[test]
    fn report_lists_every_rung() {
        let alphabet = Alphabet::new('A', 'B').unwrap();
        let mut solver = Solver::new(StringsConfig::with_alphabet("AA", "AB", alphabet).unwrap());
        assert!(solver.solve());
        let report = solver.report();
        assert_eq!(report.steps, vec!["AA", "AB"]);
        assert!(report.total_configs >= 2);
    }
}

mod slide {
    use super::*;

    #[test]
    fn three_by_three_board() {
        let start = SlideConfig::parse("3 3\n1 2 3\n. 4 6\n7 5 8\n").unwrap();
        let mut solver = Solver::new(start.clone());
        assert!(solver.solve());
        assert_valid_path(&solver);
        assert_eq!(solver.solution_path().len() - 1, 3);
        assert_eq!(goal_depth(start), Some(3));
    }

    #[test]
    fn unsolvable_board_exhausts_search() {
        let start = SlideConfig::parse("2 3\n2 1 3\n4 5 .\n").unwrap();
        let mut solver = Solver::new(start);
        assert!(!solver.solve());
        assert!(solver.solution_path().is_empty());
        // Half of the 6! arrangements
        assert_eq!(solver.unique_configurations(), 360);
        assert!(solver.total_configurations() >= solver.unique_configurations() - 1);
    }
}

use crossing_core::{validate_totals, BoatSide, ConfigError, PuzzleState, Searcher};

#[test]
fn returned_path_starts_at_the_canonical_start() {
    let searcher = Searcher::new(3, 3);
    let path = searcher.solve().path.expect("3/3 is solvable");
    assert_eq!(path[0].from, searcher.start_state());
    assert_eq!(path[0].from.boat, BoatSide::Left);
}

#[test]
fn returned_path_chains_and_ends_at_the_goal() {
    let path = Searcher::new(3, 3).solve().path.expect("3/3 is solvable");
    for pair in path.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    assert!(path.last().unwrap().to.is_goal());
}

#[test]
fn costs_are_monotone_and_consistent() {
    let path = Searcher::new(3, 3).solve().path.expect("3/3 is solvable");
    for (i, step) in path.iter().enumerate() {
        assert_eq!(step.g, i as i64 + 1, "g increases by exactly 1 per move");
        assert_eq!(step.f, step.g + step.h, "f = g + h at every step");
    }
}

#[test]
fn no_bank_is_ever_outnumbered_along_the_path() {
    let path = Searcher::new(3, 3).solve().path.expect("3/3 is solvable");
    for step in &path {
        for state in [step.from, step.to] {
            assert!(state.is_valid());
            assert!(state.m_left == 0 || state.m_left >= state.c_left);
            assert!(state.m_right() == 0 || state.m_right() >= state.c_right());
        }
    }
}

#[test]
fn successor_closure_holds_across_the_reachable_space() {
    // Walk everything reachable from the start and re-check validity of each
    // generated successor.
    let mut stack = vec![PuzzleState::start(3, 3)];
    let mut seen = std::collections::HashSet::new();
    while let Some(s) = stack.pop() {
        if !seen.insert(s) {
            continue;
        }
        for (next, _) in s.successors() {
            assert!(next.is_valid());
            stack.push(next);
        }
    }
    assert!(seen.len() > 1);
}

#[test]
fn classic_instance_has_the_known_minimal_length() {
    let path = Searcher::new(3, 3).solve().path.expect("3/3 is solvable");
    assert_eq!(path.len(), 11);
}

#[test]
fn two_runs_agree_move_for_move() {
    let a = Searcher::new(3, 3).solve().path.unwrap();
    let b = Searcher::new(3, 3).solve().path.unwrap();
    let moves =
        |p: &[crossing_core::Step]| p.iter().map(|s| s.move_).collect::<Vec<_>>();
    assert_eq!(moves(&a), moves(&b));
}

#[test]
fn empty_instance_reports_no_solution() {
    let res = Searcher::new(0, 0).solve();
    assert!(res.path.is_none());
    assert_eq!(res.reason.as_deref(), Some("no-path"));
}

#[test]
fn invalid_ratios_are_rejected_before_search() {
    assert_eq!(
        validate_totals(2, 3),
        Err(ConfigError::CannibalsOutnumber { missionaries: 2, cannibals: 3 })
    );
    assert!(validate_totals(1, 2).is_err());
    assert!(validate_totals(0, 4).is_err());
}

#[test]
fn larger_missionary_majorities_still_solve() {
    for (m, c) in [(2, 2), (3, 2), (4, 3)] {
        let res = Searcher::new(m, c).solve();
        let path = res.path.unwrap_or_else(|| panic!("{m}/{c} should be solvable"));
        assert!(path.last().unwrap().to.is_goal());
    }
}

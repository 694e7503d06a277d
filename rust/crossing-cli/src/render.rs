use std::fmt::Write as _;

use crossing_core::{BoatSide, PuzzleState, Step};

/// Two-bank river diagram with the boat marker on its current side.
pub fn diagram(state: &PuzzleState) -> String {
    let left = bank(state.m_left, state.c_left);
    let right = bank(state.m_right(), state.c_right());
    match state.boat {
        BoatSide::Left => format!("| {} {:<2} ~~~RIVER~~~ {:>10} |", left, "B", right),
        BoatSide::Right => format!("| {:<10} ~~~RIVER~~~ B {} |", left, right),
    }
}

fn bank(m: i32, c: i32) -> String {
    // Clamp so an invalid state still renders instead of panicking.
    let mut s = "M".repeat(m.max(0) as usize);
    s.push_str(&"C".repeat(c.max(0) as usize));
    s
}

/// The per-step block of the console report: move description, diagram, bank
/// counts, validity confirmation, and the A* values that ranked the step.
pub fn step_report(index: usize, step: &Step) -> String {
    let to = &step.to;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Step {}: Move {} from {} to {}",
        index, step.move_, step.from.boat, to.boat
    );
    let _ = writeln!(out, "{}", diagram(to));
    let _ = writeln!(out, "Left Bank -> M: {}, C: {}", to.m_left, to.c_left);
    let _ = writeln!(out, "Right Bank -> M: {}, C: {}", to.m_right(), to.c_right());
    let _ = writeln!(
        out,
        "Step Validity: {}",
        if to.is_valid() { "VALID ✅" } else { "INVALID ❌" }
    );
    let _ = writeln!(
        out,
        "A* value (f(n)): {} | Cost so far (g(n)): {} | Heuristic value (h(n)): {}",
        step.f, step.g, step.h
    );
    let _ = writeln!(out);
    out
}

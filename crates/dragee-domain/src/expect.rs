//! Expectation helpers for rule authors.
//!
//! Every failure is attributed to `root`, never to the candidate that failed:
//! the rule decides which dragee is to blame.

use crate::rule::RuleOutcome;
use dragee_types::Dragee;

/// Success when `eval(candidate)` holds.
pub fn expect_dragee(
    root: &Dragee,
    candidate: &Dragee,
    error_msg: &str,
    eval: impl FnOnce(&Dragee) -> bool,
) -> RuleOutcome {
    outcome(eval(candidate), root, error_msg)
}

/// Success when `eval` holds for the candidates taken as a whole.
pub fn expect_dragees(
    root: &Dragee,
    candidates: &[&Dragee],
    error_msg: &str,
    eval: impl FnOnce(&[&Dragee]) -> bool,
) -> RuleOutcome {
    outcome(eval(candidates), root, error_msg)
}

/// One outcome per candidate.
pub fn multiple_expect_dragees(
    root: &Dragee,
    candidates: &[&Dragee],
    error_msg: &str,
    eval: impl Fn(&Dragee) -> bool,
) -> Vec<RuleOutcome> {
    candidates
        .iter()
        .map(|&candidate| outcome(eval(candidate), root, error_msg))
        .collect()
}

fn outcome(passed: bool, root: &Dragee, error_msg: &str) -> RuleOutcome {
    if passed {
        RuleOutcome::success()
    } else {
        RuleOutcome::failure(error_msg, root.name.as_str())
    }
}

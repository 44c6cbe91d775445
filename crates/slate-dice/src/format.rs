//! One-line summaries of resolved rolls.

use crate::resolution::cofd::{
    CHANCE_SUCCESS_FACE, DEFAULT_AGAIN, MIN_FACE, RollOutcome, RollRequest,
};

/// Render a CofD roll as the text sent back to the table.
///
/// ```
/// use slate_dice::{RollOutcome, RollRequest, format_cofd};
///
/// let outcome = RollOutcome {
///     rolls: vec![10, 7],
///     rerolls: vec![8],
///     successes: 2,
///     truncated: false,
/// };
/// assert_eq!(
///     format_cofd(&RollRequest::new(2), &outcome, true),
///     "rolled 2 CofD dice for 2 successes. rolls: [10 7] rerolls: [8]"
/// );
/// ```
pub fn format_cofd(request: &RollRequest, outcome: &RollOutcome, verbose: bool) -> String {
    let mut out = format!("rolled {} CofD dice", request.dice);
    if request.is_chance() {
        out.push_str(" (Chance Die)");
    }

    let mut modifiers = Vec::new();
    if request.again != DEFAULT_AGAIN {
        modifiers.push(format!("{}-again", request.again));
    }
    if request.rote {
        modifiers.push("rote".to_string());
    }
    if request.weakness {
        modifiers.push("weakness".to_string());
    }
    if !modifiers.is_empty() {
        out.push_str(&format!(" (with {})", modifiers.join(", ")));
    }

    out.push_str(&format!(" for {} successes.", outcome.successes));

    if outcome.is_exceptional(request.exceptional) {
        out.push_str(" Exceptional success!");
    }
    if request.is_chance() && chance_face(request, outcome) == Some(MIN_FACE) {
        out.push_str(" Critical failure!");
    }

    if verbose {
        out.push_str(&format!(" rolls: {}", bracketed(&outcome.rolls)));
        if !outcome.rerolls.is_empty() {
            out.push_str(&format!(" rerolls: {}", bracketed(&outcome.rerolls)));
        }
    }

    out
}

/// The face a chance die was scored on: its rote reroll if it had one.
fn chance_face(request: &RollRequest, outcome: &RollOutcome) -> Option<u32> {
    let first = *outcome.rolls.first()?;
    if request.rote && first < CHANCE_SUCCESS_FACE {
        outcome.rerolls.first().copied()
    } else {
        Some(first)
    }
}

/// Space-separated values in square brackets, e.g. `[10 7]`.
fn bracketed(values: &[u32]) -> String {
    let values: Vec<String> = values.iter().map(u32::to_string).collect();
    format!("[{}]", values.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRoller;
    use crate::resolution::cofd::resolve;

    fn outcome(rolls: &[u32], rerolls: &[u32], successes: u32) -> RollOutcome {
        RollOutcome {
            rolls: rolls.to_vec(),
            rerolls: rerolls.to_vec(),
            successes,
            truncated: false,
        }
    }

    fn two_dice() -> RollOutcome {
        outcome(&[10, 7], &[8], 2)
    }

    #[test]
    fn normal() {
        assert_eq!(
            format_cofd(&RollRequest::new(2), &two_dice(), false),
            "rolled 2 CofD dice for 2 successes."
        );
    }

    #[test]
    fn verbose() {
        assert_eq!(
            format_cofd(&RollRequest::new(2), &two_dice(), true),
            "rolled 2 CofD dice for 2 successes. rolls: [10 7] rerolls: [8]"
        );
    }

    #[test]
    fn verbose_without_rerolls() {
        assert_eq!(
            format_cofd(&RollRequest::new(2), &outcome(&[3, 4], &[], 0), true),
            "rolled 2 CofD dice for 0 successes. rolls: [3 4]"
        );
    }

    #[test]
    fn exceptional() {
        let request = RollRequest::new(2).with_exceptional(2);
        assert_eq!(
            format_cofd(&request, &two_dice(), false),
            "rolled 2 CofD dice for 2 successes. Exceptional success!"
        );
    }

    #[test]
    fn again() {
        let request = RollRequest::new(2).with_again(9);
        assert_eq!(
            format_cofd(&request, &two_dice(), false),
            "rolled 2 CofD dice (with 9-again) for 2 successes."
        );
    }

    #[test]
    fn rote() {
        let request = RollRequest::new(2).with_rote(true);
        assert_eq!(
            format_cofd(&request, &two_dice(), false),
            "rolled 2 CofD dice (with rote) for 2 successes."
        );
    }

    #[test]
    fn weakness() {
        let request = RollRequest::new(2).with_weakness(true);
        assert_eq!(
            format_cofd(&request, &two_dice(), false),
            "rolled 2 CofD dice (with weakness) for 2 successes."
        );
    }

    #[test]
    fn all_modifiers_in_order() {
        let request = RollRequest::new(4)
            .with_again(9)
            .with_rote(true)
            .with_weakness(true)
            .with_exceptional(4);
        assert_eq!(
            format_cofd(&request, &outcome(&[8, 8, 9, 7], &[8, 4], 4), true),
            "rolled 4 CofD dice (with 9-again, rote, weakness) for 4 successes. \
             Exceptional success! rolls: [8 8 9 7] rerolls: [8 4]"
        );
    }

    #[test]
    fn chance() {
        assert_eq!(
            format_cofd(&RollRequest::new(0), &outcome(&[5], &[], 0), false),
            "rolled 0 CofD dice (Chance Die) for 0 successes."
        );
    }

    #[test]
    fn chance_critical_failure() {
        assert_eq!(
            format_cofd(&RollRequest::new(0), &outcome(&[1], &[], 0), false),
            "rolled 0 CofD dice (Chance Die) for 0 successes. Critical failure!"
        );
    }

    #[test]
    fn chance_one_saved_by_rote_is_not_critical() {
        let request = RollRequest::new(0).with_rote(true);
        let mut roller = ScriptedRoller::new([0, 9, 3]);
        let rolled = resolve(&request, &mut roller);
        assert_eq!(rolled.rolls, vec![1]);
        assert_eq!(rolled.successes, 1);
        assert_eq!(
            format_cofd(&request, &rolled, false),
            "rolled 0 CofD dice (Chance Die) (with rote) for 1 successes."
        );
    }

    #[test]
    fn chance_rerolled_into_a_one_is_critical() {
        let request = RollRequest::new(0).with_rote(true);
        let rolled = outcome(&[5], &[1], 0);
        assert_eq!(
            format_cofd(&request, &rolled, false),
            "rolled 0 CofD dice (Chance Die) (with rote) for 0 successes. Critical failure!"
        );
    }

    #[test]
    fn one_on_a_pool_is_not_critical() {
        assert_eq!(
            format_cofd(&RollRequest::new(1), &outcome(&[1], &[], 0), false),
            "rolled 1 CofD dice for 0 successes."
        );
    }

    #[test]
    fn resolved_chance_rolls() {
        let request = RollRequest::new(0);

        let mut roller = ScriptedRoller::new([7]);
        let rolled = resolve(&request, &mut roller);
        assert_eq!(
            format_cofd(&request, &rolled, false),
            "rolled 0 CofD dice (Chance Die) for 0 successes."
        );

        let mut roller = ScriptedRoller::new([0]);
        let rolled = resolve(&request, &mut roller);
        assert!(format_cofd(&request, &rolled, false).ends_with(" Critical failure!"));
    }

    #[test]
    fn formatting_is_repeatable() {
        let request = RollRequest::new(3).with_rote(true);
        let rolled = outcome(&[2, 9, 10], &[8, 5], 3);
        assert_eq!(
            format_cofd(&request, &rolled, true),
            format_cofd(&request, &rolled, true)
        );
    }
}

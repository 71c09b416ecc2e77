//! Which registry situation is legally in force in a given month.
//!
//! A change taking effect on or before the 15th of a month leaves the month
//! to the previous situation; a later change already owns the month. A
//! proposed income rectified afterwards never applies on its own: the
//! rectification covers the proposal's period.

use chrono::{Datelike, NaiveDate};

use crate::registry::{Situation, SituationStatus};

/// Last day of the month on which a change still leaves the month to the
/// previous situation.
pub const CUTOVER_DAY: u32 = 15;

/// Situations most recent first, undated ones last, ties in input order.
fn most_recent_first(situations: &[Situation]) -> Vec<&Situation> {
    let mut ordered: Vec<&Situation> = situations.iter().collect();
    ordered.sort_by(|a, b| b.effective_from.cmp(&a.effective_from));
    ordered
}

fn is_proposed(situation: &Situation) -> bool {
    situation.status == Some(SituationStatus::Proposed)
}

/// Collapse runs of consecutive proposals to the chronologically last one.
///
/// In most-recent-first order that is the first member of each run.
fn collapse_proposals<'a>(ordered: &[&'a Situation]) -> Vec<&'a Situation> {
    let mut cleaned: Vec<&'a Situation> = Vec::with_capacity(ordered.len());
    for (idx, situation) in ordered.iter().enumerate() {
        let follows_proposal = idx > 0 && is_proposed(ordered[idx - 1]);
        if is_proposed(situation) && follows_proposal {
            continue;
        }
        cleaned.push(situation);
    }
    cleaned
}

/// Index into `cleaned` of the situation in force for the target month.
fn in_force(cleaned: &[&Situation], target: NaiveDate) -> Option<usize> {
    let target_key = (target.year(), target.month());

    for (idx, situation) in cleaned.iter().enumerate() {
        let Some(from) = situation.effective_from else {
            continue;
        };
        let change_key = (from.year(), from.month());

        if change_key == target_key {
            if from.day() > CUTOVER_DAY {
                return Some(idx);
            }
            // The previous situation keeps the month; with no dated
            // predecessor the change itself is all there is.
            let predecessor = cleaned
                .get(idx + 1)
                .filter(|previous| previous.effective_from.is_some());
            return Some(if predecessor.is_some() { idx + 1 } else { idx });
        }
        if change_key > target_key {
            continue;
        }
        return Some(idx);
    }
    None
}

/// Resolve the situation in force during the month of `target`.
///
/// Only the year and month of `target` matter. Returns `None` when every
/// known situation starts after that month.
pub fn resolve(target: NaiveDate, situations: &[Situation]) -> Option<&Situation> {
    if situations.is_empty() {
        return None;
    }

    let ordered = most_recent_first(situations);
    let cleaned = collapse_proposals(&ordered);
    let idx = in_force(&cleaned, target)?;

    let chosen = cleaned[idx];
    if is_proposed(chosen) && idx > 0 {
        let successor = cleaned[idx - 1];
        if successor.status == Some(SituationStatus::Rectified) {
            return Some(successor);
        }
    }
    Some(chosen)
}

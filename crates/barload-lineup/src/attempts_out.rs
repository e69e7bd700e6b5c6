use crate::slots::AttemptSlot;

/// Attempts out for one athlete against an ordered lineup.
///
/// Counts every slot before the athlete's opener, plus one for each adjacent
/// pair before the opener that belongs to a single lifter. An athlete with no
/// opener in the lineup has zero attempts out.
pub fn count(ordered: &[AttemptSlot], athlete_index: usize) -> u32 {
    let Some(opener) = ordered
        .iter()
        .position(|slot| slot.athlete_index == athlete_index && slot.attempt_number == 1)
    else {
        return 0;
    };

    let ahead = &ordered[..opener];
    let self_follows = ahead
        .windows(2)
        .filter(|pair| pair[0].athlete_index == pair[1].athlete_index)
        .count();

    (ahead.len() + self_follows) as u32
}

use crate::slots::AttemptSlot;

/// Sort slots into bar-loading order: ascending weight, ties kept in emission order.
pub fn ordered(mut slots: Vec<AttemptSlot>) -> Vec<AttemptSlot> {
    // `sort_by_key` is stable.
    slots.sort_by_key(|slot| slot.weight);
    slots
}

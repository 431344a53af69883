use crate::catalog::card::Card;

/// Merge an external preference ordering into the locally built list: each
/// preferred name present locally (case-insensitive exact match) moves to
/// the front in the order given; names not found or already placed are
/// skipped; everything else follows in its prior order.
///
/// A pure permutation: the multiset of cards is unchanged. Returns the
/// reordered list and how many cards moved.
pub fn reconcile(deck: Vec<Card>, preferred: &[String]) -> (Vec<Card>, usize) {
    let total = deck.len();
    let mut slots: Vec<Option<Card>> = deck.into_iter().map(Some).collect();
    let mut reordered: Vec<Card> = Vec::with_capacity(total);
    let mut moved = 0;

    for name in preferred {
        let key = name.to_lowercase();
        let found = slots
            .iter()
            .position(|slot| slot.as_ref().map_or(false, |c| c.name_key() == key));
        if let Some(pos) = found {
            if let Some(card) = slots[pos].take() {
                reordered.push(card);
                moved += 1;
            }
        }
    }

    reordered.extend(slots.into_iter().flatten());
    debug_assert_eq!(reordered.len(), total);

    (reordered, moved)
}

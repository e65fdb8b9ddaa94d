use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered classification of a three-card hand.
///
/// Higher categories always win; there is no tie-breaking within a
/// category. The ordinal values are part of the contract: `HighCard` is 0
/// and `StraightFlush` is 5.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    Flush = 2,
    Straight = 3,
    ThreeOfAKind = 4,
    StraightFlush = 5,
}

/// Classify the best category of a three-card hand.
///
/// Checks are applied high to low, first match wins:
/// straight flush, three of a kind, straight, flush, pair, high card.
/// Classification is total over valid cards and independent of card order.
pub fn classify(cards: &[Card; 3]) -> Category {
    let ranks = [
        cards[0].rank as u8,
        cards[1].rank as u8,
        cards[2].rank as u8,
    ];
    let flush = cards[0].suit == cards[1].suit && cards[1].suit == cards[2].suit;
    let straight = straight_high(ranks).is_some();

    let mut rank_counts = [0u8; 15]; // 2..14 used
    for r in ranks {
        rank_counts[r as usize] += 1;
    }
    let trips = rank_counts.iter().any(|&c| c == 3);
    let pair = rank_counts.iter().any(|&c| c == 2);

    if straight && flush {
        return Category::StraightFlush;
    }
    if trips {
        return Category::ThreeOfAKind;
    }
    if straight {
        return Category::Straight;
    }
    if flush {
        return Category::Flush;
    }
    if pair {
        return Category::Pair;
    }
    Category::HighCard
}

/// Straight test for three rank values, returning the high card of the run.
///
/// Three consecutive values form a straight ending at the highest value.
/// The single wheel case is the rank set {2, 3, 14}: Ace-low, treated as a
/// straight ending at 3. No other wraparound exists for three cards.
pub fn straight_high(ranks: [u8; 3]) -> Option<u8> {
    let mut r = ranks;
    r.sort_unstable();
    if r[0] + 1 == r[1] && r[1] + 1 == r[2] {
        return Some(r[2]);
    }
    if r == [2, 3, 14] {
        return Some(3);
    }
    None
}

/// Classify the hand formed by two hole cards and the table card.
pub fn hand_category(hole: [Card; 2], table: Card) -> Category {
    classify(&[hole[0], hole[1], table])
}

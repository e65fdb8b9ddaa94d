use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// The 13 recognized rank symbols, in ascending rank order.
pub const RANK_SYMBOLS: &str = "23456789TJQKA";

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and threshold lookups.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Map a rank symbol to its rank: digits map to themselves,
    /// T=10, J=11, Q=12, K=13, A=14. Unknown symbols yield `None`.
    pub fn from_symbol(sym: char) -> Option<Rank> {
        match sym {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Represents a single playing card with a rank and a suit symbol.
///
/// The suit is carried as the raw character from the card token: only
/// equality between suits matters (for the flush test), so the symbol is
/// passed through uninterpreted rather than restricted to a fixed set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit symbol of the card, uninterpreted
    pub suit: char,
}

impl Card {
    /// Parse a two-character card token such as `"AH"` or `"Td"`.
    ///
    /// The first character must be one of the 13 recognized rank symbols
    /// ([`RANK_SYMBOLS`]); the second character is taken as the suit and is
    /// not validated. Tokens that are too short, too long, or carry an
    /// unknown rank symbol fail with [`EngineError::InvalidCard`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripoker_engine::cards::{Card, Rank};
    ///
    /// let card = Card::parse("TH").unwrap();
    /// assert_eq!(card.rank, Rank::Ten);
    /// assert_eq!(card.suit, 'H');
    ///
    /// assert!(Card::parse("XH").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Card, EngineError> {
        let invalid = || EngineError::InvalidCard {
            token: token.to_string(),
        };
        let mut chars = token.chars();
        let rank_sym = chars.next().ok_or_else(invalid)?;
        let suit = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        let rank = Rank::from_symbol(rank_sym).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The four conventional suit symbols. The parser accepts any suit
/// character; this set exists for deck enumeration in tests and tools.
pub fn all_suits() -> [char; 4] {
    ['C', 'D', 'H', 'S']
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

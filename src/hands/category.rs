//! The eight hand categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Combination shape a selection of cards may form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    Quad,
    StraightFlush,
}

impl HandCategory {
    pub const ALL: [HandCategory; 8] = [
        HandCategory::Single,
        HandCategory::Pair,
        HandCategory::Triple,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::Quad,
        HandCategory::StraightFlush,
    ];

    /// Number of cards every hand of this category holds.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            HandCategory::Single => 1,
            HandCategory::Pair => 2,
            HandCategory::Triple => 3,
            HandCategory::Straight
            | HandCategory::Flush
            | HandCategory::FullHouse
            | HandCategory::Quad
            | HandCategory::StraightFlush => 5,
        }
    }

    /// Rank among five-card categories, higher beats lower.
    ///
    /// `None` for one-, two- and three-card categories, which only ever
    /// meet their own kind.
    #[must_use]
    pub const fn precedence(self) -> Option<u8> {
        match self {
            HandCategory::Single | HandCategory::Pair | HandCategory::Triple => None,
            HandCategory::Straight => Some(0),
            HandCategory::Flush => Some(1),
            HandCategory::FullHouse => Some(2),
            HandCategory::Quad => Some(3),
            HandCategory::StraightFlush => Some(4),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::Single => "Single",
            HandCategory::Pair => "Pair",
            HandCategory::Triple => "Triple",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "FullHouse",
            HandCategory::Quad => "Quad",
            HandCategory::StraightFlush => "StraightFlush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

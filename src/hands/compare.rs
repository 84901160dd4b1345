//! Hand comparison.
//!
//! Callers compare hands of equal size only; the turn engine checks this
//! before asking.

use super::category::HandCategory;
use super::hand::Hand;

impl Hand {
    /// Does this hand beat `other` when played on top of it?
    ///
    /// ```
    /// use big_two::cards::Card;
    /// use big_two::core::PlayerId;
    /// use big_two::hands::classify;
    ///
    /// let parse = |s: &str| -> Vec<Card> {
    ///     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    /// };
    /// let straight = classify(PlayerId::new(0), &parse("D3 C4 H5 S6 D7")).unwrap();
    /// let flush = classify(PlayerId::new(1), &parse("C3 C5 C8 CJ CK")).unwrap();
    /// assert!(flush.beats(&straight));
    /// assert!(!straight.beats(&flush));
    /// ```
    #[must_use]
    pub fn beats(&self, other: &Hand) -> bool {
        use HandCategory::*;

        match (self.category(), other.category()) {
            (Flush, Flush) => match (self.suit(), other.suit()) {
                (Some(mine), Some(theirs)) if mine != theirs => mine > theirs,
                _ => self.top_card() > other.top_card(),
            },
            (Single, Single)
            | (Pair, Pair)
            | (Triple, Triple)
            | (Straight, Straight)
            | (FullHouse, FullHouse)
            | (Quad, Quad)
            | (StraightFlush, StraightFlush) => self.top_card() > other.top_card(),
            (mine, theirs) => match (mine.precedence(), theirs.precedence()) {
                (Some(mine), Some(theirs)) => mine > theirs,
                // Sizes differ; the engine never asks this.
                _ => false,
            },
        }
    }
}

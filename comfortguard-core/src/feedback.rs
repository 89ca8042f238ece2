//! Occupant feedback votes
//!
//! Occupants cast a three-way vote on how the space feels. The tally sits
//! next to the model output so a dashboard can compare predicted comfort
//! with reported comfort.

use core::fmt;

/// A single occupant vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedbackVote {
    /// Occupant feels too cold
    #[cfg_attr(feature = "serde", serde(rename = "Too Cold"))]
    TooCold,
    /// Occupant is comfortable
    Comfortable,
    /// Occupant feels too hot
    #[cfg_attr(feature = "serde", serde(rename = "Too Hot"))]
    TooHot,
}

impl FeedbackVote {
    /// All votes in display order
    pub const ALL: [FeedbackVote; 3] = [FeedbackVote::TooCold, FeedbackVote::Comfortable, FeedbackVote::TooHot];

    /// Label used in charts and session records
    pub const fn label(&self) -> &'static str {
        match self {
            FeedbackVote::TooCold => "Too Cold",
            FeedbackVote::Comfortable => "Comfortable",
            FeedbackVote::TooHot => "Too Hot",
        }
    }

    /// Parse a label produced by [`label`](Self::label)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|vote| vote.label() == label)
    }
}

impl fmt::Display for FeedbackVote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Running count of occupant votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackTally {
    /// "Too Cold" votes
    pub too_cold: u32,
    /// "Comfortable" votes
    pub comfortable: u32,
    /// "Too Hot" votes
    pub too_hot: u32,
}

impl FeedbackTally {
    /// Count one vote; saturates instead of wrapping
    pub fn record(&mut self, vote: FeedbackVote) {
        let slot = self.slot_mut(vote);
        *slot = slot.saturating_add(1);
    }

    /// Votes cast for `vote`
    pub fn count(&self, vote: FeedbackVote) -> u32 {
        match vote {
            FeedbackVote::TooCold => self.too_cold,
            FeedbackVote::Comfortable => self.comfortable,
            FeedbackVote::TooHot => self.too_hot,
        }
    }

    /// Overwrite the count for `vote`
    pub fn set(&mut self, vote: FeedbackVote, count: u32) {
        *self.slot_mut(vote) = count;
    }

    /// Total votes
    pub fn total(&self) -> u64 {
        u64::from(self.too_cold) + u64::from(self.comfortable) + u64::from(self.too_hot)
    }

    /// `(vote, count)` pairs in display order
    pub fn counts(&self) -> [(FeedbackVote, u32); 3] {
        FeedbackVote::ALL.map(|vote| (vote, self.count(vote)))
    }

    fn slot_mut(&mut self, vote: FeedbackVote) -> &mut u32 {
        match vote {
            FeedbackVote::TooCold => &mut self.too_cold,
            FeedbackVote::Comfortable => &mut self.comfortable,
            FeedbackVote::TooHot => &mut self.too_hot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_votes() {
        let mut tally = FeedbackTally::default();
        tally.record(FeedbackVote::TooHot);
        tally.record(FeedbackVote::TooHot);
        tally.record(FeedbackVote::Comfortable);

        assert_eq!(tally.count(FeedbackVote::TooHot), 2);
        assert_eq!(tally.total(), 3);
        assert_eq!(
            tally.counts(),
            [(FeedbackVote::TooCold, 0), (FeedbackVote::Comfortable, 1), (FeedbackVote::TooHot, 2)]
        );
    }

    #[test]
    fn record_saturates() {
        let mut tally = FeedbackTally::default();
        tally.set(FeedbackVote::TooCold, u32::MAX);
        tally.record(FeedbackVote::TooCold);
        assert_eq!(tally.count(FeedbackVote::TooCold), u32::MAX);
    }

    #[test]
    fn labels_round_trip() {
        for vote in FeedbackVote::ALL {
            assert_eq!(FeedbackVote::from_label(vote.label()), Some(vote));
        }
        assert_eq!(FeedbackVote::from_label("Lukewarm"), None);
    }
}

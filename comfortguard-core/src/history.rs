//! History Aggregator
//!
//! ## Overview
//!
//! A bounded FIFO window of comfort samples, owned by one monitoring session.
//! Only `Valid` evaluations are appended; once the window holds `capacity`
//! samples each append evicts the oldest one.
//!
//! All queries run over the current window and are recomputed on every call.
//! With the default window of 30 samples this is cheaper than keeping
//! incremental aggregates in sync with eviction.
//!
//! ```text
//! append ──► [s0, s1, ..., sN-1] ──► evict s0 when full
//!                      │
//!                      ├── statistics()   min/max/mean of PMV and PPD
//!                      ├── comfort_ratio() comfortable vs discomfort counts
//!                      └── segments()     runs of equal comfort state
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortguard_core::{ComfortIndices, ComfortState, HistoryAggregator, HistorySample};
//!
//! let mut history = HistoryAggregator::with_capacity(2);
//! for (ts, pmv) in [(0, 0.1), (1_000, 0.2), (2_000, 0.3)] {
//!     let indices = ComfortIndices::from_pmv(pmv);
//!     history.append(HistorySample::new(ts, indices, ComfortState::Comfortable));
//! }
//!
//! // First sample was evicted
//! assert_eq!(history.window().next().map(|s| s.timestamp), Some(1_000));
//!
//! let stats = history.statistics()?;
//! assert!((stats.pmv.mean - 0.25).abs() < 1e-12);
//! # Ok::<(), comfortguard_core::AggregatorError>(())
//! ```

use alloc::vec::Vec;

use crate::buffer::{CircularBuffer, CircularBufferIter};
use crate::classifier::ComfortState;
use crate::constants::time::DEFAULT_HISTORY_CAPACITY;
use crate::errors::{AggregatorError, AggregatorResult};
use crate::solver::ComfortIndices;
use crate::time::Timestamp;

/// One successful evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySample {
    /// When the evaluation ran (ms since Unix epoch)
    pub timestamp: Timestamp,
    /// Predicted Mean Vote
    pub pmv: f64,
    /// Predicted Percentage of Dissatisfied (%)
    pub ppd: f64,
    /// Classification at the time of the evaluation
    pub state: ComfortState,
}

impl HistorySample {
    /// Sample from solver indices and their classification
    pub fn new(timestamp: Timestamp, indices: ComfortIndices, state: ComfortState) -> Self {
        Self {
            timestamp,
            pmv: indices.pmv,
            ppd: indices.ppd,
            state,
        }
    }

    /// The stored PMV/PPD pair
    pub fn indices(&self) -> ComfortIndices {
        ComfortIndices { pmv: self.pmv, ppd: self.ppd }
    }
}

/// Min, max and mean of one series
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesStatistics {
    /// Smallest value in the window
    pub min: f64,
    /// Largest value in the window
    pub max: f64,
    /// Arithmetic mean over the window
    pub mean: f64,
}

impl SeriesStatistics {
    fn from_values(values: impl Iterator<Item = f64>) -> AggregatorResult<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }

        if count == 0 {
            return Err(AggregatorError::EmptyWindow);
        }

        Ok(Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

/// Summary statistics for the current window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryStatistics {
    /// PMV series
    pub pmv: SeriesStatistics,
    /// PPD series (%)
    pub ppd: SeriesStatistics,
}

/// Comfortable vs discomfort sample counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComfortRatio {
    /// Samples classified comfortable
    pub comfortable: usize,
    /// Samples classified as discomfort
    pub discomfort: usize,
}

impl ComfortRatio {
    /// Total samples counted
    pub fn total(&self) -> usize {
        self.comfortable + self.discomfort
    }

    /// Share of comfortable samples in `[0, 1]`, `None` for an empty window
    pub fn comfortable_fraction(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.comfortable as f64 / total as f64),
        }
    }
}

/// Maximal run of consecutive samples sharing a comfort verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComfortSegment {
    /// Whether the run is comfortable
    pub comfortable: bool,
    /// Timestamp of the first sample in the run
    pub start: Timestamp,
    /// Timestamp of the last sample in the run
    pub end: Timestamp,
    /// Number of samples in the run
    pub samples: usize,
}

/// Bounded FIFO of comfort samples
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryAggregator {
    samples: CircularBuffer<HistorySample>,
}

impl Default for HistoryAggregator {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryAggregator {
    /// Window holding at most `capacity` samples (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: CircularBuffer::with_capacity(capacity),
        }
    }

    /// Append a sample, evicting the oldest one when full
    ///
    /// Returns the evicted sample, if any.
    pub fn append(&mut self, sample: HistorySample) -> Option<HistorySample> {
        self.samples.push(sample)
    }

    /// Samples in insertion order (oldest first)
    pub fn window(&self) -> CircularBufferIter<'_, HistorySample> {
        self.samples.iter()
    }

    /// Samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples are held
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum window length
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&HistorySample> {
        self.samples.last()
    }

    /// Drop every sample, keeping the capacity
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Min/max/mean of PMV and PPD over the window
    pub fn statistics(&self) -> AggregatorResult<HistoryStatistics> {
        Ok(HistoryStatistics {
            pmv: SeriesStatistics::from_values(self.window().map(|s| s.pmv))?,
            ppd: SeriesStatistics::from_values(self.window().map(|s| s.ppd))?,
        })
    }

    /// Comfortable vs discomfort counts over the window
    ///
    /// An empty window reports zero for both.
    pub fn comfort_ratio(&self) -> ComfortRatio {
        self.window().fold(ComfortRatio::default(), |mut ratio, sample| {
            if sample.state.is_comfortable() {
                ratio.comfortable += 1;
            } else {
                ratio.discomfort += 1;
            }
            ratio
        })
    }

    /// Split the window into runs of equal comfort verdict
    ///
    /// Only the comfortable/discomfort verdict matters; discomfort samples
    /// with different recommendations belong to the same run.
    pub fn segments(&self) -> Vec<ComfortSegment> {
        let mut segments: Vec<ComfortSegment> = Vec::new();

        for sample in self.window() {
            let comfortable = sample.state.is_comfortable();
            match segments.last_mut() {
                Some(current) if current.comfortable == comfortable => {
                    current.end = sample.timestamp;
                    current.samples += 1;
                }
                _ => segments.push(ComfortSegment {
                    comfortable,
                    start: sample.timestamp,
                    end: sample.timestamp,
                    samples: 1,
                }),
            }
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Recommendation, Recommendations};

    fn discomfort() -> ComfortState {
        let mut recommendations = Recommendations::new();
        let _ = recommendations.push(Recommendation::AdjustHumidity);
        ComfortState::Discomfort { recommendations }
    }

    fn sample(timestamp: Timestamp, pmv: f64, comfortable: bool) -> HistorySample {
        let state = if comfortable { ComfortState::Comfortable } else { discomfort() };
        HistorySample::new(timestamp, ComfortIndices::from_pmv(pmv), state)
    }

    #[test]
    fn default_capacity_is_thirty() {
        let history = HistoryAggregator::default();
        assert_eq!(history.capacity(), 30);
        assert!(history.is_empty());
    }

    #[test]
    fn window_preserves_insertion_order() {
        let mut history = HistoryAggregator::with_capacity(5);
        for i in 0..4 {
            assert!(history.append(sample(i * 1000, i as f64 / 10.0, true)).is_none());
        }

        let timestamps: Vec<Timestamp> = history.window().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, [0, 1000, 2000, 3000]);
        assert_eq!(history.latest().map(|s| s.timestamp), Some(3000));
    }

    #[test]
    fn overflow_evicts_exactly_the_oldest() {
        let mut history = HistoryAggregator::with_capacity(3);
        for i in 0..3 {
            history.append(sample(i, 0.0, true));
        }

        let evicted = history.append(sample(3, 0.0, true));
        assert_eq!(evicted.map(|s| s.timestamp), Some(0));

        let timestamps: Vec<Timestamp> = history.window().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, [1, 2, 3]);
    }

    #[test]
    fn statistics_on_empty_window_fail() {
        let history = HistoryAggregator::default();
        assert_eq!(history.statistics(), Err(AggregatorError::EmptyWindow));
        assert_eq!(history.comfort_ratio(), ComfortRatio::default());
        assert!(history.segments().is_empty());
    }

    #[test]
    fn statistics_cover_both_series() {
        let mut history = HistoryAggregator::default();
        history.append(sample(0, -0.5, true));
        history.append(sample(1, 0.0, true));
        history.append(sample(2, 1.0, false));

        let stats = history.statistics().unwrap();
        assert_eq!(stats.pmv.min, -0.5);
        assert_eq!(stats.pmv.max, 1.0);
        assert!((stats.pmv.mean - 0.5 / 3.0).abs() < 1e-12);

        // PPD minimum sits at pmv = 0
        assert!((stats.ppd.min - 5.0).abs() < 1e-12);
        assert!((stats.ppd.max - crate::solver::ppd_from_pmv(1.0)).abs() < 1e-12);
    }

    #[test]
    fn ratio_counts_states() {
        let mut history = HistoryAggregator::default();
        history.append(sample(0, 0.0, true));
        history.append(sample(1, 0.9, false));
        history.append(sample(2, 0.1, true));
        history.append(sample(3, 0.2, true));

        let ratio = history.comfort_ratio();
        assert_eq!(ratio, ComfortRatio { comfortable: 3, discomfort: 1 });
        assert_eq!(ratio.comfortable_fraction(), Some(0.75));
    }

    #[test]
    fn segments_group_consecutive_states() {
        let mut history = HistoryAggregator::default();
        for (ts, comfortable) in [(0, true), (10, true), (20, false), (30, false), (40, false), (50, true)] {
            history.append(sample(ts, 0.0, comfortable));
        }

        let segments = history.segments();
        assert_eq!(
            segments,
            [
                ComfortSegment { comfortable: true, start: 0, end: 10, samples: 2 },
                ComfortSegment { comfortable: false, start: 20, end: 40, samples: 3 },
                ComfortSegment { comfortable: true, start: 50, end: 50, samples: 1 },
            ]
        );
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut history = HistoryAggregator::with_capacity(4);
        history.append(sample(0, 0.0, true));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 4);
    }
}

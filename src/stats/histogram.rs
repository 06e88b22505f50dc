use std::fmt::Write;

use crate::util::{Error, Result};

const RULE_WIDTH: usize = 70;

/// Frequency counts over equal-width buckets covering `[low, high]`.
///
/// The bucket count is clamped to `1..=high - low + 1`, so every bucket
/// covers at least one value. Whatever the division leaves over is folded
/// into the last bucket.
#[derive(Debug, Clone)]
pub struct Histogram {
    low: i64,
    high: i64,
    width: i128,
    counts: Vec<usize>,
}

impl Histogram {
    pub fn new(low: i64, high: i64, buckets: usize) -> Result<Self> {
        if high < low {
            return Err(Error::invalid_range(low, high));
        }
        let range = high as i128 - low as i128 + 1;
        let buckets = (buckets as i128).clamp(1, range) as usize;
        let width = range / buckets as i128;
        Ok(Self {
            low,
            high,
            width,
            counts: vec![0; buckets],
        })
    }

    /// Count `value`. Values outside `[low, high]` are ignored and `false`
    /// is returned.
    pub fn record(&mut self, value: i64) -> bool {
        if value < self.low || value > self.high {
            return false;
        }
        let index = ((value as i128 - self.low as i128) / self.width) as usize;
        let last = self.counts.len() - 1;
        self.counts[index.min(last)] += 1;
        true
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Inclusive `(start, end)` bounds of bucket `index`.
    pub fn bounds(&self, index: usize) -> (i64, i64) {
        let start = self.low as i128 + index as i128 * self.width;
        let end = if index + 1 == self.counts.len() {
            self.high as i128
        } else {
            (start + self.width - 1).min(self.high as i128)
        };
        (start as i64, end as i64)
    }

    /// Draw the histogram as text, scaling the fullest bucket to `width`
    /// characters.
    pub fn render(&self, width: usize) -> String {
        let max_count = self.counts.iter().copied().max().unwrap_or(0);
        let scale = if max_count > 0 {
            width as f64 / max_count as f64
        } else {
            1.0
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Distribution of {} numbers (Range {}..{}):",
            self.total(),
            self.low,
            self.high
        );
        let _ = writeln!(out, "{:<12} | {:<6} | Graph", "Range", "Count");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        for (index, &count) in self.counts.iter().enumerate() {
            let (start, end) = self.bounds(index);
            let label = format!("{:02}..{:02}", start, end);
            let bar = "#".repeat((count as f64 * scale) as usize);
            let _ = writeln!(out, "{:<12} | {:<6} | {}", label, count, bar);
        }
        out
    }
}

use std::{collections::BTreeMap, fmt::Display};

/// Descriptive statistics over a set of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    /// Average of the two middle values when `count` is even.
    pub median: f64,
    /// Most frequent value; ties go to the smallest one.
    pub mode: i64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl Summary {
    /// Returns `None` for an empty slice.
    pub fn from_samples(samples: &[i64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len();
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let mean = sorted.iter().map(|&x| x as f64).sum::<f64>() / count as f64;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] as f64 + sorted[count / 2] as f64) / 2.0
        } else {
            sorted[count / 2] as f64
        };
        let variance = sorted
            .iter()
            .map(|&x| {
                let d = x as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / count as f64;

        let mut frequencies = BTreeMap::new();
        for &x in &sorted {
            *frequencies.entry(x).or_insert(0usize) += 1;
        }
        let mut mode = sorted[0];
        let mut best = 0;
        for (&value, &freq) in &frequencies {
            if freq > best {
                best = freq;
                mode = value;
            }
        }

        Some(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            median,
            mode,
            std_dev: variance.sqrt(),
        })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Count:   {}", self.count)?;
        writeln!(f, "Min:     {}", self.min)?;
        writeln!(f, "Max:     {}", self.max)?;
        writeln!(f, "Mean:    {:.2}", self.mean)?;
        writeln!(f, "Median:  {:.1}", self.median)?;
        writeln!(f, "Mode:    {}", self.mode)?;
        write!(f, "Std dev: {:.2}", self.std_dev)
    }
}

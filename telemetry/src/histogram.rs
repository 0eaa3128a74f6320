use crate::error::TelemetryError;
use ordered_float::NotNan;

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Counts of values per bin. Bin `i` covers `edges[i]..edges[i + 1]`, except
/// the last bin which also includes its right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Values outside the edges are not counted.
    pub fn new(values: &[f64], edges: Vec<f64>) -> Result<Self, TelemetryError> {
        if edges.len() < 2 || edges.iter().any(|e| e.is_nan()) {
            return Err(TelemetryError::InvalidEdges);
        }
        if edges.windows(2).any(|w| w[1] < w[0]) {
            return Err(TelemetryError::InvalidEdges);
        }

        let first = edges[0];
        let last = edges[edges.len() - 1];
        let mut counts = vec![0; edges.len() - 1];
        for &v in values {
            if v.is_nan() {
                return Err(TelemetryError::NotANumber);
            }
            if v < first || v > last {
                continue;
            }
            let bin = if v == last {
                counts.len() - 1
            } else {
                edges.partition_point(|&e| e <= v) - 1
            };
            counts[bin] += 1;
        }
        Ok(Self { edges, counts })
    }

    /// Spreads `n_edges` edges evenly between the smallest and largest value.
    pub fn auto(values: &[f64], n_edges: usize) -> Result<Self, TelemetryError> {
        let values_nn = values
            .iter()
            .map(|&v| NotNan::new(v))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| TelemetryError::NotANumber)?;
        let min = values_nn.iter().min().ok_or(TelemetryError::Empty)?;
        let max = values_nn.iter().max().ok_or(TelemetryError::Empty)?;
        Self::new(values, linspace(min.into_inner(), max.into_inner(), n_edges))
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(left, right, count)` for each bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(e, &count)| (e[0], e[1], count))
    }
}

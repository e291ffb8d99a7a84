#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl Stats {
    pub fn compute(data: &[f64]) -> Stats {
        let variance = variance(data);
        Stats {
            mean: mean(data),
            median: median(data),
            variance,
            std_dev: variance.sqrt(),
        }
    }

    /// Values rounded half away from zero, in display order.
    pub fn rounded(&self) -> [(&'static str, i64); 4] {
        [
            ("Average", self.mean.round() as i64),
            ("Median", self.median.round() as i64),
            ("Variance", self.variance.round() as i64),
            ("Standard Deviation", self.std_dev.round() as i64),
        ]
    }
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sorts a copy of `data`, the caller's order is left untouched.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    match sorted.len() % 2 {
        0 => (sorted[mid - 1] + sorted[mid]) / 2.,
        _ => sorted[mid],
    }
}

/// Population variance, divides by N.
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.;
    }
    let mean = mean(data);
    data.iter()
        .map(|value| (mean - value).powf(2.))
        .sum::<f64>()
        / (data.len() as f64)
}

pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

use serde::Serialize;

/// Two-decimal rounding used for every reported average:
/// `round(100*x) / 100`, halves away from zero.
pub fn round_off_2_decimals(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Mean of `scores` rounded to two decimals; 0 for an empty input.
pub fn average<I>(scores: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut count: usize = 0;
    let mut sum: f64 = 0.0;
    for s in scores {
        count += 1;
        sum += s;
    }
    if count == 0 {
        return 0.0;
    }
    round_off_2_decimals(sum / (count as f64))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GradeBand {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Passed,
    Failed,
}

impl GradeBand {
    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Excellent => "Excellent",
            GradeBand::VeryGood => "Very Good",
            GradeBand::Good => "Good",
            GradeBand::Passed => "Passed",
            GradeBand::Failed => "Failed",
        }
    }
}

pub fn grade_band(score: f64) -> GradeBand {
    if score >= 90.0 {
        GradeBand::Excellent
    } else if score >= 80.0 {
        GradeBand::VeryGood
    } else if score >= 70.0 {
        GradeBand::Good
    } else if score >= 60.0 {
        GradeBand::Passed
    } else {
        GradeBand::Failed
    }
}

pub fn passed(score: f64, pass_mark: f64) -> bool {
    score >= pass_mark
}

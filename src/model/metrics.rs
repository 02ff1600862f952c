/// Coefficient of determination (R²).
///
/// Logged after training for information only, never used as a control input.
#[derive(Default, Copy, Clone)]
pub struct RSquared {
    residual_squares: f64,
    target_sum: f64,
    target_squares: f64,
    n: usize,
}

impl RSquared {
    #[inline]
    pub fn push_sample(&mut self, prediction: f64, target: f64) {
        let residual = target - prediction;
        self.residual_squares += residual * residual;
        self.target_sum += target;
        self.target_squares += target * target;
        self.n += 1;
    }

    #[must_use]
    pub fn finalise(&self) -> f64 {
        if self.n == 0 {
            return f64::NAN;
        }
        let total_squares =
            self.target_squares - self.target_sum * self.target_sum / self.n as f64;
        if total_squares.abs() < f64::EPSILON {
            return f64::NAN;
        }
        1.0 - self.residual_squares / total_squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_predictions_score_one() {
        let mut metric = RSquared::default();
        for target in [1.0, 2.0, 3.0, 4.0] {
            metric.push_sample(target, target);
        }
        assert!((metric.finalise() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_predictions_score_zero() {
        let mut metric = RSquared::default();
        for target in [1.0, 2.0, 3.0] {
            metric.push_sample(2.0, target);
        }
        assert!(metric.finalise().abs() < f64::EPSILON);
    }

    #[test]
    fn known_value_ok() {
        // scikit-learn's r2_score doc example.
        let mut metric = RSquared::default();
        for (prediction, target) in [(2.5, 3.0), (0.0, -0.5), (2.0, 2.0), (8.0, 7.0)] {
            metric.push_sample(prediction, target);
        }
        assert!((metric.finalise() - 0.9486081370449679).abs() < 1e-12);
    }

    #[test]
    fn degenerate_cases_are_nan() {
        assert!(RSquared::default().finalise().is_nan());

        let mut constant = RSquared::default();
        constant.push_sample(1.0, 5.0);
        constant.push_sample(2.0, 5.0);
        assert!(constant.finalise().is_nan());
    }
}

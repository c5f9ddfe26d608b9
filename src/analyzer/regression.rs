/// Ordinary least-squares line of a value series against its zero-based
/// observation index. Calendar spacing between observations is ignored; the
/// x-axis is 0, 1, 2, ... in chronological order.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn fit(y: &[f64]) -> Self {
        let n = y.len() as f64;
        if y.len() < 2 {
            return Self {
                slope: 0.0,
                intercept: y.first().copied().unwrap_or(0.0),
            };
        }
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = y.iter().sum::<f64>() / n;
        let mut num = 0.0;
        let mut den = 0.0;
        for (i, &yi) in y.iter().enumerate() {
            let xi = i as f64;
            num += (xi - x_mean) * (yi - y_mean);
            den += (xi - x_mean) * (xi - x_mean);
        }
        // den is only zero for n < 2; the index axis always has variance.
        let slope = if den.abs() < 1e-12 { 0.0 } else { num / den };
        Self {
            slope,
            intercept: y_mean - slope * x_mean,
        }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn predictions(&self, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.predict(i as f64)).collect()
    }

    /// Coefficient of determination of `y` against this fit's predictions
    /// over the same index set. Unbounded below zero for pathological fits,
    /// 1.0 for a perfect one; not clamped.
    ///
    /// A zero-variance target is an exact fit (zero residuals), scored 1.0
    /// rather than dividing by zero.
    pub fn r_squared(&self, y: &[f64]) -> f64 {
        let n = y.len() as f64;
        if y.len() < 2 {
            return 0.0;
        }
        let y_mean = y.iter().sum::<f64>() / n;
        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for (i, &yi) in y.iter().enumerate() {
            let predicted = self.predict(i as f64);
            ss_res += (yi - predicted) * (yi - predicted);
            ss_tot += (yi - y_mean) * (yi - y_mean);
        }
        if ss_tot == 0.0 {
            return if ss_res < f64::EPSILON { 1.0 } else { 0.0 };
        }
        1.0 - ss_res / ss_tot
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Closed-form least-squares line fit.

use stratus_core::{Result, StratusError};

/// A fitted line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    /// Change in y per unit of x
    pub slope: f64,
    /// Value of y at x = 0
    pub intercept: f64,
}

impl LinearModel {
    /// Fit a line through `(x, y)` points by ordinary least squares.
    ///
    /// # Errors
    ///
    /// `InsufficientData` when fewer than 2 points with distinct x values
    /// are given. A vertical cluster of points has no least-squares line,
    /// and refusing to fit here is what keeps NaN out of every downstream
    /// forecast.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratus_predict::LinearModel;
    ///
    /// let model = LinearModel::fit(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
    /// assert!((model.slope - 2.0).abs() < 1e-9);
    /// assert!((model.intercept - 1.0).abs() < 1e-9);
    /// ```
    pub fn fit(points: &[(f64, f64)]) -> Result<Self> {
        let distinct = distinct_x(points);
        if distinct < 2 {
            return Err(StratusError::insufficient_data(2, distinct));
        }

        let n = points.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for &(x, y) in points {
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator.abs() < f64::EPSILON {
            // Distinct-x check above makes this unreachable for sane input,
            // but catastrophic cancellation on near-identical x values could
            // still land here.
            return Err(StratusError::insufficient_data(2, distinct));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;
        Ok(Self { slope, intercept })
    }

    /// Evaluate the line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

fn distinct_x(points: &[(f64, f64)]) -> usize {
    let Some(&(first_x, _)) = points.first() else {
        return 0;
    };
    if points.iter().any(|&(x, _)| x != first_x) {
        // Two distinct values are all the fit requires; an exact count
        // would cost a sort for no gain.
        2
    } else {
        1
    }
}

use log::{debug, warn};
use ndarray::{ArrayView1, ArrayViewMut2, Axis};
use rayon::prelude::*;

use crate::{
    config::{DegeneratePolicy, NormalizeConfig},
    error::{Result, UtilErr},
    stats,
};

/// The observed range of a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    /// Range of a column without any non-NaN value.
    const UNDEFINED: Self = Self {
        min: f64::NAN,
        max: f64::NAN,
    };

    fn of<I: IntoIterator<Item = f64>>(values: I) -> Self {
        stats::min_max(values)
            .map(|(min, max)| Self { min, max })
            .unwrap_or(Self::UNDEFINED)
    }

    #[inline]
    pub fn difference(&self) -> f64 {
        self.max - self.min
    }

    /// Whether every (non-NaN) value of the column is the same.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.difference() == 0.
    }

    /// Maps `value` from `[min, max]` onto `[0, 1]`.
    ///
    /// Degenerate ranges map every non-NaN value to `0.0`.
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() && !value.is_nan() {
            return 0.;
        }

        self.raw_scale(value)
    }

    fn raw_scale(&self, value: f64) -> f64 {
        let difference = self.difference();

        // Finite bounds more than f64::MAX apart.
        if difference.is_infinite() && self.min.is_finite() && self.max.is_finite() {
            return (value / 2. - self.min / 2.) / (self.max / 2. - self.min / 2.);
        }

        (value - self.min) / difference
    }
}

/// Min-max feature scaler for rectangular datasets.
///
/// Every column is scaled independently, so the parallel and sequential
/// paths produce identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Creates a new `Normalizer`.
    ///
    /// # Arguments
    /// * `config` - The degenerate column policy and parallelism setting.
    ///
    /// # Returns
    /// A new `Normalizer` instance.
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Computes the range of every column of `dataset` without modifying it.
    ///
    /// # Errors
    /// * `UtilErr::EmptyInput` if there are no rows.
    /// * `UtilErr::ShapeMismatch` if the rows differ in length.
    /// * `UtilErr::DegenerateColumn` if a column has zero range and the
    ///   policy is `DegeneratePolicy::Reject`.
    pub fn fit(&self, dataset: &[Vec<f64>]) -> Result<Vec<ColumnRange>> {
        let width = row_width(dataset)?;

        let column = |c: usize| ColumnRange::of(dataset.iter().map(|row| row[c]));
        let ranges: Vec<_> = if self.config.parallel {
            (0..width).into_par_iter().map(column).collect()
        } else {
            (0..width).map(column).collect()
        };

        self.check_degenerate(&ranges)?;
        Ok(ranges)
    }

    /// Rescales every column of `dataset` in place onto `[0, 1]`.
    ///
    /// The caller's values are overwritten; clone beforehand to keep them.
    /// Nothing is written if an error is returned.
    ///
    /// # Returns
    /// The ranges each column was scaled with.
    ///
    /// # Errors
    /// Same as [`Normalizer::fit`].
    pub fn normalize(&self, dataset: &mut [Vec<f64>]) -> Result<Vec<ColumnRange>> {
        let ranges = self.fit(dataset)?;
        debug!(
            "normalizing dataset: rows={} columns={} parallel={}",
            dataset.len(),
            ranges.len(),
            self.config.parallel
        );

        if self.config.parallel {
            dataset
                .par_iter_mut()
                .for_each(|row| self.scale_row(row, &ranges));
        } else {
            dataset
                .iter_mut()
                .for_each(|row| self.scale_row(row, &ranges));
        }

        Ok(ranges)
    }

    /// Same as [`Normalizer::normalize`] over a matrix whose rows are samples
    /// and whose columns are features.
    ///
    /// # Errors
    /// * `UtilErr::EmptyInput` if the matrix has no rows.
    /// * `UtilErr::DegenerateColumn` as in [`Normalizer::fit`].
    pub fn normalize_array(&self, mut data: ArrayViewMut2<f64>) -> Result<Vec<ColumnRange>> {
        if data.nrows() == 0 {
            return Err(UtilErr::EmptyInput { what: "dataset" });
        }

        let column = |col: ArrayView1<f64>| ColumnRange::of(col.iter().copied());
        let ranges: Vec<_> = if self.config.parallel {
            data.axis_iter(Axis(1)).into_par_iter().map(column).collect()
        } else {
            data.axis_iter(Axis(1)).map(column).collect()
        };

        self.check_degenerate(&ranges)?;
        debug!(
            "normalizing matrix: rows={} columns={} parallel={}",
            data.nrows(),
            ranges.len(),
            self.config.parallel
        );

        if self.config.parallel {
            data.axis_iter_mut(Axis(1))
                .into_par_iter()
                .enumerate()
                .for_each(|(c, mut col)| col.mapv_inplace(|x| self.scale(&ranges[c], x)));
        } else {
            for (mut col, range) in data.axis_iter_mut(Axis(1)).zip(&ranges) {
                col.mapv_inplace(|x| self.scale(range, x));
            }
        }

        Ok(ranges)
    }

    fn check_degenerate(&self, ranges: &[ColumnRange]) -> Result<()> {
        let policy = self.config.degenerate;
        for (column, range) in ranges.iter().enumerate() {
            if !range.is_degenerate() {
                continue;
            }

            if policy == DegeneratePolicy::Reject {
                return Err(UtilErr::DegenerateColumn {
                    column,
                    value: range.min,
                });
            }

            warn!(
                "column {column} is constant ({}), applying {policy:?} policy",
                range.min
            );
        }

        Ok(())
    }

    fn scale_row(&self, row: &mut [f64], ranges: &[ColumnRange]) {
        for (x, range) in row.iter_mut().zip(ranges) {
            *x = self.scale(range, *x);
        }
    }

    #[inline]
    fn scale(&self, range: &ColumnRange, x: f64) -> f64 {
        match self.config.degenerate {
            DegeneratePolicy::Propagate => range.raw_scale(x),
            DegeneratePolicy::Zero | DegeneratePolicy::Reject => range.scale(x),
        }
    }
}

/// Rescales every column of `dataset` in place onto `[0, 1]`, mapping
/// constant columns to `0.0`.
///
/// The caller's values are overwritten.
///
/// # Errors
/// * `UtilErr::EmptyInput` if there are no rows.
/// * `UtilErr::ShapeMismatch` if the rows differ in length.
pub fn normalize_by_feature_scaling(dataset: &mut [Vec<f64>]) -> Result<()> {
    Normalizer::default().normalize(dataset).map(|_| ())
}

/// Returns the common row length of `dataset`.
fn row_width(dataset: &[Vec<f64>]) -> Result<usize> {
    let first = dataset
        .first()
        .ok_or(UtilErr::EmptyInput { what: "dataset" })?;

    let expected = first.len();
    if let Some(row) = dataset.iter().find(|row| row.len() != expected) {
        return Err(UtilErr::ShapeMismatch {
            what: "dataset row",
            got: row.len(),
            expected,
        });
    }

    Ok(expected)
}

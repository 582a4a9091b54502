//! Chart Data Module
//! In-memory dataset types and the literal figure data for the report.

pub mod figures;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("series '{name}' has {values} values for {labels} labels")]
    LengthMismatch {
        name: String,
        labels: usize,
        values: usize,
    },
    #[error("series '{name}' has {values} values for {categories} categories")]
    CategoryMismatch {
        name: String,
        categories: usize,
        values: usize,
    },
}

/// An ordered sequence of (label, value) pairs.
///
/// Label order is display order; the constructor rejects label/value
/// count mismatches.
#[derive(Debug, Clone)]
pub struct LabeledSeries {
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl LabeledSeries {
    pub fn new<S: Into<String>>(
        name: &str,
        labels: Vec<S>,
        values: Vec<f64>,
    ) -> Result<Self, DataError> {
        if labels.len() != values.len() {
            return Err(DataError::LengthMismatch {
                name: name.to_string(),
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            labels: labels.into_iter().map(Into::into).collect(),
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Largest value in the series, 0.0 when empty.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// One named series of a multi-series dataset.
#[derive(Debug, Clone)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }
}

/// Several named series sharing one category axis.
///
/// Every series must carry exactly one value per category.
#[derive(Debug, Clone)]
pub struct MultiSeries {
    categories: Vec<String>,
    series: Vec<NamedSeries>,
}

impl MultiSeries {
    pub fn new<S: Into<String>>(
        categories: Vec<S>,
        series: Vec<NamedSeries>,
    ) -> Result<Self, DataError> {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        for s in &series {
            if s.values.len() != categories.len() {
                return Err(DataError::CategoryMismatch {
                    name: s.name.clone(),
                    categories: categories.len(),
                    values: s.values.len(),
                });
            }
        }
        Ok(Self { categories, series })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn series(&self) -> &[NamedSeries] {
        &self.series
    }

    /// Largest value across all series, 0.0 when empty.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Three performance time series over a shared month axis.
#[derive(Debug, Clone)]
pub struct PerformanceTrend {
    pub months: Vec<String>,
    pub accuracy: NamedSeries,
    pub processing_time: NamedSeries,
    pub satisfaction: NamedSeries,
}

impl PerformanceTrend {
    pub fn new<S: Into<String>>(
        months: Vec<S>,
        accuracy: NamedSeries,
        processing_time: NamedSeries,
        satisfaction: NamedSeries,
    ) -> Result<Self, DataError> {
        let months: Vec<String> = months.into_iter().map(Into::into).collect();
        for s in [&accuracy, &processing_time, &satisfaction] {
            if s.values.len() != months.len() {
                return Err(DataError::CategoryMismatch {
                    name: s.name.clone(),
                    categories: months.len(),
                    values: s.values.len(),
                });
            }
        }
        Ok(Self {
            months,
            accuracy,
            processing_time,
            satisfaction,
        })
    }
}

/// A pre-formatted KPI (name, display value) pair for annotation panels.
///
/// Values carry no numeric semantics ("< 100ms", "30fps", ...).
#[derive(Debug, Clone)]
pub struct KpiEntry {
    pub name: String,
    pub value: String,
}

impl KpiEntry {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_series_rejects_length_mismatch() {
        let err = LabeledSeries::new("broken", vec!["a", "b"], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch {
                labels: 2,
                values: 1,
                ..
            }
        ));
    }

    #[test]
    fn labeled_series_preserves_order() {
        let series = LabeledSeries::new("ok", vec!["x", "y", "z"], vec![3.0, 1.0, 2.0]).unwrap();
        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs, vec![("x", 3.0), ("y", 1.0), ("z", 2.0)]);
        assert_eq!(series.max_value(), 3.0);
    }

    #[test]
    fn multi_series_rejects_short_series() {
        let err = MultiSeries::new(
            vec!["q1", "q2", "q3"],
            vec![NamedSeries::new("partial", vec![1.0, 2.0])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DataError::CategoryMismatch {
                categories: 3,
                values: 2,
                ..
            }
        ));
    }

    #[test]
    fn trend_requires_one_value_per_month() {
        let err = PerformanceTrend::new(
            vec!["Jan", "Feb"],
            NamedSeries::new("acc", vec![1.0, 2.0]),
            NamedSeries::new("time", vec![1.0]),
            NamedSeries::new("sat", vec![1.0, 2.0]),
        )
        .unwrap_err();
        assert!(matches!(err, DataError::CategoryMismatch { .. }));
    }
}

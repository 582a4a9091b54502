//! Literal figure datasets for Chapter 3 of the research report.
//! Chart inputs are compiled in; there is no external data source.

use super::{DataError, KpiEntry, LabeledSeries, MultiSeries, NamedSeries, PerformanceTrend};

/// Device split among AR try-on users, in percent.
pub fn device_preferences() -> Result<LabeledSeries, DataError> {
    LabeledSeries::new(
        "Device",
        vec!["Mobile", "Desktop", "Tablet"],
        vec![65.0, 25.0, 10.0],
    )
}

/// Average satisfaction rating per category, on a 1-5 scale.
pub fn satisfaction_ratings() -> Result<LabeledSeries, DataError> {
    LabeledSeries::new(
        "Category",
        vec![
            "Ease of Use",
            "Accuracy",
            "Performance",
            "User Interface",
            "Overall Experience",
        ],
        vec![4.2, 3.8, 4.0, 4.5, 4.1],
    )
}

/// Survey respondent counts per satisfaction bucket.
pub fn satisfaction_survey() -> Result<LabeledSeries, DataError> {
    LabeledSeries::new(
        "Satisfaction",
        vec![
            "Very Satisfied (5/5)",
            "Satisfied (4/5)",
            "Neutral (3/5)",
            "Dissatisfied (2/5)",
            "Very Dissatisfied (1/5)",
        ],
        vec![40.0, 35.0, 15.0, 7.0, 3.0],
    )
}

/// Usage frequency per device type, in percent of users.
pub fn usage_statistics() -> Result<MultiSeries, DataError> {
    MultiSeries::new(
        vec!["Daily", "Weekly", "Monthly", "Occasionally"],
        vec![
            NamedSeries::new("Mobile", vec![45.0, 30.0, 15.0, 10.0]),
            NamedSeries::new("Desktop", vec![20.0, 35.0, 25.0, 20.0]),
            NamedSeries::new("Tablet", vec![15.0, 25.0, 30.0, 30.0]),
        ],
    )
}

/// Accuracy, processing time, and satisfaction over the evaluation period.
pub fn performance_trend() -> Result<PerformanceTrend, DataError> {
    PerformanceTrend::new(
        vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        NamedSeries::new("Accuracy (%)", vec![75.0, 78.0, 82.0, 85.0, 87.0, 89.0]),
        NamedSeries::new("Processing Time (s)", vec![2.1, 1.9, 1.7, 1.5, 1.3, 1.2]),
        NamedSeries::new("User Satisfaction", vec![3.5, 3.7, 3.9, 4.1, 4.2, 4.3]),
    )
}

/// User age distribution, in percent.
pub fn age_distribution() -> Result<LabeledSeries, DataError> {
    LabeledSeries::new(
        "Age Group",
        vec!["18-24", "25-34", "35-44", "45-54", "55+"],
        vec![35.0, 40.0, 15.0, 7.0, 3.0],
    )
}

/// Runtime performance targets for the system metrics diagram (Figure 17).
pub fn performance_kpis() -> Vec<KpiEntry> {
    vec![
        KpiEntry::new("AR Response Time", "< 100ms"),
        KpiEntry::new("Page Load Time", "< 3 seconds"),
        KpiEntry::new("Video Processing", "30fps"),
        KpiEntry::new("Concurrent Users", "100+"),
    ]
}

/// Quality indicators for the system metrics diagram (Figure 17).
pub fn quality_kpis() -> Vec<KpiEntry> {
    vec![
        KpiEntry::new("Test Pass Rate", "100%"),
        KpiEntry::new("Code Coverage", "75%"),
        KpiEntry::new("User Satisfaction", "4.2/5"),
        KpiEntry::new("Usability Score", "85%"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_figure_datasets_are_well_formed() {
        assert_eq!(device_preferences().unwrap().len(), 3);
        assert_eq!(satisfaction_ratings().unwrap().len(), 5);
        assert_eq!(satisfaction_survey().unwrap().len(), 5);

        let usage = usage_statistics().unwrap();
        assert_eq!(usage.categories().len(), 4);
        assert_eq!(usage.series().len(), 3);

        let trend = performance_trend().unwrap();
        assert_eq!(trend.months.len(), 6);
        assert_eq!(trend.accuracy.values.len(), 6);

        assert_eq!(age_distribution().unwrap().len(), 5);
        assert_eq!(performance_kpis().len(), 4);
        assert_eq!(quality_kpis().len(), 4);
    }

    #[test]
    fn device_preferences_sum_to_one_hundred() {
        let total: f64 = device_preferences().unwrap().values().iter().sum();
        assert_eq!(total, 100.0);
    }
}

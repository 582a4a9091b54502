//! Chart Batch Driver
//! Runs the seven report renderers in fixed order into one output directory.
//! The first failure aborts the rest of the batch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::charts::metrics::{self, KpiPanel};
use crate::charts::{palette, renderer};
use crate::data::figures;

/// Fixed output directory, relative to the working directory.
pub const OUTPUT_DIR: &str = "docs/charts";

const IMAGE_EXTENSION: &str = "png";

/// Render all report charts into `output_dir`, creating it if needed.
///
/// Renderers run sequentially; any failure aborts the remaining charts.
pub fn run(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            output_dir.display()
        )
    })?;

    device_preference_pie(output_dir)?;
    satisfaction_bar(output_dir)?;
    satisfaction_pie(output_dir)?;
    usage_statistics(output_dir)?;
    performance_trend(output_dir)?;
    demographic_distribution(output_dir)?;
    system_metrics(output_dir)?;

    Ok(())
}

/// Every image file currently present in the output directory, sorted by
/// name. Scan-based: stale files from earlier runs are included.
pub fn list_outputs(output_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(output_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn device_preference_pie(dir: &Path) -> Result<()> {
    let path = dir.join("device_preferences_pie.png");
    let series = figures::device_preferences()?;
    renderer::pie_chart(
        &path,
        "User Device Preferences for AR Try-On",
        &series,
        &palette::DEVICE_COLORS,
        (1000, 800),
    )
    .with_context(|| format!("device preference pie chart ({})", path.display()))?;
    println!("✓ Device preferences pie chart saved");
    Ok(())
}

fn satisfaction_bar(dir: &Path) -> Result<()> {
    let path = dir.join("user_satisfaction_bar.png");
    let series = figures::satisfaction_ratings()?;
    renderer::bar_chart(
        &path,
        "User Satisfaction Ratings by Category",
        "Average Rating (1-5)",
        5.0,
        palette::CORAL,
        &series,
        (1200, 800),
    )
    .with_context(|| format!("user satisfaction bar chart ({})", path.display()))?;
    println!("✓ User satisfaction bar chart saved");
    Ok(())
}

fn satisfaction_pie(dir: &Path) -> Result<()> {
    let path = dir.join("user_satisfaction_pie.png");
    let series = figures::satisfaction_survey()?;
    renderer::pie_chart(
        &path,
        "User Satisfaction Survey Results",
        &series,
        &palette::SATISFACTION_COLORS,
        (1000, 800),
    )
    .with_context(|| format!("user satisfaction pie chart ({})", path.display()))?;
    println!("✓ User satisfaction pie chart saved");
    Ok(())
}

fn usage_statistics(dir: &Path) -> Result<()> {
    let path = dir.join("usage_statistics_stacked.png");
    let data = figures::usage_statistics()?;
    renderer::grouped_bar_chart(
        &path,
        "AR Try-On Usage Statistics by Device Type",
        "Usage Frequency",
        "Percentage of Users (%)",
        &data,
        &palette::DEVICE_COLORS,
        (1200, 800),
    )
    .with_context(|| format!("usage statistics bar chart ({})", path.display()))?;
    println!("✓ Usage statistics bar chart saved");
    Ok(())
}

fn performance_trend(dir: &Path) -> Result<()> {
    let path = dir.join("performance_metrics_line.png");
    let trend = figures::performance_trend()?;
    renderer::trend_chart(&path, &trend, (1200, 1000))
        .with_context(|| format!("performance metrics line chart ({})", path.display()))?;
    println!("✓ Performance metrics line chart saved");
    Ok(())
}

fn demographic_distribution(dir: &Path) -> Result<()> {
    let path = dir.join("demographic_distribution.png");
    let series = figures::age_distribution()?;
    renderer::horizontal_bar_chart(
        &path,
        "User Age Distribution",
        "Percentage of Users (%)",
        palette::CORAL,
        &series,
        (1000, 800),
    )
    .with_context(|| format!("demographic distribution chart ({})", path.display()))?;
    println!("✓ Demographic distribution chart saved");
    Ok(())
}

fn system_metrics(dir: &Path) -> Result<()> {
    let path = dir.join("system_performance_metrics.png");
    let panels = [
        KpiPanel::new(
            "Performance Metrics",
            figures::performance_kpis(),
            &palette::METRIC_ROW_COLORS,
        ),
        KpiPanel::new(
            "Quality Indicators",
            figures::quality_kpis(),
            &palette::QUALITY_ROW_COLORS,
        ),
    ];
    metrics::metrics_diagram(
        &path,
        "System Performance Metrics Chart",
        "Key Performance Indicators and Quality Metrics",
        &panels,
        (1600, 800),
    )
    .with_context(|| format!("system performance metrics chart ({})", path.display()))?;
    println!("✓ System performance metrics chart saved");
    Ok(())
}

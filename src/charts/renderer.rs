//! Static Chart Renderer
//! Generic per-chart-kind rendering on a plotters bitmap backend.
//! Each function takes a dataset plus cosmetic parameters and writes one PNG.

use std::path::Path;

use anyhow::{ensure, Result};
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::palette;
use crate::data::{LabeledSeries, MultiSeries, PerformanceTrend};

fn caption_font() -> FontDesc<'static> {
    ("sans-serif", 40).into_font().style(FontStyle::Bold)
}

/// Pie chart with outer labels and white percentage labels inside slices.
pub fn pie_chart(
    path: &Path,
    title: &str,
    series: &LabeledSeries,
    colors: &[RGBColor],
    size: (u32, u32),
) -> Result<()> {
    ensure!(!series.is_empty(), "cannot render '{title}' from empty data");
    ensure!(
        colors.len() >= series.len(),
        "palette for '{title}' has {} colors for {} slices",
        colors.len(),
        series.len()
    );

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, caption_font())?;

    let (w, h) = root.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = f64::from(w.min(h)) * 0.33;
    let sizes = series.values().to_vec();
    let labels = series.labels().to_vec();
    let slice_colors = colors[..series.len()].to_vec();

    let mut pie = Pie::new(&center, &radius, &sizes, &slice_colors, &labels);
    // Start at 12 o'clock, matching the report figures
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 26).into_font());
    pie.percentages(
        ("sans-serif", 22)
            .into_font()
            .style(FontStyle::Bold)
            .color(&WHITE),
    );
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

/// Vertical bar chart with a bold value label above each bar.
pub fn bar_chart(
    path: &Path,
    title: &str,
    y_desc: &str,
    y_max: f64,
    color: RGBColor,
    series: &LabeledSeries,
    size: (u32, u32),
) -> Result<()> {
    ensure!(!series.is_empty(), "cannot render '{title}' from empty data");

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = series.len() as u32;
    let labels = series.labels().to_vec();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, caption_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 24))
        .label_style(("sans-serif", 17))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.mix(0.8).filled())
            .margin(25)
            .data(series.values().iter().enumerate().map(|(i, &v)| (i as u32, v))),
    )?;

    let value_style = TextStyle::from(("sans-serif", 20).into_font().style(FontStyle::Bold))
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(series.values().iter().enumerate().map(|(i, &v)| {
        Text::new(
            format!("{v:.1}"),
            (SegmentValue::CenterOf(i as u32), v + y_max * 0.01),
            value_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Grouped bar chart: one cluster of side-by-side bars per category.
pub fn grouped_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    data: &MultiSeries,
    colors: &[RGBColor],
    size: (u32, u32),
) -> Result<()> {
    ensure!(
        !data.categories().is_empty() && !data.series().is_empty(),
        "cannot render '{title}' from empty data"
    );
    ensure!(
        colors.len() >= data.series().len(),
        "palette for '{title}' has {} colors for {} series",
        colors.len(),
        data.series().len()
    );

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n_cat = data.categories().len();
    let n_ser = data.series().len();
    let y_max = data.max_value() * 1.15;
    let categories = data.categories().to_vec();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, caption_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n_cat as f64 - 0.5), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 24))
        .label_style(("sans-serif", 18))
        .x_labels(n_cat)
        .x_label_formatter(&|x| {
            let i = x.round();
            // Ticks land on the integer cluster centers; skip anything else
            if (x - i).abs() < 0.25 && i >= 0.0 && (i as usize) < categories.len() {
                categories[i as usize].clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    // Each category slot is 1.0 wide; the cluster occupies the middle 0.8
    let band = 0.8 / n_ser as f64;
    for (j, s) in data.series().iter().enumerate() {
        let color = colors[j];
        chart
            .draw_series(s.values.iter().enumerate().map(move |(i, &v)| {
                let left = i as f64 - 0.4 + j as f64 * band + band * 0.1;
                Rectangle::new([(left, 0.0), (left + band * 0.8, v)], color.mix(0.8).filled())
            }))?
            .label(s.name.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.mix(0.8).filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 18))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Horizontal bar chart with a percentage label to the right of each bar.
pub fn horizontal_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    color: RGBColor,
    series: &LabeledSeries,
    size: (u32, u32),
) -> Result<()> {
    ensure!(!series.is_empty(), "cannot render '{title}' from empty data");

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = series.len() as u32;
    let x_max = series.max_value() * 1.2;
    let labels = series.labels().to_vec();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, caption_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(100)
        .build_cartesian_2d(0f64..x_max, (0u32..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .axis_desc_style(("sans-serif", 24))
        .label_style(("sans-serif", 18))
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(color.mix(0.8).filled())
            .margin(20)
            .data(series.values().iter().enumerate().map(|(i, &v)| (i as u32, v))),
    )?;

    let label_style = TextStyle::from(("sans-serif", 20).into_font().style(FontStyle::Bold))
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(series.values().iter().enumerate().map(|(i, &v)| {
        Text::new(
            format!("{v:.0}%"),
            (v + x_max * 0.01, SegmentValue::CenterOf(i as u32)),
            label_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Two-panel trend chart: accuracy on top, processing time and satisfaction
/// below on primary/secondary y-axes with a combined legend.
pub fn trend_chart(path: &Path, trend: &PerformanceTrend, size: (u32, u32)) -> Result<()> {
    let n = trend.months.len();
    ensure!(n >= 2, "trend chart needs at least two periods, got {n}");

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));
    let months = trend.months.clone();

    // Upper panel: accuracy over time
    {
        let (y_min, y_max) = padded_range(&trend.accuracy.values);
        let mut chart = ChartBuilder::on(&panels[0])
            .caption(
                "AR Try-On Accuracy Over Time",
                ("sans-serif", 30).into_font().style(FontStyle::Bold),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(0..n - 1, y_min..y_max)?;

        chart
            .configure_mesh()
            .y_desc("Accuracy (%)")
            .axis_desc_style(("sans-serif", 22))
            .label_style(("sans-serif", 16))
            .x_labels(n)
            .x_label_formatter(&|i| months.get(*i).cloned().unwrap_or_default())
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                trend.accuracy.values.iter().enumerate().map(|(i, &v)| (i, v)),
                palette::CORAL.stroke_width(3),
            ))?
            .label(trend.accuracy.name.as_str())
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], palette::CORAL.stroke_width(3))
            });
        chart.draw_series(
            trend
                .accuracy
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| Circle::new((i, v), 5, palette::CORAL.filled())),
        )?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()?;
    }

    // Lower panel: processing time (left axis) vs satisfaction (right axis)
    {
        let (t_min, t_max) = padded_range(&trend.processing_time.values);
        let (s_min, s_max) = padded_range(&trend.satisfaction.values);
        let mut chart = ChartBuilder::on(&panels[1])
            .caption(
                "Performance Metrics Over Time",
                ("sans-serif", 30).into_font().style(FontStyle::Bold),
            )
            .margin(15)
            .x_label_area_size(55)
            .y_label_area_size(70)
            .right_y_label_area_size(70)
            .build_cartesian_2d(0..n - 1, t_min..t_max)?
            .set_secondary_coord(0..n - 1, s_min..s_max);

        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc(trend.processing_time.name.as_str())
            .axis_desc_style(("sans-serif", 22))
            .label_style(("sans-serif", 16))
            .x_labels(n)
            .x_label_formatter(&|i| months.get(*i).cloned().unwrap_or_default())
            .draw()?;
        chart
            .configure_secondary_axes()
            .y_desc(trend.satisfaction.name.as_str())
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                trend
                    .processing_time
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (i, v)),
                palette::TEAL.stroke_width(3),
            ))?
            .label(trend.processing_time.name.as_str())
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], palette::TEAL.stroke_width(3))
            });
        chart.draw_series(
            trend
                .processing_time
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| Circle::new((i, v), 5, palette::TEAL.filled())),
        )?;

        chart
            .draw_secondary_series(LineSeries::new(
                trend
                    .satisfaction
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (i, v)),
                palette::SKY.stroke_width(3),
            ))?
            .label(trend.satisfaction.name.as_str())
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], palette::SKY.stroke_width(3))
            });
        chart.draw_secondary_series(
            trend
                .satisfaction
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| TriangleMarker::new((i, v), 6, palette::SKY.filled())),
        )?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Value range with 10% padding on both sides.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.1).max(0.1);
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_pads_both_sides() {
        let (lo, hi) = padded_range(&[1.0, 3.0]);
        assert!(lo < 1.0 && hi > 3.0);
    }

    #[test]
    fn padded_range_handles_empty_input() {
        assert_eq!(padded_range(&[]), (0.0, 1.0));
    }
}

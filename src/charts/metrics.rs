//! System Metrics Diagram
//! Annotation-only layout for Figure 17: side-by-side KPI panels with
//! colored rows and connecting arrows, drawn in pixel coordinates.

use std::path::Path;

use anyhow::{ensure, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::palette;
use crate::data::KpiEntry;

/// One annotated panel: a title over a column of colored KPI rows.
#[derive(Debug, Clone)]
pub struct KpiPanel {
    pub title: String,
    pub entries: Vec<KpiEntry>,
    pub colors: Vec<RGBColor>,
}

impl KpiPanel {
    pub fn new(title: &str, entries: Vec<KpiEntry>, colors: &[RGBColor]) -> Self {
        Self {
            title: title.to_string(),
            entries,
            colors: colors.to_vec(),
        }
    }
}

/// Render the composite metrics diagram: main title, italic subtitle, and
/// one column of annotated rows per panel, each row with an outgoing arrow.
pub fn metrics_diagram(
    path: &Path,
    title: &str,
    subtitle: &str,
    panels: &[KpiPanel],
    size: (u32, u32),
) -> Result<()> {
    ensure!(!panels.is_empty(), "metrics diagram needs at least one panel");
    for panel in panels {
        ensure!(
            !panel.entries.is_empty(),
            "panel '{}' has no entries",
            panel.title
        );
        ensure!(
            panel.colors.len() >= panel.entries.len(),
            "panel '{}' has {} colors for {} rows",
            panel.title,
            panel.colors.len(),
            panel.entries.len()
        );
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let (w, h) = (size.0 as i32, size.1 as i32);

    let title_style = TextStyle::from(("sans-serif", 44).into_font().style(FontStyle::Bold))
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(title.to_string(), (w / 2, 40), title_style))?;

    let subtitle_style = TextStyle::from(("sans-serif", 24).into_font().style(FontStyle::Italic))
        .color(&palette::SUBTITLE_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(subtitle.to_string(), (w / 2, 90), subtitle_style))?;

    let panel_title_style = TextStyle::from(("sans-serif", 30).into_font().style(FontStyle::Bold))
        .pos(Pos::new(HPos::Center, VPos::Center));
    let name_style = TextStyle::from(("sans-serif", 22).into_font().style(FontStyle::Bold))
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let value_style = TextStyle::from(("sans-serif", 20).into_font())
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let side = 60;
    let gap = 120;
    let n_panels = panels.len() as i32;
    let panel_w = (w - 2 * side - gap * (n_panels - 1)) / n_panels;
    let arrow_len = 70;
    let bar_w = panel_w - arrow_len - 20;
    let rows_top = 190;
    let rows_bottom_margin = 40;

    for (k, panel) in panels.iter().enumerate() {
        let x0 = side + k as i32 * (panel_w + gap);
        root.draw(&Text::new(
            panel.title.clone(),
            (x0 + bar_w / 2, 150),
            panel_title_style.clone(),
        ))?;

        let rows = panel.entries.len() as i32;
        let pitch = (h - rows_top - rows_bottom_margin) / rows;
        let bar_h = (pitch as f64 * 0.7) as i32;

        for (i, entry) in panel.entries.iter().enumerate() {
            let color = panel.colors[i];
            let y0 = rows_top + i as i32 * pitch + (pitch - bar_h) / 2;
            let cy = y0 + bar_h / 2;

            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + bar_w, y0 + bar_h)],
                color.mix(0.85).filled(),
            ))?;
            root.draw(&Text::new(
                entry.name.clone(),
                (x0 + bar_w / 2, cy - 16),
                name_style.clone(),
            ))?;
            root.draw(&Text::new(
                entry.value.clone(),
                (x0 + bar_w / 2, cy + 16),
                value_style.clone(),
            ))?;

            // Arrow leading out of the row
            let ax0 = x0 + bar_w + 10;
            let ax1 = ax0 + arrow_len - 14;
            root.draw(&PathElement::new(
                vec![(ax0, cy), (ax1, cy)],
                palette::ARROW_COLOR.stroke_width(3),
            ))?;
            root.draw(&Polygon::new(
                vec![(ax1 + 14, cy), (ax1, cy - 8), (ax1, cy + 8)],
                palette::ARROW_COLOR.filled(),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_keeps_row_order() {
        let panel = KpiPanel::new(
            "Performance Metrics",
            vec![
                KpiEntry::new("AR Response Time", "< 100ms"),
                KpiEntry::new("Concurrent Users", "100+"),
            ],
            &palette::METRIC_ROW_COLORS,
        );
        assert_eq!(panel.entries[0].name, "AR Response Time");
        assert_eq!(panel.colors.len(), 4);
    }
}

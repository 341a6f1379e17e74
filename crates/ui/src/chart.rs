//! Painter-drawn cost/revenue chart: dark plot area, grid, tick labels,
//! axis captions, the two lines, and a hover readout of the nearest sample.

use bevy_egui::egui;

use engine::ChartSample;

use crate::formatting;

/// Line colors for the two series.
pub const COST_COLOR: egui::Color32 = egui::Color32::from_rgb(136, 132, 216);
pub const REVENUE_COLOR: egui::Color32 = egui::Color32::from_rgb(130, 202, 157);

const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 22.0;
const MARGIN_BOTTOM: f32 = 34.0;

pub fn draw_break_even_chart(ui: &mut egui::Ui, series: &[ChartSample], width: f32, height: f32) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(30));

    // Degenerate scenarios collapse to a single sample upstream; a series of
    // two or more points is always finite.
    if series.len() < 2 {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No chart: profit per plane must be positive",
            egui::FontId::proportional(13.0),
            egui::Color32::from_gray(140),
        );
        return;
    }

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + MARGIN_LEFT, rect.min.y + MARGIN_TOP),
        egui::pos2(rect.max.x - MARGIN_RIGHT, rect.max.y - MARGIN_BOTTOM),
    );

    let (min_val, max_val) = series_bounds(series);
    let range = (max_val - min_val).max(1.0);

    // Horizontal grid lines with dollar tick labels
    for step in 0..=4 {
        let frac = step as f32 / 4.0;
        let y = plot.max.y - frac * plot.height();
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(0.3, egui::Color32::from_gray(50)),
        );
        let amount = min_val + (max_val - min_val) * f64::from(frac);
        painter.text(
            egui::pos2(plot.min.x - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            formatting::fmt_amount(amount),
            egui::FontId::proportional(10.0),
            egui::Color32::from_gray(150),
        );
    }

    // Unit ticks along the x axis, every fifth sample
    for k in (0..series.len()).step_by(5) {
        let x = sample_x(plot, series.len(), k);
        painter.line_segment(
            [egui::pos2(x, plot.max.y), egui::pos2(x, plot.max.y + 3.0)],
            egui::Stroke::new(0.5, egui::Color32::from_gray(90)),
        );
        painter.text(
            egui::pos2(x, plot.max.y + 5.0),
            egui::Align2::CENTER_TOP,
            series[k].units.to_string(),
            egui::FontId::proportional(10.0),
            egui::Color32::from_gray(150),
        );
    }

    // Axis captions
    painter.text(
        egui::pos2(plot.center().x, rect.max.y - 3.0),
        egui::Align2::CENTER_BOTTOM,
        "Units Sold",
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(170),
    );
    painter.text(
        egui::pos2(rect.min.x + 4.0, rect.min.y + 4.0),
        egui::Align2::LEFT_TOP,
        "Amount ($)",
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(170),
    );

    draw_line(&painter, plot, series, min_val, range, |s| s.total_costs, COST_COLOR);
    draw_line(
        &painter,
        plot,
        series,
        min_val,
        range,
        |s| s.total_revenue,
        REVENUE_COLOR,
    );

    // Hover readout: vertical guide plus the nearest sample's figures
    if let Some(pos) = response.hover_pos() {
        if plot.contains(pos) {
            let k = nearest_index(series.len(), plot.min.x, plot.width(), pos.x);
            let sample = series[k];
            let x = sample_x(plot, series.len(), k);
            painter.line_segment(
                [egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)],
                egui::Stroke::new(0.5, egui::Color32::from_gray(120)),
            );
            response.on_hover_ui_at_pointer(|ui| {
                ui.label(format!("Units sold: {}", sample.units));
                ui.colored_label(
                    COST_COLOR,
                    format!("Total costs: {}", formatting::fmt_amount(sample.total_costs)),
                );
                ui.colored_label(
                    REVENUE_COLOR,
                    format!(
                        "Total revenue: {}",
                        formatting::fmt_amount(sample.total_revenue)
                    ),
                );
            });
        }
    }
}

/// Swatch + label, laid out inline.
pub fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(text);
}

fn draw_line(
    painter: &egui::Painter,
    plot: egui::Rect,
    series: &[ChartSample],
    min_val: f64,
    range: f64,
    value: impl Fn(&ChartSample) -> f64,
    color: egui::Color32,
) {
    let points: Vec<egui::Pos2> = series
        .iter()
        .enumerate()
        .map(|(k, sample)| {
            let x = sample_x(plot, series.len(), k);
            let y = plot.max.y - (((value(sample) - min_val) / range) as f32) * plot.height();
            egui::pos2(x, y)
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, color));
    }
}

fn sample_x(plot: egui::Rect, len: usize, k: usize) -> f32 {
    plot.min.x + (k as f32 / (len - 1) as f32) * plot.width()
}

/// Min/max over both lines, for a shared y scale.
fn series_bounds(series: &[ChartSample]) -> (f64, f64) {
    let mut min_val = f64::INFINITY;
    let mut max_val = f64::NEG_INFINITY;
    for sample in series {
        min_val = min_val.min(sample.total_costs).min(sample.total_revenue);
        max_val = max_val.max(sample.total_costs).max(sample.total_revenue);
    }
    (min_val, max_val)
}

/// Maps a hover x position back to the closest sample index.
fn nearest_index(len: usize, left: f32, width: f32, x: f32) -> usize {
    if len < 2 || width <= 0.0 {
        return 0;
    }
    let t = ((x - left) / width).clamp(0.0, 1.0);
    (t * (len - 1) as f32).round() as usize
}

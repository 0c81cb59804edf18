//! Comparison line chart painter.

use chrono::Duration;
use egui::{Color32, FontId, Rect, Stroke};
use stockplot_charts::{axis, palette, LineChart};

use super::{
    color32, draw_axis_titles, draw_empty_note, draw_value_axis, draw_x_labels, pad_range,
    PlotArea,
};

pub fn draw(ui: &mut egui::Ui, chart: &LineChart) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let panel = response.rect;

    let (dates, values) = match (chart.date_bounds(), chart.value_bounds()) {
        (Some(d), Some(v)) => (d, v),
        _ => {
            draw_empty_note(&painter, panel, "no rows to plot");
            return;
        }
    };

    // The x axis counts days since the first plotted date.
    let (first_date, last_date) = dates;
    let span_days = (last_date - first_date).num_days().max(1) as f64;
    let (y_min, y_max) = pad_range(values.0, values.1);
    let area = PlotArea::new(panel, (0.0, span_days), (y_min, y_max));

    let ticks = axis::value_ticks(y_min, y_max, chart.tick_spacing);
    draw_value_axis(&painter, &area, &ticks);

    let date_labels: Vec<(f64, String)> = axis::label_slots(span_days as usize + 1, 6)
        .into_iter()
        .map(|offset| {
            let date = first_date + Duration::days(offset as i64);
            (offset as f64, date.format("%d-%m-%Y").to_string())
        })
        .collect();
    draw_x_labels(&painter, &area, &date_labels, true);

    for (i, series) in chart.series.iter().enumerate() {
        let color = color32(palette::line_color(i));
        let points: Vec<egui::Pos2> = series
            .points
            .iter()
            .map(|&(date, close)| area.pos((date - first_date).num_days() as f64, close))
            .collect();

        if points.len() == 1 {
            painter.circle_filled(points[0], 2.5, color);
        } else if points.len() > 1 {
            painter.add(egui::Shape::line(points, Stroke::new(1.5, color)));
        }
    }

    draw_legend(&painter, &area, chart);
    draw_axis_titles(&painter, panel, &area, "Date", "Stock Prices (USD)");
}

/// Legend box in the top-left corner of the plot: one color swatch and
/// symbol per series.
fn draw_legend(painter: &egui::Painter, area: &PlotArea, chart: &LineChart) {
    if chart.series.is_empty() {
        return;
    }

    let font = FontId::proportional(13.0);
    let galleys: Vec<_> = chart
        .series
        .iter()
        .map(|s| painter.layout_no_wrap(s.symbol.to_string(), font.clone(), Color32::LIGHT_GRAY))
        .collect();

    let widest = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max);
    let row_height = 18.0;
    let rect = Rect::from_min_size(
        area.rect.left_top() + egui::vec2(10.0, 10.0),
        egui::vec2(widest + 38.0, galleys.len() as f32 * row_height + 8.0),
    );
    painter.rect_filled(rect, 4.0, Color32::from_rgba_unmultiplied(0, 0, 0, 160));

    for (i, galley) in galleys.into_iter().enumerate() {
        let y = rect.top() + 4.0 + i as f32 * row_height + row_height / 2.0;
        let color = color32(palette::line_color(i));
        painter.line_segment(
            [
                egui::pos2(rect.left() + 6.0, y),
                egui::pos2(rect.left() + 26.0, y),
            ],
            Stroke::new(2.0, color),
        );
        painter.galley(
            egui::pos2(rect.left() + 32.0, y - galley.size().y / 2.0),
            galley,
            Color32::LIGHT_GRAY,
        );
    }
}

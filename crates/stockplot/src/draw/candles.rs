//! Candlestick chart painter.

use egui::{Color32, Rect};
use stockplot_charts::candles::{BODY_WIDTH, SLOT_SPACING, WICK_RATIO};
use stockplot_charts::{axis, palette, CandleBar, CandleChart};

use super::{
    color32, draw_axis_titles, draw_empty_note, draw_value_axis, draw_x_labels, pad_range,
    PlotArea,
};

/// Minimum candle body width in pixels, so dense charts stay readable.
const MIN_BODY_PIXELS: f32 = 3.0;

pub fn draw(ui: &mut egui::Ui, chart: &CandleChart) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let panel = response.rect;

    let bounds = match chart.price_bounds() {
        Some(b) => b,
        None => {
            draw_empty_note(&painter, panel, "no rows in the requested window");
            return;
        }
    };

    let (y_min, y_max) = pad_range(bounds.0, bounds.1);
    let x_max = chart.slots as f64 * f64::from(SLOT_SPACING);
    let area = PlotArea::new(panel, (0.0, x_max), (y_min, y_max));

    let ticks = axis::value_ticks(y_min, y_max, None);
    draw_value_axis(&painter, &area, &ticks);

    let date_labels: Vec<(f64, String)> = axis::label_slots(chart.slots, 6)
        .into_iter()
        .filter_map(|slot| {
            chart
                .date_at(slot)
                .map(|date| (slot_center(slot), date.format("%d-%m-%Y").to_string()))
        })
        .collect();
    draw_x_labels(&painter, &area, &date_labels, false);

    // Pixel widths derive from the slot geometry, clamped so thin candles
    // stay visible when many slots share the plot.
    let slot_px = area.rect.width() / chart.slots as f32;
    let body_px = (slot_px * (BODY_WIDTH / SLOT_SPACING)).max(MIN_BODY_PIXELS);
    let wick_px = (slot_px * WICK_RATIO).max(1.0);

    let up = color32(palette::UP_COLOR);
    for bar in &chart.up {
        draw_bar(&painter, &area, bar, body_px, wick_px, up);
    }
    let down = color32(palette::DOWN_COLOR);
    for bar in &chart.down {
        draw_bar(&painter, &area, bar, body_px, wick_px, down);
    }

    draw_axis_titles(&painter, panel, &area, "Date", "Price (USD)");
}

fn slot_center(slot: usize) -> f64 {
    (slot as f64 + 0.5) * f64::from(SLOT_SPACING)
}

fn draw_bar(
    painter: &egui::Painter,
    area: &PlotArea,
    bar: &CandleBar,
    body_px: f32,
    wick_px: f32,
    color: Color32,
) {
    let finite = bar.open.is_finite()
        && bar.high.is_finite()
        && bar.low.is_finite()
        && bar.close.is_finite();
    if !finite {
        return;
    }

    let x = area.x(slot_center(bar.slot));

    // Wick spans low..high behind the body.
    let wick = Rect::from_min_max(
        egui::pos2(x - wick_px / 2.0, area.y(bar.high)),
        egui::pos2(x + wick_px / 2.0, area.y(bar.low)),
    );
    painter.rect_filled(wick, 0.0, color);

    // Body spans open..close; a flat day still gets one pixel.
    let top = area.y(bar.open.max(bar.close));
    let bottom = area.y(bar.open.min(bar.close)).max(top + 1.0);
    let body = Rect::from_min_max(
        egui::pos2(x - body_px / 2.0, top),
        egui::pos2(x + body_px / 2.0, bottom),
    );
    painter.rect_filled(body, 0.0, color);
}

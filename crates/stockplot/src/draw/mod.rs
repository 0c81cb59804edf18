//! Chart painting over `egui::Painter`.
//!
//! One module per chart kind, plus the shared plot-area mapping and axis
//! painting used by the rectangular charts.

pub mod candles;
pub mod donut;
pub mod line;

use egui::{Color32, FontId, Pos2, Rect, Stroke};
use stockplot_charts::palette;

// Margins around the plot rect, leaving room for axis labels.
const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 48.0;

pub(crate) fn color32(rgb: [f32; 3]) -> Color32 {
    Color32::from_rgb(
        (rgb[0] * 255.0) as u8,
        (rgb[1] * 255.0) as u8,
        (rgb[2] * 255.0) as u8,
    )
}

/// Pads a value range by 5% per side; a degenerate (zero-width) range is
/// split open so the mapping below never divides by zero.
pub(crate) fn pad_range(min: f64, max: f64) -> (f64, f64) {
    let range = max - min;
    if range > 0.0 {
        (min - range * 0.05, max + range * 0.05)
    } else {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        (min - pad, max + pad)
    }
}

/// Maps chart-space values into a screen rectangle.
///
/// Screen y grows downward, so the y mapping flips: `y_max` lands on the
/// rect top, `y_min` on the bottom.
pub(crate) struct PlotArea {
    pub rect: Rect,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlotArea {
    /// Carves the plot rect out of a panel, leaving the label margins.
    /// Both ranges must be non-degenerate.
    pub fn new(panel: Rect, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        let rect = Rect::from_min_max(
            egui::pos2(panel.left() + MARGIN_LEFT, panel.top() + MARGIN_TOP),
            egui::pos2(panel.right() - MARGIN_RIGHT, panel.bottom() - MARGIN_BOTTOM),
        );
        Self {
            rect,
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
        }
    }

    pub fn x(&self, value: f64) -> f32 {
        let t = (value - self.x_min) / (self.x_max - self.x_min);
        self.rect.left() + t as f32 * self.rect.width()
    }

    pub fn y(&self, value: f64) -> f32 {
        let t = (value - self.y_min) / (self.y_max - self.y_min);
        self.rect.bottom() - t as f32 * self.rect.height()
    }

    pub fn pos(&self, x: f64, y: f64) -> Pos2 {
        egui::pos2(self.x(x), self.y(y))
    }
}

/// Horizontal gridline plus a left-edge label for every tick.
pub(crate) fn draw_value_axis(painter: &egui::Painter, area: &PlotArea, ticks: &[f64]) {
    let grid = color32(palette::GRID_COLOR);
    for &tick in ticks {
        let y = area.y(tick);
        painter.line_segment(
            [
                egui::pos2(area.rect.left(), y),
                egui::pos2(area.rect.right(), y),
            ],
            Stroke::new(1.0, grid),
        );
        painter.text(
            egui::pos2(area.rect.left() - 8.0, y),
            egui::Align2::RIGHT_CENTER,
            format_tick(tick),
            FontId::proportional(12.0),
            Color32::LIGHT_GRAY,
        );
    }
}

/// Bottom-edge label (and optional vertical gridline) for every `(x, text)`
/// pair.
pub(crate) fn draw_x_labels(
    painter: &egui::Painter,
    area: &PlotArea,
    labels: &[(f64, String)],
    gridlines: bool,
) {
    let grid = color32(palette::GRID_COLOR);
    for (x_value, text) in labels {
        let x = area.x(*x_value);
        if gridlines {
            painter.line_segment(
                [
                    egui::pos2(x, area.rect.top()),
                    egui::pos2(x, area.rect.bottom()),
                ],
                Stroke::new(1.0, grid),
            );
        }
        painter.text(
            egui::pos2(x, area.rect.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            text,
            FontId::proportional(12.0),
            Color32::LIGHT_GRAY,
        );
    }
}

/// Axis titles: x centered below the plot, y rotated along the left edge.
pub(crate) fn draw_axis_titles(
    painter: &egui::Painter,
    panel: Rect,
    area: &PlotArea,
    x_title: &str,
    y_title: &str,
) {
    let font = FontId::proportional(13.0);

    painter.text(
        egui::pos2(area.rect.center().x, panel.bottom() - 4.0),
        egui::Align2::CENTER_BOTTOM,
        x_title,
        font.clone(),
        Color32::LIGHT_GRAY,
    );

    let galley = painter.layout_no_wrap(y_title.to_string(), font, Color32::LIGHT_GRAY);
    let pos = egui::pos2(
        panel.left() + 4.0,
        area.rect.center().y + galley.size().x / 2.0,
    );
    painter.add(
        egui::epaint::TextShape::new(pos, galley, Color32::LIGHT_GRAY)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );
}

/// Centered placeholder when a chart has nothing to paint.
pub(crate) fn draw_empty_note(painter: &egui::Painter, panel: Rect, text: &str) {
    painter.text(
        panel.center(),
        egui::Align2::CENTER_CENTER,
        text,
        FontId::proportional(14.0),
        Color32::GRAY,
    );
}

/// Tick label text: whole numbers plain, fractional steps with two digits.
pub(crate) fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_100x100() -> PlotArea {
        // Margins: left 70, right 20, top 20, bottom 48.
        let panel = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(190.0, 168.0));
        PlotArea::new(panel, (0.0, 10.0), (0.0, 100.0))
    }

    #[test]
    fn test_plot_area_maps_corners() {
        let area = area_100x100();
        assert_eq!(area.rect.width(), 100.0);
        assert_eq!(area.rect.height(), 100.0);

        // x_min/y_min is the bottom-left corner on screen.
        let bottom_left = area.pos(0.0, 0.0);
        assert_eq!(bottom_left.x, area.rect.left());
        assert_eq!(bottom_left.y, area.rect.bottom());

        let top_right = area.pos(10.0, 100.0);
        assert_eq!(top_right.x, area.rect.right());
        assert_eq!(top_right.y, area.rect.top());
    }

    #[test]
    fn test_plot_area_y_grows_upward() {
        let area = area_100x100();
        assert!(area.y(75.0) < area.y(25.0));
    }

    #[test]
    fn test_pad_range_splits_flat_ranges() {
        let (min, max) = pad_range(50.0, 50.0);
        assert!(min < 50.0 && 50.0 < max);

        let (min, max) = pad_range(0.0, 0.0);
        assert!(min < 0.0 && 0.0 < max);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(200.0), "200");
        assert_eq!(format_tick(0.6000000000000001), "0.60");
    }
}

//! Donut chart painter.

use std::f32::consts::TAU;

use egui::{Color32, FontId, Pos2};
use stockplot_charts::{palette, DonutChart};

use super::{color32, draw_empty_note};

/// Ring thickness as a share of the outer radius.
const RING_RATIO: f32 = 0.42;
/// Angular step used to tessellate slice arcs, radians.
const ARC_STEP: f32 = 0.05;
/// Slices thinner than this skip their in-band percentage label.
const MIN_LABELED_FRACTION: f64 = 0.03;

pub fn draw(ui: &mut egui::Ui, chart: &DonutChart) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let panel = response.rect;

    if chart.is_empty() {
        draw_empty_note(&painter, panel, "no symbols to rank");
        return;
    }

    let center = panel.center();
    // Leave room around the ring for the symbol labels.
    let outer = (panel.width().min(panel.height()) * 0.5 - 60.0).max(10.0);
    let inner = outer * (1.0 - RING_RATIO);

    // The chart arrives sorted by value descending; slices start at
    // 12 o'clock and run clockwise, so the biggest slice reads first.
    let mut angle = 0.0_f32;
    for (i, slice) in chart.slices.iter().enumerate() {
        let sweep = slice.fraction as f32 * TAU;
        let color = color32(palette::donut_color(i));
        painter.add(ring_slice(center, inner, outer, angle, angle + sweep, color));

        let mid = angle + sweep / 2.0;
        painter.text(
            center + dir(mid) * (outer + 14.0),
            label_align(mid),
            slice.symbol.as_str(),
            FontId::proportional(13.0),
            Color32::LIGHT_GRAY,
        );
        if slice.fraction >= MIN_LABELED_FRACTION {
            painter.text(
                center + dir(mid) * ((inner + outer) / 2.0),
                egui::Align2::CENTER_CENTER,
                format!("{:.1}%", slice.fraction * 100.0),
                FontId::proportional(11.0),
                Color32::WHITE,
            );
        }

        angle += sweep;
    }

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        format!("top {} by last close", chart.slices.len()),
        FontId::proportional(12.0),
        Color32::GRAY,
    );
}

/// Unit vector for an angle measured clockwise from 12 o'clock.
fn dir(angle: f32) -> egui::Vec2 {
    egui::vec2(angle.sin(), -angle.cos())
}

/// Anchors symbol text on the side of the ring it sits on, so labels grow
/// away from the chart instead of into it.
fn label_align(angle: f32) -> egui::Align2 {
    let x = angle.sin();
    if x > 0.3 {
        egui::Align2::LEFT_CENTER
    } else if x < -0.3 {
        egui::Align2::RIGHT_CENTER
    } else if angle.cos() > 0.0 {
        egui::Align2::CENTER_BOTTOM
    } else {
        egui::Align2::CENTER_TOP
    }
}

/// Filled ring segment between two angles, tessellated into quads.
fn ring_slice(
    center: Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: Color32,
) -> egui::Shape {
    let steps = (((end - start) / ARC_STEP).ceil() as usize).max(1);
    let mut mesh = egui::Mesh::default();
    for i in 0..=steps {
        let angle = start + (end - start) * i as f32 / steps as f32;
        let d = dir(angle);
        mesh.colored_vertex(center + d * outer, color);
        mesh.colored_vertex(center + d * inner, color);
    }
    for i in 0..steps as u32 {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    egui::Shape::mesh(mesh)
}

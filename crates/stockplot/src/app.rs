//! eframe viewer window.

use anyhow::Result;
use stockplot_charts::{CandleChart, DonutChart, LineChart};
use stockplot_config::Config;

use crate::draw;

/// A chart ready to present.
pub enum Chart {
    Lines(LineChart),
    Donut(DonutChart),
    Candles(CandleChart),
}

impl Chart {
    fn title(&self) -> String {
        match self {
            Chart::Lines(chart) => {
                let labels: Vec<&str> =
                    chart.series.iter().map(|s| s.symbol.as_str()).collect();
                format!("stockplot - {}", labels.join(" vs "))
            }
            Chart::Donut(chart) => {
                format!("stockplot - top {} by last close", chart.slices.len())
            }
            Chart::Candles(chart) => format!("stockplot - {} daily", chart.symbol),
        }
    }
}

/// Opens a window and paints the chart until the user closes it.
/// Escape closes the window.
pub fn run_viewer(config: &Config, chart: Chart) -> Result<()> {
    let title = chart.title();
    log::info!("opening viewer: {title}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp { chart }))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

struct ChartApp {
    chart: Chart,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.chart {
            Chart::Lines(chart) => draw::line::draw(ui, chart),
            Chart::Donut(chart) => draw::donut::draw(ui, chart),
            Chart::Candles(chart) => draw::candles::draw(ui, chart),
        });
    }
}

use eframe::egui::{Color32, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, LineStyle, MarkerShape, Plot, PlotPoints,
    Points, VLine,
};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Label distribution figure (central panel)
// ---------------------------------------------------------------------------

/// Render the label distribution figure: a histogram with dashed mean and
/// median markers stacked above a horizontal boxplot, as two plot panels.
pub fn distribution_charts(ui: &mut Ui, state: &AppState) {
    let summary = match &state.summary {
        Some(s) => s,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view the label distribution  (File → Open…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Label Distribution");
    });
    ui.add_space(4.0);

    let panel_height = (ui.available_height() - 8.0) / 2.0;

    // ---- Histogram with mean / median markers ----
    let hist = &summary.histogram;
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bar::new(hist.bin_center(i), count as f64).width(hist.bin_width))
        .collect();

    Plot::new("label_histogram")
        .height(panel_height)
        .legend(Legend::default())
        .x_axis_label(&summary.column)
        .y_axis_label("Count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name(&summary.column)
                    .color(Color32::LIGHT_BLUE),
            );
            plot_ui.vline(
                VLine::new(summary.mean)
                    .name("Mean")
                    .color(Color32::RED)
                    .style(LineStyle::Dashed { length: 10.0 })
                    .width(2.0),
            );
            plot_ui.vline(
                VLine::new(summary.median)
                    .name("Median")
                    .color(Color32::BLUE)
                    .style(LineStyle::Dashed { length: 10.0 })
                    .width(2.0),
            );
        });

    ui.add_space(8.0);

    // ---- Horizontal boxplot ----
    let stats = &summary.box_stats;
    let spread = BoxSpread::new(
        stats.whisker_low,
        stats.q1,
        stats.median,
        stats.q3,
        stats.whisker_high,
    );
    let elem = BoxElem::new(0.0, spread)
        .name(&summary.column)
        .box_width(0.5)
        .whisker_width(0.4)
        .fill(Color32::LIGHT_BLUE.gamma_multiply(0.4))
        .stroke((1.5, Color32::LIGHT_BLUE));

    let outliers: PlotPoints = stats.outliers.iter().map(|&v| [v, 0.0]).collect();

    Plot::new("label_boxplot")
        .height(ui.available_height())
        .x_axis_label(&summary.column)
        .show_y(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(
                BoxPlot::new(vec![elem])
                    .horizontal()
                    .name(&summary.column),
            );
            plot_ui.points(
                Points::new(outliers)
                    .name("Outliers")
                    .shape(MarkerShape::Circle)
                    .radius(2.5)
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Title word frequency chart
// ---------------------------------------------------------------------------

/// Render the top title words as a bar chart.
pub fn word_chart(ui: &mut Ui, state: &AppState) {
    let has_titles = state
        .dataset
        .as_ref()
        .is_some_and(|ds| ds.columns.title);
    if !has_titles {
        ui.label("No Title column in this file.");
        return;
    }

    let words = &state.analysis.top_words;
    if words.is_empty() {
        ui.label("No title words in the filtered listings.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("Top {} title words", words.len()));
        if ui.small_button("Copy as JSON").clicked() {
            match state.words_json() {
                Ok(json) => ui.ctx().copy_text(json),
                Err(e) => log::error!("Failed to serialise word counts: {e}"),
            }
        }
    });

    let bars: Vec<Bar> = words
        .iter()
        .enumerate()
        .map(|(i, wc)| {
            Bar::new(i as f64, wc.count as f64)
                .name(&wc.word)
                .width(0.7)
        })
        .collect();

    // Category axis: bar i is labelled with word i.
    let labels: Vec<String> = words.iter().map(|wc| wc.word.clone()).collect();

    Plot::new("word_chart")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE));
        });
}

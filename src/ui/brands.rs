use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::state::AppState;

const NO_BRAND: &str = "(no brand)";

fn format_avg(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_else(|| "–".to_string())
}

/// Render the per-brand summary table.
pub fn brand_table(ui: &mut Ui, state: &AppState) {
    let has_brands = state
        .dataset
        .as_ref()
        .is_some_and(|ds| ds.columns.brand);
    if !has_brands {
        ui.label("No Brand column in this file.");
        return;
    }

    let summaries = &state.analysis.brands;
    if summaries.is_empty() {
        ui.label("No listings match the current filters.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} brands", summaries.len()));
        if ui.small_button("Copy as JSON").clicked() {
            match state.brands_json() {
                Ok(json) => ui.ctx().copy_text(json),
                Err(e) => log::error!("Failed to serialise brand summary: {e}"),
            }
        }
    });

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(TableColumn::initial(240.0).at_least(100.0).clip(true))
        .column(TableColumn::auto().at_least(60.0))
        .column(TableColumn::auto().at_least(90.0))
        .column(TableColumn::remainder().at_least(90.0))
        .header(24.0, |mut header| {
            for title in ["Brand", "Count", "Avg BSR", "Avg Price"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, summaries.len(), |mut row| {
                let summary = &summaries[row.index()];
                let color = state
                    .brand_colors
                    .as_ref()
                    .map(|c| c.color_for(summary.brand.as_deref()))
                    .unwrap_or(Color32::GRAY);

                row.col(|ui: &mut Ui| {
                    let name = summary.brand.as_deref().unwrap_or(NO_BRAND);
                    ui.label(RichText::new(name).color(color));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(summary.count.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format_avg(summary.avg_rank, 0));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format_avg(summary.avg_price, 2));
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_avg() {
        assert_eq!(format_avg(Some(1234.4), 0), "1234");
        assert_eq!(format_avg(Some(9.999), 2), "10.00");
        assert_eq!(format_avg(None, 2), "–");
    }
}

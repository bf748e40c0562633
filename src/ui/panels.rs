use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Slider, Ui};

use crate::state::{AppState, Status};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter options");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let columns = dataset.columns;

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Keyword ----
            ui.strong("Keyword");
            let mut keyword = state.keyword_input.clone();
            let response = ui.add_enabled(
                columns.title,
                egui::TextEdit::singleline(&mut keyword).hint_text("substring of title"),
            );
            if response.changed() {
                state.set_keyword(&keyword);
            }
            if !columns.title {
                inactive_note(ui, "Title");
            }
            ui.separator();

            // ---- BSR range ----
            ui.strong("BSR range");
            ui.add_enabled_ui(columns.rank, |ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Min");
                    changed |= ui
                        .add(
                            DragValue::new(&mut state.criteria.rank_min)
                                .speed(100.0)
                                .range(0..=i64::MAX),
                        )
                        .changed();
                });
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Max");
                    changed |= ui
                        .add(
                            DragValue::new(&mut state.criteria.rank_max)
                                .speed(100.0)
                                .range(0..=i64::MAX),
                        )
                        .changed();
                });
            });
            if !columns.rank {
                inactive_note(ui, "BSR");
            }
            ui.separator();

            // ---- Price range ----
            ui.strong("Price range");
            ui.add_enabled_ui(columns.price, |ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Min");
                    changed |= ui
                        .add(
                            DragValue::new(&mut state.criteria.price_min)
                                .speed(0.5)
                                .range(0.0..=f64::MAX)
                                .fixed_decimals(2),
                        )
                        .changed();
                });
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Max");
                    changed |= ui
                        .add(
                            DragValue::new(&mut state.criteria.price_max)
                                .speed(0.5)
                                .range(0.0..=f64::MAX)
                                .fixed_decimals(2),
                        )
                        .changed();
                });
            });
            if !columns.price {
                inactive_note(ui, "Price");
            }
            ui.separator();

            // ---- Word table size ----
            ui.strong("Top title words");
            changed |= ui
                .add(Slider::new(&mut state.criteria.top_n, 1..=100).text("words"))
                .changed();
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }

            ui.add_space(8.0);
            let present: Vec<&str> = columns.present().iter().map(|c| c.header()).collect();
            ui.label(
                RichText::new(format!("Columns: {}", present.join(", ")))
                    .small()
                    .weak(),
            );
        });

    if changed {
        state.rerun();
    }
}

fn inactive_note(ui: &mut Ui, column: &str) {
    ui.label(
        RichText::new(format!("No {column} column – filter inactive"))
            .small()
            .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = state.source_name.as_deref().unwrap_or("dataset");
            ui.label(format!(
                "{source}: {} listings loaded, {} visible",
                ds.len(),
                state.analysis.listings.len()
            ));
            ui.separator();
        }

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(format!("✔ {msg}")).color(Color32::LIGHT_GREEN));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listing export")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset, name),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }
}

use chrono::NaiveDateTime;
use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::{Column, Listing};
use crate::data::sort::SortDirection;
use crate::state::AppState;

const THUMB_SIZE: f32 = 80.0;
const TEXT_ROW_HEIGHT: f32 = 22.0;

/// Thumbnail URL for a product identifier.
pub fn image_url(id: &str) -> String {
    format!("https://m.media-amazon.com/images/I/{id}.jpg")
}

fn arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "⬆",
        SortDirection::Descending => "⬇",
    }
}

fn format_date(date: &NaiveDateTime) -> String {
    if date.time() == chrono::NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Text for one non-image cell.
fn cell_text(listing: &Listing, column: Column) -> String {
    match column {
        Column::Title => listing.title.clone().unwrap_or_default(),
        Column::Brand => listing.brand.clone().unwrap_or_default(),
        Column::Price => listing.price.map(|p| format!("{p:.2}")).unwrap_or_default(),
        Column::Rank => listing.rank.map(|r| r.to_string()).unwrap_or_default(),
        Column::Date => listing.date.as_ref().map(format_date).unwrap_or_default(),
        Column::Id => listing.id.clone().unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Listings table (central panel, first tab)
// ---------------------------------------------------------------------------

/// Render the filtered listings with sortable headers and thumbnails.
pub fn listings_table(ui: &mut Ui, state: &mut AppState) {
    let rows = &state.table_rows;
    let show_images = rows.columns.id;

    // Image is drawn from the ASIN column, so ASIN itself is not repeated.
    let shown: Vec<Column> = [
        Column::Title,
        Column::Brand,
        Column::Price,
        Column::Rank,
        Column::Date,
    ]
    .into_iter()
    .filter(|c| rows.columns.has(*c))
    .collect();

    if show_images {
        ui.label(RichText::new("Showing image previews from ASINs").weak());
    }
    if rows.is_empty() {
        ui.label("No listings match the current filters.");
        return;
    }

    let row_height = if show_images { THUMB_SIZE } else { TEXT_ROW_HEIGHT };
    let mut clicked: Option<Column> = None;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    if show_images {
        builder = builder.column(TableColumn::exact(THUMB_SIZE + 8.0));
    }
    for column in &shown {
        builder = match column {
            Column::Title => builder.column(TableColumn::initial(360.0).at_least(120.0).clip(true)),
            _ => builder.column(TableColumn::auto().at_least(70.0)),
        };
    }

    builder
        .header(TEXT_ROW_HEIGHT + 4.0, |mut header| {
            if show_images {
                header.col(|ui: &mut Ui| {
                    ui.strong("Image");
                });
            }
            for column in &shown {
                header.col(|ui: &mut Ui| {
                    let label = match state.sort {
                        Some((key, direction)) if key == *column => {
                            format!("{} {}", column.header(), arrow(direction))
                        }
                        _ => column.header().to_string(),
                    };
                    if ui.button(RichText::new(label).strong()).clicked() {
                        clicked = Some(*column);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(row_height, rows.len(), |mut row| {
                let listing = &rows.rows[row.index()];
                if show_images {
                    row.col(|ui: &mut Ui| {
                        if let Some(id) = &listing.id {
                            ui.add(
                                egui::Image::new(image_url(id))
                                    .max_width(THUMB_SIZE)
                                    .max_height(THUMB_SIZE),
                            );
                        }
                    });
                }
                for column in &shown {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell_text(listing, *column));
                    });
                }
            });
        });

    if let Some(column) = clicked {
        state.toggle_sort(column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("B0ABC12345"),
            "https://m.media-amazon.com/images/I/B0ABC12345.jpg"
        );
    }

    #[test]
    fn test_cell_text_blank_for_missing() {
        let listing = Listing {
            title: Some("Cat Tee".into()),
            price: Some(19.5),
            ..Listing::default()
        };
        assert_eq!(cell_text(&listing, Column::Title), "Cat Tee");
        assert_eq!(cell_text(&listing, Column::Price), "19.50");
        assert_eq!(cell_text(&listing, Column::Rank), "");
        assert_eq!(cell_text(&listing, Column::Brand), "");
    }

    #[test]
    fn test_date_shows_time_only_when_set() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(&day.and_hms_opt(0, 0, 0).unwrap()), "2024-03-09");
        assert_eq!(
            format_date(&day.and_hms_opt(14, 5, 0).unwrap()),
            "2024-03-09 14:05"
        );
    }
}

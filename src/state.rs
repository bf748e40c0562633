use crate::analysis::{self, Analysis};
use crate::color::BrandColors;
use crate::data::filter::FilterCriteria;
use crate::data::model::{Column, Listings};
use crate::data::sort::{SortDirection, sort_listings};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Central-panel view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Listings,
    Words,
    Brands,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Listings, Tab::Words, Tab::Brands];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Listings => "Listings",
            Tab::Words => "Top title words",
            Tab::Brands => "Brand summary",
        }
    }
}

/// Message shown in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded listings (None until user opens a file).
    pub dataset: Option<Listings>,

    /// File name of the loaded dataset.
    pub source_name: Option<String>,

    /// Current filter widget values.
    pub criteria: FilterCriteria,

    /// Text box contents; copied into `criteria.keyword` on edit.
    pub keyword_input: String,

    /// Result of the last pipeline run.
    pub analysis: Analysis,

    /// Active table sort, if any.
    pub sort: Option<(Column, SortDirection)>,

    /// `analysis.listings` in table order (cached).
    pub table_rows: Listings,

    /// Stable brand colours for the loaded dataset.
    pub brand_colors: Option<BrandColors>,

    pub tab: Tab,

    pub status: Option<Status>,
}

impl AppState {
    /// Ingest a newly loaded dataset and run the pipeline with the current
    /// criteria.
    pub fn set_dataset(&mut self, dataset: Listings, source_name: String) {
        self.brand_colors = Some(BrandColors::for_listings(&dataset));
        self.status = Some(Status::Info("File loaded successfully".to_string()));
        self.source_name = Some(source_name);
        self.sort = None;
        self.dataset = Some(dataset);
        self.rerun();
    }

    /// Recompute the analysis after a criteria change.
    pub fn rerun(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.analysis = analysis::run(ds, &self.criteria);
        self.resort();
    }

    fn resort(&mut self) {
        self.table_rows = match self.sort {
            Some((column, direction)) => {
                sort_listings(&self.analysis.listings, column, direction)
            }
            None => self.analysis.listings.clone(),
        };
    }

    /// Apply the keyword text box.
    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword_input = keyword.to_string();
        self.criteria.keyword = if keyword.is_empty() {
            None
        } else {
            Some(keyword.to_string())
        };
        self.rerun();
    }

    /// Restore the default criteria.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.keyword_input.clear();
        self.rerun();
    }

    /// Header click: sort by `column`, or reverse if it is already the key.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => {
                Some((column, direction.reversed()))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
        self.resort();
    }

    /// Current brand summary as pretty-printed JSON.
    pub fn brands_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.analysis.brands)
    }

    /// Current word counts as pretty-printed JSON.
    pub fn words_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.analysis.top_words)
    }
}

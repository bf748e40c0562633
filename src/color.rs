use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Listings;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Brand → Color32
// ---------------------------------------------------------------------------

/// Assigns each brand of a dataset a distinct colour.
///
/// Built once per loaded file so a brand keeps its colour while filters
/// change. Listings without a brand use the default colour.
#[derive(Debug, Clone)]
pub struct BrandColors {
    mapping: HashMap<String, Color32>,
    default_color: Color32,
}

impl BrandColors {
    pub fn for_listings(listings: &Listings) -> Self {
        let mut brands: Vec<&str> = listings
            .iter()
            .filter_map(|row| row.brand.as_deref())
            .collect();
        brands.sort_unstable();
        brands.dedup();

        let palette = generate_palette(brands.len());
        let mapping = brands
            .into_iter()
            .zip(palette)
            .map(|(b, c)| (b.to_string(), c))
            .collect();

        BrandColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a brand.
    pub fn color_for(&self, brand: Option<&str>) -> Color32 {
        brand
            .and_then(|b| self.mapping.get(b))
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Columns, Listing};

    fn branded(brand: Option<&str>) -> Listing {
        Listing {
            brand: brand.map(str::to_string),
            ..Listing::default()
        }
    }

    #[test]
    fn test_palette_size_and_distinct() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        assert_ne!(p[0], p[2]);
    }

    #[test]
    fn test_brand_colors() {
        let listings = Listings::new(
            vec![branded(Some("B")), branded(None), branded(Some("A")), branded(Some("B"))],
            Columns::all(),
        );
        let colors = BrandColors::for_listings(&listings);

        assert_ne!(colors.color_for(Some("A")), colors.color_for(Some("B")));
        assert_eq!(colors.color_for(None), Color32::GRAY);
        assert_eq!(colors.color_for(Some("unknown")), Color32::GRAY);
    }
}

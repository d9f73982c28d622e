//! # nabha-stock
//!
//! Pharmacy medicine availability lookup for Nabha Health.
//!
//! ## Overview
//!
//! A [`Catalog`] holds medicines with nested per-pharmacy stock entries. The
//! [`filter`](filter::filter) function narrows it by a free-text query, and a
//! [`StockView`] holds one screen's search term and location selection.
//! [`render`] turns the visible list into plain-text cards.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use nabha_stock::{Catalog, StockView};
//!
//! let mut view = StockView::new(Catalog::sample());
//! view.set_search_term("para");
//! assert_eq!(view.visible()[0].name, "Paracetamol 500mg");
//! ```

pub mod catalog;
pub mod filter;
pub mod mock_data;
pub mod render;
pub mod view;

pub use catalog::{Catalog, CatalogConfig};
pub use view::StockView;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use nabha_contracts::{Location, Medicine, NabhaError, PharmacyStock, StockStatus};

    use crate::{
        filter::{filter, matches},
        render, Catalog, StockView,
    };

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn names(medicines: &[&Medicine]) -> Vec<String> {
        medicines.iter().map(|m| m.name.clone()).collect()
    }

    /// True if every element of `sub` appears in `full` in the same order.
    fn is_ordered_subsequence(sub: &[&Medicine], full: &[Medicine]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f.id == s.id))
    }

    const SHIPPED_CATALOG: &str = include_str!("../catalogs/nabha.toml");

    const SAMPLE_TOML: &str = r#"
        [[medicines]]
        id = 10
        name = "Cetirizine 10mg"
        category = "Allergy"

        [[medicines.pharmacies]]
        name = "City Pharmacy"
        location = "Bus Stand"
        stock = "Low Stock"
        quantity = "4 strips"
        phone = "+91-9876543211"

        [[medicines]]
        id = 11
        name = "ORS Sachet"
        category = "Hydration"
    "#;

    // ── 1. filter contract ────────────────────────────────────────────────────

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let catalog = Catalog::sample();
        let all = filter(catalog.medicines(), "");
        assert_eq!(all.len(), 5);
        let expected: Vec<&Medicine> = catalog.medicines().iter().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_para_matches_only_paracetamol() {
        let catalog = Catalog::sample();
        assert_eq!(names(&catalog.search("para")), vec!["Paracetamol 500mg"]);
    }

    #[test]
    fn test_match_is_case_insensitive_on_name_and_category() {
        let catalog = Catalog::sample();
        assert_eq!(names(&catalog.search("PARA")), vec!["Paracetamol 500mg"]);
        assert_eq!(names(&catalog.search("antibiotic")), vec!["Amoxicillin 250mg"]);
        assert_eq!(names(&catalog.search("DEVICE")), vec!["Blood Pressure Monitor"]);
    }

    #[test]
    fn test_unmatched_query_returns_empty() {
        let catalog = Catalog::sample();
        assert!(catalog.search("xyz-not-found").is_empty());
    }

    #[test]
    fn test_results_preserve_catalog_order() {
        let catalog = Catalog::sample();
        for query in ["", "e", "in", "mg", "o", "s", "xyz"] {
            let result = catalog.search(query);
            assert!(
                is_ordered_subsequence(&result, catalog.medicines()),
                "query {query:?} broke catalog order"
            );
        }
        // "Pain Relief" matches on category.
        assert_eq!(
            names(&catalog.search("in")),
            vec![
                "Paracetamol 500mg",
                "Amoxicillin 250mg",
                "Crocin Advance",
                "Insulin Injection"
            ]
        );
    }

    #[test]
    fn test_membership_matches_predicate_exactly() {
        let catalog = Catalog::sample();
        for query in ["a", "Re", "diab", "500", "monitor", "Fever", "zz"] {
            let result = catalog.search(query);
            let q = query.to_lowercase();
            for med in catalog.medicines() {
                let expected = med.name.to_lowercase().contains(&q)
                    || med.category.to_lowercase().contains(&q);
                let present = result.iter().any(|m| m.id == med.id);
                assert_eq!(present, expected, "query {query:?}, medicine {}", med.name);
            }
        }
    }

    #[test]
    fn test_single_medicine_predicate() {
        let catalog = Catalog::sample();
        let insulin = &catalog.medicines()[3];
        assert!(matches(insulin, "DIABETES"));
        assert!(matches(insulin, "jection"));
        assert!(matches(insulin, ""));
        assert!(!matches(insulin, "vials"));
    }

    #[test]
    fn test_pharmacy_fields_are_not_searched() {
        let catalog = Catalog::sample();
        assert!(catalog.search("Wellness").is_empty());
        assert!(catalog.search("Bus Stand").is_empty());
    }

    // ── 2. view state ─────────────────────────────────────────────────────────

    #[test]
    fn test_clearing_search_restores_full_list() {
        let mut view = StockView::new(Catalog::sample());
        view.set_search_term("xyz-not-found");
        assert!(view.is_empty_result());

        view.clear_search();
        assert_eq!(view.search_term(), "");
        assert_eq!(view.visible().len(), 5);
    }

    #[test]
    fn test_keystrokes_recompute_visible_list() {
        let mut view = StockView::default();
        for c in "ins".chars() {
            view.push_char(c);
        }
        assert_eq!(names(&view.visible()), vec!["Insulin Injection"]);

        view.pop_char();
        view.pop_char();
        // Every sample medicine has an 'i' in its name or category.
        assert_eq!(view.visible().len(), 5);

        view.pop_char();
        view.pop_char();
        assert_eq!(view.search_term(), "");
    }

    #[test]
    fn test_location_does_not_narrow_results() {
        let mut view = StockView::new(Catalog::sample());
        let before = names(&view.visible());

        for loc in Location::ALL {
            view.set_location(loc);
            assert_eq!(view.location(), loc);
            assert_eq!(names(&view.visible()), before);
        }

        view.set_search_term("fever");
        view.set_location(Location::BusStand);
        assert_eq!(names(&view.visible()), vec!["Crocin Advance"]);
    }

    #[test]
    fn test_location_cycling_through_view() {
        let mut view = StockView::default();
        view.next_location();
        assert_eq!(view.location(), Location::MainMarket);
        view.prev_location();
        view.prev_location();
        assert_eq!(view.location(), Location::HospitalRoad);
    }

    // ── 3. catalog loading ────────────────────────────────────────────────────

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.medicines().iter().all(|m| m.pharmacies.len() == 3));

        let bp = &catalog.medicines()[4];
        assert_eq!(bp.category, "Medical Device");
        assert_eq!(bp.pharmacies[2].stock, StockStatus::OutOfStock);
    }

    #[test]
    fn test_load_catalog_from_toml() {
        let catalog = Catalog::from_toml_str(SAMPLE_TOML).unwrap();
        assert_eq!(catalog.len(), 2);

        let cet = &catalog.medicines()[0];
        assert_eq!(cet.pharmacies.len(), 1);
        assert_eq!(cet.pharmacies[0].stock, StockStatus::LowStock);
        assert!(catalog.medicines()[1].pharmacies.is_empty());

        assert_eq!(names(&catalog.search("hydra")), vec!["ORS Sachet"]);
    }

    #[test]
    fn test_toml_rejects_duplicate_ids() {
        let toml = r#"
            [[medicines]]
            id = 1
            name = "A"
            category = "X"

            [[medicines]]
            id = 1
            name = "B"
            category = "Y"
        "#;
        match Catalog::from_toml_str(toml) {
            Err(NabhaError::Catalog { reason }) => assert!(reason.contains("duplicate medicine id 1")),
            other => panic!("expected Catalog error, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_rejects_empty_catalog() {
        let err = Catalog::from_toml_str("medicines = []").unwrap_err();
        assert!(err.to_string().contains("no medicines"));
    }

    #[test]
    fn test_toml_rejects_unknown_stock_status() {
        let toml = r#"
            [[medicines]]
            id = 1
            name = "A"
            category = "X"

            [[medicines.pharmacies]]
            name = "P"
            location = "Main Market"
            stock = "Backordered"
            quantity = "0"
            phone = "1"
        "#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("failed to parse catalog TOML"));
    }

    #[test]
    fn test_new_rejects_pharmacy_without_phone() {
        let med = Medicine::new(1, "A", "X").with_pharmacy(PharmacyStock::new(
            "P",
            "Main Market",
            StockStatus::Available,
            "1",
            " ",
        ));
        let err = Catalog::new(vec![med]).unwrap_err();
        assert!(err.to_string().contains("no phone number"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::from_file(std::path::Path::new("/nonexistent/stock.toml")).unwrap_err();
        assert!(matches!(err, NabhaError::Io { .. }));
    }

    #[test]
    fn test_shipped_catalog_file_matches_sample() {
        let shipped = Catalog::from_toml_str(SHIPPED_CATALOG).unwrap();
        assert_eq!(shipped, Catalog::sample());
    }

    #[test]
    fn test_sample_catalog_survives_toml_dump() {
        let catalog = Catalog::sample();
        let dumped = catalog.to_toml_string().unwrap();
        assert!(dumped.contains("[[medicines.pharmacies]]"));
        assert_eq!(Catalog::from_toml_str(&dumped).unwrap(), catalog);
    }

    // ── 4. rendering ──────────────────────────────────────────────────────────

    #[test]
    fn test_render_card_lists_every_pharmacy() {
        let catalog = Catalog::sample();
        let card = render::render_card(&catalog.medicines()[0]);

        assert!(card.starts_with("Paracetamol 500mg  [Pain Relief]"));
        assert!(card.contains("Nabha Medical Store"));
        assert!(card.contains("[Low Stock]"));
        assert!(card.contains("[Out of Stock]"));
        assert!(card.contains("Call tel:+91-9876543212"));
    }

    #[test]
    fn test_render_empty_result_shows_no_medicines_found() {
        let catalog = Catalog::sample();
        let out = render::render_cards(&catalog.search("xyz-not-found"));
        assert!(out.contains(render::EMPTY_TITLE));
        assert!(out.contains("Clear Search"));
    }

    #[test]
    fn test_render_screen_includes_helpline() {
        let view = StockView::default();
        let out = render::render_screen(view.search_term(), view.location(), &view.visible());
        assert!(out.contains("All Locations"));
        assert!(out.contains("Blood Pressure Monitor"));
        assert!(out.contains("1800-NABHA-MED"));
        assert!(!out.contains(render::EMPTY_TITLE));
    }
}

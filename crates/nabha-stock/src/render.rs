//! Plain-text rendering of medicine cards.
//!
//! Layout of one card:
//!
//! ```text
//! Paracetamol 500mg  [Pain Relief]
//!   ✔ Nabha Medical Store
//!       Main Market · 50+ strips   [Available]   Call tel:+91-9876543210
//! ```

use nabha_contracts::{Location, Medicine, PharmacyStock};

use crate::mock_data::EMERGENCY_HELPLINE;

pub const EMPTY_TITLE: &str = "No medicines found";
pub const EMPTY_HINT: &str = "Try searching with different keywords or check all locations";
pub const CLEAR_SEARCH_HINT: &str = "Clear Search";

pub const HELPLINE_TITLE: &str = "Emergency Medicine Required?";
pub const HELPLINE_SUBTITLE: &str = "Call our 24/7 emergency pharmacy helpline";

/// Render one pharmacy row (two lines, no trailing newline).
pub fn render_pharmacy(pharmacy: &PharmacyStock) -> String {
    format!(
        "  {} {}\n      {} · {}   [{}]   Call {}",
        pharmacy.stock.glyph(),
        pharmacy.name,
        pharmacy.location,
        pharmacy.quantity,
        pharmacy.stock.label(),
        pharmacy.tel_link(),
    )
}

/// Render one medicine card.
pub fn render_card(medicine: &Medicine) -> String {
    let mut out = format!("{}  [{}]\n", medicine.name, medicine.category);
    for pharmacy in &medicine.pharmacies {
        out.push_str(&render_pharmacy(pharmacy));
        out.push('\n');
    }
    out
}

/// Render the empty-result state.
pub fn render_empty_state() -> String {
    format!("{}\n{}\n[{}]\n", EMPTY_TITLE, EMPTY_HINT, CLEAR_SEARCH_HINT)
}

/// Render the emergency helpline banner.
pub fn render_helpline() -> String {
    format!(
        "{}\n{}\nEmergency Helpline: {}\n",
        HELPLINE_TITLE, HELPLINE_SUBTITLE, EMERGENCY_HELPLINE
    )
}

/// Render a list of medicine cards separated by blank lines, or the empty
/// state if `medicines` is empty.
pub fn render_cards(medicines: &[&Medicine]) -> String {
    if medicines.is_empty() {
        return render_empty_state();
    }
    medicines
        .iter()
        .map(|m| render_card(m))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the whole screen: search header, cards, and helpline banner.
pub fn render_screen(search_term: &str, location: Location, medicines: &[&Medicine]) -> String {
    let mut out = String::from("Pharmacy Stock Checker\n");
    out.push_str("Check medicine availability at local pharmacies in real-time\n\n");
    out.push_str(&format!(
        "Search: \"{}\"   Location: {}\n\n",
        search_term,
        location.label()
    ));
    out.push_str(&render_cards(medicines));
    out.push('\n');
    out.push_str(&render_helpline());
    out
}

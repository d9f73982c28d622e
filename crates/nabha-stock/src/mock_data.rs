//! Built-in sample catalog for the Nabha pharmacy stock checker.
//!
//! All data in this module is hardcoded and fictional. No pharmacy systems are
//! contacted. It stands in for a real inventory feed.

use nabha_contracts::{Medicine, PharmacyStock, StockStatus};

/// 24/7 emergency pharmacy helpline shown under the medicine list.
pub const EMERGENCY_HELPLINE: &str = "1800-NABHA-MED";

// ── Pharmacies (mock) ─────────────────────────────────────────────────────────

const NABHA_MEDICAL: (&str, &str, &str) = ("Nabha Medical Store", "Main Market", "+91-9876543210");
const CITY_PHARMACY: (&str, &str, &str) = ("City Pharmacy", "Bus Stand", "+91-9876543211");
const HEALTH_PLUS: (&str, &str, &str) = ("Health Plus", "Civil Lines", "+91-9876543212");
const WELLNESS: (&str, &str, &str) = ("Wellness Pharmacy", "Hospital Road", "+91-9876543213");

fn stock(pharmacy: (&str, &str, &str), status: StockStatus, quantity: &str) -> PharmacyStock {
    let (name, location, phone) = pharmacy;
    PharmacyStock::new(name, location, status, quantity, phone)
}

// ── Catalog (mock) ────────────────────────────────────────────────────────────

/// Return the five-medicine sample catalog in display order.
///
/// - Paracetamol 500mg       (Pain Relief)
/// - Amoxicillin 250mg       (Antibiotic)
/// - Crocin Advance          (Fever)
/// - Insulin Injection       (Diabetes)
/// - Blood Pressure Monitor  (Medical Device)
pub fn sample_medicines() -> Vec<Medicine> {
    use StockStatus::{Available, LowStock, OutOfStock};

    vec![
        Medicine::new(1, "Paracetamol 500mg", "Pain Relief")
            .with_pharmacy(stock(NABHA_MEDICAL, Available, "50+ strips"))
            .with_pharmacy(stock(CITY_PHARMACY, LowStock, "5 strips"))
            .with_pharmacy(stock(HEALTH_PLUS, OutOfStock, "0")),
        Medicine::new(2, "Amoxicillin 250mg", "Antibiotic")
            .with_pharmacy(stock(NABHA_MEDICAL, Available, "30+ bottles"))
            .with_pharmacy(stock(WELLNESS, Available, "20+ bottles"))
            .with_pharmacy(stock(CITY_PHARMACY, LowStock, "3 bottles")),
        Medicine::new(3, "Crocin Advance", "Fever")
            .with_pharmacy(stock(HEALTH_PLUS, Available, "40+ strips"))
            .with_pharmacy(stock(WELLNESS, Available, "25+ strips"))
            .with_pharmacy(stock(NABHA_MEDICAL, LowStock, "8 strips")),
        Medicine::new(4, "Insulin Injection", "Diabetes")
            .with_pharmacy(stock(CITY_PHARMACY, Available, "10+ vials"))
            .with_pharmacy(stock(HEALTH_PLUS, OutOfStock, "0"))
            .with_pharmacy(stock(WELLNESS, Available, "15+ vials")),
        Medicine::new(5, "Blood Pressure Monitor", "Medical Device")
            .with_pharmacy(stock(NABHA_MEDICAL, Available, "5 units"))
            .with_pharmacy(stock(HEALTH_PLUS, LowStock, "2 units"))
            .with_pharmacy(stock(WELLNESS, OutOfStock, "0")),
    ]
}

//! Dummy catalog generation
//!
//! Produces synthetic product records for local development and load
//! testing. Output is deterministic for a given seed.

use chrono::{Duration, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use super::record::Record;

const CATEGORIES: &[&str] = &[
    "Electronics",
    "Books",
    "Home & Kitchen",
    "Sports & Outdoors",
    "Clothing",
    "Toys & Games",
    "Automotive",
    "Health & Beauty",
    "Pet Supplies",
    "Office Products",
];

const BRANDS: &[&str] = &[
    "BrandA",
    "BrandB",
    "MegaCorp",
    "InnovateTech",
    "EcoFriendly",
    "GlobalGear",
    "QuantumLeap",
];

const COLORS: &[&str] = &["Red", "Blue", "Green", "Black", "White", "Silver", "Gold"];

const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Generates product records
pub struct CatalogGenerator {
    rng: StdRng,
}

impl CatalogGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `count` records with ids `prod-0 .. prod-{count-1}`
    pub fn generate(&mut self, count: usize) -> Vec<Record> {
        (0..count).filter_map(|i| Record::from_value(self.product(i))).collect()
    }

    fn product(&mut self, index: usize) -> Value {
        let category = pick(&mut self.rng, CATEGORIES);
        let brand = pick(&mut self.rng, BRANDS);
        let color = pick(&mut self.rng, COLORS);

        let price = round_to(self.rng.gen_range(10.0..1010.0), 2);
        let stock: u32 = self.rng.gen_range(0..500);
        let rating = round_to(self.rng.gen_range(1.0..5.0), 1);
        let weight_kg = self.rng.gen_range(0.1..5.1);
        let dims: [u32; 3] = [
            self.rng.gen_range(5..55),
            self.rng.gen_range(5..55),
            self.rng.gen_range(5..55),
        ];
        let warranty_months: u32 = self.rng.gen_range(6..30);
        let material = if self.rng.gen_bool(0.5) { "Plastic" } else { "Metal" };

        let age = Duration::seconds(self.rng.gen_range(0..SECONDS_PER_YEAR));
        let created_at = (Utc::now() - age).to_rfc3339_opts(SecondsFormat::Millis, true);

        // Singular-ish category label, e.g. "Books" -> "Book"
        let mut label = category.to_string();
        label.pop();

        json!({
            "id": format!("prod-{}", index),
            "name": format!("{} {} Gadget {}", brand, label, index),
            "description": format!("A high-quality {} {} item from {}.", color, category, brand),
            "category": category,
            "brand": brand,
            "price": price,
            "stock": stock,
            "rating": rating,
            "available": stock > 0,
            "color": color,
            "weightKg": format!("{:.2}", weight_kg),
            "dimensionsCm": format!("{}x{}x{}", dims[0], dims[1], dims[2]),
            "warrantyMonths": warranty_months,
            "material": material,
            "createdAt": created_at,
            "updatedAt": created_at,
        })
    }
}

impl Default for CatalogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_count() {
        let records = CatalogGenerator::with_seed(7).generate(25);
        assert_eq!(records.len(), 25);
        assert_eq!(records[0].id(), Some(&json!("prod-0")));
        assert_eq!(records[24].id(), Some(&json!("prod-24")));
    }

    #[test]
    fn test_same_seed_same_prices() {
        let a = CatalogGenerator::with_seed(42).generate(10);
        let b = CatalogGenerator::with_seed(42).generate(10);
        let prices_a: Vec<_> = a.iter().map(Record::price).collect();
        let prices_b: Vec<_> = b.iter().map(Record::price).collect();
        assert_eq!(prices_a, prices_b);
    }

    #[test]
    fn test_field_ranges() {
        for record in CatalogGenerator::with_seed(1).generate(200) {
            let price = record.price().unwrap();
            assert!((10.0..=1010.0).contains(&price));

            let rating = record.get("rating").and_then(Value::as_f64).unwrap();
            assert!((1.0..=5.0).contains(&rating));

            let stock = record.get("stock").and_then(Value::as_u64).unwrap();
            let available = record.get("available").and_then(Value::as_bool).unwrap();
            assert_eq!(available, stock > 0);
        }
    }
}

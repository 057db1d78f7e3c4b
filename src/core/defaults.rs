//! Built-in catalog used when the startup source cannot be loaded.

use crate::{
    core::extractor::charge_controller_for,
    entities::{DeliveryOptions, ProductModel, Specs, StockStatus},
};
use chrono::{DateTime, NaiveDate, Utc};

struct Seed {
    capacity: u32,
    price: i64,
    stock: u32,
    status: StockStatus,
    description: &'static str,
    voltage: &'static str,
    inverter: &'static str,
    ports: &'static [&'static str],
    weight_kg: f64,
    dimensions: &'static str,
    panels: u32,
    notes: &'static str,
    pay_on_delivery: bool,
    created: (i32, u32, u32),
}

const SEEDS: [Seed; 5] = [
    Seed {
        capacity: 300,
        price: 85_000,
        stock: 25,
        status: StockStatus::InStock,
        description: "Compact 300Wh power station for mobile devices and small appliances",
        voltage: "220V",
        inverter: "Modified sine wave",
        ports: &["AC", "USB-A", "12V DC"],
        weight_kg: 3.5,
        dimensions: "20x15x15",
        panels: 0,
        notes: "Perfect for camping and emergency power",
        pay_on_delivery: true,
        created: (2025, 1, 15),
    },
    Seed {
        capacity: 500,
        price: 120_000,
        stock: 18,
        status: StockStatus::InStock,
        description: "Portable 500Wh power station with pure sine wave inverter",
        voltage: "220-240V",
        inverter: "Pure sine wave",
        ports: &["AC", "USB-C", "USB-A", "12V DC"],
        weight_kg: 6.2,
        dimensions: "25x18x18",
        panels: 1,
        notes: "Includes 1x200W solar panel, ideal for home backup",
        pay_on_delivery: true,
        created: (2025, 1, 20),
    },
    Seed {
        capacity: 700,
        price: 185_000,
        stock: 12,
        status: StockStatus::InStock,
        description: "700Wh power station with solar charging capability",
        voltage: "220-240V",
        inverter: "Pure sine wave",
        ports: &["AC", "USB-C PD", "USB-A", "12V DC"],
        weight_kg: 8.5,
        dimensions: "28x20x20",
        panels: 1,
        notes: "Fast charging with USB-C Power Delivery",
        pay_on_delivery: true,
        created: (2025, 2, 10),
    },
    Seed {
        capacity: 1000,
        price: 280_000,
        stock: 8,
        status: StockStatus::LowStock,
        description: "High-capacity 1000Wh power station with dual solar input",
        voltage: "220-240V",
        inverter: "Pure sine wave",
        ports: &["AC x2", "USB-C PD", "USB-A x2", "12V DC"],
        weight_kg: 12.5,
        dimensions: "32x22x22",
        panels: 2,
        notes: "Supports dual solar panel input for faster charging",
        pay_on_delivery: true,
        created: (2025, 2, 15),
    },
    Seed {
        capacity: 2000,
        price: 450_000,
        stock: 0,
        status: StockStatus::OutOfStock,
        description: "Professional 2000Wh power station for home and business use",
        voltage: "220-240V",
        inverter: "Pure sine wave",
        ports: &["AC x4", "USB-C PD", "USB-A x3", "12V DC", "Anderson"],
        weight_kg: 22.0,
        dimensions: "40x28x28",
        panels: 2,
        notes: "Professional grade with expandable battery options",
        pay_on_delivery: false,
        created: (2025, 3, 1),
    },
];

fn midnight_utc((year, month, day): (i32, u32, u32)) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn build(seed: &Seed) -> ProductModel {
    let code = seed.capacity;
    ProductModel {
        id: format!("dt-{code}"),
        model: format!("DT-{code}"),
        title: format!("DEETREM DT-{code} Power Station"),
        price_ngn: seed.price,
        currency: "NGN".to_string(),
        stock_count: seed.stock,
        status: seed.status,
        short_description: seed.description.to_string(),
        specs: Specs {
            battery_capacity_wh: code,
            ac_output_watts: code,
            output_voltage: seed.voltage.to_string(),
            inverter_type: seed.inverter.to_string(),
            ports: seed.ports.iter().map(|p| (*p).to_string()).collect(),
            weight_kg: seed.weight_kg,
            dimensions_cm: seed.dimensions.to_string(),
            solar_panel_count: seed.panels,
            each_panel_watt: if seed.panels > 0 { 200 } else { 0 },
            charge_controller: charge_controller_for(seed.panels),
            notes: seed.notes.to_string(),
        },
        delivery_options: DeliveryOptions {
            pay_on_delivery: seed.pay_on_delivery,
            ..DeliveryOptions::all()
        },
        images: vec![
            format!("assets/products/dt{code}-1.webp"),
            format!("assets/products/dt{code}-2.webp"),
        ],
        created_at: midnight_utc(seed.created),
    }
}

/// The five representative products shown when the catalog source fails.
#[must_use]
pub fn default_products() -> Vec<ProductModel> {
    SEEDS.iter().map(build).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_five_products_with_unique_ids() {
        let products = default_products();
        assert_eq!(products.len(), 5);
        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(products[0].id, "dt-300");
        assert_eq!(products[4].model, "DT-2000");
    }

    #[test]
    fn test_solar_fields_follow_convention() {
        for product in default_products() {
            let specs = &product.specs;
            assert_eq!(
                specs.solar_panel_count == 0,
                specs.each_panel_watt == 0,
                "{} breaks the panel convention",
                product.id
            );
        }
    }

    #[test]
    fn test_out_of_stock_product_matches_source_data() {
        let dt2000 = default_products().pop().unwrap();
        assert_eq!(dt2000.stock_count, 0);
        assert_eq!(dt2000.status, StockStatus::OutOfStock);
        assert!(!dt2000.delivery_options.pay_on_delivery);
        assert_eq!(dt2000.specs.charge_controller.as_deref(), Some("50A"));
        assert_eq!(dt2000.specs.weight_kg, 22.0);
        assert_eq!(
            dt2000.created_at.unwrap().to_rfc3339(),
            "2025-03-01T00:00:00+00:00"
        );
    }
}

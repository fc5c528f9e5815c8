//! Static reference data served to clients: car brands, the service catalog,
//! and spare-part categories.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Typical price band in AED as `(low, high)`.
    pub typical_cost_aed: (u32, u32),
}

/// Brands most commonly serviced in the UAE, popular first.
pub const CAR_BRANDS: &[&str] = &[
    "Toyota",
    "Nissan",
    "Lexus",
    "Mitsubishi",
    "Hyundai",
    "Kia",
    "Honda",
    "Ford",
    "Chevrolet",
    "GMC",
    "Mercedes-Benz",
    "BMW",
    "Audi",
    "Volkswagen",
    "Land Rover",
    "Porsche",
    "Infiniti",
    "Mazda",
    "Jeep",
    "Dodge",
    "Tesla",
    "MG",
    "Geely",
    "Changan",
];

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "oil-change",
        name: "Oil Change",
        description: "Engine oil and filter replacement",
        typical_cost_aed: (120, 350),
    },
    ServiceEntry {
        slug: "brakes",
        name: "Brakes",
        description: "Pad, disc, and brake fluid service",
        typical_cost_aed: (250, 1_200),
    },
    ServiceEntry {
        slug: "ac-repair",
        name: "AC Repair",
        description: "Air conditioning gas refill, compressor, and leak repair",
        typical_cost_aed: (150, 2_500),
    },
    ServiceEntry {
        slug: "tyres",
        name: "Tyres",
        description: "Tyre replacement, balancing, and alignment",
        typical_cost_aed: (200, 3_000),
    },
    ServiceEntry {
        slug: "battery",
        name: "Battery",
        description: "Battery testing and replacement",
        typical_cost_aed: (250, 900),
    },
    ServiceEntry {
        slug: "transmission",
        name: "Transmission",
        description: "Gearbox diagnostics, fluid change, and overhaul",
        typical_cost_aed: (400, 8_000),
    },
    ServiceEntry {
        slug: "electrical",
        name: "Electrical",
        description: "Wiring, alternator, starter, and sensor diagnostics",
        typical_cost_aed: (150, 2_000),
    },
    ServiceEntry {
        slug: "bodywork",
        name: "Bodywork & Paint",
        description: "Dent removal, accident repair, and respray",
        typical_cost_aed: (300, 10_000),
    },
    ServiceEntry {
        slug: "suspension",
        name: "Suspension",
        description: "Shock absorbers, bushings, and steering components",
        typical_cost_aed: (400, 4_000),
    },
    ServiceEntry {
        slug: "detailing",
        name: "Detailing",
        description: "Interior and exterior cleaning, polishing, and ceramic coating",
        typical_cost_aed: (100, 2_500),
    },
];

pub const PART_CATEGORIES: &[&str] = &[
    "Engine Parts",
    "Brake Parts",
    "Filters",
    "Batteries",
    "Tyres",
    "Lights",
    "Suspension",
    "AC Parts",
    "Body Parts",
    "Accessories",
    "Lubricants",
];

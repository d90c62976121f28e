//! Built-in distributor catalog.

use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};

struct Seed {
    id: &'static str,
    name: &'static str,
    model: &'static str,
    category: Category,
    price: f64,
    moq: i64,
    description: &'static str,
    material: Option<&'static str>,
    color: Option<&'static str>,
}

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[rustfmt::skip]
const SEEDS: [Seed; 16] = [
    Seed { id: "F001", name: "Classic Metal Frame", model: "CM-2024", category: Category::Frames, price: 45.0, moq: 12,
        description: "Premium metal frames with adjustable nose pads", material: Some("Titanium Alloy"), color: Some("Black/Gold") },
    Seed { id: "F002", name: "Acetate Square Frame", model: "AS-1205", category: Category::Frames, price: 32.0, moq: 24,
        description: "Lightweight acetate frames, modern design", material: Some("Acetate"), color: Some("Tortoise/Clear") },
    Seed { id: "F003", name: "Rimless Titanium Frame", model: "RT-3401", category: Category::Frames, price: 78.0, moq: 6,
        description: "Ultra-light rimless titanium frames", material: Some("Pure Titanium"), color: Some("Silver") },
    Seed { id: "F004", name: "Vintage Round Frame", model: "VR-8820", category: Category::Frames, price: 28.0, moq: 36,
        description: "Retro round frames with spring hinges", material: Some("Metal Alloy"), color: Some("Rose Gold") },
    Seed { id: "S001", name: "Aviator Sunglasses", model: "AV-5501", category: Category::Sunglasses, price: 55.0, moq: 12,
        description: "Classic aviator design with UV400 protection", material: Some("Metal"), color: Some("Gold/Brown") },
    Seed { id: "S002", name: "Wayfarer Sunglasses", model: "WF-7722", category: Category::Sunglasses, price: 42.0, moq: 18,
        description: "Iconic wayfarer style with polarized lenses", material: Some("Acetate"), color: Some("Black/Grey") },
    Seed { id: "S003", name: "Sport Sunglasses", model: "SP-9901", category: Category::Sunglasses, price: 68.0, moq: 12,
        description: "Performance sunglasses with wrap-around design", material: Some("TR90"), color: Some("Matte Black") },
    Seed { id: "S004", name: "Cat Eye Sunglasses", model: "CE-4455", category: Category::Sunglasses, price: 38.0, moq: 24,
        description: "Feminine cat-eye design with gradient lenses", material: Some("Acetate"), color: Some("Tortoise/Brown") },
    Seed { id: "L001", name: "Single Vision Lens", model: "SV-CR39", category: Category::Lenses, price: 15.0, moq: 50,
        description: "CR-39 single vision lenses with anti-reflective coating", material: Some("CR-39"), color: None },
    Seed { id: "L002", name: "Progressive Lens", model: "PG-1.67", category: Category::Lenses, price: 85.0, moq: 20,
        description: "High-index progressive lenses, ultra-thin", material: Some("1.67 High Index"), color: None },
    Seed { id: "L003", name: "Photochromic Lens", model: "PC-1.61", category: Category::Lenses, price: 125.0, moq: 12,
        description: "Transition lenses that adapt to light conditions", material: Some("1.61 Mid Index"), color: None },
    Seed { id: "L004", name: "Blue Light Filter Lens", model: "BL-CR39", category: Category::Lenses, price: 25.0, moq: 48,
        description: "Blue light blocking lenses for digital protection", material: Some("CR-39 + Blue Filter"), color: None },
    Seed { id: "A001", name: "Microfiber Cleaning Cloth", model: "MC-15x15", category: Category::Accessories, price: 2.5, moq: 100,
        description: "Premium microfiber cleaning cloths", material: None, color: Some("Assorted") },
    Seed { id: "A002", name: "Lens Cleaning Solution", model: "LS-250ML", category: Category::Accessories, price: 8.0, moq: 24,
        description: "Professional lens cleaning solution, 250ml", material: None, color: None },
    Seed { id: "A003", name: "Optical Screwdriver Set", model: "OS-7PC", category: Category::Accessories, price: 12.0, moq: 12,
        description: "7-piece precision screwdriver set for optical repairs", material: None, color: None },
    Seed { id: "A004", name: "Glasses Case", model: "GC-HARD", category: Category::Accessories, price: 6.0, moq: 50,
        description: "Hard protective glasses case with cleaning cloth", material: None, color: Some("Black/Brown") },
];

pub(crate) fn products(currency: Currency) -> Vec<Product> {
    SEEDS
        .iter()
        .map(|seed| {
            let mut product = Product::new(
                seed.id,
                seed.name,
                seed.model,
                seed.category,
                Money::from_decimal(seed.price, currency),
                seed.moq,
            )
            .with_description(seed.description)
            .with_image(PLACEHOLDER_IMAGE);
            product.material = seed.material.map(String::from);
            product.color = seed.color.map(String::from);
            product
        })
        .collect()
}

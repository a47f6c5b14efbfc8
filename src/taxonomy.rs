use std::fmt;

/// Coarse disposal categories that canonical items roll up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Electronics,
    Batteries,
    PaintChemicals,
    MedicalSharps,
    TextilesClothing,
    OtherMaterials,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Batteries => "Batteries",
            Category::PaintChemicals => "Paint & Chemicals",
            Category::MedicalSharps => "Medical Sharps",
            Category::TextilesClothing => "Textiles & Clothing",
            Category::OtherMaterials => "Other Important Materials",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical accepted-materials taxonomy: each item maps to exactly one
/// category. Fixed for the process lifetime.
pub const MASTER_ITEMS: [(&str, Category); 40] = [
    ("Computers, Laptops, Tablets", Category::Electronics),
    ("Monitors, TVs (CRT & Flat Screen)", Category::Electronics),
    ("Cell Phones, Smartphones", Category::Electronics),
    ("Printers, Copiers, Fax Machines", Category::Electronics),
    ("Audio/Video Equipment", Category::Electronics),
    ("Gaming Consoles", Category::Electronics),
    ("Small Appliances (Microwaves, Toasters, etc.)", Category::Electronics),
    ("Computer Peripherals (Keyboards, Mice, Cables, etc.)", Category::Electronics),
    ("Household Batteries (AA, AAA, 9V, etc.)", Category::Batteries),
    ("Rechargeable Batteries", Category::Batteries),
    ("Lithium-ion Batteries", Category::Batteries),
    ("Button/Watch Batteries", Category::Batteries),
    ("Power Tool Batteries", Category::Batteries),
    ("E-bike/Scooter Batteries", Category::Batteries),
    ("Car/Automotive Batteries", Category::Batteries),
    ("Latex/Water-based Paint", Category::PaintChemicals),
    ("Oil-based Paint and Stains", Category::PaintChemicals),
    ("Spray Paint", Category::PaintChemicals),
    ("Paint Thinners and Solvents", Category::PaintChemicals),
    ("Household Cleaners", Category::PaintChemicals),
    ("Pool Chemicals", Category::PaintChemicals),
    ("Pesticides and Herbicides", Category::PaintChemicals),
    ("Automotive Fluids (Oil, Antifreeze)", Category::PaintChemicals),
    ("Needles and Syringes", Category::MedicalSharps),
    ("Lancets", Category::MedicalSharps),
    ("Auto-injectors (EpiPens)", Category::MedicalSharps),
    ("Insulin Pens", Category::MedicalSharps),
    ("Home Dialysis Equipment", Category::MedicalSharps),
    ("Clothing and Shoes", Category::TextilesClothing),
    ("Household Textiles (Towels, Bedding)", Category::TextilesClothing),
    ("Fabric Scraps", Category::TextilesClothing),
    ("Accessories (Belts, Bags, etc.)", Category::TextilesClothing),
    ("Fluorescent Bulbs and CFLs", Category::OtherMaterials),
    ("Mercury Thermometers", Category::OtherMaterials),
    ("Smoke Detectors", Category::OtherMaterials),
    ("Fire Extinguishers", Category::OtherMaterials),
    ("Propane Tanks", Category::OtherMaterials),
    ("Mattresses and Box Springs", Category::OtherMaterials),
    ("Large Appliances (Fridges, Washers, etc.)", Category::OtherMaterials),
    ("Construction Debris (Residential Quantities)", Category::OtherMaterials),
];

// ── Tests ──

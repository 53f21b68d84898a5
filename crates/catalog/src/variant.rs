use serde::{Deserialize, Serialize};

/// Concrete kind of a product. Two products combine only when their kinds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Base,
    Smartphone,
    LawnGrass,
}

impl VariantKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariantKind::Base => "Product",
            VariantKind::Smartphone => "Smartphone",
            VariantKind::LawnGrass => "LawnGrass",
        }
    }
}

impl core::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smartphone-specific descriptive attributes (no extra validation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartphoneSpec {
    pub efficiency: f64,
    pub model: String,
    /// Built-in storage, in gigabytes.
    pub memory: u32,
    pub color: String,
}

/// Lawn grass-specific descriptive attributes (no extra validation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawnGrassSpec {
    pub country: String,
    pub germination_period: String,
    pub color: String,
}

/// Variant payload carried by a product on top of the common core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Base,
    Smartphone(SmartphoneSpec),
    LawnGrass(LawnGrassSpec),
}

impl Variant {
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Base => VariantKind::Base,
            Variant::Smartphone(_) => VariantKind::Smartphone,
            Variant::LawnGrass(_) => VariantKind::LawnGrass,
        }
    }
}

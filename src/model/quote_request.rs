use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Packaging categories a quote can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Boîtes d'expédition")]
    ShippingBoxes,
    #[serde(rename = "Sacs shopping")]
    ShoppingBags,
    #[serde(rename = "Coffrets premium")]
    PremiumGiftBoxes,
    #[serde(rename = "Boîtes pliantes")]
    FoldingBoxes,
    #[serde(rename = "Packaging alimentaire")]
    FoodPackaging,
    #[serde(rename = "Étuis & fourreaux")]
    CasesAndSleeves,
    #[serde(rename = "Autre")]
    Other,
}

impl ProductType {
    pub const ALL: [ProductType; 7] = [
        ProductType::ShippingBoxes,
        ProductType::ShoppingBags,
        ProductType::PremiumGiftBoxes,
        ProductType::FoldingBoxes,
        ProductType::FoodPackaging,
        ProductType::CasesAndSleeves,
        ProductType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::ShippingBoxes => "Boîtes d'expédition",
            ProductType::ShoppingBags => "Sacs shopping",
            ProductType::PremiumGiftBoxes => "Coffrets premium",
            ProductType::FoldingBoxes => "Boîtes pliantes",
            ProductType::FoodPackaging => "Packaging alimentaire",
            ProductType::CasesAndSleeves => "Étuis & fourreaux",
            ProductType::Other => "Autre",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProductType(pub String);

impl fmt::Display for UnknownProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown product type: {}", self.0)
    }
}

impl std::error::Error for UnknownProductType {}

impl FromStr for ProductType {
    type Err = UnknownProductType;

    /// Labels must match exactly; the form only ever offers these strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .iter()
            .copied()
            .find(|p| p.label() == s)
            .ok_or_else(|| UnknownProductType(s.to_string()))
    }
}

/// Row written to the `quote_requests` table. Created once per successful
/// submission and never touched again from this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub user_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub product_type: ProductType,
    pub quantity: Option<i32>,
}

impl QuoteRequest {
    pub fn subject_for(product_type: ProductType) -> String {
        format!("Demande de devis - {}", product_type)
    }
}

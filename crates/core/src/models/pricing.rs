use serde::{Deserialize, Serialize};

/// Customer classification used by the pricing and booking-window policies.
/// Computed elsewhere; carried through quotes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    #[default]
    New,
    Member,
    Promo,
    Frequent,
}

/// Price of a session, each figure rounded to cents on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub discount: f64,
    pub final_price: f64,
}

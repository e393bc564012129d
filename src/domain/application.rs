//! Storefront search result

/// A title returned by the storefront search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Steam app id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Item kind as reported by the store (e.g. "app")
    pub kind: String,
    /// Final price in minor currency units (cents), 0 when absent
    pub price_minor_units: u64,
    /// Discount in percent, 0 when absent
    pub discount_percent: u8,
    /// Small capsule image URL
    pub thumbnail_url: String,
}

impl Application {
    /// Price as a decimal amount in the store currency
    pub fn price(&self) -> f64 {
        self.price_minor_units as f64 / 100.0
    }

    /// Whether the store lists the title without a price
    pub fn is_free(&self) -> bool {
        self.price_minor_units == 0
    }
}

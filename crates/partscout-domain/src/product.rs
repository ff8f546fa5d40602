//! Product records returned by a part lookup
//!
//! These mirror the nested shape of a distributor's product detail response.
//! Every scalar is optional because the remote service omits fields freely;
//! deciding which fields are mandatory is the extractor's job.

/// Manufacturer reference inside a product record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manufacturer {
    /// Distributor-side manufacturer id
    pub id: Option<i64>,

    /// Manufacturer display name
    pub value: Option<String>,
}

/// A named technical parameter, e.g. `Resistance = 10 kOhms`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductParameter {
    /// Parameter name as reported by the distributor
    pub parameter: String,

    /// Parameter value as display text
    pub value: String,
}

/// One tier of the standard price list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBreak {
    /// Minimum quantity for this tier
    pub break_quantity: Option<i64>,

    /// Price per unit at this tier
    pub unit_price: Option<f64>,

    /// Extended price for `break_quantity` units
    pub total_price: Option<f64>,
}

/// One product record from a lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRecord {
    /// Manufacturer reference
    pub manufacturer: Option<Manufacturer>,

    /// Manufacturer part number
    pub manufacturer_part_number: Option<String>,

    /// Long-form description
    pub detailed_description: Option<String>,

    /// Technical parameters
    pub parameters: Vec<ProductParameter>,

    /// Standard price tiers, cheapest quantity first
    pub standard_pricing: Vec<PriceBreak>,

    /// Lifecycle status (e.g. "Active")
    pub product_status: Option<String>,

    /// Whether the distributor does not normally stock the part
    pub non_stock: Option<bool>,

    /// Quantity in stock
    pub quantity_available: Option<i64>,

    /// Quantity the manufacturer reports as available
    pub manufacturer_public_quantity: Option<i64>,

    /// Manufacturer lead time, in weeks, as display text
    pub manufacturer_lead_weeks: Option<String>,

    /// Quantity on order from the manufacturer
    pub quantity_on_order: Option<i64>,

    /// RoHS compliance status
    pub ro_hs_status: Option<String>,

    /// Lead-free status
    pub lead_status: Option<String>,

    /// Product page URL
    pub product_url: Option<String>,

    /// Primary datasheet URL
    pub primary_datasheet: Option<String>,
}

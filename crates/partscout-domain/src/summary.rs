//! Flattened part summaries

use serde::{Deserialize, Serialize};

/// Technical parameters copied from a product record into a [`PartSummary`]
///
/// Any parameter name not listed here is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechnicalParameter {
    /// "Resistance"
    Resistance,
    /// "Tolerance"
    Tolerance,
    /// "Power"
    Power,
    /// "Temperature Coefficient"
    TemperatureCoefficient,
    /// "Operating Temperature"
    OperatingTemperature,
    /// "Package / Case"
    Package,
    /// "Ratings"
    Ratings,
    /// "Size / Dimension"
    SizeArea,
}

impl TechnicalParameter {
    /// All recognised parameters
    pub const ALL: [TechnicalParameter; 8] = [
        TechnicalParameter::Resistance,
        TechnicalParameter::Tolerance,
        TechnicalParameter::Power,
        TechnicalParameter::TemperatureCoefficient,
        TechnicalParameter::OperatingTemperature,
        TechnicalParameter::Package,
        TechnicalParameter::Ratings,
        TechnicalParameter::SizeArea,
    ];

    /// Match a distributor parameter name exactly
    ///
    /// # Examples
    ///
    /// ```
    /// use partscout_domain::TechnicalParameter;
    ///
    /// assert_eq!(
    ///     TechnicalParameter::from_name("Package / Case"),
    ///     Some(TechnicalParameter::Package)
    /// );
    /// assert_eq!(TechnicalParameter::from_name("Voltage - Rated"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.display_name() == name)
    }

    /// Name used by the distributor
    pub fn display_name(&self) -> &'static str {
        match self {
            TechnicalParameter::Resistance => "Resistance",
            TechnicalParameter::Tolerance => "Tolerance",
            TechnicalParameter::Power => "Power",
            TechnicalParameter::TemperatureCoefficient => "Temperature Coefficient",
            TechnicalParameter::OperatingTemperature => "Operating Temperature",
            TechnicalParameter::Package => "Package / Case",
            TechnicalParameter::Ratings => "Ratings",
            TechnicalParameter::SizeArea => "Size / Dimension",
        }
    }

    /// Field name in a summary
    pub fn field_name(&self) -> &'static str {
        match self {
            TechnicalParameter::Resistance => "resistance",
            TechnicalParameter::Tolerance => "tolerance",
            TechnicalParameter::Power => "power",
            TechnicalParameter::TemperatureCoefficient => "temp_coeff",
            TechnicalParameter::OperatingTemperature => "op_temp",
            TechnicalParameter::Package => "package",
            TechnicalParameter::Ratings => "ratings",
            TechnicalParameter::SizeArea => "size_area",
        }
    }
}

/// The fields kept for one part
///
/// Built once by the extractor and never modified afterwards. Technical
/// parameters the record did not report stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSummary {
    // Manufacturing
    /// Manufacturer name
    pub manufacturer: String,
    /// Manufacturer part number
    pub manufacturer_part_number: String,
    /// Long-form description
    pub detailed_description: String,

    // Technical
    /// Resistance
    pub resistance: Option<String>,
    /// Tolerance
    pub tolerance: Option<String>,
    /// Power rating
    pub power: Option<String>,
    /// Temperature coefficient
    pub temp_coeff: Option<String>,
    /// Operating temperature range
    pub op_temp: Option<String>,
    /// Package / case
    pub package: Option<String>,
    /// Ratings (e.g. AEC-Q200)
    pub ratings: Option<String>,
    /// Size / dimension
    pub size_area: Option<String>,

    // Ordering
    /// Unit price of the first standard price tier
    pub standard_pricing: f64,
    /// Lifecycle status
    pub product_status: Option<String>,
    /// Non-stock flag
    pub non_stock: Option<bool>,
    /// Quantity in stock
    pub quantity_available: Option<i64>,
    /// Manufacturer-reported quantity
    pub manufacturer_public_quantity: Option<i64>,
    /// Manufacturer lead time in weeks
    pub manufacturer_lead_weeks: Option<String>,
    /// Quantity on order
    pub quantity_on_order: Option<i64>,

    // Compliance
    /// RoHS status
    pub ro_hs_status: Option<String>,
    /// Lead status
    pub lead_status: Option<String>,

    // Resources
    /// Product page URL
    pub product_url: Option<String>,
    /// Primary datasheet URL
    pub primary_datasheet: Option<String>,
}

impl PartSummary {
    /// Value of a technical parameter, if the record reported it
    pub fn parameter(&self, parameter: TechnicalParameter) -> Option<&str> {
        let value = match parameter {
            TechnicalParameter::Resistance => &self.resistance,
            TechnicalParameter::Tolerance => &self.tolerance,
            TechnicalParameter::Power => &self.power,
            TechnicalParameter::TemperatureCoefficient => &self.temp_coeff,
            TechnicalParameter::OperatingTemperature => &self.op_temp,
            TechnicalParameter::Package => &self.package,
            TechnicalParameter::Ratings => &self.ratings,
            TechnicalParameter::SizeArea => &self.size_area,
        };
        value.as_deref()
    }
}

//! JSON bodies exchanged with the product information API
//!
//! Field names follow the API's PascalCase. Everything on the response side
//! is optional and tolerant of explicit `null`s; conversion into domain types
//! happens in [`crate::conversions`].

use serde::{Deserialize, Serialize};

/// Request body for the manufacturer product details endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManufacturerProductDetailsRequest {
    /// Manufacturer part number to search for
    pub manufacturer_product: String,
    /// Maximum number of records to return
    pub record_count: u32,
}

/// Response from the manufacturer product details endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ManufacturerProductDetailsResponse {
    /// Matching products
    pub product_details: Option<Vec<ProductDetails>>,
}

/// Manufacturer reference
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PickListValue {
    /// Id
    pub id: Option<i64>,
    /// Display value
    pub value: Option<String>,
}

/// Technical parameter
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Parameter {
    /// Parameter name
    pub parameter: Option<String>,
    /// Display value
    pub value: Option<String>,
}

/// Standard price tier
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PriceBreak {
    /// Minimum quantity
    pub break_quantity: Option<i64>,
    /// Unit price
    pub unit_price: Option<f64>,
    /// Extended price
    pub total_price: Option<f64>,
}

/// One product in a details response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProductDetails {
    /// Manufacturer
    pub manufacturer: Option<PickListValue>,
    /// Manufacturer part number
    pub manufacturer_part_number: Option<String>,
    /// Detailed description
    pub detailed_description: Option<String>,
    /// Technical parameters
    pub parameters: Option<Vec<Parameter>>,
    /// Standard pricing tiers
    pub standard_pricing: Option<Vec<PriceBreak>>,
    /// Product status
    pub product_status: Option<String>,
    /// Non-stock flag
    pub non_stock: Option<bool>,
    /// Quantity available
    pub quantity_available: Option<i64>,
    /// Manufacturer public quantity
    pub manufacturer_public_quantity: Option<i64>,
    /// Manufacturer lead weeks
    pub manufacturer_lead_weeks: Option<String>,
    /// Quantity on order
    pub quantity_on_order: Option<i64>,
    /// RoHS status
    #[serde(rename = "RoHSStatus")]
    pub ro_hs_status: Option<String>,
    /// Lead status
    pub lead_status: Option<String>,
    /// Product URL
    pub product_url: Option<String>,
    /// Primary datasheet URL
    pub primary_datasheet: Option<String>,
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,
    /// Token type, normally "Bearer"
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body returned by the API on non-success statuses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiErrorResponse {
    /// Short error message
    pub error_message: Option<String>,
    /// Longer details
    pub error_details: Option<String>,
}

impl ApiErrorResponse {
    /// Best available human-readable text
    pub fn describe(&self) -> Option<String> {
        match (&self.error_message, &self.error_details) {
            (Some(message), Some(details)) => Some(format!("{}: {}", message, details)),
            (Some(message), None) => Some(message.clone()),
            (None, Some(details)) => Some(details.clone()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ManufacturerProductDetailsRequest {
            manufacturer_product: "RC0603FR-0710KL".to_string(),
            record_count: 10,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ManufacturerProduct"], "RC0603FR-0710KL");
        assert_eq!(json["RecordCount"], 10);
    }

    #[test]
    fn test_product_details_parsing() {
        let json = r#"{
            "ProductDetails": [
                {
                    "Manufacturer": {"Id": 13, "Value": "YAGEO"},
                    "ManufacturerPartNumber": "RC0603FR-0710KL",
                    "DetailedDescription": "10 kOhms 1% 0.1W Chip Resistor",
                    "Parameters": [
                        {"ParameterId": 952, "Parameter": "Resistance", "Value": "10 kOhms"}
                    ],
                    "StandardPricing": [
                        {"BreakQuantity": 1, "UnitPrice": 0.1, "TotalPrice": 0.1}
                    ],
                    "ProductStatus": "Active",
                    "NonStock": false,
                    "QuantityAvailable": 4520013,
                    "RoHSStatus": "ROHS3 Compliant",
                    "LeadStatus": "Lead free",
                    "PrimaryDatasheet": null
                }
            ]
        }"#;

        let response: ManufacturerProductDetailsResponse = serde_json::from_str(json).unwrap();
        let products = response.product_details.unwrap();
        assert_eq!(products.len(), 1);

        let product = &products[0];
        assert_eq!(
            product.manufacturer.as_ref().unwrap().value.as_deref(),
            Some("YAGEO")
        );
        assert_eq!(product.ro_hs_status.as_deref(), Some("ROHS3 Compliant"));
        assert_eq!(product.quantity_available, Some(4520013));
        assert!(product.primary_datasheet.is_none());
        assert!(product.product_url.is_none());
    }

    #[test]
    fn test_missing_product_details() {
        let response: ManufacturerProductDetailsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.product_details.is_none());
    }

    #[test]
    fn test_api_error_describe() {
        let body: ApiErrorResponse = serde_json::from_str(
            r#"{"ErrorMessage": "Bad Request", "ErrorDetails": "RecordCount out of range"}"#,
        )
        .unwrap();
        assert_eq!(
            body.describe().as_deref(),
            Some("Bad Request: RecordCount out of range")
        );
    }
}

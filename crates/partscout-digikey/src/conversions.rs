//! Conversions between API wire types and domain types

use crate::wire;
use partscout_domain::{Manufacturer, PriceBreak, ProductParameter, ProductRecord};

impl From<wire::PickListValue> for Manufacturer {
    fn from(value: wire::PickListValue) -> Self {
        Manufacturer {
            id: value.id,
            value: value.value,
        }
    }
}

impl From<wire::Parameter> for ProductParameter {
    fn from(parameter: wire::Parameter) -> Self {
        ProductParameter {
            parameter: parameter.parameter.unwrap_or_default(),
            value: parameter.value.unwrap_or_default(),
        }
    }
}

impl From<wire::PriceBreak> for PriceBreak {
    fn from(price: wire::PriceBreak) -> Self {
        PriceBreak {
            break_quantity: price.break_quantity,
            unit_price: price.unit_price,
            total_price: price.total_price,
        }
    }
}

impl From<wire::ProductDetails> for ProductRecord {
    fn from(details: wire::ProductDetails) -> Self {
        ProductRecord {
            manufacturer: details.manufacturer.map(Into::into),
            manufacturer_part_number: details.manufacturer_part_number,
            detailed_description: details.detailed_description,
            parameters: details
                .parameters
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            standard_pricing: details
                .standard_pricing
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            product_status: details.product_status,
            non_stock: details.non_stock,
            quantity_available: details.quantity_available,
            manufacturer_public_quantity: details.manufacturer_public_quantity,
            manufacturer_lead_weeks: details.manufacturer_lead_weeks,
            quantity_on_order: details.quantity_on_order,
            ro_hs_status: details.ro_hs_status,
            lead_status: details.lead_status,
            product_url: details.product_url,
            primary_datasheet: details.primary_datasheet,
        }
    }
}

/// Convert a whole response into domain records, keeping API order
pub fn records_from_response(response: wire::ManufacturerProductDetailsResponse) -> Vec<ProductRecord> {
    response
        .product_details
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect()
}

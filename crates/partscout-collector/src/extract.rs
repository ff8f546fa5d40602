//! Turn lookup records into part summaries

use crate::error::ExtractError;
use partscout_domain::{PartSummary, ProductRecord, TechnicalParameter};

/// Build a summary from the first record of a lookup
///
/// Additional records are ignored; the first match is taken as is, not
/// ranked. Any missing mandatory field fails the whole record.
pub fn extract_summary(records: &[ProductRecord]) -> Result<PartSummary, ExtractError> {
    let record = records.first().ok_or(ExtractError::NoProductDetails)?;

    let manufacturer = record
        .manufacturer
        .as_ref()
        .and_then(|m| m.value.clone())
        .ok_or(ExtractError::MissingField("manufacturer"))?;
    let manufacturer_part_number = record
        .manufacturer_part_number
        .clone()
        .ok_or(ExtractError::MissingField("manufacturer_part_number"))?;
    let detailed_description = record
        .detailed_description
        .clone()
        .ok_or(ExtractError::MissingField("detailed_description"))?;

    let standard_pricing = record
        .standard_pricing
        .first()
        .ok_or(ExtractError::NoPricing)?
        .unit_price
        .ok_or(ExtractError::MissingField("standard_pricing.unit_price"))?;

    let mut summary = PartSummary {
        manufacturer,
        manufacturer_part_number,
        detailed_description,
        resistance: None,
        tolerance: None,
        power: None,
        temp_coeff: None,
        op_temp: None,
        package: None,
        ratings: None,
        size_area: None,
        standard_pricing,
        product_status: record.product_status.clone(),
        non_stock: record.non_stock,
        quantity_available: record.quantity_available,
        manufacturer_public_quantity: record.manufacturer_public_quantity,
        manufacturer_lead_weeks: record.manufacturer_lead_weeks.clone(),
        quantity_on_order: record.quantity_on_order,
        ro_hs_status: record.ro_hs_status.clone(),
        lead_status: record.lead_status.clone(),
        product_url: record.product_url.clone(),
        primary_datasheet: record.primary_datasheet.clone(),
    };

    // A repeated parameter name overwrites the earlier value
    for parameter in &record.parameters {
        let Some(known) = TechnicalParameter::from_name(&parameter.parameter) else {
            continue;
        };
        let value = Some(parameter.value.clone());
        match known {
            TechnicalParameter::Resistance => summary.resistance = value,
            TechnicalParameter::Tolerance => summary.tolerance = value,
            TechnicalParameter::Power => summary.power = value,
            TechnicalParameter::TemperatureCoefficient => summary.temp_coeff = value,
            TechnicalParameter::OperatingTemperature => summary.op_temp = value,
            TechnicalParameter::Package => summary.package = value,
            TechnicalParameter::Ratings => summary.ratings = value,
            TechnicalParameter::SizeArea => summary.size_area = value,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use partscout_domain::{Manufacturer, PriceBreak, ProductParameter};

    fn parameter(name: &str, value: &str) -> ProductParameter {
        ProductParameter {
            parameter: name.to_string(),
            value: value.to_string(),
        }
    }

    fn resistor() -> ProductRecord {
        ProductRecord {
            manufacturer: Some(Manufacturer {
                id: Some(13),
                value: Some("Yageo".to_string()),
            }),
            manufacturer_part_number: Some("R1".to_string()),
            detailed_description: Some("Resistor".to_string()),
            parameters: vec![parameter("Resistance", "10k")],
            standard_pricing: vec![PriceBreak {
                break_quantity: Some(1),
                unit_price: Some(0.01),
                total_price: Some(0.01),
            }],
            product_status: Some("Active".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_recognised_parameter_copied() {
        let summary = extract_summary(&[resistor()]).unwrap();
        assert_eq!(summary.manufacturer, "Yageo");
        assert_eq!(summary.manufacturer_part_number, "R1");
        assert_eq!(summary.detailed_description, "Resistor");
        assert_eq!(summary.resistance.as_deref(), Some("10k"));
        assert_eq!(summary.standard_pricing, 0.01);
        assert_eq!(summary.product_status.as_deref(), Some("Active"));
    }

    #[test]
    fn test_unrecognised_parameter_ignored() {
        let mut record = resistor();
        record.parameters = vec![parameter("Composition", "Thick Film")];

        let summary = extract_summary(&[record]).unwrap();
        for known in TechnicalParameter::ALL {
            assert_eq!(summary.parameter(known), None);
        }
    }

    #[test]
    fn test_all_recognised_parameters() {
        let mut record = resistor();
        record.parameters = TechnicalParameter::ALL
            .iter()
            .map(|p| parameter(p.display_name(), p.field_name()))
            .collect();

        let summary = extract_summary(&[record]).unwrap();
        for known in TechnicalParameter::ALL {
            assert_eq!(summary.parameter(known), Some(known.field_name()));
        }
    }

    #[test]
    fn test_repeated_parameter_last_wins() {
        let mut record = resistor();
        record.parameters = vec![
            parameter("Operating Temperature", "-55°C ~ 155°C"),
            parameter("Operating Temperature", "-40°C ~ 125°C"),
        ];

        let summary = extract_summary(&[record]).unwrap();
        assert_eq!(summary.op_temp.as_deref(), Some("-40°C ~ 125°C"));
    }

    #[test]
    fn test_first_record_only() {
        let mut second = resistor();
        second.manufacturer_part_number = Some("R1-ALT".to_string());

        let summary = extract_summary(&[resistor(), second]).unwrap();
        assert_eq!(summary.manufacturer_part_number, "R1");
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(extract_summary(&[]), Err(ExtractError::NoProductDetails));
    }

    #[test]
    fn test_missing_manufacturer() {
        let mut record = resistor();
        record.manufacturer = Some(Manufacturer {
            id: Some(13),
            value: None,
        });
        assert_eq!(
            extract_summary(&[record]),
            Err(ExtractError::MissingField("manufacturer"))
        );
    }

    #[test]
    fn test_missing_description() {
        let mut record = resistor();
        record.detailed_description = None;
        assert_eq!(
            extract_summary(&[record]),
            Err(ExtractError::MissingField("detailed_description"))
        );
    }

    #[test]
    fn test_empty_pricing() {
        let mut record = resistor();
        record.standard_pricing.clear();
        assert_eq!(extract_summary(&[record]), Err(ExtractError::NoPricing));
    }

    #[test]
    fn test_optional_fields_stay_none() {
        let summary = extract_summary(&[resistor()]).unwrap();
        assert!(summary.primary_datasheet.is_none());
        assert!(summary.quantity_available.is_none());
        assert!(summary.non_stock.is_none());
    }
}

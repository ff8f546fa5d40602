//! Writing and reloading result sets
//!
//! A result set is persisted in two independent formats:
//!
//! - a native dump (bincode), meant only to be read back by [`read_native`]
//! - a JSON rendering with sorted keys and 4-space indentation, for people and tools
//!
//! Both writes overwrite the target file in full.

use crate::error::Result;
use partscout_domain::{FetchOutcome, PartSummary, ResultSet, TechnicalParameter};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Key holding the failure reason in a failed entry
pub const ERROR_KEY: &str = "error";

/// Write the native dump of `results` to `path`
pub fn write_native(results: &ResultSet, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, results)?;
    writer.flush()?;
    info!("Wrote native dump of {} parts to {}", results.len(), path.display());
    Ok(())
}

/// Read a native dump written by [`write_native`]
pub fn read_native(path: &Path) -> Result<ResultSet> {
    let reader = BufReader::new(File::open(path)?);
    let results: ResultSet = bincode::deserialize_from(reader)?;
    Ok(results)
}

/// Render `results` as JSON text
///
/// Each entry is an object keyed by part number. Found parts map to their
/// summary fields, with technical parameters omitted when the record did not
/// report them; failed parts map to `{"error": "<reason>"}`. Object keys are
/// sorted at every level.
pub fn render_json(results: &ResultSet) -> Result<String> {
    let entries = results
        .iter()
        .map(outcome_to_value)
        .collect::<Result<Vec<_>>>()?;

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    entries.serialize(&mut serializer)?;

    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Write the JSON rendering of `results` to `path`
pub fn write_json(results: &ResultSet, path: &Path) -> Result<()> {
    fs::write(path, render_json(results)?)?;
    info!("Wrote JSON for {} parts to {}", results.len(), path.display());
    Ok(())
}

/// Reload a native dump and write its JSON rendering, without any lookups
pub fn reexport(native_path: &Path, json_path: &Path) -> Result<ResultSet> {
    let results = read_native(native_path)?;
    info!(
        "Loaded {} parts ({} found, {} failed) from {}",
        results.len(),
        results.found_count(),
        results.failed_count(),
        native_path.display()
    );
    write_json(&results, json_path)?;
    Ok(results)
}

fn outcome_to_value(outcome: &FetchOutcome) -> Result<Value> {
    let body = match outcome {
        FetchOutcome::Found { summary, .. } => summary_to_value(summary)?,
        FetchOutcome::Failed { reason, .. } => {
            let mut fields = BTreeMap::new();
            fields.insert(ERROR_KEY.to_string(), Value::String(reason.clone()));
            serde_json::to_value(fields)?
        }
    };

    let mut entry = BTreeMap::new();
    entry.insert(outcome.part().to_string(), body);
    Ok(serde_json::to_value(entry)?)
}

fn summary_to_value(summary: &PartSummary) -> Result<Value> {
    // Unreported technical parameters are left out instead of written as null
    let fields: BTreeMap<String, Value> = match serde_json::to_value(summary)? {
        Value::Object(map) => map
            .into_iter()
            .filter(|(key, value)| !(value.is_null() && is_parameter_field(key)))
            .collect(),
        other => return Ok(other),
    };

    Ok(serde_json::to_value(fields)?)
}

fn is_parameter_field(key: &str) -> bool {
    TechnicalParameter::ALL
        .iter()
        .any(|p| p.field_name() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use partscout_domain::PartIdentifier;

    fn summary() -> PartSummary {
        PartSummary {
            manufacturer: "Yageo".to_string(),
            manufacturer_part_number: "R1".to_string(),
            detailed_description: "Resistor".to_string(),
            resistance: Some("10k".to_string()),
            tolerance: None,
            power: None,
            temp_coeff: None,
            op_temp: None,
            package: Some("0603 (1608 Metric)".to_string()),
            ratings: None,
            size_area: None,
            standard_pricing: 0.01,
            product_status: Some("Active".to_string()),
            non_stock: Some(false),
            quantity_available: Some(120),
            manufacturer_public_quantity: None,
            manufacturer_lead_weeks: Some("15".to_string()),
            quantity_on_order: Some(0),
            ro_hs_status: Some("ROHS3 Compliant".to_string()),
            lead_status: Some("Lead free".to_string()),
            product_url: None,
            primary_datasheet: None,
        }
    }

    fn results() -> ResultSet {
        vec![
            FetchOutcome::Found {
                part: PartIdentifier::new("R1"),
                summary: summary(),
            },
            FetchOutcome::Failed {
                part: PartIdentifier::new("C2"),
                reason: "Communication error: connection refused".to_string(),
            },
        ]
        .into_iter()
        .collect()
    }

    fn assert_keys_sorted(value: &Value) {
        match value {
            Value::Object(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                let mut sorted = keys.clone();
                sorted.sort();
                assert_eq!(keys, sorted);
                map.values().for_each(assert_keys_sorted);
            }
            Value::Array(items) => items.iter().for_each(assert_keys_sorted),
            _ => {}
        }
    }

    #[test]
    fn test_json_shape() {
        let json = render_json(&results()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["R1"]["resistance"], "10k");
        assert_eq!(entries[0]["R1"]["standard_pricing"], 0.01);
        assert_eq!(entries[0]["R1"]["manufacturer"], "Yageo");
        assert_eq!(
            entries[1]["C2"][ERROR_KEY],
            "Communication error: connection refused"
        );
    }

    #[test]
    fn test_absent_parameters_omitted_other_nulls_kept() {
        let json = render_json(&results()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let r1 = value[0]["R1"].as_object().unwrap();

        assert!(!r1.contains_key("tolerance"));
        assert!(!r1.contains_key("size_area"));
        assert!(r1.contains_key("package"));
        assert!(r1.contains_key("primary_datasheet"));
        assert!(r1["primary_datasheet"].is_null());
    }

    #[test]
    fn test_json_keys_sorted_at_every_level() {
        let json = render_json(&results()).unwrap();

        // Textual order, independent of how the parser stores maps
        let detailed = json.find("\"detailed_description\"").unwrap();
        let manufacturer = json.find("\"manufacturer\"").unwrap();
        let url = json.find("\"product_url\"").unwrap();
        assert!(detailed < manufacturer);
        assert!(manufacturer < url);

        assert_keys_sorted(&serde_json::from_str(&json).unwrap());
    }

    #[test]
    fn test_json_indentation() {
        let json = render_json(&results()).unwrap();
        let mut lines = json.lines();
        assert_eq!(lines.next(), Some("["));
        assert_eq!(lines.next(), Some("    {"));
        assert_eq!(lines.next(), Some("        \"R1\": {"));
    }

    #[test]
    fn test_empty_result_set() {
        assert_eq!(render_json(&ResultSet::new()).unwrap(), "[]");
    }

    #[test]
    fn test_native_round_trip_and_reexport() {
        let dir = tempfile::tempdir().unwrap();
        let native = dir.path().join("objs.bin");
        let direct = dir.path().join("direct.json");
        let reexported = dir.path().join("reexported.json");

        let original = results();
        write_native(&original, &native).unwrap();
        write_json(&original, &direct).unwrap();

        let reloaded = reexport(&native, &reexported).unwrap();
        assert_eq!(reloaded, original);
        assert_eq!(fs::read(&direct).unwrap(), fs::read(&reexported).unwrap());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "x".repeat(10_000)).unwrap();

        write_json(&ResultSet::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_read_native_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_native(&dir.path().join("missing.bin")).is_err());
    }

    #[test]
    fn test_read_native_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("objs.bin");
        fs::write(&path, b"\xff\xff\xff\xff\xff\xff\xff\xff\x01").unwrap();
        assert!(read_native(&path).is_err());
    }
}

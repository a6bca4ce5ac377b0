//! Badge records: the raw upstream shape, normalization, and validation.
//!
//! Records arrive from the employee directory (or from manual entry) with
//! camelCase field names and possibly-missing fields. [`Record::normalize`]
//! coerces every field to an uppercase `String`; [`Record::validate`]
//! accumulates one error per missing field so a caller sees everything
//! wrong with a record at once.

use serde::{Deserialize, Serialize};

/// Untrusted record as received from upstream.
///
/// Every field is optional on the wire; a missing field normalizes to the
/// empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    /// Employee full name.
    pub name: String,
    /// Employee identifier.
    pub subject_id: String,
    /// Work-front identifier.
    pub front_id: String,
    /// Contractor identifier.
    pub contractor_id: String,
    /// Contractor display name.
    pub contractor_name: String,
    /// Data content of the PDF417 barcode.
    pub barcode_payload: String,
}

/// A normalized badge record. Immutable once built; every field uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Employee full name.
    pub name: String,
    /// Employee identifier.
    pub subject_id: String,
    /// Work-front identifier.
    pub front_id: String,
    /// Contractor identifier.
    pub contractor_id: String,
    /// Contractor display name.
    pub contractor_name: String,
    /// Data content of the PDF417 barcode. Non-empty whenever the record
    /// is valid.
    pub barcode_payload: String,
}

impl Record {
    /// Normalize a raw record: every field uppercased, missing fields
    /// already defaulted to the empty string by deserialization. Never
    /// fails; no I/O.
    pub fn normalize(raw: &RawRecord) -> Self {
        Self {
            name: raw.name.to_uppercase(),
            subject_id: raw.subject_id.to_uppercase(),
            front_id: raw.front_id.to_uppercase(),
            contractor_id: raw.contractor_id.to_uppercase(),
            contractor_name: raw.contractor_name.to_uppercase(),
            barcode_payload: raw.barcode_payload.to_uppercase(),
        }
    }

    /// Check that all six fields are present.
    ///
    /// Accumulates one message per missing field rather than stopping at
    /// the first, so the report names every gap in the record.
    pub fn validate(&self) -> ValidationReport {
        let fields: [(&str, &str); 6] = [
            ("name", &self.name),
            ("subjectId", &self.subject_id),
            ("frontId", &self.front_id),
            ("contractorId", &self.contractor_id),
            ("contractorName", &self.contractor_name),
            ("barcodePayload", &self.barcode_payload),
        ];

        let errors: Vec<String> = fields
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| format!("field \"{field}\" is required"))
            .collect();

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Result of validating a record's required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// `true` when every required field is present.
    pub is_valid: bool,
    /// One human-readable message per missing field.
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_sample() -> RawRecord {
        RawRecord {
            name: "Juan Perez".into(),
            subject_id: "35481".into(),
            front_id: "205".into(),
            contractor_id: "803".into(),
            contractor_name: "Carlos Martinez".into(),
            barcode_payload: "35481205803".into(),
        }
    }

    #[test]
    fn normalize_uppercases_every_field() {
        let record = Record::normalize(&raw_sample());
        assert_eq!(record.name, "JUAN PEREZ");
        assert_eq!(record.subject_id, "35481");
        assert_eq!(record.front_id, "205");
        assert_eq!(record.contractor_id, "803");
        assert_eq!(record.contractor_name, "CARLOS MARTINEZ");
        assert_eq!(record.barcode_payload, "35481205803");
    }

    #[test]
    fn normalize_defaults_missing_fields_to_empty() {
        let raw: RawRecord = serde_json::from_str(r#"{"name": "ana"}"#).unwrap();
        let record = Record::normalize(&raw);
        assert_eq!(record.name, "ANA");
        assert_eq!(record.subject_id, "");
        assert_eq!(record.barcode_payload, "");
    }

    #[test]
    fn raw_record_accepts_camel_case_fields() {
        let raw: RawRecord = serde_json::from_str(
            r#"{
                "name": "Juan Perez",
                "subjectId": "35481",
                "frontId": "205",
                "contractorId": "803",
                "contractorName": "Carlos Martinez",
                "barcodePayload": "35481205803"
            }"#,
        )
        .unwrap();
        assert_eq!(raw.subject_id, "35481");
        assert_eq!(raw.barcode_payload, "35481205803");
    }

    #[test]
    fn validate_accepts_complete_record() {
        let report = Record::normalize(&raw_sample()).validate();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn validate_empty_record_reports_all_six_fields() {
        let report = Record::normalize(&RawRecord::default()).validate();
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 6);
    }

    #[test]
    fn validate_accumulates_one_error_per_missing_field() {
        let mut raw = raw_sample();
        raw.name = String::new();
        raw.contractor_name = String::new();
        let report = Record::normalize(&raw).validate();

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("\"name\""));
        assert!(report.errors[1].contains("\"contractorName\""));
    }

    #[test]
    fn validation_report_serializes_camel_case() {
        let report = Record::normalize(&RawRecord::default()).validate();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"].as_array().unwrap().len(), 6);
    }
}

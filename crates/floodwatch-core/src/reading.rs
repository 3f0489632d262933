//! Sensor readings and the parse-with-default step for the water level.
//!
//! The reporting device posts a JSON object carrying the water level in
//! centimetres under [`WATER_LEVEL_FIELD`]. The field is optional and
//! loosely typed: numbers are taken as-is, numeric strings and booleans
//! are coerced, and anything else falls back to zero. [`WaterLevel`]
//! records which branch produced the value so the permissive policy is
//! visible to callers and logs.
//!
//! Number literals beyond the `f64` range (`1e400`) are valid JSON and
//! saturate to infinity rather than being rejected.

use serde_json::Value;

/// JSON field carrying the water level in centimetres.
pub const WATER_LEVEL_FIELD: &str = "muc_nuoc";

/// Errors produced when a request payload cannot carry a reading at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    /// The payload was valid JSON but not an object.
    #[error("reading payload must be a JSON object, got {kind}")]
    NotAnObject {
        /// JSON type name of the rejected payload.
        kind: &'static str,
    },
}

/// Water level extracted from a payload, tagged with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaterLevel {
    /// The field held a JSON number.
    Reported(f64),
    /// The field held a numeric string or a boolean.
    Coerced(f64),
    /// The field was absent. Counts as 0 cm.
    Missing,
    /// The field was present but not convertible to a number. Counts as 0 cm.
    Unparseable,
}

impl WaterLevel {
    /// Interpret the raw field value, defaulting to zero when it is absent
    /// or not numeric.
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Number(n)) => n
                .as_f64()
                .or_else(|| n.to_string().parse::<f64>().ok())
                .map_or(Self::Unparseable, Self::Reported),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_or(Self::Unparseable, Self::Coerced),
            Some(Value::Bool(b)) => Self::Coerced(if *b { 1.0 } else { 0.0 }),
            Some(Value::Null | Value::Array(_) | Value::Object(_)) => Self::Unparseable,
        }
    }

    /// Effective level in centimetres.
    pub const fn cm(self) -> f64 {
        match self {
            Self::Reported(cm) | Self::Coerced(cm) => cm,
            Self::Missing | Self::Unparseable => 0.0,
        }
    }

    /// Whether the zero default was substituted for the submitted value.
    pub const fn is_defaulted(self) -> bool {
        matches!(self, Self::Missing | Self::Unparseable)
    }

    /// Short label for log fields.
    pub const fn source(self) -> &'static str {
        match self {
            Self::Reported(_) => "reported",
            Self::Coerced(_) => "coerced",
            Self::Missing => "missing",
            Self::Unparseable => "unparseable",
        }
    }
}

/// A single water-level measurement submitted by the sensor device.
///
/// Readings are ephemeral: only the flood classification they produce
/// outlives the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    level: WaterLevel,
}

impl Reading {
    /// Build a reading from a level that has already been interpreted.
    pub const fn new(level: WaterLevel) -> Self {
        Self { level }
    }

    /// Build a reading from a decoded JSON request body.
    ///
    /// Any JSON object is accepted; a missing or non-numeric
    /// [`WATER_LEVEL_FIELD`] yields a zero level rather than an error.
    pub fn from_json(payload: &Value) -> Result<Self, ReadingError> {
        let Value::Object(fields) = payload else {
            return Err(ReadingError::NotAnObject {
                kind: json_kind(payload),
            });
        };
        Ok(Self::new(WaterLevel::from_field(fields.get(WATER_LEVEL_FIELD))))
    }

    /// The interpreted water level.
    pub const fn level(&self) -> WaterLevel {
        self.level
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_field_is_reported() {
        let reading = Reading::from_json(&json!({ "muc_nuoc": 2.75 })).unwrap();
        assert_eq!(reading.level(), WaterLevel::Reported(2.75));
        assert_eq!(reading.level().cm(), 2.75);
    }

    #[test]
    fn integer_field_is_reported_as_float() {
        let reading = Reading::from_json(&json!({ "muc_nuoc": 3 })).unwrap();
        assert_eq!(reading.level().cm(), 3.0);
        assert!(!reading.level().is_defaulted());
    }

    #[test]
    fn numeric_string_is_coerced() {
        let reading = Reading::from_json(&json!({ "muc_nuoc": " 1.9 " })).unwrap();
        assert_eq!(reading.level(), WaterLevel::Coerced(1.9));
    }

    #[test]
    fn booleans_are_coerced_to_one_and_zero() {
        assert_eq!(
            WaterLevel::from_field(Some(&json!(true))),
            WaterLevel::Coerced(1.0)
        );
        assert_eq!(
            WaterLevel::from_field(Some(&json!(false))),
            WaterLevel::Coerced(0.0)
        );
    }

    #[test]
    fn missing_field_defaults_to_zero() {
        let reading = Reading::from_json(&json!({ "other": 9.0 })).unwrap();
        assert_eq!(reading.level(), WaterLevel::Missing);
        assert_eq!(reading.level().cm(), 0.0);
        assert!(reading.level().is_defaulted());
    }

    #[test]
    fn non_numeric_values_default_to_zero() {
        for raw in [json!("deep"), json!(null), json!([4.0]), json!({ "cm": 4.0 })] {
            let level = WaterLevel::from_field(Some(&raw));
            assert_eq!(level, WaterLevel::Unparseable, "for {raw}");
            assert_eq!(level.cm(), 0.0);
        }
    }

    #[test]
    fn negative_and_extreme_values_pass_through() {
        assert_eq!(
            WaterLevel::from_field(Some(&json!(-40.0))).cm(),
            -40.0
        );
        assert_eq!(
            WaterLevel::from_field(Some(&json!(1.0e9))).cm(),
            1.0e9
        );
    }

    #[test]
    fn out_of_range_numbers_saturate_to_infinity() {
        let payload: Value = serde_json::from_str(r#"{"muc_nuoc": 1e400}"#).unwrap();
        let reading = Reading::from_json(&payload).unwrap();
        assert_eq!(reading.level(), WaterLevel::Reported(f64::INFINITY));

        let payload: Value = serde_json::from_str(r#"{"muc_nuoc": -1e400}"#).unwrap();
        let reading = Reading::from_json(&payload).unwrap();
        assert_eq!(reading.level().cm(), f64::NEG_INFINITY);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = Reading::from_json(&json!([1.0, 2.0])).unwrap_err();
        assert_eq!(err, ReadingError::NotAnObject { kind: "array" });

        let err = Reading::from_json(&json!(2.0)).unwrap_err();
        assert_eq!(err, ReadingError::NotAnObject { kind: "number" });
    }

    #[test]
    fn source_labels() {
        assert_eq!(WaterLevel::Reported(1.0).source(), "reported");
        assert_eq!(WaterLevel::Missing.source(), "missing");
    }
}

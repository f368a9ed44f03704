//! Current widget values.
//!
//! Values are kept loosely typed (what the user typed or what a document
//! contained) and re-validated against their descriptor before a render.

use crate::params::ParamSet;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Choice(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            ParamValue::Choice(_) => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            ParamValue::Choice(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }

    fn as_exact_int(&self) -> Option<i64> {
        match self {
            ParamValue::Number(v) if v.fract() == 0.0 && v.abs() < 9.0e15 => Some(*v as i64),
            _ => None,
        }
    }

    fn to_json(&self) -> Value {
        match (self, self.as_exact_int()) {
            (_, Some(i)) => Value::from(i),
            (ParamValue::Number(v), None) => Value::from(*v),
            (ParamValue::Choice(s), None) => Value::from(s.as_str()),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(ParamValue::Number),
            Value::String(s) => Some(ParamValue::Choice(s.clone())),
            Value::Bool(b) => Some(ParamValue::Number(if *b { 1.0 } else { 0.0 })),
            _ => None,
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self, self.as_exact_int()) {
            (_, Some(i)) => serializer.serialize_i64(i),
            (ParamValue::Number(v), None) => serializer.serialize_f64(*v),
            (ParamValue::Choice(s), None) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.as_exact_int()) {
            (_, Some(i)) => write!(f, "{i}"),
            (ParamValue::Number(v), None) => write!(f, "{v}"),
            (ParamValue::Choice(s), None) => f.write_str(s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        ParamValue::Number(v as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Choice(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Choice(v)
    }
}

/// Outcome of merging a parameter document into current values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub applied: Vec<String>,
    pub ignored: Vec<String>,
}

/// Values currently chosen by the user, keyed by parameter name.
///
/// Iteration is in key order, which is also the export order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentValues {
    values: BTreeMap<String, ParamValue>,
}

impl CurrentValues {
    /// One entry per descriptor, set to its default.
    pub fn from_defaults(set: &ParamSet) -> Self {
        Self {
            values: set
                .iter()
                .map(|(name, d)| (name.to_string(), d.default_value()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Store a raw value; validation happens in [`CurrentValues::validated`].
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_number)
    }

    /// Non-negative integral value, as used for axes and indices.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.number(name)
            .filter(|v| *v >= 0.0 && v.fract() == 0.0)
            .map(|v| v as usize)
    }

    pub fn choice(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_choice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Re-validate against a parameter set.
    ///
    /// The result has exactly the set's keys. Missing or ill-typed values
    /// fall back to the descriptor default; numbers are clamped into range.
    pub fn validated(&self, set: &ParamSet) -> CurrentValues {
        let values = set
            .iter()
            .map(|(name, descriptor)| {
                let value = match self.values.get(name) {
                    Some(raw) => descriptor.coerce(name, raw).unwrap_or_else(|err| {
                        tracing::warn!(%err, "using default value");
                        descriptor.default_value()
                    }),
                    None => descriptor.default_value(),
                };
                (name.to_string(), value)
            })
            .collect();
        CurrentValues { values }
    }

    /// Flat key → value document.
    pub fn to_document(&self) -> Map<String, Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }

    /// Apply a flat document.
    ///
    /// Keys absent from `set` are ignored; keys absent from the document keep
    /// their current value. Applied values are coerced; a value that fails
    /// coercion is ignored too.
    pub fn merge_document(&mut self, set: &ParamSet, document: &Map<String, Value>) -> MergeReport {
        let mut report = MergeReport::default();
        for (name, raw) in document {
            let coerced = set.get(name).and_then(|descriptor| {
                let value = ParamValue::from_json(raw)?;
                descriptor
                    .coerce(name, &value)
                    .map_err(|err| tracing::warn!(%err, "ignoring imported value"))
                    .ok()
            });
            match coerced {
                Some(value) => {
                    self.values.insert(name.clone(), value);
                    report.applied.push(name.clone());
                }
                None => report.ignored.push(name.clone()),
            }
        }
        if !report.ignored.is_empty() {
            tracing::debug!(ignored = ?report.ignored, "ignored document keys");
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{EnumParam, NumericParam, ParamDescriptor};
    use serde_json::json;

    fn sample_set() -> ParamSet {
        let mut set = ParamSet::new();
        set.insert(
            "axis",
            ParamDescriptor::Numeric(NumericParam::integer("Axis", 0, 0, 2)),
        );
        set.insert(
            "line-width",
            ParamDescriptor::Numeric(NumericParam::float("Line Width", 1.0, 0.0, 9.5, 0.5)),
        );
        set.insert(
            "complex_mode",
            ParamDescriptor::Enumerated(EnumParam::new(
                "Complex Mode",
                "real-imag",
                ["real-imag", "mag-phase"],
            )),
        );
        set
    }

    #[test]
    fn defaults_cover_every_key() {
        let set = sample_set();
        let values = CurrentValues::from_defaults(&set);
        assert_eq!(values.len(), 3);
        assert_eq!(values.index("axis"), Some(0));
        assert_eq!(values.number("line-width"), Some(1.0));
        assert_eq!(values.choice("complex_mode"), Some("real-imag"));
    }

    #[test]
    fn validated_falls_back_and_clamps() {
        let set = sample_set();
        let mut values = CurrentValues::from_defaults(&set);
        values.set("axis", 7.0);
        values.set("line-width", "thick");
        values.set("complex_mode", "polar");
        values.set("stray", 1.0);

        let checked = values.validated(&set);
        assert_eq!(checked.len(), 3);
        assert_eq!(checked.index("axis"), Some(2));
        assert_eq!(checked.number("line-width"), Some(1.0));
        assert_eq!(checked.choice("complex_mode"), Some("real-imag"));
        assert!(checked.get("stray").is_none());
    }

    #[test]
    fn document_exports_integers_as_integers() {
        let set = sample_set();
        let doc = CurrentValues::from_defaults(&set).to_document();
        assert_eq!(doc["axis"], json!(0));
        assert_eq!(doc["line-width"], json!(1));
        assert_eq!(doc["complex_mode"], json!("real-imag"));

        let mut values = CurrentValues::from_defaults(&set);
        values.set("line-width", 2.5);
        assert_eq!(values.to_document()["line-width"], json!(2.5));
    }

    #[test]
    fn merge_ignores_unknown_keys_and_keeps_missing() {
        let set = sample_set();
        let mut values = CurrentValues::from_defaults(&set);
        values.set("line-width", 3.0);

        let doc = json!({
            "axis": "2",
            "complex_mode": "mag-phase",
            "no-such-param": 5,
        });
        let report = values.merge_document(&set, doc.as_object().unwrap());

        assert_eq!(report.applied, ["axis", "complex_mode"]);
        assert_eq!(report.ignored, ["no-such-param"]);
        assert_eq!(values.index("axis"), Some(2));
        assert_eq!(values.choice("complex_mode"), Some("mag-phase"));
        assert_eq!(values.number("line-width"), Some(3.0));
    }

    #[test]
    fn serde_round_trip_through_json() {
        let set = sample_set();
        let values = CurrentValues::from_defaults(&set);
        let text = serde_json::to_string(&values).unwrap();
        let back: CurrentValues = serde_json::from_str(&text).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn display_drops_trailing_zero() {
        assert_eq!(ParamValue::Number(3.0).to_string(), "3");
        assert_eq!(ParamValue::Number(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::from("gray").to_string(), "gray");
    }
}

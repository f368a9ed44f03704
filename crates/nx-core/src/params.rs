//! Interactive parameter descriptors.
//!
//! A descriptor tells the GUI which widget to build (numeric range with a
//! spin box, or a combo box) and tells the renderers which values are legal.

use crate::values::ParamValue;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameter names shared by the builder, the renderers and the GUI.
pub mod keys {
    pub const COMPLEX_MODE: &str = "complex_mode";
    pub const COMPLEX_DISPLAY_MODE: &str = "complex_display_mode";
    pub const AXIS: &str = "axis";
    pub const AXIS_0: &str = "axis-0";
    pub const AXIS_1: &str = "axis-1";
    pub const LINE_COLOR: &str = "line-color";
    pub const LINE_WIDTH: &str = "line-width";
    pub const LINE_STYLE: &str = "line-style";
    pub const LINE_MARKER: &str = "line-marker";
    pub const MARKER_SIZE: &str = "marker-size";
    pub const CMAP_0: &str = "cmap-0";
    pub const CMAP_1: &str = "cmap-1";

    pub const INDEX_PREFIX: &str = "index-";
    pub const X_INDEX_PREFIX: &str = "x-index-";
    pub const Y_INDEX_PREFIX: &str = "y-index-";

    pub fn index(axis: usize) -> String {
        format!("{INDEX_PREFIX}{axis}")
    }

    pub fn x_index(axis: usize) -> String {
        format!("{X_INDEX_PREFIX}{axis}")
    }

    pub fn y_index(axis: usize) -> String {
        format!("{Y_INDEX_PREFIX}{axis}")
    }
}

/// Numeric parameter: a range with a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericParam {
    pub label: String,
    pub default: f64,
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    /// Integer-valued (axes and indices).
    #[serde(default)]
    pub integral: bool,
}

impl NumericParam {
    pub fn float(label: impl Into<String>, default: f64, start: f64, stop: f64, step: f64) -> Self {
        Self {
            label: label.into(),
            default,
            start,
            stop,
            step,
            integral: false,
        }
    }

    /// Integer range `start..=stop` with step 1.
    pub fn integer(label: impl Into<String>, default: usize, start: usize, stop: usize) -> Self {
        Self {
            label: label.into(),
            default: default as f64,
            start: start as f64,
            stop: stop as f64,
            step: 1.0,
            integral: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.stop
    }

    /// Bring a value into the declared range; integral values are rounded.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if self.integral { value.round() } else { value };
        value.clamp(self.start, self.stop)
    }

    fn check(&self, name: &str) -> CoreResult<()> {
        let invalid = |what| CoreError::InvalidDescriptor {
            name: name.to_string(),
            what,
        };
        if !(self.step > 0.0) {
            return Err(invalid("step must be positive"));
        }
        if !(self.start <= self.stop) {
            return Err(invalid("start must not exceed stop"));
        }
        if !self.contains(self.default) {
            return Err(invalid("default outside [start, stop]"));
        }
        Ok(())
    }
}

/// Enumerated parameter: one of a fixed set of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumParam {
    pub label: String,
    pub default: String,
    pub values: Vec<String>,
}

impl EnumParam {
    pub fn new<I, S>(label: impl Into<String>, default: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            default: default.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    fn check(&self, name: &str) -> CoreResult<()> {
        if !self.contains(&self.default) {
            return Err(CoreError::InvalidDescriptor {
                name: name.to_string(),
                what: "default not among values",
            });
        }
        Ok(())
    }
}

/// Descriptor of one interactive parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamDescriptor {
    Numeric(NumericParam),
    Enumerated(EnumParam),
}

impl ParamDescriptor {
    pub fn label(&self) -> &str {
        match self {
            ParamDescriptor::Numeric(p) => &p.label,
            ParamDescriptor::Enumerated(p) => &p.label,
        }
    }

    pub fn default_value(&self) -> ParamValue {
        match self {
            ParamDescriptor::Numeric(p) => ParamValue::Number(p.default),
            ParamDescriptor::Enumerated(p) => ParamValue::Choice(p.default.clone()),
        }
    }

    /// Check the descriptor's own invariants.
    pub fn check(&self, name: &str) -> CoreResult<()> {
        match self {
            ParamDescriptor::Numeric(p) => p.check(name),
            ParamDescriptor::Enumerated(p) => p.check(name),
        }
    }

    /// Convert a user-supplied value to one this descriptor accepts.
    ///
    /// Numbers are clamped into range. Numeric text is parsed. A choice must
    /// be one of the declared values.
    pub fn coerce(&self, name: &str, value: &ParamValue) -> CoreResult<ParamValue> {
        match (self, value) {
            (ParamDescriptor::Numeric(p), ParamValue::Number(v)) if v.is_finite() => {
                Ok(ParamValue::Number(p.clamp(*v)))
            }
            (ParamDescriptor::Numeric(p), ParamValue::Choice(text)) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| ParamValue::Number(p.clamp(v)))
                .ok_or_else(|| CoreError::TypeMismatch {
                    name: name.to_string(),
                    expected: "number",
                }),
            (ParamDescriptor::Numeric(_), ParamValue::Number(_)) => Err(CoreError::TypeMismatch {
                name: name.to_string(),
                expected: "finite number",
            }),
            (ParamDescriptor::Enumerated(p), ParamValue::Choice(choice)) => {
                if p.contains(choice) {
                    Ok(ParamValue::Choice(choice.clone()))
                } else {
                    Err(CoreError::UnknownChoice {
                        name: name.to_string(),
                        value: choice.clone(),
                    })
                }
            }
            (ParamDescriptor::Enumerated(p), ParamValue::Number(v)) => {
                // Numeric-looking choices ("1", "2") may arrive as numbers.
                let text = ParamValue::Number(*v).to_string();
                if p.contains(&text) {
                    Ok(ParamValue::Choice(text))
                } else {
                    Err(CoreError::TypeMismatch {
                        name: name.to_string(),
                        expected: "choice",
                    })
                }
            }
        }
    }
}

/// Ordered mapping from parameter name to descriptor.
///
/// Order only affects widget layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    entries: Vec<(String, ParamDescriptor)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: ParamDescriptor) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = descriptor,
            None => self.entries.push((name, descriptor)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamDescriptor> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamDescriptor)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every descriptor's invariants.
    pub fn check(&self) -> CoreResult<()> {
        self.iter().try_for_each(|(name, d)| d.check(name))
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type Item = (&'a str, &'a ParamDescriptor);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// How a complex slice is split into two real panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexMode {
    #[default]
    RealImag,
    MagPhase,
}

impl ComplexMode {
    pub const ALL: [ComplexMode; 2] = [ComplexMode::RealImag, ComplexMode::MagPhase];

    pub fn key(self) -> &'static str {
        match self {
            ComplexMode::RealImag => "real-imag",
            ComplexMode::MagPhase => "mag-phase",
        }
    }
}

/// Panel layout for a complex slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexDisplay {
    #[default]
    Auto,
    Horizontal,
    Vertical,
}

impl ComplexDisplay {
    pub const ALL: [ComplexDisplay; 3] = [
        ComplexDisplay::Auto,
        ComplexDisplay::Horizontal,
        ComplexDisplay::Vertical,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ComplexDisplay::Auto => "auto",
            ComplexDisplay::Horizontal => "horizontal",
            ComplexDisplay::Vertical => "vertical",
        }
    }
}

macro_rules! keyed_choice {
    ($ty:ident, $param:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|v| v.key() == s)
                    .ok_or_else(|| CoreError::UnknownChoice {
                        name: $param.to_string(),
                        value: s.to_string(),
                    })
            }
        }
    };
}

keyed_choice!(ComplexMode, keys::COMPLEX_MODE);
keyed_choice!(ComplexDisplay, keys::COMPLEX_DISPLAY_MODE);

#[cfg(test)]
mod tests {
    use super::*;

    fn width() -> ParamDescriptor {
        ParamDescriptor::Numeric(NumericParam::float("Line Width", 1.0, 0.0, 9.5, 0.5))
    }

    #[test]
    fn numeric_coerce_clamps_and_parses() {
        let d = width();
        assert_eq!(
            d.coerce("w", &ParamValue::Number(12.0)).unwrap(),
            ParamValue::Number(9.5)
        );
        assert_eq!(
            d.coerce("w", &ParamValue::Choice(" 2.5 ".into())).unwrap(),
            ParamValue::Number(2.5)
        );
        assert!(d.coerce("w", &ParamValue::Choice("wide".into())).is_err());
        assert!(d.coerce("w", &ParamValue::Number(f64::NAN)).is_err());
    }

    #[test]
    fn integral_values_are_rounded() {
        let d = ParamDescriptor::Numeric(NumericParam::integer("Axis", 0, 0, 3));
        assert_eq!(
            d.coerce("axis", &ParamValue::Number(1.6)).unwrap(),
            ParamValue::Number(2.0)
        );
        assert_eq!(
            d.coerce("axis", &ParamValue::Number(-4.0)).unwrap(),
            ParamValue::Number(0.0)
        );
    }

    #[test]
    fn enumerated_coerce_requires_membership() {
        let d = ParamDescriptor::Enumerated(EnumParam::new(
            "Complex Mode",
            "real-imag",
            ["real-imag", "mag-phase"],
        ));
        assert!(d.coerce("m", &ParamValue::Choice("mag-phase".into())).is_ok());
        assert!(matches!(
            d.coerce("m", &ParamValue::Choice("polar".into())),
            Err(CoreError::UnknownChoice { .. })
        ));
        assert!(d.coerce("m", &ParamValue::Number(1.0)).is_err());
    }

    #[test]
    fn check_rejects_bad_descriptors() {
        let bad_default = NumericParam::float("x", 11.0, 0.0, 10.0, 1.0);
        assert!(ParamDescriptor::Numeric(bad_default).check("x").is_err());

        let bad_step = NumericParam::float("x", 1.0, 0.0, 10.0, 0.0);
        assert!(ParamDescriptor::Numeric(bad_step).check("x").is_err());

        let bad_choice = EnumParam::new("c", "d", ["a", "b"]);
        assert!(ParamDescriptor::Enumerated(bad_choice).check("c").is_err());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut set = ParamSet::new();
        set.insert("a", width());
        set.insert("b", width());
        set.insert(
            "a",
            ParamDescriptor::Numeric(NumericParam::integer("A", 0, 0, 1)),
        );
        assert_eq!(set.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(set.get("a").unwrap().label(), "A");
    }

    #[test]
    fn complex_choices_parse() {
        assert_eq!("mag-phase".parse::<ComplexMode>().unwrap(), ComplexMode::MagPhase);
        assert_eq!(
            "vertical".parse::<ComplexDisplay>().unwrap(),
            ComplexDisplay::Vertical
        );
        assert!("diagonal".parse::<ComplexDisplay>().is_err());
    }
}

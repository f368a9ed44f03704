//! Per-view parameter state.
//!
//! A [`ViewSession`] owns the mode, the parameter set built for it, the
//! current values and the figure they were last rendered into. Widget
//! changes re-render immediately; programmatic bulk updates (reset, import,
//! export) suspend that and re-render exactly once when done.

use crate::{AppResult, params_doc};
use nx_core::{ArrayData, CurrentValues, MergeReport, ParamSet, ParamValue, PlotMode};
use nx_plot::{Figure, PlotRequest};
use std::path::Path;
use std::sync::Arc;

pub struct ViewSession {
    array: Arc<ArrayData>,
    mode: PlotMode,
    params: ParamSet,
    values: CurrentValues,
    listening: bool,
    redraws: u64,
    figure: Figure,
}

impl ViewSession {
    /// Select a mode for `array`, build its parameters and render once.
    pub fn new(array: Arc<ArrayData>, explicit_mode: Option<&str>) -> Self {
        let mode = nx_core::select(array.shape(), explicit_mode);
        let params = nx_core::build(mode, array.shape());
        let values = CurrentValues::from_defaults(&params);
        let mut session = Self {
            array,
            mode,
            params,
            values,
            listening: true,
            redraws: 0,
            figure: Figure::new(),
        };
        session.redraw();
        session
    }

    pub fn array(&self) -> &Arc<ArrayData> {
        &self.array
    }

    pub fn mode(&self) -> PlotMode {
        self.mode
    }

    /// Overall figure title.
    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    /// Raw values as last set by widgets or documents.
    pub fn values(&self) -> &CurrentValues {
        &self.values
    }

    /// Values after validation against the parameter set.
    pub fn validated_values(&self) -> CurrentValues {
        self.values.validated(&self.params)
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Number of renders since the session was created.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Whether value changes currently trigger a render.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Store one value. Returns `false` (and changes nothing) for names the
    /// parameter set does not know.
    pub fn set_value(&mut self, name: &str, value: impl Into<ParamValue>) -> bool {
        if !self.params.contains(name) {
            tracing::warn!(name, "ignoring value for unknown parameter");
            return false;
        }
        self.values.set(name, value);
        if self.listening {
            self.redraw();
        }
        true
    }

    /// Switch mode; parameters are rebuilt and values start from defaults.
    pub fn set_mode(&mut self, mode: PlotMode) {
        if mode == self.mode {
            return;
        }
        self.bulk(|s| {
            s.mode = mode;
            s.rebuild();
        });
    }

    /// Show a different array, re-selecting the mode.
    pub fn set_array(&mut self, array: Arc<ArrayData>, explicit_mode: Option<&str>) {
        self.bulk(|s| {
            s.mode = nx_core::select(array.shape(), explicit_mode);
            s.array = array;
            s.rebuild();
        });
    }

    /// Every value back to its default.
    pub fn reset(&mut self) {
        self.bulk(|s| {
            let defaults: Vec<_> = s
                .params
                .iter()
                .map(|(name, d)| (name.to_string(), d.default_value()))
                .collect();
            for (name, value) in defaults {
                s.set_value(&name, value);
            }
        });
    }

    /// Merge a parameter document from `path`.
    ///
    /// A document that cannot be read or parsed leaves the values untouched.
    /// The figure is re-rendered once either way.
    pub fn import_json(&mut self, path: &Path) -> AppResult<MergeReport> {
        self.bulk(|s| {
            let document = params_doc::load(path)?;
            let report = s.values.merge_document(&s.params, &document);
            tracing::info!(
                path = %path.display(),
                applied = report.applied.len(),
                ignored = report.ignored.len(),
                "imported parameters"
            );
            Ok(report)
        })
    }

    /// Write the validated values to `path`.
    pub fn export_json(&mut self, path: &Path) -> AppResult<()> {
        self.bulk(|s| params_doc::save(path, &s.validated_values()))
    }

    /// Render the current values into the figure.
    pub fn redraw(&mut self) {
        nx_plot::render(
            &mut self.figure,
            &PlotRequest {
                mode: self.mode,
                array: &self.array,
                params: &self.params,
                values: &self.values,
                title: self.mode.title(),
            },
        );
        self.redraws += 1;
    }

    fn rebuild(&mut self) {
        self.params = nx_core::build(self.mode, self.array.shape());
        self.values = CurrentValues::from_defaults(&self.params);
        tracing::debug!(mode = %self.mode, params = self.params.len(), "rebuilt parameters");
    }

    /// Run `update` with listeners suspended, then render once.
    fn bulk<R>(&mut self, update: impl FnOnce(&mut Self) -> R) -> R {
        self.listening = false;
        let out = update(self);
        self.listening = true;
        self.redraw();
        out
    }
}

impl std::fmt::Debug for ViewSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewSession")
            .field("shape", &self.array.shape())
            .field("mode", &self.mode)
            .field("params", &self.params.len())
            .field("redraws", &self.redraws)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(shape: &[usize], mode: Option<&str>) -> ViewSession {
        let n = shape.iter().product();
        let arr = ArrayData::real_from_vec(shape, (0..n).map(|v| v as f64).collect()).unwrap();
        ViewSession::new(Arc::new(arr), mode)
    }

    #[test]
    fn new_session_renders_once() {
        let s = session(&[5, 6, 7], None);
        assert_eq!(s.mode(), PlotMode::Map2d);
        assert_eq!(s.redraw_count(), 1);
        assert_eq!(s.figure().title(), Some("2D Map"));
        assert!(s.is_listening());
    }

    #[test]
    fn widget_change_renders_immediately() {
        let mut s = session(&[5, 6, 7], None);
        assert!(s.set_value("index-2", 3usize));
        assert_eq!(s.redraw_count(), 2);
        assert!(!s.set_value("bogus", 1.0));
        assert_eq!(s.redraw_count(), 2);
    }

    #[test]
    fn reset_renders_exactly_once() {
        let mut s = session(&[5, 6, 7], None);
        s.set_value("axis-0", 2usize);
        s.set_value("cmap-1", "hot");
        let before = s.redraw_count();
        s.reset();
        assert_eq!(s.redraw_count(), before + 1);
        assert_eq!(s.values(), &CurrentValues::from_defaults(s.params()));
    }

    #[test]
    fn mode_switch_rebuilds_parameters() {
        let mut s = session(&[5, 6, 7], None);
        s.set_mode(PlotMode::Line1d);
        assert!(s.params().contains("line-color"));
        assert!(!s.params().contains("axis-0"));
        assert_eq!(s.figure().title(), Some("1D"));
        assert_eq!(s.values().len(), s.params().len());
    }

    #[test]
    fn new_array_reselects_mode() {
        let mut s = session(&[5, 6, 7], None);
        let line = ArrayData::real_from_vec(&[3], vec![1.0, 2.0, 3.0]).unwrap();
        s.set_array(Arc::new(line), None);
        assert_eq!(s.mode(), PlotMode::Line1d);
        assert!(s.figure().error_text().is_none());
    }
}

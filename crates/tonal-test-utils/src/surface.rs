//! Recording stand-in for slider, text field and checkbox widgets.

use parking_lot::Mutex;
use std::sync::Arc;
use tonal::ControlSurface;

/// A write-back the display made to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SetSlider(u8),
    SetText(String),
    SetChannelsChecked(bool),
}

#[derive(Debug, Default)]
struct SurfaceState {
    slider: u8,
    text: String,
    channels_checked: bool,
    calls: Vec<SurfaceCall>,
}

/// Control surface that records every call.
///
/// Clones share state, so keep one clone in the test and hand another to the
/// display.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxed clone ready for `HistogramDisplay::attach_surface`.
    pub fn boxed(&self) -> Box<dyn ControlSurface> {
        Box::new(self.clone())
    }

    pub fn slider(&self) -> u8 {
        self.state.lock().slider
    }

    pub fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    pub fn channels_checked(&self) -> bool {
        self.state.lock().channels_checked
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.state.lock().calls.clone()
    }

    /// Forget recorded calls, keeping the displayed values.
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

impl ControlSurface for RecordingSurface {
    fn set_slider_value(&mut self, value: u8) {
        let mut state = self.state.lock();
        state.slider = value;
        state.calls.push(SurfaceCall::SetSlider(value));
    }

    fn set_text(&mut self, text: &str) {
        let mut state = self.state.lock();
        state.text = text.to_string();
        state.calls.push(SurfaceCall::SetText(text.to_string()));
    }

    fn set_channels_checked(&mut self, checked: bool) {
        let mut state = self.state.lock();
        state.channels_checked = checked;
        state.calls.push(SurfaceCall::SetChannelsChecked(checked));
    }
}

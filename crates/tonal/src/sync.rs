//! Two-way binding between the threshold and its input widgets.
//!
//! The slider and the text field are passive views of the controller's value.
//! After every handled input the canonical value is pushed to both. Setting a
//! widget programmatically usually makes the toolkit report a change event of
//! its own; each push is therefore remembered as an expected echo, and the
//! matching event is swallowed instead of being handled a second time.

/// Widgets the display writes back to.
pub trait ControlSurface {
    /// Move the slider without user interaction.
    fn set_slider_value(&mut self, value: u8);

    /// Replace the text field contents.
    fn set_text(&mut self, text: &str);

    /// Check or uncheck the channel overlay checkbox.
    fn set_channels_checked(&mut self, _checked: bool) {}
}

/// Tracks what each widget currently shows and filters echo events.
#[derive(Default)]
pub struct InputSynchronizer {
    slider: u8,
    text: String,
    slider_echo: Option<u8>,
    text_echo: Option<String>,
    surface: Option<Box<dyn ControlSurface>>,
}

impl std::fmt::Debug for InputSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSynchronizer")
            .field("slider", &self.slider)
            .field("text", &self.text)
            .field("slider_echo", &self.slider_echo)
            .field("text_echo", &self.text_echo)
            .field("has_surface", &self.surface.is_some())
            .finish()
    }
}

impl InputSynchronizer {
    /// Start with both widgets showing `value`.
    pub fn new(value: u8) -> Self {
        Self {
            slider: value,
            text: value.to_string(),
            ..Default::default()
        }
    }

    /// Attach the real widgets and bring them in line with the bindings.
    pub fn attach(&mut self, mut surface: Box<dyn ControlSurface>, channels_checked: bool) {
        surface.set_slider_value(self.slider);
        surface.set_text(&self.text);
        surface.set_channels_checked(channels_checked);
        self.slider_echo = Some(self.slider);
        self.text_echo = Some(self.text.clone());
        self.surface = Some(surface);
    }

    /// Detach the widgets, returning them.
    pub fn detach(&mut self) -> Option<Box<dyn ControlSurface>> {
        self.slider_echo = None;
        self.text_echo = None;
        self.surface.take()
    }

    /// Slider position as last known.
    pub fn slider_value(&self) -> u8 {
        self.slider
    }

    /// Text field contents as last known.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record a slider event. Returns `false` if it is the echo of a push.
    pub fn accept_slider(&mut self, raw: u8) -> bool {
        self.slider = raw;
        match self.slider_echo.take() {
            Some(expected) if expected == raw => false,
            _ => true,
        }
    }

    /// Record a text event. Returns `false` if it is the echo of a push.
    pub fn accept_text(&mut self, raw: &str) -> bool {
        raw.clone_into(&mut self.text);
        match self.text_echo.take() {
            Some(expected) if expected == raw => false,
            _ => true,
        }
    }

    /// Push the canonical value to whichever widget does not show it yet.
    pub fn publish(&mut self, value: u8) {
        if self.slider != value {
            self.slider = value;
            self.slider_echo = Some(value);
            if let Some(surface) = &mut self.surface {
                surface.set_slider_value(value);
            }
        }

        let text = value.to_string();
        if self.text != text {
            if let Some(surface) = &mut self.surface {
                surface.set_text(&text);
            }
            self.text_echo = Some(text.clone());
            self.text = text;
        }
    }

    /// Push the channel checkbox state.
    pub fn publish_channels_checked(&mut self, checked: bool) {
        if let Some(surface) = &mut self.surface {
            surface.set_channels_checked(checked);
        }
    }
}

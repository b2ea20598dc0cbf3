//! End-to-end behavior of a histogram display driven through events.

use tonal::chart::{AxisId, ChartDirtyFlags, DataPoint, ScaleType};
use tonal::{
    BINS, Channel, ChannelDistributionSet, DisplayEvent, EventOutcome, GrayscaleHistogram,
    HistogramDataSource, HistogramDisplay, IntensityDistribution,
};
use tonal_test_utils::{RecordingSurface, StubHistogramSource, StubImage, SurfaceCall};

fn display_with(image: StubImage) -> HistogramDisplay<StubHistogramSource> {
    tonal_core::logging::init_for_tests();
    HistogramDisplay::new(StubHistogramSource::with_image(image))
}

fn marker_xs(display: &HistogramDisplay<StubHistogramSource>) -> Vec<f64> {
    display
        .store()
        .marker()
        .expect("marker should exist")
        .data
        .iter()
        .map(|p| p.x)
        .collect()
}

// ====================
// Threshold marker
// ====================

#[test]
fn test_initial_population_places_marker_at_zero() {
    let display = display_with(StubImage::peak(10, 500.0));

    let marker = display.store().marker().unwrap();
    assert_eq!(
        marker.data,
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(0.0, 500.0)]
    );
}

#[test]
fn test_two_slider_moves_leave_two_points_at_last_value() {
    let pairs = [(0u8, 255u8), (255, 0), (17, 18), (128, 3)];

    for (t1, t2) in pairs {
        let mut display = display_with(StubImage::flat(3.0));
        display.handle(DisplayEvent::SliderMoved(t1));
        display.handle(DisplayEvent::SliderMoved(t2));

        assert_eq!(marker_xs(&display), vec![f64::from(t2); 2], "t1={t1} t2={t2}");
    }
}

#[test]
fn test_every_slider_position_keeps_two_point_marker() {
    let mut display = display_with(StubImage::flat(3.0));

    for t in 0..=255u8 {
        display.handle(DisplayEvent::SliderMoved(t));
        let marker = display.store().marker().unwrap();
        assert_eq!(marker.len(), 2);
        assert_eq!(marker.data[1], DataPoint::new(f64::from(t), 3.0));
    }
}

#[test]
fn test_slider_updates_text_binding() {
    let mut display = display_with(StubImage::flat(1.0));
    display.handle(DisplayEvent::SliderMoved(99));

    assert_eq!(display.threshold(), 99);
    assert_eq!(display.synchronizer().text(), "99");
    assert_eq!(display.synchronizer().slider_value(), 99);
}

#[test]
fn test_invalid_text_coerces_to_zero_everywhere() {
    for raw in ["300", "-5", "abc"] {
        let mut display = display_with(StubImage::flat(1.0));
        let surface = RecordingSurface::new();
        display.attach_surface(surface.boxed());
        display.handle(DisplayEvent::SliderMoved(50));

        let outcome = display.handle(DisplayEvent::TextEdited(raw.to_string()));

        assert_eq!(outcome, EventOutcome::Handled);
        assert_eq!(display.threshold(), 0, "input {raw:?}");
        assert_eq!(display.synchronizer().slider_value(), 0);
        assert_eq!(display.synchronizer().text(), "0");
        assert_eq!(surface.slider(), 0);
        assert_eq!(surface.text(), "0");
        assert_eq!(marker_xs(&display), vec![0.0, 0.0]);
    }
}

#[test]
fn test_valid_text_moves_slider() {
    let mut display = display_with(StubImage::flat(1.0));
    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());
    surface.clear_calls();

    display.handle(DisplayEvent::TextEdited("200".to_string()));

    assert_eq!(surface.calls(), vec![SurfaceCall::SetSlider(200)]);
    assert_eq!(marker_xs(&display), vec![200.0, 200.0]);
}

#[test]
fn test_pushed_values_are_not_handled_twice() {
    let mut display = display_with(StubImage::flat(1.0));
    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());

    // Echoes of the initial attach
    assert_eq!(
        display.handle(DisplayEvent::SliderMoved(0)),
        EventOutcome::SuppressedEcho
    );
    assert_eq!(
        display.handle(DisplayEvent::TextEdited("0".to_string())),
        EventOutcome::SuppressedEcho
    );

    display.handle(DisplayEvent::SliderMoved(120));
    surface.clear_calls();

    // The toolkit reports the text change the slider move caused
    let echo = display.handle(DisplayEvent::TextEdited("120".to_string()));
    assert_eq!(echo, EventOutcome::SuppressedEcho);
    assert!(surface.calls().is_empty());
    assert_eq!(display.threshold(), 120);
}

#[test]
fn test_invalid_text_echo_is_suppressed() {
    let mut display = display_with(StubImage::flat(1.0));
    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());
    display.handle(DisplayEvent::SliderMoved(30));
    display.handle(DisplayEvent::TextEdited("30".to_string()));

    display.handle(DisplayEvent::TextEdited("30x".to_string()));
    surface.clear_calls();

    assert_eq!(
        display.handle(DisplayEvent::TextEdited("0".to_string())),
        EventOutcome::SuppressedEcho
    );
    assert_eq!(
        display.handle(DisplayEvent::SliderMoved(0)),
        EventOutcome::SuppressedEcho
    );
    assert!(surface.calls().is_empty());
}

#[test]
fn test_threshold_move_does_not_touch_axes() {
    let mut display = display_with(StubImage::peak(3, 1000.0));
    display.take_dirty();

    display.handle(DisplayEvent::SliderMoved(77));

    assert_eq!(display.take_dirty(), ChartDirtyFlags::MARKER);
    assert_eq!(display.store().axes().primary_max(), Some(1000.0));
}

// ====================
// Channel overlay
// ====================

#[test]
fn test_channel_fetch_happens_once_per_context() {
    let mut display = display_with(StubImage::rgb_peaks(10.0, 20.0, 30.0));

    display.ensure_channel_series().unwrap();
    display.ensure_channel_series().unwrap();

    assert_eq!(display.source().count_channel_fetches(), 1);
}

#[test]
fn test_toggle_off_and_on_restores_same_series_without_fetch() {
    let mut display = display_with(StubImage::rgb_peaks(10.0, 20.0, 30.0));

    display.handle(DisplayEvent::ChannelsToggled(true));
    let before = display.store().channel_series().unwrap().clone();

    display.handle(DisplayEvent::ChannelsToggled(false));
    assert!(display.frame().series_named("Red Histogram").is_none());
    assert!(display.store().channel_series().is_some());

    display.handle(DisplayEvent::ChannelsToggled(true));

    assert_eq!(display.source().count_channel_fetches(), 1);
    assert_eq!(display.store().channel_series().unwrap(), &before);
    assert_eq!(
        display.frame().series_named("Blue Histogram"),
        Some(before.get(Channel::Blue))
    );
}

#[test]
fn test_channels_use_secondary_axis() {
    let mut display = display_with(StubImage::rgb_peaks(10.0, 20.0, 30.0));
    display.handle(DisplayEvent::ChannelsToggled(true));

    let frame = display.frame();
    for name in ["Red Histogram", "Green Histogram", "Blue Histogram"] {
        assert_eq!(frame.series_named(name).unwrap().y_axis, AxisId::Y_SECONDARY);
    }
    assert_eq!(frame.axis(AxisId::Y_SECONDARY).unwrap().max, Some(30.0));
    assert_eq!(frame.axis(AxisId::Y_PRIMARY).unwrap().max, Some(60.0));
}

#[test]
fn test_channels_without_image_are_refused() {
    let mut display = HistogramDisplay::new(StubHistogramSource::empty());
    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());

    let outcome = display.handle(DisplayEvent::ChannelsToggled(true));

    assert_eq!(outcome, EventOutcome::NoActiveImage);
    assert!(!display.channels_shown());
    assert!(!surface.channels_checked());
    assert_eq!(display.source().count_channel_fetches(), 0);
}

// ====================
// Context switching
// ====================

#[test]
fn test_context_switch_drops_channels_and_marker() {
    let mut display = display_with(StubImage::rgb_peaks(10.0, 20.0, 30.0));
    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());
    display.handle(DisplayEvent::ChannelsToggled(true));
    display.handle(DisplayEvent::SliderMoved(5));

    display.source_mut().focus(StubImage::peak(9, 40.0));
    let outcome = display.handle(DisplayEvent::ContextChanged);

    assert_eq!(outcome, EventOutcome::Handled);
    assert!(display.store().marker().is_none());
    assert!(display.store().channel_series().is_none());
    assert!(!display.channels_shown());
    assert!(!surface.channels_checked());
    assert_eq!(display.frame().series_names(), vec!["Gray Histogram"]);
    assert_eq!(display.store().grayscale().data[9], DataPoint::new(9.0, 40.0));
}

#[test]
fn test_marker_and_channels_return_on_request() {
    let mut display = display_with(StubImage::flat(2.0));
    display.handle(DisplayEvent::ChannelsToggled(true));
    display.handle(DisplayEvent::SliderMoved(64));

    display.source_mut().focus(StubImage::flat(8.0));
    display.handle(DisplayEvent::ContextChanged);

    assert_eq!(display.refresh_marker(), EventOutcome::Handled);
    assert_eq!(
        display.store().marker().unwrap().data,
        vec![DataPoint::new(64.0, 0.0), DataPoint::new(64.0, 8.0)]
    );

    display.handle(DisplayEvent::ChannelsToggled(true));
    assert_eq!(display.source().count_channel_fetches(), 2);
}

#[test]
fn test_primary_max_follows_new_context() {
    let mut display = display_with(StubImage::peak(0, 1000.0));
    assert_eq!(display.store().axes().primary_max(), Some(1000.0));

    display.source_mut().focus(StubImage::peak(0, 40.0));
    display.handle(DisplayEvent::ContextChanged);

    assert_eq!(display.store().axes().primary_max(), Some(40.0));
    assert_eq!(
        display.frame().axis(AxisId::Y_PRIMARY).unwrap().max,
        Some(40.0)
    );
}

#[test]
fn test_unchanged_context_is_a_no_op() {
    let mut display = display_with(StubImage::flat(1.0));
    display.handle(DisplayEvent::ChannelsToggled(true));
    let fetches = display.source().count_grayscale_fetches();

    assert_eq!(
        display.handle(DisplayEvent::ContextChanged),
        EventOutcome::Unchanged
    );
    assert_eq!(display.source().count_grayscale_fetches(), fetches);
    assert!(display.channels_shown());
}

#[test]
fn test_losing_focus_empties_grayscale() {
    let mut display = display_with(StubImage::flat(1.0));
    display.source_mut().unfocus();

    assert_eq!(
        display.handle(DisplayEvent::ContextChanged),
        EventOutcome::NoActiveImage
    );
    assert!(display.context().is_none());
    assert!(display.store().grayscale().is_empty());
    assert_eq!(display.frame().series_names(), vec!["Gray Histogram"]);

    // The threshold still follows the inputs without an image
    assert_eq!(
        display.handle(DisplayEvent::SliderMoved(12)),
        EventOutcome::NoActiveImage
    );
    assert_eq!(display.synchronizer().text(), "12");
    assert!(display.store().marker().is_none());
}

#[test]
fn test_source_context_matches_display() {
    let display = display_with(StubImage::flat(1.0));
    assert_eq!(display.context(), display.source().context());
}

// ====================
// Log scale
// ====================

#[test]
fn test_log_scale_toggle() {
    let mut display = display_with(StubImage::peak(4, 1024.0));

    assert_eq!(
        display.handle(DisplayEvent::LogScaleToggled(true)),
        EventOutcome::Handled
    );
    assert!(display.is_logarithmic());

    let frame = display.frame();
    let y = frame.axis(AxisId::Y_PRIMARY).unwrap();
    assert_eq!(y.scale, ScaleType::Logarithmic { base: 2.0, floor: 1.0 });
    // Empty bins sit on the baseline instead of -inf
    assert_eq!(y.normalize(display.store().grayscale().data[0].y), 0.0);
    assert_eq!(y.normalize(1024.0), 1.0);

    assert_eq!(
        display.handle(DisplayEvent::LogScaleToggled(true)),
        EventOutcome::Unchanged
    );
}

#[test]
fn test_log_scale_off_restores_linear() {
    let mut display = display_with(StubImage::peak(4, 1024.0));
    display.handle(DisplayEvent::LogScaleToggled(true));

    assert_eq!(
        display.handle(DisplayEvent::LogScaleToggled(false)),
        EventOutcome::Handled
    );
    assert!(!display.is_logarithmic());
    let y = display.frame().axis(AxisId::Y_PRIMARY).unwrap();
    assert_eq!(y.scale, ScaleType::Linear);
    assert_eq!(y.normalize(512.0), 0.5);
}

#[test]
fn test_log_scale_with_density_histogram() {
    let mut bins = [0.0; BINS];
    bins[40] = 0.005;
    bins[90] = 0.02;
    let density = IntensityDistribution::from_bins(bins).unwrap();
    let image = StubImage {
        grayscale: GrayscaleHistogram::from_distribution(density.clone()),
        channels: ChannelDistributionSet::from_distributions(
            density.clone(),
            density.clone(),
            density,
        ),
    };
    let mut display = display_with(image);

    display.handle(DisplayEvent::LogScaleToggled(true));

    let frame = display.frame();
    let y = frame.axis(AxisId::Y_PRIMARY).unwrap();
    let gray = display.store().grayscale();
    let peak = y.normalize(gray.data[90].y);
    let small = y.normalize(gray.data[40].y);
    let zero = y.normalize(gray.data[0].y);
    assert!((peak - 1.0).abs() < 1e-9);
    assert!(zero < small && small < peak, "zero={zero} small={small} peak={peak}");
    assert_eq!(zero, 0.0);
}

// ====================
// Stale source focus
// ====================

#[test]
fn test_channels_wait_for_context_change() {
    let mut display = display_with(StubImage::peak(10, 500.0));
    let loaded = display.context();
    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());

    // The source moves on before the display is told about it
    display.source_mut().focus(StubImage::rgb_peaks(1.0, 2.0, 3.0));
    let outcome = display.handle(DisplayEvent::ChannelsToggled(true));

    assert_eq!(outcome, EventOutcome::StaleContext);
    assert!(!display.channels_shown());
    assert!(!surface.channels_checked());
    assert!(display.store().channel_series().is_none());
    assert_eq!(display.source().count_channel_fetches(), 0);
    assert_eq!(display.context(), loaded);
    assert!(display.ensure_channel_series().is_err());

    display.handle(DisplayEvent::ContextChanged);
    assert_eq!(
        display.handle(DisplayEvent::ChannelsToggled(true)),
        EventOutcome::Handled
    );
    let channels = display.store().channel_series().unwrap();
    assert_eq!(Some(channels.context()), display.context());
    assert_eq!(channels.get(Channel::Red).data[200].y, 1.0);
    assert_eq!(display.store().grayscale().data[128].y, 6.0);
}

// ====================
// Surface attachment
// ====================

#[test]
fn test_detached_surface_receives_nothing() {
    let mut display = display_with(StubImage::flat(1.0));
    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());

    assert!(display.detach_surface().is_some());
    assert!(display.detach_surface().is_none());
    surface.clear_calls();

    // Pending echoes of the attach are forgotten as well
    assert_eq!(
        display.handle(DisplayEvent::SliderMoved(0)),
        EventOutcome::Handled
    );
    display.handle(DisplayEvent::SliderMoved(33));

    assert!(surface.calls().is_empty());
    assert_eq!(surface.slider(), 0);
    assert_eq!(display.synchronizer().text(), "33");
}

#[test]
fn test_reattached_surface_is_brought_in_line() {
    let mut display = display_with(StubImage::flat(1.0));
    display.handle(DisplayEvent::SliderMoved(70));

    let surface = RecordingSurface::new();
    display.attach_surface(surface.boxed());

    assert_eq!(surface.slider(), 70);
    assert_eq!(surface.text(), "70");
}

// ====================
// Change tracking
// ====================

#[test]
fn test_context_switch_dirty_flags() {
    let mut display = display_with(StubImage::rgb_peaks(10.0, 20.0, 30.0));
    display.handle(DisplayEvent::ChannelsToggled(true));
    display.take_dirty();

    display.source_mut().focus(StubImage::peak(2, 7.0));
    display.handle(DisplayEvent::ContextChanged);

    assert_eq!(
        display.take_dirty(),
        ChartDirtyFlags::GRAYSCALE
            | ChartDirtyFlags::CHANNELS
            | ChartDirtyFlags::CHANNEL_VISIBILITY
            | ChartDirtyFlags::MARKER
            | ChartDirtyFlags::AXES
    );
    assert!(display.take_dirty().is_empty());
}

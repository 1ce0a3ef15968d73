use std::sync::{Arc, Mutex};

use slider::{Extent, FixedMeasure, Orientation, Slider, SliderConfig, SliderEvent};

fn measure(container: u16, item: u16) -> FixedMeasure {
    FixedMeasure::new(Extent::new(container, 10), Extent::new(item, 10))
}

fn record(slider: &Slider) -> Arc<Mutex<Vec<usize>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    slider.on_active_index_update(move |index| sink.lock().unwrap().push(index));
    seen
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn test_advance_stays_in_range() {
    for len in 1..=6 {
        let slider = Slider::new(SliderConfig::new().gap(10), len, measure(350, 100)).unwrap();
        let handle = slider.handle();
        for step in 1..=20 {
            handle.advance();
            let index = slider.index().unwrap();
            assert!(index < len, "len={len} step={step} index={index}");
            assert_eq!(index, step % len);
        }
    }
}

#[test]
fn test_retreat_from_first_goes_to_last() {
    let slider = Slider::new(SliderConfig::new(), 4, measure(100, 100)).unwrap();
    let handle = slider.handle();

    handle.retreat();
    assert_eq!(slider.index(), Some(3));

    handle.advance();
    assert_eq!(slider.index(), Some(0));
}

#[test]
fn test_reset_from_anywhere() {
    let slider = Slider::new(SliderConfig::new(), 5, measure(100, 100)).unwrap();
    let handle = slider.handle();

    handle.reset();
    assert_eq!(slider.index(), Some(0));

    handle.retreat();
    handle.retreat();
    assert_eq!(slider.index(), Some(3));
    handle.reset();
    assert_eq!(slider.index(), Some(0));
    assert_eq!(slider.state().offset, 0.0);
}

#[test]
fn test_owner_sees_only_settled_indexes() {
    let slider = Slider::new(SliderConfig::new(), 3, measure(100, 100)).unwrap();
    let seen = record(&slider);
    let handle = slider.handle();

    handle.advance();
    handle.advance();
    handle.advance();
    handle.retreat();

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0, 2]);
}

#[test]
fn test_single_item_wraps_onto_itself() {
    let slider = Slider::new(SliderConfig::new(), 1, measure(100, 100)).unwrap();
    let seen = record(&slider);
    let handle = slider.handle();

    handle.advance();
    handle.retreat();

    assert_eq!(slider.index(), Some(0));
    assert_eq!(*seen.lock().unwrap(), vec![0, 0]);
}

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn test_offset_after_three_advances() {
    // 200 / 110 = 1 visible, so index 3 is outside the final window
    let slider = Slider::new(SliderConfig::new().gap(10), 5, measure(200, 100)).unwrap();
    let handle = slider.handle();

    handle.advance();
    handle.advance();
    handle.advance();

    let state = slider.state();
    assert_eq!(slider.index(), Some(3));
    assert_eq!(state.offset, 330.0);
}

#[test]
fn test_offset_grows_until_final_window() {
    // 3 visible out of 6: final window starts at 3
    let slider = Slider::new(SliderConfig::new().gap(10), 6, measure(350, 100)).unwrap();
    let handle = slider.handle();

    let mut offsets = vec![slider.state().offset];
    for _ in 1..6 {
        handle.advance();
        offsets.push(slider.state().offset);
    }

    assert_eq!(offsets, vec![0.0, 110.0, 220.0, 330.0, 330.0, 330.0]);
}

#[test]
fn test_no_overshoot_when_everything_fits() {
    let slider = Slider::new(SliderConfig::new().gap(10), 5, measure(1000, 100)).unwrap();
    assert!(slider.state().visible >= 5);
    let handle = slider.handle();

    for _ in 0..5 {
        assert_eq!(slider.state().offset, 0.0);
        handle.advance();
    }
}

#[test]
fn test_unmeasured_item_still_wraps() {
    let slider = Slider::new(SliderConfig::new().gap(10), 3, FixedMeasure::unmeasured()).unwrap();
    let handle = slider.handle();

    handle.retreat();
    assert_eq!(slider.index(), Some(2));
    assert_eq!(slider.state().visible, 0);
    assert_eq!(slider.state().offset, 0.0);
}

#[test]
fn test_vertical_measures_height() {
    let measure = FixedMeasure::new(Extent::new(10, 300), Extent::new(10, 50));
    let config = SliderConfig::new().orientation(Orientation::Vertical);
    let slider = Slider::new(config, 8, measure).unwrap();

    assert_eq!(slider.state().dim, 50);
    assert_eq!(slider.state().visible, 6);
}

// ============================================================================
// Touch
// ============================================================================

#[test]
fn test_swipe_past_threshold_advances_once() {
    let slider = Slider::new(SliderConfig::new(), 5, measure(100, 100)).unwrap();
    let seen = record(&slider);

    slider.dispatch(SliderEvent::TouchStart { x: 100 });
    slider.dispatch(SliderEvent::TouchMove { x: 95 });
    // Same gesture keeps moving: no further steps
    slider.dispatch(SliderEvent::TouchMove { x: 60 });
    slider.dispatch(SliderEvent::TouchMove { x: 20 });

    assert_eq!(slider.index(), Some(1));
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[test]
fn test_small_swipe_does_nothing() {
    let slider = Slider::new(SliderConfig::new(), 5, measure(100, 100)).unwrap();
    let seen = record(&slider);

    slider.dispatch(SliderEvent::TouchStart { x: 100 });
    slider.dispatch(SliderEvent::TouchMove { x: 99 });

    assert_eq!(slider.index(), Some(0));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_rightward_swipe_retreats() {
    let slider = Slider::new(SliderConfig::new(), 5, measure(100, 100)).unwrap();

    slider.dispatch(SliderEvent::TouchStart { x: 10 });
    slider.dispatch(SliderEvent::TouchMove { x: 30 });

    assert_eq!(slider.index(), Some(4));
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_list_is_inert() {
    let slider = Slider::new(SliderConfig::new().gap(10), 0, measure(300, 100)).unwrap();
    let seen = record(&slider);
    let handle = slider.handle();

    handle.advance();
    handle.retreat();
    handle.reset();
    slider.dispatch(SliderEvent::TouchStart { x: 50 });
    slider.dispatch(SliderEvent::TouchMove { x: 0 });
    slider.dispatch(SliderEvent::Resize);

    assert!(slider.is_empty());
    assert_eq!(slider.index(), None);
    assert!(slider.view().is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_items_appear_later() {
    let slider = Slider::new(SliderConfig::new(), 0, measure(100, 100)).unwrap();
    assert_eq!(slider.set_items(3), Some(0));
    slider.handle().retreat();
    assert_eq!(slider.index(), Some(2));
}

#[test]
fn test_callback_may_use_handle() {
    let slider = Slider::new(SliderConfig::new(), 4, measure(100, 100)).unwrap();
    let handle = slider.handle();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let inner = handle.clone();
    slider.on_active_index_update(move |_| sink.lock().unwrap().push(inner.index()));

    handle.advance();

    assert_eq!(*seen.lock().unwrap(), vec![Some(1)]);
}

#[test]
fn test_dirty_flag_tracks_changes() {
    let slider = Slider::new(SliderConfig::new(), 4, measure(100, 100)).unwrap();
    assert!(slider.is_dirty());
    slider.clear_dirty();

    slider.dispatch(SliderEvent::TouchStart { x: 3 });
    assert!(!slider.is_dirty());

    slider.handle().advance();
    assert!(slider.is_dirty());
}

#[test]
fn test_toggle_orientation_repaints_when_count_is_unchanged() {
    // Three cards fit along either axis
    let layout = FixedMeasure::new(Extent::new(72, 21), Extent::new(24, 7));
    let slider = Slider::new(SliderConfig::new(), 9, layout).unwrap();
    let seen = record(&slider);
    assert_eq!(slider.state().visible, 3);
    slider.clear_dirty();

    slider.dispatch(SliderEvent::ToggleOrientation);

    assert_eq!(slider.state().orientation, Orientation::Vertical);
    assert_eq!(slider.state().visible, 3);
    assert!(slider.is_dirty());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_orientation_change_moving_only_the_offset_repaints() {
    let layout = FixedMeasure::new(Extent::new(72, 21), Extent::new(24, 7));
    let slider = Slider::new(SliderConfig::new().gap(1), 9, layout).unwrap();
    slider.handle().advance();
    let before = slider.state();
    assert_eq!(before.visible, 2);
    slider.clear_dirty();

    slider.dispatch(SliderEvent::SetOrientation(Orientation::Vertical));

    let after = slider.state();
    assert_eq!(after.visible, 2);
    assert_eq!(slider.index(), Some(1));
    assert!(after.offset > before.offset);
    assert!(slider.is_dirty());
}

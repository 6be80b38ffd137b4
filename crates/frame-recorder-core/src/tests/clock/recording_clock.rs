use crate::{FrameRate, RecorderError, RecordingClock, monotonic_nanos};

const INTERVAL_30HZ: i64 = 33_333_333;

#[allow(clippy::unwrap_used)]
fn clock_at_30hz() -> RecordingClock {
    let mut clock = RecordingClock::default();
    clock.configure(30.0).unwrap();
    clock
}

/// WHAT: Pause/resume scenario produces the documented timestamps
/// WHY: Downstream encoders rely on this exact sequence
#[test]
fn given_30hz_clock_when_recording_pausing_and_resuming_then_documented_timestamps() {
    // Given: A clock configured for 30 Hz
    let mut clock = clock_at_30hz();
    assert_eq!(clock.nominal_frame_interval_nanos(), INTERVAL_30HZ);

    // When/Then: First frame of a fresh recording contributes nothing
    assert!(clock.start());
    assert_eq!(clock.on_frame_ready(1_000), 0);

    // When/Then: Next frame adds the measured gap
    assert_eq!(clock.on_frame_ready(1_000 + INTERVAL_30HZ), INTERVAL_30HZ);

    // When/Then: Resume after a long pause adds exactly one nominal interval
    assert!(clock.stop());
    assert!(clock.start());
    assert_eq!(clock.on_frame_ready(9_999_999_999), 2 * INTERVAL_30HZ);
}

/// WHAT: Failed configure leaves the previous interval in place
/// WHY: Invalid input must not corrupt a running session
#[test]
fn given_configured_clock_when_configuring_zero_then_invalid_config_and_interval_unchanged() {
    // Given: A clock at 30 Hz
    let mut clock = clock_at_30hz();

    // When: Configuring a zero frame rate
    let result = clock.configure(0.0);

    // Then: InvalidConfig, interval still 30 Hz
    assert!(matches!(result, Err(RecorderError::InvalidConfig { .. })));
    assert_eq!(clock.nominal_frame_interval_nanos(), INTERVAL_30HZ);
}

/// WHAT: Consecutive frames add exactly their spacing
/// WHY: Mid-run time must track the real frame arrival times
#[test]
fn given_running_clock_when_frames_arrive_irregularly_then_adds_exact_deltas() {
    // Given: A started clock that has seen one frame
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(500);

    // When: Frames arrive with irregular spacing
    let deltas = [10, 0, 40_000_000, 7, 16_666_667];
    let mut now = 500;
    let mut expected = 0;
    for d in deltas {
        now += d;
        expected += d;

        // Then: Each frame adds exactly its delta
        assert_eq!(clock.on_frame_ready(now), expected);
    }
    assert_eq!(clock.last_update_nanos(), Some(now));
}

/// WHAT: Frames while stopped mutate nothing
/// WHY: Only recording time may be accumulated
#[test]
fn given_stopped_clock_when_frame_ready_then_no_mutation() {
    // Given: A clock that recorded some time and was stopped
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(0);
    clock.on_frame_ready(1_000);
    clock.stop();
    let last = clock.last_update_nanos();

    // When: Frames arrive while stopped
    let returned = clock.on_frame_ready(50_000);
    clock.on_frame_ready(90_000);

    // Then: Neither accumulated time nor the last-update marker changed
    assert_eq!(returned, 1_000);
    assert_eq!(clock.accumulated_nanos(), 1_000);
    assert_eq!(clock.last_update_nanos(), last);
}

/// WHAT: Frames before the first start are ignored
/// WHY: A freshly created clock is not recording
#[test]
fn given_new_clock_when_frame_ready_then_ignored() {
    // Given: A new clock
    let mut clock = RecordingClock::new(FrameRate::default());

    // When: A frame arrives
    let returned = clock.on_frame_ready(123);

    // Then: Nothing is recorded
    assert_eq!(returned, 0);
    assert!(!clock.is_recording());
    assert_eq!(clock.last_update_nanos(), None);
}

/// WHAT: Repeated start is a no-op
/// WHY: A second start must not reset the last-update marker mid-run
#[test]
fn given_recording_clock_when_started_again_then_no_transition() {
    // Given: A running clock mid-recording
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(0);
    clock.on_frame_ready(2_000);

    // When: Starting again
    let transitioned = clock.start();

    // Then: No transition; next frame adds the measured gap, not an estimate
    assert!(!transitioned);
    assert_eq!(clock.last_update_nanos(), Some(2_000));
    assert_eq!(clock.on_frame_ready(2_500), 2_500);
}

/// WHAT: Stop never changes accumulated time and repeats are no-ops
/// WHY: Stopping pauses the recording, it does not discard it
#[test]
fn given_start_stop_sequences_when_applied_then_accumulated_unchanged_by_stop() {
    // Given: A clock with some recorded time
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(0);
    clock.on_frame_ready(5_000);

    // When/Then: Stop once, then again
    assert!(clock.stop());
    assert_eq!(clock.accumulated_nanos(), 5_000);
    assert!(!clock.stop());
    assert_eq!(clock.accumulated_nanos(), 5_000);

    // When/Then: Start twice without frames
    assert!(clock.start());
    assert!(!clock.start());
    assert_eq!(clock.accumulated_nanos(), 5_000);
}

/// WHAT: Clear resets time and the next run behaves as brand new
/// WHY: A cleared recording must not inherit the resume estimate
#[test]
fn given_recorded_time_when_cleared_then_next_run_starts_from_zero() {
    // Given: A stopped clock with recorded time
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(0);
    clock.on_frame_ready(70_000_000);
    clock.stop();

    // When: Clearing and starting again
    clock.clear();
    assert_eq!(clock.accumulated_nanos(), 0);
    assert_eq!(clock.last_update_nanos(), None);
    clock.start();

    // Then: First frame adds nothing rather than one nominal interval
    assert_eq!(clock.on_frame_ready(80_000_000), 0);
    assert_eq!(clock.on_frame_ready(80_000_100), 100);
}

/// WHAT: Clear while recording keeps recording
/// WHY: Clear only resets data, not the recording state
#[test]
fn given_recording_clock_when_cleared_then_still_recording_and_restarts_from_zero() {
    // Given: A running clock with recorded time
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(0);
    clock.on_frame_ready(1_000);

    // When: Clearing mid-run
    clock.clear();

    // Then: Still recording; next frame is treated as the first of a new recording
    assert!(clock.is_recording());
    assert_eq!(clock.on_frame_ready(2_000), 0);
    assert_eq!(clock.on_frame_ready(3_000), 1_000);
}

/// WHAT: A timestamp earlier than the previous one adds nothing
/// WHY: A misbehaving clock source must not rewind the recording or panic
#[test]
fn given_running_clock_when_timestamp_goes_backwards_then_delta_clamped_to_zero() {
    // Given: A running clock at 10,000 ns recorded
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(100_000);
    clock.on_frame_ready(110_000);

    // When: The next timestamp is earlier
    let returned = clock.on_frame_ready(50_000);

    // Then: Accumulated time is unchanged and the marker follows the new sample
    assert_eq!(returned, 10_000);
    assert_eq!(clock.last_update_nanos(), Some(50_000));
    assert_eq!(clock.on_frame_ready(51_000), 11_000);
}

/// WHAT: Extreme timestamps saturate instead of overflowing
/// WHY: Arithmetic overflow would panic in debug builds
#[test]
fn given_extreme_timestamps_when_frame_ready_then_saturates() {
    // Given: A running clock whose first sample is at i64::MIN
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(i64::MIN);

    // When: The next sample is at i64::MAX, then another huge gap
    let first = clock.on_frame_ready(i64::MAX);
    clock.stop();
    clock.start();
    let second = clock.on_frame_ready(0);

    // Then: Time saturates at i64::MAX
    assert_eq!(first, i64::MAX);
    assert_eq!(second, i64::MAX);
}

/// WHAT: Resume estimate follows the configured frame rate
/// WHY: The estimate stands in for one frame period at the target rate
#[test]
#[allow(clippy::unwrap_used)]
fn given_reconfigured_rate_when_resuming_then_adds_new_interval() {
    // Given: A clock with recorded time, reconfigured to 25 Hz while stopped
    let mut clock = clock_at_30hz();
    clock.start();
    clock.on_frame_ready(0);
    clock.on_frame_ready(1_000);
    clock.stop();
    clock.configure(25.0).unwrap();

    // When: Resuming
    clock.start();
    let returned = clock.on_frame_ready(5_000_000_000);

    // Then: One 40 ms interval was added
    assert_eq!(returned, 1_000 + 40_000_000);
}

/// WHAT: Monotonic timestamps never go backwards and feed the clock directly
/// WHY: Hosts without their own frame timestamps use this source
#[test]
fn given_monotonic_source_when_driving_clock_then_time_never_decreases() {
    // Given: A recording clock fed from the process monotonic source
    let mut clock = clock_at_30hz();
    clock.start();

    // When: Sampling repeatedly
    let mut previous_now = monotonic_nanos();
    let mut previous_recorded = clock.on_frame_ready(previous_now);
    for _ in 0..1_000 {
        let now = monotonic_nanos();
        let recorded = clock.on_frame_ready(now);

        // Then: Both the source and the recorded time are non-decreasing
        assert!(now >= previous_now);
        assert!(recorded >= previous_recorded);
        previous_now = now;
        previous_recorded = recorded;
    }
    assert!(previous_now >= 0);
}

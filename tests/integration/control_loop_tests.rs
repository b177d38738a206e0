//! Integration tests: DashLight → smoothing → arbiter → dimmer output.

use dashlight::app::events::AppEvent;
use dashlight::app::service::DashLight;
use dashlight::config::DashlightConfig;
use dashlight::control::arbiter::OverrideState;
use dashlight::control::decision::DimmerOutput;
use dashlight::error::{ActuatorError, Error, SensorError};

use crate::mock_hw::{MockDelay, MockHardware, RecordingSink};

const DIM: bool = true;
const BRIGHT: bool = false;

fn stop_after(n: usize) -> impl FnMut() -> bool {
    let mut remaining = n;
    move || {
        if remaining == 0 {
            false
        } else {
            remaining -= 1;
            true
        }
    }
}

#[test]
fn dark_cabin_dims_after_three_ticks() {
    let mut hw = MockHardware::with_light(&[2000, 2000, 2000]);
    let mut sink = RecordingSink::new();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    let mut last = None;
    for _ in 0..3 {
        last = Some(app.tick(&mut sink).unwrap());
    }
    let report = last.unwrap();
    assert_eq!(report.output, DimmerOutput::Dim);
    assert_eq!(report.average, 2000.0);
    assert_eq!(app.history().len(), 3);

    drop(app);
    assert_eq!(hw.dimmer_writes, vec![DIM, DIM, DIM]);
}

#[test]
fn force_dim_bypasses_bright_cabin() {
    let mut hw = MockHardware::with_light(&[100, 100]);
    hw.force_dim = true;
    let mut sink = RecordingSink::new();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    app.tick(&mut sink).unwrap();
    let report = app.tick(&mut sink).unwrap();
    assert_eq!(report.override_state, OverrideState::ForceDim);
    assert_eq!(report.output, DimmerOutput::Dim);
    assert_eq!(report.average, 100.0);

    drop(app);
    assert_eq!(hw.last_dimmer(), Some(DIM));
}

#[test]
fn both_overrides_keep_display_bright() {
    let mut hw = MockHardware::constant_light(5000);
    hw.force_dim = true;
    hw.force_bright = true;
    let mut sink = RecordingSink::new();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    let report = app.tick(&mut sink).unwrap();
    assert_eq!(report.override_state, OverrideState::ForceBright);
    assert_eq!(report.output, DimmerOutput::Bright);

    drop(app);
    assert_eq!(hw.last_dimmer(), Some(BRIGHT));
}

#[test]
fn single_dark_spike_is_smoothed_away() {
    let mut hw = MockHardware::with_light(&[500, 500, 500, 500, 500, 500, 3000]);
    let mut sink = RecordingSink::new();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    for _ in 0..6 {
        app.tick(&mut sink).unwrap();
    }
    let report = app.tick(&mut sink).unwrap();
    assert_eq!(report.light, 3000);
    // (5 × 500 + 3000) / 6
    assert!((report.average - 916.666_7).abs() < 0.01);
    assert_eq!(report.output, DimmerOutput::Bright);
}

#[test]
fn output_recovers_once_dark_samples_are_evicted() {
    let mut script = vec![2000; 6];
    script.extend([100; 6]);
    let mut hw = MockHardware::with_light(&script);
    let mut sink = RecordingSink::new();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    let outputs: Vec<_> = (0..12)
        .map(|_| app.tick(&mut sink).unwrap().output)
        .collect();

    assert_eq!(outputs[5], DimmerOutput::Dim);
    assert_eq!(outputs[11], DimmerOutput::Bright);
    assert_eq!(app.average(), 100.0);
    // Initial Dim, then one switch back to Bright.
    assert_eq!(sink.output_changes(), 2);
    assert!(matches!(
        sink.events.iter().find(|e| matches!(e, AppEvent::OutputChanged { .. })),
        Some(AppEvent::OutputChanged {
            from: None,
            to: DimmerOutput::Dim
        })
    ));
}

#[test]
fn calibration_bounds_track_extremes() {
    let mut hw = MockHardware::with_light(&[1200, 560, 2100, 900]);
    let mut sink = RecordingSink::new();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    let mut report = None;
    for _ in 0..4 {
        report = Some(app.tick(&mut sink).unwrap());
    }
    let report = report.unwrap();
    assert_eq!((report.light_min, report.light_max), (560, 2100));
    assert_eq!(app.calibration().span(), Some(1540));
}

#[test]
fn headlight_does_not_affect_output() {
    for headlight in [false, true] {
        let mut hw = MockHardware::constant_light(1500);
        hw.headlight = headlight;
        let mut sink = RecordingSink::new();
        let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

        let report = app.tick(&mut sink).unwrap();
        assert_eq!(report.headlight, headlight);
        assert_eq!(report.output, DimmerOutput::Dim);
    }
}

#[test]
fn run_while_sleeps_one_period_per_tick() {
    let mut hw = MockHardware::constant_light(400);
    let mut sink = RecordingSink::new();
    let mut delay = MockDelay::default();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    app.start(&mut sink);
    app.run_while(&mut delay, &mut sink, stop_after(4)).unwrap();

    assert_eq!(app.tick_count(), 4);
    assert_eq!(delay.sleeps_ms, vec![200; 4]);
    assert!(matches!(sink.events.first(), Some(AppEvent::Started(_))));
    assert!(matches!(
        sink.events.last(),
        Some(AppEvent::Stopped { ticks: 4 })
    ));
    assert_eq!(sink.telemetry_count(), 4);
}

#[test]
fn telemetry_is_throttled_by_interval() {
    let config = DashlightConfig {
        telemetry_interval_ticks: 3,
        ..DashlightConfig::DEFAULT
    };
    let mut hw = MockHardware::constant_light(400);
    let mut sink = RecordingSink::new();
    let mut delay = MockDelay::default();
    let mut app = DashLight::new(config, &mut hw).unwrap();

    app.run_while(&mut delay, &mut sink, stop_after(7)).unwrap();
    assert_eq!(sink.telemetry_count(), 2);
}

#[test]
fn sensor_failure_stops_the_loop() {
    let mut hw = MockHardware::constant_light(400);
    hw.fail_light_after = Some(2);
    let mut sink = RecordingSink::new();
    let mut delay = MockDelay::default();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    let result = app.run_while(&mut delay, &mut sink, || true);
    assert_eq!(result, Err(Error::Sensor(SensorError::AdcReadFailed)));
    assert_eq!(delay.sleeps_ms.len(), 2);
    // The failed tick is not counted.
    assert_eq!(app.tick_count(), 2);

    drop(app);
    assert_eq!(hw.dimmer_writes.len(), 2);
}

#[test]
fn write_failure_is_propagated() {
    let mut hw = MockHardware::constant_light(400);
    hw.fail_writes = true;
    let mut sink = RecordingSink::new();
    let mut app = DashLight::new(DashlightConfig::DEFAULT, &mut hw).unwrap();

    assert_eq!(
        app.tick(&mut sink).unwrap_err(),
        Error::Actuator(ActuatorError::GpioWriteFailed)
    );
    assert_eq!(sink.output_changes(), 0);
    assert_eq!(app.tick_count(), 0);
}

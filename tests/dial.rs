use std::time::Duration;

use speedometer::{
    Angle, BoundValue, Canvas, Color, DialConfig, DrawCommand, Error, Speedometer, TickKind,
    ValueWatcher,
};

const TOLERANCE: f64 = 1e-9;

#[test]
fn default_dial_ticks() {
    let dial = Speedometer::new(DialConfig::default()).unwrap();
    let ticks = dial.ticks();
    assert_eq!(ticks.major, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    assert_eq!(ticks.minor.len(), 18);
    for pair in ticks.major.windows(2) {
        assert_eq!(
            ticks
                .minor
                .iter()
                .filter(|&&m| m > pair[0] && m < pair[1])
                .count(),
            3
        );
    }
}

#[test]
fn bound_value_drives_needle() {
    let dial = Speedometer::new(DialConfig::default()).unwrap();
    let speed = BoundValue::new(0.0);
    let mut watcher = ValueWatcher::new(speed.clone());
    let mut needle = dial.animator(0.0);

    speed.set(30.0);
    let value = watcher.changed().unwrap();
    needle.set_target(dial.needle_angle(value));
    assert_eq!(needle.target(), Angle::from_degrees(-90.0));

    for _ in 0..240 {
        needle.advance(Duration::from_secs_f64(1.0 / 60.0));
    }
    assert!(needle.is_settled());

    let layout = dial.layout(400, 400);
    let scene = dial.scene(&layout, needle.angle());
    assert_eq!(scene.needle_angle(), Some(Angle::from_degrees(-90.0)));

    let tip = scene.commands().iter().find_map(|c| match c {
        DrawCommand::Needle { tip, .. } => Some(*tip),
        _ => None,
    });
    let tip = tip.unwrap();
    assert!((tip.x - 200.0).abs() < TOLERANCE);
    assert!(tip.y < 200.0);
}

#[test]
fn custom_dial_scene() {
    let config = DialConfig::builder()
        .min_value(0.0)
        .max_value(240.0)
        .major_step(20.0)
        .subdivisions(0)
        .start_angle(Angle::from_degrees(135.0))
        .end_angle(Angle::from_degrees(405.0))
        .build();
    let dial = Speedometer::new(config).unwrap();
    let scene = dial.scene(&dial.layout(500, 500), dial.needle_angle(120.0));

    assert_eq!(scene.ticks(TickKind::Major).count(), 13);
    assert_eq!(scene.ticks(TickKind::Minor).count(), 0);
    let labels: Vec<&str> = scene.labels().collect();
    assert_eq!(labels.first(), Some(&"0"));
    assert_eq!(labels.last(), Some(&"240"));
    assert_eq!(scene.needle_angle(), Some(Angle::from_degrees(270.0)));
}

#[test]
fn invalid_configurations_fail_fast() {
    let cases = [
        DialConfig::builder().max_value(-1.0).build(),
        DialConfig::builder().major_step(0.0).build(),
        DialConfig::builder().start_angle(Angle::from_degrees(f64::INFINITY)).build(),
    ];
    let errors: Vec<Error> = cases
        .into_iter()
        .map(|config| Speedometer::new(config).unwrap_err())
        .collect();
    assert!(matches!(errors[0], Error::EmptyRange { .. }));
    assert!(matches!(errors[1], Error::InvalidStep(_)));
    assert!(matches!(errors[2], Error::NonFinite("start_angle")));
}

#[test]
fn headless_frame_uses_configured_colors() {
    let background = Color::new(0x10, 0x20, 0x30);
    let hand = Color::new(0x00, 0xc0, 0x40);
    let dial = Speedometer::new(
        DialConfig::builder()
            .background_color(background)
            .hand_color(hand)
            .build(),
    )
    .unwrap();

    let (width, height) = (200, 200);
    let mut frame = vec![0u8; width * height * 4];
    dial.render_frame(&mut frame, width, height, dial.needle_angle(0.0), None);

    let canvas = Canvas::new(&mut frame, width, height);
    assert_eq!(canvas.pixel(100, 100), Some(hand));
    assert_eq!(canvas.pixel(100, 160), Some(background));
}

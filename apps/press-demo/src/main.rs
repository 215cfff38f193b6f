//! Replays scripted pointer input against a context source and logs the
//! resulting progress, scale and activations. Run with `RUST_LOG=debug` to
//! see the gesture's own decisions as well.

use anyhow::Result;
use presshold_animation::Easing;
use presshold_foundation::gesture_constants::ACTIVATION_DURATION_MS;
use presshold_foundation::PointerDispatcher;
use presshold_ui::{
    AnimatedScaleLayer, ContextSourceNode, GestureConfig, Point, PointerEvent, Rect, SharedLayer,
    Size,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

const FRAME_MS: u64 = 16;
const SURFACE: Size = Size::new(160.0, 48.0);

struct Scenario {
    name: &'static str,
    /// (time in ms, event) pairs, sorted by time.
    script: Vec<(u64, PointerEvent)>,
    run_ms: u64,
}

fn scenarios() -> Vec<Scenario> {
    let at = Point::new(80.0, 24.0);
    vec![
        Scenario {
            name: "hold",
            script: vec![
                (0, PointerEvent::down(at)),
                (200, PointerEvent::moved(Point::new(82.0, 25.0))),
                (900, PointerEvent::up(Point::new(82.0, 25.0))),
            ],
            run_ms: 1_200,
        },
        Scenario {
            name: "tap",
            script: vec![(0, PointerEvent::down(at)), (240, PointerEvent::up(at))],
            run_ms: 400,
        },
        Scenario {
            name: "drag",
            script: vec![
                (0, PointerEvent::down(at)),
                (120, PointerEvent::moved(Point::new(90.0, 24.0))),
                (600, PointerEvent::up(Point::new(90.0, 24.0))),
            ],
            run_ms: 700,
        },
    ]
}

fn run(
    scenario: &Scenario,
    node: &mut ContextSourceNode,
    layer: &Rc<RefCell<AnimatedScaleLayer>>,
) {
    log::info!("--- {} ---", scenario.name);
    let origin = Instant::now();
    let mut dispatcher = PointerDispatcher::new();
    let mut pending = scenario.script.iter().peekable();

    let mut elapsed_ms = 0;
    while elapsed_ms <= scenario.run_ms {
        while let Some((_, event)) = pending.next_if(|(at_ms, _)| *at_ms <= elapsed_ms) {
            dispatcher.push(event.clone());
        }
        let now = origin + Duration::from_millis(elapsed_ms);
        dispatcher.drain(|event| node.handle_pointer_event(&event, now));
        node.on_frame(now);

        let mut layer = layer.borrow_mut();
        layer.on_frame(elapsed_ms * 1_000_000);
        let visible = layer
            .graphics_layer()
            .apply_to_rect(Rect::from_size(node.bounds()));
        log::info!(
            "{:>5} ms  state={:?} progress={:.3} scale={:.4} width={:.1}",
            elapsed_ms,
            node.gesture().state(),
            node.gesture().current_progress(),
            layer.scale(),
            visible.width
        );
        elapsed_ms += FRAME_MS;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = GestureConfig::default()
        .with_activation_duration(Duration::from_millis(ACTIVATION_DURATION_MS))
        .with_easing(Easing::EaseOut);

    let layer = Rc::new(RefCell::new(AnimatedScaleLayer::new()));
    let shared: SharedLayer = layer.clone();
    let mut node = ContextSourceNode::with_gesture_config(shared, config)?;
    node.set_bounds(SURFACE);
    node.set_should_begin(|point| Rect::from_size(SURFACE).contains(point.x, point.y));
    node.set_activated(|gesture| {
        log::info!("context menu requested at {:?}", gesture.origin());
    });
    node.load();

    for scenario in scenarios() {
        run(&scenario, &mut node, &layer);
    }
    Ok(())
}

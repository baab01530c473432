//! End-to-end sessions driven through the public API: scripted pointer
//! events in, scene JSON out.
#![allow(clippy::float_cmp)]

use std::io::Cursor;

use pillsplit::color::FixedColor;
use pillsplit::config::EditorConfig;
use pillsplit::doc::{Color, CornerRadii, Pill};
use pillsplit::engine::{Action, EngineCore};
use pillsplit::script;
use serde_json::{Value, json};

fn core() -> EngineCore {
    EngineCore::new(EditorConfig::default(), FixedColor(Color::new("hsl(120 65% 58%)")))
}

fn run(core: &mut EngineCore, src: &str) -> Vec<Action> {
    let events = script::parse(Cursor::new(src)).unwrap();
    script::replay(core, &events)
}

fn geometry(core: &EngineCore) -> Vec<(f64, f64, f64, f64)> {
    core.pills().iter().map(|p| (p.x, p.y, p.width, p.height)).collect()
}

/// Draw a 100x100 pill at the origin; the trailing click is swallowed.
const DRAW_SQUARE: &str = r#"
# draw
{"type":"down","x":0,"y":0,"target":"empty"}
{"type":"move","x":60,"y":60}
{"type":"move","x":100,"y":100}
{"type":"up","x":100,"y":100}
{"type":"click","x":100,"y":100}
"#;

#[test]
fn draw_and_quad_split_session() {
    let mut core = core();
    run(&mut core, DRAW_SQUARE);
    assert_eq!(geometry(&core), vec![(0.0, 0.0, 100.0, 100.0)]);

    run(
        &mut core,
        r#"
{"type":"move","x":50,"y":50}
{"type":"down","x":50,"y":50}
{"type":"up","x":50,"y":50}
{"type":"click","x":50,"y":50}
"#,
    );
    assert_eq!(
        geometry(&core),
        vec![(0.0, 0.0, 50.0, 50.0), (50.0, 0.0, 50.0, 50.0), (0.0, 50.0, 50.0, 50.0), (50.0, 50.0, 50.0, 50.0)]
    );
    let ids: Vec<u64> = core.pills().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);
}

#[test]
fn narrow_left_click_stacks_two_halves() {
    let mut core = core();
    run(&mut core, DRAW_SQUARE);
    run(&mut core, "{\"type\":\"turn\"}\n{\"type\":\"click\",\"x\":10,\"y\":50}\n");
    assert_eq!(geometry(&core), vec![(0.0, 0.0, 100.0, 50.0), (0.0, 50.0, 100.0, 50.0)]);
    assert_eq!(core.pills()[0].corner_radii, CornerRadii::new(20.0, 20.0, 0.0, 0.0));
}

#[test]
fn tiny_pill_is_shifted_and_keeps_identity() {
    let mut core = core();
    core.store.load_snapshot(vec![Pill {
        id: 1,
        x: 0.0,
        y: 0.0,
        width: 30.0,
        height: 30.0,
        color: Color::new("navy"),
        corner_radii: CornerRadii::default(),
    }]);
    let actions = run(&mut core, "{\"type\":\"click\",\"x\":15,\"y\":15}");
    assert_eq!(core.pills().len(), 1);
    assert_eq!(core.pills()[0].id, 1);
    assert!(actions.iter().any(|a| matches!(a, Action::PillShifted { id: 1, .. })));
}

#[test]
fn drag_then_click_splits_at_release_point() {
    let mut core = core();
    run(&mut core, DRAW_SQUARE);
    run(
        &mut core,
        r#"
{"type":"down","x":50,"y":50}
{"type":"move","x":150,"y":250}
{"type":"up","x":150,"y":250}
{"type":"click","x":150,"y":250}
"#,
    );
    assert_eq!(
        geometry(&core),
        vec![
            (100.0, 200.0, 50.0, 50.0),
            (150.0, 200.0, 50.0, 50.0),
            (100.0, 250.0, 50.0, 50.0),
            (150.0, 250.0, 50.0, 50.0),
        ]
    );
}

#[test]
fn drag_then_click_near_corner_shifts_instead() {
    let mut core = core();
    run(&mut core, DRAW_SQUARE);
    run(
        &mut core,
        r#"
{"type":"down","x":10,"y":10}
{"type":"move","x":110,"y":210}
{"type":"up","x":110,"y":210}
{"type":"click","x":110,"y":210}
"#,
    );
    // Pill sits at (100, 200); both parts left of and above the click are 10px.
    assert_eq!(geometry(&core), vec![(112.0, 200.0, 100.0, 100.0)]);
    assert_eq!(core.pills()[0].id, 1);
}

#[test]
fn scene_json_matches_renderer_contract() {
    let mut core = core();
    run(
        &mut core,
        r#"
{"type":"down","x":20,"y":30,"target":"empty"}
{"type":"move","x":90,"y":100}
"#,
    );
    let scene: Value = serde_json::to_value(core.scene()).unwrap();
    assert_eq!(scene["draft"], json!({ "x": 20.0, "y": 30.0, "width": 70.0, "height": 70.0 }));
    assert_eq!(scene["crosshair"], json!({ "x": 90.0, "y": 100.0 }));
    assert_eq!(scene["pills"], json!([]));

    run(&mut core, "{\"type\":\"up\",\"x\":90,\"y\":100}");
    let scene: Value = serde_json::to_value(core.scene()).unwrap();
    assert_eq!(scene["draft"], Value::Null);
    assert_eq!(scene["pills"][0]["color"], json!("hsl(120 65% 58%)"));
    assert_eq!(scene["pills"][0]["cornerRadii"], json!({ "tl": 20.0, "tr": 20.0, "br": 20.0, "bl": 20.0 }));
}

#[test]
fn actions_serialize_with_tag() {
    let mut core = core();
    let actions = run(&mut core, DRAW_SQUARE);
    let tags: Vec<String> = actions
        .iter()
        .map(|a| serde_json::to_value(a).unwrap()["action"].as_str().unwrap_or_default().to_string())
        .collect();
    assert!(tags.contains(&"pill_created".to_string()));
    assert!(tags.contains(&"render_needed".to_string()));
}

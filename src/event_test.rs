use super::*;

use serde_json::json;

// =============================================================
// Serde representation
// =============================================================

#[test]
fn unit_event_serializes_with_tag_only() {
    let json = serde_json::to_value(&CanvasEvent::Drop).expect("serialize");
    assert_eq!(json, json!({ "event": "drop" }));
}

#[test]
fn start_drag_serializes_with_snake_case_tag() {
    let event = CanvasEvent::StartDrag {
        source_id: "g0".into(),
        start_position: Point::new(30.0, 40.0),
        source_index: 2,
        image: ImageHandle(5),
    };
    let value = serde_json::to_value(&event).expect("serialize");
    assert_eq!(
        value,
        json!({
            "event": "start_drag",
            "source_id": "g0",
            "start_position": { "x": 30.0, "y": 40.0 },
            "source_index": 2,
            "image": 5,
        })
    );
}

#[test]
fn events_round_trip_through_json() {
    let events = vec![
        CanvasEvent::SetCanvasBounds { bounds: Rect::new(0.0, 0.0, 100.0, 100.0) },
        CanvasEvent::StartDrag {
            source_id: "g1".into(),
            start_position: Point::new(1.0, 2.0),
            source_index: 1,
            image: ImageHandle(2),
        },
        CanvasEvent::UpdateDrag { position: Point::new(3.0, 4.0) },
        CanvasEvent::CancelDrag,
        CanvasEvent::Drop,
        CanvasEvent::SelectPlaced { id: "p1".into() },
        CanvasEvent::BeginManipulation { id: "p1".into() },
        CanvasEvent::TransformPlaced {
            id: "p1".into(),
            translation: Point::new(5.0, 6.0),
            scale_change: 1.5,
        },
        CanvasEvent::DismissOnboarding,
    ];
    for event in events {
        let json = serde_json::to_string(&event).expect("serialize");
        let back: CanvasEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }
}

#[test]
fn unknown_tag_fails_to_deserialize() {
    let err = serde_json::from_value::<CanvasEvent>(json!({ "event": "explode" }));
    assert!(err.is_err());
}

use std::collections::HashMap;

use interaction_lab_core::{
    channel::{parse_message, FrameEndpoint, HostChannel, LabMessage, ReadyPayload},
    config::RuntimeConfig,
    ids::TargetId,
    inputs::HostEvent,
    outputs::{HostOp, RuntimeEvent},
    preset::PresetKind,
    runtime::TargetResolver,
};
use serde_json::json;

struct MapResolver(HashMap<String, Vec<TargetId>>);

impl MapResolver {
    fn with(selector: &str, targets: &[u32]) -> Self {
        let mut map = HashMap::new();
        map.insert(
            selector.to_string(),
            targets.iter().copied().map(TargetId).collect(),
        );
        MapResolver(map)
    }
}

impl TargetResolver for MapResolver {
    fn resolve(&mut self, selector: &str) -> Vec<TargetId> {
        self.0.get(selector).cloned().unwrap_or_default()
    }
}

fn ready(demo_id: &str) -> LabMessage {
    LabMessage::Ready(ReadyPayload {
        demo_id: demo_id.to_string(),
    })
}

#[test]
fn messages_use_the_wire_shape() {
    let msg = LabMessage::ConfigUpdate(json!({ "duration": 600 }));
    let wire = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(
        wire,
        json!({ "type": "config-update", "payload": { "duration": 600 } })
    );

    let wire = serde_json::to_value(ready("fade")).expect("serialize");
    assert_eq!(wire, json!({ "type": "ready", "payload": { "demoId": "fade" } }));
}

#[test]
fn unknown_or_malformed_messages_are_ignored() {
    assert!(parse_message(r#"{ "type": "nope", "payload": {} }"#).is_none());
    assert!(parse_message("42").is_none());
    assert!(parse_message("not json").is_none());
}

/// the host queues the latest config and flushes exactly one on ready
#[test]
fn host_flushes_one_queued_config_on_ready() {
    let mut host = HostChannel::new();
    assert!(host.push_config(json!({ "duration": 100 })).is_none());
    assert!(host.push_config(json!({ "duration": 200 })).is_none());

    let flushed = host.on_message(ready("fade"));
    assert_eq!(
        flushed,
        Some(LabMessage::ConfigUpdate(json!({ "duration": 200 })))
    );
    // nothing left to flush
    assert!(host.on_message(ready("fade")).is_none());

    // once ready, configs go straight out
    assert_eq!(
        host.push_config(json!({ "duration": 300 })),
        Some(LabMessage::ConfigUpdate(json!({ "duration": 300 })))
    );
}

#[test]
fn host_records_errors_until_next_ready() {
    let mut host = HostChannel::new();
    let err = parse_message(
        r#"{ "type": "error", "payload": { "message": "boom", "stack": "" } }"#,
    )
    .expect("error message parses");
    host.on_message(err);
    assert_eq!(host.last_error().map(|e| e.message.as_str()), Some("boom"));

    host.on_message(ready("fade"));
    assert!(host.last_error().is_none());

    host.reset();
    assert!(!host.is_ready());
}

#[test]
fn frame_announces_ready_once_with_demo_id() {
    let mut frame = FrameEndpoint::new(PresetKind::Rotate, RuntimeConfig::default());
    let mut resolver = MapResolver::with(".is-rotate", &[0]);
    let turn = frame.startup(&mut resolver);
    assert!(matches!(
        turn.outbound.last(),
        Some(LabMessage::Ready(ReadyPayload { demo_id })) if demo_id == "rotate"
    ));
    // default config applied and played
    assert!(turn.outputs.ops.iter().any(|op| matches!(
        op,
        HostOp::SetVar { name, .. } if name == "--lab-from-rotate"
    )));
    assert!(turn
        .outputs
        .events
        .iter()
        .any(|e| matches!(e, RuntimeEvent::Played { .. })));
}

#[test]
fn frame_applies_config_updates() {
    let mut frame = FrameEndpoint::new(PresetKind::Rotate, RuntimeConfig::default());
    let mut resolver = MapResolver::with(".is-rotate", &[0]);
    frame.startup(&mut resolver);

    let turn = frame.on_message(
        r#"{ "type": "config-update", "payload": { "fromDeg": -24, "duration": 400 } }"#,
        &mut resolver,
    );
    assert!(turn.outbound.is_empty());
    assert!(turn.outputs.ops.iter().any(|op| matches!(
        op,
        HostOp::SetVar { name, value, .. } if name == "--lab-from-rotate" && value == "-24deg"
    )));
    assert_eq!(
        frame.last_config(),
        Some(&json!({ "fromDeg": -24, "duration": 400 }))
    );
}

/// a poisoned payload is caught and reported through the channel
#[test]
fn frame_reports_errors_for_poisoned_payloads() {
    let mut frame = FrameEndpoint::new(PresetKind::Fade, RuntimeConfig::default());
    let mut resolver = MapResolver::with(".is-fade", &[0]);
    frame.startup(&mut resolver);

    let turn = frame.on_parsed(
        LabMessage::ConfigUpdate(json!("this is not a config")),
        &mut resolver,
    );
    match turn.outbound.first() {
        Some(LabMessage::Error(payload)) => assert!(!payload.message.is_empty()),
        other => panic!("expected an error message, got {other:?}"),
    }
    // the previous config stays live
    assert!(frame.last_config().is_some());
}

/// spec scenario: infinite sequence, two completions, then playCount 1
#[test]
fn config_switch_mid_sequence_cancels_old_chain() {
    let mut frame = FrameEndpoint::new(PresetKind::Scale, RuntimeConfig::default());
    let mut resolver = MapResolver::with(".is-scale", &[9]);
    let target = TargetId(9);
    frame.startup(&mut resolver);

    frame.on_parsed(
        LabMessage::ConfigUpdate(json!({ "playCount": "infinite" })),
        &mut resolver,
    );
    for _ in 0..2 {
        let out = frame.handle_event(HostEvent::AnimationEnd { target });
        assert!(out
            .events
            .iter()
            .any(|e| matches!(e, RuntimeEvent::Played { .. })));
    }

    let turn = frame.on_parsed(
        LabMessage::ConfigUpdate(json!({ "playCount": 1 })),
        &mut resolver,
    );
    let mut plays_after_switch = turn
        .outputs
        .events
        .iter()
        .filter(|e| matches!(e, RuntimeEvent::Played { .. }))
        .count();
    for _ in 0..4 {
        let out = frame.handle_event(HostEvent::AnimationEnd { target });
        plays_after_switch += out
            .events
            .iter()
            .filter(|e| matches!(e, RuntimeEvent::Played { .. }))
            .count();
    }
    assert_eq!(plays_after_switch, 1);
}

/// replay re-applies the last config and plays once without touching the
/// sequence counter
#[test]
fn replay_plays_once() {
    let mut frame = FrameEndpoint::new(PresetKind::Fade, RuntimeConfig::default());
    let mut resolver = MapResolver::with(".is-fade", &[0]);
    frame.startup(&mut resolver);

    let out = frame.replay();
    let played = out
        .events
        .iter()
        .filter(|e| matches!(e, RuntimeEvent::Played { .. }))
        .count();
    assert_eq!(played, 1);
    assert!(out
        .ops
        .iter()
        .any(|op| matches!(op, HostOp::ForceReflow { .. })));
}

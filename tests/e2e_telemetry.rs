use awb_domain::lang::LangCode;
use awb_domain::types::Namespace;
use awb_engine::TitleTools;
use awb_telemetry::events::TelemetryEvent;
use awb_telemetry::setup::{TelemetryConfig, TelemetryError};

#[test]
fn test_events_from_analyzed_titles() {
    let tools = TitleTools::default();
    let titles = ["David Smith", "Talk:Foo", "MediaWiki:Common.css", "[[Bad]]"];

    let reports: Vec<_> = titles.iter().map(|t| tools.analyze(t)).collect();
    let events: Vec<TelemetryEvent> = reports
        .iter()
        .map(|r| TelemetryEvent::title_analyzed(&r.title, r.namespace, &r.sort_key))
        .collect();

    match &events[0] {
        TelemetryEvent::TitleAnalyzed { namespace, sort_key, .. } => {
            assert_eq!(*namespace, Namespace::MAIN);
            assert_eq!(sort_key, "Smith, David");
        }
        _ => panic!("Expected TitleAnalyzed"),
    }

    let invalid = reports.iter().filter(|r| !r.is_valid_title).count();
    let non_editable = reports.iter().filter(|r| !r.is_editable_space).count();
    let done = TelemetryEvent::batch_completed(reports.len(), invalid, non_editable, 0.01);
    let json: serde_json::Value = serde_json::from_str(&done.to_json()).unwrap();
    assert_eq!(json["BatchCompleted"]["total"], 4);
    assert_eq!(json["BatchCompleted"]["invalid"], 1);
    assert_eq!(json["BatchCompleted"]["non_editable"], 1);
}

#[test]
fn test_batch_started_serializes_lang_code() {
    let event = TelemetryEvent::batch_started("titles.txt", "ukwiki", LangCode::Uk);
    let json: serde_json::Value = serde_json::from_str(&event.to_json()).unwrap();
    assert_eq!(json["BatchStarted"]["lang"], "uk");
    assert_eq!(json["BatchStarted"]["site"], "ukwiki");
    assert!(json["BatchStarted"]["timestamp"].is_string());
}

#[test]
fn test_all_event_variants_emit() {
    let events = vec![
        TelemetryEvent::batch_started("stdin", "enwiki", LangCode::En),
        TelemetryEvent::title_analyzed("Madonna", Namespace::MAIN, "Madonna"),
        TelemetryEvent::batch_completed(1, 0, 0, 0.0),
    ];
    for event in &events {
        event.emit();
        assert!(!event.to_json().is_empty());
    }
}

#[test]
fn test_telemetry_config_levels() {
    let config = TelemetryConfig::with_level_name("debug", true).unwrap();
    assert!(config.json_output);

    assert!(matches!(
        TelemetryConfig::with_level_name("loud", false),
        Err(TelemetryError::InvalidLevel(_))
    ));
}

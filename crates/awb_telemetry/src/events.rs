use awb_domain::lang::LangCode;
use awb_domain::types::Namespace;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub enum TelemetryEvent {
    BatchStarted { source: String, site: String, lang: LangCode, timestamp: DateTime<Utc> },
    TitleAnalyzed { title: String, namespace: Namespace, sort_key: String, timestamp: DateTime<Utc> },
    BatchCompleted { total: usize, invalid: usize, non_editable: usize, elapsed_secs: f64, timestamp: DateTime<Utc> },
}

impl TelemetryEvent {
    pub fn batch_started(source: impl Into<String>, site: impl Into<String>, lang: LangCode) -> Self {
        Self::BatchStarted { source: source.into(), site: site.into(), lang, timestamp: Utc::now() }
    }
    pub fn title_analyzed(title: impl Into<String>, namespace: Namespace, sort_key: impl Into<String>) -> Self {
        Self::TitleAnalyzed { title: title.into(), namespace, sort_key: sort_key.into(), timestamp: Utc::now() }
    }
    pub fn batch_completed(total: usize, invalid: usize, non_editable: usize, elapsed_secs: f64) -> Self {
        Self::BatchCompleted { total, invalid, non_editable, elapsed_secs, timestamp: Utc::now() }
    }

    /// Forward the event to the active `tracing` subscriber.
    pub fn emit(&self) {
        match self {
            Self::BatchStarted { source, site, lang, .. } => {
                tracing::info!(source = %source, site = %site, lang = %lang, "batch started");
            }
            Self::TitleAnalyzed { title, namespace, sort_key, .. } => {
                tracing::debug!(title = %title, namespace = namespace.0, sort_key = %sort_key, "title analyzed");
            }
            Self::BatchCompleted { total, invalid, non_editable, elapsed_secs, .. } => {
                tracing::info!(total, invalid, non_editable, elapsed_secs, "batch completed");
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_started() {
        let event = TelemetryEvent::batch_started("titles.txt", "ruwiki", LangCode::Ru);
        match &event {
            TelemetryEvent::BatchStarted { source, site, lang, .. } => {
                assert_eq!(source, "titles.txt");
                assert_eq!(site, "ruwiki");
                assert_eq!(*lang, LangCode::Ru);
            }
            _ => panic!("Expected BatchStarted"),
        }
    }

    #[test]
    fn test_title_analyzed_serializes() {
        let event = TelemetryEvent::title_analyzed("David Smith", Namespace::MAIN, "Smith, David");
        let json = event.to_json();
        assert!(json.contains("TitleAnalyzed"));
        assert!(json.contains("\"sort_key\":\"Smith, David\""));
        assert!(json.contains("\"namespace\":0"));
    }

    #[test]
    fn test_batch_completed() {
        let event = TelemetryEvent::batch_completed(10, 2, 1, 0.5);
        match &event {
            TelemetryEvent::BatchCompleted { total, invalid, non_editable, elapsed_secs, .. } => {
                assert_eq!(*total, 10);
                assert_eq!(*invalid, 2);
                assert_eq!(*non_editable, 1);
                assert!(*elapsed_secs > 0.0);
            }
            _ => panic!("Expected BatchCompleted"),
        }
    }

    #[test]
    fn test_emit_without_subscriber_is_noop() {
        TelemetryEvent::batch_completed(0, 0, 0, 0.0).emit();
    }
}

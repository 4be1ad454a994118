// End to end scenarios: construct, dispatch, emit, and inspect what the sink received.

use crate::modules::events::adapters::outbound::in_memory_sink::InMemoryRenderSink;
use crate::modules::events::adapters::outbound::stream_sink::{
    RenderFormat, StreamRenderSink, render_text,
};
use crate::modules::events::core::kind::{EventCategory, EventKind};
use crate::modules::events::core::record::EventRecord;
use crate::modules::events::dispatch::top::{dispatch, dispatch_with};
use crate::modules::events::use_cases::report_event::handler::ReportEventHandler;
use crate::shared::core::primitives::format_timestamp;
use crate::tests::fixtures::handlers::RecordingHandler;
use crate::tests::fixtures::records::fixed_timestamp;
use crate::tests::fixtures::rendered_text::decode_text_report;
use rstest::rstest;
use std::sync::Arc;
use uuid::Uuid;

#[rstest]
fn session_start_renders_its_fields_and_runs_only_its_handler() {
    let record = EventRecord::session_start(9876, fixed_timestamp(), "session123", 42);
    let rendered = dispatch(&record);
    assert_eq!(
        rendered.values(),
        vec![
            "9876",
            format_timestamp(&fixed_timestamp()).as_str(),
            "session123",
            "42"
        ]
    );

    let mut handler = RecordingHandler::default();
    dispatch_with(&record, &mut handler);
    assert_eq!(handler.count(EventKind::SessionStart), 1);
    assert_eq!(handler.calls.len(), 1);
}

#[rstest]
fn auth_login_renders_its_fields_and_runs_only_its_handler() {
    let record = EventRecord::auth_login(6789, fixed_timestamp(), "Fred", 42);
    let rendered = dispatch(&record);
    assert_eq!(
        rendered.values(),
        vec![
            "6789",
            format_timestamp(&fixed_timestamp()).as_str(),
            "Fred",
            "42"
        ]
    );

    let mut handler = RecordingHandler::default();
    dispatch_with(&record, &mut handler);
    assert_eq!(handler.count(EventKind::AuthLogin), 1);
    assert_eq!(handler.count(EventKind::SessionStart), 0);
    assert_eq!(handler.count(EventKind::SessionEnd), 0);
    assert_eq!(handler.count(EventKind::AuthLogout), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reports_keep_field_fidelity_for_every_record() {
    let sink = Arc::new(InMemoryRenderSink::new());
    let handler = ReportEventHandler::new(sink.clone());

    let records: Vec<EventRecord> = (0..1000)
        .map(|i: i32| {
            let kind = EventKind::ALL[i as usize % EventKind::ALL.len()];
            let identifier = format!("{}-{}", kind, Uuid::now_v7());
            EventRecord::new(kind, (i % 300) as i16, fixed_timestamp(), identifier, i)
        })
        .collect();

    let mut tasks = Vec::with_capacity(records.len());
    for record in records.iter().cloned() {
        let handler = handler.clone();
        tasks.push(tokio::spawn(async move {
            let result = handler.handle(&record).await;
            result.map(|rendered| (record, rendered))
        }));
    }

    for task in tasks {
        let (record, rendered) = task.await.expect("task panicked").expect("report failed");
        assert_eq!(rendered.kind, record.kind());
        assert_eq!(
            rendered.values(),
            vec![
                record.envelope().process_id.to_string(),
                format_timestamp(&record.envelope().timestamp),
                record.category_identifier().to_string(),
                record.extra().specific_data.to_string(),
            ]
        );
    }

    let rows = sink.rows().await;
    assert_eq!(rows.len(), records.len());
    for record in &records {
        let expected = dispatch(record);
        assert_eq!(rows.iter().filter(|row| **row == expected).count(), 1);
    }
}

#[rstest]
fn session_end_text_report_decodes_back_to_its_identity() {
    let record = EventRecord::session_end(9876, fixed_timestamp(), "session123", 42);
    let decoded = decode_text_report(&render_text(&dispatch(&record))).unwrap();
    assert_eq!(decoded.category, "Session");
    assert_eq!(decoded.leaf, "SessionEnd");
    assert_eq!(decoded.values[2], "session123");
    assert_eq!(decoded.values[3], "42");
}

#[rstest]
#[case(EventKind::SessionStart)]
#[case(EventKind::SessionEnd)]
#[case(EventKind::AuthLogin)]
#[case(EventKind::AuthLogout)]
#[tokio::test]
async fn every_kind_survives_the_text_sink(#[case] kind: EventKind) {
    let sink = Arc::new(StreamRenderSink::new(Vec::new(), RenderFormat::Text));
    let handler = ReportEventHandler::new(sink.clone());
    let record = EventRecord::new(kind, 1, fixed_timestamp(), "id-1", 5);
    handler.handle(&record).await.expect("report failed");
    drop(handler);

    let sink = Arc::try_unwrap(sink).ok().expect("sink still shared");
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let decoded = decode_text_report(&text).unwrap();
    assert_eq!(decoded.leaf, kind.as_str());
    let expected_category = match kind.category() {
        EventCategory::Session => "Session",
        EventCategory::Auth => "Auth",
    };
    assert_eq!(decoded.category, expected_category);
}

use std::io::Cursor;

use regex::Regex;

use lookout_core::{
    approx_equal, codec, event_to_json, sets, Event, EventOptions, FailureReport, Field,
    FixedClock, Matcher, Message, Value,
};

fn options_event(service: &str, metric: f64, tags: &[&str], clock: &FixedClock) -> Event {
    Event::from_options(
        EventOptions {
            host: Some("web-1".to_string()),
            service: Some(service.to_string()),
            state: Some("ok".to_string()),
            metric: Some(metric),
            tags: tags.iter().map(ToString::to_string).collect(),
            ..EventOptions::default()
        },
        clock,
    )
}

#[test]
fn reporter_frame_flows_through_stream_normalization_and_export() {
    let reporter_clock = FixedClock::at(1_700_000_000);
    let server_clock = FixedClock::at(1_700_000_100);

    // One event stamped by the reporter, one sent raw without a time.
    let stamped = options_event("api latency", 0.217, &["http", "latency"], &reporter_clock);
    let raw = Event {
        service: Some("disk io".to_string()),
        metric: Some(0.4),
        ..Event::default()
    };

    let request = Message::default().with_events(vec![stamped.clone(), raw]);
    let mut wire_session = Vec::new();
    codec::encode_stream(&request, &mut wire_session).unwrap();

    let mut socket = Cursor::new(wire_session);
    let received = codec::decode_stream(&mut socket, &server_clock).unwrap();

    // The reporter's timestamp survives; the raw event gets the server's.
    assert_eq!(received.events[0].time, Some(1_700_000_000));
    assert_eq!(received.events[1].time, Some(1_700_000_100));
    assert_eq!(received.events[0], stamped);

    // Export keeps wire names and renders time for humans.
    let exported: serde_json::Value =
        serde_json::from_str(&event_to_json(&received.events[0])).unwrap();
    assert_eq!(exported["service"], "api latency");
    assert_eq!(exported["time"], "2023-11-14T22:13:20.000Z");
    assert_eq!(exported["tags"], serde_json::json!(["http", "latency"]));
}

#[test]
fn decoded_events_drive_the_match_engine() {
    let clock = FixedClock::at(10);
    let request = Message::default().with_events(vec![
        options_event("riak gets time/s", 4.2, &["riak", "latency"], &clock),
        options_event("riak puts time/s", 9.1, &["riak", "latency"], &clock),
        options_event("cpu", 0.93, &["host"], &clock),
    ]);

    let frame = codec::encode(&request).unwrap();
    let received = codec::decode(&frame, &clock).unwrap();

    // Closed matcher set: pattern over service, callable over metric,
    // literal over state.
    let riak_services = Matcher::Pattern(Regex::new("^riak ").unwrap());
    let slow = Matcher::predicate(|v| v.as_float().is_some_and(|m| m > 5.0));
    let is_ok = Matcher::literal("ok");

    let riak_events: Vec<&Event> = received
        .events
        .iter()
        .filter(|event| riak_services.matches(&event.field(Field::Service)))
        .collect();
    assert_eq!(riak_events.len(), 2);

    let slow_riak: Vec<&Event> = riak_events
        .iter()
        .copied()
        .filter(|event| slow.matches(&event.field(Field::Metric)))
        .collect();
    assert_eq!(slow_riak.len(), 1);
    assert_eq!(slow_riak[0].service.as_deref(), Some("riak puts time/s"));

    assert!(received
        .events
        .iter()
        .all(|event| is_ok.matches(&event.field(Field::State))));

    // Tag algebra over the decoded batch.
    assert!(received.events[0].tagged_all(&["riak", "latency"]));
    assert!(sets::disjoint(
        &received.events[0].tags,
        &received.events[2].tags
    ));

    // A pattern asked about an absent field is a non-match, not a panic.
    let pattern = Matcher::Pattern(Regex::new(".*").unwrap());
    assert!(!pattern.matches(&received.events[0].field(Field::Description)));
}

#[test]
fn failure_reports_travel_like_any_other_event() {
    let clock = FixedClock::at(500);
    let failure = FailureReport::new("TimeoutError", "graphite sink timed out")
        .with_trace(vec!["caused by: connect timed out".to_string()]);

    let event = Event::from_failure(&failure, &clock);
    let frame = codec::encode(&Message::default().with_events(vec![event])).unwrap();
    let received = codec::decode(&frame, &clock).unwrap();

    let exception = &received.events[0];
    assert_eq!(exception.service.as_deref(), Some("monitoring exception"));
    assert_eq!(exception.state.as_deref(), Some("error"));
    assert_eq!(exception.time, Some(500));
    assert!(exception.has_tag("exception"));
    assert!(exception.has_tag("TimeoutError"));
    assert!(exception
        .description
        .as_deref()
        .unwrap()
        .contains("graphite sink timed out"));

    // Routable by the same predicates as ordinary events.
    let exceptions = Matcher::literal("error");
    assert!(exceptions.matches(&exception.field(Field::State)));
}

#[test]
fn acknowledgement_replies_roundtrip() {
    let clock = FixedClock::at(0);

    let ack = codec::decode(&codec::encode(&Message::ok()).unwrap(), &clock).unwrap();
    assert_eq!(ack.ok, Some(true));
    assert!(ack.error.is_none());

    let rejection = codec::decode(
        &codec::encode(&Message::error("queue full")).unwrap(),
        &clock,
    )
    .unwrap();
    assert_eq!(rejection.ok, Some(false));
    assert_eq!(rejection.error.as_deref(), Some("queue full"));

    let query = Message::default().with_query("service = \"cpu\"");
    let roundtrip = codec::decode(&codec::encode(&query).unwrap(), &clock).unwrap();
    assert_eq!(roundtrip.query.as_deref(), Some("service = \"cpu\""));
}

#[test]
fn pinned_wire_vector_stays_stable() {
    let message = Message::default().with_events(vec![Event {
        host: Some("h".to_string()),
        service: Some("s".to_string()),
        time: Some(0),
        ..Event::default()
    }]);

    let frame = codec::encode(&message).unwrap();
    assert_eq!(hex::encode(&frame), "22080a01681201732000");

    let mut prefixed = Vec::new();
    codec::encode_stream(&message, &mut prefixed).unwrap();
    assert_eq!(hex::encode(&prefixed), "0000000a22080a01681201732000");

    // And the other direction, from bytes a foreign implementation sent.
    let received = codec::decode(&hex::decode("22080a01681201732000").unwrap(), &FixedClock::at(9))
        .unwrap();
    assert_eq!(received.events[0].host.as_deref(), Some("h"));
    assert_eq!(received.events[0].service.as_deref(), Some("s"));
    assert_eq!(received.events[0].time, Some(0));
    assert_eq!(
        event_to_json(&received.events[0]),
        r#"{"host":"h","service":"s","time":"1970-01-01T00:00:00.000Z"}"#
    );
}

#[test]
fn metrics_survive_the_wire_to_dashboard_precision() {
    let clock = FixedClock::at(1);
    let sent = 1234.5678_f64;
    let message = Message::default().with_events(vec![Event {
        metric: Some(sent),
        ..Event::default()
    }]);

    let received = codec::decode(&codec::encode(&message).unwrap(), &clock).unwrap();
    let metric = received.events[0].metric.unwrap();

    // Doubles roundtrip exactly; approx_equal is how dashboards compare
    // values that took different aggregation paths.
    assert_eq!(metric, sent);
    assert!(approx_equal(metric, 1234.0));
    assert!(!approx_equal(metric, 1300.0));
}

#[test]
fn options_with_fractional_time_land_on_whole_seconds() {
    let clock = FixedClock::at(77);
    let event = Event::from_options(
        EventOptions {
            service: Some("uptime".to_string()),
            time: Some(1_699_999_999.6),
            ..EventOptions::default()
        },
        &clock,
    );
    assert_eq!(event.time, Some(1_700_000_000));

    let stamped = Event::from_options(EventOptions::default(), &clock);
    assert_eq!(stamped.time, Some(77));

    // Values are carried as given; nothing is invented for absent fields.
    let frame = codec::encode(&Message::default().with_events(vec![event])).unwrap();
    let received = codec::decode(&frame, &clock).unwrap();
    assert!(received.events[0].host.is_none());
    assert!(received.events[0].metric.is_none());
    assert_eq!(received.events[0].field(Field::Host), Value::Null);
}

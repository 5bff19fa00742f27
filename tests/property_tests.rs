//! Property-based tests for cascade_logger using proptest

use cascade_logger::prelude::*;
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;

fn emit_one(level: Level, threshold: Level, message: &str, attrs: &[Attr<'_>]) -> Option<Value> {
    let sink = MemorySink::new();
    let logger = Logger::with_pool(sink.clone(), threshold, Arc::new(BufferPool::new(2)));
    logger.emit(level, message, attrs);
    logger.release();

    let records = sink.records();
    records.first().map(|r| {
        serde_json::from_str(r).unwrap_or_else(|e| panic!("invalid JSON: {}\ndata: {}", e, r))
    })
}

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Error),
        Just(Level::Warning),
        Just(Level::Debug),
    ]
}

fn any_threshold() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Error),
        Just(Level::Warning),
        Just(Level::Debug),
        Just(Level::All),
    ]
}

// Escaping covers `"`, newline, and tab; a raw backslash in the input is
// intentionally outside the supported alphabet, so the generators exclude
// it along with other control characters.
const TEXT: &str = "[a-zA-Z0-9 \n\t\"!#$%&'()*+,\\-./:;<=>?@^_{|}~]*";

proptest! {
    /// A record is written iff the level passes the threshold.
    #[test]
    fn prop_emission_follows_threshold(level in any_level(), threshold in any_threshold()) {
        let record = emit_one(level, threshold, "probe", &[]);
        prop_assert_eq!(record.is_some(), level <= threshold);
    }

    /// Every emitted record is a complete JSON object with the fixed
    /// leading fields.
    #[test]
    fn prop_records_are_valid_json(message in TEXT) {
        let record = emit_one(Level::Error, Level::All, &message, &[Attr::int("n", 1)])
            .expect("record must be written");
        prop_assert!(record["message"].is_string());
        prop_assert_eq!(&record["level"], "ERROR");
        prop_assert_eq!(&record["n"], 1);
    }

    /// Message text round-trips through the escape-and-parse cycle.
    #[test]
    fn prop_message_round_trips(message in TEXT) {
        let record = emit_one(Level::Error, Level::All, &message, &[]).unwrap();
        prop_assert_eq!(record["message"].as_str().unwrap(), message);
    }

    /// String attribute values round-trip.
    #[test]
    fn prop_string_attr_round_trips(value in TEXT) {
        let record = emit_one(Level::Error, Level::All, "probe", &[Attr::string("s", &value)])
            .unwrap();
        prop_assert_eq!(record["s"].as_str().unwrap(), value);
    }

    /// Signed integers of any magnitude render their exact decimal value.
    #[test]
    fn prop_int_attr_exact(value in any::<i64>()) {
        let record = emit_one(Level::Error, Level::All, "probe", &[Attr::int("i", value)])
            .unwrap();
        prop_assert_eq!(record["i"].as_i64().unwrap(), value);
    }

    /// Unsigned integers of any magnitude render their exact decimal value.
    #[test]
    fn prop_uint_attr_exact(value in any::<u64>()) {
        let record = emit_one(Level::Error, Level::All, "probe", &[Attr::uint("u", value)])
            .unwrap();
        prop_assert_eq!(record["u"].as_u64().unwrap(), value);
    }

    /// Fixed-precision floats land within half of the last rendered digit.
    #[test]
    fn prop_float_attr_within_precision(value in -1.0e9..1.0e9f64) {
        let record = emit_one(Level::Error, Level::All, "probe", &[Attr::float("f", value)])
            .unwrap();
        let parsed = record["f"].as_f64().unwrap();
        prop_assert!((parsed - value).abs() <= 6.0e-5 + value.abs() * 1.0e-9,
            "value {} rendered as {}", value, parsed);
    }

    /// Branch context appears in the branch's records and never in the
    /// parent's.
    #[test]
    fn prop_branch_context_is_isolated(parent_val in TEXT, branch_val in TEXT) {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(
            sink.clone(),
            Level::Debug,
            Arc::new(BufferPool::new(2)),
        );
        let parent = logger.branch(&[Attr::string("parent", &parent_val)]);
        let child = parent.branch(&[Attr::string("child", &branch_val)]);

        child.debug("from child", &[]);
        parent.debug("from parent", &[]);
        logger.release();

        let records = sink.records();
        prop_assert_eq!(records.len(), 2);

        let child_record: Value = serde_json::from_str(&records[0]).unwrap();
        prop_assert_eq!(child_record["parent"].as_str().unwrap(), &parent_val);
        prop_assert_eq!(child_record["child"].as_str().unwrap(), &branch_val);

        let parent_record: Value = serde_json::from_str(&records[1]).unwrap();
        prop_assert_eq!(parent_record["parent"].as_str().unwrap(), &parent_val);
        prop_assert!(parent_record.get("child").is_none());
    }

    /// Consecutive emissions through one handle never leak fields into
    /// each other.
    #[test]
    fn prop_sequenced_records_independent(first in TEXT, second in TEXT) {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(
            sink.clone(),
            Level::Debug,
            Arc::new(BufferPool::new(2)),
        );
        logger.debug("one", &[Attr::string("first", &first)]);
        logger.debug("two", &[Attr::string("second", &second)]);
        logger.release();

        let records = sink.records();
        let one: Value = serde_json::from_str(&records[0]).unwrap();
        let two: Value = serde_json::from_str(&records[1]).unwrap();
        prop_assert!(one.get("second").is_none());
        prop_assert!(two.get("first").is_none());
    }
}

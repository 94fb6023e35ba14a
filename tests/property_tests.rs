//! Property-based tests for rust_log_factory using proptest

use proptest::prelude::*;
use rust_log_factory::appenders::MemoryAppender;
use rust_log_factory::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
    ]
}

/// Randomly upper-cases characters of `name`
fn mixed_case(name: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), name.len()).prop_map(move |mask| {
        name.chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

// ============================================================================
// Resolution Tests
// ============================================================================

proptest! {
    /// Any casing of a valid level name resolves to that level
    #[test]
    fn test_level_any_casing(level in any_level(), mask in prop::collection::vec(any::<bool>(), 7)) {
        let name: String = level
            .to_str()
            .chars()
            .zip(mask.into_iter().chain(std::iter::repeat(false)))
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();

        let factory = LoggerFactory { level: name, format: "json".to_string(), ..Default::default() };
        let logger = factory.build_with_appender(Fields::new(), MemoryAppender::new()).unwrap();
        prop_assert_eq!(logger.min_level(), level);
    }

    /// Any casing of a valid format name resolves to that format
    #[test]
    fn test_format_any_casing(name in prop_oneof![
        mixed_case("text"),
        mixed_case("json"),
        mixed_case("fluentd"),
    ]) {
        let factory = LoggerFactory { format: name.clone(), ..Default::default() };
        let config = factory.resolve_with_terminal(false).unwrap();
        prop_assert_eq!(config.format.to_str(), name.to_lowercase());
    }

    /// Unknown level names are rejected and the message lists the valid ones
    #[test]
    fn test_unknown_level_rejected(name in "[a-z]{1,12}") {
        prop_assume!(!LogLevel::NAMES.contains(&name.as_str()));

        let factory = LoggerFactory { level: name, ..Default::default() };
        let err = factory.resolve_with_terminal(true).unwrap_err();
        let message = err.to_string();
        for valid in LogLevel::NAMES {
            prop_assert!(message.contains(valid));
        }
    }

    /// Unknown format names are rejected and the message lists the valid ones
    #[test]
    fn test_unknown_format_rejected(name in "[a-z]{1,12}") {
        prop_assume!(!OutputFormat::NAMES.contains(&name.as_str()));

        let factory = LoggerFactory { format: name, ..Default::default() };
        let err = factory.resolve_with_terminal(true).unwrap_err();
        prop_assert!(matches!(err, LoggerError::InvalidFormat { .. }), "unexpected error: {}", err);
        for valid in OutputFormat::NAMES {
            prop_assert!(err.to_string().contains(valid));
        }
    }

    /// Empty format follows terminal detection unless forced
    #[test]
    fn test_empty_format_defaulting(is_terminal in any::<bool>(), force in any::<bool>()) {
        let factory = LoggerFactory { force_format: force, ..Default::default() };
        let config = factory.resolve_with_terminal(is_terminal).unwrap();

        let expected = if !force && !is_terminal { OutputFormat::Json } else { OutputFormat::Text };
        prop_assert_eq!(config.format, expected);
        prop_assert_eq!(config.level, LogLevel::Info);
    }
}

// ============================================================================
// Emission Tests
// ============================================================================

proptest! {
    /// A record is written exactly when its level reaches the minimum
    #[test]
    fn test_filtering_by_level(min in any_level(), emitted in any_level()) {
        let factory = LoggerFactory {
            level: min.to_str().to_string(),
            format: "json".to_string(),
            ..Default::default()
        };
        let capture = MemoryAppender::new();
        let logger = factory.build_with_appender(Fields::new(), capture.clone()).unwrap();

        logger.log(emitted, "probe");

        prop_assert_eq!(capture.lines().len(), usize::from(emitted >= min));
    }

    /// Messages never span more than one line in the output
    #[test]
    fn test_records_are_single_line(message in ".*") {
        let factory = LoggerFactory { level: "debug".to_string(), format: "text".to_string(), ..Default::default() };
        let capture = MemoryAppender::new();
        let logger = factory.build_with_appender(Fields::new(), capture.clone()).unwrap();

        logger.info(message);

        let lines = capture.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(!lines[0].contains('\n'));
        prop_assert!(!lines[0].contains('\r'));
    }
}

// ============================================================================
// Derivation Tests
// ============================================================================

proptest! {
    /// Derived fields are the parent's overlaid with the new ones, and the
    /// parent never changes
    #[test]
    fn test_derivation_overlay(
        parent in prop::collection::btree_map("[a-d]", 0i64..100, 0..4),
        child in prop::collection::btree_map("[a-d]", 0i64..100, 0..4),
    ) {
        let parent_fields: Fields = parent.clone().into_iter().collect();
        let child_fields: Fields = child.clone().into_iter().collect();

        let base = Logger::global().with_fields(parent_fields.clone());
        let derived = base.with_fields(child_fields);

        prop_assert_eq!(base.fields(), &parent_fields);

        let mut expected = parent;
        expected.extend(child);
        let expected: Fields = expected.into_iter().collect();
        prop_assert_eq!(derived.fields(), &expected);
    }
}

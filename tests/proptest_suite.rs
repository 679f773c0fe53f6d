//! Property-based tests for app_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use app_errors::{
    AppError, Category, Id, IdError, MAX_FIELD_OUTPUT_LEN, UNKNOWN_CATEGORY_NAME, bad_request,
    find_app_error, forbidden, internal_server_error, is_category, not_found, unauthorized,
};
use proptest::prelude::*;
use std::fmt;

fn any_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// Plain wrapper that only exposes its inner error through `source()`.
#[derive(Debug)]
struct Wrapped {
    layer: usize,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {}", self.layer)
    }
}

impl std::error::Error for Wrapped {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref() as &(dyn std::error::Error + 'static))
    }
}

fn wrap(err: AppError, depth: usize) -> Box<dyn std::error::Error + Send + Sync> {
    let mut current: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
    for layer in 0..depth {
        current = Box::new(Wrapped {
            layer,
            inner: current,
        });
    }
    current
}

// ============================================================================
// CATEGORY PROPERTIES
// ============================================================================

proptest! {
    /// Name lookup is total and stable
    #[test]
    fn category_names_total(raw in any::<i64>()) {
        let name = Category::name_of(raw);
        prop_assert!(!name.is_empty());
        match Category::from_repr(raw) {
            Some(category) => prop_assert_eq!(name, category.name()),
            None => prop_assert_eq!(name, UNKNOWN_CATEGORY_NAME),
        }
    }
}

// ============================================================================
// CONSTRUCTION PROPERTIES
// ============================================================================

proptest! {
    /// Construction preserves category and internal code
    #[test]
    fn construction_preserves_code(
        category in any_category(),
        internal in prop::option::of(any::<i32>()),
        cause in "\\PC{0,200}",
    ) {
        let err = AppError::new(cause.clone(), category, internal);
        prop_assert_eq!(err.code().category, category);
        prop_assert_eq!(err.code().internal, internal);
        prop_assert!(err.metadata().is_empty());
        prop_assert_eq!(err.to_string(), cause);
    }

    /// Display ignores the override message
    #[test]
    fn display_ignores_message(
        cause in "\\PC{0,200}",
        message in "\\PC{0,200}",
    ) {
        let err = AppError::new(cause.clone(), Category::Internal, None).with_message(message);
        prop_assert_eq!(err.to_string(), cause);
    }

    /// Status shortcuts copy the cause into the message
    #[test]
    fn shortcuts_copy_message(cause in "\\PC{0,200}") {
        for err in [
            bad_request(cause.clone()),
            not_found(cause.clone()),
            unauthorized(cause.clone()),
            forbidden(cause.clone()),
            internal_server_error(cause.clone()),
        ] {
            prop_assert_eq!(err.message(), Some(cause.as_str()));
            prop_assert_eq!(err.to_string(), cause.clone());
            prop_assert!(is_category(&err, err.category()));
        }
    }
}

// ============================================================================
// CLASSIFICATION PROPERTIES
// ============================================================================

proptest! {
    /// Classification survives any number of foreign wrappers
    #[test]
    fn is_category_through_wrappers(
        category in any_category(),
        other in any_category(),
        depth in 0usize..16,
    ) {
        let chain = wrap(AppError::new("root", category, None), depth);
        prop_assert!(is_category(chain.as_ref(), category));
        prop_assert_eq!(is_category(chain.as_ref(), other), category == other);
        prop_assert!(find_app_error(chain.as_ref()).is_some());
    }

    /// Plain errors never classify
    #[test]
    fn plain_errors_never_classify(category in any_category(), text in "\\PC{0,100}") {
        let plain = std::io::Error::other(text);
        prop_assert!(!is_category(&plain, category));
    }
}

// ============================================================================
// METADATA PROPERTIES
// ============================================================================

proptest! {
    /// Row is stored as its decimal form
    #[test]
    fn row_is_decimal(row in any::<i64>()) {
        let err = AppError::new("x", Category::Validation, None).with_row(row);
        let expected = row.to_string();
        prop_assert_eq!(err.metadata().get("row"), Some(expected.as_str()));
    }

    /// Chained builders keep every key
    #[test]
    fn chained_builders_keep_all_keys(
        field in "\\PC{0,50}",
        row in any::<i64>(),
        info in "\\PC{0,50}",
    ) {
        let err = AppError::new("x", Category::Validation, None)
            .with_field(field.clone())
            .with_row(row)
            .with_info(info.clone());

        prop_assert_eq!(err.metadata().len(), 3);
        prop_assert_eq!(err.metadata().get("field"), Some(field.as_str()));
        prop_assert_eq!(err.metadata().get("info"), Some(info.as_str()));
    }

    /// Clones never observe each other's metadata
    #[test]
    fn clones_are_isolated(
        values in prop::collection::vec("\\PC{0,50}", 1..10)
    ) {
        let base = AppError::new("x", Category::Validation, None);
        let derived: Vec<AppError> = values
            .iter()
            .map(|v| base.clone().with_field(v.clone()))
            .collect();

        prop_assert!(base.metadata().is_empty());
        for (err, value) in derived.iter().zip(&values) {
            prop_assert_eq!(err.metadata().get("field"), Some(value.as_str()));
            prop_assert_eq!(err.metadata().len(), 1);
        }
    }

    /// Distinct keys accumulate; a repeated key never duplicates
    #[test]
    fn metadata_count_matches_distinct_keys(
        keys in prop::collection::vec("[a-e]", 0..20)
    ) {
        let mut err = AppError::new("x", Category::Internal, None);
        for key in &keys {
            err = err.with_metadata(key.clone(), "v");
        }
        let distinct: std::collections::HashSet<_> = keys.iter().collect();
        prop_assert_eq!(err.metadata().len(), distinct.len());
    }
}

// ============================================================================
// LOGGING PROPERTIES
// ============================================================================

proptest! {
    /// Log output is valid UTF-8 and bounded
    #[test]
    fn internal_log_is_bounded(
        cause in "\\PC{0,5000}",
        message in "\\PC{0,5000}",
        info in "\\PC{0,5000}",
    ) {
        let err = AppError::new(cause, Category::Internal, None)
            .with_message(message)
            .with_info(info);

        let mut buffer = String::new();
        err.internal_log().write_to(&mut buffer).unwrap();

        prop_assert!(std::str::from_utf8(buffer.as_bytes()).is_ok());
        prop_assert!(buffer.len() < 5 * MAX_FIELD_OUTPUT_LEN);
    }

    /// Display and Debug never panic
    #[test]
    fn formatting_never_panics(
        category in any_category(),
        cause in "\\PC{0,1000}",
        field in "\\PC{0,1000}",
    ) {
        let err = AppError::new(cause, category, Some(1)).with_field(field);
        let _ = format!("{}", err);
        let _ = format!("{:?}", err);
    }
}

// ============================================================================
// IDENTIFIER PROPERTIES
// ============================================================================

proptest! {
    /// Parsing arbitrary text never panics
    #[test]
    fn id_parse_never_panics(text in "\\PC{0,64}") {
        let _ = Id::from_string(&text);
    }

    /// Any non-nil UUID round-trips through text
    #[test]
    fn id_round_trip(bytes in any::<[u8; 16]>()) {
        let uuid = uuid::Uuid::from_bytes(bytes);
        match Id::try_from(uuid) {
            Ok(id) => {
                let parsed = Id::from_string(&id.to_string());
                prop_assert_eq!(parsed, Ok(id));
            }
            Err(e) => {
                prop_assert!(uuid.is_nil());
                prop_assert_eq!(e, IdError::Nil);
            }
        }
    }
}

// ============================================================================
// CONCURRENT PROPERTIES
// ============================================================================

proptest! {
    /// Errors can be built and classified from many threads
    #[test]
    fn concurrent_error_creation(
        thread_count in 1usize..8,
        errors_per_thread in 1usize..50,
    ) {
        let handles: Vec<_> = (0..thread_count)
            .map(|t| {
                std::thread::spawn(move || {
                    let category = Category::ALL[t % Category::ALL.len()];
                    (0..errors_per_thread)
                        .map(|i| AppError::new(format!("error {}", i), category, None).with_row(i as i64))
                        .filter(|e| is_category(e, category))
                        .count()
                })
            })
            .collect();

        for handle in handles {
            prop_assert_eq!(handle.join().unwrap(), errors_per_thread);
        }
    }
}

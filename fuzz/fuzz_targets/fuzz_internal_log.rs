#![no_main]

use app_errors::{AppError, Category, MAX_FIELD_OUTPUT_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, String, String, i64)| {
    let (raw_category, cause, info, row) = input;
    let category = Category::from_repr(i64::from(raw_category % 7)).unwrap_or_default();

    let err = AppError::new(cause, category, None)
        .with_info(info)
        .with_row(row);

    let mut line = String::new();
    err.internal_log().write_to(&mut line).expect("writing to a String cannot fail");

    // code + status + cause + info + row, each field bounded
    assert!(line.len() <= 6 * MAX_FIELD_OUTPUT_LEN);
});

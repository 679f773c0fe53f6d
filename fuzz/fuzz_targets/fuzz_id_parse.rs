#![no_main]

use app_errors::{Id, IdError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match Id::from_string(text) {
        Ok(id) => {
            assert!(!id.to_uuid().is_nil());
            let reparsed = Id::from_string(&id.to_string()).expect("canonical form must parse");
            assert_eq!(id, reparsed);
        }
        Err(IdError::Empty) => assert!(text.is_empty()),
        Err(IdError::Nil) | Err(IdError::Parse(_)) => {}
    }
});

use app_errors::{AppError, Category, Id, Result, is_category, not_found};
use std::fmt;

/// Service-layer wrapper that knows nothing about `AppError`.
#[derive(Debug)]
struct HandlerError {
    route: &'static str,
    source: AppError,
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler {} failed", self.route)
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source as &(dyn std::error::Error + 'static))
    }
}

#[allow(clippy::result_large_err)]
fn load_user(raw_id: &str) -> Result<String> {
    let id = Id::from_string(raw_id).map_err(|e| {
        AppError::new(e, Category::Validation, None)
            .with_field("id")
            .with_info(raw_id.to_owned())
    })?;

    // Nothing is ever stored in this demo
    Err(not_found(format!("user {} does not exist", id)))
}

fn respond(route: &'static str, raw_id: &str) {
    let Err(source) = load_user(raw_id) else {
        println!("200 OK");
        return;
    };
    let err = HandlerError { route, source };

    // A response layer only sees the outer error and walks the chain.
    let app = app_errors::find_app_error(&err);
    let status = app.map_or(500, |e| e.effective_status().as_u16());
    let text = app.map_or_else(|| err.to_string(), |e| e.public_message().into_owned());
    println!("   {} {}", status, text);

    if is_category(&err, Category::Validation) {
        println!("   (client sent a malformed identifier)");
    }

    if let Some(app) = app {
        app.with_internal_log(|log| {
            let mut line = String::new();
            if log.write_to(&mut line).is_ok() {
                println!("   log: {}", line);
            }
        });
    }
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    println!("1. Malformed identifier:");
    respond("/users/:id", "not-a-uuid");

    println!("\n2. Nil identifier:");
    respond("/users/:id", "00000000-0000-0000-0000-000000000000");

    println!("\n3. Well-formed identifier, unknown user:");
    respond("/users/:id", &Id::new().to_string());
}

use astrodb::AstroDbError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = err.downcast_ref::<AstroDbError>().and_then(hint) {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

fn hint(err: &AstroDbError) -> Option<&'static str> {
    match err {
        AstroDbError::DataDirectoryNotFound { .. } => {
            Some("pass --data-dir, set ASTRODB_DATA_DIR, or set [data] dir in astrodb.toml")
        }
        AstroDbError::Io { .. } => Some("every table file must exist in the data directory"),
        AstroDbError::Json { .. } => {
            Some("each table must be a JSON array of records with an `id` field")
        }
        AstroDbError::InvalidConfig { .. } => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let file = err
        .downcast_ref::<AstroDbError>()
        .map(|e| e.path().to_string_lossy().to_string());

    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": "validate",
            "message": err.to_string(),
            "file": file,
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    if detect_capabilities().is_github_actions {
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                Some("astrodb"),
            )
        );
    }

    eprint!("{}", format_error(err));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_property(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!("::{}{}::{}", level_str, prop_str, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_actions_annotation_escapes_newlines() {
        let rendered = github_actions_annotation(
            AnnotationLevel::Error,
            "Line1\nLine2",
            Some("data/signs.json"),
            Some("Title"),
        );
        assert!(rendered.contains("%0A"));
        assert!(rendered.starts_with("::error file=data/signs.json,title=Title::"));
    }

    #[test]
    fn github_actions_annotation_escapes_property_separators() {
        let rendered = github_actions_annotation(
            AnnotationLevel::Warning,
            "unknown key",
            None,
            Some("degrees: sign_id, dwad_sign_id"),
        );
        assert_eq!(
            rendered,
            "::warning title=degrees%3A sign_id%2C dwad_sign_id::unknown key"
        );
    }
}

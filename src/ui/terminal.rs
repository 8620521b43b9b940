use is_terminal::IsTerminal;

/// What the diagnostics stream (stderr) can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub is_github_actions: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci: is_ci_env(&get_env),
        is_github_actions: get_env("GITHUB_ACTIONS").is_some(),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    // First non-empty of LC_ALL, LC_CTYPE, LANG decides, as in POSIX.
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    match KEYS
        .iter()
        .filter_map(|&k| get_env(k))
        .find(|v| !v.trim().is_empty())
    {
        Some(locale) => {
            let v = locale.to_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        }
        // No locale at all: assume a modern terminal.
        None => true,
    }
}

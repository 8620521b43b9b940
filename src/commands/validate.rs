use std::io::Write;
use std::path::Path;

use anyhow::Result;

use astrodb::dataset::{table_path, Dataset};
use astrodb::integrity::{run_integrity_with_callback, CheckOptions, Violation};
use astrodb::Config;

use crate::cli::Cli;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;

/// How a completed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Violations,
}

pub fn cmd_validate(cli: &Cli) -> Result<Outcome> {
    let project_root = std::env::current_dir()?;
    let loaded = Config::resolve(&project_root)?;
    let config = apply_cli_overrides(loaded.config, cli);
    let ui = UiContext::new(cli.json, cli.verbose, &config);

    ui.debug(format_args!("config: {}", loaded.source));
    for warning in &loaded.warnings {
        if ui.json {
            crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "command": "validate",
                "message": warning.to_string(),
                "key": warning.key,
                "suggestion": warning.suggestion,
            }))?;
        } else {
            if ui.annotate() {
                println!(
                    "{}",
                    github_actions_annotation(
                        AnnotationLevel::Warning,
                        &warning.to_string(),
                        Some(&warning.file.to_string_lossy()),
                        Some("astrodb config"),
                    )
                );
            }
            eprintln!("[WARN] {}", warning);
        }
    }

    let data_dir = config.data.dir.as_path();
    let dataset = Dataset::load(data_dir)?;
    let options = CheckOptions {
        extended: config.checks.extended,
    };

    ui.info(format_args!("data directory: {}", data_dir.display()));
    for (table, count) in dataset.table_sizes() {
        ui.info(format_args!("loaded {}: {} records", table, count));
    }

    let mut out = std::io::stdout().lock();

    if ui.json {
        let tables: serde_json::Map<String, serde_json::Value> = dataset
            .table_sizes()
            .into_iter()
            .map(|(table, count)| (table.to_string(), count.into()))
            .collect();
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "start",
                "command": "validate",
                "data_dir": data_dir.display().to_string(),
                "extended": options.extended,
                "tables": tables,
            }),
        )?;
    }

    let report = if ui.json {
        run_integrity_with_callback(&dataset, options, |violation| {
            let _ = crate::ui::json::write_event(&mut out, &violation_event(violation));
        })
    } else {
        run_integrity_with_callback(&dataset, options, |violation| {
            eprintln!("{}", violation);
        })
    };

    if ui.json {
        for summary in &report.passes {
            crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "pass",
                    "command": "validate",
                    "pass": summary.pass.name(),
                    "extended": summary.pass.is_extended(),
                    "checked": summary.checked,
                    "violations": summary.violations,
                }),
            )?;
        }
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "validate",
                "violations": report.violations.len(),
                "references": report.references(),
                "values": report.values(),
                "success": report.is_success(),
            }),
        )?;
    } else {
        if ui.summary {
            eprint!(
                "{}",
                crate::ui::views::validate::render_pass_summary(&report, ui.color, ui.unicode)
            );
        }

        if ui.annotate() {
            for violation in &report.violations {
                writeln!(out, "{}", annotation(data_dir, violation))?;
            }
        }

        if report.is_success() {
            writeln!(out, "OK")?;
        } else {
            eprintln!("FAILED");
        }
    }

    out.flush()?;

    Ok(if report.is_success() {
        Outcome::Clean
    } else {
        Outcome::Violations
    })
}

/// CLI flags take precedence over config file and environment.
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(dir) = &cli.data_dir {
        config.data.dir = dir.clone();
    }
    if cli.extended {
        config.checks.extended = true;
    }
    config
}

fn violation_event(violation: &Violation) -> serde_json::Value {
    serde_json::json!({
        "event": "violation",
        "command": "validate",
        "kind": violation.kind.as_str(),
        "pass": violation.pass.name(),
        "scope": violation.scope,
        "field": violation.field,
        "target": violation.target,
        "id": violation.record_id,
        "value": violation.value,
        "message": violation.to_string(),
    })
}

fn annotation(data_dir: &Path, violation: &Violation) -> String {
    let table = match violation.scope {
        "sign" => "signs",
        "house" => "houses",
        "body" => "bodies",
        "aspect" => "aspects",
        other => other,
    };
    let file = table_path(data_dir, table);
    let title = format!("{}.{}", table, violation.field);
    github_actions_annotation(
        AnnotationLevel::Error,
        &violation.to_string(),
        Some(&file.to_string_lossy()),
        Some(&title),
    )
}

//! Implementation of the `stackup list` command.

use serde_json::json;

use stackup_core::domain::{ApiKind, DatabaseKind, FrontBackKind};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One selectable value, as shown to the user.
struct Choice {
    value: &'static str,
    label: &'static str,
    default: bool,
}

/// Choices per tier, in prompt order, with the configured default marked.
fn catalog(config: &AppConfig) -> [(&'static str, Vec<Choice>); 3] {
    let d = &config.defaults;
    [
        (
            "database",
            DatabaseKind::ALL
                .iter()
                .map(|k| choice(k.as_str(), k.label(), &d.database))
                .collect(),
        ),
        (
            "api",
            ApiKind::ALL
                .iter()
                .map(|k| choice(k.as_str(), k.label(), &d.api))
                .collect(),
        ),
        (
            "front_back",
            FrontBackKind::ALL
                .iter()
                .map(|k| choice(k.as_str(), k.label(), &d.front_back))
                .collect(),
        ),
    ]
}

fn choice(value: &'static str, label: &'static str, configured: &str) -> Choice {
    Choice {
        value,
        label,
        default: value.eq_ignore_ascii_case(configured.trim()),
    }
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = catalog(&config);

    match args.format {
        ListFormat::Table => {
            for (tier, choices) in &catalog {
                output.header(&format!("{tier}:"))?;
                for c in choices {
                    let marker = if c.default { "  (default)" } else { "" };
                    output.print(&format!("  {:<12} {}{}", c.value, c.label, marker))?;
                }
            }
        }

        ListFormat::List => {
            for (tier, choices) in &catalog {
                for c in choices {
                    output.data(&format!("{tier}:{}", c.value))?;
                }
            }
        }

        // JSON must stay parseable even in non-TTY pipes and quiet mode.
        ListFormat::Json => {
            let value = to_json(&catalog);
            output.data(&value.to_string())?;
        }
    }

    Ok(())
}

fn to_json(catalog: &[(&'static str, Vec<Choice>)]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (tier, choices) in catalog {
        let entries: Vec<_> = choices
            .iter()
            .map(|c| json!({ "value": c.value, "label": c.label, "default": c.default }))
            .collect();
        map.insert((*tier).to_string(), serde_json::Value::Array(entries));
    }
    serde_json::Value::Object(map)
}

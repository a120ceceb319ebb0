//! Developer tasks (schema generation, registry conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            std::env::current_dir().expect("Cannot determine current directory")
        });

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    schema_id: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(deplens_types::ReportEnvelope)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(deplens_settings::DeplensConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "deplens.report.v1.json",
            schema_id: deplens_types::SCHEMA_REPORT_V1,
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "deplens.config.v1.json",
            schema_id: deplens_settings::SCHEMA_CONFIG_V1,
            generate: generate_config_schema,
        },
    ]
}

fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let json = serialize_schema(&(spec.generate)())?;
        fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut drifted = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let committed = fs::read_to_string(&path).with_context(|| {
            format!(
                "read {}; run `cargo xtask emit-schemas` first",
                path.display()
            )
        })?;
        let generated = serialize_schema(&(spec.generate)())?;
        if committed != generated {
            drifted.push(spec.filename);
        }
    }

    if !drifted.is_empty() {
        bail!(
            "schemas out of date: {}; run `cargo xtask emit-schemas`",
            drifted.join(", ")
        );
    }
    println!("schemas up to date");
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    use deplens_types::explain::{all_codes, all_rule_ids, lookup_explanation};

    let rule_ids = all_rule_ids();
    let codes = all_codes();

    let mut missing = Vec::new();
    for identifier in rule_ids.iter().chain(codes.iter()) {
        if lookup_explanation(identifier).is_none() {
            missing.push(*identifier);
        }
    }

    if !missing.is_empty() {
        bail!("identifiers without explanations: {}", missing.join(", "));
    }
    println!(
        "explain coverage ok: {} rule_ids, {} codes",
        rule_ids.len(),
        codes.len()
    );
    Ok(())
}

fn print_schema_ids() -> anyhow::Result<()> {
    for spec in schema_specs() {
        println!("{}", spec.schema_id);
    }
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  emit-schemas      generate JSON Schemas into schemas/");
    eprintln!("  validate-schemas  compare committed schemas against the code");
    eprintln!("  explain-coverage  check every rule_id and code has an explanation");
    eprintln!("  print-schema-ids  list stable schema identifiers");
    eprintln!("  help              show this message");
}

fn main() -> anyhow::Result<()> {
    let task = std::env::args().nth(1);
    match task.as_deref() {
        Some("emit-schemas") => emit_schemas(),
        Some("validate-schemas") => validate_schemas(),
        Some("explain-coverage") => explain_coverage(),
        Some("print-schema-ids") => print_schema_ids(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(other) => {
            print_help();
            bail!("unknown task: {other}");
        }
    }
}

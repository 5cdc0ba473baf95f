//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate keeps schema tooling out of the library crates.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(dragee_types::Report)
}

fn generate_dragee_schema() -> schemars::Schema {
    schema_for!(dragee_types::Dragee)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(dragee_settings::DrageeConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "dragee.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "dragee.dragee.v1.json",
            generate: generate_dragee_schema,
        },
        SchemaSpec {
            filename: "dragee.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated (for CI).
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn json_files(dir: &Path, out: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            json_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}

/// Problems in one rule fixture that parsing alone does not catch.
fn fixture_problems(
    value: &serde_json::Value,
    dragee_schema: &jsonschema::Validator,
) -> Vec<String> {
    let mut problems = Vec::new();

    let dragees = value
        .get("dragees")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut names = BTreeSet::new();
    for (i, dragee) in dragees.iter().enumerate() {
        for err in dragee_schema.iter_errors(dragee) {
            problems.push(format!("dragees[{i}]: schema validation: {err}"));
        }
        if let Some(name) = dragee.get("name").and_then(|v| v.as_str())
            && !names.insert(name)
        {
            problems.push(format!("dragees[{i}]: duplicate dragee name '{name}'"));
        }
    }

    let errors = value
        .pointer("/result/errors")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (i, expected) in errors.iter().enumerate() {
        if !(expected.is_string() || expected.is_object()) {
            problems.push(format!(
                "result.errors[{i}]: expected a message string or a partial error object"
            ));
        }
    }

    problems
}

/// Validate rule fixtures under tests/fixtures/.
///
/// Each fixture must load as a rule fixture, each dragee must validate
/// against the generated dragee schema (legacy `kind_of` and array
/// `depends_on` shapes are normalized first), and dragee names must be
/// unique within a fixture.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_dragee_schema())?;
    let dragee_schema = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile dragee schema: {e}"))?;

    let mut files = Vec::new();
    json_files(&fixtures_dir(), &mut files)?;
    files.sort();

    if files.is_empty() {
        bail!("No JSON fixtures found in {}", fixtures_dir().display());
    }

    let mut errors = Vec::new();
    for path in &files {
        let shown = path
            .strip_prefix(project_root())
            .unwrap_or(path)
            .display()
            .to_string();

        let fixture = match dragee_test_util::load_fixture(&*path.to_string_lossy()) {
            Ok(fixture) => fixture,
            Err(err) => {
                errors.push(format!("{shown}: {err:#}"));
                continue;
            }
        };

        // round-trip through the types so older shapes are checked in canonical form
        let value = serde_json::to_value(&fixture)?;
        let problems = fixture_problems(&value, &dragee_schema);
        if problems.is_empty() {
            println!("  ✓ {shown}");
        }
        errors.extend(problems.into_iter().map(|p| format!("{shown}: {p}")));
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} rule fixtures pass conformance checks!", files.len());
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate rule fixtures in tests/fixtures/");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

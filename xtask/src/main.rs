//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;
use typeleak_test_util::normalize_nondeterministic;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
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
    schema_for!(typeleak_types::TypeleakReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(typeleak_settings::TypeleakConfigV1)
}

fn generate_docs_schema() -> schemars::Schema {
    schema_for!(typeleak_types::ModuleDocs)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "typeleak.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "typeleak.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "typeleak.docs.v1.json",
            generate: generate_docs_schema,
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

/// Validate that schemas in the repo match what would be generated.
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
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn validator(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("schema to json")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("compile schema: {e}"))
}

fn schema_errors(validator: &jsonschema::Validator, instance: &serde_json::Value) -> Vec<String> {
    validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect()
}

fn read_json(path: &std::path::Path) -> anyhow::Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Run the check use case on every fixture and compare against `expected.report.json`.
///
/// Also validates every docs file and generated report against the emitted schemas.
fn conform() -> anyhow::Result<()> {
    let report_validator = validator(&generate_report_schema())?;
    let docs_validator = validator(&generate_docs_schema())?;

    let mut fixtures: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("read fixtures directory")?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.join("expected.report.json").exists())
        .collect();
    fixtures.sort();

    let mut errors = Vec::new();

    for fixture in &fixtures {
        let name = fixture
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let docs_root = Utf8PathBuf::from_path_buf(fixture.clone())
            .map_err(|p| anyhow::anyhow!("non-utf8 fixture path: {}", p.display()))?;

        for entry in fs::read_dir(fixture)?.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.to_string_lossy().ends_with(".docs.json") {
                for err in schema_errors(&docs_validator, &read_json(&path)?) {
                    errors.push(format!("{name}: {}: {err}", path.display()));
                }
            }
        }

        let config_text = fs::read_to_string(fixture.join("typeleak.toml")).unwrap_or_default();
        let output = typeleak_app::run_check(typeleak_app::CheckInput {
            docs_root: &docs_root,
            config_text: &config_text,
            overrides: typeleak_settings::Overrides::default(),
            modules: Vec::new(),
        })
        .with_context(|| format!("run check on fixture {name}"))?;

        let actual = serde_json::to_value(&output.report).context("report to json")?;
        for err in schema_errors(&report_validator, &actual) {
            errors.push(format!("{name}: report: {err}"));
        }

        let expected = read_json(&fixture.join("expected.report.json"))?;
        if normalize_nondeterministic(actual) != normalize_nondeterministic(expected) {
            errors.push(format!("{name}: report differs from expected.report.json"));
        } else {
            println!("✓ {name}");
        }
    }

    if errors.is_empty() {
        println!("\n✓ {} fixtures conform", fixtures.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Fixture conformance failed with {} errors", errors.len())
    }
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = typeleak_types::explain::all_check_ids();
    let codes = typeleak_types::explain::all_codes();

    let mut errors = Vec::new();
    for id in check_ids.iter().chain(codes.iter()) {
        match typeleak_types::explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("'{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("'{}' has empty description", id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("'{}' has empty remediation", id));
                }
                if let Err(e) =
                    serde_json::from_str::<typeleak_types::ModuleDocs>(exp.examples.after)
                {
                    errors.push(format!("'{}' clean example is not a docs file: {}", id, e));
                }
                if typeleak_types::explain::check_group(id).is_none() {
                    errors.push(format!("'{}' belongs to no check", id));
                }
            }
            None => errors.push(format!("'{}' has no explanation", id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run fixtures and compare with their expected reports");
    eprintln!("  explain-coverage  Validate explanations, examples and check grouping");
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
        "explain-coverage" => explain_coverage(),
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

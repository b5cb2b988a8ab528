use anyhow::bail;
use schemars::schema_for;

use lca_core::entities::{Assessment, ImpactSummary, MaterialRecord, ProcessingRecord, TransportRecord};
use lca_core::factors::FactorTables;
use lca_core::responses::{EstimationReport, ImpactComputation};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `lca schema`.
pub const SCHEMA_TYPES: [&str; 8] = [
    "assessment",
    "material",
    "processing",
    "transport",
    "summary",
    "estimation-report",
    "impact-computation",
    "factor-tables",
];

/// Handle `lca schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_json(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name.replace('_', "-").as_str() {
        "assessment" => schema_for!(Assessment),
        "material" => schema_for!(MaterialRecord),
        "processing" => schema_for!(ProcessingRecord),
        "transport" => schema_for!(TransportRecord),
        "summary" => schema_for!(ImpactSummary),
        "estimation-report" => schema_for!(EstimationReport),
        "impact-computation" => schema_for!(ImpactComputation),
        "factor-tables" => schema_for!(FactorTables),
        _ => bail!(
            "unknown schema type '{type_name}' (expected one of: {})",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::{SCHEMA_TYPES, schema_json};

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in SCHEMA_TYPES {
            let schema = schema_json(name).expect("schema should exist");
            assert!(schema.get("properties").is_some(), "{name} has no properties");
        }
    }

    #[test]
    fn report_schema_lists_failures() {
        let schema = schema_json("estimation_report").expect("schema should exist");
        assert!(schema["properties"].get("failures").is_some());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let error = schema_json("widget").expect_err("should fail");
        assert!(error.to_string().contains("unknown schema type 'widget'"));
    }
}

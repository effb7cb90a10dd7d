//! YAML fixture files: named degree sequences with optional expected verdicts.

use std::path::Path;

use hh_core::{HhResult, RawDegree};
use hh_graph::{GraphBuilder, extract_degree_sequence};
use hh_seq::{Validator, ValidatorConfig};
use serde::Deserialize;

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureFile {
    #[serde(default)]
    pub config: ValidatorConfig,
    pub cases: Vec<FixtureCase>,
}

/// One case: either a literal sequence or an undirected edge list.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureCase {
    pub name: String,
    #[serde(default)]
    pub degrees: Option<Vec<RawDegree>>,
    #[serde(default)]
    pub edges: Option<Vec<(String, String)>>,
    #[serde(default)]
    pub expect: Option<bool>,
}

impl FixtureCase {
    /// The degree sequence this case describes.
    pub fn sequence(&self) -> CliResult<Vec<RawDegree>> {
        match (&self.degrees, &self.edges) {
            (Some(degrees), None) => Ok(degrees.clone()),
            (None, Some(edges)) => {
                let mut builder = GraphBuilder::new();
                for (a, b) in edges {
                    let a = builder.vertex_named(a);
                    let b = builder.vertex_named(b);
                    builder.add_undirected_edge(a, b, 1.0);
                }
                let graph = builder.build()?;
                Ok(extract_degree_sequence(&graph))
            }
            _ => Err(CliError::Fixture(format!(
                "case '{}' needs exactly one of `degrees` or `edges`",
                self.name
            ))),
        }
    }
}

#[derive(Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub sequence: Vec<RawDegree>,
    pub result: HhResult<bool>,
    pub expect: Option<bool>,
}

impl CaseOutcome {
    pub fn matches_expectation(&self) -> bool {
        match (self.expect, &self.result) {
            (None, _) => true,
            (Some(expected), Ok(actual)) => expected == *actual,
            (Some(_), Err(_)) => false,
        }
    }
}

pub fn load(path: &Path) -> CliResult<FixtureFile> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

pub fn parse(content: &str) -> CliResult<FixtureFile> {
    Ok(serde_yaml::from_str(content)?)
}

/// Validate every case in parallel, keeping file order.
pub fn run(file: &FixtureFile) -> CliResult<Vec<CaseOutcome>> {
    let sequences = file
        .cases
        .iter()
        .map(FixtureCase::sequence)
        .collect::<CliResult<Vec<_>>>()?;

    let results = Validator::new(file.config).check_batch(&sequences);
    tracing::debug!(cases = sequences.len(), "fixture batch validated");

    Ok(file
        .cases
        .iter()
        .zip(sequences)
        .zip(results)
        .map(|((case, sequence), result)| CaseOutcome {
            name: case.name.clone(),
            sequence,
            result,
            expect: case.expect,
        })
        .collect())
}

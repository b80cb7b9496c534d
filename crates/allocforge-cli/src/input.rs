//! Reading requests from the command line and from files

use std::path::Path;

use allocforge_core::{AllocationRequest, Item, ItemSet};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::cli::SolveArgs;
use crate::error::CliError;

/// On-disk batch format: a `requests` list in any supported format.
#[derive(Debug, Deserialize)]
pub struct BatchFile {
    pub requests: Vec<AllocationRequest>,
}

/// Builds the request described by `solve` arguments.
pub fn request_from_args(args: &SolveArgs) -> Result<AllocationRequest, CliError> {
    if let Some(path) = &args.input {
        let mut request: AllocationRequest = read_document(path)?;
        if let Some(capacity) = args.capacity {
            request.capacity = capacity;
        }
        return Ok(request);
    }

    let capacity = args.capacity.ok_or(CliError::MissingCapacity)?;
    let mut items: ItemSet = args.items.iter().copied().collect();
    if !args.weights.is_empty() || !args.values.is_empty() {
        for item in ItemSet::from_parallel(&args.weights, &args.values)? {
            items.push(item);
        }
    }
    Ok(AllocationRequest::new(capacity, items))
}

/// Reads a batch file.
pub fn read_batch(path: &Path) -> Result<Vec<AllocationRequest>, CliError> {
    let batch: BatchFile = read_document(path)?;
    Ok(batch.requests)
}

/// Reads and deserializes a JSON, TOML or YAML document, chosen by extension.
///
/// Unknown extensions are tried as JSON.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &contents)
}

fn parse_document<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, CliError> {
    let parse_error = |message: String| CliError::Parse {
        path: path.to_path_buf(),
        message,
    };
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(contents).map_err(|e| parse_error(e.to_string())),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))
        }
        _ => serde_json::from_str(contents).map_err(|e| parse_error(e.to_string())),
    }
}

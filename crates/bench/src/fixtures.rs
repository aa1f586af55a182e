//! Task fixture generation and the `tasks.json` fixture file.

use std::path::Path;

use anyhow::{bail, Context};
use rand::Rng;
use serde::{Deserialize, Serialize};

use matserve_core::matrix::Matrix;
use matserve_core::task::TaskRequest;

/// On-disk shape of the fixture file: `{"tasks": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TasksFile {
    pub tasks: Vec<TaskRequest>,
}

impl TasksFile {
    /// Load the fixture file; a missing file is an empty fixture set.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default())
            }
            Err(err) => {
                return Err(err).with_context(|| format!("cannot read {}", path.display()))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&contents)
            .with_context(|| format!("cannot parse {}", path.display()))
    }

    /// Rewrite the fixture file, pretty-printed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("cannot write {}", path.display()))
    }
}

/// Parse a `RxC` size argument such as `100x100`.
pub fn parse_size(arg: &str) -> anyhow::Result<(usize, usize)> {
    let Some((rows, cols)) = arg.split_once('x') else {
        bail!("invalid size '{arg}', expected RxC such as 100x100");
    };
    let rows = rows
        .parse()
        .with_context(|| format!("invalid row count in '{arg}'"))?;
    let cols = cols
        .parse()
        .with_context(|| format!("invalid column count in '{arg}'"))?;
    if rows == 0 || cols == 0 {
        bail!("size '{arg}' must have at least one row and one column");
    }
    Ok((rows, cols))
}

/// Generate a rows×cols matrix of integer-valued entries in 0..10.
///
/// Integer values keep the recomputation in `verify` exact: no float
/// rounding can creep in between the server and the verifier.
pub fn random_matrix(rows: usize, cols: usize) -> Matrix {
    let mut rng = rand::rng();
    (0..rows)
        .map(|_| (0..cols).map(|_| f64::from(rng.random_range(0..10))).collect())
        .collect()
}

/// Build a multiplication task with random A: R×C and B: C×R operands, so
/// the product is always well-defined (R×R).
pub fn random_multiplication_task(rows: usize, cols: usize) -> TaskRequest {
    TaskRequest {
        task_name: matserve_core::task::MATRIX_MULTIPLICATION.to_string(),
        matrix_a: random_matrix(rows, cols),
        matrix_b: random_matrix(cols, rows),
    }
}

//! Point-file loading and JSON output shapes.
//!
//! Accepted inputs
//! - `.json`: array of `[x, y]` pairs.
//! - `.csv`: header row with `x` and `y` columns (extra columns ignored).

use anyhow::{anyhow, bail, Context, Result};
use convex2d::Vec2;
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;

pub fn load_points(path: &Path) -> Result<Vec<Vec2>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!(
            "unsupported point file {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn load_json(path: &Path) -> Result<Vec<Vec2>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

fn load_csv(path: &Path) -> Result<Vec<Vec2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "loaded csv points");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("{}: missing coordinate in row {row}", path.display())),
        })
        .collect()
}

#[inline]
pub fn to_pairs(points: &[Vec2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

#[derive(Debug, Serialize)]
pub struct HullReport {
    pub vertices: Vec<[f64; 2]>,
    /// False when the input had no proper 2D hull (empty `vertices`).
    pub proper: bool,
    pub area: f64,
}

#[derive(Debug, Serialize)]
pub struct CollideReport {
    pub collide: bool,
    pub separating_axis: Option<[f64; 2]>,
}

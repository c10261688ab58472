use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use convex2d::api::{
    convex_hull, draw_polygon_radial, is_convex_ccw, point_in_convex_polygon, polygons_collide,
    separating_axis, signed_area, RadialCfg, ReplayToken, Vec2, VertexCount,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{load_points, to_pairs, CollideReport, HullReport};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls, point containment and polygon collision on point files")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point file (.json or .csv)
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Also write the result here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Is (x, y) inside or on the polygon?
    Contains {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Take the hull of the file's points instead of requiring a convex CCW polygon
        #[arg(long)]
        hull: bool,
    },
    /// Do two convex polygons intersect?
    Collide {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        /// Take the hull of each file's points first
        #[arg(long)]
        hull: bool,
    },
    /// Draw a reproducible random convex polygon
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the built-in reference scenarios
    Demo,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull { input, out } => {
            let report = hull(&input)?;
            let payload = Payload::new("hull", json!({ "input": input }));
            emit(&report, out.as_deref(), &payload)
        }
        Action::Contains {
            polygon,
            x,
            y,
            hull,
        } => {
            let inside = contains(&polygon, Vec2::new(x, y), hull)?;
            println!("{inside}");
            Ok(())
        }
        Action::Collide { a, b, hull } => {
            let report = collide(&a, &b, hull)?;
            emit(&report, None, &Payload::new("collide", json!({})))
        }
        Action::Random {
            seed,
            index,
            vertices,
            out,
        } => {
            let report = random(seed, index, vertices)?;
            let payload = Payload::new(
                "random",
                json!({ "seed": seed, "index": index, "vertices": vertices }),
            );
            emit(&report, out.as_deref(), &payload)
        }
        Action::Demo => {
            println!("{}", serde_json::to_string_pretty(&demo())?);
            Ok(())
        }
        Action::Report => {
            let doc = Payload::new("report", json!({})).document(&[]);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

/// Print `value` as JSON; with `out`, also write it there plus a provenance sidecar.
fn emit<T: Serialize>(value: &T, out: Option<&Path>, payload: &Payload) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out, &text).with_context(|| format!("writing {}", out.display()))?;
        let prov = write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote output");
    }
    println!("{text}");
    Ok(())
}

fn hull_report(points: &[Vec2]) -> HullReport {
    let hull = convex_hull(points);
    HullReport {
        proper: hull.len() >= 3,
        area: signed_area(&hull),
        vertices: to_pairs(&hull),
    }
}

fn hull(input: &Path) -> Result<HullReport> {
    let points = load_points(input)?;
    let report = hull_report(&points);
    tracing::info!(
        input = %input.display(),
        points = points.len(),
        hull = report.vertices.len(),
        proper = report.proper,
        "hull"
    );
    Ok(report)
}

/// Load a polygon file, either hulling it or checking it is already convex.
///
/// Returned polygons are CCW and fan-ordered around their first vertex.
fn load_polygon(path: &Path, take_hull: bool) -> Result<Vec<Vec2>> {
    let points = load_points(path)?;
    if take_hull {
        let hull = convex_hull(&points);
        if hull.len() < 3 {
            bail!("{}: points have no proper 2D hull", path.display());
        }
        return Ok(hull);
    }
    if is_convex_ccw(&points) {
        return Ok(points);
    }
    // Accept clockwise input by reversing everything after v0.
    let mut flipped = points.clone();
    if flipped.len() > 1 {
        flipped[1..].reverse();
    }
    if is_convex_ccw(&flipped) {
        tracing::debug!(path = %path.display(), "reversed clockwise polygon");
        return Ok(flipped);
    }
    bail!(
        "{}: not a convex polygon with at least 3 vertices (use --hull)",
        path.display()
    )
}

fn contains(polygon: &Path, p: Vec2, take_hull: bool) -> Result<bool> {
    let poly = load_polygon(polygon, take_hull)?;
    let inside = point_in_convex_polygon(&poly, p);
    tracing::info!(polygon = %polygon.display(), x = p.x, y = p.y, inside, "contains");
    Ok(inside)
}

fn collide(a: &Path, b: &Path, take_hull: bool) -> Result<CollideReport> {
    let pa = load_polygon(a, take_hull)?;
    let pb = load_polygon(b, take_hull)?;
    let report = collide_report(&pa, &pb);
    tracing::info!(a = %a.display(), b = %b.display(), collide = report.collide, "collide");
    Ok(report)
}

fn collide_report(a: &[Vec2], b: &[Vec2]) -> CollideReport {
    let sat = separating_axis(a, b);
    CollideReport {
        collide: sat.is_overlap(),
        separating_axis: sat.axis().map(|v| [v.x, v.y]),
    }
}

fn random(seed: u64, index: u64, vertices: usize) -> Result<HullReport> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let poly = draw_polygon_radial(cfg, ReplayToken { seed, index })
        .with_context(|| format!("no proper polygon for seed {seed} index {index}"))?;
    tracing::info!(seed, index, vertices = poly.len(), "random");
    Ok(HullReport {
        proper: true,
        area: signed_area(&poly),
        vertices: to_pairs(&poly),
    })
}

fn pts(raw: &[(f64, f64)]) -> Vec<Vec2> {
    raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

fn demo() -> serde_json::Value {
    let cloud = pts(&[
        (0.0, 3.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (4.0, 4.0),
        (0.0, 0.0),
        (1.0, 2.0),
        (3.0, 1.0),
        (3.0, 3.0),
    ]);
    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let queries = [(2.0, 2.0), (4.0, 2.0), (0.0, 0.0), (-1.0, -1.0)];
    let a = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let shapes = [
        ("A", a.clone()),
        ("B", pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)])),
        ("C", pts(&[(0.0, 0.0), (-1.0, 0.0), (-1.0, -1.0)])),
        ("D", pts(&[(-2.0, 0.0), (-1.0, 0.0), (-1.0, -1.0)])),
    ];
    json!({
        "hull": hull_report(&cloud),
        "contains": queries
            .iter()
            .map(|&(x, y)| json!({ "point": [x, y], "inside": point_in_convex_polygon(&square, Vec2::new(x, y)) }))
            .collect::<Vec<_>>(),
        "collide": shapes
            .iter()
            .map(|(name, s)| json!({ "pair": format!("A-{name}"), "collide": polygons_collide(&a, s) }))
            .collect::<Vec<_>>(),
    })
}

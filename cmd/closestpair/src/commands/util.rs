//! Utility functions for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::Context as _;
use closestpair::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Cli;

/// Loads points from a file, or from stdin when `path` is `-`.
///
/// `.json` files are parsed as JSON and `.yaml`/`.yml` as YAML, both holding
/// an array of coordinate arrays. Anything else is read as text with one
/// point per line.
pub fn load_points(path: &str) -> anyhow::Result<Vec<Point>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
    };

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt");

    let points = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content).with_context(|| format!("invalid JSON in {path}"))?,
        "yaml" | "yml" => serde_yaml::from_str(&content).with_context(|| format!("invalid YAML in {path}"))?,
        _ => parse_points_text(&content)?,
    };

    Ok(points)
}

/// Parses one point per line. Coordinates are separated by whitespace or
/// commas; surrounding parentheses or brackets are ignored. Blank lines and
/// lines starting with `#` are skipped.
pub fn parse_points_text(content: &str) -> anyhow::Result<Vec<Point>> {
    let mut points = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let coords = line
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')' | '[' | ']'))
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>()
                    .with_context(|| format!("line {}: invalid coordinate {s:?}", lineno + 1))
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;
        points.push(Point::new(coords));
    }

    Ok(points)
}

/// Checks that every point has dimension `dim`.
pub fn require_dim(points: &[Point], dim: usize) -> anyhow::Result<()> {
    if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| p.dim() != dim) {
        anyhow::bail!("point {i} {p} has dimension {}, expected {dim}", p.dim());
    }
    Ok(())
}

/// Seeded RNG when a seed is given, otherwise seeded from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Outputs result as JSON or YAML.
pub fn output_result<T: serde::Serialize>(
    result: &T,
    output_path: Option<&str>,
    as_json: bool,
) -> anyhow::Result<()> {
    let output = if as_json {
        serde_json::to_string_pretty(result)? + "\n"
    } else {
        serde_yaml::to_string(result)?
    };
    output_text(&output, output_path)
}

/// Writes text to a file, or to stdout.
pub fn output_text(text: &str, output_path: Option<&str>) -> anyhow::Result<()> {
    match output_path {
        Some(path) => std::fs::write(path, text).with_context(|| format!("failed to write {path}"))?,
        None => print!("{}", text),
    }
    Ok(())
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_formats() {
        let text = "# header\n0 1\n(2, 3)\n\n[4.5,-5]\n";
        let points = parse_points_text(text).unwrap();
        assert_eq!(
            points,
            vec![Point::xy(0.0, 1.0), Point::xy(2.0, 3.0), Point::xy(4.5, -5.0)]
        );
    }

    #[test]
    fn parse_text_rejects_garbage() {
        let err = parse_points_text("1 2\n3 x\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
    }

    #[test]
    fn load_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("points.json");
        std::fs::write(&json, "[[0, 1], [1, 0]]").unwrap();
        let points = load_points(json.to_str().unwrap()).unwrap();
        assert_eq!(points, vec![Point::xy(0.0, 1.0), Point::xy(1.0, 0.0)]);

        let yaml = dir.path().join("points.yaml");
        std::fs::write(&yaml, "- [0, 0, 1]\n- [2, 3, 4]\n").unwrap();
        let points = load_points(yaml.to_str().unwrap()).unwrap();
        assert_eq!(points[1], Point::new(vec![2.0, 3.0, 4.0]));

        let txt = dir.path().join("points.txt");
        std::fs::write(&txt, "7\n8\n").unwrap();
        assert_eq!(load_points(txt.to_str().unwrap()).unwrap().len(), 2);
    }

    #[test]
    fn load_missing_file() {
        assert!(load_points("/nonexistent/points.json").is_err());
    }

    #[test]
    fn dim_check() {
        let points = vec![Point::xy(0.0, 0.0), Point::new(vec![1.0])];
        assert!(require_dim(&points[..1], 2).is_ok());
        let err = require_dim(&points, 2).unwrap_err();
        assert!(err.to_string().contains("point 1"));
    }
}

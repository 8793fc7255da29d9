//! Benchmark configuration loading.
//!
//! A config file is YAML or JSON (picked by extension); fields left out fall
//! back to defaults and command-line flags override both.
//!
//! ```yaml
//! sizes: [1024, 4096, 16384]
//! repeat: 3
//! seed: 7
//! dim: 2
//! solvers: [planar, planar-opt, kd]
//! vertical: false
//! ```

use std::path::Path;

use anyhow::Context as _;
use closestpair::Solver;
use serde::{Deserialize, Serialize};

/// Default input sizes: 2, 4, ..., 8192.
pub const DEFAULT_MAX_EXP: u32 = 13;

/// Benchmark configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Input sizes to measure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<usize>,

    /// Timed runs per solver and size; the mean is reported.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub repeat: usize,

    /// RNG seed for point generation. Random when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Point dimension.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub dim: usize,

    /// Solvers to run. Default: every solver supporting `dim`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solvers: Vec<Solver>,

    /// Put every point on the line x = 0 (planar only).
    #[serde(default)]
    pub vertical: bool,
}

fn is_zero(v: &usize) -> bool {
    *v == 0
}

impl BenchConfig {
    /// Fills unset fields with defaults.
    pub fn with_defaults(mut self) -> Self {
        if self.sizes.is_empty() {
            self.sizes = (1..=DEFAULT_MAX_EXP).map(|e| 1usize << e).collect();
        }
        if self.repeat == 0 {
            self.repeat = 1;
        }
        if self.dim == 0 {
            self.dim = 2;
        }
        if self.solvers.is_empty() {
            self.solvers = Solver::for_dim(self.dim);
        }
        self
    }

    /// Overwrites fields with the ones set in `other`.
    pub fn merge(&mut self, other: &BenchConfig) {
        if !other.sizes.is_empty() {
            self.sizes = other.sizes.clone();
        }
        if other.repeat > 0 {
            self.repeat = other.repeat;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.dim > 0 {
            self.dim = other.dim;
        }
        if !other.solvers.is_empty() {
            self.solvers = other.solvers.clone();
        }
        if other.vertical {
            self.vertical = true;
        }
    }

    /// Rejects combinations no solver run can satisfy.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(n) = self.sizes.iter().find(|&&n| n < 2) {
            anyhow::bail!("size {n} is too small: every input needs at least 2 points");
        }
        if self.vertical && self.dim != 2 {
            anyhow::bail!("vertical point sets are planar, got dim {}", self.dim);
        }
        if let Some(s) = self.solvers.iter().find(|s| !s.supports_dim(self.dim)) {
            anyhow::bail!("solver {s} does not support dimension {}", self.dim);
        }
        Ok(())
    }
}

/// Loads a config file.
pub fn load_config(path: &str) -> anyhow::Result<BenchConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read config {path}"))?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");

    let cfg = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BenchConfig::default().with_defaults();
        assert_eq!(cfg.sizes.first(), Some(&2));
        assert_eq!(cfg.sizes.last(), Some(&8192));
        assert_eq!(cfg.sizes.len(), 13);
        assert_eq!(cfg.repeat, 1);
        assert_eq!(cfg.dim, 2);
        assert_eq!(cfg.solvers, Solver::ALL.to_vec());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_solvers_follow_dim() {
        let cfg = BenchConfig {
            dim: 3,
            ..Default::default()
        }
        .with_defaults();
        assert_eq!(cfg.solvers, vec![Solver::BruteForce, Solver::Kd]);
    }

    #[test]
    fn merge_overrides_set_fields() {
        let mut cfg = BenchConfig {
            sizes: vec![10, 20],
            repeat: 5,
            seed: Some(1),
            ..Default::default()
        };
        cfg.merge(&BenchConfig {
            repeat: 2,
            solvers: vec![Solver::Kd],
            ..Default::default()
        });
        assert_eq!(cfg.sizes, vec![10, 20]);
        assert_eq!(cfg.repeat, 2);
        assert_eq!(cfg.seed, Some(1));
        assert_eq!(cfg.solvers, vec![Solver::Kd]);
    }

    #[test]
    fn validate_rejects_bad_combinations() {
        let cfg = BenchConfig {
            dim: 3,
            solvers: vec![Solver::Planar],
            ..Default::default()
        }
        .with_defaults();
        assert!(cfg.validate().is_err());

        let cfg = BenchConfig {
            dim: 1,
            vertical: true,
            ..Default::default()
        }
        .with_defaults();
        assert!(cfg.validate().is_err());

        let cfg = BenchConfig {
            sizes: vec![1, 4],
            ..Default::default()
        }
        .with_defaults();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.yaml");
        std::fs::write(&path, "sizes: [8, 16]\nsolvers: [planar-opt, kd]\nvertical: true\n").unwrap();

        let cfg = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.sizes, vec![8, 16]);
        assert_eq!(cfg.solvers, vec![Solver::PlanarOpt, Solver::Kd]);
        assert!(cfg.vertical);
        assert_eq!(cfg.repeat, 0);
    }

    #[test]
    fn load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.json");
        std::fs::write(&path, r#"{"dim": 3, "repeat": 4, "seed": 99}"#).unwrap();

        let cfg = load_config(path.to_str().unwrap()).unwrap().with_defaults();
        assert_eq!(cfg.dim, 3);
        assert_eq!(cfg.repeat, 4);
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.solvers, vec![Solver::BruteForce, Solver::Kd]);
    }
}

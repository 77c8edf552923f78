use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::lut_gen::LutGenError;

/// Where `lut_gen` looks for its configuration when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "assets/lut_gen.ron";

/// Fixed-point layout the generated tables are quantized for.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TargetFormat {
    pub fractional_bits: u32,
    /// Raw value of 1.0; must equal `1 << fractional_bits`.
    pub one: i64,
}

impl Default for TargetFormat {
    fn default() -> Self {
        Self {
            fractional_bits: 16,
            one: 1 << 16,
        }
    }
}

/// Generator configuration, loaded once per run.
///
/// The runtime in [`crate::lut`] reads whatever sample count the committed
/// tables carry, so changing a count here only requires regenerating.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LutGenConfig {
    /// Directory the `<name>_lut.rs` files are written to.
    pub output_dir: PathBuf,
    pub entries_per_line: usize,

    // Periodic tables, samples over one full turn
    pub sin_samples: usize,
    pub cos_samples: usize,
    pub tan_samples: usize,
    pub sin_cos_samples: usize,

    // Inverse tables, samples over [-1, 1]
    pub asin_samples: usize,
    pub acos_samples: usize,

    pub target: TargetFormat,
}

impl Default for LutGenConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("src/lut/generated"),
            entries_per_line: 10,
            sin_samples: 512,
            cos_samples: 512,
            tan_samples: 512,
            sin_cos_samples: 512,
            asin_samples: 512,
            acos_samples: 512,
            target: TargetFormat::default(),
        }
    }
}

impl LutGenConfig {
    /// Parse RON text and validate it. `path` is only used for error reports.
    pub fn from_ron_str(contents: &str, path: &Path) -> Result<Self, LutGenError> {
        let config: Self = ron::from_str(contents).map_err(|source| LutGenError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LutGenError> {
        let counts = [
            ("sin_samples", self.sin_samples),
            ("cos_samples", self.cos_samples),
            ("tan_samples", self.tan_samples),
            ("sin_cos_samples", self.sin_cos_samples),
            ("asin_samples", self.asin_samples),
            ("acos_samples", self.acos_samples),
        ];
        for (field, count) in counts {
            if count == 0 {
                return Err(invalid(format!("{field} must be at least 1")));
            }
        }

        if self.entries_per_line == 0 {
            return Err(invalid("entries_per_line must be at least 1".to_string()));
        }

        let bits = self.target.fractional_bits;
        if bits == 0 || bits > 30 {
            return Err(invalid(format!("fractional_bits must be in 1..=30, got {bits}")));
        }
        if self.target.one != 1 << bits {
            return Err(invalid(format!(
                "one must be 2^{bits} = {}, got {}",
                1_i64 << bits,
                self.target.one
            )));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> LutGenError {
    LutGenError::InvalidConfig { reason }
}

/// Load the generator configuration from `path`.
///
/// A missing file falls back to [`LutGenConfig::default`]. A file that exists
/// but cannot be read or parsed is an error.
pub fn load_config(path: &Path) -> Result<LutGenConfig, LutGenError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let config = LutGenConfig::from_ron_str(&contents, path)?;
            info!("Loaded generator config from {}", path.display());
            Ok(config)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("Failed to read generator config {}: {}", path.display(), e);
            error!("Using default LutGenConfig");
            Ok(LutGenConfig::default())
        }
        Err(source) => Err(LutGenError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LutGenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sin_samples, 512);
        assert_eq!(config.entries_per_line, 10);
        assert_eq!(config.target.one, 65536);
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let config = LutGenConfig::from_ron_str(
            "(output_dir: \"out\", tan_samples: 64)",
            Path::new("inline.ron"),
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.tan_samples, 64);
        assert_eq!(config.sin_samples, 512);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = LutGenConfig::from_ron_str("(asin_samples: 0)", Path::new("inline.ron"))
            .unwrap_err();
        assert!(matches!(err, LutGenError::InvalidConfig { .. }));
        assert!(err.to_string().contains("asin_samples"));
    }

    #[test]
    fn test_mismatched_target_rejected() {
        let mut config = LutGenConfig::default();
        config.target.one = 1000;
        assert!(matches!(config.validate(), Err(LutGenError::InvalidConfig { .. })));

        config.target = TargetFormat {
            fractional_bits: 12,
            one: 4096,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_ron_is_config_error() {
        let err = LutGenConfig::from_ron_str("(sin_samples: \"many\")", Path::new("bad.ron"))
            .unwrap_err();
        match err {
            LutGenError::Config { path, .. } => assert_eq!(path, PathBuf::from("bad.ron")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, LutGenConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lut_gen.ron");
        std::fs::write(&path, "(entries_per_line: 8)").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.entries_per_line, 8);
    }

    #[test]
    fn test_round_trips_through_ron() {
        let config = LutGenConfig::default();
        let text = ron::to_string(&config).unwrap();
        let parsed = LutGenConfig::from_ron_str(&text, Path::new("inline.ron")).unwrap();
        assert_eq!(parsed, config);
    }
}

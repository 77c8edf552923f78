//! Offline generator for the runtime lookup tables.
//!
//! The generator samples each analytic function with `f64`, quantizes to the
//! target fixed-point format, and renders a Rust source file per table. Its
//! output is committed under `src/lut/generated/`; the runtime never calls
//! into this module.
//!
//! A run is all-or-nothing: every table is built and rendered in memory
//! first, then written to a temporary sibling file and renamed into place.
//! If any rename fails, the tables already replaced are restored from their
//! `.bak` copies.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lockstep_math_macros::profile;
use tracing::{debug, info, warn};

use crate::config::{LutGenConfig, TargetFormat};
use crate::lut::TableKind;

pub use error::LutGenError;
pub use writer::render_table;

mod error;
pub mod sampler;
pub mod writer;

/// One generated table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LutFunction {
    Sin,
    Cos,
    Tan,
    SinCos,
    Asin,
    Acos,
}

impl LutFunction {
    pub const ALL: [LutFunction; 6] = [
        LutFunction::Sin,
        LutFunction::Cos,
        LutFunction::Tan,
        LutFunction::SinCos,
        LutFunction::Asin,
        LutFunction::Acos,
    ];

    /// Lowercase name used for file names and log lines.
    pub const fn name(self) -> &'static str {
        match self {
            LutFunction::Sin => "sin",
            LutFunction::Cos => "cos",
            LutFunction::Tan => "tan",
            LutFunction::SinCos => "sin_cos",
            LutFunction::Asin => "asin",
            LutFunction::Acos => "acos",
        }
    }

    /// Name of the generated `static`, e.g. `SIN_COS_LUT`.
    pub fn static_name(self) -> String {
        format!("{}_LUT", self.name().to_uppercase())
    }

    /// Name of the generated file, e.g. `sin_cos_lut.rs`.
    pub fn file_name(self) -> String {
        format!("{}_lut.rs", self.name())
    }

    pub const fn kind(self) -> TableKind {
        match self {
            LutFunction::Sin | LutFunction::Cos | LutFunction::Tan => TableKind::Periodic,
            LutFunction::SinCos => TableKind::Interleaved,
            LutFunction::Asin | LutFunction::Acos => TableKind::Inverse,
        }
    }

    /// Configured sample count for this table.
    pub fn samples(self, config: &LutGenConfig) -> usize {
        match self {
            LutFunction::Sin => config.sin_samples,
            LutFunction::Cos => config.cos_samples,
            LutFunction::Tan => config.tan_samples,
            LutFunction::SinCos => config.sin_cos_samples,
            LutFunction::Asin => config.asin_samples,
            LutFunction::Acos => config.acos_samples,
        }
    }
}

/// A table built and rendered in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedTable {
    pub function: LutFunction,
    pub entries: Vec<i32>,
    /// Complete file contents.
    pub source: String,
}

/// Sample and quantize one table.
pub fn build_table(
    function: LutFunction,
    samples: usize,
    target: &TargetFormat,
) -> Result<Vec<i32>, LutGenError> {
    if samples == 0 {
        return Err(LutGenError::InvalidConfig {
            reason: format!("{} table needs at least one sample", function.name()),
        });
    }

    let name = function.name();
    let entries = match function {
        LutFunction::Sin => sampler::sample_periodic(name, samples, target, f64::sin)?,
        LutFunction::Cos => sampler::sample_periodic(name, samples, target, f64::cos)?,
        LutFunction::Tan => sampler::sample_periodic(name, samples, target, f64::tan)?,
        LutFunction::SinCos => sampler::sample_interleaved(name, samples, target)?,
        LutFunction::Asin => sampler::sample_inverse(name, samples, target, f64::asin)?,
        LutFunction::Acos => sampler::sample_inverse(name, samples, target, f64::acos)?,
    };

    debug_assert_eq!(entries.len(), function.kind().table_len(samples));
    Ok(entries)
}

/// Build and render every table without touching the filesystem.
#[profile]
pub fn generate(config: &LutGenConfig) -> Result<Vec<RenderedTable>, LutGenError> {
    config.validate()?;

    let mut tables = Vec::with_capacity(LutFunction::ALL.len());
    for function in LutFunction::ALL {
        let samples = function.samples(config);
        let entries = build_table(function, samples, &config.target)?;
        let source = render_table(&function.static_name(), &entries, config.entries_per_line);
        debug!(
            "Built {} with {} samples ({} entries)",
            function.static_name(),
            samples,
            entries.len()
        );
        tables.push(RenderedTable {
            function,
            entries,
            source,
        });
    }

    Ok(tables)
}

/// Generate every table and write it to `config.output_dir`.
///
/// Returns the paths written, in [`LutFunction::ALL`] order. On error the
/// output directory holds exactly the files it held before the call.
#[profile(5)]
pub fn run(config: &LutGenConfig) -> Result<Vec<PathBuf>, LutGenError> {
    let tables = generate(config)?;
    let output_dir = &config.output_dir;

    fs::create_dir_all(output_dir).map_err(|source| io_error(output_dir, source))?;

    // Stage everything first so a failed write leaves the committed tables alone.
    let mut staged = Vec::with_capacity(tables.len());
    for table in &tables {
        let path = output_dir.join(table.function.file_name());
        let tmp_path = sibling(&path, "tmp");
        if path.exists() && !path.is_file() {
            discard_staged(&staged);
            return Err(io_error(&path, io::Error::other("target is not a regular file")));
        }
        if let Err(source) = fs::write(&tmp_path, &table.source) {
            discard_staged(&staged);
            let _ = fs::remove_file(&tmp_path);
            return Err(io_error(&tmp_path, source));
        }
        staged.push((tmp_path, path));
    }

    let mut replaced = Vec::with_capacity(staged.len());
    for (index, (tmp_path, path)) in staged.iter().enumerate() {
        if let Err(err) = replace_file(tmp_path, path, &mut replaced) {
            roll_back(&replaced);
            discard_staged(&staged[index..]);
            return Err(err);
        }
    }

    let mut written = Vec::with_capacity(replaced.len());
    for file in replaced {
        if let Some(backup) = &file.backup {
            let _ = fs::remove_file(backup);
        }
        info!("Wrote {}", file.path.display());
        written.push(file.path);
    }

    info!(
        "Generated {} tables in {}",
        written.len(),
        output_dir.display()
    );
    Ok(written)
}

/// A table moved into place, with the file it displaced.
struct ReplacedFile {
    path: PathBuf,
    backup: Option<PathBuf>,
}

/// Move `tmp_path` over `path`, keeping any previous file as `<path>.bak`.
fn replace_file(
    tmp_path: &Path,
    path: &Path,
    replaced: &mut Vec<ReplacedFile>,
) -> Result<(), LutGenError> {
    let backup = if path.exists() {
        let backup = sibling(path, "bak");
        fs::rename(path, &backup).map_err(|source| io_error(path, source))?;
        Some(backup)
    } else {
        None
    };

    if let Err(source) = fs::rename(tmp_path, path) {
        if let Some(backup) = &backup {
            let _ = fs::rename(backup, path);
        }
        return Err(io_error(path, source));
    }

    replaced.push(ReplacedFile {
        path: path.to_path_buf(),
        backup,
    });
    Ok(())
}

/// Undo [`replace_file`] calls, newest first.
fn roll_back(replaced: &[ReplacedFile]) {
    for file in replaced.iter().rev() {
        let restored = match &file.backup {
            Some(backup) => fs::rename(backup, &file.path),
            None => fs::remove_file(&file.path),
        };
        if let Err(err) = restored {
            warn!("Could not restore {}: {}", file.path.display(), err);
        }
    }
}

fn discard_staged(staged: &[(PathBuf, PathBuf)]) {
    for (tmp_path, _) in staged {
        let _ = fs::remove_file(tmp_path);
    }
}

/// `<path>.<suffix>` next to `path`.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn io_error(path: &Path, source: io::Error) -> LutGenError {
    LutGenError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(LutFunction::SinCos.static_name(), "SIN_COS_LUT");
        assert_eq!(LutFunction::Acos.file_name(), "acos_lut.rs");
        assert_eq!(LutFunction::Tan.kind(), TableKind::Periodic);
        assert_eq!(LutFunction::Asin.kind(), TableKind::Inverse);
    }

    #[test]
    fn test_build_table_lengths_follow_kind() {
        let target = TargetFormat::default();
        for function in LutFunction::ALL {
            let entries = build_table(function, 16, &target).unwrap();
            assert_eq!(entries.len(), function.kind().table_len(16), "{:?}", function);
        }
    }

    #[test]
    fn test_build_table_rejects_zero_samples() {
        let err = build_table(LutFunction::Sin, 0, &TargetFormat::default()).unwrap_err();
        assert!(matches!(err, LutGenError::InvalidConfig { .. }));
    }

    #[test]
    fn test_tan_asymptotes_saturate() {
        let entries = build_table(LutFunction::Tan, 512, &TargetFormat::default()).unwrap();
        assert_eq!(entries[128], i32::MAX);
        assert_eq!(entries.iter().filter(|&&e| e == i32::MAX).count(), 2);
    }

    #[test]
    fn test_generate_is_pure_and_ordered() {
        let config = LutGenConfig {
            output_dir: PathBuf::from("/nonexistent/never/written"),
            ..LutGenConfig::default()
        };
        let tables = generate(&config).unwrap();
        let order: Vec<_> = tables.iter().map(|t| t.function).collect();
        assert_eq!(order, LutFunction::ALL.to_vec());
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = LutGenConfig {
            cos_samples: 0,
            ..LutGenConfig::default()
        };
        assert!(matches!(generate(&config), Err(LutGenError::InvalidConfig { .. })));
    }

    #[test]
    fn test_run_writes_every_table() {
        let dir = tempfile::tempdir().unwrap();
        let config = LutGenConfig {
            output_dir: dir.path().join("generated"),
            sin_samples: 8,
            ..LutGenConfig::default()
        };

        let written = run(&config).unwrap();
        assert_eq!(written.len(), 6);
        for (function, path) in LutFunction::ALL.iter().zip(&written) {
            assert_eq!(path, &config.output_dir.join(function.file_name()));
            let contents = fs::read_to_string(path).unwrap();
            assert!(contents.contains(&function.static_name()));
        }

        let leftovers = fs::read_dir(&config.output_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .count();
        assert_eq!(leftovers, 0);

        let sin = fs::read_to_string(&written[0]).unwrap();
        assert!(sin.contains("pub static SIN_LUT: [i32; 9] = ["));
    }

    fn dir_listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_blocked_target_leaves_tables_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let first = LutGenConfig {
            output_dir: dir.path().to_path_buf(),
            ..LutGenConfig::default()
        };
        let written = run(&first).unwrap();
        let sin_before = fs::read_to_string(&written[0]).unwrap();

        // Replacing existing tables cleans up their backups.
        run(&first).unwrap();
        let mut expected: Vec<_> = LutFunction::ALL.iter().map(|f| f.file_name()).collect();
        expected.sort();
        assert_eq!(dir_listing(dir.path()), expected);

        // The last table in write order cannot be replaced.
        let blocked = dir.path().join(LutFunction::Acos.file_name());
        fs::remove_file(&blocked).unwrap();
        fs::create_dir(&blocked).unwrap();
        let before = dir_listing(dir.path());

        let second = LutGenConfig {
            sin_samples: 8,
            ..first
        };
        let err = run(&second).unwrap_err();
        assert!(matches!(err, LutGenError::Io { ref path, .. } if path == &blocked));

        assert_eq!(dir_listing(dir.path()), before);
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), sin_before);
        assert!(blocked.is_dir());
    }

    #[test]
    fn test_roll_back_restores_replaced_files() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("a.rs");
        let fresh = dir.path().join("b.rs");
        fs::write(&existing, "old").unwrap();
        fs::write(sibling(&existing, "tmp"), "new a").unwrap();
        fs::write(sibling(&fresh, "tmp"), "new b").unwrap();

        let mut replaced = Vec::new();
        replace_file(&sibling(&existing, "tmp"), &existing, &mut replaced).unwrap();
        replace_file(&sibling(&fresh, "tmp"), &fresh, &mut replaced).unwrap();
        assert_eq!(fs::read_to_string(&existing).unwrap(), "new a");
        assert_eq!(dir_listing(dir.path()), ["a.rs", "a.rs.bak", "b.rs"]);

        roll_back(&replaced);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
        assert_eq!(dir_listing(dir.path()), ["a.rs"]);
    }

    #[test]
    fn test_failed_replace_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("a.rs");
        fs::write(&existing, "old").unwrap();

        let mut replaced = Vec::new();
        let missing = sibling(&existing, "tmp");
        assert!(replace_file(&missing, &existing, &mut replaced).is_err());
        assert!(replaced.is_empty());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
        assert_eq!(dir_listing(dir.path()), ["a.rs"]);
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LutGenConfig {
            output_dir: dir.path().join("generated"),
            asin_samples: 0,
            ..LutGenConfig::default()
        };
        assert!(run(&config).is_err());
        assert!(!config.output_dir.exists());
    }
}

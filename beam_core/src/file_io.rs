//! # File I/O Module
//!
//! JSON file helpers for requests, settings and reports.
//!
//! - **Atomic saves**: write to `.tmp`, fsync, rename, so an interrupted save
//!   never leaves a half-written report. A failed save removes its `.tmp` file.
//! - **Structured errors**: every failure is a [`CalcError::FileError`] or
//!   [`CalcError::SerializationError`] naming the path
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_request, save_report};
//! use beam_core::BeamAnalysis;
//! use std::path::Path;
//!
//! let request = load_request(Path::new("beam.json"))?;
//! let report = request.run(&BeamAnalysis::new())?;
//! save_report(&report, Path::new("beam.report.json"))?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::report::AnalysisReport;
use crate::request::AnalysisRequest;
use crate::settings::AnalysisSettings;

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// `<path>.tmp` sibling that is removed on drop unless it was renamed into place
struct TempFile {
    path: PathBuf,
    committed: bool,
}

impl TempFile {
    fn for_target(target: &Path) -> Self {
        let mut name = target.as_os_str().to_owned();
        name.push(".tmp");
        TempFile {
            path: PathBuf::from(name),
            committed: false,
        }
    }

    fn create(&self) -> CalcResult<File> {
        File::create(&self.path).map_err(|e| {
            CalcError::file_error("create temp file", self.path.display().to_string(), e.to_string())
        })
    }

    fn commit(mut self, target: &Path) -> CalcResult<()> {
        fs::rename(&self.path, target).map_err(|e| {
            CalcError::file_error("rename to final", target.display().to_string(), e.to_string())
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Serialize `value` as pretty JSON and write it atomically.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync to disk (fsync)
/// 4. Rename over `path`
///
/// Any failure after step 2 starts removes the temp file.
pub fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;

    let tmp = TempFile::for_target(path);
    let mut tmp_file = tmp.create()?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp.path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp.path.display().to_string(), e.to_string())
    })?;

    // Close before renaming
    drop(tmp_file);
    tmp.commit(path)?;

    debug!("wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

/// Load an [`AnalysisRequest`]
pub fn load_request(path: &Path) -> CalcResult<AnalysisRequest> {
    read_json(path)
}

/// Load [`AnalysisSettings`] and check them
pub fn load_settings(path: &Path) -> CalcResult<AnalysisSettings> {
    let settings: AnalysisSettings = read_json(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Save an [`AnalysisReport`] atomically
pub fn save_report(report: &AnalysisReport, path: &Path) -> CalcResult<()> {
    write_json_atomic(report, path)
}

/// Load a previously saved [`AnalysisReport`]
pub fn load_report(path: &Path) -> CalcResult<AnalysisReport> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::SIMPLY_SUPPORTED;
    use crate::{Beam, BeamAnalysis, Material};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("beam_core_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_settings_roundtrip() {
        let path = temp_path("settings.json");
        let settings = AnalysisSettings::strict().with_sample_step(0.25);
        write_json_atomic(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic.json");
        write_json_atomic(&AnalysisSettings::default(), &path).unwrap();

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        assert!(path.exists());
        assert!(!PathBuf::from(tmp).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_uncommitted_temp_file_is_removed() {
        let target = temp_path("abandoned.json");
        let tmp = TempFile::for_target(&target);
        let mut file = tmp.create().unwrap();
        file.write_all(b"partial").unwrap();
        let tmp_path = tmp.path.clone();
        assert!(tmp_path.exists());

        // Dropped without commit, as on a failed write or sync
        drop(file);
        drop(tmp);
        assert!(!tmp_path.exists());
        assert!(!target.exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        // A file cannot be renamed over a non-empty directory
        let target = temp_path("rename_target_dir");
        fs::create_dir_all(target.join("occupied")).unwrap();

        let err = write_json_atomic(&AnalysisSettings::default(), &target).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!TempFile::for_target(&target).path.exists());
        let _ = fs::remove_dir_all(&target);
    }

    #[test]
    fn test_nan_report_round_trip() {
        // No `I`, so lenient deflection is NaN everywhere
        let bare = Arc::new(Material::new("Bare", [("E", 2e5)]));
        let beam = Beam::single_span(4.0, bare);
        let report = AnalysisReport::generate(&BeamAnalysis::new(), &beam, 10.0, SIMPLY_SUPPORTED).unwrap();
        assert!(report.deflection.points.iter().all(|p| p.y.is_nan()));

        let path = temp_path("nan_report.json");
        save_report(&report, &path).unwrap();
        let back = load_report(&path).unwrap();

        assert_eq!(back.id, report.id);
        assert_eq!(back.deflection.points.len(), report.deflection.points.len());
        assert!(back.deflection.points.iter().all(|p| p.y.is_nan()));
        assert_relative_eq!(back.bending_moment.max.value, 20.0, epsilon = 1e-9);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = load_request(&temp_path("does_not_exist.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let path = temp_path("garbage.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_request(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let path = temp_path("bad_settings.json");
        fs::write(&path, r#"{ "sample_step": -1.0 }"#).unwrap();
        assert!(load_settings(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}

//! Destination-name collision resolution.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use rand::Rng;

/// Salt range for renamed files. Bounded; two resolutions of the same
/// name can produce the same salt.
pub const SALT_RANGE: RangeInclusive<u32> = 1..=100;

/// Compute a destination path for `file_name` inside `destination`.
///
/// If `destination/file_name` is free it is returned unchanged. Otherwise
/// the name is split at its last extension separator and salted:
/// `report.pdf` becomes `report_{salt}.pdf`.
///
/// This is a single probe. The salted name is not checked again; if it is
/// also occupied, the outcome is whatever the move primitive does with an
/// existing target.
pub fn resolve_destination<R: Rng + ?Sized>(
    destination: &Path,
    file_name: &str,
    rng: &mut R,
) -> PathBuf {
    let candidate = destination.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let salt = rng.gen_range(SALT_RANGE);

    let salted = match name.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_{salt}.{ext}"),
        None => format!("{stem}_{salt}"),
    };

    destination.join(salted)
}

//! Dotted version comparison.

use crate::error::BundleSellsError;
use std::cmp::Ordering;

/// Compare two dotted numeric versions. Missing components count as zero,
/// so `5.6` equals `5.6.0`.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, BundleSellsError> {
    let a = parse(a)?;
    let b = parse(b)?;
    let len = a.len().max(b.len());

    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return Ok(other),
        }
    }

    Ok(Ordering::Equal)
}

/// Check that `found` is at least `required`.
pub fn ensure_at_least(found: &str, required: &str) -> Result<(), BundleSellsError> {
    if compare_versions(found, required)? == Ordering::Less {
        return Err(BundleSellsError::IncompatibleHost {
            required: required.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

fn parse(version: &str) -> Result<Vec<u64>, BundleSellsError> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(BundleSellsError::InvalidVersion(version.to_string()));
    }

    trimmed
        .split('.')
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| BundleSellsError::InvalidVersion(version.to_string()))
        })
        .collect()
}

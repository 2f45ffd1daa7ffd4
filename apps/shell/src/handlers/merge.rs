use allergo_domain::AllergyAssociation;
use allergo_kernel::correction::merge_associations;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;

/// Inline JSON, or the content of the file after a leading `@`.
fn read_associations(arg: &str, what: &str) -> Result<Vec<AllergyAssociation>> {
    let raw = match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {what} file {path}"))?,
        None => arg.to_owned(),
    };
    serde_json::from_str(&raw).with_context(|| format!("Invalid {what} associations"))
}

/// Prints the merged association list as JSON.
///
/// # Errors
/// Returns an error if either argument is not a valid association list.
pub fn merge(base: &str, overrides: &str, out: &mut impl Write) -> Result<()> {
    let base = read_associations(base, "base")?;
    let overrides = read_associations(overrides, "override")?;

    let merged = merge_associations(&base, &overrides);
    serde_json::to_writer_pretty(&mut *out, &merged)?;
    writeln!(out)?;

    Ok(())
}

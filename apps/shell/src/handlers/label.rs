use super::locale::parse_language;
use allergo_domain::{Language, Proba};
use allergo_kernel::labels::PROBA_LABELS;
use allergo_kernel::locale::iso_code;
use allergo_kernel::localization::primary_and_fallback;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Prints the label of `proba` for the first usable language in `tags`, or in
/// `configured` when no tags are given.
///
/// # Errors
/// Returns an error for unknown tags or when no label exists at all.
pub fn label(proba: Proba, tags: &[String], configured: &[Language], out: &mut impl Write) -> Result<()> {
    let requested = tags.iter().map(|tag| parse_language(tag)).collect::<Result<Vec<_>>>()?;
    let preferred = if requested.is_empty() { configured } else { &requested };

    let (primary, fallback) = primary_and_fallback(preferred);
    debug!(primary = iso_code(primary), fallback = fallback.map(iso_code), "Resolving label");

    let order: Vec<Language> = std::iter::once(primary).chain(fallback).chain(preferred.iter().copied()).collect();
    let text = PROBA_LABELS.resolve(proba, &order).with_context(|| format!("No label for '{proba}'"))?;

    writeln!(out, "{text}")?;
    Ok(())
}

use allergo_domain::Language;
use allergo_kernel::locale::{iso_code, map_country_name_to_code, market_and_locale};
use anyhow::{Result, anyhow, bail};
use std::io::Write;

/// Strict tag parsing for user input; documents fall back to Swedish, the CLI does not.
pub(crate) fn parse_language(tag: &str) -> Result<Language> {
    tag.trim().parse().map_err(|_| anyhow!("Unknown language tag '{tag}'"))
}

/// # Errors
/// Returns an error if no country matches `text`.
pub fn country(text: &str, out: &mut impl Write) -> Result<()> {
    let Some(code) = map_country_name_to_code(text) else {
        bail!("No country matches '{text}'");
    };
    writeln!(out, "{code}")?;
    Ok(())
}

/// # Errors
/// Returns an error if `tag` is not a supported language.
pub fn locale(tag: &str, out: &mut impl Write) -> Result<()> {
    let language = parse_language(tag)?;
    let resolved = market_and_locale(language);

    writeln!(out, "iso\t{}", iso_code(language))?;
    writeln!(out, "market\t{}", resolved.market)?;
    writeln!(out, "locale\t{}", resolved.locale)?;
    Ok(())
}

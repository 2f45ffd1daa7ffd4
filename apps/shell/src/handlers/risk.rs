use crate::models::entity::EntityDoc;
use allergo_domain::Proba;
use allergo_kernel::risk::{RiskExt, max_probability_across_entities};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Prints one row per entity, the strongest association per allergy, and the overall rating.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON array of entities.
pub fn rate_entities(file: &Path, allergies: &[String], out: &mut impl Write) -> Result<()> {
    let raw = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let entities: Vec<Option<EntityDoc>> =
        serde_json::from_str(&raw).context("Expected a JSON array of entities")?;

    info!(entities = entities.len(), allergies = allergies.len(), "Rating entities");
    rate(&entities, allergies, out)
}

pub(crate) fn rate(entities: &[Option<EntityDoc>], allergies: &[String], out: &mut impl Write) -> Result<()> {
    for (index, entity) in entities.iter().enumerate() {
        match entity {
            Some(entity) => {
                let relevance = if entity.is_relevant(allergies) { "relevant" } else { "-" };
                writeln!(out, "{}\t{}\t{relevance}", entity.label(index), entity.max_probability(allergies))?;
            },
            None => writeln!(out, "#{index}\tmissing")?,
        }
    }

    let present: Vec<Option<&EntityDoc>> = entities.iter().map(Option::as_ref).collect();
    let mut overall = Proba::None;
    for allergy in allergies {
        let strongest = max_probability_across_entities(&present, allergy);
        overall = overall.max(strongest.probability);
        writeln!(out, "{allergy}\t{}", strongest.probability)?;
    }
    writeln!(out, "overall\t{overall}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_per_entity_and_allergy() {
        let entities: Vec<Option<EntityDoc>> = serde_json::from_str(
            r#"[
                {"_id": "vete", "allergies": [{"allergyId": "gluten", "probability": "high"}]},
                null,
                {"allergies": [{"allergy": "milk", "proba": "low"}]}
            ]"#,
        )
        .unwrap();

        let mut out = Vec::new();
        rate(&entities, &["milk".to_owned(), "egg".to_owned()], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "vete\tnone\t-\n#1\tmissing\n#2\tlow\trelevant\nmilk\tlow\negg\tnone\noverall\tlow\n");
    }
}

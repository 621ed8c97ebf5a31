use std::collections::BTreeMap;

use crate::domain::{
    common::entities::app_errors::CoreError,
    grocery::entities::{Candidate, ContentPart, GroceryList},
};

/// Returns the text of the first part of the first candidate.
pub fn first_text_part(candidates: &[Candidate]) -> Result<&str, CoreError> {
    let part = candidates
        .first()
        .and_then(|candidate| candidate.parts.first())
        .ok_or(CoreError::EmptyResponse)?;

    match part {
        ContentPart::Text(text) => Ok(text),
        ContentPart::Other(kind) => Err(CoreError::UnexpectedResponseShape(kind.clone())),
    }
}

/// Narrows model output to the span between the first `{` and the last `}`.
///
/// The trimmed text is returned untouched when no such ordered pair exists.
pub fn extract_json_object(text: &str) -> &str {
    let trimmed = text.trim();

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Grocery list as the model may send it: a `null` category is empty and
/// `null` items are dropped.
type LenientCategories = BTreeMap<String, Option<Vec<Option<String>>>>;

/// Sanitizes and parses model output in a single attempt.
pub fn parse_grocery_list(raw_response: &str) -> Result<GroceryList, CoreError> {
    let cleaned = extract_json_object(raw_response);

    let categories: LenientCategories = serde_json::from_str(cleaned).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::MalformedUpstreamJSON {
            reason: e.to_string(),
            text: cleaned.to_string(),
        }
    })?;

    Ok(categories
        .into_iter()
        .map(|(category, items)| {
            let items = items.unwrap_or_default().into_iter().flatten().collect();
            (category, items)
        })
        .collect())
}

//! Prompt construction for recipe generation.

use serde_json::Value;

pub const INGREDIENTS_MISSING: &str = "Ingredients not provided.";
pub const MODEL_UNAVAILABLE: &str = "Recipe generator model is not available.";
pub const GENERATION_FAILED: &str = "Error generating recipe";

/// Builds the generation prompt, embedding the ingredients verbatim.
pub fn recipe_prompt(ingredients: &str) -> String {
    format!("Generate a recipe using the following ingredients: {ingredients}")
}

/// Extracts the ingredients text from a request value.
///
/// Returns `None` for a missing or falsy value: `null`, `false`, zero, and
/// empty strings, arrays or objects. Strings are used as-is; any other value
/// is rendered as compact JSON (`["egg","milk"]`, `true`), not Python's
/// `str()` form (`['egg', 'milk']`, `True`).
pub fn ingredients_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

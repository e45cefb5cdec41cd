//! Narrowing of noisy model replies down to a single JSON object.
//!
//! Models asked to "return only JSON" still wrap the object in prose or
//! markdown code fences. [`normalize`] cuts the reply down to the part that
//! should parse, without parsing anything itself.

const FENCE: &str = "```";

/// Returns the substring of `raw` that should hold exactly one JSON object.
///
/// 1. Surrounding whitespace is trimmed.
/// 2. If the text contains a code fence, the first fenced segment holding both
///    `{` and `}` is selected (falling back to the whole text).
/// 3. The selection is narrowed to the span from the first `{` to the last
///    `}`, inclusive, when the closing brace comes after the opening one.
///
/// Text without braces passes through trimmed. Braces inside string values
/// are not balanced; the outermost span wins.
pub fn normalize(raw: &str) -> &str {
    let mut text = raw.trim();

    if text.contains(FENCE) {
        if let Some(segment) = text
            .split(FENCE)
            .find(|part| part.contains('{') && part.contains('}'))
        {
            text = segment;
        }
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text,
    }
}

//! JSON extraction from raw model output.
//!
//! The model is instructed to answer with bare JSON, but replies sometimes
//! arrive wrapped in a markdown code fence (with or without a language tag).
//! The fence is stripped, the remainder is parsed strictly. There is no
//! repair of malformed JSON beyond that.

use serde_json::Value;

/// Strip a surrounding markdown code fence, if present.
///
/// Only a fence at the very start is considered; the opening line is removed
/// whole (so a `json` language tag goes with it), and a trailing fence line
/// is removed if one exists.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the remainder of the opening fence line (language tag, if any)
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => return trimmed,
    };

    let body = body.trim_end();
    body.strip_suffix("```").map_or(body, str::trim_end).trim()
}

/// Parse the model reply into a JSON value, stripping a code fence first.
pub fn parse_reply(raw: &str) -> Result<Value, serde_json::Error> {
    let text = strip_code_fence(raw);
    serde_json::from_str(text)
}

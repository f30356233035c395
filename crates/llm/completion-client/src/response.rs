//! Response decoding.

use serde::Deserialize;
use serde_json::Value;

use crate::usage::Usage;

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

/// Both known reply shapes; either may be absent or malformed.
#[derive(Debug, Default, Deserialize)]
struct ReplyShapes {
    #[serde(default, deserialize_with = "lenient")]
    choices: Option<Vec<ChatChoice>>,
    #[serde(default, deserialize_with = "lenient")]
    content: Option<Vec<ContentPart>>,
}

/// Treats a field of the wrong shape as absent instead of failing the whole reply.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ReplyShapes {
    fn chat_text(&mut self) -> Option<String> {
        self.choices.take()?.into_iter().next()?.message.content
    }

    fn content_text(&mut self) -> Option<String> {
        self.content.take()?.into_iter().next()?.text
    }
}

/// `choices[0].message.content`, else `content[0].text`, else empty.
pub fn extract_text(payload: &Value) -> String {
    let mut shapes = ReplyShapes::deserialize(payload).unwrap_or_default();
    shapes
        .chat_text()
        .or_else(|| shapes.content_text())
        .unwrap_or_default()
}

/// Usage of the reply; every missing count is zero.
///
/// Tokens are `total_tokens` when positive, else `input_tokens + output_tokens`.
pub fn extract_usage(payload: &Value, provider: &str) -> Usage {
    let field = |name: &str| {
        payload
            .get("usage")
            .and_then(|u| u.get(name))
            .and_then(Value::as_u64)
            .unwrap_or(0)
    };
    let tokens = match field("total_tokens") {
        0 => field("input_tokens").saturating_add(field("output_tokens")),
        total => total,
    };
    Usage::estimate(tokens, provider)
}

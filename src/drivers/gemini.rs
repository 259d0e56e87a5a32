//! Google Gemini generateContent driver.
//!
//! - The whole conversation is flattened into a single `user` content with one
//!   text part; system messages are prefixed with `System: `.
//! - Tools become `tools[0].functionDeclarations` with function-calling mode `AUTO`.
//! - Parameter schemas are translated one level deep: each property keeps only
//!   its `type` (upper-cased, as Gemini's `Type` enum expects) and `description`.
//! - Response: only `candidates[0].content.parts[0]` is inspected for a
//!   `functionCall`; text is the concatenation of the candidate's text parts.

use serde_json::{json, Map, Value};

use crate::error::{Error, ErrorContext};
use crate::types::message::Message;
use crate::types::tool::{FunctionCall, ToolDefinition};

use super::{DriverResponse, GenerationOptions, UsageInfo};

const SYSTEM_PREFIX: &str = "System: ";
const MESSAGE_SEPARATOR: &str = "\n\n";

/// Google Gemini generateContent API driver.
#[derive(Debug, Clone, Default)]
pub struct GeminiDriver {
    options: GenerationOptions,
}

impl GeminiDriver {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Flatten a conversation into the prompt text sent to the model.
    ///
    /// Only system messages are labelled; the role and source of every other
    /// message are dropped.
    pub fn render_prompt(messages: &[Message]) -> String {
        let mut prompt = String::new();
        for m in messages {
            if m.is_system() {
                prompt.push_str(SYSTEM_PREFIX);
            }
            prompt.push_str(&m.content);
            prompt.push_str(MESSAGE_SEPARATOR);
        }
        prompt
    }

    /// Translate tool definitions into Gemini function declarations.
    pub fn function_declarations(tools: &[ToolDefinition]) -> Result<Vec<Value>, Error> {
        tools
            .iter()
            .enumerate()
            .map(|(idx, tool)| {
                let parameters = Self::translate_parameters(idx, &tool.parameters)?;
                Ok(json!({
                    "name": tool.name,
                    "description": tool.description,
                    "parameters": parameters,
                }))
            })
            .collect()
    }

    fn translate_parameters(tool_idx: usize, schema: &Value) -> Result<Value, Error> {
        let path = format!("tools[{}].parameters", tool_idx);

        let schema_type = Self::required_str(schema, "type", &path)?;
        let properties = schema
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| Self::missing_key(&path, "properties", "an object"))?;

        let mut translated = Map::new();
        for (name, prop) in properties {
            let prop_path = format!("{}.properties.{}", path, name);
            let mut out = Map::new();
            out.insert(
                "type".into(),
                Value::String(Self::required_str(prop, "type", &prop_path)?.to_uppercase()),
            );
            if let Some(desc) = prop.get("description").and_then(Value::as_str) {
                out.insert("description".into(), Value::String(desc.to_string()));
            }
            translated.insert(name.clone(), Value::Object(out));
        }

        let required: Vec<Value> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter(|n| n.is_string()).cloned().collect())
            .unwrap_or_default();

        Ok(json!({
            "type": schema_type.to_uppercase(),
            "properties": translated,
            "required": required,
        }))
    }

    fn required_str<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a str, Error> {
        value
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| Self::missing_key(path, key, "a string"))
    }

    fn missing_key(path: &str, key: &str, expected: &str) -> Error {
        Error::validation_with_context(
            format!("malformed tool schema: missing key '{}'", key),
            ErrorContext::new()
                .with_field_path(path)
                .with_details(format!("expected '{}' to be {}", key, expected))
                .with_source("gemini_driver"),
        )
    }

    /// Build a generateContent request body.
    ///
    /// When `declarations` is empty no `tools`/`toolConfig` is attached.
    pub fn build_request(&self, prompt: &str, declarations: &[Value]) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        });

        if !declarations.is_empty() {
            body["tools"] = json!([{ "functionDeclarations": declarations }]);
            body["toolConfig"] = json!({
                "functionCallingConfig": { "mode": "AUTO" }
            });
        }

        let mut gen_config = json!({});
        if let Some(t) = self.options.temperature {
            gen_config["temperature"] = json!(t);
        }
        if let Some(mt) = self.options.max_output_tokens {
            gen_config["maxOutputTokens"] = json!(mt);
        }
        if gen_config != json!({}) {
            body["generationConfig"] = gen_config;
        }

        body
    }

    pub fn parse_response(&self, body: &Value) -> Result<DriverResponse, Error> {
        // { candidates: [{ content: { parts: [...] }, finishReason }], usageMetadata }
        let parts = body
            .pointer("/candidates/0/content/parts")
            .and_then(Value::as_array);

        let function_call = match parts.and_then(|p| p.first()).and_then(|p| p.get("functionCall")) {
            Some(fc) => {
                let mut call: FunctionCall = serde_json::from_value(fc.clone())?;
                if call.args.is_null() {
                    call.args = json!({});
                }
                Some(call)
            }
            None => None,
        };

        let text = parts.and_then(|parts| {
            let texts: Vec<&str> = parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.concat())
            }
        });

        let finish_reason = body
            .pointer("/candidates/0/finishReason")
            .and_then(Value::as_str)
            .map(|r| match r {
                "STOP" => "stop".to_string(),
                "MAX_TOKENS" => "length".to_string(),
                "SAFETY" | "RECITATION" => "content_filter".to_string(),
                other => other.to_lowercase(),
            });

        let usage = body.get("usageMetadata").map(|u| UsageInfo {
            prompt_tokens: u["promptTokenCount"].as_u64().unwrap_or(0),
            completion_tokens: u["candidatesTokenCount"].as_u64().unwrap_or(0),
            total_tokens: u["totalTokenCount"].as_u64().unwrap_or(0),
        });

        Ok(DriverResponse {
            text,
            function_call,
            finish_reason,
            usage,
        })
    }
}

//! Call inputs: one text or an ordered batch

use crate::error::{Result, SegmentError};
use serde_json::Value;

/// Text handed to [`Segmenter::process`](crate::Segmenter::process)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A single text
    Text(String),
    /// Independent texts, segmented in order
    Batch(Vec<String>),
}

impl Input {
    /// Number of texts
    pub fn len(&self) -> usize {
        match self {
            Input::Text(_) => 1,
            Input::Batch(texts) => texts.len(),
        }
    }

    /// Whether this is an empty batch
    pub fn is_empty(&self) -> bool {
        matches!(self, Input::Batch(texts) if texts.is_empty())
    }

    /// Parse a JSON document holding a string or an array of strings
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| SegmentError::InputType(format!("invalid JSON: {e}")))?;
        Self::try_from(value)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<String>> for Input {
    fn from(texts: Vec<String>) -> Self {
        Input::Batch(texts)
    }
}

impl From<Vec<&str>> for Input {
    fn from(texts: Vec<&str>) -> Self {
        Input::Batch(texts.into_iter().map(str::to_string).collect())
    }
}

impl TryFrom<Value> for Input {
    type Error = SegmentError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Input::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(text) => Ok(text),
                    other => Err(SegmentError::InputType(format!(
                        "batch item {index} is {}, expected a string",
                        kind(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Input::Batch),
            other => Err(SegmentError::InputType(format!(
                "expected a string or an array of strings, got {}",
                kind(&other)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_values() {
        assert_eq!(
            Input::try_from(json!("text")).unwrap(),
            Input::Text("text".to_string())
        );
        assert_eq!(
            Input::try_from(json!(["a", "b"])).unwrap(),
            Input::Batch(vec!["a".to_string(), "b".to_string()])
        );
        assert!(Input::try_from(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_other_types() {
        for value in [json!(42), json!(null), json!({"text": "a"}), json!(true)] {
            assert!(matches!(
                Input::try_from(value),
                Err(SegmentError::InputType(_))
            ));
        }

        let err = Input::try_from(json!(["a", 1])).unwrap_err();
        assert!(err.to_string().contains("batch item 1 is a number"));
    }

    #[test]
    fn test_from_json_str() {
        assert_eq!(Input::from_json_str(r#"["x"]"#).unwrap().len(), 1);
        assert!(matches!(
            Input::from_json_str("{not json"),
            Err(SegmentError::InputType(_))
        ));
    }
}

//! Encoding of dynamic `serde_json` values.
//!
//! Objects are records whose keys are the field names, so a webhook payload
//! renders the same way as a derived struct with the same shape. Strings take
//! the textual path, `null` renders `null`, arrays render inline like other
//! sequences, and numbers and booleans use their display form.

use serde_json::{Map, Value};

use crate::{
    encoder::{Context, FieldAnnotation, MarkdownEncode, RecordEncoder},
    error::Result,
    impls::NULL,
};

impl MarkdownEncode for Map<String, Value> {
    fn encode_with(&self, ctx: Context) -> Result<String> {
        let mut record = RecordEncoder::new(ctx);
        for (key, value) in self {
            record.field(key, FieldAnnotation::None, value)?;
        }
        Ok(record.finish())
    }
}

impl MarkdownEncode for Value {
    fn encode_with(&self, ctx: Context) -> Result<String> {
        match self {
            Value::Null => Ok(NULL.to_string()),
            Value::Bool(value) => value.encode_with(ctx),
            Value::Number(number) => Ok(number.to_string()),
            Value::String(text) => text.encode_with(ctx),
            Value::Array(items) => items.encode_with(ctx),
            Value::Object(map) => map.encode_with(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Context, FieldAnnotation, MarkdownEncode, ToMarkdown};

    #[test]
    fn object_renders_as_record() {
        let value = json!({ "Name": "Alice", "Age": 30 });
        let text = value.to_markdown().unwrap();
        // serde_json orders keys alphabetically unless `preserve_order` is on.
        assert_eq!(text, "- **Age**: 30\n- **Name**: Alice");
    }

    #[test]
    fn nested_object_is_indented() {
        let value = json!({ "Inner": { "X": 1 } });
        assert_eq!(value.to_markdown().unwrap(), "- **Inner**: \n\t- **X**: 1");
    }

    #[test]
    fn null_and_arrays() {
        let value = json!({ "Missing": null, "Tags": ["a", "b"] });
        assert_eq!(
            value.to_markdown().unwrap(),
            "- **Missing**: null\n- **Tags**: [a b]"
        );
    }

    #[test]
    fn empty_object_is_empty_string() {
        assert_eq!(json!({}).to_markdown().unwrap(), "");
    }

    #[test]
    fn strings_follow_obfuscation() {
        let ctx = Context::root().nested(FieldAnnotation::Obfuscate);
        assert_eq!(json!("abcdef1234").encode_with(ctx).unwrap(), "******1234");
        assert_eq!(json!(1_234_567).encode_with(ctx).unwrap(), "1234567");
    }
}

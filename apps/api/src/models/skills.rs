use serde::Deserialize;
use serde_json::Value;

/// The `skills` field as the model may emit it. Resolved once into a single
/// comma-separated string before rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Skills {
    Text(String),
    List(Vec<String>),
    /// Category label → skills. Labels are dropped on flattening; order is document order.
    Map(Vec<(String, String)>),
}

impl From<Value> for Skills {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Skills::Text(s),
            Value::Array(items) => Skills::List(items.iter().map(scalar_text).collect()),
            Value::Object(map) => Skills::Map(
                map.into_iter()
                    .map(|(label, v)| (label, scalar_text(&v)))
                    .collect(),
            ),
            other => Skills::Text(scalar_text(&other)),
        }
    }
}

impl Skills {
    /// Flattens any representation into `"A, B, C"`.
    pub fn to_text(&self) -> String {
        match self {
            Skills::Text(text) => text.clone(),
            Skills::List(items) => join_non_empty(items.iter().map(String::as_str)),
            Skills::Map(pairs) => join_non_empty(pairs.iter().map(|(_, v)| v.as_str())),
        }
    }
}

fn join_non_empty<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stringifies a JSON value for display. Nested lists flatten with `", "`.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(scalar_text).collect();
            join_non_empty(parts.iter().map(String::as_str))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Skills {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_all_representations_normalize_alike() {
        let from_map = parse(json!({"a": "X", "b": "Y"}));
        let from_list = parse(json!(["X", "Y"]));
        let from_text = parse(json!("X, Y"));

        assert!(matches!(from_map, Skills::Map(_)));
        assert!(matches!(from_list, Skills::List(_)));
        assert!(matches!(from_text, Skills::Text(_)));

        for skills in [from_map, from_list, from_text] {
            assert_eq!(skills.to_text(), "X, Y");
        }
    }

    #[test]
    fn test_map_keeps_document_order() {
        let skills = parse(json!({"zeta": "Rust", "alpha": "Go", "mid": "SQL"}));
        assert_eq!(skills.to_text(), "Rust, Go, SQL");
    }

    #[test]
    fn test_map_values_that_are_lists_are_flattened() {
        let skills = parse(json!({
            "Languages": ["Python", "Rust"],
            "Tools": "Git"
        }));
        assert_eq!(skills.to_text(), "Python, Rust, Git");
    }

    #[test]
    fn test_scalars_are_stringified() {
        assert_eq!(parse(json!(42)).to_text(), "42");
        assert_eq!(parse(json!(["Rust", 2024, null])).to_text(), "Rust, 2024");
    }
}

//! Dotted-path lookup into form values
//!
//! Fields nested inside repeatable blocks are addressed with dot-delimited
//! paths like "content.0.author". The walk is a plain fold over the split
//! keys; any missing intermediate key short-circuits to `None`.

use serde_json::Value;

/// Walk a dot-delimited path into the form values.
///
/// Object keys match by name, array elements by numeric index. Returns
/// `None` as soon as a segment fails to resolve.
///
/// # Example
///
/// ```
/// use linkclip::value_at_path;
/// use serde_json::json;
///
/// let form = json!({ "author": { "profile": { "name": "ada" } } });
/// let name = value_at_path(&form, "author.profile.name");
/// assert_eq!(name, Some(&json!("ada")));
/// ```
pub fn value_at_path<'a>(values: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(values, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_key() {
        let form = json!({ "author": "rec_1" });
        assert_eq!(value_at_path(&form, "author"), Some(&json!("rec_1")));
    }

    #[test]
    fn test_nested_block_path() {
        let form = json!({
            "content": [
                { "author": "rec_1" },
                { "author": "rec_2", "tags": ["t1", "t2"] }
            ]
        });
        assert_eq!(
            value_at_path(&form, "content.1.author"),
            Some(&json!("rec_2"))
        );
        assert_eq!(
            value_at_path(&form, "content.1.tags"),
            Some(&json!(["t1", "t2"]))
        );
    }

    #[test]
    fn test_missing_intermediate_key_short_circuits() {
        let form = json!({ "content": { "inner": "x" } });
        assert_eq!(value_at_path(&form, "content.missing.deeper"), None);
        assert_eq!(value_at_path(&form, "nope"), None);
    }

    #[test]
    fn test_scalar_in_the_middle() {
        let form = json!({ "author": "rec_1" });
        assert_eq!(value_at_path(&form, "author.name"), None);
    }

    #[test]
    fn test_non_numeric_array_index() {
        let form = json!({ "items": ["a", "b"] });
        assert_eq!(value_at_path(&form, "items.x"), None);
        assert_eq!(value_at_path(&form, "items.5"), None);
        assert_eq!(value_at_path(&form, "items.0"), Some(&json!("a")));
    }
}

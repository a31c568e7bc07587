//! Dotted-path accessor into JSON values.
//!
//! Automation conditions and actions reference fields of an event with
//! dotted paths such as `payload.staff_user_id` or `payload.tags.0`. The
//! accessor distinguishes an *absent* field (`None`) from a field that is
//! present with a `null` value (`Some(Value::Null)`) -- condition operators
//! treat the two differently.

use serde_json::Value;

use crate::types::DbId;

/// Resolve a dotted path against a JSON value.
///
/// Each path segment descends into an object by key, or into an array when
/// the segment parses as an index. Returns `None` as soon as a segment
/// cannot be resolved.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Resolve a dotted path to a string value.
///
/// Returns `None` when the path is absent or the value is not a string.
pub fn lookup_str<'a>(root: &'a Value, path: &str) -> Option<&'a str> {
    lookup(root, path).and_then(Value::as_str)
}

/// Resolve a dotted path to a database id.
///
/// The value must be a string containing a valid UUID.
pub fn lookup_id(root: &Value, path: &str) -> Option<DbId> {
    lookup_str(root, path).and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_object_fields() {
        let value = json!({"payload": {"staff": {"name": "J. Rivera"}}});
        assert_eq!(
            lookup(&value, "payload.staff.name"),
            Some(&json!("J. Rivera"))
        );
    }

    #[test]
    fn resolves_array_indices() {
        let value = json!({"payload": {"tags": ["a", "b"]}});
        assert_eq!(lookup(&value, "payload.tags.1"), Some(&json!("b")));
        assert_eq!(lookup(&value, "payload.tags.5"), None);
    }

    #[test]
    fn absent_field_is_none_but_null_is_some() {
        let value = json!({"payload": {"note": null}});
        assert_eq!(lookup(&value, "payload.missing"), None);
        assert_eq!(lookup(&value, "payload.note"), Some(&Value::Null));
    }

    #[test]
    fn descending_into_a_scalar_is_none() {
        let value = json!({"payload": {"count": 3}});
        assert_eq!(lookup(&value, "payload.count.deeper"), None);
    }

    #[test]
    fn lookup_id_parses_uuid_strings_only() {
        let id = uuid::Uuid::new_v4();
        let value = json!({"payload": {"staff_user_id": id.to_string(), "bad": "nope"}});
        assert_eq!(lookup_id(&value, "payload.staff_user_id"), Some(id));
        assert_eq!(lookup_id(&value, "payload.bad"), None);
        assert_eq!(lookup_id(&value, "payload.missing"), None);
    }
}

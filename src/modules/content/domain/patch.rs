use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchError {
    #[error("Patch must be a JSON object")]
    NotAnObject,

    #[error("Patched record is invalid: {0}")]
    InvalidResult(String),
}

/// Full or partial update of a record.
///
/// Top-level keys replace the record's fields wholesale (arrays are not
/// merged). The `id` key is ignored so a patch can never re-key a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityPatch(Map<String, Value>);

impl EntityPatch {
    pub fn new(fields: Map<String, Value>) -> Self {
        let mut fields = fields;
        fields.remove("id");
        Self(fields)
    }

    pub fn from_value(value: Value) -> Result<Self, PatchError> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            _ => Err(PatchError::NotAnObject),
        }
    }

    pub fn apply_to<T>(&self, record: &T) -> Result<T, PatchError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut value =
            serde_json::to_value(record).map_err(|e| PatchError::InvalidResult(e.to_string()))?;

        let Value::Object(ref mut target) = value else {
            return Err(PatchError::NotAnObject);
        };

        for (key, field) in self.0.iter().filter(|(key, _)| key.as_str() != "id") {
            target.insert(key.clone(), field.clone());
        }

        serde_json::from_value(value).map_err(|e| PatchError::InvalidResult(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::demo_data;
    use crate::modules::content::domain::entities::PostStatus;
    use serde_json::json;

    #[test]
    fn partial_patch_replaces_only_given_fields() {
        let post = demo_data::blog_posts().remove(2);
        let patch = EntityPatch::from_value(json!({ "status": "published" })).unwrap();

        let patched = patch.apply_to(&post).unwrap();

        assert_eq!(patched.status, PostStatus::Published);
        assert_eq!(patched.title, post.title);
        assert_eq!(patched.tags, post.tags);
    }

    #[test]
    fn id_cannot_be_patched() {
        let post = demo_data::blog_posts().remove(0);
        let patch = EntityPatch::from_value(json!({ "id": "99", "title": "New" })).unwrap();

        let patched = patch.apply_to(&post).unwrap();

        assert_eq!(patched.id, "1");
        assert_eq!(patched.title, "New");
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "title": "New" }));
    }

    #[test]
    fn arrays_are_replaced_not_merged() {
        let exp = demo_data::experience().remove(0);
        let patch = EntityPatch::from_value(json!({ "technologies": ["Rust"] })).unwrap();

        let patched = patch.apply_to(&exp).unwrap();

        assert_eq!(patched.technologies, vec!["Rust".to_string()]);
    }

    #[test]
    fn non_object_patch_is_rejected() {
        assert_eq!(
            EntityPatch::from_value(json!(["status"])).unwrap_err(),
            PatchError::NotAnObject
        );
    }

    #[test]
    fn patch_producing_invalid_record_is_rejected() {
        let skill = demo_data::skills().remove(0);
        let patch = EntityPatch::from_value(json!({ "level": "expert" })).unwrap();

        assert!(matches!(
            patch.apply_to(&skill),
            Err(PatchError::InvalidResult(_))
        ));
    }
}

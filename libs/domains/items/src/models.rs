use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Item as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier, 24 lowercase hex characters
    #[schema(example = "65f1c0a2b3d4e5f601234567")]
    pub id: String,
    #[serde(rename = "nombre")]
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(rename = "descripcion")]
    #[schema(example = "A small widget")]
    pub description: String,
}

/// Request body for creating an item.
///
/// Unknown fields (including `id`) are ignored; the identifier is always
/// assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1), custom(function = "not_blank"))]
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    #[schema(example = "A small widget")]
    pub description: Option<String>,
}

impl CreateItem {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("nombre must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Fixed payload returned by the root liveness route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    #[schema(example = "ok")]
    pub status: String,
}

impl ServiceStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Stored shape of an item in the `items` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Documents written without a description read back as `""`
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

impl ItemDocument {
    /// Document for insertion; `_id` is left for the driver to assign
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description.unwrap_or_default(),
        }
    }

    /// Convert to the wire shape using the given identifier
    pub fn into_item(self, id: ObjectId) -> Item {
        Item {
            id: id.to_hex(),
            name: self.name,
            description: self.description,
        }
    }
}

impl TryFrom<ItemDocument> for Item {
    type Error = ItemDocument;

    /// Fails, handing the document back, when it has no `_id`
    fn try_from(doc: ItemDocument) -> Result<Self, Self::Error> {
        match doc.id {
            Some(id) => Ok(doc.into_item(id)),
            None => Err(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_create_item_wire_names() {
        let input: CreateItem =
            serde_json::from_str(r#"{"nombre": "Widget", "descripcion": "A small widget"}"#)
                .unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.description.as_deref(), Some("A small widget"));
    }

    #[test]
    fn test_create_item_optional_description() {
        let missing: CreateItem = serde_json::from_str(r#"{"nombre": "Widget"}"#).unwrap();
        assert!(missing.description.is_none());

        let null: CreateItem =
            serde_json::from_str(r#"{"nombre": "Widget", "descripcion": null}"#).unwrap();
        assert!(null.description.is_none());
    }

    #[test]
    fn test_create_item_ignores_client_id() {
        let input: CreateItem =
            serde_json::from_str(r#"{"id": "abc", "nombre": "Widget"}"#).unwrap();
        assert_eq!(input.name, "Widget");
    }

    #[test]
    fn test_create_item_missing_name_fails_to_parse() {
        assert!(serde_json::from_str::<CreateItem>(r#"{"descripcion": "x"}"#).is_err());
    }

    #[test]
    fn test_create_item_validation() {
        assert!(CreateItem::new("Widget", None).validate().is_ok());

        for name in ["", "   ", "\t\n"] {
            let errors = CreateItem::new(name, Some("desc".into()))
                .validate()
                .unwrap_err();
            assert!(errors.field_errors().contains_key("nombre"));
        }
    }

    #[test]
    fn test_item_serializes_with_wire_names() {
        let item = Item {
            id: "65f1c0a2b3d4e5f601234567".into(),
            name: "Widget".into(),
            description: String::new(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "65f1c0a2b3d4e5f601234567",
                "nombre": "Widget",
                "descripcion": ""
            })
        );
    }

    #[test]
    fn test_document_without_description_reads_empty() {
        let id = ObjectId::new();
        let stored = doc! { "_id": id, "nombre": "Widget" };
        let document: ItemDocument = bson::from_document(stored).unwrap();

        let item = Item::try_from(document).unwrap();
        assert_eq!(item.id, id.to_hex());
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_new_document_omits_id() {
        let document = ItemDocument::new(CreateItem::new("Widget", None));
        let bson_doc = bson::to_document(&document).unwrap();
        assert!(!bson_doc.contains_key("_id"));
        assert_eq!(bson_doc.get_str("descripcion").unwrap(), "");
    }
}

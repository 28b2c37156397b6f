//! Translation between the wire JSON item and the table's attribute map.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::models::Item;

pub const ID_ATTRIBUTE: &str = "id";
pub const NAME_ATTRIBUTE: &str = "name";

/// A raw table record as the store hands it back
pub type Record = HashMap<String, AttributeValue>;

/// A record that does not have the shape of an [`Item`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("record is missing attribute '{0}'")]
    MissingAttribute(&'static str),
    #[error("attribute '{0}' is not a string")]
    WrongType(&'static str),
}

/// Decode a request body into an item
pub fn decode_body(body: &[u8]) -> Result<Item, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Primary key attribute for `id`
pub fn key(id: &str) -> (String, AttributeValue) {
    (ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))
}

/// Convert an item to its table record
pub fn to_record(item: &Item) -> Record {
    HashMap::from([
        key(&item.id),
        (
            NAME_ATTRIBUTE.to_string(),
            AttributeValue::S(item.name.clone()),
        ),
    ])
}

/// Convert a table record to an item
pub fn from_record(record: &Record) -> Result<Item, DecodeError> {
    Ok(Item {
        id: get_string(record, ID_ATTRIBUTE)?,
        name: get_string(record, NAME_ATTRIBUTE)?,
    })
}

fn get_string(record: &Record, attribute: &'static str) -> Result<String, DecodeError> {
    match record.get(attribute) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(DecodeError::WrongType(attribute)),
        None => Err(DecodeError::MissingAttribute(attribute)),
    }
}

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::{FilterError, Result};

/// Name of the one attribute every record must carry.
pub const GROUP_ID_KEY: &str = "groupID";

/// Inventory group identifier (`groupID` in the static data export).
pub type GroupId = i64;

// ---------------------------------------------------------------------------
// Record – one entity's attribute bag
// ---------------------------------------------------------------------------

/// One type record.  Only `groupID` is interpreted; every attribute,
/// `groupID` included, is kept verbatim for output.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// `None` when `groupID` is an integer outside the `GroupId` range.
    group_id: Option<GroupId>,
    attributes: Map<String, Value>,
}

impl Record {
    /// Validate a raw JSON value as a record.  `id` is only used for error
    /// reporting.
    pub fn from_value(id: &str, value: Value) -> Result<Self> {
        let attributes = match value {
            Value::Object(map) => map,
            other => {
                return Err(FilterError::schema(
                    id,
                    format!("expected an object, found {}", json_kind(&other)),
                ))
            }
        };

        let group_id = match attributes.get(GROUP_ID_KEY) {
            None => return Err(FilterError::schema(id, "missing \"groupID\"")),
            Some(Value::Number(n)) if is_integer(n) => n.as_i64(),
            Some(v) => {
                return Err(FilterError::schema(
                    id,
                    format!("\"groupID\" is not an integer: {v}"),
                ))
            }
        };

        Ok(Record {
            group_id,
            attributes,
        })
    }

    pub fn group_id(&self) -> Option<GroupId> {
        self.group_id
    }

    /// Look up any attribute by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}

/// Whether `n` was written as an integer literal, of any magnitude.
///
/// Relies on `arbitrary_precision`, which keeps the literal text of every
/// number.
fn is_integer(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || !n.to_string().contains(['.', 'e', 'E'])
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Catalog – identifier → record
// ---------------------------------------------------------------------------

/// Records keyed by type identifier, in document order.
///
/// Identifiers are unique: the catalog is only ever built from a JSON object
/// (where the parser already collapses duplicate keys) or from a subset of
/// another catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<(String, Record)>,
}

impl Catalog {
    /// Validate every member of a parsed JSON object.
    pub fn from_json_object(object: Map<String, Value>) -> Result<Self> {
        let entries = object
            .into_iter()
            .map(|(id, value)| {
                let record = Record::from_value(&id, value)?;
                Ok((id, record))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Catalog { entries })
    }

    pub(crate) fn from_entries(entries: Vec<(String, Record)>) -> Self {
        Catalog { entries }
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

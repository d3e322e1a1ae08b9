use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A to-do task as exchanged over HTTP and stored in the `Tasks` table.
///
/// Field names go out in PascalCase; lowercase names are accepted on input.
/// Absent or `null` fields fall back to the nil id, an empty description
/// and `false`, leaving it to the service to reject what is invalid.
///
/// # JSON Example
///
/// ```json
/// {
///   "Id": "11111111-1111-1111-1111-111111111111",
///   "Description": "Buy milk",
///   "Completed": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TaskItem {
    #[serde(alias = "id", default, deserialize_with = "null_as_default")]
    pub id: Uuid,

    #[serde(alias = "description", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(alias = "completed", default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

impl TaskItem {
    pub fn new(id: Uuid, description: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            description: description.into(),
            completed,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

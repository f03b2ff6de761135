use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Distinguishes an absent field from an explicit `null` in patch bodies.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`: a missing
/// field stays `None`, `null` becomes `Some(None)` and a value `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

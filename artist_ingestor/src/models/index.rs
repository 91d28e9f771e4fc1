use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, Error as _},
};
use serde_json::Value;

/// The root document of the artist API, naming where each sub-resource lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIndex {
    pub artists: String,
    pub locations: String,
    pub dates: String,
    #[serde(alias = "relations")]
    pub relation: String,
}

/// A list resource as served by the API.
///
/// Artists arrive as a bare JSON array while relations, locations and dates are
/// wrapped in `{"index": [...]}`. Both shapes are accepted for every list.
/// The shape is picked before the items are decoded, so an item that fails
/// reports its own error.
#[derive(Clone, Debug)]
pub enum Listing<T> {
    Indexed { index: Vec<T> },
    Bare(Vec<T>),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Vec::<T>::deserialize(Value::Array(items))
                .map(Listing::Bare)
                .map_err(D::Error::custom),
            Value::Object(mut map) => match map.remove("index") {
                Some(index) => Vec::<T>::deserialize(index)
                    .map(|index| Listing::Indexed { index })
                    .map_err(D::Error::custom),
                None => Err(D::Error::missing_field("index")),
            },
            other => Err(D::Error::custom(format!(
                "expected a list or an object with an `index` list, got {other}"
            ))),
        }
    }
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Indexed { index } => index,
            Listing::Bare(items) => items,
        }
    }
}

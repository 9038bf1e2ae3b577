use serde::{de::DeserializeOwned, Serialize};

/// Unknown fields carried alongside the typed ones.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// A single entry of a named collection.
///
/// `id` is the only field the store interprets. An empty id means "not yet
/// assigned"; the store fills it on append.
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    /// Collection name, also the stem of the backing file.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Secondary keys that must be unique across the collection, as
    /// `(field, value)` pairs. Empty values are left out.
    fn unique_keys(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    fn file_name() -> String {
        format!("{}.json", Self::COLLECTION)
    }
}

/// Fresh opaque record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time as an RFC 3339 string, the format every timestamp field uses.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Implements [`Record`] for a struct with a `pub id: String` field.
#[macro_export]
macro_rules! impl_record {
    ($ty:ty, $collection:literal) => {
        impl $crate::record::Record for $ty {
            const COLLECTION: &'static str = $collection;
            fn id(&self) -> &str { &self.id }
            fn set_id(&mut self, id: String) { self.id = id; }
        }
    };
}

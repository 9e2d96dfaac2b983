use serde::{Deserialize, Deserializer};

pub mod couriers;
pub mod deliveries;
pub mod orders;
pub mod products;
pub mod users;

/// Deserializer for nullable patch fields. `Some(Some(val))` = set,
/// `Some(None)` = clear, `None` (field absent) = no change. Use with
/// `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Product identifier as assigned by the inventory server.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A product row as returned by `/viewProducts` and `/expiryAlerts`.
///
/// Server-owned: the client never mutates one, it only renders it for a
/// single pass and then drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    /// Kept as text; shown exactly as the server sent it.
    pub expiry_date: String,
    /// Missing on expiry-alert rows.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub supplier: String,
}

/// Payload for `/addProduct`.
///
/// The server only extracts quoted string values from the body, so numeric
/// fields go over the wire as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub product_name: String,
    /// Left out when `None`; the server then picks a category from the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(serialize_with = "as_string")]
    pub quantity: i64,
    #[serde(serialize_with = "as_string")]
    pub price: f64,
    pub manufacture_date: String,
    pub expiry_date: String,
    pub supplier: String,
}

/// Per-category totals from `/dashboardData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub quantity: i64,
    pub value: f64,
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn as_string<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: core::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

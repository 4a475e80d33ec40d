use serde::{Deserialize, Serialize};

use crate::AggregatedIngredient;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub is_custom: bool,
}

impl ShoppingEntry {
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name: name.into(),
            quantity: None,
            checked: false,
            is_custom: true,
        }
    }

    pub fn ingredient(ingredient: &AggregatedIngredient) -> Self {
        Self {
            id: ingredient_id(&ingredient.name, ingredient.quantity),
            name: ingredient.name.to_owned(),
            quantity: Some(ingredient.quantity),
            checked: false,
            is_custom: false,
        }
    }
}

/// `ingredient-{name}-{quantity}`, with an empty quantity part when it is zero.
pub fn ingredient_id(name: &str, quantity: f64) -> String {
    if quantity == 0.0 || quantity.is_nan() {
        format!("ingredient-{name}-")
    } else {
        format!("ingredient-{name}-{quantity}")
    }
}

/// Encodes each entry as its own JSON record.
pub fn encode_entries(entries: &[ShoppingEntry]) -> mealweek_shared::Result<Vec<String>> {
    entries
        .iter()
        .map(|entry| Ok(serde_json::to_string(entry)?))
        .collect()
}

pub fn decode_entries(records: &[String]) -> mealweek_shared::Result<Vec<ShoppingEntry>> {
    records
        .iter()
        .map(|record| Ok(serde_json::from_str(record)?))
        .collect()
}

/// Serde adapter storing a list as independently encoded records.
///
/// A list whose records do not decode is read back empty.
pub(crate) mod records {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

    use super::ShoppingEntry;

    pub fn serialize<S: Serializer>(
        entries: &[ShoppingEntry],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::encode_entries(entries)
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<ShoppingEntry>, D::Error> {
        let records = Vec::<String>::deserialize(deserializer)?;

        match super::decode_entries(&records) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::error!(err = %err, "malformed shopping records, list reset");

                Ok(vec![])
            }
        }
    }
}

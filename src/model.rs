use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::CocktailError;

/// Number of positional ingredient/measure pairs on a drink detail record
pub const INGREDIENT_SLOTS: usize = 15;

/// A drink as it appears in search and browse listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default, deserialize_with = "lenient_string")]
    pub thumbnail: String,
}

/// One positional ingredient slot. Either half may be unset independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

/// An ingredient name paired with its measure ("" when the drink gives none)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientWithMeasure {
    pub name: String,
    pub measure: String,
}

/// Full drink record returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDrinkDetail", into = "RawDrinkDetail")]
pub struct DrinkDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    /// "Alcoholic", "Non alcoholic", "Optional alcohol", ... as sent by the API
    pub alcoholic: Option<String>,
    pub glass: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<String>,
    pub slots: [IngredientSlot; INGREDIENT_SLOTS],
}

impl DrinkDetail {
    /// Populated ingredient slots in ascending position order.
    ///
    /// A slot is kept only when its name is a non-empty string; its measure
    /// falls back to an empty string. Unset slots leave no gap in the output.
    pub fn ingredients(&self) -> Vec<IngredientWithMeasure> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let name = slot.name.as_deref().filter(|name| !name.is_empty())?;
                Some(IngredientWithMeasure {
                    name: name.to_string(),
                    measure: slot.measure.clone().unwrap_or_default(),
                })
            })
            .collect()
    }

    pub fn is_alcoholic(&self) -> bool {
        self.alcoholic.as_deref() == Some(AlcoholicFilter::Alcoholic.as_query_value())
    }

    /// The listing fields of this record
    pub fn summary(&self) -> Drink {
        Drink {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

/// Wire shape of a drink detail record.
///
/// The positional `strIngredientN` / `strMeasureN` fields (and every other
/// field we don't model) land in `rest`.
#[derive(Serialize, Deserialize)]
struct RawDrinkDetail {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strDrinkThumb", default, deserialize_with = "lenient_string")]
    thumbnail: String,
    #[serde(rename = "strAlcoholic", default, deserialize_with = "optional_string")]
    alcoholic: Option<String>,
    #[serde(rename = "strGlass", default, deserialize_with = "optional_string")]
    glass: Option<String>,
    #[serde(rename = "strInstructions", default, deserialize_with = "optional_string")]
    instructions: Option<String>,
    #[serde(rename = "strCategory", default, deserialize_with = "optional_string")]
    category: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

fn ingredient_key(position: usize) -> String {
    format!("strIngredient{}", position)
}

fn measure_key(position: usize) -> String {
    format!("strMeasure{}", position)
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

impl From<RawDrinkDetail> for DrinkDetail {
    fn from(raw: RawDrinkDetail) -> Self {
        let slots = std::array::from_fn(|index| {
            let position = index + 1;
            IngredientSlot {
                name: string_field(&raw.rest, &ingredient_key(position)),
                measure: string_field(&raw.rest, &measure_key(position)),
            }
        });

        DrinkDetail {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail,
            alcoholic: raw.alcoholic,
            glass: raw.glass,
            instructions: raw.instructions,
            category: raw.category,
            slots,
        }
    }
}

impl From<DrinkDetail> for RawDrinkDetail {
    fn from(detail: DrinkDetail) -> Self {
        let mut rest = Map::new();
        for (index, slot) in detail.slots.into_iter().enumerate() {
            let position = index + 1;
            rest.insert(
                ingredient_key(position),
                slot.name.map(Value::String).unwrap_or(Value::Null),
            );
            rest.insert(
                measure_key(position),
                slot.measure.map(Value::String).unwrap_or(Value::Null),
            );
        }

        RawDrinkDetail {
            id: detail.id,
            name: detail.name,
            thumbnail: detail.thumbnail,
            alcoholic: detail.alcoholic,
            glass: detail.glass,
            instructions: detail.instructions,
            category: detail.category,
            rest,
        }
    }
}

/// Ingredient metadata from the ingredient search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "idIngredient")]
    pub id: String,
    #[serde(rename = "strIngredient")]
    pub name: String,
    #[serde(rename = "strDescription", default, deserialize_with = "optional_string")]
    pub description: Option<String>,
    #[serde(rename = "strType", default, deserialize_with = "optional_string")]
    pub kind: Option<String>,
}

/// Alcoholic classification accepted by the browse endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlcoholicFilter {
    Alcoholic,
    #[serde(rename = "Non_Alcoholic")]
    NonAlcoholic,
}

impl AlcoholicFilter {
    /// Value sent as the `a=` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            AlcoholicFilter::Alcoholic => "Alcoholic",
            AlcoholicFilter::NonAlcoholic => "Non_Alcoholic",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AlcoholicFilter::Alcoholic => "Alcoholic",
            AlcoholicFilter::NonAlcoholic => "Non-Alcoholic",
        }
    }
}

impl fmt::Display for AlcoholicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AlcoholicFilter {
    type Err = CocktailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "alcoholic" => Ok(AlcoholicFilter::Alcoholic),
            "non-alcoholic" | "nonalcoholic" => Ok(AlcoholicFilter::NonAlcoholic),
            other => Err(CocktailError::InvalidArgument(format!(
                "unknown alcoholic filter '{}', expected 'alcoholic' or 'non-alcoholic'",
                other
            ))),
        }
    }
}

/// Keep a field only when the API sent a string; null, numbers and other
/// shapes count as unset.
fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string(deserializer)?.unwrap_or_default())
}

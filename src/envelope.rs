//! Response envelopes and the normalization of their collection field.
//!
//! TheCocktailDB wraps every result in an object with a single collection
//! field (`drinks` or `ingredients`). "No results" arrives as `null`, as a
//! missing field, or on some endpoints as the string `"null"`. Everything is
//! folded into [`Collection::Absent`] here so that nothing downstream has to
//! look at the wire shape again.

use log::warn;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Endpoint;
use crate::model::Ingredient;

/// A normalized collection field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection<T> {
    /// The API returned a sequence (possibly empty)
    Present(Vec<T>),
    /// The API returned no sequence at all
    Absent,
}

impl<T> Collection<T> {
    /// Elements of the collection; empty when absent
    pub fn as_slice(&self) -> &[T] {
        match self {
            Collection::Present(items) => items,
            Collection::Absent => &[],
        }
    }

    /// A collection "has results" only when it is present and non-empty
    pub fn has_results(&self) -> bool {
        !self.as_slice().is_empty()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Collection::Absent)
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Collection::Present(items) => items,
            Collection::Absent => Vec::new(),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::Absent
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Collection::Present(items) => items.serialize(serializer),
            Collection::Absent => serializer.serialize_none(),
        }
    }
}

/// Collection field exactly as it appears on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCollection<T> {
    Sequence(Vec<T>),
    /// The API's stringified "no results" (`"null"`, occasionally other text)
    Text(String),
    Null,
}

impl<T> Default for RawCollection<T> {
    fn default() -> Self {
        RawCollection::Null
    }
}

/// Fold a raw collection field into its normalized form.
///
/// A string of any content becomes [`Collection::Absent`]; sequences (empty
/// or not) and `null` pass through unchanged.
pub fn normalize<T>(raw: RawCollection<T>) -> Collection<T> {
    match raw {
        RawCollection::Sequence(items) => Collection::Present(items),
        RawCollection::Text(_) | RawCollection::Null => Collection::Absent,
    }
}

/// Envelope of the drink endpoints, before normalization
#[derive(Debug, Deserialize)]
pub struct RawDrinksEnvelope<T> {
    #[serde(default = "RawCollection::default")]
    pub drinks: RawCollection<T>,
}

/// Envelope of the ingredient endpoint, before normalization
#[derive(Debug, Deserialize)]
pub struct RawIngredientsEnvelope {
    #[serde(default)]
    pub ingredients: RawCollection<Ingredient>,
}

/// Normalized envelope of the drink endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinksResponse<T> {
    pub drinks: Collection<T>,
}

/// Normalized envelope of the ingredient endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientResponse {
    pub ingredients: Collection<Ingredient>,
}

impl<T> DrinksResponse<T> {
    pub fn from_raw(raw: RawDrinksEnvelope<T>, endpoint: Endpoint) -> Self {
        if let RawCollection::Text(ref text) = raw.drinks {
            warn!(
                "{} returned string {:?} in place of a drink list; treating as no results",
                endpoint, text
            );
        }
        DrinksResponse {
            drinks: normalize(raw.drinks),
        }
    }
}

impl IngredientResponse {
    pub fn from_raw(raw: RawIngredientsEnvelope) -> Self {
        if let RawCollection::Text(ref text) = raw.ingredients {
            warn!(
                "{} returned string {:?} in place of an ingredient list; treating as no results",
                Endpoint::IngredientByName,
                text
            );
        }
        IngredientResponse {
            ingredients: normalize(raw.ingredients),
        }
    }
}

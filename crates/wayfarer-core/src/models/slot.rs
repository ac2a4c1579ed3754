//! Tri-state container for independently loadable itinerary facets.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Loading state of one optional itinerary facet.
///
/// A facet is either still being fetched (`Pending`), settled with data
/// (`Ready`), or settled without data (`Missing`). A slot can never hold
/// data and a loading flag at the same time.
///
/// Serialized forms carry only settled data: `Ready` serializes as the
/// payload itself, while `Pending` and `Missing` serialize as null (and
/// are skipped entirely on struct fields using
/// [`FacetSlot::is_not_ready`]). Deserializing an absent or null slot
/// yields `Missing`, so rehydrated documents never claim a fetch is in
/// flight that nothing is driving.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetSlot<T> {
    /// A fetch has been dispatched and has not settled yet
    Pending,

    /// The fetch succeeded and the payload is available
    Ready(T),

    /// The fetch settled without data (failed, or never dispatched)
    Missing,
}

impl<T> FacetSlot<T> {
    /// Returns true while the facet's fetch is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, FacetSlot::Pending)
    }

    /// Returns true when the facet settled with data.
    pub fn is_ready(&self) -> bool {
        matches!(self, FacetSlot::Ready(_))
    }

    /// Returns true when the facet settled without data.
    pub fn is_missing(&self) -> bool {
        matches!(self, FacetSlot::Missing)
    }

    /// Returns true once the fetch has settled, with or without data.
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// Used by serde field attributes to drop unsettled slots from
    /// durable snapshots.
    pub fn is_not_ready(&self) -> bool {
        !self.is_ready()
    }

    /// Borrows the payload when the facet settled with data.
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            FacetSlot::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Absent slots rehydrate as settled-without-data, never as in-flight.
impl<T> Default for FacetSlot<T> {
    fn default() -> Self {
        FacetSlot::Missing
    }
}

impl<T: Serialize> Serialize for FacetSlot<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FacetSlot::Ready(value) => serializer.serialize_some(value),
            FacetSlot::Pending | FacetSlot::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for FacetSlot<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => FacetSlot::Ready(value),
            None => FacetSlot::Missing,
        })
    }
}

//! Index-stable catalog of placed stars.
//!
//! `Catalog` is an arena of `Option<StarPoint>` slots. Each added star gets the
//! next slot and a [`StarId`] that stays valid for the lifetime of the catalog:
//! removing a star empties its slot instead of compacting, so ids handed to a
//! UI before a removal still refer to the same stars afterwards.
//!
//! Ids are 0-based. The 1-based number shown to people is only produced at the
//! UI boundary via [`StarId::display_number`] and the `Display` impl.

use std::fmt;

use tracing::debug;

use crate::StarPoint;

/// Stable identifier of a catalog slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(usize);

impl StarId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// 0-based slot index.
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based number for display.
    pub fn display_number(self) -> usize {
        self.0 + 1
    }

    /// Parse back a 1-based display number; `0` has no id.
    pub fn from_display_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_number())
    }
}

/// One row of the star table: values formatted to two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRow {
    pub id: StarId,
    pub ra: String,
    pub dec: String,
    /// Empty when no magnitude has been assigned.
    pub mag: String,
}

impl StarRow {
    pub fn new(id: StarId, star: &StarPoint) -> Self {
        Self {
            id,
            ra: format!("{:.2}", star.ra()),
            dec: format!("{:.2}", star.dec()),
            mag: star.mag().map(|m| format!("{:.2}", m)).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    slots: Vec<Option<StarPoint>>,
    present: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a star and return its id.
    pub fn add(&mut self, star: StarPoint) -> StarId {
        let id = StarId(self.slots.len());
        debug!(
            id = id.index(),
            ra = star.ra(),
            dec = star.dec(),
            hemisphere = star.hemisphere().label(),
            "star added"
        );
        self.slots.push(Some(star));
        self.present += 1;
        id
    }

    /// Remove a star, leaving its slot empty.
    ///
    /// Removing an id that is already empty or was never issued does nothing.
    pub fn remove(&mut self, id: StarId) -> Option<StarPoint> {
        let removed = self.slots.get_mut(id.index()).and_then(Option::take);
        if removed.is_some() {
            self.present -= 1;
            debug!(id = id.index(), "star removed");
        } else {
            debug!(id = id.index(), "remove of absent star ignored");
        }
        removed
    }

    pub fn get(&self, id: StarId) -> Option<&StarPoint> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.get(id).is_some()
    }

    /// Number of present stars.
    pub fn len(&self) -> usize {
        self.present
    }

    pub fn is_empty(&self) -> bool {
        self.present == 0
    }

    /// Number of ids ever issued, removed ones included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Ordinal for the magnitude of the next star: the number of ids already issued.
    ///
    /// Equal to the index of the id that the next [`Catalog::add`] returns.
    pub fn next_ordinal(&self) -> usize {
        self.slots.len()
    }

    /// Present stars in insertion order.
    ///
    /// The iterator is lazy and `Clone`, so a traversal can be restarted.
    pub fn list(&self) -> impl Iterator<Item = &StarPoint> + Clone + '_ {
        self.slots.iter().flatten()
    }

    /// Present stars with their ids, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (StarId, &StarPoint)> + Clone + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|star| (StarId(idx), star)))
    }

    /// Table rows for all present stars.
    pub fn rows(&self) -> Vec<StarRow> {
        self.entries()
            .map(|(id, star)| StarRow::new(id, star))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StarPoint;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<StarPoint>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}

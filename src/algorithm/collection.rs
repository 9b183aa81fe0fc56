use crate::io::error::{Result, UnshredError, ensure_same_height};
use crate::spatial::compositor::combine;
use crate::spatial::raster::Raster;
use bitvec::prelude::*;

/// Stable identifier of a strip slot in a [`StripCollection`]
///
/// Ids are the strips' positions in the original segmentation. A merged
/// strip keeps the id of its left half.
pub type StripId = usize;

/// Arena of equal-height strips with a live-slot set
///
/// Merging never shifts other strips: the left slot receives the combined
/// raster and the right slot is retired, so ids stay valid for the whole
/// reconstruction. Live ids iterate in ascending order, which is also the
/// order the strips would have in a list that is edited in place.
#[derive(Clone, Debug)]
pub struct StripCollection {
    slots: Vec<Option<Raster>>,
    live: BitVec,
    height: usize,
}

impl StripCollection {
    /// Take ownership of a non-empty set of equal-height strips
    ///
    /// # Errors
    ///
    /// Returns an error if `strips` is empty or the heights differ
    pub fn new(strips: Vec<Raster>) -> Result<Self> {
        let height = strips
            .first()
            .map(Raster::height)
            .ok_or(UnshredError::EmptyCollection {
                operation: "StripCollection::new",
            })?;
        for strip in &strips {
            ensure_same_height("StripCollection::new", height, strip.height())?;
        }

        Ok(Self {
            live: bitvec![1; strips.len()],
            slots: strips.into_iter().map(Some).collect(),
            height,
        })
    }

    /// Number of live strips
    pub fn len(&self) -> usize {
        self.live.count_ones()
    }

    /// True once every strip has been retired (never true after `new`)
    pub fn is_empty(&self) -> bool {
        self.live.not_any()
    }

    /// Shared height of every strip
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Combined width of all live strips
    pub fn total_width(&self) -> usize {
        self.iter().map(|(_, strip)| strip.width()).sum()
    }

    /// Whether `id` names a live strip
    pub fn contains(&self, id: StripId) -> bool {
        self.live.get(id).as_deref() == Some(&true)
    }

    /// Borrow a live strip
    pub fn get(&self, id: StripId) -> Option<&Raster> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Live ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = StripId> + '_ {
        self.live.iter_ones()
    }

    /// Live strips with their ids, in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (StripId, &Raster)> + '_ {
        self.ids()
            .filter_map(|id| self.get(id).map(|strip| (id, strip)))
    }

    /// Every ordered pair of distinct live ids, outer id first
    pub fn ordered_pairs(&self) -> Vec<(StripId, StripId)> {
        let ids: Vec<StripId> = self.ids().collect();
        ids.iter()
            .flat_map(|&left| {
                ids.iter()
                    .filter(move |&&right| right != left)
                    .map(move |&right| (left, right))
            })
            .collect()
    }

    /// Replace `left` with `left | right` and retire `right`
    ///
    /// # Errors
    ///
    /// Returns an error if either id is not live, the ids are equal, or the
    /// strips differ in height
    pub fn merge(&mut self, left: StripId, right: StripId) -> Result<()> {
        if left == right {
            return Err(UnshredError::InvalidStrip {
                id: right,
                reason: "a strip cannot be merged with itself",
            });
        }
        let combined = {
            let left_strip = self.live_strip(left)?;
            let right_strip = self.live_strip(right)?;
            combine(left_strip, right_strip)?
        };

        if let Some(slot) = self.slots.get_mut(left) {
            *slot = Some(combined);
        }
        if let Some(slot) = self.slots.get_mut(right) {
            *slot = None;
        }
        self.live.set(right, false);
        Ok(())
    }

    /// Hand over the final strip once exactly one remains
    ///
    /// # Errors
    ///
    /// Returns an error if more than one strip is still live
    pub fn into_single(mut self) -> Result<Raster> {
        let mut ids = self.live.iter_ones();
        match (ids.next(), ids.next()) {
            (Some(id), None) => self
                .slots
                .get_mut(id)
                .and_then(Option::take)
                .ok_or(UnshredError::InvalidStrip {
                    id,
                    reason: "live slot holds no strip",
                }),
            (Some(_), Some(extra)) => Err(UnshredError::InvalidStrip {
                id: extra,
                reason: "reconstruction has not finished",
            }),
            (None, _) => Err(UnshredError::EmptyCollection {
                operation: "StripCollection::into_single",
            }),
        }
    }

    fn live_strip(&self, id: StripId) -> Result<&Raster> {
        self.get(id)
            .filter(|_| self.contains(id))
            .ok_or(UnshredError::InvalidStrip {
                id,
                reason: "no live strip with this id",
            })
    }
}

use ahash::AHashSet;
use bytemuck::Zeroable;

use crate::{
    consts::{EmitType, MAX_MAP_WORLDLIGHTS},
    light::{WorldLight, WorldLightError, WORLDLIGHT_SIZE},
};

/// Owner ids whose lights are to be removed.
///
/// Keeps the ids in the order the caller inserted them, as the fallback
/// placeholder is stamped with the first one, while membership tests stay
/// O(1). Duplicate inserts are ignored and do not move an id.
#[derive(Debug, Default, Clone)]
pub struct ExclusionSet {
    order: Vec<i32>,
    members: AHashSet<i32>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the id was newly added.
    pub fn insert(&mut self, owner: i32) -> bool {
        let added = self.members.insert(owner);
        if added {
            self.order.push(owner);
        }
        added
    }

    pub fn contains(&self, owner: i32) -> bool {
        self.members.contains(&owner)
    }

    /// First id ever inserted.
    pub fn first(&self) -> Option<i32> {
        self.order.first().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<i32> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i32> for ExclusionSet {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for owner in iter {
            self.insert(owner);
        }
    }
}

/// Rewrites a worldlight lump, dropping every record owned by an excluded
/// entity.
///
/// Surviving records are copied into the output byte for byte, so a pass with
/// an empty set returns the input unchanged (modulo a stray partial tail,
/// which is always discarded). When the pass drops every record it emits a
/// single zeroed point light instead, stamped with the first excluded id: the
/// engine treats an empty worldlight lump as "no light data" and renders the
/// whole map fullbright.
pub fn filter_worldlights(
    lump: &[u8],
    excluded: &ExclusionSet,
) -> Result<Vec<u8>, WorldLightError> {
    let stray = lump.len() % WORLDLIGHT_SIZE;
    if stray != 0 {
        log::debug!("worldlight lump has a {stray} byte partial tail, discarding it");
    }

    let count = lump.len() / WORLDLIGHT_SIZE;
    if count > MAX_MAP_WORLDLIGHTS {
        log::warn!("worldlight lump holds {count} records, engine max is {MAX_MAP_WORLDLIGHTS}");
    }

    let mut out = Vec::with_capacity(lump.len() - stray);
    let mut dropped = 0usize;

    for raw in lump.chunks_exact(WORLDLIGHT_SIZE) {
        let light = WorldLight::from_bytes(raw)?;
        if excluded.contains(light.owner) {
            dropped += 1;
        } else {
            out.extend_from_slice(raw);
        }
    }

    log::debug!("kept {} of {count} worldlights", count - dropped);

    // An empty lump would flip the engine into fullbright, so if the pass
    // emptied it, leave one inert point light behind in place of the rest.
    if out.is_empty() && dropped > 0 {
        if let Some(owner) = excluded.first() {
            let mut blank = WorldLight::zeroed();
            blank.emit_type = EmitType::Point as i32;
            blank.owner = owner;
            out.extend_from_slice(blank.as_bytes());

            log::warn!("removed all {dropped} worldlights, emitting a blank light owned by {owner}");
        }
    }

    Ok(out)
}

pub use crate::{
    consts::{EmitType, WorldLightFlags, MAX_MAP_WORLDLIGHTS},
    filter::{filter_worldlights, ExclusionSet},
    light::{WorldLight, WorldLightError, WORLDLIGHT_SIZE},
};

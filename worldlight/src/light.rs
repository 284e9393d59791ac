use std::mem;

use flagset::FlagSet;
use glam::Vec3;
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::consts::{EmitType, WorldLightFlags};

/// Wire size of one worldlight record: 9 floats, 3 ints, 7 floats, 3 ints.
pub const WORLDLIGHT_SIZE: usize = mem::size_of::<WorldLight>();

#[derive(Debug, Error)]
pub enum WorldLightError {
    #[error("worldlight record must be 88 bytes, got {0}")]
    MalformedRecord(usize),
}

/// One entry of the worldlight lump, `dworldlight_t` in the engine headers.
///
/// The layout is fixed by the file format: little-endian, no padding, field
/// order exactly as below. Values are never validated — the engine happily
/// stores NaN attenuations and out-of-range emit types, and so do we.
// https://github.com/ValveSoftware/source-sdk-2013/blob/master/sp/src/public/bspfile.h
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WorldLight {
    pub origin: Vec3,
    /// light color scaled by brightness
    pub intensity: Vec3,
    pub normal: Vec3,
    /// visibility cluster the light sits in, -1 when outside the map
    pub cluster: i32,
    /// wire value of [`EmitType`]
    pub emit_type: i32,
    /// switchable lighting channel
    pub style: i32,
    /// spotlights only: cos of the inner cone angle
    pub stop_dot: f32,
    /// spotlights only: cos of the outer cone angle
    pub stop_dot2: f32,
    pub exponent: f32,
    /// hard cutoff distance, 0 for none
    pub radius: f32,
    pub constant_attn: f32,
    pub linear_attn: f32,
    pub quadratic_attn: f32,
    /// wire value of [`WorldLightFlags`]
    pub flags: i32,
    /// texinfo of the emitting face, surface lights only
    pub tex_info: i32,
    /// id of the entity this light was compiled from
    pub owner: i32,
}

impl WorldLight {
    /// Views an exact 88 byte slice as a record. The only failure is a wrong
    /// slice length; every bit pattern of the right size is a legal record.
    pub fn from_bytes(raw: &[u8]) -> Result<&Self, WorldLightError> {
        bytemuck::try_from_bytes(raw).map_err(|_| WorldLightError::MalformedRecord(raw.len()))
    }

    /// Canonical wire bytes, byte-exact inverse of [`Self::from_bytes`].
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn emit(&self) -> Option<EmitType> {
        EmitType::from_i32(self.emit_type)
    }

    /// Known flag bits; unknown bits are kept on the wire but not reported.
    pub fn light_flags(&self) -> FlagSet<WorldLightFlags> {
        FlagSet::new_truncated(self.flags)
    }
}

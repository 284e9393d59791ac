use flagset::flags;
use num_derive::FromPrimitive;

// upper design bound, shared by the LDR and HDR worldlight lumps
pub const MAX_MAP_WORLDLIGHTS: usize = 8192;

/// How a worldlight casts into the map.
#[derive(Copy, Clone, FromPrimitive, Debug, PartialEq, Eq)]
pub enum EmitType {
    /// 90 degree falloff, emitted by a textured face
    Surface = 0,
    /// simple point light source
    Point = 1,
    /// spotlight with penumbra
    Spotlight = 2,
    /// directional light with no falloff, sky box
    Skylight = 3,
    /// linear falloff, non-lambertian
    QuakeLight = 4,
    /// spherical light with no falloff, sky ambient
    SkyAmbient = 5,
}

flags! {
    pub enum WorldLightFlags: i32 {
        InAmbientCube = 0x1, // light was put into the per-leaf ambient cubes
        CastEntityShadows = 0x2,
    }
}

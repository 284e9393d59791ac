pub mod consts;
pub mod filter;
pub mod light;
pub mod prelude;

// https://developer.valvesoftware.com/wiki/BSP_(Source)
//
// https://github.com/ValveSoftware/source-sdk-2013/blob/master/sp/src/public/bspfile.h
//
// A compiled map stores the static lights VRAD baked into it as a flat array of
// fixed 88 byte records, one per light-emitting placement, in the worldlight
// lump (and its HDR twin). The engine walks this array at load time to light
// dynamic objects; if the array is empty it gives up and renders the map
// fullbright instead.
//
// This crate rewrites that array after compilation: records whose owning
// entity the caller has marked for exclusion are dropped, and a single inert
// placeholder is left behind whenever the rewrite would otherwise empty the
// lump. Reading the lump out of the map file, deciding which entities are
// excluded, and writing the revised array back are the caller's problem.

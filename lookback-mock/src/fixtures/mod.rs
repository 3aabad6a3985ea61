//! Static fixture payloads mirroring the shapes the live endpoint serves.

pub mod indices;
pub mod irr;

//! Re-synthesis of the needle at arbitrary rotation angles

/// Direction and perpendicular vectors for a needle angle
pub mod direction;
/// Fixed-width stroke painting along the rotated direction
pub mod stroke;

pub use stroke::StrokeSynthesizer;

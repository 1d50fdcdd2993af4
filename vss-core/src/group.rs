//! Group abstraction shared by every sharing primitive in this crate.
//!
//! The sharing, commitment and decoding machinery is generic over a
//! prime-order group; this module pins down the one capability the rest of
//! the crate needs beyond [`ark_ec::CurveGroup`]: a fixed-width canonical
//! byte encoding for scalars and points, with decoders that reject anything
//! that is not the unique encoding of a group element.
//!
//! Two instantiations are provided:
//! * [`secp256k1`]: 32-byte big-endian scalars and 64-byte uncompressed
//!   points.
//! * [`babyjubjub`]: 32-byte little-endian scalars and 32-byte compressed
//!   points.

use ark_ec::CurveGroup;

pub mod babyjubjub;
pub mod secp256k1;

/// Errors produced when decoding scalars or points from their canonical
/// byte form. These are input-data failures surfaced to the caller, never
/// panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GroupDecodeError {
    /// The scalar bytes encode an integer that is not reduced modulo the
    /// group order.
    #[error("scalar encoding is not canonical")]
    NonCanonicalScalar,
    /// The point coordinates do not satisfy the curve equation, or the
    /// point lies outside the prime-order subgroup.
    #[error("point is not on the curve or outside the prime-order subgroup")]
    NotOnCurve,
    /// The point bytes are not the canonical encoding of any group element.
    #[error("point encoding is not canonical")]
    NonCanonicalPoint,
}

/// A prime-order group with a canonical, fixed-width byte encoding for
/// scalars and points.
///
/// Encodings are bit-exact contracts: `read_*(write_*(v)) == v` for every
/// valid `v`, and `read_*` rejects every byte string that `write_*` cannot
/// produce. The group identity is a first-class value and round-trips like
/// any other point.
pub trait SharingGroup: CurveGroup {
    /// Byte width of the canonical scalar encoding.
    const SCALAR_SIZE: usize;
    /// Byte width of the canonical point encoding.
    const POINT_SIZE: usize;

    /// Writes the canonical encoding of `scalar` into `out`.
    ///
    /// # Panics
    /// Panics if `out.len() != Self::SCALAR_SIZE`.
    fn write_scalar(scalar: &Self::ScalarField, out: &mut [u8]);

    /// Parses a canonical scalar.
    ///
    /// # Errors
    /// [`GroupDecodeError::NonCanonicalScalar`] if the encoded integer is
    /// not in `[0, q)`.
    ///
    /// # Panics
    /// Panics if `bytes.len() != Self::SCALAR_SIZE`.
    fn read_scalar(bytes: &[u8]) -> Result<Self::ScalarField, GroupDecodeError>;

    /// Writes the canonical encoding of `point` into `out`.
    ///
    /// # Panics
    /// Panics if `out.len() != Self::POINT_SIZE`.
    fn write_point(point: &Self::Affine, out: &mut [u8]);

    /// Parses a canonical point, validating curve and subgroup membership.
    ///
    /// # Errors
    /// [`GroupDecodeError::NotOnCurve`] or
    /// [`GroupDecodeError::NonCanonicalPoint`] for any input that is not
    /// the unique encoding of a group element.
    ///
    /// # Panics
    /// Panics if `bytes.len() != Self::POINT_SIZE`.
    fn read_point(bytes: &[u8]) -> Result<Self::Affine, GroupDecodeError>;
}

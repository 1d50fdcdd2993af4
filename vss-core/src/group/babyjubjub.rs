//! BabyJubJub (twisted Edwards) instantiation of [`SharingGroup`].
//!
//! Scalars are 32-byte little-endian canonical integers. Points use the
//! 32-byte canonical compressed form of [`ark_serialize`], validated on
//! decode for curve and prime-order-subgroup membership.

use ark_babyjubjub::{EdwardsAffine, EdwardsProjective, Fr};
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;

use super::{GroupDecodeError, SharingGroup};

/// The BabyJubJub group in projective coordinates.
pub type Curve = EdwardsProjective;

impl SharingGroup for EdwardsProjective {
    const SCALAR_SIZE: usize = 32;
    const POINT_SIZE: usize = 32;

    fn write_scalar(scalar: &Fr, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            Self::SCALAR_SIZE,
            "scalar buffer must be exactly {} bytes",
            Self::SCALAR_SIZE
        );
        out.copy_from_slice(&scalar.into_bigint().to_bytes_le());
    }

    fn read_scalar(bytes: &[u8]) -> Result<Fr, GroupDecodeError> {
        assert_eq!(
            bytes.len(),
            Self::SCALAR_SIZE,
            "scalar buffer must be exactly {} bytes",
            Self::SCALAR_SIZE
        );
        let repr = BigUint::from_bytes_le(bytes);
        let repr = <Fr as PrimeField>::BigInt::try_from(repr)
            .map_err(|_| GroupDecodeError::NonCanonicalScalar)?;
        Fr::from_bigint(repr).ok_or(GroupDecodeError::NonCanonicalScalar)
    }

    fn write_point(point: &EdwardsAffine, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            Self::POINT_SIZE,
            "point buffer must be exactly {} bytes",
            Self::POINT_SIZE
        );
        point
            .serialize_compressed(out)
            .expect("buffer is exactly the encoded point size");
    }

    fn read_point(bytes: &[u8]) -> Result<EdwardsAffine, GroupDecodeError> {
        assert_eq!(
            bytes.len(),
            Self::POINT_SIZE,
            "point buffer must be exactly {} bytes",
            Self::POINT_SIZE
        );
        EdwardsAffine::deserialize_compressed(bytes)
            .map_err(|_| GroupDecodeError::NonCanonicalPoint)
    }
}

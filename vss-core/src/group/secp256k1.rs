//! secp256k1 instantiation of [`SharingGroup`].
//!
//! Scalars are 32-byte big-endian canonical integers. Points are 64 bytes,
//! the big-endian `x` coordinate followed by the big-endian `y` coordinate.
//! The identity encodes as 64 zero bytes; `x = 0` satisfies no secp256k1
//! curve equation, so the form is unambiguous.

use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use ark_secp256k1::{Affine, Fq, Fr, Projective};
use num_bigint::BigUint;

use super::{GroupDecodeError, SharingGroup};

/// The secp256k1 group in projective coordinates.
pub type Curve = Projective;

fn base_field_from_be(bytes: &[u8]) -> Result<Fq, GroupDecodeError> {
    let repr = BigUint::from_bytes_be(bytes);
    let repr = <Fq as PrimeField>::BigInt::try_from(repr)
        .map_err(|_| GroupDecodeError::NonCanonicalPoint)?;
    Fq::from_bigint(repr).ok_or(GroupDecodeError::NonCanonicalPoint)
}

impl SharingGroup for Projective {
    const SCALAR_SIZE: usize = 32;
    const POINT_SIZE: usize = 64;

    fn write_scalar(scalar: &Fr, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            Self::SCALAR_SIZE,
            "scalar buffer must be exactly {} bytes",
            Self::SCALAR_SIZE
        );
        out.copy_from_slice(&scalar.into_bigint().to_bytes_be());
    }

    fn read_scalar(bytes: &[u8]) -> Result<Fr, GroupDecodeError> {
        assert_eq!(
            bytes.len(),
            Self::SCALAR_SIZE,
            "scalar buffer must be exactly {} bytes",
            Self::SCALAR_SIZE
        );
        let repr = BigUint::from_bytes_be(bytes);
        let repr = <Fr as PrimeField>::BigInt::try_from(repr)
            .map_err(|_| GroupDecodeError::NonCanonicalScalar)?;
        Fr::from_bigint(repr).ok_or(GroupDecodeError::NonCanonicalScalar)
    }

    fn write_point(point: &Affine, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            Self::POINT_SIZE,
            "point buffer must be exactly {} bytes",
            Self::POINT_SIZE
        );
        if point.is_zero() {
            out.fill(0);
            return;
        }
        out[..32].copy_from_slice(&point.x.into_bigint().to_bytes_be());
        out[32..].copy_from_slice(&point.y.into_bigint().to_bytes_be());
    }

    fn read_point(bytes: &[u8]) -> Result<Affine, GroupDecodeError> {
        assert_eq!(
            bytes.len(),
            Self::POINT_SIZE,
            "point buffer must be exactly {} bytes",
            Self::POINT_SIZE
        );
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Affine::zero());
        }
        let x = base_field_from_be(&bytes[..32])?;
        let y = base_field_from_be(&bytes[32..])?;
        let point = Affine::new_unchecked(x, y);
        if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(GroupDecodeError::NotOnCurve);
        }
        Ok(point)
    }
}

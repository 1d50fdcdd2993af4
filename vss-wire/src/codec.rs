//! Encode/decode functions for the sharing types, generic over the group
//! instantiation.
//!
//! Composite encoders delegate to the scalar/point primitives of
//! [`SharingGroup`]; vector decoders run the length pre-checks of
//! [`Decoder::check_vec`] before touching any element. Polynomials charge
//! their declared capacity against the quota because that is what the
//! decode allocates.

use vss_core::SharingGroup;
use vss_core::pedersen::{Commitment, VerifiableShare};
use vss_core::poly::Poly;
use vss_core::shamir::Share;

use crate::{Decoder, Encoder, WireError};

/// Encoded width of a [`Share`]: two scalars.
pub fn share_size<G: SharingGroup>() -> usize {
    2 * G::SCALAR_SIZE
}

/// Encoded width of a [`VerifiableShare`]: three scalars.
pub fn vshare_size<G: SharingGroup>() -> usize {
    3 * G::SCALAR_SIZE
}

/// Encodes a scalar in the group's canonical form.
///
/// # Errors
/// [`WireError::BufferTooSmall`] if the buffer cannot hold it.
pub fn encode_scalar<G: SharingGroup>(
    scalar: &G::ScalarField,
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    let out = enc.put(G::SCALAR_SIZE)?;
    G::write_scalar(scalar, out);
    Ok(())
}

/// Decodes a canonical scalar.
///
/// # Errors
/// Buffer/quota errors, or [`WireError::Group`] for a non-canonical
/// encoding.
pub fn decode_scalar<G: SharingGroup>(dec: &mut Decoder<'_>) -> Result<G::ScalarField, WireError> {
    let bytes = dec.take(G::SCALAR_SIZE)?;
    Ok(G::read_scalar(bytes)?)
}

/// Encodes a point in the group's canonical form.
///
/// # Errors
/// [`WireError::BufferTooSmall`] if the buffer cannot hold it.
pub fn encode_point<G: SharingGroup>(
    point: &G::Affine,
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    let out = enc.put(G::POINT_SIZE)?;
    G::write_point(point, out);
    Ok(())
}

/// Decodes a canonical point, validating group membership.
///
/// # Errors
/// Buffer/quota errors, or [`WireError::Group`] for off-curve or
/// non-canonical input.
pub fn decode_point<G: SharingGroup>(dec: &mut Decoder<'_>) -> Result<G::Affine, WireError> {
    let bytes = dec.take(G::POINT_SIZE)?;
    Ok(G::read_point(bytes)?)
}

/// Encodes a share as index ‖ value.
///
/// # Errors
/// [`WireError::BufferTooSmall`] if the buffer cannot hold it.
pub fn encode_share<G: SharingGroup>(
    share: &Share<G::ScalarField>,
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    encode_scalar::<G>(&share.index(), enc)?;
    encode_scalar::<G>(&share.value(), enc)
}

/// Decodes a share.
///
/// # Errors
/// As [`decode_scalar`].
pub fn decode_share<G: SharingGroup>(
    dec: &mut Decoder<'_>,
) -> Result<Share<G::ScalarField>, WireError> {
    let index = decode_scalar::<G>(dec)?;
    let value = decode_scalar::<G>(dec)?;
    Ok(Share::new(index, value))
}

/// Encodes a verifiable share as share ‖ decommitment.
///
/// # Errors
/// [`WireError::BufferTooSmall`] if the buffer cannot hold it.
pub fn encode_vshare<G: SharingGroup>(
    vshare: &VerifiableShare<G::ScalarField>,
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    encode_share::<G>(&vshare.share(), enc)?;
    encode_scalar::<G>(&vshare.decommitment(), enc)
}

/// Decodes a verifiable share.
///
/// # Errors
/// As [`decode_scalar`].
pub fn decode_vshare<G: SharingGroup>(
    dec: &mut Decoder<'_>,
) -> Result<VerifiableShare<G::ScalarField>, WireError> {
    let share = decode_share::<G>(dec)?;
    let decommitment = decode_scalar::<G>(dec)?;
    Ok(VerifiableShare::new(share, decommitment))
}

/// Encodes a share vector with a `u32` length prefix.
///
/// # Errors
/// [`WireError::LengthOverflow`] for more than `u32::MAX` shares,
/// [`WireError::BufferTooSmall`] if the buffer cannot hold them.
pub fn encode_shares<G: SharingGroup>(
    shares: &[Share<G::ScalarField>],
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    let count = u32::try_from(shares.len()).map_err(|_| WireError::LengthOverflow)?;
    enc.put_u32(count)?;
    for share in shares {
        encode_share::<G>(share, enc)?;
    }
    Ok(())
}

/// Decodes a length-prefixed share vector, pre-checking the declared
/// length against buffer, quota, and overflow.
///
/// # Errors
/// Length/buffer/quota errors, or [`WireError::Group`] from an element.
pub fn decode_shares<G: SharingGroup>(
    dec: &mut Decoder<'_>,
) -> Result<Vec<Share<G::ScalarField>>, WireError> {
    let count = dec.read_u32()?;
    dec.check_vec(count, share_size::<G>())?;
    let mut shares = Vec::with_capacity(count as usize);
    for _ in 0..count {
        shares.push(decode_share::<G>(dec)?);
    }
    Ok(shares)
}

/// Encodes a verifiable-share vector with a `u32` length prefix.
///
/// # Errors
/// As [`encode_shares`].
pub fn encode_vshares<G: SharingGroup>(
    vshares: &[VerifiableShare<G::ScalarField>],
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    let count = u32::try_from(vshares.len()).map_err(|_| WireError::LengthOverflow)?;
    enc.put_u32(count)?;
    for vshare in vshares {
        encode_vshare::<G>(vshare, enc)?;
    }
    Ok(())
}

/// Decodes a length-prefixed verifiable-share vector.
///
/// # Errors
/// As [`decode_shares`].
pub fn decode_vshares<G: SharingGroup>(
    dec: &mut Decoder<'_>,
) -> Result<Vec<VerifiableShare<G::ScalarField>>, WireError> {
    let count = dec.read_u32()?;
    dec.check_vec(count, vshare_size::<G>())?;
    let mut vshares = Vec::with_capacity(count as usize);
    for _ in 0..count {
        vshares.push(decode_vshare::<G>(dec)?);
    }
    Ok(vshares)
}

/// Encodes a commitment as a length-prefixed point vector.
///
/// # Errors
/// As [`encode_shares`].
pub fn encode_commitment<G: SharingGroup>(
    commitment: &Commitment<G>,
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    let count = u32::try_from(commitment.len()).map_err(|_| WireError::LengthOverflow)?;
    enc.put_u32(count)?;
    for point in commitment.points() {
        encode_point::<G>(point, enc)?;
    }
    Ok(())
}

/// Decodes a length-prefixed commitment.
///
/// # Errors
/// [`WireError::InvalidLength`] for an empty commitment, otherwise as
/// [`decode_shares`] with point validation per element.
pub fn decode_commitment<G: SharingGroup>(dec: &mut Decoder<'_>) -> Result<Commitment<G>, WireError> {
    let count = dec.read_u32()?;
    if count == 0 {
        return Err(WireError::InvalidLength);
    }
    dec.check_vec(count, G::POINT_SIZE)?;
    let mut points = Vec::with_capacity(count as usize);
    for _ in 0..count {
        points.push(decode_point::<G>(dec)?);
    }
    Ok(Commitment::new(points))
}

/// Encodes a polynomial as length ‖ capacity ‖ scalars.
///
/// # Errors
/// As [`encode_shares`].
pub fn encode_poly<G: SharingGroup>(
    poly: &Poly<G::ScalarField>,
    enc: &mut Encoder<'_>,
) -> Result<(), WireError> {
    let len = u32::try_from(poly.coeffs().len()).map_err(|_| WireError::LengthOverflow)?;
    let cap = u32::try_from(poly.capacity()).map_err(|_| WireError::LengthOverflow)?;
    enc.put_u32(len)?;
    enc.put_u32(cap)?;
    for coeff in poly.coeffs() {
        encode_scalar::<G>(coeff, enc)?;
    }
    Ok(())
}

/// Decodes a polynomial, charging its declared capacity against the quota
/// and reasserting the trimmed-leading-zero representation.
///
/// # Errors
/// [`WireError::InvalidLength`] for a zero length or a capacity below the
/// length, otherwise as [`decode_shares`].
pub fn decode_poly<G: SharingGroup>(
    dec: &mut Decoder<'_>,
) -> Result<Poly<G::ScalarField>, WireError> {
    let len = dec.read_u32()?;
    let cap = dec.read_u32()?;
    if len == 0 || cap < len {
        return Err(WireError::InvalidLength);
    }
    dec.check_vec(len, G::SCALAR_SIZE)?;
    // the spare capacity is allocated even though no bytes back it
    let spare = (cap - len) as usize;
    dec.charge(
        spare
            .checked_mul(G::SCALAR_SIZE)
            .ok_or(WireError::LengthOverflow)?,
    )?;

    let mut coeffs = Vec::with_capacity(cap as usize);
    for _ in 0..len {
        coeffs.push(decode_scalar::<G>(dec)?);
    }
    let mut poly = Poly::from_coeffs_with_capacity(coeffs, cap as usize);
    poly.normalize();
    Ok(poly)
}

#![deny(missing_docs, clippy::unwrap_used)]
//! Quota-tracked binary codec for the `vss-core` sharing types.
//!
//! Encodings are bit-exact and fixed by the [`vss_core::SharingGroup`]
//! instantiation: scalars and points use the group's canonical byte form,
//! composite values are plain concatenations, and variable-length values
//! carry a 4-byte big-endian length prefix.
//!
//! | type | layout |
//! |---|---|
//! | scalar | `SCALAR_SIZE` canonical bytes |
//! | point | `POINT_SIZE` canonical bytes |
//! | share | index ‖ value |
//! | verifiable share | index ‖ value ‖ decommitment |
//! | share / verifiable-share / commitment vectors | `u32` length ‖ elements |
//! | polynomial | `u32` length ‖ `u32` capacity ‖ scalars |
//!
//! Decoding tracks a *remaining-byte quota* in addition to the buffer
//! cursor: every declared length is validated against the buffer, the
//! quota, and `length × element_size` overflow **before** any element is
//! parsed, so hostile length prefixes cannot drive allocations. Encoding
//! fails cleanly when the output buffer runs out of room.

use vss_core::GroupDecodeError;

mod buffer;
mod codec;

pub use buffer::{Decoder, Encoder};
pub use codec::{
    decode_commitment, decode_point, decode_poly, decode_scalar, decode_share, decode_shares,
    decode_vshare, decode_vshares, encode_commitment, encode_point, encode_poly, encode_scalar,
    encode_share, encode_shares, encode_vshare, encode_vshares, share_size, vshare_size,
};

/// Errors surfaced by the codec layer. All of these are recoverable
/// input-data failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The buffer has fewer bytes than the operation needs.
    #[error("buffer is too small")]
    BufferTooSmall,
    /// The remaining-byte quota is exhausted.
    #[error("remaining byte quota exhausted")]
    QuotaExceeded,
    /// A declared length does not fit the addressable size.
    #[error("length prefix overflows the addressable size")]
    LengthOverflow,
    /// A declared length violates a structural invariant of the decoded
    /// type (zero-length polynomial or commitment, capacity below length).
    #[error("declared length is invalid for the decoded type")]
    InvalidLength,
    /// A scalar or point failed canonical decoding.
    #[error(transparent)]
    Group(#[from] GroupDecodeError),
}

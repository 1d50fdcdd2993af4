#![deny(missing_docs, clippy::unwrap_used)]
//! Threshold secret sharing with public verifiability over prime-order
//! groups.
//!
//! This crate implements the mathematical core of a verifiable secret
//! sharing system:
//! * [`shamir`]: polynomial splitting, Lagrange opening, and a
//!   precomputed [`shamir::Reconstructor`].
//! * [`pedersen`]: Pedersen commitments, verifiable shares, their
//!   homomorphic operations, and the public validity check.
//! * [`rs`]: Reed–Solomon decoding of corrupted share vectors via a
//!   partial extended-Euclidean GCD.
//! * [`poly`], [`interpolate`], [`eea`]: the polynomial plumbing the
//!   above are built from, namely capacity-bounded dense polynomials, a
//!   precomputed Lagrange interpolator, and a step-wise extended
//!   Euclidean algorithm.
//! * [`group`]: the [`group::SharingGroup`] abstraction with secp256k1
//!   and BabyJubJub instantiations.
//!
//! Everything is generic over [`ark_ff::PrimeField`] /
//! [`ark_ec::CurveGroup`]; the two provided instantiations only pin down
//! canonical byte encodings. All randomness is drawn from caller-supplied
//! [`rand::CryptoRng`] sources.
//!
//! Stateful objects ([`shamir::Sharer`], [`shamir::Reconstructor`],
//! [`interpolate::Interpolator`], [`eea::EeaStepper`], [`rs::RsDecoder`])
//! preallocate their scratch and are meant to be reused; none of them is
//! safe for concurrent calls on a single instance. Create one per worker.

pub mod eea;
pub mod group;
pub mod interpolate;
pub mod pedersen;
pub mod poly;
pub mod rs;
pub mod shamir;

pub use group::{GroupDecodeError, SharingGroup};
pub use poly::Poly;
pub use shamir::{Share, ShareError};

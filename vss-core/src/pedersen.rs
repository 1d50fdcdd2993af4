//! Pedersen verifiable secret sharing.
//!
//! Sharing publishes one commitment `C_j = a_j·g + b_j·h` per coefficient,
//! where `f(x) = Σ a_j·x^j` is the sharing polynomial and `f'(x) = Σ b_j·x^j`
//! a fresh masking polynomial of the same degree. A share `(x, f(x))`
//! travels with its decommitment `f'(x)`; anyone holding the commitment
//! vector can then check a share against
//! `value·g + decommitment·h = Σ C_j·x^j` without learning anything about
//! the secret (the commitments are perfectly hiding over `b`, binding
//! under discrete log).
//!
//! The second generator `h` is a parameter; its discrete log with respect
//! to `g` must be unknown to any prover, otherwise binding fails.
//!
//! Commitments and verifiable shares are homomorphic in both exponents:
//! adding, scaling, or constant-shifting shares has a matching operation
//! on the commitment side that preserves validity.

use std::ops::Add;

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{PrimeField, UniformRand};
use itertools::izip;
use rand::{CryptoRng, Rng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::shamir::{Share, ShareError, Sharer, evaluate_poly};

/// A Pedersen commitment to a sharing polynomial: one group element per
/// coefficient. The length equals the sharing threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment<C: CurveGroup>(Vec<C::Affine>);

impl<C: CurveGroup> Commitment<C> {
    /// Wraps a commitment point vector.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    pub fn new(points: Vec<C::Affine>) -> Self {
        assert!(!points.is_empty(), "a commitment holds at least one point");
        Self(points)
    }

    /// The threshold this commitment was produced for.
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The commitment points, one per coefficient.
    pub fn points(&self) -> &[C::Affine] {
        &self.0
    }

    /// Evaluates `Σ C_j·x^j` by Horner's rule in the group.
    pub fn evaluate(&self, x: C::ScalarField) -> C {
        self.0
            .iter()
            .rev()
            .fold(C::zero(), |acc, c| acc * x + *c)
    }

    /// Scales every commitment point; matches [`Share::scale`] on the
    /// share side.
    pub fn scale(&self, scale: C::ScalarField) -> Self {
        let points: Vec<C> = self.0.iter().map(|p| *p * scale).collect();
        Self(C::normalize_batch(&points))
    }

    /// Adds `constant·g` into the constant-term commitment; matches
    /// [`Share::add_constant`] on the share side.
    pub fn add_constant(&self, constant: C::ScalarField) -> Self {
        let mut points = self.0.clone();
        points[0] = (C::generator() * constant + points[0]).into_affine();
        Self(points)
    }
}

impl<C: CurveGroup> Add for &Commitment<C> {
    type Output = Commitment<C>;

    /// Point-wise sum; the tail beyond the shorter commitment is copied
    /// from the longer one.
    fn add(self, rhs: Self) -> Self::Output {
        let (longer, shorter) = if self.0.len() >= rhs.0.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut points: Vec<C> = longer.0.iter().map(|p| p.into_group()).collect();
        for (p, q) in izip!(points.iter_mut(), shorter.0.iter()) {
            *p += *q;
        }
        Commitment(C::normalize_batch(&points))
    }
}

/// A share bundled with its decommitment `f'(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct VerifiableShare<F: PrimeField> {
    share: Share<F>,
    decommitment: F,
}

impl<F: PrimeField> VerifiableShare<F> {
    /// Bundles a share with its decommitment.
    pub fn new(share: Share<F>, decommitment: F) -> Self {
        Self {
            share,
            decommitment,
        }
    }

    /// The underlying share.
    pub fn share(&self) -> Share<F> {
        self.share
    }

    /// The masking polynomial's evaluation at this share's index.
    pub fn decommitment(&self) -> F {
        self.decommitment
    }

    /// Scales share and decommitment; stays valid against the
    /// [`Commitment::scale`]d commitment.
    pub fn scale(&self, scale: F) -> Self {
        Self::new(self.share.scale(scale), self.decommitment * scale)
    }

    /// Adds a constant to the share value only; stays valid against the
    /// [`Commitment::add_constant`]-shifted commitment. The decommitment
    /// is unchanged because the masking polynomial did not move.
    pub fn add_constant(&self, constant: F) -> Self {
        Self::new(self.share.add_constant(constant), self.decommitment)
    }
}

impl<F: PrimeField> Add for VerifiableShare<F> {
    type Output = VerifiableShare<F>;

    /// Adds shares and decommitments point-wise; stays valid against the
    /// summed commitment.
    ///
    /// # Panics
    /// Panics if the share indices differ.
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.share + rhs.share, self.decommitment + rhs.decommitment)
    }
}

/// Checks a verifiable share against a commitment vector:
/// `value·g + decommitment·h = Σ C_j·x^j`.
pub fn is_valid<C: CurveGroup>(
    h: C::Affine,
    commitment: &Commitment<C>,
    vshare: &VerifiableShare<C::ScalarField>,
) -> bool {
    let share = vshare.share();
    let check = C::generator() * share.value() + h * vshare.decommitment();
    check == commitment.evaluate(share.index())
}

/// The dealing side of verifiable sharing.
///
/// Wraps a [`Sharer`] and owns the masking-polynomial scratch; both are
/// wiped on drop. One instance per worker.
#[derive(ZeroizeOnDrop)]
pub struct VsSharer<C: CurveGroup>
where
    C::ScalarField: Zeroize,
{
    sharer: Sharer<C::ScalarField>,
    masking: Vec<C::ScalarField>,
    plain: Vec<Share<C::ScalarField>>,
}

impl<C: CurveGroup> VsSharer<C>
where
    C::ScalarField: Zeroize,
{
    /// Creates a sharer with scratch preallocated for `threshold_hint`
    /// coefficients.
    pub fn new(threshold_hint: usize) -> Self {
        Self {
            sharer: Sharer::new(threshold_hint),
            masking: Vec::with_capacity(threshold_hint),
            plain: Vec::new(),
        }
    }

    /// Splits `secret` into verifiable shares with threshold `k` and
    /// returns the public commitment vector of length `k`.
    ///
    /// Runs the plain sharing for `f`, draws a fresh masking polynomial
    /// `f'` of the same degree (with a fresh random constant term), commits
    /// coefficient-wise to both, and attaches `f'(x_i)` to each share.
    ///
    /// # Errors
    /// [`ShareError::ThresholdTooLarge`] if `k` exceeds the index count.
    ///
    /// # Panics
    /// Panics if `k` is zero or any index is zero, as in
    /// [`Sharer::share_secret`].
    pub fn vshare_secret<R: Rng + CryptoRng>(
        &mut self,
        dst: &mut Vec<VerifiableShare<C::ScalarField>>,
        indices: &[C::ScalarField],
        h: C::Affine,
        secret: C::ScalarField,
        k: usize,
        rng: &mut R,
    ) -> Result<Commitment<C>, ShareError> {
        let coeffs = self
            .sharer
            .share_secret_and_coeffs(&mut self.plain, indices, secret, k, rng)?;

        self.masking.zeroize();
        self.masking.clear();
        for _ in 0..k {
            self.masking.push(C::ScalarField::rand(rng));
        }

        let points: Vec<C> = izip!(coeffs, &self.masking)
            .map(|(a, b)| C::generator() * *a + h * *b)
            .collect();
        let commitment = Commitment::new(C::normalize_batch(&points));

        dst.clear();
        dst.extend(self.plain.iter().map(|share| {
            VerifiableShare::new(*share, evaluate_poly(&self.masking, share.index()))
        }));
        Ok(commitment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_babyjubjub::{EdwardsProjective, Fr};
    use ark_ec::AffineRepr;
    use ark_ff::UniformRand;

    type Curve = EdwardsProjective;
    type Affine = ark_babyjubjub::EdwardsAffine;

    fn random_h<R: Rng + CryptoRng>(rng: &mut R) -> Affine {
        (Affine::generator() * Fr::rand(rng)).into_affine()
    }

    fn vshare<R: Rng + CryptoRng>(
        secret: Fr,
        n: usize,
        k: usize,
        h: Affine,
        rng: &mut R,
    ) -> (Vec<VerifiableShare<Fr>>, Commitment<Curve>) {
        let indices: Vec<Fr> = (1..=n as u64).map(Fr::from).collect();
        let mut sharer = VsSharer::new(k);
        let mut shares = Vec::new();
        let commitment = sharer
            .vshare_secret(&mut shares, &indices, h, secret, k, rng)
            .expect("threshold fits the index count");
        (shares, commitment)
    }

    #[test]
    fn every_dealt_share_verifies() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let (shares, commitment) = vshare(Fr::rand(&mut rng), 20, 10, h, &mut rng);

        assert_eq!(commitment.len(), 10);
        for share in &shares {
            assert!(is_valid(h, &commitment, share));
        }
    }

    #[test]
    fn tampered_shares_fail_verification() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let (shares, commitment) = vshare(Fr::rand(&mut rng), 20, 10, h, &mut rng);

        for (i, share) in shares.iter().enumerate() {
            let bad_value =
                VerifiableShare::new(Share::new(share.share().index(), Fr::rand(&mut rng)),
                    share.decommitment());
            assert!(!is_valid(h, &commitment, &bad_value));

            let bad_decommitment =
                VerifiableShare::new(share.share(), Fr::rand(&mut rng));
            assert!(!is_valid(h, &commitment, &bad_decommitment));

            // swap the index onto another share's evaluation point
            let other = shares[(i + 1) % shares.len()];
            let bad_index = VerifiableShare::new(
                Share::new(other.share().index(), share.share().value()),
                share.decommitment(),
            );
            assert!(!is_valid(h, &commitment, &bad_index));
        }
    }

    #[test]
    fn replacing_one_share_flags_exactly_that_share() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let (mut shares, commitment) = vshare(Fr::rand(&mut rng), 20, 10, h, &mut rng);

        shares[7] = VerifiableShare::new(
            Share::new(shares[7].share().index(), Fr::rand(&mut rng)),
            shares[7].decommitment(),
        );
        for (i, share) in shares.iter().enumerate() {
            assert_eq!(is_valid(h, &commitment, share), i != 7);
        }
    }

    #[test]
    fn summed_commitments_verify_summed_shares() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let (shares_a, comm_a) = vshare(Fr::rand(&mut rng), 8, 4, h, &mut rng);
        let (shares_b, comm_b) = vshare(Fr::rand(&mut rng), 8, 4, h, &mut rng);

        let summed = &comm_a + &comm_b;
        for (a, b) in izip!(&shares_a, &shares_b) {
            assert!(is_valid(h, &summed, &(*a + *b)));
        }
    }

    #[test]
    fn unequal_length_commitments_add_with_tail_copy() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let (_, comm_a) = vshare(Fr::rand(&mut rng), 8, 3, h, &mut rng);
        let (_, comm_b) = vshare(Fr::rand(&mut rng), 8, 5, h, &mut rng);

        let summed = &comm_a + &comm_b;
        assert_eq!(summed.len(), 5);
        assert_eq!(summed.points()[3..], comm_b.points()[3..]);
        // commutes
        assert_eq!(summed, &comm_b + &comm_a);
    }

    #[test]
    fn scaled_commitments_verify_scaled_shares() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let (shares, commitment) = vshare(Fr::rand(&mut rng), 8, 4, h, &mut rng);

        let scale = Fr::rand(&mut rng);
        let scaled_commitment = commitment.scale(scale);
        for share in &shares {
            assert!(is_valid(h, &scaled_commitment, &share.scale(scale)));
        }
    }

    #[test]
    fn constant_shift_preserves_validity() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let (shares, commitment) = vshare(Fr::rand(&mut rng), 8, 4, h, &mut rng);

        let constant = Fr::rand(&mut rng);
        let shifted_commitment = commitment.add_constant(constant);
        for share in &shares {
            assert!(is_valid(h, &shifted_commitment, &share.add_constant(constant)));
            // the unshifted share no longer matches
            assert!(!is_valid(h, &shifted_commitment, share));
        }
    }

    #[test]
    fn shares_still_open_the_secret() {
        let mut rng = rand::thread_rng();
        let h = random_h(&mut rng);
        let secret = Fr::rand(&mut rng);
        let (shares, _) = vshare(secret, 8, 4, h, &mut rng);

        let plain: Vec<Share<Fr>> = shares.iter().map(|s| s.share()).collect();
        assert_eq!(
            crate::shamir::test_utils::open_random_subset(&plain, 4, &mut rng),
            secret
        );
    }
}

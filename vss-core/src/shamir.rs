//! Shamir secret sharing: splitting, opening, and precomputed
//! reconstruction.
//!
//! A secret `s` is embedded as the constant term of a random polynomial
//! `f` of degree `k − 1`; the share at index `x` is `(x, f(x))`, and any
//! `k` shares recover `s` by Lagrange interpolation at zero. Shares at the
//! same index are homomorphic: adding them shares the sum of the secrets,
//! scaling them shares the scaled secret.
//!
//! This module provides:
//! - [`Share`] with its homomorphic operations.
//! - [`Sharer`], the splitting side, with zeroized coefficient scratch.
//! - [`open`] / [`open_points`], plain Lagrange reconstruction of a scalar
//!   secret or of a secret in the exponent.
//! - [`Reconstructor`], an opener with precomputed index tables for the
//!   checked, repeated-open case.
//!
//! Sharing polynomials are secret state; the scratch holding them does not
//! implement `Debug` and is zeroized on drop.

use std::ops::Add;

use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::{PrimeField, batch_inversion};
use itertools::izip;
use rand::{CryptoRng, Rng};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Errors returned by sharing and reconstruction operations.
///
/// These cover input-data failures only; contract violations (sharing at
/// index zero, adding shares at different indices, capacity overruns)
/// panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// The requested threshold exceeds the number of share indices.
    #[error("threshold {k} exceeds the number of indices {n}")]
    ThresholdTooLarge {
        /// requested threshold
        k: usize,
        /// available indices
        n: usize,
    },
    /// Fewer shares were supplied than the threshold requires.
    #[error("expected at least {need} shares, got {got}")]
    NotEnoughShares {
        /// supplied shares
        got: usize,
        /// required threshold
        need: usize,
    },
    /// A share's index is not part of the reconstructor's index set.
    #[error("share index is not part of the index set")]
    UnknownIndex,
    /// Two supplied shares carry the same index.
    #[error("two shares carry the same index")]
    DuplicateIndex,
    /// More shares were supplied than the index set holds.
    #[error("got {got} shares for an index set of size {max}")]
    TooManyShares {
        /// supplied shares
        got: usize,
        /// size of the index set
        max: usize,
    },
}

/// One evaluation `(x, f(x))` of a sharing polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Share<F: PrimeField> {
    index: F,
    value: F,
}

impl<F: PrimeField> Share<F> {
    /// Wraps an index/value pair.
    pub fn new(index: F, value: F) -> Self {
        Self { index, value }
    }

    /// The evaluation point.
    pub fn index(&self) -> F {
        self.index
    }

    /// The polynomial evaluation at [`Share::index`].
    pub fn value(&self) -> F {
        self.value
    }

    /// Scales the share; the result shares `scale · secret`.
    pub fn scale(&self, scale: F) -> Self {
        Self::new(self.index, self.value * scale)
    }

    /// Adds a constant; the result shares `secret + constant`.
    pub fn add_constant(&self, constant: F) -> Self {
        Self::new(self.index, self.value + constant)
    }
}

impl<F: PrimeField> Add for Share<F> {
    type Output = Share<F>;

    /// Adds two shares of the same evaluation point; the result shares the
    /// sum of the two secrets.
    ///
    /// # Panics
    /// Panics if the indices differ. The call site is expected to enforce
    /// this.
    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.index, rhs.index,
            "shares must sit at the same evaluation point"
        );
        Self::new(self.index, self.value + rhs.value)
    }
}

/// Evaluates `coeffs[0] + coeffs[1]·x + ...` by Horner's rule.
pub fn evaluate_poly<F: PrimeField>(coeffs: &[F], x: F) -> F {
    coeffs.iter().rev().fold(F::zero(), |acc, c| acc * x + *c)
}

/// Computes the Lagrange coefficients `Π_{j≠i} x_j/(x_j − x_i)` that
/// reconstruct `f(0)` from evaluations at `indices`.
///
/// # Panics
/// Panics if the indices are not distinct.
pub fn lagrange_coefficients_at_zero<F: PrimeField>(indices: &[F]) -> Vec<F> {
    let mut denominators: Vec<F> = indices
        .iter()
        .enumerate()
        .map(|(i, xi)| {
            let d = indices
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(F::one(), |acc, (_, xj)| acc * (*xj - *xi));
            assert!(!d.is_zero(), "indices must be distinct");
            d
        })
        .collect();
    batch_inversion(&mut denominators);

    indices
        .iter()
        .enumerate()
        .zip(&denominators)
        .map(|((i, _), d_inv)| {
            let numerator = indices
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(F::one(), |acc, (_, xj)| acc * *xj);
            numerator * *d_inv
        })
        .collect()
}

/// The Lagrange coefficient of `index` within `indices`, at zero.
///
/// # Panics
/// Panics if `index` is not part of `indices` or on duplicate indices.
pub fn single_lagrange_at_zero<F: PrimeField>(index: F, indices: &[F]) -> F {
    assert!(
        indices.contains(&index),
        "index must be part of the index set"
    );
    let mut numerator = F::one();
    let mut denominator = F::one();
    for &xj in indices {
        if xj != index {
            numerator *= xj;
            denominator *= xj - index;
        }
    }
    numerator * denominator.inverse().expect("indices are distinct")
}

/// Reconstructs the secret from `shares` by Lagrange interpolation at zero.
///
/// Preconditions (not checked): the share indices are distinct and
/// non-zero, at least `k` shares of the original sharing are present, and
/// the values are honest evaluations. Use [`Reconstructor`] for the
/// checked path.
pub fn open<F: PrimeField>(shares: &[Share<F>]) -> F {
    let mut secret = F::zero();
    for (i, si) in shares.iter().enumerate() {
        let mut numerator = F::one();
        let mut denominator = F::one();
        for (j, sj) in shares.iter().enumerate() {
            if i != j {
                numerator *= sj.index;
                denominator *= sj.index - si.index;
            }
        }
        secret += si.value * numerator * denominator.inverse().expect("indices are distinct");
    }
    secret
}

/// Reconstructs a secret in the exponent: given points `f(x_i)·g` at the
/// supplied indices, returns `f(0)·g` via a variable-base MSM with the
/// Lagrange coefficients.
///
/// Same preconditions as [`open`].
///
/// # Panics
/// Panics if `points` and `indices` differ in length.
pub fn open_points<C>(points: &[C::MulBase], indices: &[C::ScalarField]) -> C::Affine
where
    C: CurveGroup + VariableBaseMSM,
{
    assert_eq!(points.len(), indices.len(), "one point per index");
    let lagrange = lagrange_coefficients_at_zero(indices);
    C::msm_unchecked(points, &lagrange).into_affine()
}

/// The splitting side of the scheme.
///
/// Owns the coefficient scratch of the most recent sharing polynomial so
/// repeated sharings do not allocate; the scratch is wiped on drop and at
/// the start of every sharing. One instance per worker.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sharer<F: PrimeField + Zeroize> {
    coeffs: Vec<F>,
}

impl<F: PrimeField + Zeroize> Sharer<F> {
    /// Creates a sharer with scratch preallocated for `threshold_hint`
    /// coefficients.
    pub fn new(threshold_hint: usize) -> Self {
        Self {
            coeffs: Vec::with_capacity(threshold_hint),
        }
    }

    /// Splits `secret` into one share per index with threshold `k`.
    ///
    /// Picks `k − 1` uniform coefficients above the secret constant term
    /// and writes `(x_i, f(x_i))` into `dst` (cleared first).
    ///
    /// # Errors
    /// [`ShareError::ThresholdTooLarge`] if `k` exceeds the index count.
    ///
    /// # Panics
    /// Panics if `k` is zero or any index is zero; both are contract
    /// violations at the call site.
    pub fn share_secret<R: Rng + CryptoRng>(
        &mut self,
        dst: &mut Vec<Share<F>>,
        indices: &[F],
        secret: F,
        k: usize,
        rng: &mut R,
    ) -> Result<(), ShareError> {
        self.share_secret_and_coeffs(dst, indices, secret, k, rng)
            .map(|_| ())
    }

    /// Like [`Sharer::share_secret`], additionally exposing the coefficient
    /// vector of the sharing polynomial. The verifiable-sharing layer
    /// commits to these coefficients.
    ///
    /// The returned slice borrows the sharer's scratch and is overwritten
    /// by the next sharing.
    ///
    /// # Errors
    /// [`ShareError::ThresholdTooLarge`] if `k` exceeds the index count.
    ///
    /// # Panics
    /// Panics if `k` is zero or any index is zero.
    pub fn share_secret_and_coeffs<R: Rng + CryptoRng>(
        &mut self,
        dst: &mut Vec<Share<F>>,
        indices: &[F],
        secret: F,
        k: usize,
        rng: &mut R,
    ) -> Result<&[F], ShareError> {
        assert!(k >= 1, "threshold must be at least one");
        let n = indices.len();
        if k > n {
            return Err(ShareError::ThresholdTooLarge { k, n });
        }
        for x in indices {
            assert!(
                !x.is_zero(),
                "sharing at index zero would hand out the secret"
            );
        }
        trace!(n, k, "sharing secret");

        self.coeffs.zeroize();
        self.coeffs.clear();
        self.coeffs.push(secret);
        for _ in 1..k {
            self.coeffs.push(F::rand(rng));
        }

        dst.clear();
        dst.extend(
            indices
                .iter()
                .map(|&x| Share::new(x, evaluate_poly(&self.coeffs, x))),
        );
        Ok(&self.coeffs)
    }
}

/// Lagrange opener with precomputed tables for a fixed index set.
///
/// For each position `i` the constructor precomputes
/// `full_prod_i = Π_{j≠i} x_j/(x_j − x_i)` (the Lagrange coefficient over
/// the *full* index set) and `x_i^{-1}`. Opening a subset then only
/// multiplies in the correction factors of the absent positions, keeping
/// every inversion out of the per-open path.
///
/// Holds position scratch; not safe for concurrent opens on one instance.
#[derive(Debug, Clone)]
pub struct Reconstructor<F: PrimeField> {
    indices: Vec<F>,
    full_prod: Vec<F>,
    index_inv: Vec<F>,
    positions: Vec<usize>,
    present: Vec<bool>,
}

impl<F: PrimeField> Reconstructor<F> {
    /// Precomputes the opening tables for `indices` (copied).
    ///
    /// # Panics
    /// Panics if `indices` is empty, contains zero, or contains
    /// duplicates.
    pub fn new(indices: &[F]) -> Self {
        let n = indices.len();
        assert!(n >= 1, "index set must be non-empty");
        for (i, xi) in indices.iter().enumerate() {
            assert!(!xi.is_zero(), "index zero cannot carry a share");
            for xj in &indices[..i] {
                assert!(xi != xj, "indices must be distinct");
            }
        }

        let mut denominators: Vec<F> = (0..n)
            .map(|i| {
                indices
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .fold(F::one(), |acc, (_, xj)| acc * (*xj - indices[i]))
            })
            .collect();
        batch_inversion(&mut denominators);
        let full_prod = (0..n)
            .map(|i| {
                let numerator = indices
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .fold(F::one(), |acc, (_, xj)| acc * *xj);
                numerator * denominators[i]
            })
            .collect();

        let mut index_inv = indices.to_vec();
        batch_inversion(&mut index_inv);

        Self {
            indices: indices.to_vec(),
            full_prod,
            index_inv,
            positions: Vec::with_capacity(n),
            present: vec![false; n],
        }
    }

    /// The index set this reconstructor was built for.
    pub fn indices(&self) -> &[F] {
        &self.indices
    }

    /// Reconstructs the secret from a subset of the shares.
    ///
    /// The full-set Lagrange coefficient of each supplied share is
    /// corrected by `Π_{j absent} (x_j − x_i)·x_j^{-1}`, so no inversion
    /// happens per open.
    ///
    /// # Errors
    /// [`ShareError::TooManyShares`], [`ShareError::UnknownIndex`] or
    /// [`ShareError::DuplicateIndex`] on malformed input. Supplying fewer
    /// than threshold-many shares is *not* detected here; see
    /// [`Reconstructor::checked_open`].
    pub fn open(&mut self, shares: &[Share<F>]) -> Result<F, ShareError> {
        let n = self.indices.len();
        if shares.len() > n {
            return Err(ShareError::TooManyShares {
                got: shares.len(),
                max: n,
            });
        }

        self.positions.clear();
        self.present.iter_mut().for_each(|p| *p = false);
        for share in shares {
            let pos = self
                .indices
                .iter()
                .position(|x| *x == share.index)
                .ok_or(ShareError::UnknownIndex)?;
            if self.present[pos] {
                return Err(ShareError::DuplicateIndex);
            }
            self.present[pos] = true;
            self.positions.push(pos);
        }

        let mut secret = F::zero();
        for (share, &pos) in izip!(shares, &self.positions) {
            let xi = self.indices[pos];
            let mut term = share.value * self.full_prod[pos];
            for (j, taken) in self.present.iter().enumerate() {
                if !*taken {
                    term *= (self.indices[j] - xi) * self.index_inv[j];
                }
            }
            secret += term;
        }
        Ok(secret)
    }

    /// Like [`Reconstructor::open`], but first rejects fewer than `k`
    /// shares.
    ///
    /// # Errors
    /// [`ShareError::NotEnoughShares`] below the threshold, otherwise as
    /// [`Reconstructor::open`].
    pub fn checked_open(&mut self, shares: &[Share<F>], k: usize) -> Result<F, ShareError> {
        if shares.len() < k {
            return Err(ShareError::NotEnoughShares {
                got: shares.len(),
                need: k,
            });
        }
        self.open(shares)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use ark_babyjubjub::{EdwardsProjective, Fr};
    use ark_ec::AffineRepr;
    use ark_ff::{UniformRand, Zero};
    use itertools::Itertools;

    type Affine = ark_babyjubjub::EdwardsAffine;

    #[test]
    fn every_three_subset_opens_the_secret() {
        let mut rng = rand::thread_rng();
        let secret = Fr::from(42u64);
        let shares = test_utils::share_at_small_indices(secret, 5, 3, &mut rng);

        assert_eq!(open(&shares[..3]), secret);
        for subset in shares.iter().copied().combinations(3) {
            assert_eq!(open(&subset), secret);
        }
        // more than threshold-many shares also work
        assert_eq!(open(&shares), secret);
    }

    #[test]
    fn share_addition_opens_the_sum() {
        let mut rng = rand::thread_rng();
        let (a, b) = (Fr::rand(&mut rng), Fr::rand(&mut rng));
        let shares_a = test_utils::share_at_small_indices(a, 5, 3, &mut rng);
        let shares_b = test_utils::share_at_small_indices(b, 5, 3, &mut rng);

        let sums: Vec<Share<Fr>> = izip!(&shares_a, &shares_b)
            .map(|(x, y)| *x + *y)
            .collect();
        assert_eq!(test_utils::open_random_subset(&sums, 3, &mut rng), a + b);
    }

    #[test]
    fn share_scaling_opens_the_scaled_secret() {
        let mut rng = rand::thread_rng();
        let secret = Fr::rand(&mut rng);
        let shares = test_utils::share_at_small_indices(secret, 5, 3, &mut rng);

        let seven = Fr::from(7u64);
        let scaled: Vec<Share<Fr>> = shares.iter().map(|s| s.scale(seven)).collect();
        assert_eq!(
            test_utils::open_random_subset(&scaled, 3, &mut rng),
            secret * seven
        );
    }

    #[test]
    fn constant_offset_opens_the_shifted_secret() {
        let mut rng = rand::thread_rng();
        let secret = Fr::rand(&mut rng);
        let offset = Fr::rand(&mut rng);
        let shares = test_utils::share_at_small_indices(secret, 5, 3, &mut rng);

        let shifted: Vec<Share<Fr>> = shares.iter().map(|s| s.add_constant(offset)).collect();
        assert_eq!(
            test_utils::open_random_subset(&shifted, 3, &mut rng),
            secret + offset
        );
    }

    #[test]
    fn threshold_above_index_count_is_rejected() {
        let mut rng = rand::thread_rng();
        let indices: Vec<Fr> = (1u64..=4).map(Fr::from).collect();
        let mut sharer = Sharer::new(5);
        let mut shares = Vec::new();
        let result = sharer.share_secret(&mut shares, &indices, Fr::rand(&mut rng), 5, &mut rng);
        assert_eq!(result, Err(ShareError::ThresholdTooLarge { k: 5, n: 4 }));
    }

    #[test]
    #[should_panic(expected = "index zero")]
    fn sharing_at_index_zero_panics() {
        let mut rng = rand::thread_rng();
        let indices = [Fr::zero(), Fr::from(1u64)];
        let mut sharer = Sharer::new(2);
        let mut shares = Vec::new();
        let _ = sharer.share_secret(&mut shares, &indices, Fr::from(3u64), 2, &mut rng);
    }

    #[test]
    #[should_panic(expected = "same evaluation point")]
    fn adding_shares_at_different_indices_panics() {
        let a = Share::new(Fr::from(1u64), Fr::from(10u64));
        let b = Share::new(Fr::from(2u64), Fr::from(20u64));
        let _ = a + b;
    }

    #[test]
    fn reconstructor_matches_plain_open() {
        let mut rng = rand::thread_rng();
        let secret = Fr::rand(&mut rng);
        let shares = test_utils::share_at_small_indices(secret, 7, 4, &mut rng);
        let indices: Vec<Fr> = shares.iter().map(|s| s.index()).collect();
        let mut reconstructor = Reconstructor::new(&indices);

        for subset in shares.iter().copied().combinations(4) {
            assert_eq!(reconstructor.open(&subset), Ok(secret));
            assert_eq!(open(&subset), secret);
        }
        assert_eq!(reconstructor.open(&shares), Ok(secret));
    }

    #[test]
    fn reconstructor_rejects_malformed_input() {
        let mut rng = rand::thread_rng();
        let secret = Fr::rand(&mut rng);
        let mut shares = test_utils::share_at_small_indices(secret, 5, 3, &mut rng);
        let indices: Vec<Fr> = shares.iter().map(|s| s.index()).collect();
        let mut reconstructor = Reconstructor::new(&indices);

        let foreign = Share::new(Fr::from(99u64), Fr::rand(&mut rng));
        assert_eq!(
            reconstructor.open(&[shares[0], foreign]),
            Err(ShareError::UnknownIndex)
        );

        assert_eq!(
            reconstructor.open(&[shares[0], shares[1], shares[0]]),
            Err(ShareError::DuplicateIndex)
        );

        shares.push(shares[0]);
        assert_eq!(
            reconstructor.open(&shares),
            Err(ShareError::TooManyShares { got: 6, max: 5 })
        );
        shares.pop();

        assert_eq!(
            reconstructor.checked_open(&shares[..2], 3),
            Err(ShareError::NotEnoughShares { got: 2, need: 3 })
        );
        assert_eq!(reconstructor.checked_open(&shares[..3], 3), Ok(secret));
    }

    #[test]
    fn point_shares_open_the_public_key() {
        let mut rng = rand::thread_rng();
        let x = Fr::rand(&mut rng);
        let shares = test_utils::share_at_small_indices(x, 6, 3, &mut rng);

        let public_key = (Affine::generator() * x).into_affine();
        let taken = &shares[1..4];
        let point_shares: Vec<Affine> = taken
            .iter()
            .map(|s| (Affine::generator() * s.value()).into_affine())
            .collect();
        let indices: Vec<Fr> = taken.iter().map(|s| s.index()).collect();

        assert_eq!(
            open_points::<EdwardsProjective>(&point_shares, &indices),
            public_key
        );
    }

    #[test]
    fn sharing_is_deterministic_under_a_seeded_rng() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha12Rng;

        let indices: Vec<Fr> = (1u64..=6).map(Fr::from).collect();
        let secret = Fr::from(1234u64);
        let mut sharer = Sharer::new(3);

        let mut shares_a = Vec::new();
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        sharer
            .share_secret(&mut shares_a, &indices, secret, 3, &mut rng)
            .expect("threshold fits");

        let mut shares_b = Vec::new();
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        sharer
            .share_secret(&mut shares_b, &indices, secret, 3, &mut rng)
            .expect("threshold fits");
        assert_eq!(shares_a, shares_b);

        // a different seed draws different blinding coefficients
        let mut shares_c = Vec::new();
        let mut rng = ChaCha12Rng::seed_from_u64(8);
        sharer
            .share_secret(&mut shares_c, &indices, secret, 3, &mut rng)
            .expect("threshold fits");
        assert_ne!(shares_a, shares_c);
        assert_eq!(open(&shares_c[..3]), secret);
    }

    #[test]
    fn lagrange_helpers_agree() {
        let mut rng = rand::thread_rng();
        let indices: Vec<Fr> = (0..6).map(|_| Fr::rand(&mut rng)).collect();
        let coeffs = lagrange_coefficients_at_zero(&indices);
        for (i, &x) in indices.iter().enumerate() {
            assert_eq!(single_lagrange_at_zero(x, &indices), coeffs[i]);
        }
        // the coefficients reconstruct the constant term of any polynomial
        let poly: Vec<Fr> = (0..6).map(|_| Fr::rand(&mut rng)).collect();
        let recovered = izip!(&indices, &coeffs).fold(Fr::zero(), |acc, (x, c)| {
            acc + evaluate_poly(&poly, *x) * *c
        });
        assert_eq!(recovered, poly[0]);
    }
}

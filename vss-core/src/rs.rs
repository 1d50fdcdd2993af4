//! Reed–Solomon decoding over a prime field.
//!
//! A codeword is the evaluation of a polynomial of degree `< k` at `n`
//! fixed indices. [`RsDecoder::decode`] recovers the polynomial from a
//! corrupted codeword as long as at most `⌊(n − k)/2⌋` positions are wrong,
//! using the Berlekamp–Welch approach phrased as a partial GCD: interpolate
//! the received word, run the extended Euclidean algorithm against
//! `g0(x) = Π (x − x_i)` until the remainder degree drops below
//! `⌊(n + k)/2⌋`, and divide the remainder by the Bézout coefficient `t`.
//! The roots of `t` among the indices are the error positions.
//!
//! With between `⌊(n − k)/2⌋ + 1` and `n − k` errors the division leaves a
//! remainder or yields a too-large degree and decoding reports failure,
//! which is a normal outcome rather than an error. Beyond `n − k` errors
//! the result is undefined and may be a well-formed wrong polynomial.

use ark_ff::PrimeField;
use tracing::{debug, trace};

use crate::eea::EeaStepper;
use crate::interpolate::Interpolator;
use crate::poly::Poly;

/// A Reed–Solomon decoder for a fixed `(indices, k)` code.
///
/// Construction is `O(n²)`; all decoding state is preallocated and reused,
/// so [`RsDecoder::decode`] itself does not allocate. Not safe for
/// concurrent decodes on one instance.
#[derive(Debug, Clone)]
pub struct RsDecoder<F: PrimeField> {
    indices: Vec<F>,
    k: usize,
    g0: Poly<F>,
    interpolator: Interpolator<F>,
    eea: EeaStepper<F>,
    interp: Poly<F>,
    f1: Poly<F>,
    rem: Poly<F>,
    errors: Option<Vec<F>>,
}

impl<F: PrimeField> RsDecoder<F> {
    /// Builds a decoder for codewords evaluated at `indices` encoding
    /// polynomials of degree `< k`.
    ///
    /// # Panics
    /// Panics if `k` is zero or exceeds the index count, or if the indices
    /// are not distinct.
    pub fn new(indices: &[F], k: usize) -> Self {
        let n = indices.len();
        assert!(k >= 1, "message length must be at least one");
        assert!(k <= n, "message length {k} exceeds codeword length {n}");

        let mut g0 = Poly::with_capacity(n + 1);
        g0.set_constant(F::one());
        for &x in indices {
            let binomial = Poly::from_coeffs(vec![-x, F::one()]);
            g0 *= &binomial;
        }

        Self {
            indices: indices.to_vec(),
            k,
            g0,
            interpolator: Interpolator::new(indices),
            eea: EeaStepper::with_capacity(n + 1),
            interp: Poly::with_capacity(n),
            f1: Poly::with_capacity(n + 1),
            rem: Poly::with_capacity(n + 1),
            errors: None,
        }
    }

    /// The codeword length `n`.
    pub fn codeword_len(&self) -> usize {
        self.indices.len()
    }

    /// The message length `k`.
    pub fn message_len(&self) -> usize {
        self.k
    }

    /// Decodes a received word into the encoded polynomial.
    ///
    /// Returns the polynomial of degree `< k` consistent with all but at
    /// most `⌊(n − k)/2⌋` positions, or `None` if no such polynomial
    /// exists within the correction radius. The returned reference borrows
    /// the decoder's scratch and is overwritten by the next decode.
    ///
    /// # Panics
    /// Panics if `values.len()` differs from the codeword length.
    pub fn decode(&mut self, values: &[F]) -> Option<&Poly<F>> {
        let n = self.indices.len();
        assert_eq!(values.len(), n, "one value per codeword position");
        self.errors = None;

        let threshold = (n + self.k) / 2;
        trace!(n, k = self.k, threshold, "decoding received word");
        self.interpolator.interpolate(values, &mut self.interp);

        self.eea.init(&self.g0, &self.interp);
        while self.eea.remainder().degree() >= threshold {
            self.eea.step();
        }

        self.eea
            .remainder()
            .div_rem(self.eea.bezout_t(), &mut self.f1, &mut self.rem);
        if !self.rem.is_zero() || self.f1.degree() >= self.k {
            debug!(n, k = self.k, "received word is beyond the correction radius");
            return None;
        }

        let t = self.eea.bezout_t();
        let errors: Vec<F> = self
            .indices
            .iter()
            .copied()
            .filter(|&x| t.evaluate(x).is_zero())
            .collect();
        self.errors = (!errors.is_empty()).then_some(errors);
        Some(&self.f1)
    }

    /// The positions the most recent successful [`RsDecoder::decode`]
    /// corrected, as a subset of the index tuple.
    ///
    /// `None` before the first decode, after a failed decode, or when the
    /// last decode saw an error-free word.
    pub fn error_indices(&self) -> Option<&[F]> {
        self.errors.as_deref()
    }
}

//! Dense polynomials over a prime field.
//!
//! [`Poly`] is the workhorse of the interpolation, Euclidean and decoding
//! machinery in this crate. It stores coefficients `a_0, a_1, ..., a_d` in
//! ascending order and keeps two global invariants:
//!
//! * The leading coefficient is non-zero, except for the zero polynomial,
//!   which is represented by the single coefficient `0`. Every operation
//!   that can shrink the effective degree reasserts this.
//! * Each polynomial carries a fixed *capacity*, the maximum number of
//!   coefficients it may ever hold. Operations that would grow past it are
//!   programming errors and panic. Hot loops stay allocation-free by
//!   preallocating capacity once and reusing the buffers.
//!
//! Arithmetic is provided through the `op=` operator traits so the receiver
//! doubles as one operand without a scratch copy; the borrow checker rules
//! out the one illegal configuration (receiver aliasing *both* operands of
//! a product). Squaring a polynomial therefore goes through
//! [`Poly::set_product`] with a disjoint destination.

use std::ops::{AddAssign, MulAssign, SubAssign};

use ark_ff::PrimeField;

/// A dense polynomial `a_0 + a_1·x + ... + a_d·x^d` with a fixed capacity.
#[derive(Debug)]
pub struct Poly<F: PrimeField> {
    coeffs: Vec<F>,
    cap: usize,
}

impl<F: PrimeField> Poly<F> {
    /// Creates the zero polynomial with room for `cap` coefficients.
    ///
    /// # Panics
    /// Panics if `cap` is zero; even the zero polynomial stores one
    /// coefficient.
    pub fn with_capacity(cap: usize) -> Self {
        assert!(cap >= 1, "capacity must admit at least one coefficient");
        let mut coeffs = Vec::with_capacity(cap);
        coeffs.push(F::zero());
        Self { coeffs, cap }
    }

    /// Adopts `coeffs` as the coefficient vector; the capacity is its length.
    ///
    /// The caller is responsible for the leading coefficient being non-zero
    /// (or the vector being exactly `[0]`); use [`Poly::normalize`] when the
    /// input may carry leading zeros.
    ///
    /// # Panics
    /// Panics if `coeffs` is empty.
    pub fn from_coeffs(coeffs: Vec<F>) -> Self {
        let cap = coeffs.len();
        Self::from_coeffs_with_capacity(coeffs, cap)
    }

    /// Like [`Poly::from_coeffs`] with an explicit, possibly larger capacity.
    ///
    /// # Panics
    /// Panics if `coeffs` is empty or longer than `cap`.
    pub fn from_coeffs_with_capacity(coeffs: Vec<F>, cap: usize) -> Self {
        assert!(
            !coeffs.is_empty(),
            "a polynomial stores at least one coefficient"
        );
        assert!(
            coeffs.len() <= cap,
            "{} coefficients exceed capacity {cap}",
            coeffs.len()
        );
        Self { coeffs, cap }
    }

    /// The maximum number of coefficients this polynomial may hold.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The degree; the zero polynomial reports degree `0`.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficient of `x^i`.
    ///
    /// # Panics
    /// Panics if `i > self.degree()`.
    pub fn coefficient(&self, i: usize) -> F {
        self.coeffs[i]
    }

    /// The coefficients in ascending order, trimmed.
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// The coefficient of `x^degree`.
    pub fn leading_coefficient(&self) -> F {
        *self.coeffs.last().expect("a polynomial is never empty")
    }

    /// Returns `true` iff this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Copy-assigns `other` into this polynomial.
    ///
    /// # Panics
    /// Panics if `other` does not fit into this polynomial's capacity.
    pub fn set(&mut self, other: &Self) {
        assert!(
            other.coeffs.len() <= self.cap,
            "{} coefficients exceed capacity {}",
            other.coeffs.len(),
            self.cap
        );
        self.coeffs.clear();
        self.coeffs.extend_from_slice(&other.coeffs);
    }

    /// Resets to the zero polynomial. Capacity is unchanged.
    pub fn set_zero(&mut self) {
        self.coeffs.clear();
        self.coeffs.push(F::zero());
    }

    /// Resets to the constant polynomial `c`.
    pub fn set_constant(&mut self, c: F) {
        self.coeffs.clear();
        self.coeffs.push(c);
    }

    /// Assigns `s · other`, short-circuiting `s = 0` (zero polynomial) and
    /// `s = 1` (plain copy).
    ///
    /// # Panics
    /// Panics if `other` does not fit into this polynomial's capacity.
    pub fn set_scaled(&mut self, other: &Self, s: F) {
        if s.is_zero() {
            self.set_zero();
            return;
        }
        if s.is_one() {
            self.set(other);
            return;
        }
        assert!(
            other.coeffs.len() <= self.cap,
            "{} coefficients exceed capacity {}",
            other.coeffs.len(),
            self.cap
        );
        self.coeffs.clear();
        self.coeffs.extend(other.coeffs.iter().map(|c| *c * s));
    }

    /// Assigns the product `a · b` into this polynomial.
    ///
    /// `a` and `b` may be the same polynomial (squaring); neither may alias
    /// the destination, which the borrow checker enforces.
    ///
    /// # Panics
    /// Panics if the capacity is below `a.degree() + b.degree() + 1`.
    pub fn set_product(&mut self, a: &Self, b: &Self) {
        if a.is_zero() || b.is_zero() {
            self.set_zero();
            return;
        }
        self.reset_len(a.coeffs.len() + b.coeffs.len() - 1);
        for (i, ai) in a.coeffs.iter().enumerate() {
            if ai.is_zero() {
                continue;
            }
            for (j, bj) in b.coeffs.iter().enumerate() {
                self.coeffs[i + j] += *ai * *bj;
            }
        }
    }

    /// Adds `s · other` into this polynomial.
    ///
    /// # Panics
    /// Panics if `other` does not fit into this polynomial's capacity.
    pub fn add_scaled(&mut self, other: &Self, s: F) {
        if s.is_zero() {
            return;
        }
        self.grow_to(other.coeffs.len());
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a += *b * s;
        }
        self.normalize();
    }

    /// Negates every coefficient in place.
    pub fn neg_in_place(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = -*c;
        }
    }

    /// Evaluates at `x` by Horner's rule from the top coefficient.
    pub fn evaluate(&self, x: F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |acc, c| acc * x + *c)
    }

    /// Classical long division: computes `quotient` and `remainder` with
    /// `self = divisor · quotient + remainder` and
    /// `remainder.degree() < divisor.degree()`.
    ///
    /// When `divisor.degree() > self.degree()` this short-circuits into
    /// `quotient = 0`, `remainder = self`.
    ///
    /// # Panics
    /// Panics if `divisor` is zero, if `quotient` has capacity below
    /// `self.degree() − divisor.degree() + 1`, or if `remainder` has
    /// capacity below `self.degree() + 1`.
    pub fn div_rem(&self, divisor: &Self, quotient: &mut Self, remainder: &mut Self) {
        assert!(!divisor.is_zero(), "division by the zero polynomial");
        if divisor.degree() > self.degree() {
            quotient.set_zero();
            remainder.set(self);
            return;
        }
        let dd = divisor.degree();
        let dq = self.degree() - dd;
        remainder.set(self);
        quotient.reset_len(dq + 1);
        let lead_inv = divisor
            .leading_coefficient()
            .inverse()
            .expect("divisor is non-zero and trimmed");
        for k in (0..=dq).rev() {
            let c = remainder.coeffs[dd + k] * lead_inv;
            quotient.coeffs[k] = c;
            if c.is_zero() {
                continue;
            }
            for (i, d) in divisor.coeffs.iter().enumerate() {
                remainder.coeffs[k + i] -= c * *d;
            }
        }
        // positions dd..=self.degree() were eliminated exactly
        remainder.coeffs.truncate(dd.max(1));
        remainder.normalize();
    }

    /// Reasserts the trimmed representation: drops leading zero coefficients
    /// and keeps `[0]` for the zero polynomial.
    pub fn normalize(&mut self) {
        while self.coeffs.len() > 1
            && self
                .coeffs
                .last()
                .expect("a polynomial is never empty")
                .is_zero()
        {
            self.coeffs.pop();
        }
    }

    /// Zero-extends to `len` coefficients within capacity.
    fn grow_to(&mut self, len: usize) {
        assert!(
            len <= self.cap,
            "{len} coefficients exceed capacity {}",
            self.cap
        );
        if self.coeffs.len() < len {
            self.coeffs.resize(len, F::zero());
        }
    }

    /// Clears and zero-fills to exactly `len` coefficients within capacity.
    fn reset_len(&mut self, len: usize) {
        assert!(
            len <= self.cap,
            "{len} coefficients exceed capacity {}",
            self.cap
        );
        self.coeffs.clear();
        self.coeffs.resize(len, F::zero());
    }
}

impl<F: PrimeField> Clone for Poly<F> {
    fn clone(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.cap);
        coeffs.extend_from_slice(&self.coeffs);
        Self {
            coeffs,
            cap: self.cap,
        }
    }
}

impl<F: PrimeField> PartialEq for Poly<F> {
    fn eq(&self, other: &Self) -> bool {
        // capacity is a storage property, not part of the value
        self.coeffs == other.coeffs
    }
}

impl<F: PrimeField> Eq for Poly<F> {}

impl<F: PrimeField> AddAssign<&Poly<F>> for Poly<F> {
    fn add_assign(&mut self, rhs: &Poly<F>) {
        self.grow_to(rhs.coeffs.len());
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a += *b;
        }
        // equal degrees may cancel the leading terms
        self.normalize();
    }
}

impl<F: PrimeField> SubAssign<&Poly<F>> for Poly<F> {
    fn sub_assign(&mut self, rhs: &Poly<F>) {
        self.grow_to(rhs.coeffs.len());
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a -= *b;
        }
        self.normalize();
    }
}

impl<F: PrimeField> MulAssign<F> for Poly<F> {
    fn mul_assign(&mut self, rhs: F) {
        if rhs.is_zero() {
            self.set_zero();
            return;
        }
        for c in self.coeffs.iter_mut() {
            *c *= rhs;
        }
    }
}

impl<F: PrimeField> MulAssign<&Poly<F>> for Poly<F> {
    /// In-place product. Output coefficients are accumulated from the highest
    /// index downward, so the receiver's not-yet-consumed low coefficients
    /// are never clobbered before they contribute.
    fn mul_assign(&mut self, rhs: &Poly<F>) {
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return;
        }
        let la = self.coeffs.len();
        let lb = rhs.coeffs.len();
        self.grow_to(la + lb - 1);
        for k in (0..la + lb - 1).rev() {
            let lo = (k + 1).saturating_sub(lb);
            let hi = k.min(la - 1);
            let mut acc = F::zero();
            for i in lo..=hi {
                acc += self.coeffs[i] * rhs.coeffs[k - i];
            }
            self.coeffs[k] = acc;
        }
    }
}

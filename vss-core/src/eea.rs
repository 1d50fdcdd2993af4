//! Step-wise extended Euclidean algorithm over polynomials.
//!
//! The Reed–Solomon decoder needs a *partial* GCD: it runs the Euclidean
//! iteration only until the remainder degree drops below a threshold, then
//! reads off the Bézout coefficient `t` as the error locator. [`EeaStepper`]
//! therefore exposes the algorithm one division at a time and lets the
//! caller decide when to stop.
//!
//! All internal polynomials are preallocated at construction and recycled
//! between steps via buffer swaps, so stepping never allocates.

use std::mem;

use ark_ff::PrimeField;

use crate::poly::Poly;

/// Mutable extended-Euclidean state over `F[x]`.
///
/// After `init(a, b)`, the state satisfies `a·s + b·t = r` for each of the
/// tracked `(r, s, t)` pairs, and every [`EeaStepper::step`] preserves that
/// invariant. Not safe for concurrent use; create one instance per worker.
#[derive(Debug, Clone)]
pub struct EeaStepper<F: PrimeField> {
    r_prev: Poly<F>,
    r_next: Poly<F>,
    s_prev: Poly<F>,
    s_next: Poly<F>,
    t_prev: Poly<F>,
    t_next: Poly<F>,
    quotient: Poly<F>,
    remainder: Poly<F>,
    product: Poly<F>,
}

impl<F: PrimeField> EeaStepper<F> {
    /// Creates a stepper whose internal polynomials all hold `cap`
    /// coefficients; `cap` must be at least `max(deg a, deg b) + 1` for the
    /// inputs later passed to [`EeaStepper::init`].
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            r_prev: Poly::with_capacity(cap),
            r_next: Poly::with_capacity(cap),
            s_prev: Poly::with_capacity(cap),
            s_next: Poly::with_capacity(cap),
            t_prev: Poly::with_capacity(cap),
            t_next: Poly::with_capacity(cap),
            quotient: Poly::with_capacity(cap),
            remainder: Poly::with_capacity(cap),
            product: Poly::with_capacity(cap),
        }
    }

    /// Loads the inputs `(a, b)` and resets the Bézout state.
    ///
    /// # Panics
    /// Panics if either input exceeds the stepper's capacity.
    pub fn init(&mut self, a: &Poly<F>, b: &Poly<F>) {
        self.r_prev.set(a);
        self.r_next.set(b);
        self.s_prev.set_constant(F::one());
        self.s_next.set_zero();
        self.t_prev.set_zero();
        self.t_next.set_constant(F::one());
    }

    /// Performs one Euclidean division round.
    ///
    /// Returns `true` iff the algorithm has terminated, i.e. the new
    /// remainder is the zero polynomial (the previous remainder is then the
    /// GCD up to a unit).
    ///
    /// # Panics
    /// Panics if the current remainder is zero, i.e. if called again after
    /// it already returned `true`.
    pub fn step(&mut self) -> bool {
        self.r_prev
            .div_rem(&self.r_next, &mut self.quotient, &mut self.remainder);
        mem::swap(&mut self.r_prev, &mut self.r_next);
        mem::swap(&mut self.r_next, &mut self.remainder);

        // s_k+1 = s_k-1 − q·s_k, then shift the window
        self.product.set_product(&self.quotient, &self.s_next);
        self.s_prev -= &self.product;
        mem::swap(&mut self.s_prev, &mut self.s_next);

        self.product.set_product(&self.quotient, &self.t_next);
        self.t_prev -= &self.product;
        mem::swap(&mut self.t_prev, &mut self.t_next);

        self.r_next.is_zero()
    }

    /// The current remainder `r`.
    pub fn remainder(&self) -> &Poly<F> {
        &self.r_next
    }

    /// The current Bézout coefficient of the first input.
    pub fn bezout_s(&self) -> &Poly<F> {
        &self.s_next
    }

    /// The current Bézout coefficient of the second input.
    pub fn bezout_t(&self) -> &Poly<F> {
        &self.t_next
    }
}

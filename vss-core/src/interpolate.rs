//! Precomputed Lagrange interpolation over a fixed index set.
//!
//! Building an [`Interpolator`] costs `O(n²)` field operations; every
//! [`Interpolator::interpolate`] call afterwards is a linear pass over the
//! precomputed basis. Construct one per index set and reuse it; the
//! Reed–Solomon decoder does exactly that for every `decode` call.

use ark_ff::PrimeField;
use itertools::izip;

use crate::poly::Poly;

/// Lagrange basis polynomials `L_i(x) = Π_{j≠i} (x − x_j)/(x_i − x_j)`
/// precomputed for a fixed tuple of distinct indices.
///
/// The index tuple is copied at construction; callers may mutate their
/// input afterwards.
#[derive(Debug, Clone)]
pub struct Interpolator<F: PrimeField> {
    indices: Vec<F>,
    basis: Vec<Poly<F>>,
}

impl<F: PrimeField> Interpolator<F> {
    /// Precomputes the Lagrange basis for `indices`.
    ///
    /// # Panics
    /// Panics if `indices` is empty or contains duplicates.
    pub fn new(indices: &[F]) -> Self {
        let n = indices.len();
        assert!(n >= 1, "index set must be non-empty");
        for (i, xi) in indices.iter().enumerate() {
            for xj in &indices[..i] {
                assert!(xi != xj, "interpolation indices must be distinct");
            }
        }

        // master = Π_j (x − x_j); each basis polynomial is master with one
        // root divided back out, scaled to 1 at its own index
        let mut master = Poly::with_capacity(n + 1);
        master.set_constant(F::one());
        for &xj in indices {
            let binomial = Poly::from_coeffs(vec![-xj, F::one()]);
            master *= &binomial;
        }

        let mut quotient = Poly::with_capacity(n + 1);
        let mut remainder = Poly::with_capacity(n + 1);
        let mut basis = Vec::with_capacity(n);
        for &xi in indices {
            let binomial = Poly::from_coeffs(vec![-xi, F::one()]);
            master.div_rem(&binomial, &mut quotient, &mut remainder);
            let denominator = quotient.evaluate(xi);
            let mut li = Poly::with_capacity(n);
            li.set_scaled(
                &quotient,
                denominator.inverse().expect("indices are distinct"),
            );
            basis.push(li);
        }

        Self {
            indices: indices.to_vec(),
            basis,
        }
    }

    /// The index tuple this interpolator was built for.
    pub fn indices(&self) -> &[F] {
        &self.indices
    }

    /// Computes the unique polynomial of degree `< n` through
    /// `(x_i, values[i])` into `dst`.
    ///
    /// # Panics
    /// Panics if `values.len()` differs from the index count or if `dst`
    /// has capacity below `n`.
    pub fn interpolate(&self, values: &[F], dst: &mut Poly<F>) {
        assert_eq!(
            values.len(),
            self.indices.len(),
            "one value per interpolation index"
        );
        dst.set_zero();
        for (v, li) in izip!(values, &self.basis) {
            dst.add_scaled(li, *v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_babyjubjub::Fr;
    use ark_ff::UniformRand;

    #[test]
    fn reconstructs_random_polynomials_exactly() {
        let mut rng = rand::thread_rng();
        let indices: Vec<Fr> = (1u64..=8).map(Fr::from).collect();
        let interpolator = Interpolator::new(&indices);

        for degree in 0..8 {
            let coeffs: Vec<Fr> = (0..=degree).map(|_| Fr::rand(&mut rng)).collect();
            let poly = Poly::from_coeffs_with_capacity(coeffs, 8);
            let values: Vec<Fr> = indices.iter().map(|&x| poly.evaluate(x)).collect();

            let mut recovered = Poly::with_capacity(8);
            interpolator.interpolate(&values, &mut recovered);
            assert_eq!(recovered, poly);
        }
    }

    #[test]
    fn interpolates_through_every_sample() {
        let mut rng = rand::thread_rng();
        let indices: Vec<Fr> = (0..6).map(|_| Fr::rand(&mut rng)).collect();
        let interpolator = Interpolator::new(&indices);
        let values: Vec<Fr> = (0..6).map(|_| Fr::rand(&mut rng)).collect();

        let mut poly = Poly::with_capacity(6);
        interpolator.interpolate(&values, &mut poly);
        for (x, v) in izip!(&indices, &values) {
            assert_eq!(poly.evaluate(*x), *v);
        }
    }

    #[test]
    #[should_panic(expected = "distinct")]
    fn duplicate_indices_panic() {
        let indices = [Fr::from(1u64), Fr::from(2u64), Fr::from(1u64)];
        let _ = Interpolator::new(&indices);
    }
}

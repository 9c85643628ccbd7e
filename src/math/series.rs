// --- Taylor series polynomium evaluation ----

pub mod taylor {
    /// Evaluate Σ cᵢ · xⁱ using Horner's scheme
    pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
        let mut coefficients = coefficients.iter().rev();
        let Some(&highest) = coefficients.next() else {
            return 0.;
        };
        coefficients.fold(highest, |value, c| value.mul_add(arg, *c))
    }
}

// ----- Tests ---------------------------------------------------------------------

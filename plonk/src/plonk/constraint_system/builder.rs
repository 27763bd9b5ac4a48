use crate::plonk::constraint_system::{
    CoeffIndex, SparseR1C, SparseR1CS, VarIndex, WireRef, COEFF_MINUS_ONE, COEFF_ONE, COEFF_ZERO,
};
use sparse_plonk_algebra::prelude::*;
use std::collections::HashMap;

/// Incremental construction of a [`SparseR1CS`].
///
/// The numbers of public and secret variables are fixed up front so that
/// internal variables can be numbered after them.
pub struct SparseR1CSBuilder<F> {
    constraints: Vec<SparseR1C>,
    assertions: Vec<SparseR1C>,
    coefficients: Vec<F>,
    coeff_ids: HashMap<Vec<u8>, CoeffIndex>,
    nb_public_variables: usize,
    nb_secret_variables: usize,
    nb_internal_variables: usize,
}

impl<F: Scalar> SparseR1CSBuilder<F> {
    /// Create a builder for a circuit with the given numbers of inputs.
    pub fn new(nb_public_variables: usize, nb_secret_variables: usize) -> Self {
        let mut builder = SparseR1CSBuilder {
            constraints: vec![],
            assertions: vec![],
            coefficients: vec![],
            coeff_ids: HashMap::new(),
            nb_public_variables,
            nb_secret_variables,
            nb_internal_variables: 0,
        };
        builder.coeff(F::zero());
        builder.coeff(F::one());
        builder.coeff(F::one().neg());
        builder
    }

    /// Return the id of the `i`-th public variable.
    pub fn public_variable(&self, i: usize) -> VarIndex {
        assert!(i < self.nb_public_variables, "public variable index out of bound");
        i
    }

    /// Return the id of the `i`-th secret variable.
    pub fn secret_variable(&self, i: usize) -> VarIndex {
        assert!(i < self.nb_secret_variables, "secret variable index out of bound");
        self.nb_public_variables + i
    }

    /// Allocate a fresh internal variable.
    pub fn new_internal_variable(&mut self) -> VarIndex {
        self.nb_internal_variables += 1;
        self.nb_variables() - 1
    }

    fn nb_variables(&self) -> usize {
        self.nb_public_variables + self.nb_secret_variables + self.nb_internal_variables
    }

    /// Return the id of `value` in the coefficient table, adding it if needed.
    pub fn coeff(&mut self, value: F) -> CoeffIndex {
        let next = self.coefficients.len();
        let id = *self.coeff_ids.entry(value.to_bytes()).or_insert(next);
        if id == next {
            self.coefficients.push(value);
        }
        id
    }

    fn check_row(&self, c: &SparseR1C) {
        assert!(
            [&c.l, &c.r, &c.o, &c.m[0], &c.m[1]]
                .iter()
                .all(|w| w.variable_id < self.nb_variables() && w.coeff_id < self.coefficients.len()),
            "wire reference out of bound"
        );
        assert!(c.k < self.coefficients.len(), "constant index out of bound");
    }

    /// Append a gate constraint.
    pub fn add_constraint(&mut self, c: SparseR1C) {
        self.check_row(&c);
        self.constraints.push(c);
    }

    /// Append an assertion row.
    pub fn add_assertion(&mut self, c: SparseR1C) {
        self.check_row(&c);
        self.assertions.push(c);
    }

    /// Add a linear combination gate: `out = q_left * left + q_right * right`.
    pub fn insert_lc_gate(
        &mut self,
        left_var: VarIndex,
        right_var: VarIndex,
        out_var: VarIndex,
        q_left: F,
        q_right: F,
    ) {
        let q_left = self.coeff(q_left);
        let q_right = self.coeff(q_right);
        self.add_constraint(SparseR1C {
            l: WireRef::new(left_var, q_left),
            r: WireRef::new(right_var, q_right),
            o: WireRef::new(out_var, COEFF_MINUS_ONE),
            m: [
                WireRef::new(left_var, COEFF_ZERO),
                WireRef::new(right_var, COEFF_ONE),
            ],
            k: COEFF_ZERO,
        });
    }

    /// Add an Add gate. (left, right, out).
    pub fn insert_add_gate(&mut self, left_var: VarIndex, right_var: VarIndex, out_var: VarIndex) {
        self.insert_lc_gate(left_var, right_var, out_var, F::one(), F::one());
    }

    /// Add a Sub gate. (left, right, out).
    pub fn insert_sub_gate(&mut self, left_var: VarIndex, right_var: VarIndex, out_var: VarIndex) {
        self.insert_lc_gate(left_var, right_var, out_var, F::one(), F::one().neg());
    }

    /// Add a Mul gate. (left, right, out).
    pub fn insert_mul_gate(&mut self, left_var: VarIndex, right_var: VarIndex, out_var: VarIndex) {
        self.add_constraint(SparseR1C {
            l: WireRef::new(left_var, COEFF_ZERO),
            r: WireRef::new(right_var, COEFF_ZERO),
            o: WireRef::new(out_var, COEFF_MINUS_ONE),
            m: [
                WireRef::new(left_var, COEFF_ONE),
                WireRef::new(right_var, COEFF_ONE),
            ],
            k: COEFF_ZERO,
        });
    }

    /// Constrain `var` to be 0 or 1: `var * var - var = 0`.
    pub fn insert_boolean_gate(&mut self, var: VarIndex) {
        self.add_constraint(SparseR1C {
            l: WireRef::new(var, COEFF_MINUS_ONE),
            r: WireRef::new(var, COEFF_ZERO),
            o: WireRef::new(var, COEFF_ZERO),
            m: [WireRef::new(var, COEFF_ONE), WireRef::new(var, COEFF_ONE)],
            k: COEFF_ZERO,
        });
    }

    /// Assert `left = right` with an assertion row.
    pub fn assert_equal(&mut self, left_var: VarIndex, right_var: VarIndex) {
        self.add_assertion(SparseR1C {
            l: WireRef::new(left_var, COEFF_ONE),
            r: WireRef::new(right_var, COEFF_MINUS_ONE),
            o: WireRef::new(right_var, COEFF_ZERO),
            m: [
                WireRef::new(left_var, COEFF_ZERO),
                WireRef::new(right_var, COEFF_ZERO),
            ],
            k: COEFF_ZERO,
        });
    }

    /// Finish the circuit.
    pub fn build(self) -> SparseR1CS<F> {
        SparseR1CS {
            constraints: self.constraints,
            assertions: self.assertions,
            coefficients: self.coefficients,
            nb_public_variables: self.nb_public_variables,
            nb_secret_variables: self.nb_secret_variables,
            nb_internal_variables: self.nb_internal_variables,
        }
    }
}

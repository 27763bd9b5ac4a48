use crate::errors::{PlonkError, Result};
use sparse_plonk_algebra::prelude::*;

mod builder;

pub use builder::SparseR1CSBuilder;

/// Variable index
pub type VarIndex = usize;
/// Index into the coefficient table
pub type CoeffIndex = usize;

/// Coefficient id of `0`, present in every table built by [`SparseR1CSBuilder`].
pub const COEFF_ZERO: CoeffIndex = 0;
/// Coefficient id of `1`.
pub const COEFF_ONE: CoeffIndex = 1;
/// Coefficient id of `-1`.
pub const COEFF_MINUS_ONE: CoeffIndex = 2;

/// A variable scaled by an entry of the coefficient table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireRef {
    /// The variable wired at this slot.
    pub variable_id: VarIndex,
    /// The coefficient scaling it.
    pub coeff_id: CoeffIndex,
}

impl WireRef {
    /// Create a new wire reference.
    pub fn new(variable_id: VarIndex, coeff_id: CoeffIndex) -> Self {
        WireRef {
            variable_id,
            coeff_id,
        }
    }
}

/// One row of a Sparse R1CS, encoding
/// `qL * l + qR * r + qM * l * r + qO * o + qK = 0`
/// with `qM = c[m[0].coeff_id] * c[m[1].coeff_id]`.
///
/// Only `l`, `r` and `o` take part in the wiring; the variables of `m`
/// mirror `l` and `r`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseR1C {
    /// Left input.
    pub l: WireRef,
    /// Right input.
    pub r: WireRef,
    /// Output.
    pub o: WireRef,
    /// The two factors of the multiplication selector.
    pub m: [WireRef; 2],
    /// The constant term.
    pub k: CoeffIndex,
}

impl SparseR1C {
    fn wire_refs(&self) -> [&WireRef; 5] {
        [&self.l, &self.r, &self.o, &self.m[0], &self.m[1]]
    }
}

/// A compiled Sparse R1CS: gate rows plus the coefficient table they index.
///
/// Variable ids are laid out as public variables first, then secret ones,
/// then internal ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseR1CS<F> {
    /// The gate constraints.
    pub constraints: Vec<SparseR1C>,
    /// Rows appended after the constraints, used mostly for equality checks.
    pub assertions: Vec<SparseR1C>,
    /// The coefficient table.
    pub coefficients: Vec<F>,
    /// Number of public variables.
    pub nb_public_variables: usize,
    /// Number of secret variables.
    pub nb_secret_variables: usize,
    /// Number of internal variables.
    pub nb_internal_variables: usize,
}

impl<F: Scalar> SparseR1CS<F> {
    /// Return the total number of variables.
    pub fn nb_variables(&self) -> usize {
        self.nb_public_variables + self.nb_secret_variables + self.nb_internal_variables
    }

    /// Return the number of rows, constraints and assertions together.
    pub fn nb_rows(&self) -> usize {
        self.constraints.len() + self.assertions.len()
    }

    /// Iterate over the rows: constraints, then assertions.
    pub fn rows(&self) -> impl Iterator<Item = &SparseR1C> {
        self.constraints.iter().chain(self.assertions.iter())
    }

    /// Check that every coefficient and variable id is in range, and that
    /// every variable is wired into at least one row.
    pub fn check(&self) -> Result<()> {
        let nb_variables = self.nb_variables();
        let mut referenced = vec![false; nb_variables];
        for (row, c) in self.rows().enumerate() {
            for w in c.wire_refs() {
                if w.coeff_id >= self.coefficients.len() {
                    return Err(PlonkError::CoefficientIndex {
                        row,
                        coeff_id: w.coeff_id,
                    });
                }
                if w.variable_id >= nb_variables {
                    return Err(PlonkError::VariableIndex {
                        row,
                        variable_id: w.variable_id,
                    });
                }
            }
            if c.k >= self.coefficients.len() {
                return Err(PlonkError::CoefficientIndex { row, coeff_id: c.k });
            }
            for w in [&c.l, &c.r, &c.o] {
                referenced[w.variable_id] = true;
            }
        }
        match referenced.iter().position(|r| !*r) {
            Some(var) => Err(PlonkError::UnreferencedVariable(var)),
            None => Ok(()),
        }
    }

    /// Evaluate `qL * l + qR * r + qM * l * r + qO * o + qK` on `row`, where
    /// `solution` holds one value per variable.
    ///
    /// Panics if `row` or any id is out of range; call [`SparseR1CS::check`] first.
    pub fn eval_row(&self, row: usize, solution: &[F]) -> F {
        let c = if row < self.constraints.len() {
            &self.constraints[row]
        } else {
            &self.assertions[row - self.constraints.len()]
        };
        let coeff = |id: CoeffIndex| &self.coefficients[id];
        let l = &solution[c.l.variable_id];
        let r = &solution[c.r.variable_id];
        let o = &solution[c.o.variable_id];

        let q_m = coeff(c.m[0].coeff_id).mul(coeff(c.m[1].coeff_id));
        coeff(c.l.coeff_id)
            .mul(l)
            .add(&coeff(c.r.coeff_id).mul(r))
            .add(&q_m.mul(l).mul(r))
            .add(&coeff(c.o.coeff_id).mul(o))
            .add(coeff(c.k))
    }

    /// Verify that `solution` satisfies every row.
    pub fn verify_solution(&self, solution: &[F]) -> Result<()> {
        self.check()?;
        if solution.len() != self.nb_variables() {
            return Err(PlonkError::WitnessLength {
                expected: self.nb_variables(),
                found: solution.len(),
            });
        }
        for row in 0..self.nb_rows() {
            if !self.eval_row(row, solution).is_zero() {
                return Err(PlonkError::UnsatisfiedConstraint(row));
            }
        }
        Ok(())
    }
}

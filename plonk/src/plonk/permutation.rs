//! The copy-constraint permutation over the `3n` wiring positions.
//!
//! Position `w * n + row` stands for wire `w` (`0` left, `1` right,
//! `2` output) of `row`. Rows at or beyond `nb_rows` are padding.

use crate::errors::{PlonkError, Result};
use crate::plonk::constraint_system::{SparseR1CS, VarIndex};
use sparse_plonk_algebra::prelude::*;

/// Number of wires per row.
pub const N_WIRES_PER_ROW: usize = 3;

/// List the variable at each wiring position; padding positions are `None`.
fn wiring<F: Scalar>(spr: &SparseR1CS<F>, n: usize) -> Result<Vec<Option<VarIndex>>> {
    if n < spr.nb_rows() {
        return Err(PlonkError::Message(format!(
            "{} rows do not fit in a domain of size {}",
            spr.nb_rows(),
            n
        )));
    }
    let mut lro = vec![None; N_WIRES_PER_ROW * n];
    for (row, c) in spr.rows().enumerate() {
        lro[row] = Some(c.l.variable_id);
        lro[n + row] = Some(c.r.variable_id);
        lro[2 * n + row] = Some(c.o.variable_id);
    }
    Ok(lro)
}

/// Compute the permutation `σ` of `[0, 3n)` whose cycles are exactly the
/// sets of positions wired to the same variable.
///
/// Each position points back to the previous position of its variable and
/// the first occurrence points to the last one. Padding positions are fixed
/// points.
pub fn build_permutation<F: Scalar>(spr: &SparseR1CS<F>, n: usize) -> Result<Vec<usize>> {
    let lro = wiring(spr, n)?;
    let nb_variables = spr.nb_variables();

    let mut sigma: Vec<Option<usize>> = vec![None; lro.len()];
    let mut last_seen: Vec<Option<usize>> = vec![None; nb_variables];
    for (pos, var) in lro.iter().enumerate() {
        match var {
            Some(var) => {
                let seen = last_seen
                    .get_mut(*var)
                    .ok_or(PlonkError::VariableIndex {
                        row: pos % n,
                        variable_id: *var,
                    })?;
                sigma[pos] = *seen;
                *seen = Some(pos);
            }
            None => sigma[pos] = Some(pos),
        }
    }

    // close the cycles: first occurrences point to the last ones
    for (pos, var) in lro.iter().enumerate() {
        if let (None, Some(var)) = (sigma[pos], var) {
            sigma[pos] = last_seen[*var];
        }
    }

    let sigma = sigma
        .into_iter()
        .collect::<Option<Vec<usize>>>()
        .ok_or_else(|| PlonkError::Message("permutation left a position unset".into()))?;
    log::debug!(
        "permutation over {} wiring positions ({} rows padded to {})",
        sigma.len(),
        spr.nb_rows(),
        n
    );
    Ok(sigma)
}

/// Split a permutation into its cycles, each starting at its smallest
/// position.
///
/// Panics if `sigma` is not a permutation of `[0, sigma.len())`.
pub fn permutation_cycles(sigma: &[usize]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; sigma.len()];
    let mut cycles = vec![];
    for start in 0..sigma.len() {
        if visited[start] {
            continue;
        }
        let mut cycle = vec![];
        let mut cur = start;
        while !visited[cur] {
            visited[cur] = true;
            cycle.push(cur);
            cur = sigma[cur];
        }
        assert_eq!(cur, start, "not a permutation");
        cycles.push(cycle);
    }
    log::trace!("{} cycle(s) over {} positions", cycles.len(), sigma.len());
    cycles
}

/// Map a full solution (one value per variable) onto the `3n` wiring
/// positions. Padding positions read zero.
pub fn extend_witness<F: Scalar>(spr: &SparseR1CS<F>, n: usize, solution: &[F]) -> Result<Vec<F>> {
    if solution.len() != spr.nb_variables() {
        return Err(PlonkError::WitnessLength {
            expected: spr.nb_variables(),
            found: solution.len(),
        });
    }
    wiring(spr, n)?
        .into_iter()
        .enumerate()
        .map(|(pos, var)| match var {
            Some(var) => solution
                .get(var)
                .copied()
                .ok_or(PlonkError::VariableIndex {
                    row: pos % n,
                    variable_id: var,
                }),
            None => Ok(F::zero()),
        })
        .collect()
}

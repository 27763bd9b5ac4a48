//! Full and public witnesses: the binary codec and the mapping from named
//! circuit inputs.
//!
//! The binary layout is a big-endian `u32` element count followed by each
//! element as a fixed-width big-endian integer.

use crate::errors::{PlonkError, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use sparse_plonk_algebra::prelude::*;
use std::fmt;
use std::io::{ErrorKind, Read, Write};

/// Module for the input schema of a circuit.
pub mod schema;

pub use schema::{Assignment, LeafDescriptor, LeafValue, Schema, Visibility};

/// Size of the length prefix.
const LEN_PREFIX_BYTES: u64 = 4;

/// Elements reserved up front when decoding, whatever the announced length.
const MAX_PREALLOC: usize = 1 << 16;

/// An ordered vector of field elements: public inputs first, then secret
/// inputs when the witness is full.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness<F>(pub Vec<F>);

impl<F: Scalar> Witness<F> {
    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Test whether the witness is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the elements.
    pub fn vector(&self) -> &[F] {
        &self.0
    }

    /// Encode into `w`, returning the number of bytes written.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<u64> {
        let len = u32::try_from(self.0.len()).map_err(|_| {
            PlonkError::Message(format!("witness of {} elements is too long", self.0.len()))
        })?;
        w.write_u32::<BigEndian>(len)?;
        for e in self.0.iter() {
            let mut bytes = e.to_bytes();
            bytes.reverse();
            w.write_all(&bytes)?;
        }
        Ok(LEN_PREFIX_BYTES + len as u64 * F::bytes_len() as u64)
    }

    /// Decode from `r`, replacing the current elements, and return the
    /// number of bytes read. On error the witness is left untouched.
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> Result<u64> {
        let declared = r.read_u32::<BigEndian>()?;
        let elem_len = F::bytes_len();
        let mut offset = LEN_PREFIX_BYTES;

        let mut elements = Vec::with_capacity((declared as usize).min(MAX_PREALLOC));
        let mut buf = vec![0u8; elem_len];
        for index in 0..declared as usize {
            r.read_exact(&mut buf).map_err(|e| match e.kind() {
                ErrorKind::UnexpectedEof => PlonkError::WitnessTruncated { declared, offset },
                _ => PlonkError::Io(e),
            })?;
            buf.reverse();
            let e = F::from_bytes(&buf).map_err(|_| PlonkError::WitnessDecode { index, offset })?;
            elements.push(e);
            offset += elem_len as u64;
        }

        self.0 = elements;
        log::trace!("decoded a witness of {} elements ({} bytes)", declared, offset);
        Ok(offset)
    }

    /// Collect the values of an assignment, public inputs first then secret
    /// ones (skipped when `public_only`), each group in declaration order.
    pub fn from_assignment<A: Assignment<F>>(
        assignment: &A,
        public_only: bool,
    ) -> Result<(Self, Schema)> {
        let schema = A::schema();
        let mut values = Vec::with_capacity(schema.witness_len(public_only));
        for index in schema.witness_order(public_only) {
            let name = &schema.leaves[index].name;
            let value = assignment
                .leaf(index)
                .ok_or_else(|| PlonkError::MissingAssignment(name.clone()))?
                .into_field(name)?;
            values.push(value);
        }
        Ok((Witness(values), schema))
    }

    /// Write the values back into an assignment, in the order used by
    /// [`Witness::from_assignment`].
    pub fn to_assignment<A: Assignment<F>>(
        &self,
        assignment: &mut A,
        public_only: bool,
    ) -> Result<()> {
        let schema = A::schema();
        let expected = schema.witness_len(public_only);
        if self.0.len() != expected {
            return Err(PlonkError::WitnessLength {
                expected,
                found: self.0.len(),
            });
        }
        for (index, value) in schema.witness_order(public_only).into_iter().zip(self.0.iter()) {
            assignment.set_leaf(index, *value);
        }
        Ok(())
    }
}

impl<F: fmt::Display> fmt::Display for Witness<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for e in self.0.iter() {
            write!(f, "{},", e)?;
        }
        f.write_str("]")
    }
}

use crate::errors::{PlonkError, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use sparse_plonk_algebra::prelude::*;

/// Whether a circuit input is known to the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Known to everyone.
    Public,
    /// Known to the prover only.
    Secret,
}

/// One input of a circuit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafDescriptor {
    /// The qualified name of the input, e.g. `Inputs.X`.
    pub name: String,
    /// Its visibility.
    pub visibility: Visibility,
}

/// The ordered list of inputs of a circuit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// The inputs, in declaration order.
    pub leaves: Vec<LeafDescriptor>,
    /// Number of public inputs.
    pub nb_public: usize,
    /// Number of secret inputs.
    pub nb_secret: usize,
}

impl Schema {
    /// Build the schema of a static input list.
    pub fn new(leaves: &[(&str, Visibility)]) -> Self {
        let mut schema = Schema::default();
        for (name, visibility) in leaves {
            match visibility {
                Visibility::Public => schema.nb_public += 1,
                Visibility::Secret => schema.nb_secret += 1,
            }
            schema.leaves.push(LeafDescriptor {
                name: name.to_string(),
                visibility: *visibility,
            });
        }
        schema
    }

    /// Return the indices of the leaves in witness order: public leaves,
    /// then secret ones unless `public_only`.
    pub fn witness_order(&self, public_only: bool) -> Vec<usize> {
        let visible = |vis: Visibility| {
            self.leaves
                .iter()
                .enumerate()
                .filter(move |(_, leaf)| leaf.visibility == vis)
                .map(|(i, _)| i)
        };
        let mut order: Vec<usize> = visible(Visibility::Public).collect();
        if !public_only {
            order.extend(visible(Visibility::Secret));
        }
        order
    }

    /// Return the witness length for this schema.
    pub fn witness_len(&self, public_only: bool) -> usize {
        if public_only {
            self.nb_public
        } else {
            self.nb_public + self.nb_secret
        }
    }
}

/// The value held by one input of an assignment, before coercion into the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeafValue<F> {
    /// A field element.
    Field(F),
    /// An unsigned integer.
    U64(u64),
    /// A signed integer, negative values map to `p - |v|`.
    I64(i64),
    /// An arbitrary integer, reduced modulo the field size.
    BigUint(BigUint),
    /// A decimal string, optionally signed, or a `0x`-prefixed hexadecimal one.
    Decimal(String),
}

impl<F: Scalar> LeafValue<F> {
    /// Coerce into a field element; `name` is used for error reporting.
    pub fn into_field(self, name: &str) -> Result<F> {
        let conversion = |reason: &str| PlonkError::Conversion {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        match self {
            LeafValue::Field(f) => Ok(f),
            LeafValue::U64(v) => Ok(F::from(v)),
            LeafValue::I64(v) => {
                let abs = F::from(v.unsigned_abs());
                Ok(if v < 0 { abs.neg() } else { abs })
            }
            LeafValue::BigUint(v) => Ok(reduce(&v)),
            LeafValue::Decimal(s) => {
                let s = s.trim();
                let (negative, digits) = match s.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, s),
                };
                let (radix, digits) = match digits.strip_prefix("0x") {
                    Some(hex) => (16, hex),
                    None => (10, digits),
                };
                // parse_bytes alone would take a second sign or `_` separators
                let parsed = if !digits.is_empty()
                    && digits.chars().all(|c| c.is_digit(radix))
                {
                    BigUint::parse_bytes(digits.as_bytes(), radix)
                } else {
                    None
                };
                let v: F = reduce(&parsed.ok_or_else(|| conversion("not an integer literal"))?);
                Ok(if negative { v.neg() } else { v })
            }
        }
    }
}

fn reduce<F: Scalar>(v: &BigUint) -> F {
    F::from(&v.mod_floor(&F::get_field_size_biguint()))
}

/// A circuit's inputs, described by a static list of named leaves.
pub trait Assignment<F> {
    /// Names and visibilities of the inputs, in declaration order.
    const LEAVES: &'static [(&'static str, Visibility)];

    /// Return the value of the `index`-th leaf, if assigned.
    fn leaf(&self, index: usize) -> Option<LeafValue<F>>;

    /// Assign the `index`-th leaf.
    fn set_leaf(&mut self, index: usize, value: F);

    /// Return the schema of the inputs.
    fn schema() -> Schema {
        Schema::new(Self::LEAVES)
    }
}

#![allow(dead_code)]

use sparse_plonk::plonk::constraint_system::{SparseR1CS, SparseR1CSBuilder};
use sparse_plonk::witness::{Assignment, LeafValue, Visibility, Witness};
use sparse_plonk_algebra::{bn254::BN254Scalar, prelude::*};
use std::collections::BTreeMap;

pub type F = BN254Scalar;

/// A circuit with solutions that must be accepted and rejected.
pub struct TestCircuit {
    pub name: &'static str,
    pub circuit: SparseR1CS<F>,
    pub good: Vec<Vec<F>>,
    pub bad: Vec<Vec<F>>,
}

/// Circuits shared by the integration tests, keyed by name.
#[derive(Default)]
pub struct CircuitRegistry {
    circuits: BTreeMap<&'static str, TestCircuit>,
}

impl CircuitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, circuit: TestCircuit) {
        let name = circuit.name;
        assert!(
            self.circuits.insert(name, circuit).is_none(),
            "circuit {} registered twice",
            name
        );
    }

    pub fn get(&self, name: &str) -> Option<&TestCircuit> {
        self.circuits.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCircuit> {
        self.circuits.values()
    }
}

/// Every circuit known to the tests.
pub fn registry() -> CircuitRegistry {
    let mut registry = CircuitRegistry::new();
    registry.register(add_gate());
    for (b0, b1) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        registry.register(lookup2(b0, b1));
    }
    registry
}

/// `x + y = z` with `x`, `y` public.
pub fn add_gate() -> TestCircuit {
    let mut builder = SparseR1CSBuilder::<F>::new(2, 1);
    let x = builder.public_variable(0);
    let y = builder.public_variable(1);
    let z = builder.secret_variable(0);
    builder.insert_add_gate(x, y, z);

    let v = |n: u32| F::from(n);
    TestCircuit {
        name: "add_gate",
        circuit: builder.build(),
        good: vec![vec![v(2), v(3), v(5)], vec![v(0), v(0), v(0)]],
        bad: vec![vec![v(2), v(3), v(6)]],
    }
}

/// Inputs of the lookup2 circuit: `expected == inputs[b0 + 2 * b1]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lookup2 {
    pub b0: Option<u64>,
    pub b1: Option<u64>,
    pub inputs: [Option<F>; 4],
    pub expected: Option<F>,
}

impl Lookup2 {
    pub fn new(b0: u64, b1: u64, inputs: [F; 4], expected: F) -> Self {
        Lookup2 {
            b0: Some(b0),
            b1: Some(b1),
            inputs: inputs.map(Some),
            expected: Some(expected),
        }
    }
}

impl Assignment<F> for Lookup2 {
    const LEAVES: &'static [(&'static str, Visibility)] = &[
        ("Lookup2.B0", Visibility::Secret),
        ("Lookup2.B1", Visibility::Secret),
        ("Lookup2.In0", Visibility::Secret),
        ("Lookup2.In1", Visibility::Secret),
        ("Lookup2.In2", Visibility::Secret),
        ("Lookup2.In3", Visibility::Secret),
        ("Lookup2.Expected", Visibility::Public),
    ];

    fn leaf(&self, index: usize) -> Option<LeafValue<F>> {
        match index {
            0 => self.b0.map(LeafValue::U64),
            1 => self.b1.map(LeafValue::U64),
            2..=5 => self.inputs[index - 2].map(LeafValue::Field),
            6 => self.expected.map(LeafValue::Field),
            _ => None,
        }
    }

    fn set_leaf(&mut self, index: usize, value: F) {
        let small = |v: F| {
            if v.is_zero() {
                0
            } else {
                1
            }
        };
        match index {
            0 => self.b0 = Some(small(value)),
            1 => self.b1 = Some(small(value)),
            2..=5 => self.inputs[index - 2] = Some(value),
            6 => self.expected = Some(value),
            _ => {}
        }
    }
}

/// Variable layout: `expected`, then `b0, b1, in0..in3`, then the
/// internal variables in allocation order.
fn lookup2_circuit() -> SparseR1CS<F> {
    let mut builder = SparseR1CSBuilder::<F>::new(1, 6);
    let expected = builder.public_variable(0);
    let b0 = builder.secret_variable(0);
    let b1 = builder.secret_variable(1);
    let i: Vec<_> = (2..6).map(|k| builder.secret_variable(k)).collect();

    let t1 = builder.new_internal_variable();
    let t2 = builder.new_internal_variable();
    let t3 = builder.new_internal_variable();
    let t4 = builder.new_internal_variable();
    let u1 = builder.new_internal_variable();
    let u2 = builder.new_internal_variable();
    let b01 = builder.new_internal_variable();
    let u3 = builder.new_internal_variable();
    let s1 = builder.new_internal_variable();
    let s2 = builder.new_internal_variable();
    let out = builder.new_internal_variable();

    builder.insert_boolean_gate(b0);
    builder.insert_boolean_gate(b1);
    builder.insert_sub_gate(i[1], i[0], t1);
    builder.insert_sub_gate(i[2], i[0], t2);
    builder.insert_sub_gate(i[3], i[2], t3);
    builder.insert_sub_gate(t3, t1, t4);
    builder.insert_mul_gate(b0, t1, u1);
    builder.insert_mul_gate(b1, t2, u2);
    builder.insert_mul_gate(b0, b1, b01);
    builder.insert_mul_gate(b01, t4, u3);
    builder.insert_add_gate(i[0], u1, s1);
    builder.insert_add_gate(s1, u2, s2);
    builder.insert_add_gate(s2, u3, out);
    builder.assert_equal(out, expected);
    builder.build()
}

/// Extend a full witness of [`Lookup2`] with the internal variables.
pub fn lookup2_solution(witness: &Witness<F>) -> Vec<F> {
    let w = witness.vector();
    let (b0, b1) = (w[1], w[2]);
    let i = &w[3..7];
    let t1 = i[1].sub(&i[0]);
    let t2 = i[2].sub(&i[0]);
    let t3 = i[3].sub(&i[2]);
    let t4 = t3.sub(&t1);
    let u1 = b0.mul(&t1);
    let u2 = b1.mul(&t2);
    let b01 = b0.mul(&b1);
    let u3 = b01.mul(&t4);
    let s1 = i[0].add(&u1);
    let s2 = s1.add(&u2);
    let out = s2.add(&u3);

    let mut solution = w.to_vec();
    solution.extend([t1, t2, t3, t4, u1, u2, b01, u3, s1, s2, out]);
    solution
}

pub fn lookup2_inputs() -> [F; 4] {
    [0u32, 1, 2, 3].map(F::from)
}

/// The value selected by `(b0, b1)`, and a wrong one for the same bits.
pub fn lookup2_expected(b0: u64, b1: u64) -> (F, F) {
    match (b0, b1) {
        (0, 0) => (F::from(0u32), F::from(1u32)),
        (1, 0) => (F::from(1u32), F::from(0u32)),
        (0, 1) => (F::from(2u32), F::from(0u32)),
        _ => (F::from(3u32), F::from(0u32)),
    }
}

/// One `lookup2-<b0><b1>` entry per selector pair.
pub fn lookup2(b0: u64, b1: u64) -> TestCircuit {
    let name = match (b0, b1) {
        (0, 0) => "lookup2-00",
        (1, 0) => "lookup2-10",
        (0, 1) => "lookup2-01",
        _ => "lookup2-11",
    };
    let inputs = lookup2_inputs();
    let (expected, unexpected) = lookup2_expected(b0, b1);
    let solution = |expected: F| {
        let assignment = Lookup2::new(b0, b1, inputs, expected);
        let (witness, _) = Witness::<F>::from_assignment(&assignment, false).unwrap();
        lookup2_solution(&witness)
    };
    TestCircuit {
        name,
        circuit: lookup2_circuit(),
        good: vec![solution(expected)],
        bad: vec![solution(unexpected)],
    }
}

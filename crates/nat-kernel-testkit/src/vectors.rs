//! Golden test vectors with known expected results.
//!
//! Each vector is applied for every (receiver, operand) representation
//! pairing, and every pairing must agree with the expected value.

use nat_kernel_core::NaturalError;
use nat_kernel_repr::NaturalNumber;

use crate::fixtures::{all_pairings, Pairing};

/// An operation applied to a vector's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(&'static str),
    Subtract(&'static str),
    Multiply(&'static str),
    Divide(&'static str),
    Power(u32),
    Root(u32),
    Increment,
    Decrement,
}

impl Operation {
    /// The operand value, for binary operations.
    pub fn operand(&self) -> Option<&'static str> {
        match *self {
            Self::Add(s) | Self::Subtract(s) | Self::Multiply(s) | Self::Divide(s) => Some(s),
            _ => None,
        }
    }

    /// Apply to `receiver`, reading `operand` for binary operations.
    pub fn apply(
        &self,
        receiver: &mut dyn NaturalNumber,
        operand: &mut dyn NaturalNumber,
    ) -> Result<(), NaturalError> {
        match *self {
            Self::Add(_) => receiver.add(operand),
            Self::Subtract(_) => return receiver.subtract(operand),
            Self::Multiply(_) => receiver.multiply(operand),
            Self::Divide(_) => return receiver.divide(operand),
            Self::Power(p) => receiver.power(p),
            Self::Root(r) => return receiver.root(r),
            Self::Increment => receiver.increment(),
            Self::Decrement => return receiver.decrement(),
        }
        Ok(())
    }
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    pub name: &'static str,
    pub input: &'static str,
    pub op: Operation,
    pub expected: Result<&'static str, NaturalError>,
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "add_small",
            input: "8",
            op: Operation::Add("5"),
            expected: Ok("13"),
        },
        GoldenVector {
            name: "add_carry_chain",
            input: "999999999999999999999",
            op: Operation::Add("1"),
            expected: Ok("1000000000000000000000"),
        },
        GoldenVector {
            name: "subtract_to_zero",
            input: "12345",
            op: Operation::Subtract("12345"),
            expected: Ok("0"),
        },
        GoldenVector {
            name: "subtract_negative",
            input: "5",
            op: Operation::Subtract("8"),
            expected: Err(NaturalError::NegativeResult),
        },
        GoldenVector {
            name: "multiply_large",
            input: "123456789012345678901234567890",
            op: Operation::Multiply("987654321098765432109876543210"),
            expected: Ok("121932631137021795226185032733622923332237463801111263526900"),
        },
        GoldenVector {
            name: "multiply_by_zero",
            input: "4096",
            op: Operation::Multiply("0"),
            expected: Ok("0"),
        },
        GoldenVector {
            name: "divide_rounds_down",
            input: "1000000000000000000000",
            op: Operation::Divide("7"),
            expected: Ok("142857142857142857142"),
        },
        GoldenVector {
            name: "divide_by_zero",
            input: "1",
            op: Operation::Divide("0"),
            expected: Err(NaturalError::DivisionByZero),
        },
        GoldenVector {
            name: "power_2_64",
            input: "2",
            op: Operation::Power(64),
            expected: Ok("18446744073709551616"),
        },
        GoldenVector {
            name: "power_zero",
            input: "12",
            op: Operation::Power(0),
            expected: Ok("1"),
        },
        GoldenVector {
            name: "square_root_exact",
            input: "64",
            op: Operation::Root(2),
            expected: Ok("8"),
        },
        GoldenVector {
            name: "cube_root_exact",
            input: "64",
            op: Operation::Root(3),
            expected: Ok("4"),
        },
        GoldenVector {
            name: "square_root_floor",
            input: "99",
            op: Operation::Root(2),
            expected: Ok("9"),
        },
        GoldenVector {
            name: "square_root_large",
            input: "10000000000000000000000000000000000000000",
            op: Operation::Root(2),
            expected: Ok("100000000000000000000"),
        },
        GoldenVector {
            name: "cube_root_large",
            input: "12345678901234567890123",
            op: Operation::Root(3),
            expected: Ok("23112042"),
        },
        GoldenVector {
            name: "root_index_one",
            input: "64",
            op: Operation::Root(1),
            expected: Err(NaturalError::InvalidRootIndex(1)),
        },
        GoldenVector {
            name: "root_of_zero",
            input: "0",
            op: Operation::Root(2),
            expected: Ok("0"),
        },
        GoldenVector {
            name: "increment_carry",
            input: "999",
            op: Operation::Increment,
            expected: Ok("1000"),
        },
        GoldenVector {
            name: "decrement_zero",
            input: "0",
            op: Operation::Decrement,
            expected: Err(NaturalError::NegativeResult),
        },
    ]
}

/// Run one vector against one pairing.
///
/// Returns a description of the first mismatch, if any.
fn check_pairing(vector: &GoldenVector, pairing: &mut Pairing) -> Option<String> {
    let operand_value = vector.op.operand().unwrap_or("0");
    let outcome = vector
        .op
        .apply(&mut *pairing.receiver, &mut *pairing.operand);

    let receiver = pairing.receiver.to_decimal_string();
    let operand = pairing.operand.to_decimal_string();
    if operand != operand_value {
        return Some(format!("operand changed to {}", operand));
    }

    match (&vector.expected, outcome) {
        (Ok(expected), Ok(())) if receiver == *expected => None,
        (Ok(expected), Ok(())) => Some(format!("expected {}, got {}", expected, receiver)),
        (Ok(_), Err(e)) => Some(format!("unexpected error: {}", e)),
        (Err(expected), Err(e)) if *expected != e => {
            Some(format!("expected {:?}, got {:?}", expected, e))
        }
        (Err(_), Err(_)) if receiver != vector.input => {
            Some(format!("receiver changed to {} on error", receiver))
        }
        (Err(_), Err(_)) => None,
        (Err(expected), Ok(())) => Some(format!("expected {:?}, got {}", expected, receiver)),
    }
}

/// Verify every vector across every representation pairing.
///
/// Returns `(name, passed, detail)` per vector and pairing.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let mut results = Vec::new();

    for vector in all_vectors() {
        let operand = vector.op.operand().unwrap_or("0");
        for mut pairing in all_pairings(vector.input, operand) {
            let name = format!("{} [{}]", vector.name, pairing.label());
            match check_pairing(&vector, &mut pairing) {
                None => results.push((name, true, "OK".to_string())),
                Some(detail) => results.push((name, false, detail)),
            }
        }
    }

    results
}

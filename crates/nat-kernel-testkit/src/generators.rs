//! Proptest generators for property-based testing.

use proptest::prelude::*;

use nat_kernel_core::Digit;
use nat_kernel_repr::NaturalNumber;

use crate::fixtures::Representation;

/// Generate a single digit.
pub fn digit() -> impl Strategy<Value = Digit> {
    (0u8..10).prop_filter_map("digit out of range", Digit::new)
}

/// Generate a canonical digit string of at most `max_len` digits.
pub fn digit_string(max_len: usize) -> impl Strategy<Value = String> {
    let max_tail = max_len.saturating_sub(1);
    prop_oneof![
        1 => Just("0".to_string()),
        9 => proptest::string::string_regex(&format!("[1-9][0-9]{{0,{}}}", max_tail))
            .expect("valid regex"),
    ]
}

/// Generate a string the digit grammar rejects.
pub fn malformed_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "0[0-9]{1,8}",
        "[-+][0-9]{1,8}",
        "[0-9]{0,4}[a-z _,.-][0-9]{0,4}",
    ]
}

/// Generate a representation.
pub fn representation() -> impl Strategy<Value = Representation> {
    prop_oneof![
        Just(Representation::Big),
        Just(Representation::Limb),
        Just(Representation::Digit),
    ]
}

/// Parameters for generating a natural number.
#[derive(Debug, Clone)]
pub struct NaturalParams {
    pub repr: Representation,
    pub value: String,
}

impl Arbitrary for NaturalParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (representation(), digit_string(60))
            .prop_map(|(repr, value)| NaturalParams { repr, value })
            .boxed()
    }
}

/// Generate a natural number from parameters.
pub fn natural_from_params(params: &NaturalParams) -> Box<dyn NaturalNumber> {
    crate::fixtures::natural(params.repr, &params.value)
}

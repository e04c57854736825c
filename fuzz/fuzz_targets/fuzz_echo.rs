#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mypackage::{DEFAULT_FALLBACK, echo, echo_or_default};

#[derive(Debug, Arbitrary)]
struct Input {
    value: Option<String>,
    fallback: String,
}

fuzz_target!(|input: Input| {
    let out = echo(input.value.as_deref(), &input.fallback);
    match &input.value {
        Some(v) => assert_eq!(out, v),
        None => assert_eq!(out, input.fallback),
    }

    let out = echo_or_default(input.value.as_deref());
    assert_eq!(out, input.value.as_deref().unwrap_or(DEFAULT_FALLBACK));
});

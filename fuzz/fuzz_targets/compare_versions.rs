#![no_main]

use libfuzzer_sys::fuzz_target;
use versionsort::{compare_versions, parse};

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = data;
    assert_eq!(compare_versions(a, b), compare_versions(b, a).reverse());
    assert_eq!(parse(a).to_string(), a);
});

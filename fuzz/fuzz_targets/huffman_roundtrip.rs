#![no_main]
use huffcode::{build_frequency_table, build_tree, decode, encode, generate_codes, Bit, BitString};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<bool>)| {
    let (input, noise) = data;

    let tree = build_tree(&build_frequency_table(&input));
    let codes = generate_codes(&tree);
    let bits = encode(&input, &codes);
    assert_eq!(decode(&bits, &tree), input);

    // Arbitrary bits must decode without panicking.
    let noise: BitString = noise.into_iter().map(Bit::from).collect();
    let out = decode(&noise, &tree);
    assert!(out.len() <= noise.len());
});

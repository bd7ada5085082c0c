use afl::fuzz;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tax_code_validator::{is_valid_tax_code, TaxCode};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

/// Lower-cases some ASCII letters and sprinkles whitespace, neither of which may change the
/// outcome.
fn gen_equivalent_candidate(input: &str, rng: &mut StdRng) -> String {
    let mut candidate = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        if rng.gen_bool(0.2) {
            candidate.push(match rng.gen_range::<u8, _>(0..3) {
                0 => ' ',
                1 => '\t',
                _ => '\n',
            });
        }
        if c.is_ascii_uppercase() && rng.gen_bool(0.5) {
            candidate.push(c.to_ascii_lowercase());
        } else {
            candidate.push(c);
        }
    }
    candidate
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let is_valid = is_valid_tax_code(Some(input));
    let parsed = TaxCode::parse(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Parsed: {:?}", parsed);
    }

    assert_eq!(is_valid, parsed.is_ok());

    if let Ok(tax_code) = parsed {
        // a valid code is its own normal form
        assert!(is_valid_tax_code(Some(tax_code.as_str())));
        assert_eq!(
            TaxCode::from_prefix(&tax_code.as_str()[..15]).as_ref(),
            Ok(&tax_code)
        );
    }

    let candidate = gen_equivalent_candidate(input, &mut rng);
    #[cfg(feature = "manual_test")]
    println!("Equivalent candidate: {:?}", candidate);
    assert_eq!(is_valid_tax_code(Some(&candidate)), is_valid);
}

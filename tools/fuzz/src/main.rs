use afl::fuzz;
use cnpj_normalizer::{check_format, is_valid_format, parse_cnpj, remove_mask, CNPJ_LENGTH};
use rand::{rngs::StdRng, Rng, SeedableRng};

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

/// Sprinkles mask characters and flips the case of letters, neither of which
/// may change the outcome of validating or parsing.
fn gen_masked_variant(input: &str, rng: &mut StdRng) -> String {
    let mut masked = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        if rng.gen_bool(0.2) {
            masked.push(['.', '/', '-'][rng.gen_range(0..3)]);
        }
        if rng.gen_bool(0.5) {
            masked.push(c.to_ascii_lowercase());
        } else {
            masked.push(c);
        }
    }
    masked
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let normalized = remove_mask(input);
    assert_eq!(remove_mask(&normalized), normalized);

    let format_result = check_format(input);
    assert_eq!(format_result.is_ok(), is_valid_format(input));

    let parse_result = parse_cnpj(input);
    assert_eq!(
        parse_result.is_ok(),
        normalized.chars().count() == CNPJ_LENGTH
    );

    if let Ok(valid) = format_result {
        assert_eq!(valid, normalized);
        let parsed = parse_result.expect("a valid CNPJ can always be parsed");
        assert_eq!(parsed.to_string(), normalized);

        let variant = gen_masked_variant(input, &mut rng);
        #[cfg(feature = "manual_test")]
        println!("Masked variant: {:?}", variant);
        assert_eq!(check_format(&variant), Ok(normalized));
    }
}

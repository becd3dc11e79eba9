use rand::Rng;

/// Infinite stream of random bitstrings of length `n`. The density of ones varies with the
/// position in the stream so that both sparse and dense subsets show up.
pub fn generate_random_bitstrings(
    rng: &mut impl Rng,
    n: usize,
) -> impl Iterator<Item = String> + '_ {
    (0..).map(move |i| {
        let density = 0.1 + 0.1 * (i % 7) as f64;
        (0..n)
            .map(|_| if rng.gen_bool(density) { '1' } else { '0' })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn stream_produces_bitstrings() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for bits in generate_random_bitstrings(&mut rng, 17).take(50) {
            assert_eq!(bits.len(), 17);
            assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));
        }
    }
}

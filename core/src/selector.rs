use rand::Rng;

/// Pick the dimensions to mutate for one candidate. Each of the `dimensions`
/// indices is kept independently with probability `1 / dimensions`, so on
/// average one dimension changes. The result is ascending and may be empty.
pub fn select_dimensions<R: Rng + ?Sized>(dimensions: usize, rng: &mut R) -> Vec<usize> {
    if dimensions == 0 {
        return Vec::new();
    }
    let probability = 1.0 / dimensions as f64;
    (0..dimensions)
        .filter(|_| rng.gen_bool(probability))
        .collect()
}

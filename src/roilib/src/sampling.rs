// Seeded random sampling for the uncertainty engine
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};


// All draws come from one seeded generator so a batch is reproducible
// given the same seed and draw order.
pub struct Sampler {
    rng: StdRng,
}
impl Sampler {
    pub fn seeded(seed: u64) -> Self {
        Self{rng: StdRng::seed_from_u64(seed)}
    }
    pub fn normal(&mut self, mean: f64, std_dev: f64, n: usize) -> Vec<f64> {
        match Normal::new(mean, std_dev) {
            Ok(dist) => (0..n).map(|_| dist.sample(&mut self.rng)).collect(),
            // Degenerate spread (negative or non-finite), sample the point estimate
            Err(_) => vec![mean; n],
        }
    }
}

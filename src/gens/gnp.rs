use itertools::Itertools;

use super::*;

/// The probability can be given directly or as the expected number of friends per person
#[derive(Debug, Copy, Clone, Default)]
enum ProbType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a person
    AvgDeg(f64),
}

/// `G(n,p)` networks contain every possible friendship among `n` people with probability `p`
/// independent from each other. People are named `p0` to `p{n-1}`.
///
/// # Example
/// ```
/// use friendgraph::{prelude::*, gens::*};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let rng = &mut StdRng::seed_from_u64(7);
/// let graph = RandomFriendships::new().people(10).prob(1.0).generate_graph(rng).unwrap();
///
/// assert_eq!(graph.number_of_nodes(), 10);
/// assert_eq!(graph.number_of_edges(), 45);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomFriendships {
    n: NumNodes,
    p: ProbType,
}

impl RandomFriendships {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "Invalid probability {prob}!");
        self.p = ProbType::Prob(prob);
        self
    }

    /// Updates `p` such that every person has `deg` friends in expectation.
    /// Note that this conversion will only be done when calling `stream/generate`.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.p = ProbType::AvgDeg(deg);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            ProbType::NotSet => panic!("Probability of RandomFriendships was not set!"),
            ProbType::Prob(p) => p,
            ProbType::AvgDeg(d) => {
                let p = d / (self.n.max(2) - 1) as f64;
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given number of people!"
                );
                p
            }
        }
    }

    /// Generates a whole network with people `p0..p{n-1}`.
    /// The capacity of the graph is large enough to hold all of them.
    pub fn generate_graph<R>(&self, rng: &mut R) -> Result<FriendGraph, GraphError>
    where
        R: Rng,
    {
        FriendGraph::from_edges((0..self.n).map(|u| format!("p{u}")), self.stream(rng))
    }
}

impl NumPeopleGen for RandomFriendships {
    /// Updates `n`
    fn people(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for RandomFriendships {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let p = self.probability();

        // The network is small; testing all `n choose 2` pairs is cheaper than geometric jumps
        (0..self.n)
            .tuple_combinations()
            .filter(|_| rng.random_bool(p))
            .map(|(u, v)| Edge(u, v))
            .collect_vec()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let none = RandomFriendships::new().people(8).prob(0.0).generate(rng);
        assert!(none.is_empty());

        let all = RandomFriendships::new().people(8).prob(1.0).generate(rng);
        assert_eq!(all.len(), 8 * 7 / 2);
        assert!(all.iter().all(|e| e.is_normalized() && !e.is_loop()));
    }

    #[test]
    fn generated_graph_is_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [2, 5, 25] {
            let graph = RandomFriendships::new()
                .people(n)
                .avg_deg(1.0)
                .generate_graph(rng)
                .unwrap();

            assert_eq!(graph.number_of_nodes(), n);
            assert!(graph.capacity() >= n as usize);
            assert_eq!(graph.find_by_name(&format!("p{}", n - 1)), Some(n - 1));
            assert!(graph.adjacency_matrix().is_symmetric());
            assert_eq!(
                graph.edges(true).count(),
                graph.number_of_edges() as usize
            );
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let generator = RandomFriendships::new().people(12).prob(0.3);
        let a = generator.generate(&mut Pcg64Mcg::seed_from_u64(11));
        let b = generator.generate(&mut Pcg64Mcg::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn missing_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        RandomFriendships::new().people(4).generate(rng);
    }
}

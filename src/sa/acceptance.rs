//! Metropolis acceptance criterion for a maximization objective.

/// Probability of moving from a solution worth `current` to one worth
/// `candidate` at `temperature`.
///
/// Strict improvements return exactly `1.0`. Otherwise the result is
/// `exp((candidate - current) / temperature)`, which is `1.0` for ties and
/// shrinks toward 0 as the gap widens or the temperature drops.
///
/// `temperature` must be positive.
pub fn acceptance_probability(current: u64, candidate: u64, temperature: f64) -> f64 {
    if candidate > current {
        return 1.0;
    }
    ((candidate as f64 - current as f64) / temperature).exp()
}

/// Accepts when the uniform `draw` in `[0, 1)` falls strictly below `probability`.
pub fn accepts(probability: f64, draw: f64) -> bool {
    draw < probability
}

use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scatter `count` star positions uniformly in the cube
/// `[-spread / 2, spread / 2)³` centred on the origin.
///
/// With a seed the field is reproducible; without one it differs per run.
/// A zero or non-finite spread puts every star at the origin.
#[must_use]
pub fn scatter_stars(count: u32, spread: f64, seed: Option<u64>) -> Vec<DVec3> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let half = spread.abs() / 2.0;
    if !half.is_finite() {
        log::warn!("star spread {spread} is not finite, collapsing the starfield");
        return vec![DVec3::ZERO; count as usize];
    }
    if half == 0.0 {
        return vec![DVec3::ZERO; count as usize];
    }

    (0..count)
        .map(|_| {
            DVec3::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_field_is_reproducible() {
        let first = scatter_stars(700, 400.0, Some(42));
        let second = scatter_stars(700, 400.0, Some(42));
        assert_eq!(first.len(), 700);
        assert_eq!(first, second);
        assert_ne!(first, scatter_stars(700, 400.0, Some(43)));
    }

    #[test]
    fn stars_stay_inside_the_spread() {
        let stars = scatter_stars(2000, 400.0, None);
        assert!(stars
            .iter()
            .all(|s| s.abs().max_element() <= 200.0));
    }

    #[test]
    fn zero_spread_collapses_to_origin() {
        let stars = scatter_stars(3, 0.0, Some(1));
        assert_eq!(stars, vec![DVec3::ZERO; 3]);
    }

    #[test]
    fn non_finite_spread_collapses_to_origin() {
        assert_eq!(scatter_stars(2, f64::INFINITY, Some(1)), vec![DVec3::ZERO; 2]);
        assert_eq!(scatter_stars(2, f64::NAN, None), vec![DVec3::ZERO; 2]);
    }
}

/*
 * Physics Module
 *
 * This module drives the fish motion model for a whole school.
 * It contains functions for spawning the fixed population at scene setup
 * and for stepping every fish once per rendered frame.
 *
 * Fish never interact, so each step only touches the fish it is given
 * and the order of updates across the school does not matter.
 */

use rand::Rng;

use crate::domain::Domain;
use crate::fish::Fish;
use crate::FISH_VARIANTS;

// Advance one fish by one frame
pub fn step(fish: &mut Fish, domain: &Domain) {
    fish.step(domain);
}

// Advance every fish in the school by one frame
pub fn update_school(school: &mut [Fish], domain: &Domain) {
    for fish in school.iter_mut() {
        step(fish, domain);
    }
}

// Create the school, cycling through the fish artwork variants in order
pub fn spawn_school<R: Rng>(rng: &mut R, count: usize, domain: &Domain) -> Vec<Fish> {
    let mut school = Vec::with_capacity(count);

    for i in 0..count {
        school.push(Fish::random(rng, domain, i % FISH_VARIANTS));
    }

    log::debug!(
        "spawned {} fish in a {:.0}x{:.0} pond (padding {:.0})",
        school.len(),
        domain.width,
        domain.height,
        domain.padding
    );

    school
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_school_has_fixed_size_and_cycles_variants() {
        let mut rng = SmallRng::seed_from_u64(42);
        let domain = Domain::new(800.0, 600.0, 100.0);
        let school = spawn_school(&mut rng, 20, &domain);

        assert_eq!(school.len(), 20);
        for (i, fish) in school.iter().enumerate() {
            assert_eq!(fish.variant, i % FISH_VARIANTS);
        }
    }

    #[test]
    fn spawn_school_is_deterministic_for_a_seed() {
        let domain = Domain::new(800.0, 600.0, 100.0);
        let a = spawn_school(&mut SmallRng::seed_from_u64(9), 20, &domain);
        let b = spawn_school(&mut SmallRng::seed_from_u64(9), 20, &domain);
        assert_eq!(a, b);
    }

    #[test]
    fn update_school_steps_every_fish_once() {
        let domain = Domain::new(800.0, 600.0, 100.0);
        let mut school = vec![
            Fish::new(vec2(100.0, 100.0), 0.0, 2.0, 0.0),
            Fish::new(vec2(200.0, 200.0), 0.0, 3.0, 0.0),
        ];

        update_school(&mut school, &domain);

        assert_eq!(school[0].position, vec2(100.0, 102.0));
        assert_eq!(school[1].position, vec2(200.0, 203.0));
    }

    #[test]
    fn update_school_on_empty_school_is_noop() {
        let domain = Domain::new(800.0, 600.0, 100.0);
        let mut school: Vec<Fish> = Vec::new();
        update_school(&mut school, &domain);
        assert!(school.is_empty());
    }
}

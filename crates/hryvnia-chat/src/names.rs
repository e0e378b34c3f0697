//! Display names for anonymous peers.

use rand::Rng;
use rand::seq::IndexedRandom;

const FIRST_NAMES: [&str; 16] = [
    "Anna", "Bohdan", "Daria", "Denys", "Iryna", "Ivan", "Kateryna", "Maksym", "Marta",
    "Mykola", "Oksana", "Oleh", "Olena", "Petro", "Sofia", "Taras",
];

const LAST_NAMES: [&str; 16] = [
    "Bondarenko", "Boyko", "Hnatyuk", "Kovalchuk", "Kovalenko", "Kravchenko", "Lysenko",
    "Melnyk", "Moroz", "Oliynyk", "Pavlenko", "Rudenko", "Savchenko", "Shevchenko",
    "Tkachenko", "Zhuk",
];

/// Picks a random full display name.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Anonymous");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Peer");
    format!("{first} {last}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_name_comes_from_the_lists() {
        let mut rng = rand::rng();
        for _ in 0..32 {
            let name = random_name(&mut rng);
            let (first, last) = name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first), "{name}");
            assert!(LAST_NAMES.contains(&last), "{name}");
        }
    }

    #[test]
    fn test_same_seed_same_name() {
        let a = random_name(&mut StdRng::seed_from_u64(7));
        let b = random_name(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lists_are_sorted() {
        assert!(FIRST_NAMES.is_sorted());
        assert!(LAST_NAMES.is_sorted());
    }
}

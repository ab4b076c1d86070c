//! Randomized differential tests against `std::collections::BTreeMap`.

use avltreemap::AvlTreeMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

fn assert_same(map: &AvlTreeMap<i32, u64>, reference: &BTreeMap<i32, u64>) {
    assert_eq!(map.len(), reference.len());
    assert!(map.iter().eq(reference.iter()));
    assert!(map.iter().rev().eq(reference.iter().rev()));
    assert_eq!(map.first_key_value(), reference.first_key_value());
    assert_eq!(map.last_key_value(), reference.last_key_value());
}

#[test]
fn test_random_inserts_and_removes_vs_btreemap() {
    const OPERATIONS: usize = 20_000;
    const KEY_SPACE: i32 = 2_000;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut map = AvlTreeMap::new();
    let mut reference = BTreeMap::new();

    for step in 0..OPERATIONS {
        let key = rng.gen_range(0..KEY_SPACE);
        match rng.gen_range(0..10) {
            0..=4 => {
                let value = rng.gen::<u64>();
                let (_, inserted) = map.insert(key, value);
                let expected = !reference.contains_key(&key);
                reference.entry(key).or_insert(value);
                assert_eq!(inserted, expected, "insert {} at step {}", key, step);
            }
            5..=7 => {
                assert_eq!(map.remove(&key), reference.remove(&key), "remove {}", key);
            }
            8 => {
                assert_eq!(map.get(&key), reference.get(&key));
                assert_eq!(map.count(&key), usize::from(reference.contains_key(&key)));
            }
            _ => {
                if let (Some(mine), Some(theirs)) = (map.get_mut(&key), reference.get_mut(&key)) {
                    *mine = mine.wrapping_add(1);
                    *theirs = theirs.wrapping_add(1);
                }
            }
        }

        if step % 1_000 == 0 {
            assert_eq!(map.check_invariants_detailed(), Ok(()), "step {}", step);
            assert_same(&map, &reference);
        }
    }

    assert!(map.check_invariants());
    assert_same(&map, &reference);
}

#[test]
fn test_random_erase_through_handles_vs_btreemap() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut map = AvlTreeMap::new();
    let mut reference = BTreeMap::new();
    for _ in 0..3_000 {
        let key = rng.gen_range(-5_000..5_000);
        map.insert(key, key as u64);
        reference.entry(key).or_insert(key as u64);
    }

    while !reference.is_empty() {
        let index = rng.gen_range(0..reference.len());
        let key = *reference.keys().nth(index).unwrap();
        let pos = map.find(&key);
        let successor = map.next_handle(pos).unwrap();

        assert_eq!(map.erase(pos), Ok((key, key as u64)));
        reference.remove(&key);

        // The successor handle still names the next larger key.
        let expected = reference.range(key..).next();
        assert_eq!(map.entry_at(successor), expected);
        if reference.len() % 250 == 0 {
            assert!(map.check_invariants());
        }
    }
    assert!(map.is_empty());
    assert_eq!(map.arena_stats().allocated_count, 1);
}

#[test]
fn test_height_stays_logarithmic() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut map = AvlTreeMap::new();
    for _ in 0..50_000 {
        map.insert(rng.gen::<u32>(), ());
    }
    let n = map.len() as f64;
    let bound = 1.4405 * (n + 2.0).log2() - 0.3277;
    assert!(
        (map.height() as f64) <= bound,
        "height {} exceeds AVL bound {:.1} for {} entries",
        map.height(),
        bound,
        map.len()
    );
}

#[test]
fn test_iter_mut_vs_btreemap() {
    let mut map: AvlTreeMap<i32, u64> = (0..1_000).map(|i| (i, 0)).collect();
    let mut reference: BTreeMap<i32, u64> = (0..1_000).map(|i| (i, 0)).collect();
    for ((k, mine), (_, theirs)) in map.iter_mut().zip(reference.iter_mut()) {
        *mine = (*k as u64) * 3;
        *theirs = (*k as u64) * 3;
    }
    assert_same(&map, &reference);

    let owned: Vec<_> = map.into_iter().collect();
    let expected: Vec<_> = reference.into_iter().collect();
    assert_eq!(owned, expected);
}

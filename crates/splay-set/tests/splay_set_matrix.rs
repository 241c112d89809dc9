mod common;

use common::{init_logging, walk, walk_back};
use splay_set::{splay_set, SplaySet};

#[test]
fn splay_set_scenario_matrix() {
    init_logging();
    let mut set = SplaySet::new();
    for v in [5, 3, 8, 1, 4] {
        assert!(set.insert(v));
    }
    assert_eq!(set.len(), 5);
    assert_eq!(walk(&set), vec![1, 3, 4, 5, 8]);

    let hit = set.find(&4);
    assert_eq!(set.get(hit), Ok(&4));
    assert_eq!(set.root_value(), Some(&4));

    assert!(set.erase(&5));
    assert_eq!(walk(&set), vec![1, 3, 4, 8]);
    assert_eq!(set.len(), 4);
    assert_eq!(set.find(&5), set.end());

    let lb = set.lower_bound(&6);
    assert_eq!(set.get(lb), Ok(&8));
    assert_eq!(set.lower_bound(&9), set.end());
    set.assert_valid().unwrap();
}

#[test]
fn splay_set_empty_boundary_matrix() {
    let mut set = SplaySet::<i32>::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.begin(), set.end());
    assert_eq!(set.find(&1), set.end());
    assert_eq!(set.lower_bound(&1), set.end());
    assert!(!set.erase(&1));
    assert_eq!(set.len(), 0);
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    assert_eq!(set.root_value(), None);
    assert_eq!(set.iter().next(), None);
    assert_eq!(set.to_tree_string(), "SplaySet ∅");
    set.assert_valid().unwrap();
}

#[test]
fn splay_set_duplicate_insert_matrix() {
    let mut set = splay_set![10, 20, 30];
    assert_eq!(set.len(), 3);

    assert!(!set.insert(10));
    assert_eq!(set.len(), 3);
    // The duplicate is not stored, but its twin is re-rooted.
    assert_eq!(set.root_value(), Some(&10));

    let hit = set.find(&10);
    assert!(hit.is_accessible());
    assert_eq!(walk(&set), vec![10, 20, 30]);
    set.assert_valid().unwrap();
}

#[test]
fn splay_set_duplicate_keeps_stored_instance_matrix() {
    #[derive(Debug, Clone)]
    struct Tagged(i32, &'static str);

    let mut set = SplaySet::with_comparator(|a: &Tagged, b: &Tagged| a.0.cmp(&b.0));
    set.insert(Tagged(1, "first"));
    set.insert(Tagged(1, "second"));
    assert_eq!(set.len(), 1);
    assert_eq!(set.first().map(|t| t.1), Some("first"));
}

#[test]
fn splay_set_find_miss_splays_neighbour_matrix() {
    let mut set: SplaySet<i32> = (0..10).map(|i| i * 10).collect();
    let miss = set.find(&35);
    assert_eq!(miss, set.end());
    let root = *set.root_value().unwrap();
    assert!(root == 30 || root == 40, "miss should splay a neighbour, got {root}");
    set.assert_valid().unwrap();
}

#[test]
fn splay_set_lower_bound_matrix() {
    let mut set = splay_set![1, 3, 5, 7];
    let cases = [
        (0, Some(1)),
        (1, Some(1)),
        (2, Some(3)),
        (5, Some(5)),
        (6, Some(7)),
        (7, Some(7)),
        (8, None),
    ];
    for (query, expected) in cases {
        let lb = set.lower_bound(&query);
        match expected {
            Some(v) => {
                assert_eq!(set.get(lb), Ok(&v), "lower_bound({query})");
                assert_eq!(set.root_value(), Some(&v), "lower_bound({query}) splays the hit");
            }
            None => assert_eq!(lb, set.end(), "lower_bound({query})"),
        }
        set.assert_valid().unwrap();
    }
}

#[test]
fn splay_set_size_accounting_matrix() {
    let mut set = SplaySet::new();
    let mut expected = 0usize;
    for i in 0..100 {
        if set.insert(i % 37) {
            expected += 1;
        }
        assert_eq!(set.len(), expected);
    }
    assert_eq!(expected, 37);
    for i in (0..50).rev() {
        if set.erase(&i) {
            expected -= 1;
        }
        assert_eq!(set.len(), expected);
    }
    assert!(set.is_empty());
    set.assert_valid().unwrap();
}

#[test]
fn splay_set_round_trip_matrix() {
    let values = [42, -7, 0, 13, 99, -100, 5];
    let mut set: SplaySet<i32> = values.into_iter().collect();
    for v in values {
        let it = set.find(&v);
        assert_eq!(set.get(it), Ok(&v));
    }
    for v in values {
        assert!(set.erase(&v));
        assert_eq!(set.find(&v), set.end());
        assert!(!set.contains(&v));
        set.assert_valid().unwrap();
    }
    assert!(set.is_empty());
}

#[test]
fn splay_set_numbers_both_directions_from_50_matrix() {
    let mut set = SplaySet::new();
    for i in 1..=100 {
        set.insert(50 + i);
        set.insert(50 - i);
        assert_eq!(set.len(), ((i - 1) * 2 + 2) as usize);
    }
    assert_eq!(walk(&set), (-50..=150).filter(|&v| v != 50).collect::<Vec<_>>());
    for i in 1..=100 {
        set.erase(&(50 - i));
        set.erase(&(50 + i));
    }
    assert_eq!(set.len(), 0);
    set.assert_valid().unwrap();
}

#[test]
fn splay_set_contains_does_not_restructure_matrix() {
    let mut set = splay_set![1, 2, 3, 4, 5];
    set.find(&3);
    let before = set.to_tree_string();
    assert!(set.contains(&1));
    assert!(!set.contains(&6));
    assert_eq!(set.to_tree_string(), before);
}

#[test]
fn splay_set_take_returns_stored_value_matrix() {
    let mut set: SplaySet<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(set.take(&"a".to_string()), Some("a".to_string()));
    assert_eq!(set.take(&"a".to_string()), None);
    assert_eq!(set.iter().cloned().collect::<Vec<_>>(), vec!["b", "c"]);
}

#[test]
fn splay_set_with_less_matrix() {
    let mut set = SplaySet::with_less(|a: &i32, b: &i32| a > b);
    set.extend([1, 5, 3, 5]);
    assert_eq!(set.len(), 3);
    assert_eq!(walk(&set), vec![5, 3, 1]);
    let lb = set.lower_bound(&4);
    assert_eq!(set.get(lb), Ok(&3));
    set.assert_valid().unwrap();
}

#[test]
fn splay_set_iterators_matrix() {
    let set: SplaySet<i32> = SplaySet::from([4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(set.iter().len(), 7);
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), vec![7, 6, 5, 4, 3, 2, 1]);

    let mut it = set.iter();
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next_back(), Some(&7));
    assert_eq!(it.len(), 5);
    assert_eq!(it.collect::<Vec<_>>(), vec![&2, &3, &4, &5, &6]);

    let mut borrowed = Vec::new();
    for v in &set {
        borrowed.push(*v);
    }
    assert_eq!(borrowed, walk(&set));
    assert_eq!(walk_back(&set), vec![7, 6, 5, 4, 3, 2, 1]);

    let owned: Vec<i32> = set.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn splay_set_debug_and_tree_dump_matrix() {
    let mut set = splay_set![2, 1, 3];
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");

    set.find(&2);
    assert_eq!(set.to_tree_string(), "SplaySet\n└─ 2\n   ├─ 1\n   └─ 3");

    set.find(&1);
    assert_eq!(
        set.to_tree_string(),
        "SplaySet\n└─ 1\n   ├─ ∅\n   └─ 2\n      ├─ ∅\n      └─ 3"
    );
}

#[test]
fn splay_set_equality_matrix() {
    let mut a = splay_set![1, 2, 3];
    let b: SplaySet<i32> = [3, 2, 1].into_iter().collect();
    // Different shapes, same contents.
    a.find(&1);
    assert_eq!(a, b);
    a.erase(&2);
    assert_ne!(a, b);
}

#[test]
fn splay_set_slot_reuse_matrix() {
    let mut set = SplaySet::with_capacity(4);
    for round in 0..10 {
        for v in 0..4 {
            set.insert(round * 10 + v);
        }
        for v in 0..3 {
            set.erase(&(round * 10 + v));
        }
    }
    assert_eq!(set.len(), 10);
    assert_eq!(walk(&set), (0..10).map(|r| r * 10 + 3).collect::<Vec<_>>());
    set.assert_valid().unwrap();
}

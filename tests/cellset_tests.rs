use flotilla::{BoardSet, CandidatePool, CellSet};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_set_insert_remove_contains() {
    let mut set = BoardSet::new();
    assert!(set.is_empty());
    set.insert(0);
    set.insert(42);
    set.insert(99);
    assert_eq!(set.len(), 3);
    assert!(set.contains(42));
    assert!(!set.contains(41));
    assert!(set.remove(42));
    assert!(!set.remove(42));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_set_iter_ascending() {
    let set: BoardSet = [99, 5, 1, 60].into_iter().collect();
    let indices: Vec<u32> = set.iter().collect();
    assert_eq!(indices, vec![1, 5, 60, 99]);
}

#[test]
fn test_set_union_intersection() {
    let a: BoardSet = [1, 2, 3].into_iter().collect();
    let b: BoardSet = [3, 4].into_iter().collect();
    let union = a | b;
    let both = a & b;
    assert_eq!(union.len(), 4);
    assert_eq!(both.iter().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn test_set_small_backing() {
    // a 3x3 board fits in a u16
    let mut set: CellSet<u16, 9> = CellSet::new();
    for index in 0..9 {
        set.insert(index);
    }
    assert_eq!(set.len(), 9);
    assert_eq!(set.iter().count(), 9);
}

#[test]
fn test_pool_fifo_order() {
    let mut pool = CandidatePool::new();
    pool.push_back(1);
    pool.push_back(2);
    pool.push_back(3);
    assert_eq!(pool.pop_front(), Some(1));
    assert_eq!(pool.pop_front(), Some(2));
    assert_eq!(pool.pop_front(), Some(3));
    assert_eq!(pool.pop_front(), None);
}

#[test]
fn test_pool_push_front_takes_priority() {
    let mut pool = CandidatePool::new();
    pool.push_back(1);
    pool.push_back(2);
    pool.push_front(9);
    assert_eq!(pool.pop_front(), Some(9));
    assert_eq!(pool.pop_front(), Some(1));
}

#[test]
fn test_pool_inserts_are_idempotent() {
    let mut pool = CandidatePool::new();
    pool.push_front(7);
    pool.push_front(7);
    pool.push_back(7);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.pop_front(), Some(7));
    assert_eq!(pool.pop_front(), None);
}

#[test]
fn test_pool_removal_is_lazy_but_final() {
    let mut pool = CandidatePool::new();
    pool.push_back(1);
    pool.push_back(2);
    pool.push_back(3);
    assert!(pool.remove(2));
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.pop_front(), Some(1));
    // the stale entry for 2 is skipped on the way to 3
    assert_eq!(pool.pop_front(), Some(3));
    assert_eq!(pool.pop_front(), None);
}

#[test]
fn test_pool_reinsert_after_removal() {
    let mut pool = CandidatePool::new();
    pool.push_back(5);
    assert!(pool.remove(5));
    pool.push_back(5);
    assert_eq!(pool.pop_front(), Some(5));
    assert_eq!(pool.pop_front(), None);
}

#[test]
fn test_pool_shuffle_keeps_members() {
    let mut pool = CandidatePool::new();
    for index in 0..10 {
        pool.push_back(index);
    }
    let mut rng = SmallRng::seed_from_u64(42);
    pool.shuffle(&mut rng);
    assert_eq!(pool.len(), 10);
    let mut popped: Vec<u32> = Vec::new();
    while let Some(index) = pool.pop_front() {
        popped.push(index);
    }
    popped.sort_unstable();
    assert_eq!(popped, (0..10).collect::<Vec<u32>>());
}

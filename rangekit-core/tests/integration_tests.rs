//! Integration tests for rangekit Core.

use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};

use rangekit_core::prelude::*;
use rstest::rstest;

#[rstest]
#[case::backward(true, vec![3, 2, 1, 0])]
#[case::forward(false, vec![0, 1, 2, 3])]
fn test_reversible_scenario(#[case] backward: bool, #[case] expected: Vec<i32>) {
    let values = vec![0, 1, 2, 3];
    let walked: Vec<i32> = reversible(&values, backward).into_iter().copied().collect();
    assert_eq!(walked, expected);
}

#[rstest]
#[case::forward(Direction::Forward)]
#[case::backward(Direction::Backward)]
fn test_empty_containers_yield_nothing(#[case] direction: Direction) {
    let vec: Vec<i32> = Vec::new();
    let deque: VecDeque<i32> = VecDeque::new();
    let list: LinkedList<i32> = LinkedList::new();
    let set: BTreeSet<i32> = BTreeSet::new();

    assert_eq!(reversible(&vec, direction).into_iter().count(), 0);
    assert_eq!(reversible(&deque, direction).into_iter().count(), 0);
    assert_eq!(reversible(&list, direction).into_iter().count(), 0);
    assert_eq!(reversible(&set, direction).into_iter().count(), 0);
    assert_eq!(reversible("", direction).into_iter().count(), 0);
    assert_eq!(reversible_owned(Vec::<i32>::new(), direction).into_iter().count(), 0);
}

#[test]
fn test_direction_from_config_string() -> Result<()> {
    let values = ['a', 'b', 'c'];
    let direction: Direction = "reverse".parse()?;
    let walked: String = reversible(&values, direction).into_iter().collect();
    assert_eq!(walked, "cba");
    Ok(())
}

#[test]
fn test_single_loop_body_both_directions() {
    let values = vec![1, 2, 3];
    let mut transcript = Vec::new();
    for backward in [false, true] {
        for value in reversible(&values, backward) {
            transcript.push(*value);
        }
    }
    assert_eq!(transcript, vec![1, 2, 3, 3, 2, 1]);
}

#[test]
fn test_mutable_binding_still_read_only_by_default() {
    let mut values = vec![1, 2, 3];
    let sum: i32 = reversed(&values).into_iter().sum();
    values.push(sum);
    assert_eq!(values, vec![1, 2, 3, 6]);
}

#[test]
fn test_mutating_reversible() {
    let mut values = vec![1, 2, 3, 4];
    let mut running = 0;
    for value in reversible_mut(&mut values, Direction::Backward) {
        running += *value;
        *value = running;
    }
    assert_eq!(values, vec![10, 9, 7, 4]);
}

#[test]
fn test_synchronized_scenario() {
    let values = vec![0, 1, 2, 3, 4, 5];
    let labels: Vec<String> = ["0", "1", "2", "3"].iter().map(ToString::to_string).collect();

    let mut steps = Vec::new();
    for (value, label) in rangekit_core::synchronized!(values, labels) {
        steps.push((value, label));
    }

    assert_eq!(steps.len(), 4);
    for (value, label) in &steps {
        assert_eq!(value.to_string(), *label);
    }
}

#[rstest]
#[case::first_shortest(vec![1], vec![1, 2, 3], 1)]
#[case::second_shortest(vec![1, 2, 3], vec![1, 2], 2)]
#[case::equal(vec![1, 2], vec![3, 4], 2)]
#[case::one_empty(vec![], vec![1, 2], 0)]
fn test_synchronized_length_is_minimum(
    #[case] a: Vec<i32>,
    #[case] b: Vec<i32>,
    #[case] expected: usize,
) {
    let view = synchronized((&a, &b));
    assert_eq!(view.iter().count(), expected);
    assert_eq!(view.iter().len(), expected);
}

#[test]
fn test_synchronized_equal_lengths_match_pointwise() {
    let a = vec![1, 2, 3];
    let b = vec![4, 5, 6];
    let lockstep: Vec<_> = synchronized((&a, &b)).into_iter().collect();
    let pointwise: Vec<_> = (0..a.len()).map(|i| (a[i], b[i])).collect();
    assert_eq!(lockstep, pointwise);
}

#[test]
fn test_synchronized_many_containers() {
    let a = [1, 2, 3];
    let b = vec!['x', 'y'];
    let c: VecDeque<_> = ["p", "q", "r"].into_iter().collect();
    let d = 10u32..20;
    let steps: Vec<_> = synchronized((&a, &b, &c, &d)).into_iter().collect();
    assert_eq!(steps, vec![(1, 'x', "p", 10), (2, 'y', "q", 11)]);
}

#[test]
fn test_synchronized_steps_are_detached() {
    let mut names = vec![String::from("ann"), String::from("bob")];
    let scores = [3, 5];
    let steps: Vec<(String, i32)> = synchronized((&names, &scores)).into_iter().collect();
    names.clear();
    assert_eq!(steps, vec![("ann".to_string(), 3), ("bob".to_string(), 5)]);
}

#[test]
fn test_checked_synchronized() {
    let a = vec![1, 2, 3];
    let b = vec![4, 5, 6];
    let c = vec![7];

    let view = synchronized((&a, &b)).check_equal_lengths().expect("equal lengths");
    assert_eq!(view.into_iter().count(), 3);

    let error = synchronized((&a, &c)).check_equal_lengths().unwrap_err();
    assert!(matches!(error, Error::LengthMismatch { shortest: 1, longest: 3 }));
}

#[test]
fn test_key_value_scenario() {
    let digits: BTreeMap<i32, &str> = [(1, "one"), (2, "two"), (3, "three")].into_iter().collect();
    let pairs: Vec<_> = key_values(&digits).into_iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, vec![(1, "one"), (2, "two"), (3, "three")]);
}

#[test]
fn test_key_value_matches_native_enumeration() {
    let map: HashMap<String, usize> = (0..20).map(|i| (format!("k{i}"), i)).collect();
    let native: Vec<_> = map.iter().collect();
    let adapted: Vec<_> = key_values(&map).into_iter().collect();
    assert_eq!(adapted, native);
    assert_eq!(adapted.len(), map.len());
}

#[test]
fn test_key_value_owned_temporary() {
    fn parse(text: &str) -> BTreeMap<String, String> {
        text.split(',')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    let mut rendered = Vec::new();
    for (key, value) in &key_values_owned(parse("b=2,a=1")) {
        rendered.push(format!("{key}:{value}"));
    }
    assert_eq!(rendered, vec!["a:1", "b:2"]);
}

#[test]
fn test_key_value_mutation_visible_after_loop() {
    let mut stock: HashMap<&str, u32> = [("apples", 3), ("pears", 0)].into_iter().collect();
    for (_, count) in key_values_mut(&mut stock) {
        *count += 10;
    }
    assert_eq!(stock["apples"], 13);
    assert_eq!(stock["pears"], 10);
}

#[test]
fn test_adapters_compose() {
    let names = vec!["a", "b", "c"];
    let ranks = vec![1, 2, 3];
    let backward_ranks: Vec<_> = reversed(&ranks).into_iter().collect();
    let pairs: Vec<_> = synchronized((&names, &backward_ranks))
        .into_iter()
        .map(|(name, rank)| (name, *rank))
        .collect();
    assert_eq!(pairs, vec![("a", 3), ("b", 2), ("c", 1)]);
}

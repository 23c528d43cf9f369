use super::*;

fn reorder(levels: &[u8]) -> Vec<usize> {
    let mut payload: Vec<usize> = (0..levels.len()).collect();
    reorder_by_levels(levels, &mut payload);
    payload
}

#[test]
fn even_levels_stay_in_place() {
    assert_eq!(reorder(&[0, 0, 0]), vec![0, 1, 2]);
    assert_eq!(reorder(&[2, 2]), vec![0, 1]);
    assert_eq!(reorder(&[]), Vec::<usize>::new());
}

#[test]
fn odd_runs_reverse() {
    assert_eq!(reorder(&[0, 1, 1, 1, 0]), vec![0, 3, 2, 1, 4]);
    assert_eq!(reorder(&[1, 1, 1]), vec![2, 1, 0]);
}

#[test]
fn nested_levels_reverse_inner_first() {
    // RTL paragraph with an embedded LTR word: the word keeps its order.
    assert_eq!(reorder(&[1, 2, 2, 1]), vec![3, 1, 2, 0]);
    assert_eq!(reorder(&[1, 1, 2, 2, 1, 1]), vec![5, 4, 2, 3, 1, 0]);
    // Only levels at or above the lowest odd level are reversed.
    assert_eq!(reorder(&[2, 3, 3]), vec![0, 2, 1]);
}

#[test]
fn reversal_runs_are_reported_inner_first() {
    let mut runs = Vec::new();
    runs_to_reverse(&[1, 2, 2, 1, 0, 1], |r| runs.push(r));
    assert_eq!(runs, vec![1..3, 0..4, 5..6]);
}

#[test]
fn index_mapping_matches_reordering() {
    let levels = [0, 1, 1, 2, 2, 1, 0, 3];
    let visual = reorder(&levels);
    for (v, &logical) in visual.iter().enumerate() {
        assert_eq!(visual_index(&levels, logical), v);
        assert_eq!(logical_index(&levels, v), logical);
    }
}

#[test]
fn reordering_twice_is_identity_for_symmetric_levels() {
    let levels = [1, 1, 2, 2, 1, 1];
    let mut payload: Vec<char> = "abcdef".chars().collect();
    reorder_by_levels(&levels, &mut payload);
    reorder_by_levels(&levels, &mut payload);
    assert_eq!(payload.iter().collect::<String>(), "abcdef");
}

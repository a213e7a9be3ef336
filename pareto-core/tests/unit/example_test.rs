use super::*;

#[test]
fn can_store_ranks_of_multiple_rankings() {
    let mut solution = PointSolution::new(vec![1., 2.]);
    let first = RankingToken::new();
    let second = RankingToken::new();

    assert_ne!(first, second);
    assert_eq!(solution.front_rank(first), None);

    solution.set_front_rank(first, 0);
    solution.set_front_rank(second, 3);

    assert_eq!(solution.front_rank(first), Some(0));
    assert_eq!(solution.front_rank(second), Some(3));
}

#[test]
fn can_create_a_deep_copy() {
    let token = RankingToken::new();
    let mut solution = PointSolution::with_constraints(vec![1., 2.], vec![-1.]);
    solution.set_front_rank(token, 1);

    let copy = solution.deep_copy();

    assert_eq!(copy.objectives(), &[1., 2.]);
    assert_eq!(copy.constraints(), &[-1.]);
    assert_eq!(copy.front_rank(token), Some(1));
}

#[test]
fn can_check_feasibility() {
    assert!(PointSolution::new(vec![1.]).is_feasible());
    assert!(PointSolution::with_constraints(vec![1.], vec![0., 0.]).is_feasible());
    assert!(!PointSolution::with_constraints(vec![1.], vec![0., -2.]).is_feasible());
}

use super::*;
use crate::example::PointSolution;

#[test]
fn can_detect_dominance_in_two_objectives() {
    assert_eq!(dominance_order(&[1., 2.], &[2., 3.]), Ordering::Less);
    assert_eq!(dominance_order(&[2., 3.], &[1., 2.]), Ordering::Greater);
    assert_eq!(dominance_order(&[1., 2.], &[1., 3.]), Ordering::Less);
    assert_eq!(dominance_order(&[1., 3.], &[2., 2.]), Ordering::Equal);
    assert_eq!(dominance_order(&[1., 2.], &[1., 2.]), Ordering::Equal);
}

#[test]
fn can_detect_dominance_in_three_objectives() {
    assert_eq!(dominance_order(&[1., 1., 1.], &[2., 2., 2.]), Ordering::Less);
    assert_eq!(dominance_order(&[1., 2., 1.], &[1., 2., 2.]), Ordering::Less);
    assert_eq!(dominance_order(&[2., 2., 2.], &[1., 1., 1.]), Ordering::Greater);
    assert_eq!(dominance_order(&[1., 2., 3.], &[3., 2., 1.]), Ordering::Equal);
}

#[test]
fn can_compare_solutions_with_pareto_dominance() {
    let dominance = ParetoDominance::default();
    let better = PointSolution::new(vec![1., 1.]);
    let worse = PointSolution::new(vec![2., 2.]);

    assert_eq!(dominance.dominance_ord(&better, &worse), Ordering::Less);
    assert!(dominance.dominates(&better, &worse));
    assert!(!dominance.dominates(&worse, &better));
}

#[test]
fn can_detect_equal_objectives() {
    assert!(objectives_equal(&[1., 2.], &[1., 2.]));
    assert!(!objectives_equal(&[1., 2.], &[1., 3.]));
    assert!(!objectives_equal(&[1., 2.], &[1., 2., 3.]));
}

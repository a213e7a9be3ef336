use super::*;
use crate::helpers::*;

#[test]
fn can_keep_solutions_in_insertion_order() {
    let mut archive = UnboundedArchive::new();

    assert_eq!(archive.add(create_point(3., 3.)).unwrap(), true);
    assert_eq!(archive.add(create_point(1., 1.)).unwrap(), true);
    assert_eq!(archive.add(create_point(2., 2.)).unwrap(), true);

    assert_eq!(get_objective_pairs(&archive), vec![(3., 3.), (1., 1.), (2., 2.)]);
}

#[test]
fn can_reject_duplicate_objective_vectors() {
    let mut archive = UnboundedArchive::new();

    assert_eq!(archive.add(create_point(1., 2.)).unwrap(), true);
    assert_eq!(archive.add(create_point(1., 2.)).unwrap(), false);
    assert_eq!(archive.add(create_point(1., 3.)).unwrap(), true);

    assert_eq!(archive.size(), 2);
}

#[test]
fn can_keep_dominated_solutions() {
    let mut archive = UnboundedArchive::new();

    archive.add(create_point(1., 1.)).unwrap();
    archive.add(create_point(5., 5.)).unwrap();

    assert_eq!(get_objective_pairs(&archive), vec![(1., 1.), (5., 5.)]);
}

#[test]
fn can_join_another_archive() {
    let mut target = UnboundedArchive::new();
    target.add(create_point(1., 1.)).unwrap();

    let mut source = UnboundedArchive::new();
    source.add_all(vec![create_point(1., 1.), create_point(2., 2.)]).unwrap();

    target.join(&source).unwrap();

    assert_eq!(get_objective_pairs(&target), vec![(1., 1.), (2., 2.)]);
}

#[test]
fn can_access_solutions_by_index() {
    let mut archive = UnboundedArchive::new();
    archive.add(create_point(1., 2.)).unwrap();

    assert_eq!(archive.get(0).unwrap().objectives(), &[1., 2.]);
    assert!(archive.get(1).is_err());
}

use approx::assert_abs_diff_eq;
use kdknn::prelude::*;

fn six_points() -> Vec<Point<f64, i32>> {
    vec![
        Point::new([1.0, 2.0, 3.0], 0),
        Point::new([4.0, 5.0, 6.0], 1),
        Point::new([7.0, 8.0, 9.0], 2),
        Point::new([2.0, 3.0, 1.0], 3),
        Point::new([5.0, 6.0, 4.0], 4),
        Point::new([8.0, 9.0, 7.0], 5),
    ]
}

#[test]
fn test_six_point_scenario() {
    let tree = build(six_points()).unwrap();
    let query = Point::new([3.0, 4.0, 5.0], -1);

    let res = search(&tree, &query, 2).unwrap();
    let ids: Vec<i32> = res.ids().copied().collect();

    // (4,5,6) is sqrt(3) away, (5,6,4) is 3 away
    assert_eq!(ids, vec![1, 4]);
    assert_abs_diff_eq!(res.as_slice()[0].distance, 3.0_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(res.max_distance(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_six_point_scenario_full_ranking() {
    let tree = KnnBuilder::new()
        .parallel(false)
        .build(six_points())
        .unwrap();

    let res = tree.search(&[3.0, 4.0, 5.0], 6).unwrap();
    let ids: Vec<i32> = res.ids().copied().collect();
    assert_eq!(ids, vec![1, 4, 0, 3, 2, 5]);

    let expected = [3.0_f64, 9.0, 12.0, 18.0, 48.0, 54.0];
    for (d, e) in res.distances().zip(expected) {
        assert_abs_diff_eq!(d, e.sqrt(), epsilon = 1e-12);
    }
}

#[test]
fn test_empty_tree() {
    let tree: KdTree<f64, u32> = build(Vec::new()).unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.iter().count(), 0);

    let res = tree.search(&[1.0, 2.0], 5).unwrap();
    assert!(res.is_empty());
    assert_eq!(res.max_distance(), 0.0);
}

#[test]
fn test_single_point() {
    let tree = build(vec![Point::new([2.5], "only")]).unwrap();

    let res = tree.search(&[10.0], 3).unwrap();
    assert_eq!(res.len(), 1);
    assert_eq!(*res.as_slice()[0].point.id(), "only");
    assert_abs_diff_eq!(res.max_distance(), 7.5, epsilon = 1e-12);
}

#[test]
fn test_build_dimension_mismatch() {
    let points = vec![
        Point::new([1.0, 2.0], 0),
        Point::new([3.0, 4.0], 1),
        Point::new([5.0, 6.0, 7.0], 2),
    ];

    match build(points) {
        Err(KnnError::DimensionMismatch { expected, found }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!(
            "Expected DimensionMismatch, got {:?}",
            other.map(|t| t.len())
        ),
    }
}

#[test]
fn test_build_rejects_zero_dimensional_points() {
    let points: Vec<Point<f64, u8>> = vec![Point::new(Vec::new(), 0)];
    assert!(matches!(build(points), Err(KnnError::InvalidArgument(_))));
}

#[test]
fn test_search_rejects_zero_k() {
    let tree = build(six_points()).unwrap();
    let err = tree.search(&[0.0, 0.0, 0.0], 0).unwrap_err();
    assert!(matches!(err, KnnError::InvalidArgument(_)));

    // Also on an empty tree
    let empty: KdTree<f64, i32> = build(Vec::new()).unwrap();
    assert!(matches!(
        empty.search(&[0.0], 0),
        Err(KnnError::InvalidArgument(_))
    ));
}

#[test]
fn test_search_rejects_query_dimension_mismatch() {
    let tree = build(six_points()).unwrap();
    let err = tree.search(&[1.0, 2.0], 1).unwrap_err();
    assert_eq!(
        err,
        KnnError::DimensionMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_search_rejects_non_finite_query() {
    let tree = build(six_points()).unwrap();

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = tree.search(&[3.0, bad, 5.0], 2).unwrap_err();
        assert!(matches!(err, KnnError::InvalidArgument(_)));
    }
}

#[test]
fn test_builder_rejects_zero_threshold() {
    let res = KnnBuilder::new().parallel_threshold(0).build(six_points());
    assert!(matches!(res, Err(KnnError::InvalidArgument(_))));
}

#[test]
fn test_error_messages() {
    let err = KnnError::DimensionMismatch {
        expected: 3,
        found: 2,
    };
    assert_eq!(
        err.to_string(),
        "dimension mismatch: expected 3 coordinates, found 2"
    );
    assert_eq!(
        KnnError::InvalidArgument("k must be at least 1".into()).to_string(),
        "invalid argument: k must be at least 1"
    );
}

#[test]
fn test_points_from_flat() {
    let data = [0.0, 0.0, 1.0, 1.0, 5.0, 5.0];
    let points = points_from_flat(&data, 2).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[2].coords(), &[5.0, 5.0]);
    assert_eq!(*points[2].id(), 2);

    let tree = build(points).unwrap();
    let res = tree.search(&[4.0, 4.0], 1).unwrap();
    assert_eq!(res.ids().copied().collect::<Vec<_>>(), vec![2]);

    assert!(matches!(
        points_from_flat(&data, 4),
        Err(KnnError::InvalidArgument(_))
    ));
    assert!(matches!(
        points_from_flat(&data, 0),
        Err(KnnError::InvalidArgument(_))
    ));
}

#[test]
fn test_point_from_input_and_parts() {
    let coords = vec![1.0, 2.0];
    let p = Point::from_input(&coords, 'a').unwrap();
    assert_eq!(p.dimensions(), 2);

    let (c, id) = p.into_parts();
    assert_eq!(c, coords);
    assert_eq!(id, 'a');
}

#[test]
fn test_to_points_returns_owned_copies() {
    let tree = build(six_points()).unwrap();
    let owned = tree.search(&[8.0, 9.0, 7.0], 1).unwrap().to_points();
    drop(tree);

    assert_eq!(owned, vec![Point::new([8.0, 9.0, 7.0], 5)]);
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_integration() {
    use ndarray::{array, Array1};

    let rows = array![[0.0, 0.0], [1.0, 1.0], [5.0, 5.0], [6.0, 5.0]];
    let tree = build(points_from_rows(&rows)).unwrap();
    assert_eq!(tree.len(), 4);

    let query = Array1::from_vec(vec![5.5, 5.2]);
    let res = tree.search(&query, 2).unwrap();
    let mut ids: Vec<usize> = res.ids().copied().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3]);

    // Rows of a transposed view convert element-wise
    let cols = rows.t().to_owned();
    let fortran = cols.t();
    let points = points_from_rows(&fortran);
    assert_eq!(points[3].coords(), &[6.0, 5.0]);

    // A strided 1-D view is rejected
    let strided = rows.column(0);
    let err = Point::from_input(&strided, 0usize).unwrap_err();
    assert!(matches!(err, KnnError::InvalidArgument(_)));
}

use gaze::{vector, GazeError, Vector, DEFAULT_Y};

#[test]
fn vectors() {
    let v1 = vector((3, 5)).unwrap();
    let v2 = vector(3).unwrap();
    let v3 = vector([3, 5]).unwrap();

    assert!(v1.y() == v3.y(), "Vector array initialization works.");
    assert!(v1.x() == v2.x(), "Vector x() works.");
    assert!(v1.y() != v2.y(), "Vector y() works.");
    assert!(v1.add(5.0).x() == 8.0, "Vector add() works.");
}

#[test]
fn vectors_single_element_sequence() {
    let v1 = vector((3, 5)).unwrap();
    let v2 = vector([3]).unwrap();

    assert_eq!(v1.x(), v2.x());
    assert_ne!(v1.y(), v2.y());
    assert_eq!(v2.y(), DEFAULT_Y);
}

#[test]
fn pair_and_sequence_match() {
    for (a, b) in [(0.0, 0.0), (3.0, 5.0), (-2.5, 1e9), (f64::MAX, -1.0)] {
        let pair = vector((a, b)).unwrap();
        let seq = vector(vec![a, b]).unwrap();
        assert_eq!(pair.x(), a);
        assert_eq!(pair.y(), b);
        assert_eq!(pair, seq);
        assert_eq!(pair, Vector::new(a, b));
    }
}

#[test]
fn single_form_default_is_fixed() {
    for n in [-7.0, 0.0, 3.0, 42.5] {
        assert_eq!(vector(n).unwrap().y(), DEFAULT_Y);
        assert_eq!(vector([n]).unwrap().y(), DEFAULT_Y);
    }
}

#[test]
fn add_leaves_receiver() {
    let v = vector((3, 5)).unwrap();
    let r = v.add(5.0);
    assert_eq!(v.x(), 3.0);
    assert_eq!(r, Vector::new(8.0, 5.0));
}

#[test]
fn invalid_arguments() {
    assert!(matches!(
        vector(Vec::<f64>::new()),
        Err(GazeError::InvalidArgument(_))
    ));
    assert!(matches!(
        vector(vec![1.0, 2.0, 3.0]),
        Err(GazeError::InvalidArgument(_))
    ));
    assert!(matches!(
        vector(f64::NAN),
        Err(GazeError::InvalidArgument(_))
    ));
    assert!(matches!(
        gaze::parse_vector("three"),
        Err(GazeError::InvalidArgument(_))
    ));
}

#[test]
fn non_finite_rejected() {
    assert!(gaze::parse_vector("inf").is_err());
    assert!(gaze::parse_vector("[-inf, 0]").is_err());
    assert!(vector((0.0, f64::INFINITY)).is_err());

    let v = vector((f64::MAX, 0.0)).unwrap();
    assert!(matches!(
        v.try_add(f64::MAX),
        Err(GazeError::InvalidArgument(_))
    ));
    assert!(v.try_add(f64::NEG_INFINITY).is_err());
    assert!(serde_json::to_string(&v.add_vector(v)).is_err());
}

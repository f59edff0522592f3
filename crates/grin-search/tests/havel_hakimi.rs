use grin_core::GrinError;
use grin_graph::{complete_graph, cycle_graph, petersen_graph};
use grin_search::HavelHakimi;

#[test]
fn complete_graph_on_four_vertices() {
    let hh = HavelHakimi::new(&[3, 3, 3, 3]).unwrap();
    assert_eq!(hh.process(), &[vec![3, 3, 3, 3], vec![2, 2, 2], vec![1, 1], vec![0]]);
    assert_eq!(hh.elimination_sequence(), Some(&[3, 2, 1, 0][..]));
    assert!(hh.is_graphic());
    assert_eq!(hh.residue(), Some(1));
    assert_eq!(hh.depth(), 3);
}

#[test]
fn non_graphic_sequence() {
    let hh = HavelHakimi::new(&[5, 4, 3, 2, 1]).unwrap();
    assert!(!hh.is_graphic());
    assert_eq!(hh.residue(), None);
    assert_eq!(hh.elimination_sequence(), None);
    assert_eq!(hh.depth(), 0);
}

#[test]
fn stalled_reduction_keeps_partial_elimination() {
    let hh = HavelHakimi::new(&[2, 0, 0]).unwrap();
    assert!(!hh.is_graphic());
    assert_eq!(hh.partial_elimination(), &[2]);
    assert_eq!(hh.terminal_sequence(), &[-1, -1]);
}

#[test]
fn input_is_sorted_first() {
    let hh = HavelHakimi::new(&[1, 2, 1]).unwrap();
    assert_eq!(hh.initial_sequence(), &[2, 1, 1]);
    assert_eq!(hh.process(), &[vec![2, 1, 1], vec![0, 0]]);
    assert_eq!(hh.residue(), Some(2));
}

#[test]
fn all_zero_sequence_is_graphic() {
    let hh = HavelHakimi::new(&[0, 0, 0, 0]).unwrap();
    assert!(hh.is_graphic());
    assert_eq!(hh.residue(), Some(4));
    assert_eq!(hh.depth(), 0);
    assert_eq!(hh.elimination_sequence(), Some(&[0, 0, 0, 0][..]));
}

#[test]
fn empty_sequence_is_graphic_with_zero_residue() {
    let hh = HavelHakimi::new(&[]).unwrap();
    assert!(hh.is_graphic());
    assert_eq!(hh.process(), &[Vec::<i64>::new()]);
    assert_eq!(hh.depth(), 0);
    assert_eq!(hh.residue(), Some(0));
}

#[test]
fn depth_of_complete_graph_is_order_minus_one() {
    for n in 2..10 {
        let hh = HavelHakimi::from_graph(&complete_graph(n)).unwrap();
        assert!(hh.is_graphic());
        assert_eq!(hh.depth(), n - 1);
    }
}

#[test]
fn residue_of_cycles_and_petersen() {
    assert_eq!(HavelHakimi::from_graph(&cycle_graph(6)).unwrap().residue(), Some(2));
    let petersen = HavelHakimi::from_graph(&petersen_graph()).unwrap();
    assert!(petersen.is_graphic());
    assert_eq!(petersen.elimination_sequence().map(<[i64]>::len), Some(10));
}

#[test]
fn float_input_must_be_integral() {
    let hh = HavelHakimi::from_f64(&[1.0, 1.0]).unwrap();
    assert_eq!(hh.residue(), Some(1));
    let err = HavelHakimi::from_f64(&[1.0, 1.5]).unwrap_err();
    assert!(matches!(err, GrinError::InvalidArgument(ref info)
        if info.code == "non-integral" && info.context.get("index").map(String::as_str) == Some("1")));
}

#[test]
fn negative_degrees_are_rejected() {
    let err = HavelHakimi::new(&[1, -1]).unwrap_err();
    assert_eq!(err.code(), "negative-degree");
    assert_eq!(err.info().context.get("index").map(String::as_str), Some("1"));

    let err = HavelHakimi::from_f64(&[1.0, -9.223372036854775808e18]).unwrap_err();
    assert!(matches!(err, GrinError::InvalidArgument(ref info)
        if info.code == "negative-degree" && info.context.get("index").map(String::as_str) == Some("1")));
    assert_eq!(HavelHakimi::from_f64(&[1.0, -1.0]).unwrap_err().code(), "negative-degree");
}

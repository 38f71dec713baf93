use super::*;

#[test]
fn test_default_values() {
    assert_eq!(ValueType::Boolean.default_value(), Value::Boolean(false));
    assert_eq!(ValueType::String.default_value(), Value::String(String::new()));
    assert_eq!(ValueType::Int.default_value(), Value::Int(0));
    assert_eq!(ValueType::Float.default_value(), Value::Float(0.0));
}

#[test]
fn test_ordering_operators_only_on_numeric_types() {
    for op in [
        ComparisonOperator::Lt,
        ComparisonOperator::Le,
        ComparisonOperator::Gt,
        ComparisonOperator::Ge,
    ] {
        assert!(ValueType::Int.supports_comparison(op));
        assert!(ValueType::Float.supports_comparison(op));
        assert!(!ValueType::Boolean.supports_comparison(op));
        assert!(!ValueType::String.supports_comparison(op));
    }
}

#[test]
fn test_assignment_table() {
    use AssignmentOperator::*;
    assert_eq!(ValueType::String.assignment_operators(), vec![Assign]);
    assert_eq!(
        ValueType::Boolean.assignment_operators(),
        vec![Assign, And, Xor, Or]
    );
    assert_eq!(
        ValueType::Int.assignment_operators(),
        vec![Assign, Add, Sub, Mul, Div, Rem]
    );
    assert_eq!(
        ValueType::Float.assignment_operators(),
        vec![Assign, Add, Sub, Mul, Div]
    );
}

#[test]
fn test_equality_distance() {
    let eq = compare(
        ComparisonOperator::Eq,
        ValueType::String,
        &Value::from("bob"),
        &Value::from("bob"),
    )
    .unwrap();
    let ne = compare(
        ComparisonOperator::Eq,
        ValueType::String,
        &Value::from("bob"),
        &Value::from("alice"),
    )
    .unwrap();
    assert_eq!(eq, 0.0);
    assert_eq!(ne, 1.0);
}

#[test]
fn test_strict_order_never_reads_as_satisfied() {
    let d = compare(
        ComparisonOperator::Lt,
        ValueType::Int,
        &Value::Int(3),
        &Value::Int(3),
    )
    .unwrap();
    assert!(d > EPSILON);
    assert_eq!(d, 2.0 * EPSILON);
}

#[test]
fn test_order_distance_is_absolute_difference() {
    let d = compare(
        ComparisonOperator::Le,
        ValueType::Int,
        &Value::Int(5),
        &Value::Int(3),
    )
    .unwrap();
    assert_eq!(d, 2.0);

    let d = compare(
        ComparisonOperator::Ge,
        ValueType::Float,
        &Value::Float(1.5),
        &Value::Float(4.0),
    )
    .unwrap();
    assert_eq!(d, 2.5);

    let d = compare(
        ComparisonOperator::Gt,
        ValueType::Int,
        &Value::Int(7),
        &Value::Int(3),
    )
    .unwrap();
    assert_eq!(d, 0.0);
}

#[test]
fn test_compare_rejects_mismatched_types() {
    let err = compare(
        ComparisonOperator::Eq,
        ValueType::Int,
        &Value::Int(1),
        &Value::Float(1.0),
    )
    .unwrap_err();
    assert_eq!(
        err,
        EvaluationError::TypeMismatch {
            expected: ValueType::Int,
            found: ValueType::Float,
        }
    );
}

#[test]
fn test_compare_rejects_unsupported_operator() {
    let err = compare(
        ComparisonOperator::Gt,
        ValueType::Boolean,
        &Value::Boolean(true),
        &Value::Boolean(false),
    )
    .unwrap_err();
    assert!(matches!(err, EvaluationError::UnsupportedOperator { .. }));
}

#[test]
fn test_boolean_assignments() {
    let t = Value::Boolean(true);
    let f = Value::Boolean(false);
    assert_eq!(
        apply(AssignmentOperator::Xor, ValueType::Boolean, &t, &t).unwrap(),
        f
    );
    assert_eq!(
        apply(AssignmentOperator::And, ValueType::Boolean, &t, &f).unwrap(),
        f
    );
    assert_eq!(
        apply(AssignmentOperator::Or, ValueType::Boolean, &f, &t).unwrap(),
        t
    );
}

#[test]
fn test_int_division_rounds_half_up() {
    let div = |a, b| apply(AssignmentOperator::Div, ValueType::Int, &Value::Int(a), &Value::Int(b));
    assert_eq!(div(7, 2).unwrap(), Value::Int(4));
    assert_eq!(div(5, 3).unwrap(), Value::Int(2));
    assert_eq!(div(-7, 2).unwrap(), Value::Int(-3));
    assert_eq!(div(7, -2).unwrap(), Value::Int(-3));
    assert_eq!(div(6, 3).unwrap(), Value::Int(2));
}

#[test]
fn test_int_division_by_zero() {
    for op in [AssignmentOperator::Div, AssignmentOperator::Rem] {
        let err = apply(op, ValueType::Int, &Value::Int(4), &Value::Int(0)).unwrap_err();
        assert!(matches!(err, EvaluationError::DivisionByZero { .. }));
    }
}

#[test]
fn test_int_remainder_and_overflow() {
    assert_eq!(
        apply(
            AssignmentOperator::Rem,
            ValueType::Int,
            &Value::Int(-7),
            &Value::Int(3)
        )
        .unwrap(),
        Value::Int(-1)
    );
    let err = apply(
        AssignmentOperator::Add,
        ValueType::Int,
        &Value::Int(i64::MAX),
        &Value::Int(1),
    )
    .unwrap_err();
    assert!(matches!(err, EvaluationError::Overflow { .. }));
}

#[test]
fn test_float_arithmetic() {
    let v = apply(
        AssignmentOperator::Mul,
        ValueType::Float,
        &Value::Float(1.5),
        &Value::Float(2.0),
    )
    .unwrap();
    assert_eq!(v, Value::Float(3.0));

    let err = apply(
        AssignmentOperator::Rem,
        ValueType::Float,
        &Value::Float(1.5),
        &Value::Float(2.0),
    )
    .unwrap_err();
    assert!(matches!(err, EvaluationError::UnsupportedOperator { .. }));
}

#[test]
fn test_catalogue_lists_every_type() {
    let catalogue = operator_catalogue();
    assert_eq!(catalogue.len(), 4);
    let string = catalogue
        .iter()
        .find(|t| t.type_of == ValueType::String)
        .unwrap();
    assert_eq!(string.comparison.len(), 2);
    assert_eq!(string.assignment[0].id, "=");
}

use std::str::FromStr;

use bigdecimal::BigDecimal;
use carbonite::{ConversionTable, Error, NativeArray, NativeValue, RuntimeType, Timestamp, Value};
use carbonite_test::{test_outbound, MockConnection};
use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

test_outbound!(scalars(
    Value::Null => NativeValue::Null,
    Value::from("hello") => NativeValue::Str("hello".into()),
    Value::Bool(true) => NativeValue::Bool(true),
    Value::Int(-7) => NativeValue::Long(-7),
    Value::Float(2.5) => NativeValue::Double(2.5),
    Value::Decimal(BigDecimal::from_str("1.10").unwrap())
        => NativeValue::Decimal(BigDecimal::from_str("1.10").unwrap()),
));

test_outbound!(buf(
    Value::Buf(vec![0x00, 0xff, 0x10]) => NativeValue::Bytes(vec![0x00, 0xff, 0x10]),
    Value::Buf(Vec::new()) => NativeValue::Bytes(Vec::new()),
));

test_outbound!(date_time(
    Value::from(Utc.with_ymd_and_hms(2007, 7, 1, 16, 0, 0).unwrap())
        => NativeValue::Timestamp(Timestamp::from_millis(1_183_305_600_000)),
    // the same instant seen from another offset
    Value::from(FixedOffset::east_opt(-4 * 3600).unwrap().with_ymd_and_hms(2007, 7, 1, 12, 0, 0).unwrap())
        => NativeValue::Timestamp(Timestamp::from_millis(1_183_305_600_000)),
    Value::from(Utc.timestamp_millis_opt(-1).unwrap())
        => NativeValue::Timestamp(Timestamp::from_millis(-1)),
));

test_outbound!(date(
    Value::Date(NaiveDate::from_ymd_opt(2007, 7, 1).unwrap())
        => NativeValue::Date(NaiveDate::from_ymd_opt(2007, 7, 1).unwrap()),
));

test_outbound!(time(
    Value::Time(NaiveTime::from_hms_opt(8, 30, 5).unwrap())
        => NativeValue::Time(NaiveTime::from_hms_opt(8, 30, 5).unwrap()),
    Value::Time(NaiveTime::from_hms_milli_opt(8, 30, 5, 250).unwrap())
        => NativeValue::Time(NaiveTime::from_hms_opt(8, 30, 5).unwrap()),
));

#[test]
fn it_creates_an_int_array() -> anyhow::Result<()> {
    carbonite_test::setup_if_needed();

    let mut conn = MockConnection::new();
    let list = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    let native = carbonite::to_native(&list, &mut conn)?;

    let expected = NativeArray::new(
        "BIGINT",
        vec![
            NativeValue::Long(1),
            NativeValue::Long(2),
            NativeValue::Long(3),
        ],
    );

    assert_eq!(native, NativeValue::Array(expected.clone()));
    assert_eq!(conn.arrays(), [expected]);

    Ok(())
}

#[test]
fn it_creates_arrays_with_nulls_and_without_elements() -> anyhow::Result<()> {
    let mut conn = MockConnection::new();

    carbonite::to_native(&Value::List(vec![]), &mut conn)?;
    carbonite::to_native(&Value::List(vec![Value::Null, Value::Int(4)]), &mut conn)?;
    carbonite::to_native(&Value::List(vec![Value::Null]), &mut conn)?;

    assert_eq!(
        conn.arrays(),
        [
            NativeArray::new("BIGINT", vec![]),
            NativeArray::new("BIGINT", vec![NativeValue::Null, NativeValue::Long(4)]),
            NativeArray::new("BIGINT", vec![NativeValue::Null]),
        ]
    );

    Ok(())
}

#[test]
fn it_rejects_lists_of_other_element_types() {
    let mut conn = MockConnection::new();

    let err = carbonite::to_native(&Value::List(vec![Value::from("a")]), &mut conn).unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedArrayElement {
            element: RuntimeType::Str
        }
    ));
    assert_eq!(err.to_string(), "unsupported array element type: Str");

    let err = carbonite::to_native(
        &Value::List(vec![Value::Int(1), Value::Float(1.0)]),
        &mut conn,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedArrayElement {
            element: RuntimeType::Float
        }
    ));

    // nested lists are never bound
    let err = carbonite::to_native(
        &Value::List(vec![Value::List(vec![Value::Int(1)])]),
        &mut conn,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedArrayElement {
            element: RuntimeType::List
        }
    ));

    assert!(conn.arrays().is_empty());
}

#[test]
fn it_surfaces_driver_array_errors() {
    let mut conn = MockConnection::with_array_types(["int4", "text"]);

    let err = carbonite::to_native(&Value::List(vec![Value::Int(1)]), &mut conn).unwrap_err();

    assert!(matches!(err, Error::Driver { .. }));
    assert_eq!(
        err.driver_message(),
        Some("Unable to find server array type for provided name BIGINT.")
    );
    assert_eq!(err.driver_code(), Some("42704"));

    let source = std::error::Error::source(&err).expect("driver error as source");
    assert_eq!(
        source.to_string(),
        "Unable to find server array type for provided name BIGINT."
    );
}

#[test]
fn it_converts_a_parameter_list() -> anyhow::Result<()> {
    let table = ConversionTable::default();
    let mut conn = MockConnection::new();

    let params = table.to_native_params(
        &[
            Value::Int(1),
            Value::from("two"),
            Value::Null,
            Value::List(vec![Value::Int(4)]),
        ],
        &mut conn,
    )?;

    assert_eq!(
        params,
        [
            NativeValue::Long(1),
            NativeValue::Str("two".into()),
            NativeValue::Null,
            NativeValue::Array(NativeArray::new("BIGINT", vec![NativeValue::Long(4)])),
        ]
    );

    let err = table
        .to_native_params(&[Value::Int(1), Value::List(vec![Value::Bool(true)])], &mut conn)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedArrayElement {
            element: RuntimeType::Bool
        }
    ));

    Ok(())
}

#[test]
fn it_uses_a_custom_int_array_type() -> anyhow::Result<()> {
    let table = ConversionTable::default();
    assert_eq!(table.array_types().type_name(RuntimeType::Int), Some("BIGINT"));

    let mut config = carbonite::Config::default();
    config.arrays.int_type_name = Some("int8".into());

    let table = ConversionTable::new(&config);
    let mut conn = MockConnection::with_array_types(["int8"]);

    let native = table.to_native(&Value::List(vec![Value::Int(9)]), &mut conn)?;

    assert_eq!(
        native,
        NativeValue::Array(NativeArray::new("int8", vec![NativeValue::Long(9)]))
    );

    Ok(())
}

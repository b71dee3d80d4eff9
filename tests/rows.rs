use carbonite::{ColumnConverter, ConversionTable, Error, NativeValue, RuntimeType, SqlTypeCode, Value};
use carbonite_test::MockResultSet;

fn people() -> MockResultSet {
    MockResultSet::new()
        .column("id", SqlTypeCode::BIGINT)
        .column("name", SqlTypeCode::VARCHAR)
        .column("active", SqlTypeCode::BOOLEAN)
        .column("meta", SqlTypeCode::OTHER)
        .row(vec![
            NativeValue::Long(1),
            NativeValue::Str("Ada".into()),
            NativeValue::Bool(true),
            NativeValue::Other {
                class: "org.postgresql.util.PGobject".into(),
                text: "{}".into(),
            },
        ])
        .row(vec![
            NativeValue::Long(2),
            NativeValue::Null,
            NativeValue::Null,
            NativeValue::Null,
        ])
}

#[test]
fn it_describes_columns() -> anyhow::Result<()> {
    carbonite_test::setup_if_needed();

    let reader = ConversionTable::shared().describe(&people())?;
    let columns = reader.columns();

    assert_eq!(columns.len(), 4);

    assert_eq!(columns[0].ordinal(), 0);
    assert_eq!(columns[0].name(), "id");
    assert_eq!(columns[0].type_code(), SqlTypeCode::BIGINT);
    assert_eq!(columns[0].converter(), ColumnConverter::Int);
    assert_eq!(columns[0].runtime_type(), Some(RuntimeType::Int));

    assert_eq!(columns[1].runtime_type(), Some(RuntimeType::Str));
    assert_eq!(columns[2].runtime_type(), Some(RuntimeType::Bool));

    assert_eq!(columns[3].converter(), ColumnConverter::Default);
    assert_eq!(columns[3].runtime_type(), None);

    Ok(())
}

#[test]
fn it_reads_every_row() -> anyhow::Result<()> {
    let mut rs = people();
    let reader = ConversionTable::shared().describe(&rs)?;

    let mut rows = Vec::new();
    while rs.next() {
        rows.push(reader.read(&mut rs)?);
    }

    assert_eq!(rows.len(), 2);

    assert_eq!(
        rows[0].values(),
        [
            Value::Int(1),
            Value::Str("Ada".into()),
            Value::Bool(true),
            Value::Str("{}".into()),
        ]
    );

    assert_eq!(rows[1].try_get("id")?.as_int(), Some(2));
    assert_eq!(rows[0].try_get("name")?.as_str(), Some("Ada"));
    assert_eq!(rows[0].try_get("active")?.as_bool(), Some(true));
    assert_eq!(rows[1].try_get("name")?, &Value::Null);
    assert_eq!(rows[1].try_get("active")?, &Value::Null);
    assert_eq!(rows[1].try_get("meta")?, &Value::Str("null".into()));

    // every row shares the described columns
    assert_eq!(rows[0].columns(), rows[1].columns());
    assert_eq!(rows[1].columns(), reader.columns());

    // one typed read per column per row
    assert_eq!(rs.reads(), 8);

    Ok(())
}

#[test]
fn it_looks_up_values() -> anyhow::Result<()> {
    let mut rs = people();
    let reader = ConversionTable::shared().describe(&rs)?;

    assert!(rs.next());
    let row = reader.read(&mut rs)?;

    assert_eq!(row.len(), 4);
    assert!(!row.is_empty());
    assert_eq!(row.get(1)?, &Value::Str("Ada".into()));

    let err = row.get(4).unwrap_err();
    assert!(matches!(err, Error::ColumnIndexOutOfBounds { index: 4, len: 4 }));

    let err = row.try_get("email").unwrap_err();
    assert!(matches!(&err, Error::ColumnNotFound(name) if name == "email"));

    assert_eq!(
        row.into_values().pop(),
        Some(Value::Str("{}".into()))
    );

    Ok(())
}

#[test]
fn it_stops_at_the_first_failed_column() -> anyhow::Result<()> {
    let mut rs = MockResultSet::new()
        .column("day", SqlTypeCode::DATE)
        .row(vec![NativeValue::Long(1)]);

    let reader = ConversionTable::shared().describe(&rs)?;
    assert!(rs.next());

    let err = reader.read(&mut rs).unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedNativeShape { sql_type, .. } if sql_type == SqlTypeCode::DATE
    ));

    Ok(())
}

#[test]
fn it_requires_a_positioned_result_set() -> anyhow::Result<()> {
    let mut rs = people();
    let reader = ConversionTable::shared().describe(&rs)?;

    let err = reader.read(&mut rs).unwrap_err();

    assert_eq!(
        err.driver_message(),
        Some("ResultSet not positioned properly, perhaps you need to call next.")
    );

    Ok(())
}

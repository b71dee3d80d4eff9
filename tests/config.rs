use std::fs;
use std::path::PathBuf;

use carbonite::config::LogConfig;
use carbonite::{Config, ConversionTable, Error, NativeArray, NativeValue, Value};
use carbonite_test::MockConnection;
use log::LevelFilter;

fn scratch_dir(name: &str) -> anyhow::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("carbonite-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[test]
fn it_builds_a_table_from_toml() -> anyhow::Result<()> {
    carbonite_test::setup_if_needed();

    let config = Config::from_toml_str(
        r#"
        [arrays]
        int-type-name = "int8"

        [log]
        converter-level = "off"
        failure-level = "error"
        "#,
    )?;

    let table = ConversionTable::new(&config);

    assert_eq!(table.log_settings().converter_level, LevelFilter::Off);
    assert_eq!(table.log_settings().failure_level, LevelFilter::Error);

    let mut conn = MockConnection::new();
    table.to_native(&Value::List(vec![Value::Int(1), Value::Int(2)]), &mut conn)?;

    assert_eq!(
        conn.arrays(),
        [NativeArray::new(
            "int8",
            vec![NativeValue::Long(1), NativeValue::Long(2)]
        )]
    );

    Ok(())
}

#[test]
fn it_reads_the_file_from_a_directory() -> anyhow::Result<()> {
    let dir = scratch_dir("read")?;
    fs::write(
        dir.join(Config::FILE_NAME),
        "[arrays]\nint-type-name = \"int4\"\n",
    )?;

    let config = Config::read_from_dir(&dir)?;
    fs::remove_dir_all(&dir)?;

    assert_eq!(config.arrays.int_type_name.as_deref(), Some("int4"));
    assert_eq!(config.log, LogConfig::default());

    Ok(())
}

#[test]
fn it_defaults_without_a_file() -> anyhow::Result<()> {
    let dir = scratch_dir("missing")?;

    let config = Config::read_from_dir(&dir)?;
    fs::remove_dir_all(&dir)?;

    assert_eq!(config, Config::default());
    assert_eq!(
        ConversionTable::new(&config).log_settings(),
        ConversionTable::default().log_settings()
    );

    Ok(())
}

#[test]
fn it_fails_on_invalid_configuration() -> anyhow::Result<()> {
    let err = Config::from_toml_str("[log]\nfailure-level = \"loud\"\n").unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    let dir = scratch_dir("invalid")?;
    let err = Config::read_from(dir.join("nope.toml")).unwrap_err();
    fs::remove_dir_all(&dir)?;

    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().starts_with("error reading configuration: failed to read"));

    Ok(())
}

mod mock;

pub use carbonite;
pub use mock::{MockConnection, MockDriverError, MockResultSet};

pub fn setup_if_needed() {
    let _ = dotenvy::dotenv();
    let _ = env_logger::builder().is_test(true).try_init();
}

// Test inbound conversion through both the direct path and an acquired converter
#[macro_export]
macro_rules! test_inbound {
    ($name:ident($code:expr, $($native:expr => $value:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_inbound_ $name >] () -> $crate::carbonite::Result<()> {
                $crate::setup_if_needed();

                $(
                    let mut rs = $crate::MockResultSet::single($code, $native);
                    let value = $crate::carbonite::to_value(&mut rs, 0)?;

                    println!("{:?} => {:?}", stringify!($native), value);

                    assert_eq!(value, $value, "unexpected value for {}", stringify!($native));

                    let mut rs = $crate::MockResultSet::single($code, $native);
                    let converter = $crate::carbonite::converter(&rs, 0)?;

                    assert_eq!(
                        converter.convert(&mut rs, 0)?,
                        $value,
                        "unexpected value from {:?} converter for {}",
                        converter,
                        stringify!($native)
                    );
                )+

                Ok(())
            }
        }
    };
}

// Test outbound conversion of values that bind without creating an array
#[macro_export]
macro_rules! test_outbound {
    ($name:ident($($value:expr => $native:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_outbound_ $name >] () -> $crate::carbonite::Result<()> {
                $crate::setup_if_needed();

                $(
                    let mut conn = $crate::MockConnection::new();
                    let native = $crate::carbonite::to_native(&$value, &mut conn)?;

                    assert_eq!(native, $native, "unexpected native value for {}", stringify!($value));
                    assert!(conn.arrays().is_empty());
                )+

                Ok(())
            }
        }
    };
}

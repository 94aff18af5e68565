#[macro_export]
macro_rules! form {
    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::form!($elem)),*])
    };

    // Handle empty record
    ({}) => {
        $crate::Value::Record($crate::RecordMap::new())
    };

    // Handle non-empty record
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut record = $crate::RecordMap::new();
        $(
            record.insert($key.to_string(), $crate::form!($value));
        )*
        $crate::Value::Record(record)
    }};

    // Leaf fallback: anything `Value: From` accepts
    ($leaf:expr) => {
        $crate::Value::from($leaf)
    };
}

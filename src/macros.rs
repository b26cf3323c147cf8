/// Look up a positional field of a sentence.
///
/// Evaluates to the `&str` at `$idx`, or returns `FieldError::Missing` from
/// the enclosing function.
#[macro_export]
macro_rules! field {
    ($fields:expr, $idx:expr, $name:expr) => {
        match $fields.get($idx) {
            Some(f) => f,
            None => return Err($crate::err::FieldError::Missing($idx, $name)),
        }
    };
}

/// Like `field!`, but parses the field as a finite `f64`. Empty fields count
/// as missing.
#[macro_export]
macro_rules! number_field {
    ($fields:expr, $idx:expr, $name:expr) => {
        match $crate::field!($fields, $idx, $name) {
            "" => return Err($crate::err::FieldError::Missing($idx, $name)),
            f => match f.parse::<f64>()? {
                n if n.is_finite() => n,
                _ => return Err($crate::err::FieldError::NotFinite($name)),
            },
        }
    };
}

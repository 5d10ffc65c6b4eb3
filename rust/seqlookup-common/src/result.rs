pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::ErrorKind;

    fn check_bounds(min: usize, max: usize) -> super::Result<usize> {
        verify_arg!(min, min <= max);
        Ok(max - min)
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(check_bounds(1, 4).unwrap(), 3);

        let err = check_bounds(5, 4).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "min");
                assert_eq!(message, "min <= max");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}

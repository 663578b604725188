use std::borrow::Cow;

use validator::ValidationError;

pub fn is_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::from("Must not be empty")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::empty("")]
    #[case::blank("  \t")]
    fn test_missing_value(#[case] value: &str) {
        let err = is_present(value).unwrap_err();

        assert_eq!(err.code, "required");
        assert_eq!(err.to_string(), "Must not be empty");
    }

    #[test]
    fn test_present_value() {
        assert!(is_present("555-1111").is_ok());
    }
}

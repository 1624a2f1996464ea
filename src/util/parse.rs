use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Splits a comma-separated list, trimming whitespace and dropping empty items.
///
/// `"General, Config,,"` becomes `["General", "Config"]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_id() {
        assert_eq!(
            parse_u64_from_string("123456789".to_string()).unwrap(),
            123456789
        );
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = parse_u64_from_string("abc".to_string()).unwrap_err();
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn splits_and_trims_list() {
        assert_eq!(
            split_list(" General, Config ,,Moderation "),
            vec!["General", "Config", "Moderation"]
        );
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }
}

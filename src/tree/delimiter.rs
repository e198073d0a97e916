use derive_more::Display;
use snafu::Snafu;

/// The default delimiter, used when none is given.
pub const DEFAULT_DELIMITER: char = '/';

/// A single-character separator between path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct Delimiter(char);

impl Delimiter {
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(DEFAULT_DELIMITER)
    }
}

impl From<char> for Delimiter {
    fn from(value: char) -> Self {
        Delimiter(value)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = InvalidInputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Delimiter(c)),
            _ => InvalidDelimiterSnafu { delimiter: value }.fail(),
        }
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum InvalidInputError {
    #[snafu(display("Delimiter must be a single character, got {:?}", delimiter))]
    InvalidDelimiter { delimiter: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/", '/')]
    #[case(".", '.')]
    #[case("\\", '\\')]
    #[case("→", '→')]
    fn delimiter_accepts_single_character(#[case] input: &str, #[case] expected: char) {
        let delimiter = Delimiter::try_from(input).expect("Single character should be accepted");
        assert_eq!(delimiter.as_char(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("//")]
    #[case("::")]
    #[case("ab")]
    fn delimiter_rejects_anything_but_one_character(#[case] input: &str) {
        let result = Delimiter::try_from(input);
        assert_eq!(
            result,
            Err(InvalidInputError::InvalidDelimiter {
                delimiter: input.to_string()
            })
        );
    }

    #[test]
    fn delimiter_defaults_to_slash() {
        assert_eq!(Delimiter::default().as_char(), '/');
    }

    #[test]
    fn delimiter_displays_as_its_character() {
        assert_eq!(Delimiter::from('.').to_string(), ".");
    }

    #[test]
    fn invalid_delimiter_error_names_the_input() {
        let error = Delimiter::try_from("--").unwrap_err();
        assert!(error.to_string().contains("\"--\""));
    }
}

//! # Element adapters
//!
//! The engine in [`crate::sort`] works over any comparison rule. This module binds it to the four
//! element types the command line understands, each with its own comparator, parser and printer:
//!
//! | tag      | Rust type | ordering                 | printed as        |
//! |----------|-----------|--------------------------|-------------------|
//! | `int`    | `i64`     | numeric                  | `Display`         |
//! | `double` | `f64`     | [`f64::total_cmp`]       | six decimals      |
//! | `char`   | `char`    | code point               | `Display`         |
//! | `string` | `String`  | lexical, byte by byte    | `Display`         |
//!
//! ```rust
//! use randsort::{DataType, Element};
//!
//! let kind: DataType = "double".parse().unwrap();
//! assert_eq!(kind, DataType::Double);
//!
//! let values = f64::parse("2.5 -1 3").unwrap();
//! assert_eq!(values[1].render(), "-1.000000");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The element type requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Double,
    Char,
    String,
}

impl DataType {
    pub const ALL: [DataType; 4] = [
        DataType::Int,
        DataType::Double,
        DataType::Char,
        DataType::String,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Double => "double",
            DataType::Char => "char",
            DataType::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DataType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnsupportedDataType(s.to_string()))
    }
}

/// An element type the report driver can read, order and print.
pub trait Element: Sized + Clone {
    const DATA_TYPE: DataType;

    /// Total order used for sorting and selection.
    fn compare(a: &Self, b: &Self) -> Ordering;

    /// Reads every element of `text`.
    fn parse(text: &str) -> Result<Vec<Self>>;

    fn render(&self) -> String;
}

/// Parses whitespace-separated tokens, reporting the position of the first bad one.
fn parse_tokens<T: FromStr>(text: &str, data_type: DataType) -> Result<Vec<T>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|_| Error::Parse {
                index,
                token: token.to_string(),
                data_type,
            })
        })
        .collect()
}

impl Element for i64 {
    const DATA_TYPE: DataType = DataType::Int;

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.cmp(b)
    }

    fn parse(text: &str) -> Result<Vec<Self>> {
        parse_tokens(text, Self::DATA_TYPE)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Element for f64 {
    const DATA_TYPE: DataType = DataType::Double;

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.total_cmp(b)
    }

    fn parse(text: &str) -> Result<Vec<Self>> {
        parse_tokens(text, Self::DATA_TYPE)
    }

    fn render(&self) -> String {
        format!("{:.6}", self)
    }
}

impl Element for char {
    const DATA_TYPE: DataType = DataType::Char;

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.cmp(b)
    }

    /// Every non-whitespace character is one element, so `ab c` reads as `a`, `b`, `c`.
    fn parse(text: &str) -> Result<Vec<Self>> {
        Ok(text.chars().filter(|c| !c.is_whitespace()).collect())
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Element for String {
    const DATA_TYPE: DataType = DataType::String;

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.as_bytes().cmp(b.as_bytes())
    }

    fn parse(text: &str) -> Result<Vec<Self>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_from_str() {
        assert_eq!("int".parse::<DataType>().unwrap(), DataType::Int);
        assert_eq!("double".parse::<DataType>().unwrap(), DataType::Double);
        assert_eq!("CHAR".parse::<DataType>().unwrap(), DataType::Char);
        assert_eq!("String".parse::<DataType>().unwrap(), DataType::String);
        assert!(matches!(
            "float".parse::<DataType>(),
            Err(Error::UnsupportedDataType(tag)) if tag == "float"
        ));
    }

    #[test]
    fn test_data_type_display_round_trips() {
        for kind in DataType::ALL {
            assert_eq!(kind.to_string().parse::<DataType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_ints() {
        assert_eq!(i64::parse("3 1\n2\t-7").unwrap(), vec![3, 1, 2, -7]);
        assert!(i64::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_int_reports_bad_token() {
        let err = i64::parse("1 2 x3 4").unwrap_err();
        match err {
            Error::Parse {
                index,
                token,
                data_type,
            } => {
                assert_eq!(index, 2);
                assert_eq!(token, "x3");
                assert_eq!(data_type, DataType::Int);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_doubles_and_render() {
        let values = f64::parse("2.5 -1 1e2").unwrap();
        assert_eq!(values, vec![2.5, -1.0, 100.0]);
        assert_eq!(values[0].render(), "2.500000");
        assert_eq!(values[2].render(), "100.000000");
    }

    #[test]
    fn test_parse_chars_skips_whitespace() {
        assert_eq!(char::parse("ab c\nd").unwrap(), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_parse_strings() {
        assert_eq!(
            String::parse("pear apple\nkiwi").unwrap(),
            vec!["pear", "apple", "kiwi"]
        );
    }

    #[test]
    fn test_comparators() {
        assert_eq!(i64::compare(&-1, &4), Ordering::Less);
        assert_eq!(f64::compare(&2.0, &2.0), Ordering::Equal);
        assert_eq!(f64::compare(&f64::NAN, &1.0), Ordering::Greater);
        assert_eq!(char::compare(&'b', &'a'), Ordering::Greater);
        assert_eq!(
            String::compare(&"Zebra".to_string(), &"apple".to_string()),
            Ordering::Less
        );
    }
}

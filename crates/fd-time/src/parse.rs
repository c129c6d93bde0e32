//! Text front end for [`Date`].
//!
//! The accepted layouts are recognised by their *shape*: runs of digits,
//! runs of letters, and the separators between them.
//!
//! | Example        | Layout                   |
//! |----------------|--------------------------|
//! | `4-Nov-1978`   | day-month-year           |
//! | `04-Nov-78`    | day-month-year (2-digit) |
//! | `4 Nov 1978`   | day month year           |
//! | `4Nov1978`     | day month year           |
//! | `1978-Nov-04`  | year-month-day           |
//! | `11/4/78`      | month/day/year (US)      |
//! | `1978-11-04`   | ISO year-month-day       |
//! | `04.11.1978`   | day.month.year           |
//! | `19781104`     | compact year-month-day   |

use crate::date::Date;
use crate::month::Month;
use fd_core::errors::{Error, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Digits(&'a str),
    Letters(&'a str),
    Sep(char),
}

fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        let run_len = |pred: fn(&char) -> bool| {
            rest.char_indices()
                .find(|(_, ch)| !pred(ch))
                .map_or(rest.len(), |(i, _)| i)
        };
        if c.is_ascii_digit() {
            let n = run_len(char::is_ascii_digit);
            tokens.push(Token::Digits(&rest[..n]));
            rest = &rest[n..];
        } else if c.is_ascii_alphabetic() {
            let n = run_len(char::is_ascii_alphabetic);
            tokens.push(Token::Letters(&rest[..n]));
            rest = &rest[n..];
        } else {
            tokens.push(Token::Sep(c));
            rest = &rest[c.len_utf8()..];
        }
    }
    tokens
}

fn number(digits: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| Error::Date(format!("invalid number '{digits}'")))
}

fn short_month(letters: &str) -> Result<u8> {
    Month::from_short_name(letters)
        .map(|m| m.number())
        .ok_or_else(|| Error::Date(format!("unknown month abbreviation '{letters}'")))
}

/// Year from a 2- or 4-digit field; two-digit years 69–99 are 19xx,
/// 00–68 are 20xx.
fn year(digits: &str) -> Result<i32> {
    let y = number(digits)? as i32;
    match digits.len() {
        4 => Ok(y),
        2 if y >= 69 => Ok(1900 + y),
        2 => Ok(2000 + y),
        _ => Err(Error::Date(format!("invalid year '{digits}'"))),
    }
}

fn day_or_month(digits: &str) -> Result<u8> {
    if digits.len() > 2 {
        return Err(Error::Date(format!("invalid day or month '{digits}'")));
    }
    Ok(number(digits)? as u8)
}

fn build(y: i32, m: u8, d: u8) -> Result<Date> {
    Date::from_ymd(y, m, d)
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use Token::{Digits, Letters, Sep};

        let text = s.trim();
        match tokenize(text).as_slice() {
            // 4-Nov-1978, 04-Nov-78
            [Digits(d), Sep('-'), Letters(m), Sep('-'), Digits(y)] if d.len() <= 2 => {
                build(year(y)?, short_month(m)?, day_or_month(d)?)
            }
            // 1978-Nov-04
            [Digits(y), Sep('-'), Letters(m), Sep('-'), Digits(d)] if y.len() == 4 => {
                build(year(y)?, short_month(m)?, day_or_month(d)?)
            }
            // 4 Nov 1978, 4Nov1978
            [Digits(d), Sep(' '), Letters(m), Sep(' '), Digits(y)] | [Digits(d), Letters(m), Digits(y)]
                if y.len() == 4 =>
            {
                build(year(y)?, short_month(m)?, day_or_month(d)?)
            }
            // 11/04/78, 11/4/1978
            [Digits(m), Sep('/'), Digits(d), Sep('/'), Digits(y)] => {
                build(year(y)?, day_or_month(m)?, day_or_month(d)?)
            }
            // 1978-11-04
            [Digits(y), Sep('-'), Digits(m), Sep('-'), Digits(d)] if y.len() == 4 => {
                build(year(y)?, day_or_month(m)?, day_or_month(d)?)
            }
            // 04.11.1978
            [Digits(d), Sep('.'), Digits(m), Sep('.'), Digits(y)] if y.len() == 4 => {
                build(year(y)?, day_or_month(m)?, day_or_month(d)?)
            }
            // 19781104
            [Digits(all)] if all.len() == 8 => build(
                year(&all[..4])?,
                day_or_month(&all[4..6])?,
                day_or_month(&all[6..])?,
            ),
            _ => Err(Error::Date(format!("unrecognised date format '{text}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dteq(s: &str, y: i32, m: u8, d: u8) {
        assert_eq!(s.parse::<Date>().unwrap(), Date::from_ymd(y, m, d).unwrap(), "{s}");
    }

    #[test]
    fn alphabetic_month_layouts() {
        dteq("4-Nov-1978", 1978, 11, 4);
        dteq("04-Nov-1978", 1978, 11, 4);
        dteq("04-nov-78", 1978, 11, 4);
        dteq("4 Nov 1978", 1978, 11, 4);
        dteq("04 Nov 1978", 1978, 11, 4);
        dteq("4Nov1978", 1978, 11, 4);
        dteq("04Nov1978", 1978, 11, 4);
        dteq("1978-Nov-04", 1978, 11, 4);
        dteq("1 Jan 2004", 2004, 1, 1);
    }

    #[test]
    fn numeric_layouts() {
        dteq("19781104", 1978, 11, 4);
        dteq("1978-11-04", 1978, 11, 4);
        dteq("1978-1-14", 1978, 1, 14);
        dteq("1978-1-4", 1978, 1, 4);
        dteq("04.11.1978", 1978, 11, 4);
        dteq("4.1.1978", 1978, 1, 4);
        dteq("11/04/78", 1978, 11, 4);
        dteq("1/23/78", 1978, 1, 23);
        dteq("11/4/1978", 1978, 11, 4);
        dteq("1/4/1978", 1978, 1, 4);
    }

    #[test]
    fn two_digit_year_pivot() {
        dteq("1/4/68", 2068, 1, 4);
        dteq("1/4/69", 1969, 1, 4);
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!("4 Nov".parse::<Date>().is_err());
        assert!("4-Foo-1978".parse::<Date>().is_err());
        assert!("2/30/2004".parse::<Date>().is_err());
        assert!("04-Nov-1978 10:00:00".parse::<Date>().is_err());
        assert!("".parse::<Date>().is_err());
    }
}

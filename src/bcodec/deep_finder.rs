use crate::bcodec::bvalue::{BValue, Delimiter};
use crate::bcodec::raw_finder::RawFinder;
use crate::constant::MAX_NESTING_DEPTH;
use crate::Error;

/// Deep finder looking for dictionary key in [bencoded](https://en.wikipedia.org/wiki/Bencode)
/// string.
///
/// Perform deep search, by looking for keys in dictionary values and list items (that can be
/// dictionaries itself). Works on raw spans, so it applies none of the decoder dictionary key
/// validation (an integer key is fine here).
pub struct DeepFinder {}

impl DeepFinder {
    fn find_in_value<'a>(
        arg: &'a [u8],
        key: &[u8],
        depth: usize,
    ) -> Result<(Option<Vec<u8>>, &'a [u8]), Error> {
        if depth > MAX_NESTING_DEPTH {
            return Err(Error::DecodeTooDeep);
        }

        match arg.first().map(Delimiter::from) {
            Some(Delimiter::Num) => {
                let (_, rest) = BValue::parse_byte_str(arg)?;
                Ok((None, rest))
            }
            Some(Delimiter::Int) => {
                let (_, rest) = BValue::parse_int(arg)?;
                Ok((None, rest))
            }
            Some(Delimiter::List) => Self::find_in_list(&arg[1..], key, depth),
            Some(Delimiter::Dict) => Self::find_in_dict(&arg[1..], key, depth),
            Some(Delimiter::End) | Some(Delimiter::Unknown) | None => {
                Err(Error::DecodeIncorrectChar)
            }
        }
    }

    fn find_in_list<'a>(
        mut arg: &'a [u8],
        key: &[u8],
        depth: usize,
    ) -> Result<(Option<Vec<u8>>, &'a [u8]), Error> {
        loop {
            match arg.first().map(Delimiter::from) {
                None => return Err(Error::DecodeMissingListEnd),
                Some(Delimiter::End) => return Ok((None, &arg[1..])),
                Some(_) => {
                    let (found, rest) = Self::find_in_value(arg, key, depth + 1)?;
                    if found.is_some() {
                        return Ok((found, rest));
                    }
                    arg = rest;
                }
            }
        }
    }

    fn find_in_dict<'a>(
        mut arg: &'a [u8],
        key: &[u8],
        depth: usize,
    ) -> Result<(Option<Vec<u8>>, &'a [u8]), Error> {
        loop {
            match arg.first().map(Delimiter::from) {
                None => return Err(Error::DecodeMissingListEnd),
                Some(Delimiter::End) => return Ok((None, &arg[1..])),
                Some(_) => {
                    let (found, rest) = Self::find_in_value(arg, key, depth + 1)?;
                    let raw_key = &arg[..arg.len() - rest.len()];
                    if raw_key == key {
                        let (_, past_value) = Self::find_in_value(rest, key, depth + 1)?;
                        let raw_value = &rest[..rest.len() - past_value.len()];
                        return Ok((Some(raw_value.to_vec()), past_value));
                    }
                    // Key matched whole takes precedence over a match inside the key
                    if found.is_some() {
                        return Ok((found, rest));
                    }

                    let (found, past_value) = Self::find_in_value(rest, key, depth + 1)?;
                    if found.is_some() {
                        return Ok((found, past_value));
                    }
                    arg = past_value;
                }
            }
        }
    }
}

impl RawFinder for DeepFinder {
    /// Find first value by specific dictionary key in
    /// [bencoded](https://en.wikipedia.org/wiki/Bencode) string. Look also in dictionary
    /// values and list items, which may be dictionaries itself. Value is returned in raw
    /// format. Malformed input gives `None`, never an error.
    ///
    /// # Example
    /// ```
    /// use bdec::{DeepFinder, RawFinder};
    ///
    /// let value = DeepFinder::find_first("1:k", b"d1:k4:spame").unwrap();
    /// assert_eq!(value, b"4:spam".to_vec());
    /// ```
    fn find_first(key: &str, arg: &[u8]) -> Option<Vec<u8>> {
        let mut arg = arg;
        while !arg.is_empty() {
            match Self::find_in_value(arg, key.as_bytes(), 0) {
                Ok((Some(value), _)) => return Some(value),
                Ok((None, rest)) => arg = rest,
                Err(_) => return None,
            }
        }
        None
    }
}

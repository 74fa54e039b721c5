use crate::constant::MAX_NESTING_DEPTH;
use crate::Error;
use std::collections::HashMap;

pub enum Delimiter {
    Num,
    Int,
    List,
    Dict,
    End,
    Unknown,
}

impl From<&u8> for Delimiter {
    fn from(byte: &u8) -> Self {
        match byte {
            b'0'..=b'9' => Delimiter::Num,
            b'i' => Delimiter::Int,
            b'l' => Delimiter::List,
            b'd' => Delimiter::Dict,
            b'e' => Delimiter::End,
            _ => Delimiter::Unknown,
        }
    }
}

type Key = Vec<u8>;

/// [Bencode](https://en.wikipedia.org/wiki/Bencode) representation. [BEP3](https://www.bittorrent.org/beps/bep_0003.html#bencoding)
/// specify four basic types: integer, string (but can be any byte array), list and dictionary.
#[derive(PartialEq, Clone, Debug)]
pub enum BValue {
    /// Integer representation. [BEP3](https://www.bittorrent.org/beps/bep_0003.html#bencoding) doesn't
    /// specify max/min limit, so in this implementation i64 was used, and should be sufficient.
    Int(i64),
    /// String representation, more precisely this can be any u8 array (e.g. "pieces" in a
    /// metafile is a block of SHA-1 hashes, not text).
    ByteStr(Vec<u8>),
    /// List of `BValue` values. Order is preserved.
    List(Vec<BValue>),
    /// Dictionary with byte string keys. Key order is not enforced on read, and on a
    /// duplicated key the last seen value wins.
    Dict(HashMap<Key, BValue>),
}

impl BValue {
    /// Parse single [bencoded](https://en.wikipedia.org/wiki/Bencode) value from the beginning
    /// of `arg`. Returns decoded value and the not consumed part of the buffer, so the caller
    /// can continue from there. `None` means there was nothing to parse (empty input, or no
    /// recognizable value at the first byte), which is not an error.
    pub fn parse_value(arg: &[u8]) -> Result<(Option<BValue>, &[u8]), Error> {
        Self::value(arg, 0)
    }

    fn value(arg: &[u8], depth: usize) -> Result<(Option<BValue>, &[u8]), Error> {
        if depth > MAX_NESTING_DEPTH {
            return Err(Error::DecodeTooDeep);
        }

        let byte = match arg.first() {
            Some(byte) => byte,
            None => return Ok((None, &arg[..0])),
        };

        match byte.into() {
            Delimiter::Num => {
                let (val, rest) = Self::parse_byte_str(arg)?;
                Ok((Some(BValue::ByteStr(val)), rest))
            }
            Delimiter::Int => {
                let (val, rest) = Self::parse_int(arg)?;
                Ok((Some(BValue::Int(val)), rest))
            }
            Delimiter::List => {
                let (val, rest) = Self::parse_list(&arg[1..], depth)?;
                Ok((Some(BValue::List(val)), rest))
            }
            Delimiter::Dict => {
                let (val, rest) = Self::parse_dict(&arg[1..], depth)?;
                Ok((Some(BValue::Dict(val)), rest))
            }
            Delimiter::End | Delimiter::Unknown => Ok((None, &arg[..0])),
        }
    }

    /// Parse [bencoded](https://en.wikipedia.org/wiki/Bencode) string (`<len>:<bytes>`), with
    /// the length prefix not consumed yet. Returns value bytes and the not consumed part of
    /// the buffer.
    pub fn parse_byte_str(arg: &[u8]) -> Result<(Vec<u8>, &[u8]), Error> {
        let delim = match arg.iter().position(|&b| b == b':') {
            Some(pos) => pos,
            None => return Err(Error::DecodeMissingStrDelimiter),
        };

        let len = std::str::from_utf8(&arg[..delim])
            .ok()
            .and_then(|len| len.parse::<usize>().ok())
            .ok_or(Error::DecodeIncorrectStrLen)?;

        let rest = &arg[delim + 1..];
        if rest.len() < len {
            return Err(Error::DecodeNotEnoughChars);
        }

        Ok((rest[..len].to_vec(), &rest[len..]))
    }

    /// Parse [bencoded](https://en.wikipedia.org/wiki/Bencode) integer (`i<num>e`), with the
    /// leading `i` not consumed yet. Returns value and the not consumed part of the buffer.
    /// Payload is accepted whenever it parses as decimal i64, so canonical form is not
    /// enforced (`i01e`, `i-0e` and `i+4e` all decode).
    pub fn parse_int(arg: &[u8]) -> Result<(i64, &[u8]), Error> {
        let payload = match arg.get(1..) {
            Some(payload) => payload,
            None => return Err(Error::DecodeMissingTerminalChars),
        };
        let end = match payload.iter().position(|&b| b == b'e') {
            Some(pos) => pos,
            None => return Err(Error::DecodeMissingTerminalChars),
        };

        let num = std::str::from_utf8(&payload[..end])
            .ok()
            .and_then(|num| num.parse::<i64>().ok())
            .ok_or(Error::DecodeUnableConvert)?;

        Ok((num, &payload[end + 1..]))
    }

    fn parse_list(mut arg: &[u8], depth: usize) -> Result<(Vec<BValue>, &[u8]), Error> {
        let mut values = vec![];

        loop {
            match arg.first().map(Delimiter::from) {
                None => return Err(Error::DecodeMissingListEnd),
                Some(Delimiter::End) => return Ok((values, &arg[1..])),
                Some(_) => {
                    let (value, rest) = Self::value(arg, depth + 1)
                        .map_err(|e| Error::DecodeListItem(Box::new(e)))?;
                    if let Some(value) = value {
                        values.push(value);
                    }
                    arg = rest;
                }
            }
        }
    }

    fn parse_dict(mut arg: &[u8], depth: usize) -> Result<(HashMap<Key, BValue>, &[u8]), Error> {
        let mut dict = HashMap::new();

        loop {
            match arg.first().map(Delimiter::from) {
                None => return Err(Error::DecodeMissingListEnd),
                Some(Delimiter::End) => return Ok((dict, &arg[1..])),
                Some(_) => {
                    let (key, rest) = Self::value(arg, depth + 1)
                        .map_err(|e| Error::DecodeDictKey(Box::new(e)))?;
                    // Zero length check is the only key shape validation, so a non-string
                    // key fails the same way as an empty one
                    let key = match key {
                        Some(BValue::ByteStr(key)) if !key.is_empty() => key,
                        _ => return Err(Error::DecodeZeroLengthKey),
                    };

                    let (value, rest) = Self::value(rest, depth + 1).map_err(|e| {
                        Error::DecodeDictValue(
                            String::from_utf8_lossy(&key).into_owned(),
                            Box::new(e),
                        )
                    })?;
                    if let Some(value) = value {
                        dict.insert(key, value);
                    }
                    arg = rest;
                }
            }
        }
    }
}

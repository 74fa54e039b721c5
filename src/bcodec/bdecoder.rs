use crate::bcodec::bvalue::BValue;
use crate::Error;

/// [Bencode](https://en.wikipedia.org/wiki/Bencode) decoder used by metafile/torrent files and
/// BitTorrent protocol.
#[derive(PartialEq, Clone, Debug)]
pub struct BDecoder {}

impl BDecoder {
    /// Decode first [bencoded](https://en.wikipedia.org/wiki/Bencode) value in the buffer,
    /// ignoring any trailing bytes. `None` means there was nothing to parse, which is not
    /// treated as an error (see [`from_prefix`](BDecoder::from_prefix) for the remainder
    /// returning form).
    ///
    /// # Example
    /// ```
    /// use bdec::{BDecoder, BValue};
    /// let val = BDecoder::from_array("i44e".as_bytes()).unwrap();
    ///
    /// assert_eq!(val, Some(BValue::Int(44)));
    /// ```
    pub fn from_array(arg: &[u8]) -> Result<Option<BValue>, Error> {
        let (value, _) = Self::from_prefix(arg)?;
        Ok(value)
    }

    /// Decode first [bencoded](https://en.wikipedia.org/wiki/Bencode) value in the buffer and
    /// return it together with the not consumed suffix. Some bencode based protocols
    /// concatenate top-level values, so the caller can continue decoding from the returned
    /// rest, or use it to detect trailing garbage.
    ///
    /// # Example
    /// ```
    /// use bdec::{BDecoder, BValue};
    /// let (val, rest) = BDecoder::from_prefix("i2ei-3e".as_bytes()).unwrap();
    ///
    /// assert_eq!(val, Some(BValue::Int(2)));
    /// assert_eq!(rest, b"i-3e");
    /// ```
    pub fn from_prefix(arg: &[u8]) -> Result<(Option<BValue>, &[u8]), Error> {
        BValue::parse_value(arg)
    }
}

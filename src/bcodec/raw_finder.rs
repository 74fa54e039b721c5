/// Finder interface for dictionary key in [bencoded](https://en.wikipedia.org/wiki/Bencode) string.
pub trait RawFinder {
    /// Find first value for defined key in [bencoded](https://en.wikipedia.org/wiki/Bencode)
    /// string with dictionaries. The key is given in its raw bencoded form (e.g. `4:info`)
    /// and the value is returned in raw format as well.
    fn find_first(key: &str, arg: &[u8]) -> Option<Vec<u8>>;
}

// Copyright 2020 Mateusz Janda.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use bdec::{BDecoder, BValue, DeepFinder, RawFinder};
use std::collections::HashMap;

const PIECE_LENGTH: i64 = 262144;
const PIECE_COUNT: usize = 150_000;

// Fixture encoders, for test data only (the crate itself has no encoder)
fn add_int(out: &mut Vec<u8>, value: i64) {
    out.push(b'i');
    out.extend_from_slice(value.to_string().as_bytes());
    out.push(b'e');
}

fn add_byte_str(out: &mut Vec<u8>, value: &[u8]) {
    out.extend_from_slice(value.len().to_string().as_bytes());
    out.push(b':');
    out.extend_from_slice(value);
}

fn piece_hashes(count: usize) -> Vec<u8> {
    (0..count * 20).map(|i| (i % 251) as u8).collect()
}

fn single_file_metainfo(pieces: &[u8]) -> Vec<u8> {
    let mut out = vec![b'd'];
    add_byte_str(&mut out, b"announce");
    add_byte_str(&mut out, b"http://tracker.example.com/announce");
    add_byte_str(&mut out, b"info");
    out.push(b'd');
    add_byte_str(&mut out, b"length");
    add_int(&mut out, (pieces.len() as i64 / 20 - 1) * PIECE_LENGTH + 12345);
    add_byte_str(&mut out, b"name");
    add_byte_str(&mut out, b"ubuntu-22.04.3-desktop-amd64.iso");
    add_byte_str(&mut out, b"piece length");
    add_int(&mut out, PIECE_LENGTH);
    add_byte_str(&mut out, b"pieces");
    add_byte_str(&mut out, pieces);
    out.push(b'e');
    out.push(b'e');
    out
}

fn multi_file_metainfo(pieces: &[u8], file_num: usize) -> Vec<u8> {
    let mut out = vec![b'd'];
    add_byte_str(&mut out, b"announce");
    add_byte_str(&mut out, b"http://tracker.example.com/announce");
    add_byte_str(&mut out, b"info");
    out.push(b'd');
    add_byte_str(&mut out, b"files");
    out.push(b'l');
    for num in 0..file_num {
        out.push(b'd');
        add_byte_str(&mut out, b"length");
        add_int(&mut out, 4096 + num as i64);
        add_byte_str(&mut out, b"path");
        out.push(b'l');
        add_byte_str(&mut out, b"data");
        add_byte_str(&mut out, format!("file-{:04}.bin", num).as_bytes());
        out.push(b'e');
        out.push(b'e');
    }
    out.push(b'e');
    add_byte_str(&mut out, b"name");
    add_byte_str(&mut out, b"dataset");
    add_byte_str(&mut out, b"piece length");
    add_int(&mut out, PIECE_LENGTH);
    add_byte_str(&mut out, b"pieces");
    add_byte_str(&mut out, pieces);
    out.push(b'e');
    out.push(b'e');
    out
}

fn as_dict(value: BValue) -> HashMap<Vec<u8>, BValue> {
    match value {
        BValue::Dict(dict) => dict,
        value => panic!("expected dictionary, got {:?}", value),
    }
}

#[test]
fn decode_single_file_metainfo() {
    let pieces = piece_hashes(PIECE_COUNT);
    let data = single_file_metainfo(&pieces);
    assert!(data.len() > 3_000_000);

    let dict = as_dict(BDecoder::from_array(&data).unwrap().unwrap());
    assert_eq!(dict.len(), 2);
    assert_eq!(
        dict.get(b"announce".as_slice()),
        Some(&BValue::ByteStr(
            b"http://tracker.example.com/announce".to_vec()
        ))
    );

    let info = match dict.get(b"info".as_slice()) {
        Some(BValue::Dict(info)) => info,
        value => panic!("expected info dictionary, got {:?}", value),
    };
    assert_eq!(
        info.get(b"name".as_slice()),
        Some(&BValue::ByteStr(b"ubuntu-22.04.3-desktop-amd64.iso".to_vec()))
    );
    assert_eq!(
        info.get(b"piece length".as_slice()),
        Some(&BValue::Int(PIECE_LENGTH))
    );
    match info.get(b"pieces".as_slice()) {
        Some(BValue::ByteStr(hashes)) => assert_eq!(hashes.len(), PIECE_COUNT * 20),
        value => panic!("expected pieces byte string, got {:?}", value),
    }
}

#[test]
fn decode_multi_file_metainfo() {
    let pieces = piece_hashes(PIECE_COUNT);
    let data = multi_file_metainfo(&pieces, 1000);

    let dict = as_dict(BDecoder::from_array(&data).unwrap().unwrap());
    let info = match dict.get(b"info".as_slice()) {
        Some(BValue::Dict(info)) => info,
        value => panic!("expected info dictionary, got {:?}", value),
    };

    let files = match info.get(b"files".as_slice()) {
        Some(BValue::List(files)) => files,
        value => panic!("expected files list, got {:?}", value),
    };
    assert_eq!(files.len(), 1000);

    let first = match &files[0] {
        BValue::Dict(first) => first,
        value => panic!("expected file dictionary, got {:?}", value),
    };
    assert_eq!(first.get(b"length".as_slice()), Some(&BValue::Int(4096)));
    assert_eq!(
        first.get(b"path".as_slice()),
        Some(&BValue::List(vec![
            BValue::ByteStr(b"data".to_vec()),
            BValue::ByteStr(b"file-0000.bin".to_vec())
        ]))
    );
}

#[test]
fn find_raw_info_span() {
    let pieces = piece_hashes(PIECE_COUNT);
    let data = single_file_metainfo(&pieces);

    let raw_info = DeepFinder::find_first("4:info", &data).unwrap();

    // "info" is the last key of the top-level dictionary, so its raw value runs up to
    // the closing "e"
    let start = data.windows(6).position(|win| win == b"4:info").unwrap() + 6;
    assert_eq!(raw_info, data[start..data.len() - 1].to_vec());

    let info = as_dict(BDecoder::from_array(&raw_info).unwrap().unwrap());
    assert_eq!(
        info.get(b"piece length".as_slice()),
        Some(&BValue::Int(PIECE_LENGTH))
    );
}

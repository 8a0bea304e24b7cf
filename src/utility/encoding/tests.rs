// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, decode, sniff_bom};

#[test]
fn test_utf8_passthrough() {
    let result = decode("NAME=世界".as_bytes(), Encoding::Utf8).unwrap();
    insta::assert_snapshot!(result, @"NAME=世界");
}

#[test]
fn test_utf8_bom_is_stripped() {
    let result = decode(b"\xEF\xBB\xBFA=1", Encoding::Utf8).unwrap();
    assert_eq!(result, "A=1");
}

#[test]
fn test_windows_1252_conversion() {
    // "café" in Windows-1252: 0x63 0x61 0x66 0xe9
    let result = decode(b"caf\xe9", Encoding::Windows1252).unwrap();
    insta::assert_snapshot!(result, @"café");
}

#[test]
fn test_invalid_utf8_is_rejected() {
    assert!(decode(b"caf\xe9", Encoding::Utf8).is_none());
}

#[test]
fn test_utf16_le_with_bom() {
    // BOM + "A=1" in UTF-16 LE
    let bytes = b"\xFF\xFEA\x00=\x001\x00";

    assert_eq!(sniff_bom(bytes), Some((Encoding::Utf16Le, 2)));
    assert_eq!(decode(bytes, Encoding::Utf8).unwrap(), "A=1");
}

#[test]
fn test_utf16_be_with_bom() {
    let bytes = b"\xFE\xFF\x00A\x00=\x001";

    assert_eq!(sniff_bom(bytes), Some((Encoding::Utf16Be, 2)));
    assert_eq!(decode(bytes, Encoding::Windows1252).unwrap(), "A=1");
}

#[test]
fn test_no_bom() {
    assert_eq!(sniff_bom(b"A=1"), None);
    assert_eq!(sniff_bom(b""), None);
}

#[test]
fn test_encoding_labels() {
    assert_eq!("utf-8".parse::<Encoding>(), Ok(Encoding::Utf8));
    assert_eq!("UTF-16LE".parse::<Encoding>(), Ok(Encoding::Utf16Le));
    assert_eq!("latin1".parse::<Encoding>(), Ok(Encoding::Windows1252));
    assert_eq!("cp1252".parse::<Encoding>(), Ok(Encoding::Windows1252));
    insta::assert_snapshot!(
        "shift_jis".parse::<Encoding>().unwrap_err(),
        @"unsupported encoding 'shift_jis'"
    );
    assert_eq!(Encoding::Utf16Be.to_string(), "UTF-16BE");
}

#[test]
fn test_encoding_serde_names() {
    let encoding: Encoding = serde_json::from_str(r#""windows-1252""#).unwrap();
    assert_eq!(encoding, Encoding::Windows1252);
    assert_eq!(serde_json::to_string(&Encoding::Utf8).unwrap(), r#""utf-8""#);
}

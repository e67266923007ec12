//! JPEGのマーカーセグメントを走査し、コーデック固有のメタデータを取り出すモジュール。
//!
//! 画素のデコードは `image` クレートに任せ、ここでは SOS より前のヘッダ部分だけを読みます。

use super::codec_info::{CodecInfo, MetadataValue};

// --- マーカー定義 ---

const MARKER_PREFIX: u8 = 0xFF;
const START_OF_IMAGE: u8 = 0xD8; // SOI
const END_OF_IMAGE: u8 = 0xD9; // EOI
const START_OF_SCAN: u8 = 0xDA; // SOS
const TEMPORARY: u8 = 0x01; // TEM
const APPLICATION_DATA_0: u8 = 0xE0; // APP0: JFIF
const APPLICATION_DATA_14: u8 = 0xEE; // APP14: Adobe
const COMMENT: u8 = 0xFE; // COM

const JFIF_IDENTIFIER: &[u8] = b"JFIF\0";
const ADOBE_IDENTIFIER: &[u8] = b"Adobe";

/// 長さフィールドを持たない単独マーカーかどうか。
fn is_standalone(marker: u8) -> bool {
    matches!(marker, START_OF_IMAGE | TEMPORARY | 0xD0..=0xD7)
}

/// プログレッシブ方式の SOF (SOF2, SOF6, SOF10, SOF14)。
fn is_progressive_frame(marker: u8) -> bool {
    matches!(marker, 0xC2 | 0xC6 | 0xCA | 0xCE)
}

fn read_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    let hi = *bytes.get(offset)?;
    let lo = *bytes.get(offset + 1)?;
    Some(u16::from_be_bytes([hi, lo]))
}

/// JPEGのバイト列からメタデータを抽出します。
///
/// SOI で始まらないデータや途中で切れたセグメントに対してはエラーにせず、
/// それまでに読めた分だけを返します。
pub fn scan(bytes: &[u8]) -> CodecInfo {
    let mut info = CodecInfo::new();
    if bytes.len() < 2 || bytes[0] != MARKER_PREFIX || bytes[1] != START_OF_IMAGE {
        return info;
    }

    let mut pos = 2;
    while pos < bytes.len() {
        if bytes[pos] != MARKER_PREFIX {
            pos += 1;
            continue;
        }
        // フィルバイト (連続した 0xFF) を読み飛ばす
        while pos < bytes.len() && bytes[pos] == MARKER_PREFIX {
            pos += 1;
        }
        let Some(&marker) = bytes.get(pos) else {
            break;
        };
        pos += 1;

        if is_standalone(marker) {
            continue;
        }
        if marker == START_OF_SCAN || marker == END_OF_IMAGE {
            break;
        }

        let Some(length) = read_u16(bytes, pos).map(usize::from) else {
            break;
        };
        if length < 2 || pos + length > bytes.len() {
            break;
        }
        let payload = &bytes[pos + 2..pos + length];
        read_segment(marker, payload, &mut info);
        pos += length;
    }

    info
}

fn read_segment(marker: u8, payload: &[u8], info: &mut CodecInfo) {
    match marker {
        APPLICATION_DATA_0 if payload.starts_with(JFIF_IDENTIFIER) => read_jfif(payload, info),
        APPLICATION_DATA_14 if payload.starts_with(ADOBE_IDENTIFIER) => read_adobe(payload, info),
        COMMENT => {
            info.insert(
                "comment",
                MetadataValue::Text(String::from_utf8_lossy(payload).into_owned()),
            );
        }
        m if is_progressive_frame(m) => {
            info.insert("progressive", MetadataValue::Int(1));
            info.insert("progression", MetadataValue::Int(1));
        }
        _ => {}
    }
}

/// APP0 (JFIF): バージョン、密度の単位、密度。
fn read_jfif(payload: &[u8], info: &mut CodecInfo) {
    let (Some(version), Some(&unit), Some(x), Some(y)) = (
        read_u16(payload, 5),
        payload.get(7),
        read_u16(payload, 8),
        read_u16(payload, 10),
    ) else {
        return;
    };

    info.insert("jfif", MetadataValue::Int(i64::from(version)));
    info.insert(
        "jfif_version",
        MetadataValue::Pair(u32::from(version >> 8), u32::from(version & 0xFF)),
    );
    info.insert("jfif_unit", MetadataValue::Int(i64::from(unit)));
    info.insert("jfif_density", MetadataValue::Pair(u32::from(x), u32::from(y)));

    match unit {
        // dots per inch
        1 => info.insert("dpi", MetadataValue::Pair(u32::from(x), u32::from(y))),
        // dots per cm
        2 => info.insert(
            "dpi",
            MetadataValue::FloatPair(f64::from(x) * 2.54, f64::from(y) * 2.54),
        ),
        _ => {}
    }
}

/// APP14 (Adobe): DCTEncodeバージョンとカラー変換フラグ。
fn read_adobe(payload: &[u8], info: &mut CodecInfo) {
    if let (Some(version), Some(&transform)) = (read_u16(payload, 5), payload.get(11)) {
        info.insert("adobe", MetadataValue::Int(i64::from(version)));
        info.insert("adobe_transform", MetadataValue::Int(i64::from(transform)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- テスト用ヘルパー関数 ---
    fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
        let len = (payload.len() + 2) as u16;
        let mut out = vec![0xFF, marker];
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(payload);
        out
    }

    fn jfif_payload(version: u16, unit: u8, x: u16, y: u16) -> Vec<u8> {
        let mut p = JFIF_IDENTIFIER.to_vec();
        p.extend_from_slice(&version.to_be_bytes());
        p.push(unit);
        p.extend_from_slice(&x.to_be_bytes());
        p.extend_from_slice(&y.to_be_bytes());
        p.extend_from_slice(&[0, 0]); // サムネイルなし
        p
    }

    fn jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
        let mut out = vec![0xFF, START_OF_IMAGE];
        for s in segments {
            out.extend_from_slice(s);
        }
        out.extend_from_slice(&[0xFF, START_OF_SCAN, 0x00, 0x02, 0xFF, END_OF_IMAGE]);
        out
    }

    #[test]
    fn non_jpeg_data_yields_empty_info() {
        assert!(scan(b"\x89PNG\r\n\x1a\n").is_empty());
        assert!(scan(&[]).is_empty());
    }

    #[test]
    fn reads_jfif_header_with_dpi() {
        let bytes = jpeg(&[segment(APPLICATION_DATA_0, &jfif_payload(0x0101, 1, 72, 96))]);
        let info = scan(&bytes);

        assert_eq!(info.get("jfif"), Some(&MetadataValue::Int(257)));
        assert_eq!(info.get("jfif_version"), Some(&MetadataValue::Pair(1, 1)));
        assert_eq!(info.get("jfif_unit"), Some(&MetadataValue::Int(1)));
        assert_eq!(info.get("jfif_density"), Some(&MetadataValue::Pair(72, 96)));
        assert_eq!(info.get("dpi"), Some(&MetadataValue::Pair(72, 96)));
        assert!(!info.contains_key("progressive"));
    }

    #[test]
    fn aspect_ratio_only_jfif_has_no_dpi() {
        let bytes = jpeg(&[segment(APPLICATION_DATA_0, &jfif_payload(0x0102, 0, 1, 1))]);
        let info = scan(&bytes);
        assert_eq!(info.get("jfif_version"), Some(&MetadataValue::Pair(1, 2)));
        assert!(!info.contains_key("dpi"));
    }

    #[test]
    fn centimetre_density_is_converted_to_dpi() {
        let bytes = jpeg(&[segment(APPLICATION_DATA_0, &jfif_payload(0x0101, 2, 100, 50))]);
        match scan(&bytes).get("dpi") {
            Some(MetadataValue::FloatPair(x, y)) => {
                assert!((x - 254.0).abs() < 1e-9);
                assert!((y - 127.0).abs() < 1e-9);
            }
            other => panic!("予期せぬ値: {:?}", other),
        }
    }

    #[test]
    fn reads_adobe_comment_and_progressive_frame() {
        let mut adobe = ADOBE_IDENTIFIER.to_vec();
        adobe.extend_from_slice(&[0x00, 0x64, 0x00, 0x00, 0x00, 0x00, 0x01]);
        let sof2 = [8u8, 0x01, 0x40, 0x00, 0xF0, 3, 1, 0x22, 0, 2, 0x11, 1, 3, 0x11, 1];

        let bytes = jpeg(&[
            segment(APPLICATION_DATA_14, &adobe),
            segment(COMMENT, b"fixture"),
            segment(0xC2, &sof2),
        ]);
        let info = scan(&bytes);

        assert_eq!(info.get("adobe"), Some(&MetadataValue::Int(100)));
        assert_eq!(info.get("adobe_transform"), Some(&MetadataValue::Int(1)));
        assert_eq!(
            info.get("comment"),
            Some(&MetadataValue::Text("fixture".to_string()))
        );
        assert_eq!(info.get("progressive"), Some(&MetadataValue::Int(1)));
        assert_eq!(info.get("progression"), Some(&MetadataValue::Int(1)));
    }

    #[test]
    fn truncated_segment_stops_without_panic() {
        let mut bytes = vec![0xFF, START_OF_IMAGE, 0xFF, APPLICATION_DATA_0, 0x00, 0x40];
        bytes.extend_from_slice(b"JFIF");
        assert!(scan(&bytes).is_empty());
    }

    #[test]
    fn baseline_frame_is_not_progressive() {
        let sof0 = [8u8, 0x00, 0x10, 0x00, 0x10, 1, 1, 0x11, 0];
        let info = scan(&jpeg(&[segment(0xC0, &sof0)]));
        assert!(!info.contains_key("progressive"));
    }
}

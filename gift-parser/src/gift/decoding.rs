//! Encoding resolution
//!
//! Question banks arrive from editors on every platform, so the raw bytes are decoded
//! by trying an ordered list of candidate encodings and keeping the first one that
//! accepts the input. The default list ends with latin-1, which maps every byte, so
//! in practice decoding only fails when a caller narrows the list.

use crate::gift::error::{GiftError, Result};
use encoding_rs::{UTF_8, WINDOWS_1251};
use std::fmt;
use std::str::FromStr;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8 with an optional leading byte order mark, which is dropped.
    Utf8Sig,
    /// Strict UTF-8, a leading BOM is kept as U+FEFF.
    Utf8,
    /// The legacy Cyrillic code page.
    Windows1251,
    /// ISO-8859-1, never rejects.
    Latin1,
}

impl Encoding {
    pub const DEFAULT_CANDIDATES: [Encoding; 4] = [
        Encoding::Utf8Sig,
        Encoding::Utf8,
        Encoding::Windows1251,
        Encoding::Latin1,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8Sig => "utf-8-sig",
            Encoding::Utf8 => "utf-8",
            Encoding::Windows1251 => "windows-1251",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Decode `bytes`, returning `None` when they are malformed for this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8Sig => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
            }
            Encoding::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
            Encoding::Windows1251 => WINDOWS_1251
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
            Encoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = GiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8-sig" | "utf8-sig" => Ok(Encoding::Utf8Sig),
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "windows-1251" | "cp1251" => Ok(Encoding::Windows1251),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            _ => Err(GiftError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Decode `bytes` with the first candidate that accepts them.
///
/// Fails with [`GiftError::Decode`] carrying the full candidate list when every
/// candidate rejects the input.
pub fn resolve(bytes: &[u8], candidates: &[Encoding]) -> Result<(String, Encoding)> {
    for encoding in candidates {
        if let Some(text) = encoding.decode(bytes) {
            tracing::trace!(encoding = encoding.label(), "decoded source");
            return Ok((text, *encoding));
        }
        tracing::trace!(encoding = encoding.label(), "encoding rejected source");
    }
    Err(GiftError::Decode {
        attempted: candidates.to_vec(),
    })
}

/// Same as [`resolve`], discarding which encoding won.
pub fn decode(bytes: &[u8], candidates: &[Encoding]) -> Result<String> {
    resolve(bytes, candidates).map(|(text, _)| text)
}

#[cfg(test)]
mod tests {
    use super::*;

    // "Привет" in windows-1251
    const CP1251_PRIVET: &[u8] = &[0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];

    #[test]
    fn test_plain_utf8_wins_first() {
        let (text, encoding) = resolve("Вопрос {T}".as_bytes(), &Encoding::DEFAULT_CANDIDATES).unwrap();
        assert_eq!(text, "Вопрос {T}");
        assert_eq!(encoding, Encoding::Utf8Sig);
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"$CATEGORY: Math");
        let text = decode(&bytes, &Encoding::DEFAULT_CANDIDATES).unwrap();
        assert_eq!(text, "$CATEGORY: Math");
    }

    #[test]
    fn test_strict_utf8_keeps_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"x");
        let text = decode(&bytes, &[Encoding::Utf8]).unwrap();
        assert_eq!(text, "\u{feff}x");
    }

    #[test]
    fn test_falls_back_to_cp1251() {
        let (text, encoding) = resolve(CP1251_PRIVET, &Encoding::DEFAULT_CANDIDATES).unwrap();
        assert_eq!(text, "Привет");
        assert_eq!(encoding, Encoding::Windows1251);
    }

    #[test]
    fn test_latin1_accepts_anything() {
        let text = decode(&[0x41, 0xE9, 0xFF], &[Encoding::Utf8, Encoding::Latin1]).unwrap();
        assert_eq!(text, "Aéÿ");
    }

    #[test]
    fn test_all_candidates_reject() {
        let err = decode(CP1251_PRIVET, &[Encoding::Utf8Sig, Encoding::Utf8]).unwrap_err();
        match err {
            GiftError::Decode { attempted } => {
                assert_eq!(attempted, vec![Encoding::Utf8Sig, Encoding::Utf8]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_candidate_list_fails() {
        assert!(matches!(
            decode(b"anything", &[]),
            Err(GiftError::Decode { attempted }) if attempted.is_empty()
        ));
    }

    #[test]
    fn test_labels_round_trip() {
        for encoding in Encoding::DEFAULT_CANDIDATES {
            assert_eq!(encoding.label().parse::<Encoding>().unwrap(), encoding);
        }
        assert_eq!("CP1251".parse::<Encoding>().unwrap(), Encoding::Windows1251);
        assert_eq!("ISO-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("utf_8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert!(matches!(
            "koi8-r".parse::<Encoding>(),
            Err(GiftError::UnknownEncoding(label)) if label == "koi8-r"
        ));
    }
}

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Punctuation dialect applied to Japanese prose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PunctuationMode {
    /// 、 and 。
    #[default]
    Japanese,
    /// ， and ．, common in academic and government writing.
    Academic,
    /// ASCII , and .
    Western,
}

impl PunctuationMode {
    pub fn comma(self) -> char {
        match self {
            Self::Japanese => '、',
            Self::Academic => '，',
            Self::Western => ',',
        }
    }

    pub fn period(self) -> char {
        match self {
            Self::Japanese => '。',
            Self::Academic => '．',
            Self::Western => '.',
        }
    }

    fn remap(self, c: char) -> char {
        match (self, c) {
            (Self::Japanese, '，') | (Self::Academic, '、') | (Self::Western, '、' | '，') => {
                self.comma()
            }
            (Self::Japanese, '．') | (Self::Academic, '。') | (Self::Western, '。' | '．') => {
                self.period()
            }
            _ => c,
        }
    }
}

/// Rewrite full-width commas and periods into the requested dialect.
///
/// ASCII `,` and `.` are left alone so numbers, URLs and embedded English
/// survive every mode.
pub fn normalize_punctuation(text: &str, mode: PunctuationMode) -> String {
    text.chars().map(|c| mode.remap(c)).collect()
}

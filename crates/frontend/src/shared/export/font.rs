//! Шрифт PDF выгрузки: встроенный TTF, покрытие глифами и ширина текста.
//!
//! Шрифт, в котором нет глифа для какого-либо символа выгрузки, не
//! принимается: вместо пустых квадратов в PDF пользователь получает ошибку.

use super::rows::EXPORT_TITLES;
use super::ExportError;
use std::sync::Arc;
use ttf_parser::{Face, GlyphId};

/// DejaVu Sans: покрывает лаосский блок целиком (лицензия в assets/fonts)
pub const BUNDLED_FONT_FAMILY: &str = "DejaVuSans";
static BUNDLED_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

const PT_TO_MM: f32 = 25.4 / 72.0;

/// TrueType/OpenType font bytes plus the family name they register under
#[derive(Clone, Debug, PartialEq)]
pub struct FontResource {
    family: String,
    bytes: Arc<[u8]>,
}

impl FontResource {
    /// Parses the font and requires glyphs for every column title
    pub fn from_bytes(family: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ExportError> {
        let family = family.into();
        if !has_font_signature(&bytes) {
            return Err(ExportError::FontRegistration(format!(
                "{}: not a TrueType/OpenType font",
                family
            )));
        }
        let font = Self {
            family,
            bytes: bytes.into(),
        };
        font.require_glyphs(EXPORT_TITLES)?;
        Ok(font)
    }

    /// Шрифт, зашитый в бинарник
    pub fn bundled() -> Result<Self, ExportError> {
        Self::from_bytes(BUNDLED_FONT_FAMILY, BUNDLED_FONT.to_vec())
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn metrics(&self) -> Result<FontMetrics<'_>, ExportError> {
        let face = Face::parse(&self.bytes, 0)
            .map_err(|e| ExportError::FontRegistration(format!("{}: {}", self.family, e)))?;
        Ok(FontMetrics {
            units_per_em: f32::from(face.units_per_em()),
            face,
        })
    }

    /// Fails with the list of characters the font cannot draw
    pub fn require_glyphs<'t>(
        &self,
        texts: impl IntoIterator<Item = &'t str>,
    ) -> Result<(), ExportError> {
        let missing = self.metrics()?.missing_glyphs(texts);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ExportError::FontRegistration(format!(
                "{}: no glyphs for {:?}",
                self.family,
                missing.into_iter().collect::<String>()
            )))
        }
    }
}

fn has_font_signature(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"true") | Some(b"OTTO") | Some(b"ttcf")
    )
}

/// Lao vowel and tone marks sit on the previous letter and must not start a line
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}' | '\u{0EB1}' | '\u{0EB4}'..='\u{0EBC}' | '\u{0EC8}'..='\u{0ECE}'
    )
}

/// Base letter plus its marks
fn clusters(word: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in word.char_indices() {
        if i > start && !is_combining_mark(c) {
            out.push(&word[start..i]);
            start = i;
        }
    }
    if start < word.len() {
        out.push(&word[start..]);
    }
    out
}

/// Glyph lookup and horizontal advances of a parsed font
pub struct FontMetrics<'a> {
    face: Face<'a>,
    units_per_em: f32,
}

impl<'a> FontMetrics<'a> {
    pub fn has_glyph(&self, c: char) -> bool {
        self.face.glyph_index(c).is_some()
    }

    /// Unique characters without a glyph, in order of appearance; whitespace is skipped
    pub fn missing_glyphs<'t>(&self, texts: impl IntoIterator<Item = &'t str>) -> Vec<char> {
        let mut missing = Vec::new();
        for text in texts {
            for c in text.chars() {
                if !c.is_whitespace() && !self.has_glyph(c) && !missing.contains(&c) {
                    missing.push(c);
                }
            }
        }
        missing
    }

    pub fn text_width_mm(&self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| {
                let glyph = self.face.glyph_index(c).unwrap_or(GlyphId(0));
                u32::from(self.face.glyph_hor_advance(glyph).unwrap_or(0))
            })
            .sum();
        units as f32 / self.units_per_em * size_pt * PT_TO_MM
    }

    /// Greedy line breaking at spaces; words wider than the column are split
    /// between letters. Always returns at least one line.
    pub fn wrap(&self, text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let fits = |s: &str| self.text_width_mm(s, size_pt) <= max_width_mm;
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let joined = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if fits(&joined) {
                current = joined;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_string();
                continue;
            }
            for cluster in clusters(word) {
                let candidate = format!("{}{}", current, cluster);
                if !current.is_empty() && !fits(&candidate) {
                    lines.push(std::mem::replace(&mut current, cluster.to_string()));
                } else {
                    current = candidate;
                }
            }
        }
        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        lines
    }
}

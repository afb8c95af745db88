use crate::{
    refs::{ObjectReferences, RefType},
    Error,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

/// The role a piece of text plays, which decides the face it is set in and
/// the width factor the layout engine estimates it with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FontClass {
    Regular,
    Bold,
    Italic,
    /// Contact icons
    Icon,
}

/// The PDF base-14 fonts used by the renderer. These are never embedded; every
/// PDF viewer is required to provide them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    Courier,
    CourierBold,
    ZapfDingbats,
}

impl BuiltinFont {
    /// The PostScript name the font is referred to by in the PDF
    pub fn base_font(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::TimesRoman => "Times-Roman",
            BuiltinFont::TimesBold => "Times-Bold",
            BuiltinFont::TimesItalic => "Times-Italic",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    fn is_symbolic(&self) -> bool {
        matches!(self, BuiltinFont::ZapfDingbats)
    }

    /// Encode a single character into the font's one-byte encoding
    /// (WinAnsi for the text fonts, the built-in encoding for ZapfDingbats)
    fn encode_char(&self, ch: char) -> Option<u8> {
        if self.is_symbolic() {
            dingbat_code(ch)
        } else {
            win_ansi_code(ch)
        }
    }
}

impl FromStr for BuiltinFont {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [BuiltinFont; 9] = [
            BuiltinFont::Helvetica,
            BuiltinFont::HelveticaBold,
            BuiltinFont::HelveticaOblique,
            BuiltinFont::TimesRoman,
            BuiltinFont::TimesBold,
            BuiltinFont::TimesItalic,
            BuiltinFont::Courier,
            BuiltinFont::CourierBold,
            BuiltinFont::ZapfDingbats,
        ];
        ALL.into_iter()
            .find(|font| font.base_font().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownFont(s.to_string()))
    }
}

/// Turkish letters WinAnsi has no code for, placed in codes it leaves unused
/// through the font's `/Differences` array
const TURKISH_DIFFERENCES: [(u8, char, &[u8]); 6] = [
    (0x7f, 'İ', b"Idotaccent"),
    (0x81, 'ı', b"dotlessi"),
    (0x8d, 'Ş', b"Scedilla"),
    (0x8f, 'ş', b"scedilla"),
    (0x90, 'Ğ', b"Gbreve"),
    (0x9d, 'ğ', b"gbreve"),
];

fn win_ansi_code(ch: char) -> Option<u8> {
    if let Some((code, _, _)) = TURKISH_DIFFERENCES.iter().find(|(_, c, _)| *c == ch) {
        return Some(*code);
    }
    let code = ch as u32;
    match code {
        0x20..=0x7e | 0xa0..=0xff => Some(code as u8),
        _ => {
            let byte = match ch {
                '€' => 0x80,
                '‚' => 0x82,
                'ƒ' => 0x83,
                '„' => 0x84,
                '…' => 0x85,
                '†' => 0x86,
                '‡' => 0x87,
                'ˆ' => 0x88,
                '‰' => 0x89,
                'Š' => 0x8a,
                '‹' => 0x8b,
                'Œ' => 0x8c,
                'Ž' => 0x8e,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '•' => 0x95,
                '–' => 0x96,
                '—' => 0x97,
                '˜' => 0x98,
                '™' => 0x99,
                'š' => 0x9a,
                '›' => 0x9b,
                'œ' => 0x9c,
                'ž' => 0x9e,
                'Ÿ' => 0x9f,
                _ => return None,
            };
            Some(byte)
        }
    }
}

fn dingbat_code(ch: char) -> Option<u8> {
    let byte = match ch {
        '☎' => 0x25,
        '✈' => 0x28,
        '✉' => 0x29,
        '✓' => 0x33,
        '✔' => 0x34,
        '★' => 0x48,
        '●' => 0x6c,
        '■' => 0x6e,
        _ => return None,
    };
    Some(byte)
}

/// The code every character a built-in font cannot encode is replaced with
const WIN_ANSI_REPLACEMENT: u8 = b'?';
const DINGBAT_REPLACEMENT: u8 = 0x6c;

/// Where a font comes from. A cheap-to-clone description that is turned into
/// a [Font] once per rendered document.
#[derive(Clone, Debug)]
pub enum FontSpec {
    Builtin(BuiltinFont),
    /// Raw TrueType / OpenType bytes, embedded in their entirety
    TrueType(Arc<Vec<u8>>),
}

impl FontSpec {
    /// Read and validate a font file from disk
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<FontSpec, Error> {
        let bytes = std::fs::read(path)?;
        // parse once up front so a broken file is reported as configuration error
        OwnedFace::from_vec(bytes.clone(), 0)?;
        Ok(FontSpec::TrueType(Arc::new(bytes)))
    }
}

/// A font which text on a page can be set in
pub enum Font {
    Builtin(BuiltinFont),
    Embedded(OwnedFace),
}

impl Font {
    /// Load raw TrueType / OpenType bytes, returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, Error> {
        Ok(Font::Embedded(OwnedFace::from_vec(bytes, 0)?))
    }

    pub fn from_spec(spec: &FontSpec) -> Result<Font, Error> {
        match spec {
            FontSpec::Builtin(font) => Ok(Font::Builtin(*font)),
            FontSpec::TrueType(bytes) => Font::load(bytes.as_ref().clone()),
        }
    }

    /// Encode text into the bytes of a PDF string in this font's encoding.
    /// Built-in fonts use one byte per character, embedded fonts two bytes
    /// (the glyph id). Characters the font cannot show are replaced.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Builtin(font) => {
                let replacement = if font.is_symbolic() {
                    DINGBAT_REPLACEMENT
                } else {
                    WIN_ANSI_REPLACEMENT
                };
                text.chars()
                    .map(|ch| {
                        font.encode_char(ch).unwrap_or_else(|| {
                            log::debug!("{} cannot encode {ch:?}", font.base_font());
                            replacement
                        })
                    })
                    .collect()
            }
            Font::Embedded(_) => text
                .chars()
                .flat_map(|ch| {
                    self.glyph_id(ch)
                        .or_else(|| self.glyph_id('\u{FFFD}'))
                        .or_else(|| self.glyph_id('?'))
                        .unwrap_or(0)
                        .to_be_bytes()
                })
                .collect(),
        }
    }

    /// Whether every character of `text` has a glyph in this font
    pub fn can_encode(&self, text: &str) -> bool {
        match self {
            Font::Builtin(font) => text.chars().all(|ch| font.encode_char(ch).is_some()),
            Font::Embedded(_) => text.chars().all(|ch| self.glyph_id(ch).is_some()),
        }
    }

    /// The glyph id of a character in an embedded face
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        match self {
            Font::Builtin(_) => None,
            Font::Embedded(face) => face.as_face_ref().glyph_index(ch).map(|gid| gid.0),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));

        match self {
            Font::Builtin(font) => {
                let mut type1 = writer.type1_font(font_id);
                type1.base_font(Name(font.base_font().as_bytes()));
                if !font.is_symbolic() {
                    let mut encoding = type1.encoding_custom();
                    encoding.base_encoding(Name(b"WinAnsiEncoding"));
                    let mut differences = encoding.differences();
                    for (code, _, glyph) in TURKISH_DIFFERENCES {
                        differences.consecutive(code, [Name(glyph)]);
                    }
                }
            }
            Font::Embedded(face) => {
                let cid_font_id = write_cid(face, refs, font_index, writer);
                let to_unicode_id = write_to_unicode(face, refs, font_index, writer);

                let mut font = writer.type0_font(font_id);
                font.base_font(Name(postscript_name(face, font_index).as_bytes()));
                font.encoding_predefined(Name(b"Identity-H"));
                font.descendant_font(cid_font_id);
                font.to_unicode(to_unicode_id);
            }
        }
    }
}

/// The document-level font ids for each [FontClass], in the order a page
/// looks them up
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FontTable {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
    pub italic: Id<Font>,
    pub icon: Id<Font>,
}

impl FontTable {
    pub fn get(&self, class: FontClass) -> Id<Font> {
        match class {
            FontClass::Regular => self.regular,
            FontClass::Bold => self.bold,
            FontClass::Italic => self.italic,
            FontClass::Icon => self.icon,
        }
    }
}

/// The family name of the face with anything that isn't alphanumeric removed,
/// falling back to a generated name when the face has no usable name
fn postscript_name(face: &OwnedFace, font_index: usize) -> String {
    face.as_face_ref()
        .names()
        .into_iter()
        .find(|name| name.name_id == owned_ttf_parser::name_id::POST_SCRIPT_NAME && name.is_unicode())
        .and_then(|name| name.to_string())
        .map(|name| name.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '-').collect::<String>())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("F{font_index}"))
}

/// Every glyph id reachable from a unicode cmap subtable, with the first
/// character that maps to it
fn glyph_ids(face: &OwnedFace) -> BTreeMap<u16, char> {
    let mut map: BTreeMap<u16, char> = BTreeMap::new();
    let Some(cmap) = face.as_face_ref().tables().cmap else {
        return map;
    };

    for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
        subtable.codepoints(|codepoint: u32| {
            if let Ok(ch) = char::try_from(codepoint) {
                if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0) {
                    map.entry(index.0).or_insert(ch);
                }
            }
        });
    }

    map
}

fn write_cid(face: &OwnedFace, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
    let descriptor_id = write_descriptor(face, refs, font_index, writer);
    let id = refs.gen(RefType::CidFont(font_index));
    let face_ref = face.as_face_ref();
    let scaling = 1000.0 / face_ref.units_per_em() as f32;

    let widths: Vec<(u16, f32)> = glyph_ids(face)
        .keys()
        .map(|&gid| {
            let advance = face_ref.glyph_hor_advance(GlyphId(gid)).unwrap_or_default();
            (gid, advance as f32 * scaling)
        })
        .collect();

    let mut cid_font = writer.cid_font(id);
    cid_font.subtype(CidFontType::Type2);
    cid_font.base_font(Name(postscript_name(face, font_index).as_bytes()));
    cid_font.system_info(SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    });
    cid_font.font_descriptor(descriptor_id);
    cid_font.default_width(1000.0);

    // group consecutive glyph ids into runs
    let mut w = cid_font.widths();
    let mut run_start: Option<u16> = None;
    let mut run: Vec<f32> = Vec::new();
    for (gid, width) in widths {
        match run_start {
            Some(start) if start as usize + run.len() == gid as usize => run.push(width),
            Some(start) => {
                w.consecutive(start, run.drain(..));
                run_start = Some(gid);
                run.push(width);
            }
            None => {
                run_start = Some(gid);
                run.push(width);
            }
        }
    }
    if let Some(start) = run_start {
        w.consecutive(start, run.drain(..));
    }
    w.finish();

    cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
    id
}

fn write_descriptor(
    face: &OwnedFace,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let data_id = refs.gen(RefType::FontData(font_index));
    writer
        .stream(data_id, face.as_slice())
        .pair(Name(b"Length1"), face.as_slice().len() as i32);

    let face_ref = face.as_face_ref();
    let scaling = 1000.0 / face_ref.units_per_em() as f32;
    let bbox = face_ref.global_bounding_box();

    let mut flags = FontFlags::SYMBOLIC;
    if face_ref.is_monospaced() {
        flags.insert(FontFlags::FIXED_PITCH);
    }
    if face_ref.is_italic() {
        flags.insert(FontFlags::ITALIC);
    }

    let id = refs.gen(RefType::FontDescriptor(font_index));
    let mut descriptor = writer.font_descriptor(id);
    descriptor.name(Name(postscript_name(face, font_index).as_bytes()));
    descriptor.flags(flags);
    descriptor.bbox(pdf_writer::Rect {
        x1: bbox.x_min as f32 * scaling,
        y1: bbox.y_min as f32 * scaling,
        x2: bbox.x_max as f32 * scaling,
        y2: bbox.y_max as f32 * scaling,
    });
    descriptor.italic_angle(0.0);
    descriptor.ascent(face_ref.ascender() as f32 * scaling);
    descriptor.descent(face_ref.descender() as f32 * scaling);
    descriptor.cap_height(
        face_ref
            .capital_height()
            .map(|h| h as f32 * scaling)
            .unwrap_or(face_ref.ascender() as f32 * scaling),
    );
    descriptor.stem_v(80.0);
    descriptor.font_file2(data_id);
    descriptor.finish();

    id
}

fn write_to_unicode(face: &OwnedFace, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
    let id = refs.gen(RefType::ToUnicode(font_index));

    let mut map = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    // bfchar blocks hold at most 100 entries
    let ids: Vec<(u16, char)> = glyph_ids(face).into_iter().collect();
    for block in ids.chunks(100) {
        map.push_str(&format!("{} beginbfchar\n", block.len()));
        for &(gid, ch) in block {
            let mut utf16 = [0u16; 2];
            let units: String = ch
                .encode_utf16(&mut utf16)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            map.push_str(&format!("<{gid:04x}> <{units}>\n"));
        }
        map.push_str("endbfchar\n");
    }
    map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
        map.as_bytes(),
        miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
    );
    writer
        .stream(id, compressed.as_slice())
        .filter(pdf_writer::Filter::FlateDecode);

    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_fonts_parse_by_postscript_name() {
        assert_eq!("Times-Roman".parse::<BuiltinFont>().unwrap(), BuiltinFont::TimesRoman);
        assert_eq!("helvetica-bold".parse::<BuiltinFont>().unwrap(), BuiltinFont::HelveticaBold);
        assert!(matches!("Comic Sans".parse::<BuiltinFont>(), Err(Error::UnknownFont(_))));
    }

    #[test]
    fn win_ansi_covers_western_european_text() {
        let font = Font::Builtin(BuiltinFont::TimesRoman);
        assert_eq!(font.encode("Aé•"), vec![b'A', 0xe9, 0x95]);
        assert_eq!(font.encode("Ω"), vec![b'?']);
        assert!(!font.can_encode("Ωmega"));
    }

    #[test]
    fn turkish_letters_use_the_differences_codes() {
        let font = Font::Builtin(BuiltinFont::TimesRoman);
        assert_eq!(font.encode("İletişim"), vec![0x7f, b'l', b'e', b't', b'i', 0x8f, b'i', b'm']);
        assert_eq!(font.encode("Şub Ağu ı"), vec![0x8d, b'u', b'b', b' ', b'A', 0x9d, b'u', b' ', 0x81]);
        assert!(font.can_encode("İletişim Bilgileri Ğ"));
        assert!(!Font::Builtin(BuiltinFont::ZapfDingbats).can_encode("İ"));
    }

    #[test]
    fn text_fonts_write_the_turkish_differences() {
        let mut pdf = Pdf::new();
        let mut fonts: id_arena::Arena<Font> = id_arena::Arena::new();
        let id = fonts.alloc(Font::Builtin(BuiltinFont::HelveticaBold));
        fonts[id].write(&mut ObjectReferences::new(), id, &mut pdf);
        let bytes = pdf.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/BaseEncoding /WinAnsiEncoding"));
        assert!(text.contains("/Idotaccent"));
        assert!(text.contains("/gbreve"));
    }

    #[test]
    fn dingbats_encode_contact_icons() {
        let font = Font::Builtin(BuiltinFont::ZapfDingbats);
        assert_eq!(font.encode("✉☎●"), vec![0x29, 0x25, 0x6c]);
        assert_eq!(font.encode("📧"), vec![DINGBAT_REPLACEMENT]);
    }

    #[test]
    fn broken_font_bytes_are_rejected() {
        assert!(matches!(Font::load(vec![0, 1, 2, 3]), Err(Error::FaceParsing(_))));
    }
}

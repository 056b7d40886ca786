//! Folding of accented Latin letters (and Cyrillic Ё) to their plain forms.

use std::borrow::Cow;

/// `(letter, replacement)` pairs applied in order. Keys are single code
/// points; no replacement contains a key, so folding is idempotent.
#[rustfmt::skip]
pub const DIACRITICS: &[(&str, &str)] = &[
    ("Á", "A"), ("á", "a"), ("Ć", "C"), ("ć", "c"), ("É", "E"), ("é", "e"), ("Í", "I"), ("í", "i"),
    ("Ĺ", "L"), ("ĺ", "l"), ("Ń", "N"), ("ń", "n"), ("Ó", "O"), ("ó", "o"), ("Ŕ", "R"), ("ŕ", "r"),
    ("Ś", "S"), ("ś", "s"), ("Ú", "U"), ("ú", "u"), ("Ý", "Y"), ("ý", "y"), ("Ź", "Z"), ("ź", "z"),
    ("À", "A"), ("à", "a"), ("È", "E"), ("è", "e"), ("Ì", "I"), ("ì", "i"), ("Ò", "O"), ("ò", "o"),
    ("Ù", "U"), ("ù", "u"), ("Â", "A"), ("â", "a"), ("Ĉ", "C"), ("ĉ", "c"), ("Ê", "E"), ("ê", "e"),
    ("Ĝ", "G"), ("ĝ", "g"), ("Ĥ", "H"), ("ĥ", "h"), ("Î", "I"), ("î", "i"), ("Ĵ", "J"), ("ĵ", "j"),
    ("Ô", "O"), ("ô", "o"), ("Ŝ", "S"), ("ŝ", "s"), ("Û", "U"), ("û", "u"), ("Ŵ", "W"), ("ŵ", "w"),
    ("Ŷ", "Y"), ("ŷ", "y"), ("Ä", "A"), ("ä", "a"), ("Ë", "E"), ("ë", "e"), ("Ï", "I"), ("ï", "i"),
    ("Ö", "O"), ("ö", "o"), ("Ü", "U"), ("ü", "u"), ("Ÿ", "Y"), ("ÿ", "y"), ("ß", "ss"),
    ("Ã", "A"), ("ã", "a"), ("Ẽ", "E"), ("ẽ", "e"), ("Ĩ", "I"), ("ĩ", "i"), ("Ñ", "N"), ("ñ", "n"),
    ("Õ", "O"), ("õ", "o"), ("Ũ", "U"), ("ũ", "u"), ("Ỹ", "Y"), ("ỹ", "y"), ("Ç", "C"), ("ç", "c"),
    ("Ģ", "G"), ("ģ", "g"), ("Ķ", "K"), ("ķ", "k"), ("Ļ", "L"), ("ļ", "l"), ("Ņ", "N"), ("ņ", "n"),
    ("Ŗ", "R"), ("ŗ", "r"), ("Ş", "S"), ("ş", "s"), ("Ţ", "T"), ("ţ", "t"), ("Đ", "D"), ("đ", "d"),
    ("Ů", "U"), ("ů", "u"), ("Ǎ", "A"), ("ǎ", "a"), ("Č", "C"), ("č", "c"), ("Ď", "D"), ("ď", "d"),
    ("Ě", "E"), ("ě", "e"), ("Ǐ", "I"), ("ǐ", "I"), ("Ľ", "L"), ("ľ", "l"), ("Ň", "N"), ("ň", "N"),
    ("Ǒ", "O"), ("ǒ", "o"), ("Ř", "R"), ("ř", "r"), ("Š", "S"), ("š", "s"), ("Ť", "T"), ("ť", "t"),
    ("Ǔ", "U"), ("ǔ", "u"), ("Ž", "Z"), ("ž", "z"), ("Ā", "A"), ("ā", "a"), ("Ē", "E"), ("ē", "e"),
    ("Ī", "I"), ("ī", "i"), ("Ō", "O"), ("ō", "o"), ("Ū", "U"), ("ū", "u"), ("Ȳ", "O"), ("ȳ", "o"),
    ("Ǣ", "E"), ("ǣ", "e"), ("ǖ", "u"), ("ǘ", "u"), ("ǚ", "u"), ("ǜ", "u"), ("Ă", "A"), ("ă", "a"),
    ("Ĕ", "E"), ("ĕ", "e"), ("Ğ", "G"), ("ğ", "g"), ("Ĭ", "I"), ("ĭ", "i"), ("Ŏ", "O"), ("ŏ", "o"),
    ("Ŭ", "U"), ("ŭ", "u"), ("Ċ", "C"), ("ċ", "c"), ("Ė", "E"), ("ė", "e"), ("Ġ", "G"), ("ġ", "g"),
    ("İ", "I"), ("ı", "i"), ("Ż", "Z"), ("ż", "z"), ("Ą", "A"), ("ą", "a"), ("Ę", "E"), ("ę", "e"),
    ("Į", "I"), ("į", "i"), ("Ǫ", "O"), ("ǫ", "o"), ("Ų", "U"), ("ų", "u"), ("Ḍ", "D"), ("ḍ", "d"),
    ("Ḥ", "H"), ("ḥ", "h"), ("Ḷ", "L"), ("ḷ", "l"), ("Ḹ", "L"), ("ḹ", "l"), ("Ṃ", "M"), ("ṃ", "m"),
    ("Ṇ", "N"), ("ṇ", "n"), ("Ṛ", "R"), ("ṛ", "r"), ("Ṝ", "R"), ("ṝ", "r"), ("Ṣ", "S"), ("ṣ", "s"),
    ("Ṭ", "T"), ("ṭ", "t"), ("Ł", "L"), ("ł", "l"), ("Ő", "O"), ("ő", "o"), ("Ű", "U"), ("ű", "u"),
    ("Ŀ", "L"), ("ŀ", "l"), ("Ħ", "H"), ("ħ", "h"), ("Ð", "D"), ("ð", "d"), ("Þ", "TH"),
    ("þ", "th"), ("Œ", "O"), ("œ", "o"), ("Æ", "E"), ("æ", "e"), ("Ø", "O"), ("ø", "o"),
    ("Å", "A"), ("å", "a"), ("Ə", "E"), ("ə", "e"), ("Ё", "Е"), ("ё", "е"),
];

/// Replace every letter in [`DIACRITICS`] with its plain equivalent.
pub fn remove_diacritics(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut result = Cow::Borrowed(text);
    for &(from, to) in DIACRITICS {
        if result.contains(from) {
            result = Cow::Owned(result.replace(from, to));
        }
    }
    result
}

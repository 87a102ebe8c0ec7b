use super::KeyRole;

/// One physical key: its identifier, ordered characters and role.
///
/// Characters are listed lowercase first, then uppercase, then any
/// non-letters, which belong to both the shifted and unshifted subsets.
pub(super) struct KeyDef {
    pub(super) id: &'static str,
    pub(super) chars: &'static str,
    pub(super) role: KeyRole,
}

const fn letters(id: &'static str, chars: &'static str) -> KeyDef {
    KeyDef {
        id,
        chars,
        role: KeyRole::Letters,
    }
}

const PUNCTUATION: &str = ".,?!'";

/// Phone keypad. Digits 2–9 carry the Turkish letter groups.
pub(super) static NUMERIC: &[KeyDef] = &[
    KeyDef {
        id: "1",
        chars: ".,?!1",
        role: KeyRole::Punctuation,
    },
    letters("2", "abcçABCÇ2"),
    letters("3", "defDEF3"),
    letters("4", "gğhıiGĞHIİ4"),
    letters("5", "jklJKL5"),
    letters("6", "mnoöMNOÖ6"),
    letters("7", "pqrsşPQRSŞ7"),
    letters("8", "tuvüTUVÜ8"),
    letters("9", "wxyzWXYZ9"),
    KeyDef {
        id: "0",
        chars: " 0",
        role: KeyRole::Space,
    },
];

/// QWERTY-ordered compact layout, two or three letters per key.
pub(super) static COMPACT: &[KeyDef] = &[
    letters("qw", "qwQW"),
    letters("er", "erER"),
    letters("ty", "tyTY"),
    letters("ui", "uıiUIİ"),
    letters("op", "opOP"),
    letters("as", "asşASŞ"),
    letters("df", "dfDF"),
    letters("gh", "gğhGĞH"),
    letters("jk", "jkJK"),
    letters("lu", "lüLÜ"),
    letters("zx", "zxZX"),
    letters("cv", "cçvCÇV"),
    letters("bn", "bnBN"),
    letters("mo", "möMÖ"),
    KeyDef {
        id: ".",
        chars: PUNCTUATION,
        role: KeyRole::Punctuation,
    },
];

/// Full alphabetic layout. Turkish letters are a second tap on their Latin key.
pub(super) static STANDARD: &[KeyDef] = &[
    letters("a", "aA"),
    letters("b", "bB"),
    letters("c", "cçCÇ"),
    letters("d", "dD"),
    letters("e", "eE"),
    letters("f", "fF"),
    letters("g", "gğGĞ"),
    letters("h", "hH"),
    letters("i", "iıİI"),
    letters("j", "jJ"),
    letters("k", "kK"),
    letters("l", "lL"),
    letters("m", "mM"),
    letters("n", "nN"),
    letters("o", "oöOÖ"),
    letters("p", "pP"),
    letters("q", "qQ"),
    letters("r", "rR"),
    letters("s", "sşSŞ"),
    letters("t", "tT"),
    letters("u", "uüUÜ"),
    letters("v", "vV"),
    letters("w", "wW"),
    letters("x", "xX"),
    letters("y", "yY"),
    letters("z", "zZ"),
    KeyDef {
        id: ".",
        chars: PUNCTUATION,
        role: KeyRole::Punctuation,
    },
];

//! Static character and voice lookup tables.
//!
//! Both tables are compile-time perfect hash maps, so lookups are O(1) and
//! never allocate. The voice table only provides the defaults; operators can
//! extend or override it through [`crate::config::MorseConfig`].

use phf::phf_map;

use super::Symbol;

/// International Morse code patterns, keyed by uppercase ASCII character.
///
/// Patterns are written as `.` (dot) and `-` (dash).
pub static MORSE_TABLE: phf::Map<char, &'static str> = phf_map! {
    'A' => ".-",
    'B' => "-...",
    'C' => "-.-.",
    'D' => "-..",
    'E' => ".",
    'F' => "..-.",
    'G' => "--.",
    'H' => "....",
    'I' => "..",
    'J' => ".---",
    'K' => "-.-",
    'L' => ".-..",
    'M' => "--",
    'N' => "-.",
    'O' => "---",
    'P' => ".--.",
    'Q' => "--.-",
    'R' => ".-.",
    'S' => "...",
    'T' => "-",
    'U' => "..-",
    'V' => "...-",
    'W' => ".--",
    'X' => "-..-",
    'Y' => "-.--",
    'Z' => "--..",
    '1' => ".----",
    '2' => "..---",
    '3' => "...--",
    '4' => "....-",
    '5' => ".....",
    '6' => "-....",
    '7' => "--...",
    '8' => "---..",
    '9' => "----.",
    '0' => "-----",
    ',' => "--..--",
    '.' => ".-.-.-",
    '?' => "..--..",
    '/' => "-..-.",
    '-' => "-....-",
    '(' => "-.--.",
    ')' => "-.--.-",
    '\'' => ".----.",
    '!' => "-.-.--",
    '&' => ".-...",
    ':' => "---...",
    ';' => "-.-.-.",
    '=' => "-...-",
    '+' => ".-.-.",
    '_' => "..--.-",
    '"' => ".-..-.",
    '$' => "...-..-",
    '@' => ".--.-.",
};

/// Default voice name to words-per-minute mapping.
///
/// Keys are lowercase; the OpenAI voice names are reused so that existing
/// clients can pick a keying speed without knowing about Morse at all.
pub static DEFAULT_VOICE_WPM: phf::Map<&'static str, u32> = phf_map! {
    "alloy" => 15,
    "echo" => 20,
    "fable" => 25,
    "onyx" => 30,
    "nova" => 12,
    "shimmer" => 18,
    "slowpoke" => 8,
    "speedy" => 35,
};

/// Look up the Morse pattern for a character, ignoring ASCII case.
#[inline]
pub fn lookup(c: char) -> Option<&'static str> {
    MORSE_TABLE.get(&c.to_ascii_uppercase()).copied()
}

/// Iterate the symbols of a table pattern.
pub fn symbols(pattern: &'static str) -> impl Iterator<Item = Symbol> {
    pattern.bytes().filter_map(|b| match b {
        b'.' => Some(Symbol::Dot),
        b'-' => Some(Symbol::Dash),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(c: char) -> &'static str {
        lookup(c).unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup('a'), lookup('A'));
        assert_eq!(lookup('z'), lookup('Z'));
        assert_eq!(pattern('s'), "...");
    }

    #[test]
    fn test_known_patterns() {
        assert_eq!(pattern('S'), "...");
        assert_eq!(pattern('O'), "---");
        assert_eq!(pattern('0'), "-----");
        assert_eq!(pattern('?'), "..--..");
        assert_eq!(pattern('$'), "...-..-");
        assert_eq!(pattern('@'), ".--.-.");
    }

    #[test]
    fn test_full_coverage() {
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(lookup(c).is_some(), "missing pattern for {c}");
        }
        assert_eq!(MORSE_TABLE.len(), 26 + 10 + 18);
    }

    #[test]
    fn test_symbols_iterator() {
        let k: Vec<Symbol> = symbols(pattern('K')).collect();
        assert_eq!(k, vec![Symbol::Dash, Symbol::Dot, Symbol::Dash]);
    }

    #[test]
    fn test_every_pattern_is_well_formed() {
        for (c, p) in MORSE_TABLE.entries() {
            assert!(!p.is_empty(), "empty pattern for {c}");
            assert!(p.bytes().all(|b| b == b'.' || b == b'-'), "bad pattern for {c}");
            assert_eq!(symbols(*p).count(), p.len());
        }
    }

    #[test]
    fn test_unsupported_characters() {
        assert!(lookup('#').is_none());
        assert!(lookup('é').is_none());
        assert!(lookup(' ').is_none());
    }

    #[test]
    fn test_default_voices() {
        assert_eq!(DEFAULT_VOICE_WPM.get("echo"), Some(&20));
        assert_eq!(DEFAULT_VOICE_WPM.get("speedy"), Some(&35));
        assert!(DEFAULT_VOICE_WPM.get("ECHO").is_none());
        assert!(DEFAULT_VOICE_WPM.values().all(|&wpm| wpm > 0));
    }
}

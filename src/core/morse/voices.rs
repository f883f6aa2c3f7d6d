use std::collections::BTreeMap;

use super::table::DEFAULT_VOICE_WPM;

/// Voice name to words-per-minute table used to resolve request speed.
///
/// Names are stored lowercase and matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceTable {
    voices: BTreeMap<String, u32>,
}

/// Outcome of resolving the keying speed for a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWpm {
    pub wpm: f64,
    /// True when the voice was found in the table and `speed` was ignored
    pub voice_mapped: bool,
}

impl Default for VoiceTable {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_VOICE_WPM
                .entries()
                .map(|(name, wpm)| (name.to_string(), *wpm)),
        )
    }
}

impl VoiceTable {
    /// Build a table from arbitrary `(name, wpm)` pairs. Later entries win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let voices = entries
            .into_iter()
            .map(|(name, wpm)| (name.trim().to_lowercase(), wpm))
            .collect();
        Self { voices }
    }

    /// Look up the mapped WPM for a voice name.
    pub fn get(&self, voice: &str) -> Option<u32> {
        self.voices.get(&voice.trim().to_lowercase()).copied()
    }

    /// All voices, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.voices.iter().map(|(name, wpm)| (name.as_str(), *wpm))
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Resolve the effective WPM for a request.
    ///
    /// A mapped voice wins outright. Otherwise the result is `base_wpm * speed`,
    /// falling back to `base_wpm` if that product is not a usable speed.
    pub fn resolve(&self, voice: &str, speed: f32, base_wpm: f64) -> ResolvedWpm {
        if let Some(wpm) = self.get(voice) {
            return ResolvedWpm {
                wpm: f64::from(wpm),
                voice_mapped: true,
            };
        }

        let wpm = base_wpm * f64::from(speed);
        let wpm = if wpm.is_finite() && wpm > 0.0 {
            wpm
        } else {
            tracing::warn!(
                voice,
                speed,
                base_wpm,
                "Computed WPM is not positive, falling back to base WPM"
            );
            base_wpm
        };

        ResolvedWpm {
            wpm,
            voice_mapped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = VoiceTable::default();
        assert_eq!(table.len(), DEFAULT_VOICE_WPM.len());
        assert_eq!(table.get("echo"), Some(20));
        assert_eq!(table.get("ECHO"), Some(20));
        assert_eq!(table.get(" Nova "), Some(12));
        assert_eq!(table.get("unknown_voice"), None);
    }

    #[test]
    fn test_iter_sorted() {
        let table = VoiceTable::default();
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"alloy"));
    }

    #[test]
    fn test_mapped_voice_ignores_speed() {
        let table = VoiceTable::default();
        for speed in [0.25, 1.0, 2.0, 4.0] {
            let resolved = table.resolve("echo", speed, 15.0);
            assert_eq!(resolved.wpm, 20.0);
            assert!(resolved.voice_mapped);
        }
    }

    #[test]
    fn test_unmapped_voice_uses_speed() {
        let table = VoiceTable::default();
        let resolved = table.resolve("unknown_voice", 2.0, 15.0);
        assert_eq!(resolved.wpm, 30.0);
        assert!(!resolved.voice_mapped);

        let resolved = table.resolve("unknown_voice", 0.5, 20.0);
        assert_eq!(resolved.wpm, 10.0);
    }

    #[test]
    fn test_non_positive_wpm_falls_back() {
        let table = VoiceTable::default();
        assert_eq!(table.resolve("unknown_voice", 0.0, 20.0).wpm, 20.0);
        assert_eq!(table.resolve("unknown_voice", -1.0, 20.0).wpm, 20.0);
        assert_eq!(table.resolve("unknown_voice", f32::NAN, 20.0).wpm, 20.0);
    }

    #[test]
    fn test_overrides() {
        let table = VoiceTable::from_entries(
            VoiceTable::default()
                .iter()
                .map(|(name, wpm)| (name.to_string(), wpm))
                .chain([("Echo".to_string(), 22), ("qrq".to_string(), 40)]),
        );
        assert_eq!(table.get("echo"), Some(22));
        assert_eq!(table.get("qrq"), Some(40));
        assert_eq!(table.get("alloy"), Some(15));
    }
}

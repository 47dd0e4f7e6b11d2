//! Host locale detection.
//!
//! Follows the POSIX lookup order for time formatting: `LC_ALL`, then
//! `LC_TIME`, then `LANG`. Empty variables are skipped.

use dynclock_domain::{HourCycle, LocaleTag, TimeFormat};

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// The locale of the host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLocale {
    tag: LocaleTag,
    source: Option<&'static str>,
}

impl HostLocale {
    /// Detects the locale from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    /// Detects the locale using `lookup` to read environment variables.
    ///
    /// A missing or unparsable locale falls back to `C`.
    #[must_use]
    pub fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        for key in LOCALE_VARS {
            let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            return match LocaleTag::parse(&value) {
                Ok(tag) => Self {
                    tag,
                    source: Some(key),
                },
                Err(err) => {
                    tracing::warn!(variable = key, error = %err, "ignoring host locale");
                    Self::posix()
                }
            };
        }
        Self::posix()
    }

    fn posix() -> Self {
        Self {
            tag: LocaleTag::posix(),
            source: None,
        }
    }

    /// The parsed locale.
    #[must_use]
    pub const fn tag(&self) -> &LocaleTag {
        &self.tag
    }

    /// The environment variable the locale came from, if any.
    #[must_use]
    pub const fn source(&self) -> Option<&'static str> {
        self.source
    }

    /// The hour cycle of this locale.
    #[must_use]
    pub fn hour_cycle(&self) -> HourCycle {
        self.tag.hour_cycle()
    }

    /// Time format matching this locale.
    #[must_use]
    pub fn time_format(&self) -> TimeFormat {
        TimeFormat::new(self.hour_cycle())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn lc_all_wins() {
        let locale = HostLocale::detect_with(env(&[
            ("LC_ALL", "en_US.UTF-8"),
            ("LC_TIME", "de_DE.UTF-8"),
            ("LANG", "fr_FR.UTF-8"),
        ]));
        assert_eq!(locale.source(), Some("LC_ALL"));
        assert_eq!(locale.hour_cycle(), HourCycle::H12);
    }

    #[test]
    fn empty_values_are_skipped() {
        let locale =
            HostLocale::detect_with(env(&[("LC_ALL", ""), ("LC_TIME", "de_DE.UTF-8")]));
        assert_eq!(locale.source(), Some("LC_TIME"));
        assert_eq!(locale.tag().language(), "de");
        assert_eq!(locale.hour_cycle(), HourCycle::H23);
    }

    #[test]
    fn lang_is_last_resort() {
        let locale = HostLocale::detect_with(env(&[("LANG", "en_AU.UTF-8")]));
        assert_eq!(locale.source(), Some("LANG"));
        assert_eq!(locale.time_format(), TimeFormat::new(HourCycle::H12));
    }

    #[test]
    fn falls_back_to_posix() {
        let locale = HostLocale::detect_with(env(&[]));
        assert_eq!(locale.source(), None);
        assert!(locale.tag().is_posix());
        assert_eq!(locale.hour_cycle(), HourCycle::H23);

        let locale = HostLocale::detect_with(env(&[("LANG", "12_34")]));
        assert!(locale.tag().is_posix());
    }
}

//! Locale tags and the hour cycle they imply.
//!
//! Only the part of a locale that affects the clock display is modelled:
//! language, region and an explicit `-u-hc-` hour cycle extension.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult};

/// Hour representation used when displaying a time.
///
/// Only two cycles are rendered. A locale asking for `h11` (`00`-`11`) is
/// folded into [`HourCycle::H12`] and one asking for `h24` (`01`-`24`) into
/// [`HourCycle::H23`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    /// `01`-`12` with an `AM`/`PM` suffix.
    H12,
    /// `00`-`23` (default).
    #[default]
    H23,
}

/// Regions whose conventional clock is the 12-hour one.
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "AE", "AU", "BD", "CA", "CO", "EG", "IN", "JO", "KR", "KW", "MX", "MY", "NZ", "PH", "PK",
    "QA", "SA", "TW", "US",
];

/// Languages that default to a 12-hour region when no region is given.
const TWELVE_HOUR_LANGUAGES: &[&str] = &["en", "ko"];

/// A parsed host locale.
///
/// Accepts POSIX names (`en_US.UTF-8@euro`), BCP 47 tags (`en-US`,
/// `de-DE-u-hc-h12`) and the `C` / `POSIX` locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    language: String,
    region: Option<String>,
    hour_cycle: Option<HourCycle>,
}

impl LocaleTag {
    /// The `C` locale.
    #[must_use]
    pub fn posix() -> Self {
        Self {
            language: "C".to_owned(),
            region: None,
            hour_cycle: None,
        }
    }

    /// Parses a locale name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocale`] if the name is empty or its
    /// language subtag is not 2-8 ASCII letters.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let invalid = || DomainError::InvalidLocale(raw.to_owned());

        // POSIX modifier and codeset carry nothing time related.
        let name = trimmed.split('@').next().unwrap_or_default();
        let name = name.split('.').next().unwrap_or_default();

        if name == "C" || name == "POSIX" {
            return Ok(Self::posix());
        }

        let mut subtags = name.split(['_', '-']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut region = None;
        let mut hour_cycle = None;
        while let Some(subtag) = subtags.next() {
            // A singleton opens the extensions; no region follows it.
            if subtag.len() == 1 {
                hour_cycle = parse_extensions(subtag, &mut subtags);
                break;
            }
            if region.is_none() && is_region(subtag) {
                region = Some(subtag.to_ascii_uppercase());
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
            hour_cycle,
        })
    }

    /// Language subtag, lowercase (`C` for the POSIX locale).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag, uppercase, if present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns true for the `C` / `POSIX` locale.
    #[must_use]
    pub fn is_posix(&self) -> bool {
        self.language == "C"
    }

    /// The hour cycle a clock should use under this locale.
    #[must_use]
    pub fn hour_cycle(&self) -> HourCycle {
        if let Some(cycle) = self.hour_cycle {
            return cycle;
        }
        let twelve_hour = match self.region.as_deref() {
            // French Canada keeps the 24-hour clock.
            Some("CA") if self.language == "fr" => false,
            Some(region) => TWELVE_HOUR_REGIONS.contains(&region),
            None => TWELVE_HOUR_LANGUAGES.contains(&self.language.as_str()),
        };
        if twelve_hour {
            HourCycle::H12
        } else {
            HourCycle::H23
        }
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::posix()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        match self.hour_cycle {
            Some(HourCycle::H12) => f.write_str("-u-hc-h12"),
            Some(HourCycle::H23) => f.write_str("-u-hc-h23"),
            None => Ok(()),
        }
    }
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

/// Reads `hc` out of the `u` extension, skipping other extensions and
/// everything after the `x` private-use singleton.
fn parse_extensions<'a>(
    mut singleton: &'a str,
    subtags: &mut impl Iterator<Item = &'a str>,
) -> Option<HourCycle> {
    let mut cycle = None;
    loop {
        if singleton.eq_ignore_ascii_case("x") {
            return cycle;
        }
        let unicode = singleton.eq_ignore_ascii_case("u");
        let mut next = None;
        while let Some(subtag) = subtags.next() {
            if subtag.len() == 1 {
                next = Some(subtag);
                break;
            }
            if unicode && subtag.eq_ignore_ascii_case("hc") {
                cycle = match subtags.next().map(str::to_ascii_lowercase).as_deref() {
                    Some("h11" | "h12") => Some(HourCycle::H12),
                    Some("h23" | "h24") => Some(HourCycle::H23),
                    _ => None,
                };
            }
        }
        match next {
            Some(s) => singleton = s,
            None => return cycle,
        }
    }
}

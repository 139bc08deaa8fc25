use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Languages the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Nl,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub lang: Lang,
    pub code: &'static str,
    /// Short label shown on the language switcher.
    pub label: &'static str,
    /// Native name, used as the switcher option's tooltip and accessible name.
    pub name: &'static str,
    pub rtl: bool,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        lang: Lang::En,
        code: "en",
        label: "EN",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        lang: Lang::Nl,
        code: "nl",
        label: "NL",
        name: "Nederlands",
        rtl: false,
    },
    LocaleMeta {
        lang: Lang::Ar,
        code: "ar",
        label: "ع",
        name: "العربية",
        rtl: true,
    },
];

/// Supported locales in switcher order.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported language code '{0}'")]
    Unsupported(String),
    #[error("no translations loaded for '{0}'")]
    MissingLocale(Lang),
}

impl Lang {
    pub const ALL: [Self; 3] = [Self::En, Self::Nl, Self::Ar];

    #[must_use]
    pub fn meta(self) -> &'static LocaleMeta {
        match self {
            Self::En => &LOCALE_META[0],
            Self::Nl => &LOCALE_META[1],
            Self::Ar => &LOCALE_META[2],
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        self.meta().code
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        LOCALE_META.iter().find(|m| m.code == code).map(|m| m.lang)
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        if self.meta().rtl {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

impl FromStr for Lang {
    type Err = LocaleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| LocaleError::Unsupported(code.to_string()))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

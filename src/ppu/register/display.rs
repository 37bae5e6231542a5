use enum_iterator::Sequence;
use modular_bitfield::prelude::*;
use strum_macros::EnumString;

/// Which layers to render when the display is turned on.
#[derive(PartialEq, Eq, Clone, Copy, Debug, EnumString, Sequence)]
#[strum(ascii_case_insensitive)]
pub enum Display {
    All,
    Background,
    Sprites,
}

impl Display {
    pub fn background_enabled(self) -> bool {
        matches!(self, Display::All | Display::Background)
    }

    pub fn sprites_enabled(self) -> bool {
        matches!(self, Display::All | Display::Sprites)
    }
}

/// Color emphasis bits, applied on top of every rendered color.
#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct Emphasis {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    #[skip]
    __: B5,
}

impl Emphasis {
    pub fn none() -> Emphasis {
        Emphasis::new()
    }
}

/// The console's video timing standard.
#[derive(PartialEq, Eq, Clone, Copy, Debug, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TimingStandard {
    Ntsc,
    Pal,
}

impl TimingStandard {
    pub fn frames_per_second(self) -> u64 {
        match self {
            TimingStandard::Ntsc => 60,
            TimingStandard::Pal => 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn display_layers() {
        assert!(Display::All.background_enabled() && Display::All.sprites_enabled());
        assert!(Display::Background.background_enabled() && !Display::Background.sprites_enabled());
        assert!(!Display::Sprites.background_enabled() && Display::Sprites.sprites_enabled());
    }

    #[test]
    fn timing_parses_any_case() {
        assert_eq!(TimingStandard::from_str("ntsc"), Ok(TimingStandard::Ntsc));
        assert_eq!(TimingStandard::from_str("PAL"), Ok(TimingStandard::Pal));
        assert!(TimingStandard::from_str("secam").is_err());
    }
}

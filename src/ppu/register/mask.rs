use log::info;
use modular_bitfield::prelude::*;

use crate::ppu::register::display::{Display, Emphasis};

/// Shadow of the PPU mask register.
#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct Mask {
    pub greyscale_enabled: bool,
    pub left_background_columns_enabled: bool,
    pub left_sprite_columns_enabled: bool,
    pub background_enabled: bool,
    pub sprites_enabled: bool,
    pub emphasize_red: bool,
    pub emphasize_green: bool,
    pub emphasize_blue: bool,
}

impl Mask {
    pub fn all_disabled() -> Mask {
        Mask::new()
    }

    /// Rendering as configured, with the leftmost eight pixels shown for both layers.
    pub fn with_full_screen(self, display: Display) -> Mask {
        self.with_left_sprite_columns_enabled(true)
            .with_left_background_columns_enabled(true)
            .with_display(display)
    }

    pub fn to_u8(self) -> u8 {
        self.into_bytes()[0]
    }

    pub fn rendering_enabled(self) -> bool {
        self.background_enabled() || self.sprites_enabled()
    }

    pub fn with_display(self, display: Display) -> Mask {
        self.with_background_enabled(display.background_enabled())
            .with_sprites_enabled(display.sprites_enabled())
    }

    pub fn with_rendering_disabled(self) -> Mask {
        self.with_background_enabled(false)
            .with_sprites_enabled(false)
    }

    pub fn with_emphasis(self, emphasis: Emphasis) -> Mask {
        self.with_emphasize_red(emphasis.red())
            .with_emphasize_green(emphasis.green())
            .with_emphasize_blue(emphasis.blue())
    }

    pub fn set(&mut self, new_mask: Mask) {
        let old_mask = *self;
        *self = new_mask;

        log_change(old_mask.emphasize_blue(), self.emphasize_blue(), "Blue emphasis");
        log_change(old_mask.emphasize_green(), self.emphasize_green(), "Green emphasis");
        log_change(old_mask.emphasize_red(), self.emphasize_red(), "Red emphasis");
        log_change(old_mask.sprites_enabled(), self.sprites_enabled(), "Sprites");
        log_change(old_mask.background_enabled(), self.background_enabled(), "Background");
        log_change(
            old_mask.left_sprite_columns_enabled(),
            self.left_sprite_columns_enabled(),
            "Left sprite columns",
        );
        log_change(
            old_mask.left_background_columns_enabled(),
            self.left_background_columns_enabled(),
            "Left background columns",
        );
        log_change(old_mask.greyscale_enabled(), self.greyscale_enabled(), "Greyscale");
    }
}

fn log_change(old: bool, new: bool, message_prefix: &str) {
    let message = match (old, new) {
        (false, true) => format!("\t{message_prefix} enabled."),
        (true, false) => format!("\t{message_prefix} disabled."),
        _ => return,
    };
    info!(target: "ppuflags", "{}", message);
}

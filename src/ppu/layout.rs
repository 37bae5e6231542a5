use const_panic::concat_assert;

use crate::driver::PpuDriver;
use crate::memory::ppu_address::PpuAddress;
use crate::memory::region::MemoryRegion;
use crate::ppu::constants::PADDING_SIZE;
use crate::ppu::name_table::name_table::NameTable;
use crate::ppu::palette::palette::Palette;
use crate::ppu::pattern_table::PatternTable;
use crate::ppu::pattern_table_side::PatternTableSide;
use crate::ppu::register::display::{Display, Emphasis, TimingStandard};

pub const NAME_TABLE_COUNT: usize = 4;
pub const REGION_COUNT: usize = 2 + 2 * NAME_TABLE_COUNT + 3;

/// The console's video memory as laid out at build time.
pub const LAYOUT: VideoMemoryLayout = VideoMemoryLayout::at(PpuAddress::ZERO);

const _: () = {
    let regions = LAYOUT.regions();
    let mut i = 1;
    while i < regions.len() {
        let (previous_name, previous) = regions[i - 1];
        let (name, region) = regions[i];
        concat_assert!(region.follows(previous), "\n", name, " must begin where ", previous_name, " ends");
        i += 1;
    }

    concat_assert!(LAYOUT.begin().to_u16() == 0x0000, "layout begins at ", LAYOUT.begin().to_u16());
    concat_assert!(LAYOUT.bg_palette().begin().to_u16() == 0x3F00, "palettes begin at ", LAYOUT.bg_palette().begin().to_u16());
    concat_assert!(LAYOUT.end().to_u16() == 0x3F20, "layout ends at ", LAYOUT.end().to_u16());
};

/// Every region of video memory, packed edge to edge: the pattern table, four
/// name tables (each followed by its attribute table), the mirrored gap, then
/// the background and sprite palettes.
///
/// The layout only computes addresses. Writes go through a
/// [`VideoMemory`](crate::memory::vram::VideoMemory) and must be timed by the
/// caller to land while rendering is off or inside the frame-sync window.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct VideoMemoryLayout {
    pattern_table: PatternTable,
    name_tables: [NameTable; NAME_TABLE_COUNT],
    padding: MemoryRegion,
    bg_palette: Palette,
    sprite_palette: Palette,
}

impl VideoMemoryLayout {
    pub const fn at(start: PpuAddress) -> VideoMemoryLayout {
        let pattern_table = PatternTable::at(start);

        let mut next = pattern_table.end();
        let mut name_tables = [NameTable::at(next); NAME_TABLE_COUNT];
        let mut i = 0;
        while i < NAME_TABLE_COUNT {
            name_tables[i] = NameTable::at(next);
            next = name_tables[i].attribute_table().end();
            i += 1;
        }

        let padding = MemoryRegion::new(next, PADDING_SIZE);
        let bg_palette = Palette::at(padding.end());
        let sprite_palette = Palette::at(bg_palette.end());

        VideoMemoryLayout { pattern_table, name_tables, padding, bg_palette, sprite_palette }
    }

    pub const fn pattern_table(&self) -> &PatternTable {
        &self.pattern_table
    }

    pub const fn name_tables(&self) -> &[NameTable; NAME_TABLE_COUNT] {
        &self.name_tables
    }

    /// Panics if `index` isn't below 4.
    pub const fn name_table(&self, index: usize) -> &NameTable {
        &self.name_tables[index]
    }

    pub const fn padding(&self) -> MemoryRegion {
        self.padding
    }

    pub const fn bg_palette(&self) -> &Palette {
        &self.bg_palette
    }

    pub const fn sprite_palette(&self) -> &Palette {
        &self.sprite_palette
    }

    pub const fn begin(&self) -> PpuAddress {
        self.pattern_table.begin()
    }

    pub const fn end(&self) -> PpuAddress {
        self.sprite_palette.end()
    }

    /// Every region with a display name, in address order.
    pub const fn regions(&self) -> [(&'static str, MemoryRegion); REGION_COUNT] {
        const NAME_TABLE_NAMES: [&str; NAME_TABLE_COUNT] =
            ["Name table 0", "Name table 1", "Name table 2", "Name table 3"];
        const ATTRIBUTE_TABLE_NAMES: [&str; NAME_TABLE_COUNT] =
            ["Attribute table 0", "Attribute table 1", "Attribute table 2", "Attribute table 3"];

        let mut regions = [("", self.padding); REGION_COUNT];
        regions[0] = ("Pattern table left", self.pattern_table.side(PatternTableSide::Left));
        regions[1] = ("Pattern table right", self.pattern_table.side(PatternTableSide::Right));

        let mut i = 0;
        while i < NAME_TABLE_COUNT {
            regions[2 + 2 * i] = (NAME_TABLE_NAMES[i], self.name_tables[i].region());
            regions[3 + 2 * i] = (ATTRIBUTE_TABLE_NAMES[i], self.name_tables[i].attribute_table().region());
            i += 1;
        }

        regions[REGION_COUNT - 3] = ("Padding", self.padding);
        regions[REGION_COUNT - 2] = ("Background palette", self.bg_palette.region());
        regions[REGION_COUNT - 1] = ("Sprite palette", self.sprite_palette.region());
        regions
    }

    pub fn on<D: PpuDriver>(&self, driver: &mut D, display: Display) {
        driver.ppu_on(display);
    }

    pub fn off<D: PpuDriver>(&self, driver: &mut D) {
        driver.ppu_off();
    }

    pub fn emphasize<D: PpuDriver>(&self, driver: &mut D, emphasis: Emphasis) {
        driver.set_color_emphasis(emphasis);
    }

    pub fn wait_nmi<D: PpuDriver>(&self, driver: &mut D) {
        driver.wait_nmi();
    }

    pub fn timing_standard<D: PpuDriver>(&self, driver: &D) -> TimingStandard {
        driver.timing_standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::simulated::SimulatedDriver;

    #[test]
    fn fixed_addresses() {
        assert_eq!(LAYOUT.pattern_table().side(PatternTableSide::Right).begin(), PpuAddress::new(0x1000));
        assert_eq!(LAYOUT.name_table(0).begin(), PpuAddress::new(0x2000));
        assert_eq!(LAYOUT.name_table(0).attribute_table().begin(), PpuAddress::new(0x23C0));
        assert_eq!(LAYOUT.name_table(1).begin(), PpuAddress::new(0x2400));
        assert_eq!(LAYOUT.name_table(3).attribute_table().end(), PpuAddress::new(0x3000));
        assert_eq!(LAYOUT.padding().begin(), PpuAddress::new(0x3000));
        assert_eq!(LAYOUT.bg_palette().begin(), PpuAddress::new(0x3F00));
        assert_eq!(LAYOUT.sprite_palette().begin(), PpuAddress::new(0x3F10));
        assert_eq!(LAYOUT.end(), PpuAddress::new(0x3F20));
    }

    #[test]
    fn relocated_layout_keeps_spacing() {
        let layout = VideoMemoryLayout::at(PpuAddress::new(0x0010));
        assert_eq!(layout.name_table(2).begin(), PpuAddress::new(0x2810));
        assert_eq!(layout.end(), PpuAddress::new(0x3F30));
    }

    #[test]
    fn region_sizes_sum_to_layout() {
        let total: u32 = LAYOUT.regions().iter().map(|(_, region)| u32::from(region.size())).sum();
        assert_eq!(total, 0x3F20);
    }

    #[test]
    fn display_pass_throughs_reach_driver() {
        let mut driver = SimulatedDriver::new(TimingStandard::Pal);
        LAYOUT.on(&mut driver, Display::Sprites);
        assert!(driver.mask().sprites_enabled());
        LAYOUT.emphasize(&mut driver, Emphasis::none().with_red(true));
        assert!(driver.mask().emphasize_red());
        LAYOUT.off(&mut driver);
        assert!(!driver.mask().rendering_enabled());
        LAYOUT.wait_nmi(&mut driver);
        assert_eq!(driver.frame_count(), 1);
        assert_eq!(LAYOUT.timing_standard(&driver), TimingStandard::Pal);
    }
}

pub const KIBIBYTE: u32 = 0x400;

pub mod constants;
pub mod layout;
pub mod name_table;
pub mod palette;
pub mod pattern_table;
pub mod pattern_table_side;
pub mod register;
pub mod tile;

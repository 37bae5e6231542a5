pub mod attribute_table;
pub mod name_table;

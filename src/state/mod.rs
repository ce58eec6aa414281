pub mod field_catalog;

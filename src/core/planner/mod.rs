//! Reading planner input files

pub mod csv_parser;
pub mod loader;

pub use csv_parser::{parse_catalog_csv, parse_catalog_str};
pub use loader::{load_catalog, load_offerings, load_plan, load_requirements};

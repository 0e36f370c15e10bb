//! Blade and airfoil file parsers.

mod blade;
mod profile;

pub use blade::{main_profile_name, parse_blade_file, BladeFileParser, BladeLayout, ParsedBlade};
pub use profile::{parse_profile, parse_profile_file, ProfileCache};

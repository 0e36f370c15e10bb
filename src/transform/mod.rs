//! Section calibration, merging, simplification and placement.

mod calibrate;
mod merge;
mod place;
mod reduce;
mod shell;

pub use calibrate::{
    apply_calibration, calibrate_sections, deduce_offset, nearest_index, zero_hub, Calibration,
};
pub use merge::{merge_sections, merge_sections_with, RetainedSections};
pub use place::{
    guide_point, guide_rail, pitch_axis_seed, section_outline, sweep_axis, trailing_edge_seed,
    SectionFrame,
};
pub use reduce::{distance_sq_to_line, simplify};
pub use shell::{infill_rails, inner_outline, leftmost_point, rightmost_point, InfillRails};

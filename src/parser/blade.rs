//! QBlade blade definition parser.
//!
//! Two layouts exist in the wild. The v0.963 export has a three-line preamble
//! followed by `POS CHORD TWIST OFFSET P_AXIS` rows. QBlade CE v2.x wraps the
//! table in a "Blade Data" block with a `POS_[m]` header line and adds an
//! X offset column plus an optional per-station polar file name.

use crate::config::{LEGACY_HEADER_LINES, M_TO_CM, V2_MARKER, V2_TABLE_HEADER};
use crate::error::{ImportError, Result};
use crate::model::{is_circular_name, BladeFormat, BladeSection, ProfileTag};
use std::path::Path;
use tracing::{debug, info};

/// Minimum number of whitespace-separated tokens in a data row.
const MIN_ROW_TOKENS: usize = 5;

/// Result of the classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BladeLayout {
    pub format: BladeFormat,
    /// Index of the first line of the data table.
    pub data_start: usize,
}

/// Sections read from a blade file plus row-level diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParsedBlade {
    pub format: BladeFormat,
    pub sections: Vec<BladeSection>,
    /// Data rows dropped for too few tokens or unreadable numbers.
    pub skipped_rows: usize,
    /// Circular placeholder stations removed by the main-profile filter.
    pub discarded_placeholders: usize,
    /// Most frequent non-circular profile name (v2 only).
    pub main_profile: Option<String>,
}

type RowReader = fn(&[&str]) -> Option<BladeSection>;

/// Blade file parser.
pub struct BladeFileParser {
    /// File content as lines.
    lines: Vec<String>,
}

impl BladeFileParser {
    /// Create a new parser from file content.
    pub fn new(content: &str) -> Self {
        let lines = content.lines().map(|s| s.to_string()).collect();
        Self { lines }
    }

    /// Decide which layout the file uses and where its table starts.
    pub fn classify(&self) -> Result<BladeLayout> {
        let Some(marker) = self.lines.iter().position(|l| l.contains(V2_MARKER)) else {
            return Ok(BladeLayout {
                format: BladeFormat::Legacy,
                data_start: LEGACY_HEADER_LINES,
            });
        };

        let header = self.lines[marker + 1..]
            .iter()
            .position(|l| l.contains(V2_TABLE_HEADER))
            .ok_or_else(|| ImportError::Format {
                message: format!(
                    "'{}' block at line {} has no '{}' table header",
                    V2_MARKER,
                    marker + 1,
                    V2_TABLE_HEADER
                ),
            })?;

        Ok(BladeLayout {
            format: BladeFormat::V2,
            data_start: marker + 1 + header + 1,
        })
    }

    /// Parse all sections from the file.
    pub fn parse(&self) -> Result<ParsedBlade> {
        let layout = self.classify()?;
        debug!(
            "Blade file format: {} (data starts at line {})",
            layout.format,
            layout.data_start + 1
        );

        let read_row: RowReader = match layout.format {
            BladeFormat::Legacy => read_legacy_row,
            BladeFormat::V2 => read_v2_row,
        };

        let mut parsed = ParsedBlade {
            format: layout.format,
            ..Default::default()
        };

        for (idx, line) in self.lines.iter().enumerate().skip(layout.data_start) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('-') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < MIN_ROW_TOKENS {
                debug!("Skipping line {}: {} token(s)", idx + 1, tokens.len());
                parsed.skipped_rows += 1;
                continue;
            }

            match read_row(&tokens) {
                Some(section) => parsed.sections.push(section),
                None => {
                    debug!("Skipping line {}: unreadable row", idx + 1);
                    parsed.skipped_rows += 1;
                }
            }
        }

        if layout.format == BladeFormat::V2 {
            parsed.main_profile = main_profile_name(&parsed.sections);
            if let Some(main) = &parsed.main_profile {
                let before = parsed.sections.len();
                parsed.sections.retain(|s| keep_for_main_profile(s, main));
                parsed.discarded_placeholders = before - parsed.sections.len();
                info!(
                    "Main profile: {} ({} placeholder station(s) dropped)",
                    main, parsed.discarded_placeholders
                );
            }
        }

        if parsed.sections.len() < 2 {
            return Err(ImportError::TooFewSections {
                found: parsed.sections.len(),
            });
        }

        Ok(parsed)
    }
}

/// `POS CHORD TWIST OFFSET P_AXIS`, lengths in meters.
fn read_legacy_row(tokens: &[&str]) -> Option<BladeSection> {
    let pos = parse_number(tokens.first()?)?;
    let chord = parse_chord(tokens.get(1)?)?;
    let twist = parse_number(tokens.get(2)?)?;
    let offset = parse_number(tokens.get(3)?)?;
    let thread = parse_number(tokens.get(4)?)?;

    Some(BladeSection::new(
        pos * M_TO_CM,
        chord * M_TO_CM,
        twist,
        offset * M_TO_CM,
        thread,
    ))
}

/// `POS CHORD TWIST OFFSET_X OFFSET_Y P_AXIS [POLAR_FILE]`, lengths in meters.
/// OFFSET_X is not used.
fn read_v2_row(tokens: &[&str]) -> Option<BladeSection> {
    let pos = parse_number(tokens.first()?)?;
    let chord = parse_chord(tokens.get(1)?)?;
    let twist = parse_number(tokens.get(2)?)?;
    let offset_y = parse_number(tokens.get(4)?)?;
    let thread = parse_number(tokens.get(5)?)?;

    let profile = tokens
        .get(6)
        .map(|name| ProfileTag::Named(name.to_string()))
        .unwrap_or_default();

    Some(
        BladeSection::new(
            pos * M_TO_CM,
            chord * M_TO_CM,
            twist,
            offset_y * M_TO_CM,
            thread,
        )
        .with_profile(profile),
    )
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse().ok()
}

/// A chord must be positive; anything else makes the row unreadable.
fn parse_chord(token: &str) -> Option<f64> {
    parse_number(token).filter(|chord| *chord > 0.0)
}

/// Most frequent non-circular profile name. Ties go to the name seen first.
pub fn main_profile_name(sections: &[BladeSection]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for name in sections.iter().filter_map(|s| s.profile.name()) {
        if is_circular_name(name) {
            continue;
        }
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Keep untagged stations, the main profile, and any non-placeholder airfoil.
fn keep_for_main_profile(section: &BladeSection, main: &str) -> bool {
    match &section.profile {
        ProfileTag::Untagged => true,
        ProfileTag::Named(name) => name == main || !is_circular_name(name),
    }
}

/// Parse a blade file from a path.
pub fn parse_blade_file(path: &Path) -> Result<ParsedBlade> {
    if !path.exists() {
        return Err(ImportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(ImportError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    BladeFileParser::new(&content).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEGACY: &str = "\
QBlade Blade File
   NAME: test
POS [m] CHORD [m] TWIST [deg] OFFSET [m] P_AXIS [-]
0.0 0.5 10.0 0.0 0.25
1.0 0.3 2.0 0.0 0.25
";

    fn v2_file(rows: &[&str]) -> String {
        let mut content = String::from(
            "----------------------------------------QBlade v2.0----------\n\
             Blade Data\n\
             ----------------------------------------\n\
             POS_[m] CHORD_[m] TWIST_[deg] OFFSET_X_[m] OFFSET_Y_[m] P_AXIS_[-] POLAR_FILE\n",
        );
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        content
    }

    // ==================== classify tests ====================

    #[test]
    fn test_classify_legacy() {
        let layout = BladeFileParser::new(LEGACY).classify().unwrap();
        assert_eq!(layout.format, BladeFormat::Legacy);
        assert_eq!(layout.data_start, 3);
    }

    #[test]
    fn test_classify_v2_data_start() {
        let content = v2_file(&["0.0 0.5 10.0 0.0 0.0 0.25 NACA4412"]);
        let layout = BladeFileParser::new(&content).classify().unwrap();
        assert_eq!(layout.format, BladeFormat::V2);
        assert_eq!(layout.data_start, 4);
    }

    #[test]
    fn test_classify_blade_data_wins_over_legacy_shape() {
        // Three preamble lines and five-column rows, but the marker is present
        let content = "\
header one
header two
Blade Data POS_[m]
0.0 0.5 10.0 0.0 0.25
1.0 0.3 2.0 0.0 0.25
POS_[m] CHORD_[m]
";
        let layout = BladeFileParser::new(content).classify().unwrap();
        assert_eq!(layout.format, BladeFormat::V2);
        assert_eq!(layout.data_start, 6);
    }

    #[test]
    fn test_classify_v2_without_table_header() {
        let content = "Blade Data\n0.0 0.5 10.0 0.0 0.0 0.25\n";
        let err = BladeFileParser::new(content).classify().unwrap_err();
        assert!(matches!(err, ImportError::Format { .. }));
    }

    // ==================== legacy tests ====================

    #[test]
    fn test_parse_legacy_rows() {
        let parsed = BladeFileParser::new(LEGACY).parse().unwrap();
        assert_eq!(parsed.format, BladeFormat::Legacy);
        assert_eq!(parsed.sections.len(), 2);

        let s0 = &parsed.sections[0];
        let s1 = &parsed.sections[1];
        assert!((s0.position_along_span - 0.0).abs() < 1e-9);
        assert!((s1.position_along_span - 100.0).abs() < 1e-9);
        assert!((s0.chord_length - 50.0).abs() < 1e-9);
        assert!((s1.chord_length - 30.0).abs() < 1e-9);
        assert!((s0.twist_angle - 10.0).abs() < 1e-9);
        assert!((s1.thread_axis_offset - 0.25).abs() < 1e-9);
        assert_eq!(s0.profile, ProfileTag::Untagged);
        assert_eq!(parsed.main_profile, None);
    }

    #[test]
    fn test_legacy_offset_converted_to_cm() {
        let content = "a\nb\nc\n0.0 0.5 10.0 0.02 0.25\n1.0 0.3 2.0 0.01 0.3\n";
        let parsed = BladeFileParser::new(content).parse().unwrap();
        assert!((parsed.sections[0].pitch_axis_offset - 2.0).abs() < 1e-9);
        assert!((parsed.sections[1].pitch_axis_offset - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_and_bad_rows_are_skipped() {
        let content = "\
a
b
c
0.0 0.5 10.0 0.0 0.25

----------
0.5 0.4 5.0
0.7 abc 4.0 0.0 0.25
1.0 0.3 2.0 0.0 0.25
";
        let parsed = BladeFileParser::new(content).parse().unwrap();
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.skipped_rows, 2);
    }

    #[test]
    fn test_non_positive_chord_rows_are_skipped() {
        let content = "\
a
b
c
0.0 0.5 10.0 0.0 0.25
0.3 0.0 8.0 0.0 0.25
0.6 -0.2 6.0 0.0 0.25
0.8 NaN 4.0 0.0 0.25
1.0 0.3 2.0 0.0 0.25
";
        let parsed = BladeFileParser::new(content).parse().unwrap();
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.skipped_rows, 3);
        assert!(parsed.sections.iter().all(|s| s.chord_length > 0.0));

        let content = v2_file(&[
            "0.0 0.5 10.0 0.0 0.0 0.25 NACA4412",
            "0.5 -0.4 5.0 0.0 0.0 0.25 NACA4412",
            "1.0 0.3 2.0 0.0 0.0 0.25 NACA4412",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.skipped_rows, 1);
    }

    #[test]
    fn test_single_row_is_too_few() {
        let content = "a\nb\nc\n0.0 0.5 10.0 0.0 0.25\n";
        let err = BladeFileParser::new(content).parse().unwrap_err();
        assert!(matches!(err, ImportError::TooFewSections { found: 1 }));
    }

    #[test]
    fn test_header_only_is_too_few() {
        let err = BladeFileParser::new("a\nb\nc\n").parse().unwrap_err();
        assert!(matches!(err, ImportError::TooFewSections { found: 0 }));
    }

    // ==================== v2 tests ====================

    #[test]
    fn test_parse_v2_uses_offset_y() {
        let content = v2_file(&[
            "0.0 0.5 10.0 9.99 0.01 0.25 NACA4412",
            "1.0 0.3 2.0 9.99 0.02 0.30 NACA4412",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        assert_eq!(parsed.format, BladeFormat::V2);
        assert!((parsed.sections[0].pitch_axis_offset - 1.0).abs() < 1e-9);
        assert!((parsed.sections[1].pitch_axis_offset - 2.0).abs() < 1e-9);
        assert!((parsed.sections[1].thread_axis_offset - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_v2_offset_x_is_not_read() {
        let content = v2_file(&[
            "0.0 0.5 10.0 n/a 0.0 0.25 NACA4412",
            "1.0 0.3 2.0 n/a 0.0 0.25 NACA4412",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        assert_eq!(parsed.sections.len(), 2);
    }

    #[test]
    fn test_v2_row_without_axis_column_is_skipped() {
        let content = v2_file(&[
            "0.0 0.5 10.0 0.0 0.0 0.25 NACA4412",
            "0.5 0.4 5.0 0.0 0.0",
            "1.0 0.3 2.0 0.0 0.0 0.25 NACA4412",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.skipped_rows, 1);
    }

    #[test]
    fn test_v2_main_profile_drops_circular_station() {
        let content = v2_file(&[
            "0.0 0.6 12.0 0.0 0.0 0.50 Circular1",
            "0.5 0.5 10.0 0.0 0.0 0.25 NACA4412",
            "1.0 0.4 6.0 0.0 0.0 0.25 NACA4412",
            "1.5 0.35 3.0 0.0 0.0 0.25 NACA4412",
            "2.0 0.3 1.0 0.0 0.0 0.25 NACA4412",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        assert_eq!(parsed.main_profile.as_deref(), Some("NACA4412"));
        assert_eq!(parsed.sections.len(), 4);
        assert_eq!(parsed.discarded_placeholders, 1);
        assert!(parsed.sections.iter().all(|s| s.uses_profile("NACA4412")));
        assert!((parsed.sections[0].position_along_span - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_v2_keeps_secondary_airfoils_and_untagged_rows() {
        let content = v2_file(&[
            "0.0 0.6 12.0 0.0 0.0 0.50 circular_root",
            "0.5 0.5 10.0 0.0 0.0 0.25 DU91",
            "1.0 0.4 6.0 0.0 0.0 0.25 NACA4412",
            "1.5 0.35 3.0 0.0 0.0 0.25",
            "2.0 0.3 1.0 0.0 0.0 0.25 NACA4412",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        assert_eq!(parsed.main_profile.as_deref(), Some("NACA4412"));
        assert_eq!(parsed.sections.len(), 4);
        assert!(parsed.sections[0].uses_profile("DU91"));
        assert_eq!(parsed.sections[2].profile, ProfileTag::Untagged);
    }

    #[test]
    fn test_v2_all_circular_keeps_everything() {
        let content = v2_file(&[
            "0.0 0.6 12.0 0.0 0.0 0.50 Circular1",
            "1.0 0.6 12.0 0.0 0.0 0.50 Circular2",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        assert_eq!(parsed.main_profile, None);
        assert_eq!(parsed.sections.len(), 2);
    }

    #[test]
    fn test_v2_source_order_preserved() {
        let content = v2_file(&[
            "0.0 0.5 10.0 0.0 0.0 0.25 A",
            "0.4 0.45 8.0 0.0 0.0 0.25 A",
            "1.2 0.3 2.0 0.0 0.0 0.25 A",
        ]);
        let parsed = BladeFileParser::new(&content).parse().unwrap();
        let positions: Vec<f64> = parsed
            .sections
            .iter()
            .map(|s| s.position_along_span.round())
            .collect();
        assert_eq!(positions, vec![0.0, 40.0, 120.0]);
    }

    // ==================== main_profile_name tests ====================

    #[test]
    fn test_main_profile_tie_goes_to_first_seen() {
        let tagged = |name: &str| {
            BladeSection::new(0.0, 1.0, 0.0, 0.0, 0.25)
                .with_profile(ProfileTag::Named(name.to_string()))
        };
        let sections = vec![tagged("B"), tagged("A"), tagged("A"), tagged("B")];
        assert_eq!(main_profile_name(&sections).as_deref(), Some("B"));
    }

    #[test]
    fn test_main_profile_none_for_untagged() {
        let sections = vec![BladeSection::new(0.0, 1.0, 0.0, 0.0, 0.25)];
        assert_eq!(main_profile_name(&sections), None);
    }
}

//! Formatting helpers for long-format fields

use chrono::{DateTime, Local};

/// Unit suffixes for human-readable sizes; scaling stops at the last one.
pub const SIZE_UNITS: [char; 6] = ['B', 'K', 'M', 'G', 'T', 'P'];

/// Width of the right-justified raw byte count.
pub const PLAIN_SIZE_WIDTH: usize = 8;

/// Width of the right-justified human-readable size.
pub const HUMAN_SIZE_WIDTH: usize = 5;

const FILE_TYPE_MASK: u32 = 0o170000;

const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Glyph for the file type bits of a mode.
pub fn type_glyph(mode: u32) -> char {
    match mode & FILE_TYPE_MASK {
        0o040000 => 'd',
        0o120000 => 'l',
        0o020000 => 'c',
        0o060000 => 'b',
        0o010000 => 'p',
        0o140000 => 's',
        _ => '-',
    }
}

/// Render mode bits as a ten character string such as `drwxr-xr-x`.
pub fn format_permissions(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_glyph(mode));
    for (bit, glyph) in PERMISSION_BITS {
        out.push(if mode & bit != 0 { glyph } else { '-' });
    }
    out
}

/// Divide by 1024 while the value exceeds 1024, up to the `P` unit.
///
/// Returns the scaled value and the index into [`SIZE_UNITS`].
pub fn scale_size(bytes: u64) -> (f64, usize) {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    (value, unit)
}

/// Human-readable size: `10B`, `2.0K`, `1.5M`.
///
/// Byte counts are printed as integers; scaled values always carry one decimal
/// place, even when they are whole (`2048` is `2.0K`, not `2K`), as `ls -h` does.
pub fn format_size_human(bytes: u64) -> String {
    let (value, unit) = scale_size(bytes);
    if unit == 0 {
        format!("{}{}", bytes, SIZE_UNITS[0])
    } else {
        format!("{:.1}{}", value, SIZE_UNITS[unit])
    }
}

/// Size column for the long format, right-justified.
pub fn format_size_field(bytes: u64, human: bool) -> String {
    if human {
        format!("{:>width$}", format_size_human(bytes), width = HUMAN_SIZE_WIDTH)
    } else {
        format!("{:>width$}", bytes, width = PLAIN_SIZE_WIDTH)
    }
}

/// Month, day and time of day, e.g. `Oct 16 23:45`. Always 12 characters.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%b %e %H:%M").to_string()
}

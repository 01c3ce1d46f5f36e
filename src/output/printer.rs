//! Entry printer shared by both render strategies
//!
//! Writes to any `WriteColor` sink so the same code drives the terminal and
//! in-memory buffers.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::listing::{Entry, RenderConfig};

use super::format::{format_size_field, format_timestamp};
use super::owners::OwnerNames;

const DEPTH_MARKER: &str = "|   ";
const BRANCH_MARKER: &str = "|-> ";

/// Indentation for a tree line at `depth`: one marker per level, then the branch.
pub fn tree_prefix(depth: usize) -> String {
    format!("{}{}", DEPTH_MARKER.repeat(depth), BRANCH_MARKER)
}

/// Writes headers, entry lines and block separators.
pub struct EntryPrinter<W> {
    out: W,
    names: OwnerNames,
    show_details: bool,
    human_readable: bool,
    inline: bool,
}

impl<W: WriteColor> EntryPrinter<W> {
    pub fn new(out: W, config: &RenderConfig) -> Self {
        Self {
            out,
            names: OwnerNames::new(),
            show_details: config.show_details,
            human_readable: config.human_readable_sizes,
            inline: !config.show_details && !config.indents_tree(),
        }
    }

    /// Whether entries share one line (`a.txt sub `) rather than one line each.
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn header(&mut self, dir: &Path) -> io::Result<()> {
        writeln!(self.out, "{}:", dir.display())
    }

    /// Print one entry, prefixed with tree markers when `depth` is given.
    pub fn entry(&mut self, entry: &Entry, depth: Option<usize>) -> io::Result<()> {
        if let Some(depth) = depth {
            write!(self.out, "{}", tree_prefix(depth))?;
        }

        if self.show_details {
            let owner = self.names.user(entry.owner_id).to_string();
            let group = self.names.group(entry.group_id);
            write!(
                self.out,
                "{} {} {} {} {} {} ",
                entry.permissions,
                entry.link_count,
                owner,
                group,
                format_size_field(entry.size, self.human_readable),
                format_timestamp(&entry.modified_at),
            )?;
        }

        self.write_name(entry)?;

        if self.inline {
            write!(self.out, " ")
        } else {
            writeln!(self.out)
        }
    }

    /// Terminate a directory's block.
    pub fn end_block(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_name(&mut self, entry: &Entry) -> io::Result<()> {
        if entry.is_dir() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", entry.name)?;
            self.out.reset()
        } else {
            write!(self.out, "{}", entry.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use termcolor::Buffer;

    use super::*;
    use crate::listing::{RenderMode, extract_entry};
    use crate::test_utils::TestDir;

    fn printed(config: &RenderConfig, f: impl FnOnce(&mut EntryPrinter<Buffer>)) -> String {
        let mut printer = EntryPrinter::new(Buffer::no_color(), config);
        f(&mut printer);
        String::from_utf8(printer.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_tree_prefix_depths() {
        assert_eq!(tree_prefix(0), "|-> ");
        assert_eq!(tree_prefix(2), "|   |   |-> ");
    }

    #[test]
    fn test_plain_entries_are_inline() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");
        let entry = extract_entry(dir.path(), OsStr::new("a.txt")).unwrap();

        let config = RenderConfig::default();
        let output = printed(&config, |p| {
            assert!(p.is_inline());
            p.entry(&entry, None).unwrap();
            p.end_block().unwrap();
        });
        assert_eq!(output, "a.txt \n");
    }

    #[test]
    fn test_detailed_line_fields() {
        let dir = TestDir::new();
        dir.add_file("a.txt", &"x".repeat(2048));
        let entry = extract_entry(dir.path(), OsStr::new("a.txt")).unwrap();

        let config = RenderConfig {
            show_details: true,
            human_readable_sizes: true,
            ..Default::default()
        };
        let output = printed(&config, |p| p.entry(&entry, None).unwrap());

        assert!(output.starts_with(&entry.permissions));
        assert!(output.contains(" 2.0K "), "got: {}", output);
        assert!(output.ends_with(" a.txt\n"), "got: {}", output);
        let timestamp = format_timestamp(&entry.modified_at);
        assert!(output.contains(&timestamp));
    }

    #[test]
    fn test_tree_lines_carry_prefix() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");
        let entry = extract_entry(dir.path(), OsStr::new("a.txt")).unwrap();

        let config = RenderConfig {
            recursive: true,
            mode: RenderMode::Tree,
            ..Default::default()
        };
        let output = printed(&config, |p| {
            assert!(!p.is_inline());
            p.entry(&entry, Some(1)).unwrap();
        });
        assert_eq!(output, "|   |-> a.txt\n");
    }

    #[test]
    fn test_header_names_directory() {
        let config = RenderConfig::default();
        let output = printed(&config, |p| p.header(Path::new("root/sub")).unwrap());
        assert_eq!(output, "root/sub:\n");
    }
}

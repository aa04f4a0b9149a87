use std::io::{self, Write};
use tubeseed_youtube::{ResultGroup, ResultGroups, ResultKind};

/// Which groups to print and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_channels: bool,
    pub show_playlists: bool,
    pub verbose: bool,
}

impl DisplayOptions {
    /// Videos are always shown; the other kinds are opt-in.
    pub fn shows(&self, kind: ResultKind) -> bool {
        match kind {
            ResultKind::Video => true,
            ResultKind::Channel => self.show_channels,
            ResultKind::Playlist => self.show_playlists,
        }
    }
}

/// Print one group. Verbose output gets a `<section>:` header, `[id] title`
/// lines and a trailing blank line; otherwise just one id per line.
pub fn print_group<W: Write>(
    out: &mut W,
    section: &str,
    group: &ResultGroup,
    verbose: bool,
) -> io::Result<()> {
    if verbose {
        writeln!(out, "{section}:")?;
    }
    for (id, title) in group.iter() {
        if verbose {
            writeln!(out, "[{id}] {title}")?;
        } else {
            writeln!(out, "{id}")?;
        }
    }
    if verbose {
        writeln!(out)?;
    }
    Ok(())
}

/// Print every enabled group in video, channel, playlist order.
pub fn write_groups<W: Write>(
    out: &mut W,
    groups: &ResultGroups,
    display: &DisplayOptions,
) -> io::Result<()> {
    for kind in ResultKind::ALL {
        if display.shows(kind) {
            print_group(out, kind.section_name(), groups.group(kind), display.verbose)?;
        }
    }
    Ok(())
}

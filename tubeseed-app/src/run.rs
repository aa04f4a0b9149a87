use crate::output::{write_groups, DisplayOptions};
use std::io::{BufRead, Write};
use tubeseed_common::{Result, TubeseedError};
use tubeseed_youtube::{ResultGroups, SeedToken, VideoSearch};

/// Counters reported once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub seeds: usize,
    pub failed: usize,
}

/// Issue one search per input line and print its grouped results.
///
/// A failed search is logged and skipped; read and write failures end the run.
pub async fn run<S, R, W>(
    search: &S,
    input: R,
    out: &mut W,
    display: &DisplayOptions,
) -> Result<RunSummary>
where
    S: VideoSearch + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();

    for line in input.lines() {
        let line = line.map_err(TubeseedError::SeedRead)?;
        let seed = SeedToken::parse(&line);
        summary.seeds += 1;

        let resp = match search.search(&seed).await {
            Ok(resp) => resp,
            Err(e) if !e.is_fatal() => {
                tracing::warn!(seed = %seed, error = %e, "seed.search_failed");
                summary.failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let groups = ResultGroups::classify(&resp.items);
        tracing::debug!(
            seed = %seed,
            videos = groups.videos.len(),
            channels = groups.channels.len(),
            playlists = groups.playlists.len(),
            "seed.classified"
        );
        write_groups(out, &groups, display).map_err(TubeseedError::Output)?;
        out.flush().map_err(TubeseedError::Output)?;
    }

    Ok(summary)
}

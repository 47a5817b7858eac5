//! Single-pass scanner over a snapshot of document lines.
//!
//! The scanner looks for the first line exactly equal to the begin marker,
//! then watches every following line for the probe substrings until a line
//! exactly equal to the end marker stops it. Empty lines are skipped in every
//! state.

use tracing::trace;

/// Where the scanner is relative to the header region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Begin marker not seen yet
    SeekingBegin,
    /// Inside the header region
    InHeader,
    /// End marker reached; scanning stopped
    Done,
}

/// Result of scanning a document for its header region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderScan {
    /// Line of the begin marker
    pub begin_line: Option<usize>,
    /// Line of the end marker
    pub end_line: Option<usize>,
    /// First line inside the region containing each probe, in probe order
    pub hits: Vec<Option<usize>>,
    /// State the scanner finished in
    pub state: ScanState,
}

impl HeaderScan {
    /// First line containing probe `index`.
    #[must_use]
    pub fn hit(&self, index: usize) -> Option<usize> {
        self.hits.get(index).copied().flatten()
    }

    /// Whether any probe matched inside the region.
    #[must_use]
    pub fn any_hit(&self) -> bool {
        self.hits.iter().any(Option::is_some)
    }
}

/// Scan `lines` for the region delimited by `begin` and `end`.
///
/// Only the first occurrence of each probe is recorded. A region without an
/// end marker extends to the end of the document.
#[must_use]
pub fn scan(lines: &[String], begin: &str, end: &str, probes: &[&str]) -> HeaderScan {
    let mut result = HeaderScan {
        begin_line: None,
        end_line: None,
        hits: vec![None; probes.len()],
        state: ScanState::SeekingBegin,
    };

    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        match result.state {
            ScanState::SeekingBegin => {
                if line == begin {
                    trace!("Header begins at line {index}");
                    result.begin_line = Some(index);
                    result.state = ScanState::InHeader;
                }
            }
            ScanState::InHeader => {
                if line == end {
                    trace!("Header ends at line {index}");
                    result.end_line = Some(index);
                    result.state = ScanState::Done;
                    break;
                }
                for (slot, probe) in result.hits.iter_mut().zip(probes) {
                    if slot.is_none() && line.contains(probe) {
                        *slot = Some(index);
                    }
                }
            }
            ScanState::Done => break,
        }
    }

    result
}

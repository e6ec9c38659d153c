use std::fmt;

use serde::Serialize;

/// Raw-fetched vs kept-after-filtering counters for one source variant.
/// Accumulated only, never decremented, scoped to a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    pub raw: usize,
    pub kept: usize,
}

impl SourceStats {
    pub fn absorb(&mut self, other: SourceStats) {
        self.raw += other.raw;
        self.kept += other.kept;
    }
}

/// Per-source counters for one discovery run, plus the post-dedupe total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryStats {
    pub lever: SourceStats,
    pub greenhouse_api: SourceStats,
    pub greenhouse_html: SourceStats,
    pub total_after_dedupe: usize,
}

impl fmt::Display for DiscoveryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lever: raw={} kept={} | Greenhouse API: raw={} kept={} | \
             Greenhouse HTML: raw_links={} kept={} | Total (deduped)={}",
            self.lever.raw,
            self.lever.kept,
            self.greenhouse_api.raw,
            self.greenhouse_api.kept,
            self.greenhouse_html.raw,
            self.greenhouse_html.kept,
            self.total_after_dedupe,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_accumulates_both_counters() {
        let mut stats = SourceStats { raw: 3, kept: 1 };
        stats.absorb(SourceStats { raw: 5, kept: 2 });
        assert_eq!(stats, SourceStats { raw: 8, kept: 3 });
    }

    #[test]
    fn test_display_renders_diagnostics_line() {
        let stats = DiscoveryStats {
            lever: SourceStats { raw: 12, kept: 2 },
            greenhouse_api: SourceStats { raw: 30, kept: 4 },
            greenhouse_html: SourceStats::default(),
            total_after_dedupe: 6,
        };
        assert_eq!(
            stats.to_string(),
            "Lever: raw=12 kept=2 | Greenhouse API: raw=30 kept=4 | \
             Greenhouse HTML: raw_links=0 kept=0 | Total (deduped)=6"
        );
    }
}

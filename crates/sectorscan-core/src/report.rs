/// Human-readable run transcript.
///
/// One header, then per sector a title line followed by one indented line
/// per change event, a "no changes" line, or the failure reason. The text is
/// for people; nothing should parse it.
use crate::scanner::{ScanRun, SectorOutcome};
use chrono::{DateTime, Local};
use std::io::{self, Write};

/// Write the report for `run` to `out`, stamped with `now`.
pub fn write_report<W: Write>(out: &mut W, run: &ScanRun, now: DateTime<Local>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 DAILY PROJECT SCAN")?;
    writeln!(out, "🕒 {}", now.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;

    if run.sectors.is_empty() {
        writeln!(out, "No sectors found")?;
        writeln!(out)?;
        return Ok(());
    }

    for sector in &run.sectors {
        match &sector.outcome {
            SectorOutcome::Scanned { events } if events.is_empty() => {
                writeln!(out, "✅ {}: no changes", sector.name)?;
            }
            SectorOutcome::Scanned { events } => {
                writeln!(out, "🔔 {} changes:", sector.name)?;
                for event in events {
                    let kind = event.kind();
                    writeln!(out, "  {} {} {}", kind.icon(), kind.tag(), event.path())?;
                }
            }
            SectorOutcome::Failed { reason } => {
                writeln!(out, "❌ {}: scan failed: {reason}", sector.name)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

//! JSON in, ranked JSON out.
//!
//! Reads a JSON array of candidate records, fills in engine priorities,
//! runs engine cleanup when the records come from a single known engine,
//! ranks them, and writes the result back as a JSON array with every
//! record's fields intact.

use std::io::{Read, Write};

use serp_rank::engines::post_process_for;
use serp_rank::{CandidateRecord, Ranking, SearchEngine};

use crate::config::AppConfig;
use crate::error::Result;

/// Read a JSON array of candidate records.
///
/// # Errors
///
/// Returns [`crate::AppError::Json`] if the input is not a JSON array of
/// records.
pub fn read_candidates<R: Read>(reader: R) -> Result<Vec<CandidateRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Prepare and rank `records` for `query`.
///
/// With `engine` set, every record is stamped as coming from that engine
/// (overwriting any priority it carried) and passed through the engine's
/// cleanup. Otherwise records without a priority get one from their
/// `engine_name`, if they have one.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run(
    config: &AppConfig,
    query: &str,
    mut records: Vec<CandidateRecord>,
    engine: Option<SearchEngine>,
) -> Result<Ranking<CandidateRecord>> {
    let rank_config = config.rank_config();
    rank_config.validate()?;
    let table = rank_config.priority_table();

    match engine {
        Some(engine) => {
            table.stamp(&mut records, engine.name());
            records = post_process_for(engine, records);
        }
        None => {
            let assigned = table.assign(&mut records);
            tracing::debug!(assigned, "filled priorities from engine names");
        }
    }

    let ranking = rank_config.ranker().rank_explained(records, query);
    tracing::info!(
        ranked = ranking.len(),
        excluded = ranking.excluded(),
        "ranking complete"
    );
    Ok(ranking)
}

/// Write records as a pretty-printed JSON array followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_ranked<W: Write>(mut writer: W, records: &[CandidateRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}

/// Write one line per ranked record: position, priority, bucket, href and
/// title, tab separated.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_explanation<W: Write>(mut writer: W, ranking: &Ranking<CandidateRecord>) -> Result<()> {
    for (position, entry) in ranking.entries().iter().enumerate() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            position + 1,
            entry.priority,
            entry.bucket,
            entry.record.href(),
            entry.record.title()
        )?;
    }
    if ranking.excluded() > 0 {
        writeln!(writer, "excluded\t{}", ranking.excluded())?;
    }
    Ok(())
}

use crate::domain::model::{Landmark, SearchResult};
use crate::utils::error::Result;
use std::io::Write;

/// Plain listing: name, then category and distance.
pub fn write_table<W: Write>(out: &mut W, result: &SearchResult) -> Result<()> {
    writeln!(
        out,
        "📍 {} landmarks near {}",
        result.landmarks.len(),
        result.origin
    )?;

    if result.landmarks.is_empty() {
        if result.categories.is_empty() {
            writeln!(out, "No landmarks found nearby.")?;
        } else {
            writeln!(out, "No landmarks found for the selected categories.")?;
        }
        return Ok(());
    }

    for landmark in &result.landmarks {
        writeln!(out)?;
        writeln!(out, "{}", landmark.name)?;
        writeln!(
            out,
            "  {} - {:.1} miles away",
            landmark.category, landmark.distance_miles
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, result: &SearchResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(out: W, landmarks: &[Landmark]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for landmark in landmarks {
        writer.serialize(landmark)?;
    }
    writer.flush()?;
    Ok(())
}

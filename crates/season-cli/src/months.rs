use anyhow::Result;
use season_filter::{Hemisphere, Season};
use std::io::Write;

pub fn exec(hemisphere: Option<Hemisphere>, out: &mut impl Write) -> Result<()> {
    let hemispheres = match hemisphere {
        Some(hemisphere) => vec![hemisphere],
        None => Hemisphere::ALL.to_vec(),
    };

    for hemisphere in hemispheres {
        writeln!(out, "{hemisphere}")?;

        for season in Season::ALL {
            let months: Vec<String> = season
                .months(hemisphere)
                .iter()
                .map(|month| month.to_string())
                .collect();

            writeln!(out, "  {:>8}    {}", season.as_str(), months.join(", "))?;
        }
    }

    Ok(())
}

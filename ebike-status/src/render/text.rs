//! Fixed-width plain text for terminals.

use crate::availability::Report;

/// Width of the tier column ("yellow").
const TIER_WIDTH: usize = 6;

/// Render a report as aligned plain text.
///
/// ```text
/// Embarcadero:
///    22  Howard St at Beale St  green     5  #####
///    17  Beale St at Market St  yellow    1  #
/// ```
pub fn render_text(report: &Report) -> String {
    let stations = || report.regions.iter().flat_map(|r| &r.stations);
    let id_width = stations().map(|s| s.id.chars().count()).max().unwrap_or(0);
    let name_width = stations()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Ebike status\n");
    if let Some(updated) = report.updated_display() {
        out.push_str(&format!("Updated {updated}\n"));
    }

    for region in &report.regions {
        out.push_str(&format!("\n{}:\n", region.name));
        for station in &region.stations {
            let mut line = format!(
                "  {:>id_width$}  {:<name_width$}  {:<TIER_WIDTH$}  {:>3}  {}",
                station.id,
                station.name,
                station.tier.as_str(),
                station.count,
                "#".repeat(station.bars().len()),
            );
            if !station.found {
                line.push_str("(not in feed)");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

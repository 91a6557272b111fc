//! Askama templates for the HTML page.

use askama::Template;

use crate::availability::Report;

use super::RenderError;

/// The status page.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate<'a> {
    pub report: &'a Report,
}

/// Render a report as an HTML page.
pub fn render_html(report: &Report) -> Result<String, RenderError> {
    Ok(StatusTemplate { report }.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::{RegionReport, StationReport, Tier, TierThresholds, populate};
    use crate::directory::REGIONS;
    use crate::feed::mock::fixture;

    #[test]
    fn renders_every_region_and_station() {
        let report = populate(REGIONS, &fixture(), &TierThresholds::default());
        let html = render_html(&report).unwrap();

        assert!(html.contains("<title>Ebike status</title>"));
        for region in REGIONS {
            assert!(html.contains(&format!("<h2>{}:</h2>", region.name)));
            for station in region.stations {
                assert!(html.contains(&format!("<td>{}</td>", station.id)));
            }
        }
        assert!(html.contains("Updated 2018-06-26 21:40:00 UTC"));
    }

    #[test]
    fn rows_carry_tier_class() {
        let report = populate(REGIONS, &fixture(), &TierThresholds::default());
        let html = render_html(&report).unwrap();

        assert!(html.contains(r#"<tr class="green"><td>22</td>"#));
        assert!(html.contains(r#"<tr class="yellow"><td>17</td>"#));
        assert!(html.contains(r#"<tr class="red"><td>125</td>"#));
    }

    #[test]
    fn one_bar_per_bike() {
        let report = Report {
            regions: vec![RegionReport {
                name: "Test",
                stations: vec![StationReport {
                    id: "1",
                    name: "One",
                    count: 4,
                    tier: Tier::Green,
                    found: true,
                }],
            }],
            last_updated: None,
        };
        let html = render_html(&report).unwrap();

        assert_eq!(html.matches(r#"<div class="bar"></div>"#).count(), 4);
        assert!(!html.contains("Updated"));
    }

    #[test]
    fn escapes_names() {
        let report = Report {
            regions: vec![RegionReport {
                name: "Q&A",
                stations: vec![StationReport {
                    id: "1",
                    name: "<b>Dock</b>",
                    count: 0,
                    tier: Tier::Red,
                    found: false,
                }],
            }],
            last_updated: None,
        };
        let html = render_html(&report).unwrap();

        assert!(html.contains("Q&amp;A"));
        assert!(html.contains("&lt;b&gt;Dock&lt;/b&gt;"));
        assert!(!html.contains("<b>Dock</b>"));
    }
}

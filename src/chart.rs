use build_html::{Html, HtmlContainer, HtmlPage};
use itertools::Itertools;
use plotly::{
    common::Title,
    layout::{Axis, RangeMode},
    Bar, Layout, Plot,
};

use crate::histogram::TimeHistogram;

/// Bar chart of appointment counts per time-of-day bucket.
pub fn first_appointments_chart(histogram: &TimeHistogram) -> Plot {
    let labels = histogram.keys().cloned().collect_vec();
    let counts = histogram.values().copied().collect_vec();

    let mut plot = Plot::new();
    let trace = Bar::new(labels, counts).name("Termine");
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(Title::with_text(
                "Wann wurden die Termine erstmalig freigeschaltet?",
            ))
            .y_axis(Axis::new().range_mode(RangeMode::ToZero)),
    );
    plot
}

/// Wrap the chart in a standalone stats page.
pub fn stats_page(plot: &Plot) -> String {
    HtmlPage::new()
        .with_title("Terminstatistik")
        .with_raw(plot.to_inline_html(Some("first_time_appointments_chart")))
        .to_html_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::bin_appointments;
    use crate::interval::Granularity;
    use crate::records::AppointmentRecord;

    #[test]
    fn test_first_appointments_chart() {
        let rs = vec![AppointmentRecord {
            earliest_time_found: Some("08:29:00".to_string()),
        }];
        let binned = bin_appointments(&rs, Granularity::minutes(30).unwrap());
        let plot = first_appointments_chart(&binned.histogram);

        let json = plot.to_json();
        assert!(json.contains("Termine"));
        assert!(json.contains("Wann wurden die Termine erstmalig freigeschaltet?"));
        assert!(json.contains("08:30"));
    }

    #[test]
    fn test_stats_page() {
        let binned = bin_appointments(&[], Granularity::minutes(30).unwrap());
        let page = stats_page(&first_appointments_chart(&binned.histogram));
        assert!(page.contains("first_time_appointments_chart"));
        assert!(page.contains("<title>Terminstatistik</title>"));
    }
}

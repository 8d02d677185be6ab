use crate::cli::analyze::run::Analysis;
use owo_colors::OwoColorize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

const TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Human readable report. `color` toggles ANSI styling.
pub fn render_text(analysis: &Analysis, color: bool) -> String {
    let p = Painter { color };
    let s = &analysis.stats;
    let sum = &analysis.summary;
    let mut out = String::new();

    let title = format!("Traffic report: {}", analysis.file.display());
    out.push_str(&format!(
        "{}\n{}\n",
        p.heading(&title),
        "=".repeat(title.chars().count())
    ));
    out.push_str(&format!(
        "lines: {} | accepted: {} | malformed: {} | blank: {}\n",
        sum.lines,
        p.good(sum.accepted),
        p.bad_if(sum.malformed, sum.malformed > 0),
        sum.blank
    ));

    match &s.window {
        Some(w) => out.push_str(&format!(
            "window: {} .. {} ({}h)\n\n",
            w.start.format(TIME_FORMAT),
            w.end.format(TIME_FORMAT),
            w.whole_hours()
        )),
        None => out.push_str("window: <no records>\n\n"),
    }

    out.push_str(&format!(
        "Requests: {} (humans={} bots={}) | errors: {} | visitors: {}\n",
        s.requests,
        s.human_requests,
        s.bot_requests,
        p.bad_if(s.errors, s.errors > 0),
        s.unique_visitors
    ));
    out.push_str(&format!(
        "Traffic: {} bytes | {:.1} bytes/h\n",
        s.total_traffic, s.traffic_rate_per_hour
    ));
    out.push_str(&format!(
        "Visits/h: {:.2} | errors/h: {:.2} | visits/user: {:.2}\n",
        s.average_visits_per_hour, s.average_errors_per_hour, s.average_visits_per_user
    ));
    out.push_str(&format!(
        "Peak: {} visits/s | {} visits from a single IP\n\n",
        s.max_visits_per_second, s.max_visits_by_single_ip
    ));

    render_shares(&mut out, &p, "Operating systems", &s.operating_systems);
    render_shares(&mut out, &p, "Browsers", &s.browsers);
    render_shares(&mut out, &p, "Crawlers", &s.crawlers);

    render_list(&mut out, &p, "Referring domains", &s.referring_domains);
    render_list(&mut out, &p, "Existing pages", &s.existing_urls);
    render_list(&mut out, &p, "Not found pages", &s.not_found_urls);

    out
}

pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

fn render_shares<K: Display>(
    out: &mut String,
    p: &Painter,
    label: &str,
    shares: &BTreeMap<K, f64>,
) {
    if shares.is_empty() {
        out.push_str(&format!("{}: <no samples>\n\n", p.heading(label)));
        return;
    }

    out.push_str(&format!("{}:\n", p.heading(label)));
    for (key, share) in shares {
        let pct = share * 100.0;
        let bars = (pct / 5.0).floor() as usize;
        out.push_str(&format!(
            "  {:<10} {:<20} {:>5.1}%\n",
            key.to_string(),
            "█".repeat(bars),
            pct
        ));
    }
    out.push('\n');
}

fn render_list(out: &mut String, p: &Painter, label: &str, items: &BTreeSet<String>) {
    out.push_str(&format!("{} ({}):\n", p.heading(label), items.len()));
    for item in items {
        out.push_str(&format!("  {item}\n"));
    }
    out.push('\n');
}

struct Painter {
    color: bool,
}

impl Painter {
    fn heading(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn good<T: Display>(&self, v: T) -> String {
        if self.color {
            v.green().to_string()
        } else {
            v.to_string()
        }
    }

    fn bad_if<T: Display>(&self, v: T, bad: bool) -> String {
        if self.color && bad {
            v.red().bold().to_string()
        } else {
            v.to_string()
        }
    }
}

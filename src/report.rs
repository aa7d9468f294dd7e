// src/report.rs
//
// Every analysis over one ObservationSet, computed once and shared by the
// CLI (text) and the dashboard's Analysis tab.

use crate::{
    analysis::{
        anomaly, bands, changes, daily, duplicates, ranking, stats,
        AnomalyBand, BandCount, DailyAggregate, PriceChange, Stats,
    },
    config::options::ReportOptions,
    model::{format_timestamp, Observation, ObservationSet, Price},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub options: ReportOptions,
    pub stats: Stats,
    pub latest: Vec<Observation>,
    pub cheapest: Vec<Observation>,
    pub priciest: Vec<Observation>,
    pub changes: Vec<PriceChange>,
    pub biggest_drop: Option<PriceChange>,
    pub biggest_increase: Option<PriceChange>,
    pub daily: Vec<DailyAggregate>,
    pub anomaly_band: Option<AnomalyBand>,
    pub anomalies: Vec<Observation>,
    pub duplicates: Vec<Observation>,
    pub duplicate_groups: usize,
    pub deals: Vec<Observation>,
    pub bands: Vec<BandCount>,
    pub title_means: Vec<(String, f64)>,
}

impl Report {
    pub fn build(set: &ObservationSet, opts: &ReportOptions) -> Self {
        let changes = changes::detect_changes(set);
        let biggest_drop = changes::biggest_drop(&changes).cloned();
        let biggest_increase = changes::biggest_increase(&changes).cloned();

        logd!("Report: building over {} record(s)", set.len());
        Self {
            options: opts.clone(),
            stats: stats::summarize(set),
            latest: ranking::most_recent_n(set, opts.latest_n),
            cheapest: ranking::cheapest(set, opts.top_n),
            priciest: ranking::priciest(set, opts.top_n),
            changes,
            biggest_drop,
            biggest_increase,
            daily: daily::daily_aggregate(set),
            anomaly_band: anomaly::band(set, opts.anomaly_k, opts.deviation),
            anomalies: anomaly::detect_anomalies(set, opts.anomaly_k, opts.deviation),
            duplicates: duplicates::find_duplicates(set),
            duplicate_groups: duplicates::duplicate_group_count(set),
            deals: bands::deals(set, opts.deal_below, opts.deals_n),
            bands: bands::price_bands(set),
            title_means: bands::title_means(set, opts.title_means_n),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = s!();
        let o = &self.options;

        section(&mut out, "Price Statistics");
        let p = self.stats.prices.as_ref();
        line(&mut out, "Mean price", p.map(|p| money(p.mean)));
        line(&mut out, "Min price", p.map(|p| p.min.to_string()));
        line(&mut out, "Max price", p.map(|p| p.max.to_string()));
        line(&mut out, "Median price", p.map(|p| money(p.median)));
        line(&mut out, "Std deviation", p.and_then(|p| p.stddev).map(money));
        out.push_str(&format!("Unique titles: {}\n", self.stats.unique_titles));
        out.push_str(&format!("Total entries: {}\n", self.stats.count));

        section(&mut out, &format!("Latest {} Logs", o.latest_n));
        observations(&mut out, &self.latest, "No entries.");

        section(&mut out, &format!("Top {} Cheapest Books", o.top_n));
        observations(&mut out, &self.cheapest, "No entries.");

        section(&mut out, &format!("Top {} Most Expensive Books", o.top_n));
        observations(&mut out, &self.priciest, "No entries.");

        section(&mut out, "Books with Price Changes (since previous log)");
        price_changes(&mut out, &self.changes, "No price changes detected.");

        section(&mut out, "Biggest Price Drop");
        price_changes(&mut out, self.biggest_drop.as_slice(), "No price drops detected.");

        section(&mut out, "Biggest Price Increase");
        price_changes(&mut out, self.biggest_increase.as_slice(), "No price increases detected.");

        section(&mut out, "Daily Price Trends (min, max, mean)");
        if self.daily.is_empty() {
            out.push_str("No entries.\n");
        } else {
            let rows = self.daily.iter().map(|d| {
                vec![d.date.to_string(), d.min.to_string(), d.max.to_string(), money(d.mean), d.count.to_string()]
            });
            out.push_str(&table(&["date", "min", "max", "mean", "count"], rows.collect()));
        }

        section(&mut out, &format!("Price Anomaly Detection (prices outside {} std dev)", o.anomaly_k));
        if let Some(b) = &self.anomaly_band {
            out.push_str(&format!("Accepted range: {} to {}\n", money(b.lower), money(b.upper)));
        }
        observations(&mut out, &self.anomalies, "No price anomalies detected.");

        section(&mut out, "Duplicate Entry Detection");
        if self.duplicate_groups > 0 {
            out.push_str(&format!("{} duplicate group(s)\n", self.duplicate_groups));
        }
        observations(&mut out, &self.duplicates, "No duplicate entries found.");

        section(&mut out, &format!("Deals Under {}", o.deal_below));
        observations(&mut out, &self.deals, "No deals found.");

        section(&mut out, "Price Bands");
        let rows = self.bands.iter().map(|b| vec![s!(b.label), b.count.to_string()]);
        out.push_str(&table(&["band", "count"], rows.collect()));

        section(&mut out, &format!("Top {} Titles by Mean Price", o.title_means_n));
        if self.title_means.is_empty() {
            out.push_str("No entries.\n");
        } else {
            let rows = self.title_means.iter().map(|(t, m)| vec![t.clone(), money(*m)]);
            out.push_str(&table(&["title", "mean"], rows.collect()));
        }

        out
    }
}

fn money(v: f64) -> String {
    format!("{v:.2}")
}

fn section(out: &mut String, name: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("--- {name} ---\n"));
}

fn line(out: &mut String, label: &str, value: Option<String>) {
    out.push_str(&format!("{label}: {}\n", value.as_deref().unwrap_or("n/a")));
}

fn observations(out: &mut String, rows: &[Observation], none: &str) {
    if rows.is_empty() {
        out.push_str(none);
        out.push('\n');
        return;
    }
    let rows = rows
        .iter()
        .map(|o| vec![o.title.clone(), o.price.to_string(), format_timestamp(&o.timestamp)])
        .collect();
    out.push_str(&table(&["title", "price", "timestamp"], rows));
}

fn price_changes(out: &mut String, rows: &[PriceChange], none: &str) {
    if rows.is_empty() {
        out.push_str(none);
        out.push('\n');
        return;
    }
    let signed = |d: Price| if d.is_negative() { d.to_string() } else { format!("+{d}") };
    let rows = rows
        .iter()
        .map(|c| {
            vec![
                c.title.clone(),
                format_timestamp(&c.timestamp),
                c.previous.to_string(),
                c.current.to_string(),
                signed(c.delta),
            ]
        })
        .collect();
    out.push_str(&table(&["title", "timestamp", "prev_price", "price", "price_change"], rows));
}

/// Left-aligned text columns sized to the widest cell.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let fmt_row = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect();
        let mut l = padded.join("  ").trim_end().to_string();
        l.push('\n');
        l
    };

    let mut out = fmt_row(headers.to_vec());
    for row in &rows {
        out.push_str(&fmt_row(row.iter().map(String::as_str).collect()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_columns() {
        let t = table(&["a", "bb"], vec![vec![s!("long"), s!("x")]]);
        assert_eq!(t, "a     bb\nlong  x\n");
    }
}

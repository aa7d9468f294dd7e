// src/config/file.rs
//
// Optional `key=value` settings file. Blank lines and `#` comments are
// ignored, as are unknown keys. An empty value clears an optional setting.

use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

use crate::analysis::Deviation;
use crate::error::ConfigError;
use crate::model::Price;

use super::options::AppOptions;

/// Defaults when the file does not exist.
pub fn load(path: &Path) -> Result<AppOptions, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let opts = parse(&text)?;
            logf!("Config: loaded {}", path.display());
            Ok(opts)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            logd!("Config: {} not found, using defaults", path.display());
            Ok(AppOptions::default())
        }
        Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
    }
}

pub fn parse(text: &str) -> Result<AppOptions, ConfigError> {
    let mut cfg = AppOptions::default();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        let bad = || ConfigError::BadValue { line: i + 1, key: s!(key), value: s!(val) };

        match key {
            "url" => cfg.scrape.url = s!(val),
            "page_limit" => cfg.scrape.page_limit = val.parse().map_err(|_| bad())?,
            "alert_below" => cfg.scrape.alert_below = opt_price(val).map_err(|_| bad())?,
            "price_max" => cfg.scrape.price_max = opt_price(val).map_err(|_| bad())?,
            "title_keyword" => {
                cfg.scrape.title_keyword = if val.is_empty() { None } else { Some(s!(val)) }
            }
            "log_path" => cfg.log_path = PathBuf::from(val),
            "top_n" => cfg.report.top_n = val.parse().map_err(|_| bad())?,
            "latest_n" => cfg.report.latest_n = val.parse().map_err(|_| bad())?,
            "anomaly_k" => {
                let k: f64 = val.parse().map_err(|_| bad())?;
                if !k.is_finite() || k < 0.0 { return Err(bad()); }
                cfg.report.anomaly_k = k;
            }
            "deviation" => {
                cfg.report.deviation = match val.to_ascii_lowercase().as_str() {
                    "population" => Deviation::Population,
                    "sample" => Deviation::Sample,
                    _ => return Err(bad()),
                }
            }
            "deal_below" => cfg.report.deal_below = Price::parse(val).ok_or_else(bad)?,
            "deals_n" => cfg.report.deals_n = val.parse().map_err(|_| bad())?,
            "title_means_n" => cfg.report.title_means_n = val.parse().map_err(|_| bad())?,
            other => logd!("Config: ignoring unknown key {:?}", other),
        }
    }
    Ok(cfg)
}

fn opt_price(val: &str) -> Result<Option<Price>, ()> {
    if val.is_empty() || val.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Price::parse(val).filter(|p| !p.is_negative()).map(Some).ok_or(())
}

pub fn render(cfg: &AppOptions) -> String {
    let opt = |p: Option<Price>| p.map(|p| p.to_string()).unwrap_or_default();
    let dev = match cfg.report.deviation {
        Deviation::Population => "population",
        Deviation::Sample => "sample",
    };
    let mut s = s!();
    s.push_str(&format!("url={}\n", cfg.scrape.url));
    s.push_str(&format!("page_limit={}\n", cfg.scrape.page_limit));
    s.push_str(&format!("alert_below={}\n", opt(cfg.scrape.alert_below)));
    s.push_str(&format!("price_max={}\n", opt(cfg.scrape.price_max)));
    s.push_str(&format!("title_keyword={}\n", cfg.scrape.title_keyword.as_deref().unwrap_or("")));
    s.push_str(&format!("log_path={}\n", cfg.log_path.display()));
    s.push_str(&format!("top_n={}\n", cfg.report.top_n));
    s.push_str(&format!("latest_n={}\n", cfg.report.latest_n));
    s.push_str(&format!("anomaly_k={}\n", cfg.report.anomaly_k));
    s.push_str(&format!("deviation={}\n", dev));
    s.push_str(&format!("deal_below={}\n", cfg.report.deal_below));
    s.push_str(&format!("deals_n={}\n", cfg.report.deals_n));
    s.push_str(&format!("title_means_n={}\n", cfg.report.title_means_n));
    s
}

pub fn save(path: &Path, cfg: &AppOptions) -> Result<(), ConfigError> {
    let wrap = |source: std::io::Error| ConfigError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
    }
    fs::write(path, render(cfg)).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_then_parse_keeps_settings() {
        let mut cfg = AppOptions::default();
        cfg.scrape.page_limit = 3;
        cfg.scrape.alert_below = None;
        cfg.scrape.title_keyword = Some(s!("python"));
        cfg.report.deviation = Deviation::Sample;
        cfg.report.anomaly_k = 2.5;
        assert_eq!(parse(&render(&cfg)).unwrap(), cfg);
    }

    #[test]
    fn bad_values_name_the_line() {
        let err = parse("# settings\npage_limit=lots\n").unwrap_err();
        match err {
            ConfigError::BadValue { line, key, .. } => {
                assert_eq!(line, 2);
                assert_eq!(key, "page_limit");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(parse("colour=blue\n").unwrap(), AppOptions::default());
    }
}

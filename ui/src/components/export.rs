use dioxus::prelude::*;

use crate::core::catalog::CATALOG;
use crate::core::records::DailyRecord;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// CSV/JSON export of the selected window. The browser build hands the
/// bytes to a Blob download; native builds write into the per-user data
/// directory.
#[component]
pub fn ExportCard(window: Vec<(String, DailyRecord)>) -> Element {
    let day_count = window.len();
    let status = use_signal(|| ExportStatus::Idle);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "card__meta card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "card__meta card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let json_handler = {
        let export_window = window.clone();
        let mut status_signal = status;
        move |_| {
            match perform_json_export(&export_window) {
                Ok(message) => status_signal.set(ExportStatus::Done(message)),
                Err(err) => status_signal.set(ExportStatus::Error(err)),
            }
        }
    };

    let csv_handler = {
        let export_window = window.clone();
        let mut status_signal = status;
        move |_| {
            match perform_csv_export(&export_window) {
                Ok(message) => status_signal.set(ExportStatus::Done(message)),
                Err(err) => status_signal.set(ExportStatus::Error(err)),
            }
        }
    };

    rsx! {
        section { class: "card export-card",
            div { class: "card__header",
                h2 { "Export" }
            }

            if day_count == 0 {
                p { class: "card__placeholder", "Pick a window with recorded days to export." }
            } else {
                p { "Prepare tidy JSON or CSV of the selected window for deeper analysis." }

                ul { class: "export-card__summary",
                    li { strong { "{day_count}" } " days in window" }
                }

                div { class: "export-card__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: json_handler,
                        "Export JSON"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: csv_handler,
                        "Export CSV"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

fn perform_json_export(window: &[(String, DailyRecord)]) -> Result<String, String> {
    let map: std::collections::BTreeMap<&str, &DailyRecord> = window
        .iter()
        .map(|(date, record)| (date.as_str(), record))
        .collect();
    let json = serde_json::to_string_pretty(&map).map_err(|err| err.to_string())?;
    let filename = format!("pulseboard-metrics-{}.json", timestamp_slug());
    let delivery = download_bytes(&filename, "application/json", json.into_bytes())?;
    Ok(match delivery {
        Some(path) => format!("JSON saved to {path}"),
        None => "JSON download started".to_string(),
    })
}

fn perform_csv_export(window: &[(String, DailyRecord)]) -> Result<String, String> {
    let csv = build_csv(window);
    let filename = format!("pulseboard-metrics-{}.csv", timestamp_slug());
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes())?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

/// One row per day, one column per catalog metric, in catalog order.
/// Days that never recorded a metric leave the cell empty.
fn build_csv(window: &[(String, DailyRecord)]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(window.len() + 1);

    let mut header = vec!["date".to_string()];
    header.extend(CATALOG.iter().map(|spec| spec.key.to_string()));
    rows.push(header);

    for (date, record) in window {
        let mut row = vec![date.clone()];
        for spec in CATALOG {
            row.push(
                record
                    .value(spec.group, spec.key)
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            );
        }
        rows.push(row);
    }

    let mut csv = String::new();
    for row in rows {
        let line = row
            .into_iter()
            .map(|field| escape_csv(&field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = native_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Pulseboard", "Pulseboard")
        .ok_or("Unable to determine export directory")?;
    let dir = dirs.data_dir().join("exports");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::keys;

    fn day() -> DailyRecord {
        let mut record = DailyRecord::default();
        record
            .sleep_summary
            .insert(keys::DISTURBANCES.to_string(), 3.0);
        record
            .physiological_summary
            .insert(keys::STRAIN.to_string(), 14.2);
        record
    }

    #[test]
    fn csv_has_one_column_per_catalog_metric() {
        let csv = build_csv(&[("2025-07-31".to_string(), day())]);
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert_eq!(header.split(',').count(), CATALOG.len() + 1);
        assert!(header.starts_with("date,"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("2025-07-31,"));
        assert_eq!(row.split(',').count(), CATALOG.len() + 1);
        assert!(row.contains('3'));
        assert!(row.contains("14.2"));
    }

    #[test]
    fn absent_metrics_leave_empty_cells() {
        let record = DailyRecord::default();
        let csv = build_csv(&[("2025-07-31".to_string(), record)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("2025-07-31,"));
        assert!(row.ends_with(",,"));
        assert!(!row.contains('"'));
    }

    #[test]
    fn delimiters_inside_fields_are_quoted() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}

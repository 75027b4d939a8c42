use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// In table mode an object carrying an `items` array is rendered as the
/// table of those items followed by its scalar fields as a footer.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: Value) -> anyhow::Result<String> {
    Ok(match value {
        Value::Array(items) => render_array(&items),
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => {
                let footer = map
                    .iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(key, value)| format!("{key}: {}", cell(value)))
                    .collect::<Vec<_>>()
                    .join("  ");
                if footer.is_empty() {
                    render_array(&items)
                } else {
                    format!("{}\n\n{footer}", render_array(&items))
                }
            }
            other => {
                if let Some(items) = other {
                    map.insert("items".into(), items);
                }
                let rows = map
                    .iter()
                    .map(|(key, value)| vec![key.clone(), cell(value)])
                    .collect::<Vec<_>>();
                table::render_rows(&["key", "value"], &rows, options())
            }
        },
        scalar => cell(&scalar),
    })
}

fn render_array(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, options());
    }

    // Column order follows the first record; later records may add columns.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_rows(&header_refs, &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(values) if values.iter().all(Value::is_string) => values
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Coin {
        symbol: &'static str,
        tags: Vec<&'static str>,
    }

    #[derive(Serialize)]
    struct PageView {
        items: Vec<Coin>,
        page: u32,
        total: Option<u64>,
    }

    fn page() -> PageView {
        PageView {
            items: vec![
                Coin {
                    symbol: "BTC",
                    tags: vec!["l1", "pow"],
                },
                Coin {
                    symbol: "ETH",
                    tags: vec![],
                },
            ],
            page: 2,
            total: None,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&page(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["items"][0]["symbol"], "BTC");
        assert_eq!(parsed["page"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&page(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_uses_items_with_footer() {
        let out = render(&page(), OutputFormat::Table).expect("table render should work");
        let first = out.lines().next().unwrap_or_default();
        assert!(first.contains("symbol"));
        assert!(first.contains("tags"));
        assert!(out.contains("l1, pow"));
        assert!(out.ends_with("page: 2"));
    }

    #[test]
    fn table_render_for_plain_object_is_key_value() {
        #[derive(Serialize)]
        struct Ack {
            message: &'static str,
        }
        let out = render(&Ack { message: "ok" }, OutputFormat::Table).expect("render");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("message"));
    }

    #[test]
    fn empty_array_says_so() {
        let empty: Vec<Coin> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Table).unwrap(), "(no rows)");
    }
}

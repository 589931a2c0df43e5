use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// One page of a list command's results.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub page: i64,
    pub page_count: usize,
    pub total: usize,
    pub rows: Vec<T>,
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a page. Tables show the rows plus a position footer; JSON keeps the
/// whole envelope.
pub fn output_page<T: Serialize>(page: &Page<T>, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_page(page, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_page<T: Serialize>(page: &Page<T>, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(page, format);
    }
    let table = render_table(&serde_json::to_value(&page.rows)?)?;
    Ok(format!(
        "{table}\npage {} of {} ({} rows)",
        page.page.saturating_add(1),
        page.page_count.max(1),
        page.total
    ))
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(scalar)]],
            table_options(),
        )),
    }
}

/// Columns follow the first record's field order; later records may add more.
fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Page, render, render_page};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        titulo: &'static str,
        estado: &'static str,
    }

    fn page() -> Page<Row> {
        Page {
            page: 0,
            page_count: 2,
            total: 3,
            rows: vec![
                Row { id: 1, titulo: "Laboratorios", estado: "aprobado" },
                Row { id: 2, titulo: "Tutorías", estado: "enviado" },
            ],
        }
    }

    #[test]
    fn json_page_keeps_the_envelope() {
        let out = render_page(&page(), OutputFormat::Json).expect("json render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["total"], 3);
        assert_eq!(parsed["rows"][1]["titulo"], "Tutorías");
    }

    #[test]
    fn raw_render_is_single_line() {
        let out = render(&page(), OutputFormat::Raw).expect("raw render");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_page_keeps_field_order_and_adds_footer() {
        let out = render_page(&page(), OutputFormat::Table).expect("table render");
        let header = out.lines().next().expect("header line");
        let id = header.find("id").expect("id column");
        let titulo = header.find("titulo").expect("titulo column");
        assert!(id < titulo);
        assert!(out.ends_with("page 1 of 2 (3 rows)"));
    }

    #[test]
    fn empty_page_says_so() {
        let empty: Page<Row> = Page {
            page: 0,
            page_count: 0,
            total: 0,
            rows: Vec::new(),
        };
        let out = render_page(&empty, OutputFormat::Table).expect("table render");
        assert!(out.starts_with("(no rows)"));
        assert!(out.ends_with("page 1 of 1 (0 rows)"));
    }
}

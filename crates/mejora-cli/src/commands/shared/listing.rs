//! The fetch → filter → page → export flow shared by every list command.

use std::path::{Path, PathBuf};

use anyhow::Context;
use mejora_core::enums::ResourceKind;
use mejora_views::list::{Column, ListRecord, export_filename, to_csv};
use mejora_views::{FilterState, ListScreen, Notification};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_page_size;
use crate::context::AppContext;
use crate::output::{Page, output_page};
use crate::ui;

/// What a list command contributes on top of [`ListArgs`].
pub struct ListCommand<T> {
    pub kind: ResourceKind,
    /// File name prefix for CSV exports.
    pub export_prefix: &'static str,
    pub columns: Vec<Column<T>>,
}

/// Fetch, filter, and print one page. Remote failures become a notification
/// and the command still succeeds.
pub async fn run<T>(
    command: ListCommand<T>,
    args: &ListArgs,
    filters: impl FnOnce(&mut FilterState),
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    T: ListRecord + DeserializeOwned + Serialize + Clone,
{
    let page_size = effective_page_size(args.page_size, flags.limit, ctx.config.general.page_size);
    let mut screen = ListScreen::<T>::new(command.kind, page_size);
    screen.filters = build_filters(args, page_size, filters);

    let token = ctx.token();
    if !screen.refresh(&ctx.client, token.as_deref()).await {
        if let Some(notification) = screen.notification() {
            ui::notify(notification);
        }
        return Ok(());
    }

    let filtered = screen.filtered();
    if let Some(dir) = args.export.as_deref() {
        let dir = export_dir(dir, &ctx.config.general.export_dir);
        let notification = match write_export(&filtered, &command, &dir) {
            Ok(path) => Notification::success(format!(
                "exported {} rows to {}",
                filtered.len(),
                path.display()
            )),
            Err(error) => Notification::error(format!("export failed: {error:#}")),
        };
        ui::notify(&notification);
    }

    output_page(
        &Page {
            page: screen.filters.page,
            page_count: screen.page_count(),
            total: filtered.len(),
            rows: screen.visible(),
        },
        flags.format,
    )
}

/// Filters from the common args plus the command's own. The page is set last
/// because every other setter resets it.
fn build_filters(
    args: &ListArgs,
    page_size: usize,
    extra: impl FnOnce(&mut FilterState),
) -> FilterState {
    let mut filters = FilterState::new(page_size);
    if let Some(search) = &args.search {
        filters.set_search(search.trim());
    }
    extra(&mut filters);
    filters.set_page(args.page);
    filters
}

fn export_dir(requested: &str, configured: &str) -> PathBuf {
    if requested.trim().is_empty() {
        PathBuf::from(configured)
    } else {
        PathBuf::from(requested)
    }
}

fn write_export<T>(records: &[T], command: &ListCommand<T>, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let today = chrono::Local::now().date_naive();
    let path = dir.join(export_filename(command.export_prefix, today));
    std::fs::write(&path, to_csv(records, &command.columns))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = records.len(), "csv export written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mejora_core::enums::ResourceKind;
    use mejora_views::list::Column;
    use pretty_assertions::assert_eq;

    use super::{ListCommand, build_filters, export_dir, write_export};
    use crate::cli::root_commands::ListArgs;

    #[test]
    fn page_survives_filter_setters() {
        let args = ListArgs {
            search: Some("  tutorías ".into()),
            page: 3,
            ..ListArgs::default()
        };
        let filters = build_filters(&args, 10, |f| f.set_category("status", "enviado"));
        assert_eq!(filters.page, 3);
        assert_eq!(filters.search_text, "tutorías");
        assert_eq!(filters.category("status"), Some("enviado"));
        assert_eq!(filters.page_size, 10);
    }

    #[test]
    fn bare_export_uses_configured_dir() {
        assert_eq!(export_dir("", "reportes"), PathBuf::from("reportes"));
        assert_eq!(export_dir("/tmp/x", "reportes"), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn export_writes_dated_csv_into_dir() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let dir = tmp.path().join("nested");
        let command = ListCommand {
            kind: ResourceKind::Faculties,
            export_prefix: "facultades",
            columns: vec![Column::new("nombre", |name: &String| name.clone())],
        };

        let path = write_export(&["Ingeniería, Civil".to_string()], &command, &dir)
            .expect("export should be written");

        let file_name = path.file_name().and_then(|n| n.to_str()).expect("file name");
        assert!(file_name.starts_with("facultades_") && file_name.ends_with(".csv"));
        let contents = std::fs::read_to_string(&path).expect("read export");
        assert_eq!(contents, "nombre\n\"Ingeniería, Civil\"\n");
    }
}

use mejora_core::entities::Faculty;
use mejora_core::enums::ResourceKind;
use mejora_views::list::Column;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FacultiesArgs;
use crate::commands::shared::listing::{self, ListCommand};
use crate::context::AppContext;

/// Handle `mejora faculties`.
pub async fn handle(
    args: &FacultiesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let command = ListCommand {
        kind: ResourceKind::Faculties,
        export_prefix: "facultades",
        columns: vec![
            Column::new("ID", |f: &Faculty| f.id.to_string()),
            Column::new("Nombre", |f: &Faculty| f.name.clone()),
            Column::new("Código", |f: &Faculty| f.code.clone().unwrap_or_default()),
            Column::new("Decano", |f: &Faculty| f.dean.clone().unwrap_or_default()),
        ],
    };
    listing::run::<Faculty>(command, &args.list, |_| {}, ctx, flags).await
}

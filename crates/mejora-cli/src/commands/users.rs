use mejora_core::entities::{NewUser, User};
use mejora_core::enums::{ResourceKind, Role};
use mejora_views::Notification;
use mejora_views::list::Column;
use mejora_views::validation::validate_new_user;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::cli::subcommands::users::{UserCreateArgs, UserListArgs};
use crate::commands::shared::listing::{self, ListCommand};
use crate::commands::shared::remote;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Handle `mejora users <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List(args) => list(args, ctx, flags).await,
        UserCommands::Create(args) => create(args, ctx, flags).await,
    }
}

async fn list(args: &UserListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = args
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()?;

    let command = ListCommand {
        kind: ResourceKind::Users,
        export_prefix: "usuarios",
        columns: columns(),
    };
    listing::run::<User>(
        command,
        &args.list,
        |filters| {
            if let Some(role) = role {
                filters.set_category("role", role.as_str());
            }
            if let Some(faculty) = &args.faculty {
                filters.set_category("faculty", faculty.trim());
            }
        },
        ctx,
        flags,
    )
    .await
}

async fn create(
    args: &UserCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = form_from_args(args);
    if let Err(errors) = validate_new_user(&form, &ctx.config.general.institutional_domain) {
        for error in &errors {
            ui::notify(&Notification::error(error.to_string()));
        }
        return Ok(());
    }

    let token = match ctx.require_token() {
        Ok(token) => token,
        Err(error) => {
            ui::notify(&Notification::error(error.to_string()));
            return Ok(());
        }
    };
    match ctx.client.create_user(&form, Some(&token)).await {
        Ok(user) => {
            ui::notify(&Notification::success(format!(
                "user {} created",
                user.full_name()
            )));
            output(&user, flags.format)
        }
        Err(error) => {
            remote::report(&error, ctx);
            Ok(())
        }
    }
}

fn form_from_args(args: &UserCreateArgs) -> NewUser {
    NewUser {
        email: args.email.trim().to_string(),
        first_name: args.nombre.trim().to_string(),
        last_name: args.apellido.trim().to_string(),
        faculty: args
            .facultad
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string),
        role: Role::from_tag(&args.role)
            .map_or_else(|| args.role.clone(), |role| role.as_str().to_string()),
        password: args.password.clone(),
        password_confirmation: args.password_confirmation.clone(),
    }
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("ID", |user: &User| user.id.to_string()),
        Column::new("Nombre", User::full_name),
        Column::new("Email", |user: &User| user.email.clone()),
        Column::new("Rol", |user: &User| user.role.clone()),
        Column::new("Facultad", |user: &User| user.faculty.clone().unwrap_or_default()),
        Column::new("Activo", |user: &User| {
            let label = if user.active { "Sí" } else { "No" };
            label.to_string()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::form_from_args;
    use crate::cli::subcommands::users::UserCreateArgs;

    fn args() -> UserCreateArgs {
        UserCreateArgs {
            nombre: " Ana ".into(),
            apellido: "Ruiz".into(),
            email: "ana.ruiz@universidad.edu.ec ".into(),
            role: "docente".into(),
            facultad: Some("  ".into()),
            password: "segura123".into(),
            password_confirmation: "segura123".into(),
        }
    }

    #[test]
    fn form_is_trimmed_and_role_canonicalized() {
        let form = form_from_args(&args());
        assert_eq!(form.first_name, "Ana");
        assert_eq!(form.email, "ana.ruiz@universidad.edu.ec");
        assert_eq!(form.role, "Docente");
        assert_eq!(form.faculty, None);
    }

    #[test]
    fn unknown_role_is_kept_for_validation_to_reject() {
        let form = form_from_args(&UserCreateArgs {
            role: "Rector".into(),
            ..args()
        });
        assert_eq!(form.role, "Rector");
    }
}

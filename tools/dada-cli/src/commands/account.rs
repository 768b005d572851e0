//! Account commands.

use anyhow::{anyhow, Result};
use dada_auth::{AuthError, IdentityStore, User, UserUpdate};
use dada_commerce::UserId;
use dada_i18n::{t, Language};
use dada_kv::KvBackend;
use tracing::info;

use super::{AccountArgs, AccountCommand, UsersCommand};
use crate::context::Context;

/// Run the account command.
pub fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    let lang = ctx.language;
    let mut identity = ctx.identity()?;

    match args.command {
        AccountCommand::Signup {
            name,
            username,
            email,
            password,
        } => {
            let user = identity
                .signup(&name, &username, &email, &password)
                .map_err(|e| localize(e, lang))?;
            if ctx.output.is_json() {
                ctx.output.json(&user);
            } else {
                ctx.output.success(t(lang, "signup.successMessage"));
                ctx.output.kv("id", user.id.as_str());
            }
        }
        AccountCommand::Login { user, password } => {
            let user = identity
                .login(&user, &password)
                .map_err(|e| localize(e, lang))?;
            if ctx.output.is_json() {
                ctx.output.json(&user);
            } else {
                ctx.output.success(t(lang, "login.successMessage"));
                print_user(ctx, &user);
            }
        }
        AccountCommand::Logout => {
            identity.logout()?;
            ctx.output.success(t(lang, "logout.title"));
        }
        AccountCommand::Whoami => match identity.current_user() {
            Some(user) if ctx.output.is_json() => ctx.output.json(user),
            Some(user) => print_user(ctx, user),
            None if ctx.output.is_json() => ctx.output.json(&serde_json::Value::Null),
            None => ctx.output.info("Not signed in."),
        },
        AccountCommand::Users { command } => {
            manage_users(&mut identity, command.unwrap_or(UsersCommand::List), ctx)?
        }
    }

    Ok(())
}

fn manage_users<B: KvBackend>(
    identity: &mut IdentityStore<B>,
    command: UsersCommand,
    ctx: &Context,
) -> Result<()> {
    let lang = ctx.language;
    let acting = identity
        .require_admin_session()
        .map_err(|e| localize(e, lang))?
        .clone();

    match command {
        UsersCommand::List => {
            if ctx.output.is_json() {
                ctx.output.json(&identity.users());
                return Ok(());
            }
            ctx.output.header(t(lang, "admin.users"));
            let widths = [20, 16, 28, 8];
            ctx.output
                .table_row(&["ID", "USERNAME", "EMAIL", "ROLE"], &widths);
            for user in identity.managed_users() {
                ctx.output.table_row(
                    &[user.id.as_str(), &user.username, &user.email, user.role.as_str()],
                    &widths,
                );
            }
        }
        UsersCommand::SetRole { id, role } => {
            let update = UserUpdate {
                role: Some(role),
                ..Default::default()
            };
            let user = identity
                .update_user(&acting, &UserId::new(id), update)
                .map_err(|e| localize(e, lang))?;
            info!(admin = %acting.username, user = %user.id, role = %user.role, "role changed");
            ctx.output
                .success(&format!("{} is now {}", user.username, user.role));
        }
        UsersCommand::Delete { id } => {
            let user = identity
                .delete_user(&acting, &UserId::new(id))
                .map_err(|e| localize(e, lang))?;
            info!(admin = %acting.username, user = %user.id, "user deleted");
            ctx.output.success(&format!("Deleted {}", user.username));
        }
    }

    Ok(())
}

fn print_user(ctx: &Context, user: &User) {
    ctx.output.kv("id", user.id.as_str());
    ctx.output.kv("username", &user.username);
    ctx.output.kv("email", &user.email);
    ctx.output.kv("name", &user.full_name);
    ctx.output.kv("role", user.role.as_str());
}

/// Show storefront wording for errors that have it.
fn localize(err: AuthError, lang: Language) -> anyhow::Error {
    match err.message_key() {
        Some(key) => anyhow!("{}", t(lang, key)),
        None => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dada_kv::{MemoryBackend, Store};

    #[test]
    fn test_localize_known_errors() {
        let err = localize(AuthError::InvalidCredentials, Language::Fr);
        assert_eq!(err.to_string(), t(Language::Fr, "login.invalidCredentials"));
    }

    #[test]
    fn test_localize_passes_other_errors_through() {
        let err = localize(AuthError::NotAuthenticated, Language::Ar);
        assert_eq!(err.to_string(), AuthError::NotAuthenticated.to_string());
    }

    #[test]
    fn test_user_management_requires_admin() {
        let ctx = Context {
            config: Default::default(),
            config_path: None,
            output: crate::output::Output::new(false, true),
            cwd: std::env::temp_dir(),
            language: Language::Ar,
        };
        let mut identity = IdentityStore::load(Store::new(MemoryBackend::new())).unwrap();
        identity.signup("Nour", "nour", "nour@mail.dz", "pass").unwrap();
        identity.login("nour", "pass").unwrap();
        assert!(manage_users(&mut identity, UsersCommand::List, &ctx).is_err());

        identity.login("admin", "admin123").unwrap();
        assert!(manage_users(&mut identity, UsersCommand::List, &ctx).is_ok());
    }
}

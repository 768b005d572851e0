//! The identity store: registered users and the signed-in user.

use crate::user::{Role, User, UserUpdate, BUILTIN_ADMIN_ID};
use crate::AuthError;
use dada_commerce::ids::UserId;
use dada_kv::{KvBackend, Store};
use tracing::{info, warn};

/// Storage key holding the JSON array of users.
pub const USERS_KEY: &str = "users";
/// Storage key holding the signed-in user.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Shortest password accepted at login and signup.
pub const MIN_PASSWORD_LEN: usize = 4;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

/// Fails unless `user` is an administrator.
pub fn require_admin(user: &User) -> Result<(), AuthError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions)
    }
}

/// Users and the current sign-in, persisted in a key-value store.
pub struct IdentityStore<B> {
    store: Store<B>,
    users: Vec<User>,
    current: Option<User>,
}

impl<B: KvBackend> IdentityStore<B> {
    /// Load users and the signed-in user from storage.
    ///
    /// A fresh store starts with the built-in administrator only. If the
    /// stored list has lost that account, it is put back.
    pub fn load(mut store: Store<B>) -> Result<Self, AuthError> {
        let mut users: Vec<User> = store
            .get(USERS_KEY)?
            .unwrap_or_else(|| vec![User::builtin_admin()]);
        if !users.iter().any(User::is_builtin_admin) {
            users.insert(0, User::builtin_admin());
        }
        store.set(USERS_KEY, &users)?;

        let current: Option<User> = store.get(CURRENT_USER_KEY)?;
        Ok(Self {
            store,
            users,
            current,
        })
    }

    /// Sign in by username or email.
    pub fn login(&mut self, username_or_email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.authenticate(username_or_email, password).cloned();
        let Some(user) = user else {
            warn!(login = %username_or_email, "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        };

        self.store.set(CURRENT_USER_KEY, &user)?;
        info!(user_id = %user.id, role = %user.role, "User signed in");
        self.current = Some(user.clone());
        Ok(user)
    }

    fn authenticate(&self, username_or_email: &str, password: &str) -> Option<&User> {
        if username_or_email == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            if let Some(admin) = self.users.iter().find(|u| u.username == ADMIN_USERNAME) {
                return Some(admin);
            }
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return None;
        }
        self.users.iter().find(|u| u.matches_login(username_or_email))
    }

    /// Register a new regular user. The new user is not signed in.
    pub fn signup(
        &mut self,
        full_name: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(format!(
                "at least {MIN_PASSWORD_LEN} characters required"
            )));
        }
        if let Some(taken) = self.taken_by(username, email, None) {
            return Err(AuthError::UserAlreadyExists(taken));
        }

        let user = User::new(self.next_user_id(), username, email, full_name);
        let mut users = self.users.clone();
        users.push(user.clone());
        self.commit_users(users)?;
        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Sign out. Does nothing if no one is signed in.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.delete(CURRENT_USER_KEY)?;
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "User signed out");
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(User::is_admin)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Users shown in the admin user list: everyone but the built-in admin.
    pub fn managed_users(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| !u.is_builtin_admin())
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// The signed-in user, if an administrator.
    pub fn require_admin_session(&self) -> Result<&User, AuthError> {
        let user = self.current.as_ref().ok_or(AuthError::NotAuthenticated)?;
        require_admin(user)?;
        Ok(user)
    }

    /// Edit a user on behalf of `acting`.
    pub fn update_user(
        &mut self,
        acting: &User,
        id: &UserId,
        update: UserUpdate,
    ) -> Result<User, AuthError> {
        require_admin(acting)?;
        let index = self
            .users
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| AuthError::UserNotFound(id.to_string()))?;

        if self.users[index].is_builtin_admin() && update.role.is_some_and(|r| r != Role::Admin) {
            return Err(AuthError::ProtectedUser(id.to_string()));
        }
        let username = update.username.as_deref().unwrap_or("");
        let email = update.email.as_deref().unwrap_or("");
        if let Some(taken) = self.taken_by(username, email, Some(id)) {
            return Err(AuthError::UserAlreadyExists(taken));
        }

        let mut users = self.users.clone();
        update.apply(&mut users[index]);
        let updated = users[index].clone();
        self.commit_users(users)?;

        if self.current.as_ref().is_some_and(|c| &c.id == id) {
            self.store.set(CURRENT_USER_KEY, &updated)?;
            self.current = Some(updated.clone());
        }
        info!(user_id = %id, by = %acting.id, "User updated");
        Ok(updated)
    }

    /// Delete a user on behalf of `acting`.
    pub fn delete_user(&mut self, acting: &User, id: &UserId) -> Result<User, AuthError> {
        require_admin(acting)?;
        if &acting.id == id {
            return Err(AuthError::CannotDeleteSelf);
        }
        if id.as_str() == BUILTIN_ADMIN_ID {
            return Err(AuthError::ProtectedUser(id.to_string()));
        }
        let index = self
            .users
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| AuthError::UserNotFound(id.to_string()))?;

        let mut users = self.users.clone();
        let removed = users.remove(index);
        self.commit_users(users)?;
        info!(user_id = %id, by = %acting.id, "User deleted");
        Ok(removed)
    }

    pub fn into_store(self) -> Store<B> {
        self.store
    }

    // Returns the conflicting username or email. Empty strings never conflict.
    fn taken_by(&self, username: &str, email: &str, except: Option<&UserId>) -> Option<String> {
        self.users
            .iter()
            .filter(|u| Some(&u.id) != except)
            .find_map(|u| {
                if !username.is_empty() && u.username == username {
                    Some(username.to_string())
                } else if !email.is_empty() && u.email == email {
                    Some(email.to_string())
                } else {
                    None
                }
            })
    }

    fn next_user_id(&self) -> UserId {
        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let id = UserId::new(format!("user-{millis}"));
            if self.user(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    // Memory only changes once the write has gone through.
    fn commit_users(&mut self, users: Vec<User>) -> Result<(), AuthError> {
        self.store.set(USERS_KEY, &users)?;
        self.users = users;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dada_kv::{FileBackend, KvError, MemoryBackend};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Memory storage whose writes can be switched off.
    #[derive(Default)]
    struct Lockable {
        inner: MemoryBackend,
        locked: Rc<Cell<bool>>,
    }

    impl KvBackend for Lockable {
        fn get(&self, key: &str) -> Result<Option<String>, KvError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
            if self.locked.get() {
                return Err(KvError::OpenError("storage is read-only".into()));
            }
            self.inner.set(key, value)
        }

        fn delete(&mut self, key: &str) -> Result<bool, KvError> {
            if self.locked.get() {
                return Err(KvError::OpenError("storage is read-only".into()));
            }
            self.inner.delete(key)
        }

        fn keys(&self) -> Result<Vec<String>, KvError> {
            self.inner.keys()
        }
    }

    fn fresh() -> IdentityStore<MemoryBackend> {
        IdentityStore::load(Store::new(MemoryBackend::new())).unwrap()
    }

    fn with_member() -> (IdentityStore<MemoryBackend>, User) {
        let mut ids = fresh();
        let user = ids
            .signup("Yacine B", "yacine", "yacine@mail.dz", "secret")
            .unwrap();
        (ids, user)
    }

    #[test]
    fn test_fresh_store_has_builtin_admin() {
        let ids = fresh();
        assert_eq!(ids.users().len(), 1);
        assert!(ids.users()[0].is_builtin_admin());
        assert!(!ids.is_authenticated());
        assert_eq!(ids.managed_users().count(), 0);
    }

    #[test]
    fn test_load_restores_missing_admin() {
        let mut store = Store::new(MemoryBackend::new());
        let other = User::new(UserId::new("user-1"), "amel", "amel@mail.dz", "Amel");
        store.set(USERS_KEY, &vec![other]).unwrap();

        let ids = IdentityStore::load(store).unwrap();
        assert_eq!(ids.users().len(), 2);
        assert!(ids.user(&UserId::new(BUILTIN_ADMIN_ID)).is_some());
    }

    #[test]
    fn test_admin_shortcut_login() {
        let mut ids = fresh();
        let user = ids.login("admin", "admin123").unwrap();
        assert!(user.is_builtin_admin());
        assert!(ids.is_authenticated());
        assert!(ids.is_admin());
    }

    #[test]
    fn test_login_by_username_or_email() {
        let (mut ids, user) = with_member();
        assert_eq!(ids.login("yacine", "1234").unwrap().id, user.id);
        ids.logout().unwrap();
        assert_eq!(ids.login("yacine@mail.dz", "abcd").unwrap().id, user.id);
        assert!(!ids.is_admin());
    }

    #[test]
    fn test_login_rejects_short_password_and_unknown_user() {
        let (mut ids, _) = with_member();
        let err = ids.login("yacine", "abc").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(err.is_auth_failure());
        assert!(ids.login("nobody", "password").is_err());
        assert!(!ids.is_authenticated());
    }

    #[test]
    fn test_signup_rejects_duplicates() {
        let (mut ids, _) = with_member();
        let err = ids.signup("Other", "yacine", "other@mail.dz", "secret").unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists(_)));
        assert_eq!(err.message_key(), Some("signup.userExists"));
        assert!(ids.signup("Other", "other", "yacine@mail.dz", "secret").is_err());
        assert!(ids.signup("Other", "admin", "x@mail.dz", "secret").is_err());
    }

    #[test]
    fn test_signup_does_not_sign_in() {
        let (ids, user) = with_member();
        assert_eq!(user.role, Role::User);
        assert!(user.id.as_str().starts_with("user-"));
        assert!(!ids.is_authenticated());
    }

    #[test]
    fn test_signup_ids_are_unique() {
        let mut ids = fresh();
        let a = ids.signup("A", "a", "a@mail.dz", "pass").unwrap();
        let b = ids.signup("B", "b", "b@mail.dz", "pass").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_signup_weak_password() {
        let mut ids = fresh();
        assert!(matches!(
            ids.signup("A", "a", "a@mail.dz", "abc"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_logout_clears_storage() {
        let mut ids = fresh();
        ids.login("admin", "admin123").unwrap();
        ids.logout().unwrap();
        assert!(ids.current_user().is_none());
        let store = ids.into_store();
        assert!(!store.exists(CURRENT_USER_KEY).unwrap());
    }

    #[test]
    fn test_session_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.json");

        let mut ids = IdentityStore::load(Store::new(FileBackend::open(&path).unwrap())).unwrap();
        ids.signup("Sara", "sara", "sara@mail.dz", "pass").unwrap();
        ids.login("sara", "pass").unwrap();
        drop(ids);

        let ids = IdentityStore::load(Store::new(FileBackend::open(&path).unwrap())).unwrap();
        assert_eq!(ids.users().len(), 2);
        assert_eq!(ids.current_user().map(|u| u.username.as_str()), Some("sara"));
    }

    #[test]
    fn test_update_requires_admin() {
        let (mut ids, member) = with_member();
        let err = ids
            .update_user(&member, &member.id, UserUpdate::default())
            .unwrap_err();
        assert!(err.is_permission_error());
    }

    #[test]
    fn test_update_user() {
        let (mut ids, member) = with_member();
        let admin = ids.login("admin", "admin123").unwrap();
        let updated = ids
            .update_user(
                &admin,
                &member.id,
                UserUpdate {
                    full_name: Some("Yacine Benali".into()),
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.full_name, "Yacine Benali");
        assert!(ids.user(&member.id).unwrap().is_admin());
    }

    #[test]
    fn test_update_refreshes_current_user() {
        let mut ids = fresh();
        let admin = ids.login("admin", "admin123").unwrap();
        ids.update_user(
            &admin,
            &admin.id,
            UserUpdate {
                full_name: Some("Patron".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(ids.current_user().unwrap().full_name, "Patron");
    }

    #[test]
    fn test_builtin_admin_role_is_protected() {
        let mut ids = fresh();
        let admin = ids.login("admin", "admin123").unwrap();
        let err = ids
            .update_user(
                &admin,
                &admin.id,
                UserUpdate {
                    role: Some(Role::User),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, AuthError::ProtectedUser(_)));
    }

    #[test]
    fn test_update_rejects_taken_email() {
        let (mut ids, member) = with_member();
        let admin = ids.login("admin", "admin123").unwrap();
        let err = ids
            .update_user(
                &admin,
                &member.id,
                UserUpdate {
                    email: Some("admin@gymstore.com".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists(_)));
    }

    #[test]
    fn test_delete_user() {
        let (mut ids, member) = with_member();
        let admin = ids.login("admin", "admin123").unwrap();
        let removed = ids.delete_user(&admin, &member.id).unwrap();
        assert_eq!(removed.id, member.id);
        assert!(ids.user(&member.id).is_none());
        assert!(matches!(
            ids.delete_user(&admin, &member.id),
            Err(AuthError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_delete_guards() {
        let (mut ids, member) = with_member();
        let admin = ids.login("admin", "admin123").unwrap();

        let err = ids.delete_user(&admin, &admin.id).unwrap_err();
        assert!(matches!(err, AuthError::CannotDeleteSelf));
        assert_eq!(err.message_key(), Some("admin.users.cannotDeleteSelf"));

        let promoted = ids
            .update_user(
                &admin,
                &member.id,
                UserUpdate {
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .unwrap();
        let err = ids
            .delete_user(&promoted, &UserId::new(BUILTIN_ADMIN_ID))
            .unwrap_err();
        assert!(matches!(err, AuthError::ProtectedUser(_)));
    }

    #[test]
    fn test_require_admin_session() {
        let (mut ids, _) = with_member();
        assert!(matches!(
            ids.require_admin_session(),
            Err(AuthError::NotAuthenticated)
        ));
        ids.login("yacine", "secret").unwrap();
        assert!(matches!(
            ids.require_admin_session(),
            Err(AuthError::InsufficientPermissions)
        ));
        ids.logout().unwrap();
        ids.login("admin", "admin123").unwrap();
        assert!(ids.require_admin_session().is_ok());
    }

    #[test]
    fn test_failed_write_leaves_users_unchanged() {
        let backend = Lockable::default();
        let locked = Rc::clone(&backend.locked);
        let mut ids = IdentityStore::load(Store::new(backend)).unwrap();
        let member = ids
            .signup("Yacine B", "yacine", "yacine@mail.dz", "secret")
            .unwrap();
        let admin = ids.login("admin", "admin123").unwrap();

        locked.set(true);

        let err = ids.signup("Nour", "nour", "nour@mail.dz", "pass").unwrap_err();
        assert!(matches!(err, AuthError::Storage(_)));
        assert_eq!(ids.users().len(), 2);

        let update = UserUpdate {
            role: Some(Role::Admin),
            ..Default::default()
        };
        assert!(ids.update_user(&admin, &member.id, update).is_err());
        assert_eq!(ids.user(&member.id).unwrap().role, Role::User);

        assert!(ids.delete_user(&admin, &member.id).is_err());
        assert!(ids.user(&member.id).is_some());

        assert!(ids.logout().is_err());
        assert!(ids.is_authenticated());
    }
}

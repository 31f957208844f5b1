use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use tokio::task;

use crate::modules::user::domain::{User, UserRepository};
use crate::log_info;
use crate::modules::user::infrastructure::models::{
    NewRole, NewUser, NewUserRole, RoleModel, UserModel,
};
use crate::schema::{roles, user_roles, users};
use crate::shared::{
    errors::{AppError, AppResult},
    Database,
};

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Register `user` together with its roles.
    ///
    /// Roles are matched by authority; an existing role keeps its id.
    pub async fn insert(&self, user: &User) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let new_user = NewUser {
            id: user.id,
            username: user.username.clone(),
            password: user.password.clone(),
        };
        let new_roles: Vec<NewRole> = user
            .roles
            .iter()
            .map(|r| NewRole {
                id: r.id,
                authority: r.authority.clone(),
            })
            .collect();

        let saved = task::spawn_blocking(move || -> AppResult<User> {
            let mut conn = db.get_connection()?;
            conn.transaction::<_, AppError, _>(|conn| {
                let user = diesel::insert_into(users::table)
                    .values(&new_user)
                    .returning(UserModel::as_returning())
                    .get_result::<UserModel>(conn)?;

                let mut stored_roles = Vec::with_capacity(new_roles.len());
                for role in &new_roles {
                    let stored = diesel::insert_into(roles::table)
                        .values(role)
                        .on_conflict(roles::authority)
                        .do_update()
                        .set(roles::authority.eq(excluded(roles::authority)))
                        .returning(RoleModel::as_returning())
                        .get_result::<RoleModel>(conn)?;

                    diesel::insert_into(user_roles::table)
                        .values(NewUserRole {
                            user_id: user.id,
                            role_id: stored.id,
                        })
                        .execute(conn)?;
                    stored_roles.push(stored);
                }

                Ok(user.into_user(stored_roles))
            })
        })
        .await??;

        log_info!("Registered user {} ({} roles)", saved.username, saved.roles.len());
        Ok(saved)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        task::spawn_blocking(move || -> AppResult<Option<User>> {
            let mut conn = db.get_connection()?;

            let Some(user) = users::table
                .filter(users::username.eq(&username))
                .select(UserModel::as_select())
                .first::<UserModel>(&mut conn)
                .optional()?
            else {
                return Ok(None);
            };

            let role_rows = user_roles::table
                .inner_join(roles::table)
                .filter(user_roles::user_id.eq(user.id))
                .order(roles::authority.asc())
                .select(RoleModel::as_select())
                .load::<RoleModel>(&mut conn)?;

            Ok(Some(user.into_user(role_rows)))
        })
        .await?
    }
}

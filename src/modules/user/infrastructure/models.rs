use crate::modules::user::domain::{Role, User};
use crate::schema::{roles, user_roles, users};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoleModel {
    pub id: Uuid,
    pub authority: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = roles)]
pub struct NewRole {
    pub id: Uuid,
    pub authority: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user_roles)]
pub struct NewUserRole {
    pub user_id: Uuid,
    pub role_id: Uuid,
}

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: model.id,
            authority: model.authority,
        }
    }
}

impl UserModel {
    pub fn into_user(self, roles: Vec<RoleModel>) -> User {
        User {
            id: self.id,
            username: self.username,
            password: self.password,
            roles: roles.into_iter().map(Role::from).collect(),
        }
    }
}

use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub preferences: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewProfile {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub preferences: Option<String>,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Profile"))
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewProfile) -> Result<Model, ModelError> {
    user::ensure_exists(db, new.user_id).await?;
    let am = ActiveModel {
        user_id: Set(new.user_id),
        first_name: Set(new.first_name),
        last_name: Set(new.last_name),
        phone_number: Set(new.phone_number),
        preferences: Set(new.preferences),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewProfile) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    user::ensure_exists(db, new.user_id).await?;
    am.user_id = Set(new.user_id);
    am.first_name = Set(new.first_name);
    am.last_name = Set(new.last_name);
    am.phone_number = Set(new.phone_number);
    am.preferences = Set(new.preferences);
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

//! The vehicle each user has registered
use sea_orm::entity::prelude::*;

use crate::vehicles::VehicleDetails;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_vehicles")]
/// One vehicle per user
pub struct Model {
    #[sea_orm(primary_key)]
    /// db id
    pub id: i32,
    #[sea_orm(unique)]
    /// normalized username
    pub username: String,
    /// manufacturer, eg "Honda"
    pub make: String,
    /// model name, eg "Civic"
    pub model_name: String,
    /// when the row was first written
    pub created_at: DateTime,
}

/// user_vehicles has no relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Finds the row for `username`, which must already be normalized.
    pub async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Self::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }
}

impl From<Model> for VehicleDetails {
    fn from(model: Model) -> Self {
        VehicleDetails::new(model.make, model.model_name)
    }
}

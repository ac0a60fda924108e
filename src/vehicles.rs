//! Looking up which vehicle a user drives.

use std::fmt;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::db::entities::user_vehicles;
use crate::error::VehicleError;

/// Make and model of a vehicle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    /// manufacturer, eg "Honda"
    pub make: String,
    /// model, eg "Civic"
    pub model: String,
}

impl VehicleDetails {
    /// Builds a new set of details
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for VehicleDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.make, self.model)
    }
}

/// Resolves the vehicle registered to a user.
///
/// Handlers only ever see this trait, so tests can hand the router a mock.
#[async_trait]
pub trait UserVehicleService: Send + Sync {
    /// Returns the vehicle for an already normalized `username`, or
    /// [`VehicleError::UserNotFound`] when nothing is registered.
    async fn get_vehicle_details(&self, username: &str) -> Result<VehicleDetails, VehicleError>;
}

/// [`UserVehicleService`] backed by the `user_vehicles` table
#[derive(Clone, Debug)]
pub struct DbUserVehicleService {
    db: DatabaseConnection,
}

impl DbUserVehicleService {
    /// Wraps an already migrated connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores `details` as the vehicle for `username`, replacing any previous one.
    pub async fn register(
        &self,
        username: &str,
        details: &VehicleDetails,
    ) -> Result<(), VehicleError> {
        let username = crate::web::normalize_username_strict(username)?;
        let make = details.make.trim();
        let model = details.model.trim();
        if make.is_empty() || model.is_empty() {
            return Err(VehicleError::BadRequest(
                "make and model must not be empty".to_string(),
            ));
        }

        let db_txn = self.db.begin().await?;
        match user_vehicles::Entity::find_by_username(&db_txn, &username).await? {
            Some(existing) => {
                debug!("Replacing vehicle for {username}");
                let mut am = existing.into_active_model();
                am.make = Set(make.to_string());
                am.model_name = Set(model.to_string());
                am.update(&db_txn).await?;
            }
            None => {
                user_vehicles::ActiveModel {
                    username: Set(username.clone()),
                    make: Set(make.to_string()),
                    model_name: Set(model.to_string()),
                    ..Default::default()
                }
                .insert(&db_txn)
                .await?;
            }
        }
        db_txn.commit().await?;

        info!("Registered {make} {model} for {username}");
        Ok(())
    }
}

#[async_trait]
impl UserVehicleService for DbUserVehicleService {
    async fn get_vehicle_details(&self, username: &str) -> Result<VehicleDetails, VehicleError> {
        user_vehicles::Entity::find_by_username(&self.db, username)
            .await?
            .map(VehicleDetails::from)
            .ok_or_else(|| VehicleError::UserNotFound(username.to_string()))
    }
}

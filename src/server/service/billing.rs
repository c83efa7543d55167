use sea_orm::DatabaseConnection;

use crate::server::{
    data::billing::BillingRepository,
    error::AppError,
    model::billing::{Billing, CreateBillingParams, UpdateBillingParams},
    util::validate::{require_text, validate_email, validate_phone},
};

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a billing snapshot after validating every field.
    pub async fn create(&self, params: CreateBillingParams) -> Result<Billing, AppError> {
        let params = CreateBillingParams {
            user_ref: require_text("userId", &params.user_ref)?,
            full_name: require_text("fullName", &params.full_name)?,
            email: validate_email(&params.email)?,
            phone: validate_phone(&params.phone)?,
            address: require_text("address", &params.address)?,
            city: require_text("city", &params.city)?,
            postal_code: require_text("postalCode", &params.postal_code)?,
        };

        BillingRepository::new(self.db).create(params).await
    }

    pub async fn get_all(&self) -> Result<Vec<Billing>, AppError> {
        BillingRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Billing>, AppError> {
        BillingRepository::new(self.db).find_by_id(id).await
    }

    pub async fn update(&self, id: i32, params: UpdateBillingParams) -> Result<Billing, AppError> {
        let repo = BillingRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(billing_not_found(id));
        }

        let required = |field: &str, value: Option<String>| {
            value.map(|v| require_text(field, &v)).transpose()
        };
        let params = UpdateBillingParams {
            full_name: required("fullName", params.full_name)?,
            email: params.email.map(|e| validate_email(&e)).transpose()?,
            phone: params.phone.map(|p| validate_phone(&p)).transpose()?,
            address: required("address", params.address)?,
            city: required("city", params.city)?,
            postal_code: required("postalCode", params.postal_code)?,
        };

        repo.update(id, params).await
    }

    /// Deletes a billing record that no payment references.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::NotFound)` - No billing record with that ID
    /// - `Err(AppError::BadRequest)` - Payments still reference the record
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BillingRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(billing_not_found(id));
        }

        let payments = repo.payment_count(id).await?;
        if payments > 0 {
            return Err(AppError::BadRequest(format!(
                "Billing {} is referenced by {} payment(s)",
                id, payments
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

fn billing_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Billing {} not found", id))
}

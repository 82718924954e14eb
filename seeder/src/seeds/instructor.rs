use crate::seed::Seeder;
use chrono::NaiveDate;
use db::models::instructor::Model;
use fake::{
    Fake,
    faker::name::en::{FirstName, LastName},
};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;

pub struct InstructorSeeder;

#[async_trait::async_trait]
impl Seeder for InstructorSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Use a Send-compatible RNG
        let mut rng = StdRng::from_rng(OsRng).expect("Failed to seed RNG");

        for _ in 0..8 {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let hire_date = if rng.gen_bool(0.8) {
                NaiveDate::from_ymd_opt(
                    rng.gen_range(2005..=2024),
                    rng.gen_range(1..=12),
                    rng.gen_range(1..=28),
                )
            } else {
                None
            };

            let _ = Model::create(db, &first_name, &last_name, hire_date).await;
        }
    }
}

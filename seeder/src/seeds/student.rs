use crate::seed::Seeder;
use db::models::student::Model;
use fake::{
    Fake,
    faker::name::en::{FirstName, LastName},
};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Use a Send-compatible RNG
        let mut rng = StdRng::from_rng(OsRng).expect("Failed to seed RNG");

        for _ in 0..50 {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let year = rng.gen_bool(0.9).then(|| rng.gen_range(1..=4));
            // Two-decimal GPA on a 4.0 scale, occasionally missing.
            let gpa = rng
                .gen_bool(0.85)
                .then(|| (rng.gen_range(0.0..=4.0f64) * 100.0).round() / 100.0);

            let _ = Model::create(db, &first_name, &last_name, year, gpa).await;
        }
    }
}

use crate::error::RostrumResult;
use sqlx::SqliteConnection;

pub mod evaluation;
pub mod student;

pub trait DataType: Sized {
    type Id;
    type FormForAdding;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RostrumResult<Option<Self>>;
    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RostrumResult<Self::Id>;
}

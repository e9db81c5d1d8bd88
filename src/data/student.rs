use crate::{
    data::DataType,
    error::{CommitTransactionSnafu, MakeQuerySnafu, RostrumResult},
    state::RostrumState,
};
use maud::{Markup, Render, html};
use serde::Deserialize;
use snafu::ResultExt;
use sqlx::{FromRow, Pool, Sqlite, SqliteConnection};

#[derive(Clone, Debug, FromRow)]
pub struct Student {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
}

#[derive(Debug, Deserialize)]
pub struct AddStudentForm {
    pub firstname: String,
    pub lastname: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub async fn get_all(pool: &Pool<Sqlite>) -> RostrumResult<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, firstname, lastname FROM students ORDER BY lastname, id",
        )
        .fetch_all(pool)
        .await
        .context(MakeQuerySnafu)
    }

    //evaluations go first so no evaluation ever outlives its student
    pub async fn remove_with_evaluations(id: i64, state: &RostrumState) -> RostrumResult<()> {
        let mut tx = state.get_transaction().await?;

        sqlx::query("DELETE FROM evaluations WHERE student_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context(MakeQuerySnafu)?;
        sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context(MakeQuerySnafu)?;

        tx.commit().await.context(CommitTransactionSnafu)
    }
}

impl DataType for Student {
    type Id = i64;
    type FormForAdding = AddStudentForm;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RostrumResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, firstname, lastname FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RostrumResult<Self::Id> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO students (firstname, lastname) VALUES (?, ?) RETURNING id",
        )
        .bind(to_be_added.firstname)
        .bind(to_be_added.lastname)
        .fetch_one(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }
}

impl Render for Student {
    fn render(&self) -> Markup {
        html! {
            (self.firstname) " " (self.lastname)
        }
    }
}

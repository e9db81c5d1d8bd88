use crate::{
    data::DataType,
    error::{MakeQuerySnafu, RostrumResult},
};
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use snafu::ResultExt;
use sqlx::{FromRow, SqliteConnection};

///Field name and user-facing label for each of the five grading criteria.
pub const CRITERIA: [(&str, &str); 5] = [
    ("non_verbal", "Non-verbal (eye contact, voice, posture)"),
    ("clarity_articulation", "Clarity and articulation"),
    ("logical_flow", "Logical flow"),
    ("slides_quality", "Quality of the slide deck"),
    ("spec_respect", "Respect of the brief"),
];

///Coded grade levels offered by the submission form. The store accepts any
///short string, so these are a convention rather than an enforced domain.
pub const GRADE_CODES: [&str; 5] = ["A+", "A", "B", "C", "D"];

#[derive(Clone, Debug, FromRow)]
pub struct Evaluation {
    pub id: i64,
    pub evaluation_date: NaiveDateTime,
    pub non_verbal: String,
    pub clarity_articulation: String,
    pub logical_flow: String,
    pub slides_quality: String,
    pub spec_respect: String,
    pub improvement_axes: Option<String>,
    pub student_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddEvaluationForm {
    pub non_verbal: String,
    pub clarity_articulation: String,
    pub logical_flow: String,
    pub slides_quality: String,
    pub spec_respect: String,
    pub improvement_axes: String,
}

pub struct NewEvaluation {
    pub student_id: i64,
    pub form: AddEvaluationForm,
}

impl Evaluation {
    pub fn criterion_grades(&self) -> [&str; 5] {
        [
            &self.non_verbal,
            &self.clarity_articulation,
            &self.logical_flow,
            &self.slides_quality,
            &self.spec_respect,
        ]
    }

    //most recent first, insertion order breaking ties on equal timestamps
    pub async fn get_all_for_student(
        student_id: i64,
        conn: &mut SqliteConnection,
    ) -> RostrumResult<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM evaluations WHERE student_id = ? ORDER BY evaluation_date DESC, id ASC",
        )
        .bind(student_id)
        .fetch_all(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    pub async fn remove_from_database(id: i64, conn: &mut SqliteConnection) -> RostrumResult<()> {
        sqlx::query("DELETE FROM evaluations WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}

impl DataType for Evaluation {
    type Id = i64;
    type FormForAdding = NewEvaluation;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RostrumResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM evaluations WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RostrumResult<Self::Id> {
        let NewEvaluation { student_id, form } = to_be_added;
        let AddEvaluationForm {
            non_verbal,
            clarity_articulation,
            logical_flow,
            slides_quality,
            spec_respect,
            improvement_axes,
        } = form;

        let improvement_axes = if improvement_axes.is_empty() {
            None
        } else {
            Some(improvement_axes)
        };

        sqlx::query_scalar::<_, i64>(
            "INSERT INTO evaluations (evaluation_date, non_verbal, clarity_articulation, logical_flow, slides_quality, spec_respect, improvement_axes, student_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(Utc::now().naive_utc())
        .bind(non_verbal)
        .bind(clarity_articulation)
        .bind(logical_flow)
        .bind(slides_quality)
        .bind(spec_respect)
        .bind(improvement_axes)
        .bind(student_id)
        .fetch_one(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }
}

use crate::{
    data::{
        DataType,
        evaluation::{AddEvaluationForm, CRITERIA, Evaluation, GRADE_CODES, NewEvaluation},
        student::Student,
    },
    error::{MissingEvaluationSnafu, MissingStudentSnafu, RostrumResult},
    flash::{FlashLevel, push_flash, take_flashes},
    maud_conveniences::{form_element, form_submit_button, title},
    state::RostrumState,
};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use maud::{Markup, html};
use snafu::OptionExt;
use tower_sessions::Session;

fn grade_select(name: &'static str) -> Markup {
    html! {
        select id=(name) name=(name) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {
            @for grade in GRADE_CODES {
                option value=(grade) {(grade)}
            }
        }
    }
}

pub async fn get_add_evaluation_form(
    State(state): State<RostrumState>,
    session: Session,
    Path(student_id): Path<i64>,
) -> RostrumResult<Markup> {
    let student = Student::get_from_db_by_id(student_id, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id: student_id })?;
    let flashes = take_flashes(&session).await?;

    Ok(state.render(
        flashes,
        html! {
            div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
                (title(format!("New Evaluation for {}", student.full_name())))

                form method="post" class="p-4" {
                    @for (name, label) in CRITERIA {
                        (form_element(name, label, grade_select(name)))
                    }
                    (form_element("improvement_axes", "Improvement Axes", html! {
                        textarea id="improvement_axes" name="improvement_axes" rows="4" class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
                    }))
                    (form_submit_button(Some("Save Evaluation")))
                }
            }
        },
    ))
}

pub async fn post_add_evaluation(
    State(state): State<RostrumState>,
    session: Session,
    Path(student_id): Path<i64>,
    Form(form): Form<AddEvaluationForm>,
) -> RostrumResult<Redirect> {
    let mut conn = state.get_connection().await?;
    let student = Student::get_from_db_by_id(student_id, &mut conn)
        .await?
        .context(MissingStudentSnafu { id: student_id })?;

    Evaluation::insert_into_database(
        NewEvaluation {
            student_id: student.id,
            form,
        },
        &mut conn,
    )
    .await?;
    push_flash(&session, FlashLevel::Success, "Evaluation added successfully.").await?;

    Ok(Redirect::to(&format!("/student/{student_id}")))
}

pub async fn post_delete_evaluation(
    State(state): State<RostrumState>,
    session: Session,
    Path(id): Path<i64>,
) -> RostrumResult<Redirect> {
    let mut conn = state.get_connection().await?;
    let evaluation = Evaluation::get_from_db_by_id(id, &mut conn)
        .await?
        .context(MissingEvaluationSnafu { id })?;

    Evaluation::remove_from_database(id, &mut conn).await?;
    push_flash(&session, FlashLevel::Success, "The evaluation has been deleted.").await?;

    Ok(Redirect::to(&format!("/student/{}", evaluation.student_id)))
}

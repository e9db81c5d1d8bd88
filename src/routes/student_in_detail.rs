use crate::{
    data::{DataType, evaluation::Evaluation, student::Student},
    error::{MissingStudentSnafu, RostrumResult},
    flash::take_flashes,
    maud_conveniences::{escape, render_table, title},
    state::RostrumState,
};
use axum::extract::{Path, State};
use maud::{Markup, html};
use snafu::OptionExt;
use tower_sessions::Session;

pub async fn get_student(
    State(state): State<RostrumState>,
    session: Session,
    Path(id): Path<i64>,
) -> RostrumResult<Markup> {
    let mut conn = state.get_connection().await?;
    let student = Student::get_from_db_by_id(id, &mut conn)
        .await?
        .context(MissingStudentSnafu { id })?;
    let evaluations = Evaluation::get_all_for_student(id, &mut conn).await?;
    let flashes = take_flashes(&session).await?;

    let history = if evaluations.is_empty() {
        html! {
            p class="text-gray-500 italic" {"No evaluations recorded yet."}
        }
    } else {
        render_table(
            "Evaluation History",
            [
                "Date",
                "Non-verbal",
                "Clarity",
                "Logic",
                "Slides",
                "Brief",
                "Improvement Axes",
                "",
            ],
            evaluations
                .into_iter()
                .map(|evaluation| {
                    let [non_verbal, clarity, logic, slides, brief] =
                        evaluation.criterion_grades().map(|grade| escape(grade));

                    [
                        escape(
                            evaluation
                                .evaluation_date
                                .format("%d/%m/%Y %H:%M")
                                .to_string(),
                        ),
                        non_verbal,
                        clarity,
                        logic,
                        slides,
                        brief,
                        match &evaluation.improvement_axes {
                            Some(axes) => escape(axes),
                            None => html! { p class="italic" {"None"} },
                        },
                        html! {
                            form method="post" action={"/evaluation/" (evaluation.id) "/delete"} {
                                button type="submit" class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" {
                                    "Delete"
                                }
                            }
                        },
                    ]
                })
                .collect(),
        )
    };

    Ok(state.render(
        flashes,
        html! {
            div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
                (title(student.clone()))
                (history)
                div class="flex flex-row space-x-4" {
                    a href={"/student/" (student.id) "/add_evaluation"} class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {
                        "New Evaluation"
                    }
                    a href="/" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                        "Back to Students"
                    }
                }
            }
        },
    ))
}

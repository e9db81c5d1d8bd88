use crate::{
    data::{
        DataType,
        student::{AddStudentForm, Student},
    },
    error::{MissingStudentSnafu, RostrumResult},
    flash::{FlashLevel, push_flash, take_flashes},
    maud_conveniences::{escape, form_submit_button, render_table, simple_form_element, subtitle},
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

pub async fn get_index_route(
    State(state): State<RostrumState>,
    session: Session,
) -> RostrumResult<Markup> {
    let students = Student::get_all(&state).await?;
    let flashes = take_flashes(&session).await?;

    let table = render_table(
        "Students",
        ["Last Name", "First Name", ""],
        students
            .into_iter()
            .map(|student| {
                [
                    escape(&student.lastname),
                    escape(&student.firstname),
                    html! {
                        div class="flex flex-row space-x-2" {
                            a href={"/student/" (student.id)} class="bg-slate-600 hover:bg-slate-800 font-bold py-1 px-3 rounded" {
                                "View"
                            }
                            form method="post" action={"/student/" (student.id) "/delete"} {
                                button type="submit" class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" {
                                    "Delete"
                                }
                            }
                        }
                    },
                ]
            })
            .collect(),
    );

    Ok(state.render(
        flashes,
        html! {
            div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
                (table)
                div class="p-4" {
                    (subtitle("Add New Student"))
                    form method="post" action="/" {
                        (simple_form_element("firstname", "First Name", true, None))
                        (simple_form_element("lastname", "Last Name", true, None))
                        (form_submit_button(Some("Add Student")))
                    }
                }
            }
        },
    ))
}

pub async fn post_new_student(
    State(state): State<RostrumState>,
    session: Session,
    Form(form): Form<AddStudentForm>,
) -> RostrumResult<Redirect> {
    if form.firstname.trim().is_empty() || form.lastname.trim().is_empty() {
        push_flash(
            &session,
            FlashLevel::Danger,
            "Both a first name and a last name are required.",
        )
        .await?;
        return Ok(Redirect::to("/"));
    }

    let full_name = format!("{} {}", form.firstname, form.lastname);
    Student::insert_into_database(form, &mut *state.get_connection().await?).await?;
    push_flash(
        &session,
        FlashLevel::Success,
        format!("Student {full_name} added successfully!"),
    )
    .await?;

    Ok(Redirect::to("/"))
}

pub async fn post_delete_student(
    State(state): State<RostrumState>,
    session: Session,
    Path(id): Path<i64>,
) -> RostrumResult<Redirect> {
    let student = Student::get_from_db_by_id(id, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id })?;

    Student::remove_with_evaluations(id, &state).await?;
    push_flash(
        &session,
        FlashLevel::Success,
        format!(
            "Student {} and their evaluations have been deleted.",
            student.full_name()
        ),
    )
    .await?;

    Ok(Redirect::to("/"))
}

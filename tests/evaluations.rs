mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use common::{app, body_string, form_post, get, test_state};
use rostrum::{
    data::{DataType, evaluation::Evaluation, student::Student},
    state::RostrumState,
};
use tower::ServiceExt;

async fn add_student(state: &RostrumState, first: &str, last: &str) -> i64 {
    app(state)
        .oneshot(form_post("/", &format!("firstname={first}&lastname={last}")))
        .await
        .unwrap();

    Student::get_all(state)
        .await
        .unwrap()
        .into_iter()
        .find(|student| student.firstname == first)
        .unwrap()
        .id
}

async fn insert_evaluation_at(
    state: &RostrumState,
    student_id: i64,
    date: NaiveDateTime,
    marker: &str,
) {
    sqlx::query(
        "INSERT INTO evaluations (evaluation_date, non_verbal, clarity_articulation, logical_flow, slides_quality, spec_respect, improvement_axes, student_id) VALUES (?, 'A', 'A', 'A', 'A', 'A', ?, ?)",
    )
    .bind(date)
    .bind(marker)
    .bind(student_id)
    .execute(&**state)
    .await
    .unwrap();
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn submission_stores_grades_and_defaults_the_date() {
    let (_dir, state) = test_state().await;
    let ada = add_student(&state, "Ada", "Lovelace").await;

    let response = app(&state)
        .oneshot(form_post(
            &format!("/student/{ada}/add_evaluation"),
            "non_verbal=A%2B&clarity_articulation=B&logical_flow=A&slides_quality=A&spec_respect=C&improvement_axes=",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION].to_str().unwrap(),
        format!("/student/{ada}")
    );

    let mut conn = state.get_connection().await.unwrap();
    let evaluations = Evaluation::get_all_for_student(ada, &mut conn).await.unwrap();
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].criterion_grades(), ["A+", "B", "A", "A", "C"]);
    //an empty comment is stored as no comment at all
    assert_eq!(evaluations[0].improvement_axes, None);
    assert_eq!(
        evaluations[0].evaluation_date.date(),
        Utc::now().naive_utc().date()
    );
}

#[tokio::test]
async fn history_lists_most_recent_first() {
    let (_dir, state) = test_state().await;
    let ada = add_student(&state, "Ada", "Lovelace").await;

    //inserted out of order on purpose
    insert_evaluation_at(&state, ada, at(10, 9), "second-eval").await;
    insert_evaluation_at(&state, ada, at(3, 9), "first-eval").await;
    insert_evaluation_at(&state, ada, at(21, 9), "third-eval").await;

    let mut conn = state.get_connection().await.unwrap();
    let dates = Evaluation::get_all_for_student(ada, &mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|evaluation| evaluation.evaluation_date)
        .collect::<Vec<_>>();
    assert_eq!(dates, [at(21, 9), at(10, 9), at(3, 9)]);

    let body = body_string(
        app(&state)
            .oneshot(get(&format!("/student/{ada}")))
            .await
            .unwrap(),
    )
    .await;
    let third = body.find("third-eval").unwrap();
    let second = body.find("second-eval").unwrap();
    let first = body.find("first-eval").unwrap();
    assert!(third < second);
    assert!(second < first);
}

#[tokio::test]
async fn equal_timestamps_fall_back_to_insertion_order() {
    let (_dir, state) = test_state().await;
    let ada = add_student(&state, "Ada", "Lovelace").await;

    insert_evaluation_at(&state, ada, at(3, 9), "tie-a").await;
    insert_evaluation_at(&state, ada, at(3, 9), "tie-b").await;

    let mut conn = state.get_connection().await.unwrap();
    let markers = Evaluation::get_all_for_student(ada, &mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|evaluation| evaluation.improvement_axes.unwrap())
        .collect::<Vec<_>>();
    assert_eq!(markers, ["tie-a", "tie-b"]);
}

#[tokio::test]
async fn deleting_one_evaluation_spares_its_siblings() {
    let (_dir, state) = test_state().await;
    let ada = add_student(&state, "Ada", "Lovelace").await;

    insert_evaluation_at(&state, ada, at(3, 9), "keep-me").await;
    insert_evaluation_at(&state, ada, at(10, 9), "doomed").await;

    let doomed: i64 =
        sqlx::query_scalar("SELECT id FROM evaluations WHERE improvement_axes = 'doomed'")
            .fetch_one(&*state)
            .await
            .unwrap();

    let response = app(&state)
        .oneshot(form_post(&format!("/evaluation/{doomed}/delete"), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION].to_str().unwrap(),
        format!("/student/{ada}")
    );

    let mut conn = state.get_connection().await.unwrap();
    let evaluations = Evaluation::get_all_for_student(ada, &mut conn).await.unwrap();
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].improvement_axes.as_deref(), Some("keep-me"));
    assert!(Student::get_from_db_by_id(ada, &mut conn).await.unwrap().is_some());
}

#[tokio::test]
async fn full_flow_records_and_displays_an_evaluation() {
    let (_dir, state) = test_state().await;
    let app = app(&state);

    let response = app
        .clone()
        .oneshot(form_post("/", "firstname=Ada&lastname=Lovelace"))
        .await
        .unwrap();
    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    //following the redirect with the session cookie shows the flash exactly once
    let listing = body_string(
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
    )
    .await;
    assert!(listing.contains("Student Ada Lovelace added successfully!"));

    let again = body_string(
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
    )
    .await;
    assert!(!again.contains("added successfully"));

    let ada = Student::get_all(&state).await.unwrap()[0].id;
    app.clone()
        .oneshot(form_post(
            &format!("/student/{ada}/add_evaluation"),
            "non_verbal=A&clarity_articulation=B&logical_flow=A&slides_quality=A&spec_respect=C&improvement_axes=improve+pacing",
        ))
        .await
        .unwrap();

    let mut conn = state.get_connection().await.unwrap();
    let evaluations = Evaluation::get_all_for_student(ada, &mut conn).await.unwrap();
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].criterion_grades(), ["A", "B", "A", "A", "C"]);
    assert_eq!(
        evaluations[0].improvement_axes.as_deref(),
        Some("improve pacing")
    );

    let detail = body_string(
        app.clone()
            .oneshot(get(&format!("/student/{ada}")))
            .await
            .unwrap(),
    )
    .await;
    assert!(detail.contains("Ada Lovelace"));
    assert!(detail.contains("improve pacing"));
    assert!(detail.contains(&Utc::now().format("%d/%m/%Y").to_string()));
}

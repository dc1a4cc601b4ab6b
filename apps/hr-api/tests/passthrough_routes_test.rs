mod support;

use actix_web::test;
use backend_test_support::envelope::assert_success_envelope;
use hr_api::{build_state, queries};
use sea_orm::{DatabaseBackend, MockDatabase, Transaction};
use support::state_builder_ext::StateBuilderTestExt;
use support::{no_rows, region_row};

/// Every table route (aliases included) executes its fixed passthrough
/// statement and wraps the rows in the `{success, data, count}` envelope.
#[actix_web::test]
async fn test_table_routes_execute_their_fixed_statement() {
    let cases = [
        ("/regions", queries::SELECT_REGIONS),
        ("/countries", queries::SELECT_COUNTRIES),
        ("/country", queries::SELECT_COUNTRIES),
        ("/locations", queries::SELECT_LOCATIONS),
        ("/departments", queries::SELECT_DEPARTMENTS),
        ("/jobs", queries::SELECT_JOBS),
        ("/employees", queries::SELECT_EMPLOYEES),
        ("/employeess", queries::SELECT_EMPLOYEES),
        ("/job-history", queries::SELECT_JOB_HISTORY),
    ];

    for (path, expected_sql) in cases {
        let mock = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            region_row(1, "Europe"),
            region_row(2, "Americas"),
        ]]);
        let state = build_state().with_mock_db(mock).build().await.unwrap();
        let app = support::create_test_app(state.clone()).await;

        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;

        let json = assert_success_envelope(status, &body);
        assert_eq!(json["count"], 2, "{path} count");
        assert_eq!(json["data"].as_array().map(Vec::len), Some(2), "{path} data");
        assert_eq!(json["data"][0]["region_name"], "Europe", "{path} row");

        assert_eq!(
            state.into_db().into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                expected_sql,
                []
            )],
            "{path} statement"
        );
    }
}

#[actix_web::test]
async fn test_empty_table_yields_zero_count() {
    let mock = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([no_rows()]);
    let state = build_state().with_mock_db(mock).build().await.unwrap();
    let app = support::create_test_app(state).await;

    let req = test::TestRequest::get().uri("/regions").to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    let json = assert_success_envelope(status, &body);
    assert_eq!(json["count"], 0);
    assert_eq!(json["data"], serde_json::json!([]));
}

//! This file defines the API routes for outputs (expenses).

use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::OutputState,
    extract::{JsonBody, PathParam},
    models::{Output, OutputForm, OutputId},
    output::{create_output, delete_output, get_all_outputs, get_output, update_output},
    stores::{CategoryStore, OutputStore},
};

/// A route handler for creating a new output.
pub async fn create_output_endpoint<C, O>(
    State(state): State<OutputState<C, O>>,
    JsonBody(form): JsonBody<OutputForm>,
) -> Result<&'static str, Error>
where
    C: CategoryStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    create_output(&form, &state.category_store, &state.output_store)?;

    Ok("Output created successfully")
}

/// A route handler for listing every output.
pub async fn get_outputs_endpoint<C, O>(
    State(state): State<OutputState<C, O>>,
) -> Result<Json<Vec<Output>>, Error>
where
    C: CategoryStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    get_all_outputs(&state.output_store).map(Json)
}

/// A route handler for getting an output by its database ID.
///
/// Responds with JSON `null` if there is no such output.
pub async fn get_output_endpoint<C, O>(
    State(state): State<OutputState<C, O>>,
    PathParam(output_id): PathParam<OutputId>,
) -> Result<Json<Option<Output>>, Error>
where
    C: CategoryStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    get_output(output_id, &state.output_store).map(Json)
}

/// A route handler for replacing an output in place.
pub async fn update_output_endpoint<C, O>(
    State(state): State<OutputState<C, O>>,
    PathParam(output_id): PathParam<OutputId>,
    JsonBody(form): JsonBody<OutputForm>,
) -> Result<&'static str, Error>
where
    C: CategoryStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    update_output(
        output_id,
        &form,
        &state.category_store,
        &state.output_store,
    )?;

    Ok("Output updated successfully")
}

/// A route handler for deleting an output.
pub async fn delete_output_endpoint<C, O>(
    State(state): State<OutputState<C, O>>,
    PathParam(output_id): PathParam<OutputId>,
) -> Result<&'static str, Error>
where
    C: CategoryStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    delete_output(output_id, &state.output_store)?;

    Ok("Output deleted successfully")
}

#[cfg(test)]
mod output_route_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        endpoints::{self, format_endpoint},
        models::{Category, Output},
        routes::get_test_server,
    };

    async fn create_category(server: &TestServer, name: &str) -> Category {
        server
            .post(endpoints::CREATE_CATEGORY)
            .json(&json!({ "name": name }))
            .await
            .assert_status_ok();

        server
            .get(endpoints::CATEGORIES)
            .await
            .json::<Vec<Category>>()
            .pop()
            .expect("category should exist after creation")
    }

    async fn get_outputs(server: &TestServer) -> Vec<Output> {
        server.get(endpoints::OUTPUTS).await.json::<Vec<Output>>()
    }

    #[tokio::test]
    async fn create_output_attaches_named_category() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;

        let response = server
            .post(endpoints::CREATE_OUTPUT)
            .json(&json!({
                "description": "Groceries",
                "category": "Food",
                "amount": 125.50,
                "date": "2025-08-12",
            }))
            .await;

        response.assert_status_ok();
        response.assert_text("Output created successfully");
        let outputs = get_outputs(&server).await;
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].category_id, Some(food.id));
        assert_eq!(outputs[0].category, Some(food));
        assert_eq!(outputs[0].fields.amount, 125.50);
        assert_eq!(outputs[0].fields.date, date!(2025 - 08 - 12));
    }

    #[tokio::test]
    async fn output_json_embeds_category() {
        let server = get_test_server();
        create_category(&server, "Food").await;
        server
            .post(endpoints::CREATE_OUTPUT)
            .json(&json!({
                "description": "Groceries",
                "category": "Food",
                "amount": 1.0,
                "date": "2025-08-12",
            }))
            .await
            .assert_status_ok();

        let outputs = server
            .get(endpoints::OUTPUTS)
            .await
            .json::<serde_json::Value>();

        let output = &outputs[0];
        assert_eq!(output["category"]["name"], "Food");
        assert_eq!(output["categoryId"], output["category"]["id"]);
        assert_eq!(output["date"], "2025-08-12");
    }

    #[tokio::test]
    async fn create_output_with_unknown_category_stores_it_without_one() {
        let server = get_test_server();

        server
            .post(endpoints::CREATE_OUTPUT)
            .json(&json!({
                "description": "Refund",
                "category": "Returns",
                "amount": -20.0,
                "date": "2025-08-12",
            }))
            .await
            .assert_status_ok();

        let outputs = get_outputs(&server).await;
        assert_eq!(outputs[0].category, None);
        assert_eq!(outputs[0].fields.amount, -20.0);
    }

    #[tokio::test]
    async fn create_output_with_missing_amount_fails_validation() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CREATE_OUTPUT)
            .json(&json!({ "description": "Groceries", "date": "2025-08-12" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&json!({ "error": "Amount cannot be null" }));
        assert!(get_outputs(&server).await.is_empty());
    }

    #[tokio::test]
    async fn update_output_replaces_it_in_place() {
        let server = get_test_server();
        create_category(&server, "Food").await;
        let rent = create_category(&server, "Rent").await;
        server
            .post(endpoints::CREATE_OUTPUT)
            .json(&json!({
                "description": "Groceries",
                "category": "Food",
                "amount": 20.0,
                "date": "2025-08-12",
            }))
            .await
            .assert_status_ok();
        let original = get_outputs(&server).await.remove(0);

        let response = server
            .put(&format_endpoint(endpoints::OUTPUT, original.id))
            .json(&json!({
                "description": "Monthly rent",
                "category": "Rent",
                "amount": 900.0,
                "date": "2025-09-01",
            }))
            .await;

        response.assert_status_ok();
        response.assert_text("Output updated successfully");
        let updated = server
            .get(&format_endpoint(endpoints::OUTPUT, original.id))
            .await
            .json::<Option<Output>>()
            .expect("output should still exist");
        assert_eq!(updated.category, Some(rent));
        assert_eq!(updated.fields.description, "Monthly rent");
        assert_eq!(updated.fields.created_at, original.fields.created_at);
        assert_eq!(get_outputs(&server).await.len(), 1);
    }

    #[tokio::test]
    async fn update_missing_output_responds_with_not_found() {
        let server = get_test_server();

        let response = server
            .put(&format_endpoint(endpoints::OUTPUT, 3))
            .json(&json!({ "description": "Groceries", "amount": 1.0, "date": "2025-08-12" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Output not found with id: 3" }));
    }

    #[tokio::test]
    async fn deleting_category_leaves_reference_on_output() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;
        server
            .post(endpoints::CREATE_OUTPUT)
            .json(&json!({
                "description": "Groceries",
                "category": "Food",
                "amount": 20.0,
                "date": "2025-08-12",
            }))
            .await
            .assert_status_ok();

        server
            .delete(&format_endpoint(endpoints::CATEGORY, food.id))
            .await
            .assert_status_ok();

        let outputs = get_outputs(&server).await;
        assert_eq!(outputs[0].category_id, Some(food.id));
        assert_eq!(outputs[0].category, None);
    }

    #[tokio::test]
    async fn delete_output_removes_it() {
        let server = get_test_server();
        server
            .post(endpoints::CREATE_OUTPUT)
            .json(&json!({ "description": "Groceries", "amount": 1.0, "date": "2025-08-12" }))
            .await
            .assert_status_ok();
        let output = get_outputs(&server).await.remove(0);

        let response = server
            .delete(&format_endpoint(endpoints::OUTPUT, output.id))
            .await;

        response.assert_status_ok();
        response.assert_text("Output deleted successfully");
        assert!(get_outputs(&server).await.is_empty());
        let missing = server
            .get(&format_endpoint(endpoints::OUTPUT, output.id))
            .await
            .json::<Option<Output>>();
        assert_eq!(missing, None);
    }
}

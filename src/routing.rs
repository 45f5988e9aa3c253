//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, Error, endpoints,
    routes::{
        create_category_endpoint, create_income_endpoint, create_output_endpoint,
        delete_category_endpoint, delete_income_endpoint, delete_output_endpoint,
        get_categories_endpoint, get_category_by_name_endpoint, get_category_endpoint,
        get_income_endpoint, get_incomes_endpoint, get_output_endpoint, get_outputs_endpoint,
        update_category_endpoint, update_income_endpoint, update_output_endpoint,
    },
    stores::{CategoryStore, IncomeStore, OutputStore},
};

/// Return a router with all the app's routes.
pub fn build_router<C, I, O>(state: AppState<C, I, O>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    I: IncomeStore + Clone + Send + Sync + 'static,
    O: OutputStore + Clone + Send + Sync + 'static,
{
    let category_routes = Router::new()
        .route(endpoints::CATEGORIES, get(get_categories_endpoint::<C>))
        .route(
            endpoints::CREATE_CATEGORY,
            post(create_category_endpoint::<C>),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint::<C>)
                .put(update_category_endpoint::<C>)
                .delete(delete_category_endpoint::<C>),
        )
        .route(
            endpoints::CATEGORY_BY_NAME,
            get(get_category_by_name_endpoint::<C>),
        );

    let income_routes = Router::new()
        .route(endpoints::INCOMES, get(get_incomes_endpoint::<I>))
        .route(endpoints::CREATE_INCOME, post(create_income_endpoint::<I>))
        .route(
            endpoints::INCOME,
            get(get_income_endpoint::<I>)
                .put(update_income_endpoint::<I>)
                .delete(delete_income_endpoint::<I>),
        );

    let output_routes = Router::new()
        .route(endpoints::OUTPUTS, get(get_outputs_endpoint::<C, O>))
        .route(
            endpoints::CREATE_OUTPUT,
            post(create_output_endpoint::<C, O>),
        )
        .route(
            endpoints::OUTPUT,
            get(get_output_endpoint::<C, O>)
                .put(update_output_endpoint::<C, O>)
                .delete(delete_output_endpoint::<C, O>),
        );

    category_routes
        .merge(income_routes)
        .merge(output_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The fallback for requests that match no route.
async fn get_404_not_found() -> Error {
    Error::NotFound("the requested resource could not be found".to_owned())
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::get_test_server;

    #[tokio::test]
    async fn unknown_route_responds_with_json_not_found() {
        let server = get_test_server();

        let response = server.get("/budgets").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "the requested resource could not be found" }));
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let server = get_test_server();

        let response = server.delete("/categories").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}

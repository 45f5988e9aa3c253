//! The route handlers for the REST API, one module per resource.

mod category;
mod income;
mod output;

pub use category::{
    create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
    get_category_by_name_endpoint, get_category_endpoint, update_category_endpoint,
};
pub use income::{
    create_income_endpoint, delete_income_endpoint, get_income_endpoint, get_incomes_endpoint,
    update_income_endpoint,
};
pub use output::{
    create_output_endpoint, delete_output_endpoint, get_output_endpoint, get_outputs_endpoint,
    update_output_endpoint,
};

#[cfg(test)]
pub(crate) fn get_test_server() -> axum_test::TestServer {
    use rusqlite::Connection;

    use crate::{build_router, create_app_state};

    let connection =
        Connection::open_in_memory().expect("Could not open in-memory database connection.");
    let state = create_app_state(connection).expect("Could not create app state.");

    axum_test::TestServer::new(build_router(state))
}

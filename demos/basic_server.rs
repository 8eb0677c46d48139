//! A basic server demonstrating prefix routing, JSON bodies and cause mapping.
//!
//! Listens on `MICROROUTE_ADDR` (default `127.0.0.1:8000`).

use log::info;
use microroute::error::{Cause, CompoundCause, TextCause};
use microroute::lang::{all, Maybe};
use microroute::{EndpointTable, HttpResponse, Method, Route, RouteSource, ServerConfig, StatusCode, WebServer, WebError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
}

fn users() -> Vec<Route> {
    vec![
        // Everything below /users lands here unless a more specific route exists.
        Route::get("/users", |ctx| async move {
            let id = ctx
                .segment(0)
                .flat_map(|segment| Maybe::option(segment.parse::<u32>().ok()))
                .to_result_with(|| WebError::NotFound.boxed())?;
            HttpResponse::json(StatusCode::Ok, &User { id, name: format!("user-{id}") })
                .map_err(|cause| cause.boxed())
        }),
        Route::json(Method::GET, "/users/active", |_ctx| async {
            Ok(vec![User { id: 1, name: "ada".to_string() }])
        }),
        Route::post("/users", |ctx| async move {
            let user: User = ctx.body_json().map_err(|cause| cause.boxed())?;
            info!("Created user {id}", id = user.id);
            HttpResponse::json(StatusCode::Created, &user).map_err(|cause| cause.boxed())
        }),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let config = ServerConfig::from_env();

    let table = EndpointTable::builder()
        .add(Route::get("/", |_ctx| async {
            Ok(HttpResponse::text(StatusCode::Ok, "Hello, World!"))
        }))
        .add(Route::get("/hello", |ctx| async move {
            let name = ctx.query("name").or("World");
            Ok(HttpResponse::text(StatusCode::Ok, format!("Hello, {name}!")))
        }))
        .add(Route::get("/sum", |ctx| async move {
            let parse = |name| ctx.query(name).flat_map(|value| Maybe::option(value.parse::<i64>().ok()));
            all((parse("a"), parse("b")))
                .map(|a, b| HttpResponse::text(StatusCode::Ok, (a + b).to_string()))
                .to_result_with(|| WebError::BadRequest.boxed())
        }))
        .add(Route::get("/fail", |_ctx| async {
            Err(TextCause::new("something went wrong").boxed())
        }))
        .mount(&users().with_prefix("/api"))
        .build();

    let server = WebServer::new(config, table).with_cause_mapper(|cause: &dyn Cause| {
        match cause.as_status_holder() {
            Maybe::Present(_) => microroute::server::default_cause_mapper(cause),
            Maybe::Absent => CompoundCause::from(StatusCode::ServiceUnavailable, cause),
        }
    });

    server.start().await?;

    Ok(())
}

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::GenericImage;

use todo_api::api;
use todo_api::config::Config;
use todo_api::models::todo::Todo;
use todo_api::repository::mongo::MongoDbClient;
use todo_api::repository::store::TodoStore;

#[actix_web::test]
#[ignore = "requires a running Docker daemon"]
async fn test_crud_roundtrip_against_mongodb() {
    let container = GenericImage::new("mongo", "7.0")
        .with_exposed_port(27017.tcp())
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
        .start()
        .await
        .expect("Failed to start MongoDB container");
    let port = container
        .get_host_port_ipv4(27017.tcp())
        .await
        .expect("Failed to get mapped MongoDB port");

    let config = Config::new_mongodb_uri(
        format!("mongodb://127.0.0.1:{port}"),
        "todo_app_test".to_string(),
    );
    let todo_db = MongoDbClient::new(&config).await;
    let app_data = web::Data::from(Arc::new(todo_db) as Arc<dyn TodoStore>);
    let app =
        test::init_service(App::new().app_data(app_data).configure(api::api::config)).await;

    let req = test::TestRequest::get().uri("/api/todos").to_request();
    let todos: Vec<Todo> = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(todos.is_empty());

    let req = test::TestRequest::post()
        .uri("/api/todos")
        .set_json(json!({
            "title": "Test Todo",
            "category": "work",
            "priority": "high"
        }))
        .to_request();
    let created: Todo = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!("Test Todo", created.title);
    assert_eq!("work", created.category);
    assert_eq!("high", created.priority);
    assert!(!created.completed);

    let req = test::TestRequest::get().uri("/api/todos").to_request();
    let todos: Vec<Todo> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(1, todos.len());
    assert_eq!(created.id, todos[0].id);

    let req = test::TestRequest::put()
        .uri(&format!("/api/todos/{}", created.id))
        .set_json(json!({"completed": true}))
        .to_request();
    let updated: Todo = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(updated.completed);
    assert_eq!("Test Todo", updated.title);
    assert_eq!(created.created_at, updated.created_at);

    let req = test::TestRequest::put()
        .uri(&format!("/api/todos/{}", created.id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let unchanged: Todo = test::read_body_json(resp).await;
    assert!(unchanged.completed);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/todos/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(json!({"message": "Todo deleted successfully"}), body);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/todos/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(StatusCode::NOT_FOUND, resp.status());

    let req = test::TestRequest::put()
        .uri(&format!("/api/todos/{}", created.id))
        .set_json(json!({"completed": false}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
}

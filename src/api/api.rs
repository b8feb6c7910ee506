use actix_web::{delete, error, get, post, put, web, HttpRequest, HttpResponse};

use crate::models::todo::{CategoryResponse, CreateTodo, Todo, UpdateTodo, DEFAULT_CATEGORIES};
use crate::repository::store::TodoStore;
use crate::Response;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(Response {
        message: "Todo API is running".to_string(),
    })
}

#[get("/todos")]
pub async fn get_todos(db: web::Data<dyn TodoStore>) -> HttpResponse {
    match db.get_todos().await {
        Ok(todos) => HttpResponse::Ok().json(todos),
        Err(err) => {
            log::error!("Failed to list todos: {err}");
            HttpResponse::InternalServerError().json(Response {
                message: "Error listing todos".to_string(),
            })
        }
    }
}

#[post("/todos")]
pub async fn create_todo(
    db: web::Data<dyn TodoStore>,
    payload: web::Json<CreateTodo>,
) -> HttpResponse {
    let todo = Todo::from(payload.into_inner());
    match db.create_todo(&todo).await {
        Ok(()) => HttpResponse::Ok().json(todo),
        Err(err) => {
            log::error!("Failed to create todo: {err}");
            HttpResponse::InternalServerError().json(Response {
                message: "Error creating todo".to_string(),
            })
        }
    }
}

#[put("/todos/{id}")]
pub async fn update_todo_by_id(
    db: web::Data<dyn TodoStore>,
    id: web::Path<String>,
    payload: web::Json<UpdateTodo>,
) -> HttpResponse {
    match db.update_todo_by_id(&id, &payload).await {
        Ok(Some(todo)) => HttpResponse::Ok().json(todo),
        Ok(None) => HttpResponse::NotFound().json(Response {
            message: "Todo not found".to_string(),
        }),
        Err(err) => {
            log::error!("Failed to update todo {id}: {err}");
            HttpResponse::InternalServerError().json(Response {
                message: "Error updating todo".to_string(),
            })
        }
    }
}

#[delete("/todos/{id}")]
pub async fn delete_todo_by_id(
    db: web::Data<dyn TodoStore>,
    id: web::Path<String>,
) -> HttpResponse {
    match db.delete_todo_by_id(&id).await {
        Ok(true) => HttpResponse::Ok().json(Response {
            message: "Todo deleted successfully".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(Response {
            message: "Todo not found".to_string(),
        }),
        Err(err) => {
            log::error!("Failed to delete todo {id}: {err}");
            HttpResponse::InternalServerError().json(Response {
                message: "Error deleting todo".to_string(),
            })
        }
    }
}

#[get("/categories")]
pub async fn get_categories() -> HttpResponse {
    HttpResponse::Ok().json(CategoryResponse {
        categories: DEFAULT_CATEGORIES
            .iter()
            .map(|category| category.to_string())
            .collect(),
    })
}

/// Turns malformed or incomplete JSON payloads into a 422 with the
/// deserialization error in the body.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity().json(Response {
        message: err.to_string(),
    });
    error::InternalError::from_response(err, response).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(index)
            .service(get_todos)
            .service(create_todo)
            .service(update_todo_by_id)
            .service(delete_todo_by_id)
            .service(get_categories),
    );
}

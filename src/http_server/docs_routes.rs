//! API Documentation Routes
//!
//! Serves an OpenAPI 3 description at `/docs.json` and a Swagger UI page
//! at `/docs` that renders it.

use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::registry::{PoliticalAffiliation, VotingPreference};

const SWAGGER_UI_VERSION: &str = "4.15.5";

/// Documentation routes at root level
pub fn docs_routes() -> Router {
    Router::new()
        .route("/docs.json", get(openapi_handler))
        .route("/docs", get(swagger_ui_handler))
}

async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

async fn swagger_ui_handler() -> Html<String> {
    Html(swagger_ui_page())
}

fn string_prop(description: &str, example: &str) -> Value {
    json!({ "type": "string", "description": description, "example": example })
}

fn list_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/UsersResponse" } } }
    })
}

fn path_param(name: &str, description: &str) -> Value {
    json!({ "name": name, "in": "path", "required": true, "description": description, "schema": { "type": "string" } })
}

fn query_param(name: &str, schema: Value) -> Value {
    json!({ "name": name, "in": "query", "required": false, "schema": schema })
}

/// Build the OpenAPI description of the voter API
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "WhoIsVoting API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A REST API for managing voter registration and user data.",
            "license": { "name": "MIT", "url": "https://opensource.org/licenses/MIT" }
        },
        "components": { "schemas": schemas() },
        "paths": paths()
    })
}

fn enum_values() -> (Vec<&'static str>, Vec<&'static str>) {
    (
        VotingPreference::ALL.iter().map(|p| p.as_str()).collect(),
        PoliticalAffiliation::ALL.iter().map(|a| a.as_str()).collect(),
    )
}

fn schemas() -> Value {
    let (preferences, affiliations) = enum_values();

    let user_properties = json!({
        "id": { "type": "string", "format": "uuid", "readOnly": true },
        "firstName": string_prop("User's first name", "John"),
        "lastName": string_prop("User's last name", "Doe"),
        "email": string_prop("User's email address", "john.doe@example.com"),
        "city": string_prop("City of residence", "New York"),
        "state": string_prop("State of residence", "NY"),
        "zipCode": string_prop("ZIP code", "10001"),
        "dateOfBirth": string_prop("Date of birth", "1990-01-15"),
        "registrationDate": { "type": "string", "format": "date-time", "readOnly": true },
        "isRegistered": { "type": "boolean" },
        "votingPreference": { "type": "string", "enum": preferences },
        "politicalAffiliation": { "type": "string", "enum": affiliations }
    });

    let stats_properties = json!({
        "total": { "type": "integer" },
        "registered": { "type": "integer" },
        "unregistered": { "type": "integer" },
        "byCity": { "type": "object", "additionalProperties": { "type": "integer" } },
        "byState": { "type": "object", "additionalProperties": { "type": "integer" } }
    });

    json!({
        "User": {
            "type": "object",
            "required": ["firstName", "lastName", "email", "city", "state", "zipCode", "dateOfBirth"],
            "properties": user_properties
        },
        "UserResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean" },
                "data": { "$ref": "#/components/schemas/User" },
                "message": { "type": "string" }
            }
        },
        "UsersResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean" },
                "data": { "type": "array", "items": { "$ref": "#/components/schemas/User" } },
                "total": { "type": "integer" },
                "message": { "type": "string" }
            }
        },
        "RegistrationStats": { "type": "object", "properties": stats_properties },
        "ErrorResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean", "example": false },
                "message": { "type": "string" }
            }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
    })
}

fn user_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/UserResponse" } } }
    })
}

fn user_body() -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/User" } } }
    })
}

fn lookup(summary: &str, param: Value, description: &str) -> Value {
    json!({
        "get": {
            "summary": summary,
            "tags": ["Users"],
            "parameters": [param],
            "responses": { "200": list_response(description) }
        }
    })
}

fn paths() -> Value {
    let (preferences, affiliations) = enum_values();

    let list_parameters = vec![
        query_param("city", json!({ "type": "string" })),
        query_param("state", json!({ "type": "string" })),
        query_param("zipCode", json!({ "type": "string" })),
        query_param("isRegistered", json!({ "type": "boolean" })),
        query_param("votingPreference", json!({ "type": "string", "enum": preferences })),
        query_param("politicalAffiliation", json!({ "type": "string", "enum": affiliations })),
        query_param("limit", json!({ "type": "integer", "minimum": 0 })),
        query_param("offset", json!({ "type": "integer", "minimum": 0 })),
    ];

    let users = json!({
        "get": {
            "summary": "List users with optional filters",
            "tags": ["Users"],
            "parameters": list_parameters,
            "responses": {
                "200": list_response("Users retrieved successfully"),
                "400": error_response("Invalid query parameter")
            }
        },
        "post": {
            "summary": "Create a new user",
            "tags": ["Users"],
            "requestBody": user_body(),
            "responses": {
                "201": user_response("User created successfully"),
                "400": error_response("Missing required fields")
            }
        }
    });

    let id_param = path_param("id", "User ID");
    let user_by_id = json!({
        "get": {
            "summary": "Get a user by ID",
            "tags": ["Users"],
            "parameters": [id_param],
            "responses": { "200": user_response("User retrieved successfully"), "404": error_response("User not found") }
        },
        "put": {
            "summary": "Update a user",
            "tags": ["Users"],
            "parameters": [id_param],
            "requestBody": user_body(),
            "responses": { "200": user_response("User updated successfully"), "404": error_response("User not found") }
        },
        "delete": {
            "summary": "Delete a user",
            "tags": ["Users"],
            "parameters": [id_param],
            "responses": { "200": { "description": "User deleted successfully" }, "404": error_response("User not found") }
        }
    });

    let stats = json!({
        "get": {
            "summary": "Get registration statistics",
            "tags": ["Statistics"],
            "responses": {
                "200": {
                    "description": "Registration statistics",
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/RegistrationStats" } } }
                }
            }
        }
    });

    json!({
        "/health": {
            "get": { "summary": "Health check endpoint", "tags": ["Health"], "responses": { "200": { "description": "API is running" } } }
        },
        "/api/users": users,
        "/api/users/{id}": user_by_id,
        "/api/users/city/{city}": lookup("Get users by city", path_param("city", "City name (case-insensitive, partial match)"), "Users in the city"),
        "/api/users/state/{state}": lookup("Get users by state", path_param("state", "State (case-insensitive, partial match)"), "Users in the state"),
        "/api/users/zip/{zipCode}": lookup("Get users by zip code", path_param("zipCode", "Exact ZIP code"), "Users in the zip code"),
        "/api/users/stats/registration": stats
    })
}

fn swagger_ui_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>WhoIsVoting API Documentation</title>
  <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@{v}/swagger-ui.css" />
  <style>
    .swagger-ui .topbar {{ display: none; }}
    body {{ margin: 0; }}
  </style>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@{v}/swagger-ui-bundle.js"></script>
  <script src="https://unpkg.com/swagger-ui-dist@{v}/swagger-ui-standalone-preset.js"></script>
  <script>
    window.onload = function() {{
      SwaggerUIBundle({{
        url: '/docs.json',
        dom_id: '#swagger-ui',
        presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
        layout: "StandaloneLayout"
      }});
    }};
  </script>
</body>
</html>
"#,
        v = SWAGGER_UI_VERSION
    )
}

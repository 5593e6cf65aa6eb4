#![deny(missing_docs)]

//! # Test Case Assembly
//!
//! Builds one human-readable test case per operation:
//! - path parameters become named placeholders (`<id_pet>`),
//! - query, header and cookie parameters carry their examples,
//! - a `POST` on the same resource becomes a precondition,
//! - a `DELETE` on the same resource becomes a postcondition.

pub mod curl;
pub mod paths;

use crate::oas::{
    extract_operations, server_urls, DocumentResolver, ParamLocation, ParsedOperation,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use self::curl::build_curl;
use self::paths::{collection_path, query_string, render_param_value, substitute_path};

/// Knobs for test-case assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseOptions {
    /// Attach a `curl` command to every step.
    pub curl: bool,
    /// Base URL for `curl` commands; defaults to the first server URL.
    pub base_url: Option<String>,
}

/// One HTTP request of a test case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Upper-case HTTP method.
    pub method: String,
    /// Path with placeholders, plus query string.
    pub url: String,
    /// Header name → example value.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, String>,
    /// Cookie name → example value.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub cookies: IndexMap<String, String>,
    /// Request body example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// Equivalent `curl` command, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curl: Option<String>,
}

/// What the tested step should produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectedResult {
    /// Expected status key, `-` when the operation declares no responses.
    pub status: String,
    /// Expected body example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// A complete test case for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    /// Deterministic id derived from method and path.
    pub id: Uuid,
    /// `Check <METHOD> for path <path>`.
    pub name: String,
    /// Operation description, else summary.
    pub description: String,
    /// Server URLs the case can run against.
    pub environment: Vec<String>,
    /// Steps creating the resource under test.
    pub preconditions: Vec<Step>,
    /// The step under test.
    pub steps: Vec<Step>,
    /// Expected outcome of `steps`.
    pub expected: ExpectedResult,
    /// Steps cleaning up after the test.
    pub postconditions: Vec<Step>,
}

/// Builds test cases for every operation of `document`, in declaration order.
pub fn build_test_cases(document: &Value, options: &CaseOptions) -> Vec<TestCase> {
    let resolver = DocumentResolver::new(document);
    let operations = extract_operations(document, &resolver);
    let environment = server_urls(document);

    let base_url = options
        .base_url
        .clone()
        .or_else(|| environment.first().cloned())
        .unwrap_or_default();
    let builder = CaseBuilder {
        operations: &operations,
        environment: &environment,
        base_url: options.curl.then_some(base_url.as_str()),
    };

    let cases: Vec<TestCase> = operations.iter().map(|op| builder.build(op)).collect();
    tracing::info!(count = cases.len(), "generated test cases");
    cases
}

/// Deterministic test-case id: UUID v5 over `"METHOD path"`.
pub fn case_id(method: &str, path: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("{method} {path}").as_bytes())
}

struct CaseBuilder<'a> {
    operations: &'a [ParsedOperation],
    environment: &'a [String],
    /// `Some` when curl commands are requested.
    base_url: Option<&'a str>,
}

impl CaseBuilder<'_> {
    fn build(&self, op: &ParsedOperation) -> TestCase {
        let description = op
            .description
            .clone()
            .or_else(|| op.summary.clone())
            .unwrap_or_else(|| "No description".to_string());

        let expected = match &op.response {
            Some(response) => ExpectedResult {
                status: response.status.clone(),
                body: Some(response.body.clone()).filter(|body| !body.is_null()),
            },
            None => ExpectedResult {
                status: "-".to_string(),
                body: None,
            },
        };

        TestCase {
            id: case_id(&op.method, &op.path),
            name: format!("Check {} for path {}", op.method, op.path),
            description,
            environment: self.environment.to_vec(),
            preconditions: self
                .precondition(op)
                .map(|post| self.step(post))
                .into_iter()
                .collect(),
            steps: vec![self.step(op)],
            expected,
            postconditions: self
                .postcondition(op)
                .map(|delete| self.cleanup_step(delete))
                .into_iter()
                .collect(),
        }
    }

    /// The `POST` that creates the resource `op` works on.
    fn precondition(&self, op: &ParsedOperation) -> Option<&ParsedOperation> {
        if !matches!(op.method.as_str(), "GET" | "PUT" | "PATCH" | "DELETE") {
            return None;
        }
        self.find("POST", &op.path).or_else(|| {
            collection_path(&op.path).and_then(|collection| self.find("POST", collection))
        })
    }

    /// The `DELETE` that removes the resource `op` touched.
    fn postcondition(&self, op: &ParsedOperation) -> Option<&ParsedOperation> {
        match op.method.as_str() {
            "GET" | "PUT" | "PATCH" => self.find("DELETE", &op.path),
            "POST" => self.find("DELETE", &op.path).or_else(|| {
                self.operations.iter().find(|candidate| {
                    candidate.method == "DELETE"
                        && collection_path(&candidate.path) == Some(op.path.as_str())
                })
            }),
            _ => None,
        }
    }

    fn find(&self, method: &str, path: &str) -> Option<&ParsedOperation> {
        self.operations
            .iter()
            .find(|candidate| candidate.method == method && candidate.path == path)
    }

    fn step(&self, op: &ParsedOperation) -> Step {
        let query = op.params_in(ParamLocation::Query).filter_map(|param| {
            let value = param.example.as_ref()?;
            Some((param.name.as_str(), render_param_value(value)))
        });
        let url = format!("{}{}", substitute_path(&op.path), query_string(query));

        let mut step = Step {
            method: op.method.clone(),
            url,
            headers: example_map(op, ParamLocation::Header),
            cookies: example_map(op, ParamLocation::Cookie),
            body: op.request_body.as_ref().map(|body| body.body.clone()),
            curl: None,
        };
        self.attach_curl(&mut step);
        step
    }

    /// Cleanup only needs the method and the resource path.
    fn cleanup_step(&self, op: &ParsedOperation) -> Step {
        let mut step = Step {
            method: op.method.clone(),
            url: substitute_path(&op.path),
            headers: IndexMap::new(),
            cookies: IndexMap::new(),
            body: None,
            curl: None,
        };
        self.attach_curl(&mut step);
        step
    }

    fn attach_curl(&self, step: &mut Step) {
        if let Some(base_url) = self.base_url {
            step.curl = Some(build_curl(step, base_url));
        }
    }
}

fn example_map(op: &ParsedOperation, location: ParamLocation) -> IndexMap<String, String> {
    op.params_in(location)
        .filter_map(|param| {
            let value = param.example.as_ref()?;
            Some((param.name.clone(), render_param_value(value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::load_document;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TODO_API: &str = r#"
openapi: 3.0.3
info: {title: Todo, version: "1"}
servers:
  - url: https://todo.example.com
paths:
  /todos:
    get:
      summary: List todos
      parameters:
        - {name: q, in: query, schema: {type: string, example: buy milk}}
        - {name: page, in: query, schema: {type: integer}}
      responses:
        '200':
          description: ok
          content:
            application/json:
              schema: {type: array, items: {$ref: '#/components/schemas/Todo'}}
    post:
      description: Create a todo
      requestBody:
        content:
          application/json:
            schema: {$ref: '#/components/schemas/NewTodo'}
      responses:
        '201':
          description: created
          content:
            application/json:
              schema: {$ref: '#/components/schemas/Todo'}
  /todos/{todoId}:
    parameters:
      - {name: todoId, in: path, required: true, schema: {type: integer}}
    get:
      parameters:
        - {name: X-Request-Id, in: header, schema: {type: string, format: uuid}, example: req-1}
        - {name: session, in: cookie, schema: {type: string}}
      responses:
        '200': {description: ok}
    delete:
      responses:
        '204': {description: deleted}
  /health:
    head: {}
components:
  schemas:
    NewTodo:
      type: object
      properties:
        title: {type: string}
    Todo:
      allOf:
        - type: object
          properties:
            id: {type: integer}
            title: {type: string}
"#;

    fn cases(options: &CaseOptions) -> Vec<TestCase> {
        let doc = load_document(TODO_API).unwrap();
        build_test_cases(&doc, options)
    }

    #[test]
    fn test_builds_one_case_per_operation() {
        let cases = cases(&CaseOptions::default());
        let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Check GET for path /todos",
                "Check POST for path /todos",
                "Check GET for path /todos/{todoId}",
                "Check DELETE for path /todos/{todoId}",
                "Check HEAD for path /health",
            ]
        );
        assert_eq!(cases[0].environment, vec!["https://todo.example.com"]);
        assert_eq!(cases[0].description, "List todos");
        assert_eq!(cases[1].description, "Create a todo");
        assert_eq!(cases[4].description, "No description");
    }

    #[test]
    fn test_step_urls_and_examples() {
        let cases = cases(&CaseOptions::default());

        let list = &cases[0].steps[0];
        assert_eq!(list.url, "/todos?q=buy%20milk&page=<integer>");
        assert_eq!(list.body, None);
        assert_eq!(
            cases[0].expected.body,
            Some(json!([{"id": "<integer>", "title": "<string>"}]))
        );

        let get_item = &cases[2].steps[0];
        assert_eq!(get_item.url, "/todos/<id_todo>");
        assert_eq!(get_item.headers.get("X-Request-Id").map(String::as_str), Some("req-1"));
        assert_eq!(get_item.cookies.get("session").map(String::as_str), Some("<string>"));
        assert_eq!(cases[2].expected.status, "200");
        assert_eq!(cases[2].expected.body, None);

        let create = &cases[1].steps[0];
        assert_eq!(create.body, Some(json!({"title": "<string>"})));
    }

    #[test]
    fn test_pre_and_postconditions() {
        let cases = cases(&CaseOptions::default());

        // GET /todos: POST on same path, no DELETE on same path.
        assert_eq!(cases[0].preconditions.len(), 1);
        assert_eq!(cases[0].preconditions[0].method, "POST");
        assert!(cases[0].postconditions.is_empty());

        // POST /todos: never its own precondition, DELETE on the item path.
        assert!(cases[1].preconditions.is_empty());
        assert_eq!(cases[1].postconditions.len(), 1);
        assert_eq!(cases[1].postconditions[0].url, "/todos/<id_todo>");

        // GET /todos/{todoId}: POST on the collection, DELETE on the same path.
        assert_eq!(cases[2].preconditions[0].url, "/todos");
        assert_eq!(
            cases[2].preconditions[0].body,
            Some(json!({"title": "<string>"}))
        );
        assert_eq!(cases[2].postconditions[0].method, "DELETE");

        // DELETE is never followed by another DELETE.
        assert_eq!(cases[3].preconditions.len(), 1);
        assert!(cases[3].postconditions.is_empty());

        assert!(cases[4].preconditions.is_empty());
        assert!(cases[4].postconditions.is_empty());
        assert_eq!(cases[4].expected.status, "-");
    }

    #[test]
    fn test_curl_is_opt_in() {
        let plain = cases(&CaseOptions::default());
        assert!(plain[0].steps[0].curl.is_none());

        let with_curl = cases(&CaseOptions {
            curl: true,
            base_url: None,
        });
        assert_eq!(
            with_curl[4].steps[0].curl.as_deref(),
            Some("curl -X HEAD 'https://todo.example.com/health'")
        );

        let overridden = cases(&CaseOptions {
            curl: true,
            base_url: Some("http://localhost:3000".to_string()),
        });
        assert!(overridden[3].postconditions.is_empty());
        assert_eq!(
            overridden[3].preconditions[0].curl.as_deref().map(|c| c.lines().next()),
            Some(Some("curl -X POST 'http://localhost:3000/todos' \\"))
        );
    }

    #[test]
    fn test_case_ids_are_deterministic() {
        let first = cases(&CaseOptions::default());
        let second = cases(&CaseOptions::default());
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].id, case_id("GET", "/todos"));
        assert_ne!(first[0].id, first[1].id);
    }
}

//! Typed shape of the analysis service contract.
//!
//! The service guarantees `FunctionResult::score == sum(details.cost)` and
//! `FileResult::complexity == sum(functions.score)`. Those are trusted
//! preconditions; nothing here re-derives or corrects them.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of the analyze request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(rename = "repoUrl")]
    pub repo_url: String,
}

impl AnalysisRequest {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
        }
    }
}

/// One cost contributor found inside a function.
///
/// The service serialises this record with capitalised keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(rename = "Line")]
    pub line: i64,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Cost")]
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResult {
    pub name: String,
    pub score: i64,
    /// Contributors in the order they were found.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub details: Vec<Detail>,
    pub start_line: i64,
    pub end_line: i64,
    #[serde(default)]
    pub source: String,
}

impl FunctionResult {
    pub fn contributor_count(&self) -> usize {
        self.details.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// Repository-relative path.
    pub path: String,
    /// Functions in declaration order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub functions: Vec<FunctionResult>,
    pub complexity: i64,
}

impl FileResult {
    pub fn function(&self, name: &str) -> Option<&FunctionResult> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn has_functions(&self) -> bool {
        !self.functions.is_empty()
    }
}

/// A complete analysis result. An empty `files` list is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<FileResult>,
}

impl AnalysisResponse {
    pub fn file(&self, path: &str) -> Option<&FileResult> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn function_count(&self) -> usize {
        self.files.iter().map(|f| f.functions.len()).sum()
    }
}

// Go encodes nil slices as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_uses_camel_case_key() {
        let body = serde_json::to_value(AnalysisRequest::new("https://github.com/o/r")).unwrap();
        assert_eq!(body, json!({"repoUrl": "https://github.com/o/r"}));
    }

    #[test]
    fn test_decode_service_payload() {
        let payload = json!({
            "files": [{
                "path": "pkg/foo.go",
                "complexity": 3,
                "functions": [{
                    "name": "Run",
                    "score": 3,
                    "startLine": 10,
                    "endLine": 25,
                    "source": "func Run() {}",
                    "details": [
                        {"Line": 11, "Message": "if", "Cost": 1},
                        {"Line": 12, "Message": "for", "Cost": 2}
                    ]
                }]
            }]
        });
        let response: AnalysisResponse = serde_json::from_value(payload).unwrap();
        let function = &response.files[0].functions[0];
        assert_eq!(function.start_line, 10);
        assert_eq!(function.end_line, 25);
        assert_eq!(function.details[1].message, "for");
        assert_eq!(function.details[1].cost, 2);
        assert_eq!(response.function_count(), 1);
    }

    #[test]
    fn test_null_sequences_decode_as_empty() {
        let response: AnalysisResponse = serde_json::from_value(json!({"files": null})).unwrap();
        assert!(response.files.is_empty());

        let response: AnalysisResponse = serde_json::from_value(json!({
            "files": [{"path": "empty.go", "functions": null, "complexity": 0}]
        }))
        .unwrap();
        assert!(!response.files[0].has_functions());

        let response: AnalysisResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.files.is_empty());
    }

    #[test]
    fn test_adversarial_numbers_still_decode() {
        let response: AnalysisResponse = serde_json::from_value(json!({
            "files": [{
                "path": "odd.go",
                "complexity": 99,
                "functions": [{
                    "name": "Weird",
                    "score": 1,
                    "startLine": 3,
                    "endLine": 2,
                    "source": "",
                    "details": [{"Line": 0, "Message": "negative", "Cost": -4}]
                }]
            }]
        }))
        .unwrap();
        assert_eq!(response.files[0].functions[0].details[0].cost, -4);
    }
}

//! The subset of the OpenSearch query DSL the repositories use.

use serde_json::{json, Value};

/// A search query.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Every document in the index.
    MatchAll,
    /// Exact match on a keyword or numeric field.
    Term { field: String, value: Value },
    /// Full-text match on one field (any query token matches).
    Match { field: String, text: String },
    /// Full-text match across several fields.
    MultiMatch { query: String, fields: Vec<String> },
    /// Every clause must match (`bool.must`).
    All(Vec<Query>),
}

impl Query {
    pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Query::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matching(field: impl Into<String>, text: impl Into<String>) -> Self {
        Query::Match {
            field: field.into(),
            text: text.into(),
        }
    }

    pub fn multi_match<I, S>(query: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Query::MultiMatch {
            query: query.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn all(clauses: impl IntoIterator<Item = Query>) -> Self {
        Query::All(clauses.into_iter().collect())
    }

    /// Render the query as OpenSearch DSL.
    pub fn to_dsl(&self) -> Value {
        match self {
            Query::MatchAll => json!({ "match_all": {} }),
            Query::Term { field, value } => json!({ "term": { field.as_str(): value } }),
            Query::Match { field, text } => json!({ "match": { field.as_str(): text } }),
            Query::MultiMatch { query, fields } => json!({
                "multi_match": { "query": query, "fields": fields }
            }),
            Query::All(clauses) => {
                let must: Vec<Value> = clauses.iter().map(Query::to_dsl).collect();
                json!({ "bool": { "must": must } })
            }
        }
    }
}

/// When a write becomes visible to searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Refresh {
    /// Visible after the next periodic refresh.
    #[default]
    None,
    /// Block until a refresh has made the write visible.
    WaitFor,
    /// Force an immediate refresh.
    Immediate,
}

impl Refresh {
    /// Value of the `refresh` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Refresh::None => "false",
            Refresh::WaitFor => "wait_for",
            Refresh::Immediate => "true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_all_dsl() {
        assert_eq!(Query::MatchAll.to_dsl(), json!({ "match_all": {} }));
    }

    #[test]
    fn term_dsl_keeps_value_type() {
        assert_eq!(
            Query::term("movieId", 7).to_dsl(),
            json!({ "term": { "movieId": 7 } })
        );
        assert_eq!(
            Query::term("director", "Agnès Varda").to_dsl(),
            json!({ "term": { "director": "Agnès Varda" } })
        );
    }

    #[test]
    fn multi_match_dsl_lists_fields() {
        let dsl = Query::multi_match("slow burn", ["title", "comment"]).to_dsl();
        assert_eq!(dsl["multi_match"]["query"], "slow burn");
        assert_eq!(dsl["multi_match"]["fields"], json!(["title", "comment"]));
    }

    #[test]
    fn all_renders_bool_must() {
        let dsl = Query::all([Query::term("movieId", 3), Query::term("userId", 9)]).to_dsl();
        assert_eq!(
            dsl,
            json!({ "bool": { "must": [
                { "term": { "movieId": 3 } },
                { "term": { "userId": 9 } }
            ] } })
        );
    }

    #[test]
    fn refresh_params() {
        assert_eq!(Refresh::default().as_param(), "false");
        assert_eq!(Refresh::WaitFor.as_param(), "wait_for");
        assert_eq!(Refresh::Immediate.as_param(), "true");
    }
}

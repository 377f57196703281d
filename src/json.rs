//! JSON interface for hosts that talk to the ranker over serialized data
//!
//! Document identifiers are arbitrary JSON values and are echoed back
//! untouched. A batch call ranks its requests in parallel and answers them
//! in request order.

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::ranking::RelevanceRanker;
use crate::types::{validate_stopwords, Document, RankConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub id: Value,
    pub text: String,
}

impl From<JsonDocument> for Document<Value> {
    fn from(doc: JsonDocument) -> Self {
        Document::new(doc.id, doc.text)
    }
}

/// One ranking request
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRankRequest {
    pub query: String,
    pub documents: Vec<JsonDocument>,
    #[serde(default)]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub config: Option<RankConfig>,
}

/// One ranked entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonScoredDocument {
    pub id: Value,
    pub relevance: usize,
}

/// Output of one ranking request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRankResponse {
    pub results: Vec<JsonScoredDocument>,
}

/// Rank a single decoded request
pub fn rank_request(request: JsonRankRequest) -> Result<JsonRankResponse> {
    let config = request.config.unwrap_or_default();
    config.validate()?;
    validate_stopwords(&request.stopwords)?;

    let ranker = RelevanceRanker::with_config(config);
    let stopwords = StopwordFilter::from_list(&request.stopwords);
    let corpus: Vec<Document<Value>> = request.documents.into_iter().map(Into::into).collect();

    let results = ranker
        .rank(&corpus, &request.query, &stopwords)
        .into_iter()
        .map(|scored| JsonScoredDocument {
            id: scored.id,
            relevance: scored.relevance,
        })
        .collect();

    Ok(JsonRankResponse { results })
}

/// Rank a JSON-encoded [`JsonRankRequest`] and return the JSON response
pub fn rank_json(json_input: &str) -> Result<String> {
    let request: JsonRankRequest = serde_json::from_str(json_input)?;
    let response = rank_request(request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Rank a JSON array of requests; the output array follows input order.
///
/// The whole batch fails on the first invalid request.
pub fn rank_batch_json(json_input: &str) -> Result<String> {
    let requests: Vec<JsonRankRequest> = serde_json::from_str(json_input)?;

    trace_event!(requests = requests.len(), "ranking batch");

    let responses: Vec<JsonRankResponse> = requests
        .into_par_iter()
        .map(rank_request)
        .collect::<Result<_>>()?;

    Ok(serde_json::to_string(&responses)?)
}

//! External PostgREST-style persistence backend
//!
//! Criteria are translated into the service's native predicate form
//! (`eq`/`gte`/`lte`/`ilike` plus `order` and `limit`), so the server
//! filters and pages; returned rows are then re-sorted with the engine's
//! own key so ordering matches the embedded path exactly.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::engine::Criteria;
use crate::error::{Error, Result};
use crate::types::{Event, NewEvent};

/// Bound on any single round trip to the backend
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for an external events table
pub struct ExternalStore {
    client: reqwest::Client,
    events_url: String,
}

impl ExternalStore {
    /// Connect to a PostgREST-style backend at `base_url` using `api_key`
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(api_key)
            .map_err(|_| Error::StoreUnavailable("api key contains invalid characters".to_string()))?;
        headers.insert("apikey", key_value);
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| Error::StoreUnavailable("api key contains invalid characters".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            events_url: format!("{}/rest/v1/events", base_url.trim_end_matches('/')),
        })
    }

    /// Translate criteria into native query parameters
    ///
    /// `nullsfirst` ordering mirrors the engine's absent-as-zero rule so the
    /// server-side limit cuts the same page the embedded path would.
    fn query_params(criteria: &Criteria) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];

        if let Some(category) = criteria.category {
            params.push(("category".to_string(), format!("eq.{}", category)));
        }
        if let Some(min) = criteria.min_importance {
            params.push(("importance".to_string(), format!("gte.{}", min)));
        }
        if let Some(from) = criteria.year_from {
            params.push(("year".to_string(), format!("gte.{}", from)));
        }
        if let Some(to) = criteria.year_to {
            params.push(("year".to_string(), format!("lte.{}", to)));
        }
        if let Some(search) = &criteria.search {
            params.push((
                "or".to_string(),
                format!("(title.ilike.*{s}*,description.ilike.*{s}*)", s = search),
            ));
        }
        params.push((
            "order".to_string(),
            "year.asc,month.asc.nullsfirst,day.asc.nullsfirst".to_string(),
        ));
        params.push(("limit".to_string(), criteria.limit.to_string()));

        params
    }

    /// Fetch events matching the criteria
    pub async fn get_all(&self, criteria: &Criteria) -> Result<Vec<Event>> {
        criteria.validate()?;

        let response = self
            .client
            .get(&self.events_url)
            .query(&Self::query_params(criteria))
            .send()
            .await?
            .error_for_status()?;

        let mut events: Vec<Event> = response.json().await?;
        // identical ordering contract as the in-memory path
        events.sort_by_key(Event::date_key);
        Ok(events)
    }

    /// Fetch every row, for aggregation; no filter or limit applies
    pub async fn all_events(&self) -> Result<Vec<Event>> {
        let params = [("select".to_string(), "*".to_string())];

        let response = self
            .client
            .get(&self.events_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Fetch a single event by id; absent rows are `Ok(None)`
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Event>> {
        let params = [
            ("select".to_string(), "*".to_string()),
            ("id".to_string(), format!("eq.{}", id)),
            ("limit".to_string(), "1".to_string()),
        ];

        let response = self
            .client
            .get(&self.events_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let mut events: Vec<Event> = response.json().await?;
        Ok(events.pop())
    }

    /// Bulk-insert drafts; the backend assigns ids and returns the rows
    pub async fn insert_many(&self, drafts: &[NewEvent]) -> Result<Vec<Event>> {
        let response = self
            .client
            .post(&self.events_url)
            .header("Prefer", "return=representation")
            .json(drafts)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn test_query_params_translate_every_predicate() {
        let criteria = Criteria::any()
            .with_category(Category::Model)
            .with_min_importance(4)
            .with_years(Some(2020), Some(2024))
            .with_search("gpt")
            .with_limit(10);
        let params = ExternalStore::query_params(&criteria);

        assert_eq!(param(&params, "category"), vec!["eq.model"]);
        assert_eq!(param(&params, "importance"), vec!["gte.4"]);
        assert_eq!(param(&params, "year"), vec!["gte.2020", "lte.2024"]);
        assert_eq!(
            param(&params, "or"),
            vec!["(title.ilike.*gpt*,description.ilike.*gpt*)"]
        );
        assert_eq!(param(&params, "limit"), vec!["10"]);
    }

    #[test]
    fn test_query_params_default_is_order_and_limit_only() {
        let params = ExternalStore::query_params(&Criteria::any());
        assert!(param(&params, "category").is_empty());
        assert_eq!(
            param(&params, "order"),
            vec!["year.asc,month.asc.nullsfirst,day.asc.nullsfirst"]
        );
        assert_eq!(param(&params, "limit"), vec!["500"]);
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let store = ExternalStore::new("https://example.supabase.co/", "key").unwrap();
        assert_eq!(store.events_url, "https://example.supabase.co/rest/v1/events");
    }
}

pub mod search {
    use crate::constants::constants::API_URL;
    use crate::errors::errors::SearchError;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use tracing::{debug, info};

    pub const TARGET_SEARCH: &str = "search";

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
    pub struct OrganicResult {
        #[serde(default, deserialize_with = "null_as_empty")]
        pub title: String,
        #[serde(default, deserialize_with = "null_as_empty")]
        pub snippet: String,
        #[serde(default, deserialize_with = "null_as_empty")]
        pub link: String,
    }

    impl OrganicResult {
        /// Title and snippet on one line; the only text checked for the event date.
        pub fn match_text(&self) -> String {
            format!("{} {}", self.title, self.snippet).replace('\n', " ")
        }
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
    pub struct SearchResponse {
        #[serde(default, deserialize_with = "null_as_empty")]
        pub organic: Vec<OrganicResult>,
    }

    fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn site_query(site: &str, content: &str) -> String {
        format!("site:{} {}", site, content)
    }

    pub struct SearchClient {
        http: reqwest::Client,
        api_key: String,
    }

    impl SearchClient {
        pub fn new(api_key: String) -> Self {
            Self {
                http: reqwest::Client::new(),
                api_key,
            }
        }

        pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
            debug!(target: TARGET_SEARCH, "POST {} q={:?}", API_URL, query);

            let response = self
                .http
                .post(API_URL)
                .header("X-API-KEY", &self.api_key)
                .json(&json!({ "q": query }))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SearchError::Status(status.as_u16(), body));
            }

            let results: SearchResponse = response.json().await?;
            info!(
                target: TARGET_SEARCH,
                "{} organic results for {:?}",
                results.organic.len(),
                query
            );
            Ok(results)
        }
    }

}

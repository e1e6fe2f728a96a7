use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SearchQueryParam {
    pub query: String,
}

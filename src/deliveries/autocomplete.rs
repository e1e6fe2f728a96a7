use crate::deliveries::models::{AddressCandidate, LookupFailure};
use crate::geocoding::errors::GeocodingError;
use crate::geocoding::models::Feature;
use crate::geocoding::Geocoder;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Shorter queries never reach the geocoding service.
pub const MIN_QUERY_LENGTH: usize = 5;

pub type SearchToken = u64;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SearchStart {
    /// The query is too short, candidates were cleared without a lookup.
    Skipped,
    Lookup(SearchToken),
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOutcome {
    Updated,
    Failed { reason: LookupFailure },
    /// A newer query was issued while this one was in flight.
    Stale,
}

/// Candidate list of the address field. Every query gets a fresh token and only the
/// response carrying the latest one is allowed to replace the candidates.
#[derive(Clone, Debug, Default)]
pub struct AddressAutocomplete {
    latest_token: SearchToken,
    query: String,
    candidates: Vec<AddressCandidate>,
    failure: Option<LookupFailure>,
}

impl AddressAutocomplete {
    pub fn begin(&mut self, query: &str) -> SearchStart {
        self.latest_token += 1;
        self.query = query.to_string();
        self.failure = None;
        if !is_searchable(query) {
            self.candidates.clear();
            return SearchStart::Skipped;
        }
        SearchStart::Lookup(self.latest_token)
    }

    pub fn resolve(
        &mut self,
        token: SearchToken,
        result: Result<Vec<AddressCandidate>, LookupFailure>,
    ) -> SearchOutcome {
        if token != self.latest_token {
            return SearchOutcome::Stale;
        }
        match result {
            Ok(candidates) => {
                self.candidates = candidates;
                SearchOutcome::Updated
            }
            Err(reason) => {
                self.candidates.clear();
                self.failure = Some(reason);
                SearchOutcome::Failed { reason }
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[AddressCandidate] {
        &self.candidates
    }

    pub fn failure(&self) -> Option<LookupFailure> {
        self.failure
    }
}

pub fn is_searchable(query: &str) -> bool {
    query.graphemes(true).count() >= MIN_QUERY_LENGTH
}

pub fn candidate_from(feature: Feature) -> AddressCandidate {
    AddressCandidate {
        label: feature.place_name.clone(),
        value: feature.place_name.clone(),
        coords: feature.center,
        place: feature.place_name,
    }
}

/// Candidates for `query`; short queries resolve to an empty list without a lookup.
pub async fn search_candidates<G: Geocoder>(
    geocoder: &G,
    query: &str,
) -> Result<Vec<AddressCandidate>, GeocodingError> {
    if !is_searchable(query) {
        return Ok(Vec::new());
    }
    let features = geocoder.forward_search(query).await?;
    Ok(features.into_iter().map(candidate_from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoding::fake::{feature, FakeGeocoder};

    fn candidate(label: &str) -> AddressCandidate {
        candidate_from(feature(label, [0.0, 0.0]))
    }

    #[tokio::test]
    async fn test_short_query_skips_the_geocoder() {
        let geocoder = FakeGeocoder::new().with_place("abc", vec![feature("abc", [1.0, 2.0])]);

        let candidates = search_candidates(&geocoder, "abc").await.unwrap();

        assert!(candidates.is_empty());
        assert_eq!(geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_candidates_mirror_features_in_order() {
        let geocoder = FakeGeocoder::new().with_place(
            "Paulista Ave",
            vec![
                feature("Avenida Paulista, São Paulo", [-46.6544, -23.5632]),
                feature("Paulista, Pernambuco", [-34.8731, -7.9408]),
            ],
        );

        let candidates = search_candidates(&geocoder, "Paulista Ave").await.unwrap();

        assert_eq!(geocoder.calls(), 1);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].coords, [-46.6544, -23.5632]);
        assert_eq!(candidates[1].coords, [-34.8731, -7.9408]);
        assert_eq!(candidates[0].label, "Avenida Paulista, São Paulo");
        assert_eq!(candidates[0].value, candidates[0].label);
        assert_eq!(candidates[0].place, candidates[0].label);
    }

    #[test]
    fn test_length_is_counted_in_graphemes() {
        assert!(!is_searchable("São"));
        assert!(!is_searchable("e\u{301}e\u{301}e\u{301}e\u{301}"));
        assert!(is_searchable("Praça"));
    }

    #[test]
    fn test_stale_response_does_not_overwrite_newer_candidates() {
        let mut autocomplete = AddressAutocomplete::default();
        let SearchStart::Lookup(older) = autocomplete.begin("Rua Aug") else {
            panic!("query should be searchable");
        };
        let SearchStart::Lookup(newer) = autocomplete.begin("Rua Augusta") else {
            panic!("query should be searchable");
        };

        let newer_outcome = autocomplete.resolve(newer, Ok(vec![candidate("Rua Augusta")]));
        let older_outcome = autocomplete.resolve(older, Ok(vec![candidate("Rua Aurora")]));

        assert_eq!(newer_outcome, SearchOutcome::Updated);
        assert_eq!(older_outcome, SearchOutcome::Stale);
        assert_eq!(autocomplete.candidates(), [candidate("Rua Augusta")]);
        assert_eq!(autocomplete.query(), "Rua Augusta");
    }

    #[test]
    fn test_short_query_supersedes_in_flight_lookup() {
        let mut autocomplete = AddressAutocomplete::default();
        let SearchStart::Lookup(token) = autocomplete.begin("Avenida") else {
            panic!("query should be searchable");
        };

        assert_eq!(autocomplete.begin("Av"), SearchStart::Skipped);
        let outcome = autocomplete.resolve(token, Ok(vec![candidate("Avenida Paulista")]));

        assert_eq!(outcome, SearchOutcome::Stale);
        assert!(autocomplete.candidates().is_empty());
    }

    #[test]
    fn test_failed_lookup_clears_candidates() {
        let mut autocomplete = AddressAutocomplete::default();
        let SearchStart::Lookup(first) = autocomplete.begin("Avenida") else {
            panic!("query should be searchable");
        };
        autocomplete.resolve(first, Ok(vec![candidate("Avenida Paulista")]));
        let SearchStart::Lookup(second) = autocomplete.begin("Avenida P") else {
            panic!("query should be searchable");
        };

        let outcome = autocomplete.resolve(second, Err(LookupFailure::Network));

        assert_eq!(
            outcome,
            SearchOutcome::Failed {
                reason: LookupFailure::Network
            }
        );
        assert!(autocomplete.candidates().is_empty());
        assert_eq!(autocomplete.failure(), Some(LookupFailure::Network));
    }
}

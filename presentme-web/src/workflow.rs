//! Institute review workflow: store-first lookup with network fallback, and
//! the approve/reject transition.
//!
//! The store is populated as a side effect of visiting a list page, so a
//! detail page reached by direct navigation starts from an empty store. The
//! lookup therefore checks the cached collection first and only then pays
//! for a fetch; list visits never trigger a redundant per-item request.

use crate::api::PresentMeClient;
use crate::routes::MainRoute;
use shared::models::{ApiError, InstituteCollection, InstituteStatus, InstituteSummary};

/// Which server collection a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Pending,
    Verified,
}

/// Progress of a detail-page lookup. `Found`, `NotFound`, and `Failed` are
/// terminal; there is no retry loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    CheckingStore,
    Fetching,
    Found(InstituteSummary),
    NotFound,
    Failed(String),
}

impl Lookup {
    /// Whether the lookup has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Found(_) | Self::NotFound | Self::Failed(_))
    }
}

/// Store-first step: scan the cached collection for a stringwise id match.
/// A hit short-circuits the network entirely; a miss (or an unloaded /
/// empty collection) moves the lookup to `Fetching`.
pub fn check_store(cached: Option<&InstituteCollection>, institution_id: &str) -> Lookup {
    match cached {
        Some(collection) if !collection.is_empty() => collection
            .find(institution_id)
            .cloned()
            .map_or(Lookup::Fetching, Lookup::Found),
        _ => Lookup::Fetching,
    }
}

/// Network-fallback step: fold a fetch outcome into a terminal state.
pub fn apply_fetch_result(
    result: Result<&InstituteCollection, &ApiError>,
    institution_id: &str,
) -> Lookup {
    match result {
        Ok(collection) => collection
            .find(institution_id)
            .cloned()
            .map_or(Lookup::NotFound, Lookup::Found),
        Err(err) => Lookup::Failed(err.to_string()),
    }
}

/// Resolve one institute by id against the store-first, network-fallback
/// strategy. When the fallback fired, the fetched collection is returned so
/// the caller can write it into the store (the workflow itself never
/// mutates store state).
pub async fn resolve_institute(
    client: &PresentMeClient,
    cached: Option<&InstituteCollection>,
    kind: CollectionKind,
    institution_id: &str,
) -> (Lookup, Option<InstituteCollection>) {
    if let Lookup::Found(found) = check_store(cached, institution_id) {
        return (Lookup::Found(found), None);
    }

    let fetched = match kind {
        CollectionKind::Pending => client.fetch_pending_institutes().await,
        CollectionKind::Verified => client.fetch_verified_institutes().await,
    };

    match fetched {
        Ok(collection) => {
            let lookup = apply_fetch_result(Ok(&collection), institution_id);
            (lookup, Some(collection))
        }
        Err(err) => (apply_fetch_result(Err(&err), institution_id), None),
    }
}

/// List view the admin lands on after a successful status change: approve
/// goes to the verified list, reject back to the pending list. The
/// destination re-fetches on mount, which is how the store catches up.
#[must_use]
pub fn destination_route(status: InstituteStatus) -> MainRoute {
    match status {
        InstituteStatus::Verified => MainRoute::VerifiedInstitutes,
        InstituteStatus::Pending | InstituteStatus::Rejected => MainRoute::PendingInstitutes,
    }
}

/// Apply a status transition and report where to navigate on success. The
/// caller disables its controls while this is in flight (the only
/// double-submit guard) and invalidates the store collections on success.
pub async fn submit_status_change(
    client: &PresentMeClient,
    institution_id: &str,
    status: InstituteStatus,
) -> Result<MainRoute, ApiError> {
    client.set_institute_status(institution_id, status).await?;
    Ok(destination_route(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> InstituteSummary {
        InstituteSummary {
            institution_id: id.to_string(),
            institution_name: format!("Institute {id}"),
            status: InstituteStatus::Pending,
            kind: String::new(),
            address: String::new(),
            email_id: String::new(),
            phone: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            expected_students: 0,
            expected_teachers: 0,
            bio: String::new(),
            created_at: String::new(),
            profile_pic_url: None,
            website: None,
            aadhar_url: None,
            designation_id_url: None,
        }
    }

    fn collection(ids: &[&str]) -> InstituteCollection {
        InstituteCollection {
            data: ids.iter().map(|id| summary(id)).collect(),
        }
    }

    #[test]
    fn store_hit_short_circuits_without_a_fetch() {
        let cached = collection(&["A", "B"]);

        // check_store alone produces the terminal state; no client involved.
        match check_store(Some(&cached), "A") {
            Lookup::Found(institute) => assert_eq!(institute.institution_id, "A"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn empty_or_unloaded_store_falls_through_to_fetching() {
        assert_eq!(check_store(None, "A"), Lookup::Fetching);
        assert_eq!(check_store(Some(&collection(&[])), "A"), Lookup::Fetching);
    }

    #[test]
    fn loaded_store_miss_still_tries_the_network() {
        let cached = collection(&["B"]);
        assert_eq!(check_store(Some(&cached), "A"), Lookup::Fetching);
    }

    #[test]
    fn fetch_result_resolves_found_or_not_found() {
        let fetched = collection(&["A"]);
        assert!(matches!(
            apply_fetch_result(Ok(&fetched), "A"),
            Lookup::Found(_)
        ));
        assert_eq!(apply_fetch_result(Ok(&fetched), "Z"), Lookup::NotFound);
    }

    #[test]
    fn fetch_error_is_terminal_failure() {
        let err = ApiError::Network("connection refused".to_string());
        match apply_fetch_result(Err(&err), "A") {
            Lookup::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn terminal_states() {
        assert!(!Lookup::CheckingStore.is_terminal());
        assert!(!Lookup::Fetching.is_terminal());
        assert!(Lookup::Found(summary("A")).is_terminal());
        assert!(Lookup::NotFound.is_terminal());
        assert!(Lookup::Failed("boom".to_string()).is_terminal());
    }

    #[test]
    fn approve_navigates_to_the_verified_list() {
        assert_eq!(
            destination_route(InstituteStatus::Verified),
            MainRoute::VerifiedInstitutes
        );
    }

    #[test]
    fn reject_navigates_back_to_the_pending_list() {
        assert_eq!(
            destination_route(InstituteStatus::Rejected),
            MainRoute::PendingInstitutes
        );
    }

    #[test]
    fn id_comparison_is_stringwise() {
        let cached = collection(&["42"]);
        assert!(matches!(check_store(Some(&cached), "42"), Lookup::Found(_)));
        assert_eq!(check_store(Some(&cached), "042"), Lookup::Fetching);
    }
}

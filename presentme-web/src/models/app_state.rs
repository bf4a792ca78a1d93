use shared::models::{AdminUser, InstituteCollection};
use yewdux::Store;

/// Badge counts the sidebar shows before the full lists are loaded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstituteCounts {
    pub pending: usize,
    pub verified: usize,
}

/// The `institute` slice: server-fetched collections plus derived counts
/// and the detail-page selection. `None` means "never loaded this session",
/// which is what sends lookups to the network fallback.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InstituteState {
    pub pending: Option<InstituteCollection>,
    pub verified: Option<InstituteCollection>,
    pub counts: InstituteCounts,
    pub selected: Option<String>,
}

/// Single source of truth for cross-page state: the `user` and `institute`
/// slices. Mutated only through the reducer methods below, always via
/// yewdux dispatch, always as a synchronous full-value replace per slice.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<AdminUser>,
    pub institute: InstituteState,
}

impl AppState {
    /// Replace the signed-in admin profile.
    pub fn set_user(&mut self, user: AdminUser) {
        self.user = Some(user);
    }

    /// Drop the session's profile, e.g. on logout or a 401.
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// Full overwrite of the pending collection. The pending count is
    /// derived from the payload so it cannot diverge from `data.len()`.
    pub fn set_pending_institutes(&mut self, collection: InstituteCollection) {
        self.institute.counts.pending = collection.len();
        self.institute.pending = Some(collection);
    }

    /// Full overwrite of the verified collection; count derived likewise.
    pub fn set_verified_institutes(&mut self, collection: InstituteCollection) {
        self.institute.counts.verified = collection.len();
        self.institute.verified = Some(collection);
    }

    /// Count-only update for the sidebar badge. Ignored once the full
    /// collection is loaded, which keeps the two derivations reconciled.
    pub fn set_pending_count(&mut self, count: usize) {
        if self.institute.pending.is_none() {
            self.institute.counts.pending = count;
        }
    }

    /// Count-only update for the verified badge; same reconciliation rule.
    pub fn set_verified_count(&mut self, count: usize) {
        if self.institute.verified.is_none() {
            self.institute.counts.verified = count;
        }
    }

    /// Point the detail pages at one institute by id.
    pub fn set_selected_institute(&mut self, institution_id: String) {
        self.institute.selected = Some(institution_id);
    }

    /// Clear the detail-page selection when navigating away.
    pub fn clear_selected_institute(&mut self) {
        self.institute.selected = None;
    }

    /// Invalidate both collections after a status transition so the
    /// destination list re-fetches instead of short-circuiting on stale
    /// store data. Counts keep their last-known values for the badges.
    pub fn invalidate_institutes(&mut self) {
        self.institute.pending = None;
        self.institute.verified = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{InstituteStatus, InstituteSummary};

    fn summary(id: &str, status: InstituteStatus) -> InstituteSummary {
        InstituteSummary {
            institution_id: id.to_string(),
            institution_name: format!("Institute {id}"),
            status,
            kind: "College".to_string(),
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

    fn collection(ids: &[&str], status: InstituteStatus) -> InstituteCollection {
        InstituteCollection {
            data: ids.iter().map(|id| summary(id, status)).collect(),
        }
    }

    #[test]
    fn loading_a_collection_sets_its_count() {
        let mut state = AppState::default();
        state.set_pending_institutes(collection(&["a", "b"], InstituteStatus::Pending));

        assert_eq!(state.institute.counts.pending, 2);
        assert_eq!(state.institute.pending.as_ref().unwrap().len(), 2);
        assert!(state.institute.verified.is_none());
    }

    #[test]
    fn count_setter_applies_only_before_the_list_loads() {
        let mut state = AppState::default();
        state.set_pending_count(8);
        assert_eq!(state.institute.counts.pending, 8);

        state.set_pending_institutes(collection(&["a"], InstituteStatus::Pending));
        state.set_pending_count(99);
        assert_eq!(state.institute.counts.pending, 1);
    }

    #[test]
    fn collection_updates_are_full_replacements() {
        let mut state = AppState::default();
        state.set_verified_institutes(collection(&["a", "b"], InstituteStatus::Verified));
        state.set_verified_institutes(collection(&["c"], InstituteStatus::Verified));

        let verified = state.institute.verified.as_ref().unwrap();
        assert_eq!(verified.len(), 1);
        assert!(verified.find("a").is_none());
        assert!(verified.find("c").is_some());
        assert_eq!(state.institute.counts.verified, 1);
    }

    #[test]
    fn invalidate_clears_collections_but_keeps_counts() {
        let mut state = AppState::default();
        state.set_pending_institutes(collection(&["a", "b"], InstituteStatus::Pending));
        state.set_verified_institutes(collection(&["c"], InstituteStatus::Verified));

        state.invalidate_institutes();

        assert!(state.institute.pending.is_none());
        assert!(state.institute.verified.is_none());
        assert_eq!(state.institute.counts.pending, 2);
        assert_eq!(state.institute.counts.verified, 1);
    }

    #[test]
    fn selection_set_and_clear() {
        let mut state = AppState::default();
        state.set_selected_institute("inst-9".to_string());
        assert_eq!(state.institute.selected.as_deref(), Some("inst-9"));

        state.clear_selected_institute();
        assert!(state.institute.selected.is_none());
    }

    #[test]
    fn user_set_and_clear() {
        use shared::models::{AdminProfile, AdminUser};

        let mut state = AppState::default();
        state.set_user(AdminUser {
            admin: AdminProfile {
                first_name: "Asha".to_string(),
                last_name: "Verma".to_string(),
                email_id: "asha@present-me.example".to_string(),
            },
        });
        assert!(state.user.is_some());

        state.clear_user();
        assert!(state.user.is_none());
    }
}

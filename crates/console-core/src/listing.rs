//! List Queries and Paging
//!
//! Server-driven pagination for the restaurant and member tables. Changing
//! any filter returns the table to page 1.

use serde::Serialize;

use crate::domain::{Member, MemberRole, RecordId, Restaurant, RestaurantStatus};

/// Query of `GET /api/v1/restaurant/all`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantQuery {
    pub limit: u32,
    pub page: u32,
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RestaurantStatus>,
}

impl RestaurantQuery {
    pub fn new(limit: u32) -> Self {
        Self { limit, page: 1, search: String::new(), status: None }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// `"all"` (or anything unknown) clears the filter
    pub fn set_status_filter(&mut self, raw: &str) {
        self.status = RestaurantStatus::parse(raw);
        self.page = 1;
    }

    pub fn status_filter(&self) -> &'static str {
        self.status.map(|s| s.as_str()).unwrap_or("all")
    }
}

/// Query of `GET /api/v1/member/all`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<RecordId>,
}

impl MemberQuery {
    pub fn new(limit: u32) -> Self {
        Self { page: 1, limit, restaurant_id: None }
    }

    pub fn set_restaurant(&mut self, restaurant_id: Option<RecordId>) {
        self.restaurant_id = restaurant_id;
        self.page = 1;
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
    }
}

/// Paging fields as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self { page: 1, limit: 1, total: 0, total_pages: 1, has_next: false }
    }
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 1-based inclusive row range shown in the footer
    pub fn showing_range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let limit = u64::from(self.limit);
        let from = u64::from(self.page.saturating_sub(1)) * limit + 1;
        let to = (u64::from(self.page) * limit).min(self.total);
        (from.min(to), to)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), info: PageInfo::default() }
    }
}

/// Reflect a completed status toggle in the loaded rows
pub fn apply_status(rows: &mut [Restaurant], id: &RecordId, status: RestaurantStatus) -> bool {
    match rows.iter_mut().find(|r| &r.id == id) {
        Some(row) => {
            row.status = status;
            true
        }
        None => false,
    }
}

/// Client-side search over the loaded member page
pub fn filter_members<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return members.iter().collect();
    }
    members
        .iter()
        .filter(|m| {
            m.user.first_name.to_lowercase().contains(&term)
                || m.user.last_name.to_lowercase().contains(&term)
                || m.user.email.to_lowercase().contains(&term)
                || m.role.is_some_and(|r| r.as_str().to_lowercase().contains(&term))
        })
        .collect()
}

/// Stat cards of the users page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberStats {
    pub total: u64,
    pub active: usize,
    pub owners: usize,
    pub managers: usize,
}

impl MemberStats {
    /// `total` comes from the pagination block, the rest from the loaded page
    pub fn from_page(page: &Page<Member>) -> Self {
        let count_role = |role| page.items.iter().filter(|m| m.role == Some(role)).count();
        Self {
            total: page.info.total,
            active: page.items.iter().filter(|m| m.user.is_active).count(),
            owners: count_role(MemberRole::Owner),
            managers: count_role(MemberRole::Manager),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn members() -> Vec<Member> {
        serde_json::from_value(json!([
            {"link_id": 1, "role": "OWNER", "user": {"id": 1, "first_name": "Asha", "last_name": "Rao", "email": "asha@diner.in", "is_active": true}},
            {"link_id": 2, "role": "MANAGER", "user": {"id": 2, "first_name": "Vikram", "last_name": "Shah", "email": "vik@diner.in", "is_active": false}},
            {"link_id": 3, "role": "COOK", "user": {"id": 3, "first_name": "Meera", "last_name": "Iyer", "email": "meera@cafe.in", "is_active": true}}
        ]))
        .unwrap()
    }

    #[test]
    fn test_filters_reset_page() {
        let mut q = RestaurantQuery::new(20);
        q.page = 4;
        q.set_search("dhaba");
        assert_eq!(q.page, 1);
        q.page = 3;
        q.set_status_filter("PENDING");
        assert_eq!((q.page, q.status), (1, Some(RestaurantStatus::Pending)));
        q.set_status_filter("all");
        assert_eq!(q.status, None);
        assert_eq!(q.status_filter(), "all");
    }

    #[test]
    fn test_query_omits_empty_status() {
        let q = RestaurantQuery::new(20);
        assert_eq!(serde_json::to_value(&q).unwrap(), json!({"limit": 20, "page": 1, "search": ""}));
        let mut m = MemberQuery::new(10);
        m.set_restaurant(Some(RecordId::from("r1")));
        assert_eq!(serde_json::to_value(&m).unwrap(), json!({"page": 1, "limit": 10, "restaurant_id": "r1"}));
    }

    #[test]
    fn test_showing_range() {
        let info = PageInfo { page: 3, limit: 10, total: 25, total_pages: 3, has_next: false };
        assert_eq!(info.showing_range(), (21, 25));
        assert!(info.has_prev());
        assert_eq!(PageInfo::default().showing_range(), (0, 0));
    }

    #[test]
    fn test_member_search_is_case_insensitive() {
        let all = members();
        assert_eq!(filter_members(&all, "").len(), 3);
        assert_eq!(filter_members(&all, "RAO").len(), 1);
        assert_eq!(filter_members(&all, "diner.in").len(), 2);
        assert_eq!(filter_members(&all, "cook")[0].user.first_name, "Meera");
    }

    #[test]
    fn test_member_stats() {
        let page = Page { items: members(), info: PageInfo { total: 57, ..Default::default() } };
        let stats = MemberStats::from_page(&page);
        assert_eq!(stats, MemberStats { total: 57, active: 2, owners: 1, managers: 1 });
    }
}

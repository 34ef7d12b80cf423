use serde::Serialize;

use super::sort::SortDirection;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// 1-indexed page plus page size, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Page floors at 1 and is otherwise left alone; limit is clamped to `[1, MAX_LIMIT]`.
    /// Values that do not parse as integers take the defaults.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_int(page).unwrap_or(DEFAULT_PAGE).max(1);
        let limit = parse_int(limit)
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total_items: i64) -> i64 {
        total_pages(total_items, self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    let limit = limit.max(1);
    let total_items = total_items.max(0);
    ((total_items + limit - 1) / limit).max(1)
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
}

/// Trimmed filter value; empty means "no filter".
pub fn normalize_filter(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta<F> {
    pub page: i64,
    pub limit: i64,
    pub total_items: i64,
    pub total_pages: i64,
    /// The key the client asked for; ordering itself only ever uses the allow-listed column.
    pub sort_by: String,
    pub sort_direction: SortDirection,
    pub filters: F,
}

impl<F> ListMeta<F> {
    pub fn new(
        pagination: Pagination,
        sort_by: impl Into<String>,
        direction: SortDirection,
        total_items: i64,
        filters: F,
    ) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total_items,
            total_pages: pagination.total_pages(total_items),
            sort_by: sort_by.into(),
            sort_direction: direction,
            filters,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T, F> {
    pub data: Vec<T>,
    pub meta: ListMeta<F>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(6, 1), 6);
        assert_eq!(total_pages(250, 100), 3);
    }

    #[test]
    fn total_pages_matches_ceiling_formula() {
        for limit in 1..=12 {
            for total in 0..=50 {
                let expected = std::cmp::max(1, (total as f64 / limit as f64).ceil() as i64);
                assert_eq!(total_pages(total, limit), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(Pagination::parse(None, Some("500")).limit, 100);
        assert_eq!(Pagination::parse(None, Some("0")).limit, 1);
        assert_eq!(Pagination::parse(None, Some("-4")).limit, 1);
        assert_eq!(Pagination::parse(None, Some("25")).limit, 25);
        assert_eq!(Pagination::parse(None, None).limit, 10);
    }

    #[test]
    fn page_floors_at_one_but_is_not_capped() {
        assert_eq!(Pagination::parse(Some("0"), None).page, 1);
        assert_eq!(Pagination::parse(Some("-3"), None).page, 1);
        assert_eq!(Pagination::parse(Some("999"), None).page, 999);
    }

    #[test]
    fn garbage_takes_defaults() {
        assert_eq!(
            Pagination::parse(Some("two"), Some("lots")),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(Pagination::parse(Some(" 3 "), Some("")), Pagination { page: 3, limit: 10 });
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(Pagination { page: 1, limit: 10 }.offset(), 0);
        assert_eq!(Pagination { page: 3, limit: 25 }.offset(), 50);
    }

    #[test]
    fn filter_normalization_trims() {
        assert_eq!(normalize_filter(Some("  meera ")), "meera");
        assert_eq!(normalize_filter(Some("   ")), "");
        assert_eq!(normalize_filter(None), "");
    }
}

use serde::{Deserialize, Serialize};

/// Sortable field allow-list shared by the list endpoint and [`super::state::ListState`].
///
/// `as_key` is the logical name used on the wire (`sortBy`), `column` is the
/// physical column the query orders by. Only values produced by `from_key`
/// ever reach SQL.
pub trait SortKey: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    const DEFAULT: Self;
    const ALL: &'static [Self];

    fn as_key(self) -> &'static str;
    fn column(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` in any case selects descending, everything else ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<K> {
    pub field: K,
    pub direction: SortDirection,
}

impl<K: SortKey> Sort<K> {
    /// Unknown keys fall back to the default field; the direction is parsed independently.
    pub fn parse(sort_by: Option<&str>, direction: Option<&str>) -> Self {
        let field = sort_by
            .map(str::trim)
            .and_then(K::from_key)
            .unwrap_or(K::DEFAULT);
        Self {
            field,
            direction: SortDirection::parse(direction),
        }
    }
}

impl<K: SortKey> Default for Sort<K> {
    fn default() -> Self {
        Self {
            field: K::DEFAULT,
            direction: SortDirection::Asc,
        }
    }
}

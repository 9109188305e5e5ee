use crate::domain::PeriodError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationState {
    /// Both values are floored at 1. A current page beyond the last one is
    /// kept as-is and simply gets no forward links.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            total_pages: total_pages.max(1),
        }
    }

    /// Number of pages needed for `item_count` rows, never less than one
    pub fn total_for(item_count: usize, page_size: usize) -> u32 {
        let page_size = page_size.max(1);
        let pages = item_count.div_ceil(page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Items on the current page
    pub fn slice<'a, T>(&self, items: &'a [T], page_size: usize) -> &'a [T] {
        let page_size = page_size.max(1);
        let start = (self.current_page as usize - 1).saturating_mul(page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    }
}

/// Parse the `page` query parameter. Absent means the first page.
pub fn parse_page(raw: Option<&str>) -> Result<u32, PeriodError> {
    match raw.map(str::trim) {
        None => Ok(1),
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|&page| page >= 1)
            .ok_or(PeriodError::InvalidParams),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Previous { page: u32 },
    Page { page: u32, is_current: bool },
    Ellipsis,
    Next { page: u32 },
}

impl PageLink {
    pub fn label(&self) -> String {
        match self {
            Self::Previous { .. } => "Previous".to_string(),
            Self::Page { page, .. } => page.to_string(),
            Self::Ellipsis => "...".to_string(),
            Self::Next { .. } => "Next".to_string(),
        }
    }

    /// Query string the link points at
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Previous { page } | Self::Page { page, .. } | Self::Next { page } => {
                Some(format!("?page={}", page))
            }
            Self::Ellipsis => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageLinkSet {
    pub links: Vec<PageLink>,
}

impl PageLinkSet {
    pub fn iter(&self) -> impl Iterator<Item = &PageLink> {
        self.links.iter()
    }

    pub fn current(&self) -> Option<u32> {
        self.links.iter().find_map(|link| match link {
            PageLink::Page {
                page,
                is_current: true,
            } => Some(*page),
            _ => None,
        })
    }

    pub fn previous(&self) -> Option<u32> {
        self.links.iter().find_map(|link| match link {
            PageLink::Previous { page } => Some(*page),
            _ => None,
        })
    }

    pub fn next(&self) -> Option<u32> {
        self.links.iter().find_map(|link| match link {
            PageLink::Next { page } => Some(*page),
            _ => None,
        })
    }

    pub fn has_ellipsis(&self) -> bool {
        self.links.contains(&PageLink::Ellipsis)
    }
}

/// Links shown under a listing: the current page, its immediate neighbours,
/// previous/next actions and an ellipsis when more pages follow the next one.
///
/// The last page itself is never linked.
pub fn compute_window(state: PaginationState) -> PageLinkSet {
    let PaginationState {
        current_page: current,
        total_pages: total,
    } = state;
    let mut links = Vec::with_capacity(6);

    if current > 1 {
        links.push(PageLink::Previous { page: current - 1 });
        links.push(PageLink::Page {
            page: current - 1,
            is_current: false,
        });
    }

    links.push(PageLink::Page {
        page: current,
        is_current: true,
    });

    if current < total {
        links.push(PageLink::Page {
            page: current + 1,
            is_current: false,
        });
        if current + 1 < total {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Next { page: current + 1 });
    }

    PageLinkSet { links }
}

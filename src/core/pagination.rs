use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::core::upstream::{QueryParams, insert_opt};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const POI_MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(
        page: Option<u32>,
        page_size: Option<u32>,
        max_page_size: u32,
    ) -> Result<Self, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(AppError::invalid_parameter(
                "page must be greater than or equal to 1",
            ));
        }
        if !(1..=max_page_size).contains(&page_size) {
            return Err(AppError::invalid_parameter(format!(
                "page size must be between 1 and {max_page_size}"
            )));
        }

        Ok(Self { page, page_size })
    }
}

pub fn forward_page(
    query: &mut QueryParams,
    page: Option<u32>,
    page_size: Option<u32>,
    max_page_size: u32,
    size_key: &str,
) -> Result<(), AppError> {
    if page.is_some() || page_size.is_some() {
        PageRequest::new(page, page_size, max_page_size)?;
    }
    insert_opt(query, "page", page);
    insert_opt(query, size_key, page_size);
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_records: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: usize,
}

// Slices an already-filtered list. A page past the end yields no items but
// still reports the totals of the whole list.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> PagedResult<T> {
    let total_records = items.len();
    let page_size = request.page_size.max(1) as usize;
    let total_pages = total_records.div_ceil(page_size).max(1);

    let start = (request.page.max(1) as usize - 1).saturating_mul(page_size);
    let items = items.into_iter().skip(start).take(page_size).collect();

    PagedResult {
        items,
        total_records,
        page: request.page,
        page_size: request.page_size,
        total_pages,
    }
}

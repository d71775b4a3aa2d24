pub mod booking;
pub mod contact;
pub mod corporate;
pub mod health;
pub mod newsletter;
pub mod package;

/// Normalizes `?page=&limit=` into (page, per_page, offset).
pub fn page_params(page: Option<i64>, limit: Option<i64>) -> (i64, i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let per_page = limit.unwrap_or(10).clamp(1, 100);
    (page, per_page, (page - 1) * per_page)
}

pub mod cors;
pub mod middleware;
pub mod pages;
pub mod query_params;
pub mod router;
#[cfg(test)]
pub mod tests;

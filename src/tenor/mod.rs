pub mod client;
pub mod models;
pub mod params;

pub use client::{Endpoint, TenorClient};
pub use params::{
    CategoriesRequest, CategoryType, FeaturedRequest, SearchRequest, TermsRequest,
    ToQueryParams, TrendingTermsRequest, MEDIA_FILTER,
};

use crate::app_error::AppError;
use crate::embed::{EmbedSelection, SelectedEmbed};
use crate::tenor::{
    CategoriesRequest, Endpoint, FeaturedRequest, SearchRequest, TermsRequest,
    TrendingTermsRequest,
};
use crate::web::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

// Tenor responses are passed through untouched, so they stay untyped here.

pub async fn search(
    State(state): State<AppState>,
    Query(input): Query<SearchRequest>,
) -> Result<Json<Value>, AppError> {
    let body: Value = state.tenor.fetch(Endpoint::Search, &input).await?;
    Ok(Json(body))
}

pub async fn featured(
    State(state): State<AppState>,
    Query(input): Query<FeaturedRequest>,
) -> Result<Json<Value>, AppError> {
    let body: Value = state.tenor.fetch(Endpoint::Featured, &input).await?;
    Ok(Json(body))
}

pub async fn categories(
    State(state): State<AppState>,
    Query(input): Query<CategoriesRequest>,
) -> Result<Json<Value>, AppError> {
    let body: Value = state.tenor.fetch(Endpoint::Categories, &input).await?;
    Ok(Json(body))
}

pub async fn search_suggestions(
    State(state): State<AppState>,
    Query(input): Query<TermsRequest>,
) -> Result<Json<Value>, AppError> {
    let body: Value = state.tenor.fetch(Endpoint::SearchSuggestions, &input).await?;
    Ok(Json(body))
}

pub async fn autocomplete(
    State(state): State<AppState>,
    Query(input): Query<TermsRequest>,
) -> Result<Json<Value>, AppError> {
    let body: Value = state.tenor.fetch(Endpoint::Autocomplete, &input).await?;
    Ok(Json(body))
}

pub async fn trending_terms(
    State(state): State<AppState>,
    Query(input): Query<TrendingTermsRequest>,
) -> Result<Json<Value>, AppError> {
    let body: Value = state.tenor.fetch(Endpoint::TrendingTerms, &input).await?;
    Ok(Json(body))
}

pub async fn select(
    State(state): State<AppState>,
    Json(selection): Json<EmbedSelection>,
) -> Result<Json<SelectedEmbed>, AppError> {
    let embed = state.embeds.build_embed(&selection).await?;
    Ok(Json(embed))
}

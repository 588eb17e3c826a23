use anyhow::Context;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::IntoResponse;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

use super::chrome::REPOSITORY_URL;
use crate::state::AppState;

const CACHE_TTL: Duration = Duration::from_secs(10 * 60);
const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct GithubRepoResponse {
    stargazers_count: u64,
}

/// Star count for the header widget, as plain text. Empty body when the
/// count is unknown so the page shows the bare repository link.
pub async fn github_stars_partial_handler(
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );

    let body = match github_stars_cached(&state).await {
        Some(value) => value.to_string(),
        None => String::new(),
    };

    (headers, body)
}

async fn github_stars_cached(state: &AppState) -> Option<u64> {
    {
        let cache = state.stars.read().await;
        if let Some(fetched_at) = cache.fetched_at {
            if fetched_at.elapsed() < CACHE_TTL {
                return cache.value;
            }
        }
    }

    let mut cache = state.stars.write().await;

    if let Some(fetched_at) = cache.fetched_at {
        if fetched_at.elapsed() < CACHE_TTL {
            return cache.value;
        }
    }

    let fetched_at = Instant::now();
    match fetch_github_stars(&state.http).await {
        Ok(value) => {
            cache.value = Some(value);
            cache.fetched_at = Some(fetched_at);
            cache.value
        }
        Err(err) => {
            warn!(error = %err, "failed to fetch GitHub stars; serving cached value");
            cache.fetched_at = Some(fetched_at);
            cache.value
        }
    }
}

async fn fetch_github_stars(http: &reqwest::Client) -> anyhow::Result<u64> {
    let (owner, repo) = parse_github_owner_repo(REPOSITORY_URL)
        .context("failed to parse GitHub owner/repo from repository URL")?;

    let api_url = format!("https://api.github.com/repos/{owner}/{repo}");

    let mut req = http
        .get(api_url)
        .timeout(FETCH_TIMEOUT)
        .header(USER_AGENT, "foodgram-server")
        .header(ACCEPT, "application/vnd.github+json");

    if let Ok(token) =
        std::env::var("FOODGRAM_GITHUB_TOKEN").or_else(|_| std::env::var("GITHUB_TOKEN"))
    {
        if !token.trim().is_empty() {
            req = req.bearer_auth(token);
        }
    }

    let resp = req.send().await.context("GitHub API request failed")?;

    if !resp.status().is_success() {
        anyhow::bail!("GitHub API responded with {}", resp.status());
    }

    let data: GithubRepoResponse = resp
        .json()
        .await
        .context("GitHub API response decode failed")?;

    Ok(data.stargazers_count)
}

fn parse_github_owner_repo(url: &str) -> Option<(&str, &str)> {
    let trimmed = url.trim().trim_end_matches('/');
    let without_git = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let without_scheme = without_git
        .strip_prefix("https://")
        .or_else(|| without_git.strip_prefix("http://"))
        .unwrap_or(without_git);

    let rest = without_scheme.strip_prefix("github.com/")?;

    let mut parts = rest.split('/');
    let owner = parts.next()?.trim();
    let repo = parts.next()?.trim();

    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some((owner, repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo_from_repository_urls() {
        assert_eq!(
            parse_github_owner_repo("https://github.com/foodgram-project/foodgram"),
            Some(("foodgram-project", "foodgram"))
        );
        assert_eq!(
            parse_github_owner_repo("https://github.com/foodgram-project/foodgram.git/"),
            Some(("foodgram-project", "foodgram"))
        );
        assert_eq!(
            parse_github_owner_repo("github.com/foodgram-project/foodgram"),
            Some(("foodgram-project", "foodgram"))
        );
        assert_eq!(parse_github_owner_repo("https://gitlab.com/a/b"), None);
        assert_eq!(
            parse_github_owner_repo("https://github.com/only-owner"),
            None
        );
    }
}
